//! Builds QR Code Model 2 symbols from text strings, byte payloads, or
//! hand-assembled segment lists.
//!
//! This crate covers the full Model 2 pipeline: segment encoding, Reed-Solomon
//! error correction, block interleaving, function-pattern and data-module
//! placement, and mask selection by penalty score. It deliberately stops at
//! the module matrix - rendering that matrix as an image is a concern of the
//! sibling `qr-png` crate.
//!
//! # Examples
//!
//! Fixed version and error-correction level, automatic mask selection:
//!
//! ```
//! use qr_core::{build, BuildOptions, EcLevel, Payload, Version};
//!
//! let out = build(
//!     Payload::Text("HELLO WORLD"),
//!     Version::new(1).unwrap(),
//!     EcLevel::Medium,
//!     BuildOptions::default(),
//! ).unwrap();
//! assert_eq!(out.matrix.size(), 21);
//! ```
//!
//! Automatic version selection for a byte payload:
//!
//! ```
//! use qr_core::{build_auto_version, BuildOptions, EcLevel, Payload};
//!
//! let out = build_auto_version(
//!     Payload::Bytes(b"https://example.com/"),
//!     EcLevel::Quartile,
//!     BuildOptions::default(),
//! ).unwrap();
//! ```

mod bit_buffer;
mod block_config;
mod builder;
mod cell;
mod ec_level;
mod error;
mod finder_penalty;
mod format_info;
mod gf;
mod generator;
mod interleave;
mod layout;
mod mask;
mod matrix;
mod penalty;
mod placement;
mod reed_solomon;
mod segment;
mod segment_mode;
mod tables;
mod version;

pub use bit_buffer::*;
pub use block_config::*;
pub use builder::*;
pub use ec_level::*;
pub use error::*;
pub use finder_penalty::*;
pub use format_info::*;
pub use gf::*;
pub use generator::*;
pub use interleave::*;
pub use mask::*;
pub use matrix::*;
pub use reed_solomon::*;
pub use segment::*;
pub use segment_mode::*;
pub use tables::*;
pub use version::*;

/*---- Constants ----*/

// For use in penalty::penalty_score, when evaluating which mask is best.
pub const PENALTY_N1: i32 = 3;
pub const PENALTY_N2: i32 = 3;
pub const PENALTY_N3: i32 = 40;
pub const PENALTY_N4: i32 = 10;
