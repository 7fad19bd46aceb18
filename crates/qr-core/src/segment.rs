use crate::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::segment_mode::{SegmentMode, ALPHANUMERIC_CHARSET};
use crate::version::Version;

/// A segment of character or binary data in a QR Code symbol (spec.md §3).
///
/// The mid-level way to create a segment is a static factory function such
/// as [`Segment::make_numeric`]. The low-level way is [`Segment::new`] with
/// an already-built bit buffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Segment {
    mode: SegmentMode,
    /// The declared character count: digits/characters for numeric and
    /// alphanumeric mode, UTF-8 *bytes* (not code points) for byte mode.
    char_count: usize,
    bits: BitBuffer,
}

impl Segment {
    /// Low-level constructor. The caller is responsible for `char_count`
    /// agreeing with `mode` and `bits`.
    pub fn new(mode: SegmentMode, char_count: usize, bits: BitBuffer) -> Self {
        Self {
            mode,
            char_count,
            bits,
        }
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn bits(&self) -> &BitBuffer {
        &self.bits
    }

    /// Encodes `data` in byte mode. Accepts any bytes; this is the baseline
    /// mode spec.md §1 requires.
    pub fn make_bytes(data: &[u8]) -> Self {
        Self::new(SegmentMode::Byte, data.len(), BitBuffer::from_bytes(data))
    }

    /// Encodes `text` in numeric mode: groups of 3 digits become 10 bits, a
    /// remainder of 2 becomes 7 bits, a remainder of 1 becomes 4 bits.
    ///
    /// Fails with [`QrError::UnsupportedCharacter`] if `text` contains a
    /// non-digit character.
    pub fn make_numeric(text: &str) -> Result<Self, QrError> {
        let mut bits = BitBuffer::new();
        let digits: Vec<u8> = text
            .bytes()
            .map(|b| {
                if b.is_ascii_digit() {
                    Ok(b - b'0')
                } else {
                    Err(QrError::UnsupportedCharacter {
                        mode: SegmentMode::Numeric,
                        ch: b as char,
                    })
                }
            })
            .collect::<Result<_, _>>()?;

        for chunk in digits.chunks(3) {
            let value = chunk.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d));
            let len = chunk.len() as u8 * 3 + 1;
            bits.put(value, len);
        }
        Ok(Self::new(SegmentMode::Numeric, text.len(), bits))
    }

    /// Encodes `text` in alphanumeric mode: pairs of characters become 11
    /// bits, a trailing single character becomes 6 bits.
    ///
    /// Fails with [`QrError::UnsupportedCharacter`] if `text` contains a
    /// character outside [`ALPHANUMERIC_CHARSET`].
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        let mut bits = BitBuffer::new();
        let indices: Vec<u32> = text
            .chars()
            .map(|c| {
                ALPHANUMERIC_CHARSET
                    .find(c)
                    .map(|i| i as u32)
                    .ok_or(QrError::UnsupportedCharacter {
                        mode: SegmentMode::Alphanumeric,
                        ch: c,
                    })
            })
            .collect::<Result<_, _>>()?;

        for pair in indices.chunks(2) {
            match pair {
                [a, b] => bits.put(a * 45 + b, 11),
                [a] => bits.put(*a, 6),
                _ => unreachable!("chunks(2) never yields more than 2 elements"),
            }
        }
        Ok(Self::new(SegmentMode::Alphanumeric, text.chars().count(), bits))
    }

    /// Segments `text` using a single mode chosen by sniffing its content:
    /// numeric if every character is a digit, else alphanumeric if every
    /// character is in [`ALPHANUMERIC_CHARSET`], else byte mode over its
    /// UTF-8 encoding. Returns an empty list for empty input.
    pub fn make_segments(text: &str) -> Result<Vec<Self>, QrError> {
        if text.is_empty() {
            return Ok(vec![]);
        }
        let seg = if Self::is_numeric(text) {
            Self::make_numeric(text)?
        } else if Self::is_alphanumeric(text) {
            Self::make_alphanumeric(text)?
        } else {
            Self::make_bytes(text.as_bytes())
        };
        Ok(vec![seg])
    }

    /// Returns the total bit length of `mode indicator + char-count field +
    /// payload` for every segment in `segs` at `version`, or `None` if any
    /// segment's character count overflows its count field's width.
    pub fn total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut total = 0usize;
        for seg in segs {
            let cc_bits = seg.mode.char_count_bits(version);
            let limit = 1usize.checked_shl(cc_bits.into())?;
            if seg.char_count >= limit {
                return None;
            }
            total = total
                .checked_add(4 + usize::from(cc_bits))?
                .checked_add(seg.bits.len())?;
        }
        Some(total)
    }

    /// True iff every character of `text` is an ASCII digit.
    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    /// True iff every character of `text` is in [`ALPHANUMERIC_CHARSET`].
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_groups_of_three_become_ten_bits() {
        let seg = Segment::make_numeric("01234567").unwrap();
        assert_eq!(seg.char_count(), 8);
        // 012 -> 10 bits, 345 -> 10 bits, 67 -> 7 bits = 27 bits total.
        assert_eq!(seg.bits().len(), 27);
    }

    #[test]
    fn numeric_rejects_non_digits() {
        assert!(Segment::make_numeric("12a4").is_err());
    }

    #[test]
    fn alphanumeric_pairs_become_eleven_bits() {
        let seg = Segment::make_alphanumeric("AC-42").unwrap();
        assert_eq!(seg.char_count(), 5);
        // 2 pairs (11 bits each) + 1 trailing char (6 bits) = 28 bits.
        assert_eq!(seg.bits().len(), 28);
    }

    #[test]
    fn byte_mode_char_count_is_utf8_length_not_codepoints() {
        // "é" is one code point but two UTF-8 bytes.
        let seg = Segment::make_bytes("é".as_bytes());
        assert_eq!(seg.char_count(), 2);
        assert_eq!(seg.bits().len(), 16);
    }

    #[test]
    fn make_segments_picks_tightest_mode() {
        let segs = Segment::make_segments("01234567").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].mode(), SegmentMode::Numeric);

        let segs = Segment::make_segments("HELLO WORLD").unwrap();
        assert_eq!(segs[0].mode(), SegmentMode::Alphanumeric);

        let segs = Segment::make_segments("hello, world!").unwrap();
        assert_eq!(segs[0].mode(), SegmentMode::Byte);
    }

    #[test]
    fn make_segments_empty_text_is_empty() {
        assert_eq!(Segment::make_segments("").unwrap(), vec![]);
    }

    #[test]
    fn total_bits_none_when_char_count_overflows_field() {
        let version = Version::new(1).unwrap();
        let huge = Segment::new(SegmentMode::Byte, 1 << 8, BitBuffer::new());
        assert_eq!(Segment::total_bits(&[huge], version), None);
    }
}
