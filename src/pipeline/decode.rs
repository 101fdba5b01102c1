use serde::{Deserialize, Serialize};

use crate::pipeline::error::PipelineError;

/// Fixed unsigned-integer widths the capture hardware can produce.
///
/// The wire format is a flat run of little-endian integers with no header;
/// width and sample rate travel out-of-band with the capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum SampleFormat {
    U8,
    U16,
    U32,
    U64,
}

impl SampleFormat {
    pub fn from_width(bytes: usize) -> Result<Self, PipelineError> {
        match bytes {
            1 => Ok(SampleFormat::U8),
            2 => Ok(SampleFormat::U16),
            4 => Ok(SampleFormat::U32),
            8 => Ok(SampleFormat::U64),
            other => Err(PipelineError::UnsupportedWidth(other)),
        }
    }

    pub fn width(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::U16 => 2,
            SampleFormat::U32 => 4,
            SampleFormat::U64 => 8,
        }
    }
}

impl Default for SampleFormat {
    fn default() -> Self {
        // 2-byte samples are what the acquisition boards ship by default.
        SampleFormat::U16
    }
}

impl TryFrom<usize> for SampleFormat {
    type Error = PipelineError;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        SampleFormat::from_width(bytes)
    }
}

impl From<SampleFormat> for usize {
    fn from(format: SampleFormat) -> usize {
        format.width()
    }
}

/// Decode a raw capture buffer into unsigned sample values.
///
/// Exactly `bytes.len() / width` samples are read in sequence order; up to
/// `width - 1` trailing bytes are dropped without error. The silent
/// truncation is intentional and matches the capture tooling this replaces,
/// so partial last samples never surface as garbage values.
pub fn decode(bytes: &[u8], format: SampleFormat) -> Vec<u64> {
    bytes
        .chunks_exact(format.width())
        .map(|chunk| match format {
            SampleFormat::U8 => u64::from(chunk[0]),
            SampleFormat::U16 => u64::from(u16::from_le_bytes([chunk[0], chunk[1]])),
            SampleFormat::U32 => {
                u64::from(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            }
            SampleFormat::U64 => u64::from_le_bytes([
                chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
            ]),
        })
        .collect()
}
