use core::fmt;

/// Error returned by a [`MemWriter`](crate::MemWriter) that cannot take more bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemWriterError {
    NotEnoughMem { need: usize, available: usize },
}

impl fmt::Display for MemWriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemWriterError::NotEnoughMem { need, available } => write!(
                f,
                "Not enough memory error, need {} bytes, {} available",
                need, available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MemWriterError {}

/// Error that possible during frame construction or validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameError {
    /// Duty cycle outside of `[0, 1)`
    InvalidRatio { field: &'static str, value: f64 },
    /// Time pulse index above [`MAX_TIME_PULSE_INDEX`](crate::MAX_TIME_PULSE_INDEX)
    InvalidIndex { index: u8, max: u8 },
    /// Payload does not fit the 16 bit length field
    PayloadTooLarge { len: usize },
    /// Fewer bytes than the smallest possible frame
    TruncatedFrame { expect: usize, got: usize },
    SyncMismatch { got: [u8; 2] },
    /// Declared payload length disagrees with the bytes present
    LengthMismatch { declared: usize, actual: usize },
    ChecksumMismatch { expect: u16, got: u16 },
    /// The output sink could not hold the frame, nothing was written
    Writer(MemWriterError),
}

impl From<MemWriterError> for FrameError {
    fn from(e: MemWriterError) -> Self {
        FrameError::Writer(e)
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidRatio { field, value } => {
                write!(f, "Invalid ratio {} for {}, must be in [0, 1)", value, field)
            },
            FrameError::InvalidIndex { index, max } => {
                write!(f, "Invalid time pulse index {}, max {}", index, max)
            },
            FrameError::PayloadTooLarge { len } => {
                write!(f, "Payload of {} bytes does not fit a frame", len)
            },
            FrameError::TruncatedFrame { expect, got } => write!(
                f,
                "Truncated frame, expect at least {} bytes, got {}",
                expect, got
            ),
            FrameError::SyncMismatch { got } => write!(
                f,
                "Invalid sync chars {:02x} {:02x}",
                got[0], got[1]
            ),
            FrameError::LengthMismatch { declared, actual } => write!(
                f,
                "Invalid payload length, declared {}, got {}",
                declared, actual
            ),
            FrameError::ChecksumMismatch { expect, got } => write!(
                f,
                "Not valid frame's checksum, expect {:x}, got {:x}",
                expect, got
            ),
            FrameError::Writer(e) => write!(f, "FrameError: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Writer(e) => Some(e),
            _ => None,
        }
    }
}
