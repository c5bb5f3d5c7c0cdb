//! Generic UBX framing: `sync(2) class(1) id(1) length(2, LE) payload checksum(2)`

mod checksum;
mod writer;

pub use checksum::{ubx_checksum, UbxChecksumCalc};
pub use writer::{MemWriter, SliceWriter};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{
    constants::{
        UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET, UBX_HEADER_LEN, UBX_LENGTH_OFFSET, UBX_MIN_FRAME_LEN,
        UBX_MSG_ID_OFFSET, UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
    },
    error::FrameError,
    ubx_packets::{MessageKind, UbxPacketMeta},
};

/// A frame that passed [`validate_frame`], borrowing its payload from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UbxFrame<'a> {
    pub class: u8,
    pub id: u8,
    pub payload: &'a [u8],
}

impl UbxFrame<'_> {
    /// Which of the known messages this frame carries.
    ///
    /// CFG-TP5 configuration and poll share class and id, only the
    /// payload length tells them apart.
    pub fn kind(&self) -> MessageKind {
        MessageKind::classify(self.class, self.id, self.payload.len())
    }
}

fn frame_header(class: u8, id: u8, payload_len: u16) -> [u8; UBX_HEADER_LEN] {
    let len_bytes = payload_len.to_le_bytes();
    [
        UBX_SYNC_CHAR_1,
        UBX_SYNC_CHAR_2,
        class,
        id,
        len_bytes[0],
        len_bytes[1],
    ]
}

fn checked_payload_len(payload: &[u8]) -> Result<u16, FrameError> {
    u16::try_from(payload.len()).map_err(|_| {
        log::debug!("refusing to frame a {} byte payload", payload.len());
        FrameError::PayloadTooLarge { len: payload.len() }
    })
}

/// Frame the fixed size payload of message `P`.
///
/// `N` must be `P::PAYLOAD_LEN + 8` and `payload` exactly `P::PAYLOAD_LEN` bytes.
pub(crate) fn frame_into_array<P: UbxPacketMeta, const N: usize>(payload: &[u8]) -> [u8; N] {
    debug_assert_eq!(payload.len(), usize::from(P::PAYLOAD_LEN));
    debug_assert_eq!(N, payload.len() + UBX_MIN_FRAME_LEN);
    let mut ret = [0u8; N];
    ret[..UBX_HEADER_LEN].copy_from_slice(&frame_header(P::CLASS, P::ID, P::PAYLOAD_LEN));
    ret[UBX_HEADER_LEN..N - UBX_CHECKSUM_LEN].copy_from_slice(payload);
    let (ck_a, ck_b) = ubx_checksum(&ret[UBX_CLASS_OFFSET..(N - UBX_CHECKSUM_LEN)]);
    ret[N - 2] = ck_a;
    ret[N - 1] = ck_b;
    ret
}

/// Write a complete frame into `out`.
///
/// The whole frame size is reserved up front, so a sink without enough
/// room reports [`FrameError::Writer`] before any byte is written.
pub fn write_frame<T: MemWriter>(
    class: u8,
    id: u8,
    payload: &[u8],
    out: &mut T,
) -> Result<(), FrameError> {
    let payload_len = checked_payload_len(payload)?;
    out.reserve_allocate(payload.len() + UBX_MIN_FRAME_LEN)?;

    let header = frame_header(class, id, payload_len);
    out.write(&header)?;
    let mut checksum_calc = UbxChecksumCalc::new();
    checksum_calc.update(&header[UBX_CLASS_OFFSET..]);
    out.write(payload)?;
    checksum_calc.update(payload);
    let (ck_a, ck_b) = checksum_calc.result();
    out.write(&[ck_a, ck_b])?;
    Ok(())
}

/// Encode `payload` as a complete, checksummed frame
#[cfg(feature = "alloc")]
pub fn encode_frame(class: u8, id: u8, payload: &[u8]) -> Result<Vec<u8>, FrameError> {
    let mut out = Vec::with_capacity(payload.len() + UBX_MIN_FRAME_LEN);
    write_frame(class, id, payload, &mut out)?;
    Ok(out)
}

/// Check framing, length and checksum of one complete frame.
///
/// `bytes` must hold exactly one frame, sync chars through checksum.
/// Malformed input is reported through [`FrameError`], never by panicking.
pub fn validate_frame(bytes: &[u8]) -> Result<UbxFrame<'_>, FrameError> {
    if bytes.len() < UBX_MIN_FRAME_LEN {
        log::trace!("truncated frame: {} bytes", bytes.len());
        return Err(FrameError::TruncatedFrame {
            expect: UBX_MIN_FRAME_LEN,
            got: bytes.len(),
        });
    }
    if bytes[0] != UBX_SYNC_CHAR_1 || bytes[1] != UBX_SYNC_CHAR_2 {
        log::trace!("bad sync chars {:02x} {:02x}", bytes[0], bytes[1]);
        return Err(FrameError::SyncMismatch {
            got: [bytes[0], bytes[1]],
        });
    }

    let declared =
        usize::from(u16::from_le_bytes([bytes[UBX_LENGTH_OFFSET], bytes[UBX_LENGTH_OFFSET + 1]]));
    let actual = bytes.len() - UBX_MIN_FRAME_LEN;
    if declared != actual {
        log::trace!(
            "length field says {} payload bytes, frame carries {}",
            declared,
            actual
        );
        return Err(FrameError::LengthMismatch { declared, actual });
    }

    let checksum_offset = UBX_HEADER_LEN + declared;
    let mut calc = UbxChecksumCalc::new();
    calc.update(&bytes[UBX_CLASS_OFFSET..checksum_offset]);
    calc.validate_result(bytes[checksum_offset], bytes[checksum_offset + 1])
        .inspect_err(|e| log::trace!("rejecting frame: {}", e))?;

    Ok(UbxFrame {
        class: bytes[UBX_CLASS_OFFSET],
        id: bytes[UBX_MSG_ID_OFFSET],
        payload: &bytes[UBX_HEADER_LEN..checksum_offset],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CfgRst, CfgTp5, CfgTp5Poll};

    const POLL_TP5: [u8; 9] = [0xB5, 0x62, 0x06, 0x31, 0x01, 0x00, 0x00, 0x38, 0xE5];

    #[test]
    fn frame_into_array_matches_streaming_writer() {
        let fixed: [u8; 9] = frame_into_array::<CfgTp5Poll, 9>(&[0x00]);
        assert_eq!(fixed, POLL_TP5);

        let mut buf = [0u8; 16];
        let mut out = SliceWriter::new(&mut buf);
        write_frame(0x06, 0x31, &[0x00], &mut out).unwrap();
        assert_eq!(out.written(), &POLL_TP5);
    }

    #[test]
    fn fixed_frames_declare_the_message_payload_len() {
        let tp5: [u8; 40] = frame_into_array::<CfgTp5, 40>(&[0u8; 32]);
        assert_eq!(&tp5[..6], &[0xB5, 0x62, 0x06, 0x31, 0x20, 0x00]);
        assert_eq!(
            validate_frame(&tp5).unwrap().kind(),
            MessageKind::TimePulseConfig
        );

        let rst: [u8; 12] = frame_into_array::<CfgRst, 12>(&[0xFF, 0xFF, 0x02, 0x00]);
        assert_eq!(&rst[4..6], &CfgRst::PAYLOAD_LEN.to_le_bytes());
        assert_eq!(&rst[10..], &[0x0E, 0x61]);
    }

    #[test]
    fn write_frame_fails_before_writing_into_short_sink() {
        let mut buf = [0u8; 8];
        let mut out = SliceWriter::new(&mut buf);
        let err = write_frame(0x06, 0x31, &[0x00], &mut out).unwrap_err();
        assert_eq!(
            err,
            FrameError::Writer(crate::MemWriterError::NotEnoughMem {
                need: 9,
                available: 8
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn validate_returns_borrowed_payload() {
        let frame = validate_frame(&POLL_TP5).unwrap();
        assert_eq!(frame.class, 0x06);
        assert_eq!(frame.id, 0x31);
        assert_eq!(frame.payload, &[0x00]);
        assert_eq!(frame.kind(), MessageKind::TimePulsePoll);
    }

    #[test]
    fn validate_empty_payload() {
        let (ck_a, ck_b) = ubx_checksum(&[0x06, 0x31, 0x00, 0x00]);
        let bytes = [0xB5, 0x62, 0x06, 0x31, 0x00, 0x00, ck_a, ck_b];
        let frame = validate_frame(&bytes).unwrap();
        assert!(frame.payload.is_empty());
        assert_eq!(frame.kind(), MessageKind::Unknown);
    }

    #[test]
    fn validate_error_kinds() {
        for len in 0..UBX_MIN_FRAME_LEN {
            assert_eq!(
                validate_frame(&POLL_TP5[..len]),
                Err(FrameError::TruncatedFrame {
                    expect: 8,
                    got: len
                })
            );
        }

        let mut bad_sync = POLL_TP5;
        bad_sync[1] = 0x63;
        assert_eq!(
            validate_frame(&bad_sync),
            Err(FrameError::SyncMismatch { got: [0xB5, 0x63] })
        );

        let mut bad_len = POLL_TP5;
        bad_len[4] = 0x02;
        assert_eq!(
            validate_frame(&bad_len),
            Err(FrameError::LengthMismatch {
                declared: 2,
                actual: 1
            })
        );

        // One trailing byte too many
        let mut long = [0u8; 10];
        long[..9].copy_from_slice(&POLL_TP5);
        assert_eq!(
            validate_frame(&long),
            Err(FrameError::LengthMismatch {
                declared: 1,
                actual: 2
            })
        );

        let mut bad_payload = POLL_TP5;
        bad_payload[6] = 0x01;
        assert!(matches!(
            validate_frame(&bad_payload),
            Err(FrameError::ChecksumMismatch { .. })
        ));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn oversized_payload_is_refused() {
        let payload = vec![0u8; usize::from(u16::MAX) + 1];
        assert_eq!(
            encode_frame(0x06, 0x31, &payload),
            Err(FrameError::PayloadTooLarge {
                len: payload.len()
            })
        );
    }
}
