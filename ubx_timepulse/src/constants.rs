pub const UBX_SYNC_CHAR_1: u8 = 0xb5;
pub const UBX_SYNC_CHAR_2: u8 = 0x62;
pub(crate) const UBX_SYNC_SIZE: usize = 2;
pub(crate) const UBX_PAYLOAD_SIZE_LEN: usize = 2;
pub(crate) const UBX_CLASS_LEN: usize = 1;
pub(crate) const UBX_ID_LEN: usize = 1;
pub(crate) const UBX_HEADER_LEN: usize =
    UBX_SYNC_SIZE + UBX_PAYLOAD_SIZE_LEN + UBX_CLASS_LEN + UBX_ID_LEN;
pub(crate) const UBX_CHECKSUM_LEN: usize = 2;

/// Smallest possible frame: header plus checksum, empty payload
pub const UBX_MIN_FRAME_LEN: usize = UBX_HEADER_LEN + UBX_CHECKSUM_LEN;

pub(crate) const UBX_CLASS_OFFSET: usize = 2; // After SYNC_CHAR_1, SYNC_CHAR_2
pub(crate) const UBX_MSG_ID_OFFSET: usize = 3; // After CLASS
pub(crate) const UBX_LENGTH_OFFSET: usize = 4; // After MSG_ID

/// Configuration input/output messages
pub const UBX_CLASS_CFG: u8 = 0x06;
pub const UBX_ID_CFG_RST: u8 = 0x04;
pub const UBX_ID_CFG_TP5: u8 = 0x31;

/// Highest time pulse output index accepted by the builders.
///
/// Receivers with two time pulse pins (TIMEPULSE, TIMEPULSE2) use indices 0 and 1.
pub const MAX_TIME_PULSE_INDEX: u8 = 1;

/// Message version written into CFG-TP5 payloads
pub const CFG_TP5_VERSION: u8 = 0x01;

pub(crate) const CFG_TP5_PAYLOAD_LEN: u16 = 32;
pub(crate) const CFG_TP5_POLL_PAYLOAD_LEN: u16 = 1;
pub(crate) const CFG_RST_PAYLOAD_LEN: u16 = 4;
