mod cfg_rst;
mod cfg_tp5;

pub use cfg_rst::*;
pub use cfg_tp5::*;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{error::FrameError, frame::MemWriter};

/// Information about concrete UBX protocol's packet
pub trait UbxPacketMeta {
    const CLASS: u8;
    const ID: u8;
    const PAYLOAD_LEN: u16;
}

pub trait UbxPacketCreator {
    /// Create packet and store bytes sequence to somewhere using `out`.
    /// Inputs are checked and room is reserved before the first byte is written.
    fn create_packet<T: MemWriter>(self, out: &mut T) -> Result<(), FrameError>;
}

/// Messages this crate knows how to build
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UbxMessage {
    TimePulseConfig(CfgTp5Builder),
    TimePulsePoll(CfgTp5PollBuilder),
    Reset(CfgRstBuilder),
}

impl UbxMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            UbxMessage::TimePulseConfig(_) => MessageKind::TimePulseConfig,
            UbxMessage::TimePulsePoll(_) => MessageKind::TimePulsePoll,
            UbxMessage::Reset(_) => MessageKind::Reset,
        }
    }

    /// Size of the encoded frame
    pub fn packet_len(&self) -> usize {
        match self {
            UbxMessage::TimePulseConfig(_) => CfgTp5Builder::PACKET_LEN,
            UbxMessage::TimePulsePoll(_) => CfgTp5PollBuilder::PACKET_LEN,
            UbxMessage::Reset(_) => CfgRstBuilder::PACKET_LEN,
        }
    }

    #[cfg(feature = "alloc")]
    pub fn into_packet_vec(self) -> Result<Vec<u8>, FrameError> {
        let mut out = Vec::with_capacity(self.packet_len());
        self.create_packet(&mut out)?;
        Ok(out)
    }
}

impl UbxPacketCreator for UbxMessage {
    fn create_packet<T: MemWriter>(self, out: &mut T) -> Result<(), FrameError> {
        match self {
            UbxMessage::TimePulseConfig(b) => b.create_packet(out),
            UbxMessage::TimePulsePoll(b) => b.create_packet(out),
            UbxMessage::Reset(b) => b.create_packet(out),
        }
    }
}

impl From<CfgTp5Builder> for UbxMessage {
    fn from(b: CfgTp5Builder) -> Self {
        UbxMessage::TimePulseConfig(b)
    }
}

impl From<CfgTp5PollBuilder> for UbxMessage {
    fn from(b: CfgTp5PollBuilder) -> Self {
        UbxMessage::TimePulsePoll(b)
    }
}

impl From<CfgRstBuilder> for UbxMessage {
    fn from(b: CfgRstBuilder) -> Self {
        UbxMessage::Reset(b)
    }
}

/// What a validated frame carries, judged by class, id and payload length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    TimePulseConfig,
    TimePulsePoll,
    Reset,
    Unknown,
}

impl MessageKind {
    pub fn classify(class: u8, id: u8, payload_len: usize) -> Self {
        fn is<P: UbxPacketMeta>(class: u8, id: u8, payload_len: usize) -> bool {
            class == P::CLASS && id == P::ID && payload_len == usize::from(P::PAYLOAD_LEN)
        }

        if is::<CfgTp5>(class, id, payload_len) {
            MessageKind::TimePulseConfig
        } else if is::<CfgTp5Poll>(class, id, payload_len) {
            MessageKind::TimePulsePoll
        } else if is::<CfgRst>(class, id, payload_len) {
            MessageKind::Reset
        } else {
            MessageKind::Unknown
        }
    }
}

/// Build a complete CFG-TP5 frame.
///
/// `ratio` and `ratio_lock` are the fractions of the period the output is
/// active, before and after lock, in `[0, 1)`.
#[allow(clippy::too_many_arguments)]
pub fn encode_time_pulse(
    tp_idx: u8,
    frequency: u32,
    frequency_lock: u32,
    ratio: f64,
    ratio_lock: f64,
    ant_cable_delay: i16,
    rf_group_delay: i16,
    user_delay: i32,
    flags: TimePulseFlags,
) -> Result<[u8; CfgTp5Builder::PACKET_LEN], FrameError> {
    CfgTp5Builder {
        tp_idx,
        ant_cable_delay,
        rf_group_delay,
        freq_period: frequency,
        freq_period_lock: frequency_lock,
        pulse_len_ratio: ratio,
        pulse_len_ratio_lock: ratio_lock,
        user_delay,
        flags,
    }
    .into_packet_bytes()
}

/// Build a complete CFG-RST frame
pub fn encode_reset(
    nav_bbr_mask: NavBbrMask,
    reset_mode: ResetMode,
) -> [u8; CfgRstBuilder::PACKET_LEN] {
    CfgRstBuilder {
        nav_bbr_mask,
        reset_mode,
    }
    .into_packet_bytes()
}

/// Build the CFG-TP5 poll for one time pulse output
pub fn encode_poll_time_pulse(
    tp_idx: u8,
) -> Result<[u8; CfgTp5PollBuilder::PACKET_LEN], FrameError> {
    CfgTp5PollBuilder { tp_idx }.into_packet_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_frame, SliceWriter};

    #[test]
    fn every_message_classifies_as_itself() {
        let messages: [UbxMessage; 3] = [
            CfgTp5Builder::default().into(),
            CfgTp5PollBuilder { tp_idx: 0 }.into(),
            CfgRstBuilder::cold_start().into(),
        ];
        for msg in messages {
            let mut buf = [0u8; 64];
            let mut out = SliceWriter::new(&mut buf);
            msg.create_packet(&mut out).unwrap();
            assert_eq!(out.len(), msg.packet_len());

            let frame = validate_frame(out.written()).unwrap();
            assert_eq!(frame.kind(), msg.kind());
        }
    }

    #[test]
    fn same_class_and_id_split_on_length() {
        assert_eq!(
            MessageKind::classify(0x06, 0x31, 32),
            MessageKind::TimePulseConfig
        );
        assert_eq!(
            MessageKind::classify(0x06, 0x31, 1),
            MessageKind::TimePulsePoll
        );
        assert_eq!(MessageKind::classify(0x06, 0x31, 0), MessageKind::Unknown);
        assert_eq!(MessageKind::classify(0x06, 0x04, 4), MessageKind::Reset);
        assert_eq!(MessageKind::classify(0x05, 0x01, 2), MessageKind::Unknown);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn into_packet_vec_matches_array() {
        let vec = UbxMessage::from(CfgTp5Builder::default())
            .into_packet_vec()
            .unwrap();
        assert_eq!(vec, CfgTp5Builder::default().into_packet_bytes().unwrap());
    }

    #[test]
    fn public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<CfgTp5Builder>();
        assert_send_sync::<CfgTp5PollBuilder>();
        assert_send_sync::<CfgRstBuilder>();
        assert_send_sync::<UbxMessage>();
        assert_send_sync::<MessageKind>();
        assert_send_sync::<TimePulseFlags>();
        assert_send_sync::<NavBbrMask>();
        assert_send_sync::<ResetMode>();
        assert_send_sync::<FrameError>();
        assert_send_sync::<crate::MemWriterError>();
        assert_send_sync::<crate::UbxFrame<'static>>();
        assert_send_sync::<crate::UbxChecksumCalc>();
        assert_send_sync::<crate::SliceWriter<'static>>();
        assert_send_sync::<crate::DutyCycleConvention>();
    }

    #[test]
    fn output_sizes() {
        let tp = encode_time_pulse(1, 10, 1, 0.8, 0.2, 50, 0, 0, TimePulseFlags::ACTIVE).unwrap();
        assert_eq!(tp.len(), 40);
        assert_eq!(encode_reset(NavBbrMask::empty(), ResetMode::ControlledSoftwareReset).len(), 12);
        assert_eq!(encode_poll_time_pulse(0).unwrap().len(), 9);
    }
}
