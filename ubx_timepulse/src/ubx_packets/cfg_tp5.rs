use bitflags::bitflags;

use crate::{
    constants::{
        CFG_TP5_PAYLOAD_LEN, CFG_TP5_POLL_PAYLOAD_LEN, CFG_TP5_VERSION, MAX_TIME_PULSE_INDEX,
        UBX_CLASS_CFG, UBX_ID_CFG_TP5,
    },
    error::FrameError,
    fixed_point::ratio_field_to_fixed,
    frame::{frame_into_array, MemWriter},
    UbxPacketCreator, UbxPacketMeta,
};

/// TP5: "Time Pulse" Config frame (32.10.38.4)
pub struct CfgTp5;

impl UbxPacketMeta for CfgTp5 {
    const CLASS: u8 = UBX_CLASS_CFG;
    const ID: u8 = UBX_ID_CFG_TP5;
    const PAYLOAD_LEN: u16 = CFG_TP5_PAYLOAD_LEN;
}

/// TP5 poll, the receiver answers with its current [`CfgTp5`] settings for the index
pub struct CfgTp5Poll;

impl UbxPacketMeta for CfgTp5Poll {
    const CLASS: u8 = UBX_CLASS_CFG;
    const ID: u8 = UBX_ID_CFG_TP5;
    const PAYLOAD_LEN: u16 = CFG_TP5_POLL_PAYLOAD_LEN;
}

fn check_tp_idx(tp_idx: u8) -> Result<u8, FrameError> {
    if tp_idx > MAX_TIME_PULSE_INDEX {
        log::debug!("time pulse index {} above {}", tp_idx, MAX_TIME_PULSE_INDEX);
        return Err(FrameError::InvalidIndex {
            index: tp_idx,
            max: MAX_TIME_PULSE_INDEX,
        });
    }
    Ok(tp_idx)
}

/// Time pulse settings, used to construct [`CfgTp5`] frames.
///
/// Duty cycles are the fraction of the period the output is active, in
/// `[0, 1)`. They are only interpreted as such while
/// [`TimePulseFlags::IS_LENGTH`] is clear.
///
/// `Default` gives the settings the receiver sketches shipped with:
/// 1 Hz with 10 % duty cycle before lock, 1 kHz with 90 % once locked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CfgTp5Builder {
    /// Time pulse output, 0 for TIMEPULSE, 1 for TIMEPULSE2
    pub tp_idx: u8,
    /// Antenna cable delay [ns]
    pub ant_cable_delay: i16,
    /// RF group delay [ns]
    pub rf_group_delay: i16,
    /// Frequency in Hz or period in us,
    /// depending on `flags::IS_FREQ` bit
    pub freq_period: u32,
    /// Frequency in Hz or period in us,
    /// when locked to GNSS time.
    /// Only used when `flags::LOCKED_OTHER_SET` is set
    pub freq_period_lock: u32,
    /// Duty cycle before lock
    pub pulse_len_ratio: f64,
    /// Duty cycle when locked to GNSS time.
    /// Only used when `flags::LOCKED_OTHER_SET` is set
    pub pulse_len_ratio_lock: f64,
    /// User configurable time pulse delay [ns]
    pub user_delay: i32,
    pub flags: TimePulseFlags,
}

impl Default for CfgTp5Builder {
    fn default() -> Self {
        Self {
            tp_idx: 0,
            ant_cable_delay: 50,
            rf_group_delay: 0,
            freq_period: 1,
            freq_period_lock: 1000,
            pulse_len_ratio: 0.1,
            pulse_len_ratio_lock: 0.9,
            user_delay: 0,
            flags: TimePulseFlags::from_bits_retain(0xEF),
        }
    }
}

impl CfgTp5Builder {
    pub const PACKET_LEN: usize = CFG_TP5_PAYLOAD_LEN as usize + 8;

    /// Lay out the 32 byte payload, checking index and duty cycles first
    pub fn payload_bytes(&self) -> Result<[u8; CFG_TP5_PAYLOAD_LEN as usize], FrameError> {
        let tp_idx = check_tp_idx(self.tp_idx)?;
        let ratio = ratio_field_to_fixed("pulse_len_ratio", self.pulse_len_ratio)?;
        let ratio_lock = ratio_field_to_fixed("pulse_len_ratio_lock", self.pulse_len_ratio_lock)?;

        let mut ret = [0u8; CFG_TP5_PAYLOAD_LEN as usize];
        ret[0] = tp_idx;
        ret[1] = CFG_TP5_VERSION;
        // ret[2..4] reserved
        ret[4..6].copy_from_slice(&self.ant_cable_delay.to_le_bytes());
        ret[6..8].copy_from_slice(&self.rf_group_delay.to_le_bytes());
        ret[8..12].copy_from_slice(&self.freq_period.to_le_bytes());
        ret[12..16].copy_from_slice(&self.freq_period_lock.to_le_bytes());
        ret[16..20].copy_from_slice(&ratio.to_le_bytes());
        ret[20..24].copy_from_slice(&ratio_lock.to_le_bytes());
        ret[24..28].copy_from_slice(&self.user_delay.to_le_bytes());
        ret[28..32].copy_from_slice(&self.flags.bits().to_le_bytes());
        Ok(ret)
    }

    #[inline]
    pub fn into_packet_bytes(self) -> Result<[u8; Self::PACKET_LEN], FrameError> {
        let payload = self.payload_bytes()?;
        Ok(frame_into_array::<CfgTp5, { CfgTp5Builder::PACKET_LEN }>(&payload))
    }
}

impl UbxPacketCreator for CfgTp5Builder {
    #[inline]
    fn create_packet<T: MemWriter>(self, out: &mut T) -> Result<(), FrameError> {
        let bytes = self.into_packet_bytes()?;
        out.reserve_allocate(bytes.len())?;
        out.write(&bytes)?;
        Ok(())
    }
}

/// Construct a [`CfgTp5Poll`] frame asking for the settings of one time pulse output
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CfgTp5PollBuilder {
    pub tp_idx: u8,
}

impl CfgTp5PollBuilder {
    pub const PACKET_LEN: usize = CFG_TP5_POLL_PAYLOAD_LEN as usize + 8;

    #[inline]
    pub fn into_packet_bytes(self) -> Result<[u8; Self::PACKET_LEN], FrameError> {
        let tp_idx = check_tp_idx(self.tp_idx)?;
        Ok(frame_into_array::<CfgTp5Poll, { CfgTp5PollBuilder::PACKET_LEN }>(&[tp_idx]))
    }
}

impl UbxPacketCreator for CfgTp5PollBuilder {
    #[inline]
    fn create_packet<T: MemWriter>(self, out: &mut T) -> Result<(), FrameError> {
        let bytes = self.into_packet_bytes()?;
        out.reserve_allocate(bytes.len())?;
        out.write(&bytes)?;
        Ok(())
    }
}

bitflags! {
    /// `flags` field of [`CfgTp5`]. Bits not named here are kept as given.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TimePulseFlags: u32 {
        /// Enables time pulse
        const ACTIVE = 0x01;
        /// Synchronize time pulse to GNSS as
        /// soon as GNSS time is valid.
        /// Uses local lock otherwise.
        const LOCK_GNSS_FREQ = 0x02;
        /// use `freq_period_lock` and `pulse_len_ratio_lock`
        /// fields as soon as GNSS time is valid. Uses
        /// `freq_period` and `pulse_len_ratio` when GNSS time is invalid.
        const LOCKED_OTHER_SET = 0x04;
        /// `freq_period` and `freq_period_lock` fields
        /// are interpreted as frequency when this bit is set
        const IS_FREQ = 0x08;
        /// Interpret pulse lengths instead of duty cycle
        const IS_LENGTH = 0x10;
        /// Align pulse to top of second
        /// Period time must be integer fraction of `1sec`
        /// `LOCK_GNSS_FREQ` is expected, to unlock this feature
        const ALIGN_TO_TOW = 0x20;
        /// Pulse polarity,
        /// 0: falling edge @ top of second,
        /// 1: rising edge @ top of second,
        const POLARITY = 0x40;
        /// UTC time grid
        const UTC_TIME_GRID = 0x80;
        /// GPS time grid
        const GPS_TIME_GRID = 0x100;
        /// GLO time grid
        const GLO_TIME_GRID = 0x200;
        /// BDS time grid
        const BDS_TIME_GRID = 0x400;
        /// GAL time grid
        /// not supported in protocol < 18
        const GAL_TIME_GRID = 0x800;
        /// Switches to FreqPeriodLock and PulseLenRatio
        /// as soon as Sync Manager has an accurate time,
        /// never switches back
        const SYNC_MODE_0 = 0x1000;
        /// Switches to FreqPeriodLock and PulseLenRatioLock
        /// as soon as Sync Manager has an accurate time,
        /// and switch back to FreqPeriodLock and PulseLenRatio
        /// when time gets inaccurate
        const SYNC_MODE_1 = 0x2000;

        const _ = !0;
    }
}
