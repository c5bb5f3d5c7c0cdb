use bitflags::bitflags;

use crate::{
    constants::{CFG_RST_PAYLOAD_LEN, UBX_CLASS_CFG, UBX_ID_CFG_RST},
    error::FrameError,
    frame::{frame_into_array, MemWriter},
    UbxPacketCreator, UbxPacketMeta,
};

/// Reset Receiver / Clear Backup Data Structures
pub struct CfgRst;

impl UbxPacketMeta for CfgRst {
    const CLASS: u8 = UBX_CLASS_CFG;
    const ID: u8 = UBX_ID_CFG_RST;
    const PAYLOAD_LEN: u16 = CFG_RST_PAYLOAD_LEN;
}

/// Struct that is used to construct [`CfgRst`] frames
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CfgRstBuilder {
    /// Battery backed RAM sections to clear
    pub nav_bbr_mask: NavBbrMask,
    /// Reset Type
    pub reset_mode: ResetMode,
}

impl CfgRstBuilder {
    pub const PACKET_LEN: usize = CFG_RST_PAYLOAD_LEN as usize + 8;

    /// Clear all backup data. Presets restart the GNSS part only (reset mode 0x02)
    pub fn cold_start() -> Self {
        Self::with_mask(NavBbrPredefinedMask::COLD_START)
    }

    /// Clear ephemeris only
    pub fn warm_start() -> Self {
        Self::with_mask(NavBbrPredefinedMask::WARM_START)
    }

    /// Keep all backup data
    pub fn hot_start() -> Self {
        Self::with_mask(NavBbrPredefinedMask::HOT_START)
    }

    fn with_mask(mask: NavBbrPredefinedMask) -> Self {
        Self {
            nav_bbr_mask: mask.into(),
            reset_mode: ResetMode::ControlledSoftwareResetGpsOnly,
        }
    }

    #[inline]
    pub fn into_packet_bytes(self) -> [u8; Self::PACKET_LEN] {
        let mask = self.nav_bbr_mask.bits().to_le_bytes();
        let payload = [mask[0], mask[1], self.reset_mode.into_raw(), 0];
        frame_into_array::<CfgRst, { CfgRstBuilder::PACKET_LEN }>(&payload)
    }
}

impl From<CfgRstBuilder> for [u8; CfgRstBuilder::PACKET_LEN] {
    fn from(x: CfgRstBuilder) -> Self {
        x.into_packet_bytes()
    }
}

impl UbxPacketCreator for CfgRstBuilder {
    #[inline]
    fn create_packet<T: MemWriter>(self, out: &mut T) -> Result<(), FrameError> {
        let bytes = self.into_packet_bytes();
        out.reserve_allocate(bytes.len())?;
        out.write(&bytes)?;
        Ok(())
    }
}

bitflags! {
    /// Battery backed RAM sections to clear
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NavBbrMask: u16 {
        const EPHEMERIS = 1;
        const ALMANAC = 2;
        const HEALTH = 4;
        const KLOBUCHAR = 8;
        const POSITION = 16;
        const CLOCK_DRIFT = 32;
        const OSCILLATOR_PARAMETER = 64;
        const UTC_CORRECTION_PARAMETERS = 0x80;
        const RTC = 0x100;
        const SFDR_PARAMETERS = 0x800;
        const SFDR_VEHICLE_MONITORING_PARAMETERS = 0x1000;
        const TCT_PARAMETERS = 0x2000;
        const AUTONOMOUS_ORBIT_PARAMETERS = 0x8000;

        const _ = !0;
    }
}

/// Predefined values for `NavBbrMask`
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct NavBbrPredefinedMask(u16);

impl From<NavBbrPredefinedMask> for NavBbrMask {
    fn from(x: NavBbrPredefinedMask) -> Self {
        Self::from_bits_retain(x.0)
    }
}

impl NavBbrPredefinedMask {
    pub const HOT_START: NavBbrPredefinedMask = NavBbrPredefinedMask(0);
    pub const WARM_START: NavBbrPredefinedMask = NavBbrPredefinedMask(1);
    pub const COLD_START: NavBbrPredefinedMask = NavBbrPredefinedMask(0xFFFF);
}

/// Reset Type
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetMode {
    /// Hardware reset (Watchdog) immediately
    HardwareResetImmediately = 0,
    ControlledSoftwareReset = 0x1,
    /// Controlled software reset, GNSS only
    ControlledSoftwareResetGpsOnly = 0x02,
    /// Hardware reset (Watchdog) after shutdown (>=FW6.0)
    HardwareResetAfterShutdown = 0x04,
    ControlledGpsStop = 0x08,
    ControlledGpsStart = 0x09,
}

impl ResetMode {
    pub const fn into_raw(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(
            CfgRstBuilder::cold_start().into_packet_bytes(),
            [0xB5, 0x62, 0x06, 0x04, 0x04, 0x00, 0xFF, 0xFF, 0x02, 0x00, 0x0E, 0x61]
        );
        assert_eq!(CfgRstBuilder::warm_start().nav_bbr_mask, NavBbrMask::EPHEMERIS);
        assert!(CfgRstBuilder::hot_start().nav_bbr_mask.is_empty());
    }

    #[test]
    fn mask_and_mode_layout() {
        let bytes: [u8; CfgRstBuilder::PACKET_LEN] = CfgRstBuilder {
            nav_bbr_mask: NavBbrMask::RTC | NavBbrMask::EPHEMERIS,
            reset_mode: ResetMode::ControlledGpsStart,
        }
        .into();
        assert_eq!(&bytes[6..10], &[0x01, 0x01, 0x09, 0x00]);
    }
}
