//! # ubx_timepulse
//!
//! Build and validate the UBX frames that configure the time pulse output of
//! u-blox GNSS receivers: CFG-TP5 (configure and poll) and CFG-RST.
//!
//! The crate does no I/O. Every builder is a pure function of its inputs
//! returning the complete frame, sync chars through checksum, ready to be
//! handed to a serial port.
//!
//! Constructing Packets
//! ====================
//!
//! Constructing packets happens using the `Builder` variant of the packet, for example:
//! ```
//! use ubx_timepulse::{CfgTp5Builder, TimePulseFlags};
//!
//! let packet: [u8; 40] = CfgTp5Builder {
//!     tp_idx: 0,
//!     ant_cable_delay: 50,
//!     rf_group_delay: 0,
//!     freq_period: 1,
//!     freq_period_lock: 1000,
//!     pulse_len_ratio: 0.1,
//!     pulse_len_ratio_lock: 0.9,
//!     user_delay: 0,
//!     flags: TimePulseFlags::ACTIVE
//!         | TimePulseFlags::LOCK_GNSS_FREQ
//!         | TimePulseFlags::LOCKED_OTHER_SET
//!         | TimePulseFlags::IS_FREQ,
//! }
//! .into_packet_bytes()
//! .expect("valid settings");
//! ```
//! Duty cycles are the fraction of the period during which the output is
//! active, see [`DutyCycleConvention`] for settings written the other way round.
//!
//! Validating Frames
//! =================
//!
//! ```
//! use ubx_timepulse::{encode_poll_time_pulse, validate_frame, FrameError, MessageKind};
//!
//! let poll = encode_poll_time_pulse(0).unwrap();
//! let frame = validate_frame(&poll).unwrap();
//! assert_eq!(frame.kind(), MessageKind::TimePulsePoll);
//!
//! assert!(matches!(
//!     validate_frame(&poll[..5]),
//!     Err(FrameError::TruncatedFrame { .. })
//! ));
//! ```
//!
//! no_std Support
//! ==============
//!
//! Without the `std` feature the crate is `no_std`. Frames can be written into
//! a caller owned buffer through [`SliceWriter`]; the `alloc` feature adds
//! `Vec` based helpers.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
extern crate core;
#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "alloc")]
pub use crate::frame::encode_frame;
pub use crate::{
    constants::{
        CFG_TP5_VERSION, MAX_TIME_PULSE_INDEX, UBX_CLASS_CFG, UBX_ID_CFG_RST, UBX_ID_CFG_TP5,
        UBX_MIN_FRAME_LEN, UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
    },
    error::{FrameError, MemWriterError},
    fixed_point::{fixed_to_ratio, ratio_to_fixed, DutyCycleConvention, RATIO_LSB},
    frame::{
        ubx_checksum, validate_frame, write_frame, MemWriter, SliceWriter, UbxChecksumCalc,
        UbxFrame,
    },
    ubx_packets::*,
};

mod constants;
mod error;
mod fixed_point;
mod frame;
mod ubx_packets;
