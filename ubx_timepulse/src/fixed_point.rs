//! Duty cycle fields of CFG-TP5 are unsigned 32 bit fractions, scale 2^-32.
//!
//! Builders in this crate take the duty cycle as the fraction of the period
//! the output is *active* ([`DutyCycleConvention::Direct`]). Older firmware
//! sketches stored the complement instead, see [`DutyCycleConvention`].

use num_traits::float::FloatCore;

use crate::error::FrameError;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Resolution of a 2^-32 fixed-point duty cycle
pub const RATIO_LSB: f64 = 1.0 / TWO_POW_32;

/// Convert a duty cycle in `[0, 1)` into its 2^-32 fixed-point representation.
///
/// The result is rounded to the nearest step and saturates at `u32::MAX`
/// for ratios closer to 1 than half a step.
pub fn ratio_to_fixed(ratio: f64) -> Result<u32, FrameError> {
    ratio_field_to_fixed("ratio", ratio)
}

pub(crate) fn ratio_field_to_fixed(field: &'static str, ratio: f64) -> Result<u32, FrameError> {
    // NaN fails the range check as well
    if !(0.0..1.0).contains(&ratio) {
        log::debug!("{} = {} is outside [0, 1)", field, ratio);
        return Err(FrameError::InvalidRatio {
            field,
            value: ratio,
        });
    }
    let scaled = FloatCore::round(ratio * TWO_POW_32);
    Ok(scaled.min(f64::from(u32::MAX)) as u32)
}

/// Inverse of [`ratio_to_fixed`], exact for every `u32`
pub fn fixed_to_ratio(fixed: u32) -> f64 {
    f64::from(fixed) / TWO_POW_32
}

/// Meaning of a duty cycle value handed over by a caller.
///
/// The two legacy message composers disagreed: one wrote the ratio as given,
/// the other wrote `1 - ratio`. The wire field always holds the active
/// fraction of the period, so only `Direct` values can be passed to the
/// builders. `Complement` values must be translated with
/// [`DutyCycleConvention::to_on_time`] first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DutyCycleConvention {
    /// Fraction of the period during which the output is active
    #[default]
    Direct,
    /// Fraction of the period during which the output is inactive
    Complement,
}

impl DutyCycleConvention {
    /// Translate `ratio`, expressed in this convention, into the active fraction.
    ///
    /// A complement ratio of exactly 0 maps to 1, which the builders reject.
    pub fn to_on_time(self, ratio: f64) -> f64 {
        match self {
            DutyCycleConvention::Direct => ratio,
            DutyCycleConvention::Complement => 1.0 - ratio,
        }
    }
}
