//! Degrees-minutes-seconds to decimal-degrees conversion.

use crate::value::MetaValue;

/// Convert a DMS triple to signed decimal degrees.
///
/// The result is negated for the southern (`'S'`) and western (`'W'`)
/// hemispheres. Any other reference, including lowercase letters or
/// garbage, is treated as north/east.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, reference: char) -> f64 {
    let coord = degrees + minutes / 60.0 + seconds / 3600.0;

    if reference == 'S' || reference == 'W' {
        -coord
    } else {
        coord
    }
}

/// One GPS axis as stored in the file: three components plus a hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub reference: char,
}

impl Coordinate {
    /// Build a coordinate from a decoded `(deg, min, sec)` tuple and a
    /// hemisphere reference value such as `"N"`.
    ///
    /// Returns `None` when the tuple has fewer than three numeric components
    /// or the reference is not non-empty text.
    pub fn from_values(dms: &MetaValue, reference: &MetaValue) -> Option<Self> {
        let MetaValue::Tuple(parts) = dms else {
            return None;
        };
        if parts.len() < 3 {
            return None;
        }

        Some(Self {
            degrees: parts[0].as_f64()?,
            minutes: parts[1].as_f64()?,
            seconds: parts[2].as_f64()?,
            reference: reference.as_text()?.trim().chars().next()?,
        })
    }

    pub fn to_decimal(&self) -> f64 {
        dms_to_decimal(self.degrees, self.minutes, self.seconds, self.reference)
    }
}
