use anyhow::{bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use super::orientation::Orientation;

/// What to do when the pitch `asin` argument leaves [-1, 1].
///
/// Rounding pushes it slightly past the bound near gimbal lock.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PitchDomain {
    /// Clamp the argument to [-1, 1], pitch saturates at ±90°.
    #[default]
    Clamp,
    /// Fail with a domain error.
    Strict,
}

/// Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    /// The pitch `asin` argument was clamped under [`PitchDomain::Clamp`].
    pub pitch_clamped: bool,
}

impl EulerAngles {
    pub fn as_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }
}

/// Converts a (relative) orientation to roll, pitch and yaw in degrees.
///
/// ```text
/// roll  = atan2(2(yz + xw), 1 - 2(x² + y²))
/// pitch = asin(2(xz - yw))
/// yaw   = atan2(2(xy + zw), 1 - 2(y² + z²))
/// ```
pub fn to_euler_degrees(q: &Orientation, pitch_domain: PitchDomain) -> Result<EulerAngles> {
    let (w, x, y, z) = (q.w(), q.x(), q.y(), q.z());

    let roll = f64::atan2(2.0 * (y * z + x * w), 1.0 - 2.0 * (x * x + y * y));
    let yaw = f64::atan2(2.0 * (x * y + z * w), 1.0 - 2.0 * (y * y + z * z));

    let mut sin_pitch = 2.0 * (x * z - y * w);
    let mut pitch_clamped = false;
    if !(-1.0..=1.0).contains(&sin_pitch) && !sin_pitch.is_nan() {
        match pitch_domain {
            PitchDomain::Clamp => {
                debug!("pitch asin argument {} clamped to [-1, 1]", sin_pitch);
                sin_pitch = sin_pitch.clamp(-1.0, 1.0);
                pitch_clamped = true;
            }
            PitchDomain::Strict => {
                bail!("pitch asin argument {} outside [-1, 1] for {:?}", sin_pitch, q)
            }
        }
    }
    let pitch = sin_pitch.asin();

    Ok(EulerAngles {
        roll: roll.to_degrees(),
        pitch: pitch.to_degrees(),
        yaw: yaw.to_degrees(),
        pitch_clamped,
    })
}
