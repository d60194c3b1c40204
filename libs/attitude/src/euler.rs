use tracing::debug;

use crate::Quaternion;

/// Degrees per radian as the original decoder defines it: a fixed literal,
/// not derived from pi, so degree output stays bit-compatible.
pub const RAD_TO_DEG: f64 = 57.29577051;

/// Orientation as pitch/roll/heading angles in radians.
///
/// Euler angles suffer from gimbal lock; they are a display representation,
/// orientation math stays in quaternions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub pitch: f64,
    pub roll: f64,
    pub heading: f64,
}

impl EulerAngles {
    pub const fn new(pitch: f64, roll: f64, heading: f64) -> Self {
        EulerAngles {
            pitch,
            roll,
            heading,
        }
    }

    /// All-zero angles, the identity rotation.
    pub const fn identity() -> Self {
        EulerAngles {
            pitch: 0.0,
            roll: 0.0,
            heading: 0.0,
        }
    }

    /// The same angles converted to degrees.
    pub fn to_degrees(&self) -> Self {
        EulerAngles {
            pitch: self.pitch * RAD_TO_DEG,
            roll: self.roll * RAD_TO_DEG,
            heading: self.heading * RAD_TO_DEG,
        }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.pitch - other.pitch).abs() <= tolerance
            && (self.roll - other.roll).abs() <= tolerance
            && (self.heading - other.heading).abs() <= tolerance
    }
}

impl From<&Quaternion> for EulerAngles {
    /// Closed-form decode of a unit quaternion.
    ///
    /// No asin clamp and no gimbal-lock branch: a non-unit input may yield a
    /// NaN pitch, exactly as the closed forms dictate.
    fn from(q: &Quaternion) -> Self {
        let pitch = (2.0 * q.y * q.z + 2.0 * q.w * q.x).asin();

        let roll = -f64::atan2(
            2.0 * (q.x * q.z - q.w * q.y),
            q.w * q.w + q.z * q.z - q.x * q.x - q.y * q.y,
        );

        let heading = f64::atan2(
            2.0 * (q.x * q.y - q.w * q.z),
            q.w * q.w + q.y * q.y - q.x * q.x - q.z * q.z,
        );

        debug!(pitch, roll, heading, "decoded quaternion");

        EulerAngles {
            pitch,
            roll,
            heading,
        }
    }
}

impl From<Quaternion> for EulerAngles {
    fn from(q: Quaternion) -> Self {
        EulerAngles::from(&q)
    }
}
