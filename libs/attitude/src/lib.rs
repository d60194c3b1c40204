//! attitude - quaternion to Euler angle decoding
//!
//! Converts unit quaternions into pitch/roll/heading Euler angles with the
//! closed-form trigonometric formulas the `quaternion_decode` tool prints.

pub mod euler;
pub mod quaternion;

pub use euler::{EulerAngles, RAD_TO_DEG};
pub use quaternion::Quaternion;
