/// A quaternion in (w, x, y, z) order; w is the scalar part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Create a new quaternion with the given terms.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    /// The identity quaternion (no rotation).
    pub const fn identity() -> Self {
        Quaternion {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Magnitude; 1.0 for a unit (rotation) quaternion.
    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(terms: [f64; 4]) -> Self {
        Self {
            w: terms[0],
            x: terms[1],
            y: terms[2],
            z: terms[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_unit() {
        assert_eq!(Quaternion::identity().magnitude(), 1.0);
    }

    #[test]
    fn test_from_array_term_order() {
        let q = Quaternion::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.w, 1.0);
        assert_eq!(q.z, 4.0);
    }
}
