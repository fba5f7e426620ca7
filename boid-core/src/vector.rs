/// A 2D vector used for position, velocity and steering
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        Self {
            x: cos(angle),
            y: sin(angle),
        }
    }

    pub fn magnitude(&self) -> f32 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    /// Rescales to `mag`. A zero vector stays zero.
    pub fn set_magnitude(&self, mag: f32) -> Self {
        self.normalize() * mag
    }

    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            let normalized = self.normalize();
            Self {
                x: normalized.x * max,
                y: normalized.y * max,
            }
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        sqrt(dx * dx + dy * dy)
    }
}

#[cfg(feature = "std")]
fn sqrt(v: f32) -> f32 {
    v.sqrt()
}

#[cfg(not(feature = "std"))]
fn sqrt(v: f32) -> f32 {
    libm::sqrtf(v)
}

#[cfg(feature = "std")]
fn sin(v: f32) -> f32 {
    v.sin()
}

#[cfg(not(feature = "std"))]
fn sin(v: f32) -> f32 {
    libm::sinf(v)
}

#[cfg(feature = "std")]
fn cos(v: f32) -> f32 {
    v.cos()
}

#[cfg(not(feature = "std"))]
fn cos(v: f32) -> f32 {
    libm::cosf(v)
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_vector2d_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 0.0001);
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    }

    #[test]
    fn test_set_magnitude_keeps_zero_vector() {
        assert_eq!(Vector2D::zero().set_magnitude(4.0), Vector2D::zero());

        let v = Vector2D::new(0.0, 2.0).set_magnitude(4.0);
        assert!((v.y - 4.0).abs() < 1e-6);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn test_limit() {
        let v = Vector2D::new(30.0, 40.0).limit(5.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-5);

        let short = Vector2D::new(0.1, 0.1);
        assert_eq!(short.limit(5.0), short);
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));
        assert_eq!(-v1, Vector2D::new(-1.0, -2.0));
    }

    #[test]
    fn test_from_angle_is_unit() {
        for i in 0..16 {
            let v = Vector2D::from_angle(i as f32 * 0.4);
            assert!((v.magnitude() - 1.0).abs() < 1e-5);
        }
    }
}
