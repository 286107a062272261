use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

/// A settled die face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceValue(u8);

impl FaceValue {
    pub const ALL: [FaceValue; 6] = [
        FaceValue(1),
        FaceValue(2),
        FaceValue(3),
        FaceValue(4),
        FaceValue(5),
        FaceValue(6),
    ];

    /// Returns `None` outside `1..=6`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=6).contains(&value).then_some(Self(value))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot used for texture layers.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Settled Euler rotation (XYZ order) that shows this face to the camera.
    pub fn orientation(self) -> Orientation {
        match self.0 {
            1 => Orientation::new(0.0, 0.0, 0.0),
            2 => Orientation::new(0.0, FRAC_PI_2, 0.0),
            3 => Orientation::new(FRAC_PI_2, 0.0, 0.0),
            4 => Orientation::new(-FRAC_PI_2, 0.0, 0.0),
            5 => Orientation::new(0.0, -FRAC_PI_2, 0.0),
            _ => Orientation::new(PI, 0.0, 0.0),
        }
    }

    /// Outward normal (die-local) of the cube side carrying this face.
    ///
    /// Chosen so that `orientation()` rotates it onto +Z. Opposite sides sum to 7.
    pub fn normal(self) -> Vec3 {
        match self.0 {
            1 => Vec3::Z,
            2 => Vec3::NEG_X,
            3 => Vec3::Y,
            4 => Vec3::NEG_Y,
            5 => Vec3::X,
            _ => Vec3::NEG_Z,
        }
    }
}

impl Default for FaceValue {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotation in radians about each axis, applied in XYZ order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }
}
