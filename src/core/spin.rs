use super::face::Orientation;
use super::roll::RollSession;
use glam::{Mat4, Quat, Vec3};

/// Rotation of the die mesh, advanced once per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DieSpinner {
    rotation: Vec3,
}

impl DieSpinner {
    #[inline]
    pub fn rotation(&self) -> Orientation {
        Orientation::from_vec3(self.rotation)
    }

    /// Rolling accumulates the spin rate without wrapping; idle snaps to the target.
    pub fn apply(&mut self, session: &RollSession) {
        if session.rolling {
            self.rotation += session.spin_rate;
        } else {
            self.rotation = session.target_orientation.to_vec3();
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let q: Quat = self.rotation().to_quat();
        Mat4::from_quat(q)
    }
}
