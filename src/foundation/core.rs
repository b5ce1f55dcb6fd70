pub use glam::Vec3;

/// Camera placement handed to the scene when a phase becomes active.
///
/// A pose has no identity: every activation builds a fresh one and overwrites whatever the
/// scene held before.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    /// Eye position.
    pub eye: Vec3,
    /// Look-at / orientation target.
    pub target: Vec3,
}

impl CameraPose {
    /// Build a pose from an eye position and a target.
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// Vector from the eye to the target.
    pub fn view_dir(self) -> Vec3 {
        self.target - self.eye
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
