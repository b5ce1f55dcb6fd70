use crate::commentary::Commentary;
use crate::foundation::core::CameraPose;
use crate::foundation::error::WalkthroughResult;

/// Write-only view of the external scene used by phase handlers.
///
/// The core never reads scene geometry back; it only pushes a camera pose and the commentary to
/// display.
pub trait SceneSink {
    /// Move the camera to the phase's starting viewpoint.
    fn set_initial_camera(&mut self, pose: CameraPose);

    /// Replace the displayed commentary.
    fn set_commentary(&mut self, commentary: Commentary);
}

/// In-memory scene that keeps the last pose and commentary it was given.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct SceneState {
    camera: Option<CameraPose>,
    commentary: Option<Commentary>,
    camera_writes: u64,
    commentary_writes: u64,
}

impl SceneState {
    /// Empty scene: no pose, no commentary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pose written.
    pub fn camera(&self) -> Option<CameraPose> {
        self.camera
    }

    /// Commentary currently displayed.
    pub fn commentary(&self) -> Option<&Commentary> {
        self.commentary.as_ref()
    }

    /// Number of camera writes so far.
    pub fn camera_writes(&self) -> u64 {
        self.camera_writes
    }

    /// Number of commentary writes so far.
    pub fn commentary_writes(&self) -> u64 {
        self.commentary_writes
    }

    /// Pretty-printed JSON snapshot of the scene.
    pub fn to_json(&self) -> WalkthroughResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SceneSink for SceneState {
    fn set_initial_camera(&mut self, pose: CameraPose) {
        self.camera = Some(pose);
        self.camera_writes += 1;
    }

    fn set_commentary(&mut self, commentary: Commentary) {
        self.commentary = Some(commentary);
        self.commentary_writes += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/walkthrough/scene.rs"]
mod tests;
