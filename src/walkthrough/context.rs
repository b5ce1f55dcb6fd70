use crate::commentary::Commentary;
use crate::foundation::core::{CameraPose, Vec3};
use crate::walkthrough::phase::Phase;
use crate::walkthrough::scene::SceneSink;

/// Application-wide walkthrough state: the active phase plus the scene it drives.
///
/// Created once at startup with no active phase. Navigation changes the phase through
/// [`set_phase`](Self::set_phase), [`advance`](Self::advance) or [`retreat`](Self::retreat);
/// a [`PhaseRegistry`](crate::PhaseRegistry) dispatch pass then reacts to it.
#[derive(Debug)]
pub struct WalkthroughContext<S> {
    phase: Option<Phase>,
    scene: S,
    passes: u64,
}

impl<S: SceneSink> WalkthroughContext<S> {
    /// New context with no active phase.
    pub fn new(scene: S) -> Self {
        Self {
            phase: None,
            scene,
            passes: 0,
        }
    }

    /// Active phase, `None` before navigation starts.
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Make `phase` active (or clear it).
    pub fn set_phase(&mut self, phase: impl Into<Option<Phase>>) {
        self.phase = phase.into();
    }

    /// Step forward. From no phase this selects the first; at the last phase it stays put.
    pub fn advance(&mut self) -> Option<Phase> {
        self.phase = match self.phase {
            None => Phase::ALL.first().copied(),
            Some(p) => Some(p.next().unwrap_or(p)),
        };
        self.phase
    }

    /// Step backward. At the first phase (or with none active) nothing changes.
    pub fn retreat(&mut self) -> Option<Phase> {
        if let Some(p) = self.phase {
            self.phase = Some(p.prev().unwrap_or(p));
        }
        self.phase
    }

    /// The scene this context writes to.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access to the scene, for the hosting application.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Consume the context and return the scene.
    pub fn into_scene(self) -> S {
        self.scene
    }

    /// Number of dispatch passes run against this context.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub(crate) fn begin_pass(&mut self) -> PhaseArgs<'_> {
        self.passes += 1;
        PhaseArgs::new(self.phase, &mut self.scene)
    }
}

/// What a phase handler sees during one dispatch pass.
///
/// Writes are staged and reach the scene only through [`PhaseEntry::invoke`](crate::PhaseEntry::invoke)
/// once the handler returns `Ok`. A failing handler leaves the scene as it was.
pub struct PhaseArgs<'a> {
    phase: Option<Phase>,
    scene: &'a mut dyn SceneSink,
    camera: Option<CameraPose>,
    commentary: Option<Commentary>,
}

impl<'a> PhaseArgs<'a> {
    /// Arguments for a pass with `phase` active, writing to `scene`.
    pub fn new(phase: Option<Phase>, scene: &'a mut dyn SceneSink) -> Self {
        Self {
            phase,
            scene,
            camera: None,
            commentary: None,
        }
    }

    /// Active phase for this pass.
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    /// `true` when `phase` is the active one.
    pub fn is_active(&self, phase: Phase) -> bool {
        self.phase == Some(phase)
    }

    /// Set the phase's starting camera.
    pub fn set_initial_camera(&mut self, eye: Vec3, target: Vec3) {
        self.camera = Some(CameraPose::new(eye, target));
    }

    /// Display `commentary`.
    pub fn set_commentary(&mut self, commentary: Commentary) {
        self.commentary = Some(commentary);
    }

    /// Push staged writes to the scene, camera first.
    pub(crate) fn commit(&mut self) {
        if let Some(pose) = self.camera.take() {
            self.scene.set_initial_camera(pose);
        }
        if let Some(c) = self.commentary.take() {
            self.scene.set_commentary(c);
        }
    }

    pub(crate) fn discard(&mut self) {
        self.camera = None;
        self.commentary = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/walkthrough/context.rs"]
mod tests;
