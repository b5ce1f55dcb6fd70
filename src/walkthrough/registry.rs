use crate::foundation::error::{WalkthroughError, WalkthroughResult};
use crate::walkthrough::context::{PhaseArgs, WalkthroughContext};
use crate::walkthrough::phase::Phase;
use crate::walkthrough::phases;
use crate::walkthrough::scene::SceneSink;

/// Body of a phase: sets the camera and commentary. Only called while its phase is active.
pub type PhaseHandler = fn(&mut PhaseArgs<'_>) -> WalkthroughResult<()>;

/// A handler bound to the phase it serves.
#[derive(Clone, Copy)]
pub struct PhaseEntry {
    phase: Phase,
    handler: PhaseHandler,
}

impl PhaseEntry {
    /// Bind `handler` to `phase`.
    pub fn new(phase: Phase, handler: PhaseHandler) -> Self {
        Self { phase, handler }
    }

    /// Phase this entry is bound to.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the handler if `args` has this entry's phase active.
    ///
    /// Returns `Ok(false)` without touching the scene otherwise. The handler's writes are
    /// applied only if it succeeds.
    pub fn invoke(&self, args: &mut PhaseArgs<'_>) -> WalkthroughResult<bool> {
        if !args.is_active(self.phase) {
            return Ok(false);
        }
        match (self.handler)(args) {
            Ok(()) => {
                args.commit();
                Ok(true)
            }
            Err(e) => {
                args.discard();
                tracing::warn!(
                    phase = %self.phase,
                    error = %e,
                    "phase handler failed; scene unchanged"
                );
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for PhaseEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseEntry")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// The set of phase handlers run on every navigation event.
///
/// A dispatch pass offers the context to every entry; each entry checks its own phase and
/// returns immediately unless it is the active one. Keeping the check in the entry means
/// "what happens when phase X starts" lives entirely with X's handler. The phase list is
/// short and fixed, so the linear pass is fine.
#[derive(Debug, Default, Clone)]
pub struct PhaseRegistry {
    entries: Vec<PhaseEntry>,
}

impl PhaseRegistry {
    /// Registry with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in phase handler.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                PhaseEntry::new(Phase::Transformer, phases::transformer::walkthrough),
                PhaseEntry::new(Phase::Output, phases::output::walkthrough),
            ],
        }
    }

    /// Add a handler. Each phase may have at most one.
    pub fn register(mut self, phase: Phase, handler: PhaseHandler) -> WalkthroughResult<Self> {
        if self.has_handler(phase) {
            return Err(WalkthroughError::validation(format!(
                "phase '{phase}' already has a handler"
            )));
        }
        self.entries.push(PhaseEntry::new(phase, handler));
        Ok(self)
    }

    /// `true` when some entry is bound to `phase`.
    pub fn has_handler(&self, phase: Phase) -> bool {
        self.entries.iter().any(|e| e.phase == phase)
    }

    /// Phases with handlers, in registration order.
    pub fn phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.entries.iter().map(PhaseEntry::phase)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one dispatch pass against `ctx`.
    ///
    /// Returns the phase whose handler ran. `Ok(None)` means no handler matched (including
    /// "no active phase"): the scene is left exactly as it was.
    #[tracing::instrument(skip(self, ctx), fields(phase = ?ctx.phase()))]
    pub fn dispatch<S: SceneSink>(
        &self,
        ctx: &mut WalkthroughContext<S>,
    ) -> WalkthroughResult<Option<Phase>> {
        let mut args = ctx.begin_pass();
        let mut ran = None;
        for entry in &self.entries {
            if entry.invoke(&mut args)? {
                ran = Some(entry.phase);
            }
        }

        match ran {
            Some(phase) => tracing::debug!(%phase, "phase handler ran"),
            None => tracing::debug!("no handler for active phase; scene unchanged"),
        }
        Ok(ran)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/walkthrough/registry.rs"]
mod tests;
