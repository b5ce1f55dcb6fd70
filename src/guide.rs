//! # Walkthrough guide
//!
//! This module is a standalone tour of the walkthrough core: what it produces, how a phase
//! becomes visible, and how code excerpts are highlighted.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Phase`](crate::Phase): one stage of the walkthrough, in a closed, ordered list
//! - [`WalkthroughContext`](crate::WalkthroughContext): the active phase plus the scene it drives
//! - [`PhaseRegistry`](crate::PhaseRegistry): the handlers run on every navigation event
//! - [`SceneSink`](crate::SceneSink): where handlers write the camera pose and commentary
//! - [`Commentary`](crate::Commentary): ordered [`ContentBlock`](crate::ContentBlock)s for one phase
//! - [`CodeExcerpt`](crate::CodeExcerpt): a source fragment embedded in commentary
//!
//! A navigation event is handled in three steps:
//!
//! 1. The host changes the active phase: [`WalkthroughContext::set_phase`](crate::WalkthroughContext::set_phase)
//! 2. The host runs a pass: [`PhaseRegistry::dispatch`](crate::PhaseRegistry::dispatch)
//! 3. The host reads what the handler wrote into its [`SceneSink`](crate::SceneSink)
//!
//! ---
//!
//! ## Dispatch
//!
//! Every registered [`PhaseEntry`](crate::PhaseEntry) is offered every pass. An entry whose phase
//! is not the active one returns before doing anything, so inactive phases never write to the
//! scene. If nothing matches (including before the first navigation) the scene keeps whatever it
//! showed last.
//!
//! ```
//! use walkthrough::{Phase, PhaseRegistry, SceneState, WalkthroughContext};
//!
//! let registry = PhaseRegistry::standard();
//! let mut ctx = WalkthroughContext::new(SceneState::new());
//! ctx.set_phase(Phase::Output);
//! assert_eq!(registry.dispatch(&mut ctx)?, Some(Phase::Output));
//! assert!(ctx.scene().camera().is_some());
//! # Ok::<(), walkthrough::WalkthroughError>(())
//! ```
//!
//! ---
//!
//! ## Commentary
//!
//! Commentary is built from literal fragments interleaved with values, one more fragment than
//! values. Plain values are stringified; excerpts stay structured.
//!
//! ```
//! use walkthrough::{CodeExcerpt, Phase};
//!
//! let c = walkthrough::commentary!(
//!     Phase::Output,
//!     "We sample with temperature ",
//!     0.8,
//!     ":",
//!     CodeExcerpt::new("probs = F.softmax(logits, dim=-1)").origin("model.py"),
//!     ""
//! )?;
//! assert_eq!(c.len(), 4);
//! # Ok::<(), walkthrough::WalkthroughError>(())
//! ```
//!
//! ---
//!
//! ## Highlighting
//!
//! [`tokenize`](crate::tokenize) classifies one line with a fixed rule order: comment, string,
//! decorator, keyword, builtin, number, function call, then a plain word or single character.
//! The first rule that matches wins. Token texts always concatenate back to the input line.
//!
//! Excerpts drop leading and trailing blank lines, tokenize each remaining line as a row, and
//! show a clickable header when they carry an origin label. Collapsing is view state: it lives
//! on [`ExcerptView`](crate::ExcerptView), never on the excerpt or the commentary, and a
//! collapsed view renders no rows at all.
