//! Narrative core of an interactive model explainer.
//!
//! A walkthrough is a fixed sequence of [`Phase`]s. When navigation makes a phase active, a
//! dispatch pass over the [`PhaseRegistry`] runs that phase's handler, which points the scene
//! camera at the relevant part of the model and replaces the displayed [`Commentary`].
//! Commentary interleaves prose with embedded values, most notably [`CodeExcerpt`]s that are
//! tokenized line by line for syntax highlighting.
//!
//! The crate produces declarative output only (camera poses and ordered content blocks). Drawing
//! the scene and the DOM belongs to the host application, which plugs in through [`SceneSink`].
//!
//! For the full tour see [`crate::guide`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commentary;
mod foundation;
mod highlight;
mod present;
mod walkthrough;

/// Standalone documentation for the walkthrough core.
pub mod guide;

pub use commentary::builder::{CommentaryBuilder, code_excerpt, commentary};
pub use commentary::{Commentary, ContentBlock, Embed, InlineUnit};
pub use foundation::core::{CameraPose, Vec3};
pub use foundation::error::{WalkthroughError, WalkthroughResult};
pub use highlight::excerpt::{
    CodeExcerpt, ExcerptHeader, ExcerptRow, ExcerptView, RenderedExcerpt,
};
pub use highlight::tokenizer::{BUILTINS, KEYWORDS, Span, Token, TokenCategory, tokenize};
pub use present::html::{HtmlOpts, commentary_html, escape_html, excerpt_html, view_html};
pub use walkthrough::context::{PhaseArgs, WalkthroughContext};
pub use walkthrough::phase::Phase;
pub use walkthrough::registry::{PhaseEntry, PhaseHandler, PhaseRegistry};
pub use walkthrough::scene::{SceneSink, SceneState};
