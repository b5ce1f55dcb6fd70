use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{WalkthroughError, WalkthroughResult};

/// A stage of the guided walkthrough, in presentation order.
///
/// The scene layer and the navigation layer must agree on this list and its order: navigation
/// steps through it with [`Phase::next`] and [`Phase::prev`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Opening overview.
    Intro,
    /// Preliminaries: the task and the toy model.
    Prelim,
    /// Tour of the model's components.
    Components,
    /// Token and position embedding tables.
    Tables,
    /// Input embedding.
    Embedding,
    /// Layer normalization.
    LayerNorm,
    /// Self-attention.
    SelfAttention,
    /// Attention softmax.
    Softmax,
    /// Attention output projection.
    Projection,
    /// Feed-forward MLP.
    Mlp,
    /// A complete transformer block.
    Transformer,
    /// Final layer norm, LM head, softmax and sampling.
    Output,
}

impl Phase {
    /// Every phase in declaration order.
    pub const ALL: [Phase; 12] = [
        Phase::Intro,
        Phase::Prelim,
        Phase::Components,
        Phase::Tables,
        Phase::Embedding,
        Phase::LayerNorm,
        Phase::SelfAttention,
        Phase::Softmax,
        Phase::Projection,
        Phase::Mlp,
        Phase::Transformer,
        Phase::Output,
    ];

    /// Position in [`Phase::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Phase at `index` in [`Phase::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following phase, `None` at the end.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Preceding phase, `None` at the start.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Stable kebab-case name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Prelim => "prelim",
            Phase::Components => "components",
            Phase::Tables => "tables",
            Phase::Embedding => "embedding",
            Phase::LayerNorm => "layer-norm",
            Phase::SelfAttention => "self-attention",
            Phase::Softmax => "softmax",
            Phase::Projection => "projection",
            Phase::Mlp => "mlp",
            Phase::Transformer => "transformer",
            Phase::Output => "output",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = WalkthroughError;

    fn from_str(s: &str) -> WalkthroughResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| WalkthroughError::validation(format!("unknown phase '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/walkthrough/phase.rs"]
mod tests;
