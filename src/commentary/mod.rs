//! Commentary documents: ordered text runs with embedded values.

pub(crate) mod builder;

use crate::highlight::excerpt::CodeExcerpt;
use crate::walkthrough::phase::Phase;

/// A presentation unit inserted inline instead of being stringified.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineUnit {
    /// A highlighted, optionally collapsible source excerpt.
    Excerpt(CodeExcerpt),
}

/// A value interpolated between literal fragments.
///
/// Plain data is carried as its text rendering; anything with an inline presentation is kept
/// structured so the presentation layer can render it as a block.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Embed {
    /// Text rendering of plain data.
    Text(String),
    /// Structured block rendered in place.
    Inline(InlineUnit),
}

impl Embed {
    /// Inline unit carried by this value, if any.
    pub fn inline(&self) -> Option<&InlineUnit> {
        match self {
            Self::Inline(u) => Some(u),
            Self::Text(_) => None,
        }
    }
}

impl From<CodeExcerpt> for Embed {
    fn from(excerpt: CodeExcerpt) -> Self {
        Self::Inline(InlineUnit::Excerpt(excerpt))
    }
}

impl From<InlineUnit> for Embed {
    fn from(unit: InlineUnit) -> Self {
        Self::Inline(unit)
    }
}

impl From<String> for Embed {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Embed {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<&String> for Embed {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

macro_rules! embed_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Embed {
                fn from(v: $t) -> Self {
                    Self::Text(v.to_string())
                }
            }
        )*
    };
}

embed_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// One unit of a [`Commentary`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentBlock {
    /// Literal text run from a fragment.
    Text(String),
    /// An interpolated value.
    Embedded(Embed),
}

impl ContentBlock {
    /// Text contribution of this block. Excerpts contribute their trimmed source.
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Embedded(Embed::Text(s)) => s,
            Self::Embedded(Embed::Inline(InlineUnit::Excerpt(ex))) => ex.trimmed_source(),
        }
    }
}

/// The ordered content shown for one phase.
///
/// Rebuilt from scratch by each handler run; never patched across activations.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Commentary {
    phase: Phase,
    blocks: Vec<ContentBlock>,
}

impl Commentary {
    pub(crate) fn from_blocks(phase: Phase, blocks: Vec<ContentBlock>) -> Self {
        Self { phase, blocks }
    }

    /// Phase this commentary was built for.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Blocks in narrative order.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// `true` when the commentary has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Embedded excerpts in order of appearance.
    pub fn excerpts(&self) -> impl Iterator<Item = &CodeExcerpt> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            ContentBlock::Embedded(Embed::Inline(InlineUnit::Excerpt(ex))) => Some(ex),
            _ => None,
        })
    }

    /// Concatenate every block's text contribution in order.
    pub fn plain_text(&self) -> String {
        self.blocks.iter().map(ContentBlock::plain_text).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/commentary/blocks.rs"]
mod tests;
