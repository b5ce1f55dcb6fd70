//! HTML serialization of commentary and excerpts for the DOM layer.
//!
//! Class names follow the stylesheet shipped with the explainer: `code-snippet*` for the excerpt
//! chrome and `code-<category>` for highlighted tokens. Plain tokens are emitted as bare text.

use crate::commentary::{Commentary, ContentBlock, Embed, InlineUnit};
use crate::highlight::excerpt::{ExcerptView, RenderedExcerpt};
use crate::highlight::tokenizer::Token;

/// Options for [`commentary_html`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HtmlOpts {
    /// Split text on blank lines and wrap each paragraph in `<p>`.
    pub paragraphs: bool,
    /// Turn `` `code` `` spans into `<code>` elements.
    pub inline_code: bool,
}

impl Default for HtmlOpts {
    fn default() -> Self {
        Self {
            paragraphs: true,
            inline_code: true,
        }
    }
}

/// Render a commentary document. Excerpts are mounted fresh, in their initial state.
pub fn commentary_html(commentary: &Commentary, opts: HtmlOpts) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"commentary\" data-phase=\"{}\">\n",
        commentary.phase().name()
    ));

    let mut pending = String::new();
    for block in commentary.blocks() {
        match block {
            ContentBlock::Text(s) | ContentBlock::Embedded(Embed::Text(s)) => pending.push_str(s),
            ContentBlock::Embedded(Embed::Inline(InlineUnit::Excerpt(ex))) => {
                flush_text(&mut out, &pending, opts);
                pending.clear();
                out.push_str(&view_html(&ex.mount()));
            }
        }
    }
    flush_text(&mut out, &pending, opts);

    out.push_str("</div>\n");
    out
}

/// Render a mounted excerpt in its current state.
pub fn view_html(view: &ExcerptView) -> String {
    excerpt_html(&view.render())
}

/// Render an excerpt structure. A collapsed excerpt has no `<pre>` element at all.
pub fn excerpt_html(r: &RenderedExcerpt) -> String {
    let mut out = String::from("<div class=\"code-snippet\">");

    if let Some(h) = &r.header {
        out.push_str("<div class=\"code-snippet-header\">");
        out.push_str(&format!(
            "<span class=\"code-snippet-toggle\">{}</span>",
            h.toggle_glyph()
        ));
        out.push_str(&format!(
            "<span class=\"code-snippet-filename\">{}</span>",
            escape_html(&h.label)
        ));
        if let Some(suffix) = h.line_suffix() {
            out.push_str(&format!("<span class=\"code-snippet-line\">{suffix}</span>"));
        }
        out.push_str("</div>");
    }

    if let Some(rows) = &r.rows {
        out.push_str("<pre class=\"code-snippet-code\"><code>");
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for tok in &row.tokens {
                push_token(&mut out, tok);
            }
        }
        out.push_str("</code></pre>");
    }

    out.push_str("</div>\n");
    out
}

fn push_token(out: &mut String, tok: &Token) {
    match tok.category.css_class() {
        Some(class) => {
            out.push_str(&format!(
                "<span class=\"{class}\">{}</span>",
                escape_html(&tok.text)
            ));
        }
        None => out.push_str(&escape_html(&tok.text)),
    }
}

fn flush_text(out: &mut String, text: &str, opts: HtmlOpts) {
    if opts.paragraphs {
        for para in paragraphs(text) {
            out.push_str("<p>");
            out.push_str(&inline_html(&para, opts));
            out.push_str("</p>\n");
        }
    } else if !text.is_empty() {
        out.push_str(&inline_html(text, opts));
    }
}

/// Split on blank lines; paragraphs are trimmed and empty ones dropped.
fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            push_paragraph(&mut out, &mut current);
        } else {
            current.push(line);
        }
    }
    push_paragraph(&mut out, &mut current);
    out
}

fn push_paragraph(out: &mut Vec<String>, lines: &mut Vec<&str>) {
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_owned());
    }
    lines.clear();
}

fn inline_html(text: &str, opts: HtmlOpts) -> String {
    let escaped = escape_html(text);
    if !opts.inline_code {
        return escaped;
    }

    let parts: Vec<&str> = escaped.split('`').collect();
    let mut out = String::with_capacity(escaped.len());
    // an odd part count means every backtick is paired
    let paired = if parts.len() % 2 == 1 {
        parts.len()
    } else {
        parts.len() - 1
    };
    for (i, part) in parts[..paired].iter().enumerate() {
        if i % 2 == 1 {
            out.push_str("<code>");
            out.push_str(part);
            out.push_str("</code>");
        } else {
            out.push_str(part);
        }
    }
    if paired < parts.len() {
        out.push('`');
        out.push_str(parts[paired]);
    }
    out
}

/// Escape HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "../../tests/unit/present/html.rs"]
mod tests;
