//! Single-line source tokenizer used to highlight embedded code excerpts.
//!
//! The grammar is a fixed, ordered rule table. At each position the remaining suffix of the
//! line is tested against every rule in order and the first rule that matches wins, regardless
//! of how much it would consume. Every rule consumes at least one character, and the final
//! rule matches any non-empty input, so [`tokenize`] is total and always terminates.

/// Reserved words, matched only as whole words.
pub const KEYWORDS: &[&str] = &[
    "def", "class", "return", "if", "else", "elif", "for", "in", "import", "from", "as", "assert",
    "not", "and", "or", "None", "True", "False", "self", "with", "lambda", "yield", "raise", "try",
    "except", "finally", "while", "break", "continue", "pass", "is", "del", "global", "nonlocal",
    "async", "await",
];

/// Well-known module, type and function names, matched only as whole words.
pub const BUILTINS: &[&str] = &[
    "nn",
    "torch",
    "F",
    "math",
    "int",
    "float",
    "bool",
    "str",
    "list",
    "dict",
    "tuple",
    "set",
    "print",
    "len",
    "range",
    "sum",
    "super",
    "isinstance",
    "hasattr",
    "getattr",
];

/// Semantic class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    /// `#` to end of line.
    Comment,
    /// Quoted literal, optionally `f`-prefixed.
    String,
    /// `@name`.
    Decorator,
    /// Reserved word.
    Keyword,
    /// Well-known module/type/function name.
    Builtin,
    /// Numeric literal.
    Number,
    /// Identifier directly followed by `(`.
    FunctionCall,
    /// Anything else: a bare word or a single non-word character.
    Plain,
}

impl TokenCategory {
    /// Presentation class for styled categories; `None` for [`TokenCategory::Plain`].
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Comment => Some("code-comment"),
            Self::String => Some("code-string"),
            Self::Decorator => Some("code-decorator"),
            Self::Keyword => Some("code-keyword"),
            Self::Builtin => Some("code-builtin"),
            Self::Number => Some("code-number"),
            Self::FunctionCall => Some("code-function"),
            Self::Plain => None,
        }
    }
}

/// Half-open byte range `[start, end)` into the tokenized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Inclusive start byte.
    pub start: usize,
    /// Exclusive end byte.
    pub end: usize,
}

/// A classified, non-empty, contiguous slice of one source line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Category assigned by the first matching rule.
    pub category: TokenCategory,
    /// Exact source text of the token.
    pub text: String,
    /// Location in the line.
    pub span: Span,
}

/// Returns the byte length of the match at the start of the input, if any.
type Matcher = fn(&str) -> Option<usize>;

const RULES: &[(Matcher, TokenCategory)] = &[
    (match_comment, TokenCategory::Comment),
    (match_string, TokenCategory::String),
    (match_decorator, TokenCategory::Decorator),
    (match_keyword, TokenCategory::Keyword),
    (match_builtin, TokenCategory::Builtin),
    (match_number, TokenCategory::Number),
    (match_call, TokenCategory::FunctionCall),
    (match_plain, TokenCategory::Plain),
];

/// Split one line into tokens.
///
/// Concatenating the `text` of the returned tokens reproduces `line` exactly. An empty line
/// yields no tokens.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while pos < line.len() {
        let rest = &line[pos..];
        let (len, category) = classify(rest);
        let end = pos + len;
        out.push(Token {
            category,
            text: rest[..len].to_owned(),
            span: Span { start: pos, end },
        });
        pos = end;
    }

    out
}

fn classify(rest: &str) -> (usize, TokenCategory) {
    for &(matcher, category) in RULES {
        match matcher(rest) {
            Some(len) if len > 0 => return (len, category),
            _ => {}
        }
    }
    // `match_plain` accepts any non-empty input; this only guards the invariant.
    let len = rest.chars().next().map_or(rest.len(), char::len_utf8);
    (len, TokenCategory::Plain)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Length of the run of ASCII word characters at the start of `s`.
fn word_len(s: &str) -> usize {
    s.bytes().take_while(|&b| is_word_byte(b)).count()
}

fn digits_from(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Runs to end of line, stopping before a carriage return left over from CRLF input.
fn match_comment(rest: &str) -> Option<usize> {
    rest.starts_with('#')
        .then(|| rest.find('\r').unwrap_or(rest.len()))
}

fn match_string(rest: &str) -> Option<usize> {
    let b = rest.as_bytes();
    let prefix = usize::from(b.first() == Some(&b'f'));
    let quote = *b.get(prefix)?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let mut i = prefix + 1;
    while i < b.len() {
        match b[i] {
            b'\\' => i += 2,
            c if c == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    // unterminated
    None
}

fn match_decorator(rest: &str) -> Option<usize> {
    let name = rest.strip_prefix('@')?;
    match word_len(name) {
        0 => None,
        n => Some(1 + n),
    }
}

/// A whole-word match: the full word run at this position must be one of `words`.
fn match_word_in(rest: &str, words: &[&str]) -> Option<usize> {
    let n = word_len(rest);
    (n > 0 && words.contains(&&rest[..n])).then_some(n)
}

fn match_keyword(rest: &str) -> Option<usize> {
    match_word_in(rest, KEYWORDS)
}

fn match_builtin(rest: &str) -> Option<usize> {
    match_word_in(rest, BUILTINS)
}

// [0-9]+ \.? [0-9]* (e[+-]?[0-9]+)?
fn match_number(rest: &str) -> Option<usize> {
    let b = rest.as_bytes();
    let mut i = digits_from(b, 0);
    if i == 0 {
        return None;
    }

    if b.get(i) == Some(&b'.') {
        i = digits_from(b, i + 1);
    }

    if b.get(i) == Some(&b'e') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(b, j);
        if exp_end > j {
            i = exp_end;
        }
    }

    Some(i)
}

fn match_call(rest: &str) -> Option<usize> {
    let n = word_len(rest);
    (n > 0 && rest.as_bytes().get(n) == Some(&b'(')).then_some(n)
}

fn match_plain(rest: &str) -> Option<usize> {
    match word_len(rest) {
        0 => rest.chars().next().map(char::len_utf8),
        n => Some(n),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/highlight/tokenizer.rs"]
mod tests;
