use super::*;

fn cats(line: &str) -> Vec<(TokenCategory, String)> {
    tokenize(line)
        .into_iter()
        .map(|t| (t.category, t.text))
        .collect()
}

fn joined(line: &str) -> String {
    tokenize(line).into_iter().map(|t| t.text).collect()
}

#[test]
fn empty_line_yields_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn whitespace_only_line_is_plain_per_character() {
    let toks = tokenize("   ");
    assert_eq!(toks.len(), 3);
    assert!(toks.iter().all(|t| t.category == TokenCategory::Plain && t.text == " "));
}

#[test]
fn comment_has_top_priority() {
    assert_eq!(
        cats("# def foo():"),
        vec![(TokenCategory::Comment, "# def foo():".to_string())]
    );
}

#[test]
fn trailing_comment_consumes_rest_of_line() {
    let toks = tokenize("x = 1  # (1, 11, 48)");
    let last = toks.last().unwrap();
    assert_eq!(last.category, TokenCategory::Comment);
    assert_eq!(last.text, "# (1, 11, 48)");
}

#[test]
fn keyword_requires_whole_word() {
    let toks = tokenize("selfish = 1");
    assert!(!toks.iter().any(|t| t.category == TokenCategory::Keyword));
    assert_eq!(toks[0].category, TokenCategory::Plain);
    assert_eq!(toks[0].text, "selfish");

    let toks = tokenize("self.x");
    assert_eq!(toks[0].category, TokenCategory::Keyword);
    assert_eq!(toks[0].text, "self");
}

#[test]
fn builtin_requires_whole_word() {
    // `int` is a builtin, `in` is a keyword, `integer` is neither
    assert_eq!(cats("int")[0].0, TokenCategory::Builtin);
    assert_eq!(cats("in")[0].0, TokenCategory::Keyword);
    assert_eq!(
        cats("integer"),
        vec![(TokenCategory::Plain, "integer".to_string())]
    );
}

#[test]
fn function_call_excludes_paren() {
    let toks = tokenize("foo(x)");
    assert_eq!(toks[0].category, TokenCategory::FunctionCall);
    assert_eq!(toks[0].text, "foo");
    assert_eq!(toks[1].text, "(");
    assert_eq!(toks[1].category, TokenCategory::Plain);
}

#[test]
fn builtin_call_keeps_builtin_priority_and_excludes_paren() {
    let toks = tokenize("print(x)");
    assert_eq!(toks[0].text, "print");
    assert_eq!(toks[0].category, TokenCategory::Builtin);
    assert_eq!(toks[1].text, "(");
}

#[test]
fn word_followed_by_space_then_paren_is_not_a_call() {
    let toks = tokenize("foo (x)");
    assert_eq!(toks[0].category, TokenCategory::Plain);
}

#[test]
fn strings_support_prefix_and_escapes() {
    assert_eq!(
        cats(r#"f"a\"b" + 'c'"#),
        vec![
            (TokenCategory::String, r#"f"a\"b""#.to_string()),
            (TokenCategory::Plain, " ".to_string()),
            (TokenCategory::Plain, "+".to_string()),
            (TokenCategory::Plain, " ".to_string()),
            (TokenCategory::String, "'c'".to_string()),
        ]
    );
}

#[test]
fn unterminated_string_falls_back_to_plain() {
    let toks = tokenize("'abc");
    assert_eq!(toks[0].category, TokenCategory::Plain);
    assert_eq!(toks[0].text, "'");
    assert_eq!(toks[1].text, "abc");
}

#[test]
fn inf_literal_inside_call() {
    let toks = tokenize("-float('Inf')");
    let kinds: Vec<_> = toks.iter().map(|t| t.category).collect();
    assert_eq!(
        kinds,
        vec![
            TokenCategory::Plain,
            TokenCategory::Builtin,
            TokenCategory::Plain,
            TokenCategory::String,
            TokenCategory::Plain,
        ]
    );
}

#[test]
fn decorator_needs_a_name() {
    assert_eq!(
        cats("@torch.no_grad()")[0],
        (TokenCategory::Decorator, "@torch".to_string())
    );
    assert_eq!(cats("@ x")[0], (TokenCategory::Plain, "@".to_string()));
}

#[test]
fn numbers_with_fraction_and_exponent() {
    assert_eq!(cats("3.14")[0], (TokenCategory::Number, "3.14".to_string()));
    assert_eq!(cats("1.")[0], (TokenCategory::Number, "1.".to_string()));
    assert_eq!(cats("1e-3")[0], (TokenCategory::Number, "1e-3".to_string()));
    assert_eq!(cats("2.5e+10")[0], (TokenCategory::Number, "2.5e+10".to_string()));
    // exponent without digits is not part of the literal
    assert_eq!(cats("1e")[0], (TokenCategory::Number, "1".to_string()));
    // uppercase exponent is not recognized
    assert_eq!(cats("1E5")[0], (TokenCategory::Number, "1".to_string()));
}

#[test]
fn number_before_identifier_splits() {
    assert_eq!(
        cats("12abc"),
        vec![
            (TokenCategory::Number, "12".to_string()),
            (TokenCategory::Plain, "abc".to_string()),
        ]
    );
}

#[test]
fn spans_are_contiguous_byte_ranges() {
    let line = "x = torch.cat((idx, idx_next), dim=1)";
    let toks = tokenize(line);
    let mut expected_start = 0;
    for t in &toks {
        assert_eq!(t.span.start, expected_start);
        assert_eq!(&line[t.span.start..t.span.end], t.text);
        assert!(!t.text.is_empty());
        expected_start = t.span.end;
    }
    assert_eq!(expected_start, line.len());
}

#[test]
fn non_ascii_characters_round_trip() {
    for line in [
        "logits = self.lm_head(x)              # (1, 11, 3) — one score per vocab token",
        "é = 'ünïcode' ∑",
        "🦀(x)",
    ] {
        assert_eq!(joined(line), line);
    }
}

#[test]
fn css_classes_map_one_to_one() {
    assert_eq!(TokenCategory::Keyword.css_class(), Some("code-keyword"));
    assert_eq!(TokenCategory::FunctionCall.css_class(), Some("code-function"));
    assert_eq!(TokenCategory::Plain.css_class(), None);
}

#[test]
fn block_source_line() {
    let toks = tokenize("class Block(nn.Module):");
    let kinds: Vec<_> = toks.iter().map(|t| (t.category, t.text.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (TokenCategory::Keyword, "class"),
            (TokenCategory::Plain, " "),
            (TokenCategory::FunctionCall, "Block"),
            (TokenCategory::Plain, "("),
            (TokenCategory::Builtin, "nn"),
            (TokenCategory::Plain, "."),
            (TokenCategory::Plain, "Module"),
            (TokenCategory::Plain, ")"),
            (TokenCategory::Plain, ":"),
        ]
    );
}

#[test]
fn comment_stops_before_carriage_return() {
    let toks = tokenize("x = 1  # note\r");
    let n = toks.len();
    assert_eq!(toks[n - 2].category, TokenCategory::Comment);
    assert_eq!(toks[n - 2].text, "# note");
    assert_eq!(toks[n - 1].category, TokenCategory::Plain);
    assert_eq!(toks[n - 1].text, "\r");
}
