use super::*;
use crate::highlight::excerpt::CodeExcerpt;
use crate::walkthrough::phase::Phase;

#[test]
fn escapes_special_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
    );
}

#[test]
fn excerpt_markup_uses_snippet_classes() {
    let r = CodeExcerpt::new("def f(): # hi")
        .origin("model.py")
        .starting_at(7)
        .unwrap()
        .mount()
        .render();
    let html = excerpt_html(&r);
    assert!(html.starts_with("<div class=\"code-snippet\">"));
    assert!(html.contains("<span class=\"code-snippet-toggle\">▼</span>"));
    assert!(html.contains("<span class=\"code-snippet-filename\">model.py</span>"));
    assert!(html.contains("<span class=\"code-snippet-line\">:7</span>"));
    assert!(html.contains("<span class=\"code-keyword\">def</span>"));
    assert!(html.contains("<span class=\"code-function\">f</span>"));
    assert!(html.contains("<span class=\"code-comment\"># hi</span>"));
}

#[test]
fn collapsed_excerpt_has_no_code_element() {
    let mut view = CodeExcerpt::new("x = 1").origin("a.py").mount();
    view.toggle();
    let html = view_html(&view);
    assert!(html.contains("▶"));
    assert!(!html.contains("<pre"));
}

#[test]
fn unlabeled_excerpt_has_no_header() {
    let html = view_html(&CodeExcerpt::new("x").mount());
    assert!(!html.contains("code-snippet-header"));
    assert!(html.contains("<pre class=\"code-snippet-code\"><code>x</code></pre>"));
}

#[test]
fn rows_are_separated_by_newlines() {
    let html = view_html(&CodeExcerpt::new("\na\nb\n").mount());
    assert!(html.contains("<code>a\nb</code>"));
}

#[test]
fn commentary_splits_paragraphs_and_keeps_inline_values() {
    let c = crate::commentary!(
        Phase::Output,
        "\n\nFirst `ln_f` para.\n\nSecond has ",
        3,
        " columns.\n\n",
        CodeExcerpt::new("x = 1"),
        "\nTail"
    )
    .unwrap();
    let html = commentary_html(&c, HtmlOpts::default());
    assert!(html.starts_with("<div class=\"commentary\" data-phase=\"output\">"));
    assert!(html.contains("<p>First <code>ln_f</code> para.</p>"));
    assert!(html.contains("<p>Second has 3 columns.</p>"));
    assert!(html.contains("<p>Tail</p>"));

    let first = html.find("Second has").unwrap();
    let snippet = html.find("code-snippet").unwrap();
    let tail = html.find("Tail").unwrap();
    assert!(first < snippet && snippet < tail);
}

#[test]
fn unpaired_backtick_is_left_literal() {
    let c = crate::commentary!(Phase::Output, "a `b` c `d").unwrap();
    let html = commentary_html(&c, HtmlOpts::default());
    assert!(html.contains("<p>a <code>b</code> c `d</p>"));
}

#[test]
fn options_disable_paragraphs_and_code_spans() {
    let c = crate::commentary!(Phase::Output, "x `y`").unwrap();
    let opts = HtmlOpts {
        paragraphs: false,
        inline_code: false,
    };
    let html = commentary_html(&c, opts);
    assert!(html.contains("x `y`"));
    assert!(!html.contains("<p>"));
}
