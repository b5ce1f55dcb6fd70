use super::*;
use crate::commentary::InlineUnit;

#[test]
fn fragments_and_values_interleave_in_order() {
    let c = commentary(Phase::Intro, &["A", "B"], vec![Embed::from(42)]).unwrap();
    assert_eq!(
        c.blocks(),
        &[
            ContentBlock::Text("A".to_string()),
            ContentBlock::Embedded(Embed::Text("42".to_string())),
            ContentBlock::Text("B".to_string()),
        ]
    );
    assert_eq!(c.phase(), Phase::Intro);
}

#[test]
fn malformed_interleaving_is_rejected() {
    let too_many_values = commentary(
        Phase::Intro,
        &["A", "B"],
        vec![Embed::from(1), Embed::from(2)],
    );
    assert!(matches!(
        too_many_values,
        Err(WalkthroughError::Validation(_))
    ));

    let too_few_values = commentary(Phase::Intro, &["A", "B", "C"], vec![Embed::from(1)]);
    assert!(too_few_values.is_err());

    let no_fragments = commentary(Phase::Intro, &[], vec![]);
    assert!(no_fragments.is_err());
}

#[test]
fn empty_fragments_produce_no_blocks_but_values_stay() {
    let c = commentary(
        Phase::Output,
        &["", "", ""],
        vec![Embed::from("x"), Embed::from("y")],
    )
    .unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.plain_text(), "xy");
}

#[test]
fn excerpt_values_embed_inline() {
    let ex = code_excerpt("x = 1", Some("model.py"), Some(10), None).unwrap();
    let c = commentary(Phase::Output, &["before ", " after"], vec![ex]).unwrap();
    assert_eq!(c.len(), 3);
    match &c.blocks()[1] {
        ContentBlock::Embedded(Embed::Inline(InlineUnit::Excerpt(ex))) => {
            assert_eq!(ex.origin_label(), Some("model.py"));
            assert_eq!(ex.start_line(), Some(10));
            assert!(!ex.initially_collapsed());
        }
        other => panic!("expected inline excerpt, got {other:?}"),
    }
    assert_eq!(c.excerpts().count(), 1);
}

#[test]
fn code_excerpt_validates_start_line() {
    assert!(code_excerpt("x", None, Some(0), None).is_err());
    let collapsed = code_excerpt("x", Some("a.py"), None, Some(true)).unwrap();
    match collapsed {
        Embed::Inline(InlineUnit::Excerpt(ex)) => assert!(ex.initially_collapsed()),
        Embed::Text(_) => panic!("expected excerpt"),
    }
}

#[test]
fn macro_matches_function_form() {
    let via_macro = crate::commentary!(Phase::Output, "A", 42, "B").unwrap();
    let via_fn = commentary(Phase::Output, &["A", "B"], vec![Embed::from(42)]).unwrap();
    assert_eq!(via_macro, via_fn);

    let only_text = crate::commentary!(Phase::Output, "just text").unwrap();
    assert_eq!(only_text.blocks(), &[ContentBlock::Text("just text".to_string())]);
}

#[test]
fn fluent_builder_keeps_insertion_order() {
    let c = CommentaryBuilder::new(Phase::Transformer)
        .text("one ")
        .value(2.5)
        .text("")
        .excerpt(CodeExcerpt::new("x"))
        .value(true)
        .build();
    let texts: Vec<_> = c.blocks().iter().map(ContentBlock::plain_text).collect();
    assert_eq!(texts, vec!["one ", "2.5", "x", "true"]);
}

#[test]
fn rebuilding_yields_equal_but_independent_documents() {
    let a = crate::commentary!(Phase::Output, "n = ", 3, ".").unwrap();
    let b = crate::commentary!(Phase::Output, "n = ", 3, ".").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.plain_text(), "n = 3.");
}
