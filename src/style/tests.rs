use super::{CaretStyle, should_render_block_caret, should_render_underline_caret};

#[test]
fn default_style_is_block() {
    assert_eq!(CaretStyle::default(), CaretStyle::Block);
}

#[test]
fn block_renders_block_only() {
    assert!(CaretStyle::Block.renders_block());
    assert!(!CaretStyle::Block.renders_underline());
}

#[test]
fn underline_renders_underline_only() {
    assert!(!CaretStyle::Underline.renders_block());
    assert!(CaretStyle::Underline.renders_underline());
}

#[test]
fn line_renders_neither() {
    assert!(!CaretStyle::Line.renders_block());
    assert!(!CaretStyle::Line.renders_underline());
}

#[test]
fn at_most_one_treatment_per_style() {
    let styles = [CaretStyle::Block, CaretStyle::Underline, CaretStyle::Line];
    for style in styles {
        assert!(
            !(style.renders_block() && style.renders_underline()),
            "{style:?} renders both treatments"
        );
    }
}

#[test]
fn raw_round_trips() {
    let styles = [CaretStyle::Block, CaretStyle::Underline, CaretStyle::Line];
    for style in styles {
        assert_eq!(CaretStyle::from_raw(style.raw()), Ok(style));
    }
}

#[test]
fn raw_predicates_match_typed_predicates() {
    for raw in 0..3 {
        let style = CaretStyle::from_raw(raw).unwrap();
        assert_eq!(should_render_block_caret(raw), style.renders_block());
        assert_eq!(should_render_underline_caret(raw), style.renders_underline());
    }
}

#[test]
fn out_of_range_raw_is_rejected() {
    let err = CaretStyle::from_raw(99).unwrap_err();
    assert_eq!(err.enumeration, "CaretStyle");
    assert_eq!(err.value, 99);
}

#[test]
fn out_of_range_raw_renders_neither() {
    assert!(!should_render_block_caret(99));
    assert!(!should_render_underline_caret(99));
}

#[test]
fn predicates_are_stable_across_calls() {
    for raw in 0..3 {
        assert_eq!(should_render_block_caret(raw), should_render_block_caret(raw));
        assert_eq!(
            should_render_underline_caret(raw),
            should_render_underline_caret(raw)
        );
    }
}
