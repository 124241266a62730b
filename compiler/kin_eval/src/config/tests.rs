use super::*;

#[test]
fn defaults() {
    let config = EvalConfig::default();
    assert_eq!(config.max_call_depth, 1000);
    assert_eq!(config.max_nesting_depth, 10_000);
}

#[test]
fn depth_override() {
    let base = EvalConfig::default();
    assert_eq!(base.with_depth_override(Some("64")).max_call_depth, 64);
    assert_eq!(base.with_depth_override(Some(" 12 ")).max_call_depth, 12);
    assert_eq!(base.with_depth_override(Some("0")), base);
    assert_eq!(base.with_depth_override(Some("lots")), base);
    assert_eq!(base.with_depth_override(None), base);
}
