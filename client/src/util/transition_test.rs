use super::*;

#[test]
fn record_accepts_any_debug_value() {
    record("chapter1", "angle", 60.0);
    record("chapter2", "rule", "SSS");
    record("chapter3", "center", Some(2_u8));
}
