use super::*;

#[test]
fn whole_rounds_half_away_from_zero() {
    assert_eq!(whole(249.6), "250");
    assert_eq!(whole(12.5), "13");
    assert_eq!(whole(-0.2), "0");
}

#[test]
fn tenths_keeps_one_decimal() {
    assert_eq!(tenths(36.869_897_645), "36.9");
    assert_eq!(tenths(60.0), "60.0");
}

#[test]
fn degree_labels() {
    assert_eq!(degrees(60.0), "60°");
    assert_eq!(degrees_tenths(53.130_102), "53.1°");
}

#[test]
fn squared_labels() {
    assert_eq!(squared(150.0), "150²");
    assert_eq!(squared(249.99), "250²");
}
