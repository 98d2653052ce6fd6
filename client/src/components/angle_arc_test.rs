use super::*;

#[test]
fn no_focus_draws_normally() {
    let emphasis = ArcEmphasis::from_highlight(None);
    assert_eq!(emphasis, ArcEmphasis::Normal);
    assert!((emphasis.fill_opacity() - 0.3).abs() < f64::EPSILON);
    assert_eq!(emphasis.filter("#10B981"), None);
}

#[test]
fn highlighted_arcs_glow() {
    let emphasis = ArcEmphasis::from_highlight(Some(Highlight::Highlighted));
    assert!((emphasis.fill_opacity() - 0.7).abs() < f64::EPSILON);
    assert_eq!(emphasis.stroke_width(), 2);
    assert_eq!(emphasis.filter("#10B981").as_deref(), Some("url(#glow-10B981)"));
    assert_eq!(emphasis.label_color(), "white");
}

#[test]
fn dimmed_arcs_fade() {
    let emphasis = ArcEmphasis::from_highlight(Some(Highlight::Dimmed));
    assert!((emphasis.fill_opacity() - 0.1).abs() < f64::EPSILON);
    assert!((emphasis.group_opacity() - 0.3).abs() < f64::EPSILON);
    assert_eq!(emphasis.label_color(), "#666");
    assert_eq!(emphasis.filter("#4F46E5"), None);
}
