use super::*;

#[test]
fn feature_cards_in_order() {
    let titles: Vec<_> = FEATURES.iter().map(|&(title, _)| title).collect();
    assert_eq!(titles, vec!["Interactive", "Visual", "Comprehensive"]);
}

#[test]
fn call_to_action_opens_the_first_chapter() {
    assert_eq!(CHAPTERS[0].path, "/chapter1");
}
