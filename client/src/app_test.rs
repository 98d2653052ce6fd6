use super::*;
use crate::components::layout::CHAPTERS;

#[test]
fn every_sidebar_link_is_routed() {
    for chapter in &CHAPTERS {
        assert!(ROUTE_PATHS.contains(&chapter.path), "{} has no route", chapter.path);
    }
}

#[test]
fn landing_page_is_the_root() {
    assert_eq!(ROUTE_PATHS[0], "/");
    assert_eq!(ROUTE_PATHS.len(), CHAPTERS.len() + 1);
}
