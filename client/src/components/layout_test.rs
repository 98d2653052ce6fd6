use super::*;

#[test]
fn chapters_link_to_numbered_pages() {
    for (i, chapter) in CHAPTERS.iter().enumerate() {
        let n = i + 1;
        assert_eq!(chapter.path, format!("/chapter{n}"));
        assert!(chapter.title.starts_with(&format!("{n}. ")), "{}", chapter.title);
    }
}

#[test]
fn chapter_titles() {
    let titles: Vec<_> = CHAPTERS.iter().map(|c| c.title).collect();
    assert_eq!(
        titles,
        vec![
            "1. Parallel Lines & Angles",
            "2. Congruent Triangles",
            "3. Isosceles & Equilateral",
            "4. Right Triangles",
        ]
    );
}

#[test]
fn footer_text() {
    assert_eq!(APP_NAME, "GeoLearn");
    assert_eq!(APP_TAGLINE, "Interactive Geometry Learning");
    assert_eq!(APP_VERSION, "v1.0.0");
}
