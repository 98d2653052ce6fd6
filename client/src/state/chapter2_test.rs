use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn chapter2_defaults() {
    let state = Chapter2State::default();
    assert_eq!(state.section, Chapter2Section::Rules);
    assert_eq!(state.rule, CongruenceRule::Sss);
    assert_eq!(state.invalid_case, InvalidCase::Ssa);
}

#[test]
fn selectors_are_independent() {
    let mut state = Chapter2State::default();
    state.set_rule(CongruenceRule::Aas);
    state.set_section(Chapter2Section::Invalid);
    state.set_invalid_case(InvalidCase::Aaa);
    state.set_section(Chapter2Section::Rules);
    assert_eq!(state.rule, CongruenceRule::Aas);
    assert_eq!(state.invalid_case, InvalidCase::Aaa);
}

// =============================================================
// Rules
// =============================================================

#[test]
fn five_rules_in_display_order() {
    let abbreviations: Vec<_> = CongruenceRule::ALL.iter().map(|r| r.abbreviation()).collect();
    assert_eq!(abbreviations, vec!["SSS", "SAS", "ASA", "AAS", "HL"]);
    assert_eq!(CongruenceRule::Hl.name(), "Hypotenuse-Leg");
}

#[test]
fn every_rule_has_text() {
    for rule in CongruenceRule::ALL {
        assert!(rule.statement().ends_with("congruent."), "{rule:?}");
        assert!(!rule.insight().is_empty());
    }
}

#[test]
fn figure_marks_match_rule_letters() {
    for rule in [CongruenceRule::Sss, CongruenceRule::Sas, CongruenceRule::Asa, CongruenceRule::Aas] {
        let abbreviation = rule.abbreviation();
        let figure = rule.figure();
        let sides = abbreviation.matches('S').count();
        let angles = abbreviation.matches('A').count();
        assert_eq!(figure.sides.len(), sides, "{abbreviation}");
        assert_eq!(figure.angles.len(), angles, "{abbreviation}");
        assert_eq!(sides + angles, rule.part_count());
    }
}

#[test]
fn figure_tables_outlive_the_rule() {
    let sides: Vec<&'static [SideMark]> = CongruenceRule::ALL.iter().map(|rule| rule.figure().sides).collect();
    assert_eq!(sides.iter().map(|s| s.len()).collect::<Vec<_>>(), vec![3, 2, 1, 1, 2]);
    assert_eq!(sides[1], &[side(0, 1), side(0, 2)]);
    assert!(sides.iter().flat_map(|s| s.iter()).all(|m| m.from < 3 && m.to < 3 && m.from != m.to));
}

#[test]
fn sas_angle_is_included_between_its_sides() {
    let figure = CongruenceRule::Sas.figure();
    let angle = figure.angles[0];
    assert!(figure.sides.iter().all(|s| s.from == angle || s.to == angle));
}

#[test]
fn asa_side_joins_its_angles() {
    let figure = CongruenceRule::Asa.figure();
    let s = figure.sides[0];
    assert!(figure.angles.contains(&s.from));
    assert!(figure.angles.contains(&s.to));
}

#[test]
fn aas_side_is_not_between_its_angles() {
    let figure = CongruenceRule::Aas.figure();
    let s = figure.sides[0];
    assert!(!(figure.angles.contains(&s.from) && figure.angles.contains(&s.to)));
}

#[test]
fn sss_sides_are_distinguished_by_dashes() {
    let dashes: Vec<_> = CongruenceRule::Sss.figure().sides.iter().map(|s| s.dash).collect();
    assert_eq!(dashes, vec![None, Some("4"), Some("2")]);
}

#[test]
fn hl_uses_right_triangles_with_hypotenuse_and_leg() {
    let rule = CongruenceRule::Hl;
    let figure = rule.figure();
    assert!(figure.right_triangle);
    assert_eq!(figure.sides.len(), 2);
    assert!(figure.sides[1].secondary);

    let [left, right] = rule.triangles();
    assert_eq!(left.c, Point::new(50.0, 50.0));
    assert_eq!(right.c, Point::new(250.0, 50.0));
    // Right angle at the bottom-left vertex.
    let ab = (left.b.x - left.a.x, left.b.y - left.a.y);
    let ac = (left.c.x - left.a.x, left.c.y - left.a.y);
    assert!((ab.0 * ac.0 + ab.1 * ac.1).abs() < 1e-9);
}

#[test]
fn second_triangle_is_a_translated_copy() {
    for rule in CongruenceRule::ALL {
        let [left, right] = rule.triangles();
        for i in 0..3 {
            let (p, q) = (vertex(&left, i), vertex(&right, i));
            assert_eq!((q.x - p.x, q.y - p.y), (200.0, 0.0));
        }
        assert_eq!(left.side_lengths(), right.side_lengths());
    }
}

// =============================================================
// CPCTC
// =============================================================

#[test]
fn cpctc_lists_corresponding_parts() {
    let sides = corresponding_sides(['A', 'B', 'C'], ['D', 'E', 'F']);
    assert_eq!(sides, vec!["AB ≅ DE", "BC ≅ EF", "AC ≅ DF"]);
    let angles = corresponding_angles(['A', 'B', 'C'], ['D', 'E', 'F']);
    assert_eq!(angles, vec!["∠A ≅ ∠D", "∠B ≅ ∠E", "∠C ≅ ∠F"]);
}

// =============================================================
// Invalid cases
// =============================================================

#[test]
fn invalid_case_labels() {
    assert_eq!(InvalidCase::Ssa.label(), "SSA (Ambiguous)");
    assert_eq!(InvalidCase::Aaa.label(), "AAA (Similar, Not Congruent)");
    for case in InvalidCase::ALL {
        assert!(case.title().contains("Cannot Be Determined"));
    }
}

#[test]
fn ssa_note_points_at_hl() {
    let (heading, body) = InvalidCase::Ssa.note();
    assert_eq!(heading, "Exception: Right Triangles");
    assert!(body.contains("HL"));
}
