//! Chapter 2 page: congruence criteria, CPCTC, and the cases that fail.

use geometry::Point;
use geometry::triangle::Triangle;
use leptos::prelude::*;

use crate::components::concept_card::ConceptCard;
use crate::components::diagram::{Diagram, TickMarks};
use crate::components::page_header::PageHeader;
use crate::components::tab_bar::TabBar;
use crate::state::chapter2::{
    Chapter2Section, Chapter2State, CongruenceRule, InvalidCase, RuleFigure, corresponding_angles,
    corresponding_sides, vertex,
};
use crate::util::color::{ACCENT, AMBER, INK, PRIMARY, SECONDARY};
use crate::util::transition;

const PAGE: &str = "chapter2";
const DANGER: &str = "#EF4444";

#[component]
pub fn Chapter2Page() -> impl IntoView {
    let state = RwSignal::new(Chapter2State::default());
    provide_context(state);

    let section = Memo::new(move |_| state.get().section);
    let on_section = Callback::new(move |next: Chapter2Section| {
        state.update(|s| s.set_section(next));
        transition::record(PAGE, "section", next);
    });

    view! {
        <div class="page">
            <PageHeader
                title="Congruent Triangles"
                intro="Two triangles are congruent if they have the same size and shape. Explore the different criteria that guarantee congruence."
            />
            <TabBar options=&Chapter2Section::ALL active=section label=Chapter2Section::label on_select=on_section/>
            {move || match section.get() {
                Chapter2Section::Rules => view! { <RulesSection/> }.into_any(),
                Chapter2Section::Cpctc => view! { <CpctcSection/> }.into_any(),
                Chapter2Section::Invalid => view! { <InvalidCasesSection/> }.into_any(),
            }}
        </div>
    }
}

// =============================================================================
// CONGRUENCE RULES
// =============================================================================

#[component]
fn RulesSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter2State>>();
    let rule = Memo::new(move |_| state.get().rule);
    let on_rule = Callback::new(move |next: CongruenceRule| {
        state.update(|s| s.set_rule(next));
        transition::record(PAGE, "rule", next);
    });

    view! {
        <TabBar
            options=&CongruenceRule::ALL
            active=rule
            label=CongruenceRule::abbreviation
            on_select=on_rule
            secondary=true
        />
        <div class="section-grid">
            <div class="scene scene--centered">
                <Diagram view_box="0 0 400 200">{move || rule_figure(rule.get())}</Diagram>
            </div>
            <div class="card-column">
                {move || {
                    let rule = rule.get();
                    view! {
                        <div class="concept-card concept-card--feature">
                            <h2 class="concept-card__heading" style=format!("color: {SECONDARY};")>{rule.name()}</h2>
                            <p class="concept-card__lead">{rule.statement()}</p>
                            <div class="concept-card concept-card--info">
                                <h4 class="concept-card__title">"Key Insight"</h4>
                                <p class="concept-card__text">{rule.insight()}</p>
                            </div>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

/// Both triangles of `rule` with its highlighted sides and angles.
fn rule_figure(rule: CongruenceRule) -> impl IntoView {
    let RuleFigure { right_triangle, sides, angles } = rule.figure();
    rule.triangles()
        .into_iter()
        .map(|t| {
            let corner = right_triangle.then(|| {
                let a = t.a;
                format!("M {} {} L {} {} L {} {}", a.x, a.y - 20.0, a.x + 20.0, a.y - 20.0, a.x + 20.0, a.y)
            });
            view! {
                <polygon points=t.points_attr() fill="none" stroke=INK stroke-width="2"/>
                {corner.map(|d| view! { <path d=d fill="none" stroke=INK stroke-width="2"/> })}
                {sides
                    .iter()
                    .map(|mark| {
                        let (from, to) = (vertex(&t, mark.from), vertex(&t, mark.to));
                        let color = if mark.secondary { ACCENT } else { SECONDARY };
                        view! {
                            <line
                                x1=from.x
                                y1=from.y
                                x2=to.x
                                y2=to.y
                                stroke=color
                                stroke-width="4"
                                stroke-dasharray=mark.dash
                            />
                        }
                    })
                    .collect_view()}
                {angles
                    .iter()
                    .map(|&index| {
                        let p = vertex(&t, index);
                        view! { <circle cx=p.x cy=p.y r="15" fill=SECONDARY fill-opacity="0.3"/> }
                    })
                    .collect_view()}
            }
        })
        .collect_view()
}

// =============================================================================
// CPCTC
// =============================================================================

const FIRST_NAMES: [char; 3] = ['A', 'B', 'C'];
const SECOND_NAMES: [char; 3] = ['D', 'E', 'F'];

/// One labelled triangle of the CPCTC figure, with tick marks on its sides.
fn named_triangle(t: Triangle, names: [char; 3], color: &'static str) -> impl IntoView {
    let offsets = [(-10.0, 15.0), (5.0, 15.0), (-5.0, -10.0)];
    view! {
        <polygon points=t.points_attr() fill="none" stroke=color stroke-width="3"/>
        {names
            .iter()
            .zip(offsets)
            .enumerate()
            .map(|(index, (&name, (dx, dy)))| {
                let p = vertex(&t, index);
                view! {
                    <text class="diagram__label diagram__label--bold" x={p.x + dx} y={p.y + dy} fill=color>
                        {name.to_string()}
                    </text>
                }
            })
            .collect_view()}
        <TickMarks from=t.a to=t.c color=color/>
        <TickMarks from=t.b to=t.c color=color/>
        <TickMarks from=t.a to=t.b color=color count=2/>
    }
}

#[component]
fn CpctcSection() -> impl IntoView {
    let first = Triangle::new(Point::new(50.0, 200.0), Point::new(150.0, 200.0), Point::new(100.0, 80.0));
    let second = Triangle::new(first.a.translate(200.0, 0.0), first.b.translate(200.0, 0.0), first.c.translate(200.0, 0.0));
    let arc = |p: Point| format!("M {} {} A 15 15 0 0 0 {} {}", p.x + 15.0, p.y, p.x + 8.0, p.y - 15.0);

    let pairs = |items: Vec<String>| {
        items.into_iter().map(|item| view! { <div class="concept-card__pair">{item}</div> }).collect_view()
    };

    view! {
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 250">
                    {named_triangle(first, FIRST_NAMES, PRIMARY)}
                    {named_triangle(second, SECOND_NAMES, SECONDARY)}
                    <text class="diagram__symbol" x="200" y="140" fill=INK text-anchor="middle">"≅"</text>
                    <path d=arc(first.a) fill="none" stroke=ACCENT stroke-width="2"/>
                    <path d=arc(second.a) fill="none" stroke=ACCENT stroke-width="2"/>
                </Diagram>
            </div>
            <div class="card-column">
                <div class="concept-card concept-card--gradient">
                    <h3 class="concept-card__heading">"CPCTC"</h3>
                    <p class="concept-card__lead">
                        <span class="acronym">"C"</span>"orresponding "
                        <span class="acronym">"P"</span>"arts of "
                        <span class="acronym">"C"</span>"ongruent "
                        <span class="acronym">"T"</span>"riangles are "
                        <span class="acronym">"C"</span>"ongruent"
                    </p>
                </div>
                <ConceptCard title="What It Means" accent=ACCENT>
                    <p class="concept-card__text">
                        "Once you prove two triangles are congruent using any rule (SSS, SAS, ASA, AAS, HL), you can conclude that ALL corresponding parts are congruent."
                    </p>
                    <div class="pair-grid">
                        <div class="pair-grid__column pair-grid__column--primary">
                            <div class="pair-grid__title">"Corresponding Sides"</div>
                            {pairs(corresponding_sides(FIRST_NAMES, SECOND_NAMES))}
                        </div>
                        <div class="pair-grid__column pair-grid__column--secondary">
                            <div class="pair-grid__title">"Corresponding Angles"</div>
                            {pairs(corresponding_angles(FIRST_NAMES, SECOND_NAMES))}
                        </div>
                    </div>
                </ConceptCard>
                <ConceptCard title="Important Note" accent=AMBER tone="note">
                    <p class="concept-card__text">
                        "Matching corresponding parts correctly is essential! The order of vertices in the congruence statement (△ABC ≅ △DEF) tells you which parts correspond."
                    </p>
                </ConceptCard>
            </div>
        </div>
    }
}

// =============================================================================
// INVALID CASES
// =============================================================================

fn danger_color(_: InvalidCase) -> &'static str {
    DANGER
}

#[component]
fn InvalidCasesSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter2State>>();
    let case = Memo::new(move |_| state.get().invalid_case);
    let on_case = Callback::new(move |next: InvalidCase| {
        state.update(|s| s.set_invalid_case(next));
        transition::record(PAGE, "invalid case", next);
    });

    view! {
        <TabBar
            options=&InvalidCase::ALL
            active=case
            label=InvalidCase::label
            on_select=on_case
            color=danger_color
            secondary=true
        />
        <div class="section-grid">
            <div class="scene scene--danger">
                <Diagram view_box="0 0 400 250">
                    {move || {
                        let case = case.get();
                        view! {
                            <text class="diagram__label" x="200" y="25" fill=INK text-anchor="middle">
                                {case.caption()}
                            </text>
                            {match case {
                                InvalidCase::Ssa => ssa_figure().into_any(),
                                InvalidCase::Aaa => aaa_figure().into_any(),
                            }}
                        }
                    }}
                </Diagram>
            </div>
            <div class="card-column">{move || invalid_cards(case.get())}</div>
        </div>
    }
}

/// Two different triangles sharing two sides and a non-included angle.
fn ssa_figure() -> impl IntoView {
    let shapes = [(0.0, 100.0), (200.0, 60.0)];
    view! {
        {shapes
            .into_iter()
            .map(|(dx, apex_x)| {
                let t = Triangle::new(Point::new(30.0, 170.0), Point::new(150.0, 170.0), Point::new(apex_x, 70.0));
                let t = Triangle::new(t.a.translate(dx, 30.0), t.b.translate(dx, 30.0), t.c.translate(dx, 30.0));
                view! {
                    <polygon points=t.points_attr() fill="none" stroke=PRIMARY stroke-width="2"/>
                    <line x1=t.a.x y1=t.a.y x2=t.b.x y2=t.b.y stroke=SECONDARY stroke-width="4"/>
                    <line x1=t.a.x y1=t.a.y x2=t.c.x y2=t.c.y stroke=SECONDARY stroke-width="4"/>
                    <circle cx=t.b.x cy=t.b.y r="12" fill=ACCENT fill-opacity="0.3" stroke=ACCENT stroke-width="2"/>
                }
            })
            .collect_view()}
        <text class="diagram__symbol" x="200" y="140" fill=DANGER text-anchor="middle">"≢"</text>
    }
}

/// A large and a small triangle with the same three angles.
fn aaa_figure() -> impl IntoView {
    let large = Triangle::new(Point::new(50.0, 200.0), Point::new(200.0, 200.0), Point::new(125.0, 60.0));
    let small = Triangle::new(Point::new(270.0, 200.0), Point::new(345.0, 200.0), Point::new(307.0, 130.0));
    let colors = [ACCENT, SECONDARY, AMBER];
    let markers = move |t: Triangle, r: f64| {
        colors
            .iter()
            .enumerate()
            .map(|(index, &color)| {
                let p = vertex(&t, index);
                view! { <circle cx=p.x cy=p.y r=r fill=color fill-opacity="0.3" stroke=color stroke-width="2"/> }
            })
            .collect_view()
    };
    view! {
        <polygon points=large.points_attr() fill="none" stroke=PRIMARY stroke-width="2"/>
        {markers(large, 15.0)}
        <polygon points=small.points_attr() fill="none" stroke=PRIMARY stroke-width="2"/>
        {markers(small, 10.0)}
        <text class="diagram__symbol" x="235" y="160" fill=AMBER text-anchor="middle">"~"</text>
        <text class="diagram__label" x="235" y="180" fill="gray" text-anchor="middle">"(similar)"</text>
    }
}

fn invalid_cards(case: InvalidCase) -> impl IntoView {
    let (follow_heading, follow_body) = case.follow_up();
    let (note_heading, note_body) = case.note();
    let comparison = (case == InvalidCase::Aaa).then(|| {
        view! {
            <div class="pair-grid">
                <div class="pair-grid__column pair-grid__column--amber">
                    <div class="pair-grid__title">"Similar (~)"</div>
                    <div class="concept-card__text">"Same shape"</div>
                </div>
                <div class="pair-grid__column pair-grid__column--primary">
                    <div class="pair-grid__title">"Congruent (≅)"</div>
                    <div class="concept-card__text">"Same shape & size"</div>
                </div>
            </div>
        }
    });
    let note_tone = if case == InvalidCase::Ssa { "success" } else { "plain" };

    view! {
        <div class="concept-card concept-card--danger">
            <h3 class="concept-card__title" style=format!("color: {DANGER};")>{case.title()}</h3>
            <p class="concept-card__text">{case.explanation()}</p>
        </div>
        <div class="concept-card">
            <h4 class="concept-card__title" style=format!("color: {AMBER};")>{follow_heading}</h4>
            <p class="concept-card__text">{follow_body}</p>
            {comparison}
        </div>
        <div class=format!("concept-card concept-card--{note_tone}")>
            <h4 class="concept-card__title">{note_heading}</h4>
            <p class="concept-card__text">{note_body}</p>
        </div>
    }
}
