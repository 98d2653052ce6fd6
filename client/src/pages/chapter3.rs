//! Chapter 3 page: isosceles and equilateral triangles.

use geometry::Point;
use geometry::angle::heading_deg;
use geometry::arc::{ArcGeometry, right_angle_marker};
use geometry::centers::{CENTERS_TRIANGLE, SPECIAL_LINES_TRIANGLE};
use geometry::isosceles::{BASE_CENTER, TriangleKind};
use geometry::triangle::Triangle;
use leptos::prelude::*;

use crate::components::angle_arc::AngleArc;
use crate::components::concept_card::{ConceptCard, Formula};
use crate::components::diagram::{Controls, Diagram, TickMarks};
use crate::components::page_header::PageHeader;
use crate::components::range_slider::RangeSlider;
use crate::components::tab_bar::TabBar;
use crate::state::chapter3::{
    BASE_RANGE, Chapter3Section, Chapter3State, HEIGHT_RANGE, SPECIAL_LINE_CONVERSES, SpecialLine,
    TriangleCenterKind, inscribed_radius,
};
use crate::util::color::{ACCENT, AMBER, CYAN, INK, PRIMARY, SECONDARY, tinted_card_style, with_alpha};
use crate::util::format::{degrees_tenths, whole};
use crate::util::transition;

const PAGE: &str = "chapter3";

#[component]
pub fn Chapter3Page() -> impl IntoView {
    let state = RwSignal::new(Chapter3State::default());
    provide_context(state);

    let section = Memo::new(move |_| state.get().section);
    let on_section = Callback::new(move |next: Chapter3Section| {
        state.update(|s| s.set_section(next));
        transition::record(PAGE, "section", next);
    });

    view! {
        <div class="page">
            <PageHeader
                title="Isosceles & Equilateral Triangles"
                intro="An isosceles triangle has at least two equal sides. An equilateral triangle has all three sides equal."
            />
            <TabBar options=&Chapter3Section::ALL active=section label=Chapter3Section::label on_select=on_section/>
            {move || match section.get() {
                Chapter3Section::Basics => view! { <DefinitionsSection/> }.into_any(),
                Chapter3Section::Theorems => view! { <BaseAngleTheoremsSection/> }.into_any(),
                Chapter3Section::Special => view! { <SpecialLinesSection/> }.into_any(),
                Chapter3Section::Centers => view! { <TriangleCentersSection/> }.into_any(),
            }}
        </div>
    }
}

/// Vertex labels `A`, `B`, `C` around an apex-up triangle.
fn vertex_labels(t: Triangle) -> impl IntoView {
    view! {
        <text class="diagram__label" x=t.a.x y={t.a.y - 15.0} fill=INK text-anchor="middle">"A"</text>
        <text class="diagram__label" x={t.b.x - 15.0} y={t.b.y + 15.0} fill=INK text-anchor="middle">"B"</text>
        <text class="diagram__label" x={t.c.x + 15.0} y={t.c.y + 15.0} fill=INK text-anchor="middle">"C"</text>
    }
}

/// Wedges for the two base angles of an apex-up triangle.
fn base_angle_arcs(t: Triangle, radius: f64) -> (ArcGeometry, ArcGeometry) {
    (
        ArcGeometry::new(t.b, radius, heading_deg(t.b, t.a), 0.0),
        ArcGeometry::new(t.c, radius, 180.0, heading_deg(t.c, t.a) + 360.0),
    )
}

// =============================================================================
// DEFINITIONS
// =============================================================================

const KEY_DEFINITIONS: [(&str, &str); 4] = [
    ("Legs:", "The two equal sides of an isosceles triangle"),
    ("Base:", "The third (potentially different) side"),
    ("Vertex Angle:", "The angle between the two equal sides"),
    ("Base Angles:", "The two angles at the endpoints of the base"),
];

#[component]
fn DefinitionsSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter3State>>();
    let height = Signal::derive(move || state.get().isosceles.height);
    let base = Signal::derive(move || state.get().isosceles.base);
    let on_height = Callback::new(move |value: f64| {
        state.update(|s| s.isosceles.set_height(value));
        transition::record(PAGE, "height", value);
    });
    let on_base = Callback::new(move |value: f64| {
        state.update(|s| s.isosceles.set_base(value));
        transition::record(PAGE, "base", value);
    });
    let triangle = Memo::new(move |_| state.get().isosceles.triangle());

    let scene = move || {
        let t = triangle.get();
        let (apex, left, right) = (t.apex(), t.left_corner(), t.right_corner());
        let leg = whole(t.leg());
        let (base_angle, vertex_angle) = t.displayed_angles();
        let base_angle = degrees_tenths(base_angle);
        let leg_y = BASE_CENTER.y - t.height / 2.0;
        view! {
            <polygon
                class="diagram__shape"
                points=t.points_attr()
                fill=with_alpha(SECONDARY, 0.2)
                stroke=SECONDARY
                stroke-width="3"
            />
            <line
                x1=apex.x
                y1=apex.y
                x2=BASE_CENTER.x
                y2=BASE_CENTER.y
                stroke=INK
                stroke-dasharray="4"
                stroke-opacity="0.5"
            />
            <text class="diagram__label" x=apex.x y={apex.y - 10.0} fill=INK text-anchor="middle">
                {degrees_tenths(vertex_angle)}
            </text>
            <text class="diagram__label" x={left.x - 10.0} y={left.y + 20.0} fill=INK text-anchor="middle">
                {base_angle.clone()}
            </text>
            <text class="diagram__label" x={right.x + 10.0} y={right.y + 20.0} fill=INK text-anchor="middle">
                {base_angle}
            </text>
            <text class="diagram__label" x={BASE_CENTER.x - t.base / 4.0 - 20.0} y=leg_y fill=SECONDARY text-anchor="middle">
                {leg.clone()}
            </text>
            <text class="diagram__label" x={BASE_CENTER.x + t.base / 4.0 + 20.0} y=leg_y fill=SECONDARY text-anchor="middle">
                {leg}
            </text>
            <text class="diagram__label" x=BASE_CENTER.x y={BASE_CENTER.y + 20.0} fill=SECONDARY text-anchor="middle">
                {whole(t.base)}
            </text>
        }
    };

    let classification = move || {
        let kind = triangle.get().kind();
        let class = match kind {
            TriangleKind::Equilateral => "concept-card concept-card--success",
            TriangleKind::Isosceles => "concept-card",
        };
        view! {
            <div class=class>
                <h3 class="concept-card__title">{kind.title()}</h3>
                <p class="concept-card__text">{kind.description()}</p>
            </div>
        }
    };

    view! {
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 400">{scene}</Diagram>
                <Controls>
                    <RangeSlider label="Height" range=HEIGHT_RANGE value=height on_change=on_height/>
                    <RangeSlider label="Base" range=BASE_RANGE value=base on_change=on_base/>
                </Controls>
            </div>
            <div class="card-column">
                {classification}
                <ConceptCard title="Key Definitions" accent="#818CF8">
                    <ul class="definition-list">
                        {KEY_DEFINITIONS
                            .iter()
                            .map(|&(term, meaning)| {
                                view! {
                                    <li class="definition-list__item">
                                        <span class="definition-list__term">{term}</span>
                                        <span>{meaning}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </ConceptCard>
            </div>
        </div>
    }
}

// =============================================================================
// BASE ANGLE THEOREMS
// =============================================================================

#[component]
fn BaseAngleTheoremsSection() -> impl IntoView {
    let t = SPECIAL_LINES_TRIANGLE;
    let foot = t.b.midpoint(t.c);
    let (left_arc, right_arc) = base_angle_arcs(t, 20.0);
    let (left_label, right_label) = (left_arc.label_position(), right_arc.label_position());

    view! {
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 350">
                    <polygon points=t.points_attr() fill="none" stroke=SECONDARY stroke-width="3"/>
                    <TickMarks from=t.a to=t.b color=SECONDARY count=2/>
                    <TickMarks from=t.a to=t.c color=SECONDARY count=2/>
                    <line
                        x1=t.a.x
                        y1=t.a.y
                        x2=foot.x
                        y2=foot.y
                        stroke=PRIMARY
                        stroke-width="2"
                        stroke-dasharray="5,5"
                    />
                    <path d=right_angle_marker(foot, 15.0, 1.0, -1.0) fill="none" stroke=INK stroke-width="2"/>
                    <AngleArc arc=left_arc color=ACCENT stroke_width=2/>
                    <AngleArc arc=right_arc color=ACCENT stroke_width=2/>
                    {vertex_labels(t)}
                    <text class="diagram__label" x=foot.x y={foot.y + 20.0} fill=PRIMARY text-anchor="middle">"D"</text>
                    <text class="diagram__label" x={left_label.x + 10.0} y={left_label.y - 10.0} fill=ACCENT>"β"</text>
                    <text class="diagram__label" x={right_label.x - 15.0} y={right_label.y - 10.0} fill=ACCENT>"β"</text>
                </Diagram>
            </div>
            <div class="card-column">
                <ConceptCard title="Base Angles Theorem" accent="#F472B6" tone="gradient">
                    <p class="concept-card__lead">
                        "If two sides of a triangle are congruent, then the angles opposite those sides are congruent."
                    </p>
                    <Formula>"If AB ≅ AC, then ∠B ≅ ∠C"</Formula>
                </ConceptCard>
                <ConceptCard title="Converse Theorem" accent="#34D399">
                    <p class="concept-card__text">
                        "If two angles of a triangle are congruent, then the sides opposite those angles are congruent (the triangle is isosceles)."
                    </p>
                    <Formula>"If ∠B ≅ ∠C, then AB ≅ AC"</Formula>
                </ConceptCard>
                <ConceptCard title="Equilateral Triangle Corollary" accent=AMBER>
                    <p class="concept-card__text">"All angles in an equilateral triangle measure exactly 60°."</p>
                    <div class="theorem-box theorem-box--amber">
                        <Formula>"∠A = ∠B = ∠C = 60°"</Formula>
                    </div>
                </ConceptCard>
                <ConceptCard title="Special Case: 45-45-90 Triangle" accent="#818CF8" tone="info">
                    <p class="concept-card__text">
                        "A right isosceles triangle has angles 45°, 45°, and 90°. The legs are equal, and the hypotenuse = leg × √2."
                    </p>
                </ConceptCard>
            </div>
        </div>
    }
}

// =============================================================================
// SPECIAL LINES
// =============================================================================

/// The marks that show what makes `line` special: a right angle, equal halves, or equal angles.
fn special_line_marks(line: SpecialLine) -> impl IntoView {
    let t = SPECIAL_LINES_TRIANGLE;
    let foot = line.apex_segment().foot;
    match line {
        SpecialLine::Altitude => view! {
            <path d=right_angle_marker(foot, 15.0, 1.0, -1.0) fill="none" stroke=ACCENT stroke-width="2"/>
            <text class="diagram__label diagram__label--small" x={foot.x + 30.0} y={foot.y - 10.0} fill=ACCENT>
                "90°"
            </text>
        }
        .into_any(),
        SpecialLine::Median => view! {
            <TickMarks from=t.b to=foot color=ACCENT/>
            <TickMarks from=foot to=t.c color=ACCENT/>
            <text class="diagram__label diagram__label--small" x={foot.x - 60.0} y={foot.y + 20.0} fill=ACCENT>"BD"</text>
            <text class="diagram__label diagram__label--small" x={foot.x + 50.0} y={foot.y + 20.0} fill=ACCENT>"DC"</text>
        }
        .into_any(),
        SpecialLine::Bisector => {
            let toward_foot = heading_deg(t.a, foot);
            view! {
                <AngleArc arc=ArcGeometry::new(t.a, 20.0, toward_foot, heading_deg(t.a, t.b)) color=ACCENT stroke_width=2/>
                <AngleArc arc=ArcGeometry::new(t.a, 20.0, heading_deg(t.a, t.c), toward_foot) color=ACCENT stroke_width=2/>
            }
            .into_any()
        }
    }
}

#[component]
fn SpecialLinesSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter3State>>();
    let line = Memo::new(move |_| state.get().special_line);
    let on_line = Callback::new(move |next: SpecialLine| {
        state.update(|s| s.set_special_line(next));
        transition::record(PAGE, "special line", next);
    });
    let t = SPECIAL_LINES_TRIANGLE;

    let scene = move || {
        let line = line.get();
        let segment = line.apex_segment();
        let (from, foot) = (segment.vertex, segment.foot);
        view! {
            <polygon points=t.points_attr() fill="none" stroke=INK stroke-width="2"/>
            <line x1=from.x y1=from.y x2=foot.x y2=foot.y stroke=SECONDARY stroke-width="3"/>
            {vertex_labels(t)}
            <text class="diagram__label diagram__label--small" x=foot.x y={foot.y + 20.0} fill=SECONDARY text-anchor="middle">
                "D"
            </text>
            {special_line_marks(line)}
            <TickMarks from=t.a to=t.b color=PRIMARY count=2/>
            <TickMarks from=t.a to=t.c color=PRIMARY count=2/>
        }
    };

    view! {
        <TabBar options=&SpecialLine::ALL active=line label=SpecialLine::label on_select=on_line secondary=true/>
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 350">{scene}</Diagram>
            </div>
            <div class="card-column">
                {move || {
                    let line = line.get();
                    view! {
                        <div class="concept-card">
                            <h3 class="concept-card__title" style=format!("color: {SECONDARY};")>{line.title()}</h3>
                            <p class="concept-card__text">{line.description()}</p>
                        </div>
                        <div class="concept-card concept-card--gradient">
                            <h3 class="concept-card__title" style=format!("color: {ACCENT};")>"Key Theorem"</h3>
                            <p class="concept-card__text">
                                "In an isosceles triangle, the "
                                <strong style=format!("color: {SECONDARY};")>{line.label().to_lowercase()}</strong>
                                " to the base is also the "
                                <strong style=format!("color: {CYAN};")>{line.also_is()}</strong>
                                "."
                            </p>
                            <Formula>"All three special lines from the vertex angle to the base coincide!"</Formula>
                        </div>
                    }
                }}
                <ConceptCard title="Converse Theorems" accent=AMBER>
                    <ul class="bullet-list">
                        {SPECIAL_LINE_CONVERSES
                            .iter()
                            .map(|&converse| view! { <li class="bullet-list__item">{converse}</li> })
                            .collect_view()}
                    </ul>
                </ConceptCard>
            </div>
        </div>
    }
}

// =============================================================================
// TRIANGLE CENTERS
// =============================================================================

fn center_scene(center: TriangleCenterKind) -> impl IntoView {
    let t = CENTERS_TRIANGLE;
    let color = center.color();
    let segments = center.segments();
    let extras = match center {
        TriangleCenterKind::Incenter => center
            .point()
            .map(|p| {
                view! {
                    <circle cx=p.x cy=p.y r=inscribed_radius() fill="none" stroke=color stroke-width="1" stroke-dasharray="4,4"/>
                }
            })
            .into_any(),
        TriangleCenterKind::Orthocenter => {
            let foot = segments[0].foot;
            view! {
                <rect x={foot.x - 5.0} y={foot.y - 15.0} width="10" height="10" fill="none" stroke=color stroke-width="1"/>
            }
            .into_any()
        }
        TriangleCenterKind::Centroid => segments
            .iter()
            .map(|s| view! { <circle cx=s.foot.x cy=s.foot.y r="4" fill=color fill-opacity="0.5"/> })
            .collect_view()
            .into_any(),
    };
    let marker = center.point().map(|p: Point| view! { <circle cx=p.x cy=p.y r="6" fill=color/> });

    view! {
        <polygon points=t.points_attr() fill="none" stroke=INK stroke-width="2"/>
        {segments
            .iter()
            .map(|s| {
                view! {
                    <line
                        x1=s.vertex.x
                        y1=s.vertex.y
                        x2=s.foot.x
                        y2=s.foot.y
                        stroke=color
                        stroke-width="2"
                        stroke-opacity="0.5"
                    />
                }
            })
            .collect_view()}
        {extras}
        {marker}
        {vertex_labels(t)}
    }
}

#[component]
fn TriangleCentersSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter3State>>();
    let center = Memo::new(move |_| state.get().center);
    let on_center = Callback::new(move |next: TriangleCenterKind| {
        state.update(|s| s.set_center(next));
        transition::record(PAGE, "center", next);
    });

    view! {
        <TabBar
            options=&TriangleCenterKind::ALL
            active=center
            label=TriangleCenterKind::name
            on_select=on_center
            color=TriangleCenterKind::color
            secondary=true
        />
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 350">{move || center_scene(center.get())}</Diagram>
            </div>
            <div class="card-column">
                {move || {
                    let center = center.get();
                    view! {
                        <div class="concept-card concept-card--tinted" style=tinted_card_style(center.color())>
                            <h3 class="concept-card__heading" style=format!("color: {};", center.color())>
                                {center.name()}
                            </h3>
                            <p class="concept-card__lead">{center.definition()}</p>
                        </div>
                        <ConceptCard title="Key Property" accent=AMBER>
                            <p class="concept-card__text">{center.property()}</p>
                        </ConceptCard>
                    }
                }}
                <ConceptCard title="All Three Centers">
                    <div class="summary-grid">
                        {TriangleCenterKind::ALL
                            .iter()
                            .map(|&kind| {
                                view! {
                                    <div
                                        class="summary-grid__cell"
                                        style=format!("background-color: {};", with_alpha(kind.color(), 0.125))
                                    >
                                        <div class="summary-grid__title" style=format!("color: {};", kind.color())>
                                            {kind.name()}
                                        </div>
                                        <div class="summary-grid__text">{kind.summary()}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </ConceptCard>
                <ConceptCard title="In Equilateral Triangles" accent=CYAN tone="info">
                    <p class="concept-card__text">
                        "All three centers (incenter, orthocenter, and centroid) coincide at the same point!"
                    </p>
                </ConceptCard>
            </div>
        </div>
    }
}
