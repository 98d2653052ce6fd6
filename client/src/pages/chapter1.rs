//! Chapter 1 page: parallel lines, the triangle angle sum, exterior angles.

use geometry::transversal::{ACUTE_COLOR, AngleRelation, LOWER_LINE_Y, OBTUSE_COLOR, UPPER_LINE_Y};
use leptos::prelude::*;

use crate::components::angle_arc::{AngleArc, ArcEmphasis, GlowFilters};
use crate::components::concept_card::{ConceptCard, Formula};
use crate::components::diagram::{Controls, Diagram};
use crate::components::invalid_notice::InvalidNotice;
use crate::components::page_header::PageHeader;
use crate::components::range_slider::RangeSlider;
use crate::components::tab_bar::TabBar;
use crate::state::chapter1::{
    Chapter1Section, Chapter1State, EXTERIOR_RANGE, TRANSVERSAL_RANGE, TRIANGLE_SUM_RANGE,
};
use crate::util::color::{ACCENT, AMBER, INK, PRIMARY, SECONDARY};
use crate::util::format::degrees;
use crate::util::transition;

const PAGE: &str = "chapter1";
const GLOW_COLORS: [&str; 3] = [ACUTE_COLOR, OBTUSE_COLOR, SECONDARY];

#[component]
pub fn Chapter1Page() -> impl IntoView {
    let state = RwSignal::new(Chapter1State::default());
    provide_context(state);

    let section = Memo::new(move |_| state.get().section);
    let on_section = Callback::new(move |next: Chapter1Section| {
        state.update(|s| s.set_section(next));
        transition::record(PAGE, "section", next);
    });

    view! {
        <div class="page">
            <PageHeader
                title="Parallel Lines & Angles in a Triangle"
                intro="Explore angle relationships formed by parallel lines and transversals, and fundamental triangle angle properties."
            />
            <TabBar options=&Chapter1Section::ALL active=section label=Chapter1Section::label on_select=on_section/>
            {move || match section.get() {
                Chapter1Section::Parallel => view! { <ParallelLinesSection/> }.into_any(),
                Chapter1Section::TriangleSum => view! { <TriangleSumSection/> }.into_any(),
                Chapter1Section::Exterior => view! { <ExteriorAngleSection/> }.into_any(),
            }}
        </div>
    }
}

// =============================================================================
// PARALLEL LINES
// =============================================================================

fn relation_color(relation: AngleRelation) -> &'static str {
    match relation {
        AngleRelation::Corresponding => "#818CF8",
        AngleRelation::AlternateInterior => "#F472B6",
        AngleRelation::AlternateExterior => "#FBBF24",
        AngleRelation::SameSideInterior => "#34D399",
        AngleRelation::SameSideExterior => "#22D3EE",
    }
}

#[component]
fn ParallelLinesSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter1State>>();
    let angle = Signal::derive(move || state.get().parallel.angle);
    let on_angle = Callback::new(move |value: f64| {
        state.update(|s| s.parallel.set_angle(value));
        transition::record(PAGE, "transversal angle", value);
    });

    let scene = move || {
        let parallel = state.get().parallel;
        let diagram = parallel.diagram();
        let (start, end) = (diagram.transversal_start, diagram.transversal_end);
        view! {
            <line x1="0" y1=UPPER_LINE_Y x2="400" y2=UPPER_LINE_Y stroke=INK stroke-width="2"/>
            <line x1="0" y1=LOWER_LINE_Y x2="400" y2=LOWER_LINE_Y stroke=INK stroke-width="2"/>
            <line x1=start.x y1=start.y x2=end.x y2=end.y stroke=SECONDARY stroke-width="3"/>
            {diagram
                .markers
                .into_iter()
                .map(|marker| {
                    view! {
                        <AngleArc
                            arc=marker.arc
                            color=marker.color
                            emphasis=ArcEmphasis::from_highlight(parallel.highlight(marker.label))
                            label=marker.label.to_string()
                        />
                    }
                })
                .collect_view()}
        }
    };

    view! {
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 400">
                    <GlowFilters colors=&GLOW_COLORS/>
                    {scene}
                </Diagram>
                <Controls>
                    <RangeSlider
                        label="Transversal Angle"
                        range=TRANSVERSAL_RANGE
                        value=angle
                        on_change=on_angle
                        unit="°"
                    />
                </Controls>
            </div>
            <div class="card-column card-column--scroll">
                {AngleRelation::ALL.iter().map(|&relation| view! { <RelationCard relation/> }).collect_view()}
            </div>
        </div>
    }
}

/// Hovering a card focuses its relation on the diagram.
#[component]
fn RelationCard(relation: AngleRelation) -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter1State>>();
    let focused = move || state.get().parallel.focus == Some(relation);
    let set_focus = move |focus: Option<AngleRelation>| {
        state.update(|s| s.parallel.set_focus(focus));
        transition::record(PAGE, "focus", focus);
    };

    view! {
        <div
            class="concept-card concept-card--hoverable"
            class:concept-card--focused=focused
            on:mouseenter=move |_| set_focus(Some(relation))
            on:mouseleave=move |_| set_focus(None)
        >
            <h3 class="concept-card__title" style=format!("color: {};", relation_color(relation))>
                {relation.title()}
            </h3>
            <p class="concept-card__text">{relation.description()}</p>
            <div class="concept-card__pairs">
                {relation
                    .pair_statements()
                    .into_iter()
                    .map(|pair| view! { <span class="concept-card__pair">{pair}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

// =============================================================================
// TRIANGLE ANGLE SUM
// =============================================================================

#[component]
fn TriangleSumSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter1State>>();
    let alpha = Signal::derive(move || state.get().triangle_sum.alpha);
    let beta = Signal::derive(move || state.get().triangle_sum.beta);
    let on_alpha = Callback::new(move |value: f64| {
        state.update(|s| s.triangle_sum.set_alpha(value));
        transition::record(PAGE, "triangle α", value);
    });
    let on_beta = Callback::new(move |value: f64| {
        state.update(|s| s.triangle_sum.set_beta(value));
        transition::record(PAGE, "triangle β", value);
    });

    let scene = move || {
        let sum = state.get().triangle_sum;
        match sum.scene() {
            Ok(scene) => {
                let t = scene.triangle;
                view! {
                    <polygon points=t.points_attr() fill="none" stroke=SECONDARY stroke-width="3"/>
                    <AngleArc arc=scene.alpha_arc color=PRIMARY stroke_width=2/>
                    <AngleArc arc=scene.beta_arc color=ACCENT stroke_width=2/>
                    <text class="diagram__label diagram__label--bold" x={t.a.x + 35.0} y={t.a.y - 10.0} fill=PRIMARY>
                        {format!("α={}", degrees(sum.alpha))}
                    </text>
                    <text class="diagram__label diagram__label--bold" x={t.b.x - 55.0} y={t.b.y - 10.0} fill=ACCENT>
                        {format!("β={}", degrees(sum.beta))}
                    </text>
                    <text class="diagram__label diagram__label--bold" x={t.c.x - 5.0} y={t.c.y - 15.0} fill=SECONDARY>
                        {format!("γ={}", degrees(sum.gamma()))}
                    </text>
                }
                    .into_any()
            }
            Err(_) => view! { <InvalidNotice x=200.0 y=125.0/> }.into_any(),
        }
    };

    let readout = move || {
        let sum = state.get().triangle_sum;
        format!(
            "{} + {} + {} = {}",
            degrees(sum.alpha),
            degrees(sum.beta),
            degrees(sum.gamma()),
            degrees(sum.display_sum()),
        )
    };

    view! {
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 250">{scene}</Diagram>
                <Controls>
                    <RangeSlider label="Angle α" range=TRIANGLE_SUM_RANGE value=alpha on_change=on_alpha unit="°"/>
                    <RangeSlider label="Angle β" range=TRIANGLE_SUM_RANGE value=beta on_change=on_beta unit="°"/>
                </Controls>
            </div>
            <div class="card-column">
                <ConceptCard title="Triangle Angle Sum Theorem" accent="#818CF8">
                    <p class="concept-card__text">
                        "The sum of the measures of the interior angles of a triangle is always 180°."
                    </p>
                    <div class="theorem-box">
                        <Formula>
                            <span style=format!("color: {PRIMARY};")>"α"</span>
                            " + "
                            <span style=format!("color: {ACCENT};")>"β"</span>
                            " + "
                            <span style=format!("color: {SECONDARY};")>"γ"</span>
                            " = 180°"
                        </Formula>
                        <div class="theorem-box__readout">{readout}</div>
                    </div>
                </ConceptCard>
                <ConceptCard title="Why It Works" accent="#F472B6">
                    <p class="concept-card__text">
                        "Draw a line through one vertex parallel to the opposite side. The three angles at that vertex form a straight line (180°), and by alternate interior angles, two of them equal the base angles of the triangle."
                    </p>
                </ConceptCard>
            </div>
        </div>
    }
}

// =============================================================================
// EXTERIOR ANGLE
// =============================================================================

#[component]
fn ExteriorAngleSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter1State>>();
    let alpha = Signal::derive(move || state.get().exterior.alpha);
    let beta = Signal::derive(move || state.get().exterior.beta);
    let on_alpha = Callback::new(move |value: f64| {
        state.update(|s| s.exterior.set_alpha(value));
        transition::record(PAGE, "remote α", value);
    });
    let on_beta = Callback::new(move |value: f64| {
        state.update(|s| s.exterior.set_beta(value));
        transition::record(PAGE, "remote β", value);
    });

    let scene = move || {
        let exterior = state.get().exterior;
        match exterior.scene() {
            Ok(scene) => {
                let (a, b, c) = (scene.triangle.a, scene.triangle.b, scene.triangle.c);
                let end = scene.extension_end;
                let arrow = geometry::point::points_attr(&scene.arrow_points());
                view! {
                    <polygon points=scene.triangle.points_attr() fill="none" stroke=INK stroke-width="2"/>
                    <line x1=b.x y1=b.y x2=end.x y2=end.y stroke=SECONDARY stroke-width="3"/>
                    <AngleArc arc=scene.alpha_arc color=ACCENT stroke_width=2/>
                    <AngleArc arc=scene.beta_arc color=ACCENT stroke_width=2/>
                    <AngleArc arc=scene.gamma_arc color=PRIMARY stroke_width=2/>
                    <AngleArc arc=scene.theta_arc color=SECONDARY stroke_width=2/>
                    <text class="diagram__label" x={a.x + 30.0} y={a.y - 8.0} fill=ACCENT>
                        {format!("α={}", degrees(exterior.alpha))}
                    </text>
                    <text class="diagram__label" x={c.x + 5.0} y={c.y + 25.0} fill=ACCENT>
                        {format!("β={}", degrees(exterior.beta))}
                    </text>
                    <text class="diagram__label" x={b.x - 50.0} y={b.y - 15.0} fill=PRIMARY>
                        {format!("γ={}", degrees(exterior.gamma()))}
                    </text>
                    <text class="diagram__label diagram__label--bold" x={b.x + 40.0} y={b.y - 15.0} fill=SECONDARY>
                        {format!("θ={}", degrees(exterior.theta()))}
                    </text>
                    <polygon points=arrow fill=SECONDARY/>
                }
                    .into_any()
            }
            Err(_) => view! { <InvalidNotice x=225.0 y=125.0/> }.into_any(),
        }
    };

    let theorem_readout = move || {
        let e = state.get().exterior;
        format!("{} = {} + {}", degrees(e.theta()), degrees(e.alpha), degrees(e.beta))
    };
    let inequality = move |remote: &'static str| {
        move || {
            let e = state.get().exterior;
            let (value, holds) =
                if remote == "α" { (e.alpha, e.theta_exceeds_alpha()) } else { (e.beta, e.theta_exceeds_beta()) };
            let class = if holds { "check check--pass" } else { "check check--fail" };
            view! {
                <div class=class>
                    {format!("θ ({}) > {remote} ({}) {}", degrees(e.theta()), degrees(value), if holds { "✓" } else { "✗" })}
                </div>
            }
        }
    };
    let linear_pair = move || {
        let e = state.get().exterior;
        format!("γ + θ = 180° → {} + {} = 180°", degrees(e.gamma()), degrees(e.theta()))
    };

    view! {
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 450 250">{scene}</Diagram>
                <Controls>
                    <RangeSlider label="Remote Interior α" range=EXTERIOR_RANGE value=alpha on_change=on_alpha unit="°"/>
                    <RangeSlider label="Remote Interior β" range=EXTERIOR_RANGE value=beta on_change=on_beta unit="°"/>
                </Controls>
            </div>
            <div class="card-column">
                <ConceptCard title="Exterior Angle Theorem" accent="#F472B6">
                    <p class="concept-card__text">
                        "The measure of an exterior angle of a triangle equals the sum of the measures of the two remote (non-adjacent) interior angles."
                    </p>
                    <div class="theorem-box theorem-box--secondary">
                        <Formula>
                            <span style=format!("color: {SECONDARY};")>"θ"</span>
                            " = "
                            <span style=format!("color: {ACCENT};")>"α"</span>
                            " + "
                            <span style=format!("color: {ACCENT};")>"β"</span>
                        </Formula>
                        <div class="theorem-box__readout">{theorem_readout}</div>
                    </div>
                </ConceptCard>
                <ConceptCard title="Exterior Angle Inequality" accent=AMBER>
                    <p class="concept-card__text">
                        "The measure of any exterior angle is greater than either of the remote interior angles."
                    </p>
                    {inequality("α")}
                    {inequality("β")}
                </ConceptCard>
                <ConceptCard title="Definition" accent="#818CF8">
                    <p class="concept-card__text">
                        "An exterior angle is the supplementary angle adjacent to an interior angle, formed by extending one side of the triangle."
                    </p>
                    <Formula>{linear_pair}</Formula>
                </ConceptCard>
            </div>
        </div>
    }
}
