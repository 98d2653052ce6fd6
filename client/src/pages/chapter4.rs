//! Chapter 4 page: right triangles.
//!
//! The Pythagorean section is the only numeric one; the other three sections
//! select among fixed figures built from `geometry::right::RightTriangle`.

use geometry::Point;
use geometry::arc::right_angle_marker;
use geometry::right::RightTriangle;
use leptos::prelude::*;

use crate::components::concept_card::{ConceptCard, Formula};
use crate::components::diagram::{Controls, Diagram, TickMarks};
use crate::components::page_header::PageHeader;
use crate::components::range_slider::RangeSlider;
use crate::components::tab_bar::TabBar;
use crate::state::chapter4::{
    AngleBisectorDiagram, Chapter4Section, Chapter4State, LEG_RANGE, PerpendicularBisectorDiagram,
    RightCongruenceRule, RightTheorem, SpecialRightTriangle, congruence_pair, median_theorem_triangle,
};
use crate::util::color::{ACCENT, AMBER, INK, PRIMARY, SECONDARY, VIOLET, tinted_card_style};
use crate::util::format::{degrees, degrees_tenths, squared, whole};
use crate::util::transition;

const PAGE: &str = "chapter4";

#[component]
pub fn Chapter4Page() -> impl IntoView {
    let state = RwSignal::new(Chapter4State::default());
    provide_context(state);

    let section = Memo::new(move |_| state.get().section);
    let on_section = Callback::new(move |next: Chapter4Section| {
        state.update(|s| s.set_section(next));
        transition::record(PAGE, "section", next);
    });

    view! {
        <div class="page">
            <PageHeader
                title="Right Triangles"
                intro="A right triangle has one 90° angle. The side opposite to the right angle is the hypotenuse."
            />
            <TabBar options=&Chapter4Section::ALL active=section label=Chapter4Section::label on_select=on_section/>
            {move || match section.get() {
                Chapter4Section::Pythagorean => view! { <PythagoreanSection/> }.into_any(),
                Chapter4Section::Congruence => view! { <CongruenceSection/> }.into_any(),
                Chapter4Section::Special => view! { <SpecialTrianglesSection/> }.into_any(),
                Chapter4Section::Theorems => view! { <KeyTheoremsSection/> }.into_any(),
            }}
        </div>
    }
}

/// Outline, right-angle marker and both acute-angle arcs of `t`.
fn right_triangle_outline(t: RightTriangle, stroke: &'static str, width: &'static str, arc_radius: f64) -> impl IntoView {
    view! {
        <polygon points=t.points_attr() fill="none" stroke=stroke stroke-width=width/>
        <path d=t.right_angle_path(20.0) fill="none" stroke=INK stroke-width="2"/>
        <path d=t.top_arc_path(arc_radius) fill="none" stroke=VIOLET stroke-width="2"/>
        <path d=t.base_arc_path(arc_radius) fill="none" stroke=VIOLET stroke-width="2"/>
    }
}

// =============================================================================
// PYTHAGOREAN THEOREM
// =============================================================================

#[component]
fn PythagoreanSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter4State>>();
    let a = Signal::derive(move || state.get().pythagorean.a);
    let b = Signal::derive(move || state.get().pythagorean.b);
    let on_a = Callback::new(move |value: f64| {
        state.update(|s| s.pythagorean.set_a(value));
        transition::record(PAGE, "leg a", value);
    });
    let on_b = Callback::new(move |value: f64| {
        state.update(|s| s.pythagorean.set_b(value));
        transition::record(PAGE, "leg b", value);
    });
    let triangle = Memo::new(move |_| state.get().pythagorean.triangle());

    let scene = move || {
        let t = triangle.get();
        let (top, corner, end) = (t.top, t.corner(), t.base_end());
        view! {
            {right_triangle_outline(t, PRIMARY, "3", 30.0)}
            <text class="diagram__label" x={top.x - 20.0} y={top.y + t.a / 2.0} fill=SECONDARY text-anchor="middle" dominant-baseline="middle">
                {format!("a={}", whole(t.a))}
            </text>
            <text class="diagram__label" x={corner.x + t.b / 2.0} y={corner.y + 20.0} fill=SECONDARY text-anchor="middle" dominant-baseline="middle">
                {format!("b={}", whole(t.b))}
            </text>
            <text class="diagram__label" x={top.x + t.b / 2.0 + 10.0} y={top.y + t.a / 2.0 - 10.0} fill=ACCENT text-anchor="middle" dominant-baseline="middle">
                {format!("c={}", whole(t.hypotenuse()))}
            </text>
            <text class="diagram__label diagram__label--small diagram__label--bold" x={end.x - 45.0} y={end.y - 10.0} fill=VIOLET>
                {degrees_tenths(t.base_angle())}
            </text>
            <text class="diagram__label diagram__label--small diagram__label--bold" x={top.x + 35.0} y={top.y + 35.0} fill=VIOLET>
                {degrees_tenths(t.top_angle())}
            </text>
        }
    };

    let equation = move || {
        let p = state.get().pythagorean;
        let eq = p.equation();
        view! {
            <div class="theorem-box__equation">
                {format!("{} + {} = ", squared(p.a), squared(p.b))}
                <span style=format!("color: {ACCENT};")>{squared(eq.c_rounded)}</span>
            </div>
            <div class="theorem-box__readout">
                {format!("{} + {} = {}", whole(eq.a_squared), whole(eq.b_squared), whole(eq.c_squared_rounded))}
            </div>
        }
    };

    let thirty_sixty = move || triangle.get().is_thirty_sixty_ninety();
    let isosceles_right = move || triangle.get().is_isosceles_right();

    view! {
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 400">{scene}</Diagram>
                <Controls>
                    <RangeSlider label="Leg a" range=LEG_RANGE value=a on_change=on_a/>
                    <RangeSlider label="Leg b" range=LEG_RANGE value=b on_change=on_b/>
                </Controls>
            </div>
            <div class="card-column">
                <ConceptCard title="Pythagorean Theorem" accent="#34D399">
                    <div class="theorem-box">{equation}</div>
                </ConceptCard>
                <ConceptCard title="Special Right Triangles" accent="#818CF8">
                    <div class="match-card" class:match-card--active=thirty_sixty>
                        <h4 class="match-card__title">"30-60-90 Triangle"</h4>
                        <p class="match-card__text">"Sides are in ratio 1 : √3 : 2"</p>
                    </div>
                    <div class="match-card" class:match-card--active=isosceles_right>
                        <h4 class="match-card__title">"45-45-90 Triangle"</h4>
                        <p class="match-card__text">"Isosceles Right Triangle. Sides are 1 : 1 : √2"</p>
                    </div>
                </ConceptCard>
            </div>
        </div>
    }
}

// =============================================================================
// CONGRUENCE RULES
// =============================================================================

fn rule_figure(rule: RightCongruenceRule) -> impl IntoView {
    let figure = rule.figure();
    congruence_pair()
        .into_iter()
        .map(|t| {
            let (top, end) = (t.top, t.base_end());
            let highlight = |(from, to): (Point, Point), color: &'static str| {
                view! { <line x1=from.x y1=from.y x2=to.x y2=to.y stroke=color stroke-width="4"/> }
            };
            view! {
                {right_triangle_outline(t, INK, "2", 25.0)}
                <text class="diagram__label diagram__label--tiny" x={top.x + 25.0} y={top.y + 15.0} fill=VIOLET>"α"</text>
                <text class="diagram__label diagram__label--tiny" x={end.x - 25.0} y={end.y - 10.0} fill=VIOLET>"β"</text>
                {highlight(figure.primary.endpoints(&t), SECONDARY)}
                {figure.secondary.map(|part| highlight(part.endpoints(&t), ACCENT))}
                {figure.base_angle.then(|| {
                    view! {
                        <circle cx=end.x cy=end.y r="15" fill=ACCENT fill-opacity="0.3" stroke=ACCENT stroke-width="2"/>
                    }
                })}
            }
        })
        .collect_view()
}

#[component]
fn CongruenceSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter4State>>();
    let rule = Memo::new(move |_| state.get().rule);
    let on_rule = Callback::new(move |next: RightCongruenceRule| {
        state.update(|s| s.set_rule(next));
        transition::record(PAGE, "rule", next);
    });

    view! {
        <TabBar
            options=&RightCongruenceRule::ALL
            active=rule
            label=RightCongruenceRule::abbreviation
            on_select=on_rule
            secondary=true
        />
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 250">
                    {move || rule_figure(rule.get())}
                    <text class="diagram__symbol" x="200" y="140" fill=INK text-anchor="middle">"≅"</text>
                </Diagram>
            </div>
            <div class="card-column">
                {move || {
                    let rule = rule.get();
                    view! {
                        <div class="concept-card concept-card--gradient">
                            <h3 class="concept-card__title" style="color: #818CF8;">{rule.name()}</h3>
                            <p class="concept-card__lead">{rule.description()}</p>
                            <div class="concept-card__meta">
                                "Equivalent to: "
                                <strong style=format!("color: {SECONDARY};")>{rule.equivalent()}</strong>
                            </div>
                        </div>
                        <ConceptCard title="Why It Works" accent="#34D399">
                            <p class="concept-card__text">{rule.reason()}</p>
                        </ConceptCard>
                    }
                }}
                <ConceptCard title="Remember" accent=AMBER tone="note">
                    <p class="concept-card__text">
                        "Right triangle congruence rules are special cases of the general triangle congruence rules, taking advantage of the known 90° angle."
                    </p>
                </ConceptCard>
            </div>
        </div>
    }
}

// =============================================================================
// SPECIAL RIGHT TRIANGLES
// =============================================================================

fn special_scene(kind: SpecialRightTriangle) -> impl IntoView {
    let t = kind.triangle();
    let color = kind.color();
    let (top, corner, end) = (t.top, t.corner(), t.base_end());
    let [vertical, horizontal, hypotenuse] = kind.side_labels();
    let (top_angle, base_angle) = kind.nominal_angles();
    let mid = t.hypotenuse_midpoint();
    let equal_legs = (kind == SpecialRightTriangle::FortyFiveFortyFiveNinety).then(|| {
        view! {
            <TickMarks from=corner to=top color=color/>
            <TickMarks from=corner to=end color=color/>
        }
    });

    view! {
        <polygon points=t.points_attr() fill="none" stroke=color stroke-width="3"/>
        <path d=t.right_angle_path(20.0) fill="none" stroke=INK stroke-width="2"/>
        <path d=t.top_arc_path(30.0) fill="none" stroke=color stroke-width="2"/>
        <path d=t.base_arc_path(30.0) fill="none" stroke=color stroke-width="2"/>
        {equal_legs}
        <text class="diagram__label diagram__label--large" x={corner.x - 25.0} y={top.y + t.a / 2.0} fill=SECONDARY>
            {vertical}
        </text>
        <text class="diagram__label diagram__label--large" x={corner.x + t.b / 2.0} y={corner.y + 22.0} fill=SECONDARY>
            {horizontal}
        </text>
        <text class="diagram__label diagram__label--large" x={mid.x + 20.0} y={mid.y - 10.0} fill=SECONDARY>
            {hypotenuse}
        </text>
        <text class="diagram__label diagram__label--small" x={corner.x + 20.0} y={corner.y - 10.0} fill=INK>"90°"</text>
        <text class="diagram__label diagram__label--bold" x={top.x + 28.0} y={top.y + 28.0} fill=color>
            {degrees(top_angle)}
        </text>
        <text class="diagram__label diagram__label--bold" x={end.x - 55.0} y={end.y - 10.0} fill=color>
            {degrees(base_angle)}
        </text>
    }
}

fn special_cards(kind: SpecialRightTriangle) -> impl IntoView {
    let color = kind.color();
    let extra = match kind {
        SpecialRightTriangle::ThirtySixtyNinety => view! {
            <ConceptCard title="30° Angle Theorem" accent="#F472B6">
                <p class="concept-card__text">
                    "In a right triangle with a 30° angle, the leg opposite the 30° angle is "
                    <strong style=format!("color: {SECONDARY};")>"half the hypotenuse"</strong>
                    "."
                </p>
                <Formula>"If ∠A = 30°, then BC = ½ · AC"</Formula>
            </ConceptCard>
            <ConceptCard title="Converse" accent="#34D399">
                <p class="concept-card__text">
                    "If one leg is half the hypotenuse, then the angle opposite that leg is 30°."
                </p>
            </ConceptCard>
        }
        .into_any(),
        SpecialRightTriangle::FortyFiveFortyFiveNinety => view! {
            <ConceptCard title="Key Relationships" accent="#F472B6">
                <ul class="bullet-list">
                    <li class="bullet-list__item">"Hypotenuse = Leg × √2"</li>
                    <li class="bullet-list__item">"Leg = Hypotenuse ÷ √2 = Hypotenuse × (√2/2)"</li>
                </ul>
            </ConceptCard>
            <ConceptCard title="Real World" accent=AMBER>
                <p class="concept-card__text">
                    "This triangle appears in diagonal of squares, baseball diamonds, and many architectural designs!"
                </p>
            </ConceptCard>
        }
        .into_any(),
    };

    view! {
        <div class="concept-card concept-card--tinted" style=tinted_card_style(color)>
            <h3 class="concept-card__title" style=format!("color: {color};")>{format!("{} Triangle", kind.label())}</h3>
            <p class="concept-card__lead">{kind.summary()}</p>
            <div class="ratio-box">
                <div class="ratio-box__ratio">
                    "Side Ratios: " <span style=format!("color: {color};")>{kind.ratio()}</span>
                </div>
                <div class="ratio-box__legend">{kind.ratio_legend()}</div>
            </div>
        </div>
        {extra}
    }
}

#[component]
fn SpecialTrianglesSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter4State>>();
    let special = Memo::new(move |_| state.get().special);
    let on_special = Callback::new(move |next: SpecialRightTriangle| {
        state.update(|s| s.set_special(next));
        transition::record(PAGE, "special triangle", next);
    });

    view! {
        <TabBar
            options=&SpecialRightTriangle::ALL
            active=special
            label=SpecialRightTriangle::label
            on_select=on_special
            color=SpecialRightTriangle::color
            secondary=true
        />
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 350">{move || special_scene(special.get())}</Diagram>
            </div>
            <div class="card-column">{move || special_cards(special.get())}</div>
        </div>
    }
}

// =============================================================================
// KEY THEOREMS
// =============================================================================

fn angle_bisector_scene() -> impl IntoView {
    let d = AngleBisectorDiagram::new();
    let (v, p, end) = (d.vertex, d.p, d.bisector_end);
    let (h, w) = (d.horizontal_foot, d.vertical_foot);
    view! {
        <line x1="50" y1=v.y x2="350" y2=v.y stroke=INK stroke-width="2"/>
        <line x1=v.x y1=v.y x2=v.x y2="50" stroke=INK stroke-width="2"/>
        <line x1=v.x y1=v.y x2=end.x y2=end.y stroke=SECONDARY stroke-width="3"/>
        <circle cx=p.x cy=p.y r="6" fill=ACCENT/>
        <text class="diagram__label" x={p.x + 10.0} y={p.y - 5.0} fill=ACCENT>"P"</text>
        <line x1=p.x y1=p.y x2=h.x y2=h.y stroke=PRIMARY stroke-width="2" stroke-dasharray="4"/>
        <line x1=p.x y1=p.y x2=w.x y2=w.y stroke=PRIMARY stroke-width="2" stroke-dasharray="4"/>
        <path d=right_angle_marker(h, 10.0, -1.0, -1.0) fill="none" stroke=PRIMARY stroke-width="1"/>
        <path d=right_angle_marker(w, 10.0, 1.0, 1.0) fill="none" stroke=PRIMARY stroke-width="1"/>
        <text class="diagram__label diagram__label--small" x={p.x + 5.0} y={p.midpoint(h).y + 5.0} fill=PRIMARY>
            {format!("d₁ = {}", whole(d.d1()))}
        </text>
        <text class="diagram__label diagram__label--small" x={p.midpoint(w).x - 25.0} y={w.y - 5.0} fill=PRIMARY>
            {format!("d₂ = {}", whole(d.d2()))}
        </text>
    }
}

fn perpendicular_bisector_scene() -> impl IntoView {
    let d = PerpendicularBisectorDiagram::default();
    let (a, b, p, m) = (d.a, d.b, d.p, d.midpoint());
    view! {
        <line x1=a.x y1=a.y x2=b.x y2=b.y stroke=INK stroke-width="3"/>
        <circle cx=a.x cy=a.y r="4" fill=INK/>
        <circle cx=b.x cy=b.y r="4" fill=INK/>
        <text class="diagram__label" x={a.x - 5.0} y={a.y + 25.0} fill=INK>"A"</text>
        <text class="diagram__label" x={b.x - 5.0} y={b.y + 25.0} fill=INK>"B"</text>
        <circle cx=m.x cy=m.y r="4" fill=SECONDARY/>
        <text class="diagram__label diagram__label--small" x={m.x - 5.0} y={m.y + 25.0} fill=SECONDARY>"M"</text>
        <line x1=m.x y1="50" x2=m.x y2="300" stroke=SECONDARY stroke-width="2"/>
        <TickMarks from=a to=m color=SECONDARY/>
        <TickMarks from=m to=b color=SECONDARY/>
        <circle cx=p.x cy=p.y r="6" fill=ACCENT/>
        <text class="diagram__label" x={p.x + 10.0} y=p.y fill=ACCENT>"P"</text>
        <line x1=p.x y1=p.y x2=a.x y2=a.y stroke=PRIMARY stroke-width="2" stroke-dasharray="4"/>
        <line x1=p.x y1=p.y x2=b.x y2=b.y stroke=PRIMARY stroke-width="2" stroke-dasharray="4"/>
        <path d=right_angle_marker(m, 15.0, 1.0, -1.0) fill="none" stroke=INK stroke-width="2"/>
        <text class="diagram__label diagram__label--small" x={p.midpoint(a).x - 25.0} y={p.midpoint(a).y} fill=PRIMARY>
            {format!("PA = {}", whole(d.pa()))}
        </text>
        <text class="diagram__label diagram__label--small" x={p.midpoint(b).x + 10.0} y={p.midpoint(b).y} fill=PRIMARY>
            {format!("PB = {}", whole(d.pb()))}
        </text>
    }
}

fn median_scene() -> impl IntoView {
    let t = median_theorem_triangle();
    let (top, corner, end, m) = (t.top, t.corner(), t.base_end(), t.hypotenuse_midpoint());
    view! {
        {right_triangle_outline(t, INK, "2", 30.0)}
        <text class="diagram__label diagram__label--small" x={top.x + 25.0} y={top.y + 23.0} fill=VIOLET>"α"</text>
        <text class="diagram__label diagram__label--small" x={end.x - 35.0} y={end.y - 10.0} fill=VIOLET>"β"</text>
        <circle cx=m.x cy=m.y r="5" fill=ACCENT/>
        <text class="diagram__label" x={m.x + 10.0} y={m.y - 5.0} fill=ACCENT>"M"</text>
        <line x1=corner.x y1=corner.y x2=m.x y2=m.y stroke=SECONDARY stroke-width="3"/>
        <TickMarks from=top to=m color=PRIMARY/>
        <TickMarks from=m to=end color=PRIMARY/>
        <text class="diagram__label" x={corner.x - 15.0} y={corner.y + 15.0} fill=INK>"C"</text>
        <text class="diagram__label" x={end.x + 5.0} y={end.y + 15.0} fill=INK>"B"</text>
        <text class="diagram__label" x={top.x - 15.0} y={top.y - 5.0} fill=INK>"A"</text>
        <text class="diagram__label diagram__label--small" x={m.x - 40.0} y={m.y + 25.0} fill=SECONDARY>
            {format!("CM = {}", whole(t.median_to_hypotenuse()))}
        </text>
    }
}

fn theorem_cards(theorem: RightTheorem) -> impl IntoView {
    let follow_up = match theorem {
        RightTheorem::AngleBisector => None,
        RightTheorem::PerpendicularBisector => Some(view! {
            <ConceptCard title="Definition" accent=AMBER>
                <p class="concept-card__text">
                    "The "
                    <strong style=format!("color: {SECONDARY};")>"perpendicular bisector"</strong>
                    " is a line that passes through the midpoint of a segment and is perpendicular to it."
                </p>
            </ConceptCard>
        }
        .into_any()),
        RightTheorem::MedianToHypotenuse => Some(view! {
            <ConceptCard title="Key Insight" accent="#818CF8" tone="info">
                <p class="concept-card__text">
                    "The midpoint of the hypotenuse is equidistant from all three vertices! This is why it's the center of the circumscribed circle."
                </p>
            </ConceptCard>
        }
        .into_any()),
    };
    let formula = (theorem == RightTheorem::MedianToHypotenuse).then(|| view! { <Formula>"CM = ½ AB = AM = MB"</Formula> });

    view! {
        <div class="concept-card concept-card--gradient">
            <h3 class="concept-card__title" style="color: #F472B6;">{theorem.title()}</h3>
            <p class="concept-card__lead">{theorem.statement()}</p>
            {formula}
        </div>
        <ConceptCard title="Converse" accent="#34D399">
            <p class="concept-card__text">{theorem.converse()}</p>
        </ConceptCard>
        {follow_up}
    }
}

#[component]
fn KeyTheoremsSection() -> impl IntoView {
    let state = expect_context::<RwSignal<Chapter4State>>();
    let theorem = Memo::new(move |_| state.get().theorem);
    let on_theorem = Callback::new(move |next: RightTheorem| {
        state.update(|s| s.set_theorem(next));
        transition::record(PAGE, "theorem", next);
    });

    let scene = move || {
        let theorem = theorem.get();
        let figure = match theorem {
            RightTheorem::AngleBisector => angle_bisector_scene().into_any(),
            RightTheorem::PerpendicularBisector => perpendicular_bisector_scene().into_any(),
            RightTheorem::MedianToHypotenuse => median_scene().into_any(),
        };
        view! {
            {figure}
            <text class="diagram__label" x="300" y="325" fill=INK text-anchor="middle">{theorem.conclusion()}</text>
        }
    };

    view! {
        <TabBar options=&RightTheorem::ALL active=theorem label=RightTheorem::label on_select=on_theorem secondary=true/>
        <div class="section-grid">
            <div class="scene">
                <Diagram view_box="0 0 400 350">{scene}</Diagram>
            </div>
            <div class="card-column">{move || theorem_cards(theorem.get())}</div>
        </div>
    }
}

