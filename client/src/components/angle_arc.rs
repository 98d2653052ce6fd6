//! Filled angle wedge with an optional label.
//!
//! DESIGN
//! ======
//! A focused relation on the parallel-lines diagram highlights some wedges
//! and dims the rest. Emphasis only changes opacity, stroke, and glow; the
//! geometry comes from [`ArcGeometry`] untouched.

#[cfg(test)]
#[path = "angle_arc_test.rs"]
mod angle_arc_test;

use geometry::arc::ArcGeometry;
use geometry::transversal::Highlight;
use leptos::prelude::*;

use crate::util::color::glow_filter_id;

const DIMMED_LABEL_COLOR: &str = "#666";

/// How strongly an arc is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArcEmphasis {
    #[default]
    Normal,
    Highlighted,
    Dimmed,
}

impl ArcEmphasis {
    /// No focus means every arc draws normally.
    pub fn from_highlight(highlight: Option<Highlight>) -> Self {
        match highlight {
            None => Self::Normal,
            Some(Highlight::Highlighted) => Self::Highlighted,
            Some(Highlight::Dimmed) => Self::Dimmed,
        }
    }

    pub fn fill_opacity(self) -> f64 {
        match self {
            Self::Normal => 0.3,
            Self::Highlighted => 0.7,
            Self::Dimmed => 0.1,
        }
    }

    pub fn group_opacity(self) -> f64 {
        if self == Self::Dimmed { 0.3 } else { 1.0 }
    }

    pub fn stroke_width(self) -> u8 {
        if self == Self::Highlighted { 2 } else { 1 }
    }

    /// `url(#glow-…)` filter reference, only while highlighted.
    pub fn filter(self, color: &str) -> Option<String> {
        (self == Self::Highlighted).then(|| format!("url(#{})", glow_filter_id(color)))
    }

    pub fn label_color(self) -> &'static str {
        if self == Self::Dimmed { DIMMED_LABEL_COLOR } else { "white" }
    }
}

/// Wedge for `arc`, filled with `color`, with `label` centered just outside.
#[component]
pub fn AngleArc(
    arc: ArcGeometry,
    color: &'static str,
    #[prop(optional)] emphasis: ArcEmphasis,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] stroke_width: Option<u8>,
) -> impl IntoView {
    let at = arc.label_position();
    view! {
        <g class="angle-arc" opacity=emphasis.group_opacity()>
            <path
                d=arc.wedge_path()
                fill=color
                fill-opacity=emphasis.fill_opacity()
                stroke=color
                stroke-width=stroke_width.unwrap_or_else(|| emphasis.stroke_width())
                filter=emphasis.filter(color)
            />
            {label.map(|text| {
                view! {
                    <text
                        class="angle-arc__label"
                        class:angle-arc__label--bold=emphasis == ArcEmphasis::Highlighted
                        x=at.x
                        y=at.y
                        fill=emphasis.label_color()
                        text-anchor="middle"
                        dominant-baseline="middle"
                    >
                        {text}
                    </text>
                }
            })}
        </g>
    }
}

/// `<defs>` with one glow filter per color, referenced by [`ArcEmphasis::filter`].
#[component]
pub fn GlowFilters(colors: &'static [&'static str]) -> impl IntoView {
    view! {
        <defs>
            {colors
                .iter()
                .map(|color| {
                    view! {
                        <filter id=glow_filter_id(color) x="-50%" y="-50%" width="200%" height="200%">
                            <feDropShadow dx="0" dy="0" stdDeviation="4" flood-color=*color/>
                        </filter>
                    }
                })
                .collect_view()}
        </defs>
    }
}
