use std::f64::consts::PI;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::data::content::{Allocation, DISTRIBUTION, TOKEN_FACTS};

const CANVAS_SIZE: u32 = 360;
const OUTER_RADIUS: f64 = 150.0;
const INNER_RADIUS: f64 = 90.0;
const ARC_STEPS_PER_TURN: f64 = 180.0;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("canvas backend unavailable")]
    Backend,
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

/// Start and end angle in radians for each allocation, clockwise from 12 o'clock.
pub fn slice_angles(allocations: &[Allocation]) -> Vec<(f64, f64)> {
    let total: u32 = allocations.iter().map(|a| a.percent).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = -PI / 2.0;
    allocations
        .iter()
        .map(|allocation| {
            let sweep = 2.0 * PI * f64::from(allocation.percent) / f64::from(total);
            let range = (start, start + sweep);
            start += sweep;
            range
        })
        .collect()
}

/// Closed outline of one donut segment: outer arc forward, inner arc back.
pub fn ring_segment(center: (f64, f64), start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = (((end - start) / (2.0 * PI)) * ARC_STEPS_PER_TURN).ceil().max(1.0) as usize;
    let point = |radius: f64, angle: f64| {
        (
            (center.0 + radius * angle.cos()).round() as i32,
            (center.1 + radius * angle.sin()).round() as i32,
        )
    };
    let angle_at = |step: usize| start + (end - start) * step as f64 / steps as f64;

    let mut outline: Vec<(i32, i32)> = (0..=steps).map(|s| point(OUTER_RADIUS, angle_at(s))).collect();
    outline.extend((0..=steps).rev().map(|s| point(INNER_RADIUS, angle_at(s))));
    outline
}

fn draw_donut(canvas: HtmlCanvasElement) -> Result<(), ChartError> {
    canvas.set_width(CANVAS_SIZE);
    canvas.set_height(CANVAS_SIZE);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::Backend)?;
    let root = backend.into_drawing_area();
    root.fill(&TRANSPARENT)
        .map_err(|e| ChartError::Draw(e.to_string()))?;

    let center = (f64::from(CANVAS_SIZE) / 2.0, f64::from(CANVAS_SIZE) / 2.0);
    for (allocation, (start, end)) in DISTRIBUTION.iter().zip(slice_angles(DISTRIBUTION)) {
        let (r, g, b) = allocation.color;
        root.draw(&Polygon::new(ring_segment(center, start, end), RGBColor(r, g, b).filled()))
            .map_err(|e| ChartError::Draw(e.to_string()))?;
    }

    root.present().map_err(|e| ChartError::Draw(e.to_string()))
}

#[function_component(TokenomicsChart)]
pub fn tokenomics_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw_donut(canvas) {
                        log::warn!("Tokenomics chart not drawn: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="tokenomics-chart">
            <div class="tokenomics-donut">
                <canvas
                    ref={canvas_ref}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    style="max-width: 100%;"
                />
                <div class="tokenomics-donut-center">
                    <span class="tokenomics-total">{"1B"}</span>
                    <span class="tokenomics-total-label">{"HTTC"}</span>
                </div>
            </div>
            <ul class="tokenomics-legend">
                { for DISTRIBUTION.iter().map(|allocation| {
                    let (r, g, b) = allocation.color;
                    html! {
                        <li class="tokenomics-legend-item">
                            <span
                                class="tokenomics-swatch"
                                style={format!("background: rgb({}, {}, {});", r, g, b)}
                            ></span>
                            <span class="tokenomics-legend-name">{allocation.name}</span>
                            <span class="tokenomics-legend-percent">{format!("{}%", allocation.percent)}</span>
                        </li>
                    }
                }) }
            </ul>
            <dl class="token-facts">
                { for TOKEN_FACTS.iter().map(|(label, value)| html! {
                    <div class="token-fact">
                        <dt>{*label}</dt>
                        <dd>{*value}</dd>
                    </div>
                }) }
            </dl>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_cover_full_turn_in_order() {
        let angles = slice_angles(DISTRIBUTION);
        assert_eq!(angles.len(), DISTRIBUTION.len());
        assert!((angles[0].0 + PI / 2.0).abs() < 1e-9);
        for pair in angles.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-9);
        }
        let last = angles.last().map(|(_, end)| *end).unwrap_or_default();
        assert!((last - 3.0 * PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn public_sale_takes_forty_percent() {
        let (start, end) = slice_angles(DISTRIBUTION)[0];
        assert!(((end - start) / (2.0 * PI) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn empty_distribution_has_no_slices() {
        assert!(slice_angles(&[]).is_empty());
    }

    #[test]
    fn ring_segment_stays_between_radii() {
        let center = (180.0, 180.0);
        for (x, y) in ring_segment(center, 0.0, PI / 3.0) {
            let distance = ((f64::from(x) - center.0).powi(2) + (f64::from(y) - center.1).powi(2)).sqrt();
            assert!(distance >= INNER_RADIUS - 1.0 && distance <= OUTER_RADIUS + 1.0);
        }
    }
}
