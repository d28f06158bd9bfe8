//! Chart Card Widget
//! Rounded card drawing the decorative series as a smooth neon line using egui_plot.

use crate::config::ChartConfig;
use crate::gui::theme;
use crate::series::{Series, SeriesGenerator};
use egui_plot::{Line, Plot, PlotPoints};

const CHART_HEIGHT: f32 = 160.0;
const CARD_ROUNDING: f32 = 24.0;
/// Interpolated samples drawn between two series points.
const CURVE_STEPS: usize = 8;

/// Interpolate a Catmull-Rom curve through `points`, clamping y to `[min, max]`.
///
/// The curve passes through every input point, so the drawn line stays faithful
/// to the series while looking like a smooth price path.
pub fn smooth_points(points: &[[f64; 2]], steps: usize, min: f64, max: f64) -> Vec<[f64; 2]> {
    if points.len() < 3 || steps < 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut out = Vec::with_capacity(last * steps + 1);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        for s in 0..steps {
            let t = s as f64 / steps as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let blend = |a: f64, b: f64, c: f64, d: f64| {
                0.5 * (2.0 * b
                    + (c - a) * t
                    + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                    + (3.0 * b - a - 3.0 * c + d) * t3)
            };
            let x = blend(p0[0], p1[0], p2[0], p3[0]);
            let y = blend(p0[1], p1[1], p2[1], p3[1]).clamp(min, max);
            out.push([x, y]);
        }
    }
    out.push(points[last]);

    out
}

/// The price chart card. The series is drawn once, when the card is created.
pub struct ChartCard {
    generator: SeriesGenerator,
    series: Series,
}

impl ChartCard {
    pub fn new(config: &ChartConfig) -> Self {
        let generator = SeriesGenerator::new(config.params);
        let series = match config.seed {
            Some(seed) => generator.generate_seeded(seed),
            None => generator.generate(),
        };
        log::debug!(
            "Chart generated: {} points in {:?}..{:?}, last {:?}",
            series.len(),
            series.min(),
            series.max(),
            series.last()
        );

        Self { generator, series }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.series.is_empty() {
            return;
        }

        let params = self.generator.params();
        let curve = smooth_points(&self.series.points(), CURVE_STEPS, params.min, params.max);
        let x_max = self.series.len().saturating_sub(1) as f64;

        egui::Frame::none()
            .fill(theme::CARD)
            .rounding(CARD_ROUNDING)
            .inner_margin(egui::Margin::symmetric(0.0, 12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                Plot::new("price_chart")
                    .height(CHART_HEIGHT - 24.0)
                    .show_axes(false)
                    .show_grid(false)
                    .show_background(false)
                    .show_x(false)
                    .show_y(false)
                    .allow_zoom(false)
                    .allow_drag(false)
                    .allow_scroll(false)
                    .allow_boxed_zoom(false)
                    .allow_double_click_reset(false)
                    .include_x(0.0)
                    .include_x(x_max)
                    .include_y(params.min)
                    .include_y(params.max)
                    .set_margin_fraction(egui::vec2(0.0, 0.05))
                    .show(ui, |plot_ui| {
                        plot_ui.line(
                            Line::new(PlotPoints::from(curve))
                                .color(theme::NEON)
                                .width(2.0),
                        );
                    });
            });
    }
}
