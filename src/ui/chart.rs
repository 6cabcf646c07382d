use std::ops::RangeInclusive;

use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Bar, BarChart, GridInput, GridMark, Plot, PlotBounds, PlotPoint, Text};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Fixed canvas: 600×400 with margins 20/20/70/80 (top/right/bottom/left).
const CANVAS_WIDTH: f32 = 600.0;
const CANVAS_HEIGHT: f32 = 400.0;

/// Drawable width once the horizontal margins are taken out; the band scale
/// maps group keys into this range.
const DRAW_WIDTH: f64 = 600.0 - 80.0 - 20.0;

/// Inter-band padding as a fraction of the step.
const BAND_PADDING: f64 = 0.1;

// ---------------------------------------------------------------------------
// BandScale – discrete keys → contiguous intervals with padding
// ---------------------------------------------------------------------------

/// Maps `len` equally sized bands into `[0, width]` with uniform padding
/// between and around them: `step = width / (len + padding)`, band width
/// `step * (1 - padding)`.
#[derive(Debug, Clone, Copy)]
pub struct BandScale {
    step: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(len: usize, width: f64, padding: f64) -> Self {
        let step = if len == 0 {
            0.0
        } else {
            width / (len as f64 + padding)
        };
        BandScale { step, padding }
    }

    /// Distance between the left edges of two adjacent bands.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Width of one band (one bar).
    pub fn bandwidth(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    /// Left edge of band `i`.
    pub fn position(&self, i: usize) -> f64 {
        self.step * self.padding + self.step * i as f64
    }

    /// Center of band `i`, where the bar and its axis tick sit.
    pub fn center(&self, i: usize) -> f64 {
        self.position(i) + self.bandwidth() / 2.0
    }
}

// ---------------------------------------------------------------------------
// Average bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the per-group average bar chart.
///
/// The whole scene is rebuilt from `state.averages` every frame, so a
/// selection change can never leave stale bars or labels behind. Groups
/// whose average is NaN (poisoned by an unparseable cell) keep their axis
/// tick but draw no bar and no label.
pub fn average_chart(ui: &mut Ui, state: &AppState) {
    let averages = &state.averages;
    let scale = BandScale::new(averages.len(), DRAW_WIDTH, BAND_PADDING);

    // Vertical domain: zero up to the highest valid average.
    let max_avg = averages
        .iter()
        .map(|p| p.average)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let y_max = if max_avg > 0.0 { max_avg } else { 1.0 };

    let variable = state.selection.numeric;

    let bars: Vec<Bar> = averages
        .iter()
        .enumerate()
        .filter(|(_, p)| p.average.is_finite())
        .map(|(i, p)| {
            Bar::new(scale.center(i), p.average)
                .width(scale.bandwidth())
                .fill(state.color_map.color_for(&p.key))
                .name(&p.key)
        })
        .collect();

    let chart = BarChart::new(bars).element_formatter(Box::new(move |bar, _chart| {
        format!("Average {variable}: {:.2}", bar.value)
    }));

    // One tick per group, placed at the band center.
    let centers: Vec<f64> = (0..averages.len()).map(|i| scale.center(i)).collect();
    let keys: Vec<String> = averages.iter().map(|p| p.key.clone()).collect();
    let tick_step = scale.step().max(1.0);

    let spacer_centers = centers.clone();
    let tick_centers = centers;

    Plot::new("average_chart")
        .width(CANVAS_WIDTH)
        .height(CANVAS_HEIGHT)
        .x_axis_label(state.selection.category.to_string())
        .y_axis_label(format!("Average {variable}"))
        .show_grid([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_grid_spacer(move |_input: GridInput| {
            spacer_centers
                .iter()
                .map(|&c| GridMark {
                    value: c,
                    step_size: tick_step,
                })
                .collect()
        })
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            tick_centers
                .iter()
                .position(|&c| (mark.value - c).abs() < 1e-9)
                .map(|i| keys[i].clone())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [DRAW_WIDTH, y_max]));
            plot_ui.bar_chart(chart);

            for (i, point) in state.averages.iter().enumerate() {
                if !point.average.is_finite() {
                    continue;
                }
                let label = RichText::new(format!("{:.2}", point.average));
                plot_ui.text(
                    Text::new(PlotPoint::new(scale.center(i), point.average), label)
                        .anchor(Align2::CENTER_TOP),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_fill_the_range_uniformly() {
        let scale = BandScale::new(4, 500.0, 0.1);
        let step = scale.step();
        for i in 0..4 {
            assert!((scale.position(i) - step * (0.1 + i as f64)).abs() < 1e-9);
        }
        // Last band's right edge plus the trailing padding ends at the range end.
        let end = scale.position(3) + scale.bandwidth() + step * 0.1;
        assert!((end - 500.0).abs() < 1e-9);
    }

    #[test]
    fn bandwidth_is_the_padded_step() {
        let scale = BandScale::new(5, 500.0, 0.1);
        assert!((scale.bandwidth() / scale.step() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn single_band_is_centered() {
        let scale = BandScale::new(1, 500.0, 0.1);
        assert!((scale.center(0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn empty_domain_produces_no_width() {
        let scale = BandScale::new(0, 500.0, 0.1);
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.step(), 0.0);
    }
}
