use crate::analyser::logic::{LetterValueSummary, ValueCounts};
use egui_plot::{Bar, BarChart, Line, Plot, Points, Polygon};

const PLOT_HEIGHT: f32 = 140.0;
const MAX_HALF_HEIGHT: f64 = 0.4;

/// Half height of a letter-value box: the quartile box is the tallest and
/// each deeper box shrinks by the same step.
pub fn box_half_height(depth: usize, total: usize) -> f64 {
    if total == 0 || depth == 0 || depth > total {
        return 0.0;
    }
    MAX_HALF_HEIGHT * (total - depth + 1) as f64 / total as f64
}

/// Label for an axis mark that falls on a bar; empty between bars.
pub fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

pub fn render_boxen(ui: &mut egui::Ui, summary: &LetterValueSummary) {
    crate::theme::card_frame(ui).show(ui, |ui| {
        ui.label(egui::RichText::new(&summary.column).strong());
        if summary.boxes.is_empty() {
            ui.label("No values");
            return;
        }

        let total = summary.boxes.len();
        Plot::new(format!("boxen_{}", summary.column))
            .height(PLOT_HEIGHT)
            .show_axes([true, false])
            .show_grid([true, false])
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(-0.5)
            .include_y(0.5)
            .show(ui, |plot_ui| {
                // Outermost first so the inner boxes are painted on top.
                for b in summary.boxes.iter().rev() {
                    let half = box_half_height(b.depth, total);
                    let shade = 0.35 + 0.65 * (total - b.depth + 1) as f32 / total as f32;
                    plot_ui.polygon(
                        Polygon::new(
                            format!("depth {}", b.depth),
                            vec![
                                [b.lower, -half],
                                [b.upper, -half],
                                [b.upper, half],
                                [b.lower, half],
                            ],
                        )
                        .fill_color(crate::theme::ACCENT_COLOR.gamma_multiply(shade))
                        .stroke(egui::Stroke::new(0.5, egui::Color32::from_gray(60))),
                    );
                }

                if let Some(median) = summary.median {
                    let half = box_half_height(1, total);
                    plot_ui.line(
                        Line::new("median", vec![[median, -half], [median, half]])
                            .color(crate::theme::MEDIAN_COLOR)
                            .width(2.0),
                    );
                }

                if !summary.outliers.is_empty() {
                    let points: Vec<[f64; 2]> =
                        summary.outliers.iter().map(|&v| [v, 0.0]).collect();
                    plot_ui.points(
                        Points::new("outliers", points)
                            .radius(2.0)
                            .color(crate::theme::OUTLIER_COLOR),
                    );
                }
            });

        ui.label(
            egui::RichText::new(format!(
                "{} values, {} letter-value boxes, {} outliers",
                summary.count,
                total,
                summary.outliers.len()
            ))
            .weak()
            .size(11.0),
        );
    });
}

pub fn render_counts(ui: &mut egui::Ui, counts: &ValueCounts) {
    crate::theme::card_frame(ui).show(ui, |ui| {
        ui.label(egui::RichText::new(&counts.column).strong());
        if counts.counts.is_empty() {
            ui.label("No values");
            return;
        }

        let labels: Vec<String> = counts.counts.iter().map(|(l, _)| l.clone()).collect();
        let bars: Vec<Bar> = counts
            .counts
            .iter()
            .enumerate()
            .map(|(i, (label, n))| Bar::new(i as f64, *n as f64).name(label).width(0.7))
            .collect();

        let chart = BarChart::new(counts.column.clone(), bars)
            .color(crate::theme::ACCENT_COLOR)
            .element_formatter(Box::new(|bar, _| format!("{}\nCount: {}", bar.name, bar.value)));

        Plot::new(format!("counts_{}", counts.column))
            .height(PLOT_HEIGHT + 40.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_x(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
            .show(ui, |plot_ui| plot_ui.bar_chart(chart));
    });
}
