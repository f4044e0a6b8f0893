use crate::analyser::logic::CorrelationMatrix;

const COOL: [f64; 3] = [59.0, 76.0, 192.0];
const NEUTRAL: [f64; 3] = [221.0, 221.0, 221.0];
const WARM: [f64; 3] = [180.0, 4.0, 38.0];

/// Diverging cool-warm colour for a correlation in [-1, 1]. Undefined values are grey.
pub fn coolwarm(value: f64) -> egui::Color32 {
    if !value.is_finite() {
        return egui::Color32::from_gray(150);
    }
    let v = value.clamp(-1.0, 1.0);
    let (from, to, t) = if v < 0.0 {
        (COOL, NEUTRAL, v + 1.0)
    } else {
        (NEUTRAL, WARM, v)
    };
    let channel = |i: usize| -> u8 {
        let a = from.get(i).copied().unwrap_or(0.0);
        let b = to.get(i).copied().unwrap_or(0.0);
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgb(channel(0), channel(1), channel(2))
}

/// Annotation text for a cell; empty for undefined correlations.
pub fn annotation(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        String::new()
    }
}

pub fn render_correlation_heatmap(ui: &mut egui::Ui, matrix: &CorrelationMatrix) {
    ui.vertical(|ui| {
        ui.heading("Correlation Matrix for Numeric Features");
        ui.add_space(crate::theme::SPACING_TINY);
        ui.label(
            egui::RichText::new("Pearson correlation between numeric columns (-1.0 to 1.0).")
                .weak()
                .size(12.0),
        );
        ui.add_space(crate::theme::SPACING_SMALL);

        let n = matrix.columns.len();
        let cell_size = 64.0;
        let label_width = 90.0;
        let header_height = 30.0;

        egui::ScrollArea::both()
            .id_salt("correlation_heatmap_scroll")
            .show(ui, |ui| {
                let (rect, _response) = ui.allocate_exact_size(
                    egui::vec2(
                        label_width + n as f32 * cell_size + 20.0,
                        header_height + n as f32 * cell_size + 20.0,
                    ),
                    egui::Sense::hover(),
                );

                let painter = ui.painter();

                for (j, name) in matrix.columns.iter().enumerate() {
                    let pos = rect.min
                        + egui::vec2(
                            label_width + j as f32 * cell_size + cell_size / 2.0,
                            header_height - 6.0,
                        );
                    painter.text(
                        pos,
                        egui::Align2::CENTER_BOTTOM,
                        name,
                        egui::FontId::proportional(12.0),
                        ui.visuals().text_color(),
                    );
                }

                for (i, (row_name, row)) in matrix.columns.iter().zip(&matrix.data).enumerate() {
                    painter.text(
                        rect.min
                            + egui::vec2(
                                label_width - 8.0,
                                header_height + i as f32 * cell_size + cell_size / 2.0,
                            ),
                        egui::Align2::RIGHT_CENTER,
                        row_name,
                        egui::FontId::proportional(12.0),
                        ui.visuals().text_color(),
                    );

                    for (j, &val) in row.iter().enumerate() {
                        let cell_rect = egui::Rect::from_min_size(
                            rect.min
                                + egui::vec2(
                                    label_width + j as f32 * cell_size,
                                    header_height + i as f32 * cell_size,
                                ),
                            egui::vec2(cell_size, cell_size),
                        );

                        painter.rect_filled(cell_rect.shrink(1.0), 2.0, coolwarm(val));

                        let text_color = if val.abs() > 0.5 {
                            egui::Color32::WHITE
                        } else {
                            egui::Color32::BLACK
                        };
                        painter.text(
                            cell_rect.center(),
                            egui::Align2::CENTER_CENTER,
                            annotation(val),
                            egui::FontId::proportional(12.0),
                            text_color,
                        );
                    }
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), egui::Color32::from_rgb(59, 76, 192));
        assert_eq!(coolwarm(0.0), egui::Color32::from_rgb(221, 221, 221));
        assert_eq!(coolwarm(1.0), egui::Color32::from_rgb(180, 4, 38));
        assert_eq!(coolwarm(7.0), coolwarm(1.0));
        assert_eq!(coolwarm(f64::NAN), egui::Color32::from_gray(150));
    }

    #[test]
    fn test_annotation_format() {
        assert_eq!(annotation(0.123_456), "0.12");
        assert_eq!(annotation(-1.0), "-1.00");
        assert_eq!(annotation(f64::NAN), "");
    }
}
