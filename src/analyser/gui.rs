//! Native window showing the diagnostic plots of a cleaning run.
//!
//! Three tabs mirror the three figures of the run: boxen plots of the
//! numeric columns (before the domain bounds are applied), count plots of
//! the categorical columns and the correlation heatmap of the cleaned table.

use super::logic::PlotBundle;
use crate::error::{CleanError, Result};
use eframe::egui;

mod heatmap;
mod plots;

use heatmap::render_correlation_heatmap;
use plots::{render_boxen, render_counts};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Distributions,
    Frequencies,
    Correlations,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Distributions, Self::Frequencies, Self::Correlations];

    pub fn title(self) -> &'static str {
        match self {
            Self::Distributions => "Distributions",
            Self::Frequencies => "Frequencies",
            Self::Correlations => "Correlations",
        }
    }
}

pub struct ViewerApp {
    plots: PlotBundle,
    tab: Tab,
}

impl ViewerApp {
    pub fn new(plots: PlotBundle) -> Self {
        Self {
            plots,
            tab: Tab::default(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("viewer_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Bank dataset diagnostics");
                ui.separator();
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.tab, tab, tab.title());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("viewer_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.tab {
                    Tab::Distributions => {
                        for summary in &self.plots.distributions {
                            render_boxen(ui, summary);
                            ui.add_space(crate::theme::SPACING_SMALL);
                        }
                    }
                    Tab::Frequencies => {
                        for counts in &self.plots.frequencies {
                            render_counts(ui, counts);
                            ui.add_space(crate::theme::SPACING_LARGE);
                        }
                    }
                    Tab::Correlations => {
                        render_correlation_heatmap(ui, &self.plots.correlation);
                    }
                });
        });
    }
}

/// Opens the viewer and blocks until the window is closed.
pub fn show(plots: PlotBundle) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("bank-cleaner")
            .with_inner_size([960.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "bank-cleaner",
        options,
        Box::new(|cc| {
            crate::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(ViewerApp::new(plots)))
        }),
    )
    .map_err(|e| CleanError::Render(e.to_string()))
}
