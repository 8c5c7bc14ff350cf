//! Grading Opportunity Dashboard Screen
//!
//! Sidebar filters on the left, summary metrics and the priced-card
//! table in the center. Sorting for display happens here; the filter
//! core hands rows over in fetch order.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::filter::sort_rows_desc;
use crate::models::{PricedRow, ResultSummary};
use crate::ui::state::{DashboardState, Notice};

pub struct DashboardScreen;

impl DashboardScreen {
    pub fn show(ctx: &egui::Context, state: &mut DashboardState) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                Self::show_filters(ui, state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pokemon TCG Grading Opportunity Dashboard");
            ui.label("Live raw pricing data. Graded pricing coming next.");
            ui.add_space(10.0);

            Self::show_refresh_row(ui, state);
            ui.add_space(5.0);
            Self::show_notice(ui, state);
            ui.add_space(10.0);

            let (mut rows, summary) = state.filtered_rows();
            sort_rows_desc(&mut rows);

            Self::show_metrics(ui, &summary);
            ui.add_space(10.0);
            Self::show_results_table(ui, &rows);
        });
    }

    fn show_filters(ui: &mut egui::Ui, state: &mut DashboardState) {
        ui.heading("Filters");
        ui.add_space(10.0);

        ui.label("Pokemon Set:");
        if state.available_sets.is_empty() {
            ui.weak("No sets loaded yet");
        } else {
            egui::ScrollArea::vertical()
                .max_height(250.0)
                .id_salt("set_filter_scroll")
                .show(ui, |ui| {
                    for set_name in &state.available_sets {
                        let mut checked = state.selected_sets.contains(set_name);
                        if ui.checkbox(&mut checked, set_name).changed() {
                            if checked {
                                state.selected_sets.insert(set_name.clone());
                            } else {
                                state.selected_sets.remove(set_name);
                            }
                        }
                    }
                });
        }

        ui.add_space(10.0);
        ui.label("Maximum Raw Price ($):");
        ui.add(egui::Slider::new(&mut state.max_price, 0.0..=state.price_ceiling).max_decimals(0));

        ui.add_space(10.0);
        ui.label("Estimated Grading Cost ($):");
        // Inert until the graded-pricing source lands
        ui.add(
            egui::DragValue::new(&mut state.grading_cost)
                .range(0.0..=1000.0)
                .speed(5.0),
        );

        ui.add_space(10.0);
        ui.label("Cards per fetch:");
        egui::ComboBox::from_id_salt("page_size")
            .selected_text(format!("{}", state.page_size))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.page_size, 25, "25");
                ui.selectable_value(&mut state.page_size, 50, "50");
                ui.selectable_value(&mut state.page_size, 100, "100");
                ui.selectable_value(&mut state.page_size, 250, "250");
            });
    }

    fn show_refresh_row(ui: &mut egui::Ui, state: &mut DashboardState) {
        ui.horizontal(|ui| {
            let refresh = ui.add_enabled(!state.in_flight, egui::Button::new("Refresh"));
            if refresh.clicked() {
                state.trigger_fetch();
            }

            if state.in_flight {
                ui.spinner();
                ui.label("Fetching card prices...");
            } else if let Some(refreshed) = state.last_refreshed {
                ui.weak(format!("Last updated {}", refreshed.format("%H:%M:%S")));
            }
        });
    }

    fn show_notice(ui: &mut egui::Ui, state: &DashboardState) {
        match &state.notice {
            Some(Notice::FetchFailed(msg)) => {
                ui.colored_label(egui::Color32::RED, format!("Fetch failed: {msg}"));
                ui.weak("Use Refresh to retry.");
            }
            Some(Notice::EmptyResult) => {
                ui.colored_label(egui::Color32::YELLOW, "No pricing data returned.");
            }
            None => {}
        }
    }

    fn show_metrics(ui: &mut egui::Ui, summary: &ResultSummary) {
        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label("Cards Found");
                    ui.heading(summary.count.to_string());
                });
            });
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label("Avg Raw Price");
                    let text = match summary.mean_price {
                        Some(mean) => format!("${mean:.2}"),
                        None => "—".to_string(),
                    };
                    ui.heading(text);
                });
            });
        });
    }

    fn show_results_table(ui: &mut egui::Ui, rows: &[PricedRow]) {
        let graded = |price: Option<f64>| match price {
            Some(p) => format!("${p:.2}"),
            None => "—".to_string(),
        };

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder())
            .column(Column::remainder())
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(60.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("ID");
                });
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Set");
                });
                header.col(|ui| {
                    ui.strong("Raw $");
                });
                header.col(|ui| {
                    ui.strong("PSA 9");
                });
                header.col(|ui| {
                    ui.strong("PSA 10");
                });
            })
            .body(|mut body| {
                for row in rows {
                    body.row(18.0, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(&row.card_id);
                        });
                        table_row.col(|ui| {
                            ui.label(&row.card_name);
                        });
                        table_row.col(|ui| {
                            ui.label(&row.set_name);
                        });
                        table_row.col(|ui| {
                            ui.label(format!("{:.2}", row.raw_price));
                        });
                        table_row.col(|ui| {
                            ui.label(graded(row.graded_price_psa9));
                        });
                        table_row.col(|ui| {
                            ui.label(graded(row.graded_price_psa10));
                        });
                    });
                }
            });
    }
}
