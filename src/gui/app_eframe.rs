//! eframe::App implementation for DashboardApp
//!
//! Contains the main update loop that runs every frame.

use eframe::egui::{self, RichText, ScrollArea};

use super::app::DashboardApp;
use super::reports::render_reports_panel;
use super::selector::{render_branch_selector, render_executive_selector};
use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_PRIMARY, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY};

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Notifications from the previous frame's clicks
        self.drain_selection_events();

        egui::TopBottomPanel::top("mapping_bar")
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Mapping file").color(TEXT_MUTED));
                    let edit = ui.add(
                        egui::TextEdit::singleline(&mut self.mapping_input)
                            .font(egui::TextStyle::Monospace)
                            .text_color(TEXT_PRIMARY)
                            .hint_text("mapping.json")
                            .desired_width(360.0),
                    );
                    let submitted =
                        edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Load").clicked() || submitted {
                        self.reload_mapping();
                    }
                    if let Some((msg, is_error)) = &self.mapping_status {
                        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
                        ui.label(RichText::new(msg).small().color(color));
                    }
                });
            });

        egui::SidePanel::right("reports_panel")
            .resizable(true)
            .default_width(260.0)
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(10.0))
            .show(ctx, |ui| {
                if let Some(action) = render_reports_panel(
                    ui,
                    &self.reports,
                    &mut self.report_title,
                    &self.report_status,
                ) {
                    self.handle_report_action(action);
                }
            });

        let branch_columns = self.config.settings.branch_columns;
        let executive_columns = self.config.settings.executive_columns;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(12.0))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    render_branch_selector(ui, &mut self.branch_selector, branch_columns);
                    ui.add_space(12.0);
                    render_executive_selector(ui, &mut self.executive_selector, executive_columns);
                });
            });

        // Apply notifications raised during this frame
        self.drain_selection_events();
    }
}
