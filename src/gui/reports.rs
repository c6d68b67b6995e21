//! Accumulated reports panel

use eframe::egui::{self, RichText, ScrollArea};
use uuid::Uuid;

use crate::gui::theme::{
    ACCENT_BUDGET, ACCENT_GREEN, ACCENT_RED, ACCENT_SALES, BG_HIGHLIGHT, TEXT_DIM, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::report::{ReportAccumulator, ReportEntry};

/// Actions that can be returned from the reports panel
pub enum ReportAction {
    /// Add the current selection under the given title
    Add(String),
    Remove(Uuid),
    Clear,
    Save,
}

/// Render the reports side panel
///
/// Returns an action if the user interacted with the panel
pub fn render_reports_panel(
    ui: &mut egui::Ui,
    reports: &ReportAccumulator,
    title_input: &mut String,
    status: &Option<(String, bool)>,
) -> Option<ReportAction> {
    let mut action = None;

    ui.label(
        RichText::new(format!("Reports ({})", reports.len()))
            .color(TEXT_PRIMARY)
            .size(16.0),
    );
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(title_input)
                .hint_text("Report title")
                .desired_width(160.0),
        );
        if ui.button(RichText::new("+ Add").color(ACCENT_GREEN)).clicked() {
            action = Some(ReportAction::Add(std::mem::take(title_input)));
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            action = Some(ReportAction::Save);
        }
        if ui
            .add_enabled(
                !reports.is_empty(),
                egui::Button::new(RichText::new("Clear").color(ACCENT_RED)),
            )
            .clicked()
        {
            action = Some(ReportAction::Clear);
        }
    });

    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.label(RichText::new(msg).small().color(color));
    }

    ui.separator();

    ScrollArea::vertical().show(ui, |ui| {
        if reports.is_empty() {
            ui.label(RichText::new("No reports yet").color(TEXT_MUTED));
        }
        for entry in reports.entries() {
            if let Some(id) = render_entry(ui, entry) {
                action = Some(ReportAction::Remove(id));
            }
        }
    });

    action
}

/// Render a single report card, returning its id when removal was clicked
fn render_entry(ui: &mut egui::Ui, entry: &ReportEntry) -> Option<Uuid> {
    let mut removed = None;
    egui::Frame::NONE
        .fill(BG_HIGHLIGHT)
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&entry.title).color(TEXT_PRIMARY).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        removed = Some(entry.id);
                    }
                });
            });
            ui.label(
                RichText::new(entry.created_at.format("%Y-%m-%d %H:%M").to_string())
                    .small()
                    .color(TEXT_MUTED),
            );
            ui.label(
                RichText::new(format!("{} branches", entry.branches.len()))
                    .small()
                    .color(TEXT_DIM),
            );
            ui.label(
                RichText::new(format!("{} sales execs", entry.sales_executives.len()))
                    .small()
                    .color(ACCENT_SALES),
            );
            ui.label(
                RichText::new(format!("{} budget execs", entry.budget_executives.len()))
                    .small()
                    .color(ACCENT_BUDGET),
            );
        });
    ui.add_space(4.0);
    removed
}
