//! Checkbox rendering for the branch and executive selectors
//!
//! Checkbox state is read from the selection set each frame; a click is
//! turned into the matching selector operation, never written back directly.

use eframe::egui::{self, RichText};

use crate::gui::theme::{
    ACCENT_BUDGET, ACCENT_SALES, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::selection::{
    partition_columns, BranchSelector, ExecutiveSelector, ExecutiveSide, SelectionSet,
};

/// Click collected while drawing a selection set
enum SetClick {
    All,
    One(String),
}

/// Draw the "select all" checkbox plus one checkbox per candidate
fn render_set(
    ui: &mut egui::Ui,
    set: &SelectionSet,
    column_count: usize,
    all_label: &str,
) -> Option<SetClick> {
    let mut click = None;

    let mut all = set.select_all();
    if ui
        .checkbox(&mut all, RichText::new(all_label).color(TEXT_PRIMARY).strong())
        .changed()
    {
        click = Some(SetClick::All);
    }

    if set.candidates().is_empty() {
        ui.label(RichText::new("Nothing to select").small().color(TEXT_MUTED));
        return click;
    }

    let columns = partition_columns(&set.candidates()[..], column_count.max(1));
    ui.columns(columns.len(), |uis| {
        for (col_ui, items) in uis.iter_mut().zip(columns.iter()) {
            for item in items.iter() {
                let mut checked = set.is_selected(item);
                if col_ui
                    .checkbox(&mut checked, RichText::new(item).color(TEXT_DIM))
                    .changed()
                {
                    click = Some(SetClick::One(item.clone()));
                }
            }
        }
    });

    click
}

fn section_frame<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}

/// Render the branch selector grid
pub fn render_branch_selector(ui: &mut egui::Ui, selector: &mut BranchSelector, columns: usize) {
    let set = selector.set();
    let header = format!(
        "Branches ({}/{})",
        set.selected_count(),
        set.candidates().len()
    );

    let click = section_frame(ui, |ui| {
        ui.label(RichText::new(header).color(TEXT_PRIMARY).size(15.0));
        ui.add_space(6.0);
        render_set(ui, selector.set(), columns, "All branches")
    });

    match click {
        Some(SetClick::All) => selector.toggle_all(),
        Some(SetClick::One(branch)) => selector.toggle_one(&branch),
        None => {}
    }
}

/// Render the sales and budget executive lists side by side
pub fn render_executive_selector(
    ui: &mut egui::Ui,
    selector: &mut ExecutiveSelector,
    columns: usize,
) {
    let mut clicks: Vec<(ExecutiveSide, SetClick)> = Vec::new();

    section_frame(ui, |ui| {
        ui.columns(2, |uis| {
            for (side_ui, side) in uis
                .iter_mut()
                .zip([ExecutiveSide::Sales, ExecutiveSide::Budget])
            {
                let set = selector.side(side);
                let color = match side {
                    ExecutiveSide::Sales => ACCENT_SALES,
                    ExecutiveSide::Budget => ACCENT_BUDGET,
                };
                side_ui.label(
                    RichText::new(format!(
                        "{} ({}/{})",
                        side.label(),
                        set.selected_count(),
                        set.candidates().len()
                    ))
                    .color(color)
                    .size(15.0),
                );
                side_ui.add_space(6.0);
                if let Some(click) = render_set(side_ui, set, columns, "Select all") {
                    clicks.push((side, click));
                }
            }
        });
    });

    for (side, click) in clicks {
        match click {
            SetClick::All => selector.toggle_all(side),
            SetClick::One(name) => selector.toggle_one(side, &name),
        }
    }
}
