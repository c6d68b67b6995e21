//! GUI theme: "Ledger" - muted paper-on-slate palette for report tables
//!
//! Color constants for the salesdeck GUI.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(22, 26, 31);
/// Panel and section background
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 35, 42);
/// Hovered row / highlighted section
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(40, 47, 57);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 228, 216);
pub const TEXT_DIM: Color32 = Color32::from_rgb(170, 166, 156);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(112, 110, 104);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Billed figures and sales side
pub const ACCENT_SALES: Color32 = Color32::from_rgb(96, 196, 160);
/// Budget figures and budget side
pub const ACCENT_BUDGET: Color32 = Color32::from_rgb(120, 160, 240);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(110, 210, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(235, 95, 90);
