//! Light theme matching the original Whispi visual style.

use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
pub const TITLE_TEXT: egui::Color32 = egui::Color32::from_rgb(0x1A, 0x1A, 0x1A);
pub const BODY_TEXT: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);
pub const SUBTLE_TEXT: egui::Color32 = egui::Color32::from_rgb(0x66, 0x66, 0x66);
pub const HINT_TEXT: egui::Color32 = egui::Color32::from_rgb(0x88, 0x88, 0x88);

pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const CARD_BORDER: egui::Color32 = egui::Color32::from_rgb(0xEF, 0xEF, 0xEF);

/// Primary action blue (home footer, modal primary button).
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x1F, 0x7A, 0xE0);
/// Onboarding accent blue (continue button, selected topic border).
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x21, 0x96, 0xF3);

pub const TOPIC_FILL: egui::Color32 = egui::Color32::from_rgb(0xF8, 0xF8, 0xF8);
pub const TOPIC_BORDER: egui::Color32 = egui::Color32::from_rgb(0xE8, 0xE8, 0xE8);
pub const TOPIC_SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(0xE3, 0xF2, 0xFD);
pub const TOPIC_SELECTED_TEXT: egui::Color32 = egui::Color32::from_rgb(0x19, 0x76, 0xD2);

pub const DISABLED_FILL: egui::Color32 = egui::Color32::from_rgb(0xE0, 0xE0, 0xE0);
pub const DISABLED_TEXT: egui::Color32 = egui::Color32::from_rgb(0x99, 0x99, 0x99);

pub const SPLASH_BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0xF0, 0xF0, 0xF0);
pub const SPLASH_BUTTON_BORDER: egui::Color32 = egui::Color32::from_rgb(0xE0, 0xE0, 0xE0);

pub const SECONDARY_BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0xF1, 0xF5, 0xF9);
pub const SECONDARY_BUTTON_TEXT: egui::Color32 = egui::Color32::from_rgb(0x0F, 0x17, 0x2A);

/// rgba(0, 0, 0, 0.35) backdrop behind the widget-help sheet.
pub const MODAL_BACKDROP: egui::Color32 = egui::Color32::from_black_alpha(90);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.override_text_color = Some(BODY_TEXT);
    ctx.set_visuals(visuals);
}
