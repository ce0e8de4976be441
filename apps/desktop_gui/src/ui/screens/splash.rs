//! Splash screen: greeting plus a single Continue button.

use eframe::egui;

use crate::controller::events::ScreenEvent;
use crate::ui::theme;

pub fn show(ctx: &egui::Context, events: &mut Vec<ScreenEvent>) {
    egui::TopBottomPanel::bottom("splash_footer")
        .frame(
            egui::Frame::NONE
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin {
                    left: 40,
                    right: 40,
                    top: 0,
                    bottom: 60,
                }),
        )
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let button = egui::Button::new(
                    egui::RichText::new("Continue")
                        .size(16.0)
                        .color(theme::SUBTLE_TEXT),
                )
                .min_size(egui::vec2(120.0, 48.0))
                .fill(theme::SPLASH_BUTTON_FILL)
                .stroke(egui::Stroke::new(1.0, theme::SPLASH_BUTTON_BORDER))
                .corner_radius(egui::CornerRadius::same(12));
                if ui.add(button).clicked() {
                    events.push(ScreenEvent::SplashContinue);
                }
            });
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin::symmetric(40, 0)),
        )
        .show(ctx, |ui| {
            let avail = ui.available_height();
            ui.add_space((avail * 0.5 - 60.0).max(0.0));
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Hi. I'm Whispi.")
                        .size(32.0)
                        .strong()
                        .color(theme::TITLE_TEXT),
                );
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("I find facts for curious minds like yours.")
                        .size(18.0)
                        .color(theme::SUBTLE_TEXT),
                );
            });
        });
}
