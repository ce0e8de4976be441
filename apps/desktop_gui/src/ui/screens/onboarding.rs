//! Onboarding screen: pick at least one topic from the fixed catalog.

use chrono::Local;
use eframe::egui;
use shared::domain::{TopicInfo, TOPIC_CATALOG};

use crate::controller::events::ScreenEvent;
use crate::ui::{app::DesktopGuiApp, theme};

pub fn show(app: &mut DesktopGuiApp, ctx: &egui::Context, events: &mut Vec<ScreenEvent>) {
    egui::TopBottomPanel::bottom("onboarding_footer")
        .frame(
            egui::Frame::NONE
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin::symmetric(24, 20)),
        )
        .show(ctx, |ui| {
            let can_continue = !app.flow.selection.is_empty();
            let (fill, text_color) = if can_continue {
                (theme::ACCENT, egui::Color32::WHITE)
            } else {
                (theme::DISABLED_FILL, theme::DISABLED_TEXT)
            };
            let button = egui::Button::new(
                egui::RichText::new("Continue")
                    .size(16.0)
                    .strong()
                    .color(text_color),
            )
            .min_size(egui::vec2(ui.available_width(), 50.0))
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(12));
            if ui.add_enabled(can_continue, button).clicked() {
                events.push(ScreenEvent::OnboardingContinue {
                    completed_at: Local::now(),
                });
            }
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin::symmetric(24, 0)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(60.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("What do you want to learn about?")
                                .size(28.0)
                                .strong()
                                .color(theme::TITLE_TEXT),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("Select all that apply")
                                .size(16.0)
                                .color(theme::SUBTLE_TEXT),
                        );
                    });
                    ui.add_space(40.0);

                    let gap = 12.0;
                    let column_width = ((ui.available_width() - gap) / 2.0).max(120.0);
                    for pair in TOPIC_CATALOG.chunks(2) {
                        ui.horizontal(|ui| {
                            ui.style_mut().spacing.item_spacing.x = gap;
                            for info in pair {
                                let selected = app.flow.selection.is_selected(&info.topic_id());
                                if topic_button(ui, info, selected, column_width).clicked() {
                                    events.push(ScreenEvent::TopicToggled(info.topic_id()));
                                }
                            }
                        });
                        ui.add_space(gap);
                    }
                    ui.add_space(40.0);
                });
        });
}

fn topic_button(
    ui: &mut egui::Ui,
    info: &TopicInfo,
    selected: bool,
    width: f32,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 100.0), egui::Sense::click());
    let (fill, border, text_color) = if selected {
        (
            theme::TOPIC_SELECTED_FILL,
            theme::ACCENT,
            theme::TOPIC_SELECTED_TEXT,
        )
    } else {
        (theme::TOPIC_FILL, theme::TOPIC_BORDER, theme::SUBTLE_TEXT)
    };

    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(16), fill);
    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::same(16),
        egui::Stroke::new(2.0, border),
        egui::StrokeKind::Inside,
    );
    ui.painter().text(
        rect.center() - egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        info.emoji,
        egui::FontId::proportional(32.0),
        text_color,
    );

    let galley = ui.fonts_mut(|fonts| {
        let mut job = egui::text::LayoutJob::simple(
            info.title.to_owned(),
            egui::FontId::proportional(14.0),
            text_color,
            width - 16.0,
        );
        job.halign = egui::Align::Center;
        fonts.layout_job(job)
    });
    ui.painter().add(egui::epaint::TextShape::new(
        egui::pos2(rect.center().x, rect.center().y + 4.0),
        galley,
        text_color,
    ));

    response
}
