//! Home screen: the swipeable fact card, the swipe hint, and the
//! add-widget help sheet.

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use card_core::DragOffset;
use eframe::egui;
use egui::emath::Rot2;
use egui::epaint::TextShape;

use crate::controller::events::ScreenEvent;
use crate::ui::{app::DesktopGuiApp, theme};

const APPLE_WIDGET_GUIDE_URL: &str = "https://support.apple.com/en-us/HT207122";
const CARD_CORNER_RADIUS: f32 = 20.0;
const CARD_MIN_HEIGHT: f32 = 260.0;
const CARD_PADDING: f32 = 20.0;

pub fn show(app: &mut DesktopGuiApp, ctx: &egui::Context, events: &mut Vec<ScreenEvent>) {
    egui::TopBottomPanel::top("home_header")
        .frame(
            egui::Frame::NONE
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin {
                    left: 24,
                    right: 24,
                    top: 8,
                    bottom: 12,
                }),
        )
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Whispi's Daily pick for you:")
                    .size(22.0)
                    .strong()
                    .color(theme::TITLE_TEXT),
            );
        });

    egui::TopBottomPanel::bottom("home_footer")
        .frame(
            egui::Frame::NONE
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin {
                    left: 24,
                    right: 24,
                    top: 0,
                    bottom: 20,
                }),
        )
        .show_separator_line(false)
        .show(ctx, |ui| {
            let button = egui::Button::new(
                egui::RichText::new("Add widget to home screen")
                    .size(16.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .min_size(egui::vec2(ui.available_width(), 52.0))
            .fill(theme::PRIMARY)
            .corner_radius(egui::CornerRadius::same(14));
            if ui.add(button).clicked() {
                events.push(ScreenEvent::WidgetHelpRequested);
            }
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin::symmetric(20, 0)),
        )
        .show(ctx, |ui| {
            show_fact_card(app, ui);
        });

    show_widget_help(app, ctx, events);
}

fn show_fact_card(app: &mut DesktopGuiApp, ui: &mut egui::Ui) {
    let now = ui.ctx().input(|i| i.time);
    let avail = ui.available_rect_before_wrap();
    let card_width = avail.width().min(520.0);
    let fact = app.deck.fact(app.swipe.current_index()).to_owned();

    // Measure the card text first so a long fact grows the card.
    let text_galley = ui.fonts_mut(|fonts| {
        let mut job = egui::text::LayoutJob::simple(
            fact,
            egui::FontId::proportional(18.0),
            theme::BODY_TEXT,
            card_width - CARD_PADDING * 2.0,
        );
        job.halign = egui::Align::Center;
        fonts.layout_job(job)
    });
    let emoji_galley = ui.fonts_mut(|fonts| {
        let mut job = egui::text::LayoutJob::simple(
            "\u{2728}".to_owned(),
            egui::FontId::proportional(28.0),
            theme::BODY_TEXT,
            f32::INFINITY,
        );
        job.halign = egui::Align::Center;
        fonts.layout_job(job)
    });
    let content_height = emoji_galley.size().y + 12.0 + text_galley.size().y;
    let card_height = (content_height + CARD_PADDING * 2.0).max(CARD_MIN_HEIGHT);

    let base_center = avail.center() - egui::vec2(0.0, 14.0);
    let card_at = |offset_x: f32, offset_y: f32| {
        egui::Rect::from_center_size(
            base_center + egui::vec2(offset_x, offset_y),
            egui::vec2(card_width, card_height),
        )
    };

    let transform = app.swipe.transform();
    let response = ui.interact(
        card_at(transform.translate_x, transform.translate_y),
        ui.id().with("fact_card"),
        egui::Sense::drag(),
    );
    if response.drag_started() {
        app.drag_accum = egui::Vec2::ZERO;
        app.swipe.begin_drag();
    }
    if response.dragged() {
        app.drag_accum += response.drag_delta();
        app.swipe
            .drag_to(DragOffset::new(app.drag_accum.x, app.drag_accum.y));
    }
    if response.drag_stopped() {
        app.swipe.release(now);
        app.drag_accum = egui::Vec2::ZERO;
    }

    // Paint from the post-input transform so the card tracks the pointer
    // within the same frame.
    let transform = app.swipe.transform();
    let card_rect = card_at(transform.translate_x, transform.translate_y);
    let angle = transform.rotation_degrees.to_radians();
    paint_card(ui.painter(), card_rect, angle, &emoji_galley, &text_galley);

    let hint_pos = egui::pos2(base_center.x, base_center.y + card_height / 2.0 + 16.0);
    ui.painter().text(
        hint_pos,
        egui::Align2::CENTER_TOP,
        "Swipe left or right",
        egui::FontId::proportional(13.0),
        theme::HINT_TEXT,
    );
}

/// Draws the card as a rounded rectangle rotated about its center, with the
/// sparkle emoji and fact text rotated along with it.
fn paint_card(
    painter: &egui::Painter,
    rect: egui::Rect,
    angle: f32,
    emoji: &Arc<egui::Galley>,
    text: &Arc<egui::Galley>,
) {
    let rot = Rot2::from_angle(angle);
    let center = rect.center();
    let outline: Vec<egui::Pos2> = rounded_rect_outline(rect, CARD_CORNER_RADIUS)
        .into_iter()
        .map(|p| rotate_about(p, center, rot))
        .collect();
    painter.add(egui::Shape::convex_polygon(
        outline,
        theme::CARD_FILL,
        egui::Stroke::new(1.0, theme::CARD_BORDER),
    ));

    let content_height = emoji.size().y + 12.0 + text.size().y;
    let mut y = center.y - content_height / 2.0;
    for galley in [emoji, text] {
        // Center-aligned galleys anchor on x; rotating the anchor about the
        // card center keeps the text glued to the card.
        let anchor = rotate_about(egui::pos2(center.x, y), center, rot);
        let mut shape = TextShape::new(anchor, galley.clone(), theme::BODY_TEXT);
        shape.angle = angle;
        painter.add(shape);
        y += galley.size().y + 12.0;
    }
}

fn rotate_about(p: egui::Pos2, center: egui::Pos2, rot: Rot2) -> egui::Pos2 {
    center + rot * (p - center)
}

/// Rounded-rect outline sampled clockwise, one quarter arc per corner.
fn rounded_rect_outline(rect: egui::Rect, radius: f32) -> Vec<egui::Pos2> {
    const SEGMENTS: usize = 8;
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let corner = |center: egui::Pos2, start: f32| {
        (0..=SEGMENTS).map(move |i| {
            let a = start + (i as f32 / SEGMENTS as f32) * FRAC_PI_2;
            center + r * egui::vec2(a.cos(), a.sin())
        })
    };

    let mut points = Vec::with_capacity(4 * (SEGMENTS + 1));
    points.extend(corner(rect.right_top() + egui::vec2(-r, r), -FRAC_PI_2));
    points.extend(corner(rect.right_bottom() + egui::vec2(-r, -r), 0.0));
    points.extend(corner(rect.left_bottom() + egui::vec2(r, -r), FRAC_PI_2));
    points.extend(corner(rect.left_top() + egui::vec2(r, r), PI));
    points
}

fn show_widget_help(app: &DesktopGuiApp, ctx: &egui::Context, events: &mut Vec<ScreenEvent>) {
    if !app.flow.widget_help_open {
        return;
    }

    let sheet_frame = egui::Frame::NONE
        .fill(theme::BACKGROUND)
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::symmetric(20, 16));

    let response = egui::Modal::new(egui::Id::new("widget_help_sheet"))
        .frame(sheet_frame)
        .backdrop_color(theme::MODAL_BACKDROP)
        .show(ctx, |ui| {
            ui.set_width((ctx.screen_rect().width() - 48.0).min(380.0));

            ui.label(
                egui::RichText::new("Add Whispi as a widget")
                    .size(18.0)
                    .strong()
                    .color(theme::TITLE_TEXT),
            );
            ui.label(
                egui::RichText::new("iPhone steps")
                    .size(13.0)
                    .color(theme::SUBTLE_TEXT),
            );
            ui.add_space(8.0);

            for step in [
                "1. Go to your iPhone Home Screen.",
                "2. Touch and hold anywhere until apps jiggle.",
                "3. Tap the \u{2795} icon in the top-left corner.",
                "4. Search for \u{201C}Whispi\u{201D}.",
                "5. Choose a size, then tap \u{201C}Add Widget\u{201D}.",
            ] {
                ui.label(egui::RichText::new(step).size(15.0).color(theme::BODY_TEXT));
                ui.add_space(4.0);
            }
            ui.label(
                egui::RichText::new("Tip: You can place it on any screen you like.")
                    .size(13.0)
                    .color(theme::SUBTLE_TEXT),
            );
            ui.add_space(16.0);

            ui.columns(2, |columns| {
                let guide = egui::Button::new(
                    egui::RichText::new("View Apple's guide")
                        .size(15.0)
                        .strong()
                        .color(theme::SECONDARY_BUTTON_TEXT),
                )
                .min_size(egui::vec2(columns[0].available_width(), 44.0))
                .fill(theme::SECONDARY_BUTTON_FILL)
                .corner_radius(egui::CornerRadius::same(12));
                if columns[0].add(guide).clicked() {
                    columns[0]
                        .ctx()
                        .open_url(egui::OpenUrl::new_tab(APPLE_WIDGET_GUIDE_URL));
                }

                let done = egui::Button::new(
                    egui::RichText::new("Got it")
                        .size(15.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .min_size(egui::vec2(columns[1].available_width(), 44.0))
                .fill(theme::PRIMARY)
                .corner_radius(egui::CornerRadius::same(12));
                if columns[1].add(done).clicked() {
                    events.push(ScreenEvent::WidgetHelpDismissed);
                }
            });
        });

    if response.should_close() {
        events.push(ScreenEvent::WidgetHelpDismissed);
    }
}
