//! App shell: owns the screen-flow state, the swipe controller, and the
//! persisted settings.

use card_core::{CardSwipeController, LayoutMetrics, SwipePhase, TopicSelection};
use chrono::{DateTime, Local};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::{FactDeck, TopicId};

use crate::controller::reducer::{self, FlowState, Screen};
use crate::ui::{screens, theme};

pub const SETTINGS_STORAGE_KEY: &str = "whispi_desktop_settings";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedAppSettings {
    pub selected_topics: Vec<String>,
    pub onboarding_completed_at: Option<String>,
}

impl PersistedAppSettings {
    pub fn from_runtime(flow: &FlowState) -> Self {
        Self {
            selected_topics: flow
                .selection
                .sorted_ids()
                .into_iter()
                .map(|id| id.0)
                .collect(),
            onboarding_completed_at: flow.onboarding_completed_at.map(|t| t.to_rfc3339()),
        }
    }

    fn completed_at(&self) -> Option<DateTime<Local>> {
        self.onboarding_completed_at.as_deref().and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|t| t.with_timezone(&Local))
        })
    }
}

pub struct DesktopGuiApp {
    pub(crate) flow: FlowState,
    pub(crate) deck: FactDeck,
    pub(crate) swipe: CardSwipeController,
    pub(crate) drag_accum: egui::Vec2,
    theme_applied: bool,
}

impl DesktopGuiApp {
    pub fn new(persisted: Option<PersistedAppSettings>) -> Self {
        let deck = FactDeck::builtin();
        // Placeholder layout; replaced with the real screen rect on the
        // first frame.
        let swipe = CardSwipeController::for_deck(&deck, LayoutMetrics::new(420.0, 840.0));
        let flow = match persisted {
            Some(settings) if !settings.selected_topics.is_empty() => {
                let completed_at = settings.completed_at();
                let selection =
                    TopicSelection::from_ids(settings.selected_topics.into_iter().map(TopicId));
                tracing::info!(topics = selection.len(), "resuming past onboarding");
                FlowState::resumed(selection, completed_at)
            }
            _ => FlowState::fresh(),
        };
        Self {
            flow,
            deck,
            swipe,
            drag_accum: egui::Vec2::ZERO,
            theme_applied: false,
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        // Layout is fed in every frame instead of read once at startup, so
        // resizing the window moves the swipe threshold with it.
        let screen_rect = ctx.screen_rect();
        self.swipe
            .set_layout(LayoutMetrics::new(screen_rect.width(), screen_rect.height()));

        let now = ctx.input(|i| i.time);
        let animating = self.swipe.tick(now);

        let mut events = Vec::new();
        match self.flow.screen {
            Screen::Splash => screens::splash::show(ctx, &mut events),
            Screen::Onboarding => screens::onboarding::show(self, ctx, &mut events),
            Screen::Home => screens::home::show(self, ctx, &mut events),
        }
        for event in events {
            reducer::apply(&mut self.flow, event);
        }

        if animating || self.swipe.phase() == SwipePhase::Dragging {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedAppSettings::from_runtime(&self.flow);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
