//! Screen-flow state and its transitions. Screens emit [`ScreenEvent`]s;
//! `apply` is the only place navigation state changes.

use card_core::TopicSelection;
use chrono::{DateTime, Local};

use crate::controller::events::ScreenEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Onboarding,
    Home,
}

#[derive(Debug, Clone)]
pub struct FlowState {
    pub screen: Screen,
    pub selection: TopicSelection,
    pub widget_help_open: bool,
    pub onboarding_completed_at: Option<DateTime<Local>>,
}

impl FlowState {
    /// First launch: start at the splash screen with nothing selected.
    pub fn fresh() -> Self {
        Self {
            screen: Screen::Splash,
            selection: TopicSelection::new(),
            widget_help_open: false,
            onboarding_completed_at: None,
        }
    }

    /// Relaunch with a persisted selection: skip straight to the home screen.
    pub fn resumed(
        selection: TopicSelection,
        onboarding_completed_at: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            screen: Screen::Home,
            selection,
            widget_help_open: false,
            onboarding_completed_at,
        }
    }
}

pub fn apply(state: &mut FlowState, event: ScreenEvent) {
    match event {
        ScreenEvent::SplashContinue => {
            if state.screen == Screen::Splash {
                state.screen = Screen::Onboarding;
                tracing::debug!("splash -> onboarding");
            }
        }
        ScreenEvent::TopicToggled(topic_id) => {
            if state.screen == Screen::Onboarding {
                let now_selected = state.selection.toggle(topic_id.clone());
                tracing::debug!(topic = %topic_id, now_selected, "topic toggled");
            }
        }
        ScreenEvent::OnboardingContinue { completed_at } => {
            // Continue is disabled until at least one topic is picked; an
            // event slipping through anyway is dropped here.
            if state.screen == Screen::Onboarding && !state.selection.is_empty() {
                state.screen = Screen::Home;
                state.onboarding_completed_at = Some(completed_at);
                tracing::info!(topics = state.selection.len(), "onboarding complete");
            }
        }
        ScreenEvent::WidgetHelpRequested => {
            if state.screen == Screen::Home {
                state.widget_help_open = true;
            }
        }
        ScreenEvent::WidgetHelpDismissed => {
            state.widget_help_open = false;
        }
    }
}
