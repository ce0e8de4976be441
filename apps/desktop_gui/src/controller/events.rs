//! Events emitted by the screens, applied by the reducer.

use chrono::{DateTime, Local};
use shared::domain::TopicId;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    SplashContinue,
    TopicToggled(TopicId),
    OnboardingContinue { completed_at: DateTime<Local> },
    WidgetHelpRequested,
    WidgetHelpDismissed,
}
