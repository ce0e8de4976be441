pub mod home;
pub mod onboarding;
pub mod splash;
