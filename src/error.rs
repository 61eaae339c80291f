use thiserror::Error;

/// Rejected controller configuration. No valid slider state exists for these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a slider needs at least one slide")]
    NoSlides,

    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("progress tick must be greater than zero")]
    ZeroTick,
}

/// Contact form validation failure. The message is shown to the visitor as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
