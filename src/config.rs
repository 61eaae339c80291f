use log::{warn, Level};
use serde::Deserialize;
use web_sys::window;

use crate::slider::{AnimationKind, SliderConfig};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "Amazing WebTech";

// Navbar
pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const MOBILE_BREAKPOINT: f64 = 992.0;
pub const SECTION_OFFSET: f64 = 150.0;
pub const ANCHOR_OFFSET: f64 = 80.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

// Sliders
pub const SWIPE_THRESHOLD: f64 = 50.0;
pub const SWIPE_RESUME_DELAY_MS: u32 = 1000;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 6000;

// Scroll effects
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;

// Forms
pub const CONTACT_SEND_DELAY_MS: u32 = 1500;
pub const NEWSLETTER_SEND_DELAY_MS: u32 = 1000;
pub const MESSAGE_CLEAR_MS: u32 = 5000;

/// Id of the optional `<script type="application/json">` block that overrides
/// the defaults below.
const SITE_CONFIG_ELEMENT: &str = "site-config";

/// Hero slider options. Keys are camelCase so the page markup can use the
/// same names as the stylesheet's data attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    pub autoplay: bool,
    pub autoplay_speed: u32,
    pub animation_type: AnimationKind,
    pub pause_on_hover: bool,
    pub show_dots: bool,
    pub show_progress: bool,
    pub show_counter: bool,
    pub keyboard: bool,
    pub touch: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_speed: 5000,
            animation_type: AnimationKind::Fade,
            pause_on_hover: true,
            show_dots: true,
            show_progress: true,
            show_counter: true,
            keyboard: true,
            touch: true,
        }
    }
}

impl SliderOptions {
    pub fn controller_config(&self, slide_count: usize) -> SliderConfig {
        SliderConfig {
            autoplay_interval_ms: self.autoplay_speed,
            autoplay_enabled: self.autoplay,
            progress_enabled: self.show_progress,
            ..SliderConfig::new(slide_count)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialOptions {
    pub autoplay: bool,
    pub interval_ms: u32,
}

impl Default for TestimonialOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: TESTIMONIAL_INTERVAL_MS,
        }
    }
}

impl TestimonialOptions {
    pub fn controller_config(&self, slide_count: usize) -> SliderConfig {
        SliderConfig {
            autoplay_interval_ms: self.interval_ms,
            autoplay_enabled: self.autoplay,
            progress_enabled: false,
            exit_delay_ms: 0,
            ..SliderConfig::new(slide_count)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub hero: SliderOptions,
    pub testimonials: TestimonialOptions,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Read overrides from the page, falling back to defaults when the block is
/// missing or malformed.
pub fn load_site_config() -> SiteConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(SITE_CONFIG_ELEMENT))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => SiteConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed #{}: {}", SITE_CONFIG_ELEMENT, e);
            SiteConfig::default()
        }),
        _ => SiteConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "hero": { "autoplaySpeed": 3000, "animationType": "zoom", "touch": false } }"#,
        )
        .unwrap();

        assert_eq!(config.hero.autoplay_speed, 3000);
        assert_eq!(config.hero.animation_type, AnimationKind::Zoom);
        assert!(!config.hero.touch);
        assert!(config.hero.autoplay);
        assert!(config.hero.show_dots);
        assert_eq!(config.testimonials, TestimonialOptions::default());
    }

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn unknown_animation_is_rejected() {
        assert!(SiteConfig::from_json(r#"{ "hero": { "animationType": "spin" } }"#).is_err());
    }

    #[test]
    fn hero_options_map_onto_controller_config() {
        let options = SliderOptions {
            autoplay: false,
            autoplay_speed: 7000,
            show_progress: false,
            ..SliderOptions::default()
        };
        let config = options.controller_config(4);
        assert_eq!(config.slide_count, 4);
        assert_eq!(config.autoplay_interval_ms, 7000);
        assert!(!config.autoplay_enabled);
        assert!(!config.progress_enabled);
        assert_eq!(config.exit_delay_ms, 100);
    }

    #[test]
    fn testimonials_switch_instantly_without_progress() {
        let config = TestimonialOptions::default().controller_config(3);
        assert_eq!(config.autoplay_interval_ms, 6000);
        assert_eq!(config.exit_delay_ms, 0);
        assert!(!config.progress_enabled);
    }
}
