use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn is_mobile(width: f64) -> bool {
    width <= config::MOBILE_BREAKPOINT
}

/// Page offset to scroll to so a target sits just below the fixed header.
pub fn anchor_target(rect_top: f64, scroll_y: f64) -> f64 {
    (rect_top + scroll_y - config::ANCHOR_OFFSET).max(0.0)
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll to the element with `id`. Returns false when it isn't on the
/// page so the caller can fall back to the browser's own navigation.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(window) = window() else { return false };
    let target = window.document().and_then(|doc| doc.get_element_by_id(id));
    match target {
        Some(element) => {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            smooth_scroll_to(anchor_target(element.get_bounding_client_rect().top(), scroll_y));
            true
        }
        None => false,
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Page-relative top of a section, as used for active-link tracking.
pub fn section_top(id: &str) -> Option<f64> {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| f64::from(element.offset_top()))
}

/// Share of an element's height inside the viewport, after shrinking the
/// viewport's bottom edge by `bottom_margin`.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }
    let visible = bottom.min(viewport_height - bottom_margin) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// True once the referenced element has been at least `threshold` visible.
/// Latches: scrolling back out does not reset it.
#[hook]
pub fn use_seen(node: NodeRef, threshold: f64, bottom_margin: f64) -> bool {
    let seen = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                if !*seen {
                    if let Some(element) = node.cast::<Element>() {
                        let rect = element.get_bounding_client_rect();
                        let fraction = visible_fraction(
                            rect.top(),
                            rect.bottom(),
                            viewport_height(),
                            bottom_margin,
                        );
                        if fraction > 0.0 && fraction >= threshold {
                            seen.set(true);
                        }
                    }
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_target_leaves_room_for_header() {
        assert_eq!(anchor_target(400.0, 1000.0), 1320.0);
        assert_eq!(anchor_target(20.0, 0.0), 0.0);
    }

    #[test]
    fn mobile_breakpoint_is_inclusive() {
        assert!(is_mobile(992.0));
        assert!(is_mobile(375.0));
        assert!(!is_mobile(993.0));
    }

    #[test]
    fn fully_visible_element() {
        assert_eq!(visible_fraction(100.0, 300.0, 800.0, 0.0), 1.0);
    }

    #[test]
    fn element_below_the_fold() {
        assert_eq!(visible_fraction(900.0, 1100.0, 800.0, 0.0), 0.0);
    }

    #[test]
    fn partially_visible_element() {
        assert_eq!(visible_fraction(700.0, 900.0, 800.0, 0.0), 0.5);
        // bottom margin pulls the fold up
        assert_eq!(visible_fraction(700.0, 900.0, 800.0, 50.0), 0.25);
        // scrolled half off the top
        assert_eq!(visible_fraction(-100.0, 100.0, 800.0, 0.0), 0.5);
    }

    #[test]
    fn zero_height_is_never_visible() {
        assert_eq!(visible_fraction(100.0, 100.0, 800.0, 0.0), 0.0);
    }
}
