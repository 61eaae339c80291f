use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::scroll::scroll_to_top;
use crate::config;

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_THRESHOLD
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <a
            href="#home"
            id="back-to-top"
            class={classes!("back-to-top", back_to_top_visible(scroll_y).then(|| "visible"))}
            aria-label="Back to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_after_scrolling_past_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));
    }
}
