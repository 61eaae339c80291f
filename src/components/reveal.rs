use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::scroll::use_seen;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Animation name the stylesheet keys on, e.g. "fade-up".
    #[prop_or_else(|| "fade-up".to_string())]
    pub animation: String,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Adds `aos-animate` once the wrapped content scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let animated = use_state(|| false);
    let seen = use_seen(node.clone(), config::REVEAL_THRESHOLD, config::REVEAL_BOTTOM_MARGIN);

    {
        let animated = animated.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |seen| {
                let timeout = seen.then(|| {
                    Timeout::new(delay_ms, move || {
                        animated.set(true);
                    })
                });
                move || drop(timeout)
            },
            seen,
        );
    }

    html! {
        <div
            ref={node}
            data-aos={props.animation.clone()}
            class={classes!(props.class.clone(), (*animated).then(|| "aos-animate"))}
        >
            { for props.children.iter() }
        </div>
    }
}
