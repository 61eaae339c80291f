use log::{debug, error};
use yew::prelude::*;

use crate::components::slide_view::{view_callbacks, with_controller, SlideView, SlotController, ViewAction};
use crate::config::TestimonialOptions;
use crate::slider::{AnimationKind, Direction, GlooScheduler, SlideController};

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub role: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: Vec<Testimonial>,
    #[prop_or_default]
    pub options: TestimonialOptions,
}

/// Rotating quotes. Switches instantly, so only the `active` class matters.
#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let count = props.items.len();
    let view = {
        let playing = props.options.autoplay;
        use_reducer(move || SlideView::new(count, AnimationKind::Fade, playing))
    };
    let slot: SlotController = use_mut_ref(|| None);

    {
        let view = view.clone();
        let slot = slot.clone();
        use_effect_with_deps(
            move |(count, options): &(usize, TestimonialOptions)| {
                view.dispatch(ViewAction::Reset(SlideView::new(*count, AnimationKind::Fade, options.autoplay)));
                match SlideController::new(options.controller_config(*count), GlooScheduler, view_callbacks(&view)) {
                    Ok(controller) => {
                        debug!("testimonials: rotating {} items", count);
                        *slot.borrow_mut() = Some(controller);
                    }
                    Err(e) => error!("testimonials: not rotating: {}", e),
                }
                move || {
                    let controller = slot.borrow_mut().take();
                    if let Some(controller) = controller {
                        controller.destroy();
                    }
                }
            },
            (count, props.options.clone()),
        );
    }

    let dot = |index: usize| {
        let slot = slot.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            with_controller(&slot, |controller| {
                controller.go_to(index, Direction::between(controller.current_index(), index));
            })
        });
        html! {
            <button
                class={classes!("testimonial-dot", (view.current == index).then(|| "active"))}
                aria-label={format!("Testimonial {}", index + 1)}
                {onclick}
            />
        }
    };

    html! {
        <div class="testimonial-slider">
            { for props.items.iter().enumerate().map(|(index, item)| html! {
                <div class={classes!("testimonial-item", (view.active == Some(index)).then(|| "active"))}>
                    <p class="testimonial-quote">{ item.quote.clone() }</p>
                    <div class="testimonial-author">
                        <strong>{ item.author.clone() }</strong>
                        <span>{ item.role.clone() }</span>
                    </div>
                </div>
            }) }
            <div id="testimonial-dots" class="testimonial-dots">
                { for (0..count).map(dot) }
            </div>
        </div>
    }
}
