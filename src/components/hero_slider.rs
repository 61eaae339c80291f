use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::slide_view::{view_callbacks, with_controller, SlideView, SlotController, ViewAction};
use crate::config::{self, SliderOptions};
use crate::slider::{classify_swipe, format_counter, Direction, GlooScheduler, SlideController, Suspension};

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub image: AttrValue,
    pub cta_label: AttrValue,
    pub cta_href: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<HeroSlide>,
    #[prop_or_default]
    pub options: SliderOptions,
}

pub fn play_label(playing: bool) -> &'static str {
    if playing {
        "Pause slideshow"
    } else {
        "Play slideshow"
    }
}

fn progress_width(fraction: f64) -> String {
    format!("width: {:.1}%", (fraction * 100.0).clamp(0.0, 100.0))
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let options = props.options.clone();
    let slide_count = props.slides.len();
    let view = {
        let kind = options.animation_type;
        let playing = options.autoplay;
        use_reducer(move || SlideView::new(slide_count, kind, playing))
    };
    let slot: SlotController = use_mut_ref(|| None);
    let failed = use_state_eq(|| false);
    let touch_start = use_mut_ref(|| 0.0_f64);

    // Rebuild the controller whenever the slide set or options change.
    {
        let view = view.clone();
        let slot = slot.clone();
        let failed = failed.clone();
        use_effect_with_deps(
            move |(slide_count, options): &(usize, SliderOptions)| {
                view.dispatch(ViewAction::Reset(SlideView::new(
                    *slide_count,
                    options.animation_type,
                    options.autoplay,
                )));
                match SlideController::new(
                    options.controller_config(*slide_count),
                    GlooScheduler,
                    view_callbacks(&view),
                ) {
                    Ok(controller) => {
                        info!("hero slider mounted with {} slides", slide_count);
                        *slot.borrow_mut() = Some(controller);
                        failed.set(false);
                    }
                    Err(e) => {
                        error!("hero slider disabled: {}", e);
                        failed.set(true);
                    }
                }
                move || {
                    let controller = slot.borrow_mut().take();
                    if let Some(controller) = controller {
                        controller.destroy();
                    }
                }
            },
            (slide_count, options.clone()),
        );
    }

    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|w| w.document()).map(|document| {
                    let target = document.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        with_controller(&slot, |controller| {
                            if target.hidden() {
                                controller.suspend(Suspension::Hidden);
                            } else {
                                controller.resume(Suspension::Hidden);
                            }
                        });
                    }) as Box<dyn FnMut()>);
                    if document
                        .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        gloo_console::error!("Failed to watch page visibility");
                    }
                    (document, callback)
                });

                move || {
                    if let Some((document, callback)) = listener {
                        let _ = document
                            .remove_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    {
        let slot = slot.clone();
        let enabled = options.keyboard;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !enabled {
                return;
            }
            match e.key().as_str() {
                "ArrowLeft" => with_controller(&slot, |controller| controller.prev()),
                "ArrowRight" => with_controller(&slot, |controller| controller.next()),
                " " => {
                    e.prevent_default();
                    with_controller(&slot, |controller| controller.toggle());
                }
                _ => {}
            }
        });
    }

    if *failed {
        return html! {
            <section id="hero" class="hero">
                <div class="hero-fallback">
                    <h1>{ config::SITE_NAME }</h1>
                </div>
            </section>
        };
    }

    let on_prev = {
        let slot = slot.clone();
        Callback::from(move |_: MouseEvent| with_controller(&slot, |controller| controller.prev()))
    };
    let on_next = {
        let slot = slot.clone();
        Callback::from(move |_: MouseEvent| with_controller(&slot, |controller| controller.next()))
    };
    let on_toggle = {
        let slot = slot.clone();
        Callback::from(move |_: MouseEvent| with_controller(&slot, |controller| controller.toggle()))
    };

    let (on_enter, on_leave) = if options.pause_on_hover {
        let enter = {
            let slot = slot.clone();
            Callback::from(move |_: MouseEvent| {
                with_controller(&slot, |controller| controller.suspend(Suspension::Hover))
            })
        };
        let leave = {
            let slot = slot.clone();
            Callback::from(move |_: MouseEvent| {
                with_controller(&slot, |controller| controller.resume(Suspension::Hover))
            })
        };
        (Some(enter), Some(leave))
    } else {
        (None, None)
    };

    let (on_touch_start, on_touch_end) = if options.touch {
        let start = {
            let slot = slot.clone();
            let touch_start = touch_start.clone();
            Callback::from(move |e: TouchEvent| {
                if let Some(touch) = e.changed_touches().get(0) {
                    *touch_start.borrow_mut() = f64::from(touch.screen_x());
                }
                with_controller(&slot, |controller| controller.suspend(Suspension::Touch));
            })
        };
        let end = {
            let slot = slot.clone();
            let touch_start = touch_start.clone();
            Callback::from(move |e: TouchEvent| {
                let end_x = e.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()));
                let start_x = *touch_start.borrow();
                with_controller(&slot, |controller| {
                    match end_x.and_then(|end_x| classify_swipe(start_x, end_x, config::SWIPE_THRESHOLD)) {
                        Some(Direction::Next) => controller.next(),
                        Some(Direction::Prev) => controller.prev(),
                        None => {}
                    }
                    controller.resume_after(Suspension::Touch, config::SWIPE_RESUME_DELAY_MS);
                });
            })
        };
        (Some(start), Some(end))
    } else {
        (None, None)
    };

    let dot = |index: usize| {
        let slot = slot.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            with_controller(&slot, |controller| {
                let direction = Direction::between(controller.current_index(), index);
                controller.go_to(index, direction);
            })
        });
        html! {
            <button
                class={classes!("slider-dot", (view.current == index).then(|| "active"))}
                aria-label={format!("Go to slide {}", index + 1)}
                {onclick}
            />
        }
    };

    let playing = view.playing;

    html! {
        <section
            id="hero"
            class="hero"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <div id="hero-slider" class="hero-slider">
                { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                    <div
                        class={view.slide_classes(index)}
                        style={format!("background-image: url('{}')", slide.image)}
                    >
                        <div class="slide-content">
                            <h1 class="slide-title">{ slide.title.clone() }</h1>
                            <p class="slide-subtitle">{ slide.subtitle.clone() }</p>
                            <a href={slide.cta_href.clone()} class="btn btn-primary">{ slide.cta_label.clone() }</a>
                        </div>
                    </div>
                }) }
            </div>

            <div class="slider-controls">
                <button id="prev-slide" class="slider-arrow prev" aria-label="Previous slide" onclick={on_prev}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button id="next-slide" class="slider-arrow next" aria-label="Next slide" onclick={on_next}>
                    <i class="fas fa-chevron-right"></i>
                </button>
                <button id="pause-play" class="pause-play" aria-label={play_label(playing)} onclick={on_toggle}>
                    <i id="pause-icon" class={if playing { "fas fa-pause" } else { "fas fa-play" }}></i>
                </button>
            </div>

            if options.show_dots {
                <div id="slider-dots" class="slider-dots">
                    { for (0..slide_count).map(dot) }
                </div>
            }

            if options.show_counter {
                <div class="slide-counter">
                    <span id="current-slide">{ format_counter(view.current + 1) }</span>
                    {" / "}
                    <span id="total-slides">{ format_counter(slide_count) }</span>
                </div>
            }

            if options.show_progress {
                <div class="slider-progress">
                    <div id="progress-bar" class="progress-bar" style={progress_width(view.progress)}></div>
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_describes_the_next_action() {
        assert_eq!(play_label(true), "Pause slideshow");
        assert_eq!(play_label(false), "Play slideshow");
    }

    #[test]
    fn progress_width_is_a_clamped_percentage() {
        assert_eq!(progress_width(0.0), "width: 0.0%");
        assert_eq!(progress_width(0.25), "width: 25.0%");
        assert_eq!(progress_width(1.5), "width: 100.0%");
    }
}
