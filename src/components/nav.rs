use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::scroll::{is_mobile, scroll_to_anchor, section_top, viewport_width};
use crate::config;

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub dropdown_open: bool,
    pub active_section: Option<String>,
}

pub enum NavAction {
    Scrolled { scroll_y: f64, active_section: Option<String> },
    ToggleMenu,
    CloseMenu,
    Escape,
    ToggleDropdown { viewport_width: f64 },
    DropdownItemChosen { viewport_width: f64 },
    LinkChosen { id: String, viewport_width: f64 },
    Resized { viewport_width: f64 },
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Scrolled { scroll_y, active_section } => {
                next.scrolled = scroll_y > config::SCROLLED_THRESHOLD;
                next.active_section = active_section;
            }
            NavAction::ToggleMenu => next.menu_open = !next.menu_open,
            NavAction::CloseMenu => next.menu_open = false,
            NavAction::Escape => {
                if !next.menu_open {
                    return self;
                }
                next.menu_open = false;
            }
            NavAction::ToggleDropdown { viewport_width } => {
                if !is_mobile(viewport_width) {
                    return self;
                }
                next.dropdown_open = !next.dropdown_open;
            }
            NavAction::DropdownItemChosen { viewport_width } => {
                if is_mobile(viewport_width) {
                    next.menu_open = false;
                    next.dropdown_open = false;
                }
            }
            NavAction::LinkChosen { id, viewport_width } => {
                next.active_section = Some(id);
                if is_mobile(viewport_width) {
                    next.menu_open = false;
                }
            }
            NavAction::Resized { viewport_width } => {
                if !is_mobile(viewport_width) {
                    next.menu_open = false;
                    next.dropdown_open = false;
                }
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// The section whose top (less the header allowance) was scrolled past last.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - config::SECTION_OFFSET)
        .map(|(id, _)| *id)
        .last()
}

/// Where Tab should land inside an open drawer with `count` focusable items.
pub fn trap_focus(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match (current, backwards) {
        (Some(i), false) => (i + 1) % count,
        (Some(i), true) => (i + count - 1) % count,
        (None, false) => 0,
        (None, true) => count - 1,
    })
}

fn lock_body_scroll(locked: bool) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

fn focusable_items(drawer: &NodeRef) -> Vec<HtmlElement> {
    let Some(drawer) = drawer.cast::<web_sys::Element>() else {
        return Vec::new();
    };
    let Ok(nodes) = drawer.query_selector_all("a, button") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: Vec<NavLink>,
    pub services: Vec<NavLink>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let state = use_reducer(NavState::default);
    let drawer = use_node_ref();
    let (_, scroll_y) = use_window_scroll();

    {
        let state = state.clone();
        let ids: Vec<&'static str> = props.links.iter().map(|link| link.id).collect();
        use_effect_with_deps(
            move |scroll_y| {
                let tops: Vec<(&str, f64)> = ids
                    .iter()
                    .filter_map(|id| section_top(id).map(|top| (*id, top)))
                    .collect();
                state.dispatch(NavAction::Scrolled {
                    scroll_y: *scroll_y,
                    active_section: active_section(&tops, *scroll_y).map(str::to_string),
                });
                || ()
            },
            scroll_y,
        );
    }

    {
        let state = state.clone();
        use_event_with_window("resize", move |_: Event| {
            state.dispatch(NavAction::Resized {
                viewport_width: viewport_width(),
            });
        });
    }

    {
        let state = state.clone();
        let drawer = drawer.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !state.menu_open {
                return;
            }
            match e.key().as_str() {
                "Escape" => state.dispatch(NavAction::Escape),
                "Tab" => {
                    let items = focusable_items(&drawer);
                    let active = window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.active_element());
                    let current = active.and_then(|active| {
                        items
                            .iter()
                            .position(|item| AsRef::<web_sys::Element>::as_ref(item) == &active)
                    });
                    if let Some(next) = trap_focus(current, items.len(), e.shift_key()) {
                        e.prevent_default();
                        let _ = items[next].focus();
                    }
                }
                _ => {}
            }
        });
    }

    {
        use_effect_with_deps(
            move |open| {
                lock_body_scroll(*open);
                || lock_body_scroll(false)
            },
            state.menu_open,
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::CloseMenu))
    };

    let toggle_dropdown = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let width = viewport_width();
            if is_mobile(width) {
                e.prevent_default();
                e.stop_propagation();
            }
            state.dispatch(NavAction::ToggleDropdown { viewport_width: width });
        })
    };

    let link_item = |link: &NavLink| {
        let state = state.clone();
        let id = link.id;
        let active = state.active_section.as_deref() == Some(id);
        let onclick = Callback::from(move |e: MouseEvent| {
            if scroll_to_anchor(id) {
                e.prevent_default();
            }
            state.dispatch(NavAction::LinkChosen {
                id: id.to_string(),
                viewport_width: viewport_width(),
            });
        });
        html! {
            <li>
                <a href={format!("#{}", id)} class={classes!(active.then(|| "active"))} {onclick}>
                    { link.label }
                </a>
            </li>
        }
    };

    let service_item = |link: &NavLink| {
        let state = state.clone();
        let id = link.id;
        let onclick = Callback::from(move |e: MouseEvent| {
            if scroll_to_anchor(id) {
                e.prevent_default();
            }
            state.dispatch(NavAction::DropdownItemChosen {
                viewport_width: viewport_width(),
            });
        });
        html! {
            <li><a href={format!("#{}", id)} {onclick}>{ link.label }</a></li>
        }
    };

    let open = state.menu_open;

    html! {
        <nav id="navbar" class={classes!("navbar", state.scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{ config::SITE_NAME }</a>

                <button
                    class={classes!("menu-toggle", open.then(|| "active"))}
                    aria-label="Toggle menu"
                    aria-expanded={open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul ref={drawer} class={classes!("nav-links", open.then(|| "active"))}>
                    <li class="close-item">
                        <button class="close-menu" aria-label="Close menu" onclick={close_menu.clone()}>
                            {"×"}
                        </button>
                    </li>
                    { for props.links.iter().map(link_item) }
                    <li class={classes!("dropdown", state.dropdown_open.then(|| "active"))}>
                        <a href="#services" class="dropdown-toggle" onclick={toggle_dropdown}>
                            {"Services"}
                        </a>
                        <ul class="dropdown-menu">
                            { for props.services.iter().map(service_item) }
                        </ul>
                    </li>
                </ul>
            </div>
            <div class={classes!("overlay", open.then(|| "active"))} onclick={close_menu}></div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavState, action: NavAction) -> NavState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn open() -> NavState {
        NavState {
            menu_open: true,
            ..NavState::default()
        }
    }

    #[test]
    fn scrolled_past_threshold() {
        let state = reduce(
            NavState::default(),
            NavAction::Scrolled { scroll_y: 51.0, active_section: None },
        );
        assert!(state.scrolled);
        let state = reduce(state, NavAction::Scrolled { scroll_y: 50.0, active_section: None });
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_and_escape() {
        let state = reduce(NavState::default(), NavAction::ToggleMenu);
        assert!(state.menu_open);
        let state = reduce(state, NavAction::Escape);
        assert!(!state.menu_open);
    }

    #[test]
    fn escape_on_closed_menu_keeps_same_state() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Escape);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn dropdown_only_toggles_on_mobile() {
        let desktop = reduce(open(), NavAction::ToggleDropdown { viewport_width: 1280.0 });
        assert!(!desktop.dropdown_open);

        let mobile = reduce(open(), NavAction::ToggleDropdown { viewport_width: 600.0 });
        assert!(mobile.dropdown_open);

        let closed = reduce(mobile, NavAction::DropdownItemChosen { viewport_width: 600.0 });
        assert!(!closed.dropdown_open);
        assert!(!closed.menu_open);
    }

    #[test]
    fn link_click_closes_drawer_on_mobile_only() {
        let mobile = reduce(
            open(),
            NavAction::LinkChosen { id: "about".into(), viewport_width: 700.0 },
        );
        assert!(!mobile.menu_open);
        assert_eq!(mobile.active_section.as_deref(), Some("about"));

        let desktop = reduce(
            open(),
            NavAction::LinkChosen { id: "about".into(), viewport_width: 1400.0 },
        );
        assert!(desktop.menu_open);
    }

    #[test]
    fn resizing_to_desktop_closes_everything() {
        let state = NavState {
            menu_open: true,
            dropdown_open: true,
            ..NavState::default()
        };
        let still_mobile = reduce(state.clone(), NavAction::Resized { viewport_width: 900.0 });
        assert!(still_mobile.menu_open && still_mobile.dropdown_open);

        let desktop = reduce(state, NavAction::Resized { viewport_width: 1200.0 });
        assert!(!desktop.menu_open && !desktop.dropdown_open);
    }

    #[test]
    fn picks_last_section_scrolled_past() {
        let sections = [("home", 0.0), ("about", 800.0), ("services", 1600.0)];
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 649.0), Some("home"));
        assert_eq!(active_section(&sections, 650.0), Some("about"));
        assert_eq!(active_section(&sections, 5000.0), Some("services"));
        assert_eq!(active_section(&[("late", 400.0)], 0.0), None);
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(trap_focus(Some(3), 4, false), Some(0));
        assert_eq!(trap_focus(Some(0), 4, true), Some(3));
        assert_eq!(trap_focus(Some(1), 4, false), Some(2));
        assert_eq!(trap_focus(None, 4, false), Some(0));
        assert_eq!(trap_focus(None, 4, true), Some(3));
        assert_eq!(trap_focus(None, 0, false), None);
    }
}
