use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::slider::{AnimationKind, Direction, GlooScheduler, Phase, SlideController, SliderCallbacks};

pub type SlotController = Rc<RefCell<Option<SlideController<GlooScheduler>>>>;

/// What a slider component renders, mirrored from controller notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub kind: AnimationKind,
    /// Index shown by dots and the counter.
    pub current: usize,
    /// Slide carrying the `active` class; empty between exit and entry.
    pub active: Option<usize>,
    pub animations: Vec<Option<&'static str>>,
    pub progress: f64,
    pub playing: bool,
}

impl SlideView {
    pub fn new(slide_count: usize, kind: AnimationKind, playing: bool) -> Self {
        let mut animations = vec![None; slide_count];
        if let Some(first) = animations.first_mut() {
            *first = Some(kind.class(Phase::In, Direction::Next));
        }
        Self {
            kind,
            current: 0,
            active: (slide_count > 0).then_some(0),
            animations,
            progress: 0.0,
            playing,
        }
    }

    pub fn slide_classes(&self, index: usize) -> Classes {
        classes!(
            "slide",
            (self.active == Some(index)).then_some("active"),
            self.animations.get(index).copied().flatten()
        )
    }
}

pub enum ViewAction {
    /// Start over, e.g. after the slide set or options change.
    Reset(SlideView),
    Exiting(usize, Direction),
    Entering(usize, Direction),
    Changed(usize),
    Progress(f64),
    Playing(bool),
}

impl Reducible for SlideView {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: ViewAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::Reset(view) => {
                return if *self == view { self } else { Rc::new(view) };
            }
            ViewAction::Exiting(index, direction) => {
                next.active = None;
                if let Some(slot) = next.animations.get_mut(index) {
                    *slot = Some(self.kind.class(Phase::Out, direction));
                }
            }
            ViewAction::Entering(index, direction) => {
                next.active = Some(index);
                if let Some(slot) = next.animations.get_mut(index) {
                    *slot = Some(self.kind.class(Phase::In, direction));
                }
            }
            ViewAction::Changed(index) => next.current = index,
            ViewAction::Progress(fraction) => next.progress = fraction,
            ViewAction::Playing(playing) => next.playing = playing,
        }
        Rc::new(next)
    }
}

/// Controller callbacks that feed a [`SlideView`] reducer.
pub fn view_callbacks(view: &UseReducerHandle<SlideView>) -> SliderCallbacks {
    SliderCallbacks {
        on_slide_changed: {
            let view = view.clone();
            Callback::from(move |index: usize| view.dispatch(ViewAction::Changed(index)))
        },
        on_progress_tick: {
            let view = view.clone();
            Callback::from(move |fraction: f64| view.dispatch(ViewAction::Progress(fraction)))
        },
        on_play_state_changed: {
            let view = view.clone();
            Callback::from(move |playing: bool| view.dispatch(ViewAction::Playing(playing)))
        },
        on_slide_exiting: {
            let view = view.clone();
            Callback::from(move |(index, direction): (usize, Direction)| view.dispatch(ViewAction::Exiting(index, direction)))
        },
        on_slide_entering: {
            let view = view.clone();
            Callback::from(move |(index, direction): (usize, Direction)| view.dispatch(ViewAction::Entering(index, direction)))
        },
    }
}

/// Run `f` on the mounted controller, if there is one. The slot borrow is
/// released before `f` runs so notifications can re-render freely.
pub fn with_controller(slot: &SlotController, f: impl FnOnce(&SlideController<GlooScheduler>)) {
    let controller = slot.borrow().clone();
    if let Some(controller) = controller {
        f(&controller);
    }
}
