use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use super::animation::Direction;
use super::scheduler::Scheduler;
use crate::error::ConfigError;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5000;
pub const DEFAULT_PROGRESS_TICK_MS: u32 = 50;
pub const DEFAULT_EXIT_DELAY_MS: u32 = 100;

/// Construction-time settings for a [`SlideController`].
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub slide_count: usize,
    pub autoplay_interval_ms: u32,
    pub autoplay_enabled: bool,
    pub progress_enabled: bool,
    pub progress_tick_ms: u32,
    /// Gap between the outgoing slide's exit and the incoming slide's entry.
    pub exit_delay_ms: u32,
}

impl SliderConfig {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            autoplay_enabled: true,
            progress_enabled: true,
            progress_tick_ms: DEFAULT_PROGRESS_TICK_MS,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slide_count == 0 {
            return Err(ConfigError::NoSlides);
        }
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.progress_enabled && self.progress_tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

/// Where the presentation layer hears about state changes.
///
/// Every callback runs after the controller has released its state, so a
/// callback may call straight back into the controller.
#[derive(Clone, PartialEq)]
pub struct SliderCallbacks {
    pub on_slide_changed: Callback<usize>,
    pub on_progress_tick: Callback<f64>,
    pub on_play_state_changed: Callback<bool>,
    pub on_slide_exiting: Callback<(usize, Direction)>,
    pub on_slide_entering: Callback<(usize, Direction)>,
}

impl Default for SliderCallbacks {
    fn default() -> Self {
        Self {
            on_slide_changed: Callback::noop(),
            on_progress_tick: Callback::noop(),
            on_play_state_changed: Callback::noop(),
            on_slide_exiting: Callback::noop(),
            on_slide_entering: Callback::noop(),
        }
    }
}

/// Automatic reasons to hold autoplay. None of them count as a user pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suspension {
    Hover,
    Hidden,
    Touch,
}

/// Snapshot of the controller's published state.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideState {
    pub current_index: usize,
    pub is_playing: bool,
    pub is_transitioning: bool,
    pub progress: f64,
    pub user_paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Manual,
    Autoplay,
}

enum Notice {
    Exiting(usize, Direction),
    Entering(usize, Direction),
    Changed(usize),
    Progress(f64),
    PlayState(bool),
}

impl SliderCallbacks {
    fn dispatch(&self, notices: Vec<Notice>) {
        for notice in notices {
            match notice {
                Notice::Exiting(index, direction) => self.on_slide_exiting.emit((index, direction)),
                Notice::Entering(index, direction) => self.on_slide_entering.emit((index, direction)),
                Notice::Changed(index) => self.on_slide_changed.emit(index),
                Notice::Progress(fraction) => self.on_progress_tick.emit(fraction),
                Notice::PlayState(playing) => self.on_play_state_changed.emit(playing),
            }
        }
    }
}

struct Timers<H> {
    autoplay: Option<H>,
    progress: Option<H>,
    transition: Option<H>,
    // deferred lift, with the reason it will lift
    resume: Option<(Suspension, H)>,
}

struct Inner<H> {
    state: SlideState,
    suspensions: Vec<Suspension>,
    // time since the current autoplay cycle started
    cycle_elapsed_ms: u32,
    timers: Timers<H>,
    destroyed: bool,
}

struct Shared<S: Scheduler> {
    config: SliderConfig,
    scheduler: S,
    callbacks: SliderCallbacks,
    inner: RefCell<Inner<S::Handle>>,
}

/// Finite-state machine over a fixed set of slides.
///
/// Owns which slide is active, the autoplay and progress timers, and the
/// transition lock. Clones share the same state; dropping the last clone
/// cancels every pending timer.
pub struct SlideController<S: Scheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler> Clone for SlideController<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S> SlideController<S>
where
    S: Scheduler + 'static,
{
    pub fn new(
        config: SliderConfig,
        scheduler: S,
        callbacks: SliderCallbacks,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = SlideState {
            current_index: 0,
            is_playing: config.autoplay_enabled,
            is_transitioning: false,
            progress: 0.0,
            user_paused: false,
        };
        let controller = Self {
            shared: Rc::new(Shared {
                config,
                scheduler,
                callbacks,
                inner: RefCell::new(Inner {
                    state,
                    suspensions: Vec::new(),
                    cycle_elapsed_ms: 0,
                    timers: Timers {
                        autoplay: None,
                        progress: None,
                        transition: None,
                        resume: None,
                    },
                    destroyed: false,
                }),
            }),
        };

        if controller.shared.config.autoplay_enabled {
            update(&controller.shared, |shared, inner, _| arm(shared, inner));
        }
        debug!(
            "slider: created with {} slides, autoplay={}",
            controller.shared.config.slide_count, controller.shared.config.autoplay_enabled
        );
        Ok(controller)
    }

    pub fn go_to(&self, target: usize, direction: Direction) {
        update(&self.shared, |shared, inner, notices| {
            begin_transition(shared, inner, notices, target, direction, Origin::Manual)
        });
    }

    pub fn next(&self) {
        let n = self.slide_count();
        self.go_to((self.current_index() + 1) % n, Direction::Next);
    }

    pub fn prev(&self) {
        let n = self.slide_count();
        self.go_to((self.current_index() + n - 1) % n, Direction::Prev);
    }

    /// Explicit play overrides every automatic hold.
    pub fn play(&self) {
        update(&self.shared, |shared, inner, notices| {
            inner.state.user_paused = false;
            inner.suspensions.clear();
            inner.timers.resume = None;
            start(shared, inner, notices);
        });
    }

    pub fn pause(&self) {
        update(&self.shared, |_, inner, notices| {
            inner.state.user_paused = true;
            cancel_deferred(inner);
            halt(inner, notices);
        });
    }

    pub fn toggle(&self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Hold autoplay for an automatic reason such as hover or a hidden tab.
    /// A deferred resume for the same reason is called off; one for another
    /// reason keeps running.
    pub fn suspend(&self, reason: Suspension) {
        update(&self.shared, |_, inner, notices| {
            if !inner.suspensions.contains(&reason) {
                inner.suspensions.push(reason);
            }
            drop_deferred_for(inner, reason);
            halt(inner, notices);
        });
    }

    /// Lift a suspension. Autoplay only comes back when it was configured,
    /// nothing else still holds it, and the user has not paused by hand.
    pub fn resume(&self, reason: Suspension) {
        update(&self.shared, |shared, inner, notices| {
            drop_deferred_for(inner, reason);
            lift(shared, inner, notices, reason)
        });
    }

    /// Lift a suspension after a grace period. Only the latest deferred resume
    /// survives; a replaced one for a different reason gives up its hold.
    /// Suspending the same reason again, `pause` or `play` cancel it.
    pub fn resume_after(&self, reason: Suspension, delay_ms: u32) {
        update(&self.shared, |shared, inner, _| {
            if let Some((pending, handle)) = inner.timers.resume.take() {
                drop(handle);
                if pending != reason {
                    inner.suspensions.retain(|held| *held != pending);
                }
            }
            let weak = Rc::downgrade(shared);
            let handle = shared.scheduler.once(delay_ms, move || {
                with_shared(&weak, |shared, inner, notices| {
                    inner.timers.resume = None;
                    lift(shared, inner, notices, reason);
                });
            });
            inner.timers.resume = Some((reason, handle));
        });
    }

    /// Tear down: cancel every timer, including an in-flight transition.
    pub fn destroy(&self) {
        let mut inner = self.shared.inner.borrow_mut();
        inner.destroyed = true;
        let timers = std::mem::replace(
            &mut inner.timers,
            Timers {
                autoplay: None,
                progress: None,
                transition: None,
                resume: None,
            },
        );
        drop(inner);
        drop(timers);
        debug!("slider: destroyed");
    }

    pub fn state(&self) -> SlideState {
        self.shared.inner.borrow().state.clone()
    }

    pub fn current_index(&self) -> usize {
        self.shared.inner.borrow().state.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.shared.config.slide_count
    }

    pub fn is_playing(&self) -> bool {
        self.shared.inner.borrow().state.is_playing
    }

    pub fn is_transitioning(&self) -> bool {
        self.shared.inner.borrow().state.is_transitioning
    }

    pub fn progress(&self) -> f64 {
        self.shared.inner.borrow().state.progress
    }

    pub fn user_paused(&self) -> bool {
        self.shared.inner.borrow().state.user_paused
    }
}

/// Run `f` against the state, then fire the notices it produced once the
/// borrow is gone.
fn update<S, F>(shared: &Rc<Shared<S>>, f: F)
where
    S: Scheduler + 'static,
    F: FnOnce(&Rc<Shared<S>>, &mut Inner<S::Handle>, &mut Vec<Notice>),
{
    let mut notices = Vec::new();
    {
        let mut inner = shared.inner.borrow_mut();
        if inner.destroyed {
            return;
        }
        f(shared, &mut *inner, &mut notices);
    }
    shared.callbacks.dispatch(notices);
}

fn with_shared<S, F>(weak: &Weak<Shared<S>>, f: F)
where
    S: Scheduler + 'static,
    F: FnOnce(&Rc<Shared<S>>, &mut Inner<S::Handle>, &mut Vec<Notice>),
{
    if let Some(shared) = weak.upgrade() {
        update(&shared, f);
    }
}

fn begin_transition<S>(
    shared: &Rc<Shared<S>>,
    inner: &mut Inner<S::Handle>,
    notices: &mut Vec<Notice>,
    target: usize,
    direction: Direction,
    origin: Origin,
) where
    S: Scheduler + 'static,
{
    let target = target % shared.config.slide_count;
    if inner.state.is_transitioning {
        debug!("slider: dropped request for slide {} during transition", target);
        return;
    }
    if target == inner.state.current_index {
        return;
    }

    let from = inner.state.current_index;
    inner.state.is_transitioning = true;
    notices.push(Notice::Exiting(from, direction));

    // A manual move restarts the autoplay countdown from now.
    if origin == Origin::Manual && inner.timers.autoplay.is_some() {
        arm(shared, inner);
    }

    let weak = Rc::downgrade(shared);
    let handle = shared.scheduler.once(shared.config.exit_delay_ms, move || {
        with_shared(&weak, |shared, inner, notices| {
            finish_transition(shared, inner, notices, target, direction)
        });
    });
    inner.timers.transition = Some(handle);
}

fn finish_transition<S>(
    shared: &Rc<Shared<S>>,
    inner: &mut Inner<S::Handle>,
    notices: &mut Vec<Notice>,
    target: usize,
    direction: Direction,
) where
    S: Scheduler + 'static,
{
    inner.timers.transition = None;
    inner.state.current_index = target;
    inner.state.is_transitioning = false;
    inner.state.progress = 0.0;
    inner.cycle_elapsed_ms = 0;

    notices.push(Notice::Entering(target, direction));
    notices.push(Notice::Changed(target));
    if shared.config.progress_enabled {
        notices.push(Notice::Progress(0.0));
    }
    debug!("slider: now showing slide {}", target);
}

fn start<S>(shared: &Rc<Shared<S>>, inner: &mut Inner<S::Handle>, notices: &mut Vec<Notice>)
where
    S: Scheduler + 'static,
{
    let was_playing = inner.state.is_playing;
    inner.state.is_playing = true;
    arm(shared, inner);
    if !was_playing {
        notices.push(Notice::PlayState(true));
    }
}

fn halt<H>(inner: &mut Inner<H>, notices: &mut Vec<Notice>) {
    inner.timers.autoplay = None;
    inner.timers.progress = None;
    if inner.state.is_playing {
        inner.state.is_playing = false;
        notices.push(Notice::PlayState(false));
    }
}

/// Drop a pending deferred resume together with the hold it was going to lift.
fn cancel_deferred<H>(inner: &mut Inner<H>) {
    if let Some((pending, handle)) = inner.timers.resume.take() {
        drop(handle);
        inner.suspensions.retain(|held| *held != pending);
    }
}

fn drop_deferred_for<H>(inner: &mut Inner<H>, reason: Suspension) {
    if matches!(inner.timers.resume, Some((pending, _)) if pending == reason) {
        inner.timers.resume = None;
    }
}

fn lift<S>(
    shared: &Rc<Shared<S>>,
    inner: &mut Inner<S::Handle>,
    notices: &mut Vec<Notice>,
    reason: Suspension,
) where
    S: Scheduler + 'static,
{
    inner.suspensions.retain(|held| *held != reason);
    if !inner.suspensions.is_empty()
        || !shared.config.autoplay_enabled
        || inner.state.user_paused
        || inner.state.is_playing
    {
        return;
    }
    start(shared, inner, notices);
}

/// (Re)arm autoplay and progress timers for a fresh cycle, discarding any
/// existing ones first so there is never more than one of each.
fn arm<S>(shared: &Rc<Shared<S>>, inner: &mut Inner<S::Handle>)
where
    S: Scheduler + 'static,
{
    inner.timers.autoplay = None;
    inner.timers.progress = None;
    inner.cycle_elapsed_ms = 0;
    if shared.config.slide_count < 2 {
        return;
    }

    let config = &shared.config;
    let weak = Rc::downgrade(shared);
    inner.timers.autoplay = Some(shared.scheduler.every(config.autoplay_interval_ms, move || {
        with_shared(&weak, |shared, inner, notices| {
            inner.cycle_elapsed_ms = 0;
            if inner.state.is_transitioning {
                debug!("slider: autoplay tick skipped during transition");
                return;
            }
            if shared.config.progress_enabled {
                inner.state.progress = 1.0;
                notices.push(Notice::Progress(1.0));
            }
            let next = (inner.state.current_index + 1) % shared.config.slide_count;
            begin_transition(shared, inner, notices, next, Direction::Next, Origin::Autoplay);
        });
    }));

    if config.progress_enabled {
        let weak = Rc::downgrade(shared);
        inner.timers.progress = Some(shared.scheduler.every(config.progress_tick_ms, move || {
            with_shared(&weak, |shared, inner, notices| {
                let interval = shared.config.autoplay_interval_ms;
                inner.cycle_elapsed_ms = (inner.cycle_elapsed_ms + shared.config.progress_tick_ms).min(interval);
                let fraction = f64::from(inner.cycle_elapsed_ms) / f64::from(interval);
                // never runs backwards between transitions
                if fraction > inner.state.progress {
                    inner.state.progress = fraction;
                }
                notices.push(Notice::Progress(inner.state.progress));
            });
        }));
    }
}
