use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::components::scroll::use_seen;
use crate::config;

/// Frame-stepped count from zero up to a target.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    step: f64,
    current: f64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
        }
    }

    /// Advance one frame. Returns the number to show and whether counting is done.
    pub fn tick(&mut self) -> (u64, bool) {
        self.current += self.step;
        if self.current < self.target as f64 {
            (self.current.floor() as u64, false)
        } else {
            self.current = self.target as f64;
            (self.target, true)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| 0u64);
    let seen = use_seen(node.clone(), config::COUNTER_THRESHOLD, 0.0);

    {
        let shown = shown.clone();
        let target = props.target;
        use_effect_with_deps(
            move |seen| {
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *seen {
                    debug!("counter: animating to {}", target);
                    let mut count = CountUp::new(target, config::COUNTER_DURATION_MS, config::COUNTER_FRAME_MS);
                    let (first, done) = count.tick();
                    shown.set(first);
                    if !done {
                        let slot = interval.clone();
                        *interval.borrow_mut() = Some(Interval::new(config::COUNTER_FRAME_MS, move || {
                            let (value, done) = count.tick();
                            shown.set(value);
                            if done {
                                slot.borrow_mut().take();
                            }
                        }));
                    }
                }
                move || {
                    interval.borrow_mut().take();
                }
            },
            seen,
        );
    }

    html! {
        <div class="stat-item" ref={node}>
            <span class="stat-number">{ *shown }{ props.suffix.clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(count: &mut CountUp) -> Vec<u64> {
        let mut shown = Vec::new();
        loop {
            let (value, done) = count.tick();
            shown.push(value);
            if done {
                return shown;
            }
        }
    }

    #[test]
    fn ends_exactly_on_target() {
        let mut count = CountUp::new(250, 2000, 16);
        let shown = run(&mut count);
        assert_eq!(*shown.last().unwrap(), 250);
        assert!(shown.iter().all(|value| *value <= 250));
        // 2000 ms at 16 ms a frame
        assert!((124..=126).contains(&shown.len()));
    }

    #[test]
    fn never_decreases() {
        let mut count = CountUp::new(37, 2000, 16);
        let shown = run(&mut count);
        assert!(shown.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut count = CountUp::new(0, 2000, 16);
        assert_eq!(count.tick(), (0, true));
    }

    #[test]
    fn duration_shorter_than_a_frame_is_one_step() {
        let mut count = CountUp::new(10, 5, 16);
        assert_eq!(count.tick(), (10, true));
    }
}
