use gloo_timers::callback::{Interval, Timeout};

/// Deferred and repeating callbacks on the page's event loop.
///
/// Dropping a handle cancels whatever is behind it. Callbacks never run from
/// inside `once` or `every`; they always come back through the event loop.
pub trait Scheduler {
    type Handle;

    fn once<F>(&self, delay_ms: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;

    fn every<F>(&self, period_ms: u32, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static;

    fn cancel(&self, handle: Self::Handle) {
        drop(handle);
    }
}

/// Browser timers through `setTimeout` / `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

/// Kept alive only so that dropping it clears the browser timer.
#[allow(dead_code)]
pub enum GlooHandle {
    Timeout(Timeout),
    Interval(Interval),
}

impl Scheduler for GlooScheduler {
    type Handle = GlooHandle;

    fn once<F>(&self, delay_ms: u32, callback: F) -> GlooHandle
    where
        F: FnOnce() + 'static,
    {
        GlooHandle::Timeout(Timeout::new(delay_ms, callback))
    }

    fn every<F>(&self, period_ms: u32, callback: F) -> GlooHandle
    where
        F: FnMut() + 'static,
    {
        GlooHandle::Interval(Interval::new(period_ms, callback))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    enum Task {
        Once(Box<dyn FnOnce()>),
        Every(Box<dyn FnMut()>),
    }

    struct Entry {
        due: u64,
        period: u64,
        // None while the task is running
        task: Option<Task>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        entries: BTreeMap<u64, Entry>,
    }

    /// Virtual-time scheduler for tests. Time only moves through `advance`.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                let removed = queue.borrow_mut().entries.remove(&self.id);
                drop(removed);
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        /// Live timers, including one-shots that have not fired yet.
        pub fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        /// Move virtual time forward, running every callback that falls due.
        /// Callbacks due at the same instant run in creation order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .entries
                        .iter()
                        .filter(|(_, entry)| entry.task.is_some())
                        .map(|(id, entry)| (entry.due, *id))
                        .min();
                    match due {
                        Some((due, id)) if due <= target => {
                            queue.now = due;
                            queue
                                .entries
                                .get_mut(&id)
                                .and_then(|entry| entry.task.take())
                                .map(|task| (id, task))
                        }
                        _ => {
                            queue.now = target;
                            None
                        }
                    }
                };

                let Some((id, task)) = next else { break };
                match task {
                    Task::Once(callback) => {
                        callback();
                        let removed = self.queue.borrow_mut().entries.remove(&id);
                        drop(removed);
                    }
                    Task::Every(mut callback) => {
                        callback();
                        let mut queue = self.queue.borrow_mut();
                        let leftover = match queue.entries.get_mut(&id) {
                            Some(entry) => {
                                entry.due += entry.period;
                                entry.task = Some(Task::Every(callback));
                                None
                            }
                            // cancelled from inside its own callback
                            None => Some(callback),
                        };
                        drop(queue);
                        drop(leftover);
                    }
                }
            }
        }

        fn push(&self, delay_ms: u32, period: u64, task: Task) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.entries.insert(
                id,
                Entry {
                    due,
                    period,
                    task: Some(task),
                },
            );
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn once<F>(&self, delay_ms: u32, callback: F) -> ManualHandle
        where
            F: FnOnce() + 'static,
        {
            self.push(delay_ms, 0, Task::Once(Box::new(callback)))
        }

        fn every<F>(&self, period_ms: u32, callback: F) -> ManualHandle
        where
            F: FnMut() + 'static,
        {
            self.push(period_ms, u64::from(period_ms), Task::Every(Box::new(callback)))
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn once_fires_at_its_deadline() {
            let scheduler = ManualScheduler::new();
            let fired = Rc::new(Cell::new(false));
            let flag = fired.clone();
            let _handle = scheduler.once(100, move || flag.set(true));

            scheduler.advance(99);
            assert!(!fired.get());
            scheduler.advance(1);
            assert!(fired.get());
            assert_eq!(scheduler.now(), 100);
        }

        #[test]
        fn dropping_a_handle_cancels() {
            let scheduler = ManualScheduler::new();
            let count = Rc::new(Cell::new(0));
            let counter = count.clone();
            let handle = scheduler.every(10, move || counter.set(counter.get() + 1));

            scheduler.advance(35);
            assert_eq!(count.get(), 3);
            scheduler.cancel(handle);
            scheduler.advance(100);
            assert_eq!(count.get(), 3);
            assert_eq!(scheduler.pending(), 0);
        }

        #[test]
        fn ties_run_in_creation_order() {
            let scheduler = ManualScheduler::new();
            let order = Rc::new(RefCell::new(Vec::new()));
            let first = order.clone();
            let second = order.clone();
            let _a = scheduler.once(50, move || first.borrow_mut().push("a"));
            let _b = scheduler.once(50, move || second.borrow_mut().push("b"));

            scheduler.advance(50);
            assert_eq!(*order.borrow(), vec!["a", "b"]);
        }
    }
}
