//! Runs core timer commands on the browser's timeout queue.

use std::{cell::RefCell, collections::HashMap, hash::Hash, rc::Rc};

use folio_core::Command;
use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};

/// Handler invoked when a timer is due. Returns follow-up commands.
pub type Fire<T> = Rc<dyn Fn(T) -> Vec<Command<T>>>;

/// Pending browser timeouts keyed by timer.
pub struct TimerDriver<T> {
    pending: Rc<RefCell<HashMap<T, TimeoutHandle>>>,
}

impl<T> Clone for TimerDriver<T> {
    fn clone(&self) -> Self {
        Self {
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<T> Default for TimerDriver<T> {
    fn default() -> Self {
        Self {
            pending: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl<T> TimerDriver<T>
where
    T: Copy + Eq + Hash + std::fmt::Debug + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or clear timeouts. When a timeout fires, `fire` runs and its
    /// commands are applied the same way.
    pub fn apply(&self, commands: Vec<Command<T>>, fire: &Fire<T>) {
        for command in commands {
            match command {
                Command::Schedule { after, timer } => {
                    let driver = self.clone();
                    let fire = Rc::clone(fire);
                    let scheduled = set_timeout_with_handle(
                        move || {
                            driver.pending.borrow_mut().remove(&timer);
                            let next = fire(timer);
                            driver.apply(next, &fire);
                        },
                        after,
                    );

                    match scheduled {
                        Ok(handle) => {
                            if let Some(stale) = self.pending.borrow_mut().insert(timer, handle) {
                                stale.clear();
                            }
                        }
                        Err(err) => log::error!("failed to schedule {timer:?}: {err:?}"),
                    }
                }
                Command::Cancel(timer) => {
                    if let Some(handle) = self.pending.borrow_mut().remove(&timer) {
                        handle.clear();
                    }
                }
            }
        }
    }
}
