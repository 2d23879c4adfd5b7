//! Drives the console state machine in the browser

use crate::cookie_store::CookieTokenStore;
use gloo::timers::callback::Timeout;
use hexadmin_core::{
    ConsoleAction, ConsoleConfig, ConsoleController, ConsoleError, ConsoleState, Effect,
    ProductRepository, SessionManager, TaskSet,
};
use hexadmin_http::{PublicAdminClient, TypedClientBuilder};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

pub type BrowserController = ConsoleController<PublicAdminClient, PublicAdminClient, CookieTokenStore>;

/// Owns the current [`ConsoleState`] and performs the effects it emits.
///
/// Requests run as tracked tasks and delayed effects as timeouts; both are
/// cancelled by [`ConsoleRuntime::shutdown`].
pub struct ConsoleRuntime {
    controller: Rc<BrowserController>,
    state: RefCell<Rc<ConsoleState>>,
    pending: RefCell<Vec<Effect>>,
    tasks: TaskSet,
    /// Latest delayed effect; arming a new one cancels the previous
    timer: RefCell<Option<Timeout>>,
    notify: Callback<()>,
}

impl ConsoleRuntime {
    /// Build the runtime and resolve the initial session state.
    ///
    /// The first render already reflects whether a token was found, so a
    /// visitor without one never sees the loading view. Effects from that
    /// first step wait for [`ConsoleRuntime::resume`].
    pub fn boot(config: &ConsoleConfig, notify: Callback<()>) -> Result<Rc<Self>, ConsoleError> {
        config.validate()?;
        let client = TypedClientBuilder::from_config(config).build_public()?;
        let session = SessionManager::new(
            client.clone(),
            CookieTokenStore::new(config.cookie_name.clone()),
        );
        let controller = ConsoleController::new(session, ProductRepository::new(client));

        let mut state = ConsoleState::new(config);
        let pending = state.apply(controller.start());
        tracing::info!(session = %state.session, "Console started");

        Ok(Rc::new(Self {
            controller: Rc::new(controller),
            state: RefCell::new(Rc::new(state)),
            pending: RefCell::new(pending),
            tasks: TaskSet::new(),
            timer: RefCell::new(None),
            notify,
        }))
    }

    /// Snapshot of the current state
    pub fn state(&self) -> Rc<ConsoleState> {
        Rc::clone(&self.state.borrow())
    }

    /// Schedule the effects produced while booting
    pub fn resume(self: &Rc<Self>) {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for effect in pending {
            self.schedule(effect);
        }
    }

    /// Apply an action, re-render, then schedule the resulting effects
    pub fn dispatch(self: &Rc<Self>, action: ConsoleAction) {
        let (changed, effects) = {
            let mut current = self.state.borrow_mut();
            let mut next = ConsoleState::clone(&current);
            let effects = next.apply(action);
            let changed = next != **current;
            if changed {
                *current = Rc::new(next);
            }
            (changed, effects)
        };
        if changed {
            self.notify.emit(());
        }

        for effect in effects {
            self.schedule(effect);
        }
    }

    fn schedule(self: &Rc<Self>, effect: Effect) {
        let Some(delay) = effect.delay() else {
            self.spawn(effect);
            return;
        };

        let runtime = Rc::downgrade(self);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.spawn(effect);
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    fn spawn(self: &Rc<Self>, effect: Effect) {
        let controller = Rc::clone(&self.controller);
        let task = self
            .tasks
            .track(async move { controller.perform(effect).await });
        let runtime = Rc::downgrade(self);

        spawn_local(async move {
            match task.await {
                Ok(action) => {
                    if let Some(runtime) = runtime.upgrade() {
                        runtime.dispatch(action);
                    }
                }
                Err(_) => tracing::debug!("Effect aborted before completion"),
            }
        });
    }

    /// Abort in-flight requests and cancel pending timers
    pub fn shutdown(&self) {
        let in_flight = self.tasks.in_flight();
        self.tasks.abort_all();
        *self.timer.borrow_mut() = None;
        self.pending.borrow_mut().clear();
        tracing::debug!(in_flight, "Console runtime shut down");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    impl ConsoleRuntime {
        fn timer_armed(&self) -> bool {
            self.timer.borrow().is_some()
        }
    }

    #[wasm_bindgen_test]
    fn repeated_logins_keep_one_timer() {
        let runtime = ConsoleRuntime::boot(&ConsoleConfig::default(), Callback::noop()).unwrap();

        runtime.dispatch(ConsoleAction::LoginSucceeded("first".into()));
        runtime.dispatch(ConsoleAction::LoginSucceeded("second".into()));
        assert!(runtime.timer_armed());

        runtime.shutdown();
        assert!(!runtime.timer_armed());
    }
}
