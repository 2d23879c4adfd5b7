//! Console context and provider

use super::runtime::ConsoleRuntime;
use crate::components::StartupError;
use hexadmin_core::{ConsoleAction, ConsoleConfig, ConsoleState};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// What components see: the current state plus a way to dispatch actions
#[derive(Clone)]
pub struct ConsoleHandle {
    runtime: Rc<ConsoleRuntime>,
    state: Rc<ConsoleState>,
}

impl ConsoleHandle {
    pub fn dispatch(&self, action: ConsoleAction) {
        self.runtime.dispatch(action);
    }

    /// Callback that maps an event to an action and dispatches it
    pub fn callback<IN, F>(&self, map: F) -> Callback<IN>
    where
        F: Fn(IN) -> ConsoleAction + 'static,
    {
        let runtime = Rc::clone(&self.runtime);
        Callback::from(move |input| runtime.dispatch(map(input)))
    }
}

impl Deref for ConsoleHandle {
    type Target = ConsoleState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl PartialEq for ConsoleHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.runtime, &other.runtime) && Rc::ptr_eq(&self.state, &other.state)
    }
}

#[derive(Properties, PartialEq)]
pub struct ConsoleProviderProps {
    pub config: ConsoleConfig,
    pub children: Children,
}

/// Boots a [`ConsoleRuntime`] for `config` and shares it with its children.
///
/// The runtime is shut down when the provider unmounts or the config changes.
#[function_component(ConsoleProvider)]
pub fn console_provider(props: &ConsoleProviderProps) -> Html {
    let force_update = use_force_update();
    let runtime = use_memo(props.config.clone(), move |config| {
        let notify = Callback::from(move |()| force_update.force_update());
        ConsoleRuntime::boot(config, notify)
    });

    {
        let runtime = Rc::clone(&runtime);
        use_effect_with(props.config.clone(), move |_| {
            let active = match runtime.as_ref() {
                Ok(runtime) => Some(Rc::clone(runtime)),
                Err(_) => None,
            };
            if let Some(runtime) = &active {
                runtime.resume();
            }
            move || {
                if let Some(runtime) = active {
                    runtime.shutdown();
                }
            }
        });
    }

    match runtime.as_ref() {
        Ok(runtime) => {
            let handle = ConsoleHandle {
                runtime: Rc::clone(runtime),
                state: runtime.state(),
            };
            html! {
                <ContextProvider<ConsoleHandle> context={handle}>
                    {props.children.clone()}
                </ContextProvider<ConsoleHandle>>
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Console failed to start");
            html! { <StartupError message={err.to_string()} /> }
        }
    }
}

/// Hook to use the console context
#[hook]
pub fn use_console() -> ConsoleHandle {
    use_context::<ConsoleHandle>()
        .expect("ConsoleHandle not found. Make sure to wrap your component with ConsoleProvider")
}
