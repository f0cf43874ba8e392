//! Runtime provider and context wiring for the desktop session store.
//!
//! This module owns the long-lived session signal, the dispatch callback,
//! and the effect queue. The session is an explicitly constructed object
//! owned by the provider; nothing here is a hidden singleton.

use leptos::*;

use crate::{
    effect_executor,
    host::SessionHostContext,
    model::SessionState,
    reducer::{reduce_session, RuntimeEffect, SessionAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading session state and dispatching
/// [`SessionAction`] values.
pub struct SessionRuntimeContext {
    /// Host service bundle executing runtime side effects.
    pub host: StoredValue<SessionHostContext>,
    /// Reactive session state signal.
    pub state: RwSignal<SessionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the
    /// effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SessionAction>,
}

impl SessionRuntimeContext {
    /// Dispatches a session action through the runtime context callback.
    pub fn dispatch_action(&self, action: SessionAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`SessionRuntimeContext`] to descendant components and runs the
/// boot sequence.
pub fn SessionProvider(children: Children) -> impl IntoView {
    let host = store_value(SessionHostContext::default());
    let state = create_rw_signal(SessionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: SessionAction| {
        let mut session = state.get_untracked();
        let previous = session.clone();
        let ports = host.get_value().session_ports();

        match reduce_session(&mut session, &ports, action) {
            Ok(new_effects) => {
                if session != previous {
                    state.set(session);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("session reducer error: {err}"),
        }
    });

    let runtime = SessionRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };
    provide_context(runtime);
    effect_executor::install(runtime);
    host.get_value().install_boot_sequence(dispatch);

    children().into_view()
}

/// Returns the current [`SessionRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`SessionProvider`].
pub fn use_session_runtime() -> SessionRuntimeContext {
    use_context::<SessionRuntimeContext>().expect("SessionRuntimeContext not provided")
}
