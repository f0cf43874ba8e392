//! Effect-queue executor for reducer-emitted runtime effects.

use leptos::*;

use crate::runtime_context::SessionRuntimeContext;

/// Installs the executor that drains reducer-emitted effects in order.
pub fn install(runtime: SessionRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        // Reset the queue before executing: effects may dispatch further
        // actions, and their effects belong to the next batch.
        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_runtime_effect(effect);
        }
    });
}
