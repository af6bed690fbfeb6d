//! Reactive field context shared between a field provider and its nested primitives.

use form_contract::{FieldState, IdScheme};
use leptos::*;

/// Per-field reactive state provided by [`crate::FormField`] and [`crate::FormFieldset`].
///
/// Name and ids are fixed when the provider renders; error, required and description presence
/// are tracked, so attribute closures that call [`FieldContext::state`] update on every
/// validation pass.
#[derive(Clone, Copy)]
pub struct FieldContext {
    base: StoredValue<FieldState>,
    errors: Signal<Vec<String>>,
    required: Signal<bool>,
    has_description: RwSignal<bool>,
}

impl FieldContext {
    /// Creates a field context from a base state whose flags are replaced by the signals.
    pub fn new(base: FieldState, errors: Signal<Vec<String>>, required: Signal<bool>) -> Self {
        Self {
            base: store_value(base),
            errors,
            required,
            has_description: create_rw_signal(false),
        }
    }

    /// Returns the current field state. Tracks errors, required and description presence.
    pub fn state(&self) -> FieldState {
        let mut state = self.base.get_value();
        state.has_error = self.errors.with(|errors| !errors.is_empty());
        state.required = self.required.get();
        state.has_description = self.has_description.get();
        state
    }

    /// Returns the current error messages.
    pub fn errors(&self) -> Vec<String> {
        self.errors.get()
    }

    pub(crate) fn set_has_description(&self, present: bool) {
        self.has_description.set(present);
    }
}

/// Provides the id scheme used by field providers rendered below the current owner.
pub fn provide_id_scheme(scheme: IdScheme) {
    provide_context(scheme);
}

pub(crate) fn id_scheme() -> IdScheme {
    use_context::<IdScheme>().unwrap_or_default()
}

/// Returns the enclosing field context, logging a warning naming `component` when there is none.
pub fn use_field(component: &'static str) -> Option<FieldContext> {
    let field = use_context::<FieldContext>();
    if field.is_none() {
        logging::warn!("{component} rendered outside of a FormField or FormFieldset; skipping");
    }
    field
}
