//! Leptos form primitives wired to the `form_contract` accessibility attributes.
//!
//! [`FormField`] and [`FormFieldset`] turn caller-owned validation state (name, errors,
//! required flag) into a field context. Nested primitives read that context and apply the
//! synthesized `data-fs-*` / `aria-*` attributes to their element, so labels, descriptions,
//! validation messages and controls stay associated without ad hoc id plumbing. [`Button`] is
//! the variant-styled button used by the documentation site.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod context;
mod primitives;

pub use context::{provide_id_scheme, use_field, FieldContext};
pub use primitives::{
    Button, FormCheckbox, FormDescription, FormField, FormFieldset, FormInput, FormLabel,
    FormLegend, FormSelect, FormTextArea, FormValidation,
};

pub use form_contract::{AttrMap, ButtonSize, ButtonVariant, FieldState, IdScheme};

/// Convenience imports for crates composing forms from the shared primitive set.
pub mod prelude {
    pub use crate::{
        provide_id_scheme, use_field, AttrMap, Button, ButtonSize, ButtonVariant, FieldContext,
        FieldState, FormCheckbox, FormDescription, FormField, FormFieldset, FormInput, FormLabel,
        FormLegend, FormSelect, FormTextArea, FormValidation, IdScheme,
    };
}
