//! Runtime-agnostic accessibility contract for form primitives.
//!
//! This crate owns the `data-fs-*` / `aria-*` attribute shapes applied to form
//! controls, labels, descriptions, validation messages, fieldsets and legends,
//! plus the button variant lookup used by the documentation site. Everything
//! here is a pure function over plain values: no Leptos, no browser APIs, no
//! shared state. The `form_ui` crate spreads these shapes onto real elements.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod attrs;
mod field;
mod synth;
mod variant;

pub use attrs::{
    AriaLive, AttrMap, Attributes, ControlAttrs, DescriptionAttrs, FieldsetAttrs, LabelAttrs,
    LegendAttrs, ValidationAttrs, ValidationErrorAttrs, ERROR_SENTINEL, MARKER,
};
pub use field::{FieldState, IdScheme};
pub use synth::{
    control_attrs, description_attrs, fieldset_attrs, label_attrs, legend_attrs,
    validation_attrs, validation_error_attrs,
};
pub use variant::{
    merge_classes, resolve, resolve_typed, resolve_with_class, ButtonSize, ButtonVariant,
    VariantError,
};
