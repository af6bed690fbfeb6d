//! Attribute synthesis for each form element role.
//!
//! Every function here is total and deterministic: the same [`FieldState`] always yields an
//! equal attribute shape, and `data-fs-error` is present on every role exactly when the field
//! has an error.

use crate::attrs::{
    AriaLive, ControlAttrs, DescriptionAttrs, FieldsetAttrs, LabelAttrs, LegendAttrs,
    ValidationAttrs, ValidationErrorAttrs, ERROR_SENTINEL, MARKER,
};
use crate::field::FieldState;

fn error_flag(state: &FieldState) -> Option<&'static str> {
    state.has_error.then_some(ERROR_SENTINEL)
}

fn described_by(state: &FieldState) -> Option<String> {
    let ids = [
        (state.has_description, state.description_id.as_str()),
        (state.has_error, state.validation_id.as_str()),
    ]
    .into_iter()
    .filter_map(|(applies, id)| applies.then_some(id.trim()))
    .filter(|id| !id.is_empty())
    .collect::<Vec<_>>();

    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}

/// Attributes for the form control element.
pub fn control_attrs(state: &FieldState) -> ControlAttrs {
    ControlAttrs {
        name: state.name.clone(),
        id: state.id.clone(),
        data_fs_error: error_flag(state),
        aria_describedby: described_by(state),
        aria_invalid: state.has_error.then_some("true"),
        aria_required: state.required.then_some("true"),
        data_fs_control: MARKER,
    }
}

/// Attributes for the label associated with the control.
pub fn label_attrs(state: &FieldState) -> LabelAttrs {
    LabelAttrs {
        for_id: state.id.clone(),
        data_fs_error: error_flag(state),
        data_fs_label: MARKER,
    }
}

/// Attributes for the validation message container.
///
/// `aria-live` follows the current error state: assertive while errors are present, polite
/// otherwise.
pub fn validation_attrs(state: &FieldState) -> ValidationAttrs {
    ValidationAttrs {
        id: state.validation_id.clone(),
        data_fs_error: error_flag(state),
        data_fs_validation: MARKER,
        aria_live: if state.has_error {
            AriaLive::Assertive
        } else {
            AriaLive::Polite
        },
    }
}

/// Attributes for one validation message. Carries no id; list keys are the caller's concern.
pub fn validation_error_attrs(state: &FieldState) -> ValidationErrorAttrs {
    ValidationErrorAttrs {
        data_fs_validation_error: MARKER,
        data_fs_error: error_flag(state),
    }
}

/// Attributes for a fieldset legend.
pub fn legend_attrs(state: &FieldState) -> LegendAttrs {
    LegendAttrs {
        data_fs_legend: MARKER,
        data_fs_error: error_flag(state),
    }
}

/// Attributes for the field description element.
pub fn description_attrs(state: &FieldState) -> DescriptionAttrs {
    DescriptionAttrs {
        id: state.description_id.clone(),
        data_fs_description: MARKER,
        data_fs_error: error_flag(state),
    }
}

/// Attributes for a `<fieldset>` grouping several controls under one field.
pub fn fieldset_attrs(state: &FieldState) -> FieldsetAttrs {
    FieldsetAttrs {
        data_fs_fieldset: MARKER,
        data_fs_error: error_flag(state),
    }
}
