//! Field providers, field parts, form controls and the styled button.

use form_contract::{merge_classes, AttrMap, ControlAttrs};
use leptos::ev::{FocusEvent, MouseEvent};
use leptos::html::ElementDescriptor;
use leptos::*;

use crate::context::{id_scheme, use_field, FieldContext};

mod controls;
mod field;

pub use controls::{Button, FormCheckbox, FormInput, FormSelect, FormTextArea};
pub use field::{FormDescription, FormField, FormFieldset, FormLabel, FormLegend, FormValidation};

pub(crate) fn merge_layout_class(base: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => merge_classes(base, layout_class),
        _ => base.to_string(),
    }
}

/// Applies the synthesized control attributes, tracking field state.
pub(crate) fn spread_control_attrs<El>(
    element: HtmlElement<El>,
    attrs: Signal<ControlAttrs>,
) -> HtmlElement<El>
where
    El: ElementDescriptor + 'static,
{
    element
        .attr("name", move || attrs.with(|attrs| attrs.name.clone()))
        .attr("id", move || attrs.with(|attrs| attrs.id.clone()))
        .attr("data-fs-error", move || attrs.with(|attrs| attrs.data_fs_error))
        .attr("aria-describedby", move || {
            attrs.with(|attrs| attrs.aria_describedby.clone())
        })
        .attr("aria-invalid", move || attrs.with(|attrs| attrs.aria_invalid))
        .attr("aria-required", move || attrs.with(|attrs| attrs.aria_required))
        .attr("data-fs-control", move || {
            attrs.with(|attrs| attrs.data_fs_control)
        })
}

/// Splits caller passthrough attributes into the ones a primitive may apply and the rejected
/// keys. Keys in `reserved` belong to the primitive.
pub(crate) fn partition_extra(reserved: &[&str], extra: &AttrMap) -> (AttrMap, Vec<String>) {
    let mut allowed = AttrMap::new();
    let rejected = allowed.merge_extra(reserved, extra.iter());
    (allowed, rejected)
}

/// Applies caller passthrough attributes after the synthesized ones.
///
/// Keys in `reserved` are never overridden; rejected keys are logged.
pub(crate) fn spread_extra_attrs<El>(
    element: HtmlElement<El>,
    component: &'static str,
    reserved: &[&'static str],
    extra: Option<AttrMap>,
) -> HtmlElement<El>
where
    El: ElementDescriptor + 'static,
{
    let Some(extra) = extra else {
        return element;
    };
    let (allowed, rejected) = partition_extra(reserved, &extra);
    if !rejected.is_empty() {
        logging::warn!("{component} ignored passthrough attributes: {rejected:?}");
    }
    allowed.iter().fold(element, |element, (key, value)| {
        element.attr(key.to_string(), value.to_string())
    })
}

fn control_signal(field: FieldContext) -> Signal<ControlAttrs> {
    Signal::derive(move || form_contract::control_attrs(&field.state()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_class_is_appended_once() {
        assert_eq!(merge_layout_class("fs-input", None), "fs-input");
        assert_eq!(merge_layout_class("fs-input", Some("")), "fs-input");
        assert_eq!(
            merge_layout_class("fs-input", Some("wide fs-input")),
            "fs-input wide"
        );
    }

    #[test]
    fn partition_keeps_every_allowed_extra_and_reports_reserved_keys() {
        let extra: AttrMap = [
            ("autocomplete", "email"),
            ("aria-invalid", "false"),
            ("data-testid", "email-input"),
            ("class", "wide"),
        ]
        .into_iter()
        .collect();
        let reserved = ["class", "aria-invalid", "class"];

        let (allowed, rejected) = partition_extra(&reserved, &extra);

        assert_eq!(
            allowed.iter().collect::<Vec<_>>(),
            vec![("autocomplete", "email"), ("data-testid", "email-input")]
        );
        assert_eq!(
            rejected,
            vec!["aria-invalid".to_string(), "class".to_string()]
        );
    }

    #[test]
    fn partition_drops_malformed_names() {
        let extra: AttrMap = [("on click", "x"), ("title", "Email")].into_iter().collect();
        let (allowed, rejected) = partition_extra(&[], &extra);
        assert_eq!(allowed.get("title"), Some("Email"));
        assert_eq!(allowed.len(), 1);
        assert_eq!(rejected, vec!["on click".to_string()]);
    }
}
