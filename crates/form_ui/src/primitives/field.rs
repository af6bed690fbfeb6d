use form_contract::{
    description_attrs, fieldset_attrs, label_attrs, legend_attrs, validation_attrs,
    validation_error_attrs, Attributes, DescriptionAttrs, FieldsetAttrs, LabelAttrs, LegendAttrs,
    ValidationAttrs,
};

use super::*;

fn field_context(
    name: String,
    id: Option<String>,
    errors: MaybeSignal<Vec<String>>,
    required: MaybeSignal<bool>,
) -> FieldContext {
    FieldContext::new(
        id_scheme().field(name, id),
        Signal::derive(move || errors.get()),
        Signal::derive(move || required.get()),
    )
}

#[component]
/// Renderless field provider for a single control.
///
/// Ids derive from `name` through the provided [`form_contract::IdScheme`] unless `id` is given.
/// `errors` comes from the caller's validation layer; a non-empty list marks the field invalid.
pub fn FormField(
    #[prop(into)] name: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] errors: MaybeSignal<Vec<String>>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    provide_context(field_context(name, id, errors, required));
    children()
}

#[component]
/// Field provider rendered as a `<fieldset>`, for groups such as checkbox or radio sets.
pub fn FormFieldset(
    #[prop(into)] name: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] errors: MaybeSignal<Vec<String>>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    children: Children,
) -> impl IntoView {
    let field = field_context(name, id, errors, required);
    provide_context(field);
    let attrs = Signal::derive(move || fieldset_attrs(&field.state()));

    let element = view! {
        <fieldset
            class=merge_layout_class("fs-fieldset", layout_class)
            data-fs-fieldset=move || attrs.with(|attrs| attrs.data_fs_fieldset)
            data-fs-error=move || attrs.with(|attrs| attrs.data_fs_error)
        >
            {children()}
        </fieldset>
    };
    spread_extra_attrs(
        element,
        "FormFieldset",
        &reserved_with_class(FieldsetAttrs::KEYS),
        extra_attrs,
    )
}

fn reserved_with_class(keys: &'static [&'static str]) -> Vec<&'static str> {
    let mut reserved = keys.to_vec();
    reserved.push("class");
    reserved
}

#[component]
/// Legend for the enclosing [`FormFieldset`].
pub fn FormLegend(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    children: Children,
) -> impl IntoView {
    let Some(field) = use_field("FormLegend") else {
        return ().into_view();
    };
    let attrs = Signal::derive(move || legend_attrs(&field.state()));

    let element = view! {
        <legend
            class=merge_layout_class("fs-legend", layout_class)
            data-fs-legend=move || attrs.with(|attrs| attrs.data_fs_legend)
            data-fs-error=move || attrs.with(|attrs| attrs.data_fs_error)
        >
            {children()}
        </legend>
    };
    spread_extra_attrs(
        element,
        "FormLegend",
        &reserved_with_class(LegendAttrs::KEYS),
        extra_attrs,
    )
    .into_view()
}

#[component]
/// Label associated with the enclosing field's control.
pub fn FormLabel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    children: Children,
) -> impl IntoView {
    let Some(field) = use_field("FormLabel") else {
        return ().into_view();
    };
    let attrs = Signal::derive(move || label_attrs(&field.state()));

    let element = view! {
        <label
            class=merge_layout_class("fs-label", layout_class)
            for=move || attrs.with(|attrs| attrs.for_id.clone())
            data-fs-error=move || attrs.with(|attrs| attrs.data_fs_error)
            data-fs-label=move || attrs.with(|attrs| attrs.data_fs_label)
        >
            {children()}
        </label>
    };
    spread_extra_attrs(
        element,
        "FormLabel",
        &reserved_with_class(LabelAttrs::KEYS),
        extra_attrs,
    )
    .into_view()
}

#[component]
/// Field description; registers itself so the control's `aria-describedby` includes it.
pub fn FormDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    children: Children,
) -> impl IntoView {
    let Some(field) = use_field("FormDescription") else {
        return ().into_view();
    };
    field.set_has_description(true);
    on_cleanup(move || field.set_has_description(false));
    let attrs = Signal::derive(move || description_attrs(&field.state()));

    let element = view! {
        <div
            class=merge_layout_class("fs-description", layout_class)
            id=move || attrs.with(|attrs| attrs.id.clone())
            data-fs-description=move || attrs.with(|attrs| attrs.data_fs_description)
            data-fs-error=move || attrs.with(|attrs| attrs.data_fs_error)
        >
            {children()}
        </div>
    };
    spread_extra_attrs(
        element,
        "FormDescription",
        &reserved_with_class(DescriptionAttrs::KEYS),
        extra_attrs,
    )
    .into_view()
}

#[component]
/// Live region listing the enclosing field's validation messages, one element per message.
pub fn FormValidation(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
) -> impl IntoView {
    let Some(field) = use_field("FormValidation") else {
        return ().into_view();
    };
    let attrs = Signal::derive(move || validation_attrs(&field.state()));
    let message_attrs = Signal::derive(move || validation_error_attrs(&field.state()));

    let element = view! {
        <div
            class=merge_layout_class("fs-validation", layout_class)
            id=move || attrs.with(|attrs| attrs.id.clone())
            data-fs-error=move || attrs.with(|attrs| attrs.data_fs_error)
            data-fs-validation=move || attrs.with(|attrs| attrs.data_fs_validation)
            aria-live=move || attrs.with(|attrs| attrs.aria_live.token())
        >
            {move || {
                field
                    .errors()
                    .into_iter()
                    .map(|message| {
                        view! {
                            <span
                                data-fs-validation-error=move || {
                                    message_attrs.with(|attrs| attrs.data_fs_validation_error)
                                }
                                data-fs-error=move || message_attrs.with(|attrs| attrs.data_fs_error)
                            >
                                {message}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    };
    spread_extra_attrs(
        element,
        "FormValidation",
        &reserved_with_class(ValidationAttrs::KEYS),
        extra_attrs,
    )
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn part_passthrough_keeps_contract_keys_and_class() {
        let extra: AttrMap = [
            ("data-fs-error", ""),
            ("class", "hijack"),
            ("id", "custom"),
            ("data-testid", "part"),
        ]
        .into_iter()
        .collect();

        let cases: [(&str, &'static [&'static str], Vec<&str>); 4] = [
            ("legend", LegendAttrs::KEYS, vec!["data-fs-error", "class"]),
            ("description", DescriptionAttrs::KEYS, vec!["data-fs-error", "class", "id"]),
            ("validation", ValidationAttrs::KEYS, vec!["data-fs-error", "class", "id"]),
            ("label", LabelAttrs::KEYS, vec!["data-fs-error", "class"]),
        ];

        for (part, keys, expected_rejected) in cases {
            let (allowed, rejected) = partition_extra(&reserved_with_class(keys), &extra);
            assert_eq!(rejected, expected_rejected, "part={part}");
            assert_eq!(allowed.get("data-testid"), Some("part"), "part={part}");
        }
    }
}
