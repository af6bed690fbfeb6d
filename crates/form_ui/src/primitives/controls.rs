use form_contract::{resolve_typed, Attributes, ButtonSize, ButtonVariant};

use super::*;

fn control_reserved() -> Vec<&'static str> {
    let mut reserved = ControlAttrs::KEYS.to_vec();
    reserved.extend(["class", "type", "value", "checked", "disabled"]);
    reserved
}

#[component]
/// Text-like input bound to the enclosing field.
pub fn FormInput(
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = None, into)] placeholder: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let Some(field) = use_field("FormInput") else {
        return ().into_view();
    };

    let element = view! {
        <input
            type=input_type.unwrap_or("text")
            class=merge_layout_class("fs-input", layout_class)
            placeholder=placeholder
            autocomplete=autocomplete
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        />
    };
    let element = spread_control_attrs(element, control_signal(field));
    spread_extra_attrs(element, "FormInput", &control_reserved(), extra_attrs).into_view()
}

#[component]
/// Multiline text area bound to the enclosing field.
pub fn FormTextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = None, into)] placeholder: Option<String>,
    #[prop(optional)] rows: Option<u16>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let Some(field) = use_field("FormTextArea") else {
        return ().into_view();
    };

    let element = view! {
        <textarea
            class=merge_layout_class("fs-textarea", layout_class)
            placeholder=placeholder
            rows=rows.unwrap_or(3)
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        ></textarea>
    };
    let element = spread_control_attrs(element, control_signal(field));
    spread_extra_attrs(element, "FormTextArea", &control_reserved(), extra_attrs).into_view()
}

#[component]
/// Select bound to the enclosing field; options are passed as children.
pub fn FormSelect(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    children: Children,
) -> impl IntoView {
    let Some(field) = use_field("FormSelect") else {
        return ().into_view();
    };

    let element = view! {
        <select
            class=merge_layout_class("fs-select", layout_class)
            prop:value=move || value.get()
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        >
            {children()}
        </select>
    };
    let element = spread_control_attrs(element, control_signal(field));
    spread_extra_attrs(element, "FormSelect", &control_reserved(), extra_attrs).into_view()
}

#[component]
/// Checkbox bound to the enclosing field.
pub fn FormCheckbox(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional)] extra_attrs: Option<AttrMap>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let Some(field) = use_field("FormCheckbox") else {
        return ().into_view();
    };

    let element = view! {
        <input
            type="checkbox"
            class=merge_layout_class("fs-checkbox", layout_class)
            prop:checked=move || checked.get()
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        />
    };
    let element = spread_control_attrs(element, control_signal(field));
    spread_extra_attrs(element, "FormCheckbox", &control_reserved(), extra_attrs).into_view()
}

#[component]
/// Variant-styled button. Renders an anchor when `href` is set.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class(&resolve_typed(variant, size), layout_class);

    match href {
        Some(href) => view! {
            <a
                href=href
                class=class
                aria-label=aria_label
                data-variant=variant.token()
                data-size=size.token()
            >
                {children()}
            </a>
        }
        .into_view(),
        None => view! {
            <button
                type=button_type.unwrap_or("button")
                class=class
                aria-label=aria_label
                disabled=move || disabled.get()
                data-variant=variant.token()
                data-size=size.token()
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {children()}
            </button>
        }
        .into_view(),
    }
}
