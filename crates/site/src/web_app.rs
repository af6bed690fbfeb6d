use std::collections::HashMap;

use form_contract::{control_attrs, Attributes};
use form_ui::prelude::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::catalog::{site_catalog, ButtonEntry, DemoField, DemoForm, FieldKind};
use crate::demo::check_form;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    provide_id_scheme(site_catalog().id_scheme());

    view! {
        <Title text="Form primitives" />
        <Meta name="description" content="Accessible form primitives for Leptos." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DocsHome />
                    <Route path="/examples/:slug" view=ExampleRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DocsHome() -> impl IntoView {
    let catalog = site_catalog();
    let sample = FieldState::new("email").with_error(true).with_required(true);
    let sample_attrs = control_attrs(&sample).to_attr_map().to_html();

    let buttons = catalog
        .buttons
        .iter()
        .filter_map(|entry| match gallery_button(entry) {
            Ok(view) => Some(view),
            Err(err) => {
                logging::warn!("button gallery entry `{}` skipped: {err}", entry.label);
                None
            }
        })
        .collect_view();

    let examples = catalog
        .forms
        .iter()
        .map(|form| {
            view! {
                <li>
                    <A href=format!("/examples/{}", form.slug)>{form.title.as_str()}</A>
                    " "
                    <span>{form.summary.as_str()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="docs-home">
            <h1>"Form primitives"</h1>
            <p>
                "Field providers derive ids and accessibility attributes from validation state; "
                "labels, descriptions, validation messages and controls pick them up from context."
            </p>
            <h2>"Control attributes for an invalid, required field"</h2>
            <pre><code>{format!("<input {sample_attrs} />")}</code></pre>
            <h2>"Buttons"</h2>
            <div class="button-gallery">{buttons}</div>
            <h2>"Examples"</h2>
            <ul>{examples}</ul>
        </section>
    }
}

fn gallery_button(entry: &'static ButtonEntry) -> Result<View, form_contract::VariantError> {
    let classes = entry.classes()?;
    let variant = entry
        .variant
        .as_deref()
        .map(str::parse::<ButtonVariant>)
        .transpose()?
        .unwrap_or_default();
    let size = entry
        .size
        .as_deref()
        .map(str::parse::<ButtonSize>)
        .transpose()?
        .unwrap_or_default();

    Ok(view! {
        <figure class="button-sample">
            <Button variant size aria_label=entry.label.clone()>
                {entry.label.as_str()}
            </Button>
            <figcaption>
                <code>{format!("{} / {}", variant.token(), size.token())}</code>
                <small>{classes}</small>
            </figcaption>
        </figure>
    }
    .into_view())
}

#[component]
fn ExampleRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_default()
    };

    move || match site_catalog().form(&slug()) {
        Some(form) => view! { <ExampleForm form /> }.into_view(),
        None => view! {
            <section class="canonical-content">
                <h1>"Example not found"</h1>
                <p>{move || format!("No example is registered as `{}`.", slug())}</p>
                <A href="/">"Back to the docs"</A>
            </section>
        }
        .into_view(),
    }
}

#[component]
fn ExampleForm(form: &'static DemoForm) -> impl IntoView {
    let values = create_rw_signal(HashMap::<String, String>::new());
    let errors = create_rw_signal(HashMap::<String, Vec<String>>::new());
    let passed = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let found = values.with(|values| check_form(form, values));
        passed.set(found.is_empty());
        errors.set(found);
    };

    let fields = form
        .fields
        .iter()
        .map(|field| view! { <ExampleField field values errors /> })
        .collect_view();

    view! {
        <section class="example">
            <h1>{form.title.as_str()}</h1>
            <p>{form.summary.as_str()}</p>
            <form novalidate=true on:submit=on_submit>
                {fields}
                <Button button_type="submit">{form.submit_label.as_str()}</Button>
            </form>
            <Show when=move || passed.get()>
                <p role="status">"All fields passed the demo checks."</p>
            </Show>
        </section>
    }
}

#[component]
fn ExampleField(
    field: &'static DemoField,
    values: RwSignal<HashMap<String, String>>,
    errors: RwSignal<HashMap<String, Vec<String>>>,
) -> impl IntoView {
    let name = field.name.as_str();
    let value =
        Signal::derive(move || values.with(|values| values.get(name).cloned().unwrap_or_default()));
    let field_errors =
        Signal::derive(move || errors.with(|errors| errors.get(name).cloned().unwrap_or_default()));
    let set_value = move |next: String| {
        values.update(|values| {
            values.insert(name.to_string(), next);
        });
    };
    match field.kind {
        FieldKind::Checkbox => view! {
            <FormFieldset name errors=field_errors required=field.required>
                <FormLegend>{field.label.as_str()}</FormLegend>
                <div class="example-checkbox">
                    <FormCheckbox
                        checked=Signal::derive(move || !value.get().is_empty())
                        on_change=Callback::new(move |ev| {
                            let checked = event_target_checked(&ev);
                            set_value(if checked { "on".to_string() } else { String::new() });
                        })
                    />
                    <FormLabel>
                        {field.option_label.as_deref().unwrap_or(field.label.as_str())}
                    </FormLabel>
                </div>
                {field_description(field)}
                <FormValidation />
            </FormFieldset>
        }
        .into_view(),
        FieldKind::Select => {
            let options = field
                .options
                .iter()
                .map(|option| view! { <option value=option.as_str()>{option.as_str()}</option> })
                .collect_view();
            view! {
                <div class="example-field">
                    <FormField name errors=field_errors required=field.required>
                        <FormLabel>{field.label.as_str()}</FormLabel>
                        <FormSelect
                            value=value
                            on_change=Callback::new(move |ev| set_value(event_target_value(&ev)))
                        >
                            <option value="">{format!("Select a {}", field.label.to_lowercase())}</option>
                            {options}
                        </FormSelect>
                        {field_description(field)}
                        <FormValidation />
                    </FormField>
                </div>
            }
            .into_view()
        }
        FieldKind::Textarea => view! {
            <div class="example-field">
                <FormField name errors=field_errors required=field.required>
                    <FormLabel>{field.label.as_str()}</FormLabel>
                    <FormTextArea
                        placeholder=field.placeholder.clone()
                        value=value
                        on_input=Callback::new(move |ev| set_value(event_target_value(&ev)))
                    />
                    {field_description(field)}
                    <FormValidation />
                </FormField>
            </div>
        }
        .into_view(),
        FieldKind::Text | FieldKind::Email => {
            let (input_type, autocomplete) = if field.kind == FieldKind::Email {
                ("email", "email")
            } else {
                ("text", "on")
            };
            view! {
                <div class="example-field">
                    <FormField name errors=field_errors required=field.required>
                        <FormLabel>{field.label.as_str()}</FormLabel>
                        <FormInput
                            input_type
                            placeholder=field.placeholder.clone()
                            autocomplete
                            value=value
                            on_input=Callback::new(move |ev| set_value(event_target_value(&ev)))
                        />
                        {field_description(field)}
                        <FormValidation />
                    </FormField>
                </div>
            }
            .into_view()
        }
    }
}

// Called from inside field provider children so the description registers with that field.
fn field_description(field: &'static DemoField) -> Option<View> {
    field
        .description
        .as_deref()
        .map(|text| view! { <FormDescription>{text}</FormDescription> }.into_view())
}
