//! Minimal submit-time checks that drive error state on the example pages.
//!
//! Real applications plug their own validation library in; these checks only exist so the
//! examples can show the attribute contract reacting to errors.

use std::collections::HashMap;

use crate::catalog::{DemoField, DemoForm, FieldKind};

/// Checks one field value and returns its error messages.
pub fn check_field(field: &DemoField, value: &str) -> Vec<String> {
    let value = value.trim();
    let mut errors = Vec::new();

    if value.is_empty() {
        if field.required {
            errors.push(match field.kind {
                FieldKind::Checkbox => {
                    format!("You must accept the {}.", field.label.to_lowercase())
                }
                FieldKind::Select => format!("Please select a {}.", field.label.to_lowercase()),
                _ => format!("{} is required.", field.label),
            });
        }
        return errors;
    }

    if field.kind == FieldKind::Email && !looks_like_email(value) {
        errors.push("Please enter a valid email address.".to_string());
    }
    if let Some(min_length) = field.min_length {
        if value.chars().count() < min_length {
            errors.push(format!(
                "{} must be at least {min_length} characters.",
                field.label
            ));
        }
    }
    errors
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Checks every field of `form`; fields without errors are omitted from the result.
pub fn check_form(
    form: &DemoForm,
    values: &HashMap<String, String>,
) -> HashMap<String, Vec<String>> {
    form.fields
        .iter()
        .filter_map(|field| {
            let value = values.get(&field.name).map(String::as_str).unwrap_or_default();
            let errors = check_field(field, value);
            (!errors.is_empty()).then(|| (field.name.clone(), errors))
        })
        .collect()
}
