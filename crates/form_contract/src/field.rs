//! Field state consumed by the attribute synthesizer and the id scheme that derives its ids.

use serde::{Deserialize, Serialize};

/// Validation-derived description of one form field at a point in time.
///
/// Produced by the caller's validation layer on every pass and treated as read-only by the
/// synthesizer. `description_id` and `validation_id` are the ids of the elements that describe
/// the control; build the state through [`IdScheme::field`] to keep them consistent with `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldState {
    /// Form submission name of the control.
    pub name: String,
    /// Control element id, used for label association.
    pub id: String,
    /// Id of the field description element.
    pub description_id: String,
    /// Id of the validation message container.
    pub validation_id: String,
    /// Whether the field currently has at least one validation error.
    pub has_error: bool,
    /// Whether a description element is rendered for the field.
    pub has_description: bool,
    /// Whether the field is required.
    pub required: bool,
}

impl FieldState {
    /// Creates a clean field state using the default [`IdScheme`].
    pub fn new(name: impl Into<String>) -> Self {
        IdScheme::default().field(name, None)
    }

    /// Sets the error flag.
    pub fn with_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    /// Sets the description flag.
    pub fn with_description(mut self, has_description: bool) -> Self {
        self.has_description = has_description;
        self
    }

    /// Sets the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Id derivation settings for form fields.
///
/// Every field is optional when deserialized; missing entries fall back to the defaults
/// (`fs`, `description`, `validation`). Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdScheme {
    /// Prefix for generated control ids.
    pub prefix: String,
    /// Suffix appended to the control id for the description element.
    pub description_suffix: String,
    /// Suffix appended to the control id for the validation container.
    pub validation_suffix: String,
}

impl Default for IdScheme {
    fn default() -> Self {
        Self {
            prefix: "fs".to_string(),
            description_suffix: "description".to_string(),
            validation_suffix: "validation".to_string(),
        }
    }
}

impl IdScheme {
    /// Returns the generated control id for a field name, e.g. `user.email` -> `fs-user-email`.
    ///
    /// Names are slugged: every run of non-alphanumeric characters becomes one `-` and case is
    /// folded, so `user.email`, `user_email` and `User Email` all map to the same id. Forms that
    /// mix such names must pass an explicit id to [`IdScheme::field`].
    pub fn control_id(&self, name: &str) -> String {
        let slug = slug(name);
        let slug = if slug.is_empty() { "field" } else { slug.as_str() };
        if self.prefix.is_empty() {
            slug.to_string()
        } else {
            format!("{}-{slug}", self.prefix)
        }
    }

    /// Returns the description element id for a control id.
    pub fn description_id(&self, control_id: &str) -> String {
        format!("{control_id}-{}", self.description_suffix)
    }

    /// Returns the validation container id for a control id.
    pub fn validation_id(&self, control_id: &str) -> String {
        format!("{control_id}-{}", self.validation_suffix)
    }

    /// Builds a clean [`FieldState`] for `name`, generating the control id unless one is given.
    pub fn field(&self, name: impl Into<String>, id: Option<String>) -> FieldState {
        let name = name.into();
        let id = id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| self.control_id(&name));
        FieldState {
            description_id: self.description_id(&id),
            validation_id: self.validation_id(&id),
            name,
            id,
            has_error: false,
            has_description: false,
            required: false,
        }
    }
}

fn slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slug_matches_expected_cases() {
        let cases = [
            ("email", "email"),
            ("Email", "email"),
            ("user.email", "user-email"),
            ("tags[0]", "tags-0"),
            ("  first  name ", "first-name"),
            ("__", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(slug(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn default_scheme_derives_all_ids_from_name() {
        let state = FieldState::new("user.email");
        assert_eq!(state.id, "fs-user-email");
        assert_eq!(state.description_id, "fs-user-email-description");
        assert_eq!(state.validation_id, "fs-user-email-validation");
        assert!(!state.has_error && !state.has_description && !state.required);
    }

    #[test]
    fn explicit_id_wins_over_generated_one() {
        let state = IdScheme::default().field("email", Some("signup-email".to_string()));
        assert_eq!(state.id, "signup-email");
        assert_eq!(state.validation_id, "signup-email-validation");
    }

    #[test]
    fn blank_explicit_id_falls_back_to_generated_one() {
        let state = IdScheme::default().field("email", Some("  ".to_string()));
        assert_eq!(state.id, "fs-email");
    }

    #[test]
    fn unnamed_field_still_gets_an_id() {
        assert_eq!(IdScheme::default().control_id("!!"), "fs-field");
    }

    #[test]
    fn names_differing_only_in_punctuation_share_an_id_unless_given_one() {
        let scheme = IdScheme::default();
        assert_eq!(scheme.control_id("user.email"), scheme.control_id("user_email"));

        let dotted = scheme.field("user.email", None);
        let underscored = scheme.field("user_email", Some("fs-user-email-alt".to_string()));
        assert_ne!(dotted.id, underscored.id);
    }

    #[test]
    fn malformed_scheme_is_rejected() {
        let cases = [
            r#"{ "prefix": 1 }"#,
            r#"{ "prefx": "app" }"#,
            r#"{ "validation_suffix": null }"#,
        ];

        for raw in cases {
            assert!(
                serde_json::from_str::<IdScheme>(raw).is_err(),
                "input={raw}"
            );
        }
    }

    #[test]
    fn partial_scheme_deserializes_with_defaults() {
        let scheme: IdScheme =
            serde_json::from_str(r#"{ "prefix": "", "validation_suffix": "errors" }"#)
                .expect("parse scheme");
        assert_eq!(scheme.control_id("Email"), "email");
        assert_eq!(scheme.description_id("email"), "email-description");
        assert_eq!(scheme.validation_id("email"), "email-errors");
    }
}
