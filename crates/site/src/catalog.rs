//! Site content catalog generated from `site.toml` at build time.

use std::sync::OnceLock;

use form_contract::{resolve, IdScheme, VariantError};
use leptos::logging;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/site_catalog_generated.rs"));

/// Parsed site content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteCatalog {
    /// Id scheme provided to every example form.
    #[serde(default)]
    pub ids: Option<IdScheme>,
    /// Button gallery entries, in display order.
    #[serde(default)]
    pub buttons: Vec<ButtonEntry>,
    /// Example forms.
    #[serde(default)]
    pub forms: Vec<DemoForm>,
}

/// One button gallery entry declared with variant/size tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ButtonEntry {
    /// Variant token; `None` uses the default variant.
    pub variant: Option<String>,
    /// Size token; `None` uses the default size.
    pub size: Option<String>,
    /// Button text.
    pub label: String,
}

impl ButtonEntry {
    /// Resolves the entry's tokens into the button class string.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] when a token is outside the closed variant/size sets.
    pub fn classes(&self) -> Result<String, VariantError> {
        resolve(self.variant.as_deref(), self.size.as_deref())
    }
}

/// One example form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoForm {
    /// Route slug under `/examples/`.
    pub slug: String,
    /// Page heading.
    pub title: String,
    /// Lead paragraph.
    pub summary: String,
    /// Submit button text.
    pub submit_label: String,
    /// Fields in display order.
    pub fields: Vec<DemoField>,
}

/// Control family rendered for a demo field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Email input.
    Email,
    /// Multiline text area.
    Textarea,
    /// Select with fixed options.
    Select,
    /// Single checkbox rendered inside a fieldset.
    Checkbox,
}

/// One demo field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoField {
    /// Submission name.
    pub name: String,
    /// Label text (legend text for checkboxes).
    pub label: String,
    /// Control family.
    pub kind: FieldKind,
    /// Optional description rendered under the control.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional input placeholder.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Label next to a checkbox.
    #[serde(default)]
    pub option_label: Option<String>,
    /// Select options.
    #[serde(default)]
    pub options: Vec<String>,
    /// Whether a value is required.
    #[serde(default)]
    pub required: bool,
    /// Minimum trimmed length for text values.
    #[serde(default)]
    pub min_length: Option<usize>,
}

impl SiteCatalog {
    /// Returns the example form registered under `slug`.
    pub fn form(&self, slug: &str) -> Option<&DemoForm> {
        self.forms.iter().find(|form| form.slug == slug)
    }

    /// Returns the configured id scheme, or the default one.
    pub fn id_scheme(&self) -> IdScheme {
        self.ids.clone().unwrap_or_default()
    }
}

/// Parses a catalog payload.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload does not match [`SiteCatalog`].
pub fn parse_catalog(raw: &str) -> Result<SiteCatalog, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Returns the site catalog generated at build time, parsed once.
pub fn site_catalog() -> &'static SiteCatalog {
    static CATALOG: OnceLock<SiteCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        parse_catalog(SITE_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("site catalog load failed: {err}");
            SiteCatalog::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generated_catalog_parses() {
        let catalog = parse_catalog(SITE_CATALOG_JSON).expect("generated catalog should parse");
        let form = catalog
            .form("native-elements")
            .expect("native elements example");
        assert_eq!(
            form.fields
                .iter()
                .map(|field| field.name.as_str())
                .collect::<Vec<_>>(),
            vec!["email", "bio", "language", "terms"]
        );
        assert_eq!(catalog.id_scheme(), IdScheme::default());
    }

    #[test]
    fn fields_without_a_placeholder_carry_none() {
        let form = site_catalog()
            .form("native-elements")
            .expect("native elements example");
        let placeholders = form
            .fields
            .iter()
            .map(|field| (field.name.as_str(), field.placeholder.as_deref()))
            .collect::<Vec<_>>();
        assert_eq!(
            placeholders,
            vec![
                ("email", Some("you@example.com")),
                ("bio", None),
                ("language", None),
                ("terms", None),
            ]
        );
    }

    #[test]
    fn every_gallery_button_resolves() {
        for button in &site_catalog().buttons {
            let classes = button
                .classes()
                .unwrap_or_else(|err| panic!("{}: {err}", button.label));
            assert!(!classes.is_empty());
        }
    }

    #[test]
    fn unknown_button_token_surfaces_variant_error() {
        let button = ButtonEntry {
            variant: Some("primary".to_string()),
            size: None,
            label: "Go".to_string(),
        };
        assert_eq!(
            button.classes(),
            Err(VariantError::InvalidVariant("primary".to_string()))
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = parse_catalog(r#"{ "schema_version": 1, "ids": null }"#).expect("parse");
        assert_eq!(catalog, SiteCatalog::default());
    }
}
