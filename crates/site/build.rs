use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use form_contract::{ButtonSize, ButtonVariant, IdScheme};
use serde::{Deserialize, Serialize};

const FIELD_KINDS: [&str; 5] = ["text", "email", "textarea", "select", "checkbox"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteManifest {
    schema_version: u32,
    #[serde(default)]
    ids: Option<IdScheme>,
    #[serde(default)]
    buttons: Vec<ButtonEntry>,
    #[serde(default)]
    forms: Vec<FormEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ButtonEntry {
    variant: Option<String>,
    size: Option<String>,
    label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FormEntry {
    slug: String,
    title: String,
    summary: String,
    submit_label: String,
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldEntry {
    name: String,
    label: String,
    kind: String,
    description: Option<String>,
    placeholder: Option<String>,
    option_label: Option<String>,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    required: bool,
    min_length: Option<usize>,
}

fn validate(manifest: &SiteManifest, path: &str) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {path}: expected 1 found {}",
            manifest.schema_version
        );
    }

    if let Some(ids) = &manifest.ids {
        if ids.description_suffix.trim().is_empty()
            || ids.validation_suffix.trim().is_empty()
            || ids.description_suffix == ids.validation_suffix
        {
            panic!("id suffixes must be non-blank and distinct in {path}: {ids:?}");
        }
    }

    for button in &manifest.buttons {
        if let Some(variant) = button.variant.as_deref() {
            if let Err(err) = variant.parse::<ButtonVariant>() {
                panic!("button `{}` in {path}: {err}", button.label);
            }
        }
        if let Some(size) = button.size.as_deref() {
            if let Err(err) = size.parse::<ButtonSize>() {
                panic!("button `{}` in {path}: {err}", button.label);
            }
        }
    }

    let mut slugs = HashSet::new();
    for form in &manifest.forms {
        if form.slug.trim().is_empty() || !slugs.insert(form.slug.as_str()) {
            panic!("empty or duplicate form slug `{}` in {path}", form.slug);
        }
        let mut names = HashSet::new();
        for field in &form.fields {
            if field.name.trim().is_empty() || !names.insert(field.name.as_str()) {
                panic!(
                    "empty or duplicate field name `{}` in form `{}`",
                    field.name, form.slug
                );
            }
            if !FIELD_KINDS.contains(&field.kind.as_str()) {
                panic!(
                    "unknown field kind `{}` for `{}` in form `{}`: expected one of {FIELD_KINDS:?}",
                    field.kind, field.name, form.slug
                );
            }
            if field.kind == "select" && field.options.is_empty() {
                panic!(
                    "select field `{}` in form `{}` declares no options",
                    field.name, form.slug
                );
            }
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("site.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: SiteManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let json = serde_json::to_string_pretty(&manifest).expect("serialize site manifest");
    let generated = format!(
        "/// Build-time generated site content catalog JSON.\n\
pub const SITE_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("site_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
