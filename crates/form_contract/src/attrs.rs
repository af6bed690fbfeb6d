//! Attribute shapes for each form element role and the generic [`AttrMap`] they flatten into.

use serde::{Serialize, Serializer};

/// Value carried by every marker attribute (`data-fs-control`, `data-fs-label`, ...).
pub const MARKER: &str = "";

/// Value of `data-fs-error` whenever a field has an error.
pub const ERROR_SENTINEL: &str = "";

/// Screen-reader announcement policy for the validation container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AriaLive {
    /// Interrupts the user; used while the field has errors.
    Assertive,
    /// Announced when the user is idle.
    Polite,
}

impl AriaLive {
    /// Returns the `aria-live` attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Assertive => "assertive",
            Self::Polite => "polite",
        }
    }
}

/// Attributes spread onto the form control element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ControlAttrs {
    /// Form submission name.
    pub name: String,
    /// Control id, referenced by the label.
    pub id: String,
    /// Present when the field has an error.
    #[serde(rename = "data-fs-error", skip_serializing_if = "Option::is_none")]
    pub data_fs_error: Option<&'static str>,
    /// Space-separated description/validation ids; present when either applies.
    #[serde(rename = "aria-describedby", skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
    /// `"true"` when the field has an error.
    #[serde(rename = "aria-invalid", skip_serializing_if = "Option::is_none")]
    pub aria_invalid: Option<&'static str>,
    /// `"true"` when the field is required.
    #[serde(rename = "aria-required", skip_serializing_if = "Option::is_none")]
    pub aria_required: Option<&'static str>,
    /// Selector marker.
    #[serde(rename = "data-fs-control")]
    pub data_fs_control: &'static str,
}

/// Attributes spread onto the label element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LabelAttrs {
    /// Control id the label is associated with.
    #[serde(rename = "for")]
    pub for_id: String,
    /// Present when the field has an error.
    #[serde(rename = "data-fs-error", skip_serializing_if = "Option::is_none")]
    pub data_fs_error: Option<&'static str>,
    /// Selector marker.
    #[serde(rename = "data-fs-label")]
    pub data_fs_label: &'static str,
}

/// Attributes spread onto the validation message container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationAttrs {
    /// Container id, referenced by the control's `aria-describedby`.
    pub id: String,
    /// Present when the field has an error.
    #[serde(rename = "data-fs-error", skip_serializing_if = "Option::is_none")]
    pub data_fs_error: Option<&'static str>,
    /// Selector marker.
    #[serde(rename = "data-fs-validation")]
    pub data_fs_validation: &'static str,
    /// Announcement policy.
    #[serde(rename = "aria-live")]
    pub aria_live: AriaLive,
}

/// Attributes spread onto each individual validation message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationErrorAttrs {
    /// Selector marker.
    #[serde(rename = "data-fs-validation-error")]
    pub data_fs_validation_error: &'static str,
    /// Present when the field has an error.
    #[serde(rename = "data-fs-error", skip_serializing_if = "Option::is_none")]
    pub data_fs_error: Option<&'static str>,
}

/// Attributes spread onto a fieldset legend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LegendAttrs {
    /// Selector marker.
    #[serde(rename = "data-fs-legend")]
    pub data_fs_legend: &'static str,
    /// Present when the field has an error.
    #[serde(rename = "data-fs-error", skip_serializing_if = "Option::is_none")]
    pub data_fs_error: Option<&'static str>,
}

/// Attributes spread onto the field description element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DescriptionAttrs {
    /// Description id, referenced by the control's `aria-describedby`.
    pub id: String,
    /// Selector marker.
    #[serde(rename = "data-fs-description")]
    pub data_fs_description: &'static str,
    /// Present when the field has an error.
    #[serde(rename = "data-fs-error", skip_serializing_if = "Option::is_none")]
    pub data_fs_error: Option<&'static str>,
}

/// Attributes spread onto a `<fieldset>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldsetAttrs {
    /// Selector marker.
    #[serde(rename = "data-fs-fieldset")]
    pub data_fs_fieldset: &'static str,
    /// Present when the field has an error.
    #[serde(rename = "data-fs-error", skip_serializing_if = "Option::is_none")]
    pub data_fs_error: Option<&'static str>,
}

/// Flattens a typed attribute shape into ordered `(attribute, value)` pairs.
///
/// Optional attributes that are unset are omitted, never emitted as `"false"` or empty.
pub trait Attributes {
    /// Every attribute this shape can emit, whether or not it is currently present.
    const KEYS: &'static [&'static str];

    /// Returns the present attributes in element order.
    fn entries(&self) -> Vec<(&'static str, String)>;

    /// Collects [`Attributes::entries`] into an [`AttrMap`].
    fn to_attr_map(&self) -> AttrMap {
        self.entries().into_iter().collect()
    }

    /// Collects the entries and merges caller passthrough attributes that stay clear of
    /// [`Attributes::KEYS`]. Returns the map and the rejected keys.
    fn to_attr_map_with<I, K, V>(&self, extra: I) -> (AttrMap, Vec<String>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = self.to_attr_map();
        let rejected = map.merge_extra(Self::KEYS, extra);
        (map, rejected)
    }
}

fn push_opt(entries: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        entries.push((key, value.to_string()));
    }
}

impl Attributes for ControlAttrs {
    const KEYS: &'static [&'static str] = &[
        "name",
        "id",
        "data-fs-error",
        "aria-describedby",
        "aria-invalid",
        "aria-required",
        "data-fs-control",
    ];

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("name", self.name.clone()), ("id", self.id.clone())];
        push_opt(&mut entries, "data-fs-error", self.data_fs_error);
        push_opt(
            &mut entries,
            "aria-describedby",
            self.aria_describedby.as_deref(),
        );
        push_opt(&mut entries, "aria-invalid", self.aria_invalid);
        push_opt(&mut entries, "aria-required", self.aria_required);
        entries.push(("data-fs-control", self.data_fs_control.to_string()));
        entries
    }
}

impl Attributes for LabelAttrs {
    const KEYS: &'static [&'static str] = &["for", "data-fs-error", "data-fs-label"];

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("for", self.for_id.clone())];
        push_opt(&mut entries, "data-fs-error", self.data_fs_error);
        entries.push(("data-fs-label", self.data_fs_label.to_string()));
        entries
    }
}

impl Attributes for ValidationAttrs {
    const KEYS: &'static [&'static str] = &["id", "data-fs-error", "data-fs-validation", "aria-live"];

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("id", self.id.clone())];
        push_opt(&mut entries, "data-fs-error", self.data_fs_error);
        entries.push(("data-fs-validation", self.data_fs_validation.to_string()));
        entries.push(("aria-live", self.aria_live.token().to_string()));
        entries
    }
}

impl Attributes for ValidationErrorAttrs {
    const KEYS: &'static [&'static str] = &["data-fs-validation-error", "data-fs-error"];

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![(
            "data-fs-validation-error",
            self.data_fs_validation_error.to_string(),
        )];
        push_opt(&mut entries, "data-fs-error", self.data_fs_error);
        entries
    }
}

impl Attributes for LegendAttrs {
    const KEYS: &'static [&'static str] = &["data-fs-legend", "data-fs-error"];

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("data-fs-legend", self.data_fs_legend.to_string())];
        push_opt(&mut entries, "data-fs-error", self.data_fs_error);
        entries
    }
}

impl Attributes for DescriptionAttrs {
    const KEYS: &'static [&'static str] = &["id", "data-fs-description", "data-fs-error"];

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("id", self.id.clone()),
            ("data-fs-description", self.data_fs_description.to_string()),
        ];
        push_opt(&mut entries, "data-fs-error", self.data_fs_error);
        entries
    }
}

impl Attributes for FieldsetAttrs {
    const KEYS: &'static [&'static str] = &["data-fs-fieldset", "data-fs-error"];

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![("data-fs-fieldset", self.data_fs_fieldset.to_string())];
        push_opt(&mut entries, "data-fs-error", self.data_fs_error);
        entries
    }
}

/// Insertion-ordered attribute mapping with unique keys.
///
/// Produced from a synthesized shape and optionally extended with caller passthrough attributes
/// via [`AttrMap::merge_extra`]. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    entries: Vec<(String, String)>,
}

impl AttrMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Inserts or replaces `key`, keeping its original position when replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Appends caller passthrough attributes after synthesis.
    ///
    /// Keys listed in `reserved` or already present before the call are never set, so optional
    /// contract keys stay absent even when the shape currently omits them. Keys that are not
    /// valid HTML attribute names are dropped too. Every rejected key is returned so the caller
    /// can report it. Among the extras themselves the last value for a key wins.
    pub fn merge_extra<I, K, V>(&mut self, reserved: &[&str], extra: I) -> Vec<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fixed = self.entries.len();
        let mut rejected = Vec::new();
        for (key, value) in extra {
            let key = key.into();
            let collides = reserved.iter().any(|reserved| *reserved == key)
                || self.entries[..fixed]
                    .iter()
                    .any(|(existing, _)| *existing == key);
            if collides || !is_attribute_name(&key) {
                rejected.push(key);
                continue;
            }
            self.insert(key, value);
        }
        rejected
    }

    /// Renders the map as HTML attribute text, e.g. `id="fs-email" data-fs-control=""`.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\"", escape_attribute_value(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for AttrMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|ch| {
            ch.is_whitespace() || ch.is_control() || matches!(ch, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

fn escape_attribute_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
