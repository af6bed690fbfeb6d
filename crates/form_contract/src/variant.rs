//! Button variant/size resolution into class strings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors for variant/size values outside the closed token sets.
pub enum VariantError {
    /// The variant token is not one of [`ButtonVariant`].
    #[error("unknown button variant `{0}`")]
    InvalidVariant(String),
    /// The size token is not one of [`ButtonSize`].
    #[error("unknown button size `{0}`")]
    InvalidSize(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button visual variants.
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered button on the page background.
    Outline,
    /// Muted secondary action.
    Secondary,
    /// Background only on hover.
    Ghost,
    /// Styled as an inline link.
    Link,
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Returns the token used in markup and configuration.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = VariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == raw)
            .ok_or_else(|| VariantError::InvalidVariant(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Default height and padding.
    #[default]
    Default,
    /// Dense button.
    Sm,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Every size, in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Sm, Self::Lg, Self::Icon];

    /// Returns the token used in markup and configuration.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = VariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw)
            .ok_or_else(|| VariantError::InvalidSize(raw.to_string()))
    }
}

struct VariantTable {
    base: &'static str,
    variants: [(ButtonVariant, &'static str); 6],
    sizes: [(ButtonSize, &'static str); 4],
}

static BUTTON_CLASSES: VariantTable = VariantTable {
    base: "ring-offset-background focus-visible:ring-ring inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50",
    variants: [
        (
            ButtonVariant::Default,
            "bg-primary text-primary-foreground hover:bg-primary/90",
        ),
        (
            ButtonVariant::Destructive,
            "bg-destructive text-destructive-foreground hover:bg-destructive/90",
        ),
        (
            ButtonVariant::Outline,
            "border-input bg-background hover:bg-accent hover:text-accent-foreground border",
        ),
        (
            ButtonVariant::Secondary,
            "bg-secondary text-secondary-foreground hover:bg-secondary/80",
        ),
        (
            ButtonVariant::Ghost,
            "hover:bg-accent hover:text-accent-foreground",
        ),
        (
            ButtonVariant::Link,
            "text-primary underline-offset-4 hover:underline",
        ),
    ],
    sizes: [
        (ButtonSize::Default, "h-10 px-4 py-2"),
        (ButtonSize::Sm, "h-9 rounded-md px-3"),
        (ButtonSize::Lg, "h-11 rounded-md px-8"),
        (ButtonSize::Icon, "size-10"),
    ],
};

impl VariantTable {
    fn classes(&self, variant: ButtonVariant, size: ButtonSize) -> String {
        let variant_classes = self
            .variants
            .iter()
            .find(|(candidate, _)| *candidate == variant)
            .map_or("", |(_, classes)| *classes);
        let size_classes = self
            .sizes
            .iter()
            .find(|(candidate, _)| *candidate == size)
            .map_or("", |(_, classes)| *classes);
        [self.base, variant_classes, size_classes]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resolves typed variant and size into the button class string.
pub fn resolve_typed(variant: ButtonVariant, size: ButtonSize) -> String {
    BUTTON_CLASSES.classes(variant, size)
}

/// Resolves variant and size tokens into the button class string.
///
/// Unset tokens fall back to `default`.
///
/// # Errors
///
/// Returns [`VariantError::InvalidVariant`] or [`VariantError::InvalidSize`] when a token is not
/// part of the closed set. The variant is checked first.
pub fn resolve(variant: Option<&str>, size: Option<&str>) -> Result<String, VariantError> {
    let variant = variant
        .map(ButtonVariant::from_str)
        .transpose()?
        .unwrap_or_default();
    let size = size
        .map(ButtonSize::from_str)
        .transpose()?
        .unwrap_or_default();
    Ok(resolve_typed(variant, size))
}

/// Resolves like [`resolve`] and then appends caller classes.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn resolve_with_class(
    variant: Option<&str>,
    size: Option<&str>,
    class: Option<&str>,
) -> Result<String, VariantError> {
    let resolved = resolve(variant, size)?;
    Ok(match class {
        Some(class) => merge_classes(&resolved, class),
        None => resolved,
    })
}

/// Appends whitespace-separated `extra` classes to `base`, skipping ones already present.
pub fn merge_classes(base: &str, extra: &str) -> String {
    let mut merged = base.split_whitespace().collect::<Vec<_>>();
    for class in extra.split_whitespace() {
        if !merged.contains(&class) {
            merged.push(class);
        }
    }
    merged.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_tokens_match_explicit_defaults() {
        assert_eq!(
            resolve(None, None).expect("defaults"),
            resolve(Some("default"), Some("default")).expect("explicit defaults")
        );
    }

    #[test]
    fn every_combination_resolves_to_base_variant_and_size() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let classes = resolve(Some(variant.token()), Some(size.token()))
                    .unwrap_or_else(|err| panic!("{variant:?}/{size:?}: {err}"));
                assert!(classes.starts_with(BUTTON_CLASSES.base));
                assert_eq!(classes, resolve_typed(variant, size));
            }
        }
    }

    #[test]
    fn resolves_known_combination() {
        assert_eq!(
            resolve(Some("ghost"), Some("icon")).expect("ghost icon"),
            format!(
                "{} hover:bg-accent hover:text-accent-foreground size-10",
                BUTTON_CLASSES.base
            )
        );
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(
            resolve(Some("bogus"), Some("default")),
            Err(VariantError::InvalidVariant("bogus".to_string()))
        );
        assert_eq!(
            resolve(None, Some("xl")),
            Err(VariantError::InvalidSize("xl".to_string()))
        );
        assert_eq!(
            resolve(Some("Default"), None),
            Err(VariantError::InvalidVariant("Default".to_string()))
        );
    }

    #[test]
    fn variant_error_is_reported_before_size_error() {
        assert!(matches!(
            resolve(Some("bogus"), Some("xl")),
            Err(VariantError::InvalidVariant(_))
        ));
    }

    #[test]
    fn caller_classes_are_appended_once() {
        let classes = resolve_with_class(Some("link"), Some("sm"), Some("w-full px-3"))
            .expect("link sm");
        assert!(classes.ends_with("px-3 w-full"));
        assert_eq!(classes.matches("px-3").count(), 1);
    }

    #[test]
    fn tokens_round_trip_through_serde() {
        let size: ButtonSize = serde_json::from_str("\"icon\"").expect("parse size");
        assert_eq!(size, ButtonSize::Icon);
        assert_eq!(
            serde_json::to_string(&ButtonVariant::Destructive).expect("serialize"),
            "\"destructive\""
        );
    }
}
