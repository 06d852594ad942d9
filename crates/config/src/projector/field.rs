//! Declarative field descriptors for typed projection.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Primitive kind of a projected field, used to parse default literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    Bool,
}

/// Per-field metadata: source key, optional default literal and rule list.
///
/// `rules` uses the `required`, `gte=N`, `lte=N` grammar joined by commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
    pub default: Option<&'static str>,
    pub rules: &'static str,
}

impl FieldSpec {
    pub const fn new(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            default: None,
            rules: "",
        }
    }

    pub const fn with_default(self, literal: &'static str) -> Self {
        Self {
            default: Some(literal),
            ..self
        }
    }

    pub const fn with_rules(self, rules: &'static str) -> Self {
        Self { rules, ..self }
    }
}

/// A structure that can be projected from the store.
///
/// Serde attributes map fields to store keys (usually
/// `#[serde(rename = "APP_PORT")]`); `fields()` lists defaults and rules.
/// Add `#[serde(default)]` at the container level so absent keys fall back
/// to zero values.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use strata_config::{FieldKind, FieldSpec, Settings};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// #[serde(default)]
/// struct App {
///     #[serde(rename = "APP_PORT")]
///     port: i64,
/// }
///
/// impl Settings for App {
///     fn fields() -> &'static [FieldSpec] {
///         const FIELDS: &[FieldSpec] = &[FieldSpec::new("APP_PORT", FieldKind::Int)
///             .with_default("8080")
///             .with_rules("gte=1000,lte=9999")];
///         FIELDS
///     }
/// }
/// ```
pub trait Settings: Serialize + DeserializeOwned {
    fn fields() -> &'static [FieldSpec] {
        &[]
    }
}
