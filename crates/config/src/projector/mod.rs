//! Typed projection of the store onto caller-defined structures.
//!
//! Responsibilities:
//! - Deserialize the store into a target type through a generic JSON tree.
//! - Apply declared default literals to fields still at their zero value.
//! - Validate the defaulted fields against their declared rules.
//!
//! Does NOT handle:
//! - Loading sources (see `loader`).
//!
//! Invariants:
//! - Defaults only replace zero values (`""`, `0`, `false`, missing, null).
//! - Unparseable integer/boolean default literals are skipped without error.
//! - Validation runs in field-table order and stops at the first failure.
//! - Validation failure does not roll back: the target keeps the defaulted values.

mod field;
mod rules;

pub use field::{FieldKind, FieldSpec, Settings};
pub use rules::{Rule, Violation};

use crate::loader::ConfigError;
use crate::store::Store;
use crate::value::parse_bool;
use rules::is_zero;

/// Populates `target` from `store`, applies defaults, then validates.
pub fn unmarshal<T: Settings>(store: &Store, target: &mut T) -> Result<(), ConfigError> {
    let mut tree =
        serde_json::to_value(store.get_all()).map_err(|e| ConfigError::Serialize(e.to_string()))?;
    // A null entry reads as missing, so the field keeps its zero value.
    if let Some(object) = tree.as_object_mut() {
        object.retain(|_, value| !value.is_null());
    }
    let populated: T =
        serde_json::from_value(tree).map_err(|e| ConfigError::Deserialize(e.to_string()))?;

    let fields = T::fields();
    let mut tree =
        serde_json::to_value(&populated).map_err(|e| ConfigError::Serialize(e.to_string()))?;

    *target = if apply_defaults(&mut tree, fields) {
        serde_json::from_value(tree.clone()).map_err(|e| ConfigError::Deserialize(e.to_string()))?
    } else {
        populated
    };

    validate(&tree, fields)
}

/// Writes default literals into zero-valued fields. Returns whether anything changed.
fn apply_defaults(tree: &mut serde_json::Value, fields: &[FieldSpec]) -> bool {
    let Some(object) = tree.as_object_mut() else {
        return false;
    };

    let mut changed = false;
    for spec in fields {
        let Some(literal) = spec.default else {
            continue;
        };
        if !is_zero(object.get(spec.key)) {
            continue;
        }
        if let Some(value) = parse_default(spec.kind, literal) {
            object.insert(spec.key.to_string(), value);
            changed = true;
        }
    }
    changed
}

fn parse_default(kind: FieldKind, literal: &str) -> Option<serde_json::Value> {
    match kind {
        FieldKind::Str => Some(serde_json::Value::String(literal.to_string())),
        FieldKind::Int => literal.trim().parse::<i64>().ok().map(Into::into),
        FieldKind::Bool => parse_bool(literal.trim()).map(serde_json::Value::Bool),
    }
}

fn validate(tree: &serde_json::Value, fields: &[FieldSpec]) -> Result<(), ConfigError> {
    for spec in fields {
        let rules = Rule::parse_list(spec.rules).map_err(|rule| ConfigError::InvalidRule {
            field: spec.key.to_string(),
            rule,
        })?;
        let value = tree.get(spec.key);

        for rule in rules {
            match rule.check(spec.kind, value) {
                Ok(()) => {}
                Err(Violation::Failed(message)) => {
                    return Err(ConfigError::Validation {
                        field: spec.key.to_string(),
                        rule: rule.to_string(),
                        message,
                    });
                }
                Err(Violation::NotApplicable) => {
                    return Err(ConfigError::InvalidRule {
                        field: spec.key.to_string(),
                        rule: rule.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
