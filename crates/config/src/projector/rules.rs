//! Validation rule parsing and evaluation.

use std::cmp::Ordering;
use std::fmt;

use super::field::FieldKind;

const AT_LEAST: &[Ordering] = &[Ordering::Greater, Ordering::Equal];
const AT_MOST: &[Ordering] = &[Ordering::Less, Ordering::Equal];
const ABOVE: &[Ordering] = &[Ordering::Greater];
const BELOW: &[Ordering] = &[Ordering::Less];

/// A single validation constraint.
///
/// `min`/`max` are aliases of `gte`/`lte`. Bounds compare numbers for
/// integer fields and character counts for string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Gte(i64),
    Lte(i64),
    Gt(i64),
    Lt(i64),
}

impl Rule {
    /// Parses a comma-separated rule list. Returns the offending token on error.
    pub fn parse_list(expr: &str) -> Result<Vec<Rule>, String> {
        expr.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Rule::parse(token).ok_or_else(|| token.to_string()))
            .collect()
    }

    fn parse(token: &str) -> Option<Rule> {
        if token == "required" {
            return Some(Rule::Required);
        }
        let (name, arg) = token.split_once('=')?;
        let bound: i64 = arg.trim().parse().ok()?;
        match name.trim() {
            "gte" | "min" => Some(Rule::Gte(bound)),
            "lte" | "max" => Some(Rule::Lte(bound)),
            "gt" => Some(Rule::Gt(bound)),
            "lt" => Some(Rule::Lt(bound)),
            _ => None,
        }
    }

    /// Checks `value`; `Err` carries a human-readable reason.
    ///
    /// Bound rules on boolean fields are reported as not applicable.
    pub fn check(
        &self,
        kind: FieldKind,
        value: Option<&serde_json::Value>,
    ) -> Result<(), Violation> {
        let (bound, allowed, relation): (i64, &[Ordering], &str) = match *self {
            Rule::Required if is_zero(value) => {
                return Err(Violation::Failed("value is required".to_string()));
            }
            Rule::Required => return Ok(()),
            Rule::Gte(b) => (b, AT_LEAST, "less than"),
            Rule::Lte(b) => (b, AT_MOST, "greater than"),
            Rule::Gt(b) => (b, ABOVE, "not greater than"),
            Rule::Lt(b) => (b, BELOW, "not less than"),
        };

        let measured = measure(kind, value).ok_or(Violation::NotApplicable)?;
        if allowed.contains(&measured.cmp(&i128::from(bound))) {
            return Ok(());
        }

        let subject = match kind {
            FieldKind::Str => "length",
            _ => "value",
        };
        Err(Violation::Failed(format!(
            "{subject} {measured} is {relation} {bound}"
        )))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("required"),
            Rule::Gte(b) => write!(f, "gte={b}"),
            Rule::Lte(b) => write!(f, "lte={b}"),
            Rule::Gt(b) => write!(f, "gt={b}"),
            Rule::Lt(b) => write!(f, "lt={b}"),
        }
    }
}

/// Why a rule did not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Failed(String),
    NotApplicable,
}

/// Zero value check: missing, null, `""`, `0`, `false`, or an empty collection.
pub(crate) fn is_zero(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => true,
        Some(serde_json::Value::String(s)) => s.is_empty(),
        Some(serde_json::Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(serde_json::Value::Bool(b)) => !b,
        Some(serde_json::Value::Array(a)) => a.is_empty(),
        Some(serde_json::Value::Object(o)) => o.is_empty(),
    }
}

fn measure(kind: FieldKind, value: Option<&serde_json::Value>) -> Option<i128> {
    match (kind, value) {
        (FieldKind::Int, None | Some(serde_json::Value::Null)) => Some(0),
        (FieldKind::Int, Some(v)) => v
            .as_i64()
            .map(i128::from)
            .or_else(|| v.as_u64().map(i128::from)),
        (FieldKind::Str, None | Some(serde_json::Value::Null)) => Some(0),
        (FieldKind::Str, Some(serde_json::Value::String(s))) => {
            i128::try_from(s.chars().count()).ok()
        }
        _ => None,
    }
}
