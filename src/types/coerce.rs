//! Total coercions from loosely-typed JSON values.
//!
//! Kuna returns numbers sometimes as JSON numbers and sometimes as strings,
//! and occasionally omits fields. These helpers never fail: a value that cannot
//! be coerced becomes a sentinel (`NaN` for floats, `0` for integers, the empty
//! string for text) and the problem is recorded as a [`MappingIssue`].

use serde_json::Value;

/// A field that could not be coerced to its target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingIssue {
    /// Name of the offending field.
    pub field: String,
    /// Target type of the coercion.
    pub expected: &'static str,
    /// Short rendering of what was found instead.
    pub found: String,
}

impl std::fmt::Display for MappingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: expected {}, found {}", self.field, self.expected, self.found)
    }
}

/// Coerce a JSON value to a finite float.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace ignored).
pub fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Coerce a JSON value to an integer.
///
/// Fractional values are truncated toward zero.
pub fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

/// Coerce a JSON value to text.
///
/// Strings are taken as-is; any other non-null value is rendered as JSON.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn truncate(v: f64) -> Option<i64> {
    (v.is_finite() && v.abs() < i64::MAX as f64).then(|| v.trunc() as i64)
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(Value::String(s)) => format!("{s:?}"),
        Some(other) => other.to_string(),
    }
}

/// Field-by-field reader over a raw JSON object that collects issues.
pub(crate) struct FieldReader<'a> {
    raw: &'a Value,
    issues: Vec<MappingIssue>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(raw: &'a Value) -> Self {
        let mut issues = Vec::new();
        if !raw.is_object() {
            issues.push(MappingIssue {
                field: String::new(),
                expected: "object",
                found: describe(Some(raw)),
            });
        }
        Self { raw, issues }
    }

    pub(crate) fn float(&mut self, field: &str) -> f64 {
        self.read(field, "number", to_f64).unwrap_or(f64::NAN)
    }

    pub(crate) fn int(&mut self, field: &str) -> i64 {
        self.read(field, "integer", to_i64).unwrap_or(0)
    }

    pub(crate) fn text(&mut self, field: &str) -> String {
        self.read(field, "string", to_text).unwrap_or_default()
    }

    pub(crate) fn into_issues(self) -> Vec<MappingIssue> {
        self.issues
    }

    fn read<T>(
        &mut self,
        field: &str,
        expected: &'static str,
        coerce: impl Fn(&Value) -> Option<T>,
    ) -> Option<T> {
        let value = self.raw.get(field);
        let coerced = value.and_then(coerce);
        if coerced.is_none() {
            self.issues.push(MappingIssue {
                field: field.to_string(),
                expected,
                found: describe(value),
            });
        }
        coerced
    }
}
