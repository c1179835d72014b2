//! Structural validation of untyped JSON into content models.
//!
//! A [`Checker`] walks a [`serde_json::Value`] while keeping track of the
//! current field path. Every mismatch is recorded as a
//! [`FieldViolation`] and the walk continues, so a single pass reports all
//! problems in a document. Types describe their own shape by implementing
//! [`Schema`].
//!
//! Field presence comes in four flavours:
//!
//! | Mode                | absent    | `null`    | value        |
//! |---------------------|-----------|-----------|--------------|
//! | `required`          | violation | violation | checked      |
//! | `nullable`          | violation | `None`    | checked      |
//! | `optional`          | `None`    | violation | checked      |
//! | `optional_nullable` | `None`    | `None`    | checked      |
//!
//! Fields that no schema asks for are ignored, which strips them from the
//! typed result.

use serde_json::{Map, Value};

use crate::error::{FieldViolation, ValidationError};
use crate::types::{EntryId, PublishDate, Timestamp};

/// JSON object type accepted by the field accessors.
pub type Object = Map<String, Value>;

/// A type that can be checked out of a JSON value.
pub trait Schema: Sized {
    /// Human-readable description of the expected shape, used in
    /// violations.
    const EXPECTED: &'static str;

    /// Check `value` and build `Self`.
    ///
    /// Returns `None` if any violation was recorded on `cx` while checking
    /// this value (including nested fields).
    fn check(value: &Value, cx: &mut Checker) -> Option<Self>;
}

/// A top-level content kind with a name used in error messages.
pub trait Entity: Schema {
    const NAME: &'static str;
}

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Validation context: the current path plus collected violations.
#[derive(Debug, Default)]
pub struct Checker {
    path: Vec<Segment>,
    violations: Vec<FieldViolation>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert the outcome of a walk into a `Result`.
    pub fn finish<T>(self, entity: &'static str, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(v) if self.violations.is_empty() => Ok(v),
            _ => Err(ValidationError {
                entity,
                violations: self.violations,
            }),
        }
    }

    /// Rendered form of the current path.
    pub fn current_path(&self) -> String {
        let mut out = String::new();
        for seg in &self.path {
            match seg {
                Segment::Key(k) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(k);
                }
                Segment::Index(i) => {
                    out.push('[');
                    out.push_str(&i.to_string());
                    out.push(']');
                }
            }
        }
        out
    }

    /// Record a violation at the current path.
    pub fn violation(&mut self, expected: impl Into<String>, actual: impl Into<String>) {
        let path = self.current_path();
        self.violations.push(FieldViolation {
            path,
            expected: expected.into(),
            actual: actual.into(),
        });
    }

    /// Record a type mismatch at the current path.
    pub fn mismatch(&mut self, expected: &str, actual: &Value) {
        self.violation(expected, describe(actual));
    }

    /// Run `f` with `key` pushed onto the path.
    pub fn at_key<T>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Key(key.to_string()));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Run `f` with `index` pushed onto the path.
    pub fn at_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Index(index));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Require `value` to be a JSON object.
    pub fn object<'v>(&mut self, value: &'v Value) -> Option<&'v Object> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.mismatch("object", other);
                None
            }
        }
    }

    /// Field must be present and non-null.
    pub fn required<T: Schema>(&mut self, obj: &Object, key: &str) -> Option<T> {
        self.at_key(key, |cx| match obj.get(key) {
            None => {
                cx.violation(T::EXPECTED, "missing");
                None
            }
            Some(value) => T::check(value, cx),
        })
    }

    /// Field must be present; `null` maps to `None`.
    pub fn nullable<T: Schema>(&mut self, obj: &Object, key: &str) -> Option<Option<T>> {
        self.at_key(key, |cx| match obj.get(key) {
            None => {
                cx.violation(format!("{} or null", T::EXPECTED), "missing");
                None
            }
            Some(Value::Null) => Some(None),
            Some(value) => T::check(value, cx).map(Some),
        })
    }

    /// Field may be absent; when present it must be non-null.
    pub fn optional<T: Schema>(&mut self, obj: &Object, key: &str) -> Option<Option<T>> {
        self.at_key(key, |cx| match obj.get(key) {
            None => Some(None),
            Some(value) => T::check(value, cx).map(Some),
        })
    }

    /// Field may be absent or `null`.
    pub fn optional_nullable<T: Schema>(&mut self, obj: &Object, key: &str) -> Option<Option<T>> {
        self.at_key(key, |cx| match obj.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(value) => T::check(value, cx).map(Some),
        })
    }
}

/// Short name of a JSON value's shape, used as the "found" side of a
/// violation.
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate a single item of content.
pub fn validate<T: Entity>(value: &Value) -> Result<T, ValidationError> {
    let mut cx = Checker::new();
    let out = T::check(value, &mut cx);
    cx.finish(T::NAME, out)
}

// ---------------------------------------------------------------------------
// Primitive schemas
// ---------------------------------------------------------------------------

impl Schema for String {
    const EXPECTED: &'static str = "string";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                cx.mismatch(Self::EXPECTED, other);
                None
            }
        }
    }
}

impl Schema for bool {
    const EXPECTED: &'static str = "boolean";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            other => {
                cx.mismatch(Self::EXPECTED, other);
                None
            }
        }
    }
}

impl Schema for EntryId {
    const EXPECTED: &'static str = "integer";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value.as_i64() {
            Some(n) => Some(n),
            None => {
                cx.mismatch(Self::EXPECTED, value);
                None
            }
        }
    }
}

impl Schema for u32 {
    const EXPECTED: &'static str = "non-negative integer";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(n) => Some(n),
            None => {
                cx.mismatch(Self::EXPECTED, value);
                None
            }
        }
    }
}

impl Schema for u64 {
    const EXPECTED: &'static str = "non-negative integer";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value.as_u64() {
            Some(n) => Some(n),
            None => {
                cx.mismatch(Self::EXPECTED, value);
                None
            }
        }
    }
}

impl Schema for f64 {
    const EXPECTED: &'static str = "number";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        match value.as_f64() {
            Some(n) => Some(n),
            None => {
                cx.mismatch(Self::EXPECTED, value);
                None
            }
        }
    }
}

impl Schema for Timestamp {
    const EXPECTED: &'static str = "RFC 3339 timestamp";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let Value::String(raw) = value else {
            cx.mismatch(Self::EXPECTED, value);
            return None;
        };
        match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => Some(ts.with_timezone(&chrono::Utc)),
            Err(_) => {
                cx.violation(Self::EXPECTED, format!("{raw:?}"));
                None
            }
        }
    }
}

impl Schema for PublishDate {
    const EXPECTED: &'static str = "date (YYYY-MM-DD)";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let Value::String(raw) = value else {
            cx.mismatch(Self::EXPECTED, value);
            return None;
        };
        let parsed = PublishDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.date_naive())
        });
        if parsed.is_none() {
            cx.violation(Self::EXPECTED, format!("{raw:?}"));
        }
        parsed
    }
}

impl<T: Schema> Schema for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn check(value: &Value, cx: &mut Checker) -> Option<Self> {
        let Value::Array(items) = value else {
            cx.mismatch(Self::EXPECTED, value);
            return None;
        };
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match cx.at_index(i, |cx| T::check(item, cx)) {
                Some(v) => out.push(v),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }
}
