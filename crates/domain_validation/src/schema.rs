//! Schema primitives
//!
//! A small declarative layer over `serde_json::Value`:
//!
//! - [`FieldConstraint`]: the accepted value kind plus an ordered list of
//!   checks, each carrying the message reported when it fails, and optional
//!   transforms applied to a value that passed every check
//! - [`FieldSchema`]: a named constraint marked required or optional
//! - [`ObjectSchema`]: an ordered list of field schemas validating a JSON
//!   object into a normalised map
//!
//! Checks on one field run in order and every failure is reported, except
//! that a failing aborting check (presence, parse) stops the field there.

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Predicate over a field value
pub type CheckFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Rewrites a valid field value
pub type TransformFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A validation failure scoped to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dot-joined path, e.g. `property.postcode`
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found in one validation pass, in report order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed with {} error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages reported for one field path
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// True if any error is reported for the field path
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Joins a parent path and a field name with a dot
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// JSON value kind a field accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Boolean,
    /// A string drawn from a fixed list
    OneOf(Vec<String>),
}

impl ValueKind {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            ValueKind::Text => value.is_string(),
            ValueKind::Number => value.is_number(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::OneOf(allowed) => value
                .as_str()
                .is_some_and(|s| allowed.iter().any(|a| a == s)),
        }
    }
}

#[derive(Clone)]
struct Check {
    message: String,
    aborts: bool,
    test: CheckFn,
}

/// Validation rules for a single field value
#[derive(Clone)]
pub struct FieldConstraint {
    kind: ValueKind,
    type_message: String,
    checks: Vec<Check>,
    transforms: Vec<TransformFn>,
}

impl fmt::Debug for FieldConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConstraint")
            .field("kind", &self.kind)
            .field("type_message", &self.type_message)
            .field("checks", &self.check_messages())
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

fn char_len(value: &Value) -> usize {
    value.as_str().map_or(0, |s| s.chars().count())
}

fn as_number(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

fn is_whole(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || as_number(value).fract() == 0.0
}

/// Rewrites whole floats such as `3.0` as integers
fn to_integer(value: Value) -> Value {
    if value.is_i64() || value.is_u64() {
        return value;
    }
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 => {
            Value::Number(Number::from(n as i64))
        }
        _ => value,
    }
}

impl FieldConstraint {
    fn of_kind(kind: ValueKind, type_message: impl Into<String>) -> Self {
        Self {
            kind,
            type_message: type_message.into(),
            checks: Vec::new(),
            transforms: Vec::new(),
        }
    }

    /// A string field; `type_message` is reported when the value is missing
    /// or not a string
    pub fn text(type_message: impl Into<String>) -> Self {
        Self::of_kind(ValueKind::Text, type_message)
    }

    pub fn number(type_message: impl Into<String>) -> Self {
        Self::of_kind(ValueKind::Number, type_message)
    }

    pub fn boolean(type_message: impl Into<String>) -> Self {
        Self::of_kind(ValueKind::Boolean, type_message)
    }

    /// A string restricted to `allowed`
    pub fn one_of<I, S>(allowed: I, type_message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::of_kind(
            ValueKind::OneOf(allowed.into_iter().map(Into::into).collect()),
            type_message,
        )
    }

    fn push(mut self, message: impl Into<String>, aborts: bool, test: CheckFn) -> Self {
        self.checks.push(Check {
            message: message.into(),
            aborts,
            test,
        });
        self
    }

    /// Rejects the empty string and skips the remaining checks when it does
    ///
    /// An empty field therefore reports only `message`, not the length,
    /// pattern or date messages that would also fail on `""`. The earlier
    /// form library kept running every check and listed all of them.
    pub fn non_empty(self, message: impl Into<String>) -> Self {
        self.push(message, true, Arc::new(|v: &Value| char_len(v) > 0))
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.push(message, false, Arc::new(move |v: &Value| char_len(v) >= min))
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.push(message, false, Arc::new(move |v: &Value| char_len(v) <= max))
    }

    pub fn pattern(self, regex: Regex, message: impl Into<String>) -> Self {
        self.push(
            message,
            false,
            Arc::new(move |v: &Value| v.as_str().is_some_and(|s| regex.is_match(s))),
        )
    }

    /// Requires a whole number; valid values are emitted as JSON integers
    pub fn integer(mut self, message: impl Into<String>) -> Self {
        self.transforms.push(Arc::new(to_integer));
        self.push(message, false, Arc::new(is_whole))
    }

    pub fn min(self, min: f64, message: impl Into<String>) -> Self {
        self.push(message, false, Arc::new(move |v: &Value| as_number(v) >= min))
    }

    pub fn max(self, max: f64, message: impl Into<String>) -> Self {
        self.push(message, false, Arc::new(move |v: &Value| as_number(v) <= max))
    }

    /// Adds a custom check
    pub fn refine<F>(self, message: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.push(message, false, Arc::new(test))
    }

    /// Adds a custom check that stops the field's remaining checks on failure
    pub fn refine_aborting<F>(self, message: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.push(message, true, Arc::new(test))
    }

    /// Rewrites the value once every check has passed
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.transforms.push(Arc::new(transform));
        self
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Message for a missing or mistyped value
    pub fn type_message(&self) -> &str {
        &self.type_message
    }

    /// Check messages in evaluation order
    pub fn check_messages(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.message.as_str()).collect()
    }

    /// Validates a present value, returning it transformed or the failed
    /// check messages in order
    pub fn validate(&self, value: &Value) -> Result<Value, Vec<String>> {
        if !self.kind.accepts(value) {
            return Err(vec![self.type_message.clone()]);
        }

        let mut failures = Vec::new();
        for check in &self.checks {
            if !(check.test)(value) {
                failures.push(check.message.clone());
                if check.aborts {
                    break;
                }
            }
        }
        if !failures.is_empty() {
            return Err(failures);
        }

        Ok(self
            .transforms
            .iter()
            .fold(value.clone(), |current, transform| transform(current)))
    }
}

/// Whether a field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Validated only when present; `null` counts as absent
    Optional,
}

/// A named field constraint
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: String,
    pub presence: Presence,
    pub constraint: FieldConstraint,
}

impl FieldSchema {
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    /// Same constraint, different presence
    pub fn with_presence(&self, presence: Presence) -> Self {
        Self {
            presence,
            ..self.clone()
        }
    }
}

/// Ordered set of field schemas validating a JSON object
///
/// Keys not named by the schema are dropped from the validated output.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<FieldSchema>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, name: impl Into<String>, constraint: FieldConstraint) -> Self {
        self.with_field(FieldSchema {
            name: name.into(),
            presence: Presence::Required,
            constraint,
        })
    }

    pub fn optional(self, name: impl Into<String>, constraint: FieldConstraint) -> Self {
        self.with_field(FieldSchema {
            name: name.into(),
            presence: Presence::Optional,
            constraint,
        })
    }

    /// Adds a field, replacing any existing field of the same name in place
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a top-level object
    pub fn validate(&self, value: &Value) -> Result<Map<String, Value>, ValidationErrors> {
        self.validate_at(value, "")
    }

    /// Validates an object nested at `path`; error fields are prefixed with it
    ///
    /// A value that is not an object yields one error at `path` itself.
    pub fn validate_at(
        &self,
        value: &Value,
        path: &str,
    ) -> Result<Map<String, Value>, ValidationErrors> {
        let Some(object) = value.as_object() else {
            return Err(ValidationErrors::new(vec![FieldError::new(
                path,
                "Expected an object",
            )]));
        };

        let mut output = Map::new();
        let mut errors = Vec::new();

        for field in &self.fields {
            let field_path = join_path(path, &field.name);
            match object.get(&field.name).filter(|v| !v.is_null()) {
                None if field.is_required() => {
                    errors.push(FieldError::new(field_path, field.constraint.type_message()));
                }
                None => {}
                Some(raw) => match field.constraint.validate(raw) {
                    Ok(normalized) => {
                        output.insert(field.name.clone(), normalized);
                    }
                    Err(messages) => errors.extend(
                        messages
                            .into_iter()
                            .map(|message| FieldError::new(field_path.clone(), message)),
                    ),
                },
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(ValidationErrors::new(errors))
        }
    }
}
