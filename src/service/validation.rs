//! Request validation for advertisement bodies.
//!
//! Two shapes: [`CreateAdv`] (title required) and [`PatchAdv`] (every field
//! optional). Unknown keys are ignored and explicit `null` counts as absent.
//! All violations in a body are collected before failing.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Minimum length of a title, in characters.
const TITLE_MIN_LENGTH: usize = 1;

/// One rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldViolation {
    pub fn missing(field: &str) -> Self {
        Self {
            loc: vec![field.to_string()],
            msg: "Field required".into(),
            kind: "missing",
        }
    }

    fn not_a_string(field: &str) -> Self {
        Self {
            loc: vec![field.to_string()],
            msg: "Input should be a valid string".into(),
            kind: "string_type",
        }
    }

    fn too_short(field: &str, min: usize) -> Self {
        Self {
            loc: vec![field.to_string()],
            msg: format!("String should have at least {} character", min),
            kind: "string_too_short",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed for {} field(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}

/// Validated body of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAdv {
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
}

/// Validated body of a patch request. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchAdv {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl PatchAdv {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.author.is_none()
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. `title` must be present and non-empty.
    pub fn validate_create(body: &Map<String, Value>) -> Result<CreateAdv, ValidationError> {
        let mut violations = Vec::new();
        let title = optional_string(body, "title", &mut violations);
        if matches!(body.get("title"), None | Some(Value::Null)) {
            violations.push(FieldViolation::missing("title"));
        }
        if let Some(t) = &title {
            check_min_length("title", t, TITLE_MIN_LENGTH, &mut violations);
        }
        let description = optional_string(body, "description", &mut violations);
        let author = optional_string(body, "author", &mut violations);

        match title {
            Some(title) if violations.is_empty() => Ok(CreateAdv {
                title,
                description,
                author,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }

    /// Validate a patch body. Only fields present and non-null are kept.
    pub fn validate_patch(body: &Map<String, Value>) -> Result<PatchAdv, ValidationError> {
        let mut violations = Vec::new();
        let title = optional_string(body, "title", &mut violations);
        if let Some(t) = &title {
            check_min_length("title", t, TITLE_MIN_LENGTH, &mut violations);
        }
        let description = optional_string(body, "description", &mut violations);
        let author = optional_string(body, "author", &mut violations);

        if !violations.is_empty() {
            return Err(ValidationError::new(violations));
        }
        Ok(PatchAdv {
            title,
            description,
            author,
        })
    }
}

/// Absent and null both yield `None`; a non-string value records a violation.
fn optional_string(
    body: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(FieldViolation::not_a_string(field));
            None
        }
    }
}

fn check_min_length(field: &str, s: &str, min: usize, violations: &mut Vec<FieldViolation>) {
    if s.chars().count() < min {
        violations.push(FieldViolation::too_short(field, min));
    }
}
