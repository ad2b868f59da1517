// Shape validation for review update payloads.
//
// The schema is declared once as a table of properties. The same table drives
// the checks and the JSON Schema document echoed back to clients on failure.

use crate::modules::reviews::core::review::{REVIEW_DATE_FORMAT, ReviewFields};
use chrono::NaiveDate;
use serde_json::{Map, Value, json};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Integer,
    String,
    Date,
}

struct Property {
    name: &'static str,
    kind: Kind,
    required: bool,
}

const MOVIE_REVIEW_PROPERTIES: &[Property] = &[
    Property {
        name: "movieId",
        kind: Kind::Integer,
        required: false,
    },
    Property {
        name: "reviewId",
        kind: Kind::Integer,
        required: false,
    },
    Property {
        name: "reviewerId",
        kind: Kind::String,
        required: true,
    },
    Property {
        name: "reviewDate",
        kind: Kind::Date,
        required: true,
    },
    Property {
        name: "content",
        kind: Kind::String,
        required: true,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub errors: Vec<String>,
    pub schema: Value,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

#[derive(Debug, Clone)]
pub struct ReviewValidator {
    schema: Value,
}

impl Default for ReviewValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewValidator {
    pub fn new() -> Self {
        Self {
            schema: movie_review_schema(),
        }
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Checks `payload` against the `MovieReview` shape and extracts the fields
    /// an update writes. Every violation is reported, not only the first.
    pub fn validate(&self, payload: &Value) -> Result<ReviewFields, ValidationFailure> {
        let Value::Object(object) = payload else {
            return Err(self.failure(vec!["payload must be a JSON object".to_string()]));
        };

        let mut errors = Vec::new();
        for property in MOVIE_REVIEW_PROPERTIES {
            match object.get(property.name) {
                None if property.required => {
                    errors.push(format!("missing required property '{}'", property.name));
                }
                None => {}
                Some(value) => {
                    if let Some(problem) = check_kind(property.kind, value) {
                        errors.push(format!("'{}' {problem}", property.name));
                    }
                }
            }
        }
        for name in object.keys() {
            if !MOVIE_REVIEW_PROPERTIES.iter().any(|p| p.name == name) {
                errors.push(format!("unexpected property '{name}'"));
            }
        }

        if !errors.is_empty() {
            return Err(self.failure(errors));
        }

        Ok(ReviewFields {
            reviewer_id: string_field(object, "reviewerId"),
            review_date: string_field(object, "reviewDate"),
            content: string_field(object, "content"),
        })
    }

    fn failure(&self, errors: Vec<String>) -> ValidationFailure {
        ValidationFailure {
            errors,
            schema: self.schema.clone(),
        }
    }
}

fn check_kind(kind: Kind, value: &Value) -> Option<&'static str> {
    match kind {
        Kind::Integer if value.as_i64().is_none() => Some("must be an integer"),
        Kind::String if !value.is_string() => Some("must be a string"),
        Kind::Date => match value.as_str() {
            None => Some("must be a string"),
            Some(raw) if NaiveDate::parse_from_str(raw, REVIEW_DATE_FORMAT).is_err() => {
                Some("must be a calendar date in YYYY-MM-DD form")
            }
            Some(_) => None,
        },
        _ => None,
    }
}

fn string_field(object: &Map<String, Value>, name: &str) -> String {
    object
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn movie_review_schema() -> Value {
    let mut properties = Map::new();
    for property in MOVIE_REVIEW_PROPERTIES {
        let definition = match property.kind {
            Kind::Integer => json!({ "type": "integer" }),
            Kind::String => json!({ "type": "string" }),
            Kind::Date => json!({ "type": "string", "format": "date" }),
        };
        properties.insert(property.name.to_string(), definition);
    }
    let required: Vec<&str> = MOVIE_REVIEW_PROPERTIES
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name)
        .collect();

    json!({
        "title": "MovieReview",
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}
