//! Parsing and validation of the eight-field coordinate form.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use segment_core::{Segment, SegmentError};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

/// Form field names, segment 1 first.
pub const FIELDS: [&str; 8] = ["x1", "y1", "x2", "y2", "x3", "y3", "x4", "y4"];

/// User-facing input problems.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("Field {0} is required")]
    Missing(&'static str),

    #[error("Field {field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("Segment {segment}: {source}")]
    Segment {
        segment: usize,
        #[source]
        source: SegmentError,
    },
}

/// JSON body `{"error": "..."}` with status 422. The HTML form handler
/// renders its own page so it can echo the submitted values.
impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

/// Raw form submission. Fields stay textual so bad input can be echoed back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentForm {
    pub x1: Option<String>,
    pub y1: Option<String>,
    pub x2: Option<String>,
    pub y2: Option<String>,
    pub x3: Option<String>,
    pub y3: Option<String>,
    pub x4: Option<String>,
    pub y4: Option<String>,
}

impl SegmentForm {
    #[cfg(test)]
    pub fn from_values(values: [f64; 8]) -> Self {
        let [x1, y1, x2, y2, x3, y3, x4, y4] = values.map(|v| Some(v.to_string()));
        Self { x1, y1, x2, y2, x3, y3, x4, y4 }
    }

    fn raw(&self) -> [Option<&str>; 8] {
        [
            self.x1.as_deref(),
            self.y1.as_deref(),
            self.x2.as_deref(),
            self.y2.as_deref(),
            self.x3.as_deref(),
            self.y3.as_deref(),
            self.x4.as_deref(),
            self.y4.as_deref(),
        ]
    }

    /// Submitted text for a field, empty when absent.
    pub fn value(&self, field: &str) -> &str {
        FIELDS
            .iter()
            .position(|name| *name == field)
            .and_then(|i| self.raw()[i])
            .unwrap_or("")
    }

    /// Parse all fields into the two segments.
    pub fn parse(&self) -> Result<(Segment, Segment), FormError> {
        let mut values = [0.0; 8];
        for ((slot, raw), field) in values.iter_mut().zip(self.raw()).zip(FIELDS) {
            *slot = parse_field(field, raw)?;
        }

        let [x1, y1, x2, y2, x3, y3, x4, y4] = values;
        let first = Segment::try_new(x1, y1, x2, y2)
            .map_err(|source| FormError::Segment { segment: 1, source })?;
        let second = Segment::try_new(x3, y3, x4, y4)
            .map_err(|source| FormError::Segment { segment: 2, source })?;
        Ok((first, second))
    }
}

fn parse_field(field: &'static str, raw: Option<&str>) -> Result<f64, FormError> {
    let text = raw.map(str::trim).unwrap_or("");
    if text.is_empty() {
        return Err(FormError::Missing(field));
    }
    text.parse::<f64>().map_err(|_| FormError::NotANumber {
        field,
        value: text.to_string(),
    })
}
