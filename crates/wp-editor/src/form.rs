//! Protocol with the external waypoint form.
//!
//! The controller emits an [`EditRequest`] on double-click; the host shows
//! its dialog and later hands back the raw field strings, which are parsed
//! into a [`FormSubmission`] before anything touches the store.

use serde::Serialize;
use thiserror::Error;
use wp_core::Waypoint;

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
}

/// Ask the form collaborator to add (`index: None`) or edit a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditRequest {
    pub data: Waypoint,
    pub index: Option<usize>,
}

impl EditRequest {
    pub fn add(data: Waypoint) -> Self {
        Self { data, index: None }
    }

    pub fn edit(index: usize, data: Waypoint) -> Self {
        Self {
            data,
            index: Some(index),
        }
    }

    /// Dialog heading; waypoint numbers are 1-based for display.
    pub fn title(&self) -> String {
        match self.index {
            None => "Add New Waypoint".to_string(),
            Some(i) => format!("Edit Waypoint {}", i + 1),
        }
    }

    /// Initial `x`, `y`, `theta` field text, 4 decimals each.
    pub fn field_values(&self) -> [String; 3] {
        [
            format!("{:.4}", self.data.x),
            format!("{:.4}", self.data.y),
            format!("{:.4}", self.data.theta),
        ]
    }
}

/// Validated `x`, `y`, `theta` from the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSubmission {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl FormSubmission {
    /// Parse the three field strings; each must be a finite number.
    pub fn parse(x: &str, y: &str, theta: &str) -> Result<Self, FormError> {
        Ok(Self {
            x: parse_field("x", x)?,
            y: parse_field("y", y)?,
            theta: parse_field("theta", theta)?,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, FormError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormError::NotANumber {
            field,
            value: value.to_string(),
        }),
    }
}
