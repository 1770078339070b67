//! Errors raised at the filter input boundary

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The field name is not one of the filter bar's fields.
    #[error("Unknown filter field '{0}' (expected timeRange, unit, department, machine or shift)")]
    UnknownField(String),

    /// The value is outside the field's options.
    #[error("Invalid value '{value}' for filter field '{field}'")]
    InvalidValue { field: String, value: String },

    /// Assignment was not written as FIELD=VALUE.
    #[error("Malformed filter '{0}', expected FIELD=VALUE")]
    MalformedAssignment(String),
}
