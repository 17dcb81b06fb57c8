//! Error types for structured error handling.
//!
//! Every fallible operation in the workspace core (point sampling, figure
//! construction, slider snapping) reports failures through [`CloudError`].

use thiserror::Error;

/// Categorised errors for point sampling and figure construction.
///
/// # Variants
/// - `InvalidParameter`: A parameter violates its documented constraint
/// - `NonFinite`: A floating-point parameter is NaN or infinite
///
/// # Examples
/// ```
/// use tda_core::CloudError;
///
/// let err = CloudError::invalid("count", "must be greater than 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'count': must be greater than 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloudError {
    /// Parameter outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Parameter is NaN or infinite.
    #[error("Invalid parameter '{name}': must be finite")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
    },
}

impl CloudError {
    /// Create an invalid parameter error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } | Self::NonFinite { name } => name,
        }
    }
}

/// Checks that `value` is finite and non-negative.
///
/// A negative zero is returned as `+0.0`.
///
/// # Errors
///
/// - [`CloudError::NonFinite`] for NaN or infinite input
/// - [`CloudError::InvalidParameter`] for negative input
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, CloudError> {
    if !value.is_finite() {
        return Err(CloudError::NonFinite { name });
    }
    if value < 0.0 {
        return Err(CloudError::invalid(
            name,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(value + 0.0)
}

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
///
/// - [`CloudError::NonFinite`] for NaN or infinite input
/// - [`CloudError::InvalidParameter`] for zero or negative input
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, CloudError> {
    if !value.is_finite() {
        return Err(CloudError::NonFinite { name });
    }
    if value <= 0.0 {
        return Err(CloudError::invalid(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(value)
}
