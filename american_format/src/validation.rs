//! Collect-all validation results shared by every validator in the crate.

use serde::{Deserialize, Serialize};

/// Outcome of a validation pass.
///
/// Validators never stop at the first problem: every error and warning found
/// in one pass is collected so callers can surface all of them at once.
/// `data` carries the validated (and possibly normalized) input when the pass
/// succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult<T, I> {
    pub is_valid: bool,
    pub data: Option<T>,
    pub errors: Vec<I>,
    pub warnings: Vec<I>,
}

impl<T, I> ValidationResult<T, I> {
    /// Build a result from collected issues. `data` is only kept when no
    /// error was collected.
    pub fn from_issues(data: T, errors: Vec<I>, warnings: Vec<I>) -> Self {
        let is_valid = errors.is_empty();
        Self {
            is_valid,
            data: is_valid.then_some(data),
            errors,
            warnings,
        }
    }

    /// A passing result with no warnings.
    pub fn valid(data: T) -> Self {
        Self::from_issues(data, Vec::new(), Vec::new())
    }

    /// Convert the issue type, e.g. to embed configuration issues in a
    /// schedule validation.
    pub fn map_issues<J>(self, f: impl Fn(I) -> J) -> ValidationResult<T, J> {
        ValidationResult {
            is_valid: self.is_valid,
            data: self.data,
            errors: self.errors.into_iter().map(&f).collect(),
            warnings: self.warnings.into_iter().map(&f).collect(),
        }
    }

    /// Replace the carried data, keeping the issues.
    pub fn with_data<U>(self, data: Option<U>) -> ValidationResult<U, I> {
        ValidationResult {
            is_valid: self.is_valid,
            data: if self.is_valid { data } else { None },
            errors: self.errors,
            warnings: self.warnings,
        }
    }

    /// Append the issues of another result. The combined result is valid only
    /// if both were.
    pub fn absorb<U>(&mut self, other: ValidationResult<U, I>) {
        if !other.is_valid {
            self.is_valid = false;
            self.data = None;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}
