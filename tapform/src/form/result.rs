/// Information about a single input validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Id of the failing input (for focusing).
    pub input_id: String,
    /// Error message.
    pub message: String,
}

/// Result of validating the inputs of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All inputs passed validation.
    #[default]
    Valid,
    /// One or more inputs failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all inputs passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any input failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the id of the first invalid input (for focusing).
    pub fn first_invalid_input(&self) -> Option<&str> {
        self.first_error().map(|e| e.input_id.as_str())
    }
}
