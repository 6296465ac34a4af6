use crate::shared::notification::NotificationDraft;
use thiserror::Error;

/// Title of the notification shown when a form does not validate.
pub const VALIDATION_TITLE: &str = "Validation error";

/// Ошибка проверки формы до отправки запроса
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select a customer")]
    MissingCustomer,

    #[error("Please select a salesperson")]
    MissingSalesperson,

    #[error("Line {line}: please select a product")]
    MissingProduct { line: usize },

    #[error("Line {line}: quantity must be at least 1")]
    InvalidQuantity { line: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Amount must be a number")]
    InvalidAmount,

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("{field} is required")]
    Required { field: &'static str },
}

impl FormError {
    pub fn to_notification(&self) -> NotificationDraft {
        NotificationDraft::destructive(VALIDATION_TITLE, self.to_string())
    }
}

/// Non-blank trimmed value of a required text field.
pub fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required { field })
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::Severity;

    #[test]
    fn required_trims() {
        assert_eq!(required("  UPS ", "Carrier"), Ok("UPS".to_string()));
        assert_eq!(
            required("   ", "Carrier"),
            Err(FormError::Required { field: "Carrier" })
        );
    }

    #[test]
    fn validation_failure_is_destructive() {
        let n = FormError::MissingProduct { line: 2 }.to_notification();
        assert_eq!(n.severity, Severity::Destructive);
        assert_eq!(n.title, "Validation error");
        assert_eq!(n.description, "Line 2: please select a product");
    }
}
