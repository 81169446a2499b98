use chrono::{DateTime, Utc};
use taskforge_core::error::CoreError;

/// Outbound notification stub.
///
/// Validates addresses and simulates the send; no SMTP session is ever
/// opened. Server and port are carried so a real transport can be dropped
/// in later without changing call sites.
#[derive(Debug, Clone)]
pub struct EmailService {
    pub smtp_server: String,
    pub port: u16,
}

impl EmailService {
    pub fn new(smtp_server: impl Into<String>, port: u16) -> Self {
        Self {
            smtp_server: smtp_server.into(),
            port,
        }
    }

    /// Remind `email` about a task due at `due_date`.
    pub fn send_task_reminder(
        &self,
        email: &str,
        _task_title: &str,
        _due_date: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        validate_email(email)
    }

    /// Notify `email` that a task has been completed.
    pub fn send_completion_notification(
        &self,
        email: &str,
        _task_title: &str,
    ) -> Result<(), CoreError> {
        validate_email(email)
    }
}

fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.is_empty() || !email.contains('@') {
        return Err(CoreError::Validation(format!(
            "invalid email address: '{email}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> EmailService {
        EmailService::new("smtp.example.com", 587)
    }

    #[test]
    fn reminder_with_valid_address_succeeds() {
        let result = service().send_task_reminder("user@example.com", "Ship it", Utc::now());
        assert!(result.is_ok());
    }

    #[test]
    fn reminder_without_at_sign_fails() {
        let result = service().send_task_reminder("bademail", "Ship it", Utc::now());
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn reminder_with_empty_address_fails() {
        let result = service().send_task_reminder("", "Ship it", Utc::now());
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn completion_notification_validates_address() {
        assert!(service()
            .send_completion_notification("user@example.com", "Ship it")
            .is_ok());
        assert!(service()
            .send_completion_notification("bademail", "Ship it")
            .is_err());
        assert!(service().send_completion_notification("", "Ship it").is_err());
    }
}
