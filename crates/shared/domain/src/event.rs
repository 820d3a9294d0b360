//! User lifecycle events sent to the notification channel.

use serde::{Deserialize, Serialize};

use crate::constants::{OPERATION_CREATE, OPERATION_DELETE};

/// Operations that produce a notification. Updates produce none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserOperation {
    Create,
    Delete,
}

impl UserOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserOperation::Create => OPERATION_CREATE,
            UserOperation::Delete => OPERATION_DELETE,
        }
    }
}

impl std::fmt::Display for UserOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event payload: the operation and the email of the affected user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    pub operation: UserOperation,
    pub email: String,
}

impl UserEvent {
    pub fn new(operation: UserOperation, email: impl Into<String>) -> Self {
        Self {
            operation,
            email: email.into(),
        }
    }

    pub fn created(email: impl Into<String>) -> Self {
        Self::new(UserOperation::Create, email)
    }

    pub fn deleted(email: impl Into<String>) -> Self {
        Self::new(UserOperation::Delete, email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_names_are_upper_case() {
        assert_eq!(UserOperation::Create.to_string(), "CREATE");
        assert_eq!(UserOperation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn event_payload_shape() {
        let payload = serde_json::to_string(&UserEvent::deleted("john@example.com")).unwrap();
        assert_eq!(payload, r#"{"operation":"DELETE","email":"john@example.com"}"#);
    }
}
