//! User-facing messages for identity-provider failures.
//!
//! Sign-in and sign-up are handled by an external identity provider. When
//! it rejects a request it reports a code such as `auth/weak-password`;
//! [`AuthError::from_code`] turns that code into the message shown inline
//! next to the form. Nothing here retries.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Email already in use")]
    EmailInUse,

    #[error("Password should be at least 6 characters")]
    WeakPassword,

    #[error("Sign up cancelled")]
    PopupClosed,

    #[error("Something went wrong. Please try again.")]
    Other(String),
}

impl AuthError {
    /// Map a provider error code to its user-facing error.
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/invalid-email" => AuthError::InvalidEmail,
            "auth/wrong-password" | "auth/user-not-found" | "auth/invalid-credential" => {
                AuthError::InvalidCredentials
            }
            "auth/email-already-in-use" => AuthError::EmailInUse,
            "auth/weak-password" => AuthError::WeakPassword,
            "auth/popup-closed-by-user" => AuthError::PopupClosed,
            other => AuthError::Other(other.to_string()),
        }
    }

    /// The provider code this error was built from, when it was unmapped.
    pub fn unmapped_code(&self) -> Option<&str> {
        match self {
            AuthError::Other(code) => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let cases = [
            ("auth/invalid-email", "Invalid email address"),
            ("auth/wrong-password", "Invalid credentials. Please try again."),
            ("auth/user-not-found", "Invalid credentials. Please try again."),
            ("auth/email-already-in-use", "Email already in use"),
            ("auth/weak-password", "Password should be at least 6 characters"),
            ("auth/popup-closed-by-user", "Sign up cancelled"),
        ];
        for (code, message) in cases {
            let err = AuthError::from_code(code);
            assert_eq!(err.to_string(), message, "{code}");
            assert_eq!(err.unmapped_code(), None);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = AuthError::from_code("auth/network-request-failed");
        assert_eq!(err.to_string(), "Something went wrong. Please try again.");
        assert_eq!(err.unmapped_code(), Some("auth/network-request-failed"));
    }
}
