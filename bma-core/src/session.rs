//! Session gate of the admin panel.
//!
//! The identity provider owns all credentials; locally there is only the
//! bearer token it issued and the display name of the signed-in admin.
//! Token presence is the whole check: there is no expiry or refresh logic,
//! an expired-but-present token stays "authenticated" until a remote call
//! using it fails.

use std::fmt;

/// Everything the protected component tree needs to know about the
/// signed-in admin. Passed down explicitly, never looked up globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    /// Credentials submitted, waiting for the identity provider.
    Authenticating,
    Authenticated(Session),
}

impl SessionState {
    pub fn begin_sign_in(&mut self) {
        if matches!(self, Self::Anonymous) {
            *self = Self::Authenticating;
        }
    }

    pub fn finish_sign_in(&mut self, session: Session) {
        *self = Self::Authenticated(session);
    }

    /// Provider rejection: back to the login form, retry allowed
    /// immediately.
    pub fn fail_sign_in(&mut self) {
        *self = Self::Anonymous;
    }

    pub fn sign_out(&mut self) {
        *self = Self::Anonymous;
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Turns a bare login name into the email address the identity provider
/// expects. Names that already contain an `@` pass through unchanged.
#[derive(Debug, Clone)]
pub struct LoginQualifier {
    domain: String,
}

impl LoginQualifier {
    pub const DEFAULT_DOMAIN: &'static str = "gmail.com";

    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    pub fn qualify(&self, login: &str) -> String {
        if login.contains('@') {
            login.to_string()
        } else {
            format!("{login}@{domain}", domain = self.domain)
        }
    }
}

impl Default for LoginQualifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DOMAIN)
    }
}

/// Display name stored alongside the token: the login name without
/// its domain part.
pub fn admin_display_name(login: &str) -> &str {
    login.split('@').next().unwrap_or(login)
}

/// Provider rejection codes, classified from the wire representation
/// (`auth/wrong-password` or plain `wrong-password`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInErrorCode {
    UserNotFound,
    WrongPassword,
    InvalidEmail,
    TooManyRequests,
    InvalidCredential,
    Other,
}

impl SignInErrorCode {
    pub fn from_provider_code(code: &str) -> Self {
        match code.strip_prefix("auth/").unwrap_or(code) {
            "user-not-found" => Self::UserNotFound,
            "wrong-password" => Self::WrongPassword,
            "invalid-email" => Self::InvalidEmail,
            "too-many-requests" => Self::TooManyRequests,
            "invalid-credential" => Self::InvalidCredential,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for SignInErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Self::UserNotFound => "user-not-found",
            Self::WrongPassword => "wrong-password",
            Self::InvalidEmail => "invalid-email",
            Self::TooManyRequests => "too-many-requests",
            Self::InvalidCredential => "invalid-credential",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// The fixed set of user-facing login error messages.
///
/// Unclassified rejections fall back to the provider's own message.
pub fn sign_in_error_message(code: &str, provider_message: &str) -> String {
    use SignInErrorCode::*;
    match SignInErrorCode::from_provider_code(code) {
        UserNotFound => "User not found. Please check your email.".to_string(),
        WrongPassword => "Incorrect password. Please try again.".to_string(),
        InvalidEmail => "Invalid email format.".to_string(),
        TooManyRequests => "Too many failed attempts. Please try again later.".to_string(),
        InvalidCredential => {
            "Invalid credentials. Please check your username and password.".to_string()
        }
        Other => {
            if provider_message.is_empty() {
                "Login failed".to_string()
            } else {
                provider_message.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualify_bare_login_name_with_default_domain() {
        let qualifier = LoginQualifier::default();
        assert_eq!(qualifier.qualify("admin"), "admin@gmail.com");
    }

    #[test]
    fn qualified_login_name_passes_through() {
        let qualifier = LoginQualifier::new("example.org");
        assert_eq!(qualifier.qualify("admin@corp.net"), "admin@corp.net");
        assert_eq!(qualifier.qualify("admin"), "admin@example.org");
    }

    #[test]
    fn display_name_strips_domain() {
        assert_eq!(admin_display_name("admin@gmail.com"), "admin");
        assert_eq!(admin_display_name("admin"), "admin");
    }

    #[test]
    fn wrong_password_message_is_exact() {
        assert_eq!(
            sign_in_error_message("auth/wrong-password", "whatever"),
            "Incorrect password. Please try again."
        );
        assert_eq!(
            sign_in_error_message("wrong-password", ""),
            "Incorrect password. Please try again."
        );
    }

    #[test]
    fn unclassified_code_falls_back_to_provider_message() {
        assert_eq!(
            sign_in_error_message("auth/network-request-failed", "network down"),
            "network down"
        );
        assert_eq!(sign_in_error_message("auth/internal", ""), "Login failed");
    }

    #[test]
    fn sign_in_state_transitions() {
        let mut state = SessionState::default();
        assert!(!state.is_authenticated());

        state.begin_sign_in();
        assert_eq!(state, SessionState::Authenticating);

        state.fail_sign_in();
        assert_eq!(state, SessionState::Anonymous);

        state.begin_sign_in();
        state.finish_sign_in(Session {
            token: "tok".into(),
            display_name: "admin".into(),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.session().unwrap().display_name, "admin");

        state.sign_out();
        assert_eq!(state, SessionState::Anonymous);
    }
}
