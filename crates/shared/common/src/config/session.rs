//! Session cookie policy.

use std::time::Duration;

use super::settings::Config;

/// Cookie flags and lifetime for permanent sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub secure: bool,
    pub http_only: bool,
    pub lifetime: Duration,
}

impl SessionPolicy {
    /// Lifetime in whole seconds, for the cookie `Max-Age` attribute.
    pub fn max_age_seconds(&self) -> u64 {
        self.lifetime.as_secs()
    }

    /// Cookie attribute string, e.g. `Max-Age=86400; HttpOnly`.
    pub fn cookie_attributes(&self) -> String {
        let mut attrs = vec![format!("Max-Age={}", self.max_age_seconds())];
        if self.http_only {
            attrs.push("HttpOnly".to_string());
        }
        if self.secure {
            attrs.push("Secure".to_string());
        }
        attrs.join("; ")
    }
}

impl From<&Config> for SessionPolicy {
    fn from(config: &Config) -> Self {
        Self {
            secure: config.session_cookie_secure,
            http_only: config.session_cookie_httponly,
            lifetime: config.permanent_session_lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_policy() {
        let policy = SessionPolicy::from(&Config::default());

        assert!(!policy.secure);
        assert!(policy.http_only);
        assert_eq!(policy.max_age_seconds(), 86_400);
        assert_eq!(policy.cookie_attributes(), "Max-Age=86400; HttpOnly");
    }

    #[test]
    fn test_secure_cookie_attributes() {
        let policy = SessionPolicy {
            secure: true,
            http_only: false,
            lifetime: Duration::from_secs(3600),
        };

        assert_eq!(policy.cookie_attributes(), "Max-Age=3600; Secure");
    }
}
