//! Mocked auth service
//!
//! Stands in for a real identity service: every call resolves after an
//! artificial delay and returns a fabricated user. No credential storage,
//! token issuance, or network call exists anywhere in here.

use super::provider::{AuthError, AuthProvider, User};
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Simulated request latency.
const REQUEST_DELAY: Duration = Duration::from_millis(1000);
/// The federated path is a little slower, like the original flow it mimics.
const FEDERATED_DELAY: Duration = Duration::from_millis(1500);

/// Fake auth backend with configurable delays.
#[derive(Debug, Clone)]
pub struct MockedAuthService {
    request_delay: Duration,
    federated_delay: Duration,
}

impl MockedAuthService {
    pub fn new() -> Self {
        Self {
            request_delay: REQUEST_DELAY,
            federated_delay: FEDERATED_DELAY,
        }
    }

    /// Zero-latency variant for tests
    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            request_delay: Duration::ZERO,
            federated_delay: Duration::ZERO,
        }
    }

    fn fabricate_user(name: &str, email: &str, qr_codes_count: u32) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            is_premium: false,
            qr_codes_count,
            max_qr_codes: 10,
        }
    }
}

impl Default for MockedAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MockedAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.request_delay).await;

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        // Display name falls back to the local part of the email.
        let name = email.split('@').next().unwrap_or(email);
        tracing::info!(email, "mock login succeeded");
        Ok(Self::fabricate_user(name, email, 3))
    }

    async fn send_otp(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        tokio::time::sleep(self.request_delay).await;
        tracing::info!(email, "mock OTP sent");
        Ok(())
    }

    async fn verify_otp(&self, name: &str, email: &str, code: &str) -> Result<User, AuthError> {
        if code.is_empty() {
            return Err(AuthError::MissingOtp);
        }

        // Any non-empty code verifies; nothing was ever actually sent.
        tokio::time::sleep(self.request_delay).await;
        tracing::info!(email, "mock OTP verified, account created");
        Ok(Self::fabricate_user(name, email, 0))
    }

    async fn login_with_google(&self) -> Result<User, AuthError> {
        tokio::time::sleep(self.federated_delay).await;
        tracing::info!("mock federated login succeeded");
        Ok(Self::fabricate_user("John Doe", "john.doe@gmail.com", 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_login_fabricates_user_from_email() {
        let auth = MockedAuthService::instant();
        let user = auth.login("ada@example.com", "hunter2").await.unwrap();
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.qr_codes_count, 3);
        assert_eq!(user.max_qr_codes, 10);
        assert!(!user.is_premium);
    }

    #[tokio::test]
    async fn test_login_rejects_blank_credentials() {
        let auth = MockedAuthService::instant();
        assert_eq!(
            auth.login("", "hunter2").await.unwrap_err(),
            AuthError::MissingFields
        );
        assert_eq!(
            auth.login("ada@example.com", "").await.unwrap_err(),
            AuthError::MissingFields
        );
    }

    #[tokio::test]
    async fn test_each_login_gets_a_fresh_id() {
        let auth = MockedAuthService::instant();
        let a = auth.login("ada@example.com", "x").await.unwrap();
        let b = auth.login("ada@example.com", "x").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_send_otp_validates_fields() {
        let auth = MockedAuthService::instant();
        assert_eq!(
            auth.send_otp("Ada", "", "pw", "pw").await.unwrap_err(),
            AuthError::MissingFields
        );
        assert_eq!(
            auth.send_otp("Ada", "ada@example.com", "pw", "other")
                .await
                .unwrap_err(),
            AuthError::PasswordMismatch
        );
        assert!(auth
            .send_otp("Ada", "ada@example.com", "pw", "pw")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_verify_otp_accepts_any_nonempty_code() {
        let auth = MockedAuthService::instant();
        let user = auth
            .verify_otp("Ada", "ada@example.com", "123456")
            .await
            .unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.qr_codes_count, 0);
    }

    #[tokio::test]
    async fn test_verify_otp_requires_a_code() {
        let auth = MockedAuthService::instant();
        assert_eq!(
            auth.verify_otp("Ada", "ada@example.com", "")
                .await
                .unwrap_err(),
            AuthError::MissingOtp
        );
    }

    #[tokio::test]
    async fn test_google_login_returns_canned_user() {
        let auth = MockedAuthService::instant();
        let user = auth.login_with_google().await.unwrap();
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john.doe@gmail.com");
    }

    #[test]
    fn test_user_limit_accounting() {
        let mut user = MockedAuthService::fabricate_user("Ada", "ada@example.com", 9);
        assert_eq!(user.remaining(), 1);
        assert!(!user.at_limit());
        user.qr_codes_count += 1;
        assert!(user.at_limit());
        user.is_premium = true;
        assert!(!user.at_limit());
    }
}
