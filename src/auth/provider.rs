//! Trait abstraction for the auth provider to enable mocking in tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A signed-in user with usage counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_premium: bool,
    pub qr_codes_count: u32,
    pub max_qr_codes: u32,
}

impl User {
    /// Codes still available under the current plan
    pub fn remaining(&self) -> u32 {
        self.max_qr_codes.saturating_sub(self.qr_codes_count)
    }

    pub fn at_limit(&self) -> bool {
        !self.is_premium && self.qr_codes_count >= self.max_qr_codes
    }
}

/// Auth failures surfaced to the dialog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter the OTP")]
    MissingOtp,
}

/// Auth/session provider operations.
///
/// The shipped implementation is a non-functional simulation; the trait is
/// the seam a real identity service would plug into.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in with email and password
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Validate registration details and send a verification code
    async fn send_otp(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError>;

    /// Verify the emailed code and create the account
    async fn verify_otp(&self, name: &str, email: &str, code: &str) -> Result<User, AuthError>;

    /// Federated sign-in
    async fn login_with_google(&self) -> Result<User, AuthError>;
}
