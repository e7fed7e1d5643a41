//! Mocked auth/session subsystem

mod mock;
mod provider;

pub use mock::MockedAuthService;
pub use provider::{AuthError, AuthProvider, User};

#[cfg(test)]
pub use provider::MockAuthProvider;
