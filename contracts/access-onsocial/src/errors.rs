//! Typed error handling for the access marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(AccessError::Xxx)`, the SDK calls `env::panic_str()` with the Display
//! message — same on-wire behaviour as raw panics, but with structured,
//! testable values. A failed receipt rolls back all state writes and refunds
//! the full attached deposit.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum AccessError {
    /// Referenced resource id does not exist.
    InvalidResource(String),
    /// Purchase against a deactivated resource.
    ResourceInactive(String),
    /// Attached deposit does not match the resource price.
    IncorrectPayment(String),
    /// Caller lacks permission (owner-only action).
    Unauthorized(String),
    /// Withdrawal with an empty balance.
    NothingToWithdraw(String),
    /// Invalid parameters from the caller.
    InvalidInput(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Self::ResourceInactive(msg) => write!(f, "Resource not active: {}", msg),
            Self::IncorrectPayment(msg) => write!(f, "Incorrect payment: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NothingToWithdraw(msg) => write!(f, "Nothing to withdraw: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl AccessError {
    pub fn resource_not_found(resource_id: u64) -> Self {
        Self::InvalidResource(format!("Resource not found: {}", resource_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only the resource owner can {}", what))
    }
}
