//! Record types stored by the access marketplace.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// A seller-registered, priced, time-bounded access product.
///
/// Immutable after creation except for `is_active`, which the owner may flip
/// to `false` to stop further sales.
#[derive(Clone, Debug)]
#[near(serializers = [json, borsh])]
pub struct Resource {
    pub owner_id: AccountId,
    /// Opaque content identifier; resolving the underlying content is off-chain.
    pub cid: String,
    /// Exact amount, in yoctoNEAR, a buyer must attach for one access window.
    pub price: U128,
    /// Length of the access window, in seconds.
    pub duration_secs: u64,
    pub is_active: bool,
}

/// A buyer's proof of purchase for one resource.
#[derive(Clone, Debug, Default)]
#[near(serializers = [json, borsh])]
pub struct AccessGrant {
    pub amount_paid: U128,
    /// Absolute expiry, nanoseconds. Access has lapsed at exactly this instant.
    pub expires_at: u64,
}

/// Enumeration entry returned by `get_resources`.
#[derive(Clone, Debug)]
#[near(serializers = [json])]
pub struct ResourceWithId {
    pub resource_id: u64,
    pub resource: Resource,
}
