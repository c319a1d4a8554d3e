//! OnSocial Access — pay-per-use access marketplace: CID-addressed resources with a price and a
//! time-boxed access window, per-seller proceeds ledger, JSON events.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod errors;
mod events;
mod ledger;
mod purchase;
mod resource;
pub mod types;
mod views;

pub use errors::AccessError;
pub use types::*;

pub(crate) const NS_PER_SEC: u64 = 1_000_000_000;

// --- Helpers ---

// Grant key format: `"buyer_id:resource_id"`; one live grant per key.
pub(crate) fn grant_key(account_id: &AccountId, resource_id: u64) -> String {
    format!("{}:{}", account_id, resource_id)
}

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Resources,
    AccessGrants,
    SellerBalances,
}

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// Dense ids assigned in creation order, starting at 0; records are never deleted.
    pub resources: IterableMap<u64, Resource>,
    pub next_resource_id: u64,
    /// Key: "buyer_id:resource_id"; a repeat purchase overwrites the grant.
    pub access_grants: LookupMap<String, AccessGrant>,
    /// Withdrawable proceeds per seller, in yoctoNEAR.
    pub seller_balances: LookupMap<AccountId, u128>,
}

#[near]
impl Contract {
    #[init]
    pub fn new() -> Self {
        Self {
            resources: IterableMap::new(StorageKey::Resources),
            next_resource_id: 0,
            access_grants: LookupMap::new(StorageKey::AccessGrants),
            seller_balances: LookupMap::new(StorageKey::SellerBalances),
        }
    }
}
