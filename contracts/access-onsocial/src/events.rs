//! NEP-297 `EVENT_JSON:` emission for ledger mutations.
//!
//! Events are synchronous log writes inside the same receipt; indexers and
//! UIs observe them without any callback from the contract.

use near_sdk::json_types::U128;
use near_sdk::{env, serde_json, AccountId};

const EVENT_STANDARD: &str = "onsocial";
const EVENT_VERSION: &str = "1.0.0";
const EVENT_JSON_PREFIX: &str = "EVENT_JSON:";

const EVENT_RESOURCE_CREATE: &str = "RESOURCE_CREATE";
const EVENT_ACCESS_PURCHASE: &str = "ACCESS_PURCHASE";
const EVENT_RESOURCE_DEACTIVATE: &str = "RESOURCE_DEACTIVATE";
const EVENT_WITHDRAW: &str = "WITHDRAW";

pub(crate) fn emit_resource_create(
    owner_id: &AccountId,
    resource_id: u64,
    cid: &str,
    price: U128,
    duration_secs: u64,
) {
    emit(
        EVENT_RESOURCE_CREATE,
        owner_id,
        serde_json::json!({
            "resource_id": resource_id,
            "cid": cid,
            "price": price.0.to_string(),
            "duration_secs": duration_secs,
        }),
    );
}

pub(crate) fn emit_access_purchase(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    resource_id: u64,
    amount_paid: U128,
    expires_at: u64,
) {
    emit(
        EVENT_ACCESS_PURCHASE,
        buyer_id,
        serde_json::json!({
            "seller_id": seller_id.to_string(),
            "resource_id": resource_id,
            "amount_paid": amount_paid.0.to_string(),
            "expires_at": expires_at,
        }),
    );
}

pub(crate) fn emit_resource_deactivate(owner_id: &AccountId, resource_id: u64) {
    emit(
        EVENT_RESOURCE_DEACTIVATE,
        owner_id,
        serde_json::json!({
            "resource_id": resource_id,
        }),
    );
}

pub(crate) fn emit_withdraw(seller_id: &AccountId, amount: U128) {
    emit(
        EVENT_WITHDRAW,
        seller_id,
        serde_json::json!({
            "amount": amount.0.to_string(),
        }),
    );
}

fn emit(event_type: &str, account_id: &AccountId, data: serde_json::Value) {
    let event = serde_json::json!({
        "standard": EVENT_STANDARD,
        "version": EVENT_VERSION,
        "event": event_type,
        "data": [{
            "account_id": account_id.to_string(),
            "extra": data
        }]
    });
    env::log_str(&format!("{EVENT_JSON_PREFIX}{}", event));
}
