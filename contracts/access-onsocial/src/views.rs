//! Read-only query surface. None of these mutate state.

use crate::*;

#[near]
impl Contract {
    /// True iff a grant exists for `(account_id, resource_id)` and the window
    /// has not lapsed. Access ends at exactly `expires_at`.
    pub fn has_access(&self, account_id: AccountId, resource_id: u64) -> bool {
        self.access_grants
            .get(&grant_key(&account_id, resource_id))
            .map(|grant| env::block_timestamp() < grant.expires_at)
            .unwrap_or(false)
    }

    pub fn get_resource(&self, resource_id: u64) -> Option<Resource> {
        self.resources.get(&resource_id).cloned()
    }

    /// Paginated enumeration in id order.
    pub fn get_resources(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<ResourceWithId> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.resources
            .iter()
            .skip(from)
            .take(limit)
            .map(|(resource_id, resource)| ResourceWithId {
                resource_id: *resource_id,
                resource: resource.clone(),
            })
            .collect()
    }

    pub fn get_access(&self, account_id: AccountId, resource_id: u64) -> Option<AccessGrant> {
        self.access_grants
            .get(&grant_key(&account_id, resource_id))
            .cloned()
    }

    pub fn get_seller_balance(&self, account_id: AccountId) -> U128 {
        U128(self.seller_balances.get(&account_id).copied().unwrap_or(0))
    }

    pub fn get_next_resource_id(&self) -> u64 {
        self.next_resource_id
    }
}
