//! Exact-price purchase of a time-boxed access grant.

use crate::*;

#[near]
impl Contract {
    /// Buys one access window for the caller. The attached deposit must equal
    /// the resource price exactly; both under- and overpayment are rejected
    /// (no change-giving). Any `Err` fails the receipt, so state is rolled
    /// back and the full deposit is returned to the caller.
    #[payable]
    #[handle_result]
    pub fn buy_access(&mut self, resource_id: u64) -> Result<(), AccessError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();

        let resource = self
            .resources
            .get(&resource_id)
            .ok_or_else(|| AccessError::resource_not_found(resource_id))?;

        if !resource.is_active {
            return Err(AccessError::ResourceInactive(format!(
                "Resource {} no longer sells access",
                resource_id
            )));
        }

        if deposit != resource.price.0 {
            return Err(AccessError::IncorrectPayment(format!(
                "required {}, got {}",
                resource.price.0, deposit
            )));
        }

        let seller_id = resource.owner_id.clone();
        let expires_at = env::block_timestamp()
            .saturating_add(resource.duration_secs.saturating_mul(NS_PER_SEC));

        // A repeat purchase restarts the window from now rather than extending it.
        self.access_grants.insert(
            grant_key(&buyer_id, resource_id),
            AccessGrant {
                amount_paid: U128(deposit),
                expires_at,
            },
        );

        self.internal_credit_seller(&seller_id, deposit);

        events::emit_access_purchase(&buyer_id, &seller_id, resource_id, U128(deposit), expires_at);

        Ok(())
    }
}
