//! Seller proceeds: accumulation and withdrawal.

use crate::*;

#[near]
impl Contract {
    /// Withdraws the caller's full accumulated balance and returns the amount.
    /// The balance is zeroed before the transfer is issued, so no later call
    /// can observe a stale positive balance and withdraw twice.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<U128, AccessError> {
        let seller_id = env::predecessor_account_id();

        let amount = self.seller_balances.remove(&seller_id).unwrap_or(0);
        if amount == 0 {
            return Err(AccessError::NothingToWithdraw(format!(
                "No balance for {}",
                seller_id
            )));
        }

        let _ = Promise::new(seller_id.clone()).transfer(NearToken::from_yoctonear(amount));

        events::emit_withdraw(&seller_id, U128(amount));

        Ok(U128(amount))
    }
}

impl Contract {
    pub(crate) fn internal_credit_seller(&mut self, seller_id: &AccountId, amount: u128) {
        let balance = self.seller_balances.get(seller_id).copied().unwrap_or(0);
        self.seller_balances.insert(seller_id.clone(), balance + amount);
    }
}
