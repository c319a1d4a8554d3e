//! Resource registration and deactivation.

use crate::*;

#[near]
impl Contract {
    /// Registers a new resource and returns its id. Ids are dense and
    /// assigned in creation order.
    #[handle_result]
    pub fn create_resource(
        &mut self,
        cid: String,
        price: U128,
        duration_secs: u64,
    ) -> Result<u64, AccessError> {
        if cid.is_empty() {
            return Err(AccessError::InvalidInput("cid must not be empty".into()));
        }
        if price.0 == 0 {
            return Err(AccessError::InvalidInput("price must be positive".into()));
        }
        if duration_secs == 0 {
            return Err(AccessError::InvalidInput(
                "duration_secs must be positive".into(),
            ));
        }

        let owner_id = env::predecessor_account_id();
        let resource_id = self.next_resource_id;
        self.next_resource_id = self
            .next_resource_id
            .checked_add(1)
            .ok_or_else(|| AccessError::InternalError("Resource id counter overflow".into()))?;

        self.resources.insert(
            resource_id,
            Resource {
                owner_id: owner_id.clone(),
                cid: cid.clone(),
                price,
                duration_secs,
                is_active: true,
            },
        );

        events::emit_resource_create(&owner_id, resource_id, &cid, price, duration_secs);

        Ok(resource_id)
    }

    /// Stops further sales of a resource. Grants already issued keep their
    /// window; only new purchases are blocked. Owner only.
    #[handle_result]
    pub fn deactivate_resource(&mut self, resource_id: u64) -> Result<(), AccessError> {
        let caller = env::predecessor_account_id();
        let resource = self
            .resources
            .get_mut(&resource_id)
            .ok_or_else(|| AccessError::resource_not_found(resource_id))?;

        if resource.owner_id != caller {
            return Err(AccessError::only_owner("deactivate it"));
        }

        // Deactivating an already-inactive resource is a no-op.
        if resource.is_active {
            resource.is_active = false;
            events::emit_resource_deactivate(&caller, resource_id);
        }

        Ok(())
    }
}
