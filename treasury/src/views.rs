multiversx_sc::imports!();

use crate::{storage, utils};
use common_errors::{ERROR_INVALID_QUEUE_INDEX, ERROR_INVALID_REGISTRY_INDEX, ERROR_ZERO_AMOUNT};
use common_structs::*;

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + utils::TreasuryUtilsModule
    + common_valuation::ValuationModule
    + common_math::SharedMathModule
{
    /// Reserves and debt not backing any native unit. Zero when the supply is under-backed.
    #[view(getExcessReserves)]
    fn get_excess_reserves(&self) -> BigUint {
        self.excess_reserves_raw()
    }

    /// Native value of `amount` of a registered token at the current valuation.
    #[view(valueOf)]
    fn value_of(&self, token: TokenIdentifier, amount: BigUint) -> BigUint {
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);
        self.token_value(&token, &amount)
    }

    #[view(getRegistry)]
    fn get_registry(&self, category: PermissionCategory, index: usize) -> Principal<Self::Api> {
        let registry = self.registry(category);
        require!(index > 0 && index <= registry.len(), ERROR_INVALID_REGISTRY_INDEX);
        registry.get(index)
    }

    #[view(getRegistryLength)]
    fn get_registry_length(&self, category: PermissionCategory) -> usize {
        self.registry(category).len()
    }

    #[view(getPermissionQueue)]
    fn get_permission_queue(&self, index: usize) -> QueuedChange<Self::Api> {
        let queue = self.permission_queue();
        require!(index > 0 && index <= queue.len(), ERROR_INVALID_QUEUE_INDEX);
        queue.get(index)
    }

    #[view(getPermissionQueueLength)]
    fn get_permission_queue_length(&self) -> usize {
        self.permission_queue().len()
    }
}
