use common_structs::{AssetConfig, PermissionCategory, Principal, QueuedChange};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The native token, minted and burned by this contract through its local roles
    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Native units minted by the treasury minus those it burned
    #[view(getNativeSupply)]
    #[storage_mapper("native_supply")]
    fn native_supply(&self) -> SingleValueMapper<BigUint>;

    /// Value of all accounted reserves, in native units
    #[view(getTotalReserves)]
    #[storage_mapper("total_reserves")]
    fn total_reserves(&self) -> SingleValueMapper<BigUint>;

    /// Value lent to debtors, in native units
    #[view(getTotalDebt)]
    #[storage_mapper("total_debt")]
    fn total_debt(&self) -> SingleValueMapper<BigUint>;

    /// WAD scaled base valuation unit applied to every reserve valuation
    #[view(getBaseValue)]
    #[storage_mapper("base_value")]
    fn base_value(&self) -> SingleValueMapper<BigUint>;

    #[view(getAssetConfig)]
    #[storage_mapper("asset_config")]
    fn asset_config(&self, token: &TokenIdentifier) -> SingleValueMapper<AssetConfig<Self::Api>>;

    #[view(getPermission)]
    #[storage_mapper("permission")]
    fn permission(
        &self,
        category: PermissionCategory,
        principal: &Principal<Self::Api>,
    ) -> SingleValueMapper<bool>;

    /// Every principal ever enabled for a category, 1-based
    #[storage_mapper("registry")]
    fn registry(&self, category: PermissionCategory) -> VecMapper<Principal<Self::Api>>;

    #[storage_mapper("registry_index")]
    fn registry_index(
        &self,
        category: PermissionCategory,
        principal: &Principal<Self::Api>,
    ) -> SingleValueMapper<usize>;

    #[storage_mapper("permission_queue")]
    fn permission_queue(&self) -> VecMapper<QueuedChange<Self::Api>>;

    /// Supply controller consulted when the balance of a liquidity token changes
    #[view(getSupplyController)]
    #[storage_mapper("supply_controller")]
    fn supply_controller(&self, liquidity_token: &TokenIdentifier)
        -> SingleValueMapper<ManagedAddress>;

    #[view(getStakedToken)]
    #[storage_mapper("staked_token")]
    fn staked_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(isInitialized)]
    #[storage_mapper("initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;

    #[view(isTimelockEnabled)]
    #[storage_mapper("timelock_enabled")]
    fn timelock_enabled(&self) -> SingleValueMapper<bool>;

    /// Base queue delay, in blocks
    #[view(getTimelockDelay)]
    #[storage_mapper("timelock_delay")]
    fn timelock_delay(&self) -> SingleValueMapper<u64>;

    /// Block from which `disableTimelock` takes effect, zero when not armed
    #[view(getTimelockDisableBlock)]
    #[storage_mapper("timelock_disable_block")]
    fn timelock_disable_block(&self) -> SingleValueMapper<u64>;

    #[view(getDebtLimit)]
    #[storage_mapper("debt_limit")]
    fn debt_limit(&self, debtor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getDebtorBalance)]
    #[storage_mapper("debtor_balance")]
    fn debtor_balance(&self, debtor: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
