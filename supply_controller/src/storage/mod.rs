use common_structs::SupplyControlParams;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    /// Pool whose native reserve is held around its target share of the supply
    #[view(getPair)]
    #[storage_mapper("pair")]
    fn pair(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<SupplyControlParams>;

    #[view(paramsSet)]
    #[storage_mapper("params_set")]
    fn params_set(&self) -> SingleValueMapper<bool>;

    #[view(supplyControlEnabled)]
    #[storage_mapper("enabled")]
    fn enabled(&self) -> SingleValueMapper<bool>;

    /// Proportional coefficient, in basis points
    #[view(kp)]
    #[storage_mapper("kp")]
    fn kp(&self) -> SingleValueMapper<u64>;

    #[view(getLastSample)]
    #[storage_mapper("last_sample")]
    fn last_sample(&self) -> SingleValueMapper<u64>;

    #[storage_mapper_from_address("native_supply")]
    fn treasury_native_supply(
        &self,
        address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("first_token_id")]
    fn pair_first_token(
        &self,
        address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("second_token_id")]
    fn pair_second_token(
        &self,
        address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("reserve")]
    fn pair_reserve(
        &self,
        address: ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("lp_token_supply")]
    fn pair_lp_supply(&self, address: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;
}
