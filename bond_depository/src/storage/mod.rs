use common_structs::{Adjustment, AssetConfig, Market, Metadata, Note, Terms};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getNativeToken)]
    #[storage_mapper("native_token")]
    fn native_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Markets by id, 1-based
    #[storage_mapper("markets")]
    fn markets(&self) -> VecMapper<Market<Self::Api>>;

    #[storage_mapper("terms")]
    fn terms(&self, id: usize) -> SingleValueMapper<Terms<Self::Api>>;

    #[storage_mapper("metadata")]
    fn metadata(&self, id: usize) -> SingleValueMapper<Metadata>;

    #[storage_mapper("adjustment")]
    fn adjustment(&self, id: usize) -> SingleValueMapper<Adjustment<Self::Api>>;

    #[storage_mapper("live_markets")]
    fn live_market_ids(&self) -> UnorderedSetMapper<usize>;

    /// Every market ever created for a quote token
    #[storage_mapper("markets_for_quote")]
    fn markets_for_quote(&self, quote: &TokenIdentifier) -> UnorderedSetMapper<usize>;

    /// Supply used as debt ratio denominator when the treasury one can not be used
    #[view(getReferenceSupply)]
    #[storage_mapper("reference_supply")]
    fn reference_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("notes")]
    fn notes(&self, owner: &ManagedAddress) -> MapMapper<u64, Note<Self::Api>>;

    /// Next note index of an owner
    #[storage_mapper("note_nonce")]
    fn note_nonce(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Pending note transfers, `(owner, index) -> recipient`
    #[view(getNoteTransfer)]
    #[storage_mapper("note_transfer")]
    fn note_transfer(&self, owner: &ManagedAddress, index: u64) -> SingleValueMapper<ManagedAddress>;

    #[view(getRewards)]
    #[storage_mapper("rewards")]
    fn rewards(&self, owner: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getReferrerReward)]
    #[storage_mapper("referrer_reward")]
    fn referrer_reward(&self) -> SingleValueMapper<u64>;

    #[view(getDaoReward)]
    #[storage_mapper("dao_reward")]
    fn dao_reward(&self) -> SingleValueMapper<u64>;

    #[view(isWhitelisted)]
    #[storage_mapper("whitelisted")]
    fn whitelisted(&self, referrer: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper_from_address("native_supply")]
    fn treasury_native_supply(
        &self,
        address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("asset_config")]
    fn treasury_asset_config(
        &self,
        address: ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<AssetConfig<Self::Api>, ManagedAddress>;
}
