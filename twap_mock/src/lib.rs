#![no_std]

use common_errors::ERROR_INVALID_PRICE;

multiversx_sc::imports!();

/// Time-weighted price feed stand-in. Prices are WAD native units per whole token,
/// keyed by the pool they would be averaged over.
#[multiversx_sc::contract]
pub trait TwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setPrice)]
    fn set_price(&self, pool: ManagedAddress, price: BigUint) {
        self.price(&pool).set(price);
    }

    #[view(priceOf)]
    fn price_of(&self, pool: ManagedAddress) -> BigUint {
        let mapper = self.price(&pool);
        require!(!mapper.is_empty(), ERROR_INVALID_PRICE);
        mapper.get()
    }

    #[storage_mapper("price")]
    fn price(&self, pool: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
