#![no_std]

use common_errors::*;

multiversx_sc::imports!();

/// Constant-product pool stand-in exposing the subset of the pair interface the protocol
/// consumes. The contract needs local mint and burn roles on the LP token.
#[multiversx_sc::contract]
pub trait PairMock {
    #[init]
    fn init(
        &self,
        first_token: TokenIdentifier,
        second_token: TokenIdentifier,
        lp_token: TokenIdentifier,
    ) {
        require!(
            first_token != second_token && first_token != lp_token && second_token != lp_token,
            ERROR_INVALID_PAIR_TOKENS
        );

        self.first_token_id().set(first_token);
        self.second_token_id().set(second_token);
        self.lp_token_identifier().set(lp_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Takes both pair tokens, in pair order, and mints LP tokens to the caller.
    ///
    /// The first deposit mints `sqrt(a * b)`, later ones mint in proportion to the smaller
    /// side. Any surplus on the other side stays in the pool.
    #[payable]
    #[endpoint(addLiquidity)]
    fn add_liquidity(&self) -> EsdtTokenPayment {
        let payments = self.call_value().all_esdt_transfers();
        require!(payments.len() == 2, ERROR_INVALID_LIQUIDITY_PAYMENTS);

        let first = payments.get(0).clone();
        let second = payments.get(1).clone();
        require!(
            first.token_identifier == self.first_token_id().get()
                && second.token_identifier == self.second_token_id().get(),
            ERROR_INVALID_PAIR_TOKENS
        );
        require!(
            first.amount > 0u64 && second.amount > 0u64,
            ERROR_ZERO_AMOUNT
        );

        let lp_supply = self.lp_token_supply().get();
        let liquidity = if lp_supply == 0u64 {
            (&first.amount * &second.amount).sqrt()
        } else {
            let first_share = &first.amount * &lp_supply / self.reserve(&first.token_identifier).get();
            let second_share =
                &second.amount * &lp_supply / self.reserve(&second.token_identifier).get();
            core::cmp::min(first_share, second_share)
        };
        require!(liquidity > 0u64, ERROR_INSUFFICIENT_LIQUIDITY);

        self.reserve(&first.token_identifier)
            .update(|reserve| *reserve += &first.amount);
        self.reserve(&second.token_identifier)
            .update(|reserve| *reserve += &second.amount);
        self.lp_token_supply().update(|supply| *supply += &liquidity);

        let lp_token = self.lp_token_identifier().get();
        self.send().esdt_local_mint(&lp_token, 0, &liquidity);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .single_esdt(&lp_token, 0, &liquidity)
            .transfer();

        EsdtTokenPayment::new(lp_token, 0, liquidity)
    }

    /// Burns the LP payment and pays both sides back pro rata, in pair order.
    #[payable]
    #[endpoint(removeLiquidity)]
    fn remove_liquidity(&self) -> MultiValue2<EsdtTokenPayment, EsdtTokenPayment> {
        let payment = self.call_value().single_esdt().clone();
        let lp_token = self.lp_token_identifier().get();
        require!(payment.token_identifier == lp_token, ERROR_INVALID_PAYMENT);
        require!(payment.amount > 0u64, ERROR_ZERO_AMOUNT);

        let lp_supply = self.lp_token_supply().get();
        require!(payment.amount <= lp_supply, ERROR_INSUFFICIENT_LIQUIDITY);

        let caller = self.blockchain().get_caller();
        let first = self.withdraw_share(&self.first_token_id().get(), &payment.amount, &lp_supply);
        let second =
            self.withdraw_share(&self.second_token_id().get(), &payment.amount, &lp_supply);

        self.lp_token_supply().set(&lp_supply - &payment.amount);
        self.send().esdt_local_burn(&lp_token, 0, &payment.amount);

        for share in [&first, &second] {
            if share.amount > 0u64 {
                self.tx()
                    .to(&caller)
                    .single_esdt(&share.token_identifier, 0, &share.amount)
                    .transfer();
            }
        }

        (first, second).into()
    }

    /// Donates a single pair token to the reserves without minting LP tokens.
    #[payable]
    #[endpoint(addReserve)]
    fn add_reserve(&self) {
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.token_identifier == self.first_token_id().get()
                || payment.token_identifier == self.second_token_id().get(),
            ERROR_INVALID_PAIR_TOKENS
        );

        self.reserve(&payment.token_identifier)
            .update(|reserve| *reserve += &payment.amount);
    }

    #[view(getReservesAndTotalSupply)]
    fn get_reserves_and_total_supply(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        (
            self.reserve(&self.first_token_id().get()).get(),
            self.reserve(&self.second_token_id().get()).get(),
            self.lp_token_supply().get(),
        )
            .into()
    }

    fn withdraw_share(
        &self,
        token: &TokenIdentifier,
        liquidity: &BigUint,
        lp_supply: &BigUint,
    ) -> EsdtTokenPayment {
        let mapper = self.reserve(token);
        let reserve = mapper.get();
        let amount = &reserve * liquidity / lp_supply;
        mapper.set(&reserve - &amount);

        EsdtTokenPayment::new(token.clone(), 0, amount)
    }

    #[view(getFirstTokenId)]
    #[storage_mapper("first_token_id")]
    fn first_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getSecondTokenId)]
    #[storage_mapper("second_token_id")]
    fn second_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getLpTokenIdentifier)]
    #[storage_mapper("lp_token_identifier")]
    fn lp_token_identifier(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getReserve)]
    #[storage_mapper("reserve")]
    fn reserve(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getTotalSupply)]
    #[storage_mapper("lp_token_supply")]
    fn lp_token_supply(&self) -> SingleValueMapper<BigUint>;
}
