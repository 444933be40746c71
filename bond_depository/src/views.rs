multiversx_sc::imports!();

use crate::{pricing, storage};
use common_errors::ERROR_INVALID_PRICE;
use common_structs::*;

#[multiversx_sc::module]
pub trait ViewsModule: storage::Storage + pricing::PricingModule + common_math::SharedMathModule {
    #[view(isLive)]
    fn is_live(&self, id: usize) -> bool {
        if !self.market_exists(id) {
            return false;
        }
        let now = self.blockchain().get_block_timestamp();
        self.markets().get(id).capacity > 0u64 && self.terms(id).get().conclusion > now
    }

    #[view(liveMarkets)]
    fn live_markets(&self) -> MultiValueEncoded<usize> {
        self.live_market_ids()
            .iter()
            .filter(|id| self.is_live(*id))
            .collect()
    }

    #[view(liveMarketsFor)]
    fn live_markets_for(&self, quote_token: TokenIdentifier) -> MultiValueEncoded<usize> {
        self.markets_for_quote(&quote_token)
            .iter()
            .filter(|id| self.is_live(*id))
            .collect()
    }

    #[view(marketsFor)]
    fn markets_for(&self, quote_token: TokenIdentifier) -> MultiValueEncoded<usize> {
        self.markets_for_quote(&quote_token).iter().collect()
    }

    #[view(getMarketsLength)]
    fn get_markets_length(&self) -> usize {
        self.markets().len()
    }

    #[view(getMarket)]
    fn get_market(&self, id: usize) -> Market<Self::Api> {
        self.require_market_exists(id);
        self.markets().get(id)
    }

    #[view(getTerms)]
    fn get_terms(&self, id: usize) -> Terms<Self::Api> {
        self.require_market_exists(id);
        self.terms(id).get()
    }

    #[view(getMetadata)]
    fn get_metadata(&self, id: usize) -> Metadata {
        self.require_market_exists(id);
        self.metadata(id).get()
    }

    #[view(getAdjustment)]
    fn get_adjustment(&self, id: usize) -> Adjustment<Self::Api> {
        self.require_market_exists(id);
        self.adjustment(id).get()
    }

    /// WAD price, in quote per native token, a deposit would get now.
    #[view(marketPrice)]
    fn market_price(&self, id: usize) -> BigUint {
        self.require_market_exists(id);
        self.market_price_of(id, self.blockchain().get_block_timestamp())
    }

    /// Native units `amount` quote units buy now.
    #[view(payoutFor)]
    fn payout_for(&self, amount: BigUint, id: usize) -> BigUint {
        let price = self.market_price(id);
        require!(price > 0u64, ERROR_INVALID_PRICE);

        self.payout_at_price(&amount, &price, self.metadata(id).get().quote_decimals)
    }

    /// WAD scaled current debt over the reference supply.
    #[view(debtRatio)]
    fn debt_ratio(&self, id: usize) -> BigUint {
        self.require_market_exists(id);
        let now = self.blockchain().get_block_timestamp();
        let supply = self.reference_supply_for(self.markets().get(id).quote_kind);

        self.ratio_from(&self.current_debt_of(id, now), &supply)
    }

    #[view(currentDebt)]
    fn current_debt(&self, id: usize) -> BigUint {
        self.require_market_exists(id);
        self.current_debt_of(id, self.blockchain().get_block_timestamp())
    }

    #[view(debtDecay)]
    fn debt_decay(&self, id: usize) -> BigUint {
        self.require_market_exists(id);
        self.debt_decay_at(
            &self.markets().get(id),
            &self.metadata(id).get(),
            self.blockchain().get_block_timestamp(),
        )
    }

    #[view(currentControlVariable)]
    fn current_control_variable(&self, id: usize) -> BigUint {
        self.require_market_exists(id);
        self.current_control_variable_of(id, self.blockchain().get_block_timestamp())
    }
}
