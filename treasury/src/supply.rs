multiversx_sc::imports!();

use crate::{storage, utils};
use common_proxies::{proxy_pair, proxy_supply_controller};
use common_structs::*;

/// Keeps the native side of a bound pool around its target share of the supply.
///
/// The controller bound to a liquidity token decides the correction, the treasury executes
/// it with its own balances: it never reverts when those balances only allow a partial
/// correction.
#[multiversx_sc::module]
pub trait SupplyRatioModule:
    storage::Storage
    + utils::TreasuryUtilsModule
    + common_valuation::ValuationModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    #[endpoint(updateSupplyRatio)]
    fn update_supply_ratio(&self, liquidity_token: TokenIdentifier) {
        self.apply_supply_correction(&liquidity_token);
    }

    fn apply_supply_correction(&self, liquidity_token: &TokenIdentifier) {
        let controller_mapper = self.supply_controller(liquidity_token);
        if controller_mapper.is_empty() || !self.is_liquidity_token(liquidity_token) {
            return;
        }
        let controller = controller_mapper.get();

        let correction = self.fetch_correction(&controller);
        if correction.is_none() {
            return;
        }

        let pair = self.asset_config(liquidity_token).get().source;
        let (base_amount, lp_amount) = if correction.is_burn {
            self.contract_supply(liquidity_token, &pair, &correction.lp_amount)
        } else {
            (self.expand_supply(&pair, &correction.base_amount), BigUint::zero())
        };

        self.tx()
            .to(&controller)
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .record_sample()
            .sync_call();

        self.supply_ratio_updated_event(
            liquidity_token,
            &base_amount,
            &lp_amount,
            correction.is_burn,
        );
    }

    fn fetch_correction(&self, controller: &ManagedAddress) -> SupplyCorrection<Self::Api> {
        let (base_amount, lp_amount, is_burn) = self
            .tx()
            .to(controller)
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .compute()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple();

        SupplyCorrection {
            base_amount,
            lp_amount,
            is_burn,
        }
    }

    /// Mints native units, capped by the excess reserves, and donates them to the pool.
    /// Returns the amount added.
    fn expand_supply(&self, pair: &ManagedAddress, base_amount: &BigUint) -> BigUint {
        let amount = self.min_biguint(base_amount.clone(), self.excess_reserves_raw());
        if amount == 0u64 {
            return amount;
        }

        self.mint_native(&amount);
        self.tx()
            .to(pair)
            .typed(proxy_pair::PairMockProxy)
            .add_reserve()
            .single_esdt(&self.native_token().get(), 0, &amount)
            .sync_call();

        amount
    }

    /// Pulls liquidity out of the pool and burns the native side received.
    /// Returns the native amount burned and the LP amount removed.
    fn contract_supply(
        &self,
        liquidity_token: &TokenIdentifier,
        pair: &ManagedAddress,
        lp_amount: &BigUint,
    ) -> (BigUint, BigUint) {
        let lp_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(liquidity_token.clone()), 0);
        let lp_amount = self.min_biguint(lp_amount.clone(), lp_balance);
        if lp_amount == 0u64 {
            return (BigUint::zero(), lp_amount);
        }

        let lp_value = self.token_value(liquidity_token, &lp_amount);

        let (first, second) = self
            .tx()
            .to(pair)
            .typed(proxy_pair::PairMockProxy)
            .remove_liquidity()
            .single_esdt(liquidity_token, 0, &lp_amount)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        let native_token = self.native_token().get();
        let mut burned = BigUint::zero();
        let mut credited = BigUint::zero();
        for payment in [first, second] {
            if payment.token_identifier == native_token {
                self.burn_native(&payment.amount);
                burned += &payment.amount;
            } else if payment.amount > 0u64 && self.is_reserve_token(&payment.token_identifier) {
                credited += self.token_value(&payment.token_identifier, &payment.amount);
            }
        }

        self.total_reserves()
            .update(|reserves| *reserves = self.saturating_sub(reserves, &lp_value) + &credited);

        (burned, lp_amount)
    }
}
