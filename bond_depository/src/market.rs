multiversx_sc::imports!();

use crate::{notes, pricing, storage};
use common_constants::DEBT_BUFFER_PRECISION;
use common_errors::*;
use common_proxies::proxy_treasury;
use common_structs::*;

#[multiversx_sc::module]
pub trait MarketModule:
    storage::Storage
    + pricing::PricingModule
    + notes::NoteKeeperModule
    + common_access::AccessModule
    + common_math::SharedMathModule
    + common_events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Opens a bond market selling native tokens for `quote_token`.
    ///
    /// The quote has to be registered in the treasury, its kind matching the reserve and
    /// liquidity flags. The initial control variable is chosen so the first price equals
    /// `initial_price`.
    ///
    /// # Returns
    /// - The id of the new market.
    #[endpoint(create)]
    fn create(&self, quote_token: TokenIdentifier, params: MarketParams<Self::Api>) -> usize {
        let ctx = self.load_authority();
        self.require_policy(&ctx);

        let now = self.blockchain().get_block_timestamp();
        require!(
            params.capacity > 0u64 && params.initial_price > 0u64,
            ERROR_INVALID_MARKET_PARAMS
        );
        require!(params.conclusion > now, ERROR_INVALID_CONCLUSION);
        require!(
            !(params.quote_is_reserve && params.quote_is_liquidity),
            ERROR_INVALID_QUOTE_KIND
        );

        let length = params.conclusion - now;
        require!(
            params.deposit_interval > 0
                && params.tune_interval > 0
                && params.deposit_interval <= length,
            ERROR_INVALID_INTERVALS
        );
        require!(
            params.fixed_term || params.vesting > now,
            ERROR_INVALID_MARKET_PARAMS
        );

        let quote_kind = QuoteKind::from_flags(params.quote_is_reserve, params.quote_is_liquidity);
        let quote_decimals = self.quote_decimals_for(&quote_token, quote_kind);

        let target_debt = if params.capacity_in_quote {
            self.payout_at_price(&params.capacity, &params.initial_price, quote_decimals)
        } else {
            params.capacity.clone()
        };
        require!(target_debt > 0u64, ERROR_INVALID_MARKET_PARAMS);

        let max_payout = self.mul_div_floor(
            &target_debt,
            &BigUint::from(params.deposit_interval),
            &BigUint::from(length),
        );
        let max_debt = &target_debt
            + &self.mul_div_floor(
                &target_debt,
                &BigUint::from(params.debt_buffer),
                &BigUint::from(DEBT_BUFFER_PRECISION),
            );
        let control_variable = self.mul_div_floor(
            &params.initial_price,
            &self.reference_supply_for(quote_kind),
            &target_debt,
        );

        let id = self.markets().push(&Market {
            quote_token: quote_token.clone(),
            quote_kind,
            capacity_in_quote: params.capacity_in_quote,
            capacity: params.capacity,
            total_debt: target_debt,
            max_payout,
            sold: BigUint::zero(),
            purchased: BigUint::zero(),
        });
        self.terms(id).set(Terms {
            fixed_term: params.fixed_term,
            control_variable: control_variable.clone(),
            vesting: params.vesting,
            conclusion: params.conclusion,
            max_debt,
        });
        self.metadata(id).set(Metadata {
            last_tune: now,
            last_decay: now,
            length,
            deposit_interval: params.deposit_interval,
            tune_interval: params.tune_interval,
            quote_decimals,
        });
        self.adjustment(id).set(Adjustment::default());

        self.live_market_ids().insert(id);
        self.markets_for_quote(&quote_token).insert(id);

        self.market_created_event(id, &quote_token, &params.initial_price, &control_variable);
        id
    }

    /// Stops a market immediately.
    #[endpoint(close)]
    fn close(&self, id: usize) {
        let ctx = self.load_authority();
        self.require_policy(&ctx);
        self.require_market_exists(id);

        let now = self.blockchain().get_block_timestamp();
        self.terms(id).update(|terms| terms.conclusion = now);
        self.close_market(id);
    }

    /// Buys a bond with the quote payment.
    ///
    /// # Arguments
    /// - `id`: Market id.
    /// - `max_price`: Highest WAD price the buyer accepts.
    /// - `user`: Owner of the note.
    /// - `opt_referrer`: Front end to credit, if whitelisted.
    ///
    /// # Returns
    /// - `(payout, expiry, index)`: Native units owed, maturity timestamp and note index.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(
        &self,
        id: usize,
        max_price: BigUint,
        user: ManagedAddress,
        opt_referrer: OptionalValue<ManagedAddress>,
    ) -> MultiValue3<BigUint, u64, u64> {
        let payment = self.call_value().single_esdt().clone();
        let now = self.blockchain().get_block_timestamp();
        self.require_market_exists(id);

        self.decay(id, now);

        let mut market = self.markets().get(id);
        let terms = self.terms(id).get();
        let metadata = self.metadata(id).get();

        require!(now < terms.conclusion, ERROR_MARKET_CONCLUDED);
        require!(market.capacity > 0u64, ERROR_MARKET_CLOSED);
        self.require_not_paused();
        require!(!user.is_zero(), ERROR_ZERO_ADDRESS);
        require!(
            payment.token_identifier == market.quote_token,
            ERROR_WRONG_QUOTE_TOKEN
        );
        require!(payment.amount > 0u64, ERROR_ZERO_AMOUNT);

        let price = self.market_price_of(id, now);
        require!(price > 0u64, ERROR_INVALID_PRICE);
        require!(price <= max_price, ERROR_MAX_PRICE);

        let payout = self.payout_at_price(&payment.amount, &price, metadata.quote_decimals);
        require!(payout > 0u64, ERROR_ZERO_AMOUNT);
        require!(payout <= market.max_payout, ERROR_MAX_SIZE);

        let spent = if market.capacity_in_quote {
            &payment.amount
        } else {
            &payout
        };
        require!(&market.capacity >= spent, ERROR_CAPACITY_EXCEEDED);

        market.capacity -= spent;
        market.purchased += &payment.amount;
        market.sold += &payout;
        market.total_debt += &payout;
        let breaker_tripped = market.total_debt > terms.max_debt;
        self.markets().set(id, &market);

        let expiry = terms.expiry_for(now);
        let index = self.add_note(&user, &payout, expiry, id);

        let ctx = self.load_authority();
        let fees = self.accrue_rewards(&payout, opt_referrer.into_option(), &ctx.vault);

        if breaker_tripped {
            self.close_market(id);
        } else {
            self.tune(id, now);
        }

        let value = self.settle_with_treasury(&market, &payment, &(&payout + &fees));
        self.bond_purchased_event(id, &user, &payment.amount, &price, &payout, &value);

        (payout, expiry, index).into()
    }

    /// Sets the supply used as debt ratio denominator for non-reserve quotes, and as
    /// fallback while the treasury supply is zero.
    #[endpoint(setReferenceSupply)]
    fn set_reference_supply(&self, supply: BigUint) {
        let ctx = self.load_authority();
        self.require_policy(&ctx);

        self.reference_supply().set(supply);
    }

    /// Retargets max payout and control variable to sell the remaining capacity evenly over
    /// the remaining time. Increases apply at once, decreases over one tune interval.
    fn tune(&self, id: usize, now: u64) {
        let metadata_mapper = self.metadata(id);
        let mut metadata = metadata_mapper.get();
        if now < metadata.last_tune + metadata.tune_interval {
            return;
        }

        let mut market = self.markets().get(id);
        let mut terms = self.terms(id).get();
        let time_remaining = terms.conclusion.saturating_sub(now);
        let price = self.market_price_of(id, now);
        if time_remaining == 0 || price == 0u64 {
            return;
        }

        let capacity = if market.capacity_in_quote {
            self.payout_at_price(&market.capacity, &price, metadata.quote_decimals)
        } else {
            market.capacity.clone()
        };
        let remaining = BigUint::from(time_remaining);
        let target_debt =
            self.mul_div_floor(&capacity, &BigUint::from(metadata.length), &remaining);
        if target_debt == 0u64 {
            return;
        }

        market.max_payout =
            self.mul_div_floor(&capacity, &BigUint::from(metadata.deposit_interval), &remaining);
        self.markets().set(id, &market);

        let new_control_variable = self.mul_div_floor(
            &price,
            &self.reference_supply_for(market.quote_kind),
            &target_debt,
        );
        self.market_tuned_event(id, &terms.control_variable, &new_control_variable);

        if new_control_variable >= terms.control_variable {
            terms.control_variable = new_control_variable;
            self.terms(id).set(&terms);
        } else {
            self.adjustment(id).set(Adjustment {
                change: &terms.control_variable - &new_control_variable,
                last_adjustment: now,
                time_to_adjusted: metadata.tune_interval,
                active: true,
            });
        }

        metadata.last_tune = now;
        metadata_mapper.set(&metadata);
    }

    /// Hands the quote to the treasury and receives `claimed` native units for the notes.
    /// Returns the treasury valuation of the quote.
    fn settle_with_treasury(
        &self,
        market: &Market<Self::Api>,
        payment: &EsdtTokenPayment,
        claimed: &BigUint,
    ) -> BigUint {
        let treasury = self.treasury().get();
        let value = self
            .tx()
            .to(&treasury)
            .typed(proxy_treasury::TreasuryProxy)
            .value_of(&payment.token_identifier, &payment.amount)
            .returns(ReturnsResult)
            .sync_call_readonly();

        if market.quote_kind.is_backing() {
            self.tx()
                .to(&treasury)
                .typed(proxy_treasury::TreasuryProxy)
                .deposit(claimed)
                .single_esdt(&payment.token_identifier, 0, &payment.amount)
                .sync_call();
        } else {
            self.tx()
                .to(&treasury)
                .single_esdt(&payment.token_identifier, 0, &payment.amount)
                .transfer();
            self.tx()
                .to(&treasury)
                .typed(proxy_treasury::TreasuryProxy)
                .mint(self.blockchain().get_sc_address(), claimed)
                .sync_call();
        }

        value
    }

    fn close_market(&self, id: usize) {
        let mut market = self.markets().get(id);
        market.capacity = BigUint::zero();
        self.markets().set(id, &market);
        self.live_market_ids().swap_remove(&id);

        self.market_closed_event(id);
    }

    fn quote_decimals_for(&self, quote_token: &TokenIdentifier, quote_kind: QuoteKind) -> usize {
        let config_mapper = self.treasury_asset_config(self.treasury().get(), quote_token);
        require!(!config_mapper.is_empty(), ERROR_ASSET_NOT_REGISTERED);

        let config = config_mapper.get();
        let registered_kind = QuoteKind::from_flags(config.is_reserve(), config.is_liquidity());
        require!(registered_kind == quote_kind, ERROR_INVALID_QUOTE_KIND);

        config.decimals
    }
}
