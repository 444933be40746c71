multiversx_sc::imports!();

use crate::storage;
use common_constants::{NATIVE_DECIMALS, WAD, WAD_PRECISION};
use common_errors::{ERROR_MARKET_NOT_FOUND, ERROR_ZERO_REFERENCE_SUPPLY};
use common_structs::*;

/// Bond pricing: `price = control_variable * debt_ratio`.
///
/// Debt decays linearly over the market length and the control variable moves toward its
/// tuned value, so both are pure functions of the stored state and the current time. The
/// stored state only catches up in `decay`, at the start of every deposit.
#[multiversx_sc::module]
pub trait PricingModule: storage::Storage + common_math::SharedMathModule {
    /// Debt repaid since the last decay: `total_debt * elapsed / length`, capped at the
    /// total debt.
    fn debt_decay_at(&self, market: &Market<Self::Api>, metadata: &Metadata, now: u64) -> BigUint {
        let elapsed = now.saturating_sub(metadata.last_decay);
        if elapsed >= metadata.length {
            return market.total_debt.clone();
        }

        self.mul_div_floor(
            &market.total_debt,
            &BigUint::from(elapsed),
            &BigUint::from(metadata.length),
        )
    }

    /// Returns `(adjust_by, seconds_since, still_active)` for an active adjustment.
    fn control_decay_at(&self, adjustment: &Adjustment<Self::Api>, now: u64) -> (BigUint, u64, bool) {
        let seconds_since = now.saturating_sub(adjustment.last_adjustment);
        let still_active = seconds_since < adjustment.time_to_adjusted;
        let adjust_by = if still_active {
            self.mul_div_floor(
                &adjustment.change,
                &BigUint::from(seconds_since),
                &BigUint::from(adjustment.time_to_adjusted),
            )
        } else {
            adjustment.change.clone()
        };

        (adjust_by, seconds_since, still_active)
    }

    /// Native units bought by `amount` quote units at `price`, truncated.
    fn payout_at_price(&self, amount: &BigUint, price: &BigUint, quote_decimals: usize) -> BigUint {
        let numerator = amount * &self.pow10(NATIVE_DECIMALS + WAD_PRECISION);
        let denominator = self.pow10(quote_decimals) * price;
        numerator / denominator
    }

    fn price_from(&self, control_variable: &BigUint, debt: &BigUint, supply: &BigUint) -> BigUint {
        let debt_ratio = self.ratio_from(debt, supply);
        self.mul_div_floor(control_variable, &debt_ratio, &BigUint::from(WAD))
    }

    /// WAD scaled `debt / supply`
    fn ratio_from(&self, debt: &BigUint, supply: &BigUint) -> BigUint {
        self.mul_div_floor(debt, &BigUint::from(WAD), supply)
    }

    /// Denominator of the debt ratio.
    ///
    /// The native supply tracked by the treasury, unless the quote is not a backing asset and
    /// a reference supply was configured. Falls back to whichever of the two is non-zero.
    fn reference_supply_for(&self, quote_kind: QuoteKind) -> BigUint {
        let configured = self.reference_supply().get();
        let treasury_supply = self.treasury_native_supply(self.treasury().get()).get();

        let supply = if (!quote_kind.is_backing() && configured > 0u64) || treasury_supply == 0u64 {
            configured
        } else {
            treasury_supply
        };
        require!(supply > 0u64, ERROR_ZERO_REFERENCE_SUPPLY);

        supply
    }

    fn current_debt_of(&self, id: usize, now: u64) -> BigUint {
        let market = self.markets().get(id);
        let decay = self.debt_decay_at(&market, &self.metadata(id).get(), now);
        market.total_debt - decay
    }

    fn current_control_variable_of(&self, id: usize, now: u64) -> BigUint {
        let control_variable = self.terms(id).get().control_variable;
        let adjustment = self.adjustment(id).get();
        if !adjustment.active {
            return control_variable;
        }

        let (adjust_by, _, _) = self.control_decay_at(&adjustment, now);
        self.saturating_sub(&control_variable, &adjust_by)
    }

    fn market_price_of(&self, id: usize, now: u64) -> BigUint {
        let market = self.markets().get(id);
        let supply = self.reference_supply_for(market.quote_kind);

        self.price_from(
            &self.current_control_variable_of(id, now),
            &self.current_debt_of(id, now),
            &supply,
        )
    }

    /// Brings the stored debt and control variable up to `now`.
    fn decay(&self, id: usize, now: u64) {
        let mut market = self.markets().get(id);
        let metadata_mapper = self.metadata(id);
        let mut metadata = metadata_mapper.get();

        let decay = self.debt_decay_at(&market, &metadata, now);
        market.total_debt -= decay;
        metadata.last_decay = now;
        self.markets().set(id, &market);
        metadata_mapper.set(&metadata);

        let adjustment_mapper = self.adjustment(id);
        let mut adjustment = adjustment_mapper.get();
        if !adjustment.active {
            return;
        }

        let (adjust_by, seconds_since, still_active) = self.control_decay_at(&adjustment, now);
        self.terms(id).update(|terms| {
            terms.control_variable = self.saturating_sub(&terms.control_variable, &adjust_by)
        });

        if still_active {
            adjustment.change -= &adjust_by;
            adjustment.time_to_adjusted -= seconds_since;
            adjustment.last_adjustment = now;
        } else {
            adjustment.active = false;
        }
        adjustment_mapper.set(&adjustment);
    }

    fn market_exists(&self, id: usize) -> bool {
        id > 0 && id <= self.markets().len()
    }

    fn require_market_exists(&self, id: usize) {
        require!(self.market_exists(id), ERROR_MARKET_NOT_FOUND);
    }
}
