#![no_std]

multiversx_sc::imports!();

pub mod control;
pub mod storage;

pub use common_errors::*;
pub use common_structs::*;

use common_constants::BPS;

/// Decides how much native supply the treasury adds to, or pulls out of, a bound pool.
///
/// The controller never moves funds: `compute` is read by the treasury, which applies the
/// correction and reports back through `recordSample`.
#[multiversx_sc::contract]
pub trait SupplyController:
    control::ControlModule
    + storage::Storage
    + common_access::AccessModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// # Arguments
    /// - `authority`: Address of the authority contract.
    /// - `treasury`: Treasury applying the corrections. Its `native_supply` is the supply
    ///   the target ratio is computed against.
    /// - `pair`: Pool holding the native token.
    /// - `native_token`: Native token, one of the two pool tokens.
    #[init]
    fn init(
        &self,
        authority: ManagedAddress,
        treasury: ManagedAddress,
        pair: ManagedAddress,
        native_token: TokenIdentifier,
    ) {
        require!(
            !authority.is_zero() && !treasury.is_zero() && !pair.is_zero(),
            ERROR_ZERO_ADDRESS
        );
        require!(
            self.pair_first_token(pair.clone()).get() == native_token
                || self.pair_second_token(pair.clone()).get() == native_token,
            ERROR_NATIVE_NOT_IN_PAIR
        );

        self.authority().set(authority);
        self.treasury().set(treasury);
        self.pair().set(pair);
        self.native_token().set(native_token);
        self.kp().set(BPS as u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// # Arguments
    /// - `loss_ratio`: Target native share of the supply, in basis points.
    /// - `cf`: Width of the band below the target, in basis points.
    /// - `cc`: Width of the band above the target, in basis points.
    /// - `sampling_interval`: Minimum seconds between two corrections.
    #[endpoint(setSupplyControlParams)]
    fn set_supply_control_params(
        &self,
        loss_ratio: u64,
        cf: u64,
        cc: u64,
        sampling_interval: u64,
    ) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);

        let bps = BPS as u64;
        require!(loss_ratio > 0 && loss_ratio <= bps, ERROR_INVALID_LOSS_RATIO);
        require!(cf <= loss_ratio && loss_ratio + cc <= bps, ERROR_INVALID_BANDS);
        require!(sampling_interval > 0, ERROR_INVALID_SAMPLING_INTERVAL);

        let params = SupplyControlParams {
            loss_ratio,
            cf,
            cc,
            sampling_interval,
        };
        self.params().set(&params);
        self.params_set().set(true);

        self.supply_control_params_event(&params);
    }

    #[endpoint(setPCoefficient)]
    fn set_p_coefficient(&self, kp: u64) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(kp <= BPS as u64, ERROR_INVALID_KP);

        self.kp().set(kp);
        self.supply_control_kp_event(kp);
    }

    #[endpoint(enableSupplyControl)]
    fn enable_supply_control(&self) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(!self.enabled().get(), ERROR_CONTROL_IN_PROGRESS);
        require!(self.params_set().get(), ERROR_PARAMS_NOT_SET);

        self.enabled().set(true);
        self.supply_control_toggled_event(true);
    }

    /// Stops the controller. Parameters have to be set again before the next enable.
    #[endpoint(disableSupplyControl)]
    fn disable_supply_control(&self) {
        let ctx = self.load_authority();
        self.require_governor_or_guardian(&ctx);
        require!(self.enabled().get(), ERROR_NO_CONTROL_IN_PROGRESS);

        self.enabled().set(false);
        self.params_set().set(false);
        self.supply_control_toggled_event(false);
    }

    /// Correction to apply now, `(base_amount, lp_amount, is_burn)`.
    ///
    /// Zero while disabled, within the sampling interval of the last correction, or while
    /// the pool sits inside the band.
    #[view(compute)]
    fn compute(&self) -> MultiValue3<BigUint, BigUint, bool> {
        let correction = self.current_correction();
        (
            correction.base_amount,
            correction.lp_amount,
            correction.is_burn,
        )
            .into()
    }

    #[endpoint(recordSample)]
    fn record_sample(&self) {
        require!(
            self.blockchain().get_caller() == self.treasury().get(),
            ERROR_NOT_TREASURY
        );

        let timestamp = self.blockchain().get_block_timestamp();
        self.last_sample().set(timestamp);
        self.supply_control_sample_event(timestamp);
    }

    #[view(lossRatio)]
    fn loss_ratio(&self) -> u64 {
        if self.params().is_empty() {
            return 0;
        }
        self.params().get().loss_ratio
    }

    /// Current native share of the supply held by the pool, in basis points.
    #[view(getPoolRatio)]
    fn get_pool_ratio(&self) -> BigUint {
        self.pool_ratio(&self.native_supply(), &self.native_reserve())
    }

    fn current_correction(&self) -> SupplyCorrection<Self::Api> {
        if !self.enabled().get() {
            return SupplyCorrection::none();
        }

        let params = self.params().get();
        let now = self.blockchain().get_block_timestamp();
        if now < self.last_sample().get() + params.sampling_interval {
            return SupplyCorrection::none();
        }

        self.correction_for(
            &params,
            self.kp().get(),
            &self.native_supply(),
            &self.native_reserve(),
            &self.pair_lp_supply(self.pair().get()).get(),
        )
    }

    fn native_supply(&self) -> BigUint {
        self.treasury_native_supply(self.treasury().get()).get()
    }

    fn native_reserve(&self) -> BigUint {
        self.pair_reserve(self.pair().get(), &self.native_token().get())
            .get()
    }
}
