multiversx_sc::imports!();

use common_constants::BPS;
use common_structs::{SupplyControlParams, SupplyCorrection};

/// Proportional controller over the native share of the bound pool.
///
/// The band is `[loss_ratio - cf, loss_ratio + cc]` basis points of the native supply.
/// Outside of it, the distance to the target is scaled by `kp / BPS` and returned as a
/// mint (pool too thin) or a burn (pool too deep) correction.
#[multiversx_sc::module]
pub trait ControlModule: common_math::SharedMathModule {
    fn correction_for(
        &self,
        params: &SupplyControlParams,
        kp: u64,
        native_supply: &BigUint,
        current_reserve: &BigUint,
        lp_supply: &BigUint,
    ) -> SupplyCorrection<Self::Api> {
        if *native_supply == 0u64 {
            return SupplyCorrection::none();
        }

        let bps = BigUint::from(BPS);
        let target = self.mul_div_floor(native_supply, &BigUint::from(params.loss_ratio), &bps);
        let floor_band = self.mul_div_floor(native_supply, &BigUint::from(params.cf), &bps);
        let ceiling_band = self.mul_div_floor(native_supply, &BigUint::from(params.cc), &bps);

        let (distance, is_burn) = if current_reserve + &floor_band < target {
            (&target - current_reserve, false)
        } else if *current_reserve > &target + &ceiling_band {
            (current_reserve - &target, true)
        } else {
            return SupplyCorrection::none();
        };

        let base_amount = self.mul_div_floor(&distance, &BigUint::from(kp), &bps);
        if base_amount == 0u64 {
            return SupplyCorrection::none();
        }

        let lp_amount = if is_burn {
            let doubled_reserve = current_reserve * &BigUint::from(2u64);
            self.mul_div_floor(&base_amount, lp_supply, &doubled_reserve)
        } else {
            BigUint::zero()
        };

        SupplyCorrection {
            base_amount,
            lp_amount,
            is_burn,
        }
    }

    /// Native reserve of the pool as a share of the supply, in basis points.
    fn pool_ratio(&self, native_supply: &BigUint, current_reserve: &BigUint) -> BigUint {
        if *native_supply == 0u64 {
            return BigUint::zero();
        }
        self.mul_div_floor(current_reserve, &BigUint::from(BPS), native_supply)
    }
}
