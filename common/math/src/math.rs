#![no_std]

use core::cmp::Ordering;

use common_constants::{NATIVE_DECIMALS, WAD_PRECISION};

multiversx_sc::imports!();

/// Fixed point helpers shared by every contract.
///
/// Everything that prices, pays out or values reserves rounds toward zero, so a result
/// can only be short of the exact value by less than one unit of its precision.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `floor(a * b / c)` with a single truncation
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        (a * b) / c
    }

    fn rescale_floor(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let factor = self.pow10(old_precision - new_precision);
                ManagedDecimal::from_raw_units(raw_value / &factor, new_precision)
            },
            Ordering::Greater => {
                let factor = self.pow10(new_precision - old_precision);
                ManagedDecimal::from_raw_units(raw_value * &factor, new_precision)
            },
        }
    }

    fn saturating_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    fn min_biguint(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }

    fn pow10(&self, exp: NumDecimals) -> BigUint {
        BigUint::from(10u64).pow(exp as u32)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_native(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, NATIVE_DECIMALS)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }
}
