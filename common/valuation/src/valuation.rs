#![no_std]

use common_constants::{NATIVE_DECIMALS, WAD_PRECISION};
use common_errors::{ERROR_INVALID_PRICE, ERROR_NO_LP_SUPPLY};
use common_proxies::{proxy_pair, proxy_twap};
use common_structs::{AssetConfig, AssetKind};

multiversx_sc::imports!();

/// Converts token amounts into native units, whatever the precision of the token.
///
/// All results carry `NATIVE_DECIMALS` and are truncated once, at the very end of each
/// formula, so no precision is lost to intermediate rescaling.
#[multiversx_sc::module]
pub trait ValuationModule: common_math::SharedMathModule {
    /// Values `amount` of any registered token.
    ///
    /// # Arguments
    /// - `config`: How the token is valued (reserve, liquidity or priced).
    /// - `amount`: Raw token amount, interpreted with `config.decimals`.
    /// - `base_value`: WAD scaled base valuation unit.
    fn valuate(
        &self,
        config: &AssetConfig<Self::Api>,
        amount: &BigUint,
        base_value: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let amount_dec = self.to_decimal(amount.clone(), config.decimals);
        match config.kind {
            AssetKind::Reserve => self.reserve_value(&amount_dec, base_value),
            AssetKind::Liquidity => {
                let (first_reserve, second_reserve, lp_supply) =
                    self.get_pair_reserves(&config.source);
                let total_value = self.lp_total_value(
                    &self.to_decimal(first_reserve, config.first_decimals),
                    &self.to_decimal(second_reserve, config.second_decimals),
                    base_value,
                );
                self.lp_share_value(&total_value, amount, &lp_supply)
            },
            AssetKind::Priced => {
                let price = self.get_twap_price(&config.source, &config.pool);
                self.reserve_value(&amount_dec, &self.to_decimal_wad(price))
            },
        }
    }

    /// `amount * rate`, rescaled from the token precision to native precision.
    /// `rate` is WAD scaled native per whole token.
    fn reserve_value(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let rate_wad = self.rescale_floor(rate, WAD_PRECISION);
        let numerator =
            amount.into_raw_units() * &self.pow10(NATIVE_DECIMALS) * rate_wad.into_raw_units();
        let denominator = self.pow10(amount.scale()) * self.pow10(WAD_PRECISION);

        self.to_decimal_native(numerator / denominator)
    }

    /// Value of a whole constant-product pool: `2 * sqrt(r0 * r1 / base_value)`.
    ///
    /// Both reserves are brought to native precision inside one product, so the only
    /// truncations are on the invariant and on its square root.
    fn lp_total_value(
        &self,
        first_reserve: &ManagedDecimal<Self::Api, NumDecimals>,
        second_reserve: &ManagedDecimal<Self::Api, NumDecimals>,
        base_value: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let base_value_wad = self.rescale_floor(base_value, WAD_PRECISION);

        // k carries 2 * NATIVE_DECIMALS
        let numerator = first_reserve.into_raw_units()
            * second_reserve.into_raw_units()
            * self.pow10(2 * NATIVE_DECIMALS)
            * self.pow10(WAD_PRECISION);
        let denominator = self.pow10(first_reserve.scale() + second_reserve.scale())
            * base_value_wad.into_raw_units();
        let k = numerator / denominator;

        self.to_decimal_native(k.sqrt() * BigUint::from(2u64))
    }

    /// Share of the pool value owned by `amount` out of `lp_supply` LP tokens.
    fn lp_share_value(
        &self,
        total_value: &ManagedDecimal<Self::Api, NumDecimals>,
        amount: &BigUint,
        lp_supply: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(*lp_supply > 0u64, ERROR_NO_LP_SUPPLY);
        let native_total = self.rescale_floor(total_value, NATIVE_DECIMALS);

        self.to_decimal_native(self.mul_div_floor(
            native_total.into_raw_units(),
            amount,
            lp_supply,
        ))
    }

    fn get_pair_reserves(&self, pair: &ManagedAddress) -> (BigUint, BigUint, BigUint) {
        self.tx()
            .to(pair)
            .typed(proxy_pair::PairMockProxy)
            .get_reserves_and_total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple()
    }

    fn get_twap_price(&self, feed: &ManagedAddress, pool: &ManagedAddress) -> BigUint {
        let price = self
            .tx()
            .to(feed)
            .typed(proxy_twap::TwapMockProxy)
            .price_of(pool)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(price > 0u64, ERROR_INVALID_PRICE);
        price
    }
}
