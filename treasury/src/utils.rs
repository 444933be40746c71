multiversx_sc::imports!();

use crate::storage;
use common_errors::*;
use common_structs::*;

#[multiversx_sc::module]
pub trait TreasuryUtilsModule:
    storage::Storage + common_valuation::ValuationModule + common_math::SharedMathModule
{
    /// Value of `amount` of a registered token, in native units.
    fn token_value(&self, token: &TokenIdentifier, amount: &BigUint) -> BigUint {
        let config_mapper = self.asset_config(token);
        require!(!config_mapper.is_empty(), ERROR_ASSET_NOT_REGISTERED);

        let base_value = self.to_decimal_wad(self.base_value().get());
        let value = self.valuate(&config_mapper.get(), amount, &base_value);
        value.into_raw_units().clone()
    }

    /// `totalReserves + totalDebt - nativeSupply`, zero when the supply is not fully backed
    fn excess_reserves_raw(&self) -> BigUint {
        let backing = self.total_reserves().get() + self.total_debt().get();
        self.saturating_sub(&backing, &self.native_supply().get())
    }

    fn has_permission(&self, category: PermissionCategory, principal: &Principal<Self::Api>) -> bool {
        let mapper = self.permission(category, principal);
        !mapper.is_empty() && mapper.get()
    }

    fn is_reserve_token(&self, token: &TokenIdentifier) -> bool {
        self.has_permission(
            PermissionCategory::ReserveToken,
            &Principal::Token(token.clone()),
        )
    }

    fn is_liquidity_token(&self, token: &TokenIdentifier) -> bool {
        self.has_permission(
            PermissionCategory::LiquidityToken,
            &Principal::Token(token.clone()),
        )
    }

    fn require_account_permission(&self, category: PermissionCategory, account: &ManagedAddress) {
        require!(
            self.has_permission(category, &Principal::Account(account.clone())),
            ERROR_NOT_APPROVED
        );
    }

    /// Mints native units into the treasury balance and accounts them in the supply.
    fn mint_native(&self, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.send()
            .esdt_local_mint(&self.native_token().get(), 0, amount);
        self.native_supply().update(|supply| *supply += amount);
    }

    /// Burns native units held by the treasury and removes them from the supply.
    fn burn_native(&self, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.send()
            .esdt_local_burn(&self.native_token().get(), 0, amount);
        self.native_supply()
            .update(|supply| *supply = self.saturating_sub(supply, amount));
    }

    fn send_token(&self, to: &ManagedAddress, token: &TokenIdentifier, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.tx().to(to).single_esdt(token, 0, amount).transfer();
    }

    fn reduce_reserves(&self, value: &BigUint) {
        let total_reserves = self.total_reserves().get();
        require!(&total_reserves >= value, ERROR_INSUFFICIENT_RESERVES);
        self.total_reserves().set(total_reserves - value);
    }
}
