multiversx_sc::imports!();

use crate::{storage, supply, utils};
use common_errors::*;
use common_structs::*;

#[multiversx_sc::module]
pub trait ReservesModule:
    storage::Storage
    + utils::TreasuryUtilsModule
    + supply::SupplyRatioModule
    + common_access::AccessModule
    + common_valuation::ValuationModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Deposits a reserve or liquidity token and mints `claimed` native units to the caller.
    ///
    /// Excess reserves move by `value - claimed`. The claim is not bounded here, depositors
    /// are trusted through their permission.
    ///
    /// # Payment
    /// - A single ESDT, an enabled reserve or liquidity token.
    ///
    /// # Returns
    /// - The minted native payment, possibly zero.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, claimed: BigUint) -> EsdtTokenPayment {
        let payment = self.call_value().single_esdt().clone();
        let caller = self.blockchain().get_caller();
        require!(payment.amount > 0u64, ERROR_ZERO_AMOUNT);

        let token = &payment.token_identifier;
        let is_liquidity = self.is_liquidity_token(token);
        if self.is_reserve_token(token) {
            self.require_account_permission(PermissionCategory::ReserveDepositor, &caller);
        } else if is_liquidity {
            self.require_account_permission(PermissionCategory::LiquidityDepositor, &caller);
        } else {
            sc_panic!(ERROR_INVALID_TOKEN);
        }

        let value = self.token_value(token, &payment.amount);

        self.total_reserves().update(|reserves| *reserves += &value);
        self.mint_native(&claimed);

        self.reserves_deposited_event(&caller, token, &payment.amount, &value, &claimed);

        if is_liquidity {
            self.apply_supply_correction(token);
        }

        let native_token = self.native_token().get();
        self.send_token(&caller, &native_token, &claimed);

        EsdtTokenPayment::new(native_token, 0, claimed)
    }

    /// Redeems native units for a reserve token at its current valuation.
    ///
    /// # Payment
    /// - Native token, at least `valueOf(token, amount)`. The surplus is refunded.
    #[payable]
    #[endpoint(withdraw)]
    fn withdraw(&self, token: TokenIdentifier, amount: BigUint) {
        let payment = self.call_value().single_esdt().clone();
        let caller = self.blockchain().get_caller();
        let native_token = self.native_token().get();

        require!(amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(payment.token_identifier == native_token, ERROR_INVALID_PAYMENT);
        require!(self.is_reserve_token(&token), ERROR_TOKEN_NOT_ACCEPTED);
        self.require_account_permission(PermissionCategory::ReserveSpender, &caller);

        let value = self.token_value(&token, &amount);
        require!(payment.amount >= value, ERROR_INSUFFICIENT_PAYMENT);

        self.reduce_reserves(&value);
        self.burn_native(&value);

        self.reserves_withdrawn_event(&caller, &token, &amount, &value);

        let refund = &payment.amount - &value;
        self.send_token(&caller, &native_token, &refund);
        self.send_token(&caller, &token, &amount);
    }

    /// Moves tokens out of the treasury without burning native units.
    ///
    /// Accepted reserve and liquidity tokens can only leave up to the excess reserves.
    #[endpoint(manage)]
    fn manage(&self, token: TokenIdentifier, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        let is_liquidity = self.is_liquidity_token(&token);
        let category = if is_liquidity {
            PermissionCategory::LiquidityManager
        } else {
            PermissionCategory::ReserveManager
        };
        self.require_account_permission(category, &caller);

        if is_liquidity || self.is_reserve_token(&token) {
            let value = self.token_value(&token, &amount);
            require!(value <= self.excess_reserves_raw(), ERROR_INSUFFICIENT_RESERVES);
            self.reduce_reserves(&value);
        }

        self.reserves_managed_event(&caller, &token, &amount);
        self.send_token(&caller, &token, &amount);

        if is_liquidity {
            self.apply_supply_correction(&token);
        }
    }

    /// Mints native units to `to`. The supply grows whatever the excess reserves are.
    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_account_permission(PermissionCategory::RewardManager, &caller);
        require!(!to.is_zero(), ERROR_ZERO_ADDRESS);

        self.mint_native(&amount);
        self.minted_event(&caller, &to, &amount);

        self.send_token(&to, &self.native_token().get(), &amount);
    }

    /// Lends reserve tokens to an approved debtor, up to its debt limit.
    #[endpoint(incurDebt)]
    fn incur_debt(&self, token: TokenIdentifier, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_account_permission(PermissionCategory::ReserveDebtor, &caller);
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(self.is_reserve_token(&token), ERROR_TOKEN_NOT_ACCEPTED);

        let value = self.token_value(&token, &amount);
        let balance = self.debtor_balance(&caller).get() + &value;
        require!(
            balance <= self.debt_limit(&caller).get(),
            ERROR_EXCEEDS_DEBT_LIMIT
        );

        self.reduce_reserves(&value);
        self.debtor_balance(&caller).set(&balance);
        self.total_debt().update(|debt| *debt += &value);

        self.debt_changed_event(&caller, &token, &value, true);
        self.send_token(&caller, &token, &amount);
    }

    /// Repays debt with a reserve token, credited back to the reserves.
    #[payable]
    #[endpoint(repayDebtWithReserve)]
    fn repay_debt_with_reserve(&self) {
        let payment = self.call_value().single_esdt().clone();
        let caller = self.blockchain().get_caller();
        self.require_account_permission(PermissionCategory::ReserveDebtor, &caller);
        require!(payment.amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(
            self.is_reserve_token(&payment.token_identifier),
            ERROR_TOKEN_NOT_ACCEPTED
        );

        let value = self.token_value(&payment.token_identifier, &payment.amount);
        self.reduce_debt(&caller, &value);
        self.total_reserves().update(|reserves| *reserves += &value);

        self.debt_changed_event(&caller, &payment.token_identifier, &value, false);
    }

    /// Repays debt by burning native units.
    #[payable]
    #[endpoint(repayDebtWithNative)]
    fn repay_debt_with_native(&self) {
        let payment = self.call_value().single_esdt().clone();
        let caller = self.blockchain().get_caller();
        self.require_account_permission(PermissionCategory::ReserveDebtor, &caller);
        require!(payment.amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(
            payment.token_identifier == self.native_token().get(),
            ERROR_INVALID_PAYMENT
        );

        self.reduce_debt(&caller, &payment.amount);
        self.burn_native(&payment.amount);

        self.debt_changed_event(&caller, &payment.token_identifier, &payment.amount, false);
    }

    #[endpoint(setDebtLimit)]
    fn set_debt_limit(&self, debtor: ManagedAddress, limit: BigUint) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(!debtor.is_zero(), ERROR_ZERO_ADDRESS);

        self.debt_limit(&debtor).set(limit);
    }

    /// Recomputes `totalReserves` from the balances of every enabled reserve and liquidity
    /// token.
    #[endpoint(auditReserves)]
    fn audit_reserves(&self) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);

        let mut total = BigUint::zero();
        for category in [
            PermissionCategory::ReserveToken,
            PermissionCategory::LiquidityToken,
        ] {
            for principal in self.registry(category).iter() {
                if !self.has_permission(category, &principal) {
                    continue;
                }
                if let Principal::Token(token) = principal {
                    let balance = self
                        .blockchain()
                        .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
                    if balance > 0u64 {
                        total += self.token_value(&token, &balance);
                    }
                }
            }
        }

        self.total_reserves().set(&total);
        self.reserves_audited_event(&total);
    }

    fn reduce_debt(&self, debtor: &ManagedAddress, value: &BigUint) {
        let balance = self.debtor_balance(debtor).get();
        require!(&balance >= value, ERROR_DEBT_UNDERFLOW);

        self.debtor_balance(debtor).set(balance - value);
        self.total_debt()
            .update(|debt| *debt = self.saturating_sub(debt, value));
    }
}
