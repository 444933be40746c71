#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Authority

    #[event("authority_role_pushed")]
    fn authority_role_pushed_event(
        &self,
        #[indexed] role: AuthorityRole,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] effective_immediately: bool,
    );

    #[event("authority_role_pulled")]
    fn authority_role_pulled_event(
        &self,
        #[indexed] role: AuthorityRole,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
    );

    // Treasury

    #[event("permission_changed")]
    fn permission_changed_event(
        &self,
        #[indexed] category: PermissionCategory,
        #[indexed] principal: &Principal<Self::Api>,
        #[indexed] enabled: bool,
    );

    #[event("permission_queued")]
    fn permission_queued_event(
        &self,
        #[indexed] index: usize,
        #[indexed] category: PermissionCategory,
        #[indexed] principal: &Principal<Self::Api>,
        #[indexed] timelock_end: u64,
    );

    #[event("permission_nullified")]
    fn permission_nullified_event(&self, #[indexed] index: usize);

    #[event("timelock_changed")]
    fn timelock_changed_event(
        &self,
        #[indexed] enabled: bool,
        #[indexed] delay: u64,
        #[indexed] armed_until: u64,
    );

    #[event("asset_registered")]
    fn asset_registered_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] config: &AssetConfig<Self::Api>,
    );

    #[event("base_value_changed")]
    fn base_value_changed_event(&self, #[indexed] base_value: &BigUint);

    #[event("reserves_deposited")]
    fn reserves_deposited_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] value: &BigUint,
        #[indexed] minted: &BigUint,
    );

    #[event("reserves_withdrawn")]
    fn reserves_withdrawn_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] value: &BigUint,
    );

    #[event("reserves_managed")]
    fn reserves_managed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("reserves_audited")]
    fn reserves_audited_event(&self, #[indexed] total_reserves: &BigUint);

    #[event("minted")]
    fn minted_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    // The amount is the change applied to the debtor balance, `incurred` tells its direction
    #[event("debt_changed")]
    fn debt_changed_event(
        &self,
        #[indexed] debtor: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] value: &BigUint,
        #[indexed] incurred: bool,
    );

    #[event("supply_ratio_updated")]
    fn supply_ratio_updated_event(
        &self,
        #[indexed] liquidity_token: &TokenIdentifier,
        #[indexed] base_amount: &BigUint,
        #[indexed] lp_amount: &BigUint,
        #[indexed] is_burn: bool,
    );

    // Bond depository

    #[event("market_created")]
    fn market_created_event(
        &self,
        #[indexed] id: usize,
        #[indexed] quote_token: &TokenIdentifier,
        #[indexed] initial_price: &BigUint,
        #[indexed] control_variable: &BigUint,
    );

    #[event("market_closed")]
    fn market_closed_event(&self, #[indexed] id: usize);

    #[event("bond_purchased")]
    fn bond_purchased_event(
        &self,
        #[indexed] id: usize,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] price: &BigUint,
        #[indexed] payout: &BigUint,
        #[indexed] value: &BigUint,
    );

    #[event("market_tuned")]
    fn market_tuned_event(
        &self,
        #[indexed] id: usize,
        #[indexed] old_control_variable: &BigUint,
        #[indexed] new_control_variable: &BigUint,
    );

    #[event("note_redeemed")]
    fn note_redeemed_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] index: u64,
        #[indexed] payout: &BigUint,
    );

    #[event("note_transferred")]
    fn note_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] old_index: u64,
        #[indexed] new_index: u64,
    );

    #[event("rewards_claimed")]
    fn rewards_claimed_event(&self, #[indexed] owner: &ManagedAddress, #[indexed] amount: &BigUint);

    // Supply controller

    #[event("supply_control_params")]
    fn supply_control_params_event(&self, #[indexed] params: &SupplyControlParams);

    #[event("supply_control_kp")]
    fn supply_control_kp_event(&self, #[indexed] kp: u64);

    #[event("supply_control_toggled")]
    fn supply_control_toggled_event(&self, #[indexed] enabled: bool);

    #[event("supply_control_sample")]
    fn supply_control_sample_event(&self, #[indexed] timestamp: u64);
}
