multiversx_sc::imports!();

use crate::{storage, utils};
use common_constants::TIMELOCK_DISABLE_MULTIPLIER;
use common_errors::*;
use common_structs::*;

const MAX_TOKEN_DECIMALS: usize = 18;

/// Governance over who may touch the reserves.
///
/// Before `initialize` (or while the timelock is disabled) permissions are granted directly
/// with `enable`. Afterwards every grant goes through `queueTimelock` and `execute`, and
/// manager categories wait twice the base delay. Revocation through `disable` is always
/// immediate.
#[multiversx_sc::module]
pub trait PermissionsModule:
    storage::Storage
    + utils::TreasuryUtilsModule
    + common_access::AccessModule
    + common_valuation::ValuationModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Registers a plain reserve asset, valued 1:1 against the base value after rescaling.
    #[endpoint(registerReserveAsset)]
    fn register_reserve_asset(&self, token: TokenIdentifier, decimals: usize) {
        self.register_asset(
            token,
            AssetConfig {
                kind: AssetKind::Reserve,
                decimals,
                source: ManagedAddress::zero(),
                pool: ManagedAddress::zero(),
                first_decimals: 0,
                second_decimals: 0,
            },
        );
    }

    /// Registers the LP token of a constant-product pair.
    ///
    /// # Arguments
    /// - `first_decimals`, `second_decimals`: Precisions of the pair tokens, in pair order.
    #[endpoint(registerLiquidityAsset)]
    fn register_liquidity_asset(
        &self,
        lp_token: TokenIdentifier,
        decimals: usize,
        pair: ManagedAddress,
        first_decimals: usize,
        second_decimals: usize,
    ) {
        require!(!pair.is_zero(), ERROR_ZERO_ADDRESS);
        require!(
            self.is_valid_decimals(first_decimals) && self.is_valid_decimals(second_decimals),
            ERROR_INVALID_DECIMALS
        );

        self.register_asset(
            lp_token,
            AssetConfig {
                kind: AssetKind::Liquidity,
                decimals,
                source: pair,
                pool: ManagedAddress::zero(),
                first_decimals,
                second_decimals,
            },
        );
    }

    /// Registers an asset valued through a time-weighted price feed.
    #[endpoint(registerPricedAsset)]
    fn register_priced_asset(
        &self,
        token: TokenIdentifier,
        decimals: usize,
        feed: ManagedAddress,
        pool: ManagedAddress,
    ) {
        require!(!feed.is_zero() && !pool.is_zero(), ERROR_ZERO_ADDRESS);

        self.register_asset(
            token,
            AssetConfig {
                kind: AssetKind::Priced,
                decimals,
                source: feed,
                pool,
                first_decimals: 0,
                second_decimals: 0,
            },
        );
    }

    #[endpoint(setBaseValue)]
    fn set_base_value(&self, base_value: BigUint) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(base_value > 0u64, ERROR_INVALID_BASE_VALUE);

        self.base_value().set(&base_value);
        self.base_value_changed_event(&base_value);
    }

    /// Grants a permission immediately. Only allowed while the timelock is disabled.
    ///
    /// # Arguments
    /// - `category`: Permission category.
    /// - `principal`: Account for role categories, token for token categories.
    /// - `opt_binding`: Supply controller bound to a `LiquidityToken`.
    #[endpoint(enable)]
    fn enable(
        &self,
        category: PermissionCategory,
        principal: Principal<Self::Api>,
        opt_binding: OptionalValue<ManagedAddress>,
    ) {
        let ctx = self.load_authority();
        self.require_governor_or_policy(&ctx);
        require!(!self.timelock_enabled().get(), ERROR_TIMELOCK_ENABLED);

        let binding = opt_binding.into_option();
        self.validate_permission(category, &principal, &binding);
        self.apply_permission(category, principal, binding);
    }

    #[endpoint(disable)]
    fn disable(&self, category: PermissionCategory, principal: Principal<Self::Api>) {
        let ctx = self.load_authority();
        self.require_any_role(&ctx);

        self.permission(category, &principal).set(false);
        if category == PermissionCategory::StakedTokenBinding {
            if let Principal::Token(token) = &principal {
                if !self.staked_token().is_empty() && &self.staked_token().get() == token {
                    self.staked_token().clear();
                }
            }
        }

        self.permission_changed_event(category, &principal, false);
    }

    /// Queues a permission grant. Returns the 1-based queue index to `execute` it with.
    #[endpoint(queueTimelock)]
    fn queue_timelock(
        &self,
        category: PermissionCategory,
        principal: Principal<Self::Api>,
        opt_binding: OptionalValue<ManagedAddress>,
    ) -> usize {
        let ctx = self.load_authority();
        self.require_governor_or_policy(&ctx);
        require!(self.timelock_enabled().get(), ERROR_TIMELOCK_DISABLED);

        let binding = opt_binding.into_option();
        self.validate_permission(category, &principal, &binding);

        let delay = self.timelock_delay().get() * category.delay_multiplier();
        let timelock_end = self.blockchain().get_block_nonce() + delay;

        let index = self.permission_queue().push(&QueuedChange {
            category,
            principal: principal.clone(),
            secondary_binding: binding,
            timelock_end,
            executed: false,
            nullified: false,
        });

        self.permission_queued_event(index, category, &principal, timelock_end);
        index
    }

    /// Applies a queued change once its timelock elapsed. Callable by anyone.
    #[endpoint(execute)]
    fn execute(&self, index: usize) {
        require!(self.timelock_enabled().get(), ERROR_TIMELOCK_DISABLED);

        let mut change = self.get_queued_change(index);
        require!(!change.nullified, ERROR_QUEUE_NULLIFIED);
        require!(!change.executed, ERROR_QUEUE_EXECUTED);
        require!(
            self.blockchain().get_block_nonce() >= change.timelock_end,
            ERROR_TIMELOCK_NOT_COMPLETE
        );

        change.executed = true;
        self.permission_queue().set(index, &change);

        self.apply_permission(change.category, change.principal, change.secondary_binding);
    }

    #[endpoint(nullify)]
    fn nullify(&self, index: usize) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);

        let mut change = self.get_queued_change(index);
        require!(!change.executed, ERROR_QUEUE_EXECUTED);

        change.nullified = true;
        self.permission_queue().set(index, &change);

        self.permission_nullified_event(index);
    }

    #[endpoint(enableTimelock)]
    fn enable_timelock(&self, delay: u64) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(!self.timelock_enabled().get(), ERROR_TIMELOCK_ALREADY_ENABLED);
        require!(delay > 0, ERROR_INVALID_TIMELOCK);

        self.timelock_enabled().set(true);
        self.timelock_delay().set(delay);
        self.timelock_disable_block().clear();

        self.timelock_changed_event(true, delay, 0);
    }

    /// Two steps: the first call arms the switch for `7 * delay` blocks later, a call made
    /// after that block disables the timelock.
    #[endpoint(disableTimelock)]
    fn disable_timelock(&self) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(self.timelock_enabled().get(), ERROR_TIMELOCK_DISABLED);

        let delay = self.timelock_delay().get();
        let armed_at = self.timelock_disable_block().get();
        let current_block = self.blockchain().get_block_nonce();

        if armed_at != 0 && armed_at <= current_block {
            self.timelock_enabled().set(false);
            self.timelock_disable_block().clear();
            self.timelock_changed_event(false, delay, 0);
        } else {
            let disable_block = current_block + delay * TIMELOCK_DISABLE_MULTIPLIER;
            self.timelock_disable_block().set(disable_block);
            self.timelock_changed_event(true, delay, disable_block);
        }
    }

    fn register_asset(&self, token: TokenIdentifier, config: AssetConfig<Self::Api>) {
        let ctx = self.load_authority();
        self.require_governor_or_policy(&ctx);
        require!(token.is_valid_esdt_identifier(), ERROR_INVALID_TOKEN);
        require!(self.is_valid_decimals(config.decimals), ERROR_INVALID_DECIMALS);

        let mapper = self.asset_config(&token);
        require!(mapper.is_empty(), ERROR_ASSET_ALREADY_REGISTERED);
        mapper.set(&config);

        self.asset_registered_event(&token, &config);
    }

    fn is_valid_decimals(&self, decimals: usize) -> bool {
        decimals > 0 && decimals <= MAX_TOKEN_DECIMALS
    }

    fn validate_permission(
        &self,
        category: PermissionCategory,
        principal: &Principal<Self::Api>,
        binding: &Option<ManagedAddress>,
    ) {
        require!(!principal.is_empty(), ERROR_ZERO_ADDRESS);
        require!(
            principal.is_token() == category.is_token_category(),
            ERROR_INVALID_PRINCIPAL
        );

        if let Some(controller) = binding {
            require!(
                category == PermissionCategory::LiquidityToken,
                ERROR_INVALID_BINDING
            );
            require!(!controller.is_zero(), ERROR_ZERO_ADDRESS);
        }

        let expected_kind = match category {
            PermissionCategory::ReserveToken => AssetKind::Reserve,
            PermissionCategory::LiquidityToken => AssetKind::Liquidity,
            _ => return,
        };
        if let Principal::Token(token) = principal {
            let mapper = self.asset_config(token);
            require!(!mapper.is_empty(), ERROR_ASSET_NOT_REGISTERED);
            require!(mapper.get().kind == expected_kind, ERROR_ASSET_KIND_MISMATCH);
        }
    }

    fn apply_permission(
        &self,
        category: PermissionCategory,
        principal: Principal<Self::Api>,
        binding: Option<ManagedAddress>,
    ) {
        self.permission(category, &principal).set(true);

        if let Principal::Token(token) = &principal {
            match category {
                PermissionCategory::LiquidityToken => {
                    if let Some(controller) = &binding {
                        self.supply_controller(token).set(controller);
                    }
                },
                PermissionCategory::StakedTokenBinding => self.staked_token().set(token),
                _ => {},
            }
        }

        let index_mapper = self.registry_index(category, &principal);
        if index_mapper.is_empty() {
            let index = self.registry(category).push(&principal);
            index_mapper.set(index);
        }

        self.permission_changed_event(category, &principal, true);
    }

    fn get_queued_change(&self, index: usize) -> QueuedChange<Self::Api> {
        let queue = self.permission_queue();
        require!(index > 0 && index <= queue.len(), ERROR_INVALID_QUEUE_INDEX);
        queue.get(index)
    }
}
