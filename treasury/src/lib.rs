#![no_std]

multiversx_sc::imports!();

pub mod permissions;
pub mod reserves;
pub mod storage;
pub mod supply;
pub mod utils;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

use common_constants::WAD;

/// Reserve ledger backing the native token.
///
/// Holds reserve and liquidity tokens, values them in native units and is the only minter
/// and burner of the native token. Every role that may move reserves is granted through a
/// permission registry, optionally behind a block based timelock.
#[multiversx_sc::contract]
pub trait Treasury:
    permissions::PermissionsModule
    + reserves::ReservesModule
    + supply::SupplyRatioModule
    + views::ViewsModule
    + utils::TreasuryUtilsModule
    + storage::Storage
    + common_access::AccessModule
    + common_valuation::ValuationModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// # Arguments
    /// - `authority`: Address of the authority contract holding the protocol roles.
    /// - `native_token`: Token this treasury mints and burns. The contract needs local
    ///   mint and burn roles for it.
    /// - `timelock_delay`: Base delay, in blocks, of queued permission changes.
    #[init]
    fn init(&self, authority: ManagedAddress, native_token: TokenIdentifier, timelock_delay: u64) {
        require!(!authority.is_zero(), ERROR_ZERO_ADDRESS);
        require!(native_token.is_valid_esdt_identifier(), ERROR_INVALID_TOKEN);
        require!(timelock_delay > 0, ERROR_INVALID_TIMELOCK);

        self.authority().set(authority);
        self.native_token().set(native_token);
        self.timelock_delay().set(timelock_delay);
        self.base_value().set(BigUint::from(WAD));
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Turns the timelock on. Can only ever be called once; until then permissions are
    /// granted directly through `enable`.
    #[endpoint(initialize)]
    fn initialize(&self) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(!self.initialized().get(), ERROR_ALREADY_INITIALIZED);

        self.initialized().set(true);
        self.timelock_enabled().set(true);

        self.timelock_changed_event(true, self.timelock_delay().get(), 0);
    }
}
