#![no_std]

multiversx_sc::imports!();

pub mod market;
pub mod notes;
pub mod pricing;
pub mod storage;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

/// Sells native tokens for quote tokens through bonds that vest over time.
///
/// Each market runs a control variable / debt ratio pricing loop: purchases raise the debt
/// and with it the price, while debt decays linearly over the market length. The depository
/// receives the sold native units from the treasury at purchase and holds them until the
/// notes mature.
#[multiversx_sc::contract]
pub trait BondDepository:
    market::MarketModule
    + notes::NoteKeeperModule
    + pricing::PricingModule
    + views::ViewsModule
    + storage::Storage
    + common_access::AccessModule
    + common_math::SharedMathModule
    + common_events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// # Arguments
    /// - `authority`: Address of the authority contract.
    /// - `treasury`: Treasury valuing the quotes and minting the payouts.
    /// - `native_token`: Token the notes pay out in.
    #[init]
    fn init(&self, authority: ManagedAddress, treasury: ManagedAddress, native_token: TokenIdentifier) {
        require!(!authority.is_zero() && !treasury.is_zero(), ERROR_ZERO_ADDRESS);
        require!(native_token.is_valid_esdt_identifier(), ERROR_INVALID_TOKEN);

        self.authority().set(authority);
        self.treasury().set(treasury);
        self.native_token().set(native_token);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
