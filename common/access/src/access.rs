#![no_std]

use common_errors::{ERROR_UNAUTHORIZED, ERROR_ZERO_ADDRESS};
use common_structs::AuthorityContext;

multiversx_sc::imports!();

/// Role checks against the authority contract.
///
/// Every privileged endpoint loads the `AuthorityContext` once with `load_authority` and
/// hands it to the checks below, so a call never reads the roles twice.
#[multiversx_sc::module]
pub trait AccessModule {
    fn load_authority(&self) -> AuthorityContext<Self::Api> {
        let mapper = self.authority_context(self.authority().get());
        require!(!mapper.is_empty(), ERROR_UNAUTHORIZED);
        mapper.get()
    }

    fn require_governor(&self, ctx: &AuthorityContext<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(ctx.is_governor(&caller), ERROR_UNAUTHORIZED);
    }

    fn require_policy(&self, ctx: &AuthorityContext<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(ctx.is_policy(&caller), ERROR_UNAUTHORIZED);
    }

    fn require_governor_or_policy(&self, ctx: &AuthorityContext<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(
            ctx.is_governor(&caller) || ctx.is_policy(&caller),
            ERROR_UNAUTHORIZED
        );
    }

    fn require_governor_or_guardian(&self, ctx: &AuthorityContext<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(
            ctx.is_governor(&caller) || ctx.is_guardian(&caller),
            ERROR_UNAUTHORIZED
        );
    }

    fn require_any_role(&self, ctx: &AuthorityContext<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(
            ctx.is_governor(&caller) || ctx.is_policy(&caller) || ctx.is_guardian(&caller),
            ERROR_UNAUTHORIZED
        );
    }

    /// Points the contract at another authority. Only the current governor may do so.
    #[endpoint(setAuthority)]
    fn set_authority(&self, new_authority: ManagedAddress) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(!new_authority.is_zero(), ERROR_ZERO_ADDRESS);

        self.authority().set(new_authority);
    }

    #[view(getAuthority)]
    #[storage_mapper("authority")]
    fn authority(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper_from_address("context")]
    fn authority_context(
        &self,
        address: ManagedAddress,
    ) -> SingleValueMapper<AuthorityContext<Self::Api>, ManagedAddress>;
}
