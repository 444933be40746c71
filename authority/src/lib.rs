#![no_std]

multiversx_sc::imports!();

pub use common_errors::*;
pub use common_structs::*;

/// Holds the governor, guardian, policy and vault principals of the protocol.
///
/// Other contracts read the `context` storage key directly from this contract, so a role
/// change is visible to all of them within the same block.
#[multiversx_sc::contract]
pub trait Authority: common_events::EventsModule {
    #[init]
    fn init(
        &self,
        governor: ManagedAddress,
        guardian: ManagedAddress,
        policy: ManagedAddress,
        vault: ManagedAddress,
    ) {
        require!(
            !governor.is_zero() && !guardian.is_zero() && !policy.is_zero() && !vault.is_zero(),
            ERROR_ZERO_ADDRESS
        );

        self.context().set(AuthorityContext {
            governor,
            guardian,
            policy,
            vault,
        });
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(pushGovernor)]
    fn push_governor(&self, new_governor: ManagedAddress, effective_immediately: bool) {
        self.push_role(AuthorityRole::Governor, new_governor, effective_immediately);
    }

    #[endpoint(pushGuardian)]
    fn push_guardian(&self, new_guardian: ManagedAddress, effective_immediately: bool) {
        self.push_role(AuthorityRole::Guardian, new_guardian, effective_immediately);
    }

    #[endpoint(pushPolicy)]
    fn push_policy(&self, new_policy: ManagedAddress, effective_immediately: bool) {
        self.push_role(AuthorityRole::Policy, new_policy, effective_immediately);
    }

    #[endpoint(pushVault)]
    fn push_vault(&self, new_vault: ManagedAddress, effective_immediately: bool) {
        self.push_role(AuthorityRole::Vault, new_vault, effective_immediately);
    }

    #[endpoint(pullGovernor)]
    fn pull_governor(&self) {
        self.pull_role(AuthorityRole::Governor);
    }

    #[endpoint(pullGuardian)]
    fn pull_guardian(&self) {
        self.pull_role(AuthorityRole::Guardian);
    }

    #[endpoint(pullPolicy)]
    fn pull_policy(&self) {
        self.pull_role(AuthorityRole::Policy);
    }

    #[endpoint(pullVault)]
    fn pull_vault(&self) {
        self.pull_role(AuthorityRole::Vault);
    }

    fn push_role(
        &self,
        role: AuthorityRole,
        new_holder: ManagedAddress,
        effective_immediately: bool,
    ) {
        let mut ctx = self.context().get();
        require!(
            ctx.is_governor(&self.blockchain().get_caller()),
            ERROR_UNAUTHORIZED
        );
        require!(!new_holder.is_zero(), ERROR_ZERO_ADDRESS);

        let current = ctx.role(role).clone();
        if effective_immediately {
            ctx.set_role(role, new_holder.clone());
            self.context().set(&ctx);
            self.pending(role).clear();
        } else {
            self.pending(role).set(&new_holder);
        }

        self.authority_role_pushed_event(role, &current, &new_holder, effective_immediately);
    }

    fn pull_role(&self, role: AuthorityRole) {
        let pending = self.pending(role);
        require!(!pending.is_empty(), ERROR_NO_PENDING_ROLE);

        let caller = self.blockchain().get_caller();
        require!(pending.get() == caller, ERROR_NOT_PENDING_ROLE);

        let mut ctx = self.context().get();
        let previous = ctx.role(role).clone();
        ctx.set_role(role, caller.clone());
        self.context().set(&ctx);
        pending.clear();

        self.authority_role_pulled_event(role, &previous, &caller);
    }

    #[view(getContext)]
    #[storage_mapper("context")]
    fn context(&self) -> SingleValueMapper<AuthorityContext<Self::Api>>;

    #[view(getPending)]
    #[storage_mapper("pending")]
    fn pending(&self, role: AuthorityRole) -> SingleValueMapper<ManagedAddress>;
}
