multiversx_sc::imports!();

use crate::storage;
use common_constants::{BPS, MAX_REWARD_BPS};
use common_errors::*;
use common_structs::*;

/// Bond notes and front-end rewards.
///
/// A note pays its full payout once matured. Notes are indexed per owner and keep their
/// index until redeemed; a transferred note gets a fresh index at the recipient.
#[multiversx_sc::module]
pub trait NoteKeeperModule:
    storage::Storage
    + common_access::AccessModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Pays every matured note among `indexes` to `user`. Immature or unknown indexes are
    /// skipped. Returns the amount paid.
    #[endpoint(redeem)]
    fn redeem(&self, user: ManagedAddress, indexes: MultiValueEncoded<u64>) -> BigUint {
        self.redeem_indexes(&user, indexes.to_vec())
    }

    #[endpoint(redeemAll)]
    fn redeem_all(&self, user: ManagedAddress) -> BigUint {
        let indexes = self.notes(&user).keys().collect();
        self.redeem_indexes(&user, indexes)
    }

    /// Approves `to` to pull the caller's note at `index`.
    #[endpoint(pushNote)]
    fn push_note(&self, to: ManagedAddress, index: u64) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), ERROR_ZERO_ADDRESS);
        require!(self.notes(&caller).contains_key(&index), ERROR_NOTE_NOT_FOUND);

        self.note_transfer(&caller, index).set(&to);
    }

    /// Takes over a note pushed by `from`. Returns its index at the caller.
    #[endpoint(pullNote)]
    fn pull_note(&self, from: ManagedAddress, index: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        let transfer = self.note_transfer(&from, index);
        require!(
            !transfer.is_empty() && transfer.get() == caller,
            ERROR_NOTE_TRANSFER_NOT_APPROVED
        );

        let Some(note) = self.notes(&from).remove(&index) else {
            sc_panic!(ERROR_NOTE_NOT_FOUND);
        };
        transfer.clear();

        let new_index = self.store_note(&caller, note);
        self.note_transferred_event(&from, &caller, index, new_index);

        new_index
    }

    /// Sets the referrer and DAO rewards, in basis points of each payout.
    #[endpoint(setRewards)]
    fn set_rewards(&self, to_referrer: u64, to_dao: u64) {
        let ctx = self.load_authority();
        self.require_governor(&ctx);
        require!(
            to_referrer <= MAX_REWARD_BPS && to_dao <= MAX_REWARD_BPS,
            ERROR_INVALID_REWARDS
        );

        self.referrer_reward().set(to_referrer);
        self.dao_reward().set(to_dao);
    }

    #[endpoint(whitelist)]
    fn whitelist(&self, referrer: ManagedAddress, enabled: bool) {
        let ctx = self.load_authority();
        self.require_policy(&ctx);
        require!(!referrer.is_zero(), ERROR_ZERO_ADDRESS);

        self.whitelisted(&referrer).set(enabled);
    }

    /// Pays out the rewards accrued by the caller.
    #[endpoint(getReward)]
    fn get_reward(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.rewards(&caller).take();
        if amount > 0u64 {
            self.tx()
                .to(&caller)
                .single_esdt(&self.native_token().get(), 0, &amount)
                .transfer();
            self.rewards_claimed_event(&caller, &amount);
        }

        amount
    }

    #[view(indexesFor)]
    fn indexes_for(&self, user: ManagedAddress) -> MultiValueEncoded<u64> {
        self.notes(&user).keys().collect()
    }

    /// Returns `(payout, matured)`, `(0, false)` for an unknown index.
    #[view(pendingFor)]
    fn pending_for(&self, user: ManagedAddress, index: u64) -> MultiValue2<BigUint, bool> {
        match self.notes(&user).get(&index) {
            Some(note) => {
                let matured = note.is_matured(self.blockchain().get_block_timestamp());
                (note.payout, matured).into()
            },
            None => (BigUint::zero(), false).into(),
        }
    }

    #[view(getNote)]
    fn get_note(&self, user: ManagedAddress, index: u64) -> Note<Self::Api> {
        let Some(note) = self.notes(&user).get(&index) else {
            sc_panic!(ERROR_NOTE_NOT_FOUND);
        };
        note
    }

    fn add_note(
        &self,
        user: &ManagedAddress,
        payout: &BigUint,
        expiry: u64,
        market_id: usize,
    ) -> u64 {
        self.store_note(
            user,
            Note {
                payout: payout.clone(),
                created: self.blockchain().get_block_timestamp(),
                matured: expiry,
                market_id,
            },
        )
    }

    fn store_note(&self, user: &ManagedAddress, note: Note<Self::Api>) -> u64 {
        let index = self.note_nonce(user).get();
        self.note_nonce(user).set(index + 1);
        self.notes(user).insert(index, note);

        index
    }

    /// Credits the referrer, when whitelisted, and the vault. Returns the total accrued.
    fn accrue_rewards(
        &self,
        payout: &BigUint,
        referrer: Option<ManagedAddress>,
        vault: &ManagedAddress,
    ) -> BigUint {
        let bps = BigUint::from(BPS);
        let mut fees = BigUint::zero();

        if let Some(referrer) = referrer {
            if self.whitelisted(&referrer).get() {
                let reward = self.mul_div_floor(
                    payout,
                    &BigUint::from(self.referrer_reward().get()),
                    &bps,
                );
                self.rewards(&referrer).update(|accrued| *accrued += &reward);
                fees += reward;
            }
        }

        let dao_reward = self.mul_div_floor(payout, &BigUint::from(self.dao_reward().get()), &bps);
        if dao_reward > 0u64 {
            self.rewards(vault).update(|accrued| *accrued += &dao_reward);
            fees += dao_reward;
        }

        fees
    }

    fn redeem_indexes(&self, user: &ManagedAddress, indexes: ManagedVec<u64>) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let mut notes = self.notes(user);
        let mut total = BigUint::zero();

        for index in indexes.iter() {
            let matured_payout = match notes.get(&index) {
                Some(note) if note.is_matured(now) => note.payout,
                _ => continue,
            };

            notes.remove(&index);
            self.note_transfer(user, index).clear();
            self.note_redeemed_event(user, index, &matured_payout);
            total += matured_payout;
        }

        if total > 0u64 {
            self.tx()
                .to(user)
                .single_esdt(&self.native_token().get(), 0, &total)
                .transfer();
        }

        total
    }
}
