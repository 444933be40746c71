use crate::constants::*;

use common_constants::WAD;
use common_proxies::{proxy_authority, proxy_bond_depository, proxy_treasury, proxy_twap};
use common_structs::{Adjustment, Market, MarketParams, PermissionCategory, Principal, Terms};

use multiversx_sc::{
    imports::{MultiValue2, MultiValue3, OptionalValue},
    types::{
        BigUint, CodeMetadata, ManagedAddress, MultiValueEncoded, ReturnsNewManagedAddress,
        ReturnsResult, TestAddress, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(AUTHORITY_PATH, authority::ContractBuilder);
    blockchain.register_contract(TREASURY_PATH, treasury::ContractBuilder);
    blockchain.register_contract(TWAP_PATH, twap_mock::ContractBuilder);
    blockchain.register_contract(BOND_DEPOSITORY_PATH, bond_depository::ContractBuilder);

    blockchain
}

pub fn native_units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(NATIVE_DECIMALS as u32)
}

pub fn reserve_units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(RESERVE_DECIMALS as u32)
}

pub fn priced_units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(PRICED_DECIMALS as u32)
}

/// Native units `amount` quote units buy at `price`, truncated like the depository does.
pub fn expected_payout(
    amount: &BigUint<StaticApi>,
    price: &BigUint<StaticApi>,
    quote_decimals: usize,
) -> BigUint<StaticApi> {
    amount * &BigUint::from(10u64).pow((NATIVE_DECIMALS + 18) as u32)
        / (BigUint::from(10u64).pow(quote_decimals as u32) * price)
}

/// A week long fixed-term market selling 2.5M native units at 0.015 per unit, notes vesting
/// after four hours.
pub fn default_market_params() -> MarketParams<StaticApi> {
    MarketParams {
        capacity: native_units(2_500_000),
        initial_price: BigUint::from(INITIAL_PRICE),
        debt_buffer: 100_000,
        capacity_in_quote: false,
        quote_is_reserve: true,
        quote_is_liquidity: false,
        fixed_term: true,
        vesting: VESTING,
        conclusion: START + MARKET_LENGTH,
        deposit_interval: DEPOSIT_INTERVAL,
        tune_interval: TUNE_INTERVAL,
    }
}

pub struct DepositoryTestState {
    pub world: ScenarioWorld,
    pub authority_sc: ManagedAddress<StaticApi>,
    pub treasury_sc: ManagedAddress<StaticApi>,
    pub depository_sc: ManagedAddress<StaticApi>,
}

impl Default for DepositoryTestState {
    fn default() -> Self {
        Self::new()
    }
}

impl DepositoryTestState {
    /// Treasury backing 100_000 native units with 1_000_000 reserve units, and a
    /// depository allowed to deposit into it and to mint from its excess.
    pub fn new() -> Self {
        let mut world = world();

        world
            .account(OWNER_ADDRESS)
            .nonce(1)
            .esdt_balance(RESERVE_TOKEN, reserve_units(1_000_000));
        for address in [USER_ADDRESS, SECOND_USER_ADDRESS] {
            world
                .account(address)
                .nonce(1)
                .esdt_balance(RESERVE_TOKEN, reserve_units(100_000))
                .esdt_balance(PRICED_TOKEN, priced_units(100_000));
        }
        for address in [
            GUARDIAN_ADDRESS,
            POLICY_ADDRESS,
            VAULT_ADDRESS,
            REFERRER_ADDRESS,
        ] {
            world.account(address).nonce(1);
        }
        world.current_block().block_timestamp(START);

        let authority_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_authority::AuthorityProxy)
            .init(OWNER_ADDRESS, GUARDIAN_ADDRESS, POLICY_ADDRESS, VAULT_ADDRESS)
            .code(AUTHORITY_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let treasury_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_treasury::TreasuryProxy)
            .init(
                authority_sc.clone(),
                NATIVE_TOKEN.to_token_identifier(),
                TIMELOCK_DELAY,
            )
            .code(TREASURY_PATH)
            .code_metadata(CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();
        world.set_esdt_local_roles(treasury_sc.clone(), NATIVE_TOKEN.as_bytes(), ESDT_ROLES);

        let depository_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .init(
                authority_sc.clone(),
                treasury_sc.clone(),
                NATIVE_TOKEN.to_token_identifier(),
            )
            .code(BOND_DEPOSITORY_PATH)
            .code_metadata(CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            authority_sc,
            treasury_sc,
            depository_sc,
        };

        state.setup_treasury();
        state
    }

    fn setup_treasury(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .register_reserve_asset(RESERVE_TOKEN.to_token_identifier(), RESERVE_DECIMALS)
            .run();

        let depository = self.depository_sc.clone();
        for (category, principal) in [
            (
                PermissionCategory::ReserveToken,
                Principal::Token(RESERVE_TOKEN.to_token_identifier()),
            ),
            (
                PermissionCategory::ReserveDepositor,
                Principal::Account(OWNER_ADDRESS.to_managed_address()),
            ),
            (
                PermissionCategory::ReserveDepositor,
                Principal::Account(depository.clone()),
            ),
            (
                PermissionCategory::RewardManager,
                Principal::Account(depository.clone()),
            ),
        ] {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(self.treasury_sc.clone())
                .typed(proxy_treasury::TreasuryProxy)
                .enable(
                    category,
                    principal,
                    OptionalValue::<ManagedAddress<StaticApi>>::None,
                )
                .run();
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .deposit(native_units(100_000))
            .single_esdt(
                &RESERVE_TOKEN.to_token_identifier(),
                0,
                &reserve_units(1_000_000),
            )
            .run();
    }

    /// Registers `PRICED_TOKEN` in the treasury, valued at one native unit per token.
    pub fn register_priced_quote(&mut self) {
        let twap_sc = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_twap::TwapMockProxy)
            .init()
            .code(TWAP_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(twap_sc.clone())
            .typed(proxy_twap::TwapMockProxy)
            .set_price(OWNER_ADDRESS, BigUint::from(WAD))
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .register_priced_asset(
                PRICED_TOKEN.to_token_identifier(),
                PRICED_DECIMALS,
                twap_sc,
                OWNER_ADDRESS,
            )
            .run();
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn create_market(
        &mut self,
        quote: TestTokenIdentifier,
        params: MarketParams<StaticApi>,
    ) -> usize {
        self.world
            .tx()
            .from(POLICY_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .create(quote.to_token_identifier(), params)
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_market_error(
        &mut self,
        from: TestAddress,
        quote: TestTokenIdentifier,
        params: MarketParams<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .create(quote.to_token_identifier(), params)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn close_market(&mut self, id: usize) {
        self.world
            .tx()
            .from(POLICY_ADDRESS)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .close(id)
            .run();
    }

    pub fn deposit(
        &mut self,
        from: TestAddress,
        id: usize,
        quote: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        max_price: BigUint<StaticApi>,
        referrer: Option<TestAddress>,
    ) -> (BigUint<StaticApi>, u64, u64) {
        let opt_referrer = match referrer {
            Some(address) => OptionalValue::Some(address.to_managed_address()),
            None => OptionalValue::None,
        };
        let result: MultiValue3<BigUint<StaticApi>, u64, u64> = self
            .world
            .tx()
            .from(from)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .deposit(id, max_price, from, opt_referrer)
            .single_esdt(&quote.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn deposit_error(
        &mut self,
        from: TestAddress,
        id: usize,
        quote: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        max_price: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .deposit(
                id,
                max_price,
                from,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .single_esdt(&quote.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn redeem_all(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(user)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .redeem_all(user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn redeem(&mut self, user: TestAddress, indexes: &[u64]) -> BigUint<StaticApi> {
        let mut encoded = MultiValueEncoded::new();
        for index in indexes {
            encoded.push(*index);
        }

        self.world
            .tx()
            .from(user)
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .redeem(user, encoded)
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_price(&mut self, id: usize) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .market_price(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn payout_for(&mut self, amount: BigUint<StaticApi>, id: usize) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .payout_for(amount, id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn market(&mut self, id: usize) -> Market<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .get_market(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn terms(&mut self, id: usize) -> Terms<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .get_terms(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn adjustment(&mut self, id: usize) -> Adjustment<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .get_adjustment(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_live(&mut self, id: usize) -> bool {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .is_live(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn live_markets(&mut self) -> Vec<usize> {
        let markets: MultiValueEncoded<StaticApi, usize> = self
            .world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .live_markets()
            .returns(ReturnsResult)
            .run();

        markets.into_iter().collect()
    }

    pub fn current_debt(&mut self, id: usize) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .current_debt(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_control_variable(&mut self, id: usize) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .current_control_variable(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn indexes_for(&mut self, user: TestAddress) -> Vec<u64> {
        let indexes: MultiValueEncoded<StaticApi, u64> = self
            .world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .indexes_for(user)
            .returns(ReturnsResult)
            .run();

        indexes.into_iter().collect()
    }

    pub fn pending_for(&mut self, user: TestAddress, index: u64) -> (BigUint<StaticApi>, bool) {
        let pending: MultiValue2<BigUint<StaticApi>, bool> = self
            .world
            .query()
            .to(self.depository_sc.clone())
            .typed(proxy_bond_depository::BondDepositoryProxy)
            .pending_for(user, index)
            .returns(ReturnsResult)
            .run();

        pending.into_tuple()
    }

    pub fn treasury_native_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .native_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_native_balance(&mut self, address: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .check_account(address)
            .esdt_balance(NATIVE_TOKEN, amount);
    }
}
