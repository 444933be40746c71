use crate::constants::*;

use common_proxies::{
    proxy_authority, proxy_pair, proxy_supply_controller, proxy_treasury, proxy_twap,
};
use common_structs::{PermissionCategory, Principal, QueuedChange};

use multiversx_sc::{
    imports::{MultiValue3, OptionalValue},
    types::{
        BigUint, CodeMetadata, EsdtTokenPayment, ManagedAddress, ManagedVec,
        ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::ExpectMessage,
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(AUTHORITY_PATH, authority::ContractBuilder);
    blockchain.register_contract(TREASURY_PATH, treasury::ContractBuilder);
    blockchain.register_contract(PAIR_PATH, pair_mock::ContractBuilder);
    blockchain.register_contract(SUPPLY_CONTROLLER_PATH, supply_controller::ContractBuilder);
    blockchain.register_contract(TWAP_PATH, twap_mock::ContractBuilder);

    blockchain
}

pub fn native_units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(NATIVE_DECIMALS as u32)
}

pub fn reserve_units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(RESERVE_DECIMALS as u32)
}

pub fn account(address: TestAddress) -> Principal<StaticApi> {
    Principal::Account(address.to_managed_address())
}

pub fn token(token: TestTokenIdentifier) -> Principal<StaticApi> {
    Principal::Token(token.to_token_identifier())
}

pub struct TreasuryTestState {
    pub world: ScenarioWorld,
    pub authority_sc: ManagedAddress<StaticApi>,
    pub treasury_sc: ManagedAddress<StaticApi>,
}

impl Default for TreasuryTestState {
    fn default() -> Self {
        Self::new()
    }
}

impl TreasuryTestState {
    /// Deploys the authority and the treasury, and registers `RESERVE_TOKEN` as an accepted
    /// reserve. No account permission is granted and the timelock is off.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);

        let authority_sc = deploy_authority(&mut world);
        let treasury_sc = deploy_treasury(&mut world, &authority_sc);

        let mut state = Self {
            world,
            authority_sc,
            treasury_sc,
        };

        state.register_reserve_asset(RESERVE_TOKEN, RESERVE_DECIMALS);
        state.enable(PermissionCategory::ReserveToken, token(RESERVE_TOKEN));

        state
    }

    pub fn change_block(&mut self, nonce: u64) {
        self.world.current_block().block_nonce(nonce);
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn register_reserve_asset(&mut self, asset: TestTokenIdentifier, decimals: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .register_reserve_asset(asset.to_token_identifier(), decimals)
            .run();
    }

    pub fn register_liquidity_asset(
        &mut self,
        lp: TestTokenIdentifier,
        pair: &ManagedAddress<StaticApi>,
        first_decimals: usize,
        second_decimals: usize,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .register_liquidity_asset(
                lp.to_token_identifier(),
                LP_DECIMALS,
                pair,
                first_decimals,
                second_decimals,
            )
            .run();
    }

    pub fn enable(&mut self, category: PermissionCategory, principal: Principal<StaticApi>) {
        self.enable_from(OWNER_ADDRESS, category, principal, None, None);
    }

    pub fn enable_with_binding(
        &mut self,
        category: PermissionCategory,
        principal: Principal<StaticApi>,
        binding: &ManagedAddress<StaticApi>,
    ) {
        self.enable_from(OWNER_ADDRESS, category, principal, Some(binding), None);
    }

    pub fn enable_from(
        &mut self,
        from: TestAddress,
        category: PermissionCategory,
        principal: Principal<StaticApi>,
        binding: Option<&ManagedAddress<StaticApi>>,
        error_message: Option<&[u8]>,
    ) {
        let opt_binding = match binding {
            Some(address) => OptionalValue::Some(address.clone()),
            None => OptionalValue::None,
        };
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .enable(category, principal, opt_binding);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn disable(
        &mut self,
        from: TestAddress,
        category: PermissionCategory,
        principal: Principal<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .disable(category, principal);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn initialize_timelock(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .initialize()
            .run();
    }

    pub fn queue_timelock(
        &mut self,
        category: PermissionCategory,
        principal: Principal<StaticApi>,
    ) -> usize {
        self.world
            .tx()
            .from(POLICY_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .queue_timelock(category, principal, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute(&mut self, index: usize, error_message: Option<&[u8]>) {
        let tx = self
            .world
            .tx()
            .from(DEPOSITOR_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .execute(index);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn nullify(&mut self, index: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .nullify(index)
            .run();
    }

    pub fn disable_timelock(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .disable_timelock()
            .run();
    }

    pub fn deposit(
        &mut self,
        from: TestAddress,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        claimed: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let token_id = asset.to_token_identifier();
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .deposit(claimed)
            .single_esdt(&token_id, 0, &amount);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn withdraw(
        &mut self,
        from: TestAddress,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        native_paid: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let native_id = NATIVE_TOKEN.to_token_identifier();
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .withdraw(asset.to_token_identifier(), amount)
            .single_esdt(&native_id, 0, &native_paid);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn manage(
        &mut self,
        from: TestAddress,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .manage(asset.to_token_identifier(), amount);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn mint(
        &mut self,
        from: TestAddress,
        to: TestAddress,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .mint(to, amount);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn set_debt_limit(&mut self, debtor: TestAddress, limit: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .set_debt_limit(debtor, limit)
            .run();
    }

    pub fn incur_debt(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .incur_debt(RESERVE_TOKEN.to_token_identifier(), amount);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn repay_debt_with_reserve(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .repay_debt_with_reserve()
            .single_esdt(&RESERVE_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn repay_debt_with_native(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let native_id = NATIVE_TOKEN.to_token_identifier();
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .repay_debt_with_native()
            .single_esdt(&native_id, 0, &amount);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn audit_reserves(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .audit_reserves()
            .run();
    }

    pub fn update_supply_ratio(&mut self, lp: TestTokenIdentifier) {
        self.world
            .tx()
            .from(DEPOSITOR_ADDRESS)
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .update_supply_ratio(lp.to_token_identifier())
            .run();
    }

    pub fn has_permission(
        &mut self,
        category: PermissionCategory,
        principal: Principal<StaticApi>,
    ) -> bool {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .permission(category, principal)
            .returns(ReturnsResult)
            .run()
    }

    pub fn registry_length(&mut self, category: PermissionCategory) -> usize {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .get_registry_length(category)
            .returns(ReturnsResult)
            .run()
    }

    pub fn registry_entry(
        &mut self,
        category: PermissionCategory,
        index: usize,
    ) -> Principal<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .get_registry(category, index)
            .returns(ReturnsResult)
            .run()
    }

    pub fn registry_entry_error(
        &mut self,
        category: PermissionCategory,
        index: usize,
        error_message: &[u8],
    ) {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .get_registry(category, index)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn queued_change(&mut self, index: usize) -> QueuedChange<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .get_permission_queue(index)
            .returns(ReturnsResult)
            .run()
    }

    pub fn timelock_enabled(&mut self) -> bool {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .timelock_enabled()
            .returns(ReturnsResult)
            .run()
    }

    pub fn excess_reserves(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .get_excess_reserves()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_reserves(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .total_reserves()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_debt(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .total_debt()
            .returns(ReturnsResult)
            .run()
    }

    pub fn native_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .native_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn value_of(
        &mut self,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .value_of(asset.to_token_identifier(), amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn debtor_balance(&mut self, debtor: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.treasury_sc.clone())
            .typed(proxy_treasury::TreasuryProxy)
            .debtor_balance(debtor)
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_native_balance(&mut self, address: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .check_account(address)
            .esdt_balance(NATIVE_TOKEN, amount);
    }

    pub fn check_reserve_balance(&mut self, address: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .check_account(address)
            .esdt_balance(RESERVE_TOKEN, amount);
    }
}

/// Native/reserve pool and its supply controller, wired to an existing treasury.
pub struct SupplyControlSetup {
    pub pair_sc: ManagedAddress<StaticApi>,
    pub controller_sc: ManagedAddress<StaticApi>,
}

impl TreasuryTestState {
    /// Registers the pool LP token bound to a fresh supply controller, funds the pool with
    /// `native_liquidity` native and as many reserve units, and parks the owner's LP in
    /// the treasury. The owner must hold the native units already.
    pub fn setup_supply_control(&mut self, native_liquidity: u64) -> SupplyControlSetup {
        let pair_sc = deploy_pair(&mut self.world);
        let controller_sc = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .init(
                self.authority_sc.clone(),
                self.treasury_sc.clone(),
                pair_sc.clone(),
                NATIVE_TOKEN.to_token_identifier(),
            )
            .code(SUPPLY_CONTROLLER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.register_liquidity_asset(LP_TOKEN, &pair_sc, NATIVE_DECIMALS, RESERVE_DECIMALS);
        self.enable_with_binding(PermissionCategory::LiquidityToken, token(LP_TOKEN), &controller_sc);
        self.enable(
            PermissionCategory::LiquidityDepositor,
            account(OWNER_ADDRESS),
        );

        let lp_minted = self.add_liquidity(
            &pair_sc,
            native_units(native_liquidity),
            reserve_units(native_liquidity),
        );
        self.deposit(OWNER_ADDRESS, LP_TOKEN, lp_minted, BigUint::zero(), None);

        SupplyControlSetup {
            pair_sc,
            controller_sc,
        }
    }

    pub fn add_liquidity(
        &mut self,
        pair_sc: &ManagedAddress<StaticApi>,
        native_amount: BigUint<StaticApi>,
        reserve_amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        let mut payments = ManagedVec::<StaticApi, EsdtTokenPayment<StaticApi>>::new();
        payments.push(EsdtTokenPayment::new(
            NATIVE_TOKEN.to_token_identifier(),
            0,
            native_amount,
        ));
        payments.push(EsdtTokenPayment::new(
            RESERVE_TOKEN.to_token_identifier(),
            0,
            reserve_amount,
        ));

        let lp = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(pair_sc.clone())
            .typed(proxy_pair::PairMockProxy)
            .add_liquidity()
            .with_multi_token_transfer(payments)
            .returns(ReturnsResult)
            .run();

        lp.amount
    }

    pub fn set_control_params(
        &mut self,
        controller_sc: &ManagedAddress<StaticApi>,
        loss_ratio: u64,
        cf: u64,
        cc: u64,
        sampling_interval: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .set_supply_control_params(loss_ratio, cf, cc, sampling_interval)
            .run();
    }

    pub fn enable_supply_control(&mut self, controller_sc: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .enable_supply_control()
            .run();
    }

    pub fn compute(
        &mut self,
        controller_sc: &ManagedAddress<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>, bool) {
        let result: MultiValue3<BigUint<StaticApi>, BigUint<StaticApi>, bool> = self
            .world
            .query()
            .to(controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .compute()
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn pool_state(
        &mut self,
        pair_sc: &ManagedAddress<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue3<BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>> =
            self.world
                .query()
                .to(pair_sc.clone())
                .typed(proxy_pair::PairMockProxy)
                .get_reserves_and_total_supply()
                .returns(ReturnsResult)
                .run();

        result.into_tuple()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    for address in [
        OWNER_ADDRESS,
        DEPOSITOR_ADDRESS,
        MANAGER_ADDRESS,
        DEBTOR_ADDRESS,
    ] {
        world
            .account(address)
            .nonce(1)
            .esdt_balance(RESERVE_TOKEN, reserve_units(10_000_000))
            .esdt_balance(OTHER_RESERVE_TOKEN, BigUint::from(10u64).pow(12));
    }
    for address in [GUARDIAN_ADDRESS, POLICY_ADDRESS, VAULT_ADDRESS] {
        world.account(address).nonce(1);
    }
}

pub fn deploy_authority(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_authority::AuthorityProxy)
        .init(OWNER_ADDRESS, GUARDIAN_ADDRESS, POLICY_ADDRESS, VAULT_ADDRESS)
        .code(AUTHORITY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_treasury(
    world: &mut ScenarioWorld,
    authority_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let treasury_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_treasury::TreasuryProxy)
        .init(
            authority_sc,
            NATIVE_TOKEN.to_token_identifier(),
            TIMELOCK_DELAY,
        )
        .code(TREASURY_PATH)
        .code_metadata(CodeMetadata::PAYABLE_BY_SC)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(treasury_sc.clone(), NATIVE_TOKEN.as_bytes(), ESDT_ROLES);

    treasury_sc
}

pub fn deploy_twap(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_twap::TwapMockProxy)
        .init()
        .code(TWAP_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_pair(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let pair_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_pair::PairMockProxy)
        .init(
            NATIVE_TOKEN.to_token_identifier(),
            RESERVE_TOKEN.to_token_identifier(),
            LP_TOKEN.to_token_identifier(),
        )
        .code(PAIR_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(pair_sc.clone(), LP_TOKEN.as_bytes(), ESDT_ROLES);

    pair_sc
}
