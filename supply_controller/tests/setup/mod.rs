use crate::constants::*;

use common_proxies::{proxy_authority, proxy_pair, proxy_supply_controller};

use multiversx_sc::{
    imports::MultiValue3,
    types::{BigUint, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult, TestAddress},
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(AUTHORITY_PATH, authority::ContractBuilder);
    blockchain.register_contract(PAIR_PATH, pair_mock::ContractBuilder);
    blockchain.register_contract(SUPPLY_CONTROLLER_PATH, supply_controller::ContractBuilder);

    blockchain
}

pub struct ControllerTestState {
    pub world: ScenarioWorld,
    pub authority_sc: ManagedAddress<StaticApi>,
    pub pair_sc: ManagedAddress<StaticApi>,
    pub controller_sc: ManagedAddress<StaticApi>,
}

impl Default for ControllerTestState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerTestState {
    /// Controller wired to an empty pool. `TREASURY_ADDRESS` is a plain account so tests
    /// can call the treasury-only endpoints from it.
    pub fn new() -> Self {
        let mut world = world();
        for address in [
            OWNER_ADDRESS,
            GUARDIAN_ADDRESS,
            POLICY_ADDRESS,
            VAULT_ADDRESS,
            TREASURY_ADDRESS,
            USER_ADDRESS,
        ] {
            world.account(address).nonce(1);
        }

        let authority_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_authority::AuthorityProxy)
            .init(OWNER_ADDRESS, GUARDIAN_ADDRESS, POLICY_ADDRESS, VAULT_ADDRESS)
            .code(AUTHORITY_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

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

        let controller_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .init(
                authority_sc.clone(),
                TREASURY_ADDRESS,
                pair_sc.clone(),
                NATIVE_TOKEN.to_token_identifier(),
            )
            .code(SUPPLY_CONTROLLER_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            authority_sc,
            pair_sc,
            controller_sc,
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_params(
        &mut self,
        from: TestAddress,
        loss_ratio: u64,
        cf: u64,
        cc: u64,
        sampling_interval: u64,
        error_message: Option<&[u8]>,
    ) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .set_supply_control_params(loss_ratio, cf, cc, sampling_interval);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn set_kp(&mut self, kp: u64, error_message: Option<&[u8]>) {
        let tx = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .set_p_coefficient(kp);

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn enable(&mut self, error_message: Option<&[u8]>) {
        let tx = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .enable_supply_control();

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn disable(&mut self, from: TestAddress, error_message: Option<&[u8]>) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .disable_supply_control();

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn record_sample(&mut self, from: TestAddress, error_message: Option<&[u8]>) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .record_sample();

        match error_message {
            Some(err) => tx
                .returns(ExpectMessage(core::str::from_utf8(err).unwrap()))
                .run(),
            None => tx.run(),
        }
    }

    pub fn compute(&mut self) -> (BigUint<StaticApi>, BigUint<StaticApi>, bool) {
        let result: MultiValue3<BigUint<StaticApi>, BigUint<StaticApi>, bool> = self
            .world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .compute()
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn is_enabled(&mut self) -> bool {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .enabled()
            .returns(ReturnsResult)
            .run()
    }

    pub fn params_set(&mut self) -> bool {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .params_set()
            .returns(ReturnsResult)
            .run()
    }

    pub fn loss_ratio(&mut self) -> u64 {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .loss_ratio()
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_sample(&mut self) -> u64 {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_supply_controller::SupplyControllerProxy)
            .last_sample()
            .returns(ReturnsResult)
            .run()
    }
}
