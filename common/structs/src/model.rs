#![no_std]

use common_constants::MANAGER_DELAY_MULTIPLIER;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Principals allowed to act on the protocol, resolved once per call from the authority contract.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct AuthorityContext<M: ManagedTypeApi> {
    pub governor: ManagedAddress<M>,
    pub guardian: ManagedAddress<M>,
    pub policy: ManagedAddress<M>,
    pub vault: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> AuthorityContext<M> {
    pub fn is_governor(&self, address: &ManagedAddress<M>) -> bool {
        &self.governor == address
    }

    pub fn is_guardian(&self, address: &ManagedAddress<M>) -> bool {
        &self.guardian == address
    }

    pub fn is_policy(&self, address: &ManagedAddress<M>) -> bool {
        &self.policy == address
    }

    pub fn role(&self, role: AuthorityRole) -> &ManagedAddress<M> {
        match role {
            AuthorityRole::Governor => &self.governor,
            AuthorityRole::Guardian => &self.guardian,
            AuthorityRole::Policy => &self.policy,
            AuthorityRole::Vault => &self.vault,
        }
    }

    pub fn set_role(&mut self, role: AuthorityRole, address: ManagedAddress<M>) {
        match role {
            AuthorityRole::Governor => self.governor = address,
            AuthorityRole::Guardian => self.guardian = address,
            AuthorityRole::Policy => self.policy = address,
            AuthorityRole::Vault => self.vault = address,
        }
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthorityRole {
    Governor,
    Guardian,
    Policy,
    Vault,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PermissionCategory {
    ReserveDepositor,
    ReserveSpender,
    ReserveToken,
    ReserveManager,
    LiquidityDepositor,
    LiquidityToken,
    LiquidityManager,
    ReserveDebtor,
    RewardManager,
    StakedTokenBinding,
}

impl PermissionCategory {
    /// Categories whose principal is a token instead of an account
    pub fn is_token_category(&self) -> bool {
        matches!(
            self,
            PermissionCategory::ReserveToken
                | PermissionCategory::LiquidityToken
                | PermissionCategory::StakedTokenBinding
        )
    }

    pub fn is_manager(&self) -> bool {
        matches!(
            self,
            PermissionCategory::ReserveManager | PermissionCategory::LiquidityManager
        )
    }

    /// Number of base delays a queued change of this category has to wait
    pub fn delay_multiplier(&self) -> u64 {
        if self.is_manager() {
            MANAGER_DELAY_MULTIPLIER
        } else {
            1
        }
    }
}

/// Subject of a permission: an account for role categories, a token for token categories.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub enum Principal<M: ManagedTypeApi> {
    Account(ManagedAddress<M>),
    Token(TokenIdentifier<M>),
}

impl<M: ManagedTypeApi> Principal<M> {
    pub fn is_token(&self) -> bool {
        matches!(self, Principal::Token(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Principal::Account(address) => address.is_zero(),
            Principal::Token(token) => !token.is_valid_esdt_identifier(),
        }
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct QueuedChange<M: ManagedTypeApi> {
    pub category: PermissionCategory,
    pub principal: Principal<M>,
    pub secondary_binding: Option<ManagedAddress<M>>,
    pub timelock_end: u64,
    pub executed: bool,
    pub nullified: bool,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssetKind {
    Reserve,
    Liquidity,
    Priced,
}

/// How the treasury values a token.
///
/// - `Reserve`: `source` and `pool` are unused.
/// - `Liquidity`: `source` is the constant-product pair, `first_decimals`/`second_decimals`
///   are the precisions of the pair tokens in pair order.
/// - `Priced`: `source` is the time-weighted price feed and `pool` the key it is queried with.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct AssetConfig<M: ManagedTypeApi> {
    pub kind: AssetKind,
    pub decimals: usize,
    pub source: ManagedAddress<M>,
    pub pool: ManagedAddress<M>,
    pub first_decimals: usize,
    pub second_decimals: usize,
}

impl<M: ManagedTypeApi> AssetConfig<M> {
    pub fn is_reserve(&self) -> bool {
        self.kind == AssetKind::Reserve
    }

    pub fn is_liquidity(&self) -> bool {
        self.kind == AssetKind::Liquidity
    }

    pub fn is_priced(&self) -> bool {
        self.kind == AssetKind::Priced
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuoteKind {
    Reserve,
    Liquidity,
    NonReserve,
}

impl QuoteKind {
    pub fn from_flags(is_reserve: bool, is_liquidity: bool) -> Self {
        if is_liquidity {
            QuoteKind::Liquidity
        } else if is_reserve {
            QuoteKind::Reserve
        } else {
            QuoteKind::NonReserve
        }
    }

    /// Reserve and liquidity quotes are credited through the treasury deposit
    pub fn is_backing(&self) -> bool {
        *self != QuoteKind::NonReserve
    }
}

/// Arguments of a new bond market.
///
/// `capacity` is in native units, or in quote units when `capacity_in_quote` is set.
/// `initial_price` is WAD scaled quote per native token. `debt_buffer` is the share of the
/// target debt, over `DEBT_BUFFER_PRECISION`, the market may overshoot before it closes.
/// `vesting` is a duration for fixed-term markets and a timestamp otherwise.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub capacity: BigUint<M>,
    pub initial_price: BigUint<M>,
    pub debt_buffer: u64,
    pub capacity_in_quote: bool,
    pub quote_is_reserve: bool,
    pub quote_is_liquidity: bool,
    pub fixed_term: bool,
    pub vesting: u64,
    pub conclusion: u64,
    pub deposit_interval: u64,
    pub tune_interval: u64,
}

/// Mutable sale state of a bond market. Native amounts carry `NATIVE_DECIMALS`,
/// quote amounts carry the quote decimals recorded in `Metadata`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Market<M: ManagedTypeApi> {
    pub quote_token: TokenIdentifier<M>,
    pub quote_kind: QuoteKind,
    pub capacity_in_quote: bool,
    pub capacity: BigUint<M>,
    pub total_debt: BigUint<M>,
    pub max_payout: BigUint<M>,
    pub sold: BigUint<M>,
    pub purchased: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Terms<M: ManagedTypeApi> {
    pub fixed_term: bool,
    pub control_variable: BigUint<M>,
    pub vesting: u64,
    pub conclusion: u64,
    pub max_debt: BigUint<M>,
}

impl<M: ManagedTypeApi> Terms<M> {
    /// Fixed-term notes vest `vesting` seconds after purchase, fixed-expiry notes at `vesting`
    pub fn expiry_for(&self, now: u64) -> u64 {
        if self.fixed_term {
            now + self.vesting
        } else {
            self.vesting
        }
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Metadata {
    pub last_tune: u64,
    pub last_decay: u64,
    pub length: u64,
    pub deposit_interval: u64,
    pub tune_interval: u64,
    pub quote_decimals: usize,
}

/// Pending decrease of a control variable, released linearly over `time_to_adjusted`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Adjustment<M: ManagedTypeApi> {
    pub change: BigUint<M>,
    pub last_adjustment: u64,
    pub time_to_adjusted: u64,
    pub active: bool,
}

impl<M: ManagedTypeApi> Default for Adjustment<M> {
    fn default() -> Self {
        Adjustment {
            change: BigUint::zero(),
            last_adjustment: 0,
            time_to_adjusted: 0,
            active: false,
        }
    }
}

/// A purchased bond, paid in full once `matured` is reached.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct Note<M: ManagedTypeApi> {
    pub payout: BigUint<M>,
    pub created: u64,
    pub matured: u64,
    pub market_id: usize,
}

impl<M: ManagedTypeApi> Note<M> {
    pub fn is_matured(&self, now: u64) -> bool {
        now >= self.matured
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct SupplyControlParams {
    pub loss_ratio: u64,
    pub cf: u64,
    pub cc: u64,
    pub sampling_interval: u64,
}

/// Outcome of one supply controller sample. A zero `base_amount` means no action.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct SupplyCorrection<M: ManagedTypeApi> {
    pub base_amount: BigUint<M>,
    pub lp_amount: BigUint<M>,
    pub is_burn: bool,
}

impl<M: ManagedTypeApi> SupplyCorrection<M> {
    pub fn none() -> Self {
        SupplyCorrection {
            base_amount: BigUint::zero(),
            lp_amount: BigUint::zero(),
            is_burn: false,
        }
    }

    pub fn is_none(&self) -> bool {
        self.base_amount == 0u64 && self.lp_amount == 0u64
    }
}
