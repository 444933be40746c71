#![no_std]

pub mod proxy_authority;
pub mod proxy_bond_depository;
pub mod proxy_pair;
pub mod proxy_supply_controller;
pub mod proxy_treasury;
pub mod proxy_twap;
