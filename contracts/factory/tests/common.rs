#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, IntoVal, String, Symbol, Val,
};
use tidal_factory::testutils::{deploy_factory, MockPoolDeployerClient};
use tidal_factory::TidalFactoryClient;
use tidal_governance::NULL_CONTRACT_STRKEY;

pub struct Setup<'a> {
    pub owner: Address,
    pub recipient: Address,
    pub factory: TidalFactoryClient<'a>,
    pub deployer: MockPoolDeployerClient<'a>,
}

pub fn setup_factory(env: &Env) -> Setup<'_> {
    let owner = Address::generate(env);
    let recipient = Address::generate(env);
    let (factory, deployer) = deploy_factory(env, &owner, &recipient);
    Setup {
        owner,
        recipient,
        factory,
        deployer,
    }
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Two generated addresses, lower one first
pub fn token_pair(env: &Env) -> (Address, Address) {
    let a = Address::generate(env);
    let b = Address::generate(env);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn null_token(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_CONTRACT_STRKEY))
}

/// Emitting contract, name and payload of the most recent event
pub fn last_event(env: &Env) -> (Address, Symbol, Val) {
    let (contract, topics, data) = env.events().all().last().unwrap();
    let name: Symbol = topics.get_unchecked(0).into_val(env);
    (contract, name, data)
}
