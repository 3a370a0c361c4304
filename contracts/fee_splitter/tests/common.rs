#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events},
    token, Address, Env, IntoVal, Symbol, Val,
};
use tidal_factory::testutils::{deploy_factory, MockPoolDeployerClient};
use tidal_factory::TidalFactoryClient;
use tidal_fee_splitter::{ProtocolFeeSplitter, ProtocolFeeSplitterClient};

pub struct Setup<'a> {
    pub primary: Address,
    pub secondary: Address,
    pub splitter: ProtocolFeeSplitterClient<'a>,
}

pub struct Protocol<'a> {
    pub owner: Address,
    pub primary: Address,
    pub secondary: Address,
    pub splitter: ProtocolFeeSplitterClient<'a>,
    pub factory: TidalFactoryClient<'a>,
    pub deployer: MockPoolDeployerClient<'a>,
}

/// Splitter with fresh stakeholders, not bound to any factory
pub fn setup_splitter(env: &Env) -> Setup<'_> {
    let primary = Address::generate(env);
    let secondary = Address::generate(env);
    let splitter_id = env.register(ProtocolFeeSplitter, (primary.clone(), secondary.clone()));
    Setup {
        primary,
        secondary,
        splitter: ProtocolFeeSplitterClient::new(env, &splitter_id),
    }
}

/// Splitter bound to a factory that names it protocol fee recipient
pub fn setup_protocol(env: &Env) -> Protocol<'_> {
    let Setup {
        primary,
        secondary,
        splitter,
    } = setup_splitter(env);
    let owner = Address::generate(env);
    let (factory, deployer) = deploy_factory(env, &owner, &splitter.address);
    splitter.set_factory_address(&factory.address);

    Protocol {
        owner,
        primary,
        secondary,
        splitter,
        factory,
        deployer,
    }
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Two asset contracts, lower address first
pub fn token_pair(env: &Env) -> (Address, Address) {
    let a = create_token(env);
    let b = create_token(env);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, of: &Address) -> i128 {
    token::Client::new(env, token).balance(of)
}

/// Emitting contract, name and payload of the most recent event
pub fn last_event(env: &Env) -> (Address, Symbol, Val) {
    let (contract, topics, data) = env.events().all().last().unwrap();
    let name: Symbol = topics.get_unchecked(0).into_val(env);
    (contract, name, data)
}
