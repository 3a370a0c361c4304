use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};
use tidal_pool_deployer::{PoolDeployer, PoolDeployerClient};

pub fn pool_wasm_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[7u8; 32])
}

pub fn setup_deployer(env: &Env) -> PoolDeployerClient<'_> {
    let deployer_id = env.register(PoolDeployer, (pool_wasm_hash(env),));
    PoolDeployerClient::new(env, &deployer_id)
}

pub fn token_pair(env: &Env) -> (Address, Address) {
    let a = Address::generate(env);
    let b = Address::generate(env);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
