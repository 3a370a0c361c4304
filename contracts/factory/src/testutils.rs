//! Test doubles for the factory's collaborators.
//!
//! `MockPool` implements the pool surface the factory drives
//! (`set_fee_protocol`, `collect_protocol`) on top of real token transfers.
//! `MockPoolDeployer` hands out pre-registered `MockPool` instances in the
//! order they were staged, so factory flows run without a pool wasm.

use soroban_sdk::{
    contract, contractimpl, contracttype, token, vec, Address, Env, IntoVal,
    Symbol, Vec,
};

use crate::TidalFactoryClient;

// ============================================================
// MOCK POOL
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockPoolConfig {
    pub factory: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
}

#[contracttype]
enum MockPoolKey {
    Config,
    FeeProtocol,
    ProtocolFees,
}

#[contract]
pub struct MockPool;

#[contractimpl]
impl MockPool {
    pub fn initialize(
        env: Env,
        factory: Address,
        token0: Address,
        token1: Address,
        fee: u32,
        tick_spacing: i32,
    ) {
        if env.storage().instance().has(&MockPoolKey::Config) {
            panic!("pool already initialized");
        }
        let config = MockPoolConfig {
            factory,
            token0,
            token1,
            fee,
            tick_spacing,
        };
        env.storage().instance().set(&MockPoolKey::Config, &config);
    }

    pub fn set_fee_protocol(env: Env, fee_protocol0: u32, fee_protocol1: u32) {
        Self::config(env.clone()).factory.require_auth();
        let packed = tidal_governance::pack_protocol_fees(fee_protocol0, fee_protocol1);
        env.storage().instance().set(&MockPoolKey::FeeProtocol, &packed);
    }

    pub fn fee_protocol(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&MockPoolKey::FeeProtocol)
            .unwrap_or(0)
    }

    /// Book protocol fees as if swaps had paid them. Tokens must already
    /// sit in the pool's balance.
    pub fn accrue_protocol_fees(env: Env, amount0: i128, amount1: i128) {
        let (fees0, fees1) = Self::protocol_fees(env.clone());
        env.storage()
            .instance()
            .set(&MockPoolKey::ProtocolFees, &(fees0 + amount0, fees1 + amount1));
    }

    pub fn protocol_fees(env: Env) -> (i128, i128) {
        env.storage()
            .instance()
            .get(&MockPoolKey::ProtocolFees)
            .unwrap_or((0, 0))
    }

    /// Pays out at most the requested amounts. A fully drained slot keeps
    /// one unit behind.
    pub fn collect_protocol(
        env: Env,
        recipient: Address,
        amount0_requested: i128,
        amount1_requested: i128,
    ) -> (i128, i128) {
        let config = Self::config(env.clone());
        config.factory.require_auth();

        let (fees0, fees1) = Self::protocol_fees(env.clone());
        let amount0 = collectable(amount0_requested, fees0);
        let amount1 = collectable(amount1_requested, fees1);

        env.storage()
            .instance()
            .set(&MockPoolKey::ProtocolFees, &(fees0 - amount0, fees1 - amount1));

        let pool = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &config.token0).transfer(&pool, &recipient, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &config.token1).transfer(&pool, &recipient, &amount1);
        }

        env.events().publish(
            (Symbol::new(&env, "CollectProtocol"),),
            (config.factory, recipient, amount0, amount1),
        );
        (amount0, amount1)
    }

    pub fn config(env: Env) -> MockPoolConfig {
        env.storage()
            .instance()
            .get(&MockPoolKey::Config)
            .expect("pool not initialized")
    }
}

fn collectable(requested: i128, accrued: i128) -> i128 {
    let amount = if requested > accrued { accrued } else { requested };
    if amount > 0 && amount == accrued {
        amount - 1
    } else {
        amount
    }
}

// ============================================================
// MOCK POOL DEPLOYER
// ============================================================

#[contracttype]
enum MockDeployerKey {
    Staged,
    Deployed(Address, Address, u32),
}

#[contract]
pub struct MockPoolDeployer;

#[contractimpl]
impl MockPoolDeployer {
    /// Queue a registered `MockPool` for the next `deploy`
    pub fn stage_pool(env: Env, pool: Address) {
        let mut staged = Self::staged(&env);
        staged.push_back(pool);
        env.storage().instance().set(&MockDeployerKey::Staged, &staged);
    }

    pub fn deploy(
        env: Env,
        factory: Address,
        token0: Address,
        token1: Address,
        fee: u32,
        tick_spacing: i32,
    ) -> Address {
        factory.require_auth();

        let deployed = MockDeployerKey::Deployed(token0.clone(), token1.clone(), fee);
        if env.storage().instance().has(&deployed) {
            panic!("pool address already in use");
        }

        let mut staged = Self::staged(&env);
        let pool = staged.pop_front().expect("no pool staged");
        env.storage().instance().set(&MockDeployerKey::Staged, &staged);
        env.storage().instance().set(&deployed, &pool);

        let _: () = env.invoke_contract(
            &pool,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                factory.into_val(&env),
                token0.into_val(&env),
                token1.into_val(&env),
                fee.into_val(&env),
                tick_spacing.into_val(&env),
            ],
        );
        pool
    }

    fn staged(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&MockDeployerKey::Staged)
            .unwrap_or(Vec::new(env))
    }
}

// ============================================================
// SETUP HELPERS
// ============================================================

/// Register a factory wired to a fresh `MockPoolDeployer`
pub fn deploy_factory<'a>(
    env: &Env,
    owner: &Address,
    protocol_fee_recipient: &Address,
) -> (TidalFactoryClient<'a>, MockPoolDeployerClient<'a>) {
    let deployer_id = env.register(MockPoolDeployer, ());
    let factory_id = env.register(
        crate::TidalFactory,
        (owner.clone(), deployer_id.clone(), protocol_fee_recipient.clone()),
    );
    (
        TidalFactoryClient::new(env, &factory_id),
        MockPoolDeployerClient::new(env, &deployer_id),
    )
}

/// Stage a new `MockPool` and create it through the factory
pub fn create_mock_pool(
    env: &Env,
    factory: &TidalFactoryClient,
    deployer: &MockPoolDeployerClient,
    token_a: &Address,
    token_b: &Address,
    fee: u32,
) -> Address {
    let pool = env.register(MockPool, ());
    deployer.stage_pool(&pool);
    factory.create_pool(token_a, token_b, &fee)
}
