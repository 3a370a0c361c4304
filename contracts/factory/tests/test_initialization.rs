mod common;

use soroban_sdk::Env;

#[test]
fn test_constructor_records_roles() {
    let env = Env::default();
    env.mock_all_auths();

    let setup = common::setup_factory(&env);

    assert_eq!(setup.factory.owner(), setup.owner);
    assert_eq!(setup.factory.pool_deployer(), setup.deployer.address);
    assert_eq!(setup.factory.protocol_fee_recipient(), setup.recipient);
}

#[test]
fn test_default_fee_tiers() {
    let env = Env::default();
    env.mock_all_auths();

    let setup = common::setup_factory(&env);

    // 0.05%, 0.3% and 1%
    assert_eq!(setup.factory.fee_amount_tick_spacing(&500), Some(10));
    assert_eq!(setup.factory.fee_amount_tick_spacing(&3_000), Some(60));
    assert_eq!(setup.factory.fee_amount_tick_spacing(&10_000), Some(200));

    assert_eq!(setup.factory.fee_amount_tick_spacing(&250), None);
    assert_eq!(setup.factory.fee_amount_tick_spacing(&0), None);
}

#[test]
fn test_default_protocol_fees() {
    let env = Env::default();
    env.mock_all_auths();

    let setup = common::setup_factory(&env);

    assert_eq!(setup.factory.default_protocol_fees(), 17);
    assert_eq!(setup.factory.default_protocol_fee_rates(), (1, 1));
}

#[test]
fn test_registry_starts_empty() {
    let env = Env::default();
    env.mock_all_auths();

    let setup = common::setup_factory(&env);
    let (token0, token1) = common::token_pair(&env);

    assert_eq!(setup.factory.pool_count(), 0);
    assert_eq!(setup.factory.pool_at(&0), None);
    assert_eq!(setup.factory.get_pool(&token0, &token1, &500), None);
}
