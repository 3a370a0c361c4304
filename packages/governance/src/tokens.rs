// Token pair helpers

use soroban_sdk::{Address, Env, String};

use crate::constants::{NULL_ACCOUNT_STRKEY, NULL_CONTRACT_STRKEY};

/// Order two token addresses so that `token0 < token1`
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

/// True for the all-zero account or contract address.
///
/// Soroban has no dedicated null address; these two strkeys stand in for it.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    let null_contract = Address::from_string(&String::from_str(env, NULL_CONTRACT_STRKEY));
    let null_account = Address::from_string(&String::from_str(env, NULL_ACCOUNT_STRKEY));
    *address == null_contract || *address == null_account
}
