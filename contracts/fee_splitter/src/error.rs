// Fee splitter error module

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeeSplitterError {
    // Authorization errors (100-199)
    Unauthorized = 100,

    // State errors (300-399)
    AlreadyBound = 300,
    NotBound = 301,
}
