//! Fee schedule constants for the intrinsic transaction cost.

/// Gas paid by every transaction.
pub const G_TRANSACTION: u64 = 21000;
/// Gas paid per zero byte of transaction data.
pub const G_TXDATAZERO: u64 = 4;
/// Gas paid per non-zero byte of transaction data (EIP-2028).
pub const G_TXDATANONZERO: u64 = 16;
/// Gas paid per non-zero byte of transaction data before EIP-2028.
pub const G_TXDATANONZERO_FRONTIER: u64 = 68;
/// Additional gas paid by a contract creation transaction.
pub const G_TXCREATE: u64 = 32000;
/// Gas paid per 32-byte word of init code (EIP-3860).
pub const G_INITCODE_WORD: u64 = 2;
/// Gas paid per address in the transaction access list (EIP-2930).
pub const G_ACCESS_LIST_ADDRESS: u64 = 2400;
/// Gas paid per storage key in the transaction access list (EIP-2930).
pub const G_ACCESS_LIST_STORAGE_KEY: u64 = 1900;
/// Maximum size of init code in bytes (EIP-3860).
pub const MAX_INITCODE_SIZE: usize = 0xc000;
