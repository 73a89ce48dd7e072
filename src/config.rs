//! Fork configuration for the intrinsic fee schedule.

use crate::consts;

/// Configuration of the hard fork rules that affect the intrinsic
/// transaction cost.
#[derive(Clone, Debug)]
pub struct Config {
	/// Increase contract creation transaction cost.
	pub eip2_create_transaction_increase: bool,
	/// Call data gas cost reduction.
	pub eip2028_transaction_calldata_decrease: bool,
	/// EIP-2930: Optional access list.
	pub eip2930_access_list: bool,
	/// EIP-3860, maximum size limit of init_code.
	pub eip3860_max_initcode_size: bool,
}

impl Config {
	/// Frontier hard fork configuration.
	pub const fn frontier() -> Config {
		Config {
			eip2_create_transaction_increase: false,
			eip2028_transaction_calldata_decrease: false,
			eip2930_access_list: false,
			eip3860_max_initcode_size: false,
		}
	}

	/// Homestead
	pub const fn homestead() -> Config {
		let mut config = Self::frontier();
		config.eip2_create_transaction_increase = true;
		config
	}

	/// Istanbul hard fork configuration.
	pub const fn istanbul() -> Config {
		let mut config = Self::homestead();
		config.eip2028_transaction_calldata_decrease = true;
		config
	}

	/// Berlin
	pub const fn berlin() -> Config {
		let mut config = Self::istanbul();
		config.eip2930_access_list = true;
		config
	}

	/// London. No intrinsic cost changes over Berlin.
	pub const fn london() -> Config {
		Self::berlin()
	}

	/// Shanghai
	pub const fn shanghai() -> Config {
		let mut config = Self::london();
		config.eip3860_max_initcode_size = true;
		config
	}

	/// Gas paid for a message call transaction.
	pub fn gas_transaction_call(&self) -> u64 {
		consts::G_TRANSACTION
	}

	/// Gas paid for a contract creation transaction.
	pub fn gas_transaction_create(&self) -> u64 {
		if self.eip2_create_transaction_increase {
			consts::G_TRANSACTION + consts::G_TXCREATE
		} else {
			consts::G_TRANSACTION
		}
	}

	/// Gas paid for zero data in a transaction.
	pub fn gas_transaction_zero_data(&self) -> u64 {
		consts::G_TXDATAZERO
	}

	/// Gas paid for non-zero data in a transaction.
	pub fn gas_transaction_non_zero_data(&self) -> u64 {
		if self.eip2028_transaction_calldata_decrease {
			consts::G_TXDATANONZERO
		} else {
			consts::G_TXDATANONZERO_FRONTIER
		}
	}

	/// Gas paid per address in transaction access list (see EIP-2930).
	pub fn gas_access_list_address(&self) -> u64 {
		if self.eip2930_access_list {
			consts::G_ACCESS_LIST_ADDRESS
		} else {
			0
		}
	}

	/// Gas paid per storage key in transaction access list (see EIP-2930).
	pub fn gas_access_list_storage_key(&self) -> u64 {
		if self.eip2930_access_list {
			consts::G_ACCESS_LIST_STORAGE_KEY
		} else {
			0
		}
	}

	/// Maximum size limit of init code.
	pub fn max_initcode_size(&self) -> Option<usize> {
		if self.eip3860_max_initcode_size {
			Some(consts::MAX_INITCODE_SIZE)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn frontier_schedule() {
		let config = Config::frontier();
		assert_eq!(config.gas_transaction_call(), 21000);
		assert_eq!(config.gas_transaction_create(), 21000);
		assert_eq!(config.gas_transaction_zero_data(), 4);
		assert_eq!(config.gas_transaction_non_zero_data(), 68);
		assert_eq!(config.gas_access_list_address(), 0);
		assert_eq!(config.gas_access_list_storage_key(), 0);
		assert_eq!(config.max_initcode_size(), None);
	}

	#[test]
	fn homestead_increases_create_cost() {
		let config = Config::homestead();
		assert_eq!(config.gas_transaction_create(), 53000);
	}

	#[test]
	fn istanbul_decreases_non_zero_data_cost() {
		let config = Config::istanbul();
		assert_eq!(config.gas_transaction_non_zero_data(), 16);
	}

	#[test]
	fn berlin_prices_access_list() {
		let config = Config::berlin();
		assert_eq!(config.gas_access_list_address(), 2400);
		assert_eq!(config.gas_access_list_storage_key(), 1900);
	}

	#[test]
	fn shanghai_schedule() {
		let config = Config::shanghai();
		assert_eq!(config.gas_transaction_call(), 21000);
		assert_eq!(config.gas_transaction_create(), 53000);
		assert_eq!(config.gas_transaction_zero_data(), 4);
		assert_eq!(config.gas_transaction_non_zero_data(), 16);
		assert_eq!(config.gas_access_list_address(), 2400);
		assert_eq!(config.gas_access_list_storage_key(), 1900);
		assert_eq!(config.max_initcode_size(), Some(0xc000));
	}
}
