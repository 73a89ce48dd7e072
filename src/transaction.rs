//! Transaction-level intrinsic cost.

use alloc::vec::Vec;

use primitive_types::{H160, H256};

use crate::config::Config;
use crate::costs::init_code_cost;

/// Destination of a transaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransactionAction {
	/// Message call to the given address.
	Call(H160),
	/// Contract creation. The transaction data is the init code.
	Create,
}

/// Transaction cost.
#[derive(Debug, Clone, Copy)]
pub enum TransactionCost {
	/// Call transaction cost.
	Call {
		/// Length of zeros in transaction data.
		zero_data_len: usize,
		/// Length of non-zeros in transaction data.
		non_zero_data_len: usize,
		/// Number of addresses in transaction access list (see EIP-2930)
		access_list_address_len: usize,
		/// Total number of storage keys in transaction access list (see EIP-2930)
		access_list_storage_len: usize,
	},
	/// Create transaction cost.
	Create {
		/// Length of zeros in transaction data.
		zero_data_len: usize,
		/// Length of non-zeros in transaction data.
		non_zero_data_len: usize,
		/// Number of addresses in transaction access list (see EIP-2930)
		access_list_address_len: usize,
		/// Total number of storage keys in transaction access list (see EIP-2930)
		access_list_storage_len: usize,
		/// Cost of initcode = 2 * ceil(len(initcode) / 32) (see EIP-3860)
		initcode_cost: u64,
	},
}

impl TransactionCost {
	/// Cost of a message call transaction with the given data and access list.
	pub fn call(data: &[u8], access_list: Option<&[(H160, Vec<H256>)]>) -> TransactionCost {
		let zero_data_len = data.iter().filter(|v| **v == 0).count();
		let non_zero_data_len = data.len() - zero_data_len;
		let (access_list_address_len, access_list_storage_len) = count_access_list(access_list);

		TransactionCost::Call {
			zero_data_len,
			non_zero_data_len,
			access_list_address_len,
			access_list_storage_len,
		}
	}

	/// Cost of a contract creation transaction with the given init code and
	/// access list.
	pub fn create(data: &[u8], access_list: Option<&[(H160, Vec<H256>)]>) -> TransactionCost {
		let zero_data_len = data.iter().filter(|v| **v == 0).count();
		let non_zero_data_len = data.len() - zero_data_len;
		let (access_list_address_len, access_list_storage_len) = count_access_list(access_list);
		let initcode_cost = init_code_cost(data.len() as u64);

		TransactionCost::Create {
			zero_data_len,
			non_zero_data_len,
			access_list_address_len,
			access_list_storage_len,
			initcode_cost,
		}
	}

	/// Evaluate the cost against a fork configuration.
	pub fn cost(&self, config: &Config) -> u64 {
		match self {
			TransactionCost::Call {
				zero_data_len,
				non_zero_data_len,
				access_list_address_len,
				access_list_storage_len,
			} => {
				config.gas_transaction_call()
					+ *zero_data_len as u64 * config.gas_transaction_zero_data()
					+ *non_zero_data_len as u64 * config.gas_transaction_non_zero_data()
					+ *access_list_address_len as u64 * config.gas_access_list_address()
					+ *access_list_storage_len as u64 * config.gas_access_list_storage_key()
			}
			TransactionCost::Create {
				zero_data_len,
				non_zero_data_len,
				access_list_address_len,
				access_list_storage_len,
				initcode_cost,
			} => {
				let mut cost = config.gas_transaction_create()
					+ *zero_data_len as u64 * config.gas_transaction_zero_data()
					+ *non_zero_data_len as u64 * config.gas_transaction_non_zero_data()
					+ *access_list_address_len as u64 * config.gas_access_list_address()
					+ *access_list_storage_len as u64 * config.gas_access_list_storage_key();
				if config.max_initcode_size().is_some() {
					cost += initcode_cost;
				}

				cost
			}
		}
	}
}

/// Counts the number of addresses and storage keys in the access list. An
/// absent access list counts the same as an empty one.
fn count_access_list(access_list: Option<&[(H160, Vec<H256>)]>) -> (usize, usize) {
	match access_list {
		Some(entries) => {
			let access_list_address_len = entries.len();
			let access_list_storage_len = entries.iter().map(|(_, keys)| keys.len()).sum();

			(access_list_address_len, access_list_storage_len)
		}
		None => (0, 0),
	}
}

/// Intrinsic gas of a transaction under the modern fee schedule: the minimum
/// gas it must supply before any execution.
pub fn calculate_intrinsic_cost(
	data: &[u8],
	action: &TransactionAction,
	access_list: Option<&[(H160, Vec<H256>)]>,
) -> u64 {
	let transaction_cost = match action {
		TransactionAction::Call(_) => TransactionCost::call(data, access_list),
		TransactionAction::Create => TransactionCost::create(data, access_list),
	};

	transaction_cost.cost(&Config::shanghai())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_call_costs_base_only() {
		let cost = calculate_intrinsic_cost(b"", &TransactionAction::Call(H160::zero()), None);
		assert_eq!(cost, 21000);
	}

	#[test]
	fn data_bytes_priced_by_content() {
		// 3 zero bytes and 2 non-zero bytes: 21000 + 3*4 + 2*16 = 21044
		let data = [0, 1, 0, 2, 0];
		let cost = calculate_intrinsic_cost(&data, &TransactionAction::Call(H160::zero()), None);
		assert_eq!(cost, 21044);
	}

	#[test]
	fn create_charges_surcharge_and_initcode_words() {
		// 33 bytes of init code round up to 2 words:
		// 21000 + 32000 + 33*16 + 2*2 = 53532
		let data = [1u8; 33];
		let cost = calculate_intrinsic_cost(&data, &TransactionAction::Create, None);
		assert_eq!(cost, 53532);
	}

	#[test]
	fn access_list_priced_per_address_and_key() {
		// 2400 + 1900*2 + 2400 + 1900*0 = 8600
		let access_list = [
			(H160::zero(), vec![H256::zero(), H256::from_low_u64_be(1)]),
			(H160::from_low_u64_be(1), vec![]),
		];
		let cost = calculate_intrinsic_cost(
			b"",
			&TransactionAction::Call(H160::zero()),
			Some(&access_list),
		);
		assert_eq!(cost, 21000 + 8600);
	}

	#[test]
	fn absent_and_empty_access_list_cost_the_same() {
		let action = TransactionAction::Call(H160::zero());
		assert_eq!(
			calculate_intrinsic_cost(b"", &action, None),
			calculate_intrinsic_cost(b"", &action, Some(&[])),
		);
	}

	#[test]
	fn pre_berlin_access_list_costs_nothing() {
		let access_list = [(H160::zero(), vec![H256::zero()])];
		let cost = TransactionCost::call(b"", Some(&access_list)).cost(&Config::istanbul());
		assert_eq!(cost, 21000);
	}

	#[test]
	fn pre_shanghai_create_skips_initcode_charge() {
		let data = [1u8; 64];
		let cost = TransactionCost::create(&data, None).cost(&Config::london());
		assert_eq!(cost, 53000 + 64 * 16);
	}

	#[test]
	fn frontier_create_has_no_surcharge() {
		let cost = TransactionCost::create(b"", None).cost(&Config::frontier());
		assert_eq!(cost, 21000);
	}
}
