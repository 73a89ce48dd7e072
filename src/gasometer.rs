//! Pre-execution gas accounting.

use crate::config::Config;
use crate::error::PreExecutionError;
use crate::transaction::TransactionCost;

/// Meters the intrinsic charge of a transaction against its gas limit.
pub struct Gasometer<'config> {
	gas_limit: u64,
	used_gas: u64,
	config: &'config Config,
}

impl<'config> Gasometer<'config> {
	/// Create a new gasometer with the given gas limit and fork config.
	pub fn new(gas_limit: u64, config: &'config Config) -> Self {
		Self {
			gas_limit,
			used_gas: 0,
			config,
		}
	}

	/// Remaining gas.
	pub fn gas(&self) -> u64 {
		self.gas_limit - self.used_gas
	}

	/// Total gas charged so far.
	pub fn total_used_gas(&self) -> u64 {
		self.used_gas
	}

	/// Record an explicit cost.
	pub fn record_cost(&mut self, cost: u64) -> Result<(), PreExecutionError> {
		let all_gas_cost = self
			.used_gas
			.checked_add(cost)
			.ok_or(PreExecutionError::InsufficientGasLimit)?;
		if self.gas_limit < all_gas_cost {
			return Err(PreExecutionError::InsufficientGasLimit);
		}

		self.used_gas = all_gas_cost;
		Ok(())
	}

	/// Charge the intrinsic cost of a transaction. Fails when the gas limit
	/// cannot cover it.
	pub fn record_transaction(&mut self, cost: TransactionCost) -> Result<(), PreExecutionError> {
		let cost = cost.cost(self.config);
		log::trace!(
			target: "gasometer",
			"recording intrinsic cost {} against gas limit {}",
			cost,
			self.gas_limit,
		);
		self.record_cost(cost)
	}
}
