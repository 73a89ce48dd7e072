//! Intrinsic gas metering for Ethereum-like transactions.
//!
//! Every transaction pays a minimum amount of gas before any execution
//! happens, covering base overhead, payload bytes, contract creation and
//! declared storage access. This crate computes that cost and provides a
//! small gasometer to charge it against a transaction's gas limit.

#![deny(warnings)]
#![forbid(unsafe_code, unused_variables)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod consts;

mod config;
mod costs;
mod error;
mod gasometer;
mod transaction;

pub use crate::config::Config;
pub use crate::costs::{ceil32, init_code_cost};
pub use crate::error::PreExecutionError;
pub use crate::gasometer::Gasometer;
pub use crate::transaction::{calculate_intrinsic_cost, TransactionAction, TransactionCost};
