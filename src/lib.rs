//! # op-bindings - OP-stack contract artifact registry
//!
//! Ships the solc storage layout and runtime bytecode of OP-stack predeploy
//! contracts, registered into process-wide tables keyed by contract name, so
//! that simulators, genesis builders and deployment tooling can use the exact
//! on-chain code and slot assignments without recompiling the contracts.

pub mod bindings;
pub mod bytecode;
pub mod cli;
pub mod errors;
pub mod output;
pub mod predeploys;
pub mod solc;
pub mod storage;

pub use bindings::{get_deployed_bytecode, get_deployed_code, get_storage_layout};
pub use bytecode::DeployedBytecode;
pub use errors::BindingsError;
pub use solc::{StorageLayout, StorageLayoutEntry, StorageLayoutType};
