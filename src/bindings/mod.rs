//! Contract artifact registry
//!
//! Every generated binding module contributes one [`Artifact`]: the contract
//! name, its solc storage layout JSON and its runtime bytecode. On first access
//! the artifacts are parsed and registered into two process-wide tables keyed
//! by contract name:
//!
//! ```text
//!   layouts             name → StorageLayout
//!   deployed_bytecodes  name → "0x6080..."
//! ```
//!
//! The tables are never mutated after registration. A layout that fails to
//! parse, or a name registered twice, means the generator produced a broken
//! file, and registration panics.

pub mod l2_cross_domain_messenger;

use crate::bytecode::DeployedBytecode;
use crate::errors::BindingsError;
use crate::solc::StorageLayout;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Generated artifacts compiled into the crate.
const ARTIFACTS: &[Artifact] = &[l2_cross_domain_messenger::ARTIFACT];

/// Raw compiler output for one contract, as embedded by a binding module.
#[derive(Debug, Clone, Copy)]
pub struct Artifact {
    /// Contract name used as registry key
    pub name: &'static str,
    /// solc `storageLayout` JSON
    pub storage_layout_json: &'static str,
    /// Runtime bytecode as `0x`-prefixed hex
    pub deployed_bin: &'static str,
}

impl Artifact {
    /// Parse the embedded layout.
    ///
    /// # Panics
    ///
    /// If the embedded JSON is malformed.
    fn storage_layout(&self) -> StorageLayout {
        StorageLayout::from_json(self.storage_layout_json).unwrap_or_else(|err| {
            panic!("embedded storage layout of {} is malformed: {err}", self.name)
        })
    }
}

/// The two registry tables, filled once from [`ARTIFACTS`].
struct Registry {
    layouts: HashMap<&'static str, StorageLayout>,
    deployed_bytecodes: HashMap<&'static str, &'static str>,
}

impl Registry {
    fn from_artifacts(artifacts: &[Artifact]) -> Self {
        let mut registry = Self {
            layouts: HashMap::with_capacity(artifacts.len()),
            deployed_bytecodes: HashMap::with_capacity(artifacts.len()),
        };
        for artifact in artifacts {
            registry.register(artifact);
        }
        registry
    }

    fn register(&mut self, artifact: &Artifact) {
        let layout = artifact.storage_layout();
        debug!(
            contract = artifact.name,
            variables = layout.len(),
            types = layout.types().len(),
            "Registering contract artifacts"
        );

        if self.layouts.insert(artifact.name, layout).is_some() {
            panic!("contract {} is registered twice", artifact.name);
        }
        self.deployed_bytecodes
            .insert(artifact.name, artifact.deployed_bin.trim());
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry::from_artifacts(ARTIFACTS));

/// Register all artifacts now instead of on first lookup.
pub fn init() {
    LazyLock::force(&REGISTRY);
}

/// Storage layouts keyed by contract name.
pub fn layouts() -> &'static HashMap<&'static str, StorageLayout> {
    &REGISTRY.layouts
}

/// Hex runtime bytecode keyed by contract name.
pub fn deployed_bytecodes() -> &'static HashMap<&'static str, &'static str> {
    &REGISTRY.deployed_bytecodes
}

/// Registered contract names, sorted.
pub fn contract_names() -> Vec<&'static str> {
    let mut names: Vec<_> = layouts().keys().copied().collect();
    names.sort_unstable();
    names
}

/// Storage layout of the named contract.
pub fn get_storage_layout(name: &str) -> Result<&'static StorageLayout, BindingsError> {
    layouts()
        .get(name)
        .ok_or_else(|| BindingsError::UnknownContract(name.to_string()))
}

/// Hex runtime bytecode of the named contract.
pub fn get_deployed_bytecode(name: &str) -> Result<&'static str, BindingsError> {
    deployed_bytecodes()
        .get(name)
        .copied()
        .ok_or_else(|| BindingsError::UnknownContract(name.to_string()))
}

/// Decoded runtime bytecode of the named contract.
pub fn get_deployed_code(name: &str) -> Result<DeployedBytecode, BindingsError> {
    DeployedBytecode::from_hex(get_deployed_bytecode(name)?)
}

/// Validate the layout and runtime code registered under `name`.
///
/// Missing compiler metadata is logged but not treated as a failure.
pub fn check_contract(name: &str) -> Result<(), BindingsError> {
    check_artifact(name, get_storage_layout(name)?, &get_deployed_code(name)?)
}

/// Run [`check_contract`] on every registered contract, in name order.
pub fn check_contracts() -> Vec<(&'static str, Result<(), BindingsError>)> {
    contract_names()
        .into_iter()
        .map(|name| (name, check_contract(name)))
        .collect()
}

fn check_artifact(
    name: &str,
    layout: &StorageLayout,
    code: &DeployedBytecode,
) -> Result<(), BindingsError> {
    layout.validate()?;
    if code.is_empty() {
        return Err(BindingsError::EmptyBytecode(name.to_string()));
    }
    if code.split_metadata().is_none() {
        warn!(contract = name, "Deployed bytecode carries no compiler metadata");
    }
    Ok(())
}
