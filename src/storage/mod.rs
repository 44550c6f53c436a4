//! Layout-driven storage decoding
//!
//! Reads state variables out of raw contract storage using a [`StorageLayout`]
//! instead of hand-maintained slot constants.
//!
//! Packed values are right-aligned: a variable at `offset` with
//! `numberOfBytes = n` occupies bytes `[32 - offset - n, 32 - offset)` of the
//! big-endian storage word. Mapping values live at
//! `keccak256(abi.encode(key, slot))`.

pub mod helpers;

pub use helpers::{encode_address_key, extract_packed, mapping_slot};

use crate::errors::BindingsError;
use crate::solc::StorageLayout;
use alloy_primitives::{Address, B256, U256};
use std::collections::BTreeMap;
use tracing::trace;

/// Trait for reading contract storage slots.
pub trait StorageReader {
    /// Read a storage slot value from a contract address.
    /// Returns None if the contract or slot doesn't exist.
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256>;
}

/// In-memory storage, e.g. for genesis allocations or tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: BTreeMap<(Address, U256), B256>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a full storage word.
    pub fn set(&mut self, address: Address, slot: U256, value: B256) {
        self.slots.insert((address, slot), value);
    }

    /// Builder-style [`MemoryStorage::set`].
    pub fn with_slot(mut self, address: Address, slot: U256, value: B256) -> Self {
        self.set(address, slot, value);
        self
    }
}

impl StorageReader for MemoryStorage {
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256> {
        self.slots.get(&(address, slot)).copied()
    }
}

/// Read a single-word state variable by label.
///
/// Unset slots read as zero, like the EVM.
pub fn read_variable(
    reader: &impl StorageReader,
    address: Address,
    layout: &StorageLayout,
    label: &str,
) -> Result<U256, BindingsError> {
    let entry = layout.require_entry(label)?;
    let ty = layout.entry_type(entry)?;
    if !ty.fits_in_word() {
        return Err(BindingsError::NotAScalar {
            label: label.to_string(),
            ty: entry.ty.clone(),
        });
    }
    layout.check_packing(entry, ty)?;

    let word = reader.read_storage(address, entry.slot).unwrap_or_default();
    trace!(target: "storage", %address, label, slot = %entry.slot, "Read variable");
    Ok(extract_packed(word, entry.offset, ty.number_of_bytes))
}

/// Read the value stored under `key` in a mapping state variable.
///
/// `key` must already be ABI encoded to 32 bytes (see [`encode_address_key`]).
pub fn read_mapping_value(
    reader: &impl StorageReader,
    address: Address,
    layout: &StorageLayout,
    label: &str,
    key: B256,
) -> Result<U256, BindingsError> {
    let entry = layout.require_entry(label)?;
    let ty = layout.entry_type(entry)?;
    let Some(value_ty) = ty.value.as_deref().filter(|_| ty.is_mapping()) else {
        return Err(BindingsError::NotAMapping(label.to_string()));
    };

    let value = layout.get_type(value_ty)?;
    if !value.fits_in_word() {
        return Err(BindingsError::NotAScalar {
            label: label.to_string(),
            ty: value_ty.to_string(),
        });
    }

    let slot = mapping_slot(key, entry.slot);
    let word = reader.read_storage(address, slot).unwrap_or_default();
    trace!(target: "storage", %address, label, %key, %slot, "Read mapping value");
    Ok(extract_packed(word, 0, value.number_of_bytes))
}
