//! Solidity compiler storage layout types
//!
//! Mirrors the `storageLayout` section of solc's standard JSON output. A layout
//! is an ordered list of state variables, each pinned to a slot and a byte
//! offset inside that slot, plus a table describing every type those
//! variables reference.
//!
//! Packing rules that the layout must obey:
//!   - a value of at most 32 bytes lives entirely inside one slot
//!     (`offset + numberOfBytes <= 32`)
//!   - a value wider than one word starts a fresh slot (`offset == 0`) and
//!     spans `ceil(numberOfBytes / 32)` consecutive slots
//!   - variables appear in ascending storage order and never overlap

mod numeric;

use crate::errors::BindingsError;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Size of one EVM storage word in bytes.
pub const WORD_SIZE: u64 = 32;

/// How the compiler encodes a type in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Stored directly in the slot(s) at the variable's position
    Inplace,
    /// `mapping(K => V)`: values live at `keccak256(key . slot)`
    Mapping,
    /// `T[]`: length in the slot, data at `keccak256(slot)`
    DynamicArray,
    /// `bytes` / `string`: short values inline, long values at `keccak256(slot)`
    Bytes,
}

/// Storage layout of a single contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLayout {
    /// State variables in declaration order
    pub storage: Vec<StorageLayoutEntry>,
    /// Type descriptors keyed by type identifier (e.g. `t_uint256`)
    #[serde(default)]
    pub types: BTreeMap<String, StorageLayoutType>,
}

/// A state variable pinned to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutEntry {
    /// AST node id of the variable declaration
    pub ast_id: u64,
    /// Fully qualified declaring contract (`path/File.sol:Name`)
    pub contract: String,
    /// Variable name
    pub label: String,
    /// Byte offset inside the slot, counted from the least significant end
    pub offset: u64,
    /// Slot index
    #[serde(with = "numeric::u256_string")]
    pub slot: U256,
    /// Type identifier, a key of [`StorageLayout::types`]
    #[serde(rename = "type")]
    pub ty: String,
}

/// Encoding metadata for one type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutType {
    /// Storage encoding strategy
    pub encoding: Encoding,
    /// Human readable type (e.g. `mapping(bytes32 => bool)`)
    pub label: String,
    /// Width of the type in storage
    #[serde(with = "numeric::u64_string")]
    pub number_of_bytes: u64,
    /// Element type of arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Key type of mappings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Value type of mappings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Struct members, laid out relative to the struct's first slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<StorageLayoutEntry>>,
}

impl StorageLayoutType {
    /// Number of consecutive slots the type occupies at its position.
    pub fn slots_spanned(&self) -> u64 {
        self.number_of_bytes.div_ceil(WORD_SIZE).max(1)
    }

    /// Whether the value sits in a single word and can be read directly.
    pub fn fits_in_word(&self) -> bool {
        self.encoding == Encoding::Inplace && self.number_of_bytes <= WORD_SIZE
    }

    /// Whether this is a `mapping` type.
    pub fn is_mapping(&self) -> bool {
        self.encoding == Encoding::Mapping
    }

    /// Type identifiers this descriptor points at.
    fn referenced_types(&self) -> impl Iterator<Item = &str> {
        let members = self.members.iter().flatten().map(|member| member.ty.as_str());
        [&self.base, &self.key, &self.value]
            .into_iter()
            .filter_map(|ty| ty.as_deref())
            .chain(members)
    }
}

impl StorageLayout {
    /// Parse a layout from solc's JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// State variables in declaration order.
    pub fn entries(&self) -> &[StorageLayoutEntry] {
        &self.storage
    }

    /// Type descriptors keyed by identifier.
    pub fn types(&self) -> &BTreeMap<String, StorageLayoutType> {
        &self.types
    }

    /// Number of state variables.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the contract declares no state variables.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Contract name taken from the declaring contract of the first entry.
    pub fn contract_name(&self) -> Option<&str> {
        let qualified = &self.storage.first()?.contract;
        Some(qualified.rsplit(':').next().unwrap_or(qualified))
    }

    /// Find a state variable by label.
    pub fn entry(&self, label: &str) -> Option<&StorageLayoutEntry> {
        self.storage.iter().find(|entry| entry.label == label)
    }

    /// Find a state variable by label, failing with [`BindingsError::UnknownLabel`].
    pub fn require_entry(&self, label: &str) -> Result<&StorageLayoutEntry, BindingsError> {
        self.entry(label).ok_or_else(|| BindingsError::UnknownLabel {
            contract: self.contract_name().unwrap_or("<empty layout>").to_string(),
            label: label.to_string(),
        })
    }

    /// Look up a type descriptor by identifier.
    pub fn get_type(&self, ty: &str) -> Result<&StorageLayoutType, BindingsError> {
        self.types
            .get(ty)
            .ok_or_else(|| BindingsError::UnknownType(ty.to_string()))
    }

    /// Type descriptor of a state variable.
    pub fn entry_type(
        &self,
        entry: &StorageLayoutEntry,
    ) -> Result<&StorageLayoutType, BindingsError> {
        self.get_type(&entry.ty)
    }

    /// Type descriptor of the state variable with this label.
    pub fn type_of(&self, label: &str) -> Result<&StorageLayoutType, BindingsError> {
        self.entry_type(self.require_entry(label)?)
    }

    /// State variables packed into `slot`, in declaration order.
    pub fn entries_in_slot(&self, slot: U256) -> impl Iterator<Item = &StorageLayoutEntry> {
        self.storage.iter().filter(move |entry| entry.slot == slot)
    }

    /// Number of slots from slot 0 up to the end of the last variable.
    pub fn slot_count(&self) -> Result<U256, BindingsError> {
        let mut end = U256::ZERO;
        for entry in &self.storage {
            let spanned = U256::from(self.entry_type(entry)?.slots_spanned());
            let entry_end = entry.slot.checked_add(spanned).ok_or_else(|| {
                BindingsError::InvalidLayout(format!("`{}` runs past the last slot", entry.label))
            })?;
            end = end.max(entry_end);
        }
        Ok(end)
    }

    /// Check that every referenced type is described and that variables obey
    /// the storage packing rules.
    pub fn validate(&self) -> Result<(), BindingsError> {
        self.validate_type_references()?;

        let mut previous: Option<(&str, U256)> = None;
        for entry in &self.storage {
            let ty = self.entry_type(entry)?;
            let width = ty.number_of_bytes;

            if width <= WORD_SIZE {
                self.check_packing(entry, ty)?;
            } else if entry.offset != 0 {
                return Err(BindingsError::InvalidLayout(format!(
                    "`{}` spans multiple slots but starts at offset {}",
                    entry.label, entry.offset
                )));
            }

            let start = byte_position(entry.slot, entry.offset).ok_or_else(|| {
                BindingsError::InvalidLayout(format!("slot of `{}` is out of range", entry.label))
            })?;
            if let Some((prev_label, prev_end)) = previous {
                if start < prev_end {
                    return Err(BindingsError::InvalidLayout(format!(
                        "`{}` overlaps or precedes `{prev_label}`",
                        entry.label
                    )));
                }
            }

            let occupied = if width <= WORD_SIZE {
                U256::from(width)
            } else {
                U256::from(ty.slots_spanned()) * U256::from(WORD_SIZE)
            };
            let end = start.checked_add(occupied).ok_or_else(|| {
                BindingsError::InvalidLayout(format!("`{}` runs past the last slot", entry.label))
            })?;
            previous = Some((entry.label.as_str(), end));
        }

        Ok(())
    }

    /// Check that a single-word variable ends inside its slot.
    pub(crate) fn check_packing(
        &self,
        entry: &StorageLayoutEntry,
        ty: &StorageLayoutType,
    ) -> Result<(), BindingsError> {
        let width = ty.number_of_bytes;
        match entry.offset.checked_add(width) {
            Some(end) if end <= WORD_SIZE => Ok(()),
            _ => Err(BindingsError::InvalidLayout(format!(
                "`{}` at offset {} with {width} bytes overflows slot {}",
                entry.label, entry.offset, entry.slot
            ))),
        }
    }

    fn validate_type_references(&self) -> Result<(), BindingsError> {
        let mut referenced: BTreeSet<&str> =
            self.storage.iter().map(|entry| entry.ty.as_str()).collect();
        for ty in self.types.values() {
            referenced.extend(ty.referenced_types());
        }

        match referenced.into_iter().find(|ty| !self.types.contains_key(*ty)) {
            Some(missing) => Err(BindingsError::UnknownType(missing.to_string())),
            None => Ok(()),
        }
    }
}

/// Absolute byte position of `offset` within `slot`, or `None` on overflow.
fn byte_position(slot: U256, offset: u64) -> Option<U256> {
    slot.checked_mul(U256::from(WORD_SIZE))?
        .checked_add(U256::from(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKED_LAYOUT: &str = r#"{
        "storage": [
            {"astId": 1, "contract": "src/Packed.sol:Packed", "label": "owner", "offset": 0, "slot": "0", "type": "t_address"},
            {"astId": 2, "contract": "src/Packed.sol:Packed", "label": "paused", "offset": 20, "slot": "0", "type": "t_bool"},
            {"astId": 3, "contract": "src/Packed.sol:Packed", "label": "history", "offset": 0, "slot": "1", "type": "t_array(t_uint256)3_storage"},
            {"astId": 4, "contract": "src/Packed.sol:Packed", "label": "balances", "offset": 0, "slot": "4", "type": "t_mapping(t_address,t_uint256)"}
        ],
        "types": {
            "t_address": {"encoding": "inplace", "label": "address", "numberOfBytes": "20"},
            "t_array(t_uint256)3_storage": {"encoding": "inplace", "label": "uint256[3]", "numberOfBytes": "96", "base": "t_uint256"},
            "t_bool": {"encoding": "inplace", "label": "bool", "numberOfBytes": "1"},
            "t_mapping(t_address,t_uint256)": {"encoding": "mapping", "label": "mapping(address => uint256)", "numberOfBytes": "32", "key": "t_address", "value": "t_uint256"},
            "t_uint256": {"encoding": "inplace", "label": "uint256", "numberOfBytes": "32"}
        }
    }"#;

    fn packed() -> StorageLayout {
        StorageLayout::from_json(PACKED_LAYOUT).unwrap()
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_stringified_numbers() {
        let layout = packed();
        assert_eq!(layout.len(), 4);
        assert_eq!(layout.types().len(), 5);

        let history = layout.entry("history").unwrap();
        assert_eq!(history.slot, U256::from(1));
        assert_eq!(history.ast_id, 3);

        let array = layout.type_of("history").unwrap();
        assert_eq!(array.number_of_bytes, 96);
        assert_eq!(array.base.as_deref(), Some("t_uint256"));
        assert_eq!(array.slots_spanned(), 3);
    }

    #[test]
    fn test_parse_encodings() {
        let layout = packed();
        let mapping = layout.type_of("balances").unwrap();
        assert_eq!(mapping.encoding, Encoding::Mapping);
        assert!(mapping.is_mapping());
        assert!(!mapping.fits_in_word());
        assert_eq!(mapping.key.as_deref(), Some("t_address"));
        assert_eq!(mapping.value.as_deref(), Some("t_uint256"));

        let encodings: Vec<Encoding> =
            serde_json::from_str(r#"["inplace", "mapping", "dynamic_array", "bytes"]"#).unwrap();
        assert_eq!(
            encodings,
            vec![Encoding::Inplace, Encoding::Mapping, Encoding::DynamicArray, Encoding::Bytes]
        );
    }

    #[test]
    fn test_parse_rejects_numeric_slot() {
        let json = r#"{"storage": [{"astId": 1, "contract": "A.sol:A", "label": "x", "offset": 0, "slot": 0, "type": "t_uint256"}], "types": {}}"#;
        assert!(StorageLayout::from_json(json).is_err());
    }

    #[test]
    fn test_parse_rejects_non_decimal_width() {
        let json = r#"{"storage": [], "types": {"t_uint8": {"encoding": "inplace", "label": "uint8", "numberOfBytes": "one"}}}"#;
        let err = StorageLayout::from_json(json).unwrap_err();
        assert!(err.to_string().contains("invalid byte count"));
    }

    #[test]
    fn test_serialize_keeps_solc_format() {
        let layout = packed();
        let value = serde_json::to_value(&layout).unwrap();

        let entry = &value["storage"][2];
        assert_eq!(entry["slot"], "1");
        assert_eq!(entry["astId"], 3);
        assert_eq!(entry["type"], "t_array(t_uint256)3_storage");

        let bool_ty = &value["types"]["t_bool"];
        assert_eq!(bool_ty["numberOfBytes"], "1");
        assert!(bool_ty.get("base").is_none());
        assert!(bool_ty.get("members").is_none());

        let reparsed: StorageLayout = serde_json::from_value(value).unwrap();
        assert_eq!(reparsed, layout);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[test]
    fn test_entries_in_slot_in_declaration_order() {
        let layout = packed();
        let labels: Vec<&str> = layout
            .entries_in_slot(U256::ZERO)
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(labels, vec!["owner", "paused"]);
        assert_eq!(layout.entries_in_slot(U256::from(2)).count(), 0);
    }

    #[test]
    fn test_slot_count_covers_multi_slot_values() {
        assert_eq!(packed().slot_count().unwrap(), U256::from(5));
        assert_eq!(StorageLayout::default().slot_count().unwrap(), U256::ZERO);
    }

    #[test]
    fn test_contract_name_strips_source_path() {
        assert_eq!(packed().contract_name(), Some("Packed"));
        assert_eq!(StorageLayout::default().contract_name(), None);
    }

    #[test]
    fn test_unknown_label() {
        let err = packed().type_of("missing").unwrap_err();
        assert!(matches!(
            err,
            BindingsError::UnknownLabel { ref contract, ref label }
                if contract == "Packed" && label == "missing"
        ));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_validate_accepts_packed_layout() {
        packed().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_slot_overflow() {
        let mut layout = packed();
        layout.storage[1].offset = 31;
        layout.storage[1].ty = "t_address".to_string();
        assert!(matches!(layout.validate(), Err(BindingsError::InvalidLayout(_))));
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let mut layout = packed();
        // history spans slots 1..=3
        layout.storage[3].slot = U256::from(3);
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("balances"));
    }

    #[test]
    fn test_validate_rejects_huge_offset() {
        let mut layout = packed();
        layout.storage[1].offset = u64::MAX;
        let err = layout.validate().unwrap_err();
        assert!(matches!(err, BindingsError::InvalidLayout(_)));
        assert!(err.to_string().contains("`paused`"));
    }

    #[test]
    fn test_validate_rejects_huge_width() {
        let mut layout = packed();
        layout.types.get_mut("t_array(t_uint256)3_storage").unwrap().number_of_bytes = u64::MAX;
        assert!(matches!(layout.validate(), Err(BindingsError::InvalidLayout(_))));
    }

    #[test]
    fn test_validate_rejects_offset_on_wide_value() {
        let mut layout = packed();
        layout.storage[2].offset = 1;
        assert!(matches!(layout.validate(), Err(BindingsError::InvalidLayout(_))));
    }

    #[test]
    fn test_validate_rejects_dangling_type_reference() {
        let mut layout = packed();
        layout.types.remove("t_uint256");
        assert!(matches!(
            layout.validate(),
            Err(BindingsError::UnknownType(ref ty)) if ty == "t_uint256"
        ));
    }

    #[test]
    fn test_validate_checks_struct_members() {
        let mut layout = packed();
        let member = StorageLayoutEntry {
            ast_id: 9,
            contract: "src/Packed.sol:Packed".to_string(),
            label: "amount".to_string(),
            offset: 0,
            slot: U256::ZERO,
            ty: "t_uint128".to_string(),
        };
        layout.types.insert(
            "t_struct(Deposit)9_storage".to_string(),
            StorageLayoutType {
                encoding: Encoding::Inplace,
                label: "struct Packed.Deposit".to_string(),
                number_of_bytes: 32,
                base: None,
                key: None,
                value: None,
                members: Some(vec![member]),
            },
        );
        assert!(matches!(
            layout.validate(),
            Err(BindingsError::UnknownType(ref ty)) if ty == "t_uint128"
        ));
    }
}
