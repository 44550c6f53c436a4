//! Deployed (runtime) bytecode.
//!
//! solc appends a CBOR encoded metadata map to the runtime code, followed by
//! the map's length as a 2-byte big-endian integer:
//!
//! ```text
//!   [ runtime code ][ CBOR metadata ][ len: u16 ]
//! ```
//!
//! The map carries the compiler version under the `solc` key as three raw
//! bytes (`major`, `minor`, `patch`).

use crate::errors::BindingsError;
use alloy_primitives::{keccak256, Bytes, B256};
use std::fmt;

/// CBOR text string `"solc"` followed by the header of a 3-byte byte string.
const SOLC_VERSION_KEY: [u8; 6] = [0x64, b's', b'o', b'l', b'c', 0x43];

/// Decoded runtime bytecode of a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedBytecode(Bytes);

impl DeployedBytecode {
    /// Decode hex bytecode, with or without a `0x` prefix.
    pub fn from_hex(hex_code: &str) -> Result<Self, BindingsError> {
        let trimmed = hex_code.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        Ok(Self(Bytes::from(hex::decode(digits)?)))
    }

    /// Raw code bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.0
    }

    /// Code size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the account has no code.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// keccak256 of the code, as stored in the account's `codeHash`.
    pub fn code_hash(&self) -> B256 {
        keccak256(&self.0)
    }

    /// Split into executable code and the trailing CBOR metadata.
    ///
    /// Returns `None` when the code does not end with a well-formed metadata
    /// trailer.
    pub fn split_metadata(&self) -> Option<(&[u8], &[u8])> {
        let code: &[u8] = &self.0;
        let [.., hi, lo] = code else {
            return None;
        };
        let metadata_len = u16::from_be_bytes([*hi, *lo]) as usize;
        if metadata_len == 0 || metadata_len + 2 > code.len() {
            return None;
        }

        let metadata_start = code.len() - 2 - metadata_len;
        let metadata = &code[metadata_start..code.len() - 2];
        // CBOR major type 5 (map)
        if metadata[0] & 0xe0 != 0xa0 {
            return None;
        }
        Some((&code[..metadata_start], metadata))
    }

    /// Compiler version recorded in the metadata, e.g. `0.8.15`.
    pub fn solc_version(&self) -> Option<String> {
        let (_, metadata) = self.split_metadata()?;
        let key_at = metadata
            .windows(SOLC_VERSION_KEY.len())
            .position(|window| window == SOLC_VERSION_KEY)?;
        let version_at = key_at + SOLC_VERSION_KEY.len();
        match metadata.get(version_at..version_at + 3)? {
            [major, minor, patch] => Some(format!("{major}.{minor}.{patch}")),
            _ => None,
        }
    }
}

impl fmt::Display for DeployedBytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<[u8]> for DeployedBytecode {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
