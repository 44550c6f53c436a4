use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the storage slot of a Solidity mapping entry.
///
/// For `successfulMessages[hash]` at mapping slot 203:
///   slot = keccak256(abi.encode(hash, 203))
pub fn mapping_slot(key: B256, mapping_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(key.as_slice());
    hasher.update(B256::from(mapping_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// ABI encode an address mapping key (left-padded with zeros).
pub fn encode_address_key(address: Address) -> B256 {
    address.into_word()
}

/// Extract a value of `width` bytes packed at `offset` bytes from the least
/// significant end of a storage word.
///
/// Bytes past the top of the word read as zero.
pub fn extract_packed(word: B256, offset: u64, width: u64) -> U256 {
    if offset >= 32 {
        return U256::ZERO;
    }
    let shifted = U256::from_be_bytes(word.0) >> (offset * 8) as usize;
    if width >= 32 {
        return shifted;
    }
    let mask = (U256::from(1) << (width * 8) as usize) - U256::from(1);
    shifted & mask
}
