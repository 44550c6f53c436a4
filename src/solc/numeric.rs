//! Serde adapters for the decimal strings solc emits for `slot` and
//! `numberOfBytes`.

/// `U256` carried as a decimal string.
pub(crate) mod u256_string {
    use alloy_primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        U256::from_str_radix(&raw, 10)
            .map_err(|err| D::Error::custom(format!("invalid slot `{raw}`: {err}")))
    }
}

/// `u64` carried as a decimal string.
pub(crate) mod u64_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u64>()
            .map_err(|err| D::Error::custom(format!("invalid byte count `{raw}`: {err}")))
    }
}
