use thiserror::Error;

/// Errors returned by registry lookups and layout queries.
#[derive(Debug, Error)]
pub enum BindingsError {
    /// No artifact is registered under the requested contract name
    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    /// The layout has no storage entry with this label
    #[error("No storage variable labelled `{label}` in {contract}")]
    UnknownLabel {
        /// Contract whose layout was searched
        contract: String,
        /// The missing label
        label: String,
    },

    /// A storage entry references a type that the layout does not describe
    #[error("Type `{0}` is not described by the layout")]
    UnknownType(String),

    /// The layout is internally inconsistent
    #[error("Invalid storage layout: {0}")]
    InvalidLayout(String),

    /// The variable cannot be decoded from a single storage word
    #[error("Variable `{label}` of type `{ty}` does not fit in one storage word")]
    NotAScalar {
        /// Label of the variable
        label: String,
        /// Its type descriptor name
        ty: String,
    },

    /// The variable is not a mapping
    #[error("Variable `{0}` is not a mapping")]
    NotAMapping(String),

    /// The contract is registered without runtime code
    #[error("Deployed bytecode of {0} is empty")]
    EmptyBytecode(String),

    /// Deployed bytecode is not valid hex
    #[error("Invalid bytecode hex: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),
}
