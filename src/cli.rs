use clap::{Parser, Subcommand};

/// CLI arguments for the bindings inspector
#[derive(Parser, Debug)]
#[command(
    name = "op-bindings",
    about = "Inspect registered contract storage layouts and bytecode"
)]
pub struct Cli {
    /// Emit logs as newline-delimited JSON instead of human-readable text.
    ///
    /// Log verbosity is controlled with `RUST_LOG` (default: warn).
    #[arg(long, env = "OP_BINDINGS_LOG_JSON", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered contracts
    List,

    /// Print the storage layout of a contract
    Layout {
        /// Contract name, e.g. L2CrossDomainMessenger
        name: String,

        /// Print the raw solc JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the deployed bytecode of a contract
    Bytecode {
        /// Contract name, e.g. L2CrossDomainMessenger
        name: String,

        /// Print size, code hash and compiler version instead of the hex
        #[arg(long)]
        decoded_info: bool,
    },

    /// Validate every registered layout and bytecode
    Check,
}
