use op_bindings::bindings;
use op_bindings::cli::{Cli, Command};
use op_bindings::output;
use op_bindings::predeploys;

use clap::Parser;
use eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Main entry point for the bindings inspector
fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    // Parse every embedded artifact up front so a broken one aborts here
    bindings::init();
    info!(contracts = bindings::contract_names().len(), "Registry initialized");

    match cli.command {
        Command::List => list(),
        Command::Layout { name, json } => layout(&name, json),
        Command::Bytecode { name, decoded_info } => bytecode(&name, decoded_info),
        Command::Check => check(),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn list() -> eyre::Result<()> {
    let names = bindings::contract_names();
    output::print_contracts_header(names.len());
    for name in names {
        let layout = bindings::get_storage_layout(name)?;
        let code = bindings::get_deployed_code(name)
            .wrap_err_with(|| format!("decoding bytecode of {name}"))?;
        output::print_contract(name, layout.len(), &code, predeploys::predeploy_address(name));
    }
    Ok(())
}

fn layout(name: &str, json: bool) -> eyre::Result<()> {
    let layout = bindings::get_storage_layout(name)?;
    if json {
        println!("{}", serde_json::to_string_pretty(layout)?);
    } else {
        output::print_layout(name, layout);
    }
    Ok(())
}

fn bytecode(name: &str, decoded_info: bool) -> eyre::Result<()> {
    if !decoded_info {
        println!("{}", bindings::get_deployed_bytecode(name)?);
        return Ok(());
    }
    let code = bindings::get_deployed_code(name)
        .wrap_err_with(|| format!("decoding bytecode of {name}"))?;
    output::print_bytecode_info(name, &code);
    Ok(())
}

fn check() -> eyre::Result<()> {
    let results = bindings::check_contracts();
    let mut failed = 0;

    for (name, result) in &results {
        match result {
            Ok(()) => output::print_check_ok(name),
            Err(err) => {
                warn!(contract = name, %err, "Artifact failed validation");
                output::print_check_failed(name, &err.to_string());
                failed += 1;
            }
        }
    }

    output::print_check_summary(results.len(), failed);
    if failed > 0 {
        eyre::bail!("{failed} of {} contracts failed validation", results.len());
    }
    Ok(())
}
