//! Colored console output for the bindings inspector.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! red failures, dimmed secondary text.

use crate::bytecode::DeployedBytecode;
use crate::solc::StorageLayout;
use alloy_primitives::{Address, U256};
use colored::Colorize;

// ── Helpers ────────────────────────────────────────────────────────

/// Format a code or type size.
///
/// - Below 1 KiB → `"640 B"`
/// - Otherwise → `"7885 B (7.7 KiB)"`
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{bytes} B ({:.1} KiB)", bytes as f64 / 1024.0)
    }
}

/// Format the slots occupied by a variable.
///
/// - Single slot → `"205"`
/// - Multiple slots → `"1..=50"`
pub fn format_slot_span(slot: U256, slots_spanned: u64) -> String {
    if slots_spanned <= 1 {
        return slot.to_string();
    }
    let last = slot.saturating_add(U256::from(slots_spanned - 1));
    format!("{slot}..={last}")
}

// ── Contract list ──────────────────────────────────────────────────

/// Print the header of the contract list.
pub fn print_contracts_header(count: usize) {
    println!();
    println!(
        "{} ({})",
        "Registered contracts".blue().bold(),
        count.to_string().cyan()
    );
}

/// Print one row of the contract list.
pub fn print_contract(
    name: &str,
    variables: usize,
    code: &DeployedBytecode,
    predeploy: Option<Address>,
) {
    println!("  {}", name.cyan().bold());
    println!(
        "    {} {}",
        "Variables:".dimmed(),
        variables.to_string().cyan()
    );
    println!("    {} {}", "Code size:".dimmed(), format_size(code.len()).cyan());
    match predeploy {
        Some(address) => println!("    {} {}", "Predeploy:".dimmed(), format!("{address}").cyan()),
        None => println!("    {} {}", "Predeploy:".dimmed(), "-".dimmed()),
    }
}

// ── Storage layout ─────────────────────────────────────────────────

/// Print a storage layout as a slot table.
pub fn print_layout(name: &str, layout: &StorageLayout) {
    println!();
    println!("{} {}", "Storage layout of".blue().bold(), name.cyan().bold());
    println!(
        "  {:<10} {:>6}  {:<24} {}",
        "slot".dimmed(),
        "offset".dimmed(),
        "label".dimmed(),
        "type".dimmed()
    );

    for entry in layout.entries() {
        let (span, ty) = match layout.entry_type(entry) {
            Ok(ty) => (format_slot_span(entry.slot, ty.slots_spanned()), ty.label.normal()),
            Err(_) => (entry.slot.to_string(), entry.ty.as_str().red()),
        };
        println!(
            "  {:<10} {:>6}  {:<24} {}",
            span.cyan(),
            entry.offset,
            entry.label,
            ty
        );
    }
}

// ── Bytecode ───────────────────────────────────────────────────────

/// Print decoded information about a contract's runtime code.
pub fn print_bytecode_info(name: &str, code: &DeployedBytecode) {
    println!();
    println!("{} {}", "Deployed bytecode of".blue().bold(), name.cyan().bold());
    println!("  {} {}", "Size:     ".dimmed(), format_size(code.len()).cyan());
    println!("  {} {}", "Code hash:".dimmed(), format!("{}", code.code_hash()).cyan());
    match code.split_metadata() {
        Some((_, metadata)) => println!(
            "  {} {}",
            "Metadata: ".dimmed(),
            format_size(metadata.len()).cyan()
        ),
        None => println!("  {} {}", "Metadata: ".dimmed(), "none".dimmed()),
    }
    match code.solc_version() {
        Some(version) => println!(
            "  {} {}",
            "Compiler: ".dimmed(),
            format!("solc {version}").cyan()
        ),
        None => println!("  {} {}", "Compiler: ".dimmed(), "unknown".dimmed()),
    }
}

// ── Check ──────────────────────────────────────────────────────────

/// Print that a contract passed validation.
pub fn print_check_ok(name: &str) {
    println!("  {} {}", "OK".green().bold(), name.cyan());
}

/// Print that a contract failed validation.
pub fn print_check_failed(name: &str, reason: &str) {
    println!("  {} {}: {}", "FAIL".red().bold(), name.cyan(), reason);
}

/// Print the validation summary.
pub fn print_check_summary(checked: usize, failed: usize) {
    println!();
    if failed == 0 {
        println!(
            "{} {} contracts valid",
            "OK".green().bold(),
            checked.to_string().cyan()
        );
    } else {
        println!(
            "{} {} of {} contracts invalid",
            "FAIL".red().bold(),
            failed.to_string().red(),
            checked.to_string().cyan()
        );
    }
}
