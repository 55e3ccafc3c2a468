//! Results file writing and colored console summaries.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use colored::{ColoredString, Colorize};

use rfchain_core::units::lin_to_db;
use rfchain_core::{Block, ComponentKind, Stage};
use rfchain_search::{Envelope, ScoredChain};

/// One line per fixed block: its label, collapsed nominal gain, and the
/// dB sum of member maximum gains.
pub fn block_summaries(blocks: &[Block]) -> rfchain_core::Result<Vec<String>> {
    blocks
        .iter()
        .map(|block| {
            let stage = block.collapse()?;
            Ok(format!(
                "block: {} (gain {:.2} dB, max {:.2} dB)",
                block.label(),
                lin_to_db(stage.gain),
                block.gain_max_db()?
            ))
        })
        .collect()
}

/// Write the full ranked list, best first, in plain text.
pub fn write_results(path: &Path, results: &[ScoredChain]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "=== All architectures tested: {} ===", results.len())?;
    writeln!(out)?;
    for result in results {
        let env = &result.envelope;
        writeln!(out, "Chain: {}", result.names.join(" -> "))?;
        writeln!(
            out,
            "  Gain min   = {:>8.2} dB  | Gain max   = {:>8.2} dB",
            env.gain_min_db, env.gain_max_db
        )?;
        writeln!(
            out,
            "  NF min     = {:>8.2} dB  | NF max     = {:>8.2} dB",
            env.nf_min_db, env.nf_max_db
        )?;
        writeln!(
            out,
            "  OP1dB min  = {:>8.2} dBm | OP1dB max  = {:>8.2} dBm",
            env.op1db_min_dbm, env.op1db_max_dbm
        )?;
        writeln!(
            out,
            "  IP1dB min  = {:>8.2} dBm | IP1dB max  = {:>8.2} dBm",
            env.ip1db_min_dbm, env.ip1db_max_dbm
        )?;
        writeln!(out, "  Score      = {:.4}", result.score)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print the selected (best) architecture summary.
pub fn print_best(best: &ScoredChain) {
    println!();
    println!("{}", "=== Best architecture found ===".bold());
    println!("Chain: {}", best.names.join(" → ").cyan().bold());
    println!();
    print_envelope(&best.envelope);
    println!("{:<22}: {:.4}", "Score".bold(), best.score);
}

/// Print the verifier summary for a fixed chain.
pub fn print_verify(chain: &[Stage], envelope: &Envelope) {
    let line = chain
        .iter()
        .map(|s| colorize_name(&s.name, s.kind).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!();
    println!("{} {}", "Chain:".bold(), line);
    println!();
    print_envelope(envelope);
}

fn print_envelope(env: &Envelope) {
    print_metric("Gain total (min)", env.gain_min_db, "dB");
    print_metric("Gain total (max)", env.gain_max_db, "dB");
    println!();
    print_metric("NF total (min)", env.nf_min_db, "dB");
    print_metric("NF total (max)", env.nf_max_db, "dB");
    println!();
    print_metric("OP1dB out (min)", env.op1db_min_dbm, "dBm");
    print_metric("OP1dB out (max)", env.op1db_max_dbm, "dBm");
    println!();
    print_metric("IP1dB in (min)", env.ip1db_min_dbm, "dBm");
    print_metric("IP1dB in (max)", env.ip1db_max_dbm, "dBm");
    println!();
}

fn print_metric(label: &str, value: f64, unit: &str) {
    if value.is_finite() {
        println!("{} {:<18}: {:>8.2} {}", "■■■".blue(), label, value, unit);
    } else {
        println!(
            "{} {:<18}: {:>8} {}",
            "■■■".blue(),
            label,
            "none".dimmed(),
            unit
        );
    }
}

fn colorize_name(name: &str, kind: ComponentKind) -> ColoredString {
    match kind {
        ComponentKind::Amplifier => name.red().bold(),
        ComponentKind::Filter => name.cyan().bold(),
        ComponentKind::Attenuator => name.yellow().bold(),
        ComponentKind::Switch => name.green().bold(),
        ComponentKind::Mixer => name.magenta().bold(),
        ComponentKind::OtherPassive => name.normal(),
    }
}
