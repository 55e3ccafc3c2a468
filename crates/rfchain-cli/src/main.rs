//! rfchain command-line interface.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use rfchain_config::{ArchitectureFile, Config};
use rfchain_core::{
    cascaded_noise_figure_db, cascaded_output_p1db_dbm, group_locked, total_gain_db,
    Error as CoreError, GainMode, Stage,
};
use rfchain_search::{rank, rank_parallel, Envelope, SearchSpace, Targets};

mod report;

#[derive(Parser)]
#[command(name = "rfchain")]
#[command(about = "RF front-end architecture finder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Enumerate, score, and rank every candidate architecture
    Find {
        /// Search configuration file (YAML)
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Results file for the full ranked list
        #[arg(short, long, default_value = "results.txt")]
        output: PathBuf,

        /// Refuse to enumerate more candidates than this
        #[arg(long, default_value_t = 10_000_000)]
        max_candidates: u128,

        /// Evaluate candidates across the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Analyze a single fixed chain without any search
    Verify {
        /// Architecture file (YAML, `architecture:` list)
        #[arg(value_name = "ARCHITECTURE")]
        architecture: PathBuf,
    },
    /// Print the candidate count for a configuration without enumerating
    Estimate {
        /// Search configuration file (YAML)
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Find {
            config,
            output,
            max_candidates,
            parallel,
        } => run_find(&config, &output, max_candidates, parallel, cli.verbose),
        Command::Verify { architecture } => run_verify(&architecture),
        Command::Estimate { config } => run_estimate(&config),
    }
}

fn build_space(config: &Config, verbose: bool) -> Result<SearchSpace> {
    let split = config.classify();
    let blocks = group_locked(&split.fixed);
    if verbose {
        println!(
            "{} fixed blocks, {} movable amplifiers, {} attenuators",
            blocks.len(),
            split.movable.len(),
            split.attenuators.len()
        );
        for line in report::block_summaries(&blocks)? {
            println!("  {}", line);
        }
    }
    Ok(SearchSpace::new(&blocks, &split.movable, &split.attenuators)?)
}

fn run_find(
    config_path: &PathBuf,
    output: &PathBuf,
    max_candidates: u128,
    parallel: bool,
    verbose: bool,
) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let space = build_space(&config, verbose)?;

    let estimate = space.estimated_candidates();
    if estimate == 0 {
        bail!(
            "no architectures can be generated: the configuration has {} movable amplifier(s)",
            space.num_movable()
        );
    }
    if estimate > max_candidates {
        bail!(
            "search space holds {} candidates, above the --max-candidates bound of {}; \
             reduce the component lists or raise the bound",
            estimate,
            max_candidates
        );
    }
    if verbose {
        println!("{} candidate chains to evaluate", estimate);
    }

    let targets = Targets {
        gain_db: config.gain_target_db,
        nf_max_db: config.nf_max_db,
        p1db_min_dbm: config.p1db_min_dbm,
    };
    let results = if parallel {
        rank_parallel(&space, &targets)
    } else {
        rank(&space, &targets)
    };

    report::write_results(output, &results)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "{} architectures tested, ranked list written to {}",
        results.len(),
        output.display()
    );
    report::print_best(&results[0]);
    Ok(())
}

fn run_verify(path: &PathBuf) -> Result<()> {
    let doc =
        ArchitectureFile::load(path).with_context(|| format!("loading {}", path.display()))?;

    let chain_min = normalize_chain(&doc, GainMode::Nominal)?;
    let chain_max = normalize_chain(&doc, GainMode::Maximum)?;

    let gain_min_db = total_gain_db(&chain_min);
    let gain_max_db = total_gain_db(&chain_max);
    let op1db_min_dbm = cascaded_output_p1db_dbm(&chain_min);
    let op1db_max_dbm = cascaded_output_p1db_dbm(&chain_max);
    let envelope = Envelope {
        gain_min_db,
        gain_max_db,
        nf_min_db: cascaded_noise_figure_db(&chain_min),
        nf_max_db: cascaded_noise_figure_db(&chain_max),
        op1db_min_dbm,
        op1db_max_dbm,
        ip1db_min_dbm: op1db_min_dbm - gain_min_db,
        ip1db_max_dbm: op1db_max_dbm - gain_max_db,
    };

    report::print_verify(&chain_min, &envelope);
    Ok(())
}

fn normalize_chain(doc: &ArchitectureFile, mode: GainMode) -> Result<Vec<Stage>> {
    let chain = doc
        .architecture
        .iter()
        .map(|c| Stage::from_component_with(c, mode))
        .collect::<rfchain_core::Result<Vec<_>>>()?;
    if chain.is_empty() {
        return Err(CoreError::InvalidChain("the architecture list is empty".into()).into());
    }
    Ok(chain)
}

fn run_estimate(config_path: &PathBuf) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let space = build_space(&config, true)?;
    println!("{} candidate chains", space.estimated_candidates());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_architecture_is_an_invalid_chain() {
        let doc = ArchitectureFile {
            architecture: vec![],
        };
        let err = normalize_chain(&doc, GainMode::Nominal).unwrap_err();
        let core = err.downcast_ref::<CoreError>().unwrap();
        assert!(matches!(core, CoreError::InvalidChain(_)));
        assert!(core.to_string().contains("empty"));
    }
}
