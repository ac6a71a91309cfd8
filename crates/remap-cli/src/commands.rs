use std::fs::File;
use std::io;

use anyhow::{Context, Result};

use remap_cli::{distribute, pipeline};
use remap_model::Config;
use remap_transform::{FilterRegistry, GeneratorRegistry};

use crate::cli::{DistributeArgs, PrepareArgs};
use crate::summary::print_functions;
use crate::types::PrepareResult;

pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareResult> {
    let config = Config::from_path(&args.config)?;
    let outcome = match &args.output {
        Some(path) => {
            let sink = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            pipeline::run(&config, &args.input, sink)?
        }
        None => pipeline::run(&config, &args.input, io::stdout().lock())?,
    };
    Ok(PrepareResult {
        records: outcome.records,
        output_columns: outcome.columns,
        output: args.output.clone(),
    })
}

pub fn run_functions() -> Result<()> {
    let filters = FilterRegistry::builtin();
    let generators = GeneratorRegistry::builtin();
    print_functions(&filters, &generators);
    Ok(())
}

pub fn run_distribute(args: &DistributeArgs) -> Result<()> {
    let metadata = args
        .metadata
        .as_deref()
        .map(parse_metadata)
        .unwrap_or_default();
    let options = distribute::DistributeOptions {
        metadata,
        replace_spaces: args.replace_spaces,
    };
    let report = distribute::distribute(&args.file, &args.target_dir, &options)?;
    println!(
        "Copied into {} directories ({} skipped, {} failed).",
        report.copied, report.skipped, report.failed
    );
    Ok(())
}

fn parse_metadata(raw: &str) -> Vec<String> {
    raw.trim_matches('"').split(',').map(str::to_string).collect()
}
