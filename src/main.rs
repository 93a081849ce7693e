use anyhow::Context;
use clap::Parser;
use colored::*;
use diffscope::cli::{Cli, Commands};
use diffscope::config::EngineConfig;
use diffscope::engine::AnalysisEngine;
use diffscope::io::input::ChangeSet;
use diffscope::io::output::create_writer;
use std::io::Write;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            change_key,
            branch,
            format,
            output,
            config,
        } => analyze(input, change_key, branch, format, output, config),
        Commands::Rules => list_rules(),
    }
}

fn analyze(
    input: PathBuf,
    change_key: String,
    branch: String,
    format: diffscope::cli::OutputFormat,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => EngineConfig::from_toml_file(&path)?,
        None => EngineConfig::default(),
    };

    let change_set = ChangeSet::from_json_file(&input)?;
    let engine = AnalysisEngine::with_config(config);
    let result = engine.analyze(&change_key, &branch, &change_set.files, &change_set.commits);

    let mut writer = match output {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            create_writer(format.into(), file)
        }
        None => create_writer(format.into(), std::io::stdout()),
    };
    writer.write_result(&result)
}

fn list_rules() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}", "Security rules".bold())?;
    for rule in diffscope::detectors::security::rules() {
        writeln!(stdout, "  {:<28} {}", rule.name.red(), rule.message)?;
    }

    writeln!(stdout)?;
    writeln!(stdout, "{}", "Performance rules".bold())?;
    for rule in diffscope::detectors::performance::rules() {
        writeln!(stdout, "  {:<28} {}", rule.name.yellow(), rule.message)?;
    }

    Ok(())
}
