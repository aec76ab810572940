//! statusr - status distribution reports from spreadsheets

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use status_report::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "statusr")]
#[command(
    author,
    version,
    about = "Status distribution charts and highlighted tables from spreadsheets"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu entries of a spreadsheet
    Sheets {
        /// Input spreadsheet file (xlsx, xlsm, csv)
        input: PathBuf,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Render one sheet, or every chart at once
    Show {
        /// Input spreadsheet file (xlsx, xlsm, csv)
        input: PathBuf,

        /// Sheet to render (default: first menu entry)
        #[arg(short, long, conflicts_with = "all")]
        sheet: Option<String>,

        /// Render every chart in a grid
        #[arg(short, long)]
        all: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration as JSON
    DefaultConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => Format::Text,
            OutputFormat::Html => Format::Html,
            OutputFormat::Json => Format::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sheets { input, config } => list_sheets(&input, config.as_deref()),
        Commands::Show {
            input,
            sheet,
            all,
            format,
            output,
            config,
        } => show(
            &input,
            sheet.as_deref(),
            all,
            format.into(),
            output.as_deref(),
            config.as_deref(),
        ),
        Commands::DefaultConfig => print_default_config(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    match path {
        Some(path) => ReportConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None => Ok(ReportConfig::default()),
    }
}

fn open_report(input: &Path, config: Option<&Path>) -> Result<Report<Source>> {
    let config = load_config(config)?;
    Report::open(input, config).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn list_sheets(input: &Path, config: Option<&Path>) -> Result<()> {
    let report = open_report(input, config)?;

    for (i, name) in report.menu().iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}

/// Resolve the menu entry to render
fn selection(report: &Report<Source>, sheet: Option<&str>, all: bool) -> Result<String> {
    if all {
        return Ok(report.config().all_charts_label.clone());
    }
    if let Some(sheet) = sheet {
        return Ok(sheet.to_string());
    }
    match report.menu().into_iter().next() {
        Some(first) => Ok(first),
        None => bail!("Spreadsheet has no sheets"),
    }
}

fn show(
    input: &Path,
    sheet: Option<&str>,
    all: bool,
    format: Format,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<()> {
    let mut report = open_report(input, config)?;
    let selected = selection(&report, sheet, all)?;
    log::debug!("rendering '{}' as {}", selected, format);

    let view = report
        .render(&selected)
        .with_context(|| format!("Failed to render '{}'", selected))?;

    let rendered = match format {
        Format::Text => render_text(&view),
        Format::Html => render_html(&view),
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
            json.push('\n');
            json
        }
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &rendered)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote '{}' to '{}'", selected, output_path.display());
    } else {
        io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn print_default_config() -> Result<()> {
    let json = ReportConfig::default()
        .to_json_string()
        .context("Failed to serialize default config")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_arguments() {
        let cli = Cli::try_parse_from([
            "statusr", "show", "dados.xlsx", "--sheet", "CIV", "--format", "html",
        ])
        .unwrap();
        match cli.command {
            Commands::Show {
                sheet, all, format, ..
            } => {
                assert_eq!(sheet.as_deref(), Some("CIV"));
                assert!(!all);
                assert_eq!(Format::from(format), Format::Html);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_sheet_and_all_conflict() {
        assert!(Cli::try_parse_from(["statusr", "show", "x.xlsx", "--sheet", "A", "--all"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Some(Path::new("/no/such/config.json"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/config.json"));
    }
}
