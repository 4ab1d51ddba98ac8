mod report;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use pemode_core::{DEFAULT_PREFIX_LEN, FileSource, Image, MAX_PREFIX_LEN, MIN_PREFIX_LEN};
use report::{Report, Status};
use std::process::ExitCode;
use tabled::{Table, settings::Style};

/// Report whether PE images are native or managed, 32-bit or 64-bit
#[derive(Parser)]
#[command(
    name = "pemode",
    about = "Detect the compilation mode of Windows PE images",
    version,
    author
)]
struct Cli {
    /// Paths of the images to inspect
    #[arg(required = true)]
    paths: Vec<std::path::PathBuf>,

    /// Number of leading bytes to read from each file
    #[arg(
        long,
        default_value_t = DEFAULT_PREFIX_LEN as u64,
        value_parser = clap::value_parser!(u64).range(MIN_PREFIX_LEN as u64..=MAX_PREFIX_LEN as u64)
    )]
    prefix_size: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print machine, DLL flag and CLR directory
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Table,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    let prefix_len = usize::try_from(cli.prefix_size)?;

    let reports: Vec<Report> = cli
        .paths
        .iter()
        .map(|path| match Image::with_source(path, &FileSource, prefix_len) {
            Ok(image) => Report::from_image(&image),
            Err(err) => {
                log::error!("{}: {}", path.display(), err);
                Report::from_error(&path.display().to_string(), &err)
            }
        })
        .collect();

    match cli.format {
        Format::Text => print_text(&reports, cli.verbose),
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        Format::Table => {
            let rows: Vec<_> = reports.iter().map(Report::row).collect();
            println!("{}", Table::new(rows).with(Style::modern()));
        }
    }

    Ok(ExitCode::from(exit_status(&reports)))
}

/// 1 if any file could not be read or was truncated; invalid images still count as success.
fn exit_status(reports: &[Report]) -> u8 {
    if reports.iter().any(|r| r.status == Status::Error) {
        1
    } else {
        0
    }
}

fn print_text(reports: &[Report], verbose: bool) {
    let many = reports.len() > 1;
    for (i, report) in reports.iter().enumerate() {
        if many {
            if i > 0 {
                println!();
            }
            println!("{}", report.path.bold());
        }
        for line in report.text_lines(verbose) {
            let line = match report.status {
                Status::Error => line.red(),
                Status::Invalid => line.yellow(),
                Status::Image => line.normal(),
            };
            println!("{}", line);
        }
    }
}
