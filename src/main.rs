use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use version_stamp::stamp::{self, StampRequest};
use version_stamp::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "version-stamp",
    about = "Stamp version and source-control values into a template file"
)]
struct Args {
    #[arg(short = 'i', value_name = "FILE", help = "Template file to read")]
    input: PathBuf,

    #[arg(short = 'o', value_name = "FILE", help = "Output file to write")]
    output: PathBuf,

    #[arg(short = 'v', value_name = "FILE", help = "Version tag file")]
    version_file: PathBuf,

    #[arg(
        short = 'g',
        value_name = "PATH",
        help = "Source-control executable used to look up branch and commit"
    )]
    git: Option<PathBuf>,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Suppress status output (warnings and errors still print)")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let request = StampRequest {
        input: args.input,
        output: args.output,
        version_file: args.version_file,
        git: args.git,
    };

    if !args.quiet {
        ui::display_status(&format!(
            "Stamping {} into {}",
            request.input.display(),
            request.output.display()
        ));
    }

    match stamp::run(&request, &config) {
        Ok(summary) => {
            if !args.quiet {
                ui::display_success(&format!(
                    "Wrote {} ({} lines, version {})",
                    request.output.display(),
                    summary.lines,
                    summary.version
                ));
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
