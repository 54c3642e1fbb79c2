mod commands;
mod context;
mod logging;
mod output;
mod schema;
mod template;
mod traits;
mod wizard;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ValuesCommand, ValuesOptions};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "valuesmith")]
#[command(about = "Interactive wizard that builds Helm values for a cnvrg.io installation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the configuration menus and write a values file
    Values {
        /// Path of the generated values file
        #[arg(short, long, env = "VALUESMITH_OUTPUT", default_value = "values.yaml")]
        output: PathBuf,

        /// Handlebars template to render instead of the built-in one
        #[arg(short, long, env = "VALUESMITH_TEMPLATE")]
        template: Option<PathBuf>,

        /// YAML file whose settings replace the documented defaults
        #[arg(short, long, env = "VALUESMITH_DEFAULTS")]
        defaults: Option<PathBuf>,

        /// Diagnostic log file (appended to)
        #[arg(long, env = "VALUESMITH_LOG_FILE", default_value = "logs.txt")]
        log_file: PathBuf,

        /// Do not echo the rendered values to stdout
        #[arg(long)]
        no_print: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Values {
            output,
            template,
            defaults,
            log_file,
            no_print,
        } => {
            logging::init(&log_file)?;
            info!(version = env!("CARGO_PKG_VERSION"), "starting values wizard");

            let ctx = context::Context::new();
            let options = ValuesOptions {
                output,
                template,
                defaults,
                print: !no_print,
            };
            ValuesCommand::execute(&ctx, &options).inspect_err(|e| error!("{:#}", e))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
