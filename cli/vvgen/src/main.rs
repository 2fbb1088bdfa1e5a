//! vvgen — developer shell check and `meson setup` generator for building the
//! Venus Vulkan driver with MSVC.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vv_devshell::EnvSnapshot;
use vv_meson::{BuildOptions, Choice, Configuration, Platform, Vcrt};

use commands::gen::{Format, GenOptions};
use config::VvgenConfig;

#[derive(Parser)]
#[command(name = "vvgen", version, about = "Generate Venus build with Meson")]
struct Cli {
    /// Log every validation and derivation step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that this is a Visual Studio developer shell (silent on success)
    Check,
    /// Print the meson setup command for a Venus build
    Gen {
        /// Target platform: arm, arm64, arm64ec, x64, x86 (default: shell target arch)
        #[arg(short, long, value_parser = Platform::parse_choice)]
        platform: Option<Platform>,
        /// Build configuration: debug, release (default: release)
        #[arg(short, long, value_parser = Configuration::parse_choice)]
        configuration: Option<Configuration>,
        /// C runtime linkage: md, mt (default: mt)
        #[arg(long, value_parser = Vcrt::parse_choice)]
        vcrt: Option<Vcrt>,
        /// Directory that build outputs and cross files live under
        /// (default: directory of vvgen.toml, else the directory of this executable)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Human)]
        format: Format,
    },
    /// Write a starter vvgen.toml in the current directory
    Init,
    /// List supported target platforms
    Platforms,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("VVGEN_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Check => {
            commands::check::run(&EnvSnapshot::from_process())?;
            Ok(())
        }

        Commands::Gen {
            platform,
            configuration,
            vcrt,
            root,
            format,
        } => {
            let config = VvgenConfig::find_and_load(&cwd)?;
            commands::gen::run(
                &EnvSnapshot::from_process(),
                &cwd,
                config,
                GenOptions {
                    build: BuildOptions {
                        platform,
                        configuration,
                        vcrt,
                    },
                    root,
                    format,
                },
            )
        }

        Commands::Init => commands::init::run(&cwd),

        Commands::Platforms => {
            commands::platforms::run();
            Ok(())
        }
    }
}
