//! ctrmount CLI - Mount container root filesystems
//!
//! This module contains the shared CLI implementation used by the binary.

mod commands;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use ctrmount_core::{config, get_version, load_config};
use tracing_subscriber::EnvFilter;

/// Mount container root filesystems and list current mounts
#[derive(Parser)]
#[command(name = "ctrmount")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mount container root filesystems and list current mounts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors (mountpoints and listings are still printed)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mount a container's root filesystem
    #[command(long_about = commands::MOUNT_LONG_ABOUT)]
    Mount(commands::MountArgs),
    /// Manage containers
    #[command(subcommand)]
    Container(ContainerCommands),
}

#[derive(Subcommand)]
enum ContainerCommands {
    /// Mount a container's root filesystem
    #[command(long_about = commands::MOUNT_LONG_ABOUT)]
    Mount(commands::MountArgs),
}

/// Log level used when `RUST_LOG` is unset
///
/// `--quiet` wins over any `-v` count.
fn default_log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence over the command line flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config_path = config::get_config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

    let config = match load_config() {
        Ok(config) => {
            if cli.verbose > 0 && !cli.quiet {
                eprintln!(
                    "{} Config loaded from: {}",
                    style("[info]").cyan(),
                    config_path.display()
                );
            }
            config
        }
        Err(e) => {
            // Display rich error for invalid config
            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {e:#}");
            eprintln!();
            eprintln!("  Config file: {}", style(config_path.display()).yellow());
            eprintln!();
            eprintln!(
                "  {} Check the config file for syntax errors or unknown fields.",
                style("Tip:").cyan()
            );
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Mount(args)) | Some(Commands::Container(ContainerCommands::Mount(args))) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::cmd_mount(&args, &config))
        }
        None => {
            // No command - show a welcome message and hint to use --help
            if !cli.quiet {
                println!(
                    "{} {}",
                    style("ctrmount").cyan().bold(),
                    style(get_version()).dim()
                );
                println!();
                println!("Run {} for available commands.", style("--help").green());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn mount_args(argv: &[&str]) -> commands::MountArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Some(Commands::Mount(args)) => args,
            Some(Commands::Container(ContainerCommands::Mount(args))) => args,
            None => panic!("expected a mount command"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mount_parses_positional_containers() {
        let args = mount_args(&["ctrmount", "mount", "web", "db"]);
        assert_eq!(args.containers, vec!["web", "db"]);
        assert!(!args.all);
        assert!(!args.latest);
        assert_eq!(args.format, "");
    }

    #[test]
    fn mount_parses_flags() {
        let args = mount_args(&[
            "ctrmount",
            "mount",
            "--format",
            "json",
            "--notruncate",
            "-a",
        ]);
        assert!(args.all);
        assert!(args.no_truncate);
        assert_eq!(args.format, "json");

        let args = mount_args(&["ctrmount", "mount", "-l"]);
        assert!(args.latest);
    }

    #[test]
    fn container_mount_alias_accepts_same_flags() {
        let args = mount_args(&["ctrmount", "container", "mount", "--latest"]);
        assert!(args.latest);
        assert!(args.containers.is_empty());
    }

    #[test]
    fn quiet_help_says_results_are_still_printed() {
        let cmd = Cli::command();
        let quiet = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "quiet")
            .unwrap();
        let help = quiet.get_help().unwrap().to_string();
        assert!(help.contains("mountpoints and listings are still printed"));
    }

    #[test]
    fn quiet_overrides_verbose_log_level() {
        assert_eq!(default_log_level(0, false), "warn");
        assert_eq!(default_log_level(1, false), "info");
        assert_eq!(default_log_level(3, false), "debug");
        assert_eq!(default_log_level(2, true), "error");
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["ctrmount", "mount", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }
}
