use crate::export::OutputFormat;
use crate::models::SegmentField;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for triplog
/// CLI application to turn GPS user data logs into trip logs
#[derive(Parser)]
#[command(
    name = "triplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a GPS user data log into a per-session trip log with waypoint names",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Verbose diagnostics on stderr (same as RUST_LOG=debug)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Row filter and segmentation overrides shared by `convert` and `inspect`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "min-fix-quality", help = "Minimum GPS fix quality (default 1)")]
    pub min_fix_quality: Option<i64>,

    #[arg(long = "min-satellites", help = "Minimum number of satellites (default 4)")]
    pub min_satellites: Option<i64>,

    #[arg(
        long = "segment-by",
        value_enum,
        help = "Column used to detect session restarts"
    )]
    pub segment_by: Option<SegmentField>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Convert a user data log into a trip log
    Convert {
        #[arg(
            short = 'd',
            long = "user-data-log",
            value_name = "FILE",
            help = "Path to the GPS user data log (CSV)"
        )]
        log: String,

        #[arg(
            short = 'w',
            long = "user-waypoints",
            value_name = "FILE",
            help = "Path to the user waypoints table (CSV); defaults to waypoints_file in the config"
        )]
        waypoints: Option<String>,

        #[arg(short = 'f', long = "format", value_enum, help = "Output format")]
        format: Option<OutputFormat>,

        #[arg(
            short = 'o',
            long = "output",
            value_name = "FILE",
            help = "Write to FILE instead of stdout"
        )]
        output: Option<String>,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,

        #[arg(
            long = "tolerance",
            value_name = "METERS",
            help = "Waypoint match distance in meters (default 1000)"
        )]
        tolerance: Option<f64>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show how a data log splits into sessions
    Inspect {
        #[arg(
            short = 'd',
            long = "user-data-log",
            value_name = "FILE",
            help = "Path to the GPS user data log (CSV)"
        )]
        log: String,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

impl FilterArgs {
    /// Apply the command-line overrides on top of the loaded config.
    pub fn apply(&self, cfg: &mut crate::config::Config) {
        if let Some(q) = self.min_fix_quality {
            cfg.min_fix_quality = q;
        }
        if let Some(n) = self.min_satellites {
            cfg.min_satellites = n;
        }
        if let Some(field) = self.segment_by {
            cfg.segment_field = field;
        }
    }
}
