use std::fs;
use std::io::{self, IsTerminal};

use clap::{Parser, Subcommand};

use translit_cli::commands::{config_ops, convert_ops, text_ops};
use translit_cli::die;
use translit_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "translit", about = "Cyrillic transliteration and text utilities")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (arguments, or stdin line by line)
    Convert {
        /// Words to transliterate, joined by spaces
        text: Vec<String>,
    },
    /// Transliterate the configured sample and log the result
    Demo,
    /// Generate random text
    Random {
        /// Number of characters
        #[arg(short, long, default_value = "20")]
        length: usize,
        /// Chance of a space at each position (default from settings)
        #[arg(short = 'p', long)]
        space_probability: Option<f64>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print navigation icon markup
    NavIcon {
        /// Element id
        #[arg(default_value = "nav-icon1")]
        id: String,
        /// Number of span bars (default from settings)
        #[arg(short, long)]
        spans: Option<usize>,
    },
    /// Replay pointer movements ("t_ms dx dy" per line) and print speed reports
    Motion {
        /// Event file
        file: String,
        /// Report interval in milliseconds (default from settings)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Print the built-in transliteration table
    TableExport,
    /// Validate a transliteration table file
    TableValidate {
        /// TOML file to check
        file: String,
    },
    /// Print the default settings
    SettingsExport,
    /// Validate a settings file
    SettingsValidate {
        /// TOML file to check
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(path) = &cli.settings {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(
            translit_core::settings::init_custom(content),
            "Error in {path}: {}"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::Convert { text } => {
            if text.is_empty() {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    eprintln!("Reading from stdin, end with Ctrl-D");
                }
                convert_ops::convert_lines(stdin.lock(), &mut out)
            } else {
                convert_ops::convert_args(&text, &mut out)
            }
        }
        Command::Demo => convert_ops::demo(&mut out),
        Command::Random {
            length,
            space_probability,
            seed,
        } => text_ops::random(length, space_probability, seed, &mut out),
        Command::NavIcon { id, spans } => text_ops::nav_icon_cmd(&id, spans, &mut out),
        Command::Motion { file, interval_ms } => text_ops::motion(&file, interval_ms, &mut out),
        Command::TableExport => config_ops::table_export(&mut out),
        Command::TableValidate { file } => config_ops::table_validate(&file, &mut out),
        Command::SettingsExport => config_ops::settings_export(&mut out),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file, &mut out),
    };
    die!(result, "I/O error: {}");
}
