extern crate exitcode;

use calculator_brain::{CalculatorTerminal, KeyPress, KeyScriptParser, KeySequenceParser, Keypad};

// Standard Imports
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;


/// Command Line interface struct
/// Describes possible arguments using the clap library
#[derive(Parser)]
#[clap(about = "Four function calculator driven by recorded keypad presses")]
struct CalculatorCLIOptions {
    /// Path of a key script to replay, one key per line. Reads stdin if neither this nor --keys
    /// is given
    #[clap(parse(from_os_str))]
    path: Option<std::path::PathBuf>,

    /// Keys to replay given inline, eg "6 × 7 ="
    #[clap(short, long)]
    keys: Option<String>,

    /// Token delimiter of the key script, default is a new line. Inline keys split on whitespace
    #[clap(short, long)]
    delimiter: Option<String>,

    /// Log filter directive, overrides RUST_LOG
    #[clap(long)]
    log_level: Option<String>,

    // Flags

    /// Print the display after every key press
    #[clap(short, long, action)]
    verbose: bool,

    /// Start the interactive terminal keypad
    #[clap(short, long, action)]
    interactive: bool
}

impl CalculatorCLIOptions {
    const DEFAULT_LOG_LEVEL: &'static str = "warn";

    /// Builds the parser for the selected key source.
    /// Inline keys split on whitespace unless a delimiter was given explicitly.
    fn key_parser(&self) -> KeyScriptParser {
        match (&self.delimiter, &self.keys) {
            (Some(delimiter), _) => KeyScriptParser::new().using_delimiter(delimiter.clone()),
            (None, Some(_)) => KeyScriptParser::new().using_whitespace(),
            (None, None) => KeyScriptParser::new()
        }
    }

    /// Reads key presses from --keys, the script path or stdin in that order.
    fn read_keys(&self) -> Result<Vec<KeyPress>> {
        let parser = self.key_parser();

        if let Some(keys) = &self.keys {
            return parser.parse_str(keys).with_context(|| "Could not parse inline keys");
        }

        match &self.path {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("Could not open file {:?}", path))?;
                parser.parse(file).with_context(|| format!("Could not parse key script {:?}", path))
            },
            None => {
                let mut data = String::new();
                io::stdin().read_to_string(&mut data).with_context(|| "Could not read keys from stdin")?;
                parser.parse_str(&data).with_context(|| "Could not parse keys from stdin")
            }
        }
    }

    /// Logs go to stderr so stdout only carries the display
    fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Self::DEFAULT_LOG_LEVEL))
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn replay(cli_args: &CalculatorCLIOptions) -> Result<()> {
    let keys = cli_args.read_keys()?;
    let mut keypad = Keypad::new();

    for key in &keys {
        keypad.press(key);
        if cli_args.verbose {
            println!("{:>12} -> {}", key, keypad.display());
        }
    }

    println!("{}", keypad.display());
    Ok(())
}

/// Maps a failure to a process exit code. Malformed keys are a data error, a missing script
/// is missing input, anything else is treated as an io failure.
fn exit_code(why: &anyhow::Error) -> i32 {
    match why.downcast_ref::<io::Error>().map(|error| error.kind()) {
        Some(io::ErrorKind::InvalidInput) => exitcode::DATAERR,
        Some(io::ErrorKind::NotFound) => exitcode::NOINPUT,
        _ => exitcode::IOERR
    }
}

fn interactive() -> Result<()> {
    // Terminal is in raw mode, a stderr subscriber would draw over the keypad
    let mut terminal = CalculatorTerminal::default();
    terminal.run().with_context(|| "Terminal keypad failed to run")?;

    println!("{}", terminal.keypad().display());
    Ok(())
}

fn main() {
    // Parse Command line arguments
    let cli_args = CalculatorCLIOptions::parse();

    let result = if cli_args.interactive {
        interactive()
    } else {
        cli_args.init_logging();
        replay(&cli_args)
    };

    // Check result
    match result {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        },
        Err(why) => {
            eprintln!("Error: {:?}", why);
            std::process::exit(exit_code(&why));
        }
    };
}
