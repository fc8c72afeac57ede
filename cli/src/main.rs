//! yasb: sign bootloader images and manage the ECDSA signing key.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod files;

#[derive(Parser, Debug)]
#[command(
    name = "yasb",
    version,
    about = "Sign an image or create and show keys for signing",
    after_help = "e.g. Signing:\n  yasb sign -i app.bin -k signingkey.bin -v 2 -o app_signed.bin\n\
                  Generating a secp256k1 keypair:\n  yasb keygen -o signingkey.bin\n\
                  Showing the public key for the bootloader source:\n  yasb print -k signingkey.bin"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a keypair and write the 96-byte key file
    Keygen {
        /// Key file to create
        #[arg(short, long = "outputfile", value_name = "FILE")]
        output: PathBuf,

        /// Overwrite an existing key file
        #[arg(long)]
        force: bool,
    },

    /// Show the public half of a key file
    Print {
        /// Key file to read
        #[arg(short, long = "keyfile", value_name = "FILE")]
        key: PathBuf,

        /// Output rendering
        #[arg(long, value_enum, default_value_t = KeyFormat::C)]
        format: KeyFormat,
    },

    /// Wrap a raw payload in a signed header
    Sign {
        /// Raw image to sign
        #[arg(short, long = "inputfile", value_name = "FILE")]
        input: PathBuf,

        /// Key file holding the private scalar
        #[arg(short, long = "keyfile", value_name = "FILE")]
        key: PathBuf,

        /// Version number stored in the header
        #[arg(short, long)]
        version: u64,

        /// Signed image to write
        #[arg(short, long = "outputfile", value_name = "FILE")]
        output: PathBuf,
    },

    /// Check a signed image against a key file
    Verify {
        /// Signed image
        #[arg(short, long = "inputfile", value_name = "FILE")]
        input: PathBuf,

        /// Key file (only the public half is used)
        #[arg(short, long = "keyfile", value_name = "FILE")]
        key: PathBuf,

        /// Reject images larger than this many bytes
        #[arg(long, env = "YASB_MAX_IMAGE_SIZE", value_name = "BYTES")]
        max_image_size: Option<usize>,
    },

    /// Print the header of a signed image
    Inspect {
        /// Signed image
        #[arg(short, long = "inputfile", value_name = "FILE")]
        input: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFormat {
    /// Byte literals, 16 per line
    C,
    /// Byte literals with `\` line continuations for a #define
    CMacro,
    /// One hex string
    Hex,
    /// Standard base64
    Base64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    let provider = yasb_core::crypto::Secp256k1Provider::new();

    match command {
        Command::Keygen { output, force } => commands::keygen(&provider, &output, force),
        Command::Print { key, format } => {
            let text = commands::print_key(&key, format)?;
            println!("Public verification key:");
            println!("{}", text);
            Ok(())
        }
        Command::Sign { input, key, version, output } => {
            commands::sign(&provider, &input, &key, version, &output).map(|_| ())
        }
        Command::Verify { input, key, max_image_size } => {
            let report = commands::verify(&provider, &input, &key, max_image_size)?;
            println!("{}", report);
            Ok(())
        }
        Command::Inspect { input, json } => {
            println!("{}", commands::inspect(&input, json)?);
            Ok(())
        }
    }
}
