//! aes256cbc CLI - OpenSSL compatible file encryption
//!
//! Reads and writes the same format as
//! `openssl enc -aes-256-cbc -md md5 -k PASSWORD [-a]`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, debug};

use aes256cbc::{Error, Result, SALT_LEN, armor};

#[derive(Parser)]
#[command(name = "aes256cbc")]
#[command(version)]
#[command(about = "OpenSSL compatible AES-256-CBC encryption.", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CommonArgs {
    /// Path to read from; stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to write to; stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Password, used byte for byte like `openssl enc -k`
    #[arg(short = 'k', long, env = "AES256CBC_PASSWORD", hide_env_values = true)]
    password: String,

    /// Base64 armor: encode after encrypting, decode before decrypting
    #[arg(short = 'a', long)]
    base64: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file
    #[command(alias = "e")]
    Encrypt {
        #[command(flatten)]
        common: CommonArgs,

        /// Salt as 16 hex digits; random when omitted
        #[arg(short = 'S', long, value_name = "HEX")]
        salt: Option<String>,
    },

    /// Decrypt a file
    #[command(alias = "d")]
    Decrypt {
        #[command(flatten)]
        common: CommonArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encrypt { common, salt } => run_encrypt(&common, salt.as_deref()),
        Commands::Decrypt { common } => run_decrypt(&common),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run_encrypt(common: &CommonArgs, salt: Option<&str>) -> Result<()> {
    let salt = salt.map(parse_salt).transpose()?;
    let data = read_input(common.input.as_deref())?;

    let frame = aes256cbc::encrypt(
        &data,
        common.password.as_bytes(),
        salt.as_ref().map(|s| &s[..]),
    )?;

    if common.base64 {
        let mut text = armor::encode(&frame);
        text.push('\n');
        write_output(common.output.as_deref(), text.as_bytes())
    } else {
        write_output(common.output.as_deref(), &frame)
    }
}

fn run_decrypt(common: &CommonArgs) -> Result<()> {
    let data = read_input(common.input.as_deref())?;

    let frame = if common.base64 {
        armor::decode(&String::from_utf8_lossy(&data))?
    } else {
        data
    };

    let plaintext = aes256cbc::decrypt(&frame, common.password.as_bytes())?;
    write_output(common.output.as_deref(), &plaintext)
}

/// Parse a salt given as exactly 16 hex digits
fn parse_salt(text: &str) -> Result<[u8; SALT_LEN]> {
    let bytes = hex::decode(text).map_err(|e| Error::InvalidSalt(e.to_string()))?;
    bytes.try_into().map_err(|_| {
        Error::InvalidSalt(format!(
            "expected {} hex digits, got {}",
            SALT_LEN * 2,
            text.len()
        ))
    })
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let data = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            data
        }
    };
    debug!("read {} bytes of input", data.len());
    Ok(data)
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    debug!("wrote {} bytes of output", data.len());
    Ok(())
}
