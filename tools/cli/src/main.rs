//! NUBAN command line tool
//!
//! Usage:
//! ```bash
//! nuban generate 123456789 044
//! nuban validate 1234567895 044
//! nuban banks 1234567895 --directory-url https://example.com/banks.json
//! ```

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::info;
use nuban::{
    generate, infer_banks, validate, DirectoryConfigBuilder, HttpBankDirectory, NubanError,
    DEFAULT_HTTPS_TIMEOUT_SEC,
};

/// Generate and validate Nigeria Uniform Bank Account Numbers
#[derive(Parser)]
#[command(name = "nuban")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append the check digit to a serial number
    Generate {
        /// Serial number, up to 9 digits
        serial_number: String,
        /// 3 or 5 digit bank code
        bank_code: String,
    },

    /// Check an account number against a bank code
    Validate {
        /// 10 digit account number
        account_number: String,
        /// 3 or 5 digit bank code
        bank_code: String,
    },

    /// List the banks an account number may belong to
    Banks {
        /// 10 digit account number
        account_number: String,
        /// URL of the JSON bank directory
        #[arg(long, env = "NUBAN_DIRECTORY_URL")]
        directory_url: String,
        /// Request timeout
        #[arg(long, default_value_t = DEFAULT_HTTPS_TIMEOUT_SEC)]
        timeout_seconds: u64,
    },
}

fn main() {
    // Respect RUST_LOG if set
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            let code = match err.downcast::<NubanError>() {
                Ok(nuban_error) => nuban_error.into(),
                Err(_) => 1,
            };
            process::exit(code);
        }
    }
}

fn run(command: Commands) -> anyhow::Result<i32> {
    match command {
        Commands::Generate {
            serial_number,
            bank_code,
        } => {
            println!("{}", generate(&serial_number, &bank_code)?);
            Ok(0)
        }
        Commands::Validate {
            account_number,
            bank_code,
        } => {
            if validate(&account_number, &bank_code)? {
                println!("valid");
                Ok(0)
            } else {
                println!("invalid");
                Ok(1)
            }
        }
        Commands::Banks {
            account_number,
            directory_url,
            timeout_seconds,
        } => {
            let config = DirectoryConfigBuilder::new(directory_url)
                .set_timeout(Duration::from_secs(timeout_seconds))
                .build();
            info!("fetching bank directory from {}", config.endpoint);
            let banks = HttpBankDirectory::new(config).fetch_banks()?;
            let matches = infer_banks(&account_number, &banks);
            if matches.is_empty() {
                info!("no bank matches {}", account_number);
            }
            for bank in matches {
                println!("{}", bank.name);
            }
            Ok(0)
        }
    }
}
