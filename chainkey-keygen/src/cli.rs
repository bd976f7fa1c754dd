//! Command-line argument parsing.

use clap::{Parser, Subcommand};

use chainkey_core::{KeyType, PublicKey};

/// Environment variable consulted for secret keys not given as arguments.
pub const SECRET_ENV: &str = "CHAINKEY_SECRET";

/// Chainkey key pair tool.
#[derive(Parser, Debug, Clone)]
#[command(name = "chainkey-keygen")]
#[command(about = "Generate, inspect and use chainkey key pairs")]
#[command(version)]
pub struct Cli {
    /// Output in JSON format for machine parsing.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a new random key pair.
    Generate {
        /// Curve of the new key pair.
        #[arg(long, default_value = "ed25519")]
        curve: KeyType,

        /// Verify the generated key pair by signing and verifying a test message.
        #[arg(long)]
        verify: bool,
    },

    /// Show the public key and account id of a secret key.
    Inspect {
        /// Secret key as `[curve:]base58`.
        #[arg(long, env = SECRET_ENV, hide_env_values = true)]
        secret: String,
    },

    /// Sign a UTF-8 message.
    Sign {
        /// Secret key as `[curve:]base58`.
        #[arg(long, env = SECRET_ENV, hide_env_values = true)]
        secret: String,

        /// Message to sign.
        message: String,
    },

    /// Verify a signature over a UTF-8 message.
    Verify {
        /// Public key as `[curve:]base58`.
        #[arg(long)]
        public_key: PublicKey,

        /// Signed message.
        message: String,

        /// Signature as `[curve:]base58`.
        signature: String,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
