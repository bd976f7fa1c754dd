//! Chainkey key pair tool.
//!
//! Generates, inspects and uses key pairs in the `[curve:]base58`
//! textual format.
//!
//! # Usage
//!
//! ```bash
//! # Generate a key pair (human-readable output)
//! chainkey-keygen generate
//!
//! # Generate a key pair (JSON output)
//! chainkey-keygen generate --json
//!
//! # Show the public key of a stored secret
//! CHAINKEY_SECRET=ed25519:... chainkey-keygen inspect
//!
//! # Sign and verify
//! chainkey-keygen sign --secret ed25519:... "hello"
//! chainkey-keygen verify --public-key ed25519:... "hello" ed25519:...
//! ```

mod cli;
mod config;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chainkey_core::crypto::decode_signature;
use chainkey_core::{implicit_account_id, KeyPair, KeyType, PublicKey, SigningKeyPair};

use crate::cli::{Cli, Commands};
use crate::config::{KeygenConfig, OutputFormat};

/// Message signed by `generate --verify`.
const SELF_TEST_MESSAGE: &[u8] = b"chainkey keypair verification";

/// Result of a command, printed as text or JSON.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Report {
    KeyPair {
        public_key: PublicKey,
        secret_key: String,
        account_id: String,
    },
    Signature {
        public_key: PublicKey,
        signature: String,
    },
    Verification {
        public_key: PublicKey,
        valid: bool,
    },
}

impl Report {
    fn for_key_pair(key_pair: &KeyPair) -> Self {
        let public_key = key_pair.public_key();
        Report::KeyPair {
            public_key,
            secret_key: key_pair.to_encoded_string(),
            account_id: implicit_account_id(&public_key),
        }
    }

    fn print(&self, output: OutputFormat) -> anyhow::Result<()> {
        if output == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        match self {
            Report::KeyPair { public_key, secret_key, account_id } => {
                println!("Public Key:  {}", public_key);
                println!("Secret Key:  {}", secret_key);
                println!("Account Id:  {}", account_id);
                println!();
                println!("IMPORTANT: Store your secret key securely!");
                println!("           Anyone with this key can control your account.");
            }
            Report::Signature { signature, .. } => println!("{}", signature),
            Report::Verification { valid, .. } => {
                println!("{}", if *valid { "valid" } else { "invalid" })
            }
        }
        Ok(())
    }
}

/// Execute a command.
fn run(command: &Commands) -> anyhow::Result<Report> {
    match command {
        Commands::Generate { curve, verify } => {
            let key_pair = KeyPair::from_random(*curve);

            if *verify {
                let signature = key_pair.sign(SELF_TEST_MESSAGE);
                if !key_pair.verify(SELF_TEST_MESSAGE, signature.signature_bytes()) {
                    bail!("generated key pair failed verification");
                }
                tracing::info!("generated key pair passed self-test");
            }

            Ok(Report::for_key_pair(&key_pair))
        }
        Commands::Inspect { secret } => {
            let key_pair = KeyPair::from_encoded_secret(secret).context("invalid secret key")?;
            Ok(Report::for_key_pair(&key_pair))
        }
        Commands::Sign { secret, message } => {
            let key_pair = KeyPair::from_encoded_secret(secret).context("invalid secret key")?;
            let signature = key_pair.sign(message.as_bytes());
            Ok(Report::Signature {
                public_key: key_pair.public_key(),
                signature: signature.to_string(),
            })
        }
        Commands::Verify { public_key, message, signature } => {
            let signature = parse_signature(signature, public_key.key_type())?;
            let valid = public_key.verify(message.as_bytes(), &signature);
            tracing::debug!(%public_key, valid, "checked signature");
            Ok(Report::Verification {
                public_key: *public_key,
                valid,
            })
        }
    }
}

/// Decode a `[curve:]base58` signature for a key of curve `expected`.
fn parse_signature(encoded: &str, expected: KeyType) -> anyhow::Result<Vec<u8>> {
    let (key_type, bytes) = decode_signature(encoded).context("invalid signature")?;
    if key_type != expected {
        bail!("signature curve {} does not match public key curve {}", key_type, expected);
    }
    Ok(bytes)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = KeygenConfig::from_cli(&cli);

    // Logs go to stderr so stdout stays parseable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("chainkey-keygen v{}", env!("CARGO_PKG_VERSION"));

    let report = run(&config.command)?;
    report.print(config.output)?;

    if let Report::Verification { valid: false, .. } = report {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainkey_core::KeyError;

    fn sign_with(key_pair: &KeyPair, message: &str) -> String {
        let report = run(&Commands::Sign {
            secret: key_pair.to_encoded_string(),
            message: message.to_string(),
        })
        .unwrap();

        match report {
            Report::Signature { signature, .. } => signature,
            other => panic!("unexpected report: {:?}", other),
        }
    }

    fn verify_with(public_key: PublicKey, message: &str, signature: String) -> bool {
        let report = run(&Commands::Verify {
            public_key,
            message: message.to_string(),
            signature,
        })
        .unwrap();

        match report {
            Report::Verification { valid, .. } => valid,
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_generate_with_self_test() {
        let report = run(&Commands::Generate { curve: KeyType::Ed25519, verify: true }).unwrap();

        match report {
            Report::KeyPair { public_key, secret_key, account_id } => {
                assert!(secret_key.starts_with("ed25519:"));
                assert_eq!(account_id, implicit_account_id(&public_key));
                let restored = KeyPair::from_encoded_secret(&secret_key).unwrap();
                assert_eq!(restored.public_key(), public_key);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_inspect_matches_key_pair() {
        let key_pair = KeyPair::from_random(KeyType::Ed25519);
        let report = run(&Commands::Inspect { secret: key_pair.to_encoded_string() }).unwrap();

        assert!(matches!(
            report,
            Report::KeyPair { public_key, .. } if public_key == key_pair.public_key()
        ));
    }

    #[test]
    fn test_inspect_rejects_bad_secret() {
        assert!(run(&Commands::Inspect { secret: "ed25519:0OIl".into() }).is_err());
    }

    #[test]
    fn test_sign_then_verify() {
        let key_pair = KeyPair::from_random(KeyType::Ed25519);
        let signature = sign_with(&key_pair, "hello");
        assert!(signature.starts_with("ed25519:"));

        assert!(verify_with(key_pair.public_key(), "hello", signature.clone()));
        assert!(!verify_with(key_pair.public_key(), "goodbye", signature.clone()));

        // The curve prefix on the signature is optional.
        let bare = signature.trim_start_matches("ed25519:").to_string();
        assert!(verify_with(key_pair.public_key(), "hello", bare));
    }

    #[test]
    fn test_verify_rejects_unknown_signature_curve() {
        let key_pair = KeyPair::from_random(KeyType::Ed25519);
        let result = run(&Commands::Verify {
            public_key: key_pair.public_key(),
            message: "hello".into(),
            signature: "rsa:abc".into(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_rejects_extra_segments() {
        let key_pair = KeyPair::from_random(KeyType::Ed25519);
        let err = run(&Commands::Verify {
            public_key: key_pair.public_key(),
            message: "hello".into(),
            signature: "a:b:c".into(),
        })
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<KeyError>(),
            Some(&KeyError::InvalidKeyFormat { segments: 3 })
        );
    }

    #[test]
    fn test_json_report_fields() {
        let key_pair = KeyPair::from_random(KeyType::Ed25519);
        let value = serde_json::to_value(Report::for_key_pair(&key_pair)).unwrap();

        assert_eq!(value["public_key"], key_pair.public_key().to_string());
        assert_eq!(value["secret_key"], key_pair.to_encoded_string());
        assert_eq!(value["account_id"].as_str().unwrap().len(), 64);
    }
}
