use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use prefstore::{PrefStore, StoreError};

#[derive(Error, Debug)]
enum AppError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid integer value: {0}")]
    InvalidInt(#[from] std::num::ParseIntError),

    #[error("invalid float value: {0}")]
    InvalidFloat(#[from] std::num::ParseFloatError),

    #[error("invalid boolean value: {0}")]
    InvalidBool(#[from] std::str::ParseBoolError),

    #[error("invalid JSON value: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Value types the CLI can read and write.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ValueType {
    /// UTF-8 text (the default).
    #[default]
    String,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean (`true`/`false`).
    Bool,
    /// Raw bytes (the argument's UTF-8 bytes).
    Bytes,
    /// Arbitrary JSON document.
    Json,
}

#[derive(Parser)]
#[command(name = "prefstore")]
#[command(about = "Typed key-value preferences with native primitives and JSON documents")]
struct Cli {
    /// Path to the preference database
    #[arg(long, env = "PREFSTORE_PATH", default_value = ".prefstore")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a value under a key
    Set {
        /// Key to write
        key: String,

        /// Value to store, parsed according to --type
        value: String,

        /// How to interpret the value
        #[arg(short = 't', long = "type", value_enum, default_value_t)]
        value_type: ValueType,
    },

    /// Print the value stored under a key
    Get {
        /// Key to read
        key: String,

        /// Type to read the value as
        #[arg(short = 't', long = "type", value_enum, default_value_t)]
        value_type: ValueType,
    },

    /// Remove the value stored under a key
    Del {
        /// Key to remove
        key: String,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let store = PrefStore::open(&cli.store)?;

    match cli.command {
        Commands::Set {
            key,
            value,
            value_type,
        } => set(&store, &key, &value, value_type),
        Commands::Get { key, value_type } => get(&store, &key, value_type),
        Commands::Del { key } => Ok(store.remove(&key)?),
    }
}

fn set(store: &PrefStore, key: &str, value: &str, value_type: ValueType) -> Result<(), AppError> {
    match value_type {
        ValueType::String => store.save(key, value.to_string())?,
        ValueType::Int => store.save(key, value.parse::<i64>()?)?,
        ValueType::Float => store.save(key, value.parse::<f64>()?)?,
        ValueType::Bool => store.save(key, value.parse::<bool>()?)?,
        ValueType::Bytes => store.save(key, value.as_bytes().to_vec())?,
        ValueType::Json => {
            let document: serde_json::Value = serde_json::from_str(value)?;
            store.save(key, document)?;
        }
    }
    Ok(())
}

fn get(store: &PrefStore, key: &str, value_type: ValueType) -> Result<(), AppError> {
    match value_type {
        ValueType::String => print_value(store.get::<String>(key)?),
        ValueType::Int => print_value(store.get::<i64>(key)?),
        ValueType::Float => print_value(store.get::<f64>(key)?),
        ValueType::Bool => print_value(store.get::<bool>(key)?),
        ValueType::Bytes => match store.get::<Vec<u8>>(key)? {
            Some(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
            None => println!("(not set)"),
        },
        ValueType::Json => match store.get::<serde_json::Value>(key)? {
            Some(document) => println!("{}", serde_json::to_string_pretty(&document)?),
            None => println!("(not set)"),
        },
    }
    Ok(())
}

fn print_value<T: std::fmt::Display>(value: Option<T>) {
    match value {
        Some(value) => println!("{}", value),
        None => println!("(not set)"),
    }
}
