//! filestore CLI
//!
//! Inspect and edit a record file holding untyped JSON records.

use clap::{Parser, Subcommand, ValueEnum};
use filestore::{
    Config, FileStore, JsonLinesSerializer, JsonSerializer, OpenMode, Result, Serializer,
    StoreError, SyncStrategy, WriteOrder,
};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// filestore CLI
#[derive(Parser, Debug)]
#[command(name = "filestore-cli")]
#[command(about = "Read and edit a filestore record file")]
#[command(version)]
struct Args {
    /// Record file
    #[arg(short, long)]
    file: String,

    /// Fail instead of creating the file when it does not exist
    #[arg(long)]
    strict: bool,

    /// Text format of the file
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Indent JSON output (json format only)
    #[arg(long)]
    pretty: bool,

    /// Encode before truncating (default; the file survives an encode failure)
    #[arg(long, conflicts_with = "truncate_first")]
    encode_first: bool,

    /// Truncate before encoding (leaves the file empty on encode failure)
    #[arg(long)]
    truncate_first: bool,

    /// fsync after every write
    #[arg(long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// A single JSON array
    Json,
    /// One JSON document per line
    Jsonl,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every record, one per line
    Read {
        /// Print only the number of records
        #[arg(long)]
        count: bool,
    },

    /// Append one record
    Append {
        /// The record, as JSON
        record: String,
    },

    /// Replace the whole collection
    Replace {
        /// The new collection, as a JSON array
        records: String,
    },

    /// Remove every record
    Clear,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,filestore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("filestore-cli v{}", filestore::VERSION);

    let result = match args.format {
        Format::Json => {
            let serializer = if args.pretty {
                JsonSerializer::pretty()
            } else {
                JsonSerializer::new()
            };
            run(&args, serializer)
        }
        Format::Jsonl if args.pretty => Err(StoreError::Config(
            "--pretty only applies to --format json".to_string(),
        )),
        Format::Jsonl => run(&args, JsonLinesSerializer::new()),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run<S: Serializer<Value>>(args: &Args, serializer: S) -> Result<()> {
    let config = Config::builder()
        .open_mode(if args.strict {
            OpenMode::Strict
        } else {
            OpenMode::CreateIfMissing
        })
        .write_order(if args.truncate_first && !args.encode_first {
            WriteOrder::TruncateFirst
        } else {
            WriteOrder::EncodeFirst
        })
        .sync_strategy(if args.sync {
            SyncStrategy::EveryWrite
        } else {
            SyncStrategy::OsBuffered
        })
        .build();

    let store: FileStore<Value, S> = FileStore::with_config(&args.file, serializer, config);

    match &args.command {
        Commands::Read { count } => {
            let records = store.read()?;
            if *count {
                println!("{}", records.len());
            } else {
                for record in &records {
                    println!("{}", record);
                }
            }
        }
        Commands::Append { record } => {
            let record = parse_json(record)?;
            store.write_one(record)?;
        }
        Commands::Replace { records } => {
            let records = match parse_json(records)? {
                Value::Array(records) => records,
                other => {
                    return Err(StoreError::Config(format!(
                        "replace expects a JSON array, got {}",
                        other
                    )))
                }
            };
            store.replace_all(&records)?;
        }
        Commands::Clear => store.delete_all()?,
    }

    Ok(())
}

fn parse_json(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| StoreError::Config(format!("invalid JSON argument: {}", e)))
}
