//! predicate-sql CLI
//!
//! Command-line tool for rendering engine-portable SQL predicates.

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use predicate_sql_cli::{
    configure_engine, render_in_list, render_multi_in, render_tuple, EngineKind,
};

/// Render keyset and IN-list predicates for a database engine.
#[derive(Parser)]
#[command(name = "predicate-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target engine.
    #[arg(short, long, env = "PREDICATE_SQL_ENGINE", value_enum, default_value_t = EngineKind::Generic)]
    engine: EngineKind,

    /// SQLite library version (only with `--engine sqlite`).
    #[arg(long, env = "PREDICATE_SQL_SQLITE_VERSION")]
    sqlite_version: Option<String>,

    /// Bind-parameter placeholder symbol.
    #[arg(short, long, env = "PREDICATE_SQL_PLACEHOLDER")]
    placeholder: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rows strictly after (or before) a composite cursor.
    Tuple {
        /// Cursor key as COLUMN=VALUE, most significant first.
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,

        /// Select rows before the cursor instead of after it.
        #[arg(short, long)]
        before: bool,
    },

    /// Rows whose column equals one of the values.
    InList {
        /// Column to filter on.
        #[arg(short, long)]
        column: String,

        /// Candidate value (repeatable).
        #[arg(long = "value", required = true)]
        values: Vec<String>,

        /// Select rows matching none of the values.
        #[arg(short, long, conflicts_with = "batch")]
        negate: bool,

        /// Split the list to fit the engine's parameter cap.
        #[arg(long)]
        batch: bool,
    },

    /// Rows whose columns equal one of the value rows.
    MultiIn {
        /// Comma-separated column names.
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// One row of values, comma-separated or a JSON array (repeatable).
        #[arg(short, long = "row", required = true)]
        rows: Vec<String>,

        /// Split the rows to fit the engine's parameter cap.
        #[arg(long)]
        batch: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let engine = configure_engine(
        cli.engine,
        cli.sqlite_version.as_deref(),
        cli.placeholder.as_deref(),
    )?;

    let outputs = match cli.command {
        Commands::Tuple { keys, before } => render_tuple(&engine, &keys, before)?,
        Commands::InList {
            column,
            values,
            negate,
            batch,
        } => render_in_list(&engine, &column, &values, negate, batch)?,
        Commands::MultiIn {
            columns,
            rows,
            batch,
        } => render_multi_in(&engine, &columns, &rows, batch)?,
    };

    debug!(count = outputs.len(), "Rendered predicates");
    for output in outputs {
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}
