//! CLI entry point for graph-models: inspects captured Microsoft Graph payloads.
//!
//! Reads one entity (or an OData collection with `--collection`) from a file
//! or stdin, resolves each record through the `GraphEntity` factory, then
//! runs the selected action (`-d` discriminate, `-n` normalize, `-c` check).
//!
//! Exit codes:
//! - 0: success
//! - 1: runtime error (I/O failure, malformed payload, decode mismatch)
//! - 2: argument validation error (clap handles this automatically)

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use graph_models::entity::GraphEntity;
use graph_models::error::GraphError;
use graph_models::odata::ODataList;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON payload to read. Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Treat the payload as an OData collection (`{"value": [...]}`).
    #[arg(long)]
    collection: bool,

    /// tracing filter directive, e.g. `debug` or `graph_models=trace`.
    #[arg(long, env = "GRAPH_MODELS_LOG", default_value = "warn")]
    log: String,

    #[command(flatten)]
    actions: ActionFlags,
}

/// Action flags — exactly one must be set per invocation.
///
/// Clap enforces this at parse time via the `group` attribute; a missing or
/// doubled action flag exits with code 2.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct ActionFlags {
    /// Report the concrete type each record resolves to.
    #[arg(short)]
    discriminate: bool,

    /// Print the decoded records as canonical JSON.
    #[arg(short)]
    normalize: bool,

    /// Decode through the field-deserializer tables and verify they agree
    /// with serde.
    #[arg(short)]
    check: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("record {index}: table parse and serde disagree for {variant}")]
    Mismatch { index: usize, variant: &'static str },

    #[error("no action flag provided")]
    NoAction,
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Graph(GraphError::Parse(e))
    }
}

fn init_logging(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Splits the payload into records, keeping the collection envelope.
fn records(input: &str, collection: bool) -> Result<ODataList<Value>, CliError> {
    if collection {
        Ok(serde_json::from_str(input)?)
    } else {
        Ok(ODataList::new(vec![serde_json::from_str(input)?]))
    }
}

/// Runs the selected action and returns what should go to stdout.
fn run(cli: &Cli, input: &str) -> Result<String, CliError> {
    let ODataList {
        context,
        value: values,
        additional_data: annotations,
    } = records(input, cli.collection)?;
    tracing::debug!(records = values.len(), collection = cli.collection, "payload loaded");

    if cli.actions.discriminate {
        let mut out = String::new();
        for (index, value) in values.into_iter().enumerate() {
            let entity = GraphEntity::from_value(value)?;
            out.push_str(&format!(
                "{index}\t{}\t{}\t{}\n",
                entity.variant_name(),
                entity.odata_type().unwrap_or("-"),
                entity.id().unwrap_or("-"),
            ));
        }
        Ok(out)
    } else if cli.actions.normalize {
        let entities = values
            .into_iter()
            .map(GraphEntity::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        let json = if cli.collection {
            serde_json::to_string_pretty(&ODataList {
                context,
                value: entities,
                additional_data: annotations,
            })?
        } else {
            serde_json::to_string_pretty(&entities.first())?
        };
        Ok(json + "\n")
    } else if cli.actions.check {
        let mut out = String::new();
        for (index, value) in values.into_iter().enumerate() {
            let via_table = GraphEntity::parse(value.clone())?;
            let via_serde = GraphEntity::from_value(value)?;
            if via_table != via_serde {
                return Err(CliError::Mismatch {
                    index,
                    variant: via_table.variant_name(),
                });
            }
            let unmodelled = via_table.additional_data().len();
            if unmodelled > 0 {
                tracing::info!(index, unmodelled, "record carries unmodelled properties");
            }
            out.push_str(&format!(
                "{index}\t{}\tok\t{unmodelled} unmodelled\n",
                via_table.variant_name()
            ));
        }
        Ok(out)
    } else {
        // Unreachable: clap enforces exactly one action flag.
        Err(CliError::NoAction)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let input = match read_input(cli.input.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &input) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
