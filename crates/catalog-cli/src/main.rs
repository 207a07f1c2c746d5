// crates/catalog-cli/src/main.rs
// ============================================================================
// Module: Catalog CLI Entry Point
// Description: Command dispatcher for catalog query and aggregation workflows.
// Purpose: Run the catalog engines against JSON data files from the shell.
// Dependencies: catalog-config, catalog-core, clap, rand, serde, thiserror.
// ============================================================================

//! ## Overview
//! The catalog CLI loads a listing snapshot (plus optional reviews and bonus
//! offers) from JSON files and runs one engine operation per invocation:
//! query, detail, suggest, reviews, submit-review, analytics, or metrics.
//! Inputs are untrusted; every file is size-capped and re-classified at
//! ingestion so engine invariants hold regardless of what the files carried.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use catalog_config::CatalogConfig;
use catalog_core::BonusOffer;
use catalog_core::FilterSpec;
use catalog_core::MetricState;
use catalog_core::MetricsSimulator;
use catalog_core::PageSpec;
use catalog_core::Record;
use catalog_core::RecordId;
use catalog_core::RelatedReview;
use catalog_core::ReviewStore;
use catalog_core::ReviewSubmission;
use catalog_core::Timestamp;
use catalog_core::runtime::InMemoryReviewStore;
use catalog_core::runtime::aggregate;
use catalog_core::runtime::query;
use catalog_core::runtime::submission::submit_review;
use catalog_core::runtime::suggest::suggest_with;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of any JSON input file.
const MAX_INPUT_BYTES: u64 = 8 * 1024 * 1024;

/// Default number of metric simulator ticks.
const DEFAULT_METRIC_TICKS: u64 = 1;

/// Default cap on recent reviews shown by the detail command.
const DETAIL_RECENT_REVIEWS: usize = 5;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "catalog", version, disable_help_subcommand = true)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter, sort, and paginate the listing snapshot.
    Query(QueryCommand),
    /// Show one listing with review stats, recent reviews, and bonuses.
    Detail(DetailCommand),
    /// Suggest completions for a search term.
    Suggest(SuggestCommand),
    /// List reviews, optionally filtered by record and minimum rating.
    Reviews(ReviewsCommand),
    /// Validate and append one review to the reviews file.
    SubmitReview(SubmitReviewCommand),
    /// Compute the full analytics report for the snapshot.
    Analytics(AnalyticsCommand),
    /// Advance the metrics simulator and print the resulting state.
    Metrics(MetricsCommand),
    /// Validate a configuration file.
    ConfigCheck,
}

/// Data file arguments shared by snapshot-reading commands.
#[derive(Args, Debug)]
struct DataArgs {
    /// Path to the listing snapshot JSON file.
    #[arg(long, value_name = "FILE")]
    data: PathBuf,
    /// Path to the reviews JSON file.
    #[arg(long, value_name = "FILE")]
    reviews: Option<PathBuf>,
    /// Path to the bonus offers JSON file.
    #[arg(long, value_name = "FILE")]
    bonuses: Option<PathBuf>,
}

/// Filter arguments shared by the query command.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Substring searched across names, features, and categories.
    #[arg(long)]
    search: Option<String>,
    /// Minimum rating (inclusive).
    #[arg(long)]
    min_rating: Option<f64>,
    /// Bonus tag: welcome, no_deposit, or free_spins.
    #[arg(long)]
    bonus_type: Option<String>,
    /// Payment-method substring.
    #[arg(long)]
    payment: Option<String>,
    /// License substring.
    #[arg(long)]
    license: Option<String>,
    /// Maximum accepted minimum deposit (inclusive).
    #[arg(long)]
    max_min_deposit: Option<u64>,
    /// Software-provider substring.
    #[arg(long)]
    software: Option<String>,
}

/// Arguments for the `query` command.
#[derive(Args, Debug)]
struct QueryCommand {
    /// Data file paths.
    #[command(flatten)]
    data: DataArgs,
    /// Filter parameters.
    #[command(flatten)]
    filters: FilterArgs,
    /// Sort field: name, rating, min_deposit, established_year, license.
    #[arg(long, default_value = "rating")]
    sort_by: String,
    /// Sort order: asc or desc.
    #[arg(long, default_value = "desc")]
    order: String,
    /// Zero-based offset into the filtered sequence.
    #[arg(long, default_value_t = 0)]
    offset: usize,
    /// Page size; clamped to the configured maximum.
    #[arg(long)]
    limit: Option<usize>,
}

/// Arguments for the `detail` command.
#[derive(Args, Debug)]
struct DetailCommand {
    /// Data file paths.
    #[command(flatten)]
    data: DataArgs,
    /// Record identifier.
    #[arg(long)]
    id: u64,
}

/// Arguments for the `suggest` command.
#[derive(Args, Debug)]
struct SuggestCommand {
    /// Data file paths.
    #[command(flatten)]
    data: DataArgs,
    /// Search term.
    #[arg(long)]
    term: String,
}

/// Arguments for the `reviews` command.
#[derive(Args, Debug)]
struct ReviewsCommand {
    /// Data file paths.
    #[command(flatten)]
    data: DataArgs,
    /// Restrict to one record.
    #[arg(long)]
    record_id: Option<u64>,
    /// Minimum review rating (inclusive).
    #[arg(long)]
    min_rating: Option<u8>,
    /// Only reviews at or after this RFC3339 date-time or date.
    #[arg(long, value_name = "WHEN")]
    since: Option<String>,
    /// Zero-based offset into the filtered sequence.
    #[arg(long, default_value_t = 0)]
    offset: usize,
    /// Page size; clamped to the configured maximum.
    #[arg(long)]
    limit: Option<usize>,
}

/// Arguments for the `submit-review` command.
#[derive(Args, Debug)]
struct SubmitReviewCommand {
    /// Data file paths. The reviews file is rewritten on success.
    #[command(flatten)]
    data: DataArgs,
    /// Reviewed record identifier.
    #[arg(long)]
    record_id: u64,
    /// Star rating from 1 to 5.
    #[arg(long)]
    rating: u8,
    /// Review author.
    #[arg(long)]
    author: String,
    /// Review text.
    #[arg(long)]
    comment: String,
}

/// Arguments for the `analytics` command.
#[derive(Args, Debug)]
struct AnalyticsCommand {
    /// Data file paths.
    #[command(flatten)]
    data: DataArgs,
}

/// Arguments for the `metrics` command.
#[derive(Args, Debug)]
struct MetricsCommand {
    /// Number of simulator ticks to run.
    #[arg(long, default_value_t = DEFAULT_METRIC_TICKS)]
    ticks: u64,
    /// RNG seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Query(command) => command_query(&command, &config),
        Commands::Detail(command) => command_detail(&command),
        Commands::Suggest(command) => command_suggest(&command, &config),
        Commands::Reviews(command) => command_reviews(&command, &config),
        Commands::SubmitReview(command) => command_submit_review(command),
        Commands::Analytics(command) => command_analytics(&command),
        Commands::Metrics(command) => command_metrics(&command, &config),
        Commands::ConfigCheck => command_config_check(cli.config.as_deref()),
    }
}

// ============================================================================
// SECTION: Query Command
// ============================================================================

/// Executes the `query` command.
fn command_query(command: &QueryCommand, config: &CatalogConfig) -> CliResult<ExitCode> {
    let snapshot = load_snapshot(&command.data.data)?;
    let filters = filter_spec(&command.filters);
    let sort = query::sort_spec_from_params(&command.sort_by, &command.order)
        .map_err(|err| CliError::new(err.to_string()))?;
    let page = page_spec(command.offset, command.limit, config);

    let outcome = query::query(&snapshot, &filters, &sort, &page);
    print_json(&outcome)
}

/// Executes the `detail` command.
fn command_detail(command: &DetailCommand) -> CliResult<ExitCode> {
    let snapshot = load_snapshot(&command.data.data)?;
    let reviews = load_reviews(command.data.reviews.as_deref())?;
    let bonuses = load_bonuses(command.data.bonuses.as_deref())?;
    let id = record_id(command.id)?;

    let record = query::find_record(&snapshot, id)
        .map_err(|err| CliError::new(err.to_string()))?;
    let detail = DetailReport {
        record: record.clone(),
        review_stats: aggregate::review_stats(record, &reviews),
        recent_reviews: aggregate::recent_reviews(&reviews, id, DETAIL_RECENT_REVIEWS),
        bonuses: aggregate::bonus_offers(&bonuses, Some(id), None),
    };
    print_json(&detail)
}

/// Detail command output: one record with its derived context.
#[derive(Debug, Serialize)]
struct DetailReport {
    /// The requested record.
    record: Record,
    /// Aggregated review statistics.
    review_stats: aggregate::ReviewStats,
    /// Most recent reviews, newest first.
    recent_reviews: Vec<RelatedReview>,
    /// Bonus offers attached to the record.
    bonuses: Vec<BonusOffer>,
}

// ============================================================================
// SECTION: Suggestion and Review Commands
// ============================================================================

/// Executes the `suggest` command.
fn command_suggest(command: &SuggestCommand, config: &CatalogConfig) -> CliResult<ExitCode> {
    let snapshot = load_snapshot(&command.data.data)?;
    let suggestions = suggest_with(
        &snapshot,
        &config.suggestions.vocabulary,
        &command.term,
        config.suggestions.min_term_length,
        config.suggestions.max_results,
    );
    print_json(&suggestions)
}

/// Executes the `reviews` command.
fn command_reviews(command: &ReviewsCommand, config: &CatalogConfig) -> CliResult<ExitCode> {
    let mut reviews = load_reviews(command.data.reviews.as_deref())?;
    if let Some(raw) = &command.since {
        let since = Timestamp::parse_rfc3339(raw)
            .ok_or_else(|| CliError::new(format!("invalid --since value: {raw}")))?;
        reviews.retain(|review| review.created_at >= since);
    }
    let record_id = command.record_id.map(record_id).transpose()?;
    let page = page_spec(command.offset, command.limit, config);

    let (data, total) = aggregate::review_page(&reviews, record_id, command.min_rating, &page);
    print_json(&ReviewListing {
        data,
        total,
    })
}

/// Reviews command output: one page plus the pre-slice total.
#[derive(Debug, Serialize)]
struct ReviewListing {
    /// Reviews within the requested page window.
    data: Vec<RelatedReview>,
    /// Total matched reviews before pagination.
    total: usize,
}

/// Executes the `submit-review` command.
fn command_submit_review(command: SubmitReviewCommand) -> CliResult<ExitCode> {
    let reviews_path = command.data.reviews.as_deref().ok_or_else(|| {
        CliError::new("submit-review requires --reviews".to_string())
    })?;
    let snapshot = load_snapshot(&command.data.data)?;
    let reviews = load_reviews(Some(reviews_path))?;
    let mut store = InMemoryReviewStore::with_reviews(reviews);

    let submission = ReviewSubmission {
        record_id: record_id(command.record_id)?,
        rating: command.rating,
        author: command.author,
        comment: command.comment,
        submitted_at: now()?,
    };
    let review = submit_review(&mut store, &snapshot, submission)
        .map_err(|err| CliError::new(err.to_string()))?;

    let updated = store.all().map_err(|err| CliError::new(err.to_string()))?;
    write_json_file(reviews_path, &updated)?;
    print_json(&review)
}

// ============================================================================
// SECTION: Analytics and Metrics Commands
// ============================================================================

/// Executes the `analytics` command.
fn command_analytics(command: &AnalyticsCommand) -> CliResult<ExitCode> {
    let snapshot = load_snapshot(&command.data.data)?;
    let reviews = load_reviews(command.data.reviews.as_deref())?;
    let bonuses = load_bonuses(command.data.bonuses.as_deref())?;
    let report = aggregate::analytics(&snapshot, &reviews, &bonuses);
    print_json(&report)
}

/// Executes the `metrics` command.
fn command_metrics(command: &MetricsCommand, config: &CatalogConfig) -> CliResult<ExitCode> {
    let seed_state = config.metric_state();
    if seed_state.gauges.is_empty() && seed_state.counters.is_empty() {
        return Err(CliError::new(
            "config defines no metrics; add [metrics.gauges.*] or [metrics.counters.*] sections"
                .to_string(),
        ));
    }
    let simulator = MetricsSimulator::new(seed_state);
    let mut rng = match command.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for _ in 0..command.ticks {
        simulator.tick(&mut rng);
    }
    let state: MetricState = simulator.snapshot();
    print_json(&state)
}

/// Executes the `config-check` command.
fn command_config_check(path: Option<&Path>) -> CliResult<ExitCode> {
    let path = path.ok_or_else(|| CliError::new("config-check requires --config".to_string()))?;
    CatalogConfig::load(path).map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line("config ok").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Parameter Mapping
// ============================================================================

/// Builds a filter specification from filter arguments.
fn filter_spec(args: &FilterArgs) -> FilterSpec {
    FilterSpec {
        search: args.search.clone(),
        min_rating: args.min_rating,
        bonus_type: args.bonus_type.clone(),
        payment: args.payment.clone(),
        license: args.license.clone(),
        max_min_deposit: args.max_min_deposit,
        software: args.software.clone(),
    }
}

/// Builds a normalized page window from pagination arguments.
fn page_spec(offset: usize, limit: Option<usize>, config: &CatalogConfig) -> PageSpec {
    PageSpec {
        offset,
        limit: limit.unwrap_or(config.pagination.default_limit),
    }
    .normalized(config.pagination.max_limit)
}

/// Parses a raw record identifier.
fn record_id(raw: u64) -> CliResult<RecordId> {
    RecordId::from_raw(raw)
        .ok_or_else(|| CliError::new(format!("invalid record id: {raw}")))
}

/// Loads the configuration, falling back to defaults when no path is given.
fn load_config(path: Option<&Path>) -> CliResult<CatalogConfig> {
    match path {
        Some(path) => CatalogConfig::load(path).map_err(|err| CliError::new(err.to_string())),
        None => Ok(CatalogConfig::default()),
    }
}

/// Current wall-clock time as a catalog timestamp.
fn now() -> CliResult<Timestamp> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| CliError::new(format!("system clock before epoch: {err}")))?;
    let millis = i64::try_from(elapsed.as_millis())
        .map_err(|err| CliError::new(format!("system clock out of range: {err}")))?;
    Ok(Timestamp::from_unix_millis(millis))
}

// ============================================================================
// SECTION: Input Loading
// ============================================================================

/// Loads and re-classifies the listing snapshot.
fn load_snapshot(path: &Path) -> CliResult<Vec<Record>> {
    let records: Vec<Record> = read_json_file(path)?;
    Ok(records.into_iter().map(Record::with_classified_bonus).collect())
}

/// Loads the reviews file; an absent path yields an empty list.
fn load_reviews(path: Option<&Path>) -> CliResult<Vec<RelatedReview>> {
    path.map_or_else(|| Ok(Vec::new()), read_json_file)
}

/// Loads the bonus offers file; an absent path yields an empty list.
fn load_bonuses(path: Option<&Path>) -> CliResult<Vec<BonusOffer>> {
    path.map_or_else(|| Ok(Vec::new()), read_json_file)
}

/// Reads and deserializes a size-capped JSON file.
fn read_json_file<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let metadata = fs::metadata(path)
        .map_err(|err| CliError::new(format!("failed to read {}: {err}", path.display())))?;
    if metadata.len() > MAX_INPUT_BYTES {
        return Err(CliError::new(format!(
            "{} exceeds the {MAX_INPUT_BYTES} byte input limit",
            path.display()
        )));
    }
    let document = fs::read_to_string(path)
        .map_err(|err| CliError::new(format!("failed to read {}: {err}", path.display())))?;
    serde_json::from_str(&document)
        .map_err(|err| CliError::new(format!("failed to parse {}: {err}", path.display())))
}

/// Serializes a value to a JSON file.
fn write_json_file<T: Serialize>(path: &Path, value: &T) -> CliResult<()> {
    let document = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("failed to encode {}: {err}", path.display())))?;
    fs::write(path, document)
        .map_err(|err| CliError::new(format!("failed to write {}: {err}", path.display())))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Serializes a value as pretty JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> CliResult<ExitCode> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("failed to encode output: {err}")))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output-stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
