use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cutsel_catalog::{CatalogStore, ProcessType, QueryInput};
use cutsel_query::{normalize_number, CompletenessPolicy, QueryEngine};
use std::path::PathBuf;

mod import;
mod render;

#[derive(Parser)]
#[command(name = "cutsel")]
#[command(about = "Breaker and material candidate search for machining operators", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Catalog database path
    #[arg(long, global = true, default_value = "cutting_selection.db")]
    db: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// (Re)build the catalog database from CSV sources
    Import(ImportArgs),

    /// Search both catalogs with partially-specified process parameters
    Search(SearchArgs),

    /// Assemble the assistant system prompt for the current search
    Prompt(SearchArgs),
}

#[derive(Args)]
struct ImportArgs {
    /// Breakers CSV file
    #[arg(long)]
    breakers: PathBuf,

    /// Materials CSV file
    #[arg(long)]
    materials: PathBuf,
}

#[derive(Args, Clone)]
struct SearchArgs {
    /// Depth of cut (mm), raw text; blank or invalid means unspecified
    #[arg(long, default_value = "")]
    depth: String,

    /// Feed rate (mm/rev), raw text
    #[arg(long, default_value = "")]
    feed: String,

    /// Cutting speed (m/min), raw text
    #[arg(long, default_value = "")]
    speed: String,

    /// Process type
    #[arg(long, value_enum)]
    process_type: Option<ProcessTypeArg>,

    /// Completeness policy gating the search
    #[arg(long, value_enum, default_value = "numeric-2of3")]
    policy: PolicyArg,

    /// Premise JSON file (prompt subcommand only)
    #[arg(long, default_value = "premise.json")]
    premise: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProcessTypeArg {
    Finishing,
    LightCutting,
    MediumCutting,
    Roughing,
}

impl From<ProcessTypeArg> for ProcessType {
    fn from(arg: ProcessTypeArg) -> Self {
        match arg {
            ProcessTypeArg::Finishing => ProcessType::Finishing,
            ProcessTypeArg::LightCutting => ProcessType::LightCutting,
            ProcessTypeArg::MediumCutting => ProcessType::MediumCutting,
            ProcessTypeArg::Roughing => ProcessType::Roughing,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
enum PolicyArg {
    /// At least 2 of the 3 numeric fields (process type uncounted)
    #[value(name = "numeric-2of3")]
    Numeric2of3,
    /// At least 3 of all 4 fields
    #[value(name = "any-3of4")]
    Any3of4,
}

impl From<PolicyArg> for CompletenessPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Numeric2of3 => CompletenessPolicy::numeric_two_of_three(),
            PolicyArg::Any3of4 => CompletenessPolicy::any_three_of_four(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let store = CatalogStore::new(&cli.db);

    match cli.command {
        Commands::Import(args) => import::run(&store, &args.breakers, &args.materials),
        Commands::Search(args) => run_search(&store, &args),
        Commands::Prompt(args) => run_prompt(&store, &args),
    }
}

fn build_input(args: &SearchArgs) -> QueryInput {
    QueryInput {
        depth_of_cut: normalize_number(&args.depth),
        feed_rate: normalize_number(&args.feed),
        cutting_speed: normalize_number(&args.speed),
        process_type: args.process_type.map(Into::into),
    }
}

/// Gate, then query both catalogs. A gate failure aborts before any query.
fn run_query(
    store: &CatalogStore,
    args: &SearchArgs,
) -> Result<(Vec<cutsel_catalog::BreakerRow>, Vec<cutsel_catalog::MaterialRow>)> {
    let input = build_input(args);
    let policy: CompletenessPolicy = args.policy.into();
    policy.check(&input)?;

    let engine = QueryEngine::new(store);
    let breakers = engine.query_breakers(&input)?;
    let materials = engine.query_materials(&input)?;
    Ok((breakers, materials))
}

fn run_search(store: &CatalogStore, args: &SearchArgs) -> Result<()> {
    let (breakers, materials) = run_query(store, args)?;
    render::print_breakers(&breakers);
    render::print_materials(&materials);
    Ok(())
}

fn run_prompt(store: &CatalogStore, args: &SearchArgs) -> Result<()> {
    let (breakers, materials) = run_query(store, args)?;
    let premise = cutsel_assistant::Premise::load(&args.premise)?;
    let process_type = args
        .process_type
        .map(|p| ProcessType::from(p).to_string())
        .unwrap_or_default();
    let prompt = cutsel_assistant::build_system_prompt(&cutsel_assistant::PromptContext {
        premise: &premise,
        depth_of_cut: &args.depth,
        feed_rate: &args.feed,
        cutting_speed: &args.speed,
        process_type: &process_type,
        breakers: &breakers,
        materials: &materials,
    })?;
    println!("{prompt}");
    Ok(())
}
