//! # HelixMaster CLI
//!
//! Runs reducer, gear stage, bearing and shaft calculations from JSON input
//! files, lists the built-in catalogs and writes drafting data records.
//!
//! ```text
//! helix reducer reducer.json
//! helix --json bearing bearing.json
//! helix -vv shaft shaft.json
//! helix catalog bearings --kind tapered-roller --min-bore 40
//! helix export reducer.json --shaft shaft.json --bearing a.json --bearing b.json --out data/
//! ```

mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use helix_core::bearings::{BearingKind, BEARING_CATALOG};
use helix_core::calculations::{
    select_bearing, size_reducer, size_shaft, BearingInput, BearingResult, CalculationOutput, CalculationRequest,
    ReducerInput, ShaftInput,
};
use helix_core::export::{drafting_records, DraftingExport};
use helix_core::materials::{MaterialCategory, GEAR_MATERIALS, GENERAL_MATERIALS};
use helix_core::{CalcError, DesignConstants};

#[derive(Parser)]
#[command(name = "helix")]
#[command(author, version, about = "Two-stage helical gear reducer calculator")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print only the JSON result
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file overriding the design constants
    #[arg(long, global = true)]
    constants: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a two-stage reducer
    Reducer { input: PathBuf },
    /// Size a single gear stage
    Stage { input: PathBuf },
    /// Check the life of a rolling bearing
    Bearing { input: PathBuf },
    /// Size a gear shaft
    Shaft { input: PathBuf },
    /// List built-in catalogs
    #[command(subcommand)]
    Catalog(CatalogCommands),
    /// Write drafting data records for a reducer
    Export {
        /// Reducer input
        reducer: PathBuf,
        /// Shaft input
        #[arg(long)]
        shaft: Option<PathBuf>,
        /// Bearing input (repeatable)
        #[arg(long)]
        bearing: Vec<PathBuf>,
        /// Output directory; records go to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// Rolling bearings
    Bearings {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Smallest bore (mm)
        #[arg(long)]
        min_bore: Option<f64>,
    },
    /// Materials
    Materials {
        #[arg(long, value_enum, default_value = "gear")]
        category: CategoryArg,
    },
    /// Working factor Ko matrix
    WorkingFactors,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    DeepGrooveBall,
    SelfAligningBall,
    AngularContact,
    TaperedRoller,
    CylindricalRoller,
}

impl From<KindArg> for BearingKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::DeepGrooveBall => BearingKind::DeepGrooveBall,
            KindArg::SelfAligningBall => BearingKind::SelfAligningBall,
            KindArg::AngularContact => BearingKind::AngularContact,
            KindArg::TaperedRoller => BearingKind::TaperedRoller,
            KindArg::CylindricalRoller => BearingKind::CylindricalRoller,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Gear,
    General,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("cannot parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("cannot serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_constants(path: Option<&Path>) -> Result<DesignConstants, CliError> {
    match path {
        Some(path) => read_json(path),
        None => Ok(DesignConstants::default()),
    }
}

fn run_request(request: CalculationRequest, constants: &DesignConstants, json: bool) -> Result<(), CliError> {
    request.validate()?;
    let output = request.run(constants)?;

    if !json {
        match &output {
            CalculationOutput::Reducer(result) => report::print_reducer(result),
            CalculationOutput::Stage(result) => report::print_stage("STAGE", result),
            CalculationOutput::Bearing(result) => report::print_bearing(result),
            CalculationOutput::Shaft(result) => report::print_shaft(result),
        }
        println!();
        println!("JSON Output:");
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_catalog(command: CatalogCommands, json: bool) -> Result<(), CliError> {
    match command {
        CatalogCommands::Bearings { kind, min_bore } => {
            let kind = kind.map(BearingKind::from);
            let bearings: Vec<_> = BEARING_CATALOG
                .iter()
                .filter(|b| kind.map_or(true, |k| b.kind == k))
                .filter(|b| min_bore.map_or(true, |d| b.bore_mm >= d))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&bearings)?);
            } else {
                report::print_bearing_catalog(&bearings);
            }
        }
        CatalogCommands::Materials { category } => {
            let (category, materials) = match category {
                CategoryArg::Gear => (MaterialCategory::Gear, &*GEAR_MATERIALS),
                CategoryArg::General => (MaterialCategory::General, &*GENERAL_MATERIALS),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(materials)?);
            } else {
                report::print_materials(category, materials);
            }
        }
        CatalogCommands::WorkingFactors => report::print_working_factors(),
    }
    Ok(())
}

fn run_export(
    reducer: &Path,
    shaft: Option<&Path>,
    bearings: &[PathBuf],
    out: Option<&Path>,
    constants: &DesignConstants,
) -> Result<(), CliError> {
    let reducer_input: ReducerInput = read_json(reducer)?;
    reducer_input.validate()?;
    let reducer_result = size_reducer(&reducer_input, constants)?;

    let shaft_result = match shaft {
        Some(path) => {
            let input: ShaftInput = read_json(path)?;
            input.validate()?;
            Some(size_shaft(&input)?)
        }
        None => None,
    };

    let bearing_results = bearings
        .iter()
        .map(|path| -> Result<BearingResult, CliError> {
            let input: BearingInput = read_json(path)?;
            input.validate()?;
            Ok(select_bearing(&input)?)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let records = drafting_records(&DraftingExport {
        reducer: &reducer_result,
        shaft: shaft_result.as_ref(),
        bearings: &bearing_results,
    });

    match out {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|source| CliError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
            for record in &records {
                let path = dir.join(&record.name);
                fs::write(&path, &record.contents).map_err(|source| CliError::Write {
                    path: path.clone(),
                    source,
                })?;
                log::info!("wrote {}", path.display());
            }
        }
        None => {
            for record in &records {
                println!("=== {} ===", record.name);
                print!("{}", record.contents);
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let constants = load_constants(cli.constants.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Reducer { input } => run_request(CalculationRequest::Reducer(read_json(&input)?), &constants, json),
        Commands::Stage { input } => run_request(CalculationRequest::Stage(read_json(&input)?), &constants, json),
        Commands::Bearing { input } => run_request(CalculationRequest::Bearing(read_json(&input)?), &constants, json),
        Commands::Shaft { input } => run_request(CalculationRequest::Shaft(read_json(&input)?), &constants, json),
        Commands::Catalog(command) => run_catalog(command, json),
        Commands::Export {
            reducer,
            shaft,
            bearing,
            out,
        } => run_export(&reducer, shaft.as_deref(), &bearing, out.as_deref(), &constants),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CliError::Calc(calc) = &e {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
