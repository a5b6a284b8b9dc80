//! Foamcase CLI - OpenFOAM case-file generator.
//!
//! Generate the initial-time field files of an OpenFOAM case from a JSON
//! case description or one of the built-in presets.

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use foamcase::case::{generate_case, write_case, CaseConfig, CaseError, ResolvedCase};
use foamcase::export::MemoryFiles;

/// OpenFOAM case-file generator.
#[derive(Parser)]
#[command(name = "foamcase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace). Falls back to RUST_LOG, then info.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the field files of a case.
    Generate {
        /// JSON case file; the preset is used if omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Built-in case used when no input file is given.
        #[arg(short, long, default_value = "airfoil")]
        preset: Preset,

        /// Run directory, overriding the one in the case file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the files in memory and list them instead of writing.
        #[arg(long)]
        dry_run: bool,
    },

    /// Write a preset case file as JSON and exit.
    Defaults {
        /// Destination JSON file.
        #[arg(short, long)]
        output: PathBuf,

        /// Preset to write.
        #[arg(short, long, default_value = "airfoil")]
        preset: Preset,
    },

    /// Display the reconciled flow state and freestream turbulence of a case.
    Info {
        /// JSON case file; the preset is used if omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Built-in case used when no input file is given.
        #[arg(short, long, default_value = "airfoil")]
        preset: Preset,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 2-D NACA 0012 airfoil in a freestream.
    Airfoil,
    /// Plane channel with inlet, outlet and walls.
    Channel,
    /// Fully periodic Taylor-Green vortex box.
    TaylorGreen,
}

impl Preset {
    fn config(self) -> CaseConfig {
        match self {
            Preset::Airfoil => CaseConfig::airfoil(),
            Preset::Channel => CaseConfig::channel(),
            Preset::TaylorGreen => CaseConfig::taylor_green_vortex(),
        }
    }
}

fn init_logging(level: Option<&str>) {
    let log_level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|v| v.parse::<LevelFilter>().ok())
        })
        .unwrap_or(LevelFilter::Info);

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{:5} {}] {}", record.level(), record.target(), record.args()))
        .init();
}

fn load_config(input: Option<PathBuf>, preset: Preset) -> Result<CaseConfig, CaseError> {
    match input {
        Some(path) => CaseConfig::load(&path),
        None => Ok(preset.config()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Generate {
            input,
            preset,
            output,
            dry_run,
        } => run_generate(input, preset, output, dry_run),
        Commands::Defaults { output, preset } => run_defaults(output, preset),
        Commands::Info { input, preset } => run_info(input, preset),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_flow_summary(case: &ResolvedCase) {
    let state = &case.state;
    println!("Reynolds number: {:.6e}", state.reynolds_number);
    if let Some(ma) = state.mach_number {
        println!("Mach number: {:.4}", ma);
    }
}

fn run_generate(
    input: Option<PathBuf>,
    preset: Preset,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CaseError> {
    let mut config = load_config(input, preset)?;
    if let Some(output) = output {
        config.file.run_directory = output;
    }

    println!("Foamcase - OpenFOAM Case Generator");
    println!("==================================");
    println!("Case: {}", config.file.case_name);
    println!("Patches: {}", config.boundary.boundary_conditions.len());

    let start = Instant::now();
    let case = config.resolve()?;
    print_flow_summary(&case);

    if dry_run {
        let mut files = MemoryFiles::new(case.version.clone());
        generate_case(&mut files, &case)?;
        println!("\nDry run, {} files rendered:", files.len());
        for path in files.paths() {
            println!("  {}", path);
        }
    } else {
        let root = write_case(&config)?;
        println!("\nCase written to {}", root.display());
    }

    println!("Completed in {:.2?}", start.elapsed());
    Ok(())
}

fn run_defaults(output: PathBuf, preset: Preset) -> Result<(), CaseError> {
    preset.config().save(&output)?;
    println!("Wrote case file {}", output.display());
    Ok(())
}

fn run_info(input: Option<PathBuf>, preset: Preset) -> Result<(), CaseError> {
    let config = load_config(input, preset)?;
    let case = config.resolve()?;
    let state = &case.state;

    println!("Case Information");
    println!("================");
    println!("Case path: {}", config.file.case_path().display());
    println!("Patches:");
    for (name, boundary) in case.patches.iter() {
        println!("  {:<24} {:?}", name, boundary);
    }

    println!("\nFlow:");
    println!(
        "  Velocity: ({:.6}, {:.6}, {:.6}) m/s",
        case.flow.inlet_velocity.x, case.flow.inlet_velocity.y, case.flow.inlet_velocity.z
    );
    println!("  nu: {:.6e} m^2/s", state.nu);
    println!("  mu: {:.6e} kg/(m s)", state.mu);
    println!("  rho: {} kg/m^3", state.rho);
    if let Some(c) = state.speed_of_sound {
        println!("  Speed of sound: {:.3} m/s", c);
    }
    print_flow_summary(&case);

    let q = case.freestream_quantities()?;
    println!("\nFreestream turbulence ({}):", case.turbulence.rans_model.name());
    println!("  k:        {:.6e}", q.k);
    println!("  omega:    {:.6e}", q.omega);
    println!("  epsilon:  {:.6e}", q.epsilon);
    println!("  nuTilda:  {:.6e}", q.nu_tilda);
    println!("  ReThetat: {:.4}", q.re_theta_t);
    Ok(())
}
