use clap::{Parser, Subcommand};
use ml_model::{EmpiricalFactors, OperatingPoint, ValidationPolicy};
use ml_study::{
    RunOptions, Study, StudyError, StudyResult, load_yaml, run_study, save_yaml, write_outputs,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "ml-cli")]
#[command(about = "Meanline CLI - centrifugal compressor stage performance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operating point
    Point {
        /// Rotational speed (rev/min)
        #[arg(long)]
        n_rpm: f64,
        /// Mass flow rate (kg/s)
        #[arg(long)]
        mdot: f64,
        /// Slip factor
        #[arg(long, default_value_t = 0.92)]
        slip: f64,
        /// Isentropic efficiency
        #[arg(long, default_value_t = 0.76)]
        eta: f64,
        /// Study file supplying geometry and gas (defaults to the reference impeller in air)
        #[arg(long)]
        study: Option<PathBuf>,
        /// Reject invalid inputs and non-physical results
        #[arg(long)]
        checked: bool,
    },
    /// Run the cases of a study and write one table per case
    Run {
        /// Path to the study YAML file
        study_path: PathBuf,
        /// Only run this case
        #[arg(long)]
        case: Option<String>,
        /// Evaluate points on all cores
        #[arg(long)]
        parallel: bool,
        /// Output directory (overrides the study's output.directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print tables to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Validate study file syntax and values
    Validate {
        /// Path to the study YAML file
        study_path: PathBuf,
    },
    /// Write the reference study to a file
    Init {
        /// Destination YAML path
        study_path: PathBuf,
    },
}

fn main() -> StudyResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Point {
            n_rpm,
            mdot,
            slip,
            eta,
            study,
            checked,
        } => cmd_point(
            OperatingPoint::new(n_rpm, mdot),
            EmpiricalFactors::new(slip, eta),
            study.as_deref(),
            checked,
        ),
        Commands::Run {
            study_path,
            case,
            parallel,
            output,
            stdout,
        } => cmd_run(&study_path, case, parallel, output.as_deref(), stdout),
        Commands::Validate { study_path } => cmd_validate(&study_path),
        Commands::Init { study_path } => cmd_init(&study_path),
    }
}

fn cmd_point(
    point: OperatingPoint,
    factors: EmpiricalFactors,
    study_path: Option<&Path>,
    checked: bool,
) -> StudyResult<()> {
    let study = match study_path {
        Some(path) => load_yaml(path)?,
        None => Study::baseline(),
    };
    let geometry = study.geometry.to_geometry()?;
    let gas = study.gas.to_gas()?;

    let policy = if checked {
        ValidationPolicy::Checked
    } else {
        ValidationPolicy::Unchecked
    };
    let r = policy.apply(&point, &factors, &geometry, &gas)?;

    println!("Stage: {}", study.name);
    println!(
        "  N = {:.0} rpm, m_dot = {:.4} kg/s, sigma = {:.3}, eta_c = {:.3}",
        point.n_rpm, point.mdot_kg_s, factors.slip, factors.eta_c
    );
    println!("  U              = {:10.3} m/s", r.u_m_s);
    println!("  V_ax           = {:10.3} m/s", r.v_ax_m_s);
    println!("  V_theta2_ideal = {:10.3} m/s", r.v_theta2_ideal_m_s);
    println!("  V_theta2       = {:10.3} m/s", r.v_theta2_m_s);
    println!("  delta_h        = {:10.1} J/kg", r.delta_h_j_kg);
    println!("  delta_T        = {:10.3} K", r.delta_t_k);
    println!("  PR             = {:10.4}", r.pressure_ratio);
    println!(
        "  T0_out = {:.2} K, p0_out = {:.0} Pa, shaft power = {:.1} W",
        r.outlet_stagnation_temperature_k(&gas),
        r.outlet_stagnation_pressure_pa(&gas),
        r.shaft_power_w(point.mdot_kg_s)
    );
    if !r.is_finite() {
        println!("  warning: result contains non-finite values");
    }
    Ok(())
}

fn cmd_run(
    study_path: &Path,
    case_id: Option<String>,
    parallel: bool,
    output: Option<&Path>,
    to_stdout: bool,
) -> StudyResult<()> {
    let study = load_yaml(study_path)?;
    println!("Running study: {}", study.name);

    let options = RunOptions { parallel, case_id };
    let outputs = run_study(&study, &options)?;

    for out in &outputs {
        println!(
            "  {}: {} points ({} rejected) in {:.3} ms",
            out.case_id,
            out.sweep.records.len(),
            out.sweep.num_failed,
            out.elapsed_s * 1e3
        );
        if let Some((key, pr)) = out.sweep.peak_pressure_ratio() {
            println!(
                "    peak PR {:.4} at N = {:.0} rpm, m_dot = {:.3} kg/s",
                pr, key.n_rpm, key.mdot_kg_s
            );
        }
    }

    if to_stdout {
        let writer = study.output.writer()?;
        for out in &outputs {
            println!("# {}", out.case_id);
            writer.write(&out.table, &mut io::stdout())?;
        }
        return Ok(());
    }

    let dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => resolve_output_dir(study_path, &study.output.directory),
    };
    let written = write_outputs(&study, &outputs, &dir)?;
    for path in &written {
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

/// Relative output directories are taken relative to the study file.
fn resolve_output_dir(study_path: &Path, directory: &str) -> PathBuf {
    let dir = Path::new(directory);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    study_path
        .parent()
        .map(|p| p.join(dir))
        .unwrap_or_else(|| dir.to_path_buf())
}

fn cmd_validate(study_path: &Path) -> StudyResult<()> {
    println!("Validating study: {}", study_path.display());
    let study = load_yaml(study_path)?;
    println!("✓ Study is valid ({} cases)", study.cases.len());
    for case in &study.cases {
        let points = case.grid()?.len();
        println!("  {} - {} points", case.id, points);
    }
    Ok(())
}

fn cmd_init(study_path: &Path) -> StudyResult<()> {
    if study_path.exists() {
        return Err(StudyError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", study_path.display()),
        )));
    }
    let study = Study::baseline();
    save_yaml(study_path, &study)?;
    info!(path = %study_path.display(), "wrote reference study");
    println!("✓ Wrote reference study to {}", study_path.display());
    Ok(())
}
