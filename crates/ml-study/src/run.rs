//! Study execution: case grids through the sweep executor into tables.

use crate::schema::{CaseDef, Study};
use crate::{StudyError, StudyResult};
use ml_model::MeanLineModel;
use ml_results::{Table, table_from_sweep};
use ml_sweep::{SweepResult, execute_sweep, execute_sweep_parallel};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Options for running a study.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Evaluate on the rayon pool
    pub parallel: bool,
    /// Restrict to one case id
    pub case_id: Option<String>,
}

/// Output of one case.
#[derive(Debug, Clone)]
pub struct CaseOutput {
    pub case_id: String,
    pub sweep: SweepResult,
    pub table: Table,
    pub elapsed_s: f64,
}

pub fn run_case(
    model: MeanLineModel<'_>,
    case: &CaseDef,
    parallel: bool,
) -> StudyResult<CaseOutput> {
    let start = Instant::now();
    let grid = case.grid()?;
    info!(case = %case.id, points = grid.len(), parallel, "running case");

    let sweep = if parallel {
        execute_sweep_parallel(model, &grid, case.policy())
    } else {
        execute_sweep(model, &grid, case.policy())
    };
    let table = table_from_sweep(&sweep)?;

    Ok(CaseOutput {
        case_id: case.id.clone(),
        sweep,
        table,
        elapsed_s: start.elapsed().as_secs_f64(),
    })
}

/// Run every case (or the selected one) of a study.
pub fn run_study(study: &Study, options: &RunOptions) -> StudyResult<Vec<CaseOutput>> {
    let geometry = study.geometry.to_geometry()?;
    let gas = study.gas.to_gas()?;
    let model = MeanLineModel::new(&geometry, &gas);

    let cases: Vec<&CaseDef> = match &options.case_id {
        Some(id) => vec![
            study
                .case(id)
                .ok_or_else(|| StudyError::CaseNotFound(id.clone()))?,
        ],
        None => study.cases.iter().collect(),
    };

    cases
        .into_iter()
        .map(|case| run_case(model, case, options.parallel))
        .collect()
}

/// Write one delimited file per case into `dir`, named `<case_id>.csv`
/// (or `.tsv` for tab-delimited output).
pub fn write_outputs(
    study: &Study,
    outputs: &[CaseOutput],
    dir: &Path,
) -> StudyResult<Vec<PathBuf>> {
    let writer = study.output.writer()?;
    let ext = if writer.delimiter() == '\t' { "tsv" } else { "csv" };

    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        let path = dir.join(format!("{}.{}", output.case_id, ext));
        writer.write_to_path(&output.table, &path)?;
        info!(
            case = %output.case_id,
            rows = output.table.len(),
            path = %path.display(),
            "wrote table"
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_every_baseline_case() {
        let study = Study::baseline();
        let outputs = run_study(&study, &RunOptions::default()).unwrap();
        assert_eq!(outputs.len(), 4);
        assert_eq!(outputs[0].case_id, "baseline");
        assert_eq!(outputs[0].table.len(), 1);
        assert_eq!(outputs[1].table.len(), 20);
    }

    #[test]
    fn single_case_selection() {
        let study = Study::baseline();
        let options = RunOptions {
            parallel: true,
            case_id: Some("slip_sensitivity".to_string()),
        };
        let outputs = run_study(&study, &options).unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].table.column("sigma").unwrap().len(), 5);
    }

    #[test]
    fn unknown_case_reported() {
        let study = Study::baseline();
        let options = RunOptions {
            parallel: false,
            case_id: Some("missing".to_string()),
        };
        assert!(matches!(
            run_study(&study, &options),
            Err(StudyError::CaseNotFound(_))
        ));
    }
}
