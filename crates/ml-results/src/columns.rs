//! Standard column set for mean-line sweep output.

use crate::table::{Row, Table};
use crate::ResultsResult;
use ml_model::PerformanceResult;
use ml_sweep::{SweepKey, SweepResult};
use tracing::warn;

/// Column names, in output order.
pub const STANDARD_COLUMNS: [&str; 13] = [
    "N_rpm",
    "m_dot",
    "sigma",
    "eta_c",
    "omega",
    "U",
    "V_ax",
    "V_theta1",
    "V_theta2_ideal",
    "V_theta2",
    "delta_h",
    "delta_T",
    "PR",
];

/// Flatten a key and its result into one row.
pub fn performance_row(key: &SweepKey, result: &PerformanceResult) -> Row {
    let values = [
        key.n_rpm,
        key.mdot_kg_s,
        key.slip,
        key.eta_c,
        result.omega_rad_s,
        result.u_m_s,
        result.v_ax_m_s,
        result.v_theta1_m_s,
        result.v_theta2_ideal_m_s,
        result.v_theta2_m_s,
        result.delta_h_j_kg,
        result.delta_t_k,
        result.pressure_ratio,
    ];
    STANDARD_COLUMNS
        .iter()
        .zip(values)
        .fold(Row::new(), |row, (name, value)| row.with(*name, value))
}

/// Table of every successful record. Rejected points are skipped.
pub fn table_from_sweep(result: &SweepResult) -> ResultsResult<Table> {
    let mut table = Table::with_header(STANDARD_COLUMNS);
    for (key, perf) in result.successful() {
        table.push(performance_row(key, perf))?;
    }
    if result.num_failed > 0 {
        warn!(skipped = result.num_failed, "rejected points omitted from table");
    }
    Ok(table)
}
