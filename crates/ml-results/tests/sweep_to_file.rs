use ml_model::{
    EmpiricalFactors, GasProperties, GeometryConstants, MeanLineModel, OperatingPoint,
    ValidationPolicy,
};
use ml_results::{STANDARD_COLUMNS, TableWriter, table_from_sweep};
use ml_sweep::{SweepDefinition, SweepGrid, SweepType, execute_sweep_parallel};

#[test]
fn operating_map_written_to_disk() {
    let geometry = GeometryConstants::reference().unwrap();
    let gas = GasProperties::standard_air().unwrap();
    let model = MeanLineModel::new(&geometry, &gas);

    let speeds = SweepDefinition::new(50_000.0, 90_000.0, 5, SweepType::Linear).unwrap();
    let grid = SweepGrid::operating_map(speeds, vec![0.1, 0.2], EmpiricalFactors::new(0.92, 0.76))
        .unwrap();
    let result = execute_sweep_parallel(model, &grid, ValidationPolicy::Checked);
    assert_eq!(result.num_failed, 0);

    let table = table_from_sweep(&result).unwrap();
    let dir = std::env::temp_dir().join(format!(
        "ml_results_sweep_to_file_{}",
        std::process::id()
    ));
    let path = dir.join("operating_map.csv");
    TableWriter::csv()
        .with_precision(Some(4))
        .write_to_path(&table, &path)
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], STANDARD_COLUMNS.join(","));
    assert!(lines[1].starts_with("50000.0000,0.1000,0.9200,0.7600,"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn factor_study_pressure_ratio_rises_with_slip() {
    let geometry = GeometryConstants::reference().unwrap();
    let gas = GasProperties::standard_air().unwrap();
    let model = MeanLineModel::new(&geometry, &gas);

    let grid = SweepGrid::factor_study(
        OperatingPoint::new(70_000.0, 0.2),
        vec![0.8, 0.85, 0.9, 0.95, 1.0],
        vec![0.76],
    )
    .unwrap();
    let sweep = ml_sweep::execute_sweep(model, &grid, ValidationPolicy::Unchecked);
    let table = table_from_sweep(&sweep).unwrap();

    let pr = table.column("PR").unwrap();
    assert_eq!(pr.len(), 5);
    assert!(pr.windows(2).all(|w| w[1] > w[0]));
}
