//! Conversion from study definitions to model and sweep types.

use crate::schema::{
    CaseDef, GasDef, GeometryDef, OutputDef, ParameterDef, SpacingDef, Study, ValidationDef,
};
use ml_core::units::{deg, k, mm, pa};
use ml_model::{Annulus, GasProperties, GeometryConstants, ModelResult, ValidationPolicy};
use ml_results::{ResultsResult, TableWriter};
use ml_sweep::{
    ParameterValues, SweepConfigResult, SweepDefinition, SweepError, SweepGrid, SweepType,
};

impl GeometryDef {
    pub fn to_geometry(&self) -> ModelResult<GeometryConstants> {
        let geometry = GeometryConstants::new(
            Annulus::new(mm(self.r_tip_in_mm), mm(self.r_hub_in_mm)),
            Annulus::new(mm(self.r_tip_out_mm), mm(self.r_hub_out_mm)),
            mm(self.r_mean_mm),
            deg(self.beta2_deg),
        )?;
        Ok(match self.beta1_deg {
            Some(beta1) => geometry.with_beta1(deg(beta1)),
            None => geometry,
        })
    }
}

impl GasDef {
    pub fn to_gas(&self) -> ModelResult<GasProperties> {
        GasProperties::new(
            self.gamma,
            self.r_j_per_kg_k,
            k(self.t0_in_k),
            pa(self.p0_in_pa),
        )
    }
}

impl ParameterDef {
    pub fn to_values(&self, field: &str) -> SweepConfigResult<ParameterValues> {
        match (&self.values, &self.range) {
            (Some(values), None) => Ok(ParameterValues::List(values.clone())),
            (None, Some(range)) => {
                let sweep_type = match range.spacing {
                    SpacingDef::Linear => SweepType::Linear,
                    SpacingDef::Logarithmic => SweepType::Logarithmic,
                };
                let def = SweepDefinition::new(range.start, range.end, range.points, sweep_type)
                    .map_err(|e| SweepError::InvalidConfiguration(format!("{field}: {e}")))?;
                Ok(ParameterValues::Range(def))
            }
            (Some(_), Some(_)) => Err(SweepError::InvalidConfiguration(format!(
                "{field}: set either values or range, not both"
            ))),
            (None, None) => Err(SweepError::InvalidConfiguration(format!(
                "{field}: no values or range given"
            ))),
        }
    }
}

impl CaseDef {
    pub fn grid(&self) -> SweepConfigResult<SweepGrid> {
        SweepGrid::new(
            self.n_rpm.to_values("n_rpm")?,
            self.mdot_kg_s.to_values("mdot_kg_s")?,
            self.slip.to_values("slip")?,
            self.eta_c.to_values("eta_c")?,
        )
    }

    pub fn policy(&self) -> ValidationPolicy {
        match self.validation {
            ValidationDef::Unchecked => ValidationPolicy::Unchecked,
            ValidationDef::Checked => ValidationPolicy::Checked,
        }
    }
}

impl OutputDef {
    pub fn writer(&self) -> ResultsResult<TableWriter> {
        Ok(TableWriter::csv()
            .with_delimiter(self.delimiter)?
            .with_precision(self.precision))
    }
}

impl Study {
    /// Reference impeller in air with the baseline point, an operating map
    /// and the two factor sensitivity studies.
    pub fn baseline() -> Self {
        let design_slip = ParameterDef::fixed(0.92);
        let design_eta = ParameterDef::fixed(0.76);
        let design_n = ParameterDef::fixed(70_000.0);
        let design_mdot = ParameterDef::fixed(0.2);

        Study {
            version: crate::LATEST_VERSION,
            name: "Reference impeller".to_string(),
            geometry: GeometryDef {
                r_tip_in_mm: 23.0,
                r_hub_in_mm: 7.82,
                r_tip_out_mm: 33.0,
                r_hub_out_mm: 18.31,
                r_mean_mm: 28.443,
                beta2_deg: 49.13,
                beta1_deg: Some(90.0),
            },
            gas: GasDef {
                gamma: 1.4,
                r_j_per_kg_k: 287.0,
                t0_in_k: 300.0,
                p0_in_pa: 101_325.0,
            },
            output: OutputDef {
                precision: Some(4),
                ..OutputDef::default()
            },
            cases: vec![
                CaseDef {
                    id: "baseline".to_string(),
                    description: Some("Design point".to_string()),
                    validation: ValidationDef::Unchecked,
                    n_rpm: design_n.clone(),
                    mdot_kg_s: design_mdot.clone(),
                    slip: design_slip.clone(),
                    eta_c: design_eta.clone(),
                },
                CaseDef {
                    id: "operating_map".to_string(),
                    description: Some("Speed and flow at design factors".to_string()),
                    validation: ValidationDef::Checked,
                    n_rpm: ParameterDef::range(50_000.0, 90_000.0, 5, SpacingDef::Linear),
                    mdot_kg_s: ParameterDef::values(vec![0.05, 0.10, 0.15, 0.20]),
                    slip: design_slip,
                    eta_c: design_eta.clone(),
                },
                CaseDef {
                    id: "slip_sensitivity".to_string(),
                    description: Some("Slip factor at the design point".to_string()),
                    validation: ValidationDef::Unchecked,
                    n_rpm: design_n.clone(),
                    mdot_kg_s: design_mdot.clone(),
                    slip: ParameterDef::values(vec![0.80, 0.85, 0.90, 0.95, 1.00]),
                    eta_c: design_eta,
                },
                CaseDef {
                    id: "efficiency_sensitivity".to_string(),
                    description: Some("Isentropic efficiency at the design point".to_string()),
                    validation: ValidationDef::Unchecked,
                    n_rpm: design_n,
                    mdot_kg_s: design_mdot,
                    slip: ParameterDef::fixed(0.92),
                    eta_c: ParameterDef::values(vec![0.70, 0.75, 0.80, 0.85, 0.90]),
                },
            ],
        }
    }

    pub fn case(&self, id: &str) -> Option<&CaseDef> {
        self.cases.iter().find(|c| c.id == id)
    }
}
