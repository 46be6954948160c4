//! Study file schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    pub geometry: GeometryDef,
    pub gas: GasDef,
    #[serde(default)]
    pub output: OutputDef,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

/// Stage geometry in millimetres and degrees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub r_tip_in_mm: f64,
    pub r_hub_in_mm: f64,
    pub r_tip_out_mm: f64,
    pub r_hub_out_mm: f64,
    pub r_mean_mm: f64,
    pub beta2_deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta1_deg: Option<f64>,
}

/// Gas constants and inlet stagnation state. `cp` is always derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasDef {
    pub gamma: f64,
    pub r_j_per_kg_k: f64,
    pub t0_in_k: f64,
    pub p0_in_pa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputDef {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Default for OutputDef {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            delimiter: default_delimiter(),
            precision: None,
        }
    }
}

fn default_directory() -> String {
    "results".to_string()
}

fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub validation: ValidationDef,
    pub n_rpm: ParameterDef,
    pub mdot_kg_s: ParameterDef,
    pub slip: ParameterDef,
    pub eta_c: ParameterDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationDef {
    #[default]
    Unchecked,
    Checked,
}

/// Either explicit `values` or a generated `range`; exactly one is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParameterDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeDef>,
}

impl ParameterDef {
    pub fn values(values: Vec<f64>) -> Self {
        Self {
            values: Some(values),
            range: None,
        }
    }

    pub fn fixed(value: f64) -> Self {
        Self::values(vec![value])
    }

    pub fn range(start: f64, end: f64, points: usize, spacing: SpacingDef) -> Self {
        Self {
            values: None,
            range: Some(RangeDef {
                start,
                end,
                points,
                spacing,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeDef {
    pub start: f64,
    pub end: f64,
    pub points: usize,
    #[serde(default)]
    pub spacing: SpacingDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpacingDef {
    #[default]
    Linear,
    Logarithmic,
}
