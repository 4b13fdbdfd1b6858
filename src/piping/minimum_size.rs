use serde::{Deserialize, Serialize};

use super::{HW_COEFFICIENT, HW_DIAMETER_EXPONENT, HW_FLOW_EXPONENT};
use crate::error::CalcResult;
use crate::field::positive;
use crate::material_db::DEFAULT_C;
use crate::quantity::Measurement;
use crate::units::{
    diameter::PIPE_SIZE_DIAMETER, flow::PIPE_SIZE_FLOW, length::PIPE_SIZE_LENGTH,
    pressure::PIPE_SIZE_MAX_LOSS,
};

/// 허용 손실 기준 최소 관경 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeSizeInput {
    pub flow: Option<f64>,
    pub flow_unit: String,
    pub length: Option<f64>,
    pub length_unit: String,
    /// Hazen-Williams 조도계수
    pub c: Option<f64>,
    /// 허용 압력손실
    pub max_loss: Option<f64>,
    pub max_loss_unit: String,
    pub output_unit: String,
}

impl Default for PipeSizeInput {
    fn default() -> Self {
        Self {
            flow: None,
            flow_unit: "gpm".into(),
            length: None,
            length_unit: "ft".into(),
            c: Some(DEFAULT_C),
            max_loss: None,
            max_loss_unit: "psi".into(),
            output_unit: "in".into(),
        }
    }
}

/// D = (4.53 × L × (Q/C)^1.852 / Ploss)^(1/4.857)
///
/// L [ft], Q [gpm], Ploss [psi], 결과 [in].
pub fn minimum_diameter_in(length_ft: f64, flow_gpm: f64, c: f64, max_loss_psi: f64) -> f64 {
    let numerator = HW_COEFFICIENT * length_ft * (flow_gpm / c).powf(HW_FLOW_EXPONENT);
    (numerator / max_loss_psi).powf(1.0 / HW_DIAMETER_EXPONENT)
}

/// 허용 압력손실을 넘지 않는 최소 관경을 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn minimum_pipe_size(input: &PipeSizeInput) -> CalcResult<Option<Measurement>> {
    let q_unit = PIPE_SIZE_FLOW.resolve(&input.flow_unit)?;
    let l_unit = PIPE_SIZE_LENGTH.resolve(&input.length_unit)?;
    let p_unit = PIPE_SIZE_MAX_LOSS.resolve(&input.max_loss_unit)?;
    let output = PIPE_SIZE_DIAMETER.resolve(&input.output_unit)?;

    let (Some(q), Some(l), Some(c), Some(p)) = (
        positive(input.flow, q_unit),
        positive(input.length, l_unit),
        input.c.filter(|c| c.is_finite() && *c > 0.0),
        positive(input.max_loss, p_unit),
    ) else {
        tracing::trace!("minimum pipe size: insufficient input");
        return Ok(None);
    };

    let d = minimum_diameter_in(l, q, c, p);
    tracing::debug!(
        q_gpm = q,
        l_ft = l,
        c,
        max_loss_psi = p,
        d_in = d,
        "minimum pipe size"
    );
    Ok(output.measure_finite(d))
}
