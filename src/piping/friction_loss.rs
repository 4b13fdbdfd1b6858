use serde::{Deserialize, Serialize};

use super::{HW_COEFFICIENT, HW_DIAMETER_EXPONENT, HW_FLOW_EXPONENT};
use crate::error::CalcResult;
use crate::field::positive;
use crate::material_db::DEFAULT_C;
use crate::quantity::Measurement;
use crate::units::{
    diameter::FRICTION_LOSS_DIAMETER, flow::FRICTION_LOSS_FLOW, length::FRICTION_LOSS_LENGTH,
    pressure::FRICTION_LOSS_OUTPUT,
};

/// Hazen-Williams 배관 마찰손실 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrictionLossInput {
    pub length: Option<f64>,
    pub length_unit: String,
    pub flow: Option<f64>,
    pub flow_unit: String,
    /// 배관 내경
    pub diameter: Option<f64>,
    pub diameter_unit: String,
    /// Hazen-Williams 조도계수
    pub c: Option<f64>,
    pub output_unit: String,
}

impl Default for FrictionLossInput {
    fn default() -> Self {
        Self {
            length: None,
            length_unit: "ft".into(),
            flow: None,
            flow_unit: "gpm".into(),
            diameter: None,
            diameter_unit: "in".into(),
            c: Some(DEFAULT_C),
            output_unit: "psi".into(),
        }
    }
}

/// Ploss = 4.53 × L × (Q/C)^1.852 / D^4.857
///
/// L [ft], Q [gpm], D [in], 결과 [psi].
pub fn hazen_williams_loss_psi(length_ft: f64, flow_gpm: f64, diameter_in: f64, c: f64) -> f64 {
    HW_COEFFICIENT * length_ft * (flow_gpm / c).powf(HW_FLOW_EXPONENT)
        / diameter_in.powf(HW_DIAMETER_EXPONENT)
}

/// 배관 마찰손실을 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn friction_loss(input: &FrictionLossInput) -> CalcResult<Option<Measurement>> {
    let l_unit = FRICTION_LOSS_LENGTH.resolve(&input.length_unit)?;
    let q_unit = FRICTION_LOSS_FLOW.resolve(&input.flow_unit)?;
    let d_unit = FRICTION_LOSS_DIAMETER.resolve(&input.diameter_unit)?;
    let output = FRICTION_LOSS_OUTPUT.resolve(&input.output_unit)?;

    let (Some(l), Some(q), Some(d), Some(c)) = (
        positive(input.length, l_unit),
        positive(input.flow, q_unit),
        positive(input.diameter, d_unit),
        input.c.filter(|c| c.is_finite() && *c > 0.0),
    ) else {
        tracing::trace!("friction loss: insufficient input");
        return Ok(None);
    };

    let loss = hazen_williams_loss_psi(l, q, d, c);
    tracing::debug!(
        l_ft = l,
        q_gpm = q,
        d_in = d,
        c,
        loss_psi = loss,
        "pipe friction loss"
    );
    Ok(output.measure_finite(loss))
}
