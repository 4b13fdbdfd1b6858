use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::field::positive;
use crate::quantity::Measurement;
use crate::units::{
    application_rate::APPLICATION_RATE, diameter::NOZZLE_DIAMETER, flow::NOZZLE_FLOW,
    fraction::EFFICIENCY, length::NOZZLE_SPACING, pressure::NOZZLE_PRESSURE,
};

/// 물에 대한 일반적인 노즐 유량계수
pub const NOZZLE_COEFFICIENT: f64 = 0.97;

/// 스프링클러 노즐 유량/살수 강도 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NozzleInput {
    /// 노즐 구경
    pub diameter: Option<f64>,
    pub diameter_unit: String,
    /// 노즐 압력
    pub pressure: Option<f64>,
    pub pressure_unit: String,
    /// 살수 효율
    pub efficiency: Option<f64>,
    pub efficiency_unit: String,
    /// 스프링클러 간격 (가지관 방향)
    pub spacing_x: Option<f64>,
    pub spacing_x_unit: String,
    /// 가지관 간격
    pub spacing_y: Option<f64>,
    pub spacing_y_unit: String,
    pub flow_unit: String,
    pub rate_unit: String,
}

impl Default for NozzleInput {
    fn default() -> Self {
        Self {
            diameter: None,
            diameter_unit: "in".into(),
            pressure: None,
            pressure_unit: "psi".into(),
            efficiency: Some(80.0),
            efficiency_unit: "percent".into(),
            spacing_x: None,
            spacing_x_unit: "ft".into(),
            spacing_y: None,
            spacing_y_unit: "ft".into(),
            flow_unit: "gpm".into(),
            rate_unit: "inhr".into(),
        }
    }
}

/// 노즐 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NozzleResult {
    pub flow: Measurement,
    pub application_rate: Measurement,
}

/// Qn = 29.84 × C × d² × √P. d [in], P [psi], 결과 [gpm].
pub fn nozzle_flow_gpm(diameter_in: f64, pressure_psi: f64) -> f64 {
    29.84 * NOZZLE_COEFFICIENT * diameter_in.powi(2) * pressure_psi.sqrt()
}

/// PR = 96.25 × Qn × Eff / (X × Y). 간격 [ft], 결과 [in/hr].
pub fn sprinkler_rate_in_per_hr(flow_gpm: f64, efficiency: f64, x_ft: f64, y_ft: f64) -> f64 {
    96.25 * flow_gpm * efficiency / (x_ft * y_ft)
}

/// 노즐 유량과 살수 강도를 함께 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn nozzle_application_rate(input: &NozzleInput) -> CalcResult<Option<NozzleResult>> {
    let d_unit = NOZZLE_DIAMETER.resolve(&input.diameter_unit)?;
    let p_unit = NOZZLE_PRESSURE.resolve(&input.pressure_unit)?;
    let eff_unit = EFFICIENCY.resolve(&input.efficiency_unit)?;
    let x_unit = NOZZLE_SPACING.resolve(&input.spacing_x_unit)?;
    let y_unit = NOZZLE_SPACING.resolve(&input.spacing_y_unit)?;
    let flow_out = NOZZLE_FLOW.resolve(&input.flow_unit)?;
    let rate_out = APPLICATION_RATE.resolve(&input.rate_unit)?;

    let (Some(d), Some(p), Some(eff), Some(x), Some(y)) = (
        positive(input.diameter, d_unit),
        positive(input.pressure, p_unit),
        positive(input.efficiency, eff_unit),
        positive(input.spacing_x, x_unit),
        positive(input.spacing_y, y_unit),
    ) else {
        tracing::trace!("nozzle: insufficient input");
        return Ok(None);
    };

    let flow = nozzle_flow_gpm(d, p);
    let rate = sprinkler_rate_in_per_hr(flow, eff, x, y);
    tracing::debug!(
        d_in = d,
        p_psi = p,
        eff,
        flow_gpm = flow,
        rate_in_hr = rate,
        "nozzle application rate"
    );
    let result = flow_out
        .measure_finite(flow)
        .zip(rate_out.measure_finite(rate))
        .map(|(flow, application_rate)| NozzleResult {
            flow,
            application_rate,
        });
    Ok(result)
}
