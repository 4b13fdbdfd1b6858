use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::field::positive;
use crate::quantity::Measurement;
use crate::units::{diameter::VELOCITY_DIAMETER, flow::VELOCITY_FLOW, velocity::PIPE_VELOCITY};

/// gpm, in 단위에서 ft/s 로 바꾸는 계수 (0.4085 ≈ 144 / (7.48 × 60 × π/4))
const VELOCITY_COEFFICIENT: f64 = 0.408;
/// 최소 관경 산정 시 목표 유속 [ft/s]
pub const TARGET_VELOCITY_FPS: f64 = 5.0;

/// 관내 유속 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityInput {
    pub flow: Option<f64>,
    pub flow_unit: String,
    /// 배관 내경
    pub diameter: Option<f64>,
    pub diameter_unit: String,
    pub output_unit: String,
}

impl Default for VelocityInput {
    fn default() -> Self {
        Self {
            flow: None,
            flow_unit: "gpm".into(),
            diameter: None,
            diameter_unit: "in".into(),
            output_unit: "fps".into(),
        }
    }
}

/// 목표 유속 기준 최소 관경 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinDiameterInput {
    pub flow: Option<f64>,
    pub flow_unit: String,
    pub output_unit: String,
}

impl Default for MinDiameterInput {
    fn default() -> Self {
        Self {
            flow: None,
            flow_unit: "gpm".into(),
            output_unit: "in".into(),
        }
    }
}

/// V = 0.408 × Q / D². Q [gpm], D [in], 결과 [ft/s].
pub fn velocity_fps(flow_gpm: f64, diameter_in: f64) -> f64 {
    VELOCITY_COEFFICIENT * flow_gpm / (diameter_in * diameter_in)
}

/// D = √(0.408 × Q / V). 결과 [in].
pub fn diameter_for_velocity_in(flow_gpm: f64, velocity_fps: f64) -> f64 {
    (VELOCITY_COEFFICIENT * flow_gpm / velocity_fps).sqrt()
}

/// 관내 유속을 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn water_velocity(input: &VelocityInput) -> CalcResult<Option<Measurement>> {
    let q_unit = VELOCITY_FLOW.resolve(&input.flow_unit)?;
    let d_unit = VELOCITY_DIAMETER.resolve(&input.diameter_unit)?;
    let output = PIPE_VELOCITY.resolve(&input.output_unit)?;

    let (Some(q), Some(d)) = (positive(input.flow, q_unit), positive(input.diameter, d_unit))
    else {
        tracing::trace!("water velocity: insufficient input");
        return Ok(None);
    };

    let v = velocity_fps(q, d);
    tracing::debug!(q_gpm = q, d_in = d, v_fps = v, "pipe water velocity");
    Ok(output.measure_finite(v))
}

/// 유속 5 ft/s 를 넘지 않는 최소 관경을 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn minimum_diameter(input: &MinDiameterInput) -> CalcResult<Option<Measurement>> {
    let q_unit = VELOCITY_FLOW.resolve(&input.flow_unit)?;
    let output = VELOCITY_DIAMETER.resolve(&input.output_unit)?;

    let Some(q) = positive(input.flow, q_unit) else {
        tracing::trace!("minimum diameter: insufficient input");
        return Ok(None);
    };

    let d = diameter_for_velocity_in(q, TARGET_VELOCITY_FPS);
    tracing::debug!(q_gpm = q, d_in = d, "minimum diameter for target velocity");
    Ok(output.measure_finite(d))
}
