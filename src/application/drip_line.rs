use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::field::positive;
use crate::quantity::Measurement;
use crate::units::{application_rate::APPLICATION_RATE, flow::DRIP_FLOW, length::DRIP_SPACING};

/// 1 gal = 231 in³
const CUBIC_INCHES_PER_GALLON: f64 = 231.0;
/// 점적관개 적용 효율 (WSU 기준값)
pub const DRIP_EFFICIENCY: f64 = 0.95;

/// 점적 호스 살수 강도 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DripLineInput {
    /// 에미터 1개 유량
    pub flow: Option<f64>,
    pub flow_unit: String,
    /// 점적 호스 열 간격
    pub row_spacing: Option<f64>,
    pub row_spacing_unit: String,
    /// 에미터 간격
    pub emitter_spacing: Option<f64>,
    pub emitter_spacing_unit: String,
    pub output_unit: String,
}

impl Default for DripLineInput {
    fn default() -> Self {
        Self {
            flow: None,
            flow_unit: "gph".into(),
            row_spacing: None,
            row_spacing_unit: "in".into(),
            emitter_spacing: None,
            emitter_spacing_unit: "in".into(),
            output_unit: "inhr".into(),
        }
    }
}

/// PR = 231 × Qe × 0.95 / (Row × Emit)
///
/// Qe [gal/hr], 간격 [in], 결과 [in/hr].
pub fn drip_rate_in_per_hr(emitter_flow_gph: f64, row_in: f64, emitter_in: f64) -> f64 {
    CUBIC_INCHES_PER_GALLON * emitter_flow_gph * DRIP_EFFICIENCY / (row_in * emitter_in)
}

/// 점적 호스 살수 강도를 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn drip_application_rate(input: &DripLineInput) -> CalcResult<Option<Measurement>> {
    let flow_unit = DRIP_FLOW.resolve(&input.flow_unit)?;
    let row_unit = DRIP_SPACING.resolve(&input.row_spacing_unit)?;
    let emitter_unit = DRIP_SPACING.resolve(&input.emitter_spacing_unit)?;
    let output = APPLICATION_RATE.resolve(&input.output_unit)?;

    let (Some(qe), Some(row), Some(emitter)) = (
        positive(input.flow, flow_unit),
        positive(input.row_spacing, row_unit),
        positive(input.emitter_spacing, emitter_unit),
    ) else {
        tracing::trace!("drip line: insufficient input");
        return Ok(None);
    };

    let rate = drip_rate_in_per_hr(qe, row, emitter);
    tracing::debug!(
        qe_gph = qe,
        row_in = row,
        emitter_in = emitter,
        rate_in_hr = rate,
        "drip line application rate"
    );
    Ok(output.measure_finite(rate))
}
