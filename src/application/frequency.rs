use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::field::positive;
use crate::quantity::Measurement;
use crate::units::{
    application_rate::CROP_ET, fraction::ALLOWABLE_DEPLETION, length::ROOT_ZONE,
    soil_water::AVAILABLE_WATER, time::FREQUENCY_OUTPUT,
};

/// 관개 주기 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyInput {
    /// 토양 유효수분량 (AWC)
    pub available_water: Option<f64>,
    pub available_water_unit: String,
    /// 유효 근권 깊이 (Rz)
    pub root_zone: Option<f64>,
    pub root_zone_unit: String,
    /// 허용 고갈률 (MAD)
    pub allowable_depletion: Option<f64>,
    pub allowable_depletion_unit: String,
    /// 작물 증발산량 (ETc)
    pub crop_et: Option<f64>,
    pub crop_et_unit: String,
    pub output_unit: String,
}

impl Default for FrequencyInput {
    fn default() -> Self {
        Self {
            available_water: None,
            available_water_unit: "inft".into(),
            root_zone: None,
            root_zone_unit: "ft".into(),
            allowable_depletion: None,
            allowable_depletion_unit: "decimal".into(),
            crop_et: None,
            crop_et_unit: "inday".into(),
            output_unit: "day".into(),
        }
    }
}

/// F = (AWC × Rz × MAD) / ETc
///
/// AWC [in/ft], Rz [ft], MAD [소수], ETc [in/day], 결과 [day].
pub fn interval_days(awc_in_per_ft: f64, root_zone_ft: f64, mad: f64, etc_in_per_day: f64) -> f64 {
    (awc_in_per_ft * root_zone_ft * mad) / etc_in_per_day
}

/// 관개 주기를 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn irrigation_frequency(input: &FrequencyInput) -> CalcResult<Option<Measurement>> {
    let awc_unit = AVAILABLE_WATER.resolve(&input.available_water_unit)?;
    let rz_unit = ROOT_ZONE.resolve(&input.root_zone_unit)?;
    let mad_unit = ALLOWABLE_DEPLETION.resolve(&input.allowable_depletion_unit)?;
    let etc_unit = CROP_ET.resolve(&input.crop_et_unit)?;
    let output = FREQUENCY_OUTPUT.resolve(&input.output_unit)?;

    let (Some(awc), Some(rz), Some(mad), Some(etc)) = (
        positive(input.available_water, awc_unit),
        positive(input.root_zone, rz_unit),
        positive(input.allowable_depletion, mad_unit),
        positive(input.crop_et, etc_unit),
    ) else {
        tracing::trace!("irrigation frequency: insufficient input");
        return Ok(None);
    };

    let days = interval_days(awc, rz, mad, etc);
    tracing::debug!(
        awc_in_ft = awc,
        rz_ft = rz,
        mad,
        etc_in_day = etc,
        days,
        "irrigation frequency"
    );
    Ok(output.measure_finite(days))
}
