use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::field::positive;
use crate::quantity::Measurement;
use crate::units::{
    area::IRRIGATED_AREA,
    flow::SYSTEM_FLOW,
    fraction::EFFICIENCY,
    length::NET_APPLICATION,
    time::{OPERATING_DAYS, OPERATING_HOURS},
};

/// 1 acre-in = 27154 gal
const GALLONS_PER_ACRE_INCH: f64 = 27154.0;

/// 시스템 양수량 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemPumpingInput {
    /// 순관개 수심
    pub net_application: Option<f64>,
    pub net_application_unit: String,
    pub area: Option<f64>,
    pub area_unit: String,
    /// 하루 운전 시간
    pub hours_per_day: Option<f64>,
    pub hours_unit: String,
    /// 1회 관개에 걸리는 일수
    pub days: Option<f64>,
    pub days_unit: String,
    pub efficiency: Option<f64>,
    pub efficiency_unit: String,
    pub output_unit: String,
}

impl Default for SystemPumpingInput {
    fn default() -> Self {
        Self {
            net_application: None,
            net_application_unit: "in".into(),
            area: None,
            area_unit: "acres".into(),
            hours_per_day: None,
            hours_unit: "hours".into(),
            days: None,
            days_unit: "days".into(),
            efficiency: None,
            efficiency_unit: "percent".into(),
            output_unit: "gpm".into(),
        }
    }
}

/// Q = (27154 × NetApp × Area) / (60 × Hrs × Days × Eff)
///
/// NetApp [in], Area [acre], 결과 [gpm].
pub fn gross_pumping_rate_gpm(
    net_application_in: f64,
    area_acres: f64,
    hours_per_day: f64,
    days: f64,
    efficiency: f64,
) -> f64 {
    (GALLONS_PER_ACRE_INCH * net_application_in * area_acres)
        / (60.0 * hours_per_day * days * efficiency)
}

/// 관개 면적에 필요한 시스템 양수량을 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn system_pumping_requirement(
    input: &SystemPumpingInput,
) -> CalcResult<Option<Measurement>> {
    let net_unit = NET_APPLICATION.resolve(&input.net_application_unit)?;
    let area_unit = IRRIGATED_AREA.resolve(&input.area_unit)?;
    let hours_unit = OPERATING_HOURS.resolve(&input.hours_unit)?;
    let days_unit = OPERATING_DAYS.resolve(&input.days_unit)?;
    let eff_unit = EFFICIENCY.resolve(&input.efficiency_unit)?;
    let output = SYSTEM_FLOW.resolve(&input.output_unit)?;

    let (Some(net), Some(area), Some(hours), Some(days), Some(eff)) = (
        positive(input.net_application, net_unit),
        positive(input.area, area_unit),
        positive(input.hours_per_day, hours_unit),
        positive(input.days, days_unit),
        positive(input.efficiency, eff_unit),
    ) else {
        tracing::trace!("system pumping: insufficient input");
        return Ok(None);
    };

    let q = gross_pumping_rate_gpm(net, area, hours, days, eff);
    tracing::debug!(
        net_in = net,
        area_acres = area,
        hours,
        days,
        eff,
        q_gpm = q,
        "system pumping requirement"
    );
    Ok(output.measure_finite(q))
}
