use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::field::positive;
use crate::quantity::Measurement;
use crate::units::{
    flow::PUMP_FLOW, fraction::PUMP_EFFICIENCY, power::PUMP_POWER, pressure::PUMP_PRESSURE,
};

/// 1 psi = 2.31 ft 수두
pub const FEET_OF_HEAD_PER_PSI: f64 = 2.31;
/// WHP = Q[gpm] × H[ft] / 3960
const GPM_FT_PER_HP: f64 = 3960.0;

/// 펌프 소요 동력 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PumpInput {
    /// 토출 압력
    pub pressure: Option<f64>,
    pub pressure_unit: String,
    pub flow: Option<f64>,
    pub flow_unit: String,
    pub pump_efficiency: Option<f64>,
    pub pump_efficiency_unit: String,
    pub motor_efficiency: Option<f64>,
    pub motor_efficiency_unit: String,
    pub output_unit: String,
}

impl Default for PumpInput {
    fn default() -> Self {
        Self {
            pressure: None,
            pressure_unit: "psi".into(),
            flow: None,
            flow_unit: "gpm".into(),
            pump_efficiency: None,
            pump_efficiency_unit: "%".into(),
            motor_efficiency: None,
            motor_efficiency_unit: "%".into(),
            output_unit: "HP".into(),
        }
    }
}

/// 기준 단위(HP, ft) 동력 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpPower {
    pub total_head_ft: f64,
    pub water_hp: f64,
    pub brake_hp: f64,
    pub motor_hp: f64,
}

/// 요청 단위로 환산된 펌프 동력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PumpHorsepowerResult {
    /// 전양정 [ft]
    pub total_head_ft: f64,
    pub water_power: Measurement,
    pub brake_power: Measurement,
    /// 모터 입력 동력
    pub motor_power: Measurement,
}

/// WHP = Q×H/3960, BHP = WHP/ηp, Motor = BHP/ηm
pub fn pump_power(flow_gpm: f64, pressure_psi: f64, pump_eff: f64, motor_eff: f64) -> PumpPower {
    let total_head_ft = pressure_psi * FEET_OF_HEAD_PER_PSI;
    let water_hp = (flow_gpm * total_head_ft) / GPM_FT_PER_HP;
    let brake_hp = water_hp / pump_eff;
    let motor_hp = brake_hp / motor_eff;
    PumpPower {
        total_head_ft,
        water_hp,
        brake_hp,
        motor_hp,
    }
}

/// 펌프 축동력과 모터 소요 동력을 계산한다. 입력이 부족하면 `Ok(None)`.
pub fn pump_horsepower(input: &PumpInput) -> CalcResult<Option<PumpHorsepowerResult>> {
    let p_unit = PUMP_PRESSURE.resolve(&input.pressure_unit)?;
    let q_unit = PUMP_FLOW.resolve(&input.flow_unit)?;
    let pump_eff_unit = PUMP_EFFICIENCY.resolve(&input.pump_efficiency_unit)?;
    let motor_eff_unit = PUMP_EFFICIENCY.resolve(&input.motor_efficiency_unit)?;
    let output = PUMP_POWER.resolve(&input.output_unit)?;

    let (Some(p), Some(q), Some(pump_eff), Some(motor_eff)) = (
        positive(input.pressure, p_unit),
        positive(input.flow, q_unit),
        positive(input.pump_efficiency, pump_eff_unit),
        positive(input.motor_efficiency, motor_eff_unit),
    ) else {
        tracing::trace!("pump horsepower: insufficient input");
        return Ok(None);
    };

    let power = pump_power(q, p, pump_eff, motor_eff);
    tracing::debug!(
        q_gpm = q,
        head_ft = power.total_head_ft,
        whp = power.water_hp,
        bhp = power.brake_hp,
        motor_hp = power.motor_hp,
        "pump horsepower"
    );
    let (true, Some(water_power), Some(brake_power), Some(motor_power)) = (
        power.total_head_ft.is_finite(),
        output.measure_finite(power.water_hp),
        output.measure_finite(power.brake_hp),
        output.measure_finite(power.motor_hp),
    ) else {
        return Ok(None);
    };
    Ok(Some(PumpHorsepowerResult {
        total_head_ft: power.total_head_ft,
        water_power,
        brake_power,
        motor_power,
    }))
}
