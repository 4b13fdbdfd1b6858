//! 아홉 개 계산기의 목록과 표시 정보.

use serde::{Deserialize, Serialize};

use crate::units::{
    application_rate, area, diameter, flow, fraction, length, power, pressure, soil_water, time,
    velocity, volume, UnitTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    DripLine,
    GardenHose,
    IrrigationFrequency,
    MinimumPipeSize,
    Nozzle,
    FrictionLoss,
    WaterVelocity,
    PumpHorsepower,
    SystemPumping,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 9] = [
        CalculatorKind::DripLine,
        CalculatorKind::GardenHose,
        CalculatorKind::IrrigationFrequency,
        CalculatorKind::MinimumPipeSize,
        CalculatorKind::Nozzle,
        CalculatorKind::FrictionLoss,
        CalculatorKind::WaterVelocity,
        CalculatorKind::PumpHorsepower,
        CalculatorKind::SystemPumping,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CalculatorKind::DripLine => "Drip Line Application Rate",
            CalculatorKind::GardenHose => "Garden Hose Flow Rate & Fill Time",
            CalculatorKind::IrrigationFrequency => "Irrigation Frequency",
            CalculatorKind::MinimumPipeSize => "Minimum Required Pipe Size",
            CalculatorKind::Nozzle => "Nozzle Flow & Application Rate",
            CalculatorKind::FrictionLoss => "Pipe Friction Loss",
            CalculatorKind::WaterVelocity => "Pipe Water Velocity",
            CalculatorKind::PumpHorsepower => "Required Water Pump Horsepower",
            CalculatorKind::SystemPumping => "System Pumping Requirements",
        }
    }

    /// 명령행 하위 명령 이름.
    pub fn command_name(self) -> &'static str {
        match self {
            CalculatorKind::DripLine => "drip",
            CalculatorKind::GardenHose => "hose",
            CalculatorKind::IrrigationFrequency => "frequency",
            CalculatorKind::MinimumPipeSize => "pipe-size",
            CalculatorKind::Nozzle => "nozzle",
            CalculatorKind::FrictionLoss => "friction-loss",
            CalculatorKind::WaterVelocity => "velocity",
            CalculatorKind::PumpHorsepower => "pump",
            CalculatorKind::SystemPumping => "system-pumping",
        }
    }

    /// 결과 표시 시 최대 소수 자릿수.
    pub fn max_fraction_digits(self) -> usize {
        match self {
            CalculatorKind::GardenHose
            | CalculatorKind::IrrigationFrequency
            | CalculatorKind::PumpHorsepower => 2,
            _ => 4,
        }
    }

    /// 뒤쪽 0을 지우지 않고 자릿수를 고정해 표시하는 계산기.
    pub fn fixed_digits(self) -> bool {
        matches!(self, CalculatorKind::IrrigationFrequency | CalculatorKind::PumpHorsepower)
    }

    /// 이 계산기가 입력/출력에 쓰는 단위 표.
    pub fn unit_tables(self) -> &'static [&'static UnitTable] {
        match self {
            CalculatorKind::DripLine => DRIP_LINE_TABLES,
            CalculatorKind::GardenHose => GARDEN_HOSE_TABLES,
            CalculatorKind::IrrigationFrequency => IRRIGATION_FREQUENCY_TABLES,
            CalculatorKind::MinimumPipeSize => MINIMUM_PIPE_SIZE_TABLES,
            CalculatorKind::Nozzle => NOZZLE_TABLES,
            CalculatorKind::FrictionLoss => FRICTION_LOSS_TABLES,
            CalculatorKind::WaterVelocity => WATER_VELOCITY_TABLES,
            CalculatorKind::PumpHorsepower => PUMP_HORSEPOWER_TABLES,
            CalculatorKind::SystemPumping => SYSTEM_PUMPING_TABLES,
        }
    }
}

static DRIP_LINE_TABLES: &[&UnitTable] = &[
    &flow::DRIP_FLOW,
    &length::DRIP_SPACING,
    &application_rate::APPLICATION_RATE,
];

static GARDEN_HOSE_TABLES: &[&UnitTable] = &[
    &flow::HOSE_FLOW,
    &volume::HOSE_VOLUME,
    &time::FILL_TIME,
];

static IRRIGATION_FREQUENCY_TABLES: &[&UnitTable] = &[
    &soil_water::AVAILABLE_WATER,
    &length::ROOT_ZONE,
    &fraction::ALLOWABLE_DEPLETION,
    &application_rate::CROP_ET,
    &time::FREQUENCY_OUTPUT,
];

static MINIMUM_PIPE_SIZE_TABLES: &[&UnitTable] = &[
    &flow::PIPE_SIZE_FLOW,
    &length::PIPE_SIZE_LENGTH,
    &pressure::PIPE_SIZE_MAX_LOSS,
    &diameter::PIPE_SIZE_DIAMETER,
];

static NOZZLE_TABLES: &[&UnitTable] = &[
    &diameter::NOZZLE_DIAMETER,
    &pressure::NOZZLE_PRESSURE,
    &fraction::EFFICIENCY,
    &length::NOZZLE_SPACING,
    &flow::NOZZLE_FLOW,
    &application_rate::APPLICATION_RATE,
];

static FRICTION_LOSS_TABLES: &[&UnitTable] = &[
    &length::FRICTION_LOSS_LENGTH,
    &flow::FRICTION_LOSS_FLOW,
    &diameter::FRICTION_LOSS_DIAMETER,
    &pressure::FRICTION_LOSS_OUTPUT,
];

static WATER_VELOCITY_TABLES: &[&UnitTable] = &[
    &flow::VELOCITY_FLOW,
    &diameter::VELOCITY_DIAMETER,
    &velocity::PIPE_VELOCITY,
];

static PUMP_HORSEPOWER_TABLES: &[&UnitTable] = &[
    &pressure::PUMP_PRESSURE,
    &flow::PUMP_FLOW,
    &fraction::PUMP_EFFICIENCY,
    &power::PUMP_POWER,
];

static SYSTEM_PUMPING_TABLES: &[&UnitTable] = &[
    &length::NET_APPLICATION,
    &area::IRRIGATED_AREA,
    &time::OPERATING_HOURS,
    &time::OPERATING_DAYS,
    &fraction::EFFICIENCY,
    &flow::SYSTEM_FLOW,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::all_tables;

    #[test]
    fn every_registered_table_belongs_to_a_calculator() {
        for table in all_tables() {
            let used = CalculatorKind::ALL
                .iter()
                .any(|k| k.unit_tables().iter().any(|t| t.name == table.name));
            assert!(used, "table {} is not used by any calculator", table.name);
        }
    }
}
