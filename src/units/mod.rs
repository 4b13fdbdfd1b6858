//! 단위 정의 및 변환 모듈 모음.
//!
//! 물리량마다 하나의 기준(canonical) 단위를 두고, 각 단위는 기준 단위에 대한 고정 계수로 정의한다.
//! 계산기마다 참고 자료의 환산 계수가 조금씩 달라(예: acre-in/day = 18.7 또는 18.857 gpm)
//! 표는 계산기별로 따로 둔다. 계수는 참고값 그대로 옮겨 적은 상수이다.

pub mod application_rate;
pub mod area;
pub mod diameter;
pub mod flow;
pub mod fraction;
pub mod length;
pub mod power;
pub mod pressure;
pub mod soil_water;
pub mod time;
pub mod velocity;
pub mod volume;

use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::quantity::{Measurement, QuantityKind};

/// 기준 단위로의 환산 방식.
///
/// `Times(k)`: 기준값 = v × k, `Per(k)`: 기준값 = v ÷ k. 역환산은 반대 연산을 쓴다.
/// 참고 표가 "출력 방향"으로 적혀 있는 경우(`v => v * 25.4`)에도 같은 부동소수점 연산을
/// 재현하기 위해 두 방향을 모두 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Factor {
    Times(f64),
    Per(f64),
}

impl Factor {
    pub fn to_canonical(self, value: f64) -> f64 {
        match self {
            Factor::Times(k) => value * k,
            Factor::Per(k) => value / k,
        }
    }

    pub fn from_canonical(self, value: f64) -> f64 {
        match self {
            Factor::Times(k) => value / k,
            Factor::Per(k) => value * k,
        }
    }

    pub fn is_identity(self) -> bool {
        match self {
            Factor::Times(k) | Factor::Per(k) => k == 1.0,
        }
    }
}

/// 단위 하나의 정의.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    /// 표현 계층이 주고받는 식별자
    pub id: &'static str,
    pub label: &'static str,
    pub factor: Factor,
}

impl UnitDef {
    pub const fn new(id: &'static str, label: &'static str, factor: Factor) -> Self {
        Self { id, label, factor }
    }

    pub fn to_canonical(&self, value: f64) -> f64 {
        self.factor.to_canonical(value)
    }

    pub fn from_canonical(&self, value: f64) -> f64 {
        self.factor.from_canonical(value)
    }

    /// 기준 단위 값을 이 단위로 환산해 결과로 감싼다.
    pub fn measure(&'static self, canonical_value: f64) -> Measurement {
        Measurement {
            value: self.from_canonical(canonical_value),
            unit: self.id,
            label: self.label,
        }
    }

    /// 계산기 결과용 환산. 넘침 등으로 유한값이 아니면 결과 없음(`None`).
    pub fn measure_finite(&'static self, canonical_value: f64) -> Option<Measurement> {
        let m = self.measure(canonical_value);
        if m.value.is_finite() {
            Some(m)
        } else {
            tracing::trace!(unit = self.id, value = m.value, "non-finite result dropped");
            None
        }
    }
}

/// 한 물리량에 대한 읽기 전용 단위 표.
#[derive(Debug, Serialize)]
pub struct UnitTable {
    pub name: &'static str,
    pub quantity: QuantityKind,
    pub units: &'static [UnitDef],
}

impl UnitTable {
    /// 식별자가 정확히 일치하는 단위를 먼저 찾고, 없으면 대소문자를 무시하고 찾는다.
    pub fn find(&self, id: &str) -> Option<&UnitDef> {
        let id = id.trim();
        self.units
            .iter()
            .find(|u| u.id == id)
            .or_else(|| self.units.iter().find(|u| u.id.eq_ignore_ascii_case(id)))
    }

    /// 단위를 찾고, 없으면 계약 위반 오류를 돌려준다.
    pub fn resolve(&'static self, id: &str) -> CalcResult<&'static UnitDef> {
        match self.find(id) {
            Some(unit) => Ok(unit),
            None => {
                tracing::warn!(table = self.name, unit = id, "unknown unit identifier");
                Err(CalcError::unknown_unit(self.name, id))
            }
        }
    }

    /// 기준 단위(계수 1인 단위)를 돌려준다.
    pub fn canonical(&self) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.factor.is_identity())
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|u| u.id)
    }

    pub fn to_canonical(&'static self, value: f64, unit: &str) -> CalcResult<f64> {
        Ok(self.resolve(unit)?.to_canonical(value))
    }

    pub fn from_canonical(&'static self, value: f64, unit: &str) -> CalcResult<f64> {
        Ok(self.resolve(unit)?.from_canonical(value))
    }

    /// 같은 표 안에서 단위 간 환산.
    pub fn convert(&'static self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        Ok(to.from_canonical(from.to_canonical(value)))
    }
}

static ALL_TABLES: &[&UnitTable] = &[
    &flow::DRIP_FLOW,
    &flow::HOSE_FLOW,
    &flow::PIPE_SIZE_FLOW,
    &flow::NOZZLE_FLOW,
    &flow::FRICTION_LOSS_FLOW,
    &flow::VELOCITY_FLOW,
    &flow::PUMP_FLOW,
    &flow::SYSTEM_FLOW,
    &length::DRIP_SPACING,
    &length::PIPE_SIZE_LENGTH,
    &length::FRICTION_LOSS_LENGTH,
    &length::NOZZLE_SPACING,
    &length::ROOT_ZONE,
    &length::NET_APPLICATION,
    &diameter::PIPE_SIZE_DIAMETER,
    &diameter::FRICTION_LOSS_DIAMETER,
    &diameter::VELOCITY_DIAMETER,
    &diameter::NOZZLE_DIAMETER,
    &pressure::PIPE_SIZE_MAX_LOSS,
    &pressure::NOZZLE_PRESSURE,
    &pressure::FRICTION_LOSS_OUTPUT,
    &pressure::PUMP_PRESSURE,
    &application_rate::APPLICATION_RATE,
    &application_rate::CROP_ET,
    &soil_water::AVAILABLE_WATER,
    &velocity::PIPE_VELOCITY,
    &area::IRRIGATED_AREA,
    &time::FREQUENCY_OUTPUT,
    &time::FILL_TIME,
    &time::OPERATING_HOURS,
    &time::OPERATING_DAYS,
    &fraction::EFFICIENCY,
    &fraction::ALLOWABLE_DEPLETION,
    &fraction::PUMP_EFFICIENCY,
    &volume::HOSE_VOLUME,
    &power::PUMP_POWER,
];

/// 등록된 모든 단위 표.
pub fn all_tables() -> &'static [&'static UnitTable] {
    ALL_TABLES
}

/// 이름으로 단위 표를 찾는다.
pub fn table(name: &str) -> CalcResult<&'static UnitTable> {
    ALL_TABLES
        .iter()
        .copied()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CalcError::UnknownTable(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_unique() {
        let mut names: Vec<_> = all_tables().iter().map(|t| t.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn find_falls_back_to_case_insensitive_match() {
        let unit = pressure::PUMP_PRESSURE.find("KPA").expect("kPa");
        assert_eq!(unit.id, "kPa");
        assert!(pressure::PUMP_PRESSURE.find("atm").is_none());
    }

    #[test]
    fn measure_finite_drops_overflow() {
        let mm_per_hr = application_rate::APPLICATION_RATE.find("mmhr").unwrap();
        assert_eq!(mm_per_hr.measure_finite(2.0).map(|m| m.value), Some(50.8));
        assert_eq!(mm_per_hr.measure_finite(f64::MAX), None);
        assert_eq!(mm_per_hr.measure_finite(f64::NAN), None);
    }

    #[test]
    fn per_factor_inverts_output_direction() {
        let mm_per_hr = application_rate::APPLICATION_RATE
            .from_canonical(1.0, "mmhr")
            .unwrap();
        assert_eq!(mm_per_hr, 25.4);
    }
}
