//! 정원 호스 유량은 공식이 아니라 참고 자료의 조회표로 구한다.
//!
//! Q = SP(호스 구경, 수압) × L(호스 길이). 표에 없는 조합은 결과 없음.

use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::field::positive;
use crate::quantity::Measurement;
use crate::units::{flow::HOSE_FLOW, time::FILL_TIME, volume::HOSE_VOLUME};

/// 호스 구경/수압별 기준 유량 [gpm]
static SIZE_PRESSURE_TABLE: &[(&str, &[(&str, f64)])] = &[
    ("1/2", &[("40", 6.0), ("45", 6.5), ("50", 7.0), ("60", 7.5)]),
    ("5/8", &[("40", 11.0), ("45", 12.0), ("50", 12.5), ("60", 14.0)]),
    ("3/4", &[("40", 18.0), ("45", 19.0), ("50", 20.0), ("60", 22.0)]),
];

/// 호스 길이 [ft] 별 보정 계수
static LENGTH_TABLE: &[(&str, f64)] = &[
    ("25", 4.0),
    ("50", 2.0),
    ("75", 1.5),
    ("100", 1.0),
    ("125", 0.87),
    ("150", 0.75),
    ("175", 0.62),
    ("200", 0.5),
];

/// 정원 호스 계산 입력. 구경/수압/길이는 조회표 키를 그대로 받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenHoseInput {
    /// 호스 구경 [in] ("1/2", "5/8", "3/4")
    pub size: String,
    /// 수압 [psi]
    pub pressure: String,
    /// 호스 길이 [ft]
    pub length: String,
    pub flow_unit: String,
    /// 채울 부피. 비어 있으면 채움 시간은 계산하지 않는다.
    pub volume: Option<f64>,
    pub volume_unit: String,
    pub time_unit: String,
}

impl Default for GardenHoseInput {
    fn default() -> Self {
        Self {
            size: "5/8".into(),
            pressure: "50".into(),
            length: "50".into(),
            flow_unit: "gpm".into(),
            volume: None,
            volume_unit: "gal".into(),
            time_unit: "min".into(),
        }
    }
}

/// 정원 호스 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GardenHoseResult {
    pub flow: Measurement,
    pub fill_time: Option<Measurement>,
}

/// 선택 가능한 호스 구경 키.
pub fn hose_sizes() -> impl Iterator<Item = &'static str> {
    SIZE_PRESSURE_TABLE.iter().map(|(size, _)| *size)
}

/// 선택 가능한 수압 키.
pub fn pressures() -> impl Iterator<Item = &'static str> {
    SIZE_PRESSURE_TABLE
        .first()
        .into_iter()
        .flat_map(|(_, row)| row.iter().map(|(p, _)| *p))
}

/// 선택 가능한 호스 길이 키.
pub fn lengths() -> impl Iterator<Item = &'static str> {
    LENGTH_TABLE.iter().map(|(l, _)| *l)
}

/// SP 표 조회.
pub fn size_pressure_factor(size: &str, pressure: &str) -> Option<f64> {
    let (_, row) = SIZE_PRESSURE_TABLE
        .iter()
        .find(|(s, _)| *s == size.trim())?;
    row.iter()
        .find(|(p, _)| *p == pressure.trim())
        .map(|(_, sp)| *sp)
}

/// L 표 조회.
pub fn length_factor(length: &str) -> Option<f64> {
    LENGTH_TABLE
        .iter()
        .find(|(l, _)| *l == length.trim())
        .map(|(_, f)| *f)
}

/// Q = SP × L [gpm]. 표에 없는 키면 `None`.
pub fn hose_flow_gpm(size: &str, pressure: &str, length: &str) -> Option<f64> {
    Some(size_pressure_factor(size, pressure)? * length_factor(length)?)
}

/// 호스 유량과 채움 시간을 계산한다.
pub fn garden_hose(input: &GardenHoseInput) -> CalcResult<Option<GardenHoseResult>> {
    let flow_out = HOSE_FLOW.resolve(&input.flow_unit)?;
    let volume_unit = HOSE_VOLUME.resolve(&input.volume_unit)?;
    let time_out = FILL_TIME.resolve(&input.time_unit)?;

    let Some(flow) = hose_flow_gpm(&input.size, &input.pressure, &input.length) else {
        tracing::trace!(
            size = %input.size,
            pressure = %input.pressure,
            length = %input.length,
            "garden hose: no table entry"
        );
        return Ok(None);
    };

    let fill_time = positive(input.volume, volume_unit).and_then(|gal| {
        let minutes = gal / flow;
        tracing::debug!(volume_gal = gal, minutes, "garden hose fill time");
        time_out.measure_finite(minutes)
    });
    tracing::debug!(flow_gpm = flow, "garden hose flow");

    Ok(flow_out
        .measure_finite(flow)
        .map(|flow| GardenHoseResult { flow, fill_time }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_size_row_has_the_same_pressures() {
        let expected: Vec<_> = pressures().collect();
        for (_, row) in SIZE_PRESSURE_TABLE {
            let keys: Vec<_> = row.iter().map(|(p, _)| *p).collect();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn missing_key_has_no_flow() {
        assert_eq!(hose_flow_gpm("1", "50", "50"), None);
        assert_eq!(hose_flow_gpm("5/8", "55", "50"), None);
        assert_eq!(hose_flow_gpm("5/8", "50", "60"), None);
        assert_eq!(hose_flow_gpm("3/4", "60", "200"), Some(11.0));
    }
}
