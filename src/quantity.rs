use serde::Serialize;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    FlowRate,
    /// 배관 길이, 살수 간격, 근권 깊이, 순관개량 등 선형 길이
    Length,
    Diameter,
    /// 수두(ft/m of water) 형태 포함
    Pressure,
    /// 시간당 수심. 살수 강도와 작물 증발산량(ETc)에 함께 쓴다.
    ApplicationRate,
    Velocity,
    Area,
    Time,
    /// 효율, 허용 고갈률(MAD) 등 무차원 비율
    Fraction,
    Volume,
    Power,
    /// 토양 유효수분량 (깊이/깊이)
    SoilWaterCapacity,
}

impl QuantityKind {
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::FlowRate => "flow rate",
            QuantityKind::Length => "length",
            QuantityKind::Diameter => "diameter",
            QuantityKind::Pressure => "pressure",
            QuantityKind::ApplicationRate => "application rate",
            QuantityKind::Velocity => "velocity",
            QuantityKind::Area => "area",
            QuantityKind::Time => "time",
            QuantityKind::Fraction => "fraction",
            QuantityKind::Volume => "volume",
            QuantityKind::Power => "power",
            QuantityKind::SoilWaterCapacity => "soil water capacity",
        }
    }
}

/// 호출자가 요청한 출력 단위로 환산된 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub value: f64,
    /// 단위 식별자
    pub unit: &'static str,
    /// 표시용 단위 라벨
    pub label: &'static str,
}
