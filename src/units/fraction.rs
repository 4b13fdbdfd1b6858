//! 무차원 비율(효율, 허용 고갈률) 단위 표. 기준: 소수.

use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 관개 효율. 노즐과 시스템 양수량 계산기가 쓴다.
pub static EFFICIENCY: UnitTable = UnitTable {
    name: "efficiency",
    quantity: QuantityKind::Fraction,
    units: &[
        UnitDef::new("percent", "%", Per(100.0)),
        UnitDef::new("decimal", "decimal", Times(1.0)),
    ],
};

/// 허용 고갈률(MAD).
pub static ALLOWABLE_DEPLETION: UnitTable = UnitTable {
    name: "frequency.mad",
    quantity: QuantityKind::Fraction,
    units: &[
        UnitDef::new("decimal", "decimal", Times(1.0)),
        UnitDef::new("percent", "%", Per(100.0)),
    ],
};

/// 펌프/모터 효율. 식별자는 표시 라벨을 그대로 쓴다.
pub static PUMP_EFFICIENCY: UnitTable = UnitTable {
    name: "pump.efficiency",
    quantity: QuantityKind::Fraction,
    units: &[
        UnitDef::new("%", "%", Per(100.0)),
        UnitDef::new("decimal", "decimal", Times(1.0)),
    ],
};
