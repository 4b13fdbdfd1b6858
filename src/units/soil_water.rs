use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 토양 유효수분량(AWC). 기준: in/ft
pub static AVAILABLE_WATER: UnitTable = UnitTable {
    name: "frequency.awc",
    quantity: QuantityKind::SoilWaterCapacity,
    units: &[
        UnitDef::new("inft", "in/ft", Times(1.0)),
        UnitDef::new("mmm", "mm/m", Times(0.012)),
    ],
};
