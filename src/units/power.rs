use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 1 HP = 0.7457 kW
pub const KW_PER_HP: f64 = 0.7457;

/// 펌프 동력 출력. 기준: HP
pub static PUMP_POWER: UnitTable = UnitTable {
    name: "pump.power",
    quantity: QuantityKind::Power,
    units: &[
        UnitDef::new("HP", "HP", Times(1.0)),
        UnitDef::new("kW", "kW", Per(KW_PER_HP)),
    ],
};
