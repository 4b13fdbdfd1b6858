use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 관내 유속 출력. 기준: ft/s
pub static PIPE_VELOCITY: UnitTable = UnitTable {
    name: "velocity.output",
    quantity: QuantityKind::Velocity,
    units: &[
        UnitDef::new("fps", "fps", Times(1.0)),
        UnitDef::new("mps", "mps", Per(0.3048)),
    ],
};
