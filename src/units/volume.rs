use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 채울 용기 부피. 기준: gal
pub static HOSE_VOLUME: UnitTable = UnitTable {
    name: "hose.volume",
    quantity: QuantityKind::Volume,
    units: &[
        UnitDef::new("gal", "gal", Times(1.0)),
        UnitDef::new("pints", "pints", Times(0.125)),
        UnitDef::new("quarts", "quarts", Times(0.25)),
        UnitDef::new("ml", "ml", Times(0.000264172)),
        UnitDef::new("l", "l", Times(0.264172)),
        UnitDef::new("ft3", "ft³", Times(7.48052)),
    ],
};
