use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

const SQFT_PER_ACRE: f64 = 43560.0;

/// 관개 면적. 기준: acre
pub static IRRIGATED_AREA: UnitTable = UnitTable {
    name: "system_pumping.area",
    quantity: QuantityKind::Area,
    units: &[
        UnitDef::new("acres", "acres", Times(1.0)),
        UnitDef::new("hectares", "hectares", Times(2.47105)),
        UnitDef::new("sqft", "sq. ft", Per(SQFT_PER_ACRE)),
        UnitDef::new("sqm", "sq. m", Times(0.000247105)),
        UnitDef::new("sqmiles", "sq. miles", Times(640.0)),
    ],
};
