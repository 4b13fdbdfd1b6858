//! 길이 단위 표 (살수 간격, 배관 길이, 근권 깊이, 순관개 수심).

use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 점적 호스 열 간격/에미터 간격. 기준: inch
pub static DRIP_SPACING: UnitTable = UnitTable {
    name: "drip.spacing",
    quantity: QuantityKind::Length,
    units: &[
        UnitDef::new("in", "in", Times(1.0)),
        UnitDef::new("ft", "ft", Times(12.0)),
        UnitDef::new("cm", "cm", Times(0.393701)),
        UnitDef::new("mm", "mm", Times(0.0393701)),
        UnitDef::new("m", "m", Times(39.3701)),
    ],
};

/// 최소 관경 계산 배관 길이. 기준: ft
pub static PIPE_SIZE_LENGTH: UnitTable = UnitTable {
    name: "pipe_size.length",
    quantity: QuantityKind::Length,
    units: &[
        UnitDef::new("ft", "ft", Times(1.0)),
        UnitDef::new("m", "m", Times(3.28084)),
        UnitDef::new("cm", "cm", Times(0.0328084)),
        UnitDef::new("mm", "mm", Times(0.00328084)),
        UnitDef::new("in", "in", Per(12.0)),
    ],
};

/// 마찰손실 계산 배관 길이. 기준: ft
pub static FRICTION_LOSS_LENGTH: UnitTable = UnitTable {
    name: "friction_loss.length",
    quantity: QuantityKind::Length,
    units: &[
        UnitDef::new("ft", "ft", Times(1.0)),
        UnitDef::new("m", "m", Times(3.28084)),
        UnitDef::new("in", "in", Per(12.0)),
    ],
};

/// 스프링클러 배치 간격. 기준: ft
pub static NOZZLE_SPACING: UnitTable = UnitTable {
    name: "nozzle.spacing",
    quantity: QuantityKind::Length,
    units: &[
        UnitDef::new("ft", "ft", Times(1.0)),
        UnitDef::new("in", "in", Per(12.0)),
        UnitDef::new("m", "m", Times(3.28084)),
        UnitDef::new("cm", "cm", Times(0.0328084)),
    ],
};

/// 유효 근권 깊이. 기준: ft
pub static ROOT_ZONE: UnitTable = UnitTable {
    name: "frequency.root_zone",
    quantity: QuantityKind::Length,
    units: &[
        UnitDef::new("ft", "ft", Times(1.0)),
        UnitDef::new("m", "m", Times(3.28084)),
        UnitDef::new("cm", "cm", Times(0.0328084)),
        UnitDef::new("mm", "mm", Times(0.00328084)),
        UnitDef::new("in", "in", Per(12.0)),
    ],
};

/// 순관개 수심. 기준: inch
pub static NET_APPLICATION: UnitTable = UnitTable {
    name: "system_pumping.net_application",
    quantity: QuantityKind::Length,
    units: &[
        UnitDef::new("in", "in", Times(1.0)),
        UnitDef::new("ft", "ft", Times(12.0)),
        UnitDef::new("mm", "mm", Times(0.0393701)),
        UnitDef::new("cm", "cm", Times(0.393701)),
        UnitDef::new("m", "m", Times(39.3701)),
    ],
};
