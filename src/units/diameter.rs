//! 관경/노즐 구경 단위 표. 기준은 모두 inch.

use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 최소 관경 계산 결과 출력.
pub static PIPE_SIZE_DIAMETER: UnitTable = UnitTable {
    name: "pipe_size.diameter",
    quantity: QuantityKind::Diameter,
    units: &[
        UnitDef::new("in", "in", Times(1.0)),
        UnitDef::new("mm", "mm", Per(25.4)),
        UnitDef::new("cm", "cm", Per(2.54)),
        UnitDef::new("m", "m", Per(0.0254)),
        UnitDef::new("ft", "ft", Times(12.0)),
    ],
};

pub static FRICTION_LOSS_DIAMETER: UnitTable = UnitTable {
    name: "friction_loss.diameter",
    quantity: QuantityKind::Diameter,
    units: &[
        UnitDef::new("in", "in", Times(1.0)),
        UnitDef::new("mm", "mm", Times(0.0393701)),
        UnitDef::new("cm", "cm", Times(0.393701)),
        UnitDef::new("ft", "ft", Times(12.0)),
    ],
};

/// 유속 계산 입력 관경과 최소 관경 출력에 함께 쓴다.
pub static VELOCITY_DIAMETER: UnitTable = UnitTable {
    name: "velocity.diameter",
    quantity: QuantityKind::Diameter,
    units: &[
        UnitDef::new("in", "in", Times(1.0)),
        UnitDef::new("mm", "mm", Times(0.0393701)),
        UnitDef::new("cm", "cm", Times(0.393701)),
        UnitDef::new("ft", "ft", Times(12.0)),
    ],
};

/// 노즐 구경. 분수 인치(1/8 ~ 1/128) 표기를 포함한다.
pub static NOZZLE_DIAMETER: UnitTable = UnitTable {
    name: "nozzle.diameter",
    quantity: QuantityKind::Diameter,
    units: &[
        UnitDef::new("in", "in", Times(1.0)),
        UnitDef::new("8ths", "1/8 in", Per(8.0)),
        UnitDef::new("16ths", "1/16 in", Per(16.0)),
        UnitDef::new("32nds", "1/32 in", Per(32.0)),
        UnitDef::new("64ths", "1/64 in", Per(64.0)),
        UnitDef::new("128ths", "1/128 in", Per(128.0)),
        UnitDef::new("ft", "ft", Times(12.0)),
        UnitDef::new("cm", "cm", Times(0.393701)),
        UnitDef::new("mm", "mm", Times(0.0393701)),
    ],
};
