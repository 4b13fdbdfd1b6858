//! 압력 단위 표. 기준은 모두 psi이며, 수두(ft/m of water) 형태를 포함한다.

use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 최소 관경 계산의 허용 압력손실.
pub static PIPE_SIZE_MAX_LOSS: UnitTable = UnitTable {
    name: "pipe_size.max_loss",
    quantity: QuantityKind::Pressure,
    units: &[
        UnitDef::new("psi", "psi", Times(1.0)),
        UnitDef::new("kpa", "kPa", Times(0.145038)),
        UnitDef::new("bar", "bar", Times(14.5038)),
        UnitDef::new("mh2o", "m of water", Times(1.42233)),
        UnitDef::new("fth2o", "feet of water", Times(0.4335)),
    ],
};

pub static NOZZLE_PRESSURE: UnitTable = UnitTable {
    name: "nozzle.pressure",
    quantity: QuantityKind::Pressure,
    units: &[
        UnitDef::new("psi", "psi", Times(1.0)),
        UnitDef::new("bar", "bar", Times(14.5038)),
        UnitDef::new("kpa", "kPa", Times(0.145038)),
        UnitDef::new("fth2o", "feet of water", Times(0.4335)),
        UnitDef::new("mh2o", "m of water", Times(1.42233)),
    ],
};

/// 마찰손실 결과 출력.
pub static FRICTION_LOSS_OUTPUT: UnitTable = UnitTable {
    name: "friction_loss.output",
    quantity: QuantityKind::Pressure,
    units: &[
        UnitDef::new("psi", "psi", Times(1.0)),
        UnitDef::new("kpa", "kPa", Per(6.89476)),
        UnitDef::new("bar", "bar", Per(0.0689476)),
        UnitDef::new("ft-h2o", "feet of water", Per(2.30666)),
        UnitDef::new("m-h2o", "m of water", Per(0.70307)),
    ],
};

/// 펌프 토출 압력. 식별자는 표시 라벨을 그대로 쓴다.
pub static PUMP_PRESSURE: UnitTable = UnitTable {
    name: "pump.pressure",
    quantity: QuantityKind::Pressure,
    units: &[
        UnitDef::new("psi", "psi", Times(1.0)),
        UnitDef::new("kPa", "kPa", Times(0.145038)),
        UnitDef::new("feet of water", "feet of water", Times(0.433527)),
        UnitDef::new("m of water", "m of water", Times(1.42233)),
        UnitDef::new("bar", "bar", Times(14.5038)),
    ],
};
