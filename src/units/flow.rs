//! 유량 단위 표.

use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 점적 호스 에미터 유량. 기준: gal/hr
pub static DRIP_FLOW: UnitTable = UnitTable {
    name: "drip.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gph", "gph", Times(1.0)),
        UnitDef::new("lph", "lph", Times(0.264172)),
        UnitDef::new("gpm", "gpm", Times(60.0)),
        UnitDef::new("lps", "lps", Times(951.019)),
    ],
};

/// 정원 호스 유량 출력. 기준: gpm
pub static HOSE_FLOW: UnitTable = UnitTable {
    name: "hose.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gpm", "gpm", Times(1.0)),
        UnitDef::new("lps", "lps", Per(0.06309)),
        UnitDef::new("lpm", "lpm", Per(3.78541)),
        UnitDef::new("cfs", "cfs", Per(0.002228)),
        UnitDef::new("cfm", "cfm", Per(0.133681)),
    ],
};

/// 최소 관경 계산 입력 유량. 기준: gpm
pub static PIPE_SIZE_FLOW: UnitTable = UnitTable {
    name: "pipe_size.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gpm", "gpm", Times(1.0)),
        UnitDef::new("lps", "lps", Times(15.8503)),
        UnitDef::new("cfs", "cfs", Times(448.831)),
        UnitDef::new("acre-in/day", "acre-in/day", Times(18.7)),
        UnitDef::new("acre-in/hour", "acre-in/hour", Times(452.7)),
        UnitDef::new("acre-ft/day", "acre-ft/day", Times(225.8)),
        UnitDef::new("cms", "cms", Times(15850.3)),
    ],
};

/// 노즐 유량 출력. 기준: gpm
pub static NOZZLE_FLOW: UnitTable = UnitTable {
    name: "nozzle.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gpm", "gpm", Times(1.0)),
        UnitDef::new("lps", "lps", Times(15.8503)),
        UnitDef::new("lpm", "lpm", Per(3.78541)),
        UnitDef::new("lph", "lph", Per(227.125)),
        UnitDef::new("gph", "gph", Per(60.0)),
        UnitDef::new("cfs", "cfs", Times(448.831)),
        UnitDef::new("acre-in/day", "acre-in/day", Times(18.7)),
        UnitDef::new("acre-in/hour", "acre-in/hour", Times(452.7)),
        UnitDef::new("acre-ft/day", "acre-ft/day", Times(225.8)),
    ],
};

/// 마찰손실 계산 입력 유량. 기준: gpm
pub static FRICTION_LOSS_FLOW: UnitTable = UnitTable {
    name: "friction_loss.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gpm", "gpm", Times(1.0)),
        UnitDef::new("lps", "lps", Times(15.8503)),
        UnitDef::new("cfs", "cfs", Times(448.831)),
        UnitDef::new("acre-in-day", "acre-in/day", Times(18.857)),
        UnitDef::new("acre-in-hour", "acre-in/hour", Times(452.57)),
        UnitDef::new("acre-ft-day", "acre-ft/day", Times(226.6)),
        UnitDef::new("cms", "cms", Times(15850.3)),
    ],
};

/// 관내 유속 계산 입력 유량. 기준: gpm
pub static VELOCITY_FLOW: UnitTable = UnitTable {
    name: "velocity.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gpm", "gpm", Times(1.0)),
        UnitDef::new("lps", "lps", Times(15.8503)),
        UnitDef::new("cfs", "cfs", Times(448.831)),
        UnitDef::new("acre-in-day", "acre-in/day", Times(18.857)),
        UnitDef::new("acre-ft-day", "acre-ft/day", Times(226.6)),
        UnitDef::new("cms", "cms", Times(15850.3)),
    ],
};

/// 펌프 마력 계산 입력 유량. 기준: gpm
pub static PUMP_FLOW: UnitTable = UnitTable {
    name: "pump.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gpm", "gpm", Times(1.0)),
        UnitDef::new("cfs", "cfs", Times(448.831)),
        UnitDef::new("acre-in/day", "acre-in/day", Times(18.857)),
        UnitDef::new("acre-in/hour", "acre-in/hour", Times(452.57)),
        UnitDef::new("acre-ft/day", "acre-ft/day", Times(226.6)),
        UnitDef::new("lps", "lps", Times(15.8503)),
        UnitDef::new("lpm", "lpm", Times(0.264172)),
        UnitDef::new("cms", "cms", Times(15850.3)),
        UnitDef::new("cu. m/hr", "cu. m/hr", Times(4.40287)),
    ],
};

/// 시스템 양수량 출력. 기준: gpm
pub static SYSTEM_FLOW: UnitTable = UnitTable {
    name: "system_pumping.flow",
    quantity: QuantityKind::FlowRate,
    units: &[
        UnitDef::new("gpm", "gpm", Times(1.0)),
        UnitDef::new("lpm", "lpm", Per(3.78541)),
        UnitDef::new("lps", "lps", Per(0.0630902)),
        UnitDef::new("cms", "cms", Per(0.0000630902)),
        UnitDef::new("cfs", "cfs", Times(448.831)),
        UnitDef::new("acreinday", "acre-in/day", Times(18.857)),
        UnitDef::new("acreinhour", "acre-in/hour", Times(452.57)),
        UnitDef::new("acreftday", "acre-ft/day", Times(226.6)),
    ],
};
