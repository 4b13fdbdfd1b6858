//! 시간 단위 표.

use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

/// 관개 주기 출력. 기준: day
pub static FREQUENCY_OUTPUT: UnitTable = UnitTable {
    name: "frequency.output",
    quantity: QuantityKind::Time,
    units: &[
        UnitDef::new("day", "day", Times(1.0)),
        UnitDef::new("hr", "hr", Per(24.0)),
    ],
};

/// 채움 시간 출력. 기준: min
pub static FILL_TIME: UnitTable = UnitTable {
    name: "hose.fill_time",
    quantity: QuantityKind::Time,
    units: &[
        UnitDef::new("min", "min", Times(1.0)),
        UnitDef::new("hr", "hr", Times(60.0)),
        UnitDef::new("days", "days", Times(1440.0)),
    ],
};

/// 일 운전 시간. 단위 선택지가 하나뿐이다.
pub static OPERATING_HOURS: UnitTable = UnitTable {
    name: "system_pumping.hours",
    quantity: QuantityKind::Time,
    units: &[UnitDef::new("hours", "hours", Times(1.0))],
};

pub static OPERATING_DAYS: UnitTable = UnitTable {
    name: "system_pumping.days",
    quantity: QuantityKind::Time,
    units: &[UnitDef::new("days", "days", Times(1.0))],
};
