//! 수심/시간 단위 표. 기준: in/hr (살수 강도), in/day (작물 증발산량).

use super::{Factor::*, UnitDef, UnitTable};
use crate::quantity::QuantityKind;

const MM_PER_IN: f64 = 25.4;
const CM_PER_IN: f64 = 2.54;
const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// 살수 강도 출력. 점적 호스와 노즐 계산기가 함께 쓴다.
pub static APPLICATION_RATE: UnitTable = UnitTable {
    name: "application_rate",
    quantity: QuantityKind::ApplicationRate,
    units: &[
        UnitDef::new("inhr", "in/hr", Times(1.0)),
        UnitDef::new("mmhr", "mm/hr", Per(MM_PER_IN)),
        UnitDef::new("inday", "in/day", Per(HOURS_PER_DAY)),
        UnitDef::new("mmday", "mm/day", Per(MM_PER_IN * HOURS_PER_DAY)),
        UnitDef::new("cmhr", "cm/hr", Per(CM_PER_IN)),
        UnitDef::new("cmday", "cm/day", Per(CM_PER_IN * HOURS_PER_DAY)),
    ],
};

/// 작물 증발산량(ETc). 월 단위는 30일로 나눈다.
pub static CROP_ET: UnitTable = UnitTable {
    name: "frequency.crop_et",
    quantity: QuantityKind::ApplicationRate,
    units: &[
        UnitDef::new("inday", "in/day", Times(1.0)),
        UnitDef::new("mmday", "mm/day", Times(0.0393701)),
        UnitDef::new("cmday", "cm/day", Times(0.393701)),
        UnitDef::new("inmonth", "in/month", Per(DAYS_PER_MONTH)),
        UnitDef::new("mmmonth", "mm/month", Times(0.0393701 / DAYS_PER_MONTH)),
        UnitDef::new("cmmonth", "cm/month", Times(0.393701 / DAYS_PER_MONTH)),
    ],
};
