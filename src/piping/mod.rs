//! 물 배관 수리 계산 모듈을 모아둔다.
//! Hazen-Williams 마찰손실, 허용 손실 기준 최소 관경, 관내 유속으로 구성한다.

pub mod friction_loss;
pub mod minimum_size;
pub mod water_velocity;

/// Hazen-Williams 식(US 단위계: ft, gpm, in, psi)의 계수
pub(crate) const HW_COEFFICIENT: f64 = 4.53;
/// 유량 지수
pub(crate) const HW_FLOW_EXPONENT: f64 = 1.852;
/// 관경 지수
pub(crate) const HW_DIAMETER_EXPONENT: f64 = 4.857;
