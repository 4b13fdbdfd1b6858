//! 살수 강도와 관개 일정 관련 계산 모듈을 모아둔다.
//! 점적 호스 살수 강도, 스프링클러 노즐 유량/살수 강도, 관개 주기로 구성한다.

pub mod drip_line;
pub mod frequency;
pub mod nozzle;
