//! 펌프 동력과 시스템 양수량 계산 모듈을 모아둔다.

pub mod horsepower;
pub mod system_requirements;
