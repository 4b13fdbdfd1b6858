//! 관개 공학 단위 계산기 모음.
//!
//! 각 계산기는 입력값을 기준 단위로 환산하고, 닫힌 형태의 공식 하나를 적용한 뒤
//! 요청된 출력 단위로 돌려주는 순수 함수이다. 입력이 부족하면 `Ok(None)`,
//! 열거된 목록 밖의 단위 식별자는 [`CalcError`]로 실패한다.

pub mod app;
pub mod application;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod error;
pub mod field;
pub mod hose;
pub mod logging;
pub mod material_db;
pub mod piping;
pub mod pumping;
pub mod quantity;
pub mod report;
pub mod units;

pub use error::{CalcError, CalcResult};
pub use quantity::{Measurement, QuantityKind};
