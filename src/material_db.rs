/// 배관 재질별 Hazen-Williams 조도계수(C) 표.
/// 계산기는 C 값을 숫자로 받으며, 이 표는 선택지 목록으로 쓴다.
/// 참고 자료에 따라 값이 달라(알루미늄 커플러관 120 / 100) 계산기별로 표를 따로 둔다.
use serde::Serialize;

use crate::error::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipeMaterial {
    pub name: &'static str,
    pub c: f64,
}

impl PipeMaterial {
    pub const fn new(name: &'static str, c: f64) -> Self {
        Self { name, c }
    }
}

/// 마찰손실 계산기 재질 표.
pub static FRICTION_LOSS_MATERIALS: &[PipeMaterial] = &[
    PipeMaterial::new("Plastic", 150.0),
    PipeMaterial::new("Epoxy Coated Steel", 140.0),
    PipeMaterial::new("Cement Asbestos", 140.0),
    PipeMaterial::new("Galvanized Steel", 120.0),
    PipeMaterial::new("New Steel", 120.0),
    PipeMaterial::new("Aluminum with Couplers", 120.0),
    PipeMaterial::new("15-Year-Old Steel", 100.0),
];

/// 최소 관경 계산기 재질 표.
pub static PIPE_SIZE_MATERIALS: &[PipeMaterial] = &[
    PipeMaterial::new("Plastic", 150.0),
    PipeMaterial::new("Epoxy coated steel", 140.0),
    PipeMaterial::new("Cement asbestos", 140.0),
    PipeMaterial::new("Galvanized steel", 120.0),
    PipeMaterial::new("New steel", 120.0),
    PipeMaterial::new("Aluminum with couplers", 100.0),
    PipeMaterial::new("15 year old steel", 100.0),
];

/// 기본 재질(플라스틱) C 값.
pub const DEFAULT_C: f64 = 150.0;

pub fn find_material(
    table: &'static [PipeMaterial],
    name: &str,
) -> CalcResult<&'static PipeMaterial> {
    let name = name.trim();
    table
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CalcError::UnknownMaterial(name.to_string()))
}

/// 재질명으로 C 값을 찾는다.
pub fn hazen_williams_c(table: &'static [PipeMaterial], name: &str) -> CalcResult<f64> {
    find_material(table, name).map(|m| m.c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aluminum_differs_between_tables() {
        let a = hazen_williams_c(FRICTION_LOSS_MATERIALS, "aluminum with couplers").unwrap();
        let b = hazen_williams_c(PIPE_SIZE_MATERIALS, "Aluminum with couplers").unwrap();
        assert_eq!(a, 120.0);
        assert_eq!(b, 100.0);
    }

    #[test]
    fn unknown_material_is_an_error() {
        let err = find_material(PIPE_SIZE_MATERIALS, "cast iron").unwrap_err();
        assert_eq!(err, CalcError::UnknownMaterial("cast iron".into()));
    }
}
