use thiserror::Error;

/// 계산기 라이브러리 공통 결과 타입.
pub type CalcResult<T> = Result<T, CalcError>;

/// 계약 위반 오류.
///
/// 입력 부족(빈 값, 0 이하 값, 조회표에 없는 키)은 오류가 아니라 `Ok(None)`으로 표현한다.
/// 여기에는 표현 계층이 열거된 단위/재질 목록 밖의 식별자를 넘긴 경우만 담는다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// 단위 표에 없는 단위 식별자
    #[error("unknown unit '{unit}' for table '{table}'")]
    UnknownUnit { table: &'static str, unit: String },

    /// 등록되지 않은 단위 표 이름
    #[error("unknown unit table '{0}'")]
    UnknownTable(String),

    /// Hazen-Williams 재질 표에 없는 재질
    #[error("unknown pipe material '{0}'")]
    UnknownMaterial(String),
}

impl CalcError {
    pub fn unknown_unit(table: &'static str, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            table,
            unit: unit.into(),
        }
    }
}
