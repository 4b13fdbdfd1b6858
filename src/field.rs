//! 폼 입력값 처리.
//!
//! 표현 계층은 값을 문자열로 들고 있다가 입력이 바뀔 때마다 계산기를 다시 부른다.
//! 비어 있거나 숫자가 아닌 값은 "아직 계산할 수 없음"으로 취급한다.

use crate::units::UnitDef;

/// 폼 문자열을 숫자로 읽는다. 빈 문자열, 공백, 숫자가 아닌 값은 `None`.
pub fn parse_field(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 값을 기준 단위로 환산하고 0보다 큰 유한값만 남긴다.
pub fn positive(value: Option<f64>, unit: &UnitDef) -> Option<f64> {
    value
        .map(|v| unit.to_canonical(v))
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::DRIP_SPACING;

    #[test]
    fn parse_field_treats_blank_and_garbage_as_missing() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("NaN"), None);
        assert_eq!(parse_field(" 12.5 "), Some(12.5));
        assert_eq!(parse_field("-3"), Some(-3.0));
    }

    #[test]
    fn positive_filters_after_conversion() {
        let ft = DRIP_SPACING.find("ft").unwrap();
        assert_eq!(positive(Some(3.0), ft), Some(36.0));
        assert_eq!(positive(Some(0.0), ft), None);
        assert_eq!(positive(Some(-1.0), ft), None);
        assert_eq!(positive(None, ft), None);
    }
}
