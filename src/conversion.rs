use crate::error::CalcResult;
use crate::quantity::Measurement;
use crate::units;

/// 표 이름과 단위 식별자 문자열로 값을 환산한다.
///
/// 예: `convert("pump.flow", 1.0, "cfs", "gpm")`
pub fn convert(table_name: &str, value: f64, from_unit: &str, to_unit: &str) -> CalcResult<f64> {
    units::table(table_name)?.convert(value, from_unit, to_unit)
}

/// [`convert`]와 같지만 결과에 목표 단위 정보를 붙인다.
pub fn convert_measurement(
    table_name: &str,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> CalcResult<Measurement> {
    let table = units::table(table_name)?;
    let from = table.resolve(from_unit)?;
    let to = table.resolve(to_unit)?;
    Ok(to.measure(from.to_canonical(value)))
}
