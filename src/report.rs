//! 계산 결과를 사람이 읽는 텍스트나 JSON으로 만든다.

use serde::Serialize;

use crate::calculator::CalculatorKind;
use crate::quantity::Measurement;

/// 결과 한 줄. 값이 없으면 입력 부족 상태이다.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub name: &'static str,
    pub value: Option<Measurement>,
}

/// 한 번의 계산 결과 묶음.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: &'static str,
    #[serde(skip)]
    pub digits: usize,
    /// 참이면 뒤쪽 0을 남긴다 ("7.50").
    #[serde(skip)]
    pub fixed: bool,
    pub rows: Vec<Row>,
}

impl Report {
    pub fn new(title: &'static str, digits: usize) -> Self {
        Self {
            title,
            digits,
            fixed: false,
            rows: Vec::new(),
        }
    }

    pub fn for_calculator(kind: CalculatorKind, digits_override: Option<usize>) -> Self {
        let digits = digits_override.unwrap_or_else(|| kind.max_fraction_digits());
        Self {
            fixed: kind.fixed_digits(),
            ..Self::new(kind.title(), digits)
        }
    }

    fn format_value(&self, value: f64) -> String {
        if self.fixed {
            format_fixed(value, self.digits)
        } else {
            format_number(value, self.digits)
        }
    }

    pub fn row(mut self, name: &'static str, value: Option<Measurement>) -> Self {
        self.rows.push(Row { name, value });
        self
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for row in &self.rows {
            match &row.value {
                Some(m) => out.push_str(&format!(
                    "  {}: {} {}\n",
                    row.name,
                    self.format_value(m.value),
                    m.label
                )),
                None => out.push_str(&format!("  {}: no result (insufficient input)\n", row.name)),
            }
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 최대 `max_digits` 자리까지 표시하고 뒤쪽 0은 지운다.
pub fn format_number(value: f64, max_digits: usize) -> String {
    let mut s = format!("{:.*}", max_digits, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".into();
    }
    s
}

/// 정확히 `digits` 자리로 표시한다.
pub fn format_fixed(value: f64, digits: usize) -> String {
    let s = format!("{:.*}", digits, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_number(0.677314814, 4), "0.6773");
        assert_eq!(format_number(2.5, 4), "2.5");
        assert_eq!(format_number(25.0, 2), "25");
        assert_eq!(format_number(-0.00001, 2), "0");
        assert_eq!(format_number(1200.0, 0), "1200");
    }

    #[test]
    fn fixed_format_keeps_trailing_zeros() {
        assert_eq!(format_fixed(7.5, 2), "7.50");
        assert_eq!(format_fixed(15.555_555, 2), "15.56");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
    }

    #[test]
    fn calculator_reports_choose_fixed_or_trimmed() {
        let value = Some(Measurement {
            value: 7.5,
            unit: "day",
            label: "day",
        });
        let fixed = Report::for_calculator(CalculatorKind::IrrigationFrequency, None)
            .row("Irrigation frequency", value);
        assert!(fixed.to_text().contains("7.50 day"));

        let trimmed = Report::for_calculator(CalculatorKind::GardenHose, None).row("Flow", value);
        assert!(trimmed.to_text().contains("Flow: 7.5 day"));
    }

    #[test]
    fn text_report_marks_missing_rows() {
        let report = Report::new("Pipe Water Velocity", 4).row("Velocity", None);
        assert_eq!(
            report.to_text(),
            "Pipe Water Velocity\n  Velocity: no result (insufficient input)\n"
        );
    }
}
