use serde::Serialize;

/// 결과 한 줄. `label: value unit` 형태로 출력된다.
#[derive(Debug, Clone, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    /// 소수점 이하 자릿수
    pub precision: usize,
}

impl ReportLine {
    pub fn new(label: &'static str, value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            label,
            value,
            unit,
            precision,
        }
    }

    /// 한 줄을 고정 형식 문자열로 만든다.
    pub fn render(&self) -> String {
        format!(
            "{}: {} {}",
            self.label,
            format_fixed(self.value, self.precision),
            self.unit
        )
    }
}

/// 모듈 하나의 출력 블록.
///
/// 줄은 그룹 단위로 묶이며, 그룹 사이에는 빈 줄이 들어간다.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleReport {
    pub title: &'static str,
    pub groups: Vec<Vec<ReportLine>>,
}

impl ModuleReport {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            groups: Vec::new(),
        }
    }

    /// 새 그룹을 추가한다.
    pub fn group(mut self, lines: Vec<ReportLine>) -> Self {
        self.groups.push(lines);
        self
    }

    /// 모든 줄을 순서대로 돌려준다.
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.groups.iter().flatten()
    }

    /// 라벨로 값을 찾는다.
    pub fn value(&self, label: &str) -> Option<f64> {
        self.lines().find(|line| line.label == label).map(|line| line.value)
    }

    /// 여러 줄 텍스트 블록으로 렌더링한다.
    pub fn render(&self) -> String {
        self.groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(ReportLine::render)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// 고정 소수점 형식으로 값을 쓴다. 로케일과 무관하게 소수점은 `.`이다.
///
/// 무한대와 NaN은 `+Inf`, `-Inf`, `NaN`으로 표시한다.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_precision() {
        assert_eq!(format_fixed(37.527767, 2), "37.53");
        assert_eq!(format_fixed(0.55125, 3), "0.551");
        assert_eq!(format_fixed(2698.254, 0), "2698");
        assert_eq!(format_fixed(0.0, 3), "0.000");
    }

    #[test]
    fn non_finite_spellings() {
        assert_eq!(format_fixed(f64::INFINITY, 3), "+Inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Inf");
        assert_eq!(format_fixed(f64::NAN, 0), "NaN");
    }

    #[test]
    fn groups_are_separated_by_blank_line() {
        let report = ModuleReport::new("T")
            .group(vec![
                ReportLine::new("A", 1.0, "Ohm", 3),
                ReportLine::new("B", 2.0, "A", 0),
            ])
            .group(vec![ReportLine::new("C", 3.5, "mm2", 2)]);
        assert_eq!(report.render(), "A: 1.000 Ohm\nB: 2 A\n\nC: 3.50 mm2");
        assert_eq!(report.value("C"), Some(3.5));
        assert_eq!(report.value("missing"), None);
    }
}
