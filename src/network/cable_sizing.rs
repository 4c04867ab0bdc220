use serde::Serialize;

use crate::report::{ModuleReport, ReportLine};

/// 케이블 선정 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableSizingInput {
    /// 피상전력 Sm [kVA]
    pub apparent_power_kva: f64,
    /// 공칭전압 Unom [kV]
    pub nominal_voltage_kv: f64,
    /// 단락전류 Ik [A]
    pub short_circuit_current_a: f64,
    /// 단락 지속시간 tf [s]
    pub fault_duration_s: f64,
    /// 열계수 Ct
    pub thermal_coefficient: f64,
    /// 경제전류밀도 jek [A/mm²]
    pub economic_current_density_a_per_mm2: f64,
}

/// 케이블 선정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CableSizingResult {
    /// 정상 운전전류 Im [A]
    pub nominal_current_a: f64,
    /// 사고 후 운전전류 Impa [A]
    pub post_fault_current_a: f64,
    /// 경제 단면적 Sek [mm²]
    pub economic_section_mm2: f64,
    /// 열적 최소 단면적 Smin [mm²]
    pub min_thermal_section_mm2: f64,
    /// Sek 이상인 가장 작은 표준 단면적 [mm²]
    pub recommended_economic_section_mm2: u32,
    /// Smin 이상인 가장 작은 표준 단면적 [mm²]
    pub recommended_thermal_section_mm2: u32,
}

/// 표준 도체 단면적 계열 [mm²]
pub const STANDARD_SECTIONS_MM2: [u32; 10] = [16, 25, 35, 50, 70, 95, 120, 150, 185, 240];

/// 요구 단면적 이상인 가장 작은 표준 단면적을 고른다.
///
/// 계열 최대값(240)을 넘거나 값이 NaN이면 최대값을 돌려준다.
pub fn suggest_standard_section(required_mm2: f64) -> u32 {
    STANDARD_SECTIONS_MM2
        .iter()
        .copied()
        .find(|&section| f64::from(section) >= required_mm2)
        .unwrap_or(STANDARD_SECTIONS_MM2[STANDARD_SECTIONS_MM2.len() - 1])
}

/// 두 회선 병렬 운전을 가정해 운전전류와 단면적을 계산한다.
///
/// 0으로 나누는 경우도 막지 않는다. 결과는 IEEE-754 규칙대로 무한대나 NaN이 된다.
pub fn compute_cable_sizing(input: CableSizingInput) -> CableSizingResult {
    let sqrt3 = 3f64.sqrt();
    let im = (input.apparent_power_kva / 2.0) / (sqrt3 * input.nominal_voltage_kv);
    let impa = 2.0 * im;
    let sek = im / input.economic_current_density_a_per_mm2;
    let smin =
        (input.short_circuit_current_a * input.fault_duration_s.sqrt()) / input.thermal_coefficient;

    CableSizingResult {
        nominal_current_a: im,
        post_fault_current_a: impa,
        economic_section_mm2: sek,
        min_thermal_section_mm2: smin,
        recommended_economic_section_mm2: suggest_standard_section(sek),
        recommended_thermal_section_mm2: suggest_standard_section(smin),
    }
}

impl CableSizingResult {
    pub fn report(&self) -> ModuleReport {
        ModuleReport::new("MODULE 1 RESULTS").group(vec![
            ReportLine::new("Im", self.nominal_current_a, "A", 2),
            ReportLine::new("Impa", self.post_fault_current_a, "A", 2),
            ReportLine::new("Sek", self.economic_section_mm2, "mm2", 2),
            ReportLine::new("Smin", self.min_thermal_section_mm2, "mm2", 2),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_section_is_smallest_not_below_requirement() {
        assert_eq!(suggest_standard_section(0.0), 16);
        assert_eq!(suggest_standard_section(16.0), 16);
        assert_eq!(suggest_standard_section(16.01), 25);
        assert_eq!(suggest_standard_section(26.81), 35);
        assert_eq!(suggest_standard_section(42.97), 50);
        assert_eq!(suggest_standard_section(185.0), 185);
    }

    #[test]
    fn standard_section_caps_at_largest() {
        assert_eq!(suggest_standard_section(240.5), 240);
        assert_eq!(suggest_standard_section(f64::INFINITY), 240);
        assert_eq!(suggest_standard_section(f64::NAN), 240);
        assert_eq!(suggest_standard_section(f64::NEG_INFINITY), 16);
    }
}
