use serde::Serialize;

use crate::report::{ModuleReport, ReportLine};

/// 변전소 정상/최소 운전모드 단락 계산 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstationModesInput {
    /// 정상모드 계통 저항 Rc.n [Ohm]
    pub grid_resistance_normal_ohm: f64,
    /// 정상모드 계통 리액턴스 Xc.n [Ohm]
    pub grid_reactance_normal_ohm: f64,
    /// 최소모드 계통 저항 Rc.min [Ohm]
    pub grid_resistance_min_ohm: f64,
    /// 최소모드 계통 리액턴스 Xc.min [Ohm]
    pub grid_reactance_min_ohm: f64,
    /// 고압측 전압 Uvn [kV]
    pub high_voltage_kv: f64,
    /// 저압측 전압 Unn [kV]
    pub low_voltage_kv: f64,
    /// 변압기 정격용량 SnomT [MVA]
    pub transformer_rating_mva: f64,
    /// 변압기 최대 임피던스 전압 Uk.max [%]
    pub max_impedance_voltage_percent: f64,
}

/// 한 운전모드의 저압측 환산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeResult {
    /// 고압측 기준 저항 [Ohm]
    pub resistance_ohm: f64,
    /// 고압측 기준 리액턴스 (변압기 포함) [Ohm]
    pub reactance_ohm: f64,
    /// 저압측 환산 저항 Rsh [Ohm]
    pub referred_resistance_ohm: f64,
    /// 저압측 환산 리액턴스 Xsh [Ohm]
    pub referred_reactance_ohm: f64,
    /// 저압측 환산 임피던스 Zsh [Ohm]
    pub impedance_ohm: f64,
    /// 3상 단락전류 I(3)sh [A]
    pub three_phase_current_a: f64,
    /// 2상 단락전류 I(2)sh [A]
    pub two_phase_current_a: f64,
}

/// 변전소 운전모드 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubstationModesResult {
    /// 변압기 리액턴스 Xt [Ohm], 고압측 기준
    pub transformer_reactance_ohm: f64,
    /// 전압비 제곱 환산계수 Kpr
    pub referral_factor: f64,
    pub normal: ModeResult,
    pub minimum: ModeResult,
}

/// 고압측 R, X를 저압측으로 환산하고 3상/2상 단락전류를 구한다.
pub fn compute_substation_modes(input: SubstationModesInput) -> SubstationModesResult {
    let xt = (input.max_impedance_voltage_percent * input.high_voltage_kv.powi(2))
        / (100.0 * input.transformer_rating_mva);
    let kpr = input.low_voltage_kv.powi(2) / input.high_voltage_kv.powi(2);

    let normal = refer_mode(
        input.grid_resistance_normal_ohm,
        input.grid_reactance_normal_ohm + xt,
        kpr,
        input.low_voltage_kv,
    );
    let minimum = refer_mode(
        input.grid_resistance_min_ohm,
        input.grid_reactance_min_ohm + xt,
        kpr,
        input.low_voltage_kv,
    );

    SubstationModesResult {
        transformer_reactance_ohm: xt,
        referral_factor: kpr,
        normal,
        minimum,
    }
}

fn refer_mode(r: f64, x: f64, kpr: f64, low_voltage_kv: f64) -> ModeResult {
    let sqrt3 = 3f64.sqrt();
    let rsh = r * kpr;
    let xsh = x * kpr;
    let zsh = (rsh.powi(2) + xsh.powi(2)).sqrt();
    let i3 = (low_voltage_kv * 1000.0) / (sqrt3 * zsh);
    // 2상 단락전류는 3상 값의 √3/2
    let i2 = i3 * (sqrt3 / 2.0);

    ModeResult {
        resistance_ohm: r,
        reactance_ohm: x,
        referred_resistance_ohm: rsh,
        referred_reactance_ohm: xsh,
        impedance_ohm: zsh,
        three_phase_current_a: i3,
        two_phase_current_a: i2,
    }
}

impl SubstationModesResult {
    pub fn report(&self) -> ModuleReport {
        ModuleReport::new("MODULE 3 RESULTS")
            .group(vec![
                ReportLine::new("Zsh.n", self.normal.impedance_ohm, "Ohm", 3),
                ReportLine::new("I(3)sh.n", self.normal.three_phase_current_a, "A", 0),
                ReportLine::new("I(2)sh.n", self.normal.two_phase_current_a, "A", 0),
            ])
            .group(vec![
                ReportLine::new("Zsh.min", self.minimum.impedance_ohm, "Ohm", 3),
                ReportLine::new("I(3)sh.min", self.minimum.three_phase_current_a, "A", 0),
                ReportLine::new("I(2)sh.min", self.minimum.two_phase_current_a, "A", 0),
            ])
    }
}
