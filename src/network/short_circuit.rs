use serde::Serialize;

use crate::report::{ModuleReport, ReportLine};

/// 10kV 모선 단락 계산 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortCircuitInput {
    /// 계통 단락용량 Sk [MVA]
    pub grid_short_circuit_power_mva: f64,
    /// 평균 공칭전압 Ucn [kV]
    pub nominal_voltage_kv: f64,
    /// 변압기 정격용량 SnomT [MVA]
    pub transformer_rating_mva: f64,
    /// 변압기 임피던스 전압 Uk [%]
    pub impedance_voltage_percent: f64,
}

/// 10kV 모선 단락 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShortCircuitResult {
    /// 계통 리액턴스 Xc [Ohm]
    pub grid_reactance_ohm: f64,
    /// 변압기 리액턴스 Xt [Ohm]
    pub transformer_reactance_ohm: f64,
    /// 합성 리액턴스 Xsum [Ohm]
    pub total_reactance_ohm: f64,
    /// 초기 3상 단락전류 Ip0 [kA]
    pub initial_current_ka: f64,
}

/// 계통과 변압기 리액턴스를 합쳐 초기 단락전류를 구한다.
///
/// Sk가 0이면 Xc가 +Inf가 되고, Ip0은 Ucn / Inf = 0으로 떨어진다.
pub fn compute_short_circuit(input: ShortCircuitInput) -> ShortCircuitResult {
    let u_squared = input.nominal_voltage_kv.powi(2);
    let xc = u_squared / input.grid_short_circuit_power_mva;
    let xt = (input.impedance_voltage_percent / 100.0) * (u_squared / input.transformer_rating_mva);
    let xsum = xc + xt;
    let ip0 = input.nominal_voltage_kv / (3f64.sqrt() * xsum);

    ShortCircuitResult {
        grid_reactance_ohm: xc,
        transformer_reactance_ohm: xt,
        total_reactance_ohm: xsum,
        initial_current_ka: ip0,
    }
}

impl ShortCircuitResult {
    pub fn report(&self) -> ModuleReport {
        ModuleReport::new("MODULE 2 RESULTS").group(vec![
            ReportLine::new("Xc", self.grid_reactance_ohm, "Ohm", 3),
            ReportLine::new("Xt", self.transformer_reactance_ohm, "Ohm", 3),
            ReportLine::new("Xsum", self.total_reactance_ohm, "Ohm", 3),
            ReportLine::new("Ip0", self.initial_current_ka, "kA", 3),
        ])
    }
}
