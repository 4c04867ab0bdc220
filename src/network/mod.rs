//! 배전망 계산 모듈 모음.
//! 케이블 선정, 10kV 단락, 변전소 운전모드 세 가지로 구성하며 서로 독립적이다.

pub mod cable_sizing;
pub mod short_circuit;
pub mod substation_modes;

pub use cable_sizing::*;
pub use short_circuit::*;
pub use substation_modes::*;

use serde::Serialize;

use crate::form::CalcForm;
use crate::report::ModuleReport;

/// 세 모듈의 계산값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetworkResults {
    pub cable_sizing: CableSizingResult,
    pub short_circuit: ShortCircuitResult,
    pub substation_modes: SubstationModesResult,
}

/// 한 번의 제출에 대한 전체 결과. 입력 원문을 함께 돌려준다.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationOutcome {
    pub inputs: CalcForm,
    pub results: NetworkResults,
    pub reports: [ModuleReport; 3],
}

/// 폼 입력으로 세 모듈을 모두 계산한다.
pub fn calculate(form: &CalcForm) -> CalculationOutcome {
    let results = NetworkResults {
        cable_sizing: compute_cable_sizing(form.cable_sizing_input()),
        short_circuit: compute_short_circuit(form.short_circuit_input()),
        substation_modes: compute_substation_modes(form.substation_modes_input()),
    };
    tracing::debug!(
        im = results.cable_sizing.nominal_current_a,
        ip0 = results.short_circuit.initial_current_ka,
        zsh_n = results.substation_modes.normal.impedance_ohm,
        zsh_min = results.substation_modes.minimum.impedance_ohm,
        "계산 완료"
    );
    CalculationOutcome {
        inputs: form.clone(),
        reports: [
            results.cable_sizing.report(),
            results.short_circuit.report(),
            results.substation_modes.report(),
        ],
        results,
    }
}
