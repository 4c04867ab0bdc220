use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::form::{
    CalcForm, FieldSpec, CABLE_SIZING_FIELDS, SHORT_CIRCUIT_FIELDS, SUBSTATION_FIELDS,
};
use crate::network::{self, CableSizingResult};
use crate::report::ModuleReport;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CableSizing,
    ShortCircuit,
    SubstationModes,
    Dataset,
    Exit,
}

/// 터미널 입출력 묶음. 테스트에서는 메모리 버퍼를 넣는다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 메뉴 루프를 실행한다. 0 또는 입력 종료(EOF)에서 끝난다.
    pub fn run(&mut self, config: &Config) -> Result<(), AppError> {
        loop {
            match self.main_menu()? {
                MenuChoice::CableSizing => {
                    let form = self.read_fields(&CABLE_SIZING_FIELDS)?;
                    let result = network::compute_cable_sizing(form.cable_sizing_input());
                    self.print_report(&result.report())?;
                    self.print_standard_sections(&result)?;
                }
                MenuChoice::ShortCircuit => {
                    let form = self.read_fields(&SHORT_CIRCUIT_FIELDS)?;
                    let result = network::compute_short_circuit(form.short_circuit_input());
                    self.print_report(&result.report())?;
                }
                MenuChoice::SubstationModes => {
                    let form = self.read_fields(&SUBSTATION_FIELDS)?;
                    let result =
                        network::compute_substation_modes(form.substation_modes_input());
                    self.print_report(&result.report())?;
                }
                MenuChoice::Dataset => {
                    let outcome = network::calculate(&config.dataset);
                    for report in &outcome.reports {
                        self.print_report(report)?;
                    }
                    self.print_standard_sections(&outcome.results.cable_sizing)?;
                }
                MenuChoice::Exit => {
                    writeln!(self.output, "프로그램을 종료합니다.")?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// 메인 메뉴를 표시하고 선택값을 반환한다.
    pub fn main_menu(&mut self) -> Result<MenuChoice, AppError> {
        writeln!(self.output, "\n=== SC Network Analysis ===")?;
        writeln!(self.output, "1) 케이블 선정")?;
        writeln!(self.output, "2) 10kV 단락전류")?;
        writeln!(self.output, "3) 변전소 운전모드")?;
        writeln!(self.output, "4) 설정 데이터셋으로 전체 계산")?;
        writeln!(self.output, "0) 종료")?;
        loop {
            let Some(sel) = self.read_line("메뉴 선택: ")? else {
                return Ok(MenuChoice::Exit);
            };
            match sel.trim() {
                "1" => return Ok(MenuChoice::CableSizing),
                "2" => return Ok(MenuChoice::ShortCircuit),
                "3" => return Ok(MenuChoice::SubstationModes),
                "4" => return Ok(MenuChoice::Dataset),
                "0" => return Ok(MenuChoice::Exit),
                _ => writeln!(self.output, "잘못된 입력입니다. 다시 선택하세요.")?,
            }
        }
    }

    /// 필드마다 한 줄씩 읽는다. 값 해석은 폼과 같아서 숫자가 아니면 0으로 계산된다.
    fn read_fields(&mut self, fields: &[FieldSpec]) -> Result<CalcForm, AppError> {
        let mut form = CalcForm::default();
        for spec in fields {
            let value = self.read_line(&format!("{}: ", spec.label))?.unwrap_or_default();
            form.set(spec.name, value);
        }
        Ok(form)
    }

    fn print_report(&mut self, report: &ModuleReport) -> Result<(), AppError> {
        writeln!(self.output, "\n> {}:\n{}", report.title, report.render())?;
        Ok(())
    }

    /// 결과 블록 아래에 권장 표준 단면적을 덧붙인다.
    fn print_standard_sections(&mut self, result: &CableSizingResult) -> Result<(), AppError> {
        writeln!(
            self.output,
            "권장 표준 단면적: Sek -> {} mm2, Smin -> {} mm2",
            result.recommended_economic_section_mm2, result.recommended_thermal_section_mm2
        )?;
        Ok(())
    }

    /// 프롬프트를 찍고 한 줄을 읽는다. 줄바꿈 문자만 떼어낸다. EOF면 `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.trim_end_matches(&['\r', '\n'][..]).to_string();
        Ok(Some(line))
    }
}
