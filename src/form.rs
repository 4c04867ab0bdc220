//! 폼 입력 18개 항목과 모듈별 입력 구조체로의 변환.

use serde::{Deserialize, Serialize};

use crate::network::{CableSizingInput, ShortCircuitInput, SubstationModesInput};
use crate::parse::parse_or_zero;

/// 폼 필드 이름과 화면 라벨.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
}

const fn field(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label }
}

/// 모듈 1 (케이블 선정) 필드
pub const CABLE_SIZING_FIELDS: [FieldSpec; 6] = [
    field("sm", "Sm"),
    field("unom", "Unom"),
    field("ik", "Ik"),
    field("tf", "tf"),
    field("ct", "Ct"),
    field("jek", "jek"),
];

/// 모듈 2 (10kV 단락) 필드
pub const SHORT_CIRCUIT_FIELDS: [FieldSpec; 4] = [
    field("sk", "Sk"),
    field("ucn", "Ucn"),
    field("snomt", "SnomT"),
    field("uk", "Uk"),
];

/// 모듈 3 (변전소 운전모드) 필드
pub const SUBSTATION_FIELDS: [FieldSpec; 8] = [
    field("rcn", "Rc.n"),
    field("xcn", "Xc.n"),
    field("rcmin", "Rc.min"),
    field("xcmin", "Xc.min"),
    field("uvn", "Uvn"),
    field("unn", "Unn"),
    field("snomt3", "SnomT"),
    field("ukmax", "Uk.max"),
];

/// 제출된 원문 값을 그대로 담는다. 없는 항목은 빈 문자열이다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcForm {
    pub sm: String,
    pub unom: String,
    pub ik: String,
    pub tf: String,
    pub ct: String,
    pub jek: String,
    pub sk: String,
    pub ucn: String,
    pub snomt: String,
    pub uk: String,
    pub rcn: String,
    pub xcn: String,
    pub rcmin: String,
    pub xcmin: String,
    pub uvn: String,
    pub unn: String,
    pub snomt3: String,
    pub ukmax: String,
}

impl CalcForm {
    /// `LOAD DATASET` 버튼이 채우는 기준 데이터.
    pub fn reference_dataset() -> Self {
        let mut form = Self::default();
        for (name, value) in [
            ("sm", "1300"),
            ("unom", "10"),
            ("ik", "2500"),
            ("tf", "2.5"),
            ("ct", "92"),
            ("jek", "1.4"),
            ("sk", "200"),
            ("ucn", "10.5"),
            ("snomt", "6.3"),
            ("uk", "10.5"),
            ("rcn", "10.65"),
            ("xcn", "24.02"),
            ("rcmin", "34.88"),
            ("xcmin", "65.68"),
            ("uvn", "115"),
            ("unn", "11"),
            ("snomt3", "6.3"),
            ("ukmax", "11.1"),
        ] {
            form.set(name, value);
        }
        form
    }

    /// url-encoded 키/값 쌍에서 폼을 만든다.
    ///
    /// 같은 키가 여러 번 오면 첫 번째 값을 쓴다. 모르는 키는 무시한다.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        let mut seen: Vec<&'static str> = Vec::new();
        for (key, value) in pairs {
            let Some(spec) = Self::fields().find(|spec| spec.name == key.as_ref()) else {
                continue;
            };
            if seen.contains(&spec.name) {
                continue;
            }
            seen.push(spec.name);
            form.set(spec.name, value);
        }
        form
    }

    /// 18개 필드 정의를 화면 순서대로 돌려준다.
    pub fn fields() -> impl Iterator<Item = &'static FieldSpec> {
        CABLE_SIZING_FIELDS
            .iter()
            .chain(SHORT_CIRCUIT_FIELDS.iter())
            .chain(SUBSTATION_FIELDS.iter())
    }

    /// 필드 이름으로 원문 값을 찾는다.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "sm" => &self.sm,
            "unom" => &self.unom,
            "ik" => &self.ik,
            "tf" => &self.tf,
            "ct" => &self.ct,
            "jek" => &self.jek,
            "sk" => &self.sk,
            "ucn" => &self.ucn,
            "snomt" => &self.snomt,
            "uk" => &self.uk,
            "rcn" => &self.rcn,
            "xcn" => &self.xcn,
            "rcmin" => &self.rcmin,
            "xcmin" => &self.xcmin,
            "uvn" => &self.uvn,
            "unn" => &self.unn,
            "snomt3" => &self.snomt3,
            "ukmax" => &self.ukmax,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// 필드 이름으로 값을 설정한다. 모르는 이름이면 `false`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "sm" => &mut self.sm,
            "unom" => &mut self.unom,
            "ik" => &mut self.ik,
            "tf" => &mut self.tf,
            "ct" => &mut self.ct,
            "jek" => &mut self.jek,
            "sk" => &mut self.sk,
            "ucn" => &mut self.ucn,
            "snomt" => &mut self.snomt,
            "uk" => &mut self.uk,
            "rcn" => &mut self.rcn,
            "xcn" => &mut self.xcn,
            "rcmin" => &mut self.rcmin,
            "xcmin" => &mut self.xcmin,
            "uvn" => &mut self.uvn,
            "unn" => &mut self.unn,
            "snomt3" => &mut self.snomt3,
            "ukmax" => &mut self.ukmax,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn cable_sizing_input(&self) -> CableSizingInput {
        CableSizingInput {
            apparent_power_kva: parse_or_zero(&self.sm),
            nominal_voltage_kv: parse_or_zero(&self.unom),
            short_circuit_current_a: parse_or_zero(&self.ik),
            fault_duration_s: parse_or_zero(&self.tf),
            thermal_coefficient: parse_or_zero(&self.ct),
            economic_current_density_a_per_mm2: parse_or_zero(&self.jek),
        }
    }

    pub fn short_circuit_input(&self) -> ShortCircuitInput {
        ShortCircuitInput {
            grid_short_circuit_power_mva: parse_or_zero(&self.sk),
            nominal_voltage_kv: parse_or_zero(&self.ucn),
            transformer_rating_mva: parse_or_zero(&self.snomt),
            impedance_voltage_percent: parse_or_zero(&self.uk),
        }
    }

    pub fn substation_modes_input(&self) -> SubstationModesInput {
        SubstationModesInput {
            grid_resistance_normal_ohm: parse_or_zero(&self.rcn),
            grid_reactance_normal_ohm: parse_or_zero(&self.xcn),
            grid_resistance_min_ohm: parse_or_zero(&self.rcmin),
            grid_reactance_min_ohm: parse_or_zero(&self.xcmin),
            high_voltage_kv: parse_or_zero(&self.uvn),
            low_voltage_kv: parse_or_zero(&self.unn),
            transformer_rating_mva: parse_or_zero(&self.snomt3),
            max_impedance_voltage_percent: parse_or_zero(&self.ukmax),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_round_trips_through_get_and_set() {
        let mut form = CalcForm::default();
        for spec in CalcForm::fields() {
            assert!(form.set(spec.name, format!("v-{}", spec.name)));
        }
        for spec in CalcForm::fields() {
            assert_eq!(form.get(spec.name), Some(format!("v-{}", spec.name).as_str()));
        }
        assert_eq!(CalcForm::fields().count(), 18);
        assert!(!form.set("bogus", "1"));
        assert_eq!(form.get("bogus"), None);
    }

    #[test]
    fn first_value_wins_and_unknown_keys_are_dropped() {
        let form = CalcForm::from_pairs([
            ("sm", "1300"),
            ("sm", "999"),
            ("extra", "x"),
            ("ukmax", "11.1"),
        ]);
        assert_eq!(form.sm, "1300");
        assert_eq!(form.ukmax, "11.1");
        assert_eq!(form.unom, "");
    }

    #[test]
    fn missing_fields_parse_to_zero() {
        let form = CalcForm::from_pairs([("sm", "1300"), ("unom", "ten")]);
        let input = form.cable_sizing_input();
        assert_eq!(input.apparent_power_kva, 1300.0);
        assert_eq!(input.nominal_voltage_kv, 0.0);
        assert_eq!(input.economic_current_density_a_per_mm2, 0.0);
    }

    #[test]
    fn reference_dataset_maps_to_module_inputs() {
        let form = CalcForm::reference_dataset();
        let sub = form.substation_modes_input();
        assert_eq!(sub.high_voltage_kv, 115.0);
        assert_eq!(sub.low_voltage_kv, 11.0);
        assert_eq!(sub.max_impedance_voltage_percent, 11.1);
        let sc = form.short_circuit_input();
        assert_eq!(sc.grid_short_circuit_power_mva, 200.0);
        assert_eq!(sc.transformer_rating_mva, 6.3);
    }

    #[test]
    fn each_field_feeds_its_own_input() {
        let names = [
            "sm", "unom", "ik", "tf", "ct", "jek", "sk", "ucn", "snomt", "uk", "rcn", "xcn",
            "rcmin", "xcmin", "uvn", "unn", "snomt3", "ukmax",
        ];
        let form = CalcForm::from_pairs(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| (*name, (i + 1).to_string())),
        );

        assert_eq!(
            form.cable_sizing_input(),
            CableSizingInput {
                apparent_power_kva: 1.0,
                nominal_voltage_kv: 2.0,
                short_circuit_current_a: 3.0,
                fault_duration_s: 4.0,
                thermal_coefficient: 5.0,
                economic_current_density_a_per_mm2: 6.0,
            }
        );
        assert_eq!(
            form.short_circuit_input(),
            ShortCircuitInput {
                grid_short_circuit_power_mva: 7.0,
                nominal_voltage_kv: 8.0,
                transformer_rating_mva: 9.0,
                impedance_voltage_percent: 10.0,
            }
        );
        assert_eq!(
            form.substation_modes_input(),
            SubstationModesInput {
                grid_resistance_normal_ohm: 11.0,
                grid_reactance_normal_ohm: 12.0,
                grid_resistance_min_ohm: 13.0,
                grid_reactance_min_ohm: 14.0,
                high_voltage_kv: 15.0,
                low_voltage_kv: 16.0,
                transformer_rating_mva: 17.0,
                max_impedance_voltage_percent: 18.0,
            }
        );
    }
}
