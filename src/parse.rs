//! 폼 문자열을 수치로 바꾸는 파서.

/// 문자열을 `f64`로 변환한다. 비어 있거나 해석할 수 없으면 0.0을 돌려준다.
///
/// 공백은 잘라내지 않는다. `" 5"`도 해석 실패로 보고 0.0이 된다.
/// 범위를 넘는 값(`1e400`)은 무한대로 해석된다.
pub fn parse_or_zero(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}
