use crate::form::{
    CalcForm, FieldSpec, CABLE_SIZING_FIELDS, SHORT_CIRCUIT_FIELDS, SUBSTATION_FIELDS,
};
use crate::network::CalculationOutcome;

const STYLE: &str = r#"
body { background: #1e1e1e; color: #d4d4d4; font-family: Consolas, Monaco, monospace; display: flex; justify-content: center; padding-top: 40px; }
.main { width: 900px; background: #252526; padding: 25px; border: 1px solid #3e3e42; }
h2 { color: #4ec9b0; border-bottom: 2px solid #3e3e42; padding-bottom: 10px; margin-top: 0; }
h3 { color: #ce9178; font-size: 1.1em; }
.grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 15px; margin-bottom: 20px; }
.field { background: #333; padding: 10px; border-left: 3px solid #007acc; }
label { display: block; font-size: 0.8em; color: #9cdcfe; margin-bottom: 5px; }
input { width: 90%; background: #1e1e1e; border: 1px solid #3e3e42; color: #ce9178; padding: 5px; font-family: inherit; }
.buttons { display: flex; gap: 15px; margin-top: 20px; }
button { flex: 1; padding: 12px; border: none; font-family: inherit; font-weight: bold; cursor: pointer; }
.run { background: #007acc; color: white; }
.load { background: #3e3e42; color: #dcdcaa; }
.output { margin-top: 20px; background: #101010; border: 1px solid #444; padding: 15px; white-space: pre-wrap; color: #b5cea8; }
.value { color: #569cd6; }
"#;

/// 폼 페이지 전체를 렌더링한다.
///
/// `form`의 값은 입력 칸에 그대로(이스케이프만 해서) 다시 채워진다.
/// `outcome`이 있으면 세 모듈의 결과 블록을 폼 아래에 붙인다.
pub fn render(form: &CalcForm, outcome: Option<&CalculationOutcome>, dataset: &CalcForm) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<title>SC NETWORK ANALYSIS</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n<script>\nconst DATASET = ");
    html.push_str(&dataset_json(dataset));
    html.push_str(
        ";\nfunction loadDataset() {\n  for (const [name, value] of Object.entries(DATASET)) {\n    const el = document.getElementById(name);\n    if (el) { el.value = value; }\n  }\n}\n</script>\n</head>\n",
    );
    html.push_str("<body>\n<div class=\"main\">\n<h2>&gt;&gt; SC NETWORK ANALYSIS</h2>\n");
    html.push_str("<form action=\"/calculate\" method=\"POST\">\n");

    push_section(&mut html, "MODULE 1 Cable Selection", &CABLE_SIZING_FIELDS, form);
    push_section(&mut html, "MODULE 2 Short Circuit 10kV", &SHORT_CIRCUIT_FIELDS, form);
    push_section(&mut html, "MODULE 3 Substation Modes", &SUBSTATION_FIELDS, form);

    html.push_str("<div class=\"buttons\">\n");
    html.push_str("<button type=\"button\" class=\"load\" onclick=\"loadDataset()\">LOAD DATASET</button>\n");
    html.push_str("<button type=\"submit\" class=\"run\">EXECUTE</button>\n");
    html.push_str("</div>\n</form>\n");

    if let Some(outcome) = outcome {
        html.push_str("<div class=\"output\">");
        for (i, report) in outcome.reports.iter().enumerate() {
            if i > 0 {
                html.push_str("\n\n");
            }
            html.push_str(&format!(
                "&gt; {}:\n<span class=\"value\">{}</span>",
                escape_html(report.title),
                escape_html(&report.render())
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn push_section(html: &mut String, title: &str, fields: &[FieldSpec], form: &CalcForm) {
    html.push_str(&format!("<h3>{}</h3>\n<div class=\"grid\">\n", escape_html(title)));
    for spec in fields {
        let value = form.get(spec.name).unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"field\"><label for=\"{name}\">{label}</label><input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></div>\n",
            name = spec.name,
            label = escape_html(spec.label),
            value = escape_html(value),
        ));
    }
    html.push_str("</div>\n");
}

/// 스크립트 블록 안에 넣을 데이터셋 JSON. `</script>`로 끊기지 않게 `<`를 이스케이프한다.
fn dataset_json(dataset: &CalcForm) -> String {
    serde_json::to_string(dataset)
        .unwrap_or_else(|_| "{}".to_string())
        .replace('<', "\\u003c")
}

/// HTML 본문과 속성값에 쓸 수 있게 특수문자를 바꾼다.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
