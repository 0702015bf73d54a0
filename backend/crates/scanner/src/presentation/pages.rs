//! Scanner pages

use crate::domain::entities::{RuleMatch, ScanReport};
use platform::html::{escape, page};

pub fn dashboard_page(rules: &[String]) -> String {
    let list = if rules.is_empty() {
        "<p>No rule files found.</p>".to_string()
    } else {
        let items: String = rules
            .iter()
            .map(|r| format!("<li>{}</li>", escape(r)))
            .collect();
        format!("<ul class=\"yara-rules\">{items}</ul>")
    };

    let body = format!(
        r#"<h2>Rule files</h2>
{list}
<h2>Check a file</h2>
<form action="/yara/check" method="post" enctype="multipart/form-data">
<input type="file" name="file" required>
<button type="submit">Scan</button>
</form>
<p><a href="/yara/test-rule">Test a custom rule</a></p>"#
    );
    page("YARA scanner", &body)
}

pub fn test_rule_page() -> String {
    let body = r#"<form action="/yara/test-rule" method="post" enctype="multipart/form-data">
<label>Rule file <input type="file" name="rulefile" required></label>
<label>Target file <input type="file" name="targetfile" required></label>
<button type="submit">Test rule</button>
</form>"#;
    page("Test a YARA rule", body)
}

fn render_match(m: &RuleMatch) -> String {
    let mut out = format!(
        "<li><strong>{}</strong> <small>({})</small>",
        escape(&m.identifier),
        escape(&m.namespace)
    );

    if !m.tags.is_empty() {
        let tags: Vec<String> = m.tags.iter().map(|t| escape(t)).collect();
        out.push_str(&format!(" tags: {}", tags.join(", ")));
    }

    if !m.metadata.is_empty() {
        out.push_str("<dl>");
        for (key, value) in &m.metadata {
            out.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>",
                escape(key),
                escape(&value.to_string())
            ));
        }
        out.push_str("</dl>");
    }

    if !m.strings.is_empty() {
        out.push_str("<table><tr><th>String</th><th>Offset</th><th>Length</th></tr>");
        for s in &m.strings {
            out.push_str(&format!(
                "<tr><td>{}</td><td>0x{:x}</td><td>{}</td></tr>",
                escape(&s.identifier),
                s.offset,
                s.length
            ));
        }
        out.push_str("</table>");
    }

    out.push_str("</li>");
    out
}

/// Result fragment: file summary plus one entry per matching rule
pub fn result_fragment(report: &ScanReport) -> String {
    let matches = if report.has_matches() {
        let items: String = report.matches.iter().map(render_match).collect();
        format!("<ul class=\"yara-matches\">{items}</ul>")
    } else {
        "<p class=\"yara-clean\">No matches</p>".to_string()
    };

    format!(
        r#"<section class="yara-result">
<p>File: {name} ({size} bytes)<br>SHA-256: <code>{sha}</code></p>
{matches}
</section>"#,
        name = escape(&report.file_name),
        size = report.size,
        sha = report.sha256,
    )
}

pub fn result_page(report: &ScanReport) -> String {
    page("Scan result", &result_fragment(report))
}
