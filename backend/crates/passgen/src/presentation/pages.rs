//! Generator page

use crate::application::config::PassgenConfig;
use crate::domain::value_objects::{Complexity, PasswordLength};
use platform::html::page;

const SCRIPT: &str = r#"<script>
document.getElementById('passgen-form').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const form = ev.target;
  const body = {
    length: form.length.value,
    complexity: form.complexity.value,
    exclude: form.exclude.value.split(''),
  };
  const res = await fetch('/passgen/generate', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body),
  });
  const data = await res.json();
  document.getElementById('passgen-output').textContent = data.password ?? data.error;
});
</script>"#;

pub fn generator_page(config: &PassgenConfig) -> String {
    let options: String = [Complexity::Low, Complexity::Medium, Complexity::High]
        .iter()
        .map(|tier| {
            let selected = if *tier == config.default_complexity {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{v}"{selected}>{v}</option>"#,
                v = tier.as_str()
            )
        })
        .collect();

    let body = format!(
        r#"<form id="passgen-form">
<label>Length <input name="length" type="number" min="{min}" max="{max}" value="{len}"></label>
<label>Complexity <select name="complexity">{options}</select></label>
<label>Exclude (high only) <input name="exclude" type="text"></label>
<button type="submit">Generate</button>
</form>
<pre id="passgen-output"></pre>
{SCRIPT}"#,
        min = PasswordLength::MIN,
        max = PasswordLength::MAX,
        len = config.default_length.get(),
    );

    page("Password generator", &body)
}
