//! Base64 page

use platform::html::page;

const SCRIPT: &str = r#"<script>
for (const action of ['encode', 'decode']) {
  document.getElementById('base-' + action).addEventListener('click', async () => {
    const res = await fetch('/base/convert', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ action, text: document.getElementById('base-input').value }),
    });
    const data = await res.json();
    document.getElementById('base-output').value = data.result ?? data.error;
  });
}
</script>"#;

pub fn codec_page() -> String {
    let body = format!(
        r#"<textarea id="base-input" rows="8" cols="80"></textarea>
<div>
<button id="base-encode" type="button">Encode</button>
<button id="base-decode" type="button">Decode</button>
</div>
<textarea id="base-output" rows="8" cols="80" readonly></textarea>
{SCRIPT}"#
    );
    page("Base64", &body)
}
