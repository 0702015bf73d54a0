//! HTML Rendering Helpers
//!
//! The dashboard renders a few small pages server-side. Every piece of
//! client- or file-derived text goes through [`escape`] before it is
//! interpolated.

/// Escape text for safe interpolation into HTML element content or
/// attribute values.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Navigation entries shown on every page: (href, label)
pub const NAV: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/passgen/", "Password generator"),
    ("/base/", "Base64"),
    ("/yara/", "YARA scanner"),
];

/// Wrap a body fragment in the shared page layout.
///
/// `body` is inserted verbatim; callers escape dynamic values themselves.
pub fn page(title: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="/passgen/static/style.css">
</head>
<body>
<nav>{nav}</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}
