//! Renders the downloadable contact card for a public profile.

/// Escapes a text value for embedding in a vCard property. Backslashes,
/// commas, semicolons and newlines carry meaning inside TEXT values.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a version 3.0 vCard for a profile.
///
/// The phone line is only emitted when the profile has a WhatsApp number and
/// the note line only when the bio is not empty.
pub fn render(
    display_name: &str,
    bio: &str,
    profile_url: &str,
    whatsapp_number: Option<&str>,
) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};;;;", escape(display_name)),
        format!("FN:{}", escape(display_name)),
        format!("URL:{profile_url}"),
    ];

    if let Some(number) = whatsapp_number {
        lines.push(format!("TEL;TYPE=CELL:+{number}"));
    }
    if !bio.is_empty() {
        lines.push(format!("NOTE:{}", escape(bio)));
    }

    lines.push("END:VCARD".to_string());

    let mut card = lines.join("\r\n");
    card.push_str("\r\n");
    card
}
