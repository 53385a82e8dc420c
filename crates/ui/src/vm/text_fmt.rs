/// Decode HTML character entities in provider text so it can be rendered as plain text.
///
/// Markup is never interpreted; a literal `<b>` stays visible as text.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}
