pub const DEFAULT_COUNTRY_CODE: &str = "54";

/// Numbers this short without a country code are taken as local.
const MAX_LOCAL_LEN: usize = 11;

/// Build a WhatsApp Web link for a phone number.
///
/// Whitespace, parentheses and hyphens are dropped. A leading `+` is stripped;
/// otherwise short numbers not already starting with the country code get it
/// prepended. No validation happens: malformed input passes through.
pub fn create_whatsapp_link(telefono: &str, country_code: &str) -> String {
    if telefono.is_empty() {
        return "#".to_string();
    }

    let mut numero: String = telefono
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
        .collect();

    if let Some(rest) = numero.strip_prefix('+') {
        numero = rest.to_string();
    } else if !numero.starts_with(country_code) && numero.chars().count() <= MAX_LOCAL_LEN {
        numero = format!("{}{}", country_code, numero);
    }

    format!("https://web.whatsapp.com/send?phone={}", numero)
}
