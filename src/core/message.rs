use crate::domain::model::LeadForm;
use chrono::FixedOffset;

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the lead as the operator-facing chat message.
///
/// The submission time is shown in `dd.mm.yyyy, HH:MM:SS` (uk-UA) at `offset`.
pub fn format_lead_message(lead: &LeadForm, offset: FixedOffset, brand: &str) -> String {
    let local_time = lead.timestamp.with_timezone(&offset);

    format!(
        "🎓 Нова заявка на {brand}!\n\
         \n\
         👤 Ім'я: {first} {last}\n\
         📧 Email: {email}\n\
         📱 Телефон: {phone}\n\
         🌍 Країна: {country}\n\
         💼 Досвід: {experience}\n\
         💰 Тариф: {tariff}\n\
         \n\
         💭 Мотивація: {motivation}\n\
         \n\
         🕐 Час: {time}",
        brand = escape_html(brand),
        first = escape_html(&lead.first_name),
        last = escape_html(&lead.last_name),
        email = escape_html(&lead.email),
        phone = escape_html(&lead.phone),
        country = escape_html(&lead.country),
        experience = escape_html(&lead.experience),
        tariff = escape_html(&lead.selected_tariff),
        motivation = escape_html(&lead.motivation),
        time = local_time.format("%d.%m.%Y, %H:%M:%S"),
    )
}
