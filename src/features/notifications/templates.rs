use serde_json::{json, Value};

/// Template parameters for the "cleaning logged" email
///
/// The recipient reads Swedish; the wording matches the rest of the
/// notification mail.
pub fn cleaning_logged_params(
    to_email: &str,
    cleaner_name: &str,
    machine_name: &str,
    machine_location: &str,
    payment_rate: f64,
    timestamp: &str,
) -> Value {
    json!({
        "to_email": to_email,
        "subject": format!("🧹 Städning Registrerad - {machine_name}"),
        "notification_type": "Städning Registrerad",
        "timestamp": timestamp,
        "message": format!(
            "👤 Städare: {cleaner_name}\n\
             🏭 Maskin: {machine_name}\n\
             📍 Plats: {machine_location}\n\
             ⏰ Tid: {timestamp}\n\
             💰 Betalning: {payment_rate} SEK"
        ),
    })
}

/// Template parameters for the "payment processed" email
pub fn payment_processed_params(
    to_email: &str,
    paid_by: &str,
    total_amount: f64,
    cleaning_count: usize,
    cleaners: &[String],
    timestamp: &str,
) -> Value {
    let cleaners_list = cleaners.join(", ");

    json!({
        "to_email": to_email,
        "subject": format!("💰 Betalning Genomförd - {total_amount} SEK"),
        "notification_type": "Betalning Genomförd",
        "timestamp": timestamp,
        "message": format!(
            "💳 Betalt av: {paid_by}\n\
             💰 Totalt belopp: {total_amount} SEK\n\
             🧹 Antal städningar: {cleaning_count}\n\
             👥 Städare: {cleaners_list}\n\
             ⏰ Betalningstid: {timestamp}"
        ),
    })
}
