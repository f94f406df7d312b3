use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;

/// Generate an order id: `K` + local `YYYYMMDD` + 4-digit random suffix.
///
/// The suffix is not checked against existing orders; two ids generated on
/// the same day collide with probability 1/10000.
pub fn generate_order_id() -> String {
    let suffix = rand::thread_rng().gen_range(0..10_000);
    order_id_for(Local::now().date_naive(), suffix)
}

/// Deterministic half of [`generate_order_id`]
pub fn order_id_for(date: NaiveDate, suffix: u16) -> String {
    format!(
        "K{:04}{:02}{:02}{:04}",
        date.year(),
        date.month(),
        date.day(),
        suffix % 10_000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_for_pads_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
        assert_eq!(order_id_for(date, 7), "K202501040007");
        assert_eq!(order_id_for(date, 9999), "K202501049999");
    }

    #[test]
    fn test_generate_order_id_shape() {
        let id = generate_order_id();
        assert_eq!(id.len(), 13);
        assert!(id.starts_with('K'));
        assert!(id[1..].chars().all(|c| c.is_ascii_digit()));
        assert!(NaiveDate::parse_from_str(&id[1..9], "%Y%m%d").is_ok());
    }
}
