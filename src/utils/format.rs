// ============================================================================
// FORMAT HELPERS - Fechas y URLs para la UI
// ============================================================================

use chrono::{DateTime, Utc};
use urlencoding::encode;
use crate::utils::constants::QR_IMAGE_ENDPOINT;

/// Formatear una fecha ISO-8601 como "Jan 5, 2026" para las cards y tablas
pub fn format_date(date_string: &str) -> String {
    match DateTime::parse_from_rfc3339(date_string) {
        Ok(date) => date.with_timezone(&Utc).format("%b %-d, %Y").to_string(),
        Err(_) => "Invalid date".to_string(),
    }
}

/// Truncar una URL larga para mostrarla en una card
pub fn truncate_url(url: &str, max_length: usize) -> String {
    if url.chars().count() > max_length {
        let truncated: String = url.chars().take(max_length).collect();
        format!("{}...", truncated)
    } else {
        url.to_string()
    }
}

/// URL corta completa a partir del short code
/// (custom_domain reemplaza al backend solo para display)
pub fn short_url(short_code: &str, custom_domain: Option<&str>) -> String {
    let base = custom_domain.unwrap_or(crate::utils::constants::BACKEND_URL);
    format!("{}/{}", base.trim_end_matches('/'), short_code)
}

/// URL de la imagen QR para un link (generación delegada al endpoint externo)
pub fn qr_image_url(url: &str, size: u32) -> String {
    format!("{}?size={}x{}&data={}", QR_IMAGE_ENDPOINT, size, size, encode(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-05T10:30:00.000Z"), "Jan 5, 2026");
        assert_eq!(format_date("no-es-fecha"), "Invalid date");
    }

    #[test]
    fn test_truncate_url() {
        assert_eq!(truncate_url("https://a.com", 50), "https://a.com");
        let long = "https://example.com/una-ruta-muy-larga-que-no-cabe";
        let truncated = truncate_url(long, 20);
        assert_eq!(truncated.chars().count(), 23);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_short_url_with_custom_domain() {
        assert_eq!(short_url("abc123", Some("https://go.acme.io/")), "https://go.acme.io/abc123");
    }

    #[test]
    fn test_qr_image_url_encodes_data() {
        let url = qr_image_url("https://example.com/?a=1&b=2", 200);
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data="));
        assert!(url.contains("data=https%3A%2F%2Fexample.com"));
        assert!(!url[url.find("data=").unwrap()..].contains('&'));
    }
}
