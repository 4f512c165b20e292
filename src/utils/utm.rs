// ============================================================================
// UTM HELPERS - Construcción y parseo de parámetros de campaña
// ============================================================================
// Lógica pura (sin DOM) para que el builder y la edición de links compartan
// el mismo comportamiento.
// ============================================================================

use urlencoding::{encode, decode};

/// Parámetros UTM estándar de una campaña
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtmParams {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
}

impl UtmParams {
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.medium.is_none()
            && self.campaign.is_none()
            && self.term.is_none()
            && self.content.is_none()
    }

    /// Construir el fragmento de query string codificado
    /// (p.ej. "utm_source=facebook&utm_medium=social")
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        let pairs = [
            ("utm_source", &self.source),
            ("utm_medium", &self.medium),
            ("utm_campaign", &self.campaign),
            ("utm_term", &self.term),
            ("utm_content", &self.content),
        ];
        for (key, value) in pairs {
            if let Some(v) = value {
                if !v.is_empty() {
                    parts.push(format!("{}={}", key, encode(v)));
                }
            }
        }
        parts.join("&")
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "utm_source" => self.source = Some(value),
            "utm_medium" => self.medium = Some(value),
            "utm_campaign" => self.campaign = Some(value),
            "utm_term" => self.term = Some(value),
            "utm_content" => self.content = Some(value),
            _ => {}
        }
    }
}

/// Agregar un fragmento de query a una URL, eligiendo `?` o `&` según
/// si la URL ya tiene query string
pub fn append_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { "&" } else { "?" };
    format!("{}{}{}", url, separator, query)
}

/// Separar una URL en su base (sin parámetros utm_*) y los UtmParams que
/// contenía. Se usa al editar un link para re-poblar el builder.
/// Los parámetros que no son utm_* se conservan en la base; el fragmento
/// (#...) se preserva al final.
pub fn split_utm(url: &str) -> (String, UtmParams) {
    let (without_fragment, fragment) = match url.find('#') {
        Some(idx) => (&url[..idx], Some(&url[idx..])),
        None => (url, None),
    };

    let (base, query) = match without_fragment.find('?') {
        Some(idx) => (&without_fragment[..idx], Some(&without_fragment[idx + 1..])),
        None => (without_fragment, None),
    };

    let mut params = UtmParams::default();
    let mut kept: Vec<String> = Vec::new();

    if let Some(query) = query {
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw_value) = match pair.find('=') {
                Some(idx) => (&pair[..idx], &pair[idx + 1..]),
                None => (pair, ""),
            };
            if key.starts_with("utm_") {
                let value = decode(raw_value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| raw_value.to_string());
                params.set(key, value);
            } else {
                kept.push(pair.to_string());
            }
        }
    }

    let mut result = base.to_string();
    if !kept.is_empty() {
        result.push('?');
        result.push_str(&kept.join("&"));
    }
    if let Some(fragment) = fragment {
        result.push_str(fragment);
    }

    (result, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_empty_fields() {
        let params = UtmParams {
            source: Some("facebook".to_string()),
            medium: Some(String::new()),
            campaign: Some("summer_sale".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query_string(),
            "utm_source=facebook&utm_campaign=summer_sale"
        );
    }

    #[test]
    fn test_query_string_encodes_values() {
        let params = UtmParams {
            campaign: Some("rebajas de verano".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_query_string(), "utm_campaign=rebajas%20de%20verano");
    }

    #[test]
    fn test_append_query_chooses_separator() {
        assert_eq!(
            append_query("https://example.com/page", "utm_source=fb"),
            "https://example.com/page?utm_source=fb"
        );
        assert_eq!(
            append_query("https://example.com/page?x=1", "utm_source=fb"),
            "https://example.com/page?x=1&utm_source=fb"
        );
        assert_eq!(append_query("https://example.com", ""), "https://example.com");
    }

    #[test]
    fn test_split_utm_strips_only_utm_params() {
        let (base, params) =
            split_utm("https://example.com/p?x=1&utm_source=fb&y=2&utm_medium=social");
        assert_eq!(base, "https://example.com/p?x=1&y=2");
        assert_eq!(params.source.as_deref(), Some("fb"));
        assert_eq!(params.medium.as_deref(), Some("social"));
        assert!(params.campaign.is_none());
    }

    #[test]
    fn test_split_utm_without_query() {
        let (base, params) = split_utm("https://example.com/page");
        assert_eq!(base, "https://example.com/page");
        assert!(params.is_empty());
    }

    #[test]
    fn test_split_utm_preserves_fragment() {
        let (base, params) = split_utm("https://example.com/p?utm_source=fb#section");
        assert_eq!(base, "https://example.com/p#section");
        assert_eq!(params.source.as_deref(), Some("fb"));
    }

    #[test]
    fn test_split_utm_decodes_values() {
        let (_, params) = split_utm("https://example.com/p?utm_campaign=summer%20sale");
        assert_eq!(params.campaign.as_deref(), Some("summer sale"));
    }

    #[test]
    fn test_build_append_split_round_trip() {
        let params = UtmParams {
            source: Some("newsletter".to_string()),
            medium: Some("email".to_string()),
            campaign: Some("q3 launch".to_string()),
            ..Default::default()
        };
        let url = append_query("https://example.com/landing", &params.to_query_string());
        let (base, parsed) = split_utm(&url);
        assert_eq!(base, "https://example.com/landing");
        assert_eq!(parsed, params);
    }
}
