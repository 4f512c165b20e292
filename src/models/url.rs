use serde::{Deserialize, Serialize};

/// Link acortado tal como lo devuelve el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    #[serde(rename = "_id")]
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: String,
}

impl ShortUrl {
    /// Filtro de búsqueda por URL original o short code (case-insensitive)
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.original_url.to_lowercase().contains(&q)
            || self.short_code.to_lowercase().contains(&q)
    }
}

/// Filtrar una lista de links con el texto de búsqueda
pub fn filter_urls(urls: &[ShortUrl], search: &str) -> Vec<ShortUrl> {
    if search.trim().is_empty() {
        return urls.to_vec();
    }
    urls.iter().filter(|u| u.matches(search.trim())).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(code: &str, original: &str) -> ShortUrl {
        ShortUrl {
            id: format!("id-{}", code),
            original_url: original.to_string(),
            short_code: code.to_string(),
            clicks: 0,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "_id": "64abc",
            "originalUrl": "https://example.com",
            "shortCode": "x1y2",
            "clicks": 7,
            "createdAt": "2026-02-03T12:00:00.000Z"
        }"#;
        let url: ShortUrl = serde_json::from_str(json).unwrap();
        assert_eq!(url.id, "64abc");
        assert_eq!(url.short_code, "x1y2");
        assert_eq!(url.clicks, 7);
    }

    #[test]
    fn test_filter_urls() {
        let urls = vec![
            sample("abc", "https://rust-lang.org"),
            sample("xyz", "https://example.com/docs"),
        ];
        assert_eq!(filter_urls(&urls, "").len(), 2);
        assert_eq!(filter_urls(&urls, "RUST").len(), 1);
        assert_eq!(filter_urls(&urls, "xyz").len(), 1);
        assert_eq!(filter_urls(&urls, "  docs ").len(), 1);
        assert!(filter_urls(&urls, "nada").is_empty());
    }
}
