// ============================================================================
// LINKS VIEWMODEL - CRUD de links + composición UTM
// ============================================================================

use crate::models::ShortUrl;
use crate::services::api_client::ShortenResponse;
use crate::services::{ApiClient, ApiError, SessionStore};
use crate::utils::utm::{append_query, UtmParams};

pub struct LinksViewModel {
    api: ApiClient,
}

impl LinksViewModel {
    pub fn new(store: SessionStore) -> Self {
        Self {
            api: ApiClient::new(store),
        }
    }

    pub async fn fetch_urls(&self) -> Result<Vec<ShortUrl>, ApiError> {
        self.api.get_urls().await
    }

    /// Crear un link: compone la URL final con los UTM y elige el endpoint
    /// según custom code / sesión
    pub async fn create_link(
        &self,
        long_url: &str,
        custom_code: &str,
        utm: &UtmParams,
        authenticated: bool,
    ) -> Result<ShortenResponse, ApiError> {
        let target = compose_target_url(long_url, utm);

        if !custom_code.is_empty() {
            self.api.shorten_custom(&target, custom_code).await
        } else if authenticated {
            self.api.shorten(&target).await
        } else {
            self.api.shorten_public(&target).await
        }
    }

    /// Guardar la edición de un link: base + UTM re-armados
    pub async fn update_link(
        &self,
        id: &str,
        base_url: &str,
        utm: &UtmParams,
    ) -> Result<(), ApiError> {
        let target = compose_target_url(base_url, utm);
        self.api.update_url(id, Some(&target), None).await
    }

    pub async fn delete_link(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete_url(id).await
    }
}

/// URL final que viaja al backend: destino + query UTM codificada
pub fn compose_target_url(long_url: &str, utm: &UtmParams) -> String {
    append_query(long_url, &utm.to_query_string())
}

/// Agregados para las tarjetas de stats del dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkStats {
    pub total_links: usize,
    pub total_clicks: u64,
    pub avg_clicks: u64,
}

pub fn link_stats(urls: &[ShortUrl]) -> LinkStats {
    let total_links = urls.len();
    let total_clicks: u64 = urls.iter().map(|u| u.clicks).sum();
    let avg_clicks = if total_links > 0 {
        ((total_clicks as f64) / (total_links as f64)).round() as u64
    } else {
        0
    };
    LinkStats {
        total_links,
        total_clicks,
        avg_clicks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(clicks: u64) -> ShortUrl {
        ShortUrl {
            id: "x".to_string(),
            original_url: "https://example.com".to_string(),
            short_code: "abc".to_string(),
            clicks,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_compose_target_url() {
        let utm = UtmParams {
            source: Some("fb".to_string()),
            ..Default::default()
        };
        assert_eq!(
            compose_target_url("https://example.com", &utm),
            "https://example.com?utm_source=fb"
        );
        assert_eq!(
            compose_target_url("https://example.com", &UtmParams::default()),
            "https://example.com"
        );
    }

    #[test]
    fn test_link_stats() {
        let stats = link_stats(&[url(10), url(5), url(0)]);
        assert_eq!(stats.total_links, 3);
        assert_eq!(stats.total_clicks, 15);
        assert_eq!(stats.avg_clicks, 5);
    }

    #[test]
    fn test_link_stats_empty() {
        let stats = link_stats(&[]);
        assert_eq!(stats.total_links, 0);
        assert_eq!(stats.avg_clicks, 0);
    }
}
