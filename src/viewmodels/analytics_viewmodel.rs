// ============================================================================
// ANALYTICS VIEWMODEL - Página de analytics de un short code
// ============================================================================

use chrono::NaiveDate;
use crate::models::{generate_analytics, LinkAnalytics, ShortUrl};
use crate::services::{ApiClient, ApiError, SessionStore};

pub struct AnalyticsViewModel {
    api: ApiClient,
}

impl AnalyticsViewModel {
    pub fn new(store: SessionStore) -> Self {
        Self {
            api: ApiClient::new(store),
        }
    }

    /// Buscar el link por short code dentro de los links visibles
    pub async fn fetch_link(&self, short_code: &str) -> Result<Option<ShortUrl>, ApiError> {
        let urls = self.api.get_urls().await?;
        Ok(urls.into_iter().find(|u| u.short_code == short_code))
    }

    /// Desglose simulado para la página (aleatoriedad del navegador)
    pub fn build_analytics(&self, url: &ShortUrl) -> LinkAnalytics {
        let mut rand = || js_sys::Math::random();
        generate_analytics(url.clicks, browser_today(), &mut rand)
    }
}

/// Fecha local del navegador como NaiveDate
fn browser_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
}

/// Promedio diario mostrado en la tarjeta "Avg. Daily"
pub fn avg_daily_clicks(total_clicks: u64) -> u64 {
    ((total_clicks as f64) / 7.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avg_daily_clicks() {
        assert_eq!(avg_daily_clicks(0), 0);
        assert_eq!(avg_daily_clicks(70), 10);
        assert_eq!(avg_daily_clicks(10), 1);
    }
}
