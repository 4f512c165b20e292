// ============================================================================
// ANALYTICS (SIMULADAS) - Desglose de clicks generado en el cliente
// ============================================================================
// El backend solo guarda el contador total de clicks; el desglose se simula
// a partir de ese total para la página de analytics. La aleatoriedad se
// inyecta para poder testear la distribución.
// ============================================================================

use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct DayClicks {
    pub date: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedCount {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnalytics {
    pub clicks_per_day: Vec<DayClicks>,
    pub sources: Vec<NamedCount>,
    pub devices: Vec<NamedCount>,
    pub countries: Vec<NamedCount>,
}

const DAYS: i64 = 7;

/// Generar el desglose simulado a partir del total real de clicks.
/// `rand` devuelve valores en [0, 1) (en el navegador: js_sys::Math::random).
pub fn generate_analytics(
    clicks: u64,
    today: NaiveDate,
    rand: &mut dyn FnMut() -> f64,
) -> LinkAnalytics {
    let mut clicks_per_day = Vec::with_capacity(DAYS as usize);
    let mut remaining = clicks as i64;

    for i in (0..DAYS).rev() {
        let date = today - Duration::days(i);
        let day_clicks = if i == 0 {
            remaining
        } else {
            (rand() * (remaining as f64 / (i + 1) as f64) * 1.5).floor() as i64
        };
        remaining -= day_clicks;
        clicks_per_day.push(DayClicks {
            date: date.format("%b %-d").to_string(),
            clicks: day_clicks.max(0) as u64,
        });
    }

    let share = |ratio: f64| (clicks as f64 * ratio).floor() as u64;

    let sources = vec![
        NamedCount { name: "Direct".to_string(), value: share(0.4) },
        NamedCount { name: "Social".to_string(), value: share(0.25) },
        NamedCount { name: "Referral".to_string(), value: share(0.2) },
        NamedCount { name: "Email".to_string(), value: share(0.15) },
    ];

    let devices = vec![
        NamedCount { name: "Desktop".to_string(), value: share(0.45) },
        NamedCount { name: "Mobile".to_string(), value: share(0.45) },
        NamedCount { name: "Tablet".to_string(), value: share(0.1) },
    ];

    let countries = vec![
        NamedCount { name: "United States".to_string(), value: share(0.35) },
        NamedCount { name: "Vietnam".to_string(), value: share(0.2) },
        NamedCount { name: "United Kingdom".to_string(), value: share(0.15) },
        NamedCount { name: "Germany".to_string(), value: share(0.1) },
        NamedCount { name: "Others".to_string(), value: share(0.2) },
    ];

    LinkAnalytics { clicks_per_day, sources, devices, countries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[test]
    fn test_seven_days_ending_today() {
        let mut rand = || 0.5;
        let analytics = generate_analytics(100, date(), &mut rand);
        assert_eq!(analytics.clicks_per_day.len(), 7);
        assert_eq!(analytics.clicks_per_day[0].date, "Mar 4");
        assert_eq!(analytics.clicks_per_day[6].date, "Mar 10");
    }

    #[test]
    fn test_daily_total_never_exceeds_clicks() {
        let mut rand = || 0.99;
        let analytics = generate_analytics(500, date(), &mut rand);
        let total: u64 = analytics.clicks_per_day.iter().map(|d| d.clicks).sum();
        assert!(total <= 500);
    }

    #[test]
    fn test_zero_rand_puts_everything_on_today() {
        let mut rand = || 0.0;
        let analytics = generate_analytics(42, date(), &mut rand);
        let last = analytics.clicks_per_day.last().unwrap();
        assert_eq!(last.clicks, 42);
        assert!(analytics.clicks_per_day[..6].iter().all(|d| d.clicks == 0));
    }

    #[test]
    fn test_breakdown_shares() {
        let mut rand = || 0.0;
        let analytics = generate_analytics(100, date(), &mut rand);
        assert_eq!(analytics.sources[0].value, 40);
        assert_eq!(analytics.devices[2].value, 10);
        assert_eq!(analytics.countries[0].value, 35);
    }

    #[test]
    fn test_zero_clicks() {
        let mut rand = || 0.7;
        let analytics = generate_analytics(0, date(), &mut rand);
        assert!(analytics.clicks_per_day.iter().all(|d| d.clicks == 0));
        assert!(analytics.sources.iter().all(|s| s.value == 0));
    }
}
