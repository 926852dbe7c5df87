/// Static news feed endpoint
///
/// Serves a fixed set of demo news items. There is no storage, pagination,
/// or filtering behind this: the payload is assembled on each request with
/// fresh relative timestamps.
///
/// # Endpoint
///
/// ```text
/// GET /api/news
/// ```

use axum::Json;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single news item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Item ID
    pub id: u32,

    /// Headline
    pub title: String,

    /// Body text
    pub body: String,

    /// Category label
    pub category: String,

    /// Publication timestamp (RFC 3339)
    pub timestamp: DateTime<Utc>,

    /// Source attribution
    pub source: String,
}

/// News feed handler
///
/// Returns the fixed three-item demo feed, timestamped relative to the
/// request time (now, one hour ago, one day ago).
pub async fn list_news() -> Json<Vec<NewsItem>> {
    let now = Utc::now();

    Json(vec![
        NewsItem {
            id: 1,
            title: "Load Shedding Stage 4 Announced".to_string(),
            body: "Eskom has declared Stage 4 load shedding starting at 18:00 tonight due to multiple generator failures.".to_string(),
            category: "Energy".to_string(),
            timestamp: now,
            source: "EskomSePush".to_string(),
        },
        NewsItem {
            id: 2,
            title: "Heavy Rain Expected in Gauteng".to_string(),
            body: "The South African Weather Service warns of severe thunderstorms and flooding in Johannesburg and Pretoria.".to_string(),
            category: "Weather".to_string(),
            timestamp: now - Duration::hours(1),
            source: "SA Weather Service".to_string(),
        },
        NewsItem {
            id: 3,
            title: "New Job Portal Launched for Youth".to_string(),
            body: "The Department of Employment and Labour has launched a free job-matching platform for graduates.".to_string(),
            category: "Jobs".to_string(),
            timestamp: now - Duration::days(1),
            source: "Careers24".to_string(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_news_shape() {
        let Json(items) = list_news().await;

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].category, "Energy");
        assert_eq!(items[2].source, "Careers24");

        // Items are ordered newest first
        assert!(items[0].timestamp > items[1].timestamp);
        assert!(items[1].timestamp > items[2].timestamp);
    }
}
