//! Stats poller: fetches dashboard statistics and updates the display

use std::sync::Arc;

use serde::Deserialize;

use crate::io::HttpClient;
use crate::port::{DisplayPort, StatField};

/// One statistics payload from the proxy, as served by `/api/stats`.
/// Not retained between polls; each poll overwrites the displayed values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    pub total_requests: u64,
    pub success_rate: f64,
    pub avg_response_time: f64,
}

/// Fetches the statistics endpoint and writes the three stat slots
pub struct StatsPoller {
    http: Arc<dyn HttpClient>,
    display: Arc<dyn DisplayPort>,
    stats_url: String,
}

impl StatsPoller {
    pub fn new(http: Arc<dyn HttpClient>, display: Arc<dyn DisplayPort>, stats_url: String) -> Self {
        Self {
            http,
            display,
            stats_url,
        }
    }

    /// Fetch the latest statistics and write them into the stat slots.
    /// Any failure is logged and swallowed; the display is left untouched
    /// and no retry is scheduled. Overlapping calls are last-write-wins.
    pub async fn update(&self) {
        match self.fetch().await {
            Ok(snapshot) => {
                self.display
                    .set_stat(StatField::TotalRequests, &snapshot.total_requests.to_string());
                self.display
                    .set_stat(StatField::SuccessRate, &format!("{}%", snapshot.success_rate));
                self.display.set_stat(
                    StatField::AvgResponseTime,
                    &format!("{}ms", snapshot.avg_response_time),
                );
            }
            Err(e) => {
                tracing::warn!("Failed to update stats: {}", e);
            }
        }
    }

    async fn fetch(&self) -> crate::Result<StatsSnapshot> {
        let response = self.http.get(&self.stats_url).await?;
        if response.status != 200 {
            return Err(crate::ConsoleError::Http(format!(
                "Stats endpoint returned status {}",
                response.status
            )));
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{HttpResponse, MockHttpClient};
    use crate::port::MockDisplayPort;
    use mockall::predicate::eq;

    const STATS_URL: &str = "http://127.0.0.1:8081/api/stats";

    fn stats_body() -> String {
        r#"{"total_requests": 1234, "success_rate": 98.5, "avg_response_time": 45.2}"#.to_string()
    }

    #[tokio::test]
    async fn update_writes_all_three_slots() {
        let mut http = MockHttpClient::new();
        http.expect_get().with(eq(STATS_URL)).returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    body: stats_body(),
                })
            })
        });

        let mut display = MockDisplayPort::new();
        display
            .expect_set_stat()
            .with(eq(StatField::TotalRequests), eq("1234"))
            .times(1)
            .return_const(());
        display
            .expect_set_stat()
            .with(eq(StatField::SuccessRate), eq("98.5%"))
            .times(1)
            .return_const(());
        display
            .expect_set_stat()
            .with(eq(StatField::AvgResponseTime), eq("45.2ms"))
            .times(1)
            .return_const(());

        let poller = StatsPoller::new(Arc::new(http), Arc::new(display), STATS_URL.to_string());
        poller.update().await;
    }

    #[tokio::test]
    async fn network_failure_leaves_display_untouched() {
        let mut http = MockHttpClient::new();
        http.expect_get().returning(|_| {
            Box::pin(async { Err(crate::ConsoleError::Http("connection refused".to_string())) })
        });

        // No expectations: any display call would panic the test
        let display = MockDisplayPort::new();

        let poller = StatsPoller::new(Arc::new(http), Arc::new(display), STATS_URL.to_string());
        poller.update().await;
    }

    #[tokio::test]
    async fn error_status_leaves_display_untouched() {
        let mut http = MockHttpClient::new();
        http.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 500,
                    body: "<html>Internal Server Error</html>".to_string(),
                })
            })
        });

        let display = MockDisplayPort::new();

        let poller = StatsPoller::new(Arc::new(http), Arc::new(display), STATS_URL.to_string());
        poller.update().await;
    }

    #[tokio::test]
    async fn malformed_body_leaves_display_untouched() {
        let mut http = MockHttpClient::new();
        http.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    body: "not json".to_string(),
                })
            })
        });

        let display = MockDisplayPort::new();

        let poller = StatsPoller::new(Arc::new(http), Arc::new(display), STATS_URL.to_string());
        poller.update().await;
    }

    #[test]
    fn snapshot_parses_the_wire_format() {
        let snapshot: StatsSnapshot = serde_json::from_str(&stats_body()).unwrap();
        assert_eq!(
            snapshot,
            StatsSnapshot {
                total_requests: 1234,
                success_rate: 98.5,
                avg_response_time: 45.2,
            }
        );
    }
}
