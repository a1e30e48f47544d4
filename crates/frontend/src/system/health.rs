use contracts::system::health::HealthStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::config::HEALTH_CHECK_URL;
use crate::shared::http::{ApiError, HttpClient};

/// `GET /health`; lives outside the `/api` prefix
pub async fn health_check() -> Result<HealthStatus, ApiError> {
    HttpClient::default().get_absolute(HEALTH_CHECK_URL).await
}

#[derive(Debug, Clone, PartialEq)]
pub enum Health {
    Checking,
    Up,
    Down(String),
}

impl Health {
    pub fn from_result(result: Result<HealthStatus, ApiError>) -> Self {
        match result {
            Ok(status) if status.is_ok() => Self::Up,
            Ok(status) => Self::Down(format!("status '{}'", status.status)),
            Err(e) => Self::Down(e.to_string()),
        }
    }
}

/// Backend availability badge; click to re-check
#[component]
pub fn HealthIndicator() -> impl IntoView {
    let health = RwSignal::new(Health::Checking);

    let check = move || {
        health.set(Health::Checking);
        spawn_local(async move {
            health.set(Health::from_result(health_check().await));
        });
    };
    check();

    view! {
        <span class="health-indicator" title="Click to re-check" style="cursor: pointer;" on:click=move |_| check()>
            {move || match health.get() {
                Health::Checking => view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Backend..."</Badge>
                }.into_any(),
                Health::Up => view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Backend OK"</Badge>
                }.into_any(),
                Health::Down(reason) => view! {
                    <span title=reason>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Backend down"</Badge>
                    </span>
                }.into_any(),
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_from_result() {
        let ok = HealthStatus { status: "ok".into() };
        assert_eq!(Health::from_result(Ok(ok)), Health::Up);

        let degraded = HealthStatus { status: "degraded".into() };
        assert_eq!(
            Health::from_result(Ok(degraded)),
            Health::Down("status 'degraded'".into())
        );

        let err = Health::from_result(Err(ApiError::Timeout(10_000)));
        assert!(matches!(err, Health::Down(_)));
    }
}
