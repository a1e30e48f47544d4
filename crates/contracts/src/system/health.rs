use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_ok() {
        let h: HealthStatus = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(h.is_ok());
        let h: HealthStatus = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!h.is_ok());
    }
}
