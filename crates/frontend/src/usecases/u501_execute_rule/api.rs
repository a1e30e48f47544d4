use contracts::usecases::u501_execute_rule::{ExecuteRequest, ExecuteResponse};

use crate::shared::http::{ApiError, HttpClient};

const EXECUTE_PATH: &str = "/qc/execute";

/// Run a published rule against one medical record
pub async fn execute_rule(request: &ExecuteRequest) -> Result<ExecuteResponse, ApiError> {
    HttpClient::default().post(EXECUTE_PATH, request).await
}
