use contracts::usecases::u501_execute_rule::{ExecuteResponse, ExecutionFlag};

/// Result of one record in a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct RecordResult {
    pub label: String,
    pub outcome: Result<ExecuteResponse, String>,
}

impl RecordResult {
    pub fn flag(&self) -> ExecutionFlag {
        match &self.outcome {
            Ok(resp) => resp.outcome(),
            Err(_) => ExecutionFlag::Error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total_deduct: i64,
    pub total_duration_ms: u64,
}

impl BatchSummary {
    /// Share of evaluated records that passed, in percent
    pub fn pass_rate(&self) -> Option<f64> {
        let evaluated = self.passed + self.failed;
        (evaluated > 0).then(|| self.passed as f64 * 100.0 / evaluated as f64)
    }
}

pub fn summarize(results: &[RecordResult]) -> BatchSummary {
    let mut summary = BatchSummary {
        total: results.len(),
        ..Default::default()
    };
    for result in results {
        match result.flag() {
            ExecutionFlag::Pass => summary.passed += 1,
            ExecutionFlag::Fail => summary.failed += 1,
            ExecutionFlag::Skipped => summary.skipped += 1,
            ExecutionFlag::Error | ExecutionFlag::Unknown(_) => summary.errors += 1,
        }
        if let Ok(resp) = &result.outcome {
            summary.total_deduct += resp.effective_deduct();
            summary.total_duration_ms += resp.duration_ms.unwrap_or(0);
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(flag: i32, deduct: i64, duration: u64) -> ExecuteResponse {
        let passed = match flag {
            1 => Some(true),
            0 => Some(false),
            _ => None,
        };
        serde_json::from_value(json!({
            "rule_id": 1,
            "rule_name": "Admission note present",
            "passed": passed,
            "flag": flag,
            "deduct": deduct,
            "duration_ms": duration
        }))
        .unwrap()
    }

    fn ok(label: &str, flag: i32, deduct: i64) -> RecordResult {
        RecordResult {
            label: label.into(),
            outcome: Ok(response(flag, deduct, 10)),
        }
    }

    #[test]
    fn test_summary_counts_and_deduct() {
        let results = vec![
            ok("a", 1, 5),
            ok("b", 0, 5),
            ok("c", 0, 3),
            ok("d", 2, 5),
            ok("e", -1, 5),
            RecordResult {
                label: "f".into(),
                outcome: Err("timeout".into()),
            },
        ];
        let summary = summarize(&results);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.total_deduct, 8);
        assert_eq!(summary.total_duration_ms, 50);
    }

    #[test]
    fn test_pass_rate_ignores_skipped_and_errors() {
        let summary = summarize(&[ok("a", 1, 0), ok("b", 0, 0), ok("c", 2, 0)]);
        assert_eq!(summary.pass_rate(), Some(50.0));
        assert_eq!(summarize(&[ok("c", 2, 0)]).pass_rate(), None);
        assert_eq!(summarize(&[]), BatchSummary::default());
    }
}
