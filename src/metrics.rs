/// Protocol Run Metrics
///
/// Timing and outcome records for commit/open/verify runs, collected per
/// session and exported as JSON.
///
/// Core functionality includes:
/// - Per-phase timings in microseconds
/// - Session-level aggregation and a printed summary table
/// - JSON export through `serde_json`

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One protocol run.
#[derive(Clone, Debug, Serialize)]
pub struct ProtocolMetrics {
    pub protocol_name: String,
    pub test_case: String,
    pub timestamp: DateTime<Utc>,

    // Performance timing (microseconds)
    pub setup_time_us: u64,
    pub commit_time_us: u64,
    pub prove_time_us: u64,
    pub verify_time_us: u64,

    // Inputs
    pub srs_length: usize,
    pub payload_bytes: usize,

    // Verification results
    pub verification_success: bool,
    pub expected_success: bool,
    pub commitment_fingerprint: Option<String>,
}

impl ProtocolMetrics {
    /// Create new metrics instance for a specific test
    pub fn new(protocol_name: &str, test_case: &str) -> Self {
        Self {
            protocol_name: protocol_name.to_string(),
            test_case: test_case.to_string(),
            timestamp: Utc::now(),
            setup_time_us: 0,
            commit_time_us: 0,
            prove_time_us: 0,
            verify_time_us: 0,
            srs_length: 0,
            payload_bytes: 0,
            verification_success: false,
            expected_success: true,
            commitment_fingerprint: None,
        }
    }

    /// Set timing measurements
    pub fn set_timing(&mut self, setup: Duration, commit: Duration, prove: Duration, verify: Duration) {
        self.setup_time_us = setup.as_micros() as u64;
        self.commit_time_us = commit.as_micros() as u64;
        self.prove_time_us = prove.as_micros() as u64;
        self.verify_time_us = verify.as_micros() as u64;
    }

    pub fn set_inputs(&mut self, srs_length: usize, payload_bytes: usize) {
        self.srs_length = srs_length;
        self.payload_bytes = payload_bytes;
    }

    /// Set verification results
    pub fn set_verification(&mut self, success: bool, expected: bool) {
        self.verification_success = success;
        self.expected_success = expected;
    }

    /// True when the verifier decided as the test case expected.
    pub fn outcome_matches(&self) -> bool {
        self.verification_success == self.expected_success
    }

    pub fn total_time_us(&self) -> u64 {
        self.setup_time_us + self.commit_time_us + self.prove_time_us + self.verify_time_us
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Metrics collector for a session of protocol runs
#[derive(Clone, Debug, Serialize)]
pub struct MetricsCollector {
    pub session_name: String,
    pub start_time: DateTime<Utc>,
    pub metrics_history: Vec<ProtocolMetrics>,
}

impl MetricsCollector {
    pub fn new(session_name: &str) -> Self {
        Self {
            session_name: session_name.to_string(),
            start_time: Utc::now(),
            metrics_history: Vec::new(),
        }
    }

    pub fn add_metric(&mut self, metric: ProtocolMetrics) {
        self.metrics_history.push(metric);
    }

    /// Fraction of runs whose verification outcome matched the expectation.
    pub fn success_rate(&self) -> f64 {
        if self.metrics_history.is_empty() {
            return 0.0;
        }
        let matches = self
            .metrics_history
            .iter()
            .filter(|m| m.outcome_matches())
            .count();
        matches as f64 / self.metrics_history.len() as f64
    }

    pub fn avg_verify_time_us(&self) -> f64 {
        if self.metrics_history.is_empty() {
            return 0.0;
        }
        let total: u64 = self.metrics_history.iter().map(|m| m.verify_time_us).sum();
        total as f64 / self.metrics_history.len() as f64
    }

    /// Print session summary
    pub fn print_summary(&self) {
        println!("\n=== Session Summary: {} ===", self.session_name);
        println!("Total runs: {}", self.metrics_history.len());
        println!("| Test case            | Setup    | Commit   | Prove    | Verify   | Result |");
        println!("|----------------------|----------|----------|----------|----------|--------|");
        for m in &self.metrics_history {
            println!(
                "| {:20} | {:6}ms | {:6}ms | {:6}ms | {:6}ms | {:6} |",
                m.test_case,
                m.setup_time_us / 1000,
                m.commit_time_us / 1000,
                m.prove_time_us / 1000,
                m.verify_time_us / 1000,
                if m.outcome_matches() { "ok" } else { "FAIL" }
            );
        }
        println!("Outcomes as expected: {:.1}%", self.success_rate() * 100.0);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Export metrics to a JSON file
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let mut file = File::create(path.as_ref())?;
        file.write_all(self.to_json()?.as_bytes())?;
        Ok(())
    }
}
