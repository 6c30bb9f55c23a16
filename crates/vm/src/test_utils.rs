//! Test utilities for `kona-vm`.

use crate::{LocalGameInputs, LogLevel, OracleLogger, Severity};
use alloy_primitives::{B256, U256};
use std::sync::Mutex;

/// An [OracleLogger] that keeps every message it receives.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    severity: Severity,
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    /// Creates a new [RecordingLogger] that reports the given severity.
    pub const fn new(severity: Severity) -> Self {
        Self { severity, records: Mutex::new(Vec::new()) }
    }

    /// Returns a copy of the recorded messages.
    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().map(|records| records.clone()).unwrap_or_default()
    }
}

impl OracleLogger for RecordingLogger {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn log(&self, level: LogLevel, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((level, message.to_string()));
        }
    }
}

/// Game inputs with each hash filled with a distinct leading byte and block number `3333`.
pub fn mock_game_inputs() -> LocalGameInputs {
    let mut l1_head = B256::ZERO;
    l1_head[0] = 0x11;
    let mut l2_head = B256::ZERO;
    l2_head[0] = 0x22;
    let mut l2_output_root = B256::ZERO;
    l2_output_root[0] = 0x33;
    let mut l2_claim = B256::ZERO;
    l2_claim[0] = 0x44;

    LocalGameInputs {
        l1_head,
        l2_head,
        l2_output_root,
        l2_claim,
        l2_block_number: U256::from(3333),
    }
}
