//! Shared test infrastructure for dotstar-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use dotstar_strip::{FrameBus, Transaction};

// ============================================================================
// Mock Bus
// ============================================================================

/// Error returned by [`MockBus`] when a failure is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault(pub usize);

/// Mock bus that records every transaction and can fail on demand
pub struct MockBus {
    transactions: heapless::Vec<Transaction, 256>,
    fail_at: Option<usize>,
    attempts: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            transactions: heapless::Vec::new(),
            fail_at: None,
            attempts: 0,
        }
    }

    /// Fails the transaction with the given zero-based position; records nothing for it
    pub fn failing_at(position: usize) -> Self {
        Self {
            fail_at: Some(position),
            ..Self::new()
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transmit calls, including the failed one
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn reset(&mut self) {
        self.transactions.clear();
        self.attempts = 0;
    }
}

impl FrameBus for MockBus {
    type Error = BusFault;

    fn transmit(&mut self, transaction: &Transaction) -> Result<(), Self::Error> {
        let position = self.attempts;
        self.attempts += 1;

        if self.fail_at == Some(position) {
            return Err(BusFault(position));
        }

        self.transactions
            .push(*transaction)
            .expect("mock bus capacity exceeded");
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Extract just the frame bytes of recorded transactions
pub fn frame_bytes(transactions: &[Transaction]) -> heapless::Vec<[u8; 4], 256> {
    transactions.iter().map(|t| t.tx).collect()
}
