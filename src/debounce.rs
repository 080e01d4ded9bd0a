//! Latest-wins revision tracking for debounced recomputation.
//!
//! The JS shell owns the actual timer; this keeps the monotonic token that
//! decides whether a completed computation is still the newest request, so a
//! slow run never overwrites the result of a later keystroke.

use wasm_bindgen::prelude::*;

/// Hands out revision tokens and answers whether a token is still current.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct RevisionGate {
    current: u64,
}

#[wasm_bindgen]
impl RevisionGate {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new revision, invalidating every earlier token.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.current
    }
}
