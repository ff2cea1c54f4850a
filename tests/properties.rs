//! Property tests for envswitch.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "idempotent rewrites".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/engine.rs"]
mod engine;

#[path = "properties/loader.rs"]
mod loader;
