//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts against known reference values
//! - `apply.rs` - Position updates when a move is played
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests
