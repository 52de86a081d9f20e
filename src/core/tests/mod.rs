//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Key name tests (names, parsing)
//! - Classification and label tests
//! - Keybind state machine tests (recording, filters, edges)
//! - Settings validation tests

#[cfg(test)]
mod validator_tests;
