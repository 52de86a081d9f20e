//! Config module tests
//!
//! Contains test suites for settings files:
//! - Line, value and key-list parsing
//! - Loading from disk
