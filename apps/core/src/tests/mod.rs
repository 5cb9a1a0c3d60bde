//! Test Module
//!
//! Test suite for the Nexus assistant core.
//!
//! ## Test Categories
//! - `brain_tests`: rule priority, totality, case handling, templates
//! - `session_tests`: session actor behavior with real and mock assistants
