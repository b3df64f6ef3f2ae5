//! Test modules for the surf tide chart binary.

mod engine_tests;
