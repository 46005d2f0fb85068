//! Shared contract harness for stage tests.
pub mod stage_contract;
