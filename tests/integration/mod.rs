//! Integration test modules.

mod session_design_test;
mod tempo_set_execution_test;
