//! Unit test modules.

mod session_budget_test;
mod tempo_simulator_test;
