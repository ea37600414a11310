//! End-to-end tests for Carmate live under `tests/`.
