//! Workspace-level integration tests for strassen-rs live under `tests/`.
