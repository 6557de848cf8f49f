//! Unit tests for workflow phases, the phase gate, and the flow runner.
