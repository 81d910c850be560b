//! Integration tests for doil CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior against
//! an isolated `DOIL_HOME`.
