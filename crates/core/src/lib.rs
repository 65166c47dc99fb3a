//! Core types for the fundcast prediction client.
//!
//! Holds the startup feature record sent to the prediction service,
//! including the canonical sample payload used by the CLI.

pub mod record;
