//! Networking modules for the external triage backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the four REST calls (login, signup, predict, report). Wire
//! types live in the shared `triage` crate so the CLI speaks the same schema.

pub mod api;
