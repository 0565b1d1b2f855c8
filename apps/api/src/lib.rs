//! JobMatch API: ranks job postings from an external listings provider against
//! a resume's plain text, and rewrites resumes for a chosen posting via an LLM.
//!
//! The binary in `main.rs` wires configuration, logging and the HTTP router;
//! everything else lives here so the matcher can be embedded and tested without
//! a server.

pub mod config;
pub mod errors;
pub mod jobs;
pub mod llm_client;
pub mod matching;
pub mod rewrite;
pub mod routes;
pub mod state;
