//! Networking modules for the task backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` describes each endpoint, `api` executes descriptions over HTTP,
//! `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod request;
pub mod types;
