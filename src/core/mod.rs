//! Core library components.
//!
//! Decoding, alias provisioning, rewrite rules and the override guard,
//! plus the collaborator traits (process runner, config stores, sink) they
//! are written against.

pub mod config;
pub mod constants;
pub mod dependency;
pub mod domain;
pub mod exec;
pub mod guard;
pub mod lifecycle;
pub mod provision;
pub mod rewrite;
pub mod script;
pub mod sink;
pub mod store;
pub mod tokenizer;
