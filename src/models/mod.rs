//! Runtime models that are not part of the knowledge-base domain.

pub mod config;
