// src/core/mod.rs

/// Data structures produced by an assessment: `SecurityReport` and the
/// SSL, header and DNS sections it is made of.
pub mod models;

/// Input cleaning and validation, the deterministic hash and the trusted
/// domain classifier.
pub mod domain;

/// The simulated checks and the engine that combines them into a report.
pub mod scanner;

/// Fixed tables: header rules, recommendation text and the glossary.
pub mod knowledge_base;
