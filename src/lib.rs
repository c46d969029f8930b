//! SecureCheck: an educational, fully simulated website security report.
//!
//! No network traffic is ever generated. Every result is derived from a
//! hash of the cleaned domain name and a fixed list of trusted domains, so
//! the same input always yields the same report apart from its timestamp.

#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod logging;

pub use crate::core::domain::{clean_domain, is_trusted_domain, is_valid_domain, simple_hash};
pub use crate::core::models::{
    CertificateStatus, DnsStatus, HeaderFinding, RiskLevel, SecurityHeader, SecurityReport,
    SslStatus,
};
pub use crate::core::scanner::{assess_domain, perform_security_assessment};
pub use crate::error::{Result, SecureCheckError};
