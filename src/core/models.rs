// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

// --- SSL/TLS Models ---

// The simulated state of the site's certificate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
pub enum CertificateStatus {
    Valid,
    Unknown,
    Expired,
}

// The SSL section of a report. `expiry_days` is only set for a `Valid` certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SslStatus {
    pub available: bool,
    pub certificate_status: CertificateStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expiry_days: Option<u32>,
}

// --- HTTP Header Models ---

// One of the four security headers every report checks, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SecurityHeader {
    #[strum(to_string = "Strict-Transport-Security")]
    Hsts,
    #[strum(to_string = "Content-Security-Policy")]
    Csp,
    #[strum(to_string = "X-Frame-Options")]
    XFrameOptions,
    #[strum(to_string = "X-Content-Type-Options")]
    XContentTypeOptions,
}

// A single header check as it appears in the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderFinding {
    pub name: String,
    pub description: String,
    pub present: bool,
    pub recommendation: String,
}

// --- DNS Models ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnsStatus {
    pub reachable: bool,
    // "123ms" when reachable, "N/A" otherwise.
    pub response_time: String,
}

// --- Main Report ---

/// Risk band derived from the score: `Low` for 70 and above, `Medium` for
/// 40..70 and `High` below 40.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => RiskLevel::Low,
            40..=69 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

/// The full, immutable result of assessing one domain.
///
/// Every field except `timestamp` is a pure function of the cleaned domain
/// string, so two reports for the same input are equal once their timestamps
/// are aligned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub domain: String,
    pub timestamp: DateTime<Utc>,
    pub ssl: SslStatus,
    pub headers: Vec<HeaderFinding>,
    pub dns: DnsStatus,
    pub overall_risk: RiskLevel,
    pub risk_score: u8,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands_follow_score_thresholds() {
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::High);
    }

    #[test]
    fn ssl_status_serializes_with_camel_case_and_skips_missing_expiry() {
        let ssl = SslStatus {
            available: true,
            certificate_status: CertificateStatus::Unknown,
            expiry_days: None,
        };
        let json = serde_json::to_value(&ssl).unwrap();
        assert_eq!(json["certificateStatus"], "Unknown");
        assert!(json.get("expiryDays").is_none());
    }

    #[test]
    fn header_names_render_as_wire_names() {
        assert_eq!(SecurityHeader::Hsts.to_string(), "Strict-Transport-Security");
        assert_eq!(
            SecurityHeader::XContentTypeOptions.to_string(),
            "X-Content-Type-Options"
        );
    }
}
