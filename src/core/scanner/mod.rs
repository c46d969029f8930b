// src/core/scanner/mod.rs

// The assessment engine: each check lives in its own module and is a pure
// function of the domain hash and the trust decision.
pub mod dns_scanner;
pub mod headers_scanner;
pub mod ssl_scanner;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::domain::{clean_domain, is_trusted_domain, is_valid_domain, simple_hash};
use crate::core::knowledge_base::{
    REC_ALL_CLEAR, REC_ENABLE_SSL, REC_INVESTIGATE_DNS, REC_RENEW_CERTIFICATE,
    REC_VERIFY_CERTIFICATE,
};
use crate::core::models::{
    CertificateStatus, DnsStatus, HeaderFinding, RiskLevel, SecurityReport, SslStatus,
};
use crate::error::{Result, SecureCheckError};
use self::dns_scanner::run_dns_check;
use self::headers_scanner::run_headers_check;
use self::ssl_scanner::run_ssl_check;

/// Builds the simulated security report for a domain.
///
/// The input is cleaned first, and every field except `timestamp` is derived
/// from the hash of the cleaned string and whether it is a trusted domain.
/// No network traffic is involved. This function accepts any string; use
/// [`assess_domain`] to reject malformed input before assessing it.
///
/// # Arguments
///
/// * `domain_input` - The domain as the user typed it (e.g., "https://www.example.com/").
///
/// # Returns
///
/// A fully populated `SecurityReport`.
pub fn perform_security_assessment(domain_input: &str) -> SecurityReport {
    let domain = clean_domain(domain_input);
    let hash = simple_hash(&domain);
    let trusted = is_trusted_domain(&domain);
    info!(domain = %domain, hash, trusted, "Starting security assessment.");

    let ssl = run_ssl_check(hash, trusted);
    let headers = run_headers_check(hash, trusted);
    let dns = run_dns_check(hash, trusted);

    let risk_score = calculate_risk_score(&ssl, &headers, &dns);
    let overall_risk = RiskLevel::from_score(risk_score);
    let recommendations = build_recommendations(&ssl, &headers, &dns);

    info!(risk_score, risk = %overall_risk, recommendations = recommendations.len(), "Security assessment finished.");
    SecurityReport {
        domain,
        timestamp: Utc::now(),
        ssl,
        headers,
        dns,
        overall_risk,
        risk_score,
        recommendations,
    }
}

/// Validates the input and only then assesses it.
///
/// # Errors
///
/// `SecureCheckError::InvalidDomain` when the cleaned input is not shaped like
/// a domain name. The engine is not invoked in that case.
pub fn assess_domain(domain_input: &str) -> Result<SecurityReport> {
    if !is_valid_domain(domain_input) {
        warn!(input = domain_input, "Rejected invalid domain.");
        return Err(SecureCheckError::InvalidDomain(domain_input.trim().to_string()));
    }
    Ok(perform_security_assessment(domain_input))
}

/// Starts at 100 and subtracts a fixed penalty for each failed check, clamped to 0..=100.
pub fn calculate_risk_score(ssl: &SslStatus, headers: &[HeaderFinding], dns: &DnsStatus) -> u8 {
    let mut score: i32 = 100;

    if !ssl.available {
        score -= 30;
    }
    match ssl.certificate_status {
        CertificateStatus::Unknown => score -= 10,
        CertificateStatus::Expired => score -= 20,
        CertificateStatus::Valid => {}
    }
    let missing = headers.iter().filter(|h| !h.present).count() as i32;
    score -= 10 * missing;
    if !dns.reachable {
        score -= 15;
    }

    debug!(score, missing_headers = missing, "Calculated risk score.");
    score.clamp(0, 100) as u8
}

/// One recommendation per failed check in a fixed order: SSL, certificate,
/// each missing header, DNS. A clean report gets a single affirmation.
pub fn build_recommendations(
    ssl: &SslStatus,
    headers: &[HeaderFinding],
    dns: &DnsStatus,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !ssl.available {
        recommendations.push(REC_ENABLE_SSL.to_string());
    }
    match ssl.certificate_status {
        CertificateStatus::Expired => recommendations.push(REC_RENEW_CERTIFICATE.to_string()),
        CertificateStatus::Unknown => recommendations.push(REC_VERIFY_CERTIFICATE.to_string()),
        CertificateStatus::Valid => {}
    }
    recommendations.extend(
        headers
            .iter()
            .filter(|h| !h.present)
            .map(|h| h.recommendation.clone()),
    );
    if !dns.reachable {
        recommendations.push(REC_INVESTIGATE_DNS.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(REC_ALL_CLEAR.to_string());
    }
    recommendations
}
