// src/core/scanner/ssl_scanner.rs

use tracing::debug;

use crate::core::models::{CertificateStatus, SslStatus};

/// Simulates the SSL/TLS check for a domain.
///
/// Trusted domains always serve a valid certificate. For everyone else SSL is
/// available when `hash % 10 > 2`, and the certificate state is picked from
/// `hash % 100`: above 20 valid, 6 to 20 unknown, 5 or below expired.
pub fn run_ssl_check(hash: u32, trusted: bool) -> SslStatus {
    let available = trusted || hash % 10 > 2;

    let (certificate_status, expiry_days) = if !available {
        (CertificateStatus::Unknown, None)
    } else if trusted {
        (CertificateStatus::Valid, Some(90 + hash % 275))
    } else {
        match hash % 100 {
            21.. => (CertificateStatus::Valid, Some(30 + hash % 335)),
            6..=20 => (CertificateStatus::Unknown, None),
            _ => (CertificateStatus::Expired, None),
        }
    };

    debug!(available, status = %certificate_status, ?expiry_days, "SSL check finished.");
    SslStatus {
        available,
        certificate_status,
        expiry_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_domains_get_a_valid_certificate() {
        let ssl = run_ssl_check(1_536_293_812, true);
        assert!(ssl.available);
        assert_eq!(ssl.certificate_status, CertificateStatus::Valid);
        assert_eq!(ssl.expiry_days, Some(352));
    }

    #[test]
    fn unavailable_ssl_has_unknown_status_and_no_expiry() {
        // 91_050_612 % 10 == 2
        let ssl = run_ssl_check(91_050_612, false);
        assert!(!ssl.available);
        assert_eq!(ssl.certificate_status, CertificateStatus::Unknown);
        assert_eq!(ssl.expiry_days, None);
    }

    #[test]
    fn certificate_bands_for_untrusted_domains() {
        // hash % 100 == 59
        let valid = run_ssl_check(1_944_013_059, false);
        assert_eq!(valid.certificate_status, CertificateStatus::Valid);
        assert_eq!(valid.expiry_days, Some(49));

        // hash % 100 == 13
        let unknown = run_ssl_check(13, false);
        assert!(unknown.available);
        assert_eq!(unknown.certificate_status, CertificateStatus::Unknown);
        assert_eq!(unknown.expiry_days, None);

        // hash % 100 == 3
        let expired = run_ssl_check(1_207_881_203, false);
        assert_eq!(expired.certificate_status, CertificateStatus::Expired);
        assert_eq!(expired.expiry_days, None);
    }

    #[test]
    fn band_edges() {
        assert_eq!(run_ssl_check(23, false).certificate_status, CertificateStatus::Valid);
        assert_eq!(run_ssl_check(19, false).certificate_status, CertificateStatus::Unknown);
        assert_eq!(run_ssl_check(6, false).certificate_status, CertificateStatus::Unknown);
        assert_eq!(run_ssl_check(5, false).certificate_status, CertificateStatus::Expired);
    }
}
