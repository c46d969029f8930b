// src/core/scanner/dns_scanner.rs

use tracing::debug;

use crate::core::models::DnsStatus;

/// Simulates DNS reachability. Trusted domains always resolve; otherwise the
/// domain resolves when `hash % 20 > 1`, with a response time between 50 and
/// 199 milliseconds.
pub fn run_dns_check(hash: u32, trusted: bool) -> DnsStatus {
    let reachable = trusted || hash % 20 > 1;
    let response_time = if reachable {
        format!("{}ms", 50 + hash % 150)
    } else {
        "N/A".to_string()
    };

    debug!(reachable, response_time = %response_time, "DNS check finished.");
    DnsStatus {
        reachable,
        response_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_domains_report_a_response_time() {
        let dns = run_dns_check(1_944_013_059, false);
        assert!(dns.reachable);
        assert_eq!(dns.response_time, "59ms");
    }

    #[test]
    fn unreachable_domains_report_na() {
        // i.com
        let dns = run_dns_check(98_438_780, false);
        assert!(!dns.reachable);
        assert_eq!(dns.response_time, "N/A");
    }

    #[test]
    fn trusted_domains_always_resolve() {
        let dns = run_dns_check(20, true);
        assert!(dns.reachable);
        assert_eq!(dns.response_time, "70ms");
    }
}
