//! Static, read-only data behind every report: which security headers are
//! checked and how their simulated presence is decided, the text attached to
//! each failed check, and the glossary of terms shown to the user.
//! Keeping this data-driven means the engine itself only does arithmetic.

use crate::core::models::SecurityHeader;

/// Everything the engine needs to know about one security header.
pub struct HeaderRule {
    pub header: SecurityHeader,
    /// The header is simulated as present when `hash % modulus > threshold`.
    pub modulus: u32,
    pub threshold: u32,
    /// A short explanation of what the header protects against.
    pub description: &'static str,
    /// The advice added to the report when the header is missing.
    pub recommendation: &'static str,
}

/// The four headers every report checks, in report order.
pub static HEADER_RULES: &[HeaderRule] = &[
    HeaderRule {
        header: SecurityHeader::Hsts,
        modulus: 7,
        threshold: 2,
        description: "HTTP Strict-Transport-Security tells browsers to only talk to the site over HTTPS, blocking protocol downgrade and cookie hijacking attacks.",
        recommendation: "Implement HSTS by adding 'Strict-Transport-Security: max-age=31536000; includeSubDomains' to force HTTPS connections",
    },
    HeaderRule {
        header: SecurityHeader::Csp,
        modulus: 11,
        threshold: 4,
        description: "Content-Security-Policy restricts which scripts, styles and other resources a page may load, limiting the impact of cross-site scripting.",
        recommendation: "Add a Content-Security-Policy header that whitelists trusted sources for scripts, styles and other resources to mitigate XSS",
    },
    HeaderRule {
        header: SecurityHeader::XFrameOptions,
        modulus: 5,
        threshold: 1,
        description: "X-Frame-Options controls whether the site may be embedded in a frame, protecting visitors against clickjacking.",
        recommendation: "Set 'X-Frame-Options: DENY' or 'SAMEORIGIN' to prevent clickjacking attacks",
    },
    HeaderRule {
        header: SecurityHeader::XContentTypeOptions,
        modulus: 4,
        threshold: 0,
        description: "X-Content-Type-Options stops browsers from MIME-sniffing a response away from its declared content type.",
        recommendation: "Add 'X-Content-Type-Options: nosniff' to stop browsers from MIME-sniffing responses",
    },
];

pub const REC_ENABLE_SSL: &str =
    "Enable SSL/TLS encryption with a certificate from a trusted authority to protect data in transit";
pub const REC_RENEW_CERTIFICATE: &str =
    "The SSL certificate has expired: renew it immediately and automate future renewals";
pub const REC_VERIFY_CERTIFICATE: &str =
    "The SSL certificate status could not be confirmed: verify the certificate chain and server configuration";
pub const REC_INVESTIGATE_DNS: &str =
    "The domain did not resolve reliably: investigate DNS configuration and name server health";
pub const REC_ALL_CLEAR: &str = "Continue monitoring and maintain current security controls";

// --- Glossary ---

pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

pub static GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "SSL/TLS",
        definition: "Cryptographic protocols that encrypt traffic between a browser and a server so it cannot be read or altered in transit.",
    },
    GlossaryEntry {
        term: "Certificate",
        definition: "A signed document binding a domain name to a public key, issued by a certificate authority and valid for a limited time.",
    },
    GlossaryEntry {
        term: "Certificate Authority",
        definition: "An organisation trusted by browsers to verify domain ownership and sign certificates.",
    },
    GlossaryEntry {
        term: "HSTS",
        definition: "HTTP Strict-Transport-Security, a response header that makes browsers refuse plain HTTP for the site.",
    },
    GlossaryEntry {
        term: "CSP",
        definition: "Content-Security-Policy, a response header listing the sources a page may load scripts and other resources from.",
    },
    GlossaryEntry {
        term: "Clickjacking",
        definition: "Tricking a user into clicking something on a page that is invisibly framed inside another site.",
    },
    GlossaryEntry {
        term: "MIME Sniffing",
        definition: "A browser guessing a response's content type from its bytes instead of trusting the declared type.",
    },
    GlossaryEntry {
        term: "XSS",
        definition: "Cross-site scripting, injecting attacker-controlled script into pages that other users view.",
    },
    GlossaryEntry {
        term: "DNS",
        definition: "The Domain Name System, which translates domain names into the IP addresses of servers.",
    },
    GlossaryEntry {
        term: "Response Time",
        definition: "How long a server or name server takes to answer a request, usually measured in milliseconds.",
    },
    GlossaryEntry {
        term: "Risk Score",
        definition: "A 0 to 100 summary of the simulated security posture where higher is better.",
    },
    GlossaryEntry {
        term: "Administrative Controls",
        definition: "Policies, procedures and training that manage security risk alongside technical measures.",
    },
];

/// Case-insensitive search over terms and definitions. An empty query
/// returns the whole glossary in table order.
pub fn search_glossary(query: &str) -> Vec<&'static GlossaryEntry> {
    let needle = query.trim().to_lowercase();
    GLOSSARY
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.term.to_lowercase().contains(&needle)
                || entry.definition.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_header_has_a_rule_in_report_order() {
        let ordered: Vec<SecurityHeader> = HEADER_RULES.iter().map(|r| r.header).collect();
        let expected: Vec<SecurityHeader> = SecurityHeader::iter().collect();
        assert_eq!(ordered, expected);
    }

    #[test]
    fn header_thresholds_are_fixed() {
        let pairs: Vec<(u32, u32)> = HEADER_RULES.iter().map(|r| (r.modulus, r.threshold)).collect();
        assert_eq!(pairs, vec![(7, 2), (11, 4), (5, 1), (4, 0)]);
    }

    #[test]
    fn empty_query_returns_whole_glossary() {
        assert_eq!(search_glossary("").len(), GLOSSARY.len());
        assert_eq!(search_glossary("   ").len(), GLOSSARY.len());
    }

    #[test]
    fn search_matches_terms_and_definitions_case_insensitively() {
        let terms: Vec<&str> = search_glossary("hsts").iter().map(|e| e.term).collect();
        assert_eq!(terms, vec!["HSTS"]);

        let by_definition: Vec<&str> =
            search_glossary("FRAMED").iter().map(|e| e.term).collect();
        assert_eq!(by_definition, vec!["Clickjacking"]);

        assert!(search_glossary("no such term").is_empty());
    }
}
