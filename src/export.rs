//! Turns a `SecurityReport` into a document the user can keep.
//!
//! The text document mirrors the printed report: findings tables first, then
//! a page break, then the interpretation, methodology, recommendations,
//! administrative controls and disclaimer. JSON export is the report as-is.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;
use tracing::{error, info};

use crate::core::models::{CertificateStatus, RiskLevel, SecurityReport};
use crate::error::Result;

const PAGE_BREAK: char = '\u{000C}';

const SCORING_METHODOLOGY: &str = "The risk score starts at 100 and deducts points for each failed check: \
30 when SSL/TLS is unavailable, 10 when the certificate status is unknown, 20 when the certificate \
has expired, 10 for each missing security header and 15 when DNS does not resolve. The result is \
clamped between 0 and 100. A score of 70 or more is Low risk, 40 to 69 is Medium risk and below 40 \
is High risk.";

const ADMINISTRATIVE_CONTROLS: [&str; 6] = [
    "Maintain a written information security policy and review it at least once a year",
    "Run regular security awareness training for everyone with access to the site",
    "Apply least-privilege access control and review accounts with administrative rights",
    "Keep an incident response plan with named contacts and rehearse it",
    "Track software and certificate inventory with owners and renewal dates",
    "Schedule periodic professional security assessments and penetration tests",
];

const DISCLAIMER: &str = "This report is generated for educational purposes only. SecureCheck does not \
connect to the domain: every result is simulated from the domain name and must not be relied upon \
as an assessment of the site's actual security. Consult a qualified security professional before \
making decisions based on this document.";

/// The document formats SecureCheck can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// `security-report-<domain with dots as hyphens>-<YYYY-MM-DD>.<ext>`
pub fn file_name(domain: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "security-report-{}-{}.{}",
        domain.replace('.', "-"),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// The paragraph explaining what the overall risk band means.
pub fn risk_interpretation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "The domain shows a strong security posture. Core protections are in place; keep monitoring certificates and headers so the score does not drift.",
        RiskLevel::Medium => "The domain has a moderate security posture. Several protections are missing or unverified and should be addressed in the near term to reduce exposure.",
        RiskLevel::High => "The domain has a weak security posture. Critical protections are missing and the site is exposed to common attacks; the recommendations below should be treated as urgent.",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn table(out: &mut String, title: &str, rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<width$}  {value}");
    }
    out.push('\n');
}

/// Renders the full plain-text report.
pub fn render_text(report: &SecurityReport) -> String {
    let mut out = String::new();
    let generated = report.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let _ = writeln!(out, "SECURITY ASSESSMENT REPORT");
    let _ = writeln!(out, "Domain: {}", report.domain);
    let _ = writeln!(out, "Generated: {generated}\n");

    table(
        &mut out,
        "Overview",
        &[
            ("Domain", report.domain.clone()),
            ("Overall Risk", report.overall_risk.to_string()),
            ("Risk Score", format!("{}/100", report.risk_score)),
            ("Scan Date", generated.clone()),
        ],
    );

    let expiry = match (report.ssl.certificate_status, report.ssl.expiry_days) {
        (CertificateStatus::Valid, Some(days)) => format!("{days} days"),
        _ => "N/A".to_string(),
    };
    table(
        &mut out,
        "SSL/TLS Certificate",
        &[
            ("SSL Available", yes_no(report.ssl.available).to_string()),
            ("Certificate Status", report.ssl.certificate_status.to_string()),
            ("Expires In", expiry),
        ],
    );

    let header_rows: Vec<(&str, String)> = report
        .headers
        .iter()
        .map(|h| {
            let status = if h.present { "Present" } else { "Missing" };
            (h.name.as_str(), format!("{status}  {}", h.description))
        })
        .collect();
    table(&mut out, "Security Headers", &header_rows);

    table(
        &mut out,
        "DNS",
        &[
            ("Reachable", yes_no(report.dns.reachable).to_string()),
            ("Response Time", report.dns.response_time.clone()),
        ],
    );

    out.push(PAGE_BREAK);
    out.push('\n');

    let _ = writeln!(out, "Risk Interpretation\n-------------------");
    let _ = writeln!(out, "{}\n", risk_interpretation(report.overall_risk));

    let _ = writeln!(out, "Scoring Methodology\n-------------------");
    let _ = writeln!(out, "{SCORING_METHODOLOGY}\n");

    let _ = writeln!(out, "Recommendations\n---------------");
    for (index, recommendation) in report.recommendations.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {recommendation}", index + 1);
    }
    out.push('\n');

    let _ = writeln!(out, "Administrative Controls\n-----------------------");
    for (index, control) in ADMINISTRATIVE_CONTROLS.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {control}", index + 1);
    }
    out.push('\n');

    let _ = writeln!(out, "Disclaimer\n----------");
    let _ = writeln!(out, "{DISCLAIMER}");
    out
}

pub fn render_json(report: &SecurityReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render(report: &SecurityReport, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(render_text(report)),
        ExportFormat::Json => render_json(report),
    }
}

/// Writes the report into `dir` (created if needed) and returns the file path.
pub fn write_report(report: &SecurityReport, dir: &Path, format: ExportFormat) -> Result<PathBuf> {
    let body = render(report, format)?;
    let path = dir.join(file_name(
        &report.domain,
        report.timestamp.date_naive(),
        format,
    ));

    let written = std::fs::create_dir_all(dir).and_then(|_| std::fs::write(&path, body));
    if let Err(e) = written {
        error!(path = %path.display(), error = %e, "Failed to write export.");
        return Err(e.into());
    }

    info!(path = %path.display(), "Exported security report.");
    Ok(path)
}
