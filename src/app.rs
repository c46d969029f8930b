// src/app.rs

use crossterm::event::KeyCode;
use ratatui::widgets::{ListState, ScrollbarState};
use securecheck::config::Settings;
use securecheck::core::domain::{clean_domain, is_valid_domain};
use securecheck::core::knowledge_base::{REC_ENABLE_SSL, REC_INVESTIGATE_DNS, REC_RENEW_CERTIFICATE, REC_VERIFY_CERTIFICATE};
use securecheck::core::models::{CertificateStatus, RiskLevel, SecurityReport};
use securecheck::export::{self, ExportFormat};
use securecheck::logging;
use tracing::{info, warn};

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const LOG_PANEL_LINES: usize = 200;

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

/// Which part of the report a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCategory {
    Ssl,
    Headers,
    Dns,
}

/// One line of the analysis list: a single pass/fail check with its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub category: CheckCategory,
    pub title: String,
    pub passed: bool,
    pub detail: String,
    pub advice: Option<String>,
}

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub score: u8,
    pub risk: Option<RiskLevel>,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub ssl_check_passed: bool,
    pub headers_check_passed: bool,
    pub dns_check_passed: bool,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub settings: Settings,
    pub input: String,
    pub input_error: Option<String>,
    pub scan_report: Option<SecurityReport>,
    pub summary: ScanSummary,
    pub all_checks: Vec<CheckItem>,
    pub analysis_list_state: ListState,
    pub export_status: ExportStatus,
    pub spinner_frame: usize,
    pub displayed_score: u8,
    pub show_disclaimer: bool,
    pub show_glossary: bool,
    pub glossary_query: String,
    pub glossary_scroll: u16,
    pub show_logs: bool,
    pub log_content: Vec<String>,
    /// Log file size at the last refresh, so ticks only re-read on growth.
    pub log_len: Option<u64>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
}

/// Flattens a report into the checks shown in the analysis list.
pub fn report_checks(report: &SecurityReport) -> Vec<CheckItem> {
    let mut checks = Vec::with_capacity(7);

    checks.push(CheckItem {
        category: CheckCategory::Ssl,
        title: "SSL/TLS Available".to_string(),
        passed: report.ssl.available,
        detail: "Whether the site can be reached over an encrypted HTTPS connection.".to_string(),
        advice: (!report.ssl.available).then(|| REC_ENABLE_SSL.to_string()),
    });

    let (cert_title, cert_advice) = match report.ssl.certificate_status {
        CertificateStatus::Valid => (
            format!("Certificate Valid ({} days left)", report.ssl.expiry_days.unwrap_or(0)),
            None,
        ),
        CertificateStatus::Unknown => ("Certificate Status Unknown".to_string(), Some(REC_VERIFY_CERTIFICATE)),
        CertificateStatus::Expired => ("Certificate Expired".to_string(), Some(REC_RENEW_CERTIFICATE)),
    };
    checks.push(CheckItem {
        category: CheckCategory::Ssl,
        title: cert_title,
        passed: report.ssl.certificate_status == CertificateStatus::Valid,
        detail: "The certificate proves the server's identity and must be renewed before it expires.".to_string(),
        advice: cert_advice.map(str::to_string),
    });

    for header in &report.headers {
        checks.push(CheckItem {
            category: CheckCategory::Headers,
            title: header.name.clone(),
            passed: header.present,
            detail: header.description.clone(),
            advice: (!header.present).then(|| header.recommendation.clone()),
        });
    }

    checks.push(CheckItem {
        category: CheckCategory::Dns,
        title: format!("DNS Reachable ({})", report.dns.response_time),
        passed: report.dns.reachable,
        detail: "Whether the domain name resolves to a server and how quickly it answers.".to_string(),
        advice: (!report.dns.reachable).then(|| REC_INVESTIGATE_DNS.to_string()),
    });

    checks
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            settings,
            input: String::new(),
            input_error: None,
            scan_report: None,
            summary: ScanSummary::default(),
            all_checks: Vec::new(),
            analysis_list_state: ListState::default(),
            export_status: ExportStatus::Idle,
            spinner_frame: 0,
            displayed_score: 0,
            show_disclaimer: true,
            show_glossary: false,
            glossary_query: String::new(),
            glossary_scroll: 0,
            show_logs: false,
            log_content: Vec::new(),
            log_len: None,
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
        }
    }

    /// Applies one key press. Returns the domain to scan when the press
    /// started a scan; the caller owns spawning the scan task.
    pub fn on_key(&mut self, key: KeyCode) -> Option<String> {
        if self.show_disclaimer {
            match key {
                KeyCode::Enter => self.show_disclaimer = false,
                KeyCode::Esc => self.quit(),
                _ => {}
            }
            return None;
        }
        if self.show_glossary {
            self.on_glossary_key(key);
            return None;
        }
        match self.state {
            AppState::Idle => return self.on_idle_key(key),
            AppState::Scanning => match key {
                KeyCode::Char('q' | 'Q') => self.quit(),
                KeyCode::Char('g' | 'G') => self.toggle_glossary(),
                KeyCode::Char('l' | 'L') => self.toggle_logs(),
                _ => {}
            },
            AppState::Finished => self.on_finished_key(key),
        }
        None
    }

    /// While typing a domain, letters are input, so commands sit on F-keys.
    fn on_idle_key(&mut self, key: KeyCode) -> Option<String> {
        match key {
            KeyCode::Esc => self.quit(),
            KeyCode::F(1) => self.toggle_glossary(),
            KeyCode::F(2) => self.toggle_logs(),
            KeyCode::Char(c) => {
                self.input.push(c);
                self.input_error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.input_error = None;
            }
            KeyCode::Enter => return self.begin_scan(),
            _ => {}
        }
        None
    }

    fn on_finished_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('n' | 'N') => self.reset(),
            KeyCode::Char('e' | 'E') => self.export_report(),
            KeyCode::Char('g' | 'G') => self.toggle_glossary(),
            KeyCode::Char('l' | 'L') => self.toggle_logs(),
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Left => self.scroll_log_left(),
            KeyCode::Right => self.scroll_log_right(),
            _ => {}
        }
    }

    /// The open glossary takes every key: typing filters, arrows scroll.
    fn on_glossary_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) => self.toggle_glossary(),
            KeyCode::Up => self.glossary_scroll = self.glossary_scroll.saturating_sub(1),
            KeyCode::Down => self.glossary_scroll = self.glossary_scroll.saturating_add(1),
            KeyCode::PageUp => self.glossary_scroll = self.glossary_scroll.saturating_sub(10),
            KeyCode::PageDown => self.glossary_scroll = self.glossary_scroll.saturating_add(10),
            KeyCode::Char(c) => {
                self.glossary_query.push(c);
                self.glossary_scroll = 0;
            }
            KeyCode::Backspace => {
                self.glossary_query.pop();
                self.glossary_scroll = 0;
            }
            _ => {}
        }
    }

    /// Validates the typed domain. On success the app moves to `Scanning` and
    /// the cleaned domain is returned for the scan task; on failure the app
    /// stays `Idle` with an error message and the engine is never called.
    pub fn begin_scan(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        if !is_valid_domain(&self.input) {
            warn!(input = %self.input, "Rejected invalid domain input.");
            self.input_error = Some(format!(
                "Invalid domain: '{}'. Enter a name like example.com",
                self.input.trim()
            ));
            return None;
        }
        let domain = clean_domain(&self.input);
        info!(domain = %domain, "Scan requested.");
        self.input_error = None;
        self.state = AppState::Scanning;
        Some(domain)
    }

    pub fn finish_scan(&mut self, report: SecurityReport) {
        self.all_checks = report_checks(&report);
        self.scan_report = Some(report);
        self.state = AppState::Finished;
        self.displayed_score = 0;
        self.analysis_list_state.select(if self.all_checks.is_empty() { None } else { Some(0) });
        self.update_summary();
    }

    pub fn scroll_up(&mut self) {
        if self.all_checks.is_empty() {
            return;
        }
        let selected = self.analysis_list_state.selected().unwrap_or(0);
        self.analysis_list_state.select(Some(selected.saturating_sub(1)));
    }

    pub fn scroll_down(&mut self) {
        if self.all_checks.is_empty() {
            return;
        }
        let last = self.all_checks.len() - 1;
        let next = self.analysis_list_state.selected().map_or(0, |i| (i + 1).min(last));
        self.analysis_list_state.select(Some(next));
    }

    pub fn scroll_log_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_log_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state = self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn update_summary(&mut self) {
        if let Some(report) = &self.scan_report {
            let passed = self.all_checks.iter().filter(|c| c.passed).count();
            self.summary = ScanSummary {
                score: report.risk_score,
                risk: Some(report.overall_risk),
                passed_checks: passed,
                failed_checks: self.all_checks.len() - passed,
                ssl_check_passed: report.ssl.available
                    && report.ssl.certificate_status == CertificateStatus::Valid,
                headers_check_passed: report.headers.iter().all(|h| h.present),
                dns_check_passed: report.dns.reachable,
            };
        }
    }

    /// Advances the spinner and the score animation.
    pub fn on_tick(&mut self) {
        match self.state {
            AppState::Scanning => {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
            }
            AppState::Finished => {
                if self.displayed_score < self.summary.score {
                    self.displayed_score = (self.displayed_score + 4).min(self.summary.score);
                }
            }
            AppState::Idle => {}
        }
        if self.show_logs && logging::log_file_len() != self.log_len {
            self.refresh_logs();
        }
    }

    pub fn refresh_logs(&mut self) {
        self.log_len = logging::log_file_len();
        self.log_content = logging::read_log_tail(LOG_PANEL_LINES);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.refresh_logs();
        }
    }

    pub fn toggle_glossary(&mut self) {
        self.show_glossary = !self.show_glossary;
        self.glossary_query.clear();
        self.glossary_scroll = 0;
    }

    pub fn export_report(&mut self) {
        let Some(report) = &self.scan_report else {
            return;
        };
        self.export_status = match export::write_report(report, &self.settings.export_dir, ExportFormat::Text) {
            Ok(path) => ExportStatus::Success(path.display().to_string()),
            Err(e) => {
                warn!(error = %e, "Export failed.");
                ExportStatus::Error("Export failed".to_string())
            }
        };
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.input_error = None;
        self.scan_report = None;
        self.summary = ScanSummary::default();
        self.all_checks = Vec::new();
        self.analysis_list_state = ListState::default();
        self.displayed_score = 0;
        self.export_status = ExportStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use securecheck::perform_security_assessment;
    use std::path::PathBuf;

    fn app() -> App {
        App::new(Settings::new(0, Some(PathBuf::from("."))))
    }

    fn press(app: &mut App, keys: &[KeyCode]) -> Option<String> {
        keys.iter().fold(None, |started, key| app.on_key(*key).or(started))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn invalid_input_stays_idle_with_an_error() {
        let mut app = app();
        app.input = "not a domain".to_string();
        assert_eq!(app.begin_scan(), None);
        assert!(matches!(app.state, AppState::Idle));
        assert!(app.input_error.as_deref().unwrap_or_default().starts_with("Invalid domain"));
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut app = app();
        assert_eq!(app.begin_scan(), None);
        assert!(app.input_error.is_none());
    }

    #[test]
    fn valid_input_starts_scanning_with_the_clean_domain() {
        let mut app = app();
        app.input = "https://www.Example.com/login".to_string();
        assert_eq!(app.begin_scan().as_deref(), Some("example.com"));
        assert!(matches!(app.state, AppState::Scanning));
    }

    #[test]
    fn finishing_a_scan_builds_checks_and_summary() {
        let mut app = app();
        app.finish_scan(perform_security_assessment("example.com"));
        assert!(matches!(app.state, AppState::Finished));
        assert_eq!(app.all_checks.len(), 7);
        assert_eq!(app.summary.score, 90);
        assert_eq!(app.summary.risk, Some(RiskLevel::Low));
        assert_eq!(app.summary.failed_checks, 1);
        assert!(app.summary.ssl_check_passed);
        assert!(!app.summary.headers_check_passed);
        assert!(app.summary.dns_check_passed);
        assert_eq!(app.analysis_list_state.selected(), Some(0));
    }

    #[test]
    fn failed_checks_carry_the_engine_advice() {
        let report = perform_security_assessment("a.com");
        let advice: Vec<String> = report_checks(&report).into_iter().filter_map(|c| c.advice).collect();
        assert_eq!(advice, report.recommendations);
    }

    #[test]
    fn selection_stays_within_bounds() {
        let mut app = app();
        app.finish_scan(perform_security_assessment("google.com"));
        app.scroll_up();
        assert_eq!(app.analysis_list_state.selected(), Some(0));
        for _ in 0..20 {
            app.scroll_down();
        }
        assert_eq!(app.analysis_list_state.selected(), Some(6));
    }

    #[test]
    fn score_animation_stops_at_the_real_score() {
        let mut app = app();
        app.finish_scan(perform_security_assessment("example.com"));
        for _ in 0..50 {
            app.on_tick();
        }
        assert_eq!(app.displayed_score, 90);
    }

    #[test]
    fn reset_clears_the_previous_scan() {
        let mut app = app();
        app.finish_scan(perform_security_assessment("google.com"));
        app.reset();
        assert!(matches!(app.state, AppState::Idle));
        assert!(app.scan_report.is_none());
        assert!(app.all_checks.is_empty());
    }

    #[test]
    fn disclaimer_must_be_acknowledged_first() {
        let mut app = app();
        type_text(&mut app, "abc");
        assert!(app.input.is_empty());
        app.on_key(KeyCode::Enter);
        assert!(!app.show_disclaimer);
        type_text(&mut app, "quiz.com");
        assert_eq!(app.input, "quiz.com");
        assert!(!app.should_quit);
    }

    #[test]
    fn enter_on_valid_input_returns_the_domain_to_scan() {
        let mut app = app();
        app.on_key(KeyCode::Enter);
        type_text(&mut app, "www.Example.com");
        assert_eq!(press(&mut app, &[KeyCode::Enter]).as_deref(), Some("example.com"));
        assert!(matches!(app.state, AppState::Scanning));
    }

    #[test]
    fn scanning_accepts_glossary_logs_and_quit_in_either_case() {
        let mut app = app();
        app.show_disclaimer = false;
        app.state = AppState::Scanning;

        app.on_key(KeyCode::Char('G'));
        assert!(app.show_glossary);
        app.on_key(KeyCode::Esc);
        assert!(!app.show_glossary);

        app.on_key(KeyCode::Char('l'));
        assert!(app.show_logs);
        app.on_key(KeyCode::Char('L'));
        assert!(!app.show_logs);

        app.on_key(KeyCode::Char('Q'));
        assert!(app.should_quit);
    }

    #[test]
    fn finished_keys_match_the_uppercase_footer_hints() {
        let mut app = app();
        app.show_disclaimer = false;
        app.finish_scan(perform_security_assessment("google.com"));

        app.on_key(KeyCode::Char('G'));
        assert!(app.show_glossary);
        app.on_key(KeyCode::F(1));
        assert!(!app.show_glossary);

        app.on_key(KeyCode::Char('N'));
        assert!(matches!(app.state, AppState::Idle));

        app.finish_scan(perform_security_assessment("google.com"));
        app.on_key(KeyCode::Char('Q'));
        assert!(app.should_quit);
    }

    #[test]
    fn open_glossary_takes_typing_as_a_filter() {
        let mut app = app();
        app.show_disclaimer = false;
        app.on_key(KeyCode::F(1));
        type_text(&mut app, "dns");
        assert_eq!(app.glossary_query, "dns");
        assert!(app.input.is_empty());

        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.glossary_scroll, 2);
        app.on_key(KeyCode::Backspace);
        assert_eq!(app.glossary_query, "dn");
        assert_eq!(app.glossary_scroll, 0);

        app.on_key(KeyCode::Esc);
        assert!(!app.show_glossary);
        assert!(!app.should_quit);
        assert!(app.glossary_query.is_empty());
    }

    #[test]
    fn tick_skips_the_log_read_while_the_file_is_unchanged() {
        let mut app = app();
        app.show_logs = true;
        app.log_len = logging::log_file_len();
        app.log_content = vec!["kept".to_string()];
        app.on_tick();
        assert_eq!(app.log_content, vec!["kept"]);
    }
}
