//! Page Behavior Initializer
//!
//! Wires every page behavior once the document structure is ready.

use std::fmt;

use super::alerts::schedule_alert_dismissal;
use super::dom::PageHost;
use super::error::PageError;
use super::rows::wire_clickable_rows;
use super::tooltips::{activate_tooltips, TooltipOutcome};
use crate::config::Config;

/// Runs the page behaviors against a host
#[derive(Debug, Clone)]
pub struct PageInitializer {
    config: Config,
}

/// Summary of one initializer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub alerts_scheduled: usize,
    pub rows_wired: usize,
    pub tooltips: TooltipOutcome,
    /// Behaviors that failed; the others still ran
    pub failures: Vec<PageError>,
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alerts={}, rows={}, tooltips: {}",
            self.alerts_scheduled, self.rows_wired, self.tooltips
        )?;
        if !self.failures.is_empty() {
            write!(f, ", failures={}", self.failures.len())?;
        }
        Ok(())
    }
}

impl PageInitializer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wire alert dismissal, clickable rows and tooltips.
    ///
    /// Consumes the initializer: a page is initialized exactly once. The
    /// three behaviors are independent, so a failing one is recorded in the
    /// report and the rest still run.
    pub fn run<H: PageHost>(self, host: &H) -> InitReport {
        let Config { markup, behavior, .. } = &self.config;
        tracing::info!("{}", behavior.startup_message);

        let mut failures = Vec::new();

        let alerts_scheduled =
            schedule_alert_dismissal(host, markup, behavior.alert_dismiss_delay())
                .unwrap_or_else(|e| record(&mut failures, e, 0));

        let rows_wired = wire_clickable_rows(host, markup, behavior)
            .unwrap_or_else(|e| record(&mut failures, e, 0));

        let tooltips = activate_tooltips(host, markup)
            .unwrap_or_else(|e| record(&mut failures, e, TooltipOutcome::NoTargets));

        let report = InitReport {
            alerts_scheduled,
            rows_wired,
            tooltips,
            failures,
        };
        tracing::info!("Page behaviors ready: {}", report);
        report
    }
}

impl Default for PageInitializer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn record<T>(failures: &mut Vec<PageError>, error: PageError, fallback: T) -> T {
    tracing::warn!("Page behavior skipped: {}", error);
    failures.push(error);
    fallback
}
