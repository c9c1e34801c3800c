//! Alert Auto-Dismiss
//!
//! Closes dismissible alert banners after a fixed delay.

use std::time::Duration;

use super::dom::{DomElement, PageHost};
use super::error::PageResult;
use crate::config::MarkupConfig;

/// Schedule the close action of every dismissible alert on the page.
///
/// Each alert gets its own timer. The close trigger is looked up when the
/// timer fires, so alerts the user already closed, or alerts without a
/// close trigger, are left alone. Returns the number of timers scheduled.
pub fn schedule_alert_dismissal<H: PageHost>(
    host: &H,
    markup: &MarkupConfig,
    delay: Duration,
) -> PageResult<usize> {
    let alerts = host.query_selector_all(&markup.dismissible_alert)?;

    for alert in &alerts {
        let alert = alert.clone();
        let close_button = markup.close_button.clone();

        host.set_timeout(
            delay,
            Box::new(move || match alert.query_selector(&close_button) {
                Ok(Some(button)) => button.click(),
                Ok(None) => tracing::debug!("Alert has no close trigger, leaving it open"),
                Err(e) => tracing::warn!("Alert close trigger lookup failed: {}", e),
            }),
        );
    }

    tracing::debug!("Scheduled {} alert dismissals after {:?}", alerts.len(), delay);
    Ok(alerts.len())
}
