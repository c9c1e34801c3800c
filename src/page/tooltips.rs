//! Tooltip Activation
//!
//! Activates toolkit tooltips when the toolkit is loaded on the page.

use std::fmt;

use super::dom::PageHost;
use super::error::PageResult;
use crate::config::MarkupConfig;

/// What tooltip activation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipOutcome {
    /// No element asked for a tooltip
    NoTargets,
    /// Targets exist but the toolkit is not loaded
    ToolkitUnavailable,
    /// Activation was attempted on every target
    Activated { activated: usize, failed: usize },
}

impl fmt::Display for TooltipOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TooltipOutcome::NoTargets => write!(f, "no tooltip targets"),
            TooltipOutcome::ToolkitUnavailable => write!(f, "tooltip toolkit unavailable"),
            TooltipOutcome::Activated { activated, failed } => {
                write!(f, "{} tooltips activated, {} failed", activated, failed)
            }
        }
    }
}

/// Activate a tooltip on every tooltip target.
///
/// Skipped silently when there are no targets or no toolkit. A target the
/// toolkit rejects does not stop the others.
pub fn activate_tooltips<H: PageHost>(host: &H, markup: &MarkupConfig) -> PageResult<TooltipOutcome> {
    let targets = host.query_selector_all(&markup.tooltip)?;
    if targets.is_empty() {
        return Ok(TooltipOutcome::NoTargets);
    }

    let Some(toolkit) = host.tooltip_toolkit() else {
        tracing::debug!("Tooltip toolkit not loaded, skipping {} targets", targets.len());
        return Ok(TooltipOutcome::ToolkitUnavailable);
    };

    let mut activated = 0;
    let mut failed = 0;
    for target in &targets {
        match toolkit.activate(target) {
            Ok(()) => activated += 1,
            Err(e) => {
                tracing::warn!("{}", e);
                failed += 1;
            }
        }
    }

    Ok(TooltipOutcome::Activated { activated, failed })
}
