//! Clickable Table Rows
//!
//! Rows of clickable tables navigate to the URL in their navigation-target
//! attribute.

use super::dom::{DomElement, PageHost};
use super::error::PageResult;
use crate::config::{BehaviorConfig, MarkupConfig};

/// Make every body row of every clickable table navigate on click.
///
/// The target attribute is read at click time. Rows without it, or with an
/// empty value, stay inert. A row whose listener cannot be attached is
/// skipped. Returns the number of rows wired.
pub fn wire_clickable_rows<H: PageHost>(
    host: &H,
    markup: &MarkupConfig,
    behavior: &BehaviorConfig,
) -> PageResult<usize> {
    let mut wired = 0;

    for table in host.query_selector_all(&markup.clickable_table)? {
        for row in table.query_selector_all(&markup.table_row)? {
            if let Err(e) = row.set_style("cursor", &behavior.row_cursor) {
                tracing::warn!("Could not set row cursor: {}", e);
            }

            let host = host.clone();
            let target_row = row.clone();
            let attribute = markup.navigation_attribute.clone();

            let listener = row.on_click(Box::new(move || {
                let Some(url) = target_row.attribute(&attribute).filter(|url| !url.is_empty())
                else {
                    return;
                };
                if let Err(e) = host.navigate(&url) {
                    tracing::warn!("{}", e);
                }
            }));
            if let Err(e) = listener {
                tracing::warn!("Could not wire row click: {}", e);
                continue;
            }

            wired += 1;
        }
    }

    tracing::debug!("Wired {} clickable rows", wired);
    Ok(wired)
}
