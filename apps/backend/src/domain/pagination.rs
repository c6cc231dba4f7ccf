use std::ops::Range;

use crate::errors::domain::{DomainError, NotFoundKind};

/// Slice bounds of 1-based `page` over `total` items.
///
/// A page that starts at or past the end is not found, except page 1 of an
/// empty list, which is simply empty.
pub fn page_window(total: usize, page: u64, per_page: u64) -> Result<Range<usize>, DomainError> {
    let page = page.max(1);
    let per_page = per_page.max(1) as usize;
    let start = (page as usize - 1).saturating_mul(per_page);

    if start >= total && !(page == 1 && total == 0) {
        return Err(DomainError::not_found(
            NotFoundKind::Page,
            format!("Page {page} is past the end of the question list"),
        ));
    }

    Ok(start..start.saturating_add(per_page).min(total))
}
