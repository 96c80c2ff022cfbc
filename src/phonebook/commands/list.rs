use crate::book::RecordStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::paging::{validate_page, PageInfo};
use crate::store::DataStore;

/// One page of records. Pages outside `1..=pages` are rejected here, before
/// the store is asked for them.
pub fn run<S: DataStore>(book: &RecordStore<S>, page: usize, per_page: usize) -> Result<CmdResult> {
    if per_page == 0 {
        return Err(PhonebookError::InvalidInput(
            "per-page must be at least 1".to_string(),
        ));
    }
    if book.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No records yet."));
        return Ok(result);
    }

    let pages = book.page_count(per_page);
    validate_page(page, pages)?;

    let info = PageInfo {
        page,
        pages,
        total: book.len(),
    };
    let mut result = CmdResult::default()
        .with_listed_records(book.range_by_page(page, per_page))
        .with_page(info);
    if book.was_reordered() {
        result.add_message(CmdMessage::warning(
            "Stored records were out of order; they will be saved sorted on the next change.",
        ));
    }
    Ok(result)
}
