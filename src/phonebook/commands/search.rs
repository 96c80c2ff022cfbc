use crate::book::RecordStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &RecordStore<S>, query: &str) -> Result<CmdResult> {
    let found = book.search(query);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("Nothing found."));
    }
    Ok(result.with_listed_records(found))
}
