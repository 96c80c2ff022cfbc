use crate::book::RecordStore;
use crate::commands::{CmdMessage, CmdResult, RecordInput};
use crate::error::Result;
use crate::model::{RecordFields, RecordId};
use crate::store::DataStore;

/// Replaces all fields of record `id`.
pub fn run<S: DataStore>(
    book: &mut RecordStore<S>,
    id: RecordId,
    fields: RecordFields,
) -> Result<CmdResult> {
    let record = book.edit_by_id(id, fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record {} updated: {}",
        record.id,
        record.full_name()
    )));
    Ok(result.with_affected_records(vec![record]))
}

/// Changes only the fields present in `input`, resupplying the rest.
pub fn patch<S: DataStore>(
    book: &mut RecordStore<S>,
    id: RecordId,
    input: RecordInput,
) -> Result<CmdResult> {
    let current = book.get(id)?;
    if input.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for record {}.",
            id
        )));
        return Ok(result);
    }
    run(book, id, input.merge(current.fields()))
}
