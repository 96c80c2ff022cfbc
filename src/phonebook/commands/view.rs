use crate::book::RecordStore;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::RecordId;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &RecordStore<S>, ids: &[RecordId]) -> Result<CmdResult> {
    let records = ids
        .iter()
        .map(|id| book.get(*id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_records(records))
}
