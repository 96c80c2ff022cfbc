use crate::book::RecordStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordFields;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &mut RecordStore<S>, fields: RecordFields) -> Result<CmdResult> {
    let record = book.add(fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added (id {}).",
        record.id
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_reports_id() {
        let mut book = RecordStore::load(InMemoryStore::new()).unwrap();
        run(&mut book, RecordFields::new("A", "B")).unwrap();
        let result = run(&mut book, RecordFields::new("C", "D")).unwrap();

        assert_eq!(result.affected_records[0].id, 2);
        assert_eq!(result.messages[0].content, "Record added (id 2).");
        assert_eq!(book.len(), 2);
    }
}
