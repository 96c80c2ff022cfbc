use crate::commands::{CmdMessage, CmdResult, PhonebookPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &PhonebookPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.root)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized phonebook at {}",
        paths.root.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_data_dir() {
        let temp = tempfile::tempdir().unwrap();
        let paths = PhonebookPaths::new(temp.path().join("book"));
        run(&paths).unwrap();
        assert!(paths.root.is_dir());
    }
}
