use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::config::PhonebookConfig;
use phonebook::model::Record;
use phonebook::paging::PageInfo;
use std::io::{self, Write};

const SEPARATOR_WIDTH: usize = 40;
const NO_INFO: &str = "No information";

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn optional(value: &Option<String>) -> String {
    match value {
        Some(v) => v.clone(),
        None => NO_INFO.dimmed().to_string(),
    }
}

pub(super) fn print_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "ID: {}", record.id.to_string().yellow())?;
    writeln!(out, "\tName: {}", record.full_name().bold())?;
    writeln!(out, "\tOrganization: {}", optional(&record.organization))?;
    writeln!(out, "\tWork phone: {}", optional(&record.work_phone))?;
    writeln!(out, "\tPersonal phone: {}", optional(&record.personal_phone))?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        print_record(out, record)?;
    }
    Ok(())
}

pub(super) fn print_page_footer<W: Write>(out: &mut W, info: &PageInfo) -> io::Result<()> {
    let noun = if info.total == 1 { "record" } else { "records" };
    writeln!(
        out,
        "Page {} of {} ({} {})",
        info.page, info.pages, info.total, noun
    )?;
    writeln!(out)
}

pub(super) fn print_config<W: Write>(out: &mut W, config: &PhonebookConfig) -> io::Result<()> {
    for key in PhonebookConfig::KEYS {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::model::RecordFields;

    fn render(record: &Record) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        print_record(&mut buf, record).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn absent_fields_show_placeholder() {
        let record = Record::new(7, RecordFields::new("Smith", "Jane").with_work_phone(""));
        let text = render(&record);

        assert!(text.starts_with("ID: 7\n"));
        assert!(text.contains("\tName: Smith Jane\n"));
        assert!(text.contains("\tOrganization: No information\n"));
        assert!(text.contains("\tWork phone: \n"));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(40))));
    }

    #[test]
    fn footer_shows_position() {
        let mut buf = Vec::new();
        let info = PageInfo {
            page: 2,
            pages: 3,
            total: 12,
        };
        print_page_footer(&mut buf, &info).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Page 2 of 3 (12 records)\n\n");
    }

    #[test]
    fn config_lists_every_key() {
        let mut buf = Vec::new();
        print_config(&mut buf, &PhonebookConfig::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("per-page = 5"));
        assert!(text.contains("data-file = phonebook.json"));
    }
}
