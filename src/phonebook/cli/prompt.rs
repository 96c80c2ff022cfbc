//! Interactive mode: the main menu, the pager, and field prompts.
//!
//! Field collection and store mutation are separate steps: the prompts only
//! build a `RecordFields`, which is then handed to the API.

use super::print::{print_messages, print_page_footer, print_records};
use phonebook::api::{CmdMessage, PhonebookApi};
use phonebook::error::{PhonebookError, Result};
use phonebook::model::{Record, RecordFields, RecordId};
use phonebook::paging::{Navigation, Pager};
use phonebook::store::DataStore;
use std::io::{BufRead, Write};

pub(super) struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Prints `label` and reads one line. `None` means stdin is closed.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        print_messages(&mut self.out, messages)?;
        Ok(())
    }

    /// Asks for every field of a new record. Blank answers are stored as
    /// empty strings.
    pub fn collect_new(&mut self) -> Result<Option<RecordFields>> {
        let mut answers = Vec::with_capacity(FIELD_LABELS.len());
        for label in FIELD_LABELS {
            match self.ask(&format!("{}: ", label))? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        Ok(Some(fields_from(answers)))
    }

    /// Asks for every field, showing the current value. A blank answer keeps
    /// the current value.
    pub fn collect_edit(&mut self, current: &Record) -> Result<Option<RecordFields>> {
        let shown = [
            Some(current.last_name.as_str()),
            Some(current.first_name.as_str()),
            Some(current.middle_name.as_str()),
            current.organization.as_deref(),
            current.work_phone.as_deref(),
            current.personal_phone.as_deref(),
        ];
        let mut answers: Vec<Option<String>> = Vec::with_capacity(FIELD_LABELS.len());
        for (label, value) in FIELD_LABELS.iter().zip(shown) {
            let prompt = format!("{} ({}): ", label, value.unwrap_or(""));
            match self.ask(&prompt)? {
                Some(answer) if answer.is_empty() => answers.push(None),
                Some(answer) => answers.push(Some(answer)),
                None => return Ok(None),
            }
        }

        let mut fields = current.fields();
        let mut answers = answers.into_iter();
        let mut next = || answers.next().flatten();
        if let Some(v) = next() {
            fields.last_name = v;
        }
        if let Some(v) = next() {
            fields.first_name = v;
        }
        if let Some(v) = next() {
            fields.middle_name = v;
        }
        fields.organization = next().or(fields.organization);
        fields.work_phone = next().or(fields.work_phone);
        fields.personal_phone = next().or(fields.personal_phone);
        Ok(Some(fields))
    }
}

const FIELD_LABELS: [&str; 6] = [
    "Last name",
    "First name",
    "Middle name",
    "Organization",
    "Work phone",
    "Personal phone",
];

fn fields_from(answers: Vec<String>) -> RecordFields {
    let mut it = answers.into_iter();
    let mut next = || it.next().unwrap_or_default();
    RecordFields {
        last_name: next(),
        first_name: next(),
        middle_name: next(),
        organization: Some(next()),
        work_phone: Some(next()),
        personal_phone: Some(next()),
    }
}

/// Runs the main menu until the user picks 0 or stdin closes.
pub(super) fn run_menu<S, R, W>(api: &mut PhonebookApi<S>, p: &mut Prompter<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        p.say("\n=== Phonebook ===")?;
        p.say("1. Show records")?;
        p.say("2. Add record")?;
        p.say("3. Edit record")?;
        p.say("4. Search records")?;
        p.say("0. Exit")?;
        let Some(choice) = p.ask("Choose an action: ")? else {
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => browse(api, p),
            "2" => add(api, p),
            "3" => edit(api, p),
            "4" => search(api, p),
            "0" => return Ok(()),
            _ => p.say("Invalid choice, try again."),
        };

        match outcome {
            Ok(()) => {}
            Err(e @ PhonebookError::NotFound(_)) | Err(e @ PhonebookError::InvalidInput(_)) => {
                p.messages(&[CmdMessage::error(e.to_string())])?;
            }
            Err(e) if e.is_persistence_failure() => {
                tracing::error!(error = %e, "persistence failure in interactive mode");
                p.messages(&[CmdMessage::error(format!("Error: {}", e))])?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn show_page<S: DataStore, R: BufRead, W: Write>(
    api: &PhonebookApi<S>,
    p: &mut Prompter<R, W>,
    page: usize,
) -> Result<()> {
    let result = api.list_records(page, None)?;
    print_records(&mut p.out, &result.listed_records)?;
    if let Some(info) = &result.page {
        print_page_footer(&mut p.out, info)?;
    }
    p.messages(&result.messages)
}

fn browse<S: DataStore, R: BufRead, W: Write>(
    api: &PhonebookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    if api.is_empty() {
        return p.say("\nNo records yet.");
    }

    let mut pager = Pager::new(api.page_count());
    show_page(api, p, pager.page())?;

    loop {
        p.say("--- Commands ---")?;
        if pager.has_next() {
            p.say("1. Next page")?;
        }
        if pager.has_previous() {
            p.say("2. Previous page")?;
        }
        p.say("3. Go to page")?;
        p.say("0. Back to main menu")?;
        let Some(choice) = p.ask("Choose an action: ")? else {
            return Ok(());
        };

        let moved = match choice.parse::<Navigation>() {
            Ok(Navigation::Next) => pager.next(),
            Ok(Navigation::Previous) => pager.previous(),
            Ok(Navigation::GoTo) => {
                let Some(answer) = p.ask("Page number: ")? else {
                    return Ok(());
                };
                match answer.trim().parse::<usize>() {
                    Ok(n) => match pager.go_to(n) {
                        Ok(()) => true,
                        Err(_) => {
                            p.say("\nNo page with that number.\n")?;
                            continue;
                        }
                    },
                    Err(_) => {
                        p.say("\nNot a page number.\n")?;
                        continue;
                    }
                }
            }
            Ok(Navigation::Back) => return Ok(()),
            Err(_) => false,
        };

        if !moved {
            p.say("Invalid choice, try again.")?;
            continue;
        }
        show_page(api, p, pager.page())?;
    }
}

fn add<S: DataStore, R: BufRead, W: Write>(
    api: &mut PhonebookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let Some(fields) = p.collect_new()? else {
        return Ok(());
    };
    let result = api.add_record(fields)?;
    p.messages(&result.messages)
}

fn ask_id<R: BufRead, W: Write>(p: &mut Prompter<R, W>, label: &str) -> Result<Option<RecordId>> {
    let Some(answer) = p.ask(label)? else {
        return Ok(None);
    };
    answer
        .trim()
        .parse::<RecordId>()
        .map(Some)
        .map_err(|_| PhonebookError::InvalidInput(format!("Not a record id: {}", answer.trim())))
}

fn edit<S: DataStore, R: BufRead, W: Write>(
    api: &mut PhonebookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let Some(id) = ask_id(p, "Id of the record to edit: ")? else {
        return Ok(());
    };
    let current = api.record(id)?;
    p.say("Editing record (leave blank to keep):")?;
    let Some(fields) = p.collect_edit(&current)? else {
        return Ok(());
    };
    let result = api.edit_record(id, fields)?;
    p.messages(&result.messages)
}

fn search<S: DataStore, R: BufRead, W: Write>(
    api: &PhonebookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    let Some(query) = p.ask("Text to search for: ")? else {
        return Ok(());
    };
    let result = api.search_records(&query)?;
    if !result.listed_records.is_empty() {
        p.say("Search results:")?;
        print_records(&mut p.out, &result.listed_records)?;
    }
    p.messages(&result.messages)
}
