use clap::{Args, Parser, Subcommand};
use phonebook::api::RecordInput;
use phonebook::model::RecordId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "A small contact directory for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the records file and config (default: $PHONEBOOK_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of records
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Records per page (default from config)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Add a record
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a record; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        /// Id of the record
        id: RecordId,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show one or more records by id
    #[command(alias = "v")]
    Show {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<RecordId>,
    },

    /// Search all text fields, ignoring case
    #[command(alias = "s")]
    Search {
        /// Words are joined with spaces into one query
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (per-page, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    Init,

    /// Interactive menu (the default)
    Menu,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Middle name
    #[arg(long)]
    pub middle_name: Option<String>,

    /// Organization
    #[arg(long)]
    pub org: Option<String>,

    /// Work phone
    #[arg(long)]
    pub work_phone: Option<String>,

    /// Personal phone
    #[arg(long)]
    pub personal_phone: Option<String>,
}

impl From<FieldArgs> for RecordInput {
    fn from(args: FieldArgs) -> Self {
        RecordInput {
            last_name: args.last_name,
            first_name: args.first_name,
            middle_name: args.middle_name,
            organization: args.org,
            work_phone: args.work_phone,
            personal_phone: args.personal_phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_subcommand_means_menu() {
        assert!(parse(&["phonebook"]).command.is_none());
    }

    #[test]
    fn list_defaults_to_first_page() {
        match parse(&["phonebook", "ls"]).command {
            Some(Commands::List { page, per_page }) => {
                assert_eq!(page, 1);
                assert_eq!(per_page, None);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn add_collects_field_flags() {
        let cli = parse(&[
            "phonebook",
            "add",
            "--last-name",
            "Smith",
            "--org",
            "Acme",
        ]);
        match cli.command {
            Some(Commands::Add { fields }) => {
                let input = RecordInput::from(fields);
                assert_eq!(input.last_name.as_deref(), Some("Smith"));
                assert_eq!(input.organization.as_deref(), Some("Acme"));
                assert_eq!(input.work_phone, None);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn edit_requires_numeric_id() {
        assert!(Cli::try_parse_from(["phonebook", "edit", "abc"]).is_err());
        match parse(&["phonebook", "edit", "4", "--work-phone", ""]).command {
            Some(Commands::Edit { id, fields }) => {
                assert_eq!(id, 4);
                assert_eq!(fields.work_phone.as_deref(), Some(""));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["phonebook", "search", "jane", "doe", "--data-dir", "/tmp/pb", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/pb")));
        match cli.command {
            Some(Commands::Search { query }) => assert_eq!(query.join(" "), "jane doe"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
