use super::print::{print_config, print_messages, print_page_footer, print_records};
use super::prompt::{run_menu, Prompter};
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::{CmdResult, ConfigAction, PhonebookApi, PhonebookPaths, RecordInput};
use phonebook::commands;
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::model::RecordId;
use phonebook::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "PHONEBOOK_HOME";

struct AppContext {
    api: PhonebookApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = PhonebookPaths::new(resolve_data_dir(&cli)?);
    tracing::debug!(root = %paths.root.display(), "using data dir");

    // These don't need the records loaded
    match &cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&paths, key.clone(), value.clone())
        }
        Some(Commands::Init) => return emit(&commands::init::run(&paths)?),
        _ => {}
    }

    let mut ctx = init_context(&paths)?;

    match cli.command {
        Some(Commands::List { page, per_page }) => handle_list(&ctx, page, per_page),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::Show { ids }) => handle_show(&ctx, &ids),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
        Some(Commands::Config { .. }) | Some(Commands::Init) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "phonebook", "phonebook").ok_or_else(|| {
        PhonebookError::Config(format!(
            "Could not determine a data directory, set {} or pass --data-dir",
            HOME_ENV
        ))
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(paths: &PhonebookPaths) -> Result<AppContext> {
    let config = PhonebookConfig::load(&paths.root)?;
    let store = FileStore::new(paths.data_file(&config));
    tracing::debug!(file = %store.path().display(), "opening records file");
    let api = PhonebookApi::new(store, config)?;
    Ok(AppContext { api })
}

fn emit(result: &CmdResult) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_records(&mut out, &result.listed_records)?;
    if let Some(info) = &result.page {
        print_page_footer(&mut out, info)?;
    }
    if let Some(config) = &result.config {
        print_config(&mut out, config)?;
    }
    print_messages(&mut out, &result.messages)?;
    out.flush()?;
    Ok(())
}

fn handle_list(ctx: &AppContext, page: usize, per_page: Option<usize>) -> Result<()> {
    let result = ctx.api.list_records(page, per_page)?;
    emit(&result)
}

fn handle_add(ctx: &mut AppContext, fields: FieldArgs) -> Result<()> {
    let fields = RecordInput::from(fields).into_fields();
    let result = ctx.api.add_record(fields)?;
    emit(&result)
}

fn handle_edit(ctx: &mut AppContext, id: RecordId, fields: FieldArgs) -> Result<()> {
    let result = ctx.api.patch_record(id, RecordInput::from(fields))?;
    emit(&result)
}

fn handle_show(ctx: &AppContext, ids: &[RecordId]) -> Result<()> {
    let result = ctx.api.view_records(ids)?;
    emit(&result)
}

fn handle_search(ctx: &AppContext, query: Vec<String>) -> Result<()> {
    let result = ctx.api.search_records(&query.join(" "))?;
    emit(&result)
}

fn handle_config(paths: &PhonebookPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    emit(&commands::config::run(paths, action)?)
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    run_menu(&mut ctx.api, &mut prompter)
}
