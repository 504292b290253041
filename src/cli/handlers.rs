use std::path::PathBuf;

use crate::cli::commands::{AddArgs, Cli, Commands, EditArgs, IdArgs, ListArgs};
use crate::cli::output::{self, item_to_json};
use crate::io::store;
use crate::model::Filter;
use crate::ops::list_ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = resolve_store_path(cli.file.as_deref())?;

    match cli.command {
        None => {
            // No subcommand → TUI; main.rs routes there before dispatch
            eprintln!("no subcommand (try `tick --help`)");
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(&path, args, json),
            Commands::Add(args) => cmd_add(&path, args, json),
            Commands::Toggle(args) => cmd_toggle(&path, args),
            Commands::Edit(args) => cmd_edit(&path, args),
            Commands::Rm(args) => cmd_rm(&path, args),
            Commands::Clear => cmd_clear(&path),
        },
    }
}

/// Store path: `-f` override, else the platform default
pub fn resolve_store_path(file: Option<&str>) -> Result<PathBuf, store::StoreError> {
    match file {
        Some(f) => Ok(PathBuf::from(f)),
        None => store::default_store_path(),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(
    path: &std::path::Path,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = Filter::parse(&args.filter)
        .ok_or_else(|| format!("unknown filter '{}' (all, active, completed)", args.filter))?;

    let items = store::load(path);
    let visible = list_ops::visible(&items, filter);
    output::print_list(&visible, &items, json);
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(
    path: &std::path::Path,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    let mut items = store::load(path);

    // Blank text is a silent no-op, not an error
    let Some(id) = list_ops::add(&mut items, &text) else {
        return Ok(());
    };
    store::save(path, &items)?;

    if json {
        if let Some(item) = list_ops::find(&items, &id) {
            println!(
                "{}",
                serde_json::to_string_pretty(&item_to_json(item)).unwrap_or_default()
            );
        }
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_toggle(path: &std::path::Path, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut items = store::load(path);
    // Unknown id → silent no-op
    let Some(id) = list_ops::resolve_id(&items, &args.id) else {
        return Ok(());
    };
    if list_ops::toggle(&mut items, &id) {
        store::save(path, &items)?;
    }
    Ok(())
}

fn cmd_edit(path: &std::path::Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut items = store::load(path);
    let Some(id) = list_ops::resolve_id(&items, &args.id) else {
        return Ok(());
    };
    if list_ops::edit(&mut items, &id, &args.text.join(" ")) {
        store::save(path, &items)?;
    }
    Ok(())
}

fn cmd_rm(path: &std::path::Path, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut items = store::load(path);
    let Some(id) = list_ops::resolve_id(&items, &args.id) else {
        return Ok(());
    };
    if list_ops::remove(&mut items, &id) {
        store::save(path, &items)?;
    }
    Ok(())
}

fn cmd_clear(path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut items = store::load(path);
    if list_ops::clear_completed(&mut items) {
        store::save(path, &items)?;
    }
    Ok(())
}
