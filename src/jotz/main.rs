use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use jotz::api::{CmdMessage, ConfigAction, JotzApi, MessageLevel};
use jotz::config::JotzConfig;
use jotz::editor::edit_text;
use jotz::error::{JotzError, Result};
use jotz::model::{Area, TrackedEntry};
use jotz::store::fs::FsStore;
use jotz::tracked::TrackedList;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: JotzApi<FsStore>,
    area: Area,
    config_dir: PathBuf,
}

struct AppDirs {
    persistent: PathBuf,
    cache: PathBuf,
    config: PathBuf,
}

fn resolve_dirs() -> Result<AppDirs> {
    // JOTZ_HOME redirects all storage under one root, primarily for tests.
    if let Ok(home) = std::env::var("JOTZ_HOME") {
        if !home.trim().is_empty() {
            let root = PathBuf::from(home);
            return Ok(AppDirs {
                persistent: root.join("files"),
                cache: root.join("cache"),
                config: root,
            });
        }
    }

    let dirs = ProjectDirs::from("com", "jotz", "jotz").ok_or_else(|| {
        JotzError::Store("could not determine application directories".to_string())
    })?;
    Ok(AppDirs {
        persistent: dirs.data_dir().to_path_buf(),
        cache: dirs.cache_dir().to_path_buf(),
        config: dirs.config_dir().to_path_buf(),
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dirs = resolve_dirs()?;

    let config = JotzConfig::load(&dirs.config).unwrap_or_default();
    if !config.color {
        colored::control::set_override(false);
    }

    let area = if cli.cache { Area::Cache } else { Area::Persistent };
    let tracked = TrackedList::load(&dirs.config)?;
    let store = FsStore::new(dirs.persistent, dirs.cache);

    Ok(AppContext {
        api: JotzApi::with_tracked(store, tracked),
        area,
        config_dir: dirs.config,
    })
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { name }) => handle_create(&mut ctx, &name),
        Some(Commands::Write { name, content }) => handle_write(&mut ctx, &name, content),
        Some(Commands::Read { name }) => handle_read(&ctx, &name),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, &name),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Path { name }) => handle_path(&ctx, &name),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn handle_create(ctx: &mut AppContext, name: &str) -> Result<()> {
    validate_name(name)?;
    let result = ctx.api.create_jot(ctx.area, name)?;
    print_messages(&result.messages);
    save_tracked(ctx)
}

fn handle_write(ctx: &mut AppContext, name: &str, content: Option<String>) -> Result<()> {
    validate_name(name)?;
    let content = match content {
        Some(text) => text,
        None => {
            // No content argument: open the editor on whatever is there now.
            let current = match ctx.api.read_jot(ctx.area, name) {
                Ok(result) => result
                    .jots
                    .first()
                    .map(|j| j.content.clone())
                    .unwrap_or_default(),
                Err(JotzError::NotFound { .. }) => String::new(),
                Err(e) => return Err(e),
            };
            edit_text(&current)?
        }
    };

    if content.is_empty() {
        return Err(JotzError::Api("Content cannot be empty".to_string()));
    }

    let result = ctx.api.write_jot(ctx.area, name, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_read(ctx: &AppContext, name: &str) -> Result<()> {
    validate_name(name)?;
    let result = ctx.api.read_jot(ctx.area, name)?;
    for jot in &result.jots {
        println!("{}", jot.content);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    validate_name(name)?;
    let result = ctx.api.delete_jot(ctx.area, name)?;
    print_messages(&result.messages);
    save_tracked(ctx)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tracked()?;
    print_tracked(&result.tracked);
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext, name: &str) -> Result<()> {
    validate_name(name)?;
    let result = ctx.api.jot_path(ctx.area, name)?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(&ctx.config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            println!("color = {}", config.color);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn save_tracked(ctx: &AppContext) -> Result<()> {
    ctx.api.tracked().save(&ctx.config_dir)
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(JotzError::Api("File name cannot be empty".to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(JotzError::Api(format!(
            "File name '{}' must not contain path separators",
            name
        )));
    }
    if name == "." || name == ".." {
        return Err(JotzError::Api(format!(
            "'{}' is not a valid file name",
            name
        )));
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 40;

fn print_tracked(entries: &[TrackedEntry]) {
    if entries.is_empty() {
        println!("No tracked files.");
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        let padding = " ".repeat(NAME_WIDTH.saturating_sub(entry.name.width()));
        let area_tag = match entry.area {
            Area::Persistent => "[persistent]".normal(),
            Area::Cache => "[cache]".yellow(),
        };
        println!(
            "{}. {}{} {} {}",
            i + 1,
            entry.name,
            padding,
            area_tag,
            format_time_ago(entry.created_at).dimmed()
        );
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
