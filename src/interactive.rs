//! Interactive mode
//!
//! Prompt-driven switching over the app registry. The flow is an
//! explicit state machine: app selection, per-app menu, environment
//! entry, confirm, execute. Esc on any menu steps back one state;
//! Esc at the top level exits.

use anyhow::Result;
use chrono::Utc;
use dialoguer::{Confirm, FuzzySelect, Input, Select};
use is_terminal::IsTerminal;

use envswitch::engine::OutputFormat;
use envswitch::loader::ConfigSource;
use envswitch::registry::{AppEntry, Registry, RegistryStore};
use envswitch::switch::{run_switch, SwitchOptions};
use envswitch::ui::theme::icons;

enum Flow {
    SelectApp,
    AppMenu(String),
    PickEnv(String),
    AddApp,
    Done,
}

pub fn cmd_interactive(json: bool) -> Result<()> {
    if json {
        anyhow::bail!("interactive mode has no --json form; use 'switch' instead");
    }
    if !std::io::stdin().is_terminal() {
        println!("Interactive mode needs a terminal.");
        println!("Try: `envswitch switch --env <ENV> --target <FILE>` or `envswitch --help`");
        return Ok(());
    }

    let store = RegistryStore::new();
    let mut registry = store.load()?;

    println!("🔀 envswitch interactive");
    println!("Registry: {}\n", store.path().display());

    let mut state = Flow::SelectApp;
    loop {
        state = match state {
            Flow::SelectApp => select_app(&registry)?,
            Flow::AppMenu(name) => app_menu(&store, &mut registry, name)?,
            Flow::PickEnv(name) => pick_env(&store, &mut registry, name)?,
            Flow::AddApp => add_app(&store, &mut registry)?,
            Flow::Done => break,
        };
    }

    Ok(())
}

fn select_app(registry: &Registry) -> Result<Flow> {
    let mut items = registry.names();
    items.push("[+] Add new app".to_string());
    items.push("[q] Quit".to_string());

    let selection = FuzzySelect::new()
        .with_prompt("Select application")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(match selection {
        Some(i) if i < registry.apps.len() => Flow::AppMenu(items[i].clone()),
        Some(i) if i == registry.apps.len() => Flow::AddApp,
        _ => Flow::Done,
    })
}

fn app_menu(store: &RegistryStore, registry: &mut Registry, name: String) -> Result<Flow> {
    let Some(entry) = registry.get(&name).cloned() else {
        return Ok(Flow::SelectApp);
    };

    let switch_label = if entry.last_env.is_empty() {
        "[1] Switch environment".to_string()
    } else {
        format!("[1] Switch environment (last: {})", entry.last_env)
    };
    let items = vec![
        switch_label,
        "[2] Edit paths".to_string(),
        "[3] Delete app".to_string(),
        "[4] Back".to_string(),
    ];

    let selection = Select::new()
        .with_prompt(format!("{name} - what would you like to do?"))
        .items(&items)
        .default(0)
        .interact_opt()?;

    match selection {
        Some(0) => Ok(Flow::PickEnv(name)),
        Some(1) => {
            edit_paths(store, registry, &name, entry)?;
            Ok(Flow::AppMenu(name))
        }
        Some(2) => {
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete '{name}' from the registry?"))
                .default(false)
                .interact_opt()?
                .unwrap_or(false);
            if confirmed {
                registry.remove(&name);
                store.save(registry)?;
                println!("{} Removed {name}", icons::SUCCESS);
            }
            Ok(Flow::SelectApp)
        }
        _ => Ok(Flow::SelectApp),
    }
}

fn edit_paths(
    store: &RegistryStore,
    registry: &mut Registry,
    name: &str,
    entry: AppEntry,
) -> Result<()> {
    let config_dir: String = Input::new()
        .with_prompt("Config directory")
        .with_initial_text(entry.config_dir.display().to_string())
        .interact_text()?;
    let target_path: String = Input::new()
        .with_prompt("Target file")
        .with_initial_text(entry.target_path.display().to_string())
        .interact_text()?;
    let use_js = Confirm::new()
        .with_prompt("Configs are JS files?")
        .default(entry.use_js)
        .interact()?;

    registry.upsert(
        name,
        AppEntry {
            config_dir: config_dir.into(),
            target_path: target_path.into(),
            use_js,
            ..entry
        },
    );
    store.save(registry)?;
    println!("{} Saved {name}", icons::SUCCESS);
    Ok(())
}

fn add_app(store: &RegistryStore, registry: &mut Registry) -> Result<Flow> {
    let name: String = Input::new().with_prompt("App name").interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Ok(Flow::SelectApp);
    }

    let config_dir: String = Input::new()
        .with_prompt("Config directory")
        .with_initial_text("./configs")
        .interact_text()?;
    let target_path: String = Input::new().with_prompt("Target file").interact_text()?;
    let use_js = Confirm::new()
        .with_prompt("Configs are JS files?")
        .default(false)
        .interact()?;

    registry.upsert(
        name.clone(),
        AppEntry {
            config_dir: config_dir.into(),
            target_path: target_path.into(),
            last_env: String::new(),
            use_js,
            last_used: None,
        },
    );
    store.save(registry)?;
    println!("{} Registered {name}", icons::SUCCESS);

    Ok(Flow::PickEnv(name))
}

fn pick_env(store: &RegistryStore, registry: &mut Registry, name: String) -> Result<Flow> {
    let Some(entry) = registry.get(&name).cloned() else {
        return Ok(Flow::SelectApp);
    };

    let mut prompt = Input::new().with_prompt("Environment");
    if !entry.last_env.is_empty() {
        prompt = prompt.with_initial_text(entry.last_env.clone());
    }
    let environment: String = prompt.interact_text()?;
    let environment = environment.trim().to_string();
    if environment.is_empty() {
        return Ok(Flow::AppMenu(name));
    }

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Switch {name} to '{environment}' ({} -> {})?",
            entry.config_dir.display(),
            entry.target_path.display()
        ))
        .default(true)
        .interact_opt()?
        .unwrap_or(false);
    if !confirmed {
        return Ok(Flow::AppMenu(name));
    }

    let options = SwitchOptions {
        environment: environment.clone(),
        config_dir: entry.config_dir.clone(),
        target: entry.target_path.clone(),
        format: OutputFormat::CompactObject,
        source: if entry.use_js {
            ConfigSource::Js
        } else {
            ConfigSource::Json
        },
        is_dist: false,
        dry_run: false,
    };
    let outcome = run_switch(&options)?;

    if outcome.written {
        let changes = envswitch::diff::diff(&outcome.original, &outcome.updated);
        println!(
            "{} Switched {name} to '{environment}' ({})",
            icons::SUCCESS,
            changes.summary()
        );
    } else {
        println!("{} {name} already on '{environment}', nothing to write", icons::SUCCESS);
    }

    store.update_app(
        &name,
        AppEntry {
            last_env: environment,
            last_used: Some(Utc::now()),
            ..entry
        },
    )?;
    *registry = store.load()?;

    Ok(Flow::Done)
}
