//! Envswitch CLI - environment configuration switcher
//!
//! Usage: envswitch [COMMAND]
//!
//! Commands:
//!   switch       Rewrite the target file for an environment
//!   diff         Preview the rewrite without writing
//!   apps         List registered applications
//!   interactive  Prompt-driven switching over the registry
//!
//! Run without a command on a terminal to enter interactive mode.

mod interactive;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;

/// Envswitch - environment configuration switcher
#[derive(Parser, Debug)]
#[command(name = "envswitch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'envswitch' without arguments for interactive mode.")]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite the target file for an environment
    Switch {
        /// Environment name (selects config.<ENV>.json in the config directory)
        #[arg(short, long)]
        env: String,

        /// Directory holding per-environment config files [default: ./configs]
        #[arg(short, long)]
        config_dir: Option<PathBuf>,

        /// File to rewrite in place
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Registered app supplying config dir and target
        #[arg(short, long)]
        app: Option<String>,

        /// Rewrite style: compact-object or var-declarations
        #[arg(long, default_value = "compact-object")]
        format: String,

        /// Read configs from legacy JS files instead of JSON
        #[arg(long)]
        js: bool,

        /// Mark the target as a production build (isDist: true)
        #[arg(long)]
        dist: bool,

        /// Dry run - show the diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview the rewrite without writing
    Diff {
        /// Environment name (selects config.<ENV>.json in the config directory)
        #[arg(short, long)]
        env: String,

        /// Directory holding per-environment config files [default: ./configs]
        #[arg(short, long)]
        config_dir: Option<PathBuf>,

        /// File to compare against
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Registered app supplying config dir and target
        #[arg(short, long)]
        app: Option<String>,

        /// Rewrite style: compact-object or var-declarations
        #[arg(long, default_value = "compact-object")]
        format: String,

        /// Read configs from legacy JS files instead of JSON
        #[arg(long)]
        js: bool,

        /// Mark the target as a production build (isDist: true)
        #[arg(long)]
        dist: bool,
    },

    /// List registered applications
    Apps,

    /// Prompt-driven switching over the registry
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Switch { env, config_dir, target, app, format, js, dist, dry_run }) => {
            cmd_switch(&env, config_dir, target, app.as_deref(), &format, js, dist, dry_run, cli.json)
        }
        Some(Commands::Diff { env, config_dir, target, app, format, js, dist }) => {
            cmd_diff(&env, config_dir, target, app.as_deref(), &format, js, dist, cli.json)
        }
        Some(Commands::Apps) => {
            cmd_apps(cli.json)
        }
        Some(Commands::Interactive) => {
            interactive::cmd_interactive(cli.json)
        }
        None => {
            if std::io::stdin().is_terminal() {
                interactive::cmd_interactive(cli.json)
            } else {
                eprintln!("No command provided.");
                eprintln!("Try: `envswitch switch --env <ENV> --target <FILE>` or `envswitch --help`");
                std::process::exit(2);
            }
        }
    }
}

/// Paths for one run, either from flags or from a registered app.
#[derive(Debug)]
struct ResolvedTarget {
    config_dir: PathBuf,
    target: PathBuf,
    use_js: bool,
    /// Registry entry to refresh after a successful switch
    app: Option<(String, envswitch::registry::AppEntry)>,
}

fn resolve_target(
    app: Option<&str>,
    config_dir: Option<PathBuf>,
    target: Option<PathBuf>,
    js: bool,
) -> Result<ResolvedTarget> {
    use envswitch::registry::RegistryStore;

    if let Some(name) = app {
        let store = RegistryStore::new();
        let registry = store.load()?;
        let entry = registry
            .get(name)
            .cloned()
            .ok_or_else(|| envswitch::EnvSwitchError::UnknownApp { name: name.to_string() })?;
        return Ok(ResolvedTarget {
            config_dir: config_dir.unwrap_or_else(|| entry.config_dir.clone()),
            target: target.unwrap_or_else(|| entry.target_path.clone()),
            use_js: js || entry.use_js,
            app: Some((name.to_string(), entry)),
        });
    }

    let Some(target) = target else {
        anyhow::bail!("either --target or --app is required");
    };
    Ok(ResolvedTarget {
        config_dir: config_dir.unwrap_or_else(|| PathBuf::from("./configs")),
        target,
        use_js: js,
        app: None,
    })
}

#[allow(clippy::too_many_arguments)]
fn cmd_switch(
    env: &str,
    config_dir: Option<PathBuf>,
    target: Option<PathBuf>,
    app: Option<&str>,
    format: &str,
    js: bool,
    dist: bool,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    use chrono::Utc;
    use envswitch::engine::OutputFormat;
    use envswitch::loader::ConfigSource;
    use envswitch::registry::{AppEntry, RegistryStore};
    use envswitch::switch::{run_switch, SwitchOptions};
    use envswitch::ui;

    let format: OutputFormat = format.parse().map_err(anyhow::Error::msg)?;
    let resolved = resolve_target(app, config_dir, target, js)?;

    if !json {
        println!("🔀 Envswitch");
        println!("Environment: {env}");
        println!("Target: {}", resolved.target.display());
        if dry_run {
            println!("Mode: Dry run");
        }
        if dist {
            println!("Mode: Production build (isDist)");
        }
    }

    let options = SwitchOptions {
        environment: env.to_string(),
        config_dir: resolved.config_dir,
        target: resolved.target.clone(),
        format,
        source: if resolved.use_js { ConfigSource::Js } else { ConfigSource::Json },
        is_dist: dist,
        dry_run,
    };
    let outcome = run_switch(&options)?;
    let changes = envswitch::diff::diff(&outcome.original, &outcome.updated);

    if json {
        let output = serde_json::json!({
            "event": "switch",
            "status": "success",
            "environment": env,
            "config": outcome.config_path.display().to_string(),
            "target": resolved.target.display().to_string(),
            "changed": outcome.changed(),
            "written": outcome.written,
            "additions": changes.additions,
            "deletions": changes.deletions,
            "warnings": outcome.warnings.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = ui::detect_capabilities();
        println!("\n✓ Loaded {}", outcome.config_path.display());
        ui::print_config_warnings(&outcome.warnings, &caps);

        if dry_run && outcome.changed() {
            println!();
            print!(
                "{}",
                ui::render_unified_diff_with_line_numbers(
                    &resolved.target.display().to_string(),
                    &outcome.original,
                    &outcome.updated,
                    caps.supports_color,
                )
            );
            println!();
            println!("📊 Would update {} ({})", resolved.target.display(), changes.summary());
        } else if outcome.written {
            println!("✓ Updated {} ({})", resolved.target.display(), changes.summary());
        } else {
            println!("✓ Already up to date");
        }
    }

    // Remember the switch on the app entry, but never for previews
    if !dry_run {
        if let Some((name, entry)) = resolved.app {
            let store = RegistryStore::new();
            store.update_app(
                &name,
                AppEntry {
                    last_env: env.to_string(),
                    last_used: Some(Utc::now()),
                    ..entry
                },
            )?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_diff(
    env: &str,
    config_dir: Option<PathBuf>,
    target: Option<PathBuf>,
    app: Option<&str>,
    format: &str,
    js: bool,
    dist: bool,
    json: bool,
) -> Result<()> {
    use envswitch::engine::OutputFormat;
    use envswitch::loader::ConfigSource;
    use envswitch::switch::{run_switch, SwitchOptions};
    use envswitch::ui;

    let format: OutputFormat = format.parse().map_err(anyhow::Error::msg)?;
    let resolved = resolve_target(app, config_dir, target, js)?;

    if !json {
        println!("📊 Envswitch Diff");
        println!("Environment: {env}");
        println!("Target: {}", resolved.target.display());
        println!();
    }

    let options = SwitchOptions {
        environment: env.to_string(),
        config_dir: resolved.config_dir,
        target: resolved.target.clone(),
        format,
        source: if resolved.use_js { ConfigSource::Js } else { ConfigSource::Json },
        is_dist: dist,
        dry_run: true,
    };
    let outcome = run_switch(&options)?;
    let changes = envswitch::diff::diff(&outcome.original, &outcome.updated);

    if json {
        let output = serde_json::json!({
            "event": "diff",
            "environment": env,
            "target": resolved.target.display().to_string(),
            "changed": outcome.changed(),
            "additions": changes.additions,
            "deletions": changes.deletions,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = ui::detect_capabilities();
        ui::print_config_warnings(&outcome.warnings, &caps);

        if outcome.changed() {
            print!(
                "{}",
                ui::render_unified_diff_with_line_numbers(
                    &resolved.target.display().to_string(),
                    &outcome.original,
                    &outcome.updated,
                    caps.supports_color,
                )
            );
            println!();
            println!("Summary: {}", changes.summary());
        } else {
            println!("No changes.");
        }
    }

    Ok(())
}

fn cmd_apps(json: bool) -> Result<()> {
    use envswitch::registry::RegistryStore;

    let store = RegistryStore::new();
    let registry = store.load()?;

    if json {
        let apps: Vec<_> = registry
            .apps
            .iter()
            .map(|(name, entry)| {
                serde_json::json!({
                    "name": name,
                    "configDir": entry.config_dir.display().to_string(),
                    "targetPath": entry.target_path.display().to_string(),
                    "lastEnv": entry.last_env,
                    "useJS": entry.use_js,
                    "lastUsed": entry.last_used.map(|t| t.to_rfc3339()),
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "apps",
            "count": apps.len(),
            "apps": apps,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No apps registered.");
        println!("Run `envswitch interactive` to add one.");
        return Ok(());
    }

    println!("📇 Registered apps ({}):\n", registry.apps.len());
    for (name, entry) in &registry.apps {
        println!("┌─ {name}");
        println!("│  Config dir: {}", entry.config_dir.display());
        println!("│  Target: {}", entry.target_path.display());
        println!("│  Source: {}", if entry.use_js { "js" } else { "json" });
        if !entry.last_env.is_empty() {
            match entry.last_used {
                Some(t) => println!("│  Last env: {} ({})", entry.last_env, t.format("%Y-%m-%d %H:%M UTC")),
                None => println!("│  Last env: {}", entry.last_env),
            }
        }
        println!("└─");
    }

    Ok(())
}
