mod api;
mod app;
mod cli;
mod event;
mod feed;
mod help;
mod keys;
mod layout;
mod logging;
mod overlay;
mod settings;
mod theme;
mod time;
mod tui;
mod views;

#[cfg(test)]
mod test_utils;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;

use api::{ApodClient, DEMO_API_KEY};
use app::{App, Message};
use cli::{Cli, Commands, KeyArgs, KeyCommands, OutputFormat, ThemeArgs, ThemeCommands};
use event::{Event, EventHandler};
use layout::ScreenLayout;
use settings::Settings;
use theme::{
    ResolvedTheme, ThemeVariant, all_themes, by_name, default_for_variant, detect_terminal_theme,
    load_theme_file,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Theme(theme_args)) => {
            return handle_theme_command(theme_args, cli.config_dir.as_ref());
        }
        Some(Commands::Key(key_args)) => {
            return handle_key_command(key_args, &cli);
        }
        None => {}
    }
    run_tui(cli).await
}

fn handle_theme_command(args: &ThemeArgs, custom_config_dir: Option<&PathBuf>) -> Result<()> {
    match &args.command {
        ThemeCommands::List { verbose } => {
            let themes = all_themes();
            if *verbose {
                for theme in themes {
                    println!(
                        "{:<20} {:?}  {}",
                        theme.name,
                        theme.meta.variant,
                        theme.meta.description.as_deref().unwrap_or("")
                    );
                }
            } else {
                for theme in themes {
                    println!("{}", theme.name);
                }
            }
        }
        ThemeCommands::Show { name, format } => {
            let theme = by_name(name).with_context(|| format!("Theme '{}' not found", name))?;

            match format {
                OutputFormat::Toml => println!("{}", theme::loader::theme_to_toml(&theme)?),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&theme)
                        .context("Failed to serialize theme to JSON")?;
                    println!("{}", json);
                }
            }
        }
        ThemeCommands::Path => {
            if let Some(config_dir) = settings::config_dir(custom_config_dir) {
                println!("{}", settings::themes_dir(&config_dir).display());
            } else {
                eprintln!("Could not determine config directory");
            }
        }
    }
    Ok(())
}

fn handle_key_command(args: &KeyArgs, cli: &Cli) -> Result<()> {
    let config_dir = settings::config_dir(cli.config_dir.as_ref())
        .context("Could not determine config directory")?;
    let path = settings::settings_path(&config_dir);
    let mut settings = Settings::load(&path)?;

    match &args.command {
        KeyCommands::Set { key } => {
            let key = key.trim();
            anyhow::ensure!(!key.is_empty(), "API key must not be empty");
            settings.api_key = Some(key.to_string());
            settings.save(&path)?;
            println!("Saved API key to {}", path.display());
        }
        KeyCommands::Show => {
            let (key, source) = resolve_api_key(cli, &settings);
            println!("{} ({})", mask_key(&key), source);
        }
        KeyCommands::Clear => {
            settings.api_key = None;
            settings.save(&path)?;
            println!("Cleared API key; using {}", DEMO_API_KEY);
        }
    }
    Ok(())
}

/// Priority: CLI flag (or environment) > settings file > shared demo key.
fn resolve_api_key(cli: &Cli, settings: &Settings) -> (String, &'static str) {
    if let Some(key) = &cli.api_key {
        (key.clone(), "command line")
    } else if let Some(key) = &settings.api_key {
        (key.clone(), "settings file")
    } else {
        (DEMO_API_KEY.to_string(), "demo key")
    }
}

fn mask_key(key: &str) -> String {
    if key == DEMO_API_KEY {
        return key.to_string();
    }
    let visible: String = key.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(key.chars().count().saturating_sub(4)))
}

fn resolve_theme(
    cli: &Cli,
    settings: &Settings,
    config_dir: Option<&PathBuf>,
) -> Result<ResolvedTheme> {
    let variant = if cli.dark {
        ThemeVariant::Dark
    } else if cli.light {
        ThemeVariant::Light
    } else {
        detect_terminal_theme()
    };

    // Priority: CLI --theme > settings file > default
    let theme_name = cli.theme.as_ref().or(settings.theme.as_ref());

    if let Some(theme_arg) = theme_name {
        let path = Path::new(theme_arg);
        if path.exists() && path.extension().is_some_and(|e| e == "toml") {
            return Ok(load_theme_file(path)?.into());
        }

        if let Some(theme) = by_name(theme_arg) {
            return Ok(theme.into());
        }

        if let Some(config_dir) = config_dir {
            let custom_path = settings::themes_dir(config_dir).join(format!("{}.toml", theme_arg));
            if custom_path.exists() {
                return Ok(load_theme_file(&custom_path)?.into());
            }
        }

        anyhow::bail!(
            "Theme '{}' not found. Use 'apod theme list' to see available themes.",
            theme_arg
        );
    }

    Ok(default_for_variant(variant))
}

async fn run_tui(cli: Cli) -> Result<()> {
    let config_dir = settings::config_dir(cli.config_dir.as_ref());

    let _log_guard = match &config_dir {
        Some(dir) => {
            let path = settings::log_path(dir);
            let guard = logging::init(&path, cli.verbose)?;
            if cli.verbose {
                eprintln!("Logging to {}", path.display());
            }
            Some(guard)
        }
        None => None,
    };

    let settings = config_dir
        .as_ref()
        .map(|dir| {
            let path = settings::settings_path(dir);
            Settings::load(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {:#}", e);
                Settings::default()
            })
        })
        .unwrap_or_default();
    let resolved_theme = resolve_theme(&cli, &settings, config_dir.as_ref())?;
    let (api_key, key_source) = resolve_api_key(&cli, &settings);
    tracing::info!(theme = %resolved_theme.name, key_source, "starting");

    let mut terminal = tui::init()?;
    let mut app = App::new(resolved_theme, ApodClient::new(api_key), time::system_clock());
    let mut events = EventHandler::new(100);

    let size = terminal.size()?;
    app.update(Message::Resize(size.width, size.height));
    app.mount();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        // Poll async results (non-blocking)
        while let Ok(result) = app.result_rx.try_recv() {
            app.handle_async_result(result);
        }

        if app.should_quit {
            break;
        }

        match events.next().await? {
            Event::Key(key) => {
                if let Some(msg) = keys::handle_key(key, &app) {
                    app.update(msg);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(msg) = mouse_message(mouse) {
                    app.update(msg);
                }
            }
            Event::Resize => {
                let size = terminal.size()?;
                app.update(Message::Resize(size.width, size.height));
            }
            Event::Tick => {}
        }
    }

    tui::restore()?;
    tracing::info!("exiting");
    Ok(())
}

fn mouse_message(mouse: MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::Click(mouse.column, mouse.row)),
        MouseEventKind::ScrollDown => Some(Message::ScrollDown),
        MouseEventKind::ScrollUp => Some(Message::ScrollUp),
        _ => None,
    }
}

fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let layout = ScreenLayout::new(area, app.debug.visible);

    views::gallery::render(frame, app, &layout);

    if let Some(debug_area) = layout.debug {
        views::debug::render(frame, app, debug_area);
    }

    views::detail::render(frame, app, area);
}
