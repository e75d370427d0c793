// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! collapse-settings: inspect and edit the stored launcher screen settings.
//!
//! Reads go through the fail-safe `load` path (corrupt or missing entries show
//! as defaults, with the error on stderr). `set` uses the typed save so a
//! failed write is reported through the exit status.

use anyhow::{bail, Context, Result};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use collapse_settings::{GraphicsApi, ScreenSettings, SettingsStore, SettingsValue, StoreOptions};
use collapse_settings_fs::FsBackingStore;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "collapse-settings",
    version,
    about = "Inspect and edit Collapse launcher screen settings",
    disable_help_subcommand = true
)]
struct Cli {
    /// Directory holding settings entries (default: platform config dir).
    #[arg(long, env = "COLLAPSE_SETTINGS_ROOT", global = true)]
    root: Option<PathBuf>,

    /// Log stored payloads on every load/save.
    #[arg(
        long,
        env = "COLLAPSE_SETTINGS_DEBUG_PAYLOADS",
        global = true,
        value_parser = FalseyValueParser::new()
    )]
    debug_payloads: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored screen settings (defaults if absent or unreadable).
    Show(ShowArgs),
    /// Change one or more fields and save.
    Set(SetArgs),
    /// Delete the stored entry; the next load returns defaults.
    Reset,
    /// List the graphics API modes.
    Apis,
    /// Print the path of the backing file.
    Path,
}

#[derive(Args)]
struct ShowArgs {
    /// Print the wire JSON payload instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SetArgs {
    /// Run the game at a custom resolution.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    custom_resolution: Option<bool>,

    /// Run the game in exclusive fullscreen.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    exclusive_fullscreen: Option<bool>,

    /// Run the game in a borderless window.
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    borderless: Option<bool>,

    /// Graphics API wire value (see `apis`).
    #[arg(long, value_name = "0-4", value_parser = clap::value_parser!(u8).range(0..=4))]
    graphics_api: Option<u8>,
}

impl SetArgs {
    fn is_empty(&self) -> bool {
        self.custom_resolution.is_none()
            && self.exclusive_fullscreen.is_none()
            && self.borderless.is_none()
            && self.graphics_api.is_none()
    }

    fn apply(&self, settings: &mut ScreenSettings) -> Result<()> {
        if let Some(v) = self.custom_resolution {
            settings.use_custom_resolution = v;
        }
        if let Some(v) = self.exclusive_fullscreen {
            settings.use_exclusive_fullscreen = v;
        }
        if let Some(v) = self.borderless {
            settings.use_borderless_screen = v;
        }
        if let Some(v) = self.graphics_api {
            settings.graphics_api = GraphicsApi::try_from(v)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose || cli.debug_payloads);

    let mut out = io::stdout().lock();
    match &cli.command {
        Commands::Show(args) => {
            let settings: ScreenSettings = settings_store(&cli).load();
            if args.json {
                writeln!(out, "{}", serde_json::to_string(&settings)?)?;
            } else {
                write_settings(&mut out, &settings)?;
            }
        }
        Commands::Set(args) => {
            if args.is_empty() {
                bail!("nothing to set (pass at least one field option)");
            }
            let store = settings_store(&cli);
            let mut settings: ScreenSettings = store.load();
            args.apply(&mut settings)?;
            store
                .try_save(&settings)
                .context("failed to save screen settings")?;
            write_settings(&mut out, &settings)?;
        }
        Commands::Reset => {
            let backing = open_backing(cli.root.as_deref())?;
            let path = backing.entry_path(ScreenSettings::VALUE_NAME)?;
            if backing.remove(ScreenSettings::VALUE_NAME)? {
                writeln!(out, "removed {}", path.display())?;
            } else {
                writeln!(out, "nothing stored at {}", path.display())?;
            }
        }
        Commands::Apis => {
            let default = GraphicsApi::default();
            for api in GraphicsApi::ALL {
                let marker = if api == default { " (default)" } else { "" };
                writeln!(out, "{}  {api}{marker}", api.as_u8())?;
            }
        }
        Commands::Path => {
            let backing = open_backing(cli.root.as_deref())?;
            let path = backing.entry_path(ScreenSettings::VALUE_NAME)?;
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn open_backing(root: Option<&Path>) -> Result<FsBackingStore> {
    match root {
        Some(dir) => FsBackingStore::at(dir)
            .with_context(|| format!("failed to open settings root {}", dir.display())),
        None => FsBackingStore::new().context("failed to open platform config dir"),
    }
}

/// Build the store; a root that cannot be opened leaves it uninitialized.
fn settings_store(cli: &Cli) -> SettingsStore<FsBackingStore> {
    let root = match open_backing(cli.root.as_deref()) {
        Ok(backing) => Some(backing),
        Err(err) => {
            tracing::warn!("settings root unavailable; settings won't persist: {err:#}");
            None
        }
    };
    SettingsStore::with_root(root).with_options(StoreOptions {
        dump_payloads: cli.debug_payloads,
    })
}

fn write_settings(out: &mut impl Write, settings: &ScreenSettings) -> io::Result<()> {
    writeln!(
        out,
        "{:<24}{}",
        "UseCustomResolution", settings.use_custom_resolution
    )?;
    writeln!(
        out,
        "{:<24}{}",
        "UseExclusiveFullscreen", settings.use_exclusive_fullscreen
    )?;
    writeln!(
        out,
        "{:<24}{}",
        "UseBorderlessScreen", settings.use_borderless_screen
    )?;
    writeln!(
        out,
        "{:<24}{} ({})",
        "GameGraphicsAPI",
        settings.graphics_api.as_u8(),
        settings.graphics_api
    )
}
