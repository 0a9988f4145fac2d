// SPDX-License-Identifier: MPL-2.0
//! Headless demo: shows a burst of notifications in an in-memory window and
//! logs the card stack as cards expire.

use corner_toasts::config::{self, Config};
use corner_toasts::host::HeadlessWindow;
use corner_toasts::notifications::{
    Notification, NotificationManager, NotificationPosition, WindowNotificationManager,
};
use corner_toasts::scheduler::LocalScheduler;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Flags {
    config_path: Option<PathBuf>,
    position: Option<NotificationPosition>,
    max_items: Option<usize>,
    count: usize,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        config_path: args.opt_value_from_str("--config")?,
        position: args.opt_value_from_str("--position")?,
        max_items: args.opt_value_from_str("--max-items")?,
        count: args.opt_value_from_str("--count")?.unwrap_or(8),
    })
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "unable to load notification settings, using defaults");
        Config::default()
    });
    if flags.position.is_some() {
        config.position = flags.position;
    }
    if flags.max_items.is_some() {
        config.max_items = flags.max_items;
    }
    config
}

fn log_stack(manager: &WindowNotificationManager) {
    let cards: Vec<String> = manager
        .cards()
        .iter()
        .map(|c| c.content().to_string())
        .collect();
    info!(open = manager.open_count(), ?cards, "card stack");
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };
    let config = load_config(&flags);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start runtime: {err}");
            std::process::exit(1);
        }
    };

    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, async move {
        let window = HeadlessWindow::new();
        let manager = WindowNotificationManager::from_config(&config, LocalScheduler);
        manager.install(&window);
        let anchors: Vec<&str> = manager.anchors().iter().collect();
        info!(
            position = ?manager.position(),
            ?anchors,
            max_items = manager.max_items(),
            "manager ready"
        );

        for i in 0..flags.count {
            let expiration = Duration::from_millis(500 * (i as u64 + 1));
            let index = i;
            manager.show(
                Notification::information(format!("Notification {i}"), "demo")
                    .with_expiration(expiration)
                    .on_close(move || info!(index, "closed")),
            );
        }
        manager.show(Notification::warning("Sticky", "click to dismiss").sticky());
        log_stack(&manager);

        let expiry = Duration::from_millis(500 * (flags.count as u64 + 1));
        tokio::time::sleep(expiry).await;
        log_stack(&manager);

        manager.close_all();
        log_stack(&manager);
    });
}
