// SPDX-License-Identifier: MPL-2.0
use corner_toasts::config::{self, Config};
use corner_toasts::host::HeadlessWindow;
use corner_toasts::notifications::{
    Card, Notification, NotificationManager, NotificationMessage, NotificationPosition,
    NotificationType, WindowNotificationManager,
};
use corner_toasts::scheduler::LocalScheduler;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;
use tokio::task::LocalSet;

fn installed_manager(window: &HeadlessWindow) -> WindowNotificationManager {
    let manager = WindowNotificationManager::with_host(Some(window), LocalScheduler);
    assert!(manager.is_installed());
    manager
}

fn show_text(manager: &WindowNotificationManager, text: &str) -> Card {
    manager.show_content(
        text,
        NotificationType::Information,
        None,
        None,
        None,
        &[],
    )
}

fn texts(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.content().to_string()).collect()
}

#[tokio::test(start_paused = true)]
async fn default_expiration_closes_after_five_seconds() {
    LocalSet::new()
        .run_until(async {
            let window = HeadlessWindow::new();
            let manager = installed_manager(&window);
            let card = show_text(&manager, "saved");

            tokio::time::sleep(Duration::from_millis(4900)).await;
            assert!(!card.is_closing());

            tokio::time::sleep(Duration::from_millis(200)).await;
            assert!(card.is_closing());
            assert!(manager.cards().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn explicit_expiration_closes_after_that_duration() {
    LocalSet::new()
        .run_until(async {
            let window = HeadlessWindow::new();
            let manager = installed_manager(&window);
            let card = manager.show(
                Notification::information("Indexing", "42 files")
                    .with_expiration(Duration::from_secs(2)),
            );

            tokio::time::sleep(Duration::from_millis(1900)).await;
            assert!(!card.is_closing());

            tokio::time::sleep(Duration::from_millis(200)).await;
            assert!(card.is_closing());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn sticky_notification_stays_until_closed() {
    LocalSet::new()
        .run_until(async {
            let window = HeadlessWindow::new();
            let manager = installed_manager(&window);
            let card = manager.show(Notification::error("Export failed", "disk full").sticky());

            tokio::time::sleep(Duration::from_secs(600)).await;
            assert!(!card.is_closing());
            assert_eq!(manager.open_count(), 1);

            manager.handle_message(&NotificationMessage::Close(card.id()));
            assert!(card.is_closing());
            assert!(manager.cards().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn click_closes_early_and_pending_timer_is_harmless() {
    LocalSet::new()
        .run_until(async {
            let window = HeadlessWindow::new();
            let manager = installed_manager(&window);
            let clicks = Rc::new(Cell::new(0));
            let closes = Rc::new(Cell::new(0));
            let on_click = Rc::clone(&clicks);
            let on_close = Rc::clone(&closes);
            let card = manager.show(
                Notification::information("Update ready", "restart to apply")
                    .on_click(move || on_click.set(on_click.get() + 1))
                    .on_close(move || on_close.set(on_close.get() + 1)),
            );

            manager.handle_message(&NotificationMessage::Activate(card.id()));
            tokio::time::sleep(Duration::from_secs(6)).await;

            assert_eq!(clicks.get(), 1);
            assert_eq!(closes.get(), 1);
            assert!(manager.cards().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn fifo_eviction_with_cap_of_two() {
    LocalSet::new()
        .run_until(async {
            let window = HeadlessWindow::new();
            let manager = installed_manager(&window);
            manager.set_max_items(2);

            let a = show_text(&manager, "A");
            let b = show_text(&manager, "B");
            let c = show_text(&manager, "C");

            assert!(a.is_closing());
            assert!(!b.is_closing());
            assert!(!c.is_closing());
            assert_eq!(texts(&manager.cards()), vec!["B", "C"]);
        })
        .await;
}

#[test]
fn show_without_runtime_needs_no_scheduler_for_sticky_cards() {
    let window = HeadlessWindow::new();
    let manager = installed_manager(&window);

    let card = manager.show(Notification::warning("Offline", "retrying").sticky());
    assert_eq!(manager.open_count(), 1);
    card.activate();
    assert_eq!(manager.open_count(), 0);
}

#[test]
fn position_from_config_file_sets_single_anchor() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        position: Some(NotificationPosition::BottomLeft),
        max_items: Some(3),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let manager = WindowNotificationManager::from_config(&loaded, LocalScheduler);

    let anchors: Vec<&str> = manager.anchors().iter().collect();
    assert_eq!(anchors, vec![":bottomleft"]);
    assert_eq!(manager.max_items(), 3);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn window_without_overlay_degrades_to_untracked_cards() {
    let window = HeadlessWindow::without_overlay();
    let manager = WindowNotificationManager::with_host(Some(&window), LocalScheduler);

    assert!(!manager.is_installed());
    let card = manager.show(Notification::information("Hidden", "no overlay").sticky());
    assert!(manager.cards().is_empty());
    assert!(card.close());
}
