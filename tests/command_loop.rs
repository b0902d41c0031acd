//! Tests for the async command loop that feeds fetch results to the UI.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use common::sample_profiles;
use swipedeck::profile::{Profile, ProfileSource};
use swipedeck::ui::app::UiCommand;
use swipedeck::ui::events::AppEvent;
use swipedeck::ui::runtime::serve_commands;
use tokio::sync::mpsc;

/// Returns `count` canned profiles and counts calls.
#[derive(Default)]
struct StubSource {
    calls: AtomicUsize,
}

impl ProfileSource for StubSource {
    async fn fetch_batch(&self, count: usize) -> Vec<Profile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        sample_profiles(count)
    }
}

fn loaded_counts(events: &std_mpsc::Receiver<AppEvent>) -> Vec<usize> {
    events
        .try_iter()
        .filter_map(|event| match event {
            AppEvent::ProfilesLoaded(profiles) => Some(profiles.len()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn fetch_results_arrive_in_request_order() {
    let source = Arc::new(StubSource::default());
    let (command_tx, command_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = std_mpsc::channel();
    let task = tokio::spawn(serve_commands(command_rx, source.clone(), event_tx));

    command_tx
        .send(UiCommand::FetchBatch { count: 3 })
        .await
        .unwrap();
    command_tx
        .send(UiCommand::FetchBatch { count: 1 })
        .await
        .unwrap();
    drop(command_tx);
    task.await.unwrap();

    assert_eq!(loaded_counts(&event_rx), vec![3, 1]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn loop_stops_when_ui_hangs_up() {
    let source = Arc::new(StubSource::default());
    let (command_tx, command_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = std_mpsc::channel();
    drop(event_rx);
    let task = tokio::spawn(serve_commands(command_rx, source.clone(), event_tx));

    command_tx
        .send(UiCommand::FetchBatch { count: 2 })
        .await
        .unwrap();
    task.await.unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}
