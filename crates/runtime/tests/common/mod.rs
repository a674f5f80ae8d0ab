#![allow(dead_code)]

use std::path::PathBuf;

use anatomy_content::ContentFactory;
use anatomy_runtime::{Event, Notice, Runtime, Topic};
use tokio::sync::broadcast;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Runtime over the shipped content, with logs routed to the test harness.
pub fn runtime() -> Runtime {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    Runtime::from_content(&ContentFactory::new(data_dir())).expect("shipped content should load")
}

/// Drains every notice queued on a notification receiver.
pub fn notices(rx: &mut broadcast::Receiver<Event>) -> Vec<Notice> {
    let mut notices = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let Event::Notification(notification) = event {
            notices.push(notification.notice);
        }
    }
    notices
}

pub fn notifications(runtime: &Runtime) -> broadcast::Receiver<Event> {
    runtime
        .subscribe(Topic::Notification)
        .expect("notification topic")
}
