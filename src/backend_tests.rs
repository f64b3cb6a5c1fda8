//! Backend tests: feed forwarding, submits and teardown

use crossbeam_channel::{unbounded, Receiver, Sender};
use futures::StreamExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::backend::RepaintFn;
use crate::error::ServiceError;
use crate::protocol::{BackendAction, GuiEvent, Message, PostMessage};
use crate::service::{FeedSubscriber, LoopbackService, MessagePoster, Services, SnapshotStream};

const WAIT: Duration = Duration::from_secs(3);

struct Harness {
    action_tx: Sender<BackendAction>,
    event_rx: Receiver<GuiEvent>,
    handle: JoinHandle<()>,
}

fn start(services: Services, repaint: Option<RepaintFn>) -> Harness {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx, services, repaint);
    });
    Harness {
        action_tx,
        event_rx,
        handle,
    }
}

/// Wait for the first event matching `pred`, skipping others.
fn wait_for(rx: &Receiver<GuiEvent>, pred: impl Fn(&GuiEvent) -> bool) -> Option<GuiEvent> {
    let deadline = Instant::now() + WAIT;
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(left) {
            Ok(event) if pred(&event) => return Some(event),
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
    None
}

fn wait_finished(handle: &JoinHandle<()>) -> bool {
    let deadline = Instant::now() + WAIT;
    while Instant::now() < deadline {
        if handle.is_finished() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

fn post(user: &str, content: &str) -> BackendAction {
    BackendAction::PostMessage(PostMessage {
        user: user.into(),
        content: content.into(),
    })
}

/// Feed that delivers a fixed list of snapshots and then ends.
struct FiniteFeed(Vec<Vec<Message>>);

impl FeedSubscriber for FiniteFeed {
    fn subscribe(&self) -> SnapshotStream {
        futures::stream::iter(self.0.clone()).boxed()
    }
}

/// Poster that always fails.
struct DownPoster;

#[async_trait::async_trait]
impl MessagePoster for DownPoster {
    async fn post_message(&self, _message: PostMessage) -> Result<(), ServiceError> {
        Err(ServiceError::Unavailable("server down".into()))
    }
}

#[test]
fn test_initial_snapshot_is_forwarded() {
    let service = Arc::new(LoopbackService::with_messages(vec![Message::new(1, "Bot", "welcome")]));
    let h = start(Services::loopback(service), None);

    let event = wait_for(&h.event_rx, |e| matches!(e, GuiEvent::Snapshot(_)));
    match event {
        Some(GuiEvent::Snapshot(messages)) => {
            assert_eq!(messages, vec![Message::new(1, "Bot", "welcome")]);
        }
        other => panic!("expected snapshot, got {:?}", other),
    }

    let _ = h.action_tx.send(BackendAction::Shutdown);
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_post_comes_back_through_feed() {
    let service = Arc::new(LoopbackService::new());
    let h = start(Services::loopback(service.clone()), None);

    h.action_tx.send(post("Achyuth", "hello")).unwrap();

    let event = wait_for(&h.event_rx, |e| {
        matches!(e, GuiEvent::Snapshot(m) if !m.is_empty())
    });
    match event {
        Some(GuiEvent::Snapshot(messages)) => {
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].user, "Achyuth");
            assert_eq!(messages[0].content, "hello");
        }
        other => panic!("expected snapshot, got {:?}", other),
    }
    assert_eq!(service.messages().len(), 1);

    drop(h.action_tx);
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_rejected_post_reports_failure() {
    let service = Arc::new(LoopbackService::new());
    let h = start(Services::loopback(service.clone()), None);

    h.action_tx.send(post("", "nobody")).unwrap();

    let event = wait_for(&h.event_rx, |e| matches!(e, GuiEvent::SubmitFailed { .. }));
    match event {
        Some(GuiEvent::SubmitFailed { content, reason }) => {
            assert_eq!(content, "nobody");
            assert!(reason.contains("rejected"));
        }
        other => panic!("expected submit failure, got {:?}", other),
    }
    assert!(service.messages().is_empty());

    let _ = h.action_tx.send(BackendAction::Shutdown);
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_unavailable_poster_is_not_retried() {
    let feed = Arc::new(LoopbackService::new());
    let poster = Arc::new(DownPoster);
    let h = start(Services::new(feed, poster), None);

    h.action_tx.send(post("Achyuth", "lost")).unwrap();

    let event = wait_for(&h.event_rx, |e| matches!(e, GuiEvent::SubmitFailed { .. }));
    assert!(matches!(
        event,
        Some(GuiEvent::SubmitFailed { ref reason, .. }) if reason.contains("server down")
    ));
    // Exactly one failure: no retry loop
    assert!(wait_for(&h.event_rx, |e| matches!(e, GuiEvent::SubmitFailed { .. })).is_none());

    let _ = h.action_tx.send(BackendAction::Shutdown);
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_finite_feed_reports_closed() {
    let feed = Arc::new(FiniteFeed(vec![
        vec![Message::new(1, "Bob", "hi")],
        vec![Message::new(1, "Bob", "hi"), Message::new(2, "Carol", "yo")],
    ]));
    let h = start(Services::new(feed, Arc::new(DownPoster)), None);

    let closed = wait_for(&h.event_rx, |e| matches!(e, GuiEvent::FeedClosed));
    assert!(closed.is_some());

    // Backend keeps serving actions after the feed ends
    h.action_tx.send(post("Achyuth", "still here")).unwrap();
    assert!(wait_for(&h.event_rx, |e| matches!(e, GuiEvent::SubmitFailed { .. })).is_some());

    let _ = h.action_tx.send(BackendAction::Shutdown);
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_snapshots_arrive_in_order() {
    let feed = Arc::new(FiniteFeed(vec![
        vec![Message::new(1, "Bob", "hi")],
        vec![Message::new(1, "Bob", "hi"), Message::new(2, "Carol", "yo")],
    ]));
    let h = start(Services::new(feed, Arc::new(DownPoster)), None);

    let mut lengths = Vec::new();
    let deadline = Instant::now() + WAIT;
    while Instant::now() < deadline {
        match h.event_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(GuiEvent::Snapshot(m)) => lengths.push(m.len()),
            Ok(GuiEvent::FeedClosed) => break,
            _ => {}
        }
    }
    assert_eq!(lengths, vec![1, 2]);

    let _ = h.action_tx.send(BackendAction::Shutdown);
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_shutdown_stops_thread() {
    let h = start(Services::loopback(Arc::new(LoopbackService::new())), None);
    h.action_tx.send(BackendAction::Shutdown).unwrap();
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_dropped_sender_stops_thread() {
    let h = start(Services::loopback(Arc::new(LoopbackService::new())), None);
    drop(h.action_tx);
    assert!(wait_finished(&h.handle));
}

#[test]
fn test_repaint_requested_per_snapshot() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let repaint: RepaintFn = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let service = Arc::new(LoopbackService::new());
    let h = start(Services::loopback(service), Some(repaint));

    assert!(wait_for(&h.event_rx, |e| matches!(e, GuiEvent::Snapshot(_))).is_some());
    assert!(count.load(Ordering::SeqCst) >= 1);

    let _ = h.action_tx.send(BackendAction::Shutdown);
    assert!(wait_finished(&h.handle));
}
