use std::time::{Duration, Instant};

use checker_core::{NotificationState, NOTIFICATION_WINDOW};

#[test]
fn notification_visible_until_window_elapses() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::default();
    notifications.notify("URL copied", t0);

    assert!(!notifications.expire(t0 + NOTIFICATION_WINDOW - Duration::from_millis(1)));
    assert_eq!(
        notifications.current().map(|n| n.message.as_str()),
        Some("URL copied")
    );

    assert!(notifications.expire(t0 + NOTIFICATION_WINDOW));
    assert!(notifications.current().is_none());
}

#[test]
fn second_notify_restarts_the_window() {
    // Two notifications 500ms apart must stay visible continuously until
    // the full window after the second one; the first timer must not
    // clear its successor early.
    let t0 = Instant::now();
    let gap = Duration::from_millis(500);

    let mut notifications = NotificationState::default();
    notifications.notify("URL copied", t0);
    notifications.notify("JSON copied", t0 + gap);

    assert!(!notifications.expire(t0 + NOTIFICATION_WINDOW));
    assert_eq!(
        notifications.current().map(|n| n.message.as_str()),
        Some("JSON copied")
    );

    assert!(notifications.expire(t0 + gap + NOTIFICATION_WINDOW));
    assert!(notifications.current().is_none());
}

#[test]
fn replacement_preempts_rather_than_queues() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::default();
    notifications.notify("first", t0);
    notifications.notify("second", t0);

    assert_eq!(
        notifications.current().map(|n| n.message.as_str()),
        Some("second")
    );

    // After the single slot expires nothing else surfaces.
    assert!(notifications.expire(t0 + NOTIFICATION_WINDOW));
    assert!(!notifications.expire(t0 + NOTIFICATION_WINDOW * 2));
}

#[test]
fn expire_without_notification_is_noop() {
    let mut notifications = NotificationState::default();
    assert!(!notifications.expire(Instant::now()));
}
