use super::*;

#[test]
fn due_callbacks_drain_in_request_order() {
    let mut q = FrameQueue::new();
    let a = q.request(WidgetId(1));
    let b = q.request(WidgetId(2));
    assert_eq!(q.len(), 2);
    assert_eq!(q.take_due(), vec![(a, WidgetId(1)), (b, WidgetId(2))]);
    assert!(q.is_empty());
}

#[test]
fn cancel_invalidates_handle() {
    let mut q = FrameQueue::new();
    let a = q.request(WidgetId(1));
    assert!(q.is_pending(a));
    assert!(q.cancel(a));
    assert!(!q.is_pending(a));
    assert!(!q.cancel(a));
    assert!(q.take_due().is_empty());
}

#[test]
fn handles_are_never_reused() {
    let mut q = FrameQueue::new();
    let a = q.request(WidgetId(1));
    q.take_due();
    let b = q.request(WidgetId(1));
    assert_ne!(a, b);
}
