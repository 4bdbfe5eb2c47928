//! Engine event boundary.
//!
//! Editing and rendering logic never touch counters directly; every
//! noteworthy action flows through [`EngineEvent`] and an [`EventSink`].
//! The default sink keeps process-local counters; tests install a scoped
//! override to observe events without global state.

use serde::Serialize;
use std::cell::RefCell;

///
/// EngineEvent
///

#[derive(Clone, Debug)]
pub enum EngineEvent {
    JsonRejected { path: String },
    PageLoaded { slug: String },
    PageSaved { slug: String, sections: usize },
    PlaceholderRendered { key: String },
    SectionAdded { key: String },
    SectionRemoved,
    SectionsReordered { from: usize, to: usize },
    UploadDropped { path: String },
    UploadMerged { path: String },
    VisibilityToggled { visible: bool },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: &EngineEvent);
}

///
/// EventReport
///
/// Ephemeral in-memory counters maintained by the default sink.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventReport {
    pub json_rejected: u64,
    pub pages_loaded: u64,
    pub pages_saved: u64,
    pub placeholders_rendered: u64,
    pub sections_added: u64,
    pub sections_removed: u64,
    pub sections_reordered: u64,
    pub uploads_dropped: u64,
    pub uploads_merged: u64,
    pub visibility_toggles: u64,
}

thread_local! {
    static REPORT: RefCell<EventReport> = RefCell::new(EventReport::default());
    static SINK_OVERRIDE: RefCell<Option<*const dyn EventSink>> = const { RefCell::new(None) };
}

/// CounterSink
/// Default sink writing into the thread-local report.

struct CounterSink;

impl EventSink for CounterSink {
    fn record(&self, event: &EngineEvent) {
        REPORT.with_borrow_mut(|r| match event {
            EngineEvent::JsonRejected { .. } => r.json_rejected += 1,
            EngineEvent::PageLoaded { .. } => r.pages_loaded += 1,
            EngineEvent::PageSaved { .. } => r.pages_saved += 1,
            EngineEvent::PlaceholderRendered { .. } => r.placeholders_rendered += 1,
            EngineEvent::SectionAdded { .. } => r.sections_added += 1,
            EngineEvent::SectionRemoved => r.sections_removed += 1,
            EngineEvent::SectionsReordered { .. } => r.sections_reordered += 1,
            EngineEvent::UploadDropped { .. } => r.uploads_dropped += 1,
            EngineEvent::UploadMerged { .. } => r.uploads_merged += 1,
            EngineEvent::VisibilityToggled { .. } => r.visibility_toggles += 1,
        });
    }
}

/// Record one event against the active sink.
pub(crate) fn record(event: &EngineEvent) {
    let ptr = SINK_OVERRIDE.with_borrow(|slot| *slot);
    match ptr {
        // Pointer is valid for the duration of `with_sink`, which cannot
        // return while this call is on the stack.
        Some(ptr) => unsafe { (*ptr).record(event) },
        None => CounterSink.record(event),
    }
}

/// Run `f` with `sink` receiving every event on this thread.
pub fn with_sink<R>(sink: &dyn EventSink, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<*const dyn EventSink>);

    impl Drop for Restore {
        fn drop(&mut self) {
            SINK_OVERRIDE.with_borrow_mut(|slot| *slot = self.0.take());
        }
    }

    // Erase the borrow's lifetime so the pointer can live in the slot; the
    // guard removes it before `sink` goes out of scope.
    let ptr = unsafe { std::mem::transmute::<&dyn EventSink, *const dyn EventSink>(sink) };
    let prev = SINK_OVERRIDE.with_borrow_mut(|slot| slot.replace(ptr));
    let _restore = Restore(prev);

    f()
}

/// Snapshot the default sink's counters for this thread.
#[must_use]
pub fn report() -> EventReport {
    REPORT.with_borrow(Clone::clone)
}

/// Reset the default sink's counters for this thread.
pub fn reset() {
    REPORT.with_borrow_mut(|r| *r = EventReport::default());
}

///
/// TESTS
///
