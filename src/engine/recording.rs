use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::core::ChartOption;
use crate::error::ChartResult;
use crate::events::{ChartEvent, ChartEventParams};

use super::{ChartAction, ChartEngine, EventListener, LoadingKind, LoadingOptions};

#[derive(Default)]
struct RecordingState {
    applied: Option<ChartOption>,
    apply_count: usize,
    resize_count: usize,
    loading: Option<(LoadingKind, LoadingOptions)>,
    actions: Vec<ChartAction>,
    attached: Vec<ChartEvent>,
    attach_count: usize,
    detach_count: usize,
    dispose_count: usize,
}

/// Shared journal the [`RecordingEngine`] binds to as its surface.
///
/// Tests and headless demos keep a clone and read back what the engine was
/// asked to do, including after the controller has released the engine.
#[derive(Clone, Default)]
pub struct RecordingLog {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied option document; replaced wholesale on every apply.
    #[must_use]
    pub fn applied_option(&self) -> Option<ChartOption> {
        self.state.borrow().applied.clone()
    }

    #[must_use]
    pub fn apply_count(&self) -> usize {
        self.state.borrow().apply_count
    }

    #[must_use]
    pub fn resize_count(&self) -> usize {
        self.state.borrow().resize_count
    }

    #[must_use]
    pub fn loading(&self) -> Option<(LoadingKind, LoadingOptions)> {
        self.state.borrow().loading.clone()
    }

    #[must_use]
    pub fn actions(&self) -> Vec<ChartAction> {
        self.state.borrow().actions.clone()
    }

    /// Event kinds with a listener currently attached, in attach order.
    #[must_use]
    pub fn attached_events(&self) -> Vec<ChartEvent> {
        self.state.borrow().attached.clone()
    }

    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.state.borrow().attach_count
    }

    #[must_use]
    pub fn detach_count(&self) -> usize {
        self.state.borrow().detach_count
    }

    #[must_use]
    pub fn dispose_count(&self) -> usize {
        self.state.borrow().dispose_count
    }
}

/// In-memory engine double used by tests and headless demos.
///
/// Every controller passthrough lands in the shared [`RecordingLog`];
/// listeners stay engine-local so synthetic interactions can be replayed
/// through [`RecordingEngine::emit`].
pub struct RecordingEngine {
    log: RecordingLog,
    listeners: IndexMap<ChartEvent, EventListener>,
}

impl RecordingEngine {
    /// Replays a synthetic interaction through the listener attached for the
    /// params' event kind. Returns whether a listener consumed it.
    pub fn emit(&mut self, params: ChartEventParams) -> bool {
        match self.listeners.get_mut(&params.event) {
            Some(listener) => {
                listener(params);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn log(&self) -> &RecordingLog {
        &self.log
    }
}

impl ChartEngine for RecordingEngine {
    type Surface = RecordingLog;

    fn bind(surface: Self::Surface) -> ChartResult<Self> {
        Ok(Self {
            log: surface,
            listeners: IndexMap::new(),
        })
    }

    fn apply_option(&mut self, option: &ChartOption) {
        let mut state = self.log.state.borrow_mut();
        state.applied = Some(option.clone());
        state.apply_count += 1;
    }

    fn resize(&mut self) {
        self.log.state.borrow_mut().resize_count += 1;
    }

    fn show_loading(&mut self, kind: LoadingKind, options: &LoadingOptions) {
        self.log.state.borrow_mut().loading = Some((kind, options.clone()));
    }

    fn hide_loading(&mut self) {
        self.log.state.borrow_mut().loading = None;
    }

    fn dispatch_action(&mut self, action: ChartAction) {
        self.log.state.borrow_mut().actions.push(action);
    }

    fn on(&mut self, event: ChartEvent, listener: EventListener) {
        self.listeners.insert(event, listener);
        let mut state = self.log.state.borrow_mut();
        if !state.attached.contains(&event) {
            state.attached.push(event);
        }
        state.attach_count += 1;
    }

    fn off(&mut self, event: ChartEvent) {
        if self.listeners.shift_remove(&event).is_some() {
            let mut state = self.log.state.borrow_mut();
            state.attached.retain(|attached| *attached != event);
            state.detach_count += 1;
        }
    }

    fn dispose(&mut self) {
        self.listeners.clear();
        let mut state = self.log.state.borrow_mut();
        state.attached.clear();
        state.dispose_count += 1;
    }
}
