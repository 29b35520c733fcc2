use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ChartOption;
use crate::engine::{ChartAction, ChartEngine, EventListener, LoadingKind, LoadingOptions};
use crate::error::ChartResult;
use crate::events::{ChartEvent, ChartEventParams, EventHandler, EventHandlers, HandlerId, HandlerRegistry};

use super::ChartBehavior;

/// One-directional controller lifecycle.
///
/// Engine-dependent operations pattern-match on the phase: outside `Active`
/// they are silently ignored (logged at debug level), never signaled. This
/// keeps every passthrough path no-throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecyclePhase {
    #[default]
    Uninitialized,
    Active,
    Disposed,
}

/// Owns one chart-engine instance, one option document, and one
/// event-handler registry.
///
/// Construction is cheap; the engine is only materialized when `init`
/// receives a rendering surface. From then on the controller applies the
/// behavior's document, keeps engine listeners in sync with the registry
/// (diffed by handler identity, not rebuilt), and forwards actions until
/// `dispose` releases the engine.
pub struct ChartController<E: ChartEngine> {
    phase: LifecyclePhase,
    engine: Option<E>,
    option: Option<ChartOption>,
    registry: HandlerRegistry,
    attached: IndexMap<ChartEvent, HandlerId>,
    behavior: Option<Box<dyn ChartBehavior<E>>>,
}

impl<E: ChartEngine> ChartController<E> {
    #[must_use]
    pub fn new(behavior: impl ChartBehavior<E> + 'static) -> Self {
        Self {
            phase: LifecyclePhase::Uninitialized,
            engine: None,
            option: None,
            registry: HandlerRegistry::default(),
            attached: IndexMap::new(),
            behavior: Some(Box::new(behavior)),
        }
    }

    /// Static chart: the document itself acts as the behavior.
    #[must_use]
    pub fn with_option(option: ChartOption) -> Self {
        Self::new(option)
    }

    /// Materializes the engine bound to `surface`, applies the behavior's
    /// option document, installs listeners for every registered handler, and
    /// runs the behavior's post-initialization hook.
    ///
    /// Only the first call does anything; once the controller has left
    /// `Uninitialized` the call is ignored.
    pub fn init(&mut self, surface: E::Surface) -> ChartResult<()> {
        if self.phase != LifecyclePhase::Uninitialized {
            debug!(phase = ?self.phase, "init ignored: controller already materialized");
            return Ok(());
        }

        self.engine = Some(E::bind(surface)?);
        self.phase = LifecyclePhase::Active;

        if let Some(mut behavior) = self.behavior.take() {
            self.option = Some(behavior.create_option());
            self.invalidate();
            self.sync_engine_listeners();
            behavior.post_initialize(self);
            self.behavior = Some(behavior);
        }
        Ok(())
    }

    /// Tears the engine down and releases it. Idempotent; a disposed
    /// controller ignores every later call, including `init`.
    pub fn dispose(&mut self) {
        match self.phase {
            LifecyclePhase::Disposed => {
                debug!("dispose ignored: already disposed");
            }
            LifecyclePhase::Uninitialized => {
                debug!("dispose before init: nothing to release");
                self.phase = LifecyclePhase::Disposed;
            }
            LifecyclePhase::Active => {
                if let Some(mut behavior) = self.behavior.take() {
                    behavior.on_dispose(self);
                    self.behavior = Some(behavior);
                }
                if let Some(mut engine) = self.engine.take() {
                    engine.dispose();
                }
                self.attached.clear();
                self.phase = LifecyclePhase::Disposed;
            }
        }
    }

    /// Merges a partial handler set into the registry (set slots replace,
    /// unset slots stay) and re-syncs engine listeners.
    pub fn set_event_handlers(&mut self, handlers: EventHandlers) {
        self.registry.merge(handlers);
        self.sync_engine_listeners();
    }

    /// Registers a single handler, replacing any previous one for `event`.
    pub fn add_event_listener(
        &mut self,
        event: ChartEvent,
        handler: impl Fn(&ChartEventParams) + 'static,
    ) {
        self.registry.insert(event, Rc::new(handler));
        self.sync_engine_listeners();
    }

    pub fn remove_event_listener(&mut self, event: ChartEvent) {
        if self.registry.remove(event) {
            self.sync_engine_listeners();
        }
    }

    /// Invokes the registered handler for `event` if one exists.
    pub fn trigger_event(&self, event: ChartEvent, params: &ChartEventParams) {
        match self.registry.handler(event) {
            Some(handler) => handler(params),
            None => debug!(event = event.engine_event_name(), "trigger ignored: no handler registered"),
        }
    }

    /// Re-applies the current option document wholesale. The engine must
    /// treat this as a full replace, never a merge.
    pub fn invalidate(&mut self) {
        if self.phase != LifecyclePhase::Active {
            debug!(phase = ?self.phase, "invalidate ignored outside active phase");
            return;
        }
        let (Some(engine), Some(option)) = (self.engine.as_mut(), self.option.as_ref()) else {
            debug!("invalidate ignored: no option document present");
            return;
        };
        engine.apply_option(option);
    }

    /// Replaces the option document and re-applies it when active. Before
    /// `init` the stored document is superseded by the behavior's.
    pub fn set_option(&mut self, option: ChartOption) {
        self.option = Some(option);
        self.invalidate();
    }

    pub fn resize(&mut self) {
        let Some(engine) = self.active_engine("resize") else {
            return;
        };
        engine.resize();
    }

    pub fn show_loading(&mut self, kind: LoadingKind, options: LoadingOptions) {
        let Some(engine) = self.active_engine("showLoading") else {
            return;
        };
        engine.show_loading(kind, &options);
    }

    pub fn hide_loading(&mut self) {
        let Some(engine) = self.active_engine("hideLoading") else {
            return;
        };
        engine.hide_loading();
    }

    pub fn highlight(&mut self, series_index: Option<usize>, data_index: Option<usize>) {
        self.dispatch_action(ChartAction::Highlight {
            series_index,
            data_index,
        });
    }

    pub fn downplay(&mut self, series_index: Option<usize>, data_index: Option<usize>) {
        self.dispatch_action(ChartAction::Downplay {
            series_index,
            data_index,
        });
    }

    pub fn show_tip(&mut self, series_index: usize, data_index: usize) {
        self.dispatch_action(ChartAction::ShowTip {
            series_index,
            data_index,
        });
    }

    pub fn hide_tip(&mut self) {
        self.dispatch_action(ChartAction::HideTip);
    }

    pub fn dispatch_action(&mut self, action: ChartAction) {
        let Some(engine) = self.active_engine(action.name()) else {
            return;
        };
        engine.dispatch_action(action);
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == LifecyclePhase::Active
    }

    #[must_use]
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    #[must_use]
    pub fn option(&self) -> Option<&ChartOption> {
        self.option.as_ref()
    }

    #[must_use]
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.registry
    }

    fn active_engine(&mut self, op: &'static str) -> Option<&mut E> {
        match self.phase {
            LifecyclePhase::Active => self.engine.as_mut(),
            phase => {
                debug!(op, ?phase, "engine call ignored outside active phase");
                None
            }
        }
    }

    /// Diffs registry contents against attached engine listeners and applies
    /// only the changes: stale kinds detach, new or replaced kinds attach.
    fn sync_engine_listeners(&mut self) {
        if self.phase != LifecyclePhase::Active {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        let diff = self.registry.diff_against(&self.attached);
        for event in diff.detach {
            engine.off(event);
            self.attached.shift_remove(&event);
        }
        for event in diff.attach {
            let Some((id, handler)) = self.registry.entry(event) else {
                continue;
            };
            engine.on(event, forward_listener(event, handler));
            self.attached.insert(event, id);
        }
    }
}

/// Builds the engine-side forwarding closure for one registration.
///
/// The right-click path suppresses the platform event's default action
/// (when a native event is present) exactly once, before the handler runs.
fn forward_listener(event: ChartEvent, handler: EventHandler) -> EventListener {
    Box::new(move |params: ChartEventParams| {
        if event == ChartEvent::RightClick {
            if let Some(native) = params.pointer.as_ref().and_then(|pointer| pointer.native.as_ref())
            {
                native.prevent_default();
            }
        }
        handler(&params);
    })
}
