use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::params::{ChartEvent, ChartEventParams};

/// Application callback invoked with one normalized interaction snapshot.
pub type EventHandler = Rc<dyn Fn(&ChartEventParams)>;

/// Partial handler set merged into the registry.
///
/// Set slots replace the registry entry of the same kind; unset slots leave
/// the existing entry untouched.
#[derive(Clone, Default)]
pub struct EventHandlers {
    pub on_click: Option<EventHandler>,
    pub on_double_click: Option<EventHandler>,
    pub on_right_click: Option<EventHandler>,
    pub on_mouse_over: Option<EventHandler>,
}

impl EventHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_click(mut self, handler: impl Fn(&ChartEventParams) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    #[must_use]
    pub fn on_double_click(mut self, handler: impl Fn(&ChartEventParams) + 'static) -> Self {
        self.on_double_click = Some(Rc::new(handler));
        self
    }

    #[must_use]
    pub fn on_right_click(mut self, handler: impl Fn(&ChartEventParams) + 'static) -> Self {
        self.on_right_click = Some(Rc::new(handler));
        self
    }

    #[must_use]
    pub fn on_mouse_over(mut self, handler: impl Fn(&ChartEventParams) + 'static) -> Self {
        self.on_mouse_over = Some(Rc::new(handler));
        self
    }

    fn into_slots(self) -> [(ChartEvent, Option<EventHandler>); 4] {
        [
            (ChartEvent::Click, self.on_click),
            (ChartEvent::DoubleClick, self.on_double_click),
            (ChartEvent::RightClick, self.on_right_click),
            (ChartEvent::MouseOver, self.on_mouse_over),
        ]
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_double_click", &self.on_double_click.is_some())
            .field("on_right_click", &self.on_right_click.is_some())
            .field("on_mouse_over", &self.on_mouse_over.is_some())
            .finish()
    }
}

/// Identity stamp assigned to each registration.
///
/// Engine-side listener state is diffed by this identity, so replacing a
/// handler reattaches exactly one listener and untouched kinds see no churn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct RegisteredHandler {
    id: HandlerId,
    handler: EventHandler,
}

/// Mapping from interaction kind to the application callback, in registration
/// order. Last write wins per kind.
#[derive(Default)]
pub struct HandlerRegistry {
    entries: IndexMap<ChartEvent, RegisteredHandler>,
    next_id: u64,
}

impl HandlerRegistry {
    /// Merges a partial handler set; see [`EventHandlers`].
    pub fn merge(&mut self, handlers: EventHandlers) {
        for (event, handler) in handlers.into_slots() {
            if let Some(handler) = handler {
                self.insert(event, handler);
            }
        }
    }

    /// Registers `handler` for `event`, replacing any previous registration.
    pub fn insert(&mut self, event: ChartEvent, handler: EventHandler) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(event, RegisteredHandler { id, handler });
        id
    }

    /// Removes the registration for `event`. Returns whether one existed.
    pub fn remove(&mut self, event: ChartEvent) -> bool {
        self.entries.shift_remove(&event).is_some()
    }

    #[must_use]
    pub fn handler(&self, event: ChartEvent) -> Option<&EventHandler> {
        self.entries.get(&event).map(|entry| &entry.handler)
    }

    #[must_use]
    pub fn id_of(&self, event: ChartEvent) -> Option<HandlerId> {
        self.entries.get(&event).map(|entry| entry.id)
    }

    /// Identity and callback for `event`, cloned for listener installation.
    #[must_use]
    pub fn entry(&self, event: ChartEvent) -> Option<(HandlerId, EventHandler)> {
        self.entries
            .get(&event)
            .map(|entry| (entry.id, entry.handler.clone()))
    }

    pub fn events(&self) -> impl Iterator<Item = ChartEvent> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn contains(&self, event: ChartEvent) -> bool {
        self.entries.contains_key(&event)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes the engine listener changes needed to make `attached` match
    /// the registry: kinds that vanished or were replaced are detached, kinds
    /// that are new or were replaced are attached.
    #[must_use]
    pub fn diff_against(&self, attached: &IndexMap<ChartEvent, HandlerId>) -> ListenerDiff {
        let mut diff = ListenerDiff::default();
        for (event, id) in attached {
            match self.id_of(*event) {
                Some(current) if current == *id => {}
                _ => diff.detach.push(*event),
            }
        }
        for (event, entry) in &self.entries {
            match attached.get(event) {
                Some(id) if *id == entry.id => {}
                _ => diff.attach.push(*event),
            }
        }
        diff
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("events", &self.entries.keys().collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Listener attach/detach plan produced by [`HandlerRegistry::diff_against`].
///
/// A replaced handler shows up in both lists; detaches are processed first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerDiff {
    pub detach: SmallVec<[ChartEvent; 4]>,
    pub attach: SmallVec<[ChartEvent; 4]>,
}

impl ListenerDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detach.is_empty() && self.attach.is_empty()
    }
}
