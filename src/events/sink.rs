//! Event sinks and the dispatcher that feeds them.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

/// A notification emitted by an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A command changed the layout.
    Move,
    /// The score changed by the given amount.
    Score(i32),
    /// The game has just been won.
    Win,
    /// A new game was dealt.
    Reset,
}

/// Receiver of engine notifications.
///
/// Every method defaults to a no-op, so a sink only overrides what it
/// cares about.
pub trait EventSink {
    fn on_move(&mut self) {}

    fn on_score(&mut self, _delta: i32) {}

    fn on_win(&mut self) {}

    fn on_reset(&mut self) {}
}

/// Forward events over a channel, e.g. to a UI thread.
///
/// A disconnected receiver is ignored; the engine never fails because the
/// host stopped listening.
impl EventSink for Sender<EngineEvent> {
    fn on_move(&mut self) {
        let _ = self.send(EngineEvent::Move);
    }

    fn on_score(&mut self, delta: i32) {
        let _ = self.send(EngineEvent::Score(delta));
    }

    fn on_win(&mut self) {
        let _ = self.send(EngineEvent::Win);
    }

    fn on_reset(&mut self) {
        let _ = self.send(EngineEvent::Reset);
    }
}

/// Share one sink between the engine and the host.
impl<S: EventSink + ?Sized> EventSink for Rc<RefCell<S>> {
    fn on_move(&mut self) {
        self.borrow_mut().on_move();
    }

    fn on_score(&mut self, delta: i32) {
        self.borrow_mut().on_score(delta);
    }

    fn on_win(&mut self) {
        self.borrow_mut().on_win();
    }

    fn on_reset(&mut self) {
        self.borrow_mut().on_reset();
    }
}

/// In-memory event recorder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<EngineEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn on_move(&mut self) {
        self.events.push(EngineEvent::Move);
    }

    fn on_score(&mut self, delta: i32) {
        self.events.push(EngineEvent::Score(delta));
    }

    fn on_win(&mut self) {
        self.events.push(EngineEvent::Win);
    }

    fn on_reset(&mut self) {
        self.events.push(EngineEvent::Reset);
    }
}

/// Fans events out to every registered sink.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink. Sinks are notified in registration order.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn emit(&mut self, event: EngineEvent) {
        for sink in &mut self.sinks {
            match event {
                EngineEvent::Move => sink.on_move(),
                EngineEvent::Score(delta) => sink.on_score(delta),
                EngineEvent::Win => sink.on_win(),
                EngineEvent::Reset => sink.on_reset(),
            }
        }
    }

    /// Emit the notifications for a completed command.
    pub(crate) fn command_applied(&mut self, score_delta: i32, became_won: bool) {
        self.emit(EngineEvent::Move);
        if score_delta != 0 {
            self.emit(EngineEvent::Score(score_delta));
        }
        if became_won {
            self.emit(EngineEvent::Win);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
