//! The dispatch loop: the crate's imperative shell.
//!
//! External callers feed events in from wherever they like (pointer
//! callbacks, timers, UI controls); the dispatcher serializes them into
//! one logical queue and fully resolves each event - guard evaluation,
//! transition selection, action application, state publish - before the
//! next is accepted. The published `(configuration, context)` pair is the
//! only shared value, and observers see it read-only between events.

use crate::board::context::{Context, Seed};
use crate::board::machine::{BoardMachine, Configuration, ReactingState};
use crate::board::InputEvent;
use crate::builder::BuildError;
use crate::core::{Event, StateHistory, TransitionRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The read-only value published to observers after every processed
/// event: the active state configuration plus the context snapshot.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub configuration: Configuration,
    pub context: Context,
}

type Observer = Box<dyn FnMut(&Snapshot)>;

/// Single entry point for the interaction machine.
///
/// Owns the machine, the current configuration and context, and the
/// transition history of the gesture region. Everything underneath it is
/// pure; the dispatcher is where time, ordering, and observation live.
///
/// # Example
///
/// ```rust
/// use corkboard::{Dispatcher, InputEvent, PointerEvent, Seed};
///
/// let mut dispatcher = Dispatcher::new(Seed::default()).unwrap();
///
/// dispatcher.send(InputEvent::BeginPlacingPin);
/// dispatcher.send(InputEvent::PointerUp(PointerEvent::at(0.0, 0.0)));
///
/// assert_eq!(dispatcher.context().entities.len(), 1);
/// ```
pub struct Dispatcher {
    machine: BoardMachine,
    configuration: Configuration,
    context: Context,
    history: StateHistory<ReactingState>,
    queue: VecDeque<InputEvent>,
    draining: bool,
    observers: Vec<Observer>,
}

impl Dispatcher {
    /// Build the machine and the initial context from a seed.
    pub fn new(seed: Seed) -> Result<Self, BuildError> {
        Ok(Self {
            machine: BoardMachine::new()?,
            configuration: Configuration::initial(),
            context: Context::from_seed(seed),
            history: StateHistory::new(),
            queue: VecDeque::new(),
            draining: false,
            observers: Vec::new(),
        })
    }

    /// The active configuration.
    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    /// The current context, read-only.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Transition history of the gesture region.
    pub fn history(&self) -> &StateHistory<ReactingState> {
        &self.history
    }

    /// Clone out the current published pair.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            configuration: self.configuration,
            context: self.context.clone(),
        }
    }

    /// Register an observer called with the snapshot after every
    /// processed event.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Accept an event.
    ///
    /// Events are queued and resolved strictly one at a time; an event
    /// sent from inside an observer callback lands on the queue and is
    /// processed after the current one completes, never interleaved.
    pub fn send(&mut self, event: InputEvent) {
        self.queue.push_back(event);
        if self.draining {
            return;
        }
        self.draining = true;
        while let Some(event) = self.queue.pop_front() {
            self.process(&event);
        }
        self.draining = false;
    }

    /// Accept a batch of events in order.
    pub fn send_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.send(event);
        }
    }

    fn process(&mut self, event: &InputEvent) {
        let mut context = self.context.clone();

        // Monitoring region first, then the gesture region, so gesture
        // actions observe the pointer state this same event produced.
        if let Some(step) =
            self.machine
                .monitoring()
                .step(&self.configuration.monitoring, &context, event)
        {
            self.configuration.monitoring = step.next;
            context = step.context;
        }

        if let Some(step) =
            self.machine
                .reacting()
                .step(&self.configuration.reacting, &context, event)
        {
            if step.next != step.from {
                self.history = self.history.record(TransitionRecord {
                    from: step.from,
                    to: step.next,
                    event: event.kind().name().to_string(),
                    timestamp: Utc::now(),
                });
            }
            self.configuration.reacting = step.next;
            context = step.context;
        }

        self.context = context;
        self.publish();
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = Snapshot {
            configuration: self.configuration,
            context: self.context.clone(),
        };
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}
