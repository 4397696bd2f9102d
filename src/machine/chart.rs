//! Generic hierarchical state chart interpreter.

use crate::core::{Action, Event, State};
use crate::machine::transition::Transition;

/// Result of successfully stepping a chart: the resolved transition's
/// source and target leaf states, the new context, and the names of
/// every action that fired, in execution order.
#[derive(Clone, Debug)]
pub struct Step<S, C> {
    /// Leaf state the chart stepped from
    pub from: S,
    /// Leaf state the chart landed on, after any completion edges
    pub next: S,
    /// Context produced by the fired actions
    pub context: C,
    /// Names of fired actions in execution order
    pub fired: Vec<&'static str>,
}

/// A hierarchical state chart: an initial state, an ordered transition
/// table, per-node entry/exit actions, and completion edges for compound
/// nodes.
///
/// The chart is pure data plus a pure `step` function. It holds no
/// current state and no context of its own; callers thread both through
/// every step, which is what makes replay and property testing cheap.
///
/// Charts are built with [`ChartBuilder`](crate::builder::ChartBuilder),
/// which validates the shape up front.
pub struct Chart<S: State, C, E: Event> {
    initial: S,
    transitions: Vec<Transition<S, C, E>>,
    entry_actions: Vec<(&'static str, Action<C, E>)>,
    exit_actions: Vec<(&'static str, Action<C, E>)>,
    completions: Vec<(&'static str, S)>,
}

impl<S: State, C: Clone, E: Event> Chart<S, C, E> {
    pub(crate) fn from_parts(
        initial: S,
        transitions: Vec<Transition<S, C, E>>,
        entry_actions: Vec<(&'static str, Action<C, E>)>,
        exit_actions: Vec<(&'static str, Action<C, E>)>,
        completions: Vec<(&'static str, S)>,
    ) -> Self {
        Self {
            initial,
            transitions,
            entry_actions,
            exit_actions,
            completions,
        }
    }

    /// The state this chart starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The ordered transition table.
    pub fn transitions(&self) -> &[Transition<S, C, E>] {
        &self.transitions
    }

    /// Resolve one event against the chart. Pure.
    ///
    /// Returns `None` when no table row is eligible - the event is simply
    /// dropped, which is the defined behavior for unhandled events, not an
    /// error. Otherwise the returned [`Step`] holds the landed state and
    /// the context produced by running, in order:
    ///
    /// 1. exit actions of exited nodes (innermost first),
    /// 2. the transition's own actions,
    /// 3. entry actions of entered nodes (outermost first),
    /// 4. for every completion edge taken afterwards, its exit and entry
    ///    actions the same way.
    ///
    /// A row whose target equals its source is internal: no exit or entry
    /// actions run, so a node's entry action fires exactly once when the
    /// node is entered, not on every event handled inside it.
    pub fn step(&self, state: &S, context: &C, event: &E) -> Option<Step<S, C>> {
        let transition = self
            .transitions
            .iter()
            .find(|row| row.is_eligible(state, context, event))?;

        let mut fired = Vec::new();
        let mut context = context.clone();
        let mut next = transition.to.clone();
        let internal = transition.is_internal();

        if !internal {
            context = self.run_exits(state, &next, context, event, &mut fired);
        }
        for action in &transition.actions {
            fired.push(action.name());
            context = action.apply(&context, event);
        }
        if !internal {
            context = self.run_entries(state, &next, context, event, &mut fired);
        }

        // Completion edges: a final leaf hands control back to the target
        // registered for its innermost enclosing compound node.
        while next.is_final() {
            let Some(target) = self.completion_target(&next) else {
                break;
            };
            context = self.run_exits(&next, &target, context, event, &mut fired);
            context = self.run_entries(&next, &target, context, event, &mut fired);
            next = target;
        }

        Some(Step {
            from: state.clone(),
            next,
            context,
            fired,
        })
    }

    fn completion_target(&self, state: &S) -> Option<S> {
        let path = state.path();
        // Innermost enclosing compound first.
        path[..path.len().saturating_sub(1)]
            .iter()
            .rev()
            .find_map(|node| {
                self.completions
                    .iter()
                    .find(|(name, _)| name == node)
                    .map(|(_, target)| target.clone())
            })
    }

    fn common_prefix(from: &S, to: &S) -> usize {
        from.path()
            .iter()
            .zip(to.path().iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn run_exits(
        &self,
        from: &S,
        to: &S,
        context: C,
        event: &E,
        fired: &mut Vec<&'static str>,
    ) -> C {
        let shared = Self::common_prefix(from, to);
        let mut context = context;
        for node in from.path()[shared..].iter().rev() {
            for (name, action) in &self.exit_actions {
                if name == node {
                    fired.push(action.name());
                    context = action.apply(&context, event);
                }
            }
        }
        context
    }

    fn run_entries(
        &self,
        from: &S,
        to: &S,
        context: C,
        event: &E,
        fired: &mut Vec<&'static str>,
    ) -> C {
        let shared = Self::common_prefix(from, to);
        let mut context = context;
        for node in &to.path()[shared..] {
            for (name, action) in &self.entry_actions {
                if name == node {
                    fired.push(action.name());
                    context = action.apply(&context, event);
                }
            }
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Guard};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Work(Phase),
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Running,
        Finished,
    }

    impl State for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Idle => "idle",
                Self::Work(Phase::Running) => "running",
                Self::Work(Phase::Finished) => "finished",
            }
        }

        fn path(&self) -> Vec<&'static str> {
            match self {
                Self::Work(_) => vec!["work", self.name()],
                _ => vec![self.name()],
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Work(Phase::Finished))
        }
    }

    #[derive(Clone, Debug)]
    enum TestEvent {
        Begin,
        Tick,
        Finish,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum TestKind {
        Begin,
        Tick,
        Finish,
    }

    impl Event for TestEvent {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            match self {
                Self::Begin => TestKind::Begin,
                Self::Tick => TestKind::Tick,
                Self::Finish => TestKind::Finish,
            }
        }
    }

    type Log = Vec<&'static str>;

    fn logger(tag: &'static str) -> Action<Log, TestEvent> {
        Action::new(tag, move |log: &Log, _| {
            let mut next = log.clone();
            next.push(tag);
            next
        })
    }

    fn chart() -> Chart<TestState, Log, TestEvent> {
        Chart::from_parts(
            TestState::Idle,
            vec![
                Transition {
                    from: TestState::Idle,
                    on: TestKind::Begin,
                    guard: None,
                    to: TestState::Work(Phase::Running),
                    actions: vec![logger("begin")],
                },
                Transition {
                    from: TestState::Work(Phase::Running),
                    on: TestKind::Tick,
                    guard: None,
                    to: TestState::Work(Phase::Running),
                    actions: vec![logger("tick")],
                },
                Transition {
                    from: TestState::Work(Phase::Running),
                    on: TestKind::Finish,
                    guard: None,
                    to: TestState::Work(Phase::Finished),
                    actions: vec![],
                },
            ],
            vec![("work", logger("enterWork"))],
            vec![("work", logger("exitWork"))],
            vec![("work", TestState::Idle)],
        )
    }

    #[test]
    fn unhandled_event_is_dropped() {
        let chart = chart();
        let step = chart.step(&TestState::Idle, &vec![], &TestEvent::Tick);
        assert!(step.is_none());
    }

    #[test]
    fn transition_runs_actions_then_entries() {
        let chart = chart();
        let step = chart
            .step(&TestState::Idle, &vec![], &TestEvent::Begin)
            .unwrap();

        assert_eq!(step.next, TestState::Work(Phase::Running));
        assert_eq!(step.context, vec!["begin", "enterWork"]);
        assert_eq!(step.fired, vec!["begin", "enterWork"]);
    }

    #[test]
    fn internal_transition_skips_entry_and_exit() {
        let chart = chart();
        let step = chart
            .step(&TestState::Work(Phase::Running), &vec![], &TestEvent::Tick)
            .unwrap();

        assert_eq!(step.next, TestState::Work(Phase::Running));
        assert_eq!(step.context, vec!["tick"]);
    }

    #[test]
    fn sibling_transition_stays_inside_compound() {
        // running -> finished shares the "work" prefix, so the compound's
        // exit action must not run for the inner hop itself; it runs when
        // the completion edge leaves the compound.
        let chart = chart();
        let step = chart
            .step(&TestState::Work(Phase::Running), &vec![], &TestEvent::Finish)
            .unwrap();

        assert_eq!(step.next, TestState::Idle);
        assert_eq!(step.context, vec!["exitWork"]);
    }

    #[test]
    fn completion_returns_to_target() {
        let chart = chart();
        let step = chart
            .step(&TestState::Work(Phase::Running), &vec![], &TestEvent::Finish)
            .unwrap();

        assert_eq!(step.from, TestState::Work(Phase::Running));
        assert_eq!(step.next, TestState::Idle);
    }

    #[test]
    fn first_matching_row_wins() {
        let always = |tag: &'static str| {
            Guard::new(tag, move |_: &Log, _: &TestEvent| true)
        };
        let chart: Chart<TestState, Log, TestEvent> = Chart::from_parts(
            TestState::Idle,
            vec![
                Transition {
                    from: TestState::Idle,
                    on: TestKind::Begin,
                    guard: Some(Guard::new("never", |_: &Log, _: &TestEvent| false)),
                    to: TestState::Work(Phase::Running),
                    actions: vec![logger("guarded")],
                },
                Transition {
                    from: TestState::Idle,
                    on: TestKind::Begin,
                    guard: Some(always("always")),
                    to: TestState::Idle,
                    actions: vec![logger("first")],
                },
                Transition {
                    from: TestState::Idle,
                    on: TestKind::Begin,
                    guard: Some(always("also")),
                    to: TestState::Idle,
                    actions: vec![logger("second")],
                },
            ],
            vec![],
            vec![],
            vec![],
        );

        let step = chart.step(&TestState::Idle, &vec![], &TestEvent::Begin).unwrap();
        assert_eq!(step.context, vec!["first"]);
    }

    #[test]
    fn step_is_deterministic() {
        let chart = chart();
        let state = TestState::Work(Phase::Running);
        let context = vec!["seed"];

        let first = chart.step(&state, &context, &TestEvent::Finish).unwrap();
        let second = chart.step(&state, &context, &TestEvent::Finish).unwrap();

        assert_eq!(first.next, second.next);
        assert_eq!(first.context, second.context);
        assert_eq!(first.fired, second.fired);
    }
}
