//! Core State trait for hierarchical state machine states.
//!
//! All machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine. A state
/// may be a leaf of a compound node, in which case its [`path`](State::path)
/// names every enclosing node from the outside in.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition selection
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use corkboard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Wizard {
///     Welcome,
///     Survey(SurveyPage),
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum SurveyPage {
///     Questions,
///     Finished,
/// }
///
/// impl State for Wizard {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Welcome => "welcome",
///             Self::Survey(SurveyPage::Questions) => "questions",
///             Self::Survey(SurveyPage::Finished) => "finished",
///         }
///     }
///
///     fn path(&self) -> Vec<&'static str> {
///         match self {
///             Self::Survey(_) => vec!["survey", self.name()],
///             _ => vec![self.name()],
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Survey(SurveyPage::Finished))
///     }
/// }
///
/// assert_eq!(Wizard::Welcome.path(), vec!["welcome"]);
/// assert_eq!(
///     Wizard::Survey(SurveyPage::Questions).path(),
///     vec!["survey", "questions"]
/// );
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's leaf name for display/logging.
    fn name(&self) -> &'static str;

    /// Get the names of every node on the way to this state, outermost
    /// first and the leaf last.
    ///
    /// Flat states are their own single-element path, which is what the
    /// default implementation returns. Nested states override this so the
    /// interpreter can compute which compound nodes are exited and entered
    /// by a transition.
    fn path(&self) -> Vec<&'static str> {
        vec![self.name()]
    }

    /// Check if this state completes its enclosing compound node.
    ///
    /// When a final state is reached, the interpreter follows the compound
    /// node's completion edge (if one is registered), running the compound's
    /// exit actions on the way out.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
