//! Macros for ergonomic state definitions.

/// Generate a `State` implementation for a flat enum of leaf states.
///
/// Each leaf's name is the variant identifier; `path()` keeps its default
/// single-element form. Nested states (compound nodes) implement `State`
/// by hand instead, because their paths carry structure the macro cannot
/// guess.
///
/// # Example
///
/// ```
/// use corkboard::leaf_states;
/// use corkboard::core::State;
///
/// leaf_states! {
///     pub enum TrafficLight {
///         Red,
///         Amber,
///         Green,
///     }
///     final: [Green]
/// }
///
/// assert_eq!(TrafficLight::Red.name(), "Red");
/// assert_eq!(TrafficLight::Red.path(), vec!["Red"]);
/// assert!(TrafficLight::Green.is_final());
/// ```
#[macro_export]
macro_rules! leaf_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
