//! Widget styling integration.
//!
//! The style system never owns widgets. It reads them through [`StyleNode`],
//! and stateful widgets additionally expose [`Stateful`] so the resolver
//! and the transition evaluator can reach their interaction state.
//!
//! # Example
//!
//! ```
//! use cui_style::prelude::*;
//!
//! struct Button {
//!     styles: Vec<String>,
//!     interaction: InteractionState,
//! }
//!
//! impl StyleNode for Button {
//!     fn type_name(&self) -> &str {
//!         "button"
//!     }
//!
//!     fn parent(&self) -> Option<&dyn StyleNode> {
//!         None
//!     }
//!
//!     fn extra_style_names(&self) -> &[String] {
//!         &self.styles
//!     }
//!
//!     fn stateful(&self) -> Option<&dyn Stateful> {
//!         Some(&self.interaction)
//!     }
//! }
//!
//! let button = Button {
//!     styles: vec![],
//!     interaction: InteractionState::new(["up", "over"]),
//! };
//! assert_eq!(button.stateful().unwrap().current_state(), "up");
//! ```

use crate::resolve::{ResolvedStyle, StateStyles, TransitionEvaluator};
use crate::style::ComputedStyle;
use crate::Result;

/// Read access to a widget for selector matching and resolution.
pub trait StyleNode {
    /// The widget's type name, matched against selector segments.
    fn type_name(&self) -> &str;

    /// The parent widget, if any.
    fn parent(&self) -> Option<&dyn StyleNode>;

    /// Style names attached to this widget, applied in order after all
    /// matched rules.
    fn extra_style_names(&self) -> &[String] {
        &[]
    }

    /// The widget's interaction state, for widgets that have one.
    fn stateful(&self) -> Option<&dyn Stateful> {
        None
    }
}

/// A widget with interaction states such as `up`, `over` or `down`.
pub trait Stateful {
    /// Every state the widget can be in, in declaration order.
    fn state_values(&self) -> &[String];

    /// The resolved style for a state.
    fn state_style(&self, state: &str) -> Option<&ComputedStyle>;

    /// The state the widget is in, or transitioning from.
    fn current_state(&self) -> &str;

    /// The state the widget is transitioning to.
    fn target_state(&self) -> Option<&str>;

    /// Seconds since the current transition started.
    fn elapsed_transition_time(&self) -> f32;
}

/// Ready-made [`Stateful`] implementation for widgets to embed.
///
/// Holds the per-state styles from the last resolution, the current and
/// target state, and the transition clock.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    states: Vec<String>,
    styles: StateStyles,
    current: String,
    target: Option<String>,
    elapsed: f32,
}

impl InteractionState {
    /// Create a state machine over `states`, starting in the first one.
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let states: Vec<String> = states.into_iter().map(Into::into).collect();
        Self {
            current: states.first().cloned().unwrap_or_default(),
            states,
            styles: StateStyles::default(),
            target: None,
            elapsed: 0.0,
        }
    }

    /// Install the per-state styles of a fresh resolution.
    pub fn apply(&mut self, resolved: &ResolvedStyle) {
        self.styles.clone_from(&resolved.states);
    }

    /// The installed per-state styles.
    pub fn styles(&self) -> &StateStyles {
        &self.styles
    }

    /// Jump straight to `state`, cancelling any transition.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.current = state.into();
        self.target = None;
        self.elapsed = 0.0;
    }

    /// Start transitioning to `state`.
    ///
    /// Retargeting restarts the clock from the current state. Targeting the
    /// state already being transitioned to changes nothing, and targeting
    /// the current state cancels the transition.
    pub fn transition_to(&mut self, state: impl Into<String>) {
        let state = state.into();
        if self.target.as_deref() == Some(state.as_str()) {
            return;
        }

        self.target = (state != self.current).then_some(state);
        self.elapsed = 0.0;
    }

    /// Advance the transition clock.
    ///
    /// Returns `true` when this call completed a transition. The target's
    /// `transition` duration decides completion; a target with no
    /// installed style completes immediately.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(target) = self.target.as_deref() else {
            return false;
        };

        self.elapsed += dt;
        let duration = self.styles.get(target).map_or(0.0, |style| style.transition);
        if self.elapsed < duration {
            return false;
        }

        if let Some(target) = self.target.take() {
            self.current = target;
        }
        self.elapsed = 0.0;
        true
    }

    /// Check if a transition is in progress.
    pub fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// The style to draw with right now.
    pub fn evaluate(&self) -> Result<ComputedStyle> {
        TransitionEvaluator::evaluate(self)
    }
}

impl Stateful for InteractionState {
    fn state_values(&self) -> &[String] {
        &self.states
    }

    fn state_style(&self, state: &str) -> Option<&ComputedStyle> {
        self.styles.get(state)
    }

    fn current_state(&self) -> &str {
        &self.current
    }

    fn target_state(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn elapsed_transition_time(&self) -> f32 {
        self.elapsed
    }
}
