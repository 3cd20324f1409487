//! Blending between state styles.

use crate::style::ComputedStyle;
use crate::widget::Stateful;
use crate::{Error, Result};

/// Computes the style a stateful widget should draw with mid-transition.
#[derive(Debug)]
pub struct TransitionEvaluator;

impl TransitionEvaluator {
    /// Evaluate the widget's current style.
    ///
    /// Without a target state this is the current state's style. Otherwise
    /// the current ("from") style is blended toward the target ("to") style
    /// by `elapsed / to.transition`. Numbers blend linearly and colors per
    /// channel; everything else holds the "from" value until the blend
    /// reaches 1, at which point the result is exactly the "to" style.
    pub fn evaluate(widget: &dyn Stateful) -> Result<ComputedStyle> {
        let from = Self::state_style(widget, widget.current_state())?;
        let Some(target) = widget.target_state() else {
            return Ok(from.clone());
        };

        let to = Self::state_style(widget, target)?;
        let alpha = Self::alpha(widget.elapsed_transition_time(), to.transition);
        if alpha >= 1.0 {
            return Ok(to.clone());
        }
        Ok(from.interpolate(to, alpha))
    }

    /// Blend factor for `elapsed` seconds into a transition of `duration`.
    ///
    /// A zero or negative duration is an instant snap. Not clamped above 1.
    pub fn alpha(elapsed: f32, duration: f32) -> f32 {
        if duration <= 0.0 {
            1.0
        } else {
            elapsed / duration
        }
    }

    fn state_style<'w>(widget: &'w dyn Stateful, state: &str) -> Result<&'w ComputedStyle> {
        widget
            .state_style(state)
            .ok_or_else(|| Error::UnknownState {
                state: state.to_string(),
            })
    }
}
