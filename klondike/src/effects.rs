use std::time::Duration as StdDuration;

use klondike_widgets::Theme;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Keyed effect manager; re-adding a key replaces the running effect.
pub type FxManager = EffectManager<&'static str>;

pub const DEAL: &str = "deal";

/// How long the table keeps redrawing after a deal so the sweep can finish
pub const DEAL_DURATION: StdDuration = StdDuration::from_millis(450);

/// Fresh deal: the table sweeps in from the left over the felt
pub fn deal_sweep() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        Theme::FELT,
        (400, Interpolation::CubicOut),
    )
}
