//! Viewport → container → card size → pile positions.
//!
//! Each stage only recomputes when the input it derives from differs from the
//! previous pipeline stage, so a tick without a resize leaves every pile alone.

use log::debug;

use crate::config::Config;
use crate::geometry::{Bounds, Point, Size};
use crate::pile::{PileId, PACKING_PILES, TARGET_PILES};
use crate::state::State;

/// Fits the largest rectangle of the configured aspect ratio inside the
/// viewport minus margins.
pub fn container_size(config: &Config, state: State, previous: &State) -> State {
    if state.body == previous.body {
        return state;
    }
    let margin = config.container_margin;
    let ratio = config.aspect_ratio;
    let available = Size::new(
        (state.body.width - 2.0 * margin).max(0.0),
        (state.body.height - 2.0 * margin).max(0.0),
    );
    let desired_height = available.width * ratio.y / ratio.x;
    let size = if desired_height <= available.height {
        Size::new(available.width, desired_height)
    } else {
        Size::new(available.height * ratio.x / ratio.y, available.height)
    };
    let container = Bounds::new(Point::new(margin, margin), size);
    debug!("container resized to {:?}", container);
    State { container, ..state }
}

pub fn card_size(config: &Config, state: State, previous: &State) -> State {
    if state.container == previous.container {
        return state;
    }
    let columns = f64::from(config.columns);
    let gaps = f64::from(config.columns.saturating_sub(2));
    let available = (state.container.size.width - config.card_margin * gaps).max(0.0);
    let width = (available / columns).floor();
    let height = (width * config.card_ratio.y / config.card_ratio.x).floor();
    State {
        card_size: Size::new(width, height),
        card_offset_size: (height * config.card_stack_offset).ceil(),
        ..state
    }
}

/// Places all 13 piles and moves their cards along.
///
/// First row: source, waste, a gap, then the four targets. Second row: the
/// seven packing piles.
pub fn card_slots_positions(config: &Config, state: State, previous: &State) -> State {
    if state.card_size == previous.card_size {
        return state;
    }
    let step_x = config.card_margin + state.card_size.width;
    let step_y = 2.0 * config.card_margin + state.card_size.height;
    let origin = state.container.origin;

    let mut positions = Vec::with_capacity(PileId::ALL.len());
    positions.push((PileId::Source, origin));
    positions.push((PileId::Waste, origin.offset(step_x, 0.0)));
    for (i, id) in PileId::TARGETS.into_iter().enumerate() {
        positions.push((id, origin.offset((3 + i) as f64 * step_x, 0.0)));
    }
    for (i, id) in PileId::PACKING.into_iter().enumerate() {
        positions.push((id, origin.offset(i as f64 * step_x, step_y)));
    }
    debug_assert_eq!(positions.len(), 2 + TARGET_PILES + PACKING_PILES);

    positions.into_iter().fold(state, |state, (id, at)| {
        let bounds = Bounds::new(at, state.card_size);
        let pile = state.pile(id).with_bounds(bounds, state.fan_offset(id));
        state.with_pile(id, pile)
    })
}

/// What a pointer press at some point on the table means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The source pile: draw or recycle.
    Draw,
    /// Lift the top `count` cards of `pile`.
    PickUp { pile: PileId, count: usize },
}

/// Resolves a press at `point` against the current layout.
///
/// Only face-up cards can be lifted. On a packing pile the visually topmost
/// card under the pointer decides how many cards come along.
pub fn pointer_target(state: &State, point: Point) -> Option<PointerTarget> {
    if state.pile(PileId::Source).bounds().contains(point) {
        return Some(PointerTarget::Draw);
    }
    let flat = [PileId::Waste]
        .into_iter()
        .chain(PileId::TARGETS)
        .find(|&id| state.pile(id).bounds().contains(point));
    if let Some(id) = flat {
        return state
            .pile(id)
            .top()
            .filter(|card| card.is_face_up())
            .map(|_| PointerTarget::PickUp { pile: id, count: 1 });
    }
    PileId::PACKING.into_iter().find_map(|id| {
        let pile = state.pile(id);
        let (index, card) = pile
            .cards
            .iter()
            .enumerate()
            .rev()
            .find(|(_, card)| Bounds::new(card.position, state.card_size).contains(point))?;
        card.is_face_up().then(|| PointerTarget::PickUp {
            pile: id,
            count: pile.len() - index,
        })
    })
}
