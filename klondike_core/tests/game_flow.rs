use std::collections::VecDeque;
use std::convert::Infallible;

use klondike_core::layout::{pointer_target, PointerTarget};
use klondike_core::{
    Command, Config, Events, Game, Orientation, PileId, Point, Renderer, Size, State, TickSource,
};

/// Feeds one batch of commands per tick, then stops.
struct Script {
    frames: VecDeque<Vec<Command>>,
    requests: usize,
}

impl Script {
    fn new(frames: Vec<Vec<Command>>) -> Self {
        Self {
            frames: frames.into(),
            requests: 0,
        }
    }
}

impl TickSource for Script {
    fn request_next_tick(&mut self, events: &mut Events<'_>) -> bool {
        self.requests += 1;
        match self.frames.pop_front() {
            Some(commands) => {
                for command in commands {
                    events.push(command);
                }
                true
            }
            None => false,
        }
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(State, State)>,
}

impl Renderer for Recorder {
    type Error = Infallible;

    fn render(&mut self, state: &State, previous: &State) -> Result<(), Infallible> {
        self.frames.push((state.clone(), previous.clone()));
        Ok(())
    }
}

const BODY: Size = Size {
    width: 1000.0,
    height: 1111.0,
};

fn play(state: State, frames: Vec<Vec<Command>>) -> (Game, Recorder) {
    let mut game = Game::new(Config::default(), state);
    let mut script = Script::new(frames);
    let mut recorder = Recorder::default();
    game.drive(&mut script, &mut recorder).unwrap();
    assert_eq!(script.requests, recorder.frames.len() + 1);
    (game, recorder)
}

#[test]
fn test_new_game_is_a_klondike_deal() {
    let (game, _) = play(State::new(), vec![vec![Command::Resize(BODY), Command::Deal { seed: 77 }]]);
    let state = game.state();
    assert!(state.is_full_deck());
    for (i, id) in PileId::PACKING.into_iter().enumerate() {
        let pile = state.pile(id);
        assert_eq!(pile.len(), i + 1);
        let (top, below) = pile.cards.split_last().unwrap();
        assert_eq!(top.orientation, Orientation::Up);
        assert!(below.iter().all(|card| card.orientation == Orientation::Down));
    }
    assert_eq!(state.pile(PileId::Source).len(), 24);
}

#[test]
fn test_drive_stops_and_renders_every_tick() {
    let (game, recorder) = play(State::new_game(3), vec![vec![], vec![], vec![]]);
    assert!(!game.is_running());
    assert_eq!(recorder.frames.len(), 3);
    for window in recorder.frames.windows(2) {
        assert_eq!(window[1].1, window[0].0);
    }
}

#[test]
fn test_drive_on_running_game_is_noop() {
    let mut game = Game::new(Config::default(), State::new_game(3));
    assert!(game.run());
    let mut script = Script::new(vec![vec![Command::NextCard]]);
    let mut recorder = Recorder::default();
    game.drive(&mut script, &mut recorder).unwrap();
    assert_eq!(script.requests, 0);
    assert!(recorder.frames.is_empty());
    assert!(game.is_running());
}

#[test]
fn test_every_card_survives_a_full_cycle_of_draws() {
    let draws = vec![vec![Command::NextCard]; 30];
    let mut frames = vec![vec![Command::Resize(BODY)]];
    frames.extend(draws);
    let (game, recorder) = play(State::new_game(11), frames);
    for (state, _) in &recorder.frames {
        assert!(state.is_full_deck());
    }
    // 24 draws empty the source, the 25th recycles, 5 more draw again.
    let state = game.state();
    assert_eq!(state.pile(PileId::Source).len(), 19);
    assert_eq!(state.pile(PileId::Waste).len(), 5);
}

#[test]
fn test_pick_up_and_cancel_round_trip() {
    let (game, _) = play(State::new_game(5), vec![vec![Command::Resize(BODY)]]);
    let before = game.state().clone();
    let pile = PileId::Packing6;
    let top = *before.pile(pile).top().unwrap();
    let grab = top.position.offset(3.0, 3.0);
    assert_eq!(
        pointer_target(&before, grab),
        Some(PointerTarget::PickUp { pile, count: 1 })
    );

    let (game, recorder) = play(
        before.clone(),
        vec![
            vec![Command::PickUp { point: grab, pile, count: 1 }],
            vec![Command::Move { point: Point::new(900.0, 900.0) }],
            vec![Command::Cancel],
        ],
    );
    let held = &recorder.frames[0].0;
    assert_eq!(held.hand.as_ref().unwrap().origin, pile);
    assert_eq!(held.pile(pile).len(), before.pile(pile).len() - 1);
    assert!(held.is_full_deck());

    let after = game.state();
    assert!(after.hand.is_none());
    assert_eq!(after.pile(pile), before.pile(pile));
}

#[test]
fn test_illegal_drop_goes_back() {
    let (game, _) = play(State::new_game(5), vec![vec![Command::Resize(BODY)]]);
    let state = game.state().clone();
    let from = PileId::Packing2;
    let card = *state.pile(from).top().unwrap();
    // A target pile only ever takes an Ace first.
    let onto = PileId::Target1;
    let grab = card.position.offset(1.0, 1.0);
    let release = grab + (state.pile(onto).origin - card.position);
    let (game, _) = play(
        state.clone(),
        vec![
            vec![Command::PickUp { point: grab, pile: from, count: 1 }],
            vec![Command::Move { point: release }],
            vec![Command::Set],
        ],
    );
    let after = game.state();
    if card.number() == 1 {
        assert_eq!(after.pile(onto).len(), 1);
    } else {
        assert!(after.pile(onto).is_empty());
        assert_eq!(after.pile(from), state.pile(from));
    }
    assert!(after.hand.is_none());
    assert!(after.is_full_deck());
}

#[test]
fn test_commands_in_one_tick_apply_in_order() {
    let (game, recorder) = play(
        State::new_game(8),
        vec![vec![Command::Resize(BODY), Command::NextCard, Command::NextCard]],
    );
    assert_eq!(recorder.frames.len(), 1);
    let state = game.state();
    assert_eq!(state.pile(PileId::Waste).len(), 2);
    assert!(state.event_queue.is_empty());
}

#[test]
fn test_unchanged_viewport_keeps_piles_shared() {
    let (_, recorder) = play(
        State::new_game(2),
        vec![vec![Command::Resize(BODY)], vec![Command::Resize(BODY)], vec![]],
    );
    let (state, previous) = &recorder.frames[2];
    assert!(state.renders_same(previous));
    let (state, previous) = &recorder.frames[1];
    assert!(state.renders_same(previous));
}
