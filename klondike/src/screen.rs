use std::time::Instant;

use klondike_core::{PileId, Renderer, State};
use klondike_widgets::{TableWidget, Theme};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::{DefaultTerminal, Frame};
use tachyonfx::Duration;

use crate::effects::{self, FxManager};
use crate::input::FOOTER_HEIGHT;

/// Draws snapshots to the terminal, skipping frames where nothing visible
/// changed.
pub struct Screen<'a> {
    terminal: &'a mut DefaultTerminal,
    fx: FxManager,
    animating_until: Option<Instant>,
    drawn: bool,
}

impl<'a> Screen<'a> {
    pub fn new(terminal: &'a mut DefaultTerminal) -> Self {
        Self {
            terminal,
            fx: FxManager::default(),
            animating_until: None,
            drawn: false,
        }
    }

    fn start_deal_effect(&mut self) {
        self.fx.add_unique_effect(effects::DEAL, effects::deal_sweep());
        self.animating_until = Some(Instant::now() + effects::DEAL_DURATION);
    }

    fn is_animating(&self) -> bool {
        self.animating_until
            .is_some_and(|until| Instant::now() < until)
    }
}

impl Renderer for Screen<'_> {
    type Error = color_eyre::Report;

    fn render(&mut self, state: &State, previous: &State) -> color_eyre::Result<()> {
        if !self.drawn || state.seed != previous.seed {
            self.start_deal_effect();
        }
        let unchanged = state.renders_same(previous) && state.body == previous.body;
        if self.drawn && unchanged && !self.is_animating() {
            return Ok(());
        }
        let fx = &mut self.fx;
        self.terminal.draw(|frame| draw(frame, state, fx))?;
        self.drawn = true;
        Ok(())
    }
}

fn draw(frame: &mut Frame, state: &State, fx: &mut FxManager) {
    let [table, footer] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    frame.render_widget(TableWidget::new(state), table);
    frame.render_widget(status_line(state), footer);

    fx.process_effects(Duration::from_millis(16), frame.buffer_mut(), table);
}

fn status_line(state: &State) -> Line<'static> {
    let key = Style::default().fg(Theme::BRIGHT_TEXT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Theme::DIM_TEXT);
    let founded: usize = PileId::TARGETS.iter().map(|&id| state.pile(id).len()).sum();

    Line::from(vec![
        Span::styled(" space", key),
        Span::styled(" draw  ", text),
        Span::styled("esc", key),
        Span::styled(" cancel  ", text),
        Span::styled("n", key),
        Span::styled(" new deal  ", text),
        Span::styled("q", key),
        Span::styled(" quit   ", text),
        Span::styled(format!("seed {}  foundations {}/52", state.seed, founded), text),
    ])
}
