//! The cabinet around the strip: two trigger buttons, two turn lamps and a
//! status display.

use std::collections::VecDeque;

use crate::core::error::Result;
use crate::core::types::{Side, Triggers};
use crate::game::events::DuelEvent;

pub trait Cabinet {
    /// Sample both triggers once. `None` shuts the duel down.
    fn poll_triggers(&mut self) -> Result<Option<Triggers>>;

    /// Light the lamp of the side holding the turn
    fn show_turn(&mut self, turn: Side) -> Result<()>;

    /// Print one status line
    fn report(&mut self, event: &DuelEvent) -> Result<()>;
}

/// Plays back a fixed list of trigger samples, then quits
///
/// Records every lamp update and reported event.
#[derive(Debug, Default)]
pub struct ScriptedCabinet {
    script: VecDeque<Triggers>,
    pub turn_lamps: Vec<Side>,
    pub events: Vec<DuelEvent>,
}

impl ScriptedCabinet {
    pub fn new(script: impl IntoIterator<Item = Triggers>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Cabinet for ScriptedCabinet {
    fn poll_triggers(&mut self) -> Result<Option<Triggers>> {
        Ok(self.script.pop_front())
    }

    fn show_turn(&mut self, turn: Side) -> Result<()> {
        self.turn_lamps.push(turn);
        Ok(())
    }

    fn report(&mut self, event: &DuelEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
