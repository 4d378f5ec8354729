//! Status log kept by the terminal cabinet

use std::collections::VecDeque;

use crate::game::events::DuelEvent;

/// Maximum status lines to keep on screen
pub const MAX_LOG_ENTRIES: usize = 12;

/// An entry in the status log
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Match,
    Hit,
    Critical,
    Miss,
    GameOver,
}

impl LogCategory {
    pub fn of(event: &DuelEvent) -> Self {
        match event {
            DuelEvent::MatchStarted { .. } => LogCategory::Match,
            DuelEvent::Shot(report) if !report.shot.hit => LogCategory::Miss,
            DuelEvent::Shot(report) if report.shot.severity.is_critical() => LogCategory::Critical,
            DuelEvent::Shot(_) => LogCategory::Hit,
            DuelEvent::GameOver { .. } => LogCategory::GameOver,
        }
    }
}

#[derive(Debug, Default)]
pub struct StatusLog {
    entries: VecDeque<LogEntry>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    /// Add an entry, dropping the oldest when full
    pub fn log(&mut self, message: String, category: LogCategory) {
        if self.entries.len() >= MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { message, category });
    }

    pub fn log_event(&mut self, event: &DuelEvent) {
        self.log(event.to_string(), LogCategory::of(event));
    }

    /// Oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ShotResult;
    use crate::core::types::Side;
    use crate::game::events::ShotReport;

    fn shot(damage: f32) -> DuelEvent {
        DuelEvent::Shot(ShotReport {
            attacker: Side::Green,
            defender: Side::Red,
            shot: ShotResult::from_damage(damage),
            damage_dealt: damage.max(0.0),
            red_health: 300.0,
            green_health: 300.0,
        })
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = StatusLog::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            log.log(format!("line {}", i), LogCategory::Match);
        }
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
        assert_eq!(log.entries().next().unwrap().message, "line 5");
    }

    #[test]
    fn test_categories() {
        assert_eq!(LogCategory::of(&shot(-4.0)), LogCategory::Miss);
        assert_eq!(LogCategory::of(&shot(30.0)), LogCategory::Hit);
        assert_eq!(LogCategory::of(&shot(95.0)), LogCategory::Critical);
        assert_eq!(
            LogCategory::of(&DuelEvent::GameOver {
                winner: Side::Red,
                next_turn: Side::Green
            }),
            LogCategory::GameOver
        );
    }
}
