use std::time::Duration;
use bevy::prelude::*;
use crate::core::adventure_error::AdventureError;
use crate::core::config::WalkerTiming;
use crate::core::waypoint::WaypointTable;

/// Where the walker is in its traversal cycle.
///
/// Only `Idle` accepts an advance request. Every other phase closes the input
/// gate until the walker is re-initialized, so at most one transition can be in
/// flight.
#[derive(Reflect, Debug, Clone, PartialEq)]
pub enum WalkerPhase {
    Idle,
    Transitioning {
        target: usize,
        step: Vec2,
        ticks_left: u32,
        timer: Timer,
    },
    ArrivedPending {
        timer: Timer,
    },
    // A signal went out to the router; waiting to be re-initialized.
    HandedOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Ignored,
    JourneyComplete,
    Departed { from: usize, to: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerSignal {
    Arrived { index: usize },
    Reached { index: usize },
}

#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct WaypointWalker {
    index: usize,
    position: Vec2,
    phase: WalkerPhase,
    message_visible: bool,
}

impl WaypointWalker {
    pub fn at(table: &WaypointTable, index: usize) -> Result<Self, AdventureError> {
        let waypoint = table.get(index).ok_or(AdventureError::StartIndexOutOfRange {
            index,
            len: table.len(),
        })?;

        Ok(WaypointWalker {
            index,
            position: waypoint.position(),
            phase: WalkerPhase::Idle,
            message_visible: false,
        })
    }

    /// Snaps the walker onto `index` and reopens the input gate, dropping any
    /// transition or pending arrival.
    pub fn reinitialize(&mut self, table: &WaypointTable, index: usize) -> Result<(), AdventureError> {
        *self = WaypointWalker::at(table, index)?;
        Ok(())
    }

    pub fn advance(&mut self, table: &WaypointTable, timing: &WalkerTiming) -> Advance {
        if !self.awaiting_input() {
            return Advance::Ignored;
        }
        self.phase = WalkerPhase::HandedOff;

        let target = self.index + 1;
        let (Some(from), Some(to)) = (table.get(self.index), table.get(target)) else {
            return Advance::JourneyComplete;
        };

        let ticks = timing.ticks.max(1);
        self.phase = WalkerPhase::Transitioning {
            target,
            step: (to.position() - from.position()) / ticks as f32,
            ticks_left: ticks,
            timer: Timer::new(timing.tick_interval(), TimerMode::Repeating),
        };
        self.message_visible = false;

        Advance::Departed { from: self.index, to: target }
    }

    pub fn tick(&mut self, delta: Duration, timing: &WalkerTiming) -> Option<WalkerSignal> {
        let mut arrived_at = None;

        match &mut self.phase {
            WalkerPhase::Transitioning { target, step, ticks_left, timer } => {
                timer.tick(delta);
                let due = timer.times_finished_this_tick().min(*ticks_left);
                for _ in 0..due {
                    self.position += *step;
                }
                *ticks_left -= due;
                if *ticks_left == 0 {
                    arrived_at = Some(*target);
                }
            }
            WalkerPhase::ArrivedPending { timer } => {
                timer.tick(delta);
                if timer.just_finished() {
                    self.phase = WalkerPhase::HandedOff;
                    return Some(WalkerSignal::Reached { index: self.index });
                }
            }
            WalkerPhase::Idle | WalkerPhase::HandedOff => {}
        }

        let index = arrived_at?;
        self.index = index;
        self.message_visible = true;
        self.phase = WalkerPhase::ArrivedPending {
            timer: Timer::new(timing.arrival_delay(), TimerMode::Once),
        };
        Some(WalkerSignal::Arrived { index })
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn phase(&self) -> &WalkerPhase {
        &self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, WalkerPhase::Transitioning { .. })
    }

    pub fn awaiting_input(&self) -> bool {
        matches!(self.phase, WalkerPhase::Idle)
    }

    pub fn arrival_message_visible(&self) -> bool {
        self.message_visible
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.phase, WalkerPhase::Transitioning { .. } | WalkerPhase::ArrivedPending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::waypoint::Locale;

    const TICK: Duration = Duration::from_millis(100);

    fn table() -> WaypointTable {
        WaypointTable::for_locale(Locale::Hebrew).unwrap()
    }

    fn assert_near(actual: Vec2, expected: Vec2) {
        assert!(actual.abs_diff_eq(expected, 1e-4), "{:?} != {:?}", actual, expected);
    }

    #[test]
    fn initialization_snaps_to_every_waypoint() {
        let table = table();
        for (index, waypoint) in table.iter().enumerate() {
            let walker = WaypointWalker::at(&table, index).unwrap();
            assert_eq!(walker.position(), waypoint.position());
            assert_eq!(walker.current_index(), index);
            assert!(walker.awaiting_input());
            assert!(!walker.is_animating());
            assert!(!walker.arrival_message_visible());
        }
    }

    #[test]
    fn out_of_range_start_is_an_error() {
        let table = table();
        match WaypointWalker::at(&table, 6) {
            Err(AdventureError::StartIndexOutOfRange { index, len }) => {
                assert_eq!((index, len), (6, 6));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn first_transition_walks_from_village_to_castle() {
        let table = table();
        let timing = WalkerTiming::default();
        let mut walker = WaypointWalker::at(&table, 0).unwrap();

        assert_eq!(walker.advance(&table, &timing), Advance::Departed { from: 0, to: 1 });
        assert!(!walker.awaiting_input());
        assert!(walker.is_animating());
        assert!(!walker.arrival_message_visible());

        for n in 1..10 {
            assert_eq!(walker.tick(TICK, &timing), None);
            assert_near(walker.position(), Vec2::new(27.0, 35.0) + Vec2::new(1.5, -1.8) * n as f32);
            assert_eq!(walker.current_index(), 0);
        }

        assert_eq!(walker.tick(TICK, &timing), Some(WalkerSignal::Arrived { index: 1 }));
        assert_near(walker.position(), Vec2::new(42.0, 17.0));
        assert_eq!(walker.current_index(), 1);
        assert!(!walker.is_animating());
        assert!(walker.arrival_message_visible());
        assert!(!walker.awaiting_input());
    }

    #[test]
    fn reached_fires_once_after_arrival_delay() {
        let table = table();
        let timing = WalkerTiming::default();
        let mut walker = WaypointWalker::at(&table, 0).unwrap();
        walker.advance(&table, &timing);
        for _ in 0..10 {
            walker.tick(TICK, &timing);
        }

        let mut signals = Vec::new();
        for _ in 0..19 {
            signals.extend(walker.tick(TICK, &timing));
        }
        assert!(signals.is_empty());

        assert_eq!(walker.tick(TICK, &timing), Some(WalkerSignal::Reached { index: 1 }));
        for _ in 0..40 {
            assert_eq!(walker.tick(TICK, &timing), None);
        }
        assert!(!walker.awaiting_input());
        assert!(walker.arrival_message_visible());
    }

    #[test]
    fn advance_is_ignored_while_in_flight() {
        let table = table();
        let timing = WalkerTiming::default();
        let mut walker = WaypointWalker::at(&table, 2).unwrap();
        walker.advance(&table, &timing);
        walker.tick(TICK * 3, &timing);

        let before = walker.clone();
        assert_eq!(walker.advance(&table, &timing), Advance::Ignored);
        assert_eq!(walker.phase(), before.phase());
        assert_eq!(walker.position(), before.position());
        assert_eq!(walker.current_index(), before.current_index());
    }

    #[test]
    fn last_waypoint_completes_without_animation() {
        let table = table();
        let timing = WalkerTiming::default();
        let mut walker = WaypointWalker::at(&table, table.last_index()).unwrap();

        assert_eq!(walker.advance(&table, &timing), Advance::JourneyComplete);
        assert_eq!(walker.phase(), &WalkerPhase::HandedOff);
        assert!(!walker.is_animating());
        assert_eq!(walker.tick(Duration::from_secs(5), &timing), None);
        assert_eq!(walker.position(), Vec2::new(74.0, 16.0));
        assert_eq!(walker.advance(&table, &timing), Advance::Ignored);
    }

    #[test]
    fn long_frame_applies_each_due_tick_and_no_more() {
        let table = table();
        let timing = WalkerTiming::default();
        let mut walker = WaypointWalker::at(&table, 3).unwrap();
        walker.advance(&table, &timing);

        assert_eq!(walker.tick(Duration::from_millis(450), &timing), None);
        assert_near(walker.position(), Vec2::new(12.0, 70.0) + Vec2::new(6.2, -1.3) * 4.0);

        assert_eq!(walker.tick(Duration::from_secs(3), &timing), Some(WalkerSignal::Arrived { index: 4 }));
        assert_near(walker.position(), Vec2::new(74.0, 57.0));
    }

    #[test]
    fn reinitializing_twice_matches_a_single_initialization() {
        let table = table();
        let single = WaypointWalker::at(&table, 4).unwrap();
        let mut twice = WaypointWalker::at(&table, 0).unwrap();
        twice.reinitialize(&table, 4).unwrap();
        twice.reinitialize(&table, 4).unwrap();

        assert_eq!(twice.position(), single.position());
        assert_eq!(twice.awaiting_input(), single.awaiting_input());
        assert_eq!(twice.phase(), single.phase());
    }

    #[test]
    fn reinitializing_cancels_an_in_flight_transition() {
        let table = table();
        let timing = WalkerTiming::default();
        let mut walker = WaypointWalker::at(&table, 0).unwrap();
        walker.advance(&table, &timing);
        walker.tick(TICK * 5, &timing);
        assert!(walker.in_flight());

        walker.reinitialize(&table, 2).unwrap();
        assert!(walker.awaiting_input());
        assert_eq!(walker.position(), Vec2::new(42.0, 43.0));
        assert_eq!(walker.tick(Duration::from_secs(5), &timing), None);
    }

    #[test]
    fn custom_timing_controls_step_count() {
        let table = table();
        let timing = WalkerTiming { ticks: 2, tick_interval_ms: 50, arrival_delay_ms: 10 };
        let mut walker = WaypointWalker::at(&table, 1).unwrap();
        walker.advance(&table, &timing);

        assert_eq!(walker.tick(Duration::from_millis(50), &timing), None);
        assert_near(walker.position(), Vec2::new(42.0, 30.0));
        assert_eq!(walker.tick(Duration::from_millis(50), &timing), Some(WalkerSignal::Arrived { index: 2 }));
        assert_eq!(walker.tick(Duration::from_millis(10), &timing), Some(WalkerSignal::Reached { index: 2 }));
    }
}
