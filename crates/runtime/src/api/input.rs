//! Input sources sampled once per tick.
//!
//! Hosts plug an [`InputSource`] into the session runners so the simulation
//! can run from a controller, a recorded timeline, or a test closure.
use platformer_core::{InputSegment, InputSnapshot};

/// Produces the controller snapshot for each tick.
pub trait InputSource {
    /// Snapshot for the tick about to run. `tick` is the number of ticks the
    /// session has completed so far.
    fn sample(&mut self, tick: u64) -> InputSnapshot;
}

impl<F> InputSource for F
where
    F: FnMut(u64) -> InputSnapshot,
{
    fn sample(&mut self, tick: u64) -> InputSnapshot {
        self(tick)
    }
}

/// No stick deflection, no button presses.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn sample(&mut self, _tick: u64) -> InputSnapshot {
        InputSnapshot::NEUTRAL
    }
}

/// Replays a timeline of [`InputSegment`]s, one sample per tick.
///
/// Samples are consumed in call order regardless of `tick`, so a session that
/// was teleported or reset keeps playing the timeline from where it was.
/// Once the timeline is exhausted every sample is neutral.
#[derive(Clone, Debug)]
pub struct ScriptedInput {
    segments: Vec<InputSegment>,
    index: usize,
    offset: u32,
}

impl ScriptedInput {
    pub fn new(segments: Vec<InputSegment>) -> Self {
        let mut input = Self {
            segments,
            index: 0,
            offset: 0,
        };
        input.skip_exhausted();
        input
    }

    /// Ticks covered by the whole timeline.
    pub fn duration(&self) -> u64 {
        self.segments
            .iter()
            .map(|segment| u64::from(segment.ticks))
            .sum()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.segments.len()
    }

    pub fn rewind(&mut self) {
        self.index = 0;
        self.offset = 0;
        self.skip_exhausted();
    }

    /// Moves the cursor past segments with no ticks left.
    fn skip_exhausted(&mut self) {
        while self
            .segments
            .get(self.index)
            .is_some_and(|segment| self.offset >= segment.ticks)
        {
            self.index += 1;
            self.offset = 0;
        }
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self, _tick: u64) -> InputSnapshot {
        let Some(segment) = self.segments.get(self.index) else {
            return InputSnapshot::NEUTRAL;
        };
        let snapshot = segment.snapshot(self.offset);
        self.offset += 1;
        self.skip_exhausted();
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_plays_segments_in_order() {
        let mut input = ScriptedInput::new(vec![
            InputSegment::hold(2, 1.0, 0.0),
            InputSegment::hold(0, 0.0, -1.0),
            InputSegment::jump(2),
        ]);
        assert_eq!(input.duration(), 4);

        let samples: Vec<_> = (0..6).map(|tick| input.sample(tick)).collect();
        assert_eq!(
            samples,
            vec![
                InputSnapshot::axis(1.0, 0.0),
                InputSnapshot::axis(1.0, 0.0),
                InputSnapshot::jump(),
                InputSnapshot::NEUTRAL,
                InputSnapshot::NEUTRAL,
                InputSnapshot::NEUTRAL,
            ]
        );
        assert!(input.is_finished());

        input.rewind();
        assert_eq!(input.sample(0), InputSnapshot::axis(1.0, 0.0));
    }

    #[test]
    fn finishes_on_the_last_scripted_tick() {
        let mut input = ScriptedInput::new(vec![
            InputSegment::hold(3, 0.0, -1.0),
            InputSegment::jump(1),
            InputSegment::hold(0, 1.0, 0.0),
        ]);
        for tick in 0..input.duration() {
            assert!(!input.is_finished());
            input.sample(tick);
        }
        assert!(input.is_finished());
        assert!(ScriptedInput::new(Vec::new()).is_finished());
    }

    #[test]
    fn closures_are_sources() {
        let mut source = |tick: u64| InputSnapshot::NEUTRAL.with_jump(tick == 3);
        assert!(!source.sample(2).jump_pressed);
        assert!(source.sample(3).jump_pressed);
    }
}
