//! Sine-wave rainbow animation.

use crate::packet::LightCommand;

/// Red channel intensity for light `n` at phase `t`. Periodic in 2π.
pub fn red(n: f32, t: f32) -> f32 {
    0.5 + (n + t).sin() * 0.5
}

/// Green channel, one radian ahead of red.
pub fn green(n: f32, t: f32) -> f32 {
    0.5 + (n + 1.0 + t).sin() * 0.5
}

/// Blue channel, two radians ahead of red.
pub fn blue(n: f32, t: f32) -> f32 {
    0.5 + (n + 2.0 + t).sin() * 0.5
}

/// Rolling rainbow over a strip of lights.
///
/// Each light's hue is derived from its index plus a shared phase
/// accumulator, so advancing the phase rolls the pattern along the strip.
pub struct Wave {
    light_count: u8,
    phase: f32,
    phase_step: f32,
}

impl Wave {
    pub fn new(light_count: u8, phase_step: f32) -> Wave {
        Wave {
            light_count,
            phase: 0.0,
            phase_step,
        }
    }

    /// Build the commands for every light at the current phase.
    pub fn frame(&self) -> Vec<LightCommand> {
        (0..self.light_count)
            .map(|id| {
                let n = id as f32;
                LightCommand::from_levels(
                    id,
                    red(n, self.phase),
                    green(n, self.phase),
                    blue(n, self.phase),
                )
            })
            .collect()
    }

    /// Commands that turn every light off, for blackout on exit.
    pub fn blackout(&self) -> Vec<LightCommand> {
        (0..self.light_count)
            .map(|id| LightCommand::new(id, 0, 0, 0))
            .collect()
    }

    /// Step the phase accumulator by one frame.
    pub fn advance(&mut self) {
        self.phase += self.phase_step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn channels_are_periodic_in_two_pi() {
        for i in 0..28 {
            let n = i as f32;
            for j in 0..10 {
                let t = j as f32 * 0.73;
                assert!((red(n, t) - red(n, t + 2.0 * PI)).abs() < 1e-4);
                assert!((green(n, t) - green(n, t + 2.0 * PI)).abs() < 1e-4);
                assert!((blue(n, t) - blue(n, t + 2.0 * PI)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn channels_stay_in_unit_range() {
        for i in 0..100 {
            let t = i as f32 * 0.1;
            let v = red(3.0, t);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn frame_covers_every_light_in_order() {
        let wave = Wave::new(28, 0.1);
        let frame = wave.frame();
        assert_eq!(frame.len(), 28);
        for (i, cmd) in frame.iter().enumerate() {
            assert_eq!(cmd.id, i as u8);
        }
    }

    #[test]
    fn first_frame_matches_zero_phase() {
        let wave = Wave::new(1, 0.1);
        let frame = wave.frame();
        // red(0, 0) = 0.5, truncated to 127
        assert_eq!(frame[0].red, 127);
        assert_eq!(frame[0].green, (green(0.0, 0.0) * 255.0) as u8);
    }

    #[test]
    fn advance_moves_the_pattern() {
        let mut wave = Wave::new(8, 0.1);
        let before = wave.frame();
        wave.advance();
        let after = wave.frame();
        assert!(before
            .iter()
            .zip(after.iter())
            .any(|(a, b)| a.red != b.red || a.green != b.green || a.blue != b.blue));
    }

    #[test]
    fn blackout_is_all_zeroes() {
        let wave = Wave::new(4, 0.1);
        for cmd in wave.blackout() {
            assert_eq!((cmd.red, cmd.green, cmd.blue), (0, 0, 0));
        }
    }
}
