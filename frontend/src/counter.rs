use crate::config;

/// Linear count-up from zero to `target` in a fixed number of steps.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self::with_steps(target, config::COUNTER_STEPS)
    }

    pub fn with_steps(target: u32, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: f64::from(target) / f64::from(steps),
            current: 0.0,
            finished: false,
        }
    }

    /// Milliseconds between two steps.
    pub fn step_period_ms() -> u32 {
        config::COUNTER_DURATION_MS / config::COUNTER_STEPS
    }

    /// Advances one step and returns the value to display.
    pub fn step(&mut self) -> u32 {
        if self.finished {
            return self.target;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.finished = true;
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Groups digits in threes, `1500` -> `1,500`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_end(mut anim: CounterAnimation) -> Vec<u32> {
        let mut shown = Vec::new();
        while !anim.is_finished() {
            shown.push(anim.step());
            assert!(shown.len() <= 1_000, "counter never finished");
        }
        shown
    }

    #[test]
    fn reaches_target_in_configured_steps() {
        let shown = run_to_end(CounterAnimation::new(1500));
        assert_eq!(shown.len(), config::COUNTER_STEPS as usize);
        assert_eq!(shown.last(), Some(&1500));
        assert_eq!(shown[0], 25);
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        for target in [15, 25, 98, 1500] {
            let shown = run_to_end(CounterAnimation::new(target));
            assert!(shown.windows(2).all(|w| w[0] <= w[1]));
            assert!(shown.iter().all(|v| *v <= target));
        }
    }

    #[test]
    fn small_targets_floor_intermediate_values() {
        let mut anim = CounterAnimation::with_steps(15, 60);
        assert_eq!(anim.step(), 0);
        assert_eq!(anim.step(), 0);
        assert_eq!(anim.step(), 0);
        assert_eq!(anim.step(), 1);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut anim = CounterAnimation::new(0);
        assert_eq!(anim.step(), 0);
        assert!(anim.is_finished());
        assert_eq!(anim.step(), 0);
    }

    #[test]
    fn step_period_spreads_duration_over_steps() {
        assert_eq!(CounterAnimation::step_period_ms(), 33);
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(98), "98");
        assert_eq!(format_thousands(1500), "1,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
