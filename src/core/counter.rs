use super::constants::COUNTER_DURATION_MS;

/// Reads the leading integer of a `data-target` value (`"150+"` -> 150).
pub fn parse_target(attr: &str) -> Option<i64> {
    let s = attr.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[inline]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// One 0 -> target count-up, sampled per animation frame.
#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    target: i64,
    start_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub value: i64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, start_ms: f64) -> Self {
        Self { target, start_ms }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn sample(&self, now_ms: f64) -> Sample {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        let progress = (elapsed / COUNTER_DURATION_MS).min(1.0);
        if progress >= 1.0 {
            // easing can leave the last frame short of the target
            return Sample {
                value: self.target,
                done: true,
            };
        }
        let value = (self.target as f64 * ease_out_quart(progress)).floor() as i64;
        Sample { value, done: false }
    }
}
