//! Count-up animation for tokenomics percentage labels.

/// Leading-integer parse with `parseInt` semantics: optional leading
/// whitespace, optional sign, then digits; anything after is ignored.
/// Returns `None` when no digit is found.
///
/// ```
/// use strutmaster::effects::counter::parse_leading_int;
///
/// assert_eq!(parse_leading_int("42%"), Some(42));
/// assert_eq!(parse_leading_int("  -7 pct"), Some(-7));
/// assert_eq!(parse_leading_int("n/a"), None);
/// ```
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Frames of a count-up from 0 to `target` in `steps` equal increments.
///
/// Each frame is the floored running value; the last frame is always exactly
/// `target`, after which the iterator ends.
///
/// ```
/// use strutmaster::effects::counter::CountUp;
///
/// let frames: Vec<i64> = CountUp::new(42, 50).collect();
/// assert_eq!(frames.last(), Some(&42));
/// ```
#[derive(Debug, Clone)]
pub struct CountUp {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: i64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: target as f64 / steps as f64,
            current: 0.0,
            done: false,
        }
    }

    /// Count-up for a label such as `"42%"`; `None` if it holds no number.
    pub fn from_label(text: &str, steps: u32) -> Option<Self> {
        parse_leading_int(text).map(|target| Self::new(target, steps))
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn reached(&self) -> bool {
        if self.target >= 0 {
            self.current >= self.target as f64
        } else {
            self.current <= self.target as f64
        }
    }
}

impl Iterator for CountUp {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.reached() {
            self.current = self.target as f64;
            self.done = true;
        }
        Some(self.current.floor() as i64)
    }
}

/// Text written into a label for one frame
pub fn percent_label(value: i64) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_parse_int() {
        assert_eq!(parse_leading_int("42%"), Some(42));
        assert_eq!(parse_leading_int("100"), Some(100));
        assert_eq!(parse_leading_int("+5%"), Some(5));
        assert_eq!(parse_leading_int("\n 12.9%"), Some(12));
        assert_eq!(parse_leading_int("%42"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn forty_two_ends_exactly_at_target() {
        let frames: Vec<i64> = CountUp::new(42, 50).collect();
        // Float accumulation may need one extra step to cross the target.
        assert!((50..=51).contains(&frames.len()));
        assert_eq!(frames.last(), Some(&42));
        assert_eq!(percent_label(*frames.last().unwrap()), "42%");
    }

    #[test]
    fn frames_never_decrease_or_overshoot() {
        let frames: Vec<i64> = CountUp::new(37, 50).collect();
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|&v| v <= 37));
    }

    #[test]
    fn zero_target_finishes_in_one_frame() {
        let frames: Vec<i64> = CountUp::new(0, 50).collect();
        assert_eq!(frames, vec![0]);
    }

    #[test]
    fn negative_target_counts_down() {
        let mut up = CountUp::new(-5, 50);
        let frames: Vec<i64> = up.by_ref().collect();
        assert_eq!(frames.last(), Some(&-5));
        assert!(up.is_done());
    }

    #[test]
    fn from_label_skips_non_numeric() {
        assert!(CountUp::from_label("TBD", 50).is_none());
        assert_eq!(CountUp::from_label("15%", 50).map(|c| c.target()), Some(15));
    }

    #[test]
    fn zero_steps_is_clamped() {
        let frames: Vec<i64> = CountUp::new(10, 0).collect();
        assert_eq!(frames, vec![10]);
    }
}
