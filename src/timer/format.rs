use std::fmt;

/// Breakdown of an elapsed millisecond count.
///
/// Displays as `[D days ][H hours ][M minutes ]S.mmm seconds`, where a unit
/// is shown once it or any larger unit is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
}

impl Elapsed {
    /// Negative input, from a clock stepping backwards, counts as zero.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        Self {
            days: ms / 86_400_000,
            hours: ms / 3_600_000 % 24,
            minutes: ms / 60_000 % 60,
            seconds: ms / 1000 % 60,
            millis: ms % 1000,
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show_hours = self.days > 0 || self.hours > 0;
        let show_minutes = show_hours || self.minutes > 0;

        if self.days > 0 {
            write!(f, "{} ", unit(self.days, "day"))?;
        }
        if show_hours {
            write!(f, "{} ", unit(self.hours, "hour"))?;
        }
        if show_minutes {
            write!(f, "{} ", unit(self.minutes, "minute"))?;
        }
        write!(f, "{}.{:03} seconds", self.seconds, self.millis)
    }
}

fn unit(value: i64, label: &str) -> String {
    if value == 1 {
        format!("{value} {label}")
    } else {
        format!("{value} {label}s")
    }
}
