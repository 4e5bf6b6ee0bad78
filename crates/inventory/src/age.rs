use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

/// A source of the current time.
///
/// Age computations take a clock instead of reading the system time, so they
/// stay deterministic under test. Any `Fn() -> DateTime<Utc>` is a clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    #[inline]
    fn now(&self) -> DateTime<Utc> { self() }
}

/// The wall clock of the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// A clock frozen at one instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> { self.0 }
}

/// Renders the time elapsed since `created` for humans.
///
/// See [`format_elapsed`] for the format.
#[must_use]
pub fn format_age(created: DateTime<Utc>, clock: &impl Clock) -> String {
    format_elapsed(clock.now() - created)
}

/// Renders an elapsed duration in the largest fitting unit.
///
/// Seconds, minutes and hours carry two decimal places, e.g. `30.00 seconds`
/// or `5.00 minutes`. From one day on the whole number of days is printed,
/// e.g. `10 days`, without singular form. Precision is one millisecond.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let seconds = elapsed.num_milliseconds() as f64 / 1000.0;

    if seconds < SECONDS_PER_MINUTE {
        format!("{seconds:.2} seconds")
    } else if seconds < SECONDS_PER_HOUR {
        format!("{:.2} minutes", seconds / SECONDS_PER_MINUTE)
    } else if seconds < SECONDS_PER_DAY {
        format!("{:.2} hours", seconds / SECONDS_PER_HOUR)
    } else {
        format!("{} days", elapsed.num_days())
    }
}
