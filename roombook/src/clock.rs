//! Source of the current calendar day.
//!
//! Booking rules compare requested dates against "today". This trait
//! abstracts where today comes from so that the system clock can be
//! replaced with a fixed day in tests.

use chrono::{Local, NaiveDate};

use crate::date::ReservationDate;

/// Trait for reading the current calendar day.
///
/// # Examples
///
/// ```
/// use roombook::clock::{Clock, FixedClock};
/// use roombook::ReservationDate;
///
/// let day = ReservationDate::parse("20300401").unwrap();
/// let clock = FixedClock::new(day);
/// assert_eq!(clock.today(), day);
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Returns the current calendar day.
    fn today(&self) -> ReservationDate;
}

/// Production clock using the system local day boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> ReservationDate {
        ReservationDate::from(Local::now().date_naive())
    }
}

/// Clock pinned to a single day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: ReservationDate,
}

impl FixedClock {
    /// Creates a clock that always reports `today`.
    #[must_use]
    pub const fn new(today: ReservationDate) -> Self {
        Self { today }
    }

    /// Creates a clock from a plain calendar date.
    #[must_use]
    pub fn from_naive(today: NaiveDate) -> Self {
        Self::new(ReservationDate::from(today))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> ReservationDate {
        self.today
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> ReservationDate {
        (**self).today()
    }
}
