//! Pure scheduling rules: bookable hours, slot truncation and availability.

use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use super::types::{Appointment, DayAvailability, MonthAvailability};
use crate::error::AppError;
use crate::storage::DateRange;

/// Hours of the day at which a slot can start.
pub const BOOKABLE_HOURS: RangeInclusive<u32> = 8..=17;

/// Number of slots a provider offers per day.
pub const SLOTS_PER_DAY: usize = (*BOOKABLE_HOURS.end() - *BOOKABLE_HOURS.start() + 1) as usize;

/// Source of the current local wall-clock time.
pub type Clock = fn() -> NaiveDateTime;

/// The default clock.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Truncates a timestamp to the start of its hour.
pub fn start_of_hour(date: NaiveDateTime) -> NaiveDateTime {
    at_hour(date.date(), date.hour())
}

/// Returns true if a slot may start at `hour`.
pub fn is_bookable_hour(hour: u32) -> bool {
    BOOKABLE_HOURS.contains(&hour)
}

/// Builds a calendar day from request parameters.
pub fn resolve_day(year: i32, month: u32, day: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::new(format!("Invalid date: {year}-{month}-{day}.")))
}

/// Builds the range covering a whole month from request parameters.
pub fn resolve_month(year: i32, month: u32) -> Result<DateRange, AppError> {
    DateRange::month(year, month).map_err(|e| AppError::new(format!("{e}.")))
}

/// Computes the availability of every bookable hour of `day`.
///
/// An hour is available when no appointment starts in it and it is still
/// ahead of `now`.
pub fn day_availability(
    day: NaiveDate,
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> Vec<DayAvailability> {
    BOOKABLE_HOURS
        .map(|hour| {
            let taken = appointments
                .iter()
                .any(|appointment| appointment.date.date() == day && appointment.date.hour() == hour);

            DayAvailability {
                hour,
                available: !taken && at_hour(day, hour) > now,
            }
        })
        .collect()
}

/// Computes the availability of every day in `month`.
///
/// A day is available while its last second is ahead of `now` and it still
/// has a free slot.
pub fn month_availability(
    month: &DateRange,
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> Vec<MonthAvailability> {
    month
        .start
        .iter_days()
        .take(month.num_days() as usize)
        .map(|date| {
            let booked = appointments
                .iter()
                .filter(|appointment| appointment.date.date() == date)
                .count();

            MonthAvailability {
                day: date.day(),
                available: end_of_day(date) > now && booked < SLOTS_PER_DAY,
            }
        })
        .collect()
}

fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(hour))
}

const LAST_SECOND: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(LAST_SECOND)
}
