//! Civil time and Julian Day conversions for the panchang engine.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day (Fliegel–Van Flandern day numbers)
//! - [`CivilTime`]: validated wall-clock instants with a UTC offset
//! - ΔT estimates for UT → TT
//! - Earth Rotation Angle, GMST and local sidereal time

pub mod civil_time;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil_time::{CivilTime, MAX_UTC_OFFSET_MINUTES};
pub use delta_t::{delta_t_at_jd, delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, calendar_to_jd,
    calendar_to_jdn, jd_to_calendar, jd_to_centuries, jdn_to_calendar, weekday_from_jd,
};
pub use sidereal::{
    SIDEREAL_RATE_DEG_PER_DAY, earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg,
};
