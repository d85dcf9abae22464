//! Panchang element search and report assembly.
//!
//! This crate provides:
//! - One bracket-and-bisect boundary search shared by tithi, nakshatra, yoga
//!   and karana
//! - Chained element sequences whose adjacent boundaries coincide exactly
//! - The full [`PanchangReport`] for a place and instant, with per-field status
//! - A bounded report cache and scoped-thread batch evaluation
//!
//! All functions take an immutable [`PanchangConfig`]; nothing here holds
//! global state.

pub mod batch;
pub mod cache;
pub mod config;
pub mod error;
pub mod panchang;
pub mod panchang_types;
pub mod report;
pub mod search_util;
pub mod sky;
pub mod trace;

pub use batch::{panchang_batch, panchang_batch_cached};
pub use cache::{DEFAULT_CACHE_CAPACITY, PanchangCache, QueryStats};
pub use config::PanchangConfig;
pub use error::SearchError;
pub use panchang::{element_angle_deg, element_at, element_sequence, elements_between};
pub use panchang_types::{ALL_ELEMENT_KINDS, Confidence, ElementKind, PanchangElement};
pub use report::{
    AuspiciousReport, AyanamshaReport, ChoghadiyaReport, ElementPair, ElementReport,
    HoraReport, InauspiciousReport, KaranaReport, MoonReport, PanchangQuery, PanchangReport,
    SunReport, TimeWindow, WeekdayReport, panchang_report,
};
pub use search_util::{BISECTION_TOLERANCE_DAYS, find_angle_crossing};
pub use sky::{elongation_deg, moon_sidereal_deg, sidereal_sum_deg, sun_sidereal_deg};
pub use trace::{Trace, TraceEntry};
