//! Stamp source - the injected date and identifier provider.
//!
//! Composition itself is pure; everything time- or randomness-dependent
//! comes through this trait so callers and tests can fix it.

use chrono::{Datelike, Local, NaiveDate, Utc};
use uuid::Uuid;

/// Provides the current date (long form) and fresh proposal identifiers.
pub trait StampSource: Send + Sync {
    fn today(&self) -> String;
    fn proposal_id(&self) -> String;
}

/// Production stamp source backed by the system clock.
pub struct SystemStamp;

impl StampSource for SystemStamp {
    fn today(&self) -> String {
        format_long_date(Local::now().date_naive())
    }

    fn proposal_id(&self) -> String {
        new_proposal_id()
    }
}

/// Fixed stamp source for deterministic composition.
#[derive(Debug, Clone)]
pub struct FixedStamp {
    pub date: String,
    pub id: String,
}

impl FixedStamp {
    pub fn new(date: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            id: id.into(),
        }
    }
}

impl StampSource for FixedStamp {
    fn today(&self) -> String {
        self.date.clone()
    }

    fn proposal_id(&self) -> String {
        self.id.clone()
    }
}

/// Format a date in long form (e.g. "5 December 2025").
pub fn format_long_date(date: NaiveDate) -> String {
    let months = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    let day = date.day();
    let month = months[(date.month0() as usize).min(months.len() - 1)];
    let year = date.year();

    format!("{day} {month} {year}")
}

/// Generate a proposal identifier: `PROP-<unix millis>-<random suffix>`.
/// The format is opaque to consumers; the only requirement is that two
/// calls are distinguishable even within the same millisecond.
pub fn new_proposal_id() -> String {
    let millis = Utc::now().timestamp_millis();
    format!("PROP-{}-{}", millis, random_suffix())
}

fn random_suffix() -> String {
    base36(Uuid::new_v4().as_u128(), 9)
}

fn base36(mut value: u128, len: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    // value came from a v4 UUID, so the digits are already random enough
    String::from_utf8(out).unwrap_or_default()
}
