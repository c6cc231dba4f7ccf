use std::collections::HashMap;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::errors::domain::DomainError;

/// A show with the venue and artist it links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Show {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowSplit {
    pub past: Vec<Show>,
    pub upcoming: Vec<Show>,
}

/// Past is strictly before `now`; each half is ordered by start time then id.
pub fn split_shows(mut shows: Vec<Show>, now: OffsetDateTime) -> ShowSplit {
    shows.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then(a.show_id.cmp(&b.show_id))
    });
    let (past, upcoming): (Vec<Show>, Vec<Show>) =
        shows.into_iter().partition(|s| s.start_time < now);
    ShowSplit { past, upcoming }
}

/// Number of upcoming shows per key (venue id or artist id).
pub fn upcoming_counts<F>(shows: &[Show], now: OffsetDateTime, key: F) -> HashMap<i64, usize>
where
    F: Fn(&Show) -> i64,
{
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|s| s.start_time >= now) {
        *counts.entry(key(show)).or_insert(0) += 1;
    }
    counts
}

/// Parse an RFC 3339 start time and store it as whole seconds in UTC.
pub fn parse_start_time(raw: &str) -> Result<OffsetDateTime, DomainError> {
    let parsed = OffsetDateTime::parse(raw.trim(), &Rfc3339).map_err(|_| {
        DomainError::validation("start_time must be an RFC 3339 timestamp")
    })?;
    let utc = parsed.to_offset(UtcOffset::UTC);
    Ok(utc - Duration::nanoseconds(i64::from(utc.nanosecond())))
}

/// A venue or artist together with its shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDetail<T> {
    #[serde(flatten)]
    pub record: T,
    pub past_shows: Vec<Show>,
    pub upcoming_shows: Vec<Show>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T> BookingDetail<T> {
    pub fn new(record: T, split: ShowSplit) -> Self {
        Self {
            record,
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        }
    }
}
