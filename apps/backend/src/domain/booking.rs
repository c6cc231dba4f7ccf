//! Venues and artists: the two bookable sides of a show.
//!
//! Both share a [`Profile`] (name, location, contact links, genres). Request
//! bodies arrive as patches; applying a patch yields a validated draft that
//! the repos write in full.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

pub const MAX_FIELD_LEN: usize = 120;
pub const MAX_LINK_LEN: usize = 500;

/// Fields shared by venues and artists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
}

/// Partial profile from a request body. `None` keeps the current value; a
/// blank string clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(city) = self.city {
            profile.city = city;
        }
        if let Some(state) = self.state {
            profile.state = state;
        }
        if let Some(genres) = self.genres {
            profile.genres = genres;
        }
        if self.phone.is_some() {
            profile.phone = self.phone;
        }
        if self.image_link.is_some() {
            profile.image_link = self.image_link;
        }
        if self.facebook_link.is_some() {
            profile.facebook_link = self.facebook_link;
        }
        if self.website.is_some() {
            profile.website = self.website;
        }
    }
}

impl Profile {
    /// Trim every field, reject blank required fields and drop blank optional ones.
    pub fn normalized(self) -> Result<Self, DomainError> {
        Ok(Self {
            name: required(&self.name, "name", MAX_FIELD_LEN)?,
            city: required(&self.city, "city", MAX_FIELD_LEN)?,
            state: required(&self.state, "state", MAX_FIELD_LEN)?,
            phone: optional(self.phone, "phone", MAX_FIELD_LEN)?,
            genres: normalize_genres(self.genres)?,
            image_link: optional(self.image_link, "image_link", MAX_LINK_LEN)?,
            facebook_link: optional(self.facebook_link, "facebook_link", MAX_LINK_LEN)?,
            website: optional(self.website, "website", MAX_LINK_LEN)?,
        })
    }
}

fn required(value: &str, field: &str, max: usize) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be blank")));
    }
    if value.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value.to_string())
}

fn optional(value: Option<String>, field: &str, max: usize) -> Result<Option<String>, DomainError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required(v, field, max).map(Some),
    }
}

/// Trimmed, non-blank, comma-free and de-duplicated, in first-seen order.
fn normalize_genres(genres: Vec<String>) -> Result<Vec<String>, DomainError> {
    let mut out: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let genre = genre.trim();
        if genre.is_empty() {
            continue;
        }
        if genre.contains(',') {
            return Err(DomainError::validation(format!(
                "genre '{genre}' must not contain a comma"
            )));
        }
        if !out.iter().any(|g| g == genre) {
            out.push(genre.to_string());
        }
    }
    Ok(out)
}

/// Column encoding for genres.
pub fn encode_genres(genres: &[String]) -> String {
    genres.join(",")
}

pub fn decode_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub id: i64,
    #[serde(flatten)]
    pub profile: Profile,
    pub address: String,
    pub seeking_talent: bool,
}

/// Validated venue fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDraft {
    pub profile: Profile,
    pub address: String,
    pub seeking_talent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VenuePatch {
    #[serde(flatten)]
    pub profile: ProfilePatch,
    pub address: Option<String>,
    pub seeking_talent: Option<bool>,
}

impl VenueDraft {
    /// Build a new venue from a request body; required fields must all be present.
    pub fn create(patch: VenuePatch) -> Result<Self, DomainError> {
        let mut profile = Profile::default();
        patch.profile.apply(&mut profile);
        Ok(Self {
            profile: profile.normalized()?,
            address: required(&patch.address.unwrap_or_default(), "address", MAX_FIELD_LEN)?,
            seeking_talent: patch.seeking_talent.unwrap_or(false),
        })
    }
}

impl Venue {
    /// Apply a partial update on top of the stored venue.
    pub fn patched(self, patch: VenuePatch) -> Result<VenueDraft, DomainError> {
        if patch.profile.is_empty() && patch.address.is_none() && patch.seeking_talent.is_none() {
            return Err(DomainError::validation("provide at least one field to update"));
        }
        let mut profile = self.profile;
        patch.profile.apply(&mut profile);
        Ok(VenueDraft {
            profile: profile.normalized()?,
            address: required(
                patch.address.as_deref().unwrap_or(&self.address),
                "address",
                MAX_FIELD_LEN,
            )?,
            seeking_talent: patch.seeking_talent.unwrap_or(self.seeking_talent),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: i64,
    #[serde(flatten)]
    pub profile: Profile,
    pub seeking_venue: bool,
}

/// Validated artist fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDraft {
    pub profile: Profile,
    pub seeking_venue: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArtistPatch {
    #[serde(flatten)]
    pub profile: ProfilePatch,
    pub seeking_venue: Option<bool>,
}

impl ArtistDraft {
    pub fn create(patch: ArtistPatch) -> Result<Self, DomainError> {
        let mut profile = Profile::default();
        patch.profile.apply(&mut profile);
        Ok(Self {
            profile: profile.normalized()?,
            seeking_venue: patch.seeking_venue.unwrap_or(false),
        })
    }
}

impl Artist {
    pub fn patched(self, patch: ArtistPatch) -> Result<ArtistDraft, DomainError> {
        if patch.profile.is_empty() && patch.seeking_venue.is_none() {
            return Err(DomainError::validation("provide at least one field to update"));
        }
        let mut profile = self.profile;
        patch.profile.apply(&mut profile);
        Ok(ArtistDraft {
            profile: profile.normalized()?,
            seeking_venue: patch.seeking_venue.unwrap_or(self.seeking_venue),
        })
    }
}

/// List and search entry for either side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<BookingSummary>,
}

/// Group venues by `(state, city)`; venues within an area are ordered by name.
pub fn group_areas(venues: Vec<Venue>, upcoming: &HashMap<i64, usize>) -> Vec<VenueArea> {
    let mut areas: BTreeMap<(String, String), Vec<BookingSummary>> = BTreeMap::new();
    for venue in venues {
        let Profile {
            name, city, state, ..
        } = venue.profile;
        areas.entry((state, city)).or_default().push(BookingSummary {
            id: venue.id,
            name,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
        });
    }
    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            VenueArea {
                city,
                state,
                venues,
            }
        })
        .collect()
}
