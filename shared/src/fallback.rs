//! Sample data that stands in for the backend.
//!
//! Every page asks the backend first. When that fails (or, for cities,
//! returns nothing) the resolvers here substitute fixed or randomly
//! generated records so the page renders as if the request had succeeded.

use crate::category::{Category, CategorizedComments};
use crate::date::random_past_timestamp;
use crate::{City, Comment, CommentUser, Neighborhood};
use chrono::{DateTime, Utc};
use rand::Rng;

// =========================================================
// Fixed data
// =========================================================

pub const FALLBACK_CITY_NAMES: [&str; 10] = [
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Salvador",
    "Brasília",
    "Fortaleza",
    "Recife",
    "Porto Alegre",
    "Curitiba",
    "Manaus",
];

/// Cities whose display name is known without asking the backend.
const CITY_NAME_LOOKUP: [(i64, &str); 5] = [
    (1, "São Paulo"),
    (2, "Rio de Janeiro"),
    (3, "Belo Horizonte"),
    (4, "Salvador"),
    (5, "Brasília"),
];

pub const FALLBACK_NEIGHBORHOOD_NAMES: [&str; 8] = [
    "Centro",
    "Jardins",
    "Pinheiros",
    "Vila Madalena",
    "Moema",
    "Itaim Bibi",
    "Consolação",
    "Bela Vista",
];

/// Upper bound (inclusive) of sample comments per category.
pub const MAX_SAMPLE_COMMENTS: usize = 3;

// =========================================================
// Provenance
// =========================================================

/// Where the data a page renders came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The backend answered.
    Remote,
    /// The backend answered with nothing usable.
    EmptyFallback,
    /// The request failed.
    ErrorFallback,
}

impl DataSource {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, DataSource::Remote)
    }

    /// Whether the page shows the "try again later" notice.
    pub fn should_notify(&self) -> bool {
        matches!(self, DataSource::ErrorFallback)
    }
}

/// Data tagged with its [`DataSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn remote(data: T) -> Self {
        Self {
            data,
            source: DataSource::Remote,
        }
    }

    pub fn fallback(data: T, source: DataSource) -> Self {
        Self { data, source }
    }
}

// =========================================================
// Cities
// =========================================================

pub fn fallback_cities() -> Vec<City> {
    FALLBACK_CITY_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| City {
            id,
            name: (*name).to_string(),
        })
        .collect()
}

/// Both a failure and an empty list fall back to the fixed cities.
pub fn resolve_cities<E>(result: Result<Vec<City>, E>) -> Sourced<Vec<City>> {
    match result {
        Ok(cities) if !cities.is_empty() => Sourced::remote(cities),
        Ok(_) => Sourced::fallback(fallback_cities(), DataSource::EmptyFallback),
        Err(_) => Sourced::fallback(fallback_cities(), DataSource::ErrorFallback),
    }
}

/// Display name for a city id, `"City {id}"` when unknown.
pub fn city_display_name(city_id: i64) -> String {
    CITY_NAME_LOOKUP
        .iter()
        .find(|(id, _)| *id == city_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("City {}", city_id))
}

// =========================================================
// Neighborhoods
// =========================================================

pub fn fallback_neighborhoods(city_id: i64) -> Vec<Neighborhood> {
    FALLBACK_NEIGHBORHOOD_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| Neighborhood {
            id,
            name: (*name).to_string(),
            city_id,
        })
        .collect()
}

/// Only failures fall back; an empty answer is shown as an empty list.
pub fn resolve_neighborhoods<E>(
    city_id: i64,
    result: Result<Vec<Neighborhood>, E>,
) -> Sourced<Vec<Neighborhood>> {
    match result {
        Ok(list) => Sourced::remote(list),
        Err(_) => Sourced::fallback(fallback_neighborhoods(city_id), DataSource::ErrorFallback),
    }
}

/// Header record for the details page. Always built locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodProfile {
    pub id: i64,
    pub name: String,
    pub city_id: i64,
    pub city_name: String,
}

impl NeighborhoodProfile {
    pub fn synthesize(id: i64) -> Self {
        Self {
            id,
            name: format!("Neighborhood {}", id),
            city_id: 1,
            city_name: city_display_name(1),
        }
    }
}

// =========================================================
// Comments
// =========================================================

/// Between 0 and [`MAX_SAMPLE_COMMENTS`] made-up comments for each category.
pub fn sample_comments<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> CategorizedComments {
    let mut grouped = CategorizedComments::new();
    for category in Category::ALL {
        let count = rng.gen_range(0..=MAX_SAMPLE_COMMENTS);
        let list = (0..count)
            .map(|i| sample_comment(category, i, random_past_timestamp(rng, now)))
            .collect();
        grouped.set(category, list);
    }
    grouped
}

fn sample_comment(category: Category, index: usize, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id: format!("{}-{}", category.label(), index),
        content: format!(
            "This is a sample comment about {} in the neighborhood.",
            category.label().to_lowercase()
        ),
        category: category.label().to_string(),
        created_at,
        user: CommentUser::new(format!("User {}", index + 1)),
    }
}

pub fn resolve_comments<E, R: Rng + ?Sized>(
    result: Result<Vec<Comment>, E>,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Sourced<CategorizedComments> {
    match result {
        Ok(list) => Sourced::remote(CategorizedComments::group(list)),
        Err(_) => Sourced::fallback(sample_comments(rng, now), DataSource::ErrorFallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn failed_city_fetch_yields_the_ten_fixed_cities() {
        let resolved = resolve_cities::<&str>(Err("connection refused"));
        let names: Vec<_> = resolved.data.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, FALLBACK_CITY_NAMES.to_vec());
        assert_eq!(resolved.source, DataSource::ErrorFallback);
        assert!(resolved.source.should_notify());
        let ids: Vec<_> = resolved.data.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn empty_city_list_falls_back_quietly() {
        let resolved = resolve_cities::<()>(Ok(Vec::new()));
        assert_eq!(resolved.data.len(), 10);
        assert_eq!(resolved.source, DataSource::EmptyFallback);
        assert!(resolved.source.is_fallback());
        assert!(!resolved.source.should_notify());
    }

    #[test]
    fn remote_cities_are_kept() {
        let remote = vec![City {
            id: 99,
            name: "Natal".to_string(),
        }];
        let resolved = resolve_cities::<()>(Ok(remote.clone()));
        assert_eq!(resolved, Sourced::remote(remote));
    }

    #[test]
    fn city_names_come_from_lookup_or_are_synthesized() {
        assert_eq!(city_display_name(3), "Belo Horizonte");
        assert_eq!(city_display_name(5), "Brasília");
        assert_eq!(city_display_name(6), "City 6");
        assert_eq!(city_display_name(-1), "City -1");
    }

    #[test]
    fn failed_neighborhood_fetch_tags_every_entry_with_the_city() {
        let resolved = resolve_neighborhoods::<&str>(3, Err("timeout"));
        let names: Vec<_> = resolved.data.iter().map(|n| n.name.as_str()).collect();

        assert_eq!(names, FALLBACK_NEIGHBORHOOD_NAMES.to_vec());
        assert!(resolved.data.iter().all(|n| n.city_id == 3));
        assert_eq!(resolved.source, DataSource::ErrorFallback);
    }

    #[test]
    fn empty_neighborhood_list_is_not_replaced() {
        let resolved = resolve_neighborhoods::<()>(3, Ok(Vec::new()));
        assert!(resolved.data.is_empty());
        assert_eq!(resolved.source, DataSource::Remote);
    }

    #[test]
    fn synthesized_profile_derives_name_from_id() {
        let profile = NeighborhoodProfile::synthesize(17);
        assert_eq!(profile.name, "Neighborhood 17");
        assert_eq!(profile.city_id, 1);
        assert_eq!(profile.city_name, "São Paulo");
    }

    #[test]
    fn sample_comments_fill_each_category_with_zero_to_three() {
        let mut seen_empty = false;
        let mut seen_full = false;

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grouped = sample_comments(&mut rng, now());

            assert_eq!(grouped.iter().count(), Category::ALL.len());
            for (category, list) in grouped.iter() {
                assert!(list.len() <= MAX_SAMPLE_COMMENTS);
                seen_empty |= list.is_empty();
                seen_full |= list.len() == MAX_SAMPLE_COMMENTS;
                for comment in list {
                    assert_eq!(comment.category, category.label());
                    assert!(comment.created_at <= now());
                }
            }
            assert!(grouped.unmatched().is_empty());
        }

        // both ends of the range are drawn
        assert!(seen_empty, "no category was ever left empty");
        assert!(seen_full, "no category ever got {} comments", MAX_SAMPLE_COMMENTS);
    }

    #[test]
    fn sample_comment_fields_follow_their_index() {
        let ts = now();
        let comment = sample_comment(Category::CostOfLiving, 1, ts);
        assert_eq!(comment.id, "Cost of Living-1");
        assert_eq!(
            comment.content,
            "This is a sample comment about cost of living in the neighborhood."
        );
        assert_eq!(comment.user.name, "User 2");
        assert_eq!(comment.user.avatar, None);
    }

    #[test]
    fn failed_comment_fetch_uses_samples() {
        let mut rng = StdRng::seed_from_u64(1);
        let resolved = resolve_comments::<&str, _>(Err("502"), &mut rng, now());
        assert_eq!(resolved.source, DataSource::ErrorFallback);
        assert!(resolved.data.total() <= Category::ALL.len() * MAX_SAMPLE_COMMENTS);
    }

    #[test]
    fn fetched_comments_are_grouped() {
        let mut rng = StdRng::seed_from_u64(1);
        let comment = sample_comment(Category::Safety, 0, now());
        let resolved = resolve_comments::<(), _>(Ok(vec![comment.clone()]), &mut rng, now());

        assert_eq!(resolved.source, DataSource::Remote);
        assert_eq!(resolved.data.get(Category::Safety), &[comment]);
        assert_eq!(resolved.data.total(), 1);
    }
}
