// Data loaded into the in-memory tables when seeding is enabled.

use crate::modules::reviews::core::movie::{CastRecord, Movie};
use crate::modules::reviews::core::review::Review;
use serde_json::Map;

pub fn reviews() -> Vec<Review> {
    [
        (
            1234,
            101,
            "john.doe@example.com",
            "2025-03-10",
            "An amazing sci-fi experience! The visuals were breathtaking.",
        ),
        (
            2,
            102,
            "jane.smith@example.com",
            "2025-03-12",
            "The storyline was engaging, but the pacing felt a bit slow.",
        ),
        (
            2,
            201,
            "alex.jones@example.com",
            "2025-03-15",
            "A masterpiece of thriller and suspense. Loved every moment!",
        ),
        (
            3,
            301,
            "sarah.lee@example.com",
            "2025-03-18",
            "A heartwarming movie with outstanding performances.",
        ),
        (
            4,
            401,
            "michael.brown@example.com",
            "2025-03-20",
            "The cinematography was stunning, but the script lacked depth.",
        ),
    ]
    .into_iter()
    .map(|(movie_id, review_id, reviewer_id, review_date, content)| Review {
        movie_id,
        review_id,
        reviewer_id: reviewer_id.to_string(),
        review_date: review_date.to_string(),
        content: content.to_string(),
    })
    .collect()
}

pub fn movies() -> Vec<Movie> {
    [
        (
            1234,
            "Orbital Drift",
            "A salvage crew finds a derelict station that should not exist.",
            "2024-11-08",
        ),
        (
            2,
            "Night Ledger",
            "An accountant uncovers a laundering ring hidden in a small-town bank.",
            "2023-05-19",
        ),
        (
            3,
            "The Long Way Home",
            "Two estranged brothers drive their late father's car across the country.",
            "2022-09-02",
        ),
        (
            4,
            "Salt and Glass",
            "A glassblower's apprentice competes for a commission in Murano.",
            "2024-02-14",
        ),
    ]
    .into_iter()
    .map(|(id, title, overview, release_date)| Movie {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        release_date: release_date.to_string(),
        original_language: "en".to_string(),
        extra: Map::new(),
    })
    .collect()
}

pub fn cast() -> Vec<CastRecord> {
    [
        (1234, "Maya Okafor", "Captain Ines Varga", "Leads the salvage crew."),
        (1234, "Tom Reilly", "Dutch", "The crew's engineer."),
        (2, "Priya Nair", "Helen Marsh", "The accountant who follows the money."),
    ]
    .into_iter()
    .map(|(movie_id, actor_name, role_name, role_description)| CastRecord {
        movie_id,
        actor_name: actor_name.to_string(),
        role_name: role_name.to_string(),
        role_description: role_description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod seed_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn every_seeded_review_has_a_unique_key_and_a_known_movie() {
        let movie_ids: HashSet<_> = movies().iter().map(|m| m.id).collect();
        let reviews = reviews();
        let keys: HashSet<_> = reviews.iter().map(Review::key).collect();
        assert_eq!(keys.len(), reviews.len());
        assert!(reviews.iter().all(|r| movie_ids.contains(&r.movie_id)));
    }

    #[rstest]
    fn every_cast_record_points_at_a_seeded_movie() {
        let movie_ids: HashSet<_> = movies().iter().map(|m| m.id).collect();
        assert!(cast().iter().all(|c| movie_ids.contains(&c.movie_id)));
    }
}
