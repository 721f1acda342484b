//! Sample collections served to each screen.
//!
//! The app ships with static mock data; every page view starts from a
//! fresh copy of these tables.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;

use super::story::{Story, StoryStatus};
use super::trek::{Checkpoint, Difficulty, ItineraryDay, Season, Trek};
use super::user::{Role, User, UserStatus};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 8, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[allow(clippy::too_many_arguments)]
fn trek(
    id: &str,
    name: &str,
    region: &str,
    location: &str,
    difficulty: Difficulty,
    duration_days: u32,
    max_altitude_m: u32,
    price_usd: f64,
    seasons: &[Season],
    tags: &[&str],
    rating: f64,
    review_count: u32,
) -> Trek {
    Trek {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        location: location.to_string(),
        difficulty,
        duration_days,
        max_altitude_m,
        price_usd,
        best_seasons: seasons.iter().copied().collect::<BTreeSet<_>>(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        review_count,
        itinerary: Vec::new(),
    }
}

fn day(day: u32, title: &str, distance_km: f64, checkpoints: &[(&str, u32)]) -> ItineraryDay {
    ItineraryDay {
        day,
        title: title.to_string(),
        description: String::new(),
        distance_km,
        checkpoints: checkpoints
            .iter()
            .map(|(name, altitude_m)| Checkpoint {
                name: name.to_string(),
                altitude_m: *altitude_m,
                note: String::new(),
            })
            .collect(),
    }
}

fn build_treks() -> Vec<Trek> {
    use Season::{Autumn, Monsoon, Spring, Summer, Winter};

    let mut everest = trek(
        "everest-base-camp",
        "Everest Base Camp",
        "Khumbu",
        "Solukhumbu, Nepal",
        Difficulty::Challenging,
        14,
        5364,
        1400.0,
        &[Spring, Autumn],
        &["glacier", "sherpa culture", "high altitude"],
        4.9,
        1250,
    );
    everest.itinerary = vec![
        day(1, "Lukla to Phakding", 8.0, &[("Lukla", 2860), ("Phakding", 2610)]),
        day(2, "Phakding to Namche Bazaar", 10.0, &[("Monjo", 2835), ("Namche Bazaar", 3440)]),
        day(3, "Acclimatisation in Namche", 4.0, &[("Everest View Hotel", 3880)]),
        day(4, "Namche to Tengboche", 10.0, &[("Tengboche", 3867)]),
        day(5, "Tengboche to Dingboche", 11.0, &[("Pangboche", 3985), ("Dingboche", 4410)]),
        day(6, "Dingboche to Lobuche", 8.0, &[("Thukla", 4620), ("Lobuche", 4940)]),
        day(7, "Lobuche to Base Camp", 15.0, &[("Gorak Shep", 5164), ("Everest Base Camp", 5364)]),
    ];

    let mut poon_hill = trek(
        "poon-hill",
        "Poon Hill",
        "Annapurna",
        "Ghorepani, Nepal",
        Difficulty::Easy,
        5,
        3210,
        450.0,
        &[Spring, Autumn, Winter],
        &["sunrise", "rhododendron", "family"],
        4.5,
        870,
    );
    poon_hill.itinerary = vec![
        day(1, "Nayapul to Tikhedhunga", 9.0, &[("Nayapul", 1070), ("Tikhedhunga", 1540)]),
        day(2, "Tikhedhunga to Ghorepani", 12.0, &[("Ulleri", 2020), ("Ghorepani", 2860)]),
        day(3, "Poon Hill sunrise and Tadapani", 10.0, &[("Poon Hill", 3210), ("Tadapani", 2630)]),
        day(4, "Tadapani to Ghandruk", 7.0, &[("Ghandruk", 1940)]),
        day(5, "Ghandruk to Nayapul", 12.0, &[("Nayapul", 1070)]),
    ];

    vec![
        everest,
        trek(
            "annapurna-circuit",
            "Annapurna Circuit",
            "Annapurna",
            "Manang, Nepal",
            Difficulty::Moderate,
            18,
            5416,
            1200.0,
            &[Spring, Autumn],
            &["thorong la", "villages", "classic"],
            4.8,
            980,
        ),
        trek(
            "langtang-valley",
            "Langtang Valley",
            "Langtang",
            "Rasuwa, Nepal",
            Difficulty::Moderate,
            8,
            4984,
            650.0,
            &[Spring, Autumn],
            &["tamang heritage", "glacier", "close to kathmandu"],
            4.6,
            410,
        ),
        trek(
            "upper-mustang",
            "Upper Mustang",
            "Mustang",
            "Lo Manthang, Nepal",
            Difficulty::Moderate,
            12,
            3840,
            2100.0,
            &[Spring, Summer, Monsoon, Autumn],
            &["restricted area", "desert", "tibetan culture"],
            4.7,
            260,
        ),
        trek(
            "gokyo-lakes",
            "Gokyo Lakes",
            "Khumbu",
            "Solukhumbu, Nepal",
            Difficulty::Moderate,
            12,
            5357,
            1100.0,
            &[Spring, Autumn],
            &["turquoise lakes", "glacier", "gokyo ri"],
            4.7,
            520,
        ),
        poon_hill,
        trek(
            "manaslu-circuit",
            "Manaslu Circuit",
            "Gorkha",
            "Gorkha, Nepal",
            Difficulty::Challenging,
            16,
            5106,
            1600.0,
            &[Spring, Autumn],
            &["restricted area", "larkya la", "remote"],
            4.8,
            300,
        ),
        trek(
            "kanchenjunga-base-camp",
            "Kanchenjunga Base Camp",
            "Kanchenjunga",
            "Taplejung, Nepal",
            Difficulty::Strenuous,
            22,
            5143,
            2400.0,
            &[Spring, Autumn],
            &["remote", "wilderness", "restricted area"],
            4.9,
            95,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn story(
    id: &str,
    title: &str,
    author: &str,
    location: &str,
    tags: &[&str],
    status: StoryStatus,
    published_at: DateTime<Utc>,
    likes: u32,
    reports: u32,
) -> Story {
    Story {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        location: location.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status,
        published_at,
        likes,
        reports,
        liked_by_viewer: false,
    }
}

fn build_stories() -> Vec<Story> {
    vec![
        story(
            "s1",
            "Sunrise over Dhaulagiri",
            "Maya Gurung",
            "Poon Hill",
            &["sunrise", "photography"],
            StoryStatus::Published,
            at(2024, 4, 12),
            248,
            0,
        ),
        story(
            "s2",
            "Crossing Thorong La in a snowstorm",
            "Leo Fischer",
            "Annapurna Circuit",
            &["high pass", "weather"],
            StoryStatus::Published,
            at(2024, 10, 28),
            512,
            1,
        ),
        story(
            "s3",
            "Tea houses of the Langtang valley",
            "Priya Sharma",
            "Langtang Valley",
            &["food", "culture"],
            StoryStatus::Pending,
            at(2025, 3, 3),
            37,
            0,
        ),
        story(
            "s4",
            "What altitude sickness taught me",
            "Sam Okoro",
            "Everest Base Camp",
            &["safety", "altitude"],
            StoryStatus::Published,
            at(2023, 11, 19),
            890,
            2,
        ),
        story(
            "s5",
            "Cheap gear that actually lasted",
            "anon_trekker",
            "Kathmandu",
            &["gear", "budget"],
            StoryStatus::Published,
            at(2025, 1, 7),
            14,
            4,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    location: &str,
    role: Role,
    status: UserStatus,
    joined_at: DateTime<Utc>,
    last_active_at: Option<DateTime<Utc>>,
    treks_completed: u32,
    reports: u32,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        location: location.to_string(),
        role,
        status,
        joined_at,
        last_active_at,
        treks_completed,
        reports,
    }
}

fn build_users() -> Vec<User> {
    vec![
        user(
            "u1",
            "Maya Gurung",
            "maya@trekview.example",
            "Pokhara",
            Role::Guide,
            UserStatus::Active,
            at(2022, 2, 14),
            Some(at(2025, 5, 1)),
            41,
            0,
        ),
        user(
            "u2",
            "Leo Fischer",
            "leo.fischer@trekview.example",
            "Munich",
            Role::Trekker,
            UserStatus::Active,
            at(2023, 6, 2),
            Some(at(2025, 4, 20)),
            6,
            0,
        ),
        user(
            "u3",
            "Priya Sharma",
            "priya@trekview.example",
            "Delhi",
            Role::Trekker,
            UserStatus::Pending,
            at(2025, 2, 27),
            None,
            0,
            0,
        ),
        user(
            "u4",
            "Sam Okoro",
            "sam.okoro@trekview.example",
            "Lagos",
            Role::Trekker,
            UserStatus::Active,
            at(2021, 9, 9),
            Some(at(2025, 3, 11)),
            12,
            1,
        ),
        user(
            "u5",
            "anon_trekker",
            "anon@trekview.example",
            "Unknown",
            Role::Trekker,
            UserStatus::Suspended,
            at(2024, 12, 30),
            Some(at(2025, 1, 8)),
            1,
            7,
        ),
        user(
            "u6",
            "Tashi Sherpa",
            "tashi@trekview.example",
            "Namche Bazaar",
            Role::Admin,
            UserStatus::Active,
            at(2020, 1, 5),
            Some(at(2025, 5, 2)),
            88,
            0,
        ),
    ]
}

lazy_static! {
    static ref TREKS: Vec<Trek> = build_treks();
    static ref STORIES: Vec<Story> = build_stories();
    static ref USERS: Vec<User> = build_users();
}

/// A fresh copy of the trek listing.
pub fn sample_treks() -> Vec<Trek> {
    TREKS.clone()
}

pub fn sample_stories() -> Vec<Story> {
    STORIES.clone()
}

pub fn sample_users() -> Vec<User> {
    USERS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(sample_treks().len(), 8);
        assert_eq!(sample_stories().len(), 5);
        assert_eq!(sample_users().len(), 6);
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<String> = sample_treks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_four_moderate_treks() {
        let moderate: Vec<String> = sample_treks()
            .into_iter()
            .filter(|t| t.difficulty == Difficulty::Moderate)
            .map(|t| t.name)
            .collect();
        assert_eq!(
            moderate,
            vec!["Annapurna Circuit", "Langtang Valley", "Upper Mustang", "Gokyo Lakes"]
        );
    }

    #[test]
    fn test_dates_resolved() {
        for story in sample_stories() {
            assert!(story.published_at > DateTime::<Utc>::MIN_UTC);
        }
    }
}
