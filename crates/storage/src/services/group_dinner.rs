use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::group_dinner::{AvailabilityInfo, GroupDinnerMatch, GroupDinnerRequest};
use crate::error::Result;
use crate::models::{BeenVisit, Restaurant, User};
use crate::repository::rating::RatingRepository;
use crate::repository::restaurant::RestaurantRepository;
use crate::repository::user::UserRepository;

// Scoring weights. Dietary and location are constant full marks for now,
// pending real dietary data and a distance signal.
const WEIGHT_WANT_TO_TRY_OVERLAP: f64 = 0.70;
const WEIGHT_DIETARY: f64 = 0.20;
const WEIGHT_LOCATION: f64 = 0.10;

const RECENT_VISIT_DAYS: i64 = 30;

/// Restaurant -> interested participants, deduplicated per participant and
/// preserving first-encounter order so equal scores keep a stable ranking.
#[derive(Default)]
struct InterestIndex {
    order: Vec<Uuid>,
    interested: HashMap<Uuid, Vec<Uuid>>,
}

impl InterestIndex {
    fn note(&mut self, restaurant_id: Uuid, user_id: Uuid) {
        match self.interested.entry(restaurant_id) {
            Entry::Occupied(mut entry) => {
                let users = entry.get_mut();
                if !users.contains(&user_id) {
                    users.push(user_id);
                }
            }
            Entry::Vacant(entry) => {
                self.order.push(restaurant_id);
                entry.insert(vec![user_id]);
            }
        }
    }
}

/// Rank candidate restaurants for a group dinner from the participants'
/// want-to-try lists. An empty result is a valid answer, not an error.
pub async fn get_suggestions(
    pool: &PgPool,
    req: &GroupDinnerRequest,
) -> Result<Vec<GroupDinnerMatch>> {
    let mut participant_ids = vec![req.user_id];
    for id in &req.participant_ids {
        if !participant_ids.contains(id) {
            participant_ids.push(*id);
        }
    }

    let users = UserRepository::new(pool).find_by_ids(&participant_ids).await?;
    let users_by_id: HashMap<Uuid, &User> = users.iter().map(|u| (u.id, u)).collect();
    let ratings = RatingRepository::new(pool);

    // Canonical watchlists first (in participant order), then legacy
    // want_to_try ratings merged on top.
    let mut index = InterestIndex::default();
    for participant_id in &participant_ids {
        if let Some(user) = users_by_id.get(participant_id) {
            for restaurant_id in &user.watchlist {
                index.note(*restaurant_id, *participant_id);
            }
        }
    }
    for (restaurant_id, user_id) in ratings.want_to_try_pairs(&participant_ids).await? {
        index.note(restaurant_id, user_id);
    }

    let now = Utc::now().naive_utc();
    let recently_visited: HashSet<Uuid> = ratings
        .been_visits(&participant_ids)
        .await?
        .iter()
        .filter(|visit| is_recent_visit(visit, now))
        .map(|visit| visit.restaurant_id)
        .collect();

    let candidate_ids: Vec<Uuid> = index
        .order
        .iter()
        .filter(|id| !recently_visited.contains(id))
        .copied()
        .collect();
    if candidate_ids.is_empty() {
        return Ok(Vec::new());
    }

    let restaurants = RestaurantRepository::new(pool)
        .find_by_ids(&candidate_ids)
        .await?;
    let restaurants_by_id: HashMap<Uuid, Restaurant> =
        restaurants.into_iter().map(|r| (r.id, r)).collect();

    Ok(score_candidates(
        &candidate_ids,
        restaurants_by_id,
        &index.interested,
        participant_ids.len(),
        req.category.as_deref(),
        req.limit,
    ))
}

/// Mock availability, pending integration with a reservation system.
pub fn restaurant_availability() -> AvailabilityInfo {
    AvailabilityInfo {
        available: true,
        time_slots: ["6:00 PM", "7:00 PM", "8:00 PM", "9:00 PM"]
            .iter()
            .map(|slot| slot.to_string())
            .collect(),
    }
}

/// Whether a `been` visit falls inside the exclusion window. The boundary is
/// inclusive: a visit dated exactly `RECENT_VISIT_DAYS` ago is still excluded.
/// Falls back to `created_at` when the visit date was never recorded.
fn is_recent_visit(visit: &BeenVisit, now: NaiveDateTime) -> bool {
    let cutoff = now - Duration::days(RECENT_VISIT_DAYS);
    match visit.visit_date {
        Some(date) => date >= cutoff.date(),
        None => visit.created_at >= cutoff,
    }
}

fn score_candidates(
    candidate_ids: &[Uuid],
    mut restaurants_by_id: HashMap<Uuid, Restaurant>,
    interested: &HashMap<Uuid, Vec<Uuid>>,
    num_participants: usize,
    category: Option<&str>,
    limit: usize,
) -> Vec<GroupDinnerMatch> {
    let mut matches = Vec::new();

    for restaurant_id in candidate_ids {
        let Some(restaurant) = restaurants_by_id.remove(restaurant_id) else {
            continue;
        };
        if let Some(category) = category
            && restaurant.category != category
        {
            continue;
        }
        let Some(participants) = interested.get(restaurant_id) else {
            continue;
        };

        let overlap_count = participants.len();
        let overlap_ratio = overlap_count as f64 / num_participants as f64;
        let score =
            (overlap_ratio * WEIGHT_WANT_TO_TRY_OVERLAP + WEIGHT_DIETARY + WEIGHT_LOCATION) * 100.0;

        let reason = if overlap_count == num_participants {
            "Everyone wants to try this!".to_string()
        } else if overlap_count > 1 {
            format!("On {overlap_count} want-to-try lists")
        } else {
            "On your want-to-try list".to_string()
        };

        matches.push(GroupDinnerMatch {
            restaurant: restaurant.into(),
            score: score.round() as i64,
            on_lists_count: overlap_count as i64,
            participants: participants.clone(),
            match_reasons: vec![reason],
            availability: None,
        });
    }

    // Stable sort: insertion order is the only tie-break.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn restaurant(id: Uuid, name: &str, category: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            cuisine: vec!["Italian".to_string()],
            category: category.to_string(),
            price_range: "$$".to_string(),
            city: None,
            state: None,
            latitude: None,
            longitude: None,
            rating: None,
            rating_count: 0,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn score_one(restaurant_id: Uuid, participants: Vec<Uuid>, total: usize) -> GroupDinnerMatch {
        let restaurants =
            HashMap::from([(restaurant_id, restaurant(restaurant_id, "Trattoria", "restaurants"))]);
        let interested = HashMap::from([(restaurant_id, participants)]);
        let mut matches =
            score_candidates(&[restaurant_id], restaurants, &interested, total, None, 20);
        assert_eq!(matches.len(), 1);
        matches.pop().unwrap()
    }

    #[test]
    fn test_unanimous_pick_scores_full_marks() {
        let rid = Uuid::new_v4();
        let group: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let result = score_one(rid, group, 3);
        assert_eq!(result.score, 100);
        assert_eq!(result.match_reasons, vec!["Everyone wants to try this!"]);
    }

    #[test]
    fn test_partial_overlap_score_and_reason() {
        let rid = Uuid::new_v4();
        let wanting = vec![Uuid::new_v4(), Uuid::new_v4()];
        // 2 of 4 participants: 100 * (0.7 * 0.5 + 0.2 + 0.1) = 65
        let result = score_one(rid, wanting, 4);
        assert_eq!(result.score, 65);
        assert_eq!(result.on_lists_count, 2);
        assert_eq!(result.match_reasons, vec!["On 2 want-to-try lists"]);
    }

    #[test]
    fn test_solo_pick_reason() {
        let rid = Uuid::new_v4();
        let result = score_one(rid, vec![Uuid::new_v4()], 3);
        assert_eq!(result.match_reasons, vec!["On your want-to-try list"]);
    }

    #[test]
    fn test_category_filter_drops_non_matching() {
        let keep = Uuid::new_v4();
        let drop = Uuid::new_v4();
        let user = Uuid::new_v4();
        let restaurants = HashMap::from([
            (keep, restaurant(keep, "Wine Bar", "bars")),
            (drop, restaurant(drop, "Trattoria", "restaurants")),
        ]);
        let interested = HashMap::from([(keep, vec![user]), (drop, vec![user])]);

        let matches =
            score_candidates(&[drop, keep], restaurants, &interested, 1, Some("bars"), 20);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].restaurant.id, keep);
    }

    #[test]
    fn test_ranked_by_score_with_insertion_order_ties() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let best = Uuid::new_v4();
        let users: Vec<Uuid> = (0..2).map(|_| Uuid::new_v4()).collect();

        let restaurants = HashMap::from([
            (first, restaurant(first, "A", "restaurants")),
            (second, restaurant(second, "B", "restaurants")),
            (best, restaurant(best, "C", "restaurants")),
        ]);
        let interested = HashMap::from([
            (first, vec![users[0]]),
            (second, vec![users[1]]),
            (best, users.clone()),
        ]);

        let matches = score_candidates(
            &[first, second, best],
            restaurants,
            &interested,
            2,
            None,
            20,
        );

        assert_eq!(matches[0].restaurant.id, best);
        // Tied at 65: insertion order preserved.
        assert_eq!(matches[1].restaurant.id, first);
        assert_eq!(matches[2].restaurant.id, second);
    }

    #[test]
    fn test_limit_truncates_results() {
        let user = Uuid::new_v4();
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let restaurants: HashMap<Uuid, Restaurant> = ids
            .iter()
            .map(|id| (*id, restaurant(*id, "R", "restaurants")))
            .collect();
        let interested: HashMap<Uuid, Vec<Uuid>> =
            ids.iter().map(|id| (*id, vec![user])).collect();

        let matches = score_candidates(&ids, restaurants, &interested, 1, None, 2);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_visit_on_cutoff_day_is_excluded() {
        let now = noon(2025, 7, 31);
        let visit = BeenVisit {
            restaurant_id: Uuid::new_v4(),
            visit_date: Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()),
            created_at: noon(2025, 6, 1),
        };
        // Exactly 30 days before `now`: still inside the window.
        assert!(is_recent_visit(&visit, now));
    }

    #[test]
    fn test_visit_before_cutoff_is_kept() {
        let now = noon(2025, 7, 31);
        let visit = BeenVisit {
            restaurant_id: Uuid::new_v4(),
            visit_date: Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
            created_at: noon(2025, 6, 1),
        };
        assert!(!is_recent_visit(&visit, now));
    }

    #[test]
    fn test_missing_visit_date_falls_back_to_created_at() {
        let now = noon(2025, 7, 31);
        let recent = BeenVisit {
            restaurant_id: Uuid::new_v4(),
            visit_date: None,
            created_at: noon(2025, 7, 20),
        };
        let old = BeenVisit {
            restaurant_id: Uuid::new_v4(),
            visit_date: None,
            created_at: noon(2025, 1, 5),
        };
        assert!(is_recent_visit(&recent, now));
        assert!(!is_recent_visit(&old, now));
    }
}
