//! Group history entries by how long ago they were searched.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;
use std::fmt;

use super::types::HistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DateBucket {
    Today,
    Yesterday,
    /// Two to six days ago.
    ThisWeek,
    Older,
}

impl DateBucket {
    pub const ALL: [DateBucket; 4] = [
        DateBucket::Today,
        DateBucket::Yesterday,
        DateBucket::ThisWeek,
        DateBucket::Older,
    ];
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateBucket::Today => "Today",
            DateBucket::Yesterday => "Yesterday",
            DateBucket::ThisWeek => "This week",
            DateBucket::Older => "Older",
        })
    }
}

/// Bucket for a search made on `date`, seen from `today`. Future dates
/// (clock skew) count as today.
pub fn bucket_for(date: NaiveDate, today: NaiveDate) -> DateBucket {
    match (today - date).num_days() {
        i64::MIN..=0 => DateBucket::Today,
        1 => DateBucket::Yesterday,
        2..=6 => DateBucket::ThisWeek,
        _ => DateBucket::Older,
    }
}

/// Group `entries` (already newest first) into non-empty buckets, in bucket
/// order. Calendar days are taken in `now`'s time zone.
pub fn group_by_bucket<'a, Tz: TimeZone>(
    entries: &'a [HistoryEntry],
    now: &DateTime<Tz>,
) -> Vec<(DateBucket, Vec<&'a HistoryEntry>)> {
    let tz = now.timezone();
    let today = now.date_naive();
    let mut groups: Vec<(DateBucket, Vec<&HistoryEntry>)> =
        DateBucket::ALL.iter().map(|b| (*b, Vec::new())).collect();

    for entry in entries {
        let day = entry.created_at_utc().with_timezone(&tz).date_naive();
        let bucket = bucket_for(day, today);
        groups[bucket as usize].1.push(entry);
    }

    groups.retain(|(_, items)| !items.is_empty());
    groups
}

/// `(bucket, count)` for every bucket, including empty ones.
pub fn bucket_counts(groups: &[(DateBucket, Vec<&HistoryEntry>)]) -> Vec<(DateBucket, usize)> {
    DateBucket::ALL
        .iter()
        .map(|bucket| {
            let n = groups
                .iter()
                .find(|(b, _)| b == bucket)
                .map_or(0, |(_, items)| items.len());
            (*bucket, n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{CabinClass, SearchRequest, TripType};
    use crate::sites::SiteId;
    use chrono::{Duration, FixedOffset, Utc};
    use std::collections::BTreeSet;

    fn entry(id: i64, created_at: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            request: SearchRequest {
                trip_type: TripType::OneWay,
                origin: "SFO".to_string(),
                destination: "LAX".to_string(),
                depart_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                return_date: None,
                cabin: CabinClass::Economy,
                adults: 1,
                children: 0,
                infants: 0,
                selected_sites: BTreeSet::from([SiteId::Kayak]),
            },
            created_at,
        }
    }

    #[test]
    fn bucket_boundaries() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(bucket_for(today, today), DateBucket::Today);
        assert_eq!(bucket_for(today + Duration::days(1), today), DateBucket::Today);
        assert_eq!(bucket_for(today - Duration::days(1), today), DateBucket::Yesterday);
        assert_eq!(bucket_for(today - Duration::days(2), today), DateBucket::ThisWeek);
        assert_eq!(bucket_for(today - Duration::days(6), today), DateBucket::ThisWeek);
        assert_eq!(bucket_for(today - Duration::days(7), today), DateBucket::Older);
    }

    #[test]
    fn groups_skip_empty_buckets_and_keep_order() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let ts = |d: DateTime<Utc>| d.timestamp();
        let entries = vec![
            entry(4, ts(now - Duration::hours(1))),
            entry(3, ts(now - Duration::hours(2))),
            entry(2, ts(now - Duration::days(3))),
            entry(1, ts(now - Duration::days(30))),
        ];
        let groups = group_by_bucket(&entries, &now);
        let shape: Vec<(DateBucket, Vec<i64>)> = groups
            .iter()
            .map(|(b, items)| (*b, items.iter().map(|e| e.id).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (DateBucket::Today, vec![4, 3]),
                (DateBucket::ThisWeek, vec![2]),
                (DateBucket::Older, vec![1]),
            ]
        );

        let counts = bucket_counts(&groups);
        assert_eq!(counts[1], (DateBucket::Yesterday, 0));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 4);
    }

    #[test]
    fn calendar_day_follows_time_zone() {
        // 2025-03-10 02:00 UTC is still 2025-03-09 in UTC-5.
        let created = Utc.with_ymd_and_hms(2025, 3, 10, 2, 0, 0).unwrap().timestamp();
        let entries = vec![entry(1, created)];
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = eastern.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let groups = group_by_bucket(&entries, &now);
        assert_eq!(groups[0].0, DateBucket::Yesterday);

        let now_utc = now.with_timezone(&Utc);
        assert_eq!(group_by_bucket(&entries, &now_utc)[0].0, DateBucket::Today);
    }
}
