use super::enums::DayBucket;
use super::task::Task;
use crate::clock::Clock;

/// The task collection partitioned by creation date.
///
/// Derived at render time and never stored: the same collection bucketed
/// again after midnight classifies differently, which is how yesterday's
/// checklist moves to the Yesterday section without any mutation.
#[derive(Debug)]
pub struct Buckets<'a> {
    pub today: Vec<&'a Task>,
    pub yesterday: Vec<&'a Task>,
    pub other: Vec<&'a Task>,
}

impl<'a> Buckets<'a> {
    /// Total number of tasks across all three buckets.
    pub fn len(&self) -> usize {
        self.today.len() + self.yesterday.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn of(&self, bucket: DayBucket) -> &[&'a Task] {
        match bucket {
            DayBucket::Today => &self.today,
            DayBucket::Yesterday => &self.yesterday,
            DayBucket::Other => &self.other,
        }
    }
}

/// Partition tasks into Today / Yesterday / Other against the clock's
/// current date. Order within each bucket matches collection order.
pub fn bucket<'a>(tasks: &'a [Task], clock: &dyn Clock) -> Buckets<'a> {
    let mut today = Vec::new();
    let mut yesterday = Vec::new();
    let mut other = Vec::new();

    for task in tasks {
        if clock.is_today(task.created_at) {
            today.push(task);
        } else if clock.is_yesterday(task.created_at) {
            yesterday.push(task);
        } else {
            other.push(task);
        }
    }

    Buckets {
        today,
        yesterday,
        other,
    }
}

/// Tasks in display order (Today, then Yesterday, then Older), each paired
/// with its bucket. The list pane's selection index runs over this sequence.
pub fn selectable<'a>(buckets: &Buckets<'a>) -> Vec<(&'a Task, DayBucket)> {
    let mut rows = Vec::with_capacity(buckets.len());
    for (bucket, tasks) in [
        (DayBucket::Today, &buckets.today),
        (DayBucket::Yesterday, &buckets.yesterday),
        (DayBucket::Other, &buckets.other),
    ] {
        for task in tasks {
            rows.push((*task, bucket));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, Local, TimeZone};

    fn noon(y: i32, m: u32, d: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn task_at(text: &str, created_at: chrono::DateTime<Local>) -> Task {
        Task::new(text.to_string(), created_at)
    }

    #[test]
    fn test_bucket_partitions_exactly() {
        let clock = FixedClock(noon(2024, 3, 15));
        let tasks = vec![
            task_at("a", noon(2024, 3, 15)),
            task_at("b", noon(2024, 3, 14)),
            task_at("c", noon(2024, 3, 10)),
            task_at("d", noon(2024, 3, 15)),
        ];

        let buckets = bucket(&tasks, &clock);
        assert_eq!(
            buckets.today.len() + buckets.yesterday.len() + buckets.other.len(),
            tasks.len()
        );
        assert_eq!(buckets.today.len(), 2);
        assert_eq!(buckets.yesterday.len(), 1);
        assert_eq!(buckets.other.len(), 1);
    }

    #[test]
    fn test_bucket_preserves_collection_order() {
        let clock = FixedClock(noon(2024, 3, 15));
        let tasks = vec![
            task_at("newest", noon(2024, 3, 15)),
            task_at("middle", noon(2024, 3, 15)),
            task_at("oldest", noon(2024, 3, 15)),
        ];

        let buckets = bucket(&tasks, &clock);
        let texts: Vec<&str> = buckets.today.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_same_task_moves_buckets_across_midnight() {
        let monday = noon(2024, 3, 11);
        let tasks = vec![task_at("Buy milk", monday)];

        let on_monday = bucket(&tasks, &FixedClock(monday));
        assert_eq!(on_monday.today.len(), 1);

        let on_tuesday = bucket(&tasks, &FixedClock(monday + Duration::days(1)));
        assert!(on_tuesday.today.is_empty());
        assert_eq!(on_tuesday.yesterday.len(), 1);

        let on_friday = bucket(&tasks, &FixedClock(monday + Duration::days(4)));
        assert!(on_friday.yesterday.is_empty());
        assert_eq!(on_friday.other.len(), 1);
    }

    #[test]
    fn test_selectable_orders_today_first() {
        let clock = FixedClock(noon(2024, 3, 15));
        let tasks = vec![
            task_at("old", noon(2024, 3, 1)),
            task_at("new", noon(2024, 3, 15)),
            task_at("mid", noon(2024, 3, 14)),
        ];

        let buckets = bucket(&tasks, &clock);
        let rows = selectable(&buckets);
        let order: Vec<&str> = rows.iter().map(|(t, _)| t.text.as_str()).collect();
        assert_eq!(order, vec!["new", "mid", "old"]);
        assert_eq!(rows[0].1, DayBucket::Today);
        assert_eq!(rows[2].1, DayBucket::Other);
    }

    #[test]
    fn test_empty_collection_buckets_empty() {
        let clock = FixedClock(noon(2024, 3, 15));
        let buckets = bucket(&[], &clock);
        assert!(buckets.is_empty());
        assert!(selectable(&buckets).is_empty());
    }
}
