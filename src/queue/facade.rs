use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::store::{AppointmentStore, SpecializationCatalogStore};
use super::{catalog, filter, partition, statistics, validate_records, QueueError};
use super::{DailyStatistics, QueueResult};
use crate::models::FilterSpec;

/// Point-in-time result of one queue query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub queue: QueueResult,
    pub statistics: DailyStatistics,
}

/// Entry point for queue queries. Borrows a store opened at startup.
pub struct QueueService<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> QueueService<'a, S>
where
    S: AppointmentStore + SpecializationCatalogStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Runs `spec` against the store using the local calendar date as today.
    pub fn run_query(&self, spec: &FilterSpec) -> Result<QueueSnapshot, QueueError> {
        self.run_query_on(spec, Local::now().date_naive())
    }

    /// Runs `spec` with an explicit `today`.
    ///
    /// The queue reflects `spec`; the statistics always cover every queued
    /// appointment on `today`, whatever the filter. No matches is `Ok`
    /// with an empty queue. Store failures and out-of-range urgency
    /// scores fail the whole query.
    pub fn run_query_on(
        &self,
        spec: &FilterSpec,
        today: NaiveDate,
    ) -> Result<QueueSnapshot, QueueError> {
        if let Some(ref specialization) = spec.specialization {
            catalog::ensure_known_specialization(self.store, specialization)?;
        }

        let candidates = self
            .store
            .fetch_appointments(spec.date, spec.specialization.as_deref())?;
        validate_records(&candidates)?;
        let fetched = candidates.len();

        let filtered = filter::evaluate(candidates, spec);
        let queue = partition::partition(filtered)?;

        let todays = self.store.fetch_appointments(Some(today), None)?;
        validate_records(&todays)?;
        let statistics = statistics::aggregate(&todays, today);

        tracing::debug!(
            fetched,
            queued = queue.len(),
            high = queue.high_count,
            medium = queue.medium_count,
            low = queue.low_count,
            today_total = statistics.today_total,
            "Queue query complete"
        );

        Ok(QueueSnapshot { queue, statistics })
    }

    pub fn list_specializations(&self) -> Result<BTreeSet<String>, QueueError> {
        catalog::list_specializations(self.store)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::TriageBucket;
    use crate::queue::fixtures::{date, record, MemoryStore};

    fn reference_store() -> MemoryStore {
        MemoryStore::new(vec![
            record("A", 9, "2024-01-01", "Cardiology"),
            record("B", 5, "2024-01-01", "Cardiology"),
            record("C", 2, "2024-01-02", "Dermatology"),
        ])
    }

    fn summary(snapshot: &QueueSnapshot) -> Vec<(usize, &str, TriageBucket)> {
        snapshot
            .queue
            .entries
            .iter()
            .map(|e| (e.rank, e.record.appointment_code.as_str(), e.bucket))
            .collect()
    }

    #[test]
    fn date_filter_example() {
        let store = reference_store();
        let service = QueueService::new(&store);
        let snapshot = service
            .run_query_on(&FilterSpec::on_date(date("2024-01-01")), date("2024-01-01"))
            .unwrap();

        assert_eq!(
            summary(&snapshot),
            vec![(1, "A", TriageBucket::High), (2, "B", TriageBucket::Medium)]
        );
        assert_eq!(snapshot.statistics.today_total, 2);
        assert_eq!(snapshot.statistics.today_high_priority, 1);
        assert_eq!(
            snapshot.statistics.specialization_distribution,
            BTreeMap::from([("Cardiology".to_string(), 2)])
        );
    }

    #[test]
    fn urgency_band_example_ignores_today() {
        let store = reference_store();
        let service = QueueService::new(&store);
        let spec = FilterSpec::unrestricted().with_urgency_band(TriageBucket::Low);

        for today in ["2024-01-01", "2024-01-02", "2030-06-15"] {
            let snapshot = service.run_query_on(&spec, date(today)).unwrap();
            assert_eq!(summary(&snapshot), vec![(1, "C", TriageBucket::Low)]);
        }
    }

    #[test]
    fn empty_store_example() {
        let store = MemoryStore::new(Vec::new());
        let snapshot = QueueService::new(&store)
            .run_query_on(&FilterSpec::unrestricted(), date("2024-01-01"))
            .unwrap();
        assert!(snapshot.queue.is_empty());
        assert_eq!(
            snapshot.statistics,
            DailyStatistics::empty(date("2024-01-01"))
        );
    }

    #[test]
    fn statistics_ignore_the_filter() {
        let store = reference_store();
        let service = QueueService::new(&store);
        let spec = FilterSpec::on_date(date("2024-01-02"))
            .with_specialization("Dermatology");
        let snapshot = service.run_query_on(&spec, date("2024-01-01")).unwrap();

        assert_eq!(summary(&snapshot), vec![(1, "C", TriageBucket::Low)]);
        assert_eq!(snapshot.statistics.today_total, 2);
        assert_eq!(snapshot.statistics.today_high_priority, 1);
    }

    #[test]
    fn no_matches_still_reports_statistics() {
        let store = reference_store();
        let spec = FilterSpec::on_date(date("2024-01-01"))
            .with_specialization("Dermatology");
        let snapshot = QueueService::new(&store)
            .run_query_on(&spec, date("2024-01-01"))
            .unwrap();
        assert!(snapshot.queue.is_empty());
        assert_eq!(snapshot.statistics.today_total, 2);
    }

    #[test]
    fn result_independent_of_store_pushdown() {
        let with = reference_store();
        let without = reference_store().without_pushdown();
        let specs = [
            FilterSpec::unrestricted(),
            FilterSpec::on_date(date("2024-01-01")),
            FilterSpec::unrestricted().with_specialization("Cardiology"),
            FilterSpec::on_date(date("2024-01-02")).with_urgency_band(TriageBucket::Low),
        ];
        for spec in &specs {
            let a = QueueService::new(&with)
                .run_query_on(spec, date("2024-01-01"))
                .unwrap();
            let b = QueueService::new(&without)
                .run_query_on(spec, date("2024-01-01"))
                .unwrap();
            assert_eq!(a, b, "mismatch for {spec:?}");
        }
    }

    #[test]
    fn unknown_specialization_is_rejected_before_fetching() {
        let store = reference_store();
        let spec = FilterSpec::unrestricted().with_specialization("Podiatry");
        let err = QueueService::new(&store)
            .run_query_on(&spec, date("2024-01-01"))
            .unwrap_err();
        assert!(matches!(err, QueueError::UnknownSpecialization(ref s) if s == "Podiatry"));
        assert_eq!(store.fetches.get(), 0);
    }

    #[test]
    fn catalog_specialization_without_records_is_empty_queue() {
        let store = reference_store().with_specialization("Oncology");
        let spec = FilterSpec::unrestricted().with_specialization("Oncology");
        let snapshot = QueueService::new(&store)
            .run_query_on(&spec, date("2024-01-01"))
            .unwrap();
        assert!(snapshot.queue.is_empty());
    }

    #[test]
    fn store_failure_propagates() {
        let store = reference_store().failing();
        let err = QueueService::new(&store)
            .run_query_on(&FilterSpec::unrestricted(), date("2024-01-01"))
            .unwrap_err();
        assert!(matches!(err, QueueError::StoreUnavailable(_)));
    }

    #[test]
    fn invalid_record_fails_whole_query() {
        let store = MemoryStore::new(vec![
            record("A", 9, "2024-01-01", "Cardiology"),
            record("BAD", 0, "2024-01-05", "Cardiology"),
        ]);
        let err = QueueService::new(&store)
            .run_query_on(&FilterSpec::unrestricted(), date("2024-01-01"))
            .unwrap_err();
        assert!(matches!(err, QueueError::InvalidRecord { urgency_level: 0, .. }));
    }

    #[test]
    fn invalid_record_outside_filter_still_rejected_by_statistics() {
        // The queue filter skips the bad record, but today's statistics see it.
        let store = MemoryStore::new(vec![
            record("A", 9, "2024-01-02", "Cardiology"),
            record("BAD", 12, "2024-01-01", "Cardiology"),
        ]);
        let err = QueueService::new(&store)
            .run_query_on(&FilterSpec::on_date(date("2024-01-02")), date("2024-01-01"))
            .unwrap_err();
        assert!(matches!(err, QueueError::InvalidRecord { urgency_level: 12, .. }));
    }

    #[test]
    fn lists_catalog_through_service() {
        let store = reference_store().with_specialization("Oncology");
        let specs = QueueService::new(&store).list_specializations().unwrap();
        assert_eq!(specs.len(), 3);
    }
}
