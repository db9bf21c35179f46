use serde::{Deserialize, Serialize};

use super::QueueError;
use crate::models::{AppointmentRecord, TriageBucket};

/// One ranked slot in the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// 1-based, contiguous across bucket boundaries.
    pub rank: usize,
    pub bucket: TriageBucket,
    pub record: AppointmentRecord,
}

/// Section header for one bucket: display label, guidance line and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub bucket: TriageBucket,
    pub label: String,
    pub guidance: String,
    pub count: usize,
}

impl BucketSummary {
    pub fn new(bucket: TriageBucket, count: usize) -> Self {
        Self {
            bucket,
            label: bucket.label().to_string(),
            guidance: bucket.guidance().to_string(),
            count,
        }
    }
}

/// Ranked queue: the High block, then Medium, then Low.
///
/// `buckets` always holds all three headers in queue order, empty ones
/// included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueResult {
    pub entries: Vec<QueueEntry>,
    pub buckets: Vec<BucketSummary>,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
}

impl QueueResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, bucket: TriageBucket) -> usize {
        match bucket {
            TriageBucket::High => self.high_count,
            TriageBucket::Medium => self.medium_count,
            TriageBucket::Low => self.low_count,
        }
    }

    /// Entries of one bucket, in rank order.
    pub fn bucket(&self, bucket: TriageBucket) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter().filter(move |e| e.bucket == bucket)
    }
}

/// Splits `records` into High / Medium / Low and assigns ranks.
///
/// Each bucket keeps the input order; there is no sort by urgency value
/// or time inside a bucket. A record outside 1..=10 fails the whole call.
pub fn partition(records: Vec<AppointmentRecord>) -> Result<QueueResult, QueueError> {
    let mut high = Vec::new();
    let mut medium = Vec::new();
    let mut low = Vec::new();

    for record in records {
        match record.bucket() {
            Some(TriageBucket::High) => high.push(record),
            Some(TriageBucket::Medium) => medium.push(record),
            Some(TriageBucket::Low) => low.push(record),
            None => return Err(QueueError::invalid_record(&record)),
        }
    }

    let (high_count, medium_count, low_count) = (high.len(), medium.len(), low.len());

    let entries = [
        (TriageBucket::High, high),
        (TriageBucket::Medium, medium),
        (TriageBucket::Low, low),
    ]
    .into_iter()
    .flat_map(|(bucket, tier)| tier.into_iter().map(move |record| (bucket, record)))
    .enumerate()
    .map(|(i, (bucket, record))| QueueEntry {
        rank: i + 1,
        bucket,
        record,
    })
    .collect();

    let buckets = vec![
        BucketSummary::new(TriageBucket::High, high_count),
        BucketSummary::new(TriageBucket::Medium, medium_count),
        BucketSummary::new(TriageBucket::Low, low_count),
    ];

    Ok(QueueResult {
        entries,
        buckets,
        high_count,
        medium_count,
        low_count,
    })
}
