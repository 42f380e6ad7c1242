/// Upload queue and its progress simulation
///
/// Each accepted file becomes an `UploadRecord` that walks a small state
/// machine (`Uploading -> Validating -> Completed | Failed`). The machine is
/// stepped from the application's periodic tick; the random source is passed
/// in so tests can drive both terminal branches deterministically.
use rand::Rng;

/// Category label assigned once validation is far enough along.
/// The backend that would classify documents does not exist yet, so every
/// record receives the same placeholder commodity.
pub const COMMODITY_LABEL: &str = "RF Power Module";

/// Progress below this is still "uploading".
const VALIDATING_THRESHOLD: f32 = 50.0;
/// Progress at or above this finishes the record.
const TERMINAL_THRESHOLD: f32 = 90.0;
/// Progress above this reveals the commodity label.
const COMMODITY_THRESHOLD: f32 = 60.0;

/// Lifecycle of a single uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Uploading,
    Validating,
    Completed,
    Failed,
}

impl UploadStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStatus::Completed | UploadStatus::Failed)
    }

    /// Text shown next to the record in the processing queue.
    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Uploading => "Uploading...",
            UploadStatus::Validating => "Validating against standards...",
            UploadStatus::Completed => "Validation completed",
            UploadStatus::Failed => "Validation failed",
        }
    }
}

/// Tuning knobs for the simulated processing.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParams {
    /// Upper bound (exclusive) of the per-tick progress increment.
    pub max_step: f32,
    /// Probability that a finished record lands on `Completed`.
    pub success_rate: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            max_step: 20.0,
            success_rate: 0.8,
        }
    }
}

/// One file in the processing queue.
#[derive(Debug, Clone)]
pub struct UploadRecord {
    pub id: u64,
    pub name: String,
    pub size_label: String,
    pub status: UploadStatus,
    /// Percentage in `[0, 100]`, monotonically non-decreasing.
    pub progress: f32,
    pub commodity: Option<&'static str>,
}

impl UploadRecord {
    fn new(id: u64, name: String, size_label: String) -> Self {
        Self {
            id,
            name,
            size_label,
            status: UploadStatus::Uploading,
            progress: 0.0,
            commodity: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Advance the record by one simulation tick.
    ///
    /// Terminal records are left untouched, so a record that already finished
    /// can never regress or flip its outcome. The status is a pure function of
    /// the progress bands; the final outcome is an independent draw.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, params: &SimulationParams) {
        if self.is_terminal() {
            return;
        }

        self.progress += rng.gen_range(0.0..params.max_step);

        if self.progress < VALIDATING_THRESHOLD {
            self.status = UploadStatus::Uploading;
        } else if self.progress < TERMINAL_THRESHOLD {
            self.status = UploadStatus::Validating;
            if self.progress > COMMODITY_THRESHOLD {
                self.commodity = Some(COMMODITY_LABEL);
            }
        } else {
            self.progress = 100.0;
            self.status = if rng.gen_bool(params.success_rate) {
                UploadStatus::Completed
            } else {
                UploadStatus::Failed
            };
            self.commodity = Some(COMMODITY_LABEL);
        }
    }
}

/// Insertion-ordered collection of upload records.
///
/// Records are independent: one tick advances every non-terminal record, and
/// finished records simply stop participating. Once nothing is active the
/// caller can drop its timer subscription entirely.
#[derive(Debug)]
pub struct UploadQueue {
    records: Vec<UploadRecord>,
    next_id: u64,
    params: SimulationParams,
}

impl UploadQueue {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            params,
        }
    }

    /// Append a new record at the end of the queue and return its id.
    pub fn accept(&mut self, name: String, size_label: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(UploadRecord::new(id, name, size_label));
        id
    }

    /// Advance every active record by one tick.
    ///
    /// Returns the ids of records that reached a terminal status during this
    /// tick, in queue order.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<u64> {
        let mut finished = Vec::new();
        for record in &mut self.records {
            if record.is_terminal() {
                continue;
            }
            record.advance(rng, &self.params);
            if record.is_terminal() {
                finished.push(record.id);
            }
        }
        finished
    }

    pub fn records(&self) -> &[UploadRecord] {
        &self.records
    }

    pub fn record(&self, id: u64) -> Option<&UploadRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True while at least one record still needs simulation ticks.
    pub fn has_active(&self) -> bool {
        self.records.iter().any(|record| !record.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn record() -> UploadRecord {
        UploadRecord::new(0, "Ceramic_Heater_FAIR_Rev_C.pdf".to_string(), "2.4 MB".to_string())
    }

    // A generous bound: with steps uniform in [0, 20) a record finishes in
    // a handful of ticks, but the increments may legitimately be tiny.
    const MAX_TICKS: usize = 10_000;

    #[test]
    fn progress_is_monotonic_until_terminal() {
        let mut rng = rng();
        let params = SimulationParams::default();
        let mut record = record();
        let mut previous = record.progress;

        for _ in 0..MAX_TICKS {
            record.advance(&mut rng, &params);
            assert!(record.progress >= previous);
            previous = record.progress;
            if record.is_terminal() {
                break;
            }
        }

        assert!(record.is_terminal(), "record never finished");
        assert_eq!(record.progress, 100.0);
    }

    #[test]
    fn status_matches_progress_bands() {
        let mut rng = rng();
        let params = SimulationParams::default();
        let mut record = record();

        for _ in 0..MAX_TICKS {
            record.advance(&mut rng, &params);
            match record.status {
                UploadStatus::Uploading => assert!(record.progress < 50.0),
                UploadStatus::Validating => {
                    assert!(record.progress >= 50.0 && record.progress < 90.0)
                }
                UploadStatus::Completed | UploadStatus::Failed => {
                    assert_eq!(record.progress, 100.0)
                }
            }
            if record.is_terminal() {
                break;
            }
        }
    }

    #[test]
    fn terminal_record_is_frozen() {
        let mut rng = rng();
        let params = SimulationParams::default();
        let mut record = record();

        while !record.is_terminal() {
            record.advance(&mut rng, &params);
        }

        let snapshot = record.clone();
        for _ in 0..10 {
            record.advance(&mut rng, &params);
        }
        assert_eq!(record.progress, snapshot.progress);
        assert_eq!(record.status, snapshot.status);
        assert_eq!(record.commodity, snapshot.commodity);
    }

    #[test]
    fn commodity_appears_only_past_threshold() {
        let mut rng = rng();
        let params = SimulationParams::default();
        let mut record = record();

        for _ in 0..MAX_TICKS {
            record.advance(&mut rng, &params);
            if record.progress <= COMMODITY_THRESHOLD && !record.is_terminal() {
                assert_eq!(record.commodity, None);
            }
            if record.progress > COMMODITY_THRESHOLD && record.status == UploadStatus::Validating {
                assert_eq!(record.commodity, Some(COMMODITY_LABEL));
            }
            if record.is_terminal() {
                assert_eq!(record.commodity, Some(COMMODITY_LABEL));
                break;
            }
        }
    }

    #[test]
    fn success_rate_one_always_completes() {
        let params = SimulationParams {
            success_rate: 1.0,
            ..SimulationParams::default()
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut record = record();
            while !record.is_terminal() {
                record.advance(&mut rng, &params);
            }
            assert_eq!(record.status, UploadStatus::Completed);
        }
    }

    #[test]
    fn success_rate_zero_always_fails() {
        let params = SimulationParams {
            success_rate: 0.0,
            ..SimulationParams::default()
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut record = record();
            while !record.is_terminal() {
                record.advance(&mut rng, &params);
            }
            assert_eq!(record.status, UploadStatus::Failed);
        }
    }

    #[test]
    fn queue_preserves_insertion_order() {
        let mut queue = UploadQueue::new(SimulationParams::default());
        let a = queue.accept("a.pdf".to_string(), "1.0 MB".to_string());
        let b = queue.accept("b.pdf".to_string(), "2.0 MB".to_string());
        let c = queue.accept("c.pdf".to_string(), "3.0 MB".to_string());

        let names: Vec<&str> = queue.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf", "c.pdf"]);
        assert!(a < b && b < c);
    }

    #[test]
    fn queue_tick_reports_each_terminal_id_once() {
        let mut rng = rng();
        let mut queue = UploadQueue::new(SimulationParams {
            success_rate: 1.0,
            ..SimulationParams::default()
        });
        queue.accept("a.pdf".to_string(), "1.0 MB".to_string());
        queue.accept("b.pdf".to_string(), "2.0 MB".to_string());

        let mut finished = Vec::new();
        for _ in 0..MAX_TICKS {
            finished.extend(queue.tick(&mut rng));
            if !queue.has_active() {
                break;
            }
        }

        finished.sort_unstable();
        assert_eq!(finished, [0, 1]);
        assert!(!queue.has_active());
        assert!(queue.records().iter().all(|r| r.progress == 100.0));
    }
}
