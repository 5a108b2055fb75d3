use super::{RandomSource, ScanControl};
use crate::error::ScanError;
use crate::model::{AppConfig, AppEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Pick a duplicate-free random subset of `vocabulary`, sized uniformly in
/// `min..=max` (both clamped to the vocabulary size).
pub fn select_ingredients(
    vocabulary: &[String],
    min: usize,
    max: usize,
    rng: &mut dyn RandomSource,
) -> Result<Vec<String>, ScanError> {
    let mut pool: Vec<String> = Vec::with_capacity(vocabulary.len());
    for item in vocabulary {
        if !pool.contains(item) {
            pool.push(item.clone());
        }
    }
    if pool.is_empty() {
        return Err(ScanError::NothingRecognized);
    }

    let hi = max.min(pool.len()).max(1);
    let lo = min.clamp(1, hi);
    let count = rng.pick_count(lo, hi).clamp(lo, hi);

    rng.shuffle(&mut pool);
    pool.truncate(count);
    Ok(pool)
}

pub struct ScanEngine {
    interval: Duration,
    step: u8,
    vocabulary: Vec<String>,
    min_detected: usize,
    max_detected: usize,
    rng: Box<dyn RandomSource>,
}

impl ScanEngine {
    pub fn new(cfg: &AppConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            interval: cfg.scan_interval,
            step: cfg.scan_step.max(1),
            vocabulary: cfg.vocabulary.clone(),
            min_detected: cfg.min_detected,
            max_detected: cfg.max_detected,
            rng,
        }
    }

    /// Drive progress from 0 to 100, then detect ingredients.
    pub async fn run(
        mut self,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        mut control_rx: mpsc::UnboundedReceiver<ScanControl>,
    ) -> Result<Vec<String>, ScanError> {
        info!(interval = ?self.interval, step = self.step, "scan started");
        let _ = event_tx.send(AppEvent::ScanStarted);
        let _ = event_tx.send(AppEvent::ScanProgress { percent: 0 });

        let mut ticker = tokio::time::interval(self.interval);
        // First tick completes immediately.
        ticker.tick().await;

        let mut progress: u8 = 0;
        let mut control_open = true;
        while progress < 100 {
            tokio::select! {
                _ = ticker.tick() => {
                    progress = progress.saturating_add(self.step).min(100);
                    debug!(progress, "scan tick");
                    let _ = event_tx.send(AppEvent::ScanProgress { percent: progress });
                }
                msg = control_rx.recv(), if control_open => {
                    match msg {
                        Some(ScanControl::Cancel) => {
                            info!(progress, "scan cancelled");
                            return Err(ScanError::Cancelled);
                        }
                        // Nobody can cancel any more; run to completion.
                        None => control_open = false,
                    }
                }
            }
        }

        let detected = select_ingredients(
            &self.vocabulary,
            self.min_detected,
            self.max_detected,
            self.rng.as_mut(),
        )?;
        info!(ingredients = ?detected, "scan finished");
        Ok(detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StdRandom;
    use crate::model::INGREDIENT_VOCABULARY;

    /// Returns counts from a script and rotates instead of shuffling.
    struct Scripted {
        counts: Vec<usize>,
        rotate: usize,
    }

    impl RandomSource for Scripted {
        fn pick_count(&mut self, _min: usize, _max: usize) -> usize {
            if self.counts.is_empty() {
                0
            } else {
                self.counts.remove(0)
            }
        }

        fn shuffle(&mut self, items: &mut [String]) {
            let n = items.len();
            if n > 0 {
                items.rotate_left(self.rotate % n);
            }
        }
    }

    fn vocab() -> Vec<String> {
        INGREDIENT_VOCABULARY.iter().map(|s| s.to_string()).collect()
    }

    fn fast_config() -> AppConfig {
        AppConfig {
            scan_interval: Duration::from_millis(200),
            ..AppConfig::default()
        }
    }

    #[test]
    fn selection_is_a_duplicate_free_subset_of_three_to_six() {
        let vocab = vocab();
        for seed in 0..200u64 {
            let mut rng = StdRandom::seeded(seed);
            let picked = select_ingredients(&vocab, 3, 6, &mut rng).unwrap();
            assert!((3..=6).contains(&picked.len()), "seed {seed}: {picked:?}");
            for item in &picked {
                assert!(vocab.contains(item));
            }
            let mut dedup = picked.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), picked.len());
        }
    }

    #[test]
    fn scripted_source_is_deterministic() {
        let mut rng = Scripted {
            counts: vec![4],
            rotate: 2,
        };
        let picked = select_ingredients(&vocab(), 3, 6, &mut rng).unwrap();
        assert_eq!(picked, vec!["Cheese", "Onions", "Bell Peppers", "Milk"]);
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        let mut rng = Scripted {
            counts: vec![99],
            rotate: 0,
        };
        assert_eq!(select_ingredients(&vocab(), 3, 6, &mut rng).unwrap().len(), 6);
        let mut rng = Scripted {
            counts: vec![0],
            rotate: 0,
        };
        assert_eq!(select_ingredients(&vocab(), 3, 6, &mut rng).unwrap().len(), 3);
    }

    #[test]
    fn small_vocabulary_caps_the_count() {
        let small = vec!["Eggs".to_string(), "Milk".to_string(), "Eggs".to_string()];
        let mut rng = StdRandom::seeded(1);
        let picked = select_ingredients(&small, 3, 6, &mut rng).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn empty_vocabulary_recognizes_nothing() {
        let mut rng = StdRandom::seeded(1);
        assert_eq!(
            select_ingredients(&[], 3, 6, &mut rng),
            Err(ScanError::NothingRecognized)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn progress_runs_to_one_hundred_in_steps() {
        let (evt_tx, mut evt_rx) = mpsc::unbounded_channel();
        let (_ctrl_tx, ctrl_rx) = mpsc::unbounded_channel();
        let engine = ScanEngine::new(&fast_config(), Box::new(StdRandom::seeded(3)));
        let detected = engine.run(evt_tx, ctrl_rx).await.unwrap();
        assert!((3..=6).contains(&detected.len()));

        let mut percents = Vec::new();
        while let Ok(ev) = evt_rx.try_recv() {
            if let AppEvent::ScanProgress { percent } = ev {
                percents.push(percent);
            }
        }
        assert_eq!(percents, (0..=100).step_by(10).collect::<Vec<u8>>());
    }

    #[tokio::test(start_paused = true)]
    async fn uneven_step_stops_at_one_hundred() {
        let (evt_tx, mut evt_rx) = mpsc::unbounded_channel();
        let (_ctrl_tx, ctrl_rx) = mpsc::unbounded_channel();
        let cfg = AppConfig {
            scan_step: 30,
            ..fast_config()
        };
        let engine = ScanEngine::new(&cfg, Box::new(StdRandom::seeded(4)));
        engine.run(evt_tx, ctrl_rx).await.unwrap();

        let mut percents = Vec::new();
        while let Ok(ev) = evt_rx.try_recv() {
            if let AppEvent::ScanProgress { percent } = ev {
                percents.push(percent);
            }
        }
        assert_eq!(percents, vec![0, 30, 60, 90, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_the_scan() {
        let (evt_tx, mut evt_rx) = mpsc::unbounded_channel();
        let (ctrl_tx, ctrl_rx) = mpsc::unbounded_channel();
        let engine = ScanEngine::new(&fast_config(), Box::new(StdRandom::seeded(3)));
        let handle = tokio::spawn(engine.run(evt_tx, ctrl_rx));

        tokio::time::sleep(Duration::from_millis(450)).await;
        ctrl_tx.send(ScanControl::Cancel).unwrap();
        assert_eq!(handle.await.unwrap(), Err(ScanError::Cancelled));

        let mut last = 0;
        while let Ok(ev) = evt_rx.try_recv() {
            if let AppEvent::ScanProgress { percent } = ev {
                last = percent;
            }
        }
        assert!(last < 100);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_control_channel_still_completes() {
        let (evt_tx, _evt_rx) = mpsc::unbounded_channel();
        let (ctrl_tx, ctrl_rx) = mpsc::unbounded_channel::<ScanControl>();
        drop(ctrl_tx);
        let engine = ScanEngine::new(&fast_config(), Box::new(StdRandom::seeded(9)));
        assert!(engine.run(evt_tx, ctrl_rx).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_vocabulary_fails_after_progress() {
        let (evt_tx, _evt_rx) = mpsc::unbounded_channel();
        let (_ctrl_tx, ctrl_rx) = mpsc::unbounded_channel();
        let cfg = AppConfig {
            vocabulary: Vec::new(),
            ..fast_config()
        };
        let engine = ScanEngine::new(&cfg, Box::new(StdRandom::seeded(1)));
        assert_eq!(
            engine.run(evt_tx, ctrl_rx).await,
            Err(ScanError::NothingRecognized)
        );
    }
}
