//! Headless batch simulation.
//!
//! Runs N independent matches under the reference policy on both
//! sides and aggregates win rates, turn-length statistics, and
//! dead-hand frequency. Matches share nothing but the read-only
//! ruleset, so the batch fans out across rayon workers; per-match
//! seeds are derived from the base seed, making the whole report
//! reproducible regardless of worker scheduling.
//!
//! A faulted match (floor violation or runaway) is recorded with its
//! index and seed and the batch continues; `fail_fast` switches to a
//! sequential run that stops at the first fault, for parity with a
//! stop-on-first-crash batch tool.

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::core::{GameRng, MatchError, PlayError, Side, SideMap};
use crate::engine::{FirstAffordable, Match, MatchOutcome, MatchVerdict, Ruleset};

/// Turn-count histogram buckets: label and inclusive upper bound.
pub const TURN_BUCKETS: [(&str, u32); 6] = [
    ("1-20", 20),
    ("21-40", 40),
    ("41-60", 60),
    ("61-80", 80),
    ("81-100", 100),
    ("100+", u32::MAX),
];

/// Batch parameters.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Number of matches to run.
    pub matches: u32,
    /// Base seed; match i runs on the stream forked at index i.
    pub base_seed: u64,
    /// Production ceiling per match.
    pub ceiling: u32,
    /// Stop at the first faulted match instead of isolating it.
    pub fail_fast: bool,
    /// Draw a progress bar while running.
    pub progress: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            matches: 1,
            base_seed: 0,
            ceiling: crate::engine::DEFAULT_PRODUCTION_CEILING,
            fail_fast: false,
            progress: false,
        }
    }
}

/// One faulted match in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MatchFault {
    pub index: u32,
    pub seed: u64,
    pub error: MatchError,
}

/// Mergeable per-worker accumulator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Matches that reached a winner.
    pub completed: u64,
    pub wins: SideMap<u64>,
    pub total_turns: u64,
    pub min_turns: u32,
    pub max_turns: u32,
    /// Completed-match counts per `TURN_BUCKETS` entry.
    pub histogram: [u64; 6],
    /// Forced discards across all completed matches.
    pub dead_hand_total: u64,
    /// Completed matches with at least one forced discard.
    pub dead_hand_matches: u64,
    pub faults: Vec<MatchFault>,
}

impl Default for BatchStats {
    fn default() -> Self {
        Self {
            completed: 0,
            wins: SideMap::with_value(0),
            total_turns: 0,
            min_turns: u32::MAX,
            max_turns: 0,
            histogram: [0; 6],
            dead_hand_total: 0,
            dead_hand_matches: 0,
            faults: Vec::new(),
        }
    }
}

impl BatchStats {
    fn record(&mut self, index: u32, seed: u64, outcome: &MatchOutcome) {
        match outcome.verdict {
            MatchVerdict::Winner(side) => {
                self.completed += 1;
                self.wins[side] += 1;
                self.total_turns += u64::from(outcome.turns);
                self.min_turns = self.min_turns.min(outcome.turns);
                self.max_turns = self.max_turns.max(outcome.turns);
                self.histogram[bucket_index(outcome.turns)] += 1;
                self.dead_hand_total += u64::from(outcome.dead_hands);
                if outcome.dead_hands > 0 {
                    self.dead_hand_matches += 1;
                }
            }
            MatchVerdict::Fault(error) => {
                warn!(index, seed, %error, "match faulted");
                self.faults.push(MatchFault { index, seed, error });
            }
        }
    }

    fn merged(mut self, other: Self) -> Self {
        self.completed += other.completed;
        for side in Side::both() {
            self.wins[side] += other.wins[side];
        }
        self.total_turns += other.total_turns;
        self.min_turns = self.min_turns.min(other.min_turns);
        self.max_turns = self.max_turns.max(other.max_turns);
        for (bucket, count) in self.histogram.iter_mut().zip(other.histogram) {
            *bucket += count;
        }
        self.dead_hand_total += other.dead_hand_total;
        self.dead_hand_matches += other.dead_hand_matches;
        self.faults.extend(other.faults);
        self
    }
}

fn bucket_index(turns: u32) -> usize {
    TURN_BUCKETS
        .iter()
        .position(|&(_, bound)| turns <= bound)
        .unwrap_or(TURN_BUCKETS.len() - 1)
}

/// Aggregated result of one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub matches: u32,
    pub base_seed: u64,
    pub stats: BatchStats,
}

impl BatchReport {
    /// Whether any match faulted.
    #[must_use]
    pub fn has_faults(&self) -> bool {
        !self.stats.faults.is_empty()
    }
}

/// Run a batch to completion.
///
/// Errors only if a policy misbehaves, which the reference policy
/// never does.
pub fn run_batch(rules: &Arc<Ruleset>, config: &SimConfig) -> Result<BatchReport, PlayError> {
    let bar = if config.progress {
        ProgressBar::new(u64::from(config.matches)).with_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} matches ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        )
    } else {
        ProgressBar::hidden()
    };

    let base = GameRng::new(config.base_seed);
    let mut stats = if config.fail_fast {
        let mut stats = BatchStats::default();
        for index in 0..config.matches {
            let (seed, outcome) = run_one(rules, &base, config, index)?;
            stats.record(index, seed, &outcome);
            bar.inc(1);
            if !stats.faults.is_empty() {
                break;
            }
        }
        stats
    } else {
        (0..config.matches)
            .into_par_iter()
            .try_fold(BatchStats::default, |mut stats, index| {
                let (seed, outcome) = run_one(rules, &base, config, index)?;
                stats.record(index, seed, &outcome);
                bar.inc(1);
                Ok(stats)
            })
            .try_reduce(BatchStats::default, |a, b| Ok(a.merged(b)))?
    };
    bar.finish_and_clear();

    // Worker merge order is scheduling-dependent
    stats.faults.sort_by_key(|f| f.index);

    Ok(BatchReport {
        matches: config.matches,
        base_seed: config.base_seed,
        stats,
    })
}

fn run_one(
    rules: &Arc<Ruleset>,
    base: &GameRng,
    config: &SimConfig,
    index: u32,
) -> Result<(u64, MatchOutcome), PlayError> {
    let seed = base.fork(u64::from(index)).seed();
    let mut game = Match::with_ceiling(Arc::clone(rules), seed, config.ceiling);
    let outcome = game.run_to_completion(&FirstAffordable, &FirstAffordable)?;
    Ok((seed, outcome))
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = &self.stats;
        let completed = s.completed.max(1) as f64;
        let pct = |n: u64| n as f64 / completed * 100.0;

        writeln!(f, "=== Results ({} games) ===", self.matches)?;
        writeln!(
            f,
            "Player Wins : {}  ({:.1}%)",
            s.wins[Side::Player],
            pct(s.wins[Side::Player])
        )?;
        writeln!(
            f,
            "Enemy Wins  : {}  ({:.1}%)",
            s.wins[Side::Enemy],
            pct(s.wins[Side::Enemy])
        )?;

        writeln!(f, "\n--- Turn Length ---")?;
        writeln!(
            f,
            "Average turns per game : {:.1}",
            s.total_turns as f64 / completed
        )?;
        if s.completed > 0 {
            writeln!(f, "Shortest game          : {} turns", s.min_turns)?;
            writeln!(f, "Longest game           : {} turns", s.max_turns)?;
        }

        writeln!(f, "\n--- Turn Distribution ---")?;
        for ((label, _), count) in TURN_BUCKETS.iter().zip(s.histogram) {
            let bar = "█".repeat((count as f64 / completed * 40.0).round() as usize);
            writeln!(f, "  {label:<8} {count:>4} | {bar}")?;
        }

        writeln!(f, "\n--- Dead Hand Analysis ---")?;
        writeln!(f, "Total 'Dead Hand' occurrences : {}", s.dead_hand_total)?;
        writeln!(
            f,
            "Games with ≥1 Dead Hand       : {} / {} ({:.2}%)",
            s.dead_hand_matches,
            s.completed,
            pct(s.dead_hand_matches)
        )?;

        if !s.faults.is_empty() {
            writeln!(f, "\n--- Faults ---")?;
            for fault in &s.faults {
                writeln!(f, "  match {} (seed {}): {}", fault.index, fault.seed, fault.error)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_is_deterministic() {
        let rules = Arc::new(Ruleset::standard());
        let config = SimConfig {
            matches: 16,
            base_seed: 5,
            ..SimConfig::default()
        };

        let a = run_batch(&rules, &config).unwrap();
        let b = run_batch(&rules, &config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_every_match_reaches_a_verdict() {
        let rules = Arc::new(Ruleset::standard());
        let config = SimConfig {
            matches: 8,
            base_seed: 123,
            ..SimConfig::default()
        };

        let report = run_batch(&rules, &config).unwrap();
        assert_eq!(
            report.stats.completed + report.stats.faults.len() as u64,
            8
        );
    }

    #[test]
    fn test_faults_isolated_per_match() {
        let rules = Arc::new(Ruleset::standard());
        // A ceiling this low faults every match without poisoning the
        // batch.
        let config = SimConfig {
            matches: 4,
            base_seed: 0,
            ceiling: 2,
            ..SimConfig::default()
        };

        let report = run_batch(&rules, &config).unwrap();
        assert_eq!(report.stats.faults.len(), 4);
        assert_eq!(report.stats.completed, 0);
        assert!(report.has_faults());
        let indices: Vec<_> = report.stats.faults.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fail_fast_stops_early() {
        let rules = Arc::new(Ruleset::standard());
        let config = SimConfig {
            matches: 100,
            base_seed: 0,
            ceiling: 2,
            fail_fast: true,
            ..SimConfig::default()
        };

        let report = run_batch(&rules, &config).unwrap();
        assert_eq!(report.stats.faults.len(), 1);
    }

    #[test]
    fn test_fault_seed_is_the_forked_stream_seed() {
        let rules = Arc::new(Ruleset::standard());
        let config = SimConfig {
            matches: 3,
            base_seed: 17,
            ceiling: 2,
            ..SimConfig::default()
        };

        let report = run_batch(&rules, &config).unwrap();
        let base = GameRng::new(17);
        for fault in &report.stats.faults {
            assert_eq!(fault.seed, base.fork(u64::from(fault.index)).seed());
        }
    }

    #[test]
    fn test_dead_hand_fraction_uses_completed_denominator() {
        let mut stats = BatchStats::default();
        stats.completed = 4;
        stats.wins = SideMap::with_value(2);
        stats.total_turns = 40;
        stats.min_turns = 5;
        stats.max_turns = 15;
        stats.histogram[0] = 4;
        stats.dead_hand_total = 3;
        stats.dead_hand_matches = 2;
        stats.faults.push(MatchFault {
            index: 4,
            seed: 99,
            error: MatchError::Runaway { ceiling: 2 },
        });

        let text = BatchReport {
            matches: 5,
            base_seed: 0,
            stats,
        }
        .to_string();
        assert!(text.contains("2 / 4 (50.00%)"));
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_index(1), 0);
        assert_eq!(bucket_index(20), 0);
        assert_eq!(bucket_index(21), 1);
        assert_eq!(bucket_index(100), 4);
        assert_eq!(bucket_index(101), 5);
    }

    #[test]
    fn test_report_renders() {
        let rules = Arc::new(Ruleset::standard());
        let config = SimConfig {
            matches: 4,
            base_seed: 9,
            ..SimConfig::default()
        };

        let text = run_batch(&rules, &config).unwrap().to_string();
        assert!(text.contains("=== Results (4 games) ==="));
        assert!(text.contains("Dead Hand"));
    }
}
