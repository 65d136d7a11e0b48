//! Batch stamping types and utilities for static render pipelines.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use fmsync_core::MetadataMap;
use rayon::prelude::*;

use crate::stamp::stamp_str;

/// Input for batch stamping - a single rendered document.
#[derive(Debug, Clone)]
pub struct StampJob {
    /// Document identifier (typically the source path).
    pub id: String,
    /// Rendered HTML to stamp.
    pub html: String,
    /// Metadata snapshot to project onto the container.
    pub metadata: MetadataMap,
}

/// Result for a single document in a batch.
#[derive(Debug, Clone)]
pub struct StampOutcome {
    /// Document identifier matching the input.
    pub id: String,
    /// Stamped HTML (present on success).
    pub html: Option<String>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch stamping.
#[derive(Debug, Clone)]
pub struct StampStats {
    /// Total number of documents processed.
    pub total: u32,
    /// Number of successfully stamped documents.
    pub succeeded: u32,
    /// Number of failed documents.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch stamping.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to the number of CPU
    /// cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
}

/// Result of batch stamping containing all outcomes and statistics.
#[derive(Debug, Clone)]
pub struct StampReport {
    /// Individual outcomes for each input document.
    pub outcomes: Vec<StampOutcome>,
    /// Processing statistics.
    pub stats: StampStats,
}

/// Stamps a batch of rendered documents in parallel.
///
/// Every job addresses its container with the same `selector`. With
/// `continue_on_error` (the default) all jobs run and failures are captured
/// per outcome; without it, processing is sequential and stops after the
/// first failure.
pub fn stamp_batch(
    jobs: Vec<StampJob>,
    selector: &str,
    options: Option<BatchOptions>,
) -> StampReport {
    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = jobs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_job = |job: StampJob| -> StampOutcome {
        match stamp_str(&job.html, selector, &job.metadata) {
            Ok(html) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                StampOutcome {
                    id: job.id,
                    html: Some(html),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                StampOutcome {
                    id: job.id,
                    html: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let outcomes: Vec<StampOutcome> = if continue_on_error {
        // Process all documents regardless of errors
        if let Some(pool) = pool {
            pool.install(|| jobs.into_par_iter().map(process_job).collect())
        } else {
            jobs.into_par_iter().map(process_job).collect()
        }
    } else {
        // Stop on first error - sequential processing required
        let mut outcomes = Vec::with_capacity(jobs.len());
        let mut had_error = false;

        for job in jobs {
            if had_error {
                break;
            }
            let outcome = process_job(job);
            if outcome.error.is_some() {
                had_error = true;
            }
            outcomes.push(outcome);
        }
        outcomes
    };

    let stats = StampStats {
        total,
        succeeded: succeeded.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    log::debug!(
        "stamped batch: {} ok, {} failed of {}",
        stats.succeeded,
        stats.failed,
        stats.total
    );

    StampReport { outcomes, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(id: &str, title: &str) -> StampJob {
        StampJob {
            id: id.to_owned(),
            html: r#"<article class="doc"></article>"#.to_owned(),
            metadata: json!({"title": title})
                .as_object()
                .expect("object fixture")
                .clone(),
        }
    }

    #[test]
    fn stamps_every_job_and_counts() {
        let report = stamp_batch(vec![job("a.md", "A"), job("b.md", "B")], "article.doc", None);
        assert_eq!(report.stats.total, 2);
        assert_eq!(report.stats.succeeded, 2);
        assert_eq!(report.stats.failed, 0);
        let stamped_a = report.outcomes[0].html.as_deref().expect("a stamped");
        assert!(stamped_a.contains(r#"data-title="A""#));
        assert_eq!(report.outcomes[1].id, "b.md");
    }

    #[test]
    fn bad_selector_is_captured_per_outcome() {
        let report = stamp_batch(vec![job("a.md", "A"), job("b.md", "B")], "article[", None);
        assert_eq!(report.stats.failed, 2);
        assert!(report.outcomes.iter().all(|outcome| {
            outcome.html.is_none() && outcome.error.as_deref().is_some_and(|e| !e.is_empty())
        }));
    }

    #[test]
    fn stop_on_first_error_skips_the_rest() {
        let options = BatchOptions {
            continue_on_error: Some(false),
            ..BatchOptions::default()
        };
        let jobs = vec![job("a.md", "A"), job("b.md", "B"), job("c.md", "C")];
        let report = stamp_batch(jobs, "article[", Some(options));
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.stats.failed, 1);
        assert_eq!(report.stats.total, 3);
    }

    #[test]
    fn thread_cap_is_honored() {
        let options = BatchOptions {
            max_threads: Some(1),
            ..BatchOptions::default()
        };
        let jobs = vec![job("a.md", "A"), job("b.md", "B"), job("c.md", "C")];
        let report = stamp_batch(jobs, "article.doc", Some(options));
        assert_eq!(report.stats.succeeded, 3);
    }
}
