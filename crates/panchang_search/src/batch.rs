//! Parallel evaluation of many queries.

use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use log::debug;

use crate::cache::PanchangCache;
use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::report::{PanchangQuery, PanchangReport, panchang_report};

fn worker_count(requested: usize, jobs: usize) -> usize {
    let wanted = if requested == 0 {
        thread::available_parallelism().map_or(1, NonZeroUsize::get)
    } else {
        requested
    };
    wanted.clamp(1, jobs.max(1))
}

fn run<F>(queries: &[PanchangQuery], threads: usize, eval: F) -> Vec<Result<PanchangReport, SearchError>>
where
    F: Fn(&PanchangQuery) -> Result<PanchangReport, SearchError> + Sync,
{
    let workers = worker_count(threads, queries.len());
    if workers == 1 {
        return queries.iter().map(&eval).collect();
    }
    let chunk = queries.len().div_ceil(workers);
    debug!("batch of {} queries on {workers} threads", queries.len());

    let eval = &eval;
    thread::scope(|s| {
        let handles: Vec<_> = queries
            .chunks(chunk)
            .map(|part| s.spawn(move || part.iter().map(eval).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

/// Evaluate `queries` on up to `threads` scoped workers (0 = one per core).
///
/// Results come back in input order; one failing query does not affect the
/// others.
pub fn panchang_batch(
    queries: &[PanchangQuery],
    config: &PanchangConfig,
    threads: usize,
) -> Vec<Result<PanchangReport, SearchError>> {
    run(queries, threads, |q| panchang_report(q, config))
}

/// As [`panchang_batch`], sharing a report cache across workers.
pub fn panchang_batch_cached(
    queries: &[PanchangQuery],
    cache: &PanchangCache,
    threads: usize,
) -> Vec<Result<PanchangReport, SearchError>> {
    run(queries, threads, |q| cache.report(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_count_bounds() {
        assert_eq!(worker_count(4, 2), 2);
        assert_eq!(worker_count(3, 10), 3);
        assert_eq!(worker_count(8, 0), 1);
        assert!(worker_count(0, 100) >= 1);
    }

    #[test]
    fn empty_batch() {
        assert!(panchang_batch(&[], &PanchangConfig::default(), 4).is_empty());
    }
}
