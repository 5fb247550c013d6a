// ============================================================================
// Batch Rewriter
// Rewrites a buffer of captions across scoped worker threads
// ============================================================================

use super::rewriter::PriceRewriter;
use crate::domain::{CaptionId, Rewrite};
use std::borrow::Cow;

/// Rewrites many captions at once, preserving input order.
///
/// The buffer is cut into one contiguous chunk per worker; each worker
/// borrows the shared rewriter, so no state is copied.
pub struct BatchRewriter<'r> {
    rewriter: &'r PriceRewriter,
    workers: usize,
}

impl<'r> BatchRewriter<'r> {
    /// One worker per available CPU
    pub fn new(rewriter: &'r PriceRewriter) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::with_workers(rewriter, workers)
    }

    pub fn with_workers(rewriter: &'r PriceRewriter, workers: usize) -> Self {
        Self {
            rewriter,
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Rewritten text for every caption, in input order.
    ///
    /// If a worker panics its whole batch is returned unchanged.
    pub fn rewrite_all<S>(&self, captions: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let rewriter = self.rewriter;
        self.map_chunks(captions, |caption| {
            rewriter.replace_prices(caption).into_owned()
        })
        .unwrap_or_else(|| captions.iter().map(|c| c.as_ref().to_string()).collect())
    }

    /// Full rewrite results, in input order.
    pub fn rewrite_detailed<'a, S>(&self, captions: &'a [S]) -> Vec<Rewrite<'a>>
    where
        S: AsRef<str> + Sync,
    {
        let rewriter = self.rewriter;
        self.map_chunks(captions, |caption| rewriter.rewrite(caption))
            .unwrap_or_else(|| {
                captions
                    .iter()
                    .map(|c| Rewrite {
                        caption_id: CaptionId::new(),
                        text: Cow::Borrowed(c.as_ref()),
                        quotes: Vec::new(),
                    })
                    .collect()
            })
    }

    /// Apply `f` to every caption on the worker pool. `None` if any worker
    /// panicked.
    fn map_chunks<'a, S, T, F>(&self, captions: &'a [S], f: F) -> Option<Vec<T>>
    where
        S: AsRef<str> + Sync,
        T: Send,
        F: Fn(&'a str) -> T + Sync,
    {
        if captions.is_empty() {
            return Some(Vec::new());
        }

        // Not worth a thread for a single chunk
        let chunk_size = captions.len().div_ceil(self.workers);
        if chunk_size >= captions.len() {
            return Some(captions.iter().map(|c| f(c.as_ref())).collect());
        }

        let f = &f;
        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = captions
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| chunk.iter().map(|c| f(c.as_ref())).collect::<Vec<T>>())
                })
                .collect();

            let mut results = Vec::with_capacity(captions.len());
            for handle in handles {
                match handle.join() {
                    Ok(chunk) => results.extend(chunk),
                    Err(_) => {
                        tracing::error!("Batch worker panicked; returning captions unchanged");
                        return None;
                    },
                }
            }
            Some(results)
        });

        joined.ok().flatten()
    }
}
