use std::{
    collections::BTreeSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, PoisonError,
    },
};

use log::{debug, info};
use wordgrid_core::Symbol;

use crate::{ScanResult, WordScanner};

/// Result of one [`LiveSession::try_scan`] tick.
#[derive(Clone, Debug)]
pub enum TickOutcome {
    /// A previous scan was still running; this frame was dropped.
    Skipped,
    Completed {
        result: ScanResult,
        /// Valid words not reported by any earlier tick since the last reset.
        new_words: Vec<String>,
    },
}

impl TickOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Wraps a [`WordScanner`] for callers that scan on a fixed cadence.
///
/// At most one scan runs at a time: a tick that arrives while another is in
/// flight is skipped instead of queued.
#[derive(Debug)]
pub struct LiveSession {
    scanner: WordScanner,
    in_flight: AtomicBool,
    seen: Mutex<BTreeSet<String>>,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl LiveSession {
    pub fn new(scanner: WordScanner) -> Self {
        Self {
            scanner,
            in_flight: AtomicBool::new(false),
            seen: Mutex::new(BTreeSet::new()),
        }
    }

    #[inline]
    pub fn scanner(&self) -> &WordScanner {
        &self.scanner
    }

    /// `true` while a scan is running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Scan one frame unless a previous scan is still running.
    pub fn try_scan(&self, symbols: &[Symbol]) -> TickOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("live session: scan in flight, skipping tick");
            return TickOutcome::Skipped;
        };

        let result = self.scanner.scan(symbols);
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        let new_words: Vec<String> = result
            .sheet
            .words
            .iter()
            .filter(|w| seen.insert(w.text.to_lowercase()))
            .map(|w| w.text.clone())
            .collect();
        if !new_words.is_empty() {
            info!("live session: new words {:?}", new_words);
        }
        TickOutcome::Completed { result, new_words }
    }

    /// Every word reported since the last reset, lowercased and sorted.
    pub fn seen_words(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Forget the words seen so far.
    pub fn reset(&self) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wordgrid_core::BBox;
    use wordgrid_words::Dictionary;

    fn row(text: &str, y: f32) -> Vec<Symbol> {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let x = i as f32 * 30.0;
                Symbol::new(c.to_string(), BBox::new(x, y, x + 20.0, y + 24.0), 90.0)
            })
            .collect()
    }

    fn session() -> LiveSession {
        let dict = Dictionary::from_words(["cat", "go"]);
        LiveSession::new(WordScanner::with_defaults(Arc::new(dict)))
    }

    #[test]
    fn reports_each_word_once() {
        let session = session();
        match session.try_scan(&row("CAT", 0.0)) {
            TickOutcome::Completed { new_words, result } => {
                assert_eq!(new_words, vec!["CAT".to_string()]);
                assert_eq!(result.sheet.total, 5);
            }
            TickOutcome::Skipped => panic!("idle session skipped a tick"),
        }
        match session.try_scan(&row("CAT", 0.0)) {
            TickOutcome::Completed { new_words, .. } => assert!(new_words.is_empty()),
            TickOutcome::Skipped => panic!("idle session skipped a tick"),
        }
        match session.try_scan(&row("GO", 0.0)) {
            TickOutcome::Completed { new_words, .. } => {
                assert_eq!(new_words, vec!["GO".to_string()])
            }
            TickOutcome::Skipped => panic!("idle session skipped a tick"),
        }
        assert_eq!(session.seen_words(), vec!["cat".to_string(), "go".to_string()]);
        assert!(!session.is_busy());
    }

    #[test]
    fn busy_session_skips() {
        let session = session();
        session.in_flight.store(true, Ordering::Release);
        assert!(session.is_busy());
        assert!(session.try_scan(&row("CAT", 0.0)).is_skipped());
        assert!(session.seen_words().is_empty());

        session.in_flight.store(false, Ordering::Release);
        assert!(!session.try_scan(&row("CAT", 0.0)).is_skipped());
    }

    #[test]
    fn reset_forgets_seen_words() {
        let session = session();
        session.try_scan(&row("CAT", 0.0));
        session.reset();
        assert!(session.seen_words().is_empty());
        match session.try_scan(&row("CAT", 0.0)) {
            TickOutcome::Completed { new_words, .. } => assert_eq!(new_words.len(), 1),
            TickOutcome::Skipped => panic!("idle session skipped a tick"),
        }
    }
}
