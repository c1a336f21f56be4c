// crates/reactor-core/src/cache.rs
//
// MediaCache: video path → decoded first frame.
//
// warm() is the only place decoding happens. It runs once per batch of newly
// selected video targets, never per navigation step; get() is a pure lookup.
// A failed decode stores CacheEntry::Failed so later lookups and overlapping
// warms do not hit the decoder again. Re-selecting a file through the dialog
// goes through warm_fresh(), which clears that file's sentinel first.
//
// Entries live for the process lifetime. The selection is bounded by what the
// user picks in a dialog, so there is no eviction.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::media_types::{MediaDecoder, PreviewImage};

#[derive(Clone, Debug, PartialEq)]
pub enum CacheEntry {
    Decoded(Arc<PreviewImage>),
    /// Decode was attempted and failed.
    Failed,
}

/// Outcome counts of one warm() call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarmReport {
    pub decoded: usize,
    pub failed:  usize,
    /// Already present (decoded or sentinel) or duplicated within the batch.
    pub skipped: usize,
}

#[derive(Default)]
pub struct MediaCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl MediaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the first frame of every path not already present.
    ///
    /// Missing paths are decoded in parallel on the rayon pool; the call
    /// returns only after every path has an entry, so no caller can observe a
    /// half-warmed batch. A failure affects only its own entry.
    pub fn warm<P, D>(&mut self, paths: &[P], decoder: &D) -> WarmReport
    where
        P: AsRef<Path>,
        D: MediaDecoder + ?Sized,
    {
        let mut report = WarmReport::default();
        let mut seen: HashSet<&Path> = HashSet::new();
        let mut missing: Vec<&Path> = Vec::new();
        for p in paths {
            let p = p.as_ref();
            if self.entries.contains_key(p) || !seen.insert(p) {
                report.skipped += 1;
            } else {
                missing.push(p);
            }
        }

        let decoded: Vec<(PathBuf, CacheEntry)> = missing
            .par_iter()
            .map(|&p| {
                let entry = match decoder.decode_first_frame(p) {
                    Ok(img) => {
                        eprintln!("[cache] warmed {}x{} ← {}", img.width, img.height, p.display());
                        CacheEntry::Decoded(Arc::new(img))
                    }
                    Err(e) => {
                        eprintln!("[cache] {e}");
                        CacheEntry::Failed
                    }
                };
                (p.to_path_buf(), entry)
            })
            .collect();

        for (path, entry) in decoded {
            match entry {
                CacheEntry::Decoded(_) => report.decoded += 1,
                CacheEntry::Failed     => report.failed  += 1,
            }
            self.entries.insert(path, entry);
        }
        report
    }

    /// Like `warm`, but first drops failure sentinels for `paths` so files the
    /// user picked again get one more decode attempt. Successful entries stay.
    pub fn warm_fresh<P, D>(&mut self, paths: &[P], decoder: &D) -> WarmReport
    where
        P: AsRef<Path>,
        D: MediaDecoder + ?Sized,
    {
        for p in paths {
            if matches!(self.entries.get(p.as_ref()), Some(CacheEntry::Failed)) {
                self.entries.remove(p.as_ref());
            }
        }
        self.warm(paths, decoder)
    }

    /// Cached frame for `path`. `None` if never warmed or the decode failed.
    pub fn get(&self, path: &Path) -> Option<Arc<PreviewImage>> {
        match self.entries.get(path)? {
            CacheEntry::Decoded(img) => Some(Arc::clone(img)),
            CacheEntry::Failed       => None,
        }
    }

    /// Raw entry, to tell "never attempted" (`None`) from the failure sentinel.
    pub fn entry(&self, path: &Path) -> Option<&CacheEntry> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Approximate bytes of decoded pixel data held.
    pub fn byte_size(&self) -> usize {
        self.entries.values()
            .map(|e| match e {
                CacheEntry::Decoded(img) => img.byte_len(),
                CacheEntry::Failed       => 0,
            })
            .sum()
    }
}

/// A MediaCache that can be handed to more than one thread.
///
/// warm and get take the same lock, so a get issued while a warm is in flight
/// waits for the whole batch.
#[derive(Clone, Default)]
pub struct SharedMediaCache {
    inner: Arc<Mutex<MediaCache>>,
}

impl SharedMediaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warm<P, D>(&self, paths: &[P], decoder: &D) -> WarmReport
    where
        P: AsRef<Path>,
        D: MediaDecoder + ?Sized,
    {
        self.inner.lock().warm(paths, decoder)
    }

    pub fn warm_fresh<P, D>(&self, paths: &[P], decoder: &D) -> WarmReport
    where
        P: AsRef<Path>,
        D: MediaDecoder + ?Sized,
    {
        self.inner.lock().warm_fresh(paths, decoder)
    }

    pub fn get(&self, path: &Path) -> Option<Arc<PreviewImage>> {
        self.inner.lock().get(path)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Decodes any path except those containing "bad"; counts every call.
    #[derive(Default)]
    struct CountingDecoder {
        calls: AtomicUsize,
    }

    impl CountingDecoder {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MediaDecoder for CountingDecoder {
        fn decode_image(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
            self.decode_first_frame(path)
        }

        fn decode_first_frame(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if path.to_string_lossy().contains("bad") {
                return Err(DecodeError::NoFrame { path: path.to_path_buf() });
            }
            Ok(PreviewImage::from_rgba(1, 1, vec![0, 0, 0, 255]).unwrap())
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn get_before_warm_is_none() {
        let cache = MediaCache::new();
        assert!(cache.get(Path::new("/v/a.mp4")).is_none());
        assert!(cache.entry(Path::new("/v/a.mp4")).is_none());
    }

    #[test]
    fn overlapping_warms_decode_each_path_once() {
        let dec = CountingDecoder::default();
        let mut cache = MediaCache::new();

        let first = cache.warm(&paths(&["/v/a.mp4", "/v/b.mp4"]), &dec);
        assert_eq!(first, WarmReport { decoded: 2, failed: 0, skipped: 0 });

        let second = cache.warm(&paths(&["/v/b.mp4", "/v/c.mp4", "/v/c.mp4"]), &dec);
        assert_eq!(second, WarmReport { decoded: 1, failed: 0, skipped: 2 });

        assert_eq!(dec.calls(), 3);
        assert_eq!(cache.len(), 3);
        assert!(cache.get(Path::new("/v/c.mp4")).is_some());
    }

    #[test]
    fn failure_is_a_sentinel_and_batch_continues() {
        let dec = CountingDecoder::default();
        let mut cache = MediaCache::new();
        let report = cache.warm(&paths(&["/v/bad.mp4", "/v/ok.mp4"]), &dec);
        assert_eq!(report.failed, 1);
        assert_eq!(report.decoded, 1);

        let bad = Path::new("/v/bad.mp4");
        assert!(cache.get(bad).is_none());
        assert_eq!(cache.entry(bad), Some(&CacheEntry::Failed));

        // A plain warm does not retry the sentinel.
        cache.warm(&paths(&["/v/bad.mp4"]), &dec);
        assert_eq!(dec.calls(), 2);
    }

    #[test]
    fn warm_fresh_retries_only_failures() {
        let dec = CountingDecoder::default();
        let mut cache = MediaCache::new();
        cache.warm(&paths(&["/v/bad.mp4", "/v/ok.mp4"]), &dec);
        let report = cache.warm_fresh(&paths(&["/v/bad.mp4", "/v/ok.mp4"]), &dec);
        assert_eq!(report, WarmReport { decoded: 0, failed: 1, skipped: 1 });
        assert_eq!(dec.calls(), 3);
    }

    #[test]
    fn byte_size_counts_decoded_only() {
        let dec = CountingDecoder::default();
        let mut cache = MediaCache::new();
        cache.warm(&paths(&["/v/a.mp4", "/v/bad.mkv"]), &dec);
        assert_eq!(cache.byte_size(), 4);
    }

    #[test]
    fn shared_cache_serializes_across_threads() {
        let dec = Arc::new(CountingDecoder::default());
        let cache = SharedMediaCache::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                let dec   = Arc::clone(&dec);
                std::thread::spawn(move || {
                    cache.warm(&paths(&["/v/a.mp4", "/v/b.mp4"]), dec.as_ref());
                    cache.get(Path::new("/v/a.mp4")).is_some()
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
        assert_eq!(dec.calls(), 2);
        assert_eq!(cache.len(), 2);
    }
}
