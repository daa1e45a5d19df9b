//! "Observe once, then stop" bookkeeping.
//!
//! The web frontend feeds visibility notifications into a [`OnceWatcher`];
//! a key fires at most once and is deregistered as it fires.

#[derive(Clone, Debug)]
pub struct OnceWatcher<K> {
    pending: Vec<K>,
}

impl<K> Default for OnceWatcher<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq> OnceWatcher<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering a key that is already pending is a no-op.
    pub fn register(&mut self, key: K) {
        if !self.pending.contains(&key) {
            self.pending.push(key);
        }
    }

    /// Report a visibility change. Returns the key back if this is its first
    /// visible notification; the key is no longer watched afterwards.
    pub fn notify(&mut self, key: &K, visible: bool) -> Option<K> {
        if !visible {
            return None;
        }
        let pos = self.pending.iter().position(|k| k == key)?;
        Some(self.pending.swap_remove(pos))
    }

    #[inline]
    pub fn is_watching(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
