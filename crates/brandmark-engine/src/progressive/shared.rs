use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError},
    time::Instant,
};

use crate::model::Block;

use super::{
    scheduler::{RenderSession, SessionError, TickOutcome},
    sink::RenderSink,
};

/// A [`RenderSession`] shared between a token producer and a ticking driver.
///
/// Pushes, `finish` and `abort` wait for the lock. Ticks never wait: a tick
/// that finds a render in progress is dropped rather than queued.
pub struct SharedSession<S: RenderSink> {
    inner: Arc<Mutex<RenderSession<S>>>,
}

impl<S: RenderSink> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RenderSink> SharedSession<S> {
    pub fn new(session: RenderSession<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn push(&self, token: &str) -> Result<(), SessionError> {
        self.lock().push(token)
    }

    pub fn try_tick(&self, now: Instant) -> Result<TickOutcome, SessionError> {
        match self.inner.try_lock() {
            Ok(mut session) => session.tick(now),
            Err(TryLockError::WouldBlock) => Ok(TickOutcome::Dropped),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().tick(now),
        }
    }

    pub fn finish(&self) -> Result<Vec<Block>, SessionError> {
        self.lock().finish()
    }

    pub fn abort(&self, reason: &str) {
        self.lock().abort(reason);
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_open()
    }

    /// Runs `f` with the session locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut RenderSession<S>) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, RenderSession<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
