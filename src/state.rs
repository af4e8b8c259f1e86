use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::models::{ActivityResult, RESULT_CANCELED};
use crate::outcome::ShareCallback;

/// The one in-flight result-code share.
///
/// Activity results are correlated by a fixed request code, so only one such
/// share can be outstanding. Launching another before the first resolves
/// replaces it: the last launched share receives the next result.
pub struct PendingSlot {
    slot: Mutex<Option<ShareCallback>>,
}

impl PendingSlot {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Stores `callback`, returning the share it displaced, if any.
    pub fn occupy(&self, callback: ShareCallback) -> Option<ShareCallback> {
        self.lock().replace(callback)
    }

    pub fn take(&self) -> Option<ShareCallback> {
        self.lock().take()
    }

    #[cfg(test)]
    pub fn is_occupied(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<ShareCallback>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("social-share: pending slot mutex was poisoned");
                poisoned.into_inner()
            }
        }
    }
}

impl Default for PendingSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that may consume "activity finished" events.
pub trait ActivityResultListener: Send + Sync {
    /// Returns `true` when the result belonged to this listener.
    fn on_activity_result(&self, result: ActivityResult) -> bool;
}

/// Listeners for the host's generic "activity finished" event.
pub struct ActivityResultRegistry {
    listeners: Mutex<Vec<Weak<dyn ActivityResultListener>>>,
}

impl ActivityResultRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn add_listener(&self, listener: &Arc<dyn ActivityResultListener>) {
        self.lock().push(Arc::downgrade(listener));
    }

    /// Offers `result` to each live listener in registration order, stopping
    /// at the first that handles it.
    pub fn dispatch(&self, result: ActivityResult) -> bool {
        let listeners: Vec<Arc<dyn ActivityResultListener>> = {
            let mut listeners = self.lock();
            listeners.retain(|l| l.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        let handled = listeners.iter().any(|l| l.on_activity_result(result));
        if !handled {
            log::debug!(
                "social-share: activity result for request code {} left unhandled",
                result.request_code
            );
        }
        handled
    }

    /// Reports a launch that was accepted but never came back with a result.
    ///
    /// Listeners see it as a cancelled activity for `request_code`, so
    /// whoever is waiting on that code still gets an answer.
    pub fn launch_failed(&self, request_code: i32) -> bool {
        self.dispatch(ActivityResult {
            request_code,
            result_code: RESULT_CANCELED,
        })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().iter().filter(|l| l.strong_count() > 0).count()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Weak<dyn ActivityResultListener>>> {
        match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for ActivityResultRegistry {
    fn default() -> Self {
        Self::new()
    }
}
