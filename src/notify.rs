use std::fmt;

/// Handle returned by `subscribe`, used to unsubscribe later
pub type SubscriptionId = u64;

type Callback = Box<dyn FnMut()>;

/// Registry of change observers
///
/// The catalog fires a single parameterless signal after every successful
/// mutation; observers re-fetch via `get_all`. There is no diff payload.
pub struct ChangeNotifier {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: SubscriptionId,
}

impl ChangeNotifier {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 1,
        }
    }

    /// Register an observer; returns a handle for unsubscribing
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer; returns false if the handle was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Fire the change signal to every observer, in subscription order
    pub(crate) fn notify(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback();
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_and_notify() {
        let mut notifier = ChangeNotifier::new();
        let count = Rc::new(Cell::new(0));

        let observed = Rc::clone(&count);
        notifier.subscribe(move || observed.set(observed.get() + 1));

        notifier.notify();
        notifier.notify();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_multiple_subscribers_all_fire() {
        let mut notifier = ChangeNotifier::new();
        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let observed = Rc::clone(&count);
            notifier.subscribe(move || observed.set(observed.get() + 1));
        }

        notifier.notify();
        assert_eq!(count.get(), 3);
        assert_eq!(notifier.subscriber_count(), 3);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut notifier = ChangeNotifier::new();
        let count = Rc::new(Cell::new(0));

        let observed = Rc::clone(&count);
        let id = notifier.subscribe(move || observed.set(observed.get() + 1));

        notifier.notify();
        assert!(notifier.unsubscribe(id));
        notifier.notify();

        assert_eq!(count.get(), 1);
        assert!(!notifier.unsubscribe(id));
    }
}
