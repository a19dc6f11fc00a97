//! Explicit state containers.
//!
//! Updates are requested, queued, and only become visible once the owner
//! commits them. A render host commits right before a render pass, so a
//! render always observes every update requested before it, in order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Update<T> = Box<dyn FnOnce(&mut T)>;

/// Subscription handle returned by [`StateCell::subscribe`].
pub type SubId = usize;

struct Inner<T> {
    value: T,
    queue: VecDeque<Update<T>>,
    subs: Vec<Rc<dyn Fn()>>,
    version: u64,
}

/// Cloneable handle to a piece of state with a queue of pending updates.
pub struct StateCell<T: 'static>(Rc<RefCell<Inner<T>>>);

impl<T: 'static> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            queue: VecDeque::new(),
            subs: Vec::new(),
            version: 0,
        })))
    }

    /// Committed value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Read the committed value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }

    /// Queue an update and notify subscribers.
    pub fn request(&self, update: impl FnOnce(&mut T) + 'static) {
        let subs = {
            let mut inner = self.0.borrow_mut();
            inner.queue.push_back(Box::new(update));
            inner.subs.clone()
        };
        for sub in subs {
            sub();
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.0.borrow().queue.is_empty()
    }

    /// Number of queued updates.
    pub fn pending(&self) -> usize {
        self.0.borrow().queue.len()
    }

    /// Apply every queued update in request order.
    ///
    /// Returns `true` if anything was applied.
    pub fn commit(&self) -> bool {
        let mut inner = self.0.borrow_mut();
        let queue = std::mem::take(&mut inner.queue);
        let applied = queue.len() as u64;
        for update in queue {
            update(&mut inner.value);
        }
        inner.version += applied;
        applied > 0
    }

    /// Number of updates committed so far.
    pub fn version(&self) -> u64 {
        self.0.borrow().version
    }

    /// Register a callback run after every update request.
    pub fn subscribe(&self, f: impl Fn() + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Rc::new(f));
        inner.subs.len() - 1
    }
}

impl<T: 'static> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("StateCell")
            .field("value", &inner.value)
            .field("pending", &inner.queue.len())
            .field("version", &inner.version)
            .finish()
    }
}

/// Non-negative counter that only moves up by one.
///
/// The only write path is [`Counter::increment`].
#[derive(Clone, Debug)]
pub struct Counter {
    cell: StateCell<u64>,
}

impl Counter {
    /// New counter at zero.
    pub fn new() -> Self {
        Self {
            cell: StateCell::new(0),
        }
    }

    /// Committed count.
    pub fn get(&self) -> u64 {
        self.cell.get()
    }

    /// Request `count + 1`. Visible after the next commit.
    pub fn increment(&self) {
        self.cell.request(|count| *count = count.saturating_add(1));
    }

    pub fn has_pending(&self) -> bool {
        self.cell.has_pending()
    }

    pub fn commit(&self) -> bool {
        self.cell.commit()
    }

    pub fn subscribe(&self, f: impl Fn() + 'static) -> SubId {
        self.cell.subscribe(f)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    // === StateCell Tests ===

    #[test]
    fn test_request_is_deferred() {
        let cell = StateCell::new(10);
        cell.request(|v| *v += 5);

        assert_eq!(cell.get(), 10);
        assert!(cell.has_pending());
        assert_eq!(cell.pending(), 1);

        assert!(cell.commit());
        assert_eq!(cell.get(), 15);
        assert!(!cell.has_pending());
    }

    #[test]
    fn test_commit_applies_in_request_order() {
        let cell = StateCell::new(String::new());
        cell.request(|s| s.push('a'));
        cell.request(|s| s.push('b'));
        cell.request(|s| s.push('c'));

        cell.commit();
        assert_eq!(cell.get(), "abc");
        assert_eq!(cell.version(), 3);
    }

    #[test]
    fn test_commit_without_pending() {
        let cell = StateCell::new(1);
        assert!(!cell.commit());
        assert_eq!(cell.version(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let cell = StateCell::new(vec![1]);
        let handle = cell.clone();
        handle.request(|v| v.push(2));
        cell.commit();

        assert_eq!(handle.with(|v| v.len()), 2);
    }

    #[test]
    fn test_subscribers_notified_on_request() {
        let cell = StateCell::new(0);
        let calls = Rc::new(Cell::new(0));

        let calls_clone = calls.clone();
        let reader = cell.clone();
        let id = cell.subscribe(move || {
            calls_clone.set(calls_clone.get() + 1);
            // Reading inside a subscriber must not conflict with the request.
            let _ = reader.get();
        });

        cell.request(|v| *v += 1);
        cell.request(|v| *v += 1);

        assert_eq!(id, 0);
        assert_eq!(calls.get(), 2);
    }

    // === Counter Tests ===

    #[test]
    fn test_counter_starts_at_zero() {
        let counter = Counter::new();
        assert_eq!(counter.get(), 0);
        assert!(!counter.has_pending());
    }

    #[test]
    fn test_counter_increment_sequence() {
        let counter = Counter::default();
        for n in 1..=25u64 {
            counter.increment();
            counter.commit();
            assert_eq!(counter.get(), n);
        }
    }

    #[test]
    fn test_counter_batched_increments() {
        let counter = Counter::new();
        counter.increment();
        counter.increment();
        counter.increment();

        assert_eq!(counter.get(), 0);
        counter.commit();
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_counter_subscriber_sees_each_increment() {
        let counter = Counter::new();
        let requests = Rc::new(Cell::new(0));

        let seen = requests.clone();
        let pending = counter.clone();
        counter.subscribe(move || {
            seen.set(seen.get() + 1);
            assert!(pending.has_pending());
        });

        counter.increment();
        counter.increment();
        assert_eq!(requests.get(), 2);

        counter.commit();
        assert_eq!(requests.get(), 2);
        assert_eq!(counter.get(), 2);
    }
}
