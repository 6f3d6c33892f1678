//! Geometry-change observers.

use std::fmt;

/// Callback fired when the overlay geometry changes through direct
/// manipulation. It carries no payload; read the new values back through
/// the preview's getters.
pub type GeometryCallback = Box<dyn FnMut()>;

/// Handle returned by [`GeometryObservers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of geometry-change callbacks, invoked synchronously.
#[derive(Default)]
pub struct GeometryObservers {
    next_id: u64,
    observers: Vec<(ObserverId, GeometryCallback)>,
}

impl GeometryObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Invoke every callback once.
    pub fn emit(&mut self) {
        for (_, callback) in &mut self.observers {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for GeometryObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryObservers")
            .field("count", &self.observers.len())
            .finish()
    }
}
