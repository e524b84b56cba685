pub type Delegate<T, E> = Box<dyn FnMut(&mut T, &E) -> bool>;

/// Ordered delegate list for one event kind.
///
/// Delegates fire in reverse registration order: the most recently added
/// one runs first. Every delegate runs; the return values are OR-ed into
/// the result of [`Observable::notify`].
pub struct Observable<T: ?Sized, E> {
    delegates: Vec<Delegate<T, E>>,
    // set by `clear`, consumed by `restore`
    cleared: bool,
}

impl<T: ?Sized, E> Default for Observable<T, E> {
    fn default() -> Self {
        Self { delegates: Vec::new(), cleared: false }
    }
}

impl<T: ?Sized, E> Observable<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, delegate: impl FnMut(&mut T, &E) -> bool + 'static) {
        self.delegates.push(Box::new(delegate));
    }

    pub fn clear(&mut self) {
        self.delegates.clear();
        self.cleared = true;
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    pub fn notify(&mut self, target: &mut T, event: &E) -> bool {
        let mut handled = false;
        for delegate in self.delegates.iter_mut().rev() {
            handled |= delegate(target, event);
        }
        handled
    }

    /// Puts a list that was taken out for a run back into this (temporary)
    /// slot. Delegates added to the slot during the run follow the running
    /// ones. If the slot was cleared during the run, the running list is
    /// dropped and only what was added after the clear is kept.
    pub(crate) fn restore(&mut self, mut running: Observable<T, E>) {
        if self.cleared {
            self.cleared = false;
            return;
        }
        running.delegates.append(&mut self.delegates);
        running.cleared = false;
        *self = running;
    }

    /// Appends `other`'s delegates after ours, keeping their relative order.
    pub fn append(&mut self, mut other: Observable<T, E>) {
        self.delegates.append(&mut other.delegates);
    }
}

impl<T: ?Sized, E> std::fmt::Debug for Observable<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable").field("delegates", &self.delegates.len()).finish()
    }
}
