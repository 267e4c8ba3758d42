/// Manager-owned storage for homogeneous transient entities (bullets,
/// enemies, explosions). A flat Vec in insertion order; sized for hundreds of
/// live entities, not millions.
///
/// Removal goes through [`Pool::retain`], a stable compaction pass, so
/// survivors are never skipped or visited twice and keep their relative order.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a pool with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity to the end of the pool.
    pub fn spawn(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Keep only the entities for which `keep` returns true.
    /// Returns the number of entities removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&mut T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain_mut(|item| keep(item));
        before - self.items.len()
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
