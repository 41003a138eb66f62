use crate::widget::WidgetId;
use std::collections::HashSet;

/// Largest stored sequence number the counter will jump to. Anything above
/// stays an opaque reservation so the counter cannot run out.
const MAX_SEQUENCE: u64 = u32::MAX as u64;

/// Sequential id generator for widgets within a composition
///
/// Issues `w1`, `w2`, … and never hands out the same value twice. When a
/// composition is loaded from records, the generator is seeded past every id
/// already in use so new widgets never collide with stored ones.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    count: u64,
    reserved: HashSet<WidgetId>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_prefix("w")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
            reserved: HashSet::new(),
        }
    }

    /// Seed from ids that already exist
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a WidgetId>) -> Self {
        let mut generator = Self::new();
        for id in existing {
            generator.reserve(id);
        }
        generator
    }

    /// Mark an externally supplied id as taken
    pub fn reserve(&mut self, id: &WidgetId) {
        if let Some(n) = self.sequence_of(id) {
            self.count = self.count.max(n);
        } else {
            self.reserved.insert(id.clone());
        }
    }

    /// Generate next id
    pub fn next_id(&mut self) -> WidgetId {
        loop {
            self.count += 1;
            let id = WidgetId::new(format!("{}{}", self.prefix, self.count));
            if !self.reserved.contains(&id) {
                return id;
            }
        }
    }

    /// Number of ids issued or skipped so far
    pub fn count(&self) -> u64 {
        self.count
    }

    fn sequence_of(&self, id: &WidgetId) -> Option<u64> {
        let digits = id.as_str().strip_prefix(self.prefix.as_str())?;
        // "w01" is not a canonical sequence id; treat it as an opaque reservation
        if digits.starts_with('0') {
            return None;
        }
        digits.parse().ok().filter(|n| *n <= MAX_SEQUENCE)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
