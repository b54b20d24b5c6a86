use std::collections::VecDeque;

pub trait Weighted {
    fn weight(&self) -> usize;
}

/// Entries ordered ascending by weight.
///
/// A new entry is placed after the last entry with a strictly smaller weight,
/// so among entries of equal weight the most recently inserted one is
/// extracted first. This decides the shape of the huffman tree for symbols of
/// equal frequency and therefore the exact code lengths.
pub struct PriorityQueue<T> {
    entries: VecDeque<T>,
}

impl<T: Weighted> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn insert(&mut self, entry: T) {
        let weight = entry.weight();
        let position = self.entries.partition_point(|e| e.weight() < weight);
        self.entries.insert(position, entry);
    }

    /// Removes the entry with the lowest weight.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Callers check [`Self::len`] first.
    pub fn extract_min(&mut self) -> T {
        self.entries
            .pop_front()
            .unwrap_or_else(|| panic!("priority queue underflow"))
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn has_at_least_two_entries(&self) -> bool {
        self.entries.len() >= 2
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Weighted> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Weighted> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(entries: I) -> Self {
        let mut queue = Self::new();
        for entry in entries {
            queue.insert(entry);
        }
        queue
    }
}
