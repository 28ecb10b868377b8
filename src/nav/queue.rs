//! Sorted frontier for the shortest-path search.
//!
//! Entries are kept in ascending priority. Insertion is linear, which is fine
//! for scene-sized graphs (tens to a few hundred nodes). Among entries with the
//! same priority the one inserted first is dequeued first.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry<T> {
    pub element: T,
    pub priority: f64,
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: VecDeque<QueueEntry<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Inserts before the first entry with a strictly greater priority.
    pub fn enqueue(&mut self, element: T, priority: f64) {
        let entry = QueueEntry { element, priority };
        match self.entries.iter().position(|e| e.priority > priority) {
            Some(ix) => self.entries.insert(ix, entry),
            None => self.entries.push_back(entry),
        }
    }

    /// Removes and returns the lowest-priority entry, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<QueueEntry<T>> {
        self.entries.pop_front()
    }

    pub fn peek(&self) -> Option<&QueueEntry<T>> {
        self.entries.front()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_order() {
        let mut q = PriorityQueue::new();
        q.enqueue("c", 3.);
        q.enqueue("a", 1.);
        q.enqueue("inf", f64::INFINITY);
        q.enqueue("b", 2.);
        let order: Vec<&str> = std::iter::from_fn(|| q.dequeue().map(|e| e.element)).collect();
        assert_eq!(order, vec!["a", "b", "c", "inf"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_ties_first_inserted_wins() {
        let mut q = PriorityQueue::new();
        q.enqueue("first", 1.);
        q.enqueue("low", 0.);
        q.enqueue("second", 1.);
        q.enqueue("third", 1.);
        assert_eq!(q.len(), 4);
        assert_eq!(q.dequeue().unwrap().element, "low");
        assert_eq!(q.dequeue().unwrap().element, "first");
        assert_eq!(q.dequeue().unwrap().element, "second");
        assert_eq!(q.dequeue().unwrap().element, "third");
    }

    #[test]
    fn test_infinite_priorities_keep_insertion_order() {
        let mut q = PriorityQueue::new();
        q.enqueue("x", f64::INFINITY);
        q.enqueue("y", f64::INFINITY);
        q.enqueue("z", 5.);
        assert_eq!(q.peek().unwrap().element, "z");
        q.dequeue();
        assert_eq!(q.dequeue().unwrap().element, "x");
        assert_eq!(q.dequeue().unwrap().element, "y");
    }

    #[test]
    fn test_dequeue_empty() {
        let mut q: PriorityQueue<String> = PriorityQueue::default();
        assert!(q.is_empty());
        assert!(q.dequeue().is_none());
        assert!(q.peek().is_none());
    }
}
