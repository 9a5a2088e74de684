// Min-first priority queue used to rank targets for a single ship
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A target paired with its cost; lower cost is extracted first
#[derive(Debug, Clone)]
pub struct TargetPriority<T> {
    pub target: T,
    pub priority: f64,
    sequence: usize,
}

impl<T> PartialEq for TargetPriority<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for TargetPriority<T> {}

impl<T> PartialOrd for TargetPriority<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TargetPriority<T> {
    // Reversed so BinaryHeap (a max-heap) pops the cheapest target; equal
    // costs come out in insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Debug, Clone)]
pub struct TargetQueue<T> {
    heap: BinaryHeap<TargetPriority<T>>,
    next_sequence: usize,
}

impl<T> Default for TargetQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TargetQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, target: T, priority: f64) {
        self.heap.push(TargetPriority {
            target,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<TargetPriority<T>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> FromIterator<(T, f64)> for TargetQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let mut queue = TargetQueue::new();
        for (target, priority) in iter {
            queue.push(target, priority);
        }
        queue
    }
}
