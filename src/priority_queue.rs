/// A min-priority queue backed by a binary heap stored in a [Vec]. Elements with equal scores
/// come out in no particular order, and the same element may be queued any number of times.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, K> {
    heap: Vec<(K, T)>,
}

impl<T, K: Ord> Default for PriorityQueue<T, K> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<T, K: Ord> PriorityQueue<T, K> {
    pub fn new() -> PriorityQueue<T, K> {
        PriorityQueue { heap: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn enqueue(&mut self, element: T, score: K) {
        self.heap.push((score, element));
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the element with the lowest score.
    pub fn dequeue(&mut self) -> Option<(K, T)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let lowest = self.heap.pop();
        self.sift_down(0);
        lowest
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].0 >= self.heap[parent].0 {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut lowest = index;
            if left < n && self.heap[left].0 < self.heap[lowest].0 {
                lowest = left;
            }
            if right < n && self.heap[right].0 < self.heap[lowest].0 {
                lowest = right;
            }
            if lowest == index {
                break;
            }
            self.heap.swap(index, lowest);
            index = lowest;
        }
    }
}
