/// Slot sentinel meaning "node is not currently on the heap".
const NOT_PRESENT: usize = usize::MAX;

/// An array-backed binary min-heap over node identifiers, ordered by an
/// external key slice (`keys[node]`), with a node-to-slot position index.
///
/// The position index is what makes `decrease_key` O(log n) instead of an
/// O(n) search: `position[heap[i]] == i` holds for every occupied slot `i`.
/// Keys live outside the heap (the caller's distance table), so the caller
/// must pass the same `keys` slice to every operation and may only lower a
/// node's key between calls, never raise it.
///
/// # Examples
///
/// ```
/// use sssp::IndexedMinHeap;
///
/// let mut keys: Vec<u64> = vec![0, 9, 4, 7];
/// let mut heap = IndexedMinHeap::with_capacity(4);
/// heap.push(1, &keys);
/// heap.push(2, &keys);
/// heap.push(3, &keys);
/// assert_eq!(heap.pop_min(&keys), Some(2));
///
/// keys[1] = 3;
/// heap.decrease_key(1, &keys);
/// assert_eq!(heap.pop_min(&keys), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    heap: Vec<usize>,
    position: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold nodes `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            position: vec![NOT_PRESENT; capacity],
        }
    }

    /// Number of nodes currently on the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `node` currently occupies a heap slot.
    pub fn contains(&self, node: usize) -> bool {
        self.position[node] != NOT_PRESENT
    }

    /// Inserts `node`, keyed by `keys[node]`.
    ///
    /// The node must not already be present; callers check with
    /// [`contains`](Self::contains) first. O(log n).
    pub fn push(&mut self, node: usize, keys: &[u64]) {
        debug_assert!(!self.contains(node), "node {node} already on the heap");
        self.heap.push(node);
        self.position[node] = self.heap.len() - 1;
        self.sift_up(self.heap.len() - 1, keys);
    }

    /// Removes and returns the node with the minimum key, or `None` when
    /// the heap is empty. O(log n).
    pub fn pop_min(&mut self, keys: &[u64]) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let min = self.heap.pop()?;
        self.position[min] = NOT_PRESENT;
        if !self.heap.is_empty() {
            self.sift_down(0, keys);
        }
        Some(min)
    }

    /// Restores heap order after the caller has lowered `keys[node]`.
    ///
    /// Sifts upward only; a raised key leaves the heap inconsistent.
    /// `node` must currently be on the heap. O(log n).
    pub fn decrease_key(&mut self, node: usize, keys: &[u64]) {
        debug_assert!(self.contains(node), "node {node} is not on the heap");
        self.sift_up(self.position[node], keys);
    }

    fn sift_up(&mut self, mut idx: usize, keys: &[u64]) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if keys[self.heap[idx]] >= keys[self.heap[parent]] {
                break;
            }
            self.swap_slots(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize, keys: &[u64]) {
        loop {
            let mut child = 2 * idx + 1;
            if child >= self.heap.len() {
                break;
            }
            // Prefer the right child only when its key is strictly smaller;
            // ties resolve toward the left child.
            let right = child + 1;
            if right < self.heap.len() && keys[self.heap[right]] < keys[self.heap[child]] {
                child = right;
            }
            if keys[self.heap[idx]] <= keys[self.heap[child]] {
                break;
            }
            self.swap_slots(idx, child);
            idx = child;
        }
    }

    fn swap_slots(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = i;
        self.position[self.heap[j]] = j;
    }
}
