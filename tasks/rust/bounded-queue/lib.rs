use std::fmt;

/// A doubly-linked queue node.
///
/// Neighbors are addressed by slot index within the owning queue's slab,
/// never by pointer, so every node is owned by exactly one queue.
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Error returned when a push is refused by a full container.
///
/// Carries the rejected value back to the caller so nothing is lost on
/// failure.
#[derive(Debug, PartialEq, Eq)]
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    /// Consumes the error, returning the value that could not be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container full, failed to push {}", self.0)
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for CapacityError<T> {}

/// A capacity-bounded FIFO queue over a doubly-linked chain of nodes.
///
/// Nodes live in a slab owned by the queue; popped slots go on a free list
/// and are reused by later pushes. Dropping or clearing the queue releases
/// every node exactly once.
pub struct Queue<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    capacity: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue with the given capacity.
    ///
    /// A capacity of 0 is legal: the queue is immediately full and every
    /// push fails.
    pub fn new(capacity: usize) -> Self {
        Queue {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            capacity,
        }
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the configured maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Overwrites the capacity without validating against the current
    /// length and without evicting anything.
    ///
    /// Shrinking below `len()` leaves the queue over-full: `is_full()`
    /// reports true and pushes fail until enough pops bring the length back
    /// under the new bound. Keeping those in balance is the caller's
    /// responsibility.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the queue is at (or above) capacity.
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    /// Appends a value at the back of the queue.
    ///
    /// On a full queue the value is handed back inside the error and the
    /// queue is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError(value));
        }

        let node = Node {
            value,
            prev: self.tail,
            next: None,
        };
        let index = self.alloc(node);

        match self.tail {
            Some(old_tail) => {
                if let Some(node) = self.slots[old_tail].as_mut() {
                    node.next = Some(index);
                }
            }
            // First element: head and tail are the same node.
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        Ok(())
    }

    /// Detaches and returns the front value, or `None` if the queue is
    /// empty. The node's slot is released for reuse.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.head?;
        let node = self.release(index)?;

        self.head = node.next;
        match self.head {
            Some(new_head) => {
                if let Some(node) = self.slots[new_head].as_mut() {
                    node.prev = None;
                }
            }
            // That was the last element.
            None => self.tail = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Returns a reference to the front value without removing it.
    pub fn front(&self) -> Option<&T> {
        self.slots[self.head?].as_ref().map(|node| &node.value)
    }

    /// Returns a reference to the back value without removing it.
    pub fn back(&self) -> Option<&T> {
        self.slots[self.tail?].as_ref().map(|node| &node.value)
    }

    /// Returns an iterator over the values in front-to-back order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            next: self.head,
        }
    }

    /// Removes every element, releasing all nodes.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Option<Node<T>> {
        let node = self.slots[index].take()?;
        self.free.push(index);
        Some(node)
    }
}

impl<T> Default for Queue<T> {
    /// An empty queue with capacity 0.
    fn default() -> Self {
        Self::new(0)
    }
}

/// A lazy front-to-back walk over a queue's values.
///
/// Restartable: call [`Queue::iter`] again for a fresh walk.
pub struct Iter<'a, T> {
    queue: &'a Queue<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = self.next?;
        let node = self.queue.slots[index].as_ref()?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
