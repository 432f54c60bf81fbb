pub use bounded_queue::CapacityError;
use bounded_queue::{Iter, Queue};

/// A capacity-bounded LIFO stack built on top of a FIFO queue.
///
/// The stack owns a single [`Queue`] and synthesizes stack order from queue
/// primitives alone: every push rotates the queue until the newest element
/// sits at its front, so popping the queue front yields LIFO order. Push is
/// O(n) in the number of stored elements; the composition, not the cost, is
/// the point of the exercise.
pub struct Stack<T> {
    queue: Queue<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Stack {
            queue: Queue::new(capacity),
        }
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns the configured maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Overwrites the capacity of the owned queue.
    ///
    /// Same caveat as [`Queue::set_capacity`]: shrinking below `len()`
    /// evicts nothing and is on the caller to resolve.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.queue.set_capacity(capacity);
    }

    /// Returns true if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns true if the stack is at (or above) capacity.
    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// On a full stack the value is handed back inside the error and the
    /// stack is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        self.queue.push(value)?;
        // Rotate every element that was already present: len - 1 cycles of
        // pop-front / re-push-back leave the newest element at the front.
        for _ in 1..self.queue.len() {
            if let Some(rotated) = self.queue.pop() {
                // Cannot fail: the pop just freed the slot this refills.
                let _ = self.queue.push(rotated);
            }
        }
        Ok(())
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    ///
    /// The top is always the queue's front, by the rotation `push`
    /// performs.
    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop()
    }

    /// Returns a reference to the top value without removing it.
    pub fn top(&self) -> Option<&T> {
        self.queue.front()
    }

    /// Returns an iterator over the values, most recently pushed first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.queue.iter()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<T> Default for Stack<T> {
    /// An empty stack with capacity 0.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
