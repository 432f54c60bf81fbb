use std::fmt;

/// Error returned when an insert is refused by a full deque.
///
/// Carries the rejected value back to the caller.
#[derive(Debug, PartialEq, Eq)]
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    /// Consumes the error, returning the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deque full, failed to insert {}", self.0)
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for CapacityError<T> {}

/// A double-ended list over a fixed-size backing store.
///
/// The store is allocated once at construction and never grows. Two
/// cursors (a front index and a length) address it modulo the capacity, so
/// slots freed at one end are reusable at the other and inserts never
/// shift existing elements. Every access is bounds-checked; out-of-range
/// lookups return `None` rather than a sentinel value.
pub struct RingDeque<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> RingDeque<T> {
    /// Creates an empty deque whose backing store holds `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        RingDeque {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed size of the backing store.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every backing slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Inserts a value at the front.
    ///
    /// On a full deque the value is handed back inside the error and the
    /// deque is left unchanged.
    pub fn push_front(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError(value));
        }
        self.head = (self.head + self.capacity() - 1) % self.capacity();
        self.slots[self.head] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Inserts a value at the back.
    ///
    /// On a full deque the value is handed back inside the error and the
    /// deque is left unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError(value));
        }
        let index = (self.head + self.len) % self.capacity();
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front value, or `None` if the deque is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        value
    }

    /// Removes and returns the back value, or `None` if the deque is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let index = (self.head + self.len - 1) % self.capacity();
        self.len -= 1;
        self.slots[index].take()
    }

    /// Returns a reference to the element at position `i` from the front,
    /// or `None` if `i` is out of range.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        self.slots[(self.head + i) % self.capacity()].as_ref()
    }

    /// Returns a reference to the front value.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the back value.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Returns an iterator over the values in front-to-back order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            index: 0,
        }
    }

    /// Removes every element. The backing store keeps its size.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }
}

/// A lazy front-to-back walk over a deque's values.
pub struct Iter<'a, T> {
    deque: &'a RingDeque<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.deque.get(self.index)?;
        self.index += 1;
        Some(value)
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
