use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> and leaked into a NonNull, so that taking a node back
// with Box::from_raw allows its value to be moved out of the heap.

/// A pointer to a node owned by a [`LinkedList`](super::LinkedList). All accessors assume that the
/// node is still allocated, which holds for as long as the node is linked into its list.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the node from the heap.
    ///
    /// # Safety
    /// The node must still be allocated and no copy of this pointer may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and, as guaranteed by the caller, hasn't been
        // reclaimed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: Linked nodes are allocated and the list hands out references bound to its own
        // lifetime.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As above, with the list holding a unique borrow whenever this is called.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: Linked nodes are allocated.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn set_prev(self, link: Link<T>) {
        // SAFETY: Linked nodes are allocated and only ever accessed through their list.
        unsafe { (*self.0.as_ptr()).prev = link; }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: Linked nodes are allocated.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, link: Link<T>) {
        // SAFETY: Linked nodes are allocated and only ever accessed through their list.
        unsafe { (*self.0.as_ptr()).next = link; }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
