use std::cell::Cell;
use std::rc::Rc;

/// A value that bumps a shared counter when dropped, used to check that collections release every
/// element exactly once.
#[derive(Debug, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Creates a new element that reports to the same counter.
    pub fn track(&self) -> Tracked {
        Tracked(Rc::clone(&self.0))
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

#[derive(Debug)]
pub struct Tracked(Rc<Cell<usize>>);

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
