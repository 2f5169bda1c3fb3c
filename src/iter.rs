use std::rc::Rc;

use tracing::instrument;

use crate::vampire::VampireRef;

/// Pre-order walk over a subtree: a vampire before its offspring,
/// offspring in the order they were added.
pub struct PreOrderIter {
    stack: Vec<VampireRef>,
}

impl PreOrderIter {
    #[instrument(level = "trace", skip(start))]
    pub(crate) fn new(start: &VampireRef) -> Self {
        Self {
            stack: vec![Rc::clone(start)],
        }
    }
}

impl Iterator for PreOrderIter {
    type Item = VampireRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        {
            let node = current.borrow();
            // Push offspring in reverse order for left-to-right traversal
            for child in node.offspring.iter().rev() {
                self.stack.push(Rc::clone(child));
            }
        }
        Some(current)
    }
}

/// Walk up the creator chain, starting at the creator of the first vampire.
pub struct AncestorIter {
    next: Option<VampireRef>,
}

impl AncestorIter {
    #[instrument(level = "trace", skip(start))]
    pub(crate) fn new(start: &VampireRef) -> Self {
        Self {
            next: start.borrow().creator.upgrade(),
        }
    }
}

impl Iterator for AncestorIter {
    type Item = VampireRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.borrow().creator.upgrade();
        Some(current)
    }
}
