/*
Cannot define inherent `impl` for Rc<RefCell<Vampire>> (E0116): the tree
operations live on a trait implemented for the handle type. add_offspring
stores a Weak to the handle; queries compare nodes by pointer identity.
 */
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::errors::{LineageError, LineageResult};
use crate::iter::{AncestorIter, PreOrderIter};
use crate::vampire::{VampireRef, MILLENNIAL_CUTOFF_YEAR};

/// Ancestry, traversal and aggregation over a vampire lineage.
///
/// All operations assume the vampires form a tree. Callers must not make a
/// vampire its own ancestor: cycles are not detected and any query over a
/// cycle may never return.
pub trait Lineage {
    /// Appends `child` to this vampire's offspring and makes this vampire its
    /// creator. A child that already had a creator is removed from the previous
    /// creator's offspring first.
    fn add_offspring(&self, child: &VampireRef);

    fn number_of_offspring(&self) -> usize;

    /// Number of creator hops to the original vampire; 0 for the original.
    fn number_of_vampires_from_original(&self) -> usize;

    /// Compares depth only. Vampires in unrelated branches are still comparable.
    fn is_more_senior_than(&self, other: &VampireRef) -> bool;

    /// First vampire named `name` in a pre-order walk of this subtree,
    /// starting with this vampire.
    fn vampire_with_name(&self, name: &str) -> Option<VampireRef>;

    /// Size of the subtree, excluding this vampire.
    fn total_descendents(&self) -> usize;

    /// Vampires in this subtree converted after 1980, in pre-order.
    fn all_millennial_vampires(&self) -> Vec<VampireRef>;

    fn vampires_converted_after(&self, year: i32) -> Vec<VampireRef>;

    /// Deepest vampire that is an ancestor of, or equal to, both vampires.
    /// When one is an ancestor of the other, that ancestor is returned.
    ///
    /// # Errors
    ///
    /// `LineageError::NoCommonAncestor` if the two vampires descend from
    /// different originals.
    fn closest_common_ancestor(&self, other: &VampireRef) -> LineageResult<VampireRef>;

    fn is_ancestor_of(&self, other: &VampireRef) -> bool;

    fn creator(&self) -> Option<VampireRef>;

    fn offspring(&self) -> Vec<VampireRef>;

    fn is_original(&self) -> bool;

    /// Root of the tree this vampire belongs to.
    fn original(&self) -> VampireRef;

    fn iter(&self) -> PreOrderIter;

    fn ancestors(&self) -> AncestorIter;
}

impl Lineage for VampireRef {
    #[instrument(level = "debug", skip_all, fields(creator = %self.borrow().name, child = %child.borrow().name))]
    fn add_offspring(&self, child: &VampireRef) {
        let previous = child.borrow().creator.upgrade();
        if let Some(previous) = previous {
            debug!(previous = %previous.borrow().name, "re-parenting vampire");
            previous
                .borrow_mut()
                .offspring
                .retain(|o| !Rc::ptr_eq(o, child));
        }
        child.borrow_mut().creator = Rc::downgrade(self);
        self.borrow_mut().offspring.push(Rc::clone(child));
    }

    #[instrument(level = "trace", skip_all, fields(vampire = %self.borrow().name))]
    fn number_of_offspring(&self) -> usize {
        self.borrow().offspring.len()
    }

    #[instrument(level = "trace", skip_all, fields(vampire = %self.borrow().name))]
    fn number_of_vampires_from_original(&self) -> usize {
        self.ancestors().count()
    }

    #[instrument(level = "trace", skip_all, fields(vampire = %self.borrow().name, other = %other.borrow().name))]
    fn is_more_senior_than(&self, other: &VampireRef) -> bool {
        self.number_of_vampires_from_original() < other.number_of_vampires_from_original()
    }

    #[instrument(level = "debug", skip(self), fields(vampire = %self.borrow().name))]
    fn vampire_with_name(&self, name: &str) -> Option<VampireRef> {
        self.iter().find(|v| v.borrow().name == name)
    }

    #[instrument(level = "debug", skip_all, fields(vampire = %self.borrow().name))]
    fn total_descendents(&self) -> usize {
        self.iter().skip(1).count()
    }

    #[instrument(level = "debug", skip_all, fields(vampire = %self.borrow().name))]
    fn all_millennial_vampires(&self) -> Vec<VampireRef> {
        self.vampires_converted_after(MILLENNIAL_CUTOFF_YEAR)
    }

    #[instrument(level = "debug", skip(self), fields(vampire = %self.borrow().name))]
    fn vampires_converted_after(&self, year: i32) -> Vec<VampireRef> {
        self.iter()
            .filter(|v| v.borrow().year_converted > year)
            .collect()
    }

    #[instrument(level = "debug", skip_all, fields(vampire = %self.borrow().name, other = %other.borrow().name))]
    fn closest_common_ancestor(&self, other: &VampireRef) -> LineageResult<VampireRef> {
        let mut left = Rc::clone(self);
        let mut right = Rc::clone(other);
        let mut left_depth = left.number_of_vampires_from_original();
        let mut right_depth = right.number_of_vampires_from_original();

        // The more senior side waits while the other climbs; on a tie the left climbs.
        while !Rc::ptr_eq(&left, &right) {
            if left_depth < right_depth {
                right = right
                    .creator()
                    .ok_or_else(|| no_common_ancestor(self, other))?;
                right_depth -= 1;
            } else {
                left = left
                    .creator()
                    .ok_or_else(|| no_common_ancestor(self, other))?;
                left_depth = left_depth.saturating_sub(1);
            }
        }

        Ok(left)
    }

    #[instrument(level = "trace", skip_all, fields(vampire = %self.borrow().name, other = %other.borrow().name))]
    fn is_ancestor_of(&self, other: &VampireRef) -> bool {
        other.ancestors().any(|a| Rc::ptr_eq(&a, self))
    }

    fn creator(&self) -> Option<VampireRef> {
        self.borrow().creator.upgrade()
    }

    fn offspring(&self) -> Vec<VampireRef> {
        self.borrow().offspring.clone()
    }

    fn is_original(&self) -> bool {
        self.creator().is_none()
    }

    #[instrument(level = "trace", skip_all, fields(vampire = %self.borrow().name))]
    fn original(&self) -> VampireRef {
        self.ancestors().last().unwrap_or_else(|| Rc::clone(self))
    }

    fn iter(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    fn ancestors(&self) -> AncestorIter {
        AncestorIter::new(self)
    }
}

fn no_common_ancestor(left: &VampireRef, right: &VampireRef) -> LineageError {
    let err = LineageError::NoCommonAncestor {
        left: left.borrow().name.clone(),
        right: right.borrow().name.clone(),
    };
    debug!(%err, "creator walk reached an original");
    err
}
