use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Shared handle to a vampire. Offspring are held through these handles,
/// so a parent owns its children.
pub type VampireRef = Rc<RefCell<Vampire>>;

/// Vampires converted strictly after this year count as millennials.
pub const MILLENNIAL_CUTOFF_YEAR: i32 = 1980;

/// A node in the lineage tree.
pub struct Vampire {
    /// Lookup key, not required to be unique
    pub name: String,
    /// Year this vampire was converted
    pub year_converted: i32,
    /// Back reference to the creator, dangling for the original vampire
    pub(crate) creator: Weak<RefCell<Vampire>>,
    /// Vampires created by this one, in the order they were added
    pub(crate) offspring: Vec<VampireRef>,
}

impl Vampire {
    /// Creates an unattached vampire: no creator, no offspring.
    pub fn new(name: impl Into<String>, year_converted: i32) -> VampireRef {
        Rc::new(RefCell::new(Vampire {
            name: name.into(),
            year_converted,
            creator: Weak::new(),
            offspring: Vec::new(),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year_converted(&self) -> i32 {
        self.year_converted
    }

    pub fn is_millennial(&self) -> bool {
        self.year_converted > MILLENNIAL_CUTOFF_YEAR
    }
}

// Unlinks uniquely owned offspring one level at a time, so dropping a long
// lineage does not recurse once per generation.
impl Drop for Vampire {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.offspring);
        while let Some(child) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(child) {
                let mut node = cell.into_inner();
                stack.append(&mut node.offspring);
            }
        }
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year_converted)
    }
}

// Only names of neighbours: a derived impl would walk the whole subtree.
impl fmt::Debug for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let creator = self
            .creator
            .upgrade()
            .and_then(|c| c.try_borrow().ok().map(|c| c.name.clone()));
        let offspring: Vec<String> = self
            .offspring
            .iter()
            .map(|o| {
                o.try_borrow()
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|_| "<borrowed>".to_string())
            })
            .collect();
        f.debug_struct("Vampire")
            .field("name", &self.name)
            .field("year_converted", &self.year_converted)
            .field("creator", &creator)
            .field("offspring", &offspring)
            .finish()
    }
}
