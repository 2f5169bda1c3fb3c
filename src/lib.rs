//! In-memory vampire lineage tree.
//!
//! Every vampire is created by at most one other vampire. Offspring are owned
//! by their creator; the creator link is a weak back reference. There is no
//! tree container: the original vampire is simply the node without a creator.
//!
//! ```
//! use vampire_lineage::{Lineage, Vampire};
//!
//! let ansel = Vampire::new("Ansel", 1800);
//! let sarah = Vampire::new("Sarah", 1985);
//! let andrew = Vampire::new("Andrew", 1990);
//! let mina = Vampire::new("Mina", 1700);
//! ansel.add_offspring(&sarah);
//! sarah.add_offspring(&andrew);
//! ansel.add_offspring(&mina);
//!
//! assert_eq!(andrew.number_of_vampires_from_original(), 2);
//! assert_eq!(ansel.total_descendents(), 3);
//! let ancestor = andrew.closest_common_ancestor(&mina).unwrap();
//! assert_eq!(ancestor.borrow().name, "Ansel");
//! ```

pub mod errors;
pub mod iter;
pub mod lineage;
pub mod tree_traits;
pub mod util;
pub mod vampire;

pub use errors::{LineageError, LineageResult};
pub use iter::{AncestorIter, PreOrderIter};
pub use lineage::Lineage;
pub use tree_traits::LineageTreeConvert;
pub use vampire::{Vampire, VampireRef, MILLENNIAL_CUTOFF_YEAR};
