use termtree::Tree;
use tracing::instrument;

use crate::vampire::VampireRef;

pub trait LineageTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl LineageTreeConvert for VampireRef {
    #[instrument(level = "debug", skip_all, fields(vampire = %self.borrow().name))]
    fn to_tree_string(&self) -> Tree<String> {
        let node = self.borrow();

        // Recursively construct the offspring
        let leaves: Vec<_> = node
            .offspring
            .iter()
            .map(|o| o.to_tree_string())
            .collect();

        Tree::new(node.to_string()).with_leaves(leaves)
    }
}
