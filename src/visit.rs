//! Depth-first AST traversal with enter/exit callbacks.
//!
//! Callbacks register against [`NodeType`] variants in a [`CallbackTable`],
//! so a handler for a nonexistent kind is a compile error rather than a
//! silently ignored string key. An enter handler chooses per node whether
//! the walk descends; pruning is local to that one subtree and the pruned
//! node's own exit handler still fires. Callback errors abort the walk and
//! propagate to the caller unchanged.
//!
//! ```
//! use solast::ast::{Node, NodeKind};
//! use solast::{traverse, CallbackTable, Flow, NodeType};
//!
//! let ast = Node::new(NodeKind::SourceUnit {
//!     children: vec![Node::new(NodeKind::ThrowStatement {})],
//! });
//! let mut seen = 0;
//! let mut table: CallbackTable<'_, ()> = CallbackTable::new().on_enter(
//!     NodeType::ThrowStatement,
//!     |_node| {
//!         seen += 1;
//!         Ok(Flow::Descend)
//!     },
//! );
//! traverse(&ast, &mut table).unwrap();
//! drop(table);
//! assert_eq!(seen, 1);
//! ```

use std::collections::HashMap;

use crate::ast::{Node, NodeType};

/// What an enter handler tells the walker to do with the current subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Recurse into the node's children in field order.
    Descend,
    /// Skip every descendant of this node. The node's own exit handler
    /// still runs; siblings and ancestors are unaffected.
    Prune,
}

type EnterFn<'a, E> = Box<dyn FnMut(&Node) -> Result<Flow, E> + 'a>;
type ExitFn<'a, E> = Box<dyn FnMut(&Node) -> Result<(), E> + 'a>;

/// Enter and exit handlers keyed by node kind.
///
/// `E` is the caller's own error type; the walker never produces errors
/// of its own.
pub struct CallbackTable<'a, E> {
    enter: HashMap<NodeType, EnterFn<'a, E>>,
    exit: HashMap<NodeType, ExitFn<'a, E>>,
}

impl<'a, E> CallbackTable<'a, E> {
    pub fn new() -> Self {
        Self {
            enter: HashMap::new(),
            exit: HashMap::new(),
        }
    }

    /// Registers the enter handler for one node kind, replacing any
    /// previous handler for that kind.
    pub fn on_enter(
        mut self,
        node_type: NodeType,
        handler: impl FnMut(&Node) -> Result<Flow, E> + 'a,
    ) -> Self {
        self.enter.insert(node_type, Box::new(handler));
        self
    }

    /// Registers the exit handler for one node kind, replacing any
    /// previous handler for that kind.
    pub fn on_exit(
        mut self,
        node_type: NodeType,
        handler: impl FnMut(&Node) -> Result<(), E> + 'a,
    ) -> Self {
        self.exit.insert(node_type, Box::new(handler));
        self
    }
}

impl<E> Default for CallbackTable<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the tree depth-first, driving the table's handlers.
///
/// Every node without a registered enter handler descends. The first
/// handler error ends the walk immediately.
pub fn traverse<E>(root: &Node, table: &mut CallbackTable<'_, E>) -> Result<(), E> {
    let flow = match table.enter.get_mut(&root.node_type()) {
        Some(handler) => handler(root)?,
        None => Flow::Descend,
    };

    if flow == Flow::Descend {
        for child in root.children() {
            traverse(child, table)?;
        }
    }

    if let Some(handler) = table.exit.get_mut(&root.node_type()) {
        handler(root)?;
    }
    Ok(())
}
