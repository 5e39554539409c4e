use std::fmt::Write;

use crate::{
    ast::{Expr, Statement},
    pipeline::value::Number,
};

/// A generic view of an AST value used for serialization.
///
/// - `Node` is a tagged value: it becomes a labeled graph node whose
///   children are its payload elements.
/// - `List` is flattened: its elements become siblings under the parent.
/// - `Leaf` is a scalar: it becomes a leaf node labeled with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeItem {
    Node(String, Vec<Self>),
    List(Vec<Self>),
    Leaf(String),
}

/// Conversion of AST values into their [`TreeItem`] view.
pub trait ToTree {
    fn to_tree(&self) -> TreeItem;
}

impl ToTree for String {
    fn to_tree(&self) -> TreeItem {
        TreeItem::Leaf(self.clone())
    }
}

impl ToTree for Number {
    fn to_tree(&self) -> TreeItem {
        TreeItem::Leaf(self.to_string())
    }
}

impl<T: ToTree> ToTree for [T] {
    fn to_tree(&self) -> TreeItem {
        TreeItem::List(self.iter().map(ToTree::to_tree).collect())
    }
}

impl<T: ToTree> ToTree for Vec<T> {
    fn to_tree(&self) -> TreeItem {
        self.as_slice().to_tree()
    }
}

impl ToTree for Expr {
    fn to_tree(&self) -> TreeItem {
        match self {
            Self::Number { value, .. } => TreeItem::Node("NUMBER".into(), vec![value.to_tree()]),
            Self::Identifier { name, .. } => TreeItem::Node("ID".into(), vec![name.to_tree()]),
            Self::Group { expr, .. } => TreeItem::Node("GROUP".into(), vec![expr.to_tree()]),
            Self::Operation { op, operands, .. } => {
                TreeItem::Node(op.mnemonic().into(), vec![operands.to_tree()])
            },
        }
    }
}

impl ToTree for Statement {
    fn to_tree(&self) -> TreeItem {
        match self {
            Self::Declare { name, expr, .. } => {
                TreeItem::Node("DECLARE".into(), vec![name.to_tree(), expr.to_tree()])
            },
            Self::Assign { name, expr, .. } => {
                TreeItem::Node("ASSIGN".into(), vec![name.to_tree(), expr.to_tree()])
            },
            Self::Print { expr, .. } => TreeItem::Node("PRINT".into(), vec![expr.to_tree()]),
        }
    }
}

/// A node of a serialized parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Index of the node in [`ParseTree::nodes`].
    pub id:     usize,
    /// Display label, e.g. `DECLARE`, `ADD` or `42`.
    pub label:  String,
    /// Index of the parent node; `None` only for the root.
    pub parent: Option<usize>,
}

/// A parse tree flattened into nodes and parent links.
///
/// Node `0` is a synthetic `root` from which every top-level statement
/// hangs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTree {
    nodes: Vec<TreeNode>,
}

impl ParseTree {
    /// All nodes in creation (pre-order) order.
    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// The children of `id`, in source order.
    pub fn children(&self, id: usize) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(move |node| node.parent == Some(id))
    }

    /// Parent/child pairs, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.iter().filter_map(|node| node.parent.map(|parent| (parent, node.id)))
    }

    fn add_node(&mut self, label: String, parent: Option<usize>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TreeNode { id, label, parent });
        id
    }

    fn add_item(&mut self, item: TreeItem, parent: usize) {
        match item {
            TreeItem::Node(label, children) => {
                let id = self.add_node(label, Some(parent));
                for child in children {
                    self.add_item(child, id);
                }
            },
            TreeItem::List(items) => {
                for child in items {
                    self.add_item(child, parent);
                }
            },
            TreeItem::Leaf(label) => {
                self.add_node(label, Some(parent));
            },
        }
    }

    /// Renders the tree as a Graphviz DOT digraph.
    ///
    /// # Example
    /// ```
    /// use numscript::pipeline::{lexer::tokenize, parser::{parse, parse_tree}};
    ///
    /// let program = parse(&tokenize("PRINT 1").unwrap()).unwrap();
    /// let dot = parse_tree(&program).to_dot();
    ///
    /// assert!(dot.starts_with("digraph ParseTree {"));
    /// assert!(dot.contains("n1 [label=\"PRINT\"];"));
    /// assert!(dot.contains("n0 -> n1;"));
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph ParseTree {\n");

        for node in &self.nodes {
            let label = node.label.replace('\\', "\\\\").replace('"', "\\\"");
            let _ = writeln!(dot, "    n{} [label=\"{label}\"];", node.id);
        }
        for (parent, child) in self.edges() {
            let _ = writeln!(dot, "    n{parent} -> n{child};");
        }

        dot.push('}');
        dot.push('\n');
        dot
    }
}

/// Serializes a program into a [`ParseTree`].
///
/// Tagged nodes become labeled graph nodes, lists are flattened into their
/// parent and scalars become leaves.
///
/// # Example
/// ```
/// use numscript::pipeline::{lexer::tokenize, parser::{parse, parse_tree}};
///
/// let program = parse(&tokenize("VAR x = ADD 1 2").unwrap()).unwrap();
/// let tree = parse_tree(&program);
///
/// let labels: Vec<&str> = tree.nodes().iter().map(|n| n.label.as_str()).collect();
/// assert_eq!(labels, ["root", "DECLARE", "x", "ADD", "NUMBER", "1", "NUMBER", "2"]);
/// ```
#[must_use]
pub fn parse_tree(program: &[Statement]) -> ParseTree {
    let mut tree = ParseTree::default();
    let root = tree.add_node("root".to_string(), None);

    tree.add_item(program.to_tree(), root);
    tree
}
