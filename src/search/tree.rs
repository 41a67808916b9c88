use super::data::Data;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction::Outgoing;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;

/// Arena of search nodes. Edges carry the key of the choice that
/// leads from parent to child. Nodes are only ever appended, so
/// `NodeIndex` order is insertion order.
#[derive(Debug)]
pub struct Tree<C, K>(DiGraph<Data<C, K>, K>);

impl<C, K> Tree<C, K>
where
    K: Ord + Clone,
{
    pub fn empty() -> Self {
        Self(DiGraph::with_capacity(0, 0))
    }
    pub fn root(&self) -> NodeIndex {
        NodeIndex::new(0)
    }
    pub fn size(&self) -> usize {
        self.0.node_count()
    }
    pub fn insert(&mut self, data: Data<C, K>) -> NodeIndex {
        self.0.add_node(data)
    }
    /// grow a child under `parent` along `key`.
    pub fn attach(&mut self, parent: NodeIndex, key: K, data: Data<C, K>) -> NodeIndex {
        let child = self.0.add_node(data);
        self.0.add_edge(parent, child, key);
        child
    }
    pub fn at(&self, index: NodeIndex) -> &Data<C, K> {
        self.0.node_weight(index).expect("valid node index")
    }
    pub fn at_mut(&mut self, index: NodeIndex) -> &mut Data<C, K> {
        self.0.node_weight_mut(index).expect("valid node index")
    }
    /// children with their keys, oldest first
    pub fn children(&self, index: NodeIndex) -> Vec<(NodeIndex, &K)> {
        let mut children = self
            .0
            .edges_directed(index, Outgoing)
            .map(|edge| (edge.target(), edge.weight()))
            .collect::<Vec<_>>();
        children.sort_by_key(|(child, _)| *child);
        children
    }
    pub fn follow(&self, index: NodeIndex, key: &K) -> Option<NodeIndex> {
        self.0
            .edges_directed(index, Outgoing)
            .find(|edge| edge.weight() == key)
            .map(|edge| edge.target())
    }
}

impl<C, K> Tree<C, K>
where
    K: Ord + Clone + Debug,
{
    fn draw(&self, f: &mut Formatter, index: NodeIndex, prefix: &str) -> Result {
        if index == self.root() {
            writeln!(f, "ROOT   {:>6} visits", self.at(index).visits())?;
        }
        let children = self.children(index);
        let n = children.len();
        for (i, (child, key)) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let stem = if last { "└" } else { "├" };
            let gaps = if last { "    " } else { "│   " };
            let data = self.at(child);
            writeln!(
                f,
                "{}{}──{:?} → {}/{}",
                prefix,
                stem,
                key,
                data.reward(),
                data.visits()
            )?;
            self.draw(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl<C, K> std::fmt::Display for Tree<C, K>
where
    K: Ord + Clone + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.size() {
            0 => writeln!(f, "EMPTY"),
            _ => self.draw(f, self.root(), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_in_insertion_order() {
        let mut tree = Tree::<char, char>::empty();
        let root = tree.insert(Data::root(0));
        let a = tree.attach(root, 'z', Data::child(0, 'z'));
        let b = tree.attach(root, 'a', Data::child(0, 'a'));
        let order = tree.children(root).into_iter().map(|(i, _)| i).collect::<Vec<_>>();
        assert!(order == vec![a, b]);
        assert!(tree.follow(root, &'a') == Some(b));
        assert!(tree.follow(root, &'q') == None);
    }
}
