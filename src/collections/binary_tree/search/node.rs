/// The position of a node within a [`SearchTreeMap`](super::SearchTreeMap)'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub usize);

pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}
