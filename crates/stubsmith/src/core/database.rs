//! Core database trait for parsed diagram data
//!
//! This trait defines the interface for storing the descriptors produced by a
//! parser. Each diagram dialect implements it with its own node type.

use anyhow::Result;

/// Core trait for diagram databases
///
/// A database is filled by a parser during a single run and read by the
/// emitters afterwards. Insertion order is preserved.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node) -> Result<()>;

    /// Get the first node with the given name
    fn get_node(&self, name: &str) -> Option<&Self::Node>;

    /// Iterate over all nodes in insertion order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;
}
