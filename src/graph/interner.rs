use std::sync::Arc ;
use dashmap::{ DashMap, DashSet };

use crate::descriptor::DependencyDescriptor ;
use super::{ DependencyNode, DependencyEdge };



/// Interning tables for graph parts.
///
/// Verifying many plugins against the same environment resolves the same
/// dependency ids over and over; interning makes every build reuse one
/// allocation per node, descriptor and edge. The tables are concurrent maps,
/// so one `Arc<Interner>` can be shared by builders on different threads.
/// Entries are never evicted.
///
/// Nodes are keyed by id. Interning an id with a different version than the
/// stored one replaces the entry, so graphs built against another environment
/// never report a stale version.
#[derive( Debug, Default )]
pub struct Interner {
    nodes: DashMap<Arc<str>, DependencyNode>,
    descriptors: DashSet<Arc<DependencyDescriptor>>,
    edges: DashSet<DependencyEdge>,
}

impl Interner {

    /// Creates empty tables.
    #[inline] pub fn new() -> Self { Self::default() }

    /// Canonical node for `id` at `version`.
    pub fn node( &self, id: &str, version: &str ) -> DependencyNode {
        if let Some( node ) = self.nodes.get( id ) {
            if node.version() == version { return node.clone() }
        }
        let node = DependencyNode::new( id, version );
        self.nodes.insert( Arc::clone( &node.id ), node.clone() );
        node
    }

    /// Canonical shared copy of `descriptor`.
    pub fn descriptor( &self, descriptor: &DependencyDescriptor ) -> Arc<DependencyDescriptor> {
        if let Some( interned ) = self.descriptors.get( descriptor ) { return Arc::clone( &interned ) }
        let interned = Arc::new( descriptor.clone() );
        match self.descriptors.insert( Arc::clone( &interned )) {
            true => interned,
            // Lost a race against another builder; hand out the winner's copy.
            false => self.descriptors.get( descriptor ).map_or( interned, | winner | Arc::clone( &winner )),
        }
    }

    /// Canonical edge `from -> to` labelled with `descriptor`.
    pub fn edge(
        &self,
        from: &DependencyNode,
        to: &DependencyNode,
        descriptor: &Arc<DependencyDescriptor>,
    ) -> DependencyEdge {
        let edge = DependencyEdge::new( from.clone(), to.clone(), Arc::clone( descriptor ));
        if let Some( interned ) = self.edges.get( &edge ) {
            if interned.from.version() == from.version() && interned.to.version() == to.version() {
                return interned.clone()
            }
        }
        // Edge equality ignores versions, so a stale entry has to go first.
        self.edges.remove( &edge );
        self.edges.insert( edge.clone() );
        edge
    }

    /// Number of interned nodes.
    pub fn node_count( &self ) -> usize { self.nodes.len() }

    /// Number of interned descriptors.
    pub fn descriptor_count( &self ) -> usize { self.descriptors.len() }

    /// Number of interned edges.
    pub fn edge_count( &self ) -> usize { self.edges.len() }

}
