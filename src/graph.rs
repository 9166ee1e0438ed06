//! The resolved dependency graph.
//!
//! A [`DependenciesGraph`] is produced once per verified plugin by the
//! [`DependenciesGraphBuilder`]( crate::DependenciesGraphBuilder ) and is
//! immutable afterwards. Vertices are [`DependencyNode`]s identified by id,
//! edges are [`DependencyEdge`]s labelled with the descriptor that produced
//! them, and dependencies that could not be resolved are kept as
//! [`MissingDependency`] records on the node that declared them.
//!
//! ```text
//!   root ──descriptor──▶ B ──descriptor──▶ D
//!    │                                     ▲
//!    └────descriptor──▶ C ──descriptor─────┘
//!                       └─ missing: module 'x' (optional): reason
//! ```

mod interner ;
mod printer ;

pub use interner::Interner ;
pub use printer::PrettyPrinter ;

use std::collections::{ HashMap, HashSet };
use std::hash::{ Hash, Hasher };
use std::sync::Arc ;
use itertools::Itertools ;
use nonempty_collections::NEVec ;
use thiserror::Error ;

use crate::descriptor::DependencyDescriptor ;



/// A vertex of the dependency graph: a plugin or a module.
///
/// Two nodes are equal iff their ids are equal. The version is carried for
/// reporting only, so a diamond dependency converges on a single vertex no
/// matter which path discovered it first. Cloning is cheap.
#[derive( Debug, Clone )]
pub struct DependencyNode {
    id: Arc<str>,
    version: Arc<str>,
}

impl DependencyNode {

    /// Creates a node. Prefer [`Interner::node`] when building many graphs.
    #[inline]
    pub fn new( id: impl Into<Arc<str>>, version: impl Into<Arc<str>> ) -> Self {
        Self { id: id.into(), version: version.into() }
    }

    /// Plugin or module id.
    #[inline] pub fn id( &self ) -> &str { &self.id }

    /// Version, informational only.
    #[inline] pub fn version( &self ) -> &str { &self.version }

    /// Whether both handles share one allocation.
    #[inline] pub fn ptr_eq( &self, other: &Self ) -> bool { Arc::ptr_eq( &self.id, &other.id ) }

}

impl PartialEq for DependencyNode {
    fn eq( &self, other: &Self ) -> bool { self.id == other.id }
}
impl Eq for DependencyNode {}

impl Hash for DependencyNode {
    fn hash<H: Hasher>( &self, state: &mut H ) { self.id.hash( state ) }
}

impl std::fmt::Display for DependencyNode {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "{}:{}", self.id, self.version )
    }
}

/// A directed edge: `from` declares a dependency on `to` via `descriptor`.
///
/// Equality is structural over all three parts.
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct DependencyEdge {
    from: DependencyNode,
    to: DependencyNode,
    descriptor: Arc<DependencyDescriptor>,
}

impl DependencyEdge {

    /// Creates an edge. Prefer [`Interner::edge`] when building many graphs.
    #[inline]
    pub fn new( from: DependencyNode, to: DependencyNode, descriptor: Arc<DependencyDescriptor> ) -> Self {
        Self { from, to, descriptor }
    }

    /// The declaring node.
    #[inline] pub fn from( &self ) -> &DependencyNode { &self.from }

    /// The node depended on.
    #[inline] pub fn to( &self ) -> &DependencyNode { &self.to }

    /// The declaration this edge was resolved from.
    #[inline] pub fn descriptor( &self ) -> &DependencyDescriptor { &self.descriptor }

}

impl std::fmt::Display for DependencyEdge {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "{} -> {} [{}]", self.from.id, self.to.id, self.descriptor )
    }
}

/// A declared dependency that could not be resolved, with the reason.
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct MissingDependency {
    descriptor: Arc<DependencyDescriptor>,
    reason: String,
}

impl MissingDependency {

    /// Creates a missing dependency record.
    #[inline]
    pub fn new( descriptor: Arc<DependencyDescriptor>, reason: impl Into<String> ) -> Self {
        Self { descriptor, reason: reason.into() }
    }

    /// The unresolved declaration.
    #[inline] pub fn descriptor( &self ) -> &DependencyDescriptor { &self.descriptor }

    /// Why it could not be resolved.
    #[inline] pub fn reason( &self ) -> &str { &self.reason }

    /// Whether the declaring node can work without it.
    #[inline] pub fn is_optional( &self ) -> bool { self.descriptor.is_optional() }

}

impl std::fmt::Display for MissingDependency {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "{}: {}", self.descriptor, self.reason )
    }
}

/// A root-to-node path ending at the node that declared a missing dependency.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct MissingDependencyPath {
    path: NEVec<DependencyNode>,
    missing: MissingDependency,
}

impl MissingDependencyPath {

    /// Creates a path record.
    #[inline]
    pub fn new( path: NEVec<DependencyNode>, missing: MissingDependency ) -> Self {
        Self { path, missing }
    }

    /// Nodes from the root to the declaring node, both included.
    #[inline] pub fn path( &self ) -> &NEVec<DependencyNode> { &self.path }

    /// The node that declared the missing dependency.
    #[inline] pub fn node( &self ) -> &DependencyNode { self.path.last() }

    /// The missing dependency found at the end of the path.
    #[inline] pub fn missing( &self ) -> &MissingDependency { &self.missing }

    /// Number of edges between the root and the declaring node.
    #[inline] pub fn depth( &self ) -> usize { ( &self.path ).into_iter().count() - 1 }

}

impl std::fmt::Display for MissingDependencyPath {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "{} -> {}", ( &self.path ).into_iter().map( DependencyNode::id ).join( " -> " ), self.missing )
    }
}

/// Invariant violations in a hand-assembled graph.
#[derive( Debug, Error, PartialEq, Eq )]
pub enum GraphError {
    /// The root must be one of the vertices.
    #[error( "Root '{0}' is not a vertex" )]
    RootNotInVertices( String ),
    /// Both endpoints of every edge must be vertices.
    #[error( "Edge {0} references a node that is not a vertex" )]
    DanglingEdge( String ),
    /// Edges never point from a node to itself.
    #[error( "Self-loop on '{0}'" )]
    SelfLoop( String ),
    /// Missing dependencies can only be attached to vertices.
    #[error( "Missing dependencies attached to unknown node '{0}'" )]
    UnknownMissingOwner( String ),
}

/// Resolved dependency graph of a single plugin against a single environment.
///
/// # Invariants
/// - the root is a vertex
/// - every edge's endpoints are vertices, and no edge is a self-loop
/// - missing dependencies are attached to vertices only
/// - there is at most one vertex per id
///
/// Vertex and edge collections have set semantics; no ordering is promised.
#[derive( Debug, Clone )]
pub struct DependenciesGraph {
    root: DependencyNode,
    vertices: HashSet<DependencyNode>,
    edges: HashSet<DependencyEdge>,
    missing: HashMap<DependencyNode, HashSet<MissingDependency>>,
    /// outgoing edges per node, by target id then descriptor
    outgoing: HashMap<DependencyNode, Vec<DependencyEdge>>,
    /// id-sorted successor lists, derived from `outgoing`
    adjacency: HashMap<DependencyNode, Vec<DependencyNode>>,
}

impl DependenciesGraph {

    /// Assembles a graph from its parts, checking every invariant.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] found.
    pub fn from_parts(
        root: DependencyNode,
        vertices: impl IntoIterator<Item = DependencyNode>,
        edges: impl IntoIterator<Item = DependencyEdge>,
        missing: impl IntoIterator<Item = ( DependencyNode, MissingDependency )>,
    ) -> Result<Self, GraphError> {

        let vertices = vertices.into_iter().collect::<HashSet<_>>();
        if !vertices.contains( &root ) { return Err( GraphError::RootNotInVertices( root.id().to_string() ))}

        let edges = edges.into_iter()
            .map(| edge | match edge {
                edge if edge.from == edge.to => Err( GraphError::SelfLoop( edge.from.id().to_string() )),
                edge if !vertices.contains( &edge.from ) || !vertices.contains( &edge.to ) =>
                    Err( GraphError::DanglingEdge( edge.to_string() )),
                edge => Ok( edge ),
            })
            .collect::<Result<HashSet<_>, _>>()?;

        let missing = missing.into_iter()
            .try_fold( HashMap::<_, HashSet<_>>::new(), | mut missing, ( node, dependency )| {
                if !vertices.contains( &node ) { return Err( GraphError::UnknownMissingOwner( node.id().to_string() ))}
                missing.entry( node ).or_default().insert( dependency );
                Ok( missing )
            })?;

        Ok( Self::new_unchecked( root, vertices, edges, missing ))

    }

    /// Used by the builder, which upholds the invariants by construction.
    pub(crate) fn new_unchecked(
        root: DependencyNode,
        vertices: HashSet<DependencyNode>,
        edges: HashSet<DependencyEdge>,
        missing: HashMap<DependencyNode, HashSet<MissingDependency>>,
    ) -> Self {
        debug_assert!( vertices.contains( &root ));
        debug_assert!( edges.iter().all(| edge | edge.from != edge.to ));
        debug_assert!( missing.keys().all(| node | vertices.contains( node )));

        let outgoing = edges.iter()
            .map(| edge | ( edge.from.clone(), edge.clone() ))
            .into_group_map()
            .into_iter()
            .map(|( from, edges )| ( from, edges.into_iter()
                .sorted_by(| a, b | a.to.id().cmp( b.to.id() ).then_with(|| a.descriptor.cmp( &b.descriptor )))
                .collect::<Vec<_>>() ))
            .collect::<HashMap<_, _>>();

        let adjacency = outgoing.iter()
            .map(|( from, edges )| ( from.clone(), edges.iter()
                .map(| edge | edge.to.clone() )
                .dedup()
                .collect() ))
            .collect();

        Self { root, vertices, edges, missing, outgoing, adjacency }
    }

    /// The plugin the graph was built for.
    #[inline] pub fn root( &self ) -> &DependencyNode { &self.root }

    /// All vertices, the root included.
    #[inline] pub fn vertices( &self ) -> &HashSet<DependencyNode> { &self.vertices }

    /// All edges.
    #[inline] pub fn edges( &self ) -> &HashSet<DependencyEdge> { &self.edges }

    /// Whether a node with this id is a vertex.
    pub fn contains( &self, id: &str ) -> bool {
        self.vertices.contains( &DependencyNode::new( id, "" ))
    }

    /// Looks up the vertex with this id.
    pub fn vertex( &self, id: &str ) -> Option<&DependencyNode> {
        self.vertices.get( &DependencyNode::new( id, "" ))
    }

    /// Missing dependencies declared by `node`; empty if it has none.
    pub fn missing_dependencies( &self, node: &DependencyNode ) -> impl Iterator<Item = &MissingDependency> {
        self.missing.get( node ).into_iter().flatten()
    }

    /// Every node with at least one missing dependency.
    #[inline] pub fn missing_by_node( &self ) -> &HashMap<DependencyNode, HashSet<MissingDependency>> { &self.missing }

    /// Whether any node has a missing dependency.
    pub fn has_missing_dependencies( &self ) -> bool {
        self.missing.values().any(| set | !set.is_empty() )
    }

    /// Nodes `node` has an edge to, sorted by id.
    pub fn successors( &self, node: &DependencyNode ) -> &[DependencyNode] {
        self.adjacency.get( node ).map_or( &[], Vec::as_slice )
    }

    /// Edges leaving `node`, sorted by target id, then by descriptor.
    pub fn edges_from( &self, node: &DependencyNode ) -> &[DependencyEdge] {
        self.outgoing.get( node ).map_or( &[], Vec::as_slice )
    }

    /// Elementary cycles through the root. See [`crate::find_cycles`].
    #[inline] pub fn find_cycles( &self ) -> Vec<Vec<DependencyNode>> { crate::cycles::find_cycles( self ) }

    /// Root-to-node paths for every missing dependency. See [`crate::find_missing_dependency_paths`].
    #[inline] pub fn find_missing_dependency_paths( &self ) -> Vec<MissingDependencyPath> {
        crate::missing_paths::find_missing_dependency_paths( self )
    }

    /// Human-readable tree rendering of the graph.
    #[inline] pub fn pretty_print( &self ) -> PrettyPrinter<'_> { PrettyPrinter::new( self ) }

}
