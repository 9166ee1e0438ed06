use std::collections::{ HashMap, HashSet };
use std::sync::Arc ;
use tokio_util::sync::CancellationToken ;
use tracing::{ trace, warn };

use crate::descriptor::DependencyDescriptor ;
use crate::finder::DependencyFinder ;
use crate::graph::{ DependenciesGraph, DependencyEdge, DependencyNode, Interner, MissingDependency };
use crate::plugin::PluginData ;
use super::BuildError ;



/// A dependency waiting to be resolved from the node of its frame.
pub(super) enum Pending<P> {
    /// Resolved through the finder; a miss is recorded on the dependent node.
    Declared( Arc<DependencyDescriptor> ),
    /// Injected with the plugin already known.
    Bundled( Arc<DependencyDescriptor>, Arc<P> ),
}

/// One level of the explicit depth-first stack. `pending` is kept in
/// reverse so the next dependency is popped off the end.
struct Frame<P> {
    node: DependencyNode,
    pending: Vec<Pending<P>>,
}

impl<P> Frame<P> {
    fn new( node: DependencyNode, mut pending: Vec<Pending<P>> ) -> Self {
        pending.reverse();
        Self { node, pending }
    }
}

/// Working state of a single build. Owned exclusively by one build; the
/// finder and the interner are the only shared parts.
pub(super) struct Traversal<'a, F: DependencyFinder> {
    finder: &'a F,
    interner: &'a Interner,
    cancellation: &'a CancellationToken,
    root: DependencyNode,
    /// id -> node handed out during this build
    nodes: HashMap<Arc<str>, DependencyNode>,
    /// nodes whose dependencies were (or are being) expanded
    visited: HashSet<DependencyNode>,
    vertices: HashSet<DependencyNode>,
    edges: HashSet<DependencyEdge>,
    missing: HashMap<DependencyNode, HashSet<MissingDependency>>,
}

impl<'a, F: DependencyFinder> Traversal<'a, F> {

    pub(super) fn new(
        finder: &'a F,
        interner: &'a Interner,
        cancellation: &'a CancellationToken,
        root: &F::Plugin,
    ) -> Self {
        let root = interner.node( root.id(), root.version() );
        let mut traversal = Self {
            finder,
            interner,
            cancellation,
            root: root.clone(),
            nodes: HashMap::new(),
            visited: HashSet::from([ root.clone() ]),
            vertices: HashSet::from([ root.clone() ]),
            edges: HashSet::new(),
            missing: HashMap::new(),
        };
        traversal.nodes.insert( Arc::from( root.id() ), root );
        traversal
    }

    /// Expands the root's declared dependencies.
    pub(super) fn run( &mut self, declared: &[DependencyDescriptor] ) -> Result<(), BuildError<F::Error>> {
        let pending = self.declared( declared );
        self.run_pending( pending )
    }

    /// Expands `pending` as dependencies of the root, then everything they pull in.
    pub(super) fn run_pending( &mut self, pending: Vec<Pending<F::Plugin>> ) -> Result<(), BuildError<F::Error>> {

        let mut stack = vec![ Frame::new( self.root.clone(), pending )];

        loop {
            self.check_cancelled()?;

            let Some( frame ) = stack.last_mut() else { break };
            let Some( pending ) = frame.pending.pop() else {
                stack.pop();
                continue ;
            };
            let current = frame.node.clone();

            let Some(( descriptor, plugin )) = self.resolve( &current, pending )? else { continue };
            if let Some( child ) = self.connect( &current, &descriptor, &plugin )? {
                let pending = self.declared( plugin.dependencies() );
                stack.push( Frame::new( child, pending ));
            }
        }

        Ok(())

    }

    /// Whether the root already has an edge to the plugin `id`.
    pub(super) fn root_depends_on( &self, id: &str ) -> bool {
        self.edges.iter().any(| edge | *edge.from() == self.root && edge.to().id() == id )
    }

    pub(super) fn finish( self ) -> DependenciesGraph {
        DependenciesGraph::new_unchecked( self.root, self.vertices, self.edges, self.missing )
    }

    fn declared( &self, descriptors: &[DependencyDescriptor] ) -> Vec<Pending<F::Plugin>> {
        descriptors.iter()
            .map(| descriptor | Pending::Declared( self.interner.descriptor( descriptor )))
            .collect()
    }

    fn check_cancelled( &self ) -> Result<(), BuildError<F::Error>> {
        if self.cancellation.is_cancelled() {
            warn!( root = %self.root.id(), "dependency graph build cancelled" );
            return Err( BuildError::Interrupted );
        }
        Ok(())
    }

    /// Runs the finder for a pending dependency. `None` means nothing to connect.
    #[allow( clippy::type_complexity )]
    fn resolve(
        &mut self,
        current: &DependencyNode,
        pending: Pending<F::Plugin>,
    ) -> Result<Option<( Arc<DependencyDescriptor>, Arc<F::Plugin> )>, BuildError<F::Error>> {

        let descriptor = match pending {
            Pending::Bundled( descriptor, plugin ) => return Ok( Some(( descriptor, plugin ))),
            Pending::Declared( descriptor ) => descriptor,
        };

        self.check_cancelled()?;
        let result = self.finder.find_dependency( &descriptor ).map_err( BuildError::Finder )?;

        match result.into_plugin() {
            Ok( plugin ) => Ok( Some(( descriptor, plugin ))),
            Err( reason ) => {
                trace!( from = %current.id(), dependency = %descriptor, %reason, "missing dependency" );
                self.missing.entry( current.clone() )
                    .or_default()
                    .insert( MissingDependency::new( descriptor, reason ));
                Ok( None )
            },
        }

    }

    /// Adds the edge `current -> plugin`. Returns the plugin's node if it
    /// still has to be expanded.
    fn connect(
        &mut self,
        current: &DependencyNode,
        descriptor: &Arc<DependencyDescriptor>,
        plugin: &F::Plugin,
    ) -> Result<Option<DependencyNode>, BuildError<F::Error>> {

        if plugin.id().is_empty() {
            warn!( from = %current.id(), dependency = %descriptor, "finder returned a plugin without id" );
            return Err( BuildError::InvalidPluginId {
                dependent: current.id().to_string(),
                descriptor: DependencyDescriptor::clone( descriptor ),
            });
        }

        let target = self.node( plugin.id(), plugin.version() );

        if target == *current {
            // A module of this plugin pointing back at the plugin. Not a cycle,
            // but the module itself still shows up as a vertex.
            if descriptor.is_module() && descriptor.id() != current.id() {
                let module = self.node( descriptor.id(), plugin.version() );
                trace!( plugin = %current.id(), module = %module.id(), "self-dependency elided" );
                self.vertices.insert( module );
            }
            return Ok( None );
        }

        trace!( from = %current.id(), to = %target.id(), dependency = %descriptor, "edge" );
        self.edges.insert( self.interner.edge( current, &target, descriptor ));
        self.vertices.insert( target.clone() );

        Ok( match self.visited.insert( target.clone() ) {
            true => Some( target ),
            false => None,
        })

    }

    /// Node for `id`, reused for the whole build once handed out.
    fn node( &mut self, id: &str, version: &str ) -> DependencyNode {
        if let Some( node ) = self.nodes.get( id ) { return node.clone() }
        let node = self.interner.node( id, version );
        self.nodes.insert( Arc::from( id ), node.clone() );
        node
    }

}
