//! Dependency graph construction.
//!
//! The [`DependenciesGraphBuilder`] resolves a root plugin's transitive
//! dependencies through a [`DependencyFinder`] into a [`DependenciesGraph`]:
//!
//! 1. Starting at the root, every declared dependency of the current node is
//! 	resolved. A newly discovered plugin is expanded depth-first before the
//! 	current node's remaining dependencies.
//! 2. Unresolved dependencies become [`MissingDependency`]( crate::MissingDependency )
//! 	records on the declaring node; no vertex or edge is created for them.
//! 3. A dependency resolving back to the declaring node creates no edge.
//! 4. After the declared dependencies, the implicit dependency rules of the
//! 	[`GraphBuilderConfig`] add edges from the root (never for the core plugin).
//!
//! Nodes are memoised by id, so diamonds converge on one vertex and cycles
//! terminate. The traversal keeps its own work stack instead of recursing, so
//! the depth of a dependency chain is bounded by heap, not by call stack.

mod implicit ;
mod traversal ;

use std::sync::Arc ;
use thiserror::Error ;
use tokio_util::sync::CancellationToken ;
use tracing::{ debug, warn };

use crate::config::GraphBuilderConfig ;
use crate::descriptor::DependencyDescriptor ;
use crate::environment::Environment ;
use crate::finder::DependencyFinder ;
use crate::graph::{ DependenciesGraph, Interner };
use crate::plugin::PluginData ;
use traversal::Traversal ;



/// Errors that abort a graph build.
///
/// Unresolvable dependencies are *not* errors; they are recorded on the graph.
/// Every variant here means no graph is produced at all.
#[derive( Debug, Error )]
pub enum BuildError<E: std::error::Error + 'static> {

    /// The cancellation token fired before the build completed.
    #[error( "Dependency graph build was interrupted" )]
    Interrupted,

    /// The dependency finder failed to answer.
    #[error( "Dependency finder failed: {0}" )]
    Finder( E ),

    /// The root plugin has an empty id.
    #[error( "Root plugin has an empty id" )]
    EmptyRootId,

    /// The finder resolved a dependency to a plugin with an empty id.
    #[error( "{descriptor} of '{dependent}' resolved to a plugin with an empty id" )]
    InvalidPluginId { dependent: String, descriptor: DependencyDescriptor },

}

/// Builds [`DependenciesGraph`]s with a given resolution strategy.
///
/// A builder holds no per-build state, so one builder can serve many builds,
/// and builders on different threads can share an [`Interner`].
///
/// # Example
///
/// ```
/// use std::sync::Arc ;
/// use plugin_deps::{
///     DependenciesGraphBuilder, BundledDependencyFinder, DependencyDescriptor, Ide, PluginData,
/// };
///
/// struct Plugin( &'static str, Vec<DependencyDescriptor> );
/// impl PluginData for Plugin {
///     fn id( &self ) -> &str { self.0 }
///     fn version( &self ) -> &str { "1.0" }
///     fn dependencies( &self ) -> &[DependencyDescriptor] { &self.1 }
/// }
///
/// let ( ide, _ ) = Ide::new( "IU-241", [ Arc::new( Plugin( "lib", vec![] ))]);
/// let root = Plugin( "app", vec![ DependencyDescriptor::plugin( "lib" ), DependencyDescriptor::plugin( "gone" ).optional() ]);
///
/// let builder = DependenciesGraphBuilder::new( BundledDependencyFinder::new( &ide ));
/// let graph = builder.build( &root, &ide ).unwrap();
///
/// assert!( graph.contains( "lib" ));
/// assert_eq!( graph.edges().len(), 1 );
/// assert_eq!( graph.missing_dependencies( graph.root() ).count(), 1 );
/// ```
#[derive( Debug )]
pub struct DependenciesGraphBuilder<F> {
    finder: F,
    config: GraphBuilderConfig,
    interner: Arc<Interner>,
    cancellation: CancellationToken,
}

impl<F: DependencyFinder> DependenciesGraphBuilder<F> {

    /// Creates a builder with the default configuration and a private interner.
    pub fn new( finder: F ) -> Self {
        Self {
            finder,
            config: GraphBuilderConfig::default(),
            interner: Arc::new( Interner::new() ),
            cancellation: CancellationToken::new(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config( mut self, config: GraphBuilderConfig ) -> Self {
        self.config = config ;
        self
    }

    /// Shares interning tables with other builders.
    pub fn with_interner( mut self, interner: Arc<Interner> ) -> Self {
        self.interner = interner ;
        self
    }

    /// Makes builds abort with [`BuildError::Interrupted`] once `token` is cancelled.
    pub fn with_cancellation( mut self, token: CancellationToken ) -> Self {
        self.cancellation = token ;
        self
    }

    /// The strategy used to resolve descriptors.
    #[inline] pub fn finder( &self ) -> &F { &self.finder }
    /// The implicit dependency rules applied to every root.
    #[inline] pub fn config( &self ) -> &GraphBuilderConfig { &self.config }
    /// The interning tables, shareable with other builders through [`Self::with_interner`].
    #[inline] pub fn interner( &self ) -> &Arc<Interner> { &self.interner }

    /// Resolves the transitive dependencies of `root` in `environment`.
    ///
    /// # Errors
    /// - [`BuildError::Interrupted`] if the cancellation token fires
    /// - [`BuildError::Finder`] if the finder fails (not retried)
    /// - [`BuildError::EmptyRootId`] / [`BuildError::InvalidPluginId`] if a plugin without an id shows up
    #[tracing::instrument( level = "debug", skip_all, fields( root = %root.id(), environment = %environment.version() ))]
    pub fn build<E>(
        &self,
        root: &F::Plugin,
        environment: &E,
    ) -> Result<DependenciesGraph, BuildError<F::Error>>
    where
        E: Environment<Plugin = F::Plugin>,
    {

        if root.id().is_empty() {
            warn!( "refusing to build a graph for a plugin without id" );
            return Err( BuildError::EmptyRootId );
        }

        let mut traversal = Traversal::new( &self.finder, &self.interner, &self.cancellation, root );
        traversal.run( root.dependencies() )?;

        let implicit = implicit::implicit_dependencies(
            &self.config,
            &self.interner,
            root,
            environment,
            | id | traversal.root_depends_on( id ),
        );
        if !implicit.is_empty() {
            debug!( count = implicit.len(), "expanding implicit dependencies" );
            traversal.run_pending( implicit )?;
        }

        let graph = traversal.finish();
        debug!(
            vertices = graph.vertices().len(),
            edges = graph.edges().len(),
            missing = graph.missing_by_node().values().map( std::collections::HashSet::len ).sum::<usize>(),
            "dependency graph built",
        );
        Ok( graph )

    }

}
