//! Dependency resolution graphs for host application plugins.
//!
//! A plugin declares dependencies on other plugins and on **modules**, named
//! sub-components of plugins. Before a plugin can be verified against a host
//! environment, its declarations have to be turned into a graph: which
//! dependencies resolve, to what, what is missing, and whether anything loops
//! back to the plugin itself. `plugin_deps` builds that graph and answers
//! those questions.
//!
//! # Core Concepts
//!
//! - [`PluginData`]: Read access to a plugin's metadata. Implement it on
//! 	whatever your manifest parser produces.
//!
//! - [`Environment`]: The host the plugin is verified against, with its
//! 	bundled plugins. [`Ide`] is an in-memory implementation.
//!
//! - [`DependencyFinder`]: A resolution strategy turning a
//! 	[`DependencyDescriptor`] into a plugin or a reason it is missing.
//! 	[`BundledDependencyFinder`] and [`CompositeDependencyFinder`] are provided.
//!
//! - [`DependenciesGraphBuilder`]: Resolves a root plugin's transitive
//! 	dependencies into a [`DependenciesGraph`], applying the implicit
//! 	dependency rules of its [`GraphBuilderConfig`].
//!
//! - [`DependenciesGraph`]: The immutable result. Unresolved dependencies are
//! 	recorded on the node that declared them as [`MissingDependency`]s; they
//! 	never abort a build.
//!
//! - Reports: [`find_cycles`] lists the cycles through the root,
//! 	[`find_missing_dependency_paths`] explains how the root reaches each
//! 	missing dependency, and [`visibility`] decides whether an edge is allowed
//! 	by module visibility.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc ;
//! use plugin_deps::{
//! 	BundledDependencyFinder, DependenciesGraphBuilder, DependencyDescriptor,
//! 	GraphBuilderConfig, Ide, PluginData,
//! };
//!
//! struct Plugin { id: &'static str, depends: Vec<DependencyDescriptor> }
//!
//! impl PluginData for Plugin {
//! 	fn id( &self ) -> &str { self.id }
//! 	fn version( &self ) -> &str { "1.0" }
//! 	fn dependencies( &self ) -> &[DependencyDescriptor] { &self.depends }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The host ships `json` and `yaml`; `yaml` needs `json`.
//! let ( ide, errors ) = Ide::new( "IU-241.1", [
//! 	Arc::new( Plugin { id: "json", depends: vec![] }),
//! 	Arc::new( Plugin { id: "yaml", depends: vec![ DependencyDescriptor::plugin( "json" )] }),
//! ]);
//! assert!( errors.is_empty() );
//!
//! // The plugin under verification depends on `yaml`, and optionally on
//! // something the host does not have.
//! let root = Plugin { id: "my.plugin", depends: vec![
//! 	DependencyDescriptor::plugin( "yaml" ),
//! 	DependencyDescriptor::plugin( "toml" ).optional(),
//! ]};
//!
//! let builder = DependenciesGraphBuilder::new( BundledDependencyFinder::new( &ide ))
//! 	.with_config( GraphBuilderConfig::explicit_only() );
//! let graph = builder.build( &root, &ide )?;
//!
//! assert_eq!( graph.vertices().len(), 3 );
//! assert!( graph.find_cycles().is_empty() );
//!
//! let paths = graph.find_missing_dependency_paths();
//! assert_eq!( paths.len(), 1 );
//! assert_eq!( paths[0].missing().descriptor().id(), "toml" );
//!
//! println!( "{}", graph.pretty_print() );
//! # Ok(())
//! # }
//! ```
//!
//! # Implicit Dependencies
//!
//! Two rules add dependencies the root never declared. Both are switched on
//! by default and neither applies when the root is the host's core plugin.
//!
//! - **Legacy API**: a root without any module dependency, in an environment
//! 	that exposes [`ALL_MODULES_MARKER`], gets an optional dependency on the
//! 	legacy API plugin. If it does not resolve, it is reported as an optional
//! 	missing dependency of the root.
//! - **Shared classloader**: the root depends on every bundled plugin that
//! 	[uses the shared classloader]( PluginData::uses_shared_classloader ),
//! 	unless the root's own declarations already connected it.
//!
//! # Concurrency
//!
//! A build is single threaded and owns its working state. Builds of different
//! plugins can run in parallel, sharing a finder by reference and an
//! [`Interner`] through an `Arc`. Builds can be cancelled through a
//! `tokio_util` [`CancellationToken`]( tokio_util::sync::CancellationToken ).

mod builder ;
mod config ;
mod cycles ;
mod descriptor ;
mod environment ;
mod finder ;
mod graph ;
mod missing_paths ;
mod plugin ;
mod utils ;
pub mod visibility ;

#[doc( no_inline )]
pub use nonempty_collections::NEVec ;
#[doc( no_inline )]
pub use tokio_util::sync::CancellationToken ;

pub use builder::{ DependenciesGraphBuilder, BuildError };
pub use config::{ GraphBuilderConfig, DEFAULT_CORE_PLUGIN_ID, DEFAULT_LEGACY_API_PLUGIN_ID };
pub use cycles::find_cycles ;
pub use descriptor::DependencyDescriptor ;
pub use environment::{ Environment, Ide, IdeError, ALL_MODULES_MARKER };
pub use finder::{
	DependencyFinder, DependencyResult, PluginDetailsResult,
	BundledDependencyFinder, CompositeDependencyFinder,
};
pub use graph::{
	DependenciesGraph, DependencyNode, DependencyEdge, MissingDependency,
	MissingDependencyPath, GraphError, Interner, PrettyPrinter,
};
pub use missing_paths::find_missing_dependency_paths ;
pub use plugin::{ PluginData, ModuleDescriptor, ModuleVisibility };
pub use utils::PartialSuccess ;
