//! Module visibility rules.
//!
//! Whether a dependency edge is *allowed* is decided from the two ends'
//! [`ModuleContext`]s, independently of graph construction:
//!
//! | Target visibility | Allowed when |
//! |-------------------|--------------|
//! | `Public`   | always |
//! | `Internal` | same owning plugin, or same namespace |
//! | `Private`  | same owning plugin |
//!
//! A plugin's main module, and every legacy module alias, is public. Modules
//! without any namespace get a synthetic one that matches nothing else.

use std::sync::Arc ;
use std::sync::atomic::{ AtomicU64, Ordering };
use pipe_trait::Pipe ;
use tracing::trace ;

use crate::descriptor::DependencyDescriptor ;
use crate::environment::Environment ;
use crate::plugin::{ ModuleVisibility, PluginData };



static SYNTHETIC_NAMESPACES: AtomicU64 = AtomicU64::new( 0 );

/// Namespace grouping modules for `Internal` access.
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub enum Namespace {
    /// A namespace declared by plugin metadata.
    Named( Arc<str> ),
    /// Stand-in for a missing namespace. Never equal to any other namespace.
    Synthetic( u64 ),
}

impl Namespace {

    #[inline] pub fn named( name: impl Into<Arc<str>> ) -> Self { Self::Named( name.into() ) }

    /// A fresh namespace distinct from every other one created in this process.
    pub fn synthetic() -> Self {
        Self::Synthetic( SYNTHETIC_NAMESPACES.fetch_add( 1, Ordering::Relaxed ))
    }

    #[inline] pub fn is_synthetic( &self ) -> bool { matches!( self, Self::Synthetic( _ )) }

    fn from_metadata( namespace: Option<&str> ) -> Self {
        namespace.map_or_else( Self::synthetic, Self::named )
    }

}

impl std::fmt::Display for Namespace {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        match self {
            Self::Named( name ) => write!( f, "{name}" ),
            Self::Synthetic( index ) => write!( f, "<synthetic #{index}>" ),
        }
    }
}

/// One end of a dependency, as far as visibility is concerned.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct ModuleContext {
    owning_plugin: Arc<str>,
    namespace: Namespace,
    visibility: ModuleVisibility,
}

impl ModuleContext {

    #[inline]
    pub fn new( owning_plugin: impl Into<Arc<str>>, namespace: Namespace, visibility: ModuleVisibility ) -> Self {
        Self { owning_plugin: owning_plugin.into(), namespace, visibility }
    }

    #[inline] pub fn owning_plugin( &self ) -> &str { &self.owning_plugin }
    #[inline] pub fn namespace( &self ) -> &Namespace { &self.namespace }
    #[inline] pub fn visibility( &self ) -> ModuleVisibility { self.visibility }

}

impl std::fmt::Display for ModuleContext {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        write!( f, "{} {} [{}]", self.visibility, self.owning_plugin, self.namespace )
    }
}

/// Context of the dependent side: `module_name` of `plugin`, or the
/// plugin's main module when `None` or unknown to the plugin.
pub fn resolve_from<P: PluginData + ?Sized>( plugin: &P, module_name: Option<&str> ) -> ModuleContext {
    match module_name.and_then(| name | plugin.module_descriptors().iter().find(| module | module.name() == name )) {
        Some( module ) => ModuleContext::new(
            plugin.id(),
            Namespace::from_metadata( module.namespace().or( plugin.namespace() )),
            module.visibility(),
        ),
        None => main_module( plugin ),
    }
}

/// Context of the dependency side, looked up in `environment`.
///
/// Returns `None` when nothing in the environment provides the target.
pub fn resolve_to<E: Environment>( environment: &E, descriptor: &DependencyDescriptor ) -> Option<ModuleContext> {

    if !descriptor.is_module() {
        return environment.find_plugin_by_id( descriptor.id() ).map(| plugin | main_module( plugin.as_ref() ))
    }

    let plugin = environment.find_plugin_by_module( descriptor.id() )?;
    let context = match plugin.module_descriptors().iter().find(| module | module.name() == descriptor.id() ) {
        Some( module ) => ModuleContext::new(
            plugin.id(),
            Namespace::from_metadata( module.namespace().or( plugin.namespace() )),
            module.visibility(),
        ),
        // legacy alias of the main module
        None => main_module( plugin.as_ref() ),
    };
    Some( context )

}

/// Whether `from` may depend on `to`.
pub fn is_access_allowed( from: &ModuleContext, to: &ModuleContext ) -> bool {
    let same_plugin = from.owning_plugin == to.owning_plugin ;
    match to.visibility {
        ModuleVisibility::Public => true,
        ModuleVisibility::Internal => same_plugin || from.namespace == to.namespace,
        ModuleVisibility::Private => same_plugin,
    }
}

/// Outcome of [`check_access`].
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum AccessVerdict {
    Allowed,
    /// The target exists but is not visible from the dependent.
    Denied { from: ModuleContext, to: ModuleContext },
    /// Nothing in the environment provides the target.
    Unresolved,
}

impl AccessVerdict {
    #[inline] pub fn is_allowed( &self ) -> bool { matches!( self, Self::Allowed ) }
}

/// Checks one declared dependency of `module_name` in `plugin` against `environment`.
pub fn check_access<E: Environment>(
    environment: &E,
    plugin: &E::Plugin,
    module_name: Option<&str>,
    descriptor: &DependencyDescriptor,
) -> AccessVerdict {

    let from = resolve_from( plugin, module_name );
    resolve_to( environment, descriptor )
        .pipe(| to | match to {
            None => AccessVerdict::Unresolved,
            Some( to ) if is_access_allowed( &from, &to ) => AccessVerdict::Allowed,
            Some( to ) => {
                trace!( %from, %to, dependency = %descriptor, "access denied" );
                AccessVerdict::Denied { from, to }
            },
        })

}

fn main_module<P: PluginData + ?Sized>( plugin: &P ) -> ModuleContext {
    ModuleContext::new(
        plugin.id(),
        Namespace::from_metadata( plugin.namespace() ),
        ModuleVisibility::Public,
    )
}
