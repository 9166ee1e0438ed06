//! Dependency resolution strategies.
//!
//! A [`DependencyFinder`] turns a [`DependencyDescriptor`] into either a plugin
//! or a reason why none could be found. The graph builder is agnostic of where
//! plugins come from; it only consumes [`DependencyResult`]s.
//!
//! Two stock strategies are provided:
//! - [`BundledDependencyFinder`] resolves against the plugins bundled with an
//! 	[`Environment`]( crate::Environment ).
//! - [`CompositeDependencyFinder`] chains several finders, first hit wins.

mod bundled ;
mod composite ;

pub use bundled::BundledDependencyFinder ;
pub use composite::CompositeDependencyFinder ;

use std::sync::Arc ;

use crate::descriptor::DependencyDescriptor ;
use crate::plugin::PluginData ;



/// Outcome of resolving a single dependency.
#[derive( Debug )]
pub enum DependencyResult<P> {
    /// The dependency resolved to a plugin.
    Resolved( Arc<P> ),
    /// The strategy fetched full plugin details, which may themselves be unusable.
    ResolvedWithDetails( PluginDetailsResult<P> ),
    /// Nothing matched the descriptor.
    NotFound( String ),
}

/// Outcome of fetching the full details of a resolved plugin.
#[derive( Debug )]
pub enum PluginDetailsResult<P> {
    /// Details are available and valid.
    Provided( Arc<P> ),
    /// The plugin was found but is structurally invalid.
    InvalidPlugin( String ),
    /// The plugin vanished between lookup and fetch.
    NotFound( String ),
    /// The plugin could not be fetched.
    FailedToDownload( String ),
}

impl<P> DependencyResult<P> {

    /// Collapses the outcome into the resolved plugin or the reason it is missing.
    ///
    /// A details result that failed for any reason counts as unresolved, with
    /// the details' own message as the reason.
    pub fn into_plugin( self ) -> Result<Arc<P>, String> {
        match self {
            Self::Resolved( plugin ) => Ok( plugin ),
            Self::ResolvedWithDetails( PluginDetailsResult::Provided( plugin )) => Ok( plugin ),
            Self::ResolvedWithDetails( PluginDetailsResult::InvalidPlugin( reason )) => Err( reason ),
            Self::ResolvedWithDetails( PluginDetailsResult::NotFound( reason )) => Err( reason ),
            Self::ResolvedWithDetails( PluginDetailsResult::FailedToDownload( reason )) => Err( reason ),
            Self::NotFound( reason ) => Err( reason ),
        }
    }

    /// Returns `true` for [`NotFound`]( Self::NotFound ).
    #[inline] pub fn is_not_found( &self ) -> bool { matches!( self, Self::NotFound( _ )) }

}

/// A pluggable dependency resolution strategy.
///
/// Returning [`DependencyResult::NotFound`] is the normal way to report a
/// missing dependency; it is recorded on the graph and traversal continues.
/// Returning `Err` signals that the strategy itself is broken and aborts the
/// whole build.
///
/// Strategies are shared between concurrent builds by reference, so any
/// caching they do must be thread-safe on its own terms.
pub trait DependencyFinder {

    /// Plugin metadata type produced by this strategy.
    type Plugin: PluginData ;

    /// Fault raised when the strategy cannot answer at all.
    type Error: std::error::Error + 'static ;

    /// Resolves a single descriptor.
    ///
    /// # Errors
    /// Implementations fail only on faults that make an answer impossible,
    /// never because the dependency does not exist.
    fn find_dependency( &self, descriptor: &DependencyDescriptor )
        -> Result<DependencyResult<Self::Plugin>, Self::Error> ;

}

impl<F: DependencyFinder + ?Sized> DependencyFinder for &F {
    type Plugin = F::Plugin ;
    type Error = F::Error ;
    #[inline] fn find_dependency( &self, descriptor: &DependencyDescriptor )
        -> Result<DependencyResult<Self::Plugin>, Self::Error>
    {
        ( **self ).find_dependency( descriptor )
    }
}

impl<F: DependencyFinder + ?Sized> DependencyFinder for Box<F> {
    type Plugin = F::Plugin ;
    type Error = F::Error ;
    #[inline] fn find_dependency( &self, descriptor: &DependencyDescriptor )
        -> Result<DependencyResult<Self::Plugin>, Self::Error>
    {
        ( **self ).find_dependency( descriptor )
    }
}

impl<F: DependencyFinder + ?Sized> DependencyFinder for Arc<F> {
    type Plugin = F::Plugin ;
    type Error = F::Error ;
    #[inline] fn find_dependency( &self, descriptor: &DependencyDescriptor )
        -> Result<DependencyResult<Self::Plugin>, Self::Error>
    {
        ( **self ).find_dependency( descriptor )
    }
}
