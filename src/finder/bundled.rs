use std::convert::Infallible ;
use tracing::trace ;

use crate::descriptor::DependencyDescriptor ;
use crate::environment::Environment ;
use super::{ DependencyFinder, DependencyResult };



/// Resolves dependencies against the plugins bundled with an environment.
///
/// Plugin descriptors are looked up by plugin id, module descriptors by the
/// module they name. A miss is reported as [`DependencyResult::NotFound`]
/// naming the environment; this finder never fails.
#[derive( Debug, Clone )]
pub struct BundledDependencyFinder<E> {
    environment: E,
}

impl<E: Environment> BundledDependencyFinder<E> {

    /// Creates a finder over `environment`. Pass a reference to share one environment.
    #[inline] pub fn new( environment: E ) -> Self { Self { environment }}

    /// The environment dependencies are resolved against.
    #[inline] pub fn environment( &self ) -> &E { &self.environment }

}

impl<E: Environment> DependencyFinder for BundledDependencyFinder<E> {

    type Plugin = E::Plugin ;
    type Error = Infallible ;

    fn find_dependency( &self, descriptor: &DependencyDescriptor )
        -> Result<DependencyResult<Self::Plugin>, Self::Error>
    {
        let found = match descriptor.is_module() {
            true => self.environment.find_plugin_by_module( descriptor.id() ),
            false => self.environment.find_plugin_by_id( descriptor.id() ),
        };
        trace!( dependency = %descriptor, found = found.is_some(), "bundled lookup" );
        Ok( match found {
            Some( plugin ) => DependencyResult::Resolved( plugin ),
            None if descriptor.is_module() => DependencyResult::NotFound( format!(
                "Module '{}' is not provided by any plugin bundled with {}",
                descriptor.id(), self.environment.version(),
            )),
            None => DependencyResult::NotFound( format!(
                "Plugin '{}' is not bundled with {}",
                descriptor.id(), self.environment.version(),
            )),
        })
    }

}
