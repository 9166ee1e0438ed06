use itertools::Itertools ;
use tracing::trace ;

use crate::descriptor::DependencyDescriptor ;
use crate::utils::Merge ;
use super::{ DependencyFinder, DependencyResult };



/// Consults several finders in order; the first answer that is not
/// [`NotFound`]( DependencyResult::NotFound ) wins.
///
/// If every finder misses, the result is a single `NotFound` whose reason joins
/// the individual reasons with `"; "`. A fault from any finder aborts the
/// lookup immediately, later finders are not consulted.
///
/// To mix finder types, box them behind a common
/// `dyn DependencyFinder<Plugin = _, Error = _>`.
#[derive( Debug, Clone )]
pub struct CompositeDependencyFinder<F> {
    finders: Vec<F>,
}

impl<F: DependencyFinder> CompositeDependencyFinder<F> {

    /// Creates a composite over `finders`, consulted in iteration order.
    pub fn new( finders: impl IntoIterator<Item = F> ) -> Self {
        Self { finders: finders.into_iter().collect() }
    }

    /// The wrapped finders in consultation order.
    #[inline] pub fn finders( &self ) -> &[F] { &self.finders }

}

impl<F: DependencyFinder> DependencyFinder for CompositeDependencyFinder<F> {

    type Plugin = F::Plugin ;
    type Error = F::Error ;

    fn find_dependency( &self, descriptor: &DependencyDescriptor )
        -> Result<DependencyResult<Self::Plugin>, Self::Error>
    {
        let mut reasons = Vec::with_capacity( self.finders.len() );
        for ( index, finder ) in self.finders.iter().enumerate() {
            match finder.find_dependency( descriptor )? {
                DependencyResult::NotFound( reason ) => reasons = reasons.merge( reason ),
                found => {
                    trace!( dependency = %descriptor, finder = index, "resolved by composite member" );
                    return Ok( found );
                },
            }
        }
        Ok( DependencyResult::NotFound( match reasons.is_empty() {
            true => format!( "No finder is able to resolve {}", descriptor ),
            false => reasons.iter().join( "; " ),
        }))
    }

}
