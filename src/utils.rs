mod partial_success ;

pub use partial_success::PartialSuccess ;



/// Appending helpers for accumulator vectors threaded through folds.
pub(crate) trait Merge<T> {
    /// Appends one item and returns the collection.
    fn merge( self, item: T ) -> Self ;
    /// Appends every item and returns the collection.
    fn merge_all( self, items: impl IntoIterator<Item = T> ) -> Self ;
}

impl<T> Merge<T> for Vec<T> {
    #[inline] fn merge( mut self, item: T ) -> Self {
        self.push( item );
        self
    }
    #[inline] fn merge_all( mut self, items: impl IntoIterator<Item = T> ) -> Self {
        self.extend( items );
        self
    }
}
