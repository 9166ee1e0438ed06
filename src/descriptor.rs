//! Declared dependency descriptors.
//!
//! A [`DependencyDescriptor`] is the raw declaration a plugin makes about
//! something it needs: the identifier of the target, whether the dependency
//! is optional and whether the identifier names a module rather than a plugin.
//! Descriptors are plain values; the graph builder interns them so that the
//! many edges referring to the same declaration share one allocation.

#[cfg( feature = "serde" )]
use serde::{ Deserialize, Serialize };



/// A single dependency as declared by a plugin or module.
///
/// Equality and hashing are structural: two descriptors are equal when they
/// name the same target with the same flags.
#[derive( Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord )]
#[cfg_attr( feature = "serde", derive( Serialize, Deserialize ))]
pub struct DependencyDescriptor {
    /// Identifier of the plugin or module depended on
    id: String,
    /// Whether the declaring plugin can work without the target
    #[cfg_attr( feature = "serde", serde( default ))]
    optional: bool,
    /// Whether `id` names a module instead of a plugin
    #[cfg_attr( feature = "serde", serde( default ))]
    module: bool,
}

impl DependencyDescriptor {

    /// Creates a new descriptor.
    #[inline]
    pub fn new( id: impl Into<String>, optional: bool, module: bool ) -> Self {
        Self { id: id.into(), optional, module }
    }

    /// Mandatory dependency on a plugin id.
    #[inline]
    pub fn plugin( id: impl Into<String> ) -> Self { Self::new( id, false, false )}

    /// Mandatory dependency on a module id.
    #[inline]
    pub fn module( id: impl Into<String> ) -> Self { Self::new( id, false, true )}

    /// Returns the same declaration marked optional.
    #[inline]
    pub fn optional( mut self ) -> Self {
        self.optional = true ;
        self
    }

    /// Identifier of the plugin or module depended on.
    #[inline] pub fn id( &self ) -> &str { &self.id }

    /// Whether the declaring plugin can work without the target.
    #[inline] pub fn is_optional( &self ) -> bool { self.optional }

    /// Whether the identifier names a module instead of a plugin.
    #[inline] pub fn is_module( &self ) -> bool { self.module }

}

impl std::fmt::Display for DependencyDescriptor {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        match self.module {
            true => write!( f, "module '{}'", self.id )?,
            false => write!( f, "plugin '{}'", self.id )?,
        }
        if self.optional { write!( f, " (optional)" )?; }
        Ok(())
    }
}
