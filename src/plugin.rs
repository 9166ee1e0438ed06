//! Plugin metadata types.
//!
//! A plugin is an installable unit with an id, a version and a list of
//! declared dependencies. It may additionally define **modules**: named
//! sub-components that other plugins can depend on instead of depending on
//! the whole plugin. Modules carry a namespace and a [`ModuleVisibility`] that
//! decide who may access them (see [`crate::visibility`]).
//!
//! Parsing plugin packages is not this crate's business; callers describe
//! their plugins by implementing [`PluginData`] on whatever they parsed.

#[cfg( feature = "serde" )]
use serde::{ Deserialize, Serialize };

use crate::descriptor::DependencyDescriptor ;



/// Trait for accessing plugin metadata from a user-defined source.
///
/// Implement this trait on the type your plugin descriptor parser produces.
/// The graph builder only ever reads through this trait, so implementations
/// can be backed by anything: parsed manifests, a database row, or a test
/// fixture.
///
/// A plugin's *main module* is the plugin itself, referenced by its plugin id.
/// Content modules are listed by [`module_descriptors`]( Self::module_descriptors ),
/// legacy module aliases (ids the plugin provides without a descriptor) by
/// [`defined_modules`]( Self::defined_modules ).
///
/// # Example
///
/// ```
/// use plugin_deps::{ PluginData, DependencyDescriptor };
///
/// struct Manifest { id: String, version: String, depends: Vec<DependencyDescriptor> }
///
/// impl PluginData for Manifest {
///     fn id( &self ) -> &str { &self.id }
///     fn version( &self ) -> &str { &self.version }
///     fn dependencies( &self ) -> &[DependencyDescriptor] { &self.depends }
/// }
/// ```
pub trait PluginData {

    /// Unique identifier of the plugin. Must not be empty.
    fn id( &self ) -> &str ;

    /// Version string. Informational only; it never takes part in identity.
    fn version( &self ) -> &str ;

    /// Dependencies in declaration order.
    fn dependencies( &self ) -> &[DependencyDescriptor] ;

    /// Module ids this plugin provides without a module descriptor.
    fn defined_modules( &self ) -> &[String] { &[] }

    /// Content modules declared by this plugin.
    fn module_descriptors( &self ) -> &[ModuleDescriptor] { &[] }

    /// Namespace assigned to the plugin, if any.
    ///
    /// Content modules without a namespace of their own inherit this one.
    fn namespace( &self ) -> Option<&str> { None }

    /// Whether this plugin opts into the host's shared classloader.
    ///
    /// Only meaningful for plugins bundled with the environment: such plugins
    /// are visible to every other plugin regardless of declared dependencies.
    fn uses_shared_classloader( &self ) -> bool { false }

}

impl<P: PluginData + ?Sized> PluginData for std::sync::Arc<P> {
    #[inline] fn id( &self ) -> &str { ( **self ).id() }
    #[inline] fn version( &self ) -> &str { ( **self ).version() }
    #[inline] fn dependencies( &self ) -> &[DependencyDescriptor] { ( **self ).dependencies() }
    #[inline] fn defined_modules( &self ) -> &[String] { ( **self ).defined_modules() }
    #[inline] fn module_descriptors( &self ) -> &[ModuleDescriptor] { ( **self ).module_descriptors() }
    #[inline] fn namespace( &self ) -> Option<&str> { ( **self ).namespace() }
    #[inline] fn uses_shared_classloader( &self ) -> bool { ( **self ).uses_shared_classloader() }
}

/// Access level of a content module.
///
/// | Visibility | Accessible from |
/// |------------|-----------------|
/// | `Public`   | everyone |
/// | `Internal` | the owning plugin and modules sharing its namespace |
/// | `Private`  | the owning plugin only |
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash, Default )]
#[cfg_attr( feature = "serde", derive( Serialize, Deserialize ), serde( rename_all = "lowercase" ))]
pub enum ModuleVisibility {
    /// Accessible from anywhere.
    Public,
    /// Accessible from the same plugin or the same namespace.
    Internal,
    /// Accessible from the owning plugin only.
    #[default] Private,
}

impl std::fmt::Display for ModuleVisibility {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {
        match self {
            Self::Public => write!( f, "public" ),
            Self::Internal => write!( f, "internal" ),
            Self::Private => write!( f, "private" ),
        }
    }
}

/// A content module declared by a plugin.
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
#[cfg_attr( feature = "serde", derive( Serialize, Deserialize ))]
pub struct ModuleDescriptor {
    /// Module name, used as the module's id in dependency declarations
    name: String,
    /// Namespace of the module; falls back to the plugin's namespace
    #[cfg_attr( feature = "serde", serde( default ))]
    namespace: Option<String>,
    /// Who may depend on this module
    #[cfg_attr( feature = "serde", serde( default ))]
    visibility: ModuleVisibility,
}

impl ModuleDescriptor {

    /// Creates a module descriptor.
    #[inline]
    pub fn new(
        name: impl Into<String>,
        namespace: Option<String>,
        visibility: ModuleVisibility,
    ) -> Self {
        Self { name: name.into(), namespace, visibility }
    }

    /// Module name.
    #[inline] pub fn name( &self ) -> &str { &self.name }

    /// Namespace declared on the module itself.
    #[inline] pub fn namespace( &self ) -> Option<&str> { self.namespace.as_deref() }

    /// Declared visibility.
    #[inline] pub fn visibility( &self ) -> ModuleVisibility { self.visibility }

}
