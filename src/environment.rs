//! Target environment the plugin is verified against.
//!
//! The environment (the host application, or "IDE") ships its own set of
//! bundled plugins. Dependencies are resolved against it, and two implicit
//! dependency rules of the graph builder depend on what it contains.

use std::collections::HashMap ;
use std::sync::Arc ;
use itertools::Itertools ;
use thiserror::Error ;

use crate::plugin::PluginData ;
use crate::utils::{ PartialSuccess, Merge };



/// Module id whose presence marks an environment that provides "all modules".
///
/// Plugins that declare no module dependencies at all were historically only
/// compatible with such environments.
pub const ALL_MODULES_MARKER: &str = "com.intellij.modules.all" ;

/// Trait for accessing the target environment.
///
/// Lookups have default implementations that scan
/// [`bundled_plugins`]( Self::bundled_plugins ); implementations with an index
/// should override them.
pub trait Environment {

    /// Plugin metadata type of the bundled plugins.
    type Plugin: PluginData ;

    /// Version of the environment, e.g. a build number.
    fn version( &self ) -> &str ;

    /// Plugins shipped with the environment.
    fn bundled_plugins( &self ) -> &[Arc<Self::Plugin>] ;

    /// Whether the environment exposes the [`ALL_MODULES_MARKER`] module.
    fn has_all_modules_marker( &self ) -> bool {
        self.find_plugin_by_module( ALL_MODULES_MARKER ).is_some()
    }

    /// Finds a bundled plugin by its plugin id.
    fn find_plugin_by_id( &self, id: &str ) -> Option<Arc<Self::Plugin>> {
        self.bundled_plugins().iter().find(| plugin | plugin.id() == id ).cloned()
    }

    /// Finds the bundled plugin that provides a module, either as a content
    /// module or as a legacy module alias.
    fn find_plugin_by_module( &self, module_id: &str ) -> Option<Arc<Self::Plugin>> {
        self.bundled_plugins().iter()
            .find(| plugin | provides_module( plugin.as_ref(), module_id ))
            .cloned()
    }

}

impl<E: Environment + ?Sized> Environment for &E {
    type Plugin = E::Plugin ;
    #[inline] fn version( &self ) -> &str { ( **self ).version() }
    #[inline] fn bundled_plugins( &self ) -> &[Arc<Self::Plugin>] { ( **self ).bundled_plugins() }
    #[inline] fn has_all_modules_marker( &self ) -> bool { ( **self ).has_all_modules_marker() }
    #[inline] fn find_plugin_by_id( &self, id: &str ) -> Option<Arc<Self::Plugin>> { ( **self ).find_plugin_by_id( id ) }
    #[inline] fn find_plugin_by_module( &self, module_id: &str ) -> Option<Arc<Self::Plugin>> {
        ( **self ).find_plugin_by_module( module_id )
    }
}

#[inline] fn provides_module<P: PluginData + ?Sized>( plugin: &P, module_id: &str ) -> bool {
    plugin.defined_modules().iter().any(| module | module == module_id )
        || plugin.module_descriptors().iter().any(| module | module.name() == module_id )
}

/// Entries rejected while indexing an [`Ide`].
#[derive( Debug, Error, PartialEq, Eq )]
pub enum IdeError {
    /// Two bundled plugins share an id. The first one is kept.
    #[error( "Duplicate bundled plugin '{0}'" )]
    DuplicatePluginId( String ),
    /// Two bundled plugins provide the same module. The first provider is kept.
    #[error( "Module '{module}' of '{plugin}' is already provided by '{provider}'" )]
    DuplicateModule { module: String, plugin: String, provider: String },
}

/// In-memory [`Environment`] with id and module indices.
///
/// # Example
///
/// ```
/// use std::sync::Arc ;
/// use plugin_deps::{ Ide, Environment, PluginData, DependencyDescriptor };
///
/// struct Bundled( &'static str, Vec<String> );
/// impl PluginData for Bundled {
///     fn id( &self ) -> &str { self.0 }
///     fn version( &self ) -> &str { "241.1" }
///     fn dependencies( &self ) -> &[DependencyDescriptor] { &[] }
///     fn defined_modules( &self ) -> &[String] { &self.1 }
/// }
///
/// let ( ide, errors ) = Ide::new( "IU-241.1", [
///     Arc::new( Bundled( "com.intellij", vec![ "com.intellij.modules.platform".to_string() ])),
/// ]);
/// assert!( errors.is_empty() );
/// assert!( ide.find_plugin_by_module( "com.intellij.modules.platform" ).is_some() );
/// assert!( !ide.has_all_modules_marker() );
/// ```
#[derive( Debug, Clone )]
pub struct Ide<P> {
    version: String,
    bundled_plugins: Vec<Arc<P>>,
    /// plugin id -> index into `bundled_plugins`
    by_id: HashMap<String, usize>,
    /// module id -> index into `bundled_plugins`
    by_module: HashMap<String, usize>,
}

impl<P: PluginData> Ide<P> {

    /// Indexes the bundled plugins of an environment.
    ///
    /// # Partial Success
    /// Duplicate plugin ids and modules provided twice are reported and skipped;
    /// the first registration wins.
    pub fn new(
        version: impl Into<String>,
        bundled_plugins: impl IntoIterator<Item = Arc<P>>,
    ) -> PartialSuccess<Self, IdeError> {

        // Indices follow the order of accepted plugins, so `by_id.len()` is
        // the position the plugin is about to take.
        let mut by_id = HashMap::<String, usize>::new();
        let ( bundled_plugins, duplicate_errors ) = bundled_plugins.into_iter()
            .map(| plugin: Arc<P> | match by_id.contains_key( plugin.id() ) {
                true => Err( IdeError::DuplicatePluginId( plugin.id().to_string() )),
                false => {
                    by_id.insert( plugin.id().to_string(), by_id.len() );
                    Ok( plugin )
                },
            })
            .partition_result::<Vec<_>, Vec<_>, _, _>();

        let mut by_module = HashMap::<String, usize>::new();
        let module_errors = bundled_plugins.iter().enumerate()
            .flat_map(|( index, plugin )| plugin.defined_modules().iter().cloned()
                .chain( plugin.module_descriptors().iter().map(| module | module.name().to_string() ))
                .map( move | module | ( index, module )))
            .filter_map(|( index, module )| match by_module.get( &module ) {
                Some( &provider ) if provider == index => None,
                Some( &provider ) => Some( IdeError::DuplicateModule {
                    plugin: bundled_plugins[ index ].id().to_string(),
                    provider: bundled_plugins[ provider ].id().to_string(),
                    module,
                }),
                None => { by_module.insert( module, index ); None },
            })
            .collect::<Vec<_>>();

        let ide = Self { version: version.into(), bundled_plugins, by_id, by_module };
        ( ide, duplicate_errors.merge_all( module_errors ))

    }

}

impl<P: PluginData> Environment for Ide<P> {

    type Plugin = P ;

    #[inline] fn version( &self ) -> &str { &self.version }

    #[inline] fn bundled_plugins( &self ) -> &[Arc<P>] { &self.bundled_plugins }

    fn find_plugin_by_id( &self, id: &str ) -> Option<Arc<P>> {
        self.by_id.get( id ).map(| &index | Arc::clone( &self.bundled_plugins[ index ] ))
    }

    fn find_plugin_by_module( &self, module_id: &str ) -> Option<Arc<P>> {
        self.by_module.get( module_id ).map(| &index | Arc::clone( &self.bundled_plugins[ index ] ))
    }

}
