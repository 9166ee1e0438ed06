//! Graph builder configuration.
//!
//! The implicit dependency rules of the builder used to be driven by ambient
//! state of the verifying tool; here they are explicit so every build is
//! deterministic and each rule can be switched off in isolation.

#[cfg( feature = "serde" )]
use serde::{ Deserialize, Serialize };



/// Plugin id of the host application's core plugin.
pub const DEFAULT_CORE_PLUGIN_ID: &str = "com.intellij" ;

/// Plugin id injected as an optional dependency of legacy plugins.
pub const DEFAULT_LEGACY_API_PLUGIN_ID: &str = "com.intellij.java" ;

/// Settings of a [`DependenciesGraphBuilder`]( crate::DependenciesGraphBuilder ).
///
/// ```
/// use plugin_deps::GraphBuilderConfig ;
///
/// let config = GraphBuilderConfig::default()
///     .with_legacy_api_dependency( false )
///     .with_core_plugin_id( "org.example.core" );
/// assert!( !config.inject_legacy_api_dependency() );
/// assert!( config.inject_shared_classloader_dependencies() );
/// ```
#[derive( Debug, Clone, PartialEq, Eq )]
#[cfg_attr( feature = "serde", derive( Serialize, Deserialize ), serde( default ))]
pub struct GraphBuilderConfig {
    /// Give plugins without module dependencies an optional dependency on the legacy API plugin
    inject_legacy_api_dependency: bool,
    /// Make the root depend on every bundled plugin that uses the shared classloader
    inject_shared_classloader_dependencies: bool,
    /// Root plugin exempt from both rules
    core_plugin_id: String,
    /// Target of the legacy API rule
    legacy_api_plugin_id: String,
}

impl Default for GraphBuilderConfig {
    fn default() -> Self {
        Self {
            inject_legacy_api_dependency: true,
            inject_shared_classloader_dependencies: true,
            core_plugin_id: DEFAULT_CORE_PLUGIN_ID.to_string(),
            legacy_api_plugin_id: DEFAULT_LEGACY_API_PLUGIN_ID.to_string(),
        }
    }
}

impl GraphBuilderConfig {

    /// Configuration with both implicit rules switched off.
    pub fn explicit_only() -> Self {
        Self::default()
            .with_legacy_api_dependency( false )
            .with_shared_classloader_dependencies( false )
    }

    /// Enables or disables the legacy API rule.
    pub fn with_legacy_api_dependency( mut self, enabled: bool ) -> Self {
        self.inject_legacy_api_dependency = enabled ;
        self
    }

    /// Enables or disables the shared classloader rule.
    pub fn with_shared_classloader_dependencies( mut self, enabled: bool ) -> Self {
        self.inject_shared_classloader_dependencies = enabled ;
        self
    }

    /// Sets the id of the host's core plugin.
    pub fn with_core_plugin_id( mut self, id: impl Into<String> ) -> Self {
        self.core_plugin_id = id.into();
        self
    }

    /// Sets the plugin the legacy API rule points at.
    pub fn with_legacy_api_plugin_id( mut self, id: impl Into<String> ) -> Self {
        self.legacy_api_plugin_id = id.into();
        self
    }

    #[inline] pub fn inject_legacy_api_dependency( &self ) -> bool { self.inject_legacy_api_dependency }
    #[inline] pub fn inject_shared_classloader_dependencies( &self ) -> bool { self.inject_shared_classloader_dependencies }
    #[inline] pub fn core_plugin_id( &self ) -> &str { &self.core_plugin_id }
    #[inline] pub fn legacy_api_plugin_id( &self ) -> &str { &self.legacy_api_plugin_id }

}
