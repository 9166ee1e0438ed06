use std::sync::Arc ;
use tracing::debug ;

use crate::config::GraphBuilderConfig ;
use crate::descriptor::DependencyDescriptor ;
use crate::environment::Environment ;
use crate::graph::Interner ;
use crate::plugin::PluginData ;
use super::traversal::Pending ;



/// Dependencies the root gets without declaring them, in injection order:
/// the legacy API dependency first, then shared classloader plugins in
/// bundled order.
///
/// The core plugin of the environment is exempt from every rule.
/// `connected` tells whether the root already has an edge to a plugin id.
pub(super) fn implicit_dependencies<E: Environment>(
    config: &GraphBuilderConfig,
    interner: &Interner,
    root: &E::Plugin,
    environment: &E,
    connected: impl Fn( &str ) -> bool,
) -> Vec<Pending<E::Plugin>> {

    if root.id() == config.core_plugin_id() {
        debug!( root = %root.id(), "core plugin, no implicit dependencies" );
        return Vec::new();
    }

    let legacy = legacy_api_dependency( config, root, environment )
        .map(| descriptor | Pending::Declared( interner.descriptor( &descriptor )));

    let shared = shared_classloader_dependencies( config, root, environment )
        .filter(| plugin | !connected( plugin.id() ))
        .inspect(| plugin | debug!( root = %root.id(), dependency = %plugin.id(), "injecting shared classloader dependency" ))
        .map(| plugin | Pending::Bundled(
            interner.descriptor( &DependencyDescriptor::plugin( plugin.id() )),
            plugin,
        ));

    legacy.into_iter().chain( shared ).collect()

}

/// Optional dependency on the legacy API plugin, for roots that predate modules.
fn legacy_api_dependency<E: Environment>(
    config: &GraphBuilderConfig,
    root: &E::Plugin,
    environment: &E,
) -> Option<DependencyDescriptor> {

    if !config.inject_legacy_api_dependency() { return None }

    let target = config.legacy_api_plugin_id();
    let declares_modules = root.dependencies().iter().any( DependencyDescriptor::is_module );
    let declares_target = root.dependencies().iter().any(| dependency | dependency.id() == target );

    if declares_modules || root.id() == target || declares_target || !environment.has_all_modules_marker() {
        return None
    }

    debug!( root = %root.id(), dependency = target, "injecting legacy API dependency" );
    Some( DependencyDescriptor::plugin( target ).optional() )

}

/// Bundled plugins on the shared classloader, the root excluded.
fn shared_classloader_dependencies<'a, E: Environment>(
    config: &GraphBuilderConfig,
    root: &'a E::Plugin,
    environment: &'a E,
) -> impl Iterator<Item = Arc<E::Plugin>> + 'a {

    let enabled = config.inject_shared_classloader_dependencies();

    environment.bundled_plugins().iter()
        .filter( move | _ | enabled )
        .filter(| plugin | plugin.uses_shared_classloader() )
        .filter( move | plugin | plugin.id() != root.id() )
        .cloned()

}
