use std::sync::Arc ;
use plugin_deps::{
	BundledDependencyFinder, DependenciesGraphBuilder, Environment, GraphBuilderConfig, ModuleVisibility,
};
use crate::fixture_plugins::{ TestPlugin, module, plugin };

/// Environment relying on the default lookups.
struct Scanning {
	plugins: Vec<Arc<TestPlugin>>,
}

impl Environment for Scanning {
	type Plugin = TestPlugin ;
	fn version( &self ) -> &str { "scan-1" }
	fn bundled_plugins( &self ) -> &[Arc<TestPlugin>] { &self.plugins }
}

#[test]
fn default_lookups_scan_bundled_plugins() {

	let environment = Scanning { plugins: vec![
		Arc::new( TestPlugin::new( "core" ).defines( plugin_deps::ALL_MODULES_MARKER )),
		Arc::new( TestPlugin::new( "lang" ).module( "lang.api", None, ModuleVisibility::Public )),
	]};

	assert!( environment.has_all_modules_marker() );
	assert!( environment.find_plugin_by_id( "lang" ).is_some() );
	assert!( environment.find_plugin_by_module( "lang.api" ).is_some() );
	assert!( environment.find_plugin_by_module( "lang" ).is_none() );

	let root = TestPlugin::new( "root" ).depends( module( "lang.api" )).depends( plugin( "core" ));
	let graph = DependenciesGraphBuilder::new( BundledDependencyFinder::new( &environment ))
		.with_config( GraphBuilderConfig::explicit_only() )
		.build( &root, &environment )
		.expect( "Build failed" );

	assert_edges!( graph, [( "root", "lang" ), ( "root", "core" )]);

}
