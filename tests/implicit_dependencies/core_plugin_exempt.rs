use plugin_deps::GraphBuilderConfig ;

fixtures! {
	const ROOT	= "com.intellij" ;
	plugins		= [];
	bundled		= [
		TestPlugin::new( "com.intellij" ).defines( "com.intellij.modules.all" ),
		TestPlugin::new( "com.intellij.java" ),
		TestPlugin::new( "kotlin" ).shared_classloader(),
	];
}

#[test]
fn core_plugin_gets_no_implicit_dependencies() {

	let graph = fixtures::build( GraphBuilderConfig::default() );

	assert_vertices!( graph, [ "com.intellij" ]);
	assert_edges!( graph, []);

}

#[test]
fn core_plugin_id_is_configurable() {

	let graph = fixtures::build( GraphBuilderConfig::default().with_core_plugin_id( "org.example.core" ));

	assert_edges!( graph, [
		( "com.intellij", "com.intellij.java" ),
		( "com.intellij", "kotlin" ),
	]);

}
