use plugin_deps::GraphBuilderConfig ;

// `a` and `b` depend on each other, but nothing leads back to the root.
fixtures! {
	const ROOT	= "root" ;
	plugins		= [
		TestPlugin::new( "root" ).depends( plugin( "a" )),
		TestPlugin::new( "a" ).depends( plugin( "b" )),
		TestPlugin::new( "b" ).depends( plugin( "a" )),
	];
}

#[test]
fn cycles_not_containing_root_are_ignored() {

	let graph = fixtures::build( GraphBuilderConfig::explicit_only() );

	assert_edges!( graph, [( "root", "a" ), ( "a", "b" ), ( "b", "a" )]);
	assert!( graph.find_cycles().is_empty() );

}
