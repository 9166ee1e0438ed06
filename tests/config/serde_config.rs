use plugin_deps::{ DependencyDescriptor, GraphBuilderConfig, ModuleDescriptor, ModuleVisibility };

#[test]
fn partial_config_falls_back_to_defaults() {

	let config: GraphBuilderConfig = serde_json::from_str( r#"{ "inject_legacy_api_dependency": false }"# )
		.expect( "Valid config" );

	assert_eq!( config, GraphBuilderConfig::default().with_legacy_api_dependency( false ));

}

#[test]
fn config_survives_json() {

	let config = GraphBuilderConfig::explicit_only().with_core_plugin_id( "org.example.core" );
	let json = serde_json::to_string( &config ).expect( "Serialisable" );
	let parsed: GraphBuilderConfig = serde_json::from_str( &json ).expect( "Deserialisable" );

	assert_eq!( parsed, config );

}

#[test]
fn descriptors_use_plain_field_names() {

	let descriptor: DependencyDescriptor = serde_json::from_str( r#"{ "id": "com.intellij.modules.lang", "module": true }"# )
		.expect( "Valid descriptor" );
	assert_eq!( descriptor, DependencyDescriptor::module( "com.intellij.modules.lang" ));

	let module: ModuleDescriptor = serde_json::from_str( r#"{ "name": "intellij.json", "visibility": "internal" }"# )
		.expect( "Valid module" );
	assert_eq!( module, ModuleDescriptor::new( "intellij.json", None, ModuleVisibility::Internal ));

}
