#[macro_export]
macro_rules! assert_no_errors {
    ( $errors:expr ) => {
        if !$errors.is_empty() { panic!( "Produced errors: {:?}", $errors ) }
    };
}

#[macro_export]
macro_rules! assert_no_missing {
    ( $graph:expr ) => {
        if $graph.has_missing_dependencies() { panic!( "Unexpected missing dependencies: {:?}", $graph.missing_by_node() ) }
    };
}

/// Compares the graph's edges, as `from -> to` id pairs, with the expected set.
#[macro_export]
macro_rules! assert_edges {
    ( $graph:expr, [ $(( $from:literal, $to:literal )),* $(,)? ] ) => {{
        let actual = $graph.edges().iter()
            .map(| edge | ( edge.from().id().to_string(), edge.to().id().to_string() ))
            .collect::<std::collections::BTreeSet<_>>();
        let expected = [ $(( $from.to_string(), $to.to_string() )),* ]
            .into_iter()
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!( actual, expected, "Edges differ" );
    }};
}

/// Compares the graph's vertex ids with the expected set.
#[macro_export]
macro_rules! assert_vertices {
    ( $graph:expr, [ $( $id:literal ),* $(,)? ] ) => {{
        let actual = $graph.vertices().iter()
            .map(| node | node.id().to_string() )
            .collect::<std::collections::BTreeSet<_>>();
        let expected = [ $( $id.to_string() ),* ]
            .into_iter()
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!( actual, expected, "Vertices differ" );
    }};
}
