use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SeamweldError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        SeamweldError::invalid_geometry("x")
            .to_string()
            .contains("invalid geometry:")
    );
    assert!(
        SeamweldError::degenerate_graph("x")
            .to_string()
            .contains("degenerate seam graph:")
    );
    assert!(
        SeamweldError::backend_unavailable("x")
            .to_string()
            .contains("blend backend unavailable:")
    );
}

#[test]
fn helpers_build_the_matching_variant() {
    assert!(matches!(
        SeamweldError::invalid_geometry("x"),
        SeamweldError::InvalidGeometry(_)
    ));
    assert!(matches!(
        SeamweldError::degenerate_graph("x"),
        SeamweldError::DegenerateGraph(_)
    ));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SeamweldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
