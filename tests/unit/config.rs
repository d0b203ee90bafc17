use super::*;

#[test]
fn defaults_match_the_documented_values() {
    let options = BlendOptions::default();
    assert_eq!(options.seam_band_px, 48);
    assert_eq!(options.num_bands, 5);
}

#[test]
fn positive_values_parse_with_whitespace() {
    assert_eq!(positive_or_default(Some("64"), 48), 64);
    assert_eq!(positive_or_default(Some(" 7 "), 48), 7);
}

#[test]
fn unset_invalid_or_non_positive_fall_back_to_default() {
    assert_eq!(positive_or_default(None, 48), 48);
    assert_eq!(positive_or_default(Some(""), 48), 48);
    assert_eq!(positive_or_default(Some("abc"), 48), 48);
    assert_eq!(positive_or_default(Some("0"), 48), 48);
    assert_eq!(positive_or_default(Some("-3"), 48), 48);
    assert_eq!(positive_or_default(Some("99999999999999"), 48), 48);
}

#[test]
fn backend_names_are_case_insensitive() {
    assert_eq!(
        parse_seam_backend(Some("GRAPH-CUT")).unwrap(),
        SeamBackend::GraphCut
    );
    assert_eq!(
        parse_blend_backend(Some("MultiBand")).unwrap(),
        BlendBackend::MultiBand
    );
}

#[test]
fn unset_backends_resolve_to_defaults() {
    assert_eq!(parse_seam_backend(None).unwrap(), SeamBackend::GraphCut);
    assert_eq!(parse_blend_backend(None).unwrap(), BlendBackend::MultiBand);
    assert_eq!(BackendSelection::default().seam, SeamBackend::GraphCut);
}

#[test]
fn unknown_backend_is_unavailable_not_defaulted() {
    assert!(matches!(
        parse_seam_backend(Some("voronoi")),
        Err(SeamweldError::BackendUnavailable(_))
    ));
    assert!(matches!(
        parse_blend_backend(Some("feather")),
        Err(SeamweldError::BackendUnavailable(_))
    ));
}
