use hexalign::{
    EditorSession, GridConfig, HexGrid, OverlayRenderer, RadiusKind,
    RenderConfig,
};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        radius: f64::NAN,               // invalid
        radius_kind: RadiusKind::Inner, // valid
        ..Default::default()
    };

    // This is a bit of a lazy check but it works well enough
    let err = HexGrid::new(config).unwrap_err();
    assert_eq!(err.to_string(), "invalid grid config");
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    assert_eq!(
        error_fields,
        vec!["radius"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );

    // Sessions go through the same validation
    assert!(EditorSession::<u32>::new(config).is_err());
}

#[test]
fn test_render_config_validation() {
    let render_config = RenderConfig {
        stroke_width: -1.0, // invalid
        show_spokes: false, // valid
        ..Default::default()
    };

    let err = OverlayRenderer::new(render_config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    assert_eq!(
        error_fields,
        vec!["stroke_width"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}
