//! Pointer interaction tests: selection safety, handle drags, the
//! add-arrow tool and scale changes.

use moldraw_core::{shared, DrawingError, DrawingInfo, Point};
use moldraw_designer::{
    Canvas, CanvasItem, DrawCommand, DrawingMode, HandleEnd, ItemRef, RecordingSurface,
};

fn canvas_with_scale(scale: f64) -> Canvas {
    Canvas::new(shared(DrawingInfo::with_scale_factor(scale).unwrap()))
}

#[test]
fn test_press_and_release_on_handle_keep_selection() {
    let mut canvas = canvas_with_scale(10.0);
    let id = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    canvas.selection_manager.select(41, true);
    canvas.selection_manager.select(42, true);

    let target = canvas.pointer_press(Point::new(0.0, 0.0), false);
    assert_eq!(
        target,
        Some(ItemRef::Handle {
            connector: id,
            end: HandleEnd::Start
        })
    );
    canvas.pointer_release(Point::new(0.0, 0.0));

    assert_eq!(canvas.selection_manager.selected_ids(), vec![41, 42]);
}

#[test]
fn test_press_and_release_on_connector_keep_selection() {
    let mut canvas = canvas_with_scale(10.0);
    let id = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    canvas.selection_manager.select(7, false);

    let target = canvas.pointer_press(Point::new(50.0, 0.0), false);
    assert_eq!(target, Some(ItemRef::Connector(id)));
    // Connectors are not movable; pressing one starts no drag.
    assert!(!canvas.is_dragging());
    canvas.pointer_release(Point::new(50.0, 0.0));

    assert_eq!(canvas.selection_manager.selected_ids(), vec![7]);
}

#[test]
fn test_press_on_empty_space_clears_selection() {
    let mut canvas = canvas_with_scale(10.0);
    canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    canvas.selection_manager.select(7, false);

    canvas.pointer_press(Point::new(50.0, 300.0), true);
    assert_eq!(canvas.selection_manager.selected_ids(), vec![7]);

    assert_eq!(canvas.pointer_press(Point::new(50.0, 300.0), false), None);
    assert!(canvas.selection_manager.is_empty());
}

#[test]
fn test_drag_end_handle_recomputes_connector() {
    let mut canvas = canvas_with_scale(10.0);
    let id = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

    canvas.pointer_press(Point::new(100.0, 0.0), false);
    assert!(canvas.is_dragging());
    canvas.pointer_move(Point::new(100.0, 50.0));
    canvas.pointer_move(Point::new(0.0, 100.0));
    canvas.pointer_release(Point::new(0.0, 100.0));
    assert!(!canvas.is_dragging());

    let connector = canvas.connector(id).unwrap();
    assert_eq!(connector.end_handle().position(), Point::new(0.0, 100.0));
    assert_eq!(connector.arrow_head()[0], Point::new(0.0, 100.0));
    let line = connector.line();
    assert!(line.p2.x.abs() < 1e-9);
    assert!((line.p2.y - (100.0 - 3.0_f64.sqrt() / 2.0)).abs() < 1e-9);
}

#[test]
fn test_handle_wins_over_connector() {
    let mut canvas = canvas_with_scale(10.0);
    let id = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    // Both the shaft and the start handle cover this point.
    assert_eq!(
        canvas.item_at(Point::new(5.0, 0.0)),
        Some(ItemRef::Handle {
            connector: id,
            end: HandleEnd::Start
        })
    );
}

#[test]
fn test_add_arrow_tool() {
    let mut canvas = canvas_with_scale(20.0);
    canvas.set_mode(DrawingMode::AddArrow);
    canvas.selection_manager.select(3, false);

    let target = canvas.pointer_press(Point::new(10.0, 10.0), false);
    let Some(ItemRef::Handle { connector: id, end }) = target else {
        panic!("expected a grabbed handle, got {:?}", target);
    };
    assert_eq!(end, HandleEnd::End);

    {
        let connector = canvas.connector(id).unwrap();
        assert_eq!(connector.start_handle().position(), Point::new(10.0, 10.0));
        assert_eq!(connector.end_handle().position(), Point::new(10.0, 10.0));
    }

    canvas.pointer_move(Point::new(60.0, 10.0));
    canvas.pointer_release(Point::new(60.0, 10.0));

    let connector = canvas.connector(id).unwrap();
    assert_eq!(connector.start_handle().position(), Point::new(10.0, 10.0));
    assert_eq!(connector.end_handle().position(), Point::new(60.0, 10.0));
    assert_eq!(canvas.connector_count(), 1);
    assert_eq!(canvas.mode(), DrawingMode::AddArrow);
    assert_eq!(canvas.selection_manager.selected_ids(), vec![3]);
}

#[test]
fn test_scale_change_recomputes_all() {
    let mut canvas = canvas_with_scale(10.0);
    let a = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    let b = canvas.add_connector_between(Point::new(0.0, 50.0), Point::new(0.0, 150.0));

    canvas.set_scale_factor(40.0).unwrap();
    for id in [a, b] {
        assert!((canvas.connector(id).unwrap().geometry().arrow_size - 4.0).abs() < 1e-12);
    }

    assert_eq!(
        canvas.set_scale_factor(-2.0),
        Err(DrawingError::InvalidScaleFactor { value: -2.0 })
    );
    assert_eq!(canvas.scale_factor(), 40.0);
}

#[test]
fn test_external_context_change_then_recompute() {
    let info = shared(DrawingInfo::with_scale_factor(10.0).unwrap());
    let mut canvas = Canvas::new(info.clone());
    let id = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

    info.borrow_mut().set_scene_size(1000.0, 500.0).unwrap();
    canvas.recompute_all();
    assert!((canvas.connector(id).unwrap().geometry().arrow_size - 5.0).abs() < 1e-12);

    canvas.set_zoom(2.0).unwrap();
    assert!((canvas.connector(id).unwrap().geometry().arrow_size - 10.0).abs() < 1e-12);
}

#[test]
fn test_hover_only_changes_rendering() {
    let mut canvas = canvas_with_scale(10.0);
    let id = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    let before = *canvas.connector(id).unwrap().geometry();

    let mut idle = RecordingSurface::new();
    canvas.render(&mut idle);
    assert_eq!(idle.len(), 3);

    canvas.pointer_move(Point::new(0.0, 0.0));
    let mut hovered = RecordingSurface::new();
    canvas.render(&mut hovered);
    assert_eq!(hovered.len(), 4);
    assert!(matches!(
        hovered.commands()[3],
        DrawCommand::PolygonOutline { width, .. } if width == 2.0
    ));

    let connector = canvas.connector(id).unwrap();
    assert!(connector.start_handle().is_hovered());
    assert_eq!(*connector.geometry(), before);
    assert_eq!(connector.start_handle().position(), Point::new(0.0, 0.0));
    assert!(canvas.selection_manager.is_empty());
}

#[test]
fn test_remove_connector() {
    let mut canvas = canvas_with_scale(10.0);
    let id = canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    canvas.pointer_press(Point::new(100.0, 0.0), false);
    canvas.pointer_move(Point::new(120.0, 0.0));

    let removed = canvas.remove_connector(id).unwrap();
    assert_eq!(removed.id(), id);
    assert!(!canvas.is_dragging());
    assert_eq!(canvas.hovered(), None);
    assert_eq!(canvas.connector_count(), 0);
    assert_eq!(canvas.bounds(), None);

    // Further motion is harmless.
    canvas.pointer_move(Point::new(130.0, 0.0));
    canvas.pointer_release(Point::new(130.0, 0.0));

    assert_eq!(
        canvas.remove_connector(id).unwrap_err(),
        DrawingError::UnknownConnector { id }
    );
    assert_eq!(
        canvas.move_handle(id, HandleEnd::End, Point::new(0.0, 0.0)),
        Err(DrawingError::UnknownConnector { id })
    );
}

#[test]
fn test_bounds_cover_arrow_head() {
    let mut canvas = canvas_with_scale(10.0);
    canvas.add_connector_between(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let (min_x, min_y, max_x, max_y) = canvas.bounds().unwrap();
    assert_eq!(min_x, 0.0);
    assert_eq!(max_x, 10.0);
    assert!((min_y + 0.5).abs() < 1e-9);
    assert!((max_y - 0.5).abs() < 1e-9);
}
