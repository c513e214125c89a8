use super::*;

#[test]
fn test_select_next_installs_candidate() {
    let mut controller = make_controller();
    convert(&mut controller, "nihon");

    let result = controller.select_next();
    assert!(result.consumed);
    assert_eq!(controller.buffer().composed(), "にほん");
    assert_eq!(controller.buffer().insertion_index(), 3);
    assert_eq!(shown_candidates(&result).unwrap().1, 1);
    assert_eq!(shown_preedit(&result).unwrap().text(), "にほん");

    let result = controller.trigger("space", CLIENT);
    assert_eq!(result.committed(), Some("にほん"));
}

#[test]
fn test_navigation_wraps_in_both_directions() {
    let mut controller = make_controller();
    convert(&mut controller, "nihon");

    controller.select_previous();
    assert_eq!(controller.candidates().selected_index(), Some(2));
    assert_eq!(controller.buffer().composed(), "ニホン");

    controller.select_next();
    assert_eq!(controller.candidates().selected_index(), Some(0));
    assert_eq!(controller.buffer().composed(), "日本");

    for _ in 0..3 {
        controller.select_next();
    }
    assert_eq!(controller.candidates().selected_index(), Some(0));
}

#[test]
fn test_select_by_row_offset() {
    let mut controller = make_controller();
    convert(&mut controller, "nihon");

    let result = controller.select_candidate_by_row_offset(2);
    assert!(result.consumed);
    assert_eq!(controller.candidates().selected_index(), Some(2));
    assert_eq!(controller.buffer().composed(), "ニホン");
}

#[test]
fn test_out_of_range_row_offset_changes_nothing() {
    let mut controller = make_controller();
    convert(&mut controller, "nihon");
    controller.select_next();

    for offset in [3, 100, -1] {
        let result = controller.select_candidate_by_row_offset(offset);
        assert!(result.consumed);
        assert!(result.actions.is_empty());
        assert_eq!(controller.candidates().selected_index(), Some(1));
        assert_eq!(controller.buffer().composed(), "にほん");
    }
}

#[test]
fn test_selection_requires_conversion() {
    let mut controller = make_controller();
    assert!(!controller.select_next().consumed);

    controller.append("nihon", CLIENT);
    assert!(!controller.select_next().consumed);
    assert!(!controller.select_previous().consumed);
    assert!(!controller.select_candidate_by_row_offset(0).consumed);
    assert!(!controller.next_page().consumed);
    assert!(!controller.select_on_page(1).consumed);
    assert_eq!(controller.buffer().composed(), "");
}

#[test]
fn test_paging() {
    let mut controller = make_controller_with(ControllerConfig {
        page_size: 2,
        ..ControllerConfig::default()
    });
    convert(&mut controller, "many");
    assert_eq!(controller.candidates().total_pages(), 3);

    controller.next_page();
    assert_eq!(controller.buffer().composed(), "m3");
    controller.next_page();
    assert_eq!(controller.buffer().composed(), "m5");
    controller.next_page();
    assert_eq!(controller.buffer().composed(), "m1");

    controller.previous_page();
    assert_eq!(controller.buffer().composed(), "m5");
    assert_eq!(controller.candidates().current_page(), 2);
}

#[test]
fn test_select_on_page() {
    let mut controller = make_controller_with(ControllerConfig {
        page_size: 2,
        ..ControllerConfig::default()
    });
    convert(&mut controller, "many");
    controller.next_page();

    let result = controller.select_on_page(2);
    assert!(result.consumed);
    assert_eq!(controller.buffer().composed(), "m4");
    // Selecting does not commit
    assert!(result.committed().is_none());
    assert!(controller.state().is_converted());

    // Row past the page is ignored
    let result = controller.select_on_page(3);
    assert!(result.actions.is_empty());
    assert_eq!(controller.buffer().composed(), "m4");
}
