use scrollframe::{
    centering_offset, Block, Event, GridOptions, HorizontalScroll, MouseButton, Platform, Rect,
    ScrollCommand, ScrollConfig, ScrollableFrame, View, WheelEvent, WheelScope,
};

fn frame_on(platform: Platform) -> ScrollableFrame {
    ScrollableFrame::with_config(ScrollConfig::default().with_platform(platform))
}

/// Frame holding a single block, laid out so the viewport is `viewport` cells square.
fn frame_with_content(width: u16, height: u16, viewport: u16) -> ScrollableFrame {
    let mut frame = frame_on(Platform::Unix);
    frame
        .content_mut()
        .grid(Block::new(width, height), GridOptions::at(0, 0));
    frame.layout(Rect::new(0, 0, viewport + 1, viewport + 1));
    frame
}

fn assert_centered(outcome: HorizontalScroll, expected: f64) {
    match outcome {
        HorizontalScroll::Centered(offset) => assert!(
            (offset - expected).abs() < 1e-9,
            "centered at {offset}, expected {expected}"
        ),
        other => panic!("expected centering, got {other:?}"),
    }
}

// ============================================================================
// Construction and layout
// ============================================================================

#[test]
fn test_new_frame_starts_at_origin() {
    let frame = ScrollableFrame::new();
    assert_eq!(frame.canvas().origin(), (0, 0));
    assert!(frame.content().is_empty());
    assert_eq!(frame.xscrollbar().view(), View::FULLY_VISIBLE);
}

#[test]
fn test_layout_reserves_scrollbar_row_and_column() {
    let mut frame = ScrollableFrame::new();
    frame.layout(Rect::new(2, 3, 41, 11));

    assert_eq!(frame.viewport(), Rect::new(2, 3, 40, 10));
    assert_eq!(frame.canvas().size(), (40, 10));
    assert_eq!(frame.xscrollbar().area(), Rect::new(2, 13, 40, 1));
    assert_eq!(frame.yscrollbar().area(), Rect::new(42, 3, 1, 10));
}

#[test]
fn test_layout_of_empty_area() {
    let mut frame = ScrollableFrame::new();
    frame.layout(Rect::new(0, 0, 0, 0));
    assert_eq!(frame.viewport(), Rect::new(0, 0, 0, 0));
    assert!(frame.xscrollbar().area().is_empty());
}

// ============================================================================
// Horizontal scrolling
// ============================================================================

#[test]
fn test_fitting_content_is_centered_whatever_the_command() {
    let mut frame = frame_with_content(100, 50, 200);
    let expected = (1.0 - 200.0 / 100.0) / 2.0;

    for command in [
        ScrollCommand::units(5),
        ScrollCommand::pages(-3),
        ScrollCommand::MoveTo(0.9),
        ScrollCommand::NUDGE,
    ] {
        assert_centered(frame.scroll_horizontal(command, None), expected);
        assert_eq!(frame.canvas().origin().0, -50, "content centered in viewport");
    }
}

#[test]
fn test_centering_uses_given_width() {
    let mut frame = frame_with_content(100, 50, 200);
    assert_centered(
        frame.scroll_horizontal(ScrollCommand::NUDGE, Some(300)),
        centering_offset(300, 100),
    );
}

#[test]
fn test_content_as_wide_as_viewport_is_not_scrolled() {
    let mut frame = frame_with_content(200, 50, 200);
    assert_centered(frame.scroll_horizontal(ScrollCommand::units(3), None), 0.0);
    assert_eq!(frame.canvas().origin().0, 0);
}

#[test]
fn test_wide_content_forwards_command() {
    let mut frame = frame_with_content(500, 50, 200);

    let command = ScrollCommand::units(3);
    assert_eq!(
        frame.scroll_horizontal(command, None),
        HorizontalScroll::Forwarded(command)
    );
    assert_eq!(frame.canvas().origin().0, 60);

    let command = ScrollCommand::MoveTo(0.5);
    assert_eq!(
        frame.scroll_horizontal(command, Some(10)),
        HorizontalScroll::Forwarded(command)
    );
    assert_eq!(frame.canvas().origin().0, 250);
    assert_eq!(frame.xscrollbar().view(), View::new(0.5, 0.9));
}

#[test]
fn test_empty_content_does_not_divide_by_zero() {
    let mut frame = ScrollableFrame::new();
    frame.layout(Rect::new(0, 0, 201, 201));

    assert_eq!(
        frame.scroll_horizontal(ScrollCommand::units(1), None),
        HorizontalScroll::Centered(0.0)
    );
    assert_eq!(frame.canvas().origin(), (0, 0));
    assert_eq!(centering_offset(200, 0), 0.0);
}

// ============================================================================
// Vertical scrolling
// ============================================================================

#[test]
fn test_fitting_content_ignores_vertical_scroll() {
    let mut frame = frame_with_content(500, 100, 200);

    for command in [ScrollCommand::units(3), ScrollCommand::MoveTo(0.5)] {
        assert!(!frame.scroll_vertical(command));
        assert_eq!(frame.canvas().origin().1, 0);
    }
}

#[test]
fn test_tall_content_scrolls_vertically() {
    let mut frame = frame_with_content(100, 500, 200);
    assert!(frame.scroll_vertical(ScrollCommand::units(3)));
    assert_eq!(frame.canvas().origin().1, 60);
    assert_eq!(frame.yscrollbar().view(), View::new(0.12, 0.52));
}

#[test]
fn test_huge_vertical_scroll_lands_on_last_page() {
    let mut frame = frame_with_content(500, 500, 200);
    assert!(frame.scroll_vertical(ScrollCommand::units(i32::MAX)));
    assert_eq!(frame.canvas().origin().1, 300);
    assert!(frame.scroll_vertical(ScrollCommand::pages(i32::MIN)));
    assert_eq!(frame.canvas().origin().1, 0);
}

// ============================================================================
// Mouse wheel
// ============================================================================

#[test]
fn test_unix_wheel_buttons() {
    let mut frame = frame_with_content(500, 500, 200);

    assert!(frame.on_wheel(&WheelEvent::Button(5)));
    assert_eq!(frame.canvas().origin().1, 20);
    assert!(frame.on_wheel(&WheelEvent::Button(4)));
    assert_eq!(frame.canvas().origin().1, 0);

    assert!(!frame.on_wheel(&WheelEvent::Delta(120)), "not a unix encoding");
    assert!(!frame.on_wheel(&WheelEvent::Button(1)));
}

#[test]
fn test_windows_wheel_delta() {
    let mut frame = frame_on(Platform::Windows);
    frame
        .content_mut()
        .grid(Block::new(500, 500), GridOptions::at(0, 0));
    frame.layout(Rect::new(0, 0, 201, 201));
    frame.scroll_vertical(ScrollCommand::MoveTo(0.5));
    assert_eq!(frame.canvas().origin().1, 250);

    assert!(frame.on_wheel(&WheelEvent::Delta(240)));
    assert_eq!(frame.canvas().origin().1, 210, "two units up");
}

#[test]
fn test_apple_wheel_delta() {
    let mut frame = frame_on(Platform::Apple);
    frame
        .content_mut()
        .grid(Block::new(500, 500), GridOptions::at(0, 0));
    frame.layout(Rect::new(0, 0, 201, 201));
    frame.scroll_vertical(ScrollCommand::MoveTo(0.5));

    assert!(frame.on_wheel(&WheelEvent::Delta(3)));
    assert_eq!(frame.canvas().origin().1, 190, "three units up");
    assert!(!frame.on_wheel(&WheelEvent::Button(4)));
}

#[test]
fn test_extreme_apple_delta_is_confined() {
    let mut frame = frame_on(Platform::Apple);
    frame
        .content_mut()
        .grid(Block::new(500, 500), GridOptions::at(0, 0));
    frame.layout(Rect::new(0, 0, 201, 201));

    assert!(frame.on_wheel(&WheelEvent::Delta(i32::MIN)));
    assert_eq!(frame.canvas().origin().1, 300);
    assert!(frame.on_wheel(&WheelEvent::Delta(i32::MAX)));
    assert_eq!(frame.canvas().origin().1, 0);
}

#[test]
fn test_other_platform_ignores_wheel() {
    let mut frame = frame_on(Platform::Other);
    frame
        .content_mut()
        .grid(Block::new(500, 500), GridOptions::at(0, 0));
    frame.layout(Rect::new(0, 0, 201, 201));

    assert!(!frame.on_wheel(&WheelEvent::Button(5)));
    assert!(!frame.on_wheel(&WheelEvent::Delta(-120)));
    assert_eq!(frame.canvas().origin(), (0, 0));
}

#[test]
fn test_viewport_scope_ignores_wheel_outside_viewport() {
    let mut frame = frame_with_content(500, 500, 200);
    let outside = Event::Wheel {
        x: 250,
        y: 10,
        wheel: WheelEvent::Button(5),
    };
    let inside = Event::Wheel {
        x: 10,
        y: 10,
        wheel: WheelEvent::Button(5),
    };

    assert!(!frame.handle_event(&outside));
    assert_eq!(frame.canvas().origin().1, 0);
    assert!(frame.handle_event(&inside));
    assert_eq!(frame.canvas().origin().1, 20);
}

#[test]
fn test_global_scope_takes_every_wheel_event() {
    let mut frame = ScrollableFrame::with_config(
        ScrollConfig::default()
            .with_platform(Platform::Unix)
            .with_wheel_scope(WheelScope::Global),
    );
    frame
        .content_mut()
        .grid(Block::new(500, 500), GridOptions::at(0, 0));
    frame.layout(Rect::new(0, 0, 201, 201));

    assert!(frame.handle_event(&Event::Wheel {
        x: 250,
        y: 10,
        wheel: WheelEvent::Button(5),
    }));
    assert_eq!(frame.canvas().origin().1, 20);
}

// ============================================================================
// Scrollbars
// ============================================================================

#[test]
fn test_trough_click_pages() {
    let mut frame = frame_with_content(500, 500, 200);
    let press = Event::Press {
        x: 150,
        y: 200,
        button: MouseButton::Left,
    };

    assert!(frame.handle_event(&press));
    assert_eq!(frame.canvas().origin().0, 180);
}

#[test]
fn test_thumb_drag_moves_view() {
    let mut frame = frame_with_content(500, 500, 200);
    assert_eq!(frame.xscrollbar().thumb(), (0, 80));

    assert!(frame.handle_event(&Event::Press {
        x: 30,
        y: 200,
        button: MouseButton::Left,
    }));
    assert!(frame.xscrollbar().is_dragging());
    assert_eq!(frame.canvas().origin().0, 0, "grabbing does not scroll");

    assert!(frame.handle_event(&Event::Drag {
        x: 80,
        y: 200,
        button: MouseButton::Left,
    }));
    assert_eq!(frame.canvas().origin().0, 125);

    assert!(frame.handle_event(&Event::Release {
        x: 80,
        y: 200,
        button: MouseButton::Left,
    }));
    assert!(!frame.xscrollbar().is_dragging());
}

#[test]
fn test_vertical_press_on_fitting_content_does_not_scroll() {
    let mut frame = frame_with_content(500, 100, 200);
    assert!(frame.handle_event(&Event::Press {
        x: 200,
        y: 150,
        button: MouseButton::Left,
    }));
    assert_eq!(frame.canvas().origin().1, 0);
}

#[test]
fn test_drag_without_grab_is_ignored() {
    let mut frame = frame_with_content(500, 500, 200);
    assert!(!frame.handle_event(&Event::Drag {
        x: 80,
        y: 200,
        button: MouseButton::Left,
    }));
    assert!(!frame.handle_event(&Event::Press {
        x: 10,
        y: 10,
        button: MouseButton::Left,
    }));
}

// ============================================================================
// Resizing
// ============================================================================

#[test]
fn test_scroll_region_follows_content() {
    let mut frame = frame_with_content(100, 100, 200);
    assert_eq!(frame.canvas().scroll_region(), Some(Rect::new(0, 0, 100, 100)));

    frame
        .content_mut()
        .grid(Block::new(300, 50), GridOptions::at(1, 0));
    assert!(frame.update());
    assert_eq!(frame.canvas().scroll_region(), Some(Rect::new(0, 0, 300, 150)));
    assert!(!frame.update(), "no change since last notification");
}

#[test]
fn test_content_growing_past_viewport_stops_centering() {
    let mut frame = frame_with_content(100, 100, 200);
    assert_eq!(frame.canvas().origin().0, -50);

    frame
        .content_mut()
        .grid(Block::new(300, 10), GridOptions::at(1, 0));
    frame.update();

    assert_eq!(frame.canvas().origin().0, 0);
    assert_eq!(frame.xscrollbar().view(), View::new(0.0, 200.0 / 300.0));
}

#[test]
fn test_viewport_growing_past_content_switches_to_centering() {
    let mut frame = frame_with_content(500, 500, 200);

    let command = ScrollCommand::units(3);
    assert_eq!(
        frame.scroll_horizontal(command, None),
        HorizontalScroll::Forwarded(command)
    );
    assert!(frame.scroll_vertical(ScrollCommand::units(1)));
    assert_eq!(frame.canvas().origin(), (60, 20));

    frame.layout(Rect::new(0, 0, 601, 601));
    assert_eq!(frame.canvas().scroll_region(), Some(Rect::new(0, 0, 500, 500)));
    assert_eq!(frame.canvas().origin(), (-50, 0));

    assert_centered(
        frame.scroll_horizontal(ScrollCommand::units(4), None),
        centering_offset(600, 500),
    );
    assert!(!frame.scroll_vertical(ScrollCommand::units(1)));
    assert_eq!(frame.canvas().origin(), (-50, 0));
    assert!(frame.canvas().yview().is_fully_visible());
}
