//! Integration test for the full panel lifecycle
//!
//! Drives the public API end to end against a test backend: startup
//! layout, modal focus changes, a resize that stops fitting, and the
//! recovery resize that restores the workspace.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pentaptych::signals::SignalFlags;
use pentaptych::tui::{InputState, MainLoop, PanelManager, TuiEvent};
use ratatui::backend::TestBackend;

fn key(c: char) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn test_full_session_lifecycle() {
    let mut manager = PanelManager::new();
    manager.create();
    let mut backend = TestBackend::new(100, 30);
    manager.update(&mut backend).expect("initial layout fits");

    let mut main_loop = MainLoop::new(SignalFlags::default());

    // Move focus to the fourth panel with the two-key sequence.
    main_loop
        .handle_event(key('g'), &mut manager, &mut backend)
        .expect("go key handled");
    assert_eq!(main_loop.state(), InputState::AwaitingPanelChoice);
    main_loop
        .handle_event(key('4'), &mut manager, &mut backend)
        .expect("digit handled");
    assert_eq!(manager.selected_index(), 3);

    // Shrink below the minimum: the workspace degrades to the holding
    // state with every panel torn down.
    backend.resize(100, 6);
    main_loop
        .handle_event(TuiEvent::Resize(100, 6), &mut manager, &mut backend)
        .expect("failing resize handled");
    assert!(main_loop.invalid_resize());
    assert!(manager.is_empty());

    // Input other than quit is inert while degraded.
    main_loop
        .handle_event(key('g'), &mut manager, &mut backend)
        .expect("ignored key handled");
    assert!(manager.is_empty());

    // Growing again restores all five panels and the previous focus.
    backend.resize(100, 30);
    main_loop
        .handle_event(TuiEvent::Resize(100, 30), &mut manager, &mut backend)
        .expect("recovery resize handled");
    assert!(!main_loop.invalid_resize());
    assert_eq!(manager.panels().len(), 5);
    assert_eq!(manager.selected_index(), 3);
    assert!(manager.panels().iter().all(|p| p.has_surface()));

    // Quit works from normal operation.
    main_loop
        .handle_event(key('q'), &mut manager, &mut backend)
        .expect("quit handled");
    assert!(main_loop.is_done());
}
