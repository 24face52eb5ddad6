// SPDX-License-Identifier: MPL-2.0
use iced_feedback::config::SnackbarConfig;
use iced_feedback::ui::snackbar::{
    ClickOutcome, Phase, Snackbar, SnackbarElement, SnackbarEvent, SnackbarHandleExt,
    SnackbarManager, SnackbarMessage, SnackbarOptions,
};
use std::rc::Rc;
use std::time::{Duration, Instant};

fn quick_options() -> SnackbarOptions {
    SnackbarOptions::from_config(&SnackbarConfig {
        visible_ms: 1000,
        show_transition_ms: 200,
        hide_transition_ms: 200,
        ..SnackbarConfig::default()
    })
}

#[test]
fn lifecycle_with_pause_and_resume() {
    let start = Instant::now();
    let at = |ms: u64| start + Duration::from_millis(ms);
    let mut snackbar = Snackbar::new("Saved", quick_options());

    snackbar.init_at(at(0));
    snackbar.tick_at(at(200));
    assert_eq!(snackbar.state().phase(), Phase::Visible);

    // pointer rests on the snackbar for a long time
    snackbar.pause_transitions_at(true, at(700));
    snackbar.tick_at(at(10_000));
    assert_eq!(snackbar.state().phase(), Phase::Visible);
    snackbar.pause_transitions_at(false, at(10_000));

    snackbar.tick_at(at(10_500));
    assert_eq!(snackbar.state().phase(), Phase::Hiding);
    snackbar.tick_at(at(10_700));
    assert!(snackbar.is_finished());
}

#[test]
fn hovered_snackbar_closes_while_the_pointer_stays_on_it() {
    let start = Instant::now();
    let at = |ms: u64| start + Duration::from_millis(ms);
    let mut manager = SnackbarManager::default();
    let handle = Snackbar::new("Saved", quick_options()).into_handle();
    let id = manager.push_handle(Rc::clone(&handle));
    manager.tick_at(at(250));
    assert_eq!(handle.borrow().state().phase(), Phase::Visible);

    // the pointer is still over the card when the close icon is clicked
    manager.update(SnackbarMessage::InteractionStarted(id));
    assert_eq!(
        manager.update(SnackbarMessage::CloseClicked(id)),
        Some(SnackbarEvent::Dismissed(id))
    );
    manager.tick_at(at(10_000));

    assert!(handle.borrow().is_finished());
    assert!(!manager.has_snackbars());
}

#[test]
fn detached_element_no_longer_renders() {
    let handle = Snackbar::new("Saved", quick_options()).into_handle();
    let mut element = SnackbarElement::new(Rc::clone(&handle));
    element.attach();
    let renders = element.render_count();

    handle.pause_transitions(true);
    assert_eq!(element.render_count(), renders + 1);

    element.detach();
    handle.pause_transitions(false);
    handle.clicked(true);
    assert_eq!(element.render_count(), renders + 1);
}

#[test]
fn action_button_swallows_background_clicks() {
    let handle = Snackbar::new("Rated 4", quick_options())
        .with_action("Undo")
        .into_handle();
    let mut element = SnackbarElement::new(Rc::clone(&handle));
    element.attach();

    assert!(element.show_action_button());
    assert_eq!(element.background_clicked(), None);
    assert_eq!(element.close_clicked(), Some(ClickOutcome::Dismissed));
    assert_eq!(element.action_clicked(), None);
}

#[test]
fn manager_queues_and_promotes() {
    let config = SnackbarConfig {
        max_visible: 2,
        ..SnackbarConfig::default()
    };
    let mut manager = SnackbarManager::from_config(&config);

    let first = manager.push(Snackbar::info("one"));
    manager.push(Snackbar::info("two"));
    let third = Snackbar::info("three").into_handle();
    manager.push_handle(Rc::clone(&third));
    assert_eq!(manager.queued_count(), 1);
    assert_eq!(third.borrow().state().phase(), Phase::Init);

    assert_eq!(
        manager.update(SnackbarMessage::CloseClicked(first)),
        Some(SnackbarEvent::Dismissed(first))
    );
    // hidden only after the hide transition
    manager.tick_at(Instant::now() + Duration::from_secs(1));
    assert_eq!(manager.queued_count(), 0);
    assert_eq!(third.borrow().state().phase(), Phase::Showing);
}

#[test]
fn action_click_is_reported_once() {
    let mut manager = SnackbarManager::default();
    let id = manager.push(Snackbar::success("Rated 5").with_action("Undo"));

    assert_eq!(
        manager.update(SnackbarMessage::ActionClicked(id)),
        Some(SnackbarEvent::ActionClicked(id))
    );
    assert_eq!(manager.update(SnackbarMessage::ActionClicked(id)), None);
}
