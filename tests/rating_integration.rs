// SPDX-License-Identifier: MPL-2.0
use iced::keyboard::{key::Named, Key, Modifiers};
use iced_feedback::config::RatingConfig;
use iced_feedback::domain::{MaxValue, ThemeColor};
use iced_feedback::ui::rating::{
    select, Appearance, IconState, RatingController, RatingEvent, RatingMessage,
};

fn press(rating: &mut RatingController, named: Named, shift: bool) -> Vec<RatingEvent> {
    let modifiers = if shift {
        Modifiers::SHIFT
    } else {
        Modifiers::empty()
    };
    rating.update(RatingMessage::KeyPressed {
        key: Key::Named(named),
        modifiers,
    })
}

#[test]
fn keyboard_walk_on_twelve_items() {
    let mut rating = RatingController::new(MaxValue::new(12));

    press(&mut rating, Named::ArrowRight, false);
    assert_eq!(rating.value(), 1.0);
    press(&mut rating, Named::ArrowLeft, false);
    assert_eq!(rating.value(), 0.0);

    assert!(press(&mut rating, Named::ArrowLeft, false).is_empty());
    assert_eq!(rating.value(), 0.0);

    let events = press(&mut rating, Named::ArrowRight, true);
    assert_eq!(rating.value(), 12.0);
    assert_eq!(
        events,
        vec![
            RatingEvent::ValueChanged(12.0),
            RatingEvent::RoundedValueChanged(12)
        ]
    );

    assert!(press(&mut rating, Named::ArrowRight, true).is_empty());
    press(&mut rating, Named::ArrowLeft, true);
    assert_eq!(rating.value(), 0.0);
}

#[test]
fn pointer_session_over_items() {
    let mut rating = RatingController::default();

    assert_eq!(
        rating.update(RatingMessage::PointerOver(4)),
        vec![RatingEvent::HoveredChanged(Some(4))]
    );
    assert_eq!(rating.hovered(), Some(4));

    rating.update(RatingMessage::Clicked(4));
    assert_eq!(rating.value(), 4.0);

    rating.update(RatingMessage::PointerOut(4));
    assert_eq!(rating.hovered(), None);

    // second click on the same item clears the rating
    rating.update(RatingMessage::Clicked(4));
    assert_eq!(rating.value(), 0.0);
}

#[test]
fn read_only_rating_from_config_ignores_input() {
    let config = RatingConfig {
        read_only: true,
        ..RatingConfig::default()
    };
    let mut rating = RatingController::from_config(&config).with_value(3.0);

    assert!(rating.update(RatingMessage::PointerOver(1)).is_empty());
    assert!(rating.update(RatingMessage::Clicked(1)).is_empty());
    assert!(press(&mut rating, Named::ArrowRight, false).is_empty());
    assert_eq!(rating.value(), 3.0);
}

#[test]
fn hover_overrides_value_icons() {
    let mut rating = RatingController::default().with_value(1.0);
    rating.update(RatingMessage::PointerOver(3));

    let snapshot = rating.snapshot();
    let icons: Vec<IconState> = rating
        .items()
        .iter()
        .map(|item| item.icon(Some(&snapshot)).icon)
        .collect();

    assert_eq!(
        icons,
        vec![
            IconState::Full,
            IconState::Full,
            IconState::Full,
            IconState::Empty,
            IconState::Empty
        ]
    );
}

#[test]
fn icon_thresholds_at_the_third_item() {
    assert_eq!(select(2.24, 3, None).icon, IconState::Empty);
    assert_eq!(select(2.26, 3, None).icon, IconState::Half);
    assert_eq!(select(2.74, 3, None).icon, IconState::Half);
    assert_eq!(select(2.76, 3, None).icon, IconState::Full);
}

#[test]
fn state_colors_follow_the_icon() {
    let config = RatingConfig {
        full_color: Some(ThemeColor::Warning),
        empty_color: Some(ThemeColor::Dark),
        ..RatingConfig::default()
    };
    let appearance = Appearance::from_config(&config);

    assert_eq!(
        appearance.paint(&select(3.0, 2, None)).color,
        ThemeColor::Warning
    );
    assert_eq!(
        appearance.paint(&select(0.0, 2, None)).color,
        ThemeColor::Dark
    );
    // unset half color inherits the item color
    assert_eq!(
        appearance.paint(&select(1.5, 2, None)).color,
        ThemeColor::Default
    );
}

#[test]
fn shrinking_max_value_clamps_the_value() {
    let mut rating = RatingController::new(MaxValue::new(10)).with_value(8.0);
    let events = rating.set_max_value(MaxValue::new(5));

    assert_eq!(rating.value(), 5.0);
    assert_eq!(rating.items().len(), 5);
    assert!(events.contains(&RatingEvent::ValueChanged(5.0)));
}
