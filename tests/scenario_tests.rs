//! End-to-end gesture scenarios driven through the dispatcher.

use corkboard::{
    Dispatcher, Entity, InputEvent, LinkingState, PointerEvent, ReactingState, Seed,
};

fn seeded(entities: &[(&str, f64, f64)]) -> Dispatcher {
    let mut seed = Seed::default();
    for (id, x, y) in entities {
        seed.entities
            .insert((*id).to_string(), Entity::pin((*id).to_string(), *x, *y));
    }
    Dispatcher::new(seed).unwrap()
}

fn move_over(dispatcher: &mut Dispatcher, x: f64, y: f64, target: &str) {
    dispatcher.send(InputEvent::PointerMove(PointerEvent::at(x, y).over(target)));
}

#[test]
fn dragging_the_board_pans_the_camera() {
    let mut dispatcher = seeded(&[]);

    move_over(&mut dispatcher, 0.0, 0.0, "corkboard");
    dispatcher.send(InputEvent::PointerDown(
        PointerEvent::at(0.0, 0.0).over("corkboard"),
    ));
    assert_eq!(dispatcher.configuration().reacting, ReactingState::Panning);

    move_over(&mut dispatcher, 10.0, 4.0, "corkboard");
    assert_eq!(dispatcher.context().pan_x, 10.0);
    assert_eq!(dispatcher.context().pan_y, 4.0);

    move_over(&mut dispatcher, 13.0, 10.0, "corkboard");
    assert_eq!(dispatcher.context().pan_x, 13.0);
    assert_eq!(dispatcher.context().pan_y, 10.0);

    dispatcher.send(InputEvent::PointerUp(
        PointerEvent::at(13.0, 10.0).over("corkboard"),
    ));
    assert_eq!(dispatcher.configuration().reacting, ReactingState::Idle);
}

#[test]
fn placing_a_pin_drops_it_at_the_world_position() {
    let mut dispatcher = seeded(&[]);

    dispatcher.send(InputEvent::Zoom { scale: 2.0 });
    move_over(&mut dispatcher, 10.0, 6.0, "corkboard");

    dispatcher.send(InputEvent::BeginPlacingPin);
    assert_eq!(
        dispatcher.configuration().reacting,
        ReactingState::PlacingPin
    );

    dispatcher.send(InputEvent::PointerUp(
        PointerEvent::at(10.0, 6.0).over("corkboard"),
    ));
    assert_eq!(dispatcher.configuration().reacting, ReactingState::Idle);

    let context = dispatcher.context();
    assert_eq!(context.entities.len(), 1);
    let pin = context.entities.values().next().unwrap();
    assert_eq!(pin.kind(), "pin");
    assert_eq!(pin.x, 10.0 / 2.0);
    assert_eq!(pin.y, 6.0 / 2.0);
}

#[test]
fn dragging_an_entity_moves_it_and_releases_the_selection() {
    let mut dispatcher = seeded(&[("e", 100.0, 100.0)]);

    move_over(&mut dispatcher, 100.0, 100.0, "e");
    dispatcher.send(InputEvent::PointerDown(
        PointerEvent::at(100.0, 100.0).over("e"),
    ));
    assert_eq!(dispatcher.configuration().reacting, ReactingState::Moving);
    assert_eq!(dispatcher.context().selected_ids, vec!["e".to_string()]);

    move_over(&mut dispatcher, 105.0, 98.0, "e");
    assert_eq!(dispatcher.context().entities["e"].x, 105.0);
    assert_eq!(dispatcher.context().entities["e"].y, 98.0);

    dispatcher.send(InputEvent::PointerUp(
        PointerEvent::at(105.0, 98.0).over("e"),
    ));
    assert_eq!(dispatcher.configuration().reacting, ReactingState::Idle);
    assert!(dispatcher.context().selected_ids.is_empty());
}

#[test]
fn linking_two_entities_connects_the_first_to_the_second() {
    let mut dispatcher = seeded(&[("a", 0.0, 0.0), ("b", 50.0, 50.0)]);

    dispatcher.send(InputEvent::BeginLinking);
    assert_eq!(
        dispatcher.configuration().reacting,
        ReactingState::Linking(LinkingState::FirstPoint)
    );

    move_over(&mut dispatcher, 0.0, 0.0, "a");
    dispatcher.send(InputEvent::PointerUp(PointerEvent::at(0.0, 0.0).over("a")));
    assert_eq!(
        dispatcher.configuration().reacting,
        ReactingState::Linking(LinkingState::SecondPoint)
    );
    assert_eq!(dispatcher.context().selected_ids, vec!["a".to_string()]);

    move_over(&mut dispatcher, 50.0, 50.0, "b");
    dispatcher.send(InputEvent::PointerDown(
        PointerEvent::at(50.0, 50.0).over("b"),
    ));

    assert_eq!(dispatcher.configuration().reacting, ReactingState::Idle);
    assert_eq!(
        dispatcher.context().entities["a"].links,
        Some(vec!["b".to_string()])
    );
    assert!(dispatcher.context().selected_ids.is_empty());
}

#[test]
fn abandoned_linking_leaves_no_selection_behind() {
    let mut dispatcher = seeded(&[("a", 0.0, 0.0)]);

    dispatcher.send(InputEvent::BeginLinking);

    // First click misses every entity: linking finishes immediately.
    move_over(&mut dispatcher, 200.0, 200.0, "corkboard");
    dispatcher.send(InputEvent::PointerUp(
        PointerEvent::at(200.0, 200.0).over("corkboard"),
    ));

    assert_eq!(dispatcher.configuration().reacting, ReactingState::Idle);
    assert!(dispatcher.context().selected_ids.is_empty());
    assert_eq!(dispatcher.context().entities["a"].links, None);
}

#[test]
fn shift_clicking_appends_to_the_selection() {
    let mut dispatcher = seeded(&[("c", 0.0, 0.0), ("d", 10.0, 10.0)]);

    move_over(&mut dispatcher, 0.0, 0.0, "c");
    dispatcher.send(InputEvent::PointerDown(
        PointerEvent::at(0.0, 0.0).over("c").with_shift(),
    ));
    assert_eq!(dispatcher.configuration().reacting, ReactingState::Selecting);

    dispatcher.send(InputEvent::PointerUp(PointerEvent::at(0.0, 0.0).over("c")));
    assert_eq!(dispatcher.configuration().reacting, ReactingState::Idle);
    assert_eq!(dispatcher.context().selected_ids, vec!["c".to_string()]);

    // A second shift-click accumulates rather than replacing.
    move_over(&mut dispatcher, 10.0, 10.0, "d");
    dispatcher.send(InputEvent::PointerDown(
        PointerEvent::at(10.0, 10.0).over("d").with_shift(),
    ));
    dispatcher.send(InputEvent::PointerUp(
        PointerEvent::at(10.0, 10.0).over("d"),
    ));

    assert_eq!(
        dispatcher.context().selected_ids,
        vec!["c".to_string(), "d".to_string()]
    );
}

#[test]
fn zooming_while_idle_rescales_the_world_mapping() {
    let mut dispatcher = seeded(&[]);

    dispatcher.send(InputEvent::Zoom { scale: 4.0 });
    assert_eq!(dispatcher.context().scale, 4.0);

    move_over(&mut dispatcher, 8.0, 8.0, "corkboard");
    assert_eq!(dispatcher.context().world_x, 2.0);
    assert_eq!(dispatcher.context().world_y, 2.0);
}
