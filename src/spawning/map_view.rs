use bevy::prelude::*;
use crate::core::config::AdventureConfig;
use crate::core::walker::WaypointWalker;
use crate::core::waypoint::WaypointTable;
use crate::event_system::walker_events::AdvanceRequested;
use crate::management::asset_management::MapAssets;
use crate::management::routing::MapEntry;
use crate::spawning::helpers::{centered_row, text_font};

const BUTTON_COLOR: Color = Color::srgb(1.0, 0.8, 0.0);
const BUTTON_HOVER_COLOR: Color = Color::srgb(1.0, 0.867, 0.267);
const BUTTON_TEXT_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const FALLBACK_MAP_COLOR: Color = Color::srgb(0.36, 0.55, 0.32);
const FALLBACK_AVATAR_COLOR: Color = Color::srgb(0.85, 0.25, 0.2);

#[derive(Component)]
pub struct WaypointTitle;

#[derive(Component)]
pub struct ArrivalMessage;

#[derive(Component)]
pub struct Avatar;

#[derive(Component)]
pub struct AdvanceButton;

/// Builds the visible map under every newly spawned walker.
pub fn spawn_map_view(
    mut commands: Commands,
    added: Query<(Entity, &WaypointWalker), Added<WaypointWalker>>,
    table: Res<WaypointTable>,
    entry: Res<MapEntry>,
    config: Res<AdventureConfig>,
    assets: Option<Res<MapAssets>>,
) {
    let font = assets.as_ref().map(|a| &a.font);

    for (root, walker) in added.iter() {
        let mut screen = commands.entity(root);
        screen.insert(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        });
        match assets.as_ref() {
            Some(assets) => {
                screen.insert(ImageNode::new(assets.background.clone()));
            }
            None => {
                screen.insert(BackgroundColor(FALLBACK_MAP_COLOR));
            }
        }

        let position = walker.position();
        screen.with_children(|parent| {
            parent
                .spawn(centered_row(Node { top: Val::Px(20.0), ..default() }))
                .with_children(|row| {
                    row.spawn((
                        Text::new(table.labels.arrival_prefix.clone()),
                        text_font(font, 34.0),
                        TextColor(Color::WHITE),
                        Node { padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)), ..default() },
                        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
                        BorderRadius::all(Val::Px(10.0)),
                        WaypointTitle,
                    ));
                });

            parent
                .spawn(centered_row(Node { bottom: Val::Percent(20.0), ..default() }))
                .with_children(|row| {
                    row.spawn((
                        Text::default(),
                        text_font(font, 26.0),
                        TextColor(Color::WHITE),
                        Node { padding: UiRect::all(Val::Px(15.0)), ..default() },
                        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                        BorderRadius::all(Val::Px(10.0)),
                        Visibility::Hidden,
                        ArrivalMessage,
                    ));
                });

            let avatar_node = Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(position.x),
                top: Val::Percent(position.y),
                width: Val::Px(config.avatar_width_px),
                ..default()
            };
            match assets.as_ref() {
                Some(assets) => {
                    parent.spawn((avatar_node, ImageNode::new(assets.avatar(entry.avatar)), Avatar));
                }
                None => {
                    parent.spawn((
                        Node { height: Val::Px(config.avatar_width_px), ..avatar_node },
                        BackgroundColor(FALLBACK_AVATAR_COLOR),
                        BorderRadius::MAX,
                        Avatar,
                    ));
                }
            }

            parent
                .spawn(centered_row(Node { bottom: Val::Px(30.0), ..default() }))
                .with_children(|row| {
                    row.spawn((
                        Button,
                        Node { padding: UiRect::axes(Val::Px(40.0), Val::Px(15.0)), ..default() },
                        BackgroundColor(BUTTON_COLOR),
                        BorderRadius::all(Val::Px(30.0)),
                        AdvanceButton,
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(table.labels.advance_button.clone()),
                            text_font(font, 24.0),
                            TextColor(BUTTON_TEXT_COLOR),
                        ));
                    });
                });
        });
    }
}

pub fn update_map_view(
    walkers: Query<&WaypointWalker, Changed<WaypointWalker>>,
    table: Res<WaypointTable>,
    config: Res<AdventureConfig>,
    mut titles: Query<&mut Text, (With<WaypointTitle>, Without<ArrivalMessage>)>,
    mut messages: Query<(&mut Text, &mut Visibility), (With<ArrivalMessage>, Without<WaypointTitle>)>,
    mut avatars: Query<&mut Node, With<Avatar>>,
) {
    let Ok(walker) = walkers.get_single() else {
        return;
    };
    let Some(waypoint) = table.get(walker.current_index()) else {
        return;
    };

    for mut title in titles.iter_mut() {
        title.0 = format!("{}{}", table.labels.arrival_prefix, waypoint.name);
    }

    for (mut text, mut visibility) in messages.iter_mut() {
        text.0 = waypoint.message.clone();
        *visibility = if walker.arrival_message_visible() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    // Lift the avatar while it is moving so it looks like a hop.
    let hop = if walker.is_animating() { -config.hop_offset_px } else { 0.0 };
    let position = walker.position();
    for mut node in avatars.iter_mut() {
        node.left = Val::Percent(position.x);
        node.top = Val::Percent(position.y);
        node.margin.top = Val::Px(hop);
    }
}

pub fn advance_button_system(
    mut interactions: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<AdvanceButton>)>,
    mut advance: EventWriter<AdvanceRequested>,
) {
    for (interaction, mut color) in interactions.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                advance.send(AdvanceRequested);
            }
            Interaction::Hovered => *color = BackgroundColor(BUTTON_HOVER_COLOR),
            Interaction::None => *color = BackgroundColor(BUTTON_COLOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_system::walker_plugin::tests::{map_app, press, run_until_reached, with_routing};
    use crate::spawning::view_plugin::MapViewPlugin;

    fn map_app_with_view() -> App {
        map_app(MapEntry::default(), |app| {
            with_routing(app);
            app.add_plugins(MapViewPlugin);
        })
    }

    fn title(app: &mut App) -> String {
        let mut query = app.world_mut().query_filtered::<&Text, With<WaypointTitle>>();
        query.single(app.world()).0.clone()
    }

    fn message(app: &mut App) -> (String, Visibility) {
        let mut query = app.world_mut().query_filtered::<(&Text, &Visibility), With<ArrivalMessage>>();
        let (text, visibility) = query.single(app.world());
        (text.0.clone(), *visibility)
    }

    fn avatar(app: &mut App) -> Node {
        let mut query = app.world_mut().query_filtered::<&Node, With<Avatar>>();
        query.single(app.world()).clone()
    }

    fn assert_percent(value: Val, expected: f32) {
        match value {
            Val::Percent(actual) => assert!((actual - expected).abs() < 1e-3, "{} != {}", actual, expected),
            other => panic!("expected a percentage, got {:?}", other),
        }
    }

    fn waypoint(app: &App, index: usize) -> (String, String) {
        let table = app.world().resource::<WaypointTable>();
        let waypoint = table.get(index).unwrap();
        (format!("{}{}", table.labels.arrival_prefix, waypoint.name), waypoint.message.clone())
    }

    #[test]
    fn map_opens_on_the_entry_waypoint_with_the_message_hidden() {
        let mut app = map_app_with_view();
        let (expected_title, _) = waypoint(&app, 0);

        assert_eq!(title(&mut app), expected_title);
        assert_eq!(message(&mut app).1, Visibility::Hidden);

        let node = avatar(&mut app);
        assert_percent(node.left, 27.0);
        assert_percent(node.top, 35.0);
        assert_eq!(node.margin.top, Val::Px(0.0));
    }

    #[test]
    fn avatar_hops_and_tracks_the_walker_while_moving() {
        let mut app = map_app_with_view();

        press(&mut app);
        assert_eq!(avatar(&mut app).margin.top, Val::Px(-15.0));

        app.update();
        let node = avatar(&mut app);
        assert_eq!(node.margin.top, Val::Px(-15.0));
        assert_percent(node.left, 28.5);
        assert_percent(node.top, 33.2);
        assert_eq!(message(&mut app).1, Visibility::Hidden);
    }

    #[test]
    fn arrival_shows_the_message_then_reentry_hides_it() {
        let mut app = map_app_with_view();
        let (expected_title, expected_message) = waypoint(&app, 1);

        press(&mut app);
        for _ in 0..10 {
            app.update();
        }

        assert_eq!(title(&mut app), expected_title);
        assert_eq!(message(&mut app), (expected_message.clone(), Visibility::Inherited));
        let node = avatar(&mut app);
        assert_eq!(node.margin.top, Val::Px(0.0));
        assert_percent(node.left, 42.0);
        assert_percent(node.top, 17.0);

        run_until_reached(&mut app);
        app.update();

        assert_eq!(title(&mut app), expected_title);
        assert_eq!(message(&mut app), (expected_message, Visibility::Hidden));
        assert_eq!(avatar(&mut app).margin.top, Val::Px(0.0));
    }
}
