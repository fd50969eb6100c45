use bevy::prelude::*;
use crate::core::waypoint::WaypointTable;
use crate::management::asset_management::MapAssets;
use crate::spawning::helpers::text_font;

#[derive(Component)]
pub struct CompletionScreen;

pub fn spawn_completion_screen(
    mut commands: Commands,
    table: Res<WaypointTable>,
    assets: Option<Res<MapAssets>>,
) {
    let font = assets.as_ref().map(|a| &a.font);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.1, 0.1, 0.25)),
            Name::new("CompletionScreen"),
            CompletionScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(table.labels.completion_title.clone()),
                text_font(font, 48.0),
                TextColor(Color::WHITE),
            ));
        });
}
