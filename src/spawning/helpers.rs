use bevy::prelude::*;

pub fn despawn_screen<T: Component>(mut commands: Commands, screens: Query<Entity, With<T>>) {
    for entity in screens.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

// Full-width absolute row that centers its children horizontally.
pub fn centered_row(anchor: Node) -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        ..anchor
    }
}

pub fn text_font(font: Option<&Handle<Font>>, font_size: f32) -> TextFont {
    TextFont {
        font: font.cloned().unwrap_or_default(),
        font_size,
        ..default()
    }
}
