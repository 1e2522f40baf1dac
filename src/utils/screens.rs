//! Screen state machine and per-screen UI. Navigation tears the cube and
//! UI down and rebuilds both, so nothing leaks between screens.

use bevy::prelude::*;

use crate::utils::camera::OrbitCamera;
use crate::utils::objects::{
    Brush, CubeEntity, HeadlineText, Screen, ScreenState, ScrambleState, StatusText, TurnState,
    UIEntity,
};
use crate::utils::setup::spawn_cube;
use crate::utils::typewriter::Headline;

pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenState>()
            .init_resource::<Brush>()
            .add_systems(Update, (handle_navigation, rebuild_screen, update_status).chain());
    }
}

/// N advances to the next screen.
pub fn handle_navigation(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut screen_state: ResMut<ScreenState>,
) {
    if keyboard.just_pressed(KeyCode::KeyN) {
        screen_state.screen = screen_state.screen.next();
        screen_state.is_changed = true;
        info!("screen: {}", screen_state.screen.title());
    }
}

/// Rebuilds the scene when the screen changed: despawn everything tagged,
/// forget in-flight animation state, respawn the cube and the screen's UI.
pub fn rebuild_screen(
    mut commands: Commands,
    mut screen_state: ResMut<ScreenState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut turn_state: ResMut<TurnState>,
    mut scramble: ResMut<ScrambleState>,
    mut brush: ResMut<Brush>,
    mut orbit: ResMut<OrbitCamera>,
    mut headline: ResMut<Headline>,
    cube_entities: Query<Entity, With<CubeEntity>>,
    ui_entities: Query<Entity, With<UIEntity>>,
) {
    if !screen_state.is_changed {
        return;
    }
    screen_state.is_changed = false;

    // Stale entity references would dangle past the despawn below.
    turn_state.active = None;
    scramble.clear();
    *brush = Brush::default();
    *orbit = OrbitCamera::default();
    *headline = Headline::default();

    for entity in &cube_entities {
        commands.entity(entity).try_despawn();
    }
    for entity in &ui_entities {
        commands.entity(entity).try_despawn();
    }

    spawn_cube(&mut commands, &mut meshes, &mut materials);
    spawn_screen_ui(&mut commands, screen_state.screen);
}

fn spawn_screen_ui(commands: &mut Commands, screen: Screen) {
    spawn_header(commands, screen);
    spawn_footer(commands);

    match screen {
        Screen::Home => spawn_home_ui(commands),
        Screen::Showcase => {
            spawn_status_line(commands, "Press SPACE to scramble");
            spawn_hint(commands, "Drag: orbit | Scroll: zoom | N: next screen");
        }
        Screen::Editor => {
            spawn_hint(
                commands,
                "R/L/U/D/F/B: turn a face (Shift reverses) | Click a sticker: next color | C: capture state | N: next screen",
            );
        }
        Screen::Painter => {
            spawn_status_line(commands, "Brush: white (1-6 to choose)");
            spawn_hint(
                commands,
                "Click a sticker: paint | R/L/U/D/F/B: turn | C: capture state | N: next screen",
            );
        }
    }
}

/// Brand bar across the top.
fn spawn_header(commands: &mut Commands, screen: Screen) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                column_gap: Val::Px(12.0),
                ..default()
            },
            UIEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("HelloCube"),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(screen.title()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.65)),
            ));
        });
}

fn spawn_footer(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(8.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center, // horizontally center children
                ..default()
            },
            UIEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("(c) Cube Painter. All rights reserved."),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.55, 0.55, 0.6)),
            ));
        });
}

fn spawn_home_ui(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(18.0),
                ..default()
            },
            UIEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("|"),
                TextFont {
                    font_size: 52.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                HeadlineText,
            ));
            parent.spawn((
                Text::new(
                    "Capture your Rubik's Cube in 3D and solve it instantly using \
                     advanced graph-based algorithms. No camera, no computer vision.",
                ),
                TextFont {
                    font_size: 19.0,
                    ..default()
                },
                TextColor(Color::srgb(0.75, 0.75, 0.78)),
                Node {
                    max_width: Val::Px(620.0), // limit text width for wrapping
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Press N to start solving"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.35, 0.55, 1.0)),
            ));
            parent.spawn((
                Text::new("Built with <3 using Bevy and Graph Theory"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.45, 0.45, 0.5)),
            ));
        });
}

fn spawn_status_line(commands: &mut Commands, text: &str) {
    commands.spawn((
        Text::new(text),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(60.0),
            right: Val::Px(16.0),
            ..default()
        },
        StatusText,
        UIEntity,
    ));
}

fn spawn_hint(commands: &mut Commands, text: &str) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(34.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            UIEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(text),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.73)),
            ));
        });
}

/// Keeps the status line current: scramble progress on Showcase, the brush
/// color on Painter.
pub fn update_status(
    screen_state: Res<ScreenState>,
    scramble: Res<ScrambleState>,
    brush: Res<Brush>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };
    let line = match screen_state.screen {
        Screen::Showcase => {
            if scramble.is_scrambling() {
                format!("Scrambling... ({} moves left)", scramble.queue.len())
            } else {
                "Press SPACE to scramble".to_string()
            }
        }
        Screen::Painter => format!("Brush: {} (1-6 to choose)", brush.0.name()),
        _ => return,
    };
    if text.0 != line {
        text.0 = line;
    }
}
