//! Scene construction: lighting and the 3x3x3 cube itself.

use bevy::prelude::*;

use crate::utils::constants::cube_constants::{
    CUBIE_SIZE, CUBIE_SPACING, STICKER_METALLIC, STICKER_OFFSET, STICKER_ROUGHNESS, STICKER_SIZE,
};
use crate::utils::constants::light_constants::{
    AMBIENT_BRIGHTNESS, DIRECTIONAL_LIGHT_ILLUMINANCE, DIRECTIONAL_LIGHT_POS,
};
use crate::utils::objects::{CubeEntity, Cubie, Sticker, StickerColor};

/// Plugin for the static environment, spawned once at startup.
pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_environment);
    }
}

/// Lights persist across screens; only the cube is rebuilt on navigation.
pub fn setup_environment(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POS).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });

    commands.insert_resource(ClearColor(Color::srgb(0.059, 0.059, 0.063)));
}

/// The six outward face directions of the cube.
const FACE_DIRS: [IVec3; 6] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// Spawn the 27 cubies with their stickers. Every sticker gets its own
/// material so a single sticker can be recolored without touching the rest.
pub fn spawn_cube(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let body_mesh = meshes.add(Cuboid::new(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE));
    let body_material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        ..default()
    });
    let sticker_mesh = meshes.add(Rectangle::new(STICKER_SIZE, STICKER_SIZE));

    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let grid = IVec3::new(x, y, z);
                let mut cubie = commands.spawn((
                    Mesh3d(body_mesh.clone()),
                    MeshMaterial3d(body_material.clone()),
                    Transform::from_translation(grid.as_vec3() * CUBIE_SPACING),
                    Cubie,
                    CubeEntity,
                ));

                cubie.with_children(|parent| {
                    for dir in FACE_DIRS {
                        // Only coordinates on the surface get a sticker.
                        if grid.dot(dir) != 1 {
                            continue;
                        }
                        let Some(color) = StickerColor::for_face(dir) else {
                            continue;
                        };
                        let normal = dir.as_vec3();
                        parent.spawn((
                            Mesh3d(sticker_mesh.clone()),
                            MeshMaterial3d(materials.add(sticker_material(color))),
                            Transform::from_translation(normal * STICKER_OFFSET)
                                .with_rotation(Quat::from_rotation_arc(Vec3::Z, normal)),
                            Sticker { color },
                        ));
                    }
                });
            }
        }
    }
}

pub fn sticker_material(color: StickerColor) -> StandardMaterial {
    StandardMaterial {
        base_color: color.color(),
        metallic: STICKER_METALLIC,
        perceptual_roughness: STICKER_ROUGHNESS,
        double_sided: true,
        cull_mode: None, // Render both sides, stickers are visible edge-on
        ..default()
    }
}
