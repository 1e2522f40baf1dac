//! Facelet state capture: the 54-character URFDLB string a cube solver
//! takes as input, built from sticker world transforms and validated
//! before it goes anywhere.

use bevy::prelude::*;
use snafu::Snafu;
use std::collections::HashMap;

use crate::log;
use crate::utils::objects::{ScreenState, Sticker, StickerColor, TurnState};

pub struct FaceletsPlugin;

impl Plugin for FaceletsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, capture_on_key);
    }
}

#[derive(Debug, Snafu, PartialEq)]
pub enum FaceletError {
    #[snafu(display("cube state must have exactly 54 stickers, found {count}"))]
    StickerCount { count: usize },

    #[snafu(display("face {face} has {count} stickers instead of 9"))]
    IncompleteFace { face: char, count: usize },

    #[snafu(display("two stickers occupy the same slot on face {face}"))]
    DuplicateSlot { face: char },

    #[snafu(display("two faces share the center color {color}"))]
    AmbiguousCenters { color: &'static str },

    #[snafu(display("each of the 6 face colors must appear exactly 9 times ({color}: {count})"))]
    ColorCount { color: &'static str, count: usize },

    #[snafu(display("color {color} matches no center sticker"))]
    UncenteredColor { color: &'static str },
}

/// One sticker as seen in world space.
#[derive(Clone, Copy, Debug)]
pub struct StickerSample {
    pub normal: Vec3,
    pub position: Vec3,
    pub color: StickerColor,
}

/// The six faces in facelet-string order, each with the frame that lays its
/// nine slots out row-major (the conventional facelet numbering).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    fn normal(self) -> Vec3 {
        match self {
            Face::Up => Vec3::Y,
            Face::Right => Vec3::X,
            Face::Front => Vec3::Z,
            Face::Down => -Vec3::Y,
            Face::Left => -Vec3::X,
            Face::Back => -Vec3::Z,
        }
    }

    /// In-face axis along which slot columns increase.
    fn right(self) -> Vec3 {
        match self {
            Face::Up => Vec3::X,
            Face::Right => -Vec3::Z,
            Face::Front => Vec3::X,
            Face::Down => Vec3::X,
            Face::Left => Vec3::Z,
            Face::Back => -Vec3::X,
        }
    }

    /// In-face axis along which slot rows increase.
    fn down(self) -> Vec3 {
        match self {
            Face::Up => Vec3::Z,
            Face::Right => -Vec3::Y,
            Face::Front => -Vec3::Y,
            Face::Down => -Vec3::Z,
            Face::Left => -Vec3::Y,
            Face::Back => -Vec3::Y,
        }
    }
}

/// Sort each face's stickers into their nine slots.
fn face_slots(samples: &[StickerSample]) -> Result<[[StickerColor; 9]; 6], FaceletError> {
    let mut faces = [[None::<StickerColor>; 9]; 6];

    for (face_index, face) in Face::ALL.into_iter().enumerate() {
        let mut count = 0;
        for sample in samples {
            if sample.normal.normalize_or_zero().dot(face.normal()) < 0.9 {
                continue;
            }
            let row = sample.position.dot(face.down()).round() as i32;
            let col = sample.position.dot(face.right()).round() as i32;
            if !(-1..=1).contains(&row) || !(-1..=1).contains(&col) {
                // Off-grid sticker; the per-face count below will flag it.
                continue;
            }
            count += 1;
            let slot = ((row + 1) * 3 + (col + 1)) as usize;
            if faces[face_index][slot].is_some() {
                return Err(FaceletError::DuplicateSlot {
                    face: face.letter(),
                });
            }
            faces[face_index][slot] = Some(sample.color);
        }
        if count != 9 {
            return Err(FaceletError::IncompleteFace {
                face: face.letter(),
                count,
            });
        }
    }

    // All nine slots of every face are filled once the counts check out.
    let mut out = [[StickerColor::White; 9]; 6];
    for (face_index, face) in faces.iter().enumerate() {
        for (slot, color) in face.iter().enumerate() {
            match color {
                Some(c) => out[face_index][slot] = *c,
                None => {
                    return Err(FaceletError::DuplicateSlot {
                        face: Face::ALL[face_index].letter(),
                    });
                }
            }
        }
    }
    Ok(out)
}

/// Build the 54-character facelet string from sticker world samples,
/// validating what a solver input requires: 54 stickers, 9 of each of the
/// 6 colors, and pairwise distinct centers.
pub fn capture_facelets(samples: &[StickerSample]) -> Result<String, FaceletError> {
    if samples.len() != 54 {
        return Err(FaceletError::StickerCount {
            count: samples.len(),
        });
    }

    let faces = face_slots(samples)?;

    // The center sticker names its face's letter.
    let mut letter_of_color: HashMap<StickerColor, char> = HashMap::new();
    for (face_index, face) in Face::ALL.into_iter().enumerate() {
        let center = faces[face_index][4];
        if letter_of_color.insert(center, face.letter()).is_some() {
            return Err(FaceletError::AmbiguousCenters {
                color: center.name(),
            });
        }
    }

    let mut counts: HashMap<StickerColor, usize> = HashMap::new();
    for face in &faces {
        for color in face {
            *counts.entry(*color).or_insert(0) += 1;
        }
    }
    for color in StickerColor::PALETTE {
        let count = counts.get(&color).copied().unwrap_or(0);
        if count != 9 {
            return Err(FaceletError::ColorCount {
                color: color.name(),
                count,
            });
        }
    }

    let mut out = String::with_capacity(54);
    for face in &faces {
        for color in face {
            let letter = letter_of_color
                .get(color)
                .copied()
                .ok_or(FaceletError::UncenteredColor {
                    color: color.name(),
                })?;
            out.push(letter);
        }
    }
    Ok(out)
}

/// C on an interactive screen logs the captured facelet string, or why the
/// current paint job is not a legal cube state.
pub fn capture_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    screen_state: Res<ScreenState>,
    turn_state: Res<TurnState>,
    stickers: Query<(&GlobalTransform, &Sticker)>,
) {
    if !screen_state.screen.is_interactive() || !keyboard.just_pressed(KeyCode::KeyC) {
        return;
    }
    // Mid-turn transforms are off the grid; wait the animation out.
    if turn_state.is_animating() {
        return;
    }

    let samples: Vec<StickerSample> = stickers
        .iter()
        .map(|(transform, sticker)| {
            let (_, rotation, translation) = transform.to_scale_rotation_translation();
            StickerSample {
                normal: rotation * Vec3::Z,
                position: translation,
                color: sticker.color,
            }
        })
        .collect();

    match capture_facelets(&samples) {
        Ok(facelets) => {
            log!("cube state: {facelets}");
        }
        Err(e) => warn!("cube state capture failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::cube_constants::STICKER_OFFSET;

    /// The 54 samples of a solved cube in home orientation.
    fn solved_samples() -> Vec<StickerSample> {
        let mut samples = Vec::new();
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    let grid = IVec3::new(x, y, z);
                    for dir in [
                        IVec3::new(1, 0, 0),
                        IVec3::new(-1, 0, 0),
                        IVec3::new(0, 1, 0),
                        IVec3::new(0, -1, 0),
                        IVec3::new(0, 0, 1),
                        IVec3::new(0, 0, -1),
                    ] {
                        if grid.dot(dir) != 1 {
                            continue;
                        }
                        let normal = dir.as_vec3();
                        samples.push(StickerSample {
                            normal,
                            position: grid.as_vec3() + normal * STICKER_OFFSET,
                            color: StickerColor::for_face(dir).unwrap(),
                        });
                    }
                }
            }
        }
        samples
    }

    #[test]
    fn a_solved_cube_captures_as_the_identity_string() {
        let samples = solved_samples();
        assert_eq!(samples.len(), 54);
        assert_eq!(
            capture_facelets(&samples).unwrap(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn too_few_stickers_are_rejected() {
        let mut samples = solved_samples();
        samples.pop();
        assert_eq!(
            capture_facelets(&samples),
            Err(FaceletError::StickerCount { count: 53 })
        );
    }

    #[test]
    fn unbalanced_colors_are_rejected() {
        let mut samples = solved_samples();
        // Paint one non-center white sticker red: 8 whites, 10 reds.
        let idx = samples
            .iter()
            .position(|s| {
                s.color == StickerColor::White
                    && (s.position.x.abs() > 0.5 || s.position.z.abs() > 0.5)
            })
            .unwrap();
        samples[idx].color = StickerColor::Red;
        assert!(matches!(
            capture_facelets(&samples),
            Err(FaceletError::ColorCount { .. })
        ));
    }

    #[test]
    fn duplicate_center_colors_are_rejected() {
        let mut samples = solved_samples();
        // Paint the up-face center yellow, matching the down-face center.
        let idx = samples
            .iter()
            .position(|s| s.normal == Vec3::Y && s.position.x == 0.0 && s.position.z == 0.0)
            .unwrap();
        samples[idx].color = StickerColor::Yellow;
        assert!(matches!(
            capture_facelets(&samples),
            Err(FaceletError::AmbiguousCenters { .. })
                | Err(FaceletError::ColorCount { .. })
        ));
    }

    #[test]
    fn a_quarter_turned_top_layer_still_counts_nine_of_each_letter() {
        let turn = Quat::from_axis_angle(Vec3::Y, -std::f32::consts::FRAC_PI_2);
        let samples: Vec<StickerSample> = solved_samples()
            .into_iter()
            .map(|mut s| {
                // Rotate the stickers of the y=1 layer, owners included.
                if s.position.y > 0.5 {
                    s.position = turn * s.position;
                    s.normal = turn * s.normal;
                }
                s
            })
            .collect();
        let facelets = capture_facelets(&samples).unwrap();
        assert_eq!(facelets.len(), 54);
        for letter in ['U', 'R', 'F', 'D', 'L', 'B'] {
            assert_eq!(facelets.chars().filter(|c| *c == letter).count(), 9);
        }
        // The top face itself is untouched by a U turn.
        assert_eq!(&facelets[0..9], "UUUUUUUUU");
        // A clockwise U cycles F->L->B->R, so R's top row shows B's colors.
        assert_eq!(&facelets[9..12], "BBB");
    }

    #[test]
    fn swapped_stickers_keep_a_legal_state() {
        let mut samples = solved_samples();
        let white = samples
            .iter()
            .position(|s| s.color == StickerColor::White && s.position.x > 0.5)
            .unwrap();
        let green = samples
            .iter()
            .position(|s| s.color == StickerColor::Green && s.position.x < -0.5)
            .unwrap();
        samples[white].color = StickerColor::Green;
        samples[green].color = StickerColor::White;
        let facelets = capture_facelets(&samples).unwrap();
        for letter in ['U', 'R', 'F', 'D', 'L', 'B'] {
            assert_eq!(facelets.chars().filter(|c| *c == letter).count(), 9);
        }
        assert_ne!(
            facelets,
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }
}
