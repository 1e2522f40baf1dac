// This file defines the components, resources, and messages shared by the demo.
use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use std::collections::VecDeque;
use std::time::Duration;

use crate::utils::constants::demo_constants::SEED;

/// The axis a layer rotates about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The component of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// One of the six sticker colors. The discriminant order is the palette
/// cycling order used when a sticker is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StickerColor {
    White,
    Red,
    Orange,
    Blue,
    Green,
    Yellow,
}

impl StickerColor {
    pub const PALETTE: [StickerColor; 6] = [
        StickerColor::White,
        StickerColor::Red,
        StickerColor::Orange,
        StickerColor::Blue,
        StickerColor::Green,
        StickerColor::Yellow,
    ];

    /// The next color in the palette cycle, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::PALETTE.iter().position(|c| *c == self).unwrap_or(0);
        Self::PALETTE[(i + 1) % Self::PALETTE.len()]
    }

    /// CSS named-color values.
    pub fn color(self) -> Color {
        match self {
            StickerColor::White => Color::srgb(1.0, 1.0, 1.0),
            StickerColor::Red => Color::srgb(1.0, 0.0, 0.0),
            StickerColor::Orange => Color::srgb(1.0, 0.647, 0.0),
            StickerColor::Blue => Color::srgb(0.0, 0.0, 1.0),
            StickerColor::Green => Color::srgb(0.0, 0.5, 0.0),
            StickerColor::Yellow => Color::srgb(1.0, 1.0, 0.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StickerColor::White => "white",
            StickerColor::Red => "red",
            StickerColor::Orange => "orange",
            StickerColor::Blue => "blue",
            StickerColor::Green => "green",
            StickerColor::Yellow => "yellow",
        }
    }

    /// The home color of the face whose outward normal is `dir`
    /// (unit axis directions only).
    pub fn for_face(dir: IVec3) -> Option<Self> {
        match (dir.x, dir.y, dir.z) {
            (1, 0, 0) => Some(StickerColor::Red),
            (-1, 0, 0) => Some(StickerColor::Orange),
            (0, 1, 0) => Some(StickerColor::White),
            (0, -1, 0) => Some(StickerColor::Yellow),
            (0, 0, 1) => Some(StickerColor::Green),
            (0, 0, -1) => Some(StickerColor::Blue),
            _ => None,
        }
    }
}

/// The screens of the demo, cycled with the N key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    // Landing page: typewriter headline, cube idly spinning
    Home,
    // Cube plus the scramble trigger
    Showcase,
    // Keyboard turns plus click-to-cycle sticker colors
    Editor,
    // Keyboard turns plus a selectable brush color
    Painter,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Showcase,
            Screen::Showcase => Screen::Editor,
            Screen::Editor => Screen::Painter,
            Screen::Painter => Screen::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Showcase => "Showcase",
            Screen::Editor => "Editor",
            Screen::Painter => "Painter",
        }
    }

    /// Screens that accept keyboard face turns and sticker clicks.
    pub fn is_interactive(self) -> bool {
        matches!(self, Screen::Editor | Screen::Painter)
    }
}

/// A resource holding the current screen and a change flag, so the UI is
/// only rebuilt on transitions.
#[derive(Resource, Clone, Debug)]
pub struct ScreenState {
    pub screen: Screen,
    /// A flag indicating whether the screen changed since the last rebuild.
    pub is_changed: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            is_changed: true,
        }
    }
}

/// A request for a single quarter turn of one layer.
#[derive(Message, Clone, Copy, Debug)]
pub struct TurnCommand {
    pub axis: Axis,
    /// Layer index along the axis, in {-1, 0, 1}.
    pub index: i32,
    pub clockwise: bool,
    /// Animation duration in seconds.
    pub duration: f32,
}

/// The turn currently animating, if any.
#[derive(Clone, Debug)]
pub struct ActiveTurn {
    pub axis: Axis,
    pub clockwise: bool,
    pub duration: f32,
    pub started: Duration,
    pub pivot: Entity,
    pub cubies: Vec<Entity>,
}

/// A resource enforcing "at most one layer rotation animates at a time".
#[derive(Resource, Default)]
pub struct TurnState {
    pub active: Option<ActiveTurn>,
}

impl TurnState {
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}

/// Pending scramble moves, drained on a fixed cadence.
#[derive(Resource, Default)]
pub struct ScrambleState {
    pub queue: VecDeque<TurnCommand>,
    /// Elapsed time at which the next queued move may be dispatched.
    pub next_at: Duration,
}

impl ScrambleState {
    pub fn is_scrambling(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.next_at = Duration::ZERO;
    }
}

/// The paint color applied by clicks on the Painter screen.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Brush(pub StickerColor);

impl Default for Brush {
    fn default() -> Self {
        Brush(StickerColor::White)
    }
}

/// A resource for random number generation.
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    // Creates a new `RandomGen` from a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGen {
    fn default() -> Self {
        Self::from_seed(SEED)
    }
}

/// A component that marks an entity as one of the 27 cubies.
#[derive(Component)]
pub struct Cubie;

/// A component that marks a sticker overlay and carries its current color.
#[derive(Component)]
pub struct Sticker {
    pub color: StickerColor,
}

/// The temporary pivot a rotating layer is parented under.
#[derive(Component)]
pub struct TurnPivot;

/// A component that marks an entity as part of the cube scene, cleared on
/// navigation.
#[derive(Component)]
pub struct CubeEntity;

/// A component that marks an entity as screen UI, cleared on navigation.
#[derive(Component)]
pub struct UIEntity;

/// The landing headline text driven by the typewriter.
#[derive(Component)]
pub struct HeadlineText;

/// Per-frame status line (scramble progress, brush color).
#[derive(Component)]
pub struct StatusText;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_through_all_six_colors() {
        let mut c = StickerColor::White;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(c);
            c = c.next();
        }
        assert_eq!(c, StickerColor::White);
        assert_eq!(seen.len(), 6);
        for color in StickerColor::PALETTE {
            assert!(seen.contains(&color));
        }
    }

    #[test]
    fn palette_cycles_white_through_yellow_in_order() {
        assert_eq!(StickerColor::White.next(), StickerColor::Red);
        assert_eq!(StickerColor::Red.next(), StickerColor::Orange);
        assert_eq!(StickerColor::Orange.next(), StickerColor::Blue);
        assert_eq!(StickerColor::Blue.next(), StickerColor::Green);
        assert_eq!(StickerColor::Green.next(), StickerColor::Yellow);
        assert_eq!(StickerColor::Yellow.next(), StickerColor::White);
    }

    #[test]
    fn face_colors_match_the_home_mapping() {
        assert_eq!(
            StickerColor::for_face(IVec3::new(1, 0, 0)),
            Some(StickerColor::Red)
        );
        assert_eq!(
            StickerColor::for_face(IVec3::new(-1, 0, 0)),
            Some(StickerColor::Orange)
        );
        assert_eq!(
            StickerColor::for_face(IVec3::new(0, 1, 0)),
            Some(StickerColor::White)
        );
        assert_eq!(
            StickerColor::for_face(IVec3::new(0, -1, 0)),
            Some(StickerColor::Yellow)
        );
        assert_eq!(
            StickerColor::for_face(IVec3::new(0, 0, 1)),
            Some(StickerColor::Green)
        );
        assert_eq!(
            StickerColor::for_face(IVec3::new(0, 0, -1)),
            Some(StickerColor::Blue)
        );
        assert_eq!(StickerColor::for_face(IVec3::new(1, 1, 0)), None);
    }

    #[test]
    fn screens_cycle_in_order() {
        let mut s = Screen::Home;
        s = s.next();
        assert_eq!(s, Screen::Showcase);
        s = s.next();
        assert_eq!(s, Screen::Editor);
        s = s.next();
        assert_eq!(s, Screen::Painter);
        s = s.next();
        assert_eq!(s, Screen::Home);
    }
}
