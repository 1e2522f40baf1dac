//! The landing headline's typewriter effect: type a slogan, hold it,
//! delete it, move to the next, forever.

use bevy::prelude::*;

use crate::utils::constants::demo_constants::{
    DELETE_CHAR_SECS, HEADLINE_WORDS, HOLD_WORD_SECS, TYPE_CHAR_SECS,
};
use crate::utils::objects::HeadlineText;

pub struct TypewriterPlugin;

impl Plugin for TypewriterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Headline>()
            .add_systems(Update, update_headline);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Time-stepped typewriter over a fixed word list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<&'static str>,
    word: usize,
    shown: usize,
    phase: Phase,
    timer: f32,
}

impl Typewriter {
    pub fn new(words: Vec<&'static str>) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            timer: 0.0,
        }
    }

    fn current_len(&self) -> usize {
        self.words[self.word].chars().count()
    }

    /// Advance by `dt` seconds, consuming as many character steps as fit.
    pub fn tick(&mut self, dt: f32) {
        self.timer += dt;
        loop {
            match self.phase {
                Phase::Typing => {
                    if self.timer < TYPE_CHAR_SECS {
                        return;
                    }
                    self.timer -= TYPE_CHAR_SECS;
                    self.shown += 1;
                    if self.shown == self.current_len() {
                        self.phase = Phase::Holding;
                        self.timer = 0.0;
                        return;
                    }
                }
                Phase::Holding => {
                    if self.timer < HOLD_WORD_SECS {
                        return;
                    }
                    self.timer -= HOLD_WORD_SECS;
                    self.phase = Phase::Deleting;
                }
                Phase::Deleting => {
                    if self.timer < DELETE_CHAR_SECS {
                        return;
                    }
                    self.timer -= DELETE_CHAR_SECS;
                    self.shown = self.shown.saturating_sub(1);
                    if self.shown == 0 {
                        self.word = (self.word + 1) % self.words.len();
                        self.phase = Phase::Typing;
                        self.timer = 0.0;
                        return;
                    }
                }
            }
        }
    }

    /// The visible headline, with the cursor appended.
    pub fn line(&self) -> String {
        let shown: String = self.words[self.word].chars().take(self.shown).collect();
        format!("{shown}|")
    }
}

#[derive(Resource)]
pub struct Headline(pub Typewriter);

impl Default for Headline {
    fn default() -> Self {
        Headline(Typewriter::new(HEADLINE_WORDS.to_vec()))
    }
}

/// Steps the effect and rewrites the headline text. Only the Home screen
/// spawns a `HeadlineText`, so this is idle elsewhere.
pub fn update_headline(
    time: Res<Time>,
    mut headline: ResMut<Headline>,
    mut query: Query<&mut Text, With<HeadlineText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };
    headline.0.tick(time.delta_secs());
    let line = headline.0.line();
    if text.0 != line {
        text.0 = line;
    }
}
