//! Animation state machine and frame timing.
//!
//! Frame timing is counted in fixed ticks: every `frame_buffer` ticks the
//! displayed frame advances by one, wrapping after the last frame.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::content::ClipDef;
use crate::movement::Facing;

/// Named poses, each with a left-facing mirror strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ClipKey {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    IdleLeft,
    RunLeft,
    JumpLeft,
    FallLeft,
}

impl ClipKey {
    pub const ALL: [ClipKey; 8] = [
        ClipKey::Idle,
        ClipKey::Run,
        ClipKey::Jump,
        ClipKey::Fall,
        ClipKey::IdleLeft,
        ClipKey::RunLeft,
        ClipKey::JumpLeft,
        ClipKey::FallLeft,
    ];

    pub fn for_pose(pose: Pose, facing: Facing) -> Self {
        match (pose, facing) {
            (Pose::Idle, Facing::Right) => ClipKey::Idle,
            (Pose::Run, Facing::Right) => ClipKey::Run,
            (Pose::Jump, Facing::Right) => ClipKey::Jump,
            (Pose::Fall, Facing::Right) => ClipKey::Fall,
            (Pose::Idle, Facing::Left) => ClipKey::IdleLeft,
            (Pose::Run, Facing::Left) => ClipKey::RunLeft,
            (Pose::Jump, Facing::Left) => ClipKey::JumpLeft,
            (Pose::Fall, Facing::Left) => ClipKey::FallLeft,
        }
    }
}

/// What the body is doing, independent of facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Run,
    Jump,
    Fall,
}

impl Pose {
    /// Vertical motion wins over horizontal intent: rising shows the jump
    /// strip and falling the fall strip even while steering.
    pub fn choose(moving: bool, velocity_y: f32) -> Self {
        if velocity_y < 0.0 {
            Pose::Jump
        } else if velocity_y > 0.0 {
            Pose::Fall
        } else if moving {
            Pose::Run
        } else {
            Pose::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Asset path of the strip; two clips sharing a path are the same image.
    pub image: String,
    pub frame_count: u32,
    pub frame_buffer: u32,
}

impl From<&ClipDef> for AnimationClip {
    fn from(def: &ClipDef) -> Self {
        Self {
            image: def.image.clone(),
            frame_count: def.frame_count,
            frame_buffer: def.frame_buffer,
        }
    }
}

/// Capability of anything that plays frame-based clips.
pub trait Animatable {
    /// Advance one tick of frame timing.
    fn advance_frame(&mut self);
    /// Switch to `key`; returns whether the active clip actually changed.
    fn switch_clip(&mut self, key: ClipKey) -> bool;
    fn active_clip(&self) -> ClipKey;
    fn frame_index(&self) -> u32;
}

#[derive(Debug, Clone)]
pub struct SpriteAnimator {
    clips: HashMap<ClipKey, AnimationClip>,
    active: ClipKey,
    image: String,
    frame_count: u32,
    frame_buffer: u32,
    current_frame: u32,
    elapsed_frames: u64,
    loaded: bool,
}

impl SpriteAnimator {
    /// Starts on `initial`. A missing initial clip leaves a single static frame.
    pub fn new(clips: HashMap<ClipKey, AnimationClip>, initial: ClipKey) -> Self {
        let (image, frame_count, frame_buffer) = match clips.get(&initial) {
            Some(clip) => (clip.image.clone(), clip.frame_count, clip.frame_buffer),
            None => (String::new(), 1, 1),
        };

        Self {
            clips,
            active: initial,
            image,
            frame_count,
            frame_buffer,
            current_frame: 0,
            elapsed_frames: 0,
            loaded: false,
        }
    }

    pub fn from_defs(defs: &[ClipDef], initial: ClipKey) -> Self {
        let clips = defs
            .iter()
            .map(|def| (def.key, AnimationClip::from(def)))
            .collect();
        Self::new(clips, initial)
    }

    /// Assets finished loading (or failed and fell back). Until then clip
    /// switches are ignored.
    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count.max(1)
    }
}

impl Animatable for SpriteAnimator {
    fn advance_frame(&mut self) {
        self.elapsed_frames += 1;

        let buffer = u64::from(self.frame_buffer.max(1));
        if self.elapsed_frames % buffer == 0 {
            if self.current_frame + 1 < self.frame_count() {
                self.current_frame += 1;
            } else {
                self.current_frame = 0;
            }
        }
    }

    fn switch_clip(&mut self, key: ClipKey) -> bool {
        if !self.loaded {
            return false;
        }
        let Some(clip) = self.clips.get(&key) else {
            return false;
        };
        if clip.image == self.image {
            return false;
        }

        self.active = key;
        self.image = clip.image.clone();
        self.frame_count = clip.frame_count;
        self.frame_buffer = clip.frame_buffer;
        self.current_frame = 0;
        true
    }

    fn active_clip(&self) -> ClipKey {
        self.active
    }

    fn frame_index(&self) -> u32 {
        self.current_frame
    }
}
