// Tick-driven sprite animation

/// How long one full cycle of an animation lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDuration {
    /// Cycle length in update ticks
    Ticks(u32),
    /// The animation never advances past its first frame
    Infinite,
}

/// Static description of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDef {
    /// Name of the animation (e.g., "idle", "walk")
    pub id: &'static str,
    /// Sprite sheet frame indices, in playback order
    pub frames: &'static [usize],
    /// Length of one cycle
    pub duration: FrameDuration,
    /// Whether the animation restarts after the last frame
    pub looping: bool,
}

impl AnimationDef {
    /// A looping animation cycling through `frames` every `ticks` ticks
    pub const fn looping(id: &'static str, frames: &'static [usize], ticks: u32) -> Self {
        Self {
            id,
            frames,
            duration: FrameDuration::Ticks(ticks),
            looping: true,
        }
    }

    /// A single held frame that never advances
    pub const fn still(id: &'static str, frames: &'static [usize]) -> Self {
        Self {
            id,
            frames,
            duration: FrameDuration::Infinite,
            looping: false,
        }
    }

    /// Ticks each frame stays on screen, or `None` for infinite animations
    pub fn ticks_per_frame(&self) -> Option<u32> {
        match self.duration {
            FrameDuration::Ticks(ticks) if !self.frames.is_empty() => {
                Some(ticks / self.frames.len() as u32)
            }
            _ => None,
        }
    }
}

/// Animation construction errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Animation '{0}' has no frames")]
    NoFrames(&'static str),

    #[error("Animation '{id}' lasts {ticks} ticks, fewer than its {frames} frames")]
    TooShort {
        id: &'static str,
        ticks: u32,
        frames: usize,
    },
}

/// Playback state for one animation
#[derive(Debug, Clone)]
pub struct Animation {
    def: AnimationDef,
    ticks_per_frame: Option<u32>,
    /// Position in `def.frames`
    frame_index: usize,
    /// Ticks elapsed on the current frame
    frame_timer: u32,
    playing: bool,
}

impl Animation {
    /// Create a stopped animation from its definition
    pub fn new(def: AnimationDef) -> Result<Self, AnimationError> {
        if def.frames.is_empty() {
            return Err(AnimationError::NoFrames(def.id));
        }
        if let FrameDuration::Ticks(ticks) = def.duration {
            if (ticks as usize) < def.frames.len() {
                return Err(AnimationError::TooShort {
                    id: def.id,
                    ticks,
                    frames: def.frames.len(),
                });
            }
        }

        Ok(Self {
            def,
            ticks_per_frame: def.ticks_per_frame(),
            frame_index: 0,
            frame_timer: 0,
            playing: false,
        })
    }

    /// Start playback from the first frame
    pub fn play(&mut self) {
        self.frame_index = 0;
        self.frame_timer = 0;
        self.playing = true;
    }

    /// Stop playback and rewind
    pub fn stop(&mut self) {
        self.playing = false;
        self.frame_index = 0;
        self.frame_timer = 0;
    }

    /// Advance the animation by one tick
    pub fn advance(&mut self) {
        if !self.playing {
            return;
        }
        let Some(ticks_per_frame) = self.ticks_per_frame else {
            return;
        };

        self.frame_timer += 1;
        if self.frame_timer < ticks_per_frame {
            return;
        }

        self.frame_timer = 0;
        self.frame_index += 1;
        if self.frame_index >= self.def.frames.len() {
            if self.def.looping {
                self.frame_index = 0;
            } else {
                // Hold the last frame
                self.frame_index = self.def.frames.len() - 1;
                self.playing = false;
            }
        }
    }

    pub fn id(&self) -> &'static str {
        self.def.id
    }

    /// Sprite sheet frame currently shown
    pub fn frame(&self) -> usize {
        self.def.frames[self.frame_index]
    }

    /// Position within the frame list
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
