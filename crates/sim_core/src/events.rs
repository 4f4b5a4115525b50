//! Outbound event feeds drained by the platform layer once per frame.
//!
//! Both feeds are fire-and-forget: a consumer that drops or delays them never
//! affects simulation state.

/// One-shot sound effect requests, keyed by name on the audio side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Shoot,
    Reload,
    Empty,
    Buy,
    Denied,
    Hit,
}

impl AudioCue {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Shoot => "shoot",
            Self::Reload => "reload",
            Self::Empty => "empty",
            Self::Buy => "buy",
            Self::Denied => "denied",
            Self::Hit => "hit",
        }
    }
}

/// Narration triggers. Each carries enough context for an external
/// commentary service to phrase a line; delivery is best-effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentaryKind {
    Intro,
    Killstreak { streak: u32 },
    LowHealth,
    WaveStart,
}

impl CommentaryKind {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Killstreak { .. } => "killstreak",
            Self::LowHealth => "low-health",
            Self::WaveStart => "wave-start",
        }
    }
}

/// A commentary request plus the score/wave context sampled when it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentaryEvent {
    pub kind: CommentaryKind,
    pub score: u32,
    pub wave: u32,
}

/// Per-frame event accumulator. The session pushes, the platform drains.
#[derive(Debug, Default)]
pub struct SimEvents {
    pub audio: Vec<AudioCue>,
    pub commentary: Vec<CommentaryEvent>,
    /// View-space recoil kick accumulated this frame, degrees of pitch.
    pub recoil_deg: f32,
}

impl SimEvents {
    pub fn push_cue(&mut self, cue: AudioCue) {
        self.audio.push(cue);
    }

    pub fn push_commentary(&mut self, event: CommentaryEvent) {
        self.commentary.push(event);
    }

    /// Hand the accumulated events to the caller and reset for the next frame.
    pub fn take(&mut self) -> SimEvents {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_resets_the_accumulator() {
        let mut ev = SimEvents::default();
        ev.push_cue(AudioCue::Shoot);
        ev.push_commentary(CommentaryEvent {
            kind: CommentaryKind::Intro,
            score: 0,
            wave: 1,
        });
        ev.recoil_deg = 1.2;
        let drained = ev.take();
        assert_eq!(drained.audio, vec![AudioCue::Shoot]);
        assert_eq!(drained.commentary.len(), 1);
        assert!(ev.audio.is_empty());
        assert!(ev.commentary.is_empty());
        assert!(ev.recoil_deg.abs() < f32::EPSILON);
    }

    #[test]
    fn cue_names_are_stable() {
        assert_eq!(AudioCue::Denied.name(), "denied");
        assert_eq!(CommentaryKind::Killstreak { streak: 5 }.key(), "killstreak");
    }
}
