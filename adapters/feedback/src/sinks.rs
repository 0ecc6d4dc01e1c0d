use drop_zone_core::SoundEffect;

use crate::{AudioSink, Narrator, SoundSource, Utterance};

/// Audio sink that reports playback requests through the `log` facade.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, source: &SoundSource) {
        if source.looped {
            log::debug!(target: "audio", "looping {effect} from {}", source.location);
        } else {
            log::debug!(target: "audio", "playing {effect} from {}", source.location);
        }
    }
}

/// Narrator that writes every utterance to the `narration` log target.
#[derive(Debug, Default)]
pub struct LogNarrator;

impl Narrator for LogNarrator {
    fn speak(&mut self, utterance: &Utterance) {
        log::info!(target: "narration", "{}", utterance.text);
    }
}

/// Audio sink that remembers which effects were requested.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    played: Vec<SoundEffect>,
}

impl RecordingAudio {
    /// Effects requested so far, oldest first.
    #[must_use]
    pub fn played(&self) -> &[SoundEffect] {
        &self.played
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect, _source: &SoundSource) {
        self.played.push(effect);
    }
}

/// Narrator that remembers every utterance.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    spoken: Vec<Utterance>,
}

impl RecordingNarrator {
    /// Utterances spoken so far, oldest first.
    #[must_use]
    pub fn spoken(&self) -> &[Utterance] {
        &self.spoken
    }
}

impl Narrator for RecordingNarrator {
    fn speak(&mut self, utterance: &Utterance) {
        self.spoken.push(utterance.clone());
    }
}
