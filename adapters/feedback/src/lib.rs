#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Audio and narration adapters for Drop Zone.
//!
//! The game never waits on playback or speech. Cues produced by the announcer
//! are handed to an [`AudioSink`] and a [`Narrator`] in order and forgotten.
//! Real backends live outside this crate; the logging sinks narrate through the
//! `log` facade and the recording sinks capture calls for tests.

mod manifest;
mod sinks;

pub use manifest::{ManifestError, SoundManifest, SoundSource};
pub use sinks::{LogAudio, LogNarrator, RecordingAudio, RecordingNarrator};

use drop_zone_core::{Cue, SoundEffect};

/// Speech rate applied to narration unless configured otherwise.
pub const DEFAULT_SPEECH_RATE: f32 = 1.1;

/// Capability that plays named sound effects.
pub trait AudioSink {
    /// Starts playback of the effect from the provided source without waiting for it.
    fn play(&mut self, effect: SoundEffect, source: &SoundSource);
}

/// Capability that speaks text aloud.
pub trait Narrator {
    /// Queues the utterance for speech without waiting for it.
    fn speak(&mut self, utterance: &Utterance);
}

/// Text handed to a [`Narrator`] together with its speaking rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    /// Message to speak.
    pub text: String,
    /// Speaking rate relative to the narrator's normal speed.
    pub rate: f32,
}

/// Routes cues to the audio and narration capabilities.
#[derive(Debug)]
pub struct Feedback<A, N> {
    manifest: SoundManifest,
    audio: A,
    narrator: N,
    speech_rate: f32,
}

impl<A, N> Feedback<A, N>
where
    A: AudioSink,
    N: Narrator,
{
    /// Creates a dispatcher that resolves sound sources through `manifest`.
    #[must_use]
    pub fn new(manifest: SoundManifest, audio: A, narrator: N, speech_rate: f32) -> Self {
        Self {
            manifest,
            audio,
            narrator,
            speech_rate,
        }
    }

    /// Delivers the cues in order and returns the text of the last announcement, if any.
    ///
    /// Sound effects without a configured source are skipped with a warning.
    pub fn deliver(&mut self, cues: &[Cue]) -> Option<String> {
        let mut last_announcement = None;
        for cue in cues {
            match cue {
                Cue::Play(effect) => match self.manifest.source(*effect) {
                    Some(source) => self.audio.play(*effect, source),
                    None => log::warn!("no source configured for sound effect `{effect}`"),
                },
                Cue::Announce(text) => {
                    self.narrator.speak(&Utterance {
                        text: text.clone(),
                        rate: self.speech_rate,
                    });
                    last_announcement = Some(text.clone());
                }
            }
        }
        last_announcement
    }

    /// Audio capability receiving playback requests.
    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Narration capability receiving utterances.
    #[must_use]
    pub fn narrator(&self) -> &N {
        &self.narrator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_are_routed_in_order() {
        let mut feedback = Feedback::new(
            SoundManifest::default(),
            RecordingAudio::default(),
            RecordingNarrator::default(),
            DEFAULT_SPEECH_RATE,
        );

        let caption = feedback.deliver(&[
            Cue::Play(SoundEffect::Gunshot),
            Cue::announce("Fired a shot. Ammo remaining: 9"),
            Cue::announce("Enemy hit!"),
        ]);

        assert_eq!(caption.as_deref(), Some("Enemy hit!"));
        assert_eq!(feedback.audio().played(), &[SoundEffect::Gunshot]);
        let spoken: Vec<&str> = feedback
            .narrator()
            .spoken()
            .iter()
            .map(|utterance| utterance.text.as_str())
            .collect();
        assert_eq!(spoken, ["Fired a shot. Ammo remaining: 9", "Enemy hit!"]);
        assert!(feedback
            .narrator()
            .spoken()
            .iter()
            .all(|utterance| (utterance.rate - 1.1).abs() < f32::EPSILON));
    }

    #[test]
    fn unmapped_effects_are_skipped() {
        let mut feedback = Feedback::new(
            SoundManifest::empty(),
            RecordingAudio::default(),
            RecordingNarrator::default(),
            DEFAULT_SPEECH_RATE,
        );

        let caption = feedback.deliver(&[Cue::Play(SoundEffect::Airdrop)]);

        assert_eq!(caption, None);
        assert!(feedback.audio().played().is_empty());
    }
}
