//! Synthesized sound effects on the Web Audio API.
//!
//! Tone tables and scheduling are plain data so they can be checked without a
//! browser; `AudioManager` only turns a schedule into oscillator nodes.

use web_sys::{AudioContext, GainNode, OscillatorType};

use crate::util::{clog, cwarn};

const MASTER_GAIN: f32 = 0.4;
const NOTE_GAIN: f32 = 0.5;
const NOTE_FLOOR: f32 = 0.01;
const TICK_FREQ: f64 = 1200.0;
const TICK_GAIN: f32 = 0.1;
const TICK_SECS: f64 = 0.05;
const JINGLE_BPM: f64 = 150.0;
const JINGLE_FLOOR: f32 = 0.001;
/// Fraction of a jingle note before its fade reaches the floor.
const JINGLE_RELEASE: f64 = 0.9;
/// How long the transition screen stays up at x1.
pub const TRANSITION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    fn oscillator_type(self) -> OscillatorType {
        match self {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sfx {
    Correct,
    Incorrect,
    CountdownBeat,
    CountdownGo,
    GameOver,
}

impl Sfx {
    /// `(frequencies, durations in seconds, waveform)`.
    pub fn tones(self) -> (&'static [f64], &'static [f64], Waveform) {
        match self {
            Sfx::Correct => (&[783.99, 1046.50], &[0.1, 0.4], Waveform::Sine),
            Sfx::Incorrect => (
                &[293.66, 261.63, 233.08, 207.65],
                &[0.1, 0.1, 0.1, 0.4],
                Waveform::Sawtooth,
            ),
            Sfx::CountdownBeat => (&[440.0], &[0.3], Waveform::Sine),
            Sfx::CountdownGo => (&[880.0], &[0.3], Waveform::Sine),
            Sfx::GameOver => (&[130.0, 110.0, 98.0], &[0.4, 0.4, 1.0], Waveform::Sawtooth),
        }
    }
}

/// One oscillator to start `offset` seconds from now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledTone {
    pub offset: f64,
    pub freq: f64,
    pub duration: f64,
}

/// Lays `notes` end to end. Non-positive frequencies are rests.
pub fn schedule(notes: &[f64], durations: &[f64], speed: u32) -> Vec<ScheduledTone> {
    let speed = speed.max(1) as f64;
    let mut offset = 0.0;
    let mut out = Vec::with_capacity(notes.len());
    for (&freq, &d) in notes.iter().zip(durations) {
        let duration = d / speed;
        if freq > 0.0 {
            out.push(ScheduledTone { offset, freq, duration });
        }
        offset += duration;
    }
    out
}

const MELODY: &[(f64, u32)] = &[
    (523.0, 2),
    (587.0, 2),
    (659.0, 2),
    (587.0, 2),
    (659.0, 2),
    (783.0, 2),
    (659.0, 2),
    (587.0, 2),
    (523.0, 2),
    (440.0, 2),
    (523.0, 4),
];
const BASS: &[(f64, u32)] = &[(261.0, 4), (329.0, 4), (392.0, 4), (220.0, 4)];

pub struct Voice {
    pub waveform: Waveform,
    pub gain: f32,
    pub tones: Vec<ScheduledTone>,
}

pub fn eighth_note_secs(speed: u32) -> f64 {
    60.0 / JINGLE_BPM / 2.0 / speed.max(1) as f64
}

fn voice(notes: &[(f64, u32)], waveform: Waveform, gain: f32, speed: u32) -> Voice {
    let eighth = eighth_note_secs(speed);
    let mut offset = 0.0;
    let tones = notes
        .iter()
        .map(|&(freq, eighths)| {
            let duration = eighths as f64 * eighth;
            let tone = ScheduledTone { offset, freq, duration };
            offset += duration;
            tone
        })
        .collect();
    Voice { waveform, gain, tones }
}

/// Melody and bass of the between-questions jingle, both starting at 0.
pub fn transition_jingle(speed: u32) -> [Voice; 2] {
    [
        voice(MELODY, Waveform::Square, 0.15, speed),
        voice(BASS, Waveform::Sawtooth, 0.2, speed),
    ]
}

#[derive(Default)]
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master: Option<GainNode>,
    speed: u32,
    failed: bool,
}

impl AudioManager {
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
    }

    /// Creates the context. Must run inside a user gesture.
    pub fn init(&mut self) {
        if self.ctx.is_some() || self.failed {
            return;
        }
        let setup = || -> Result<(AudioContext, GainNode), wasm_bindgen::JsValue> {
            let ctx = AudioContext::new()?;
            let master = ctx.create_gain()?;
            master.connect_with_audio_node(&ctx.destination())?;
            master.gain().set_value(MASTER_GAIN);
            Ok((ctx, master))
        };
        match setup() {
            Ok((ctx, master)) => {
                let _ = ctx.resume();
                self.ctx = Some(ctx);
                self.master = Some(master);
                clog("audio ready");
            }
            Err(_) => {
                self.failed = true;
                cwarn("Web Audio API is not supported; sound effects disabled");
            }
        }
    }

    fn speed(&self) -> u32 {
        self.speed.max(1)
    }

    #[allow(clippy::too_many_arguments)]
    fn tone(
        &self,
        freq: f64,
        start: f64,
        duration: f64,
        waveform: Waveform,
        gain_start: f32,
        gain_end: f32,
        fade_end: f64,
    ) -> Option<()> {
        let (ctx, master) = (self.ctx.as_ref()?, self.master.as_ref()?);
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(master).ok()?;
        osc.set_type(waveform.oscillator_type());
        osc.frequency().set_value_at_time(freq as f32, start).ok()?;
        gain.gain().set_value_at_time(gain_start, start).ok()?;
        gain.gain().exponential_ramp_to_value_at_time(gain_end, fade_end).ok()?;
        osc.start_with_when(start).ok()?;
        osc.stop_with_when(start + duration).ok()?;
        Some(())
    }

    pub fn play(&self, sfx: Sfx) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        let now = ctx.current_time();
        let (notes, durations, waveform) = sfx.tones();
        for t in schedule(notes, durations, self.speed()) {
            let start = now + t.offset;
            self.tone(t.freq, start, t.duration, waveform, NOTE_GAIN, NOTE_FLOOR, start + t.duration);
        }
    }

    pub fn play_tick(&self) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        let now = ctx.current_time();
        self.tone(TICK_FREQ, now, TICK_SECS, Waveform::Triangle, TICK_GAIN, JINGLE_FLOOR, now + TICK_SECS);
    }

    /// Schedules the jingle; the caller owns the `TRANSITION_MS` wait.
    pub fn play_transition_jingle(&self) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        let now = ctx.current_time();
        for v in transition_jingle(self.speed()) {
            for t in &v.tones {
                let start = now + t.offset;
                self.tone(
                    t.freq,
                    start,
                    t.duration,
                    v.waveform,
                    v.gain,
                    JINGLE_FLOOR,
                    start + t.duration * JINGLE_RELEASE,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn incorrect_buzz_is_laid_end_to_end() {
        let (n, d, w) = Sfx::Incorrect.tones();
        assert_eq!(w, Waveform::Sawtooth);
        let s = schedule(n, d, 1);
        assert_eq!(s.len(), 4);
        assert!(close(s[3].offset, 0.3));
        assert!(close(s[3].duration, 0.4));
    }

    #[test]
    fn speed_shortens_notes() {
        let (n, d, _) = Sfx::GameOver.tones();
        let s = schedule(n, d, 2);
        assert!(close(s[1].offset, 0.2));
        assert!(close(s[2].duration, 0.5));
    }

    #[test]
    fn rests_advance_time_without_a_tone() {
        let s = schedule(&[440.0, 0.0, 660.0], &[0.1, 0.2, 0.3], 1);
        assert_eq!(s.len(), 2);
        assert!(close(s[1].offset, 0.3));
        assert_eq!(s[1].freq, 660.0);
    }

    #[test]
    fn zero_speed_is_treated_as_one() {
        let s = schedule(&[440.0], &[0.3], 0);
        assert!(close(s[0].duration, 0.3));
    }

    #[test]
    fn countdown_go_is_an_octave_up() {
        let (beat, _, _) = Sfx::CountdownBeat.tones();
        let (go, _, _) = Sfx::CountdownGo.tones();
        assert_eq!(go[0], beat[0] * 2.0);
    }

    #[test]
    fn jingle_voices_follow_the_tempo() {
        assert!(close(eighth_note_secs(1), 0.2));
        for speed in 1..=3 {
            let [melody, bass] = transition_jingle(speed);
            assert_eq!(melody.waveform, Waveform::Square);
            assert_eq!(bass.waveform, Waveform::Sawtooth);
            let end = |v: &Voice| v.tones.last().map(|t| t.offset + t.duration).unwrap_or(0.0);
            assert!(close(end(&melody), 24.0 * eighth_note_secs(speed)));
            assert!(close(end(&bass), 16.0 * eighth_note_secs(speed)));
            // the bass resolves before the next question, the melody may ring over
            let window = (TRANSITION_MS / speed) as f64 / 1000.0;
            assert!(end(&bass) <= window);
        }
    }
}
