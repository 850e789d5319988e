//! Game effects, swooshes and bubbles.

use tonesmith_engine::SoundSpec;

use super::{env, glide, tones, with_noise};
use crate::kinds::{BubbleKind, GameKind, SwooshLength};

pub(crate) fn game(kind: GameKind, spec: SoundSpec) -> SoundSpec {
    match kind {
        GameKind::PowerUp => [262.0, 330.0, 392.0, 523.0].iter().fold(spec, |spec, &note| {
            spec.then(
                tones(0.08, &[(note, 0.3), (note * 2.0, 0.15)])
                    .with_envelope(env(0.001, 0.02, 0.5, 0.03)),
            )
        }),
        GameKind::LevelUp => {
            let notes = [523.0, 659.0, 784.0, 1047.0];
            notes.iter().enumerate().fold(spec, |spec, (i, &note)| {
                // Final note rings twice as long
                let duration = if i + 1 < notes.len() { 0.15 } else { 0.3 };
                spec.then(
                    tones(duration, &[(note, 0.35), (note * 2.0, 0.2)])
                        .with_envelope(env(0.001, 0.05, 0.7, 0.1)),
                )
            })
        }
        GameKind::Over => [392.0, 349.0, 330.0, 262.0].iter().fold(spec, |spec, &note| {
            spec.then(tones(0.3, &[(note, 0.3)]).with_envelope(env(0.01, 0.1, 0.7, 0.15)))
        }),
        GameKind::Jump => spec.then(
            glide(200.0, 600.0, 0.15, &[(1.0, 0.3)]).with_envelope(env(0.001, 0.05, 0.3, 0.08)),
        ),
        GameKind::Laser => spec.then(
            glide(1200.0, 300.0, 0.2, &[(1.0, 0.4), (2.0, 0.2)])
                .with_envelope(env(0.001, 0.05, 0.4, 0.12)),
        ),
    }
}

pub(crate) fn swoosh(length: SwooshLength, spec: SoundSpec) -> SoundSpec {
    let body = glide(
        2000.0,
        500.0,
        length.duration(),
        &[(1.0, 0.2), (1.5, 0.15), (2.3, 0.1)],
    );
    spec.then(with_noise(body, 0.05).with_envelope(env(0.01, 0.1, 0.5, 0.2)))
}

pub(crate) fn bubble(kind: BubbleKind, spec: SoundSpec) -> SoundSpec {
    let segment = match kind {
        BubbleKind::Pop => {
            glide(1500.0, 300.0, 0.08, &[(1.0, 0.3)]).with_envelope(env(0.001, 0.02, 0.1, 0.05))
        }
        BubbleKind::Small => tones(0.05, &[(2000.0, 0.2), (3000.0, 0.1)])
            .with_envelope(env(0.001, 0.01, 0.2, 0.03)),
        BubbleKind::Large => glide(800.0, 400.0, 0.12, &[(1.0, 0.35), (2.0, 0.15)])
            .with_envelope(env(0.001, 0.03, 0.2, 0.08)),
    };
    spec.then(segment)
}
