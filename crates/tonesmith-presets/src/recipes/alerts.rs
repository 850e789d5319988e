//! Buzzers, doorbells, notifications, alarms, phone signals and system beeps.

use tonesmith_engine::{SoundSpec, Tremolo};

use super::{env, stack, tones};
use crate::kinds::{AlarmKind, BeepKind, BuzzerKind, DoorbellStyle, NotificationKind, PhoneKind};

pub(crate) fn buzzer(kind: BuzzerKind, spec: SoundSpec) -> SoundSpec {
    let (frequency, ratios, amplitudes): (f64, &[f64], &[f64]) = match kind {
        BuzzerKind::Error => (200.0, &[1.0, 1.5, 2.0, 2.5][..], &[1.0, 0.5, 0.3, 0.2][..]),
        BuzzerKind::Warning => (400.0, &[1.0, 2.0, 3.0][..], &[1.0, 0.4, 0.2][..]),
        BuzzerKind::Success => (600.0, &[1.0, 2.0][..], &[1.0, 0.3][..]),
    };
    spec.then(
        stack(frequency, 0.5, ratios, amplitudes, 0.5).with_envelope(env(0.001, 0.05, 0.8, 0.1)),
    )
}

pub(crate) fn doorbell(style: DoorbellStyle, spec: SoundSpec) -> SoundSpec {
    match style {
        DoorbellStyle::DingDong => spec
            .then(
                tones(0.3, &[(800.0, 0.5), (1600.0, 0.2)])
                    .with_envelope(env(0.001, 0.1, 0.3, 0.15)),
            )
            .pause(0.1)
            .then(
                tones(0.4, &[(600.0, 0.5), (1200.0, 0.2)])
                    .with_envelope(env(0.001, 0.15, 0.3, 0.2)),
            ),
        DoorbellStyle::Chime => [659.0, 784.0, 880.0].iter().fold(spec, |spec, &note| {
            spec.then(
                tones(0.4, &[(note, 0.3), (note * 2.0, 0.15)])
                    .with_envelope(env(0.001, 0.1, 0.4, 0.3)),
            )
            .pause(0.05)
        }),
        DoorbellStyle::Buzz => {
            spec.then(tones(0.8, &[(300.0, 0.6)]).with_envelope(env(0.001, 0.05, 0.9, 0.05)))
        }
    }
}

pub(crate) fn notification(kind: NotificationKind, spec: SoundSpec) -> SoundSpec {
    match kind {
        NotificationKind::Message => [600.0, 900.0].iter().fold(spec, |spec, &freq| {
            spec.then(tones(0.08, &[(freq, 0.4)]).with_envelope(env(0.001, 0.03, 0.5, 0.04)))
        }),
        NotificationKind::Alert => (0..3).fold(spec, |spec, _| {
            spec.then(tones(0.1, &[(1000.0, 0.5)]).with_envelope(env(0.001, 0.02, 0.8, 0.05)))
                .pause(0.05)
        }),
        NotificationKind::Complete => [523.0, 659.0, 784.0].iter().fold(spec, |spec, &note| {
            spec.then(tones(0.1, &[(note, 0.3)]).with_envelope(env(0.001, 0.03, 0.5, 0.05)))
        }),
        NotificationKind::Pop => spec.then(
            tones(0.05, &[(800.0, 0.4), (1600.0, 0.2)]).with_envelope(env(0.001, 0.01, 0.3, 0.03)),
        ),
    }
}

pub(crate) fn alarm(kind: AlarmKind, spec: SoundSpec) -> SoundSpec {
    match kind {
        AlarmKind::WakeUp => (0..4).fold(spec, |spec, i| {
            let step = i as f64;
            let amplitude = 0.2 + step * 0.1;
            spec.then(
                tones(0.3, &[(800.0, amplitude), (1600.0, amplitude * 0.5)])
                    .with_envelope(env(0.01, 0.1, 0.7, 0.1)),
            )
            .pause(0.5 - step * 0.1)
        }),
        AlarmKind::Timer => (0..3).fold(spec, |spec, _| {
            spec.then(tones(0.2, &[(1000.0, 0.4)]).with_envelope(env(0.01, 0.05, 0.8, 0.05)))
                .pause(0.2)
        }),
        AlarmKind::Emergency => (0..6).fold(spec, |spec, i| {
            let freq = if i % 2 == 0 { 800.0 } else { 600.0 };
            spec.then(tones(0.25, &[(freq, 0.5)]).with_envelope(env(0.01, 0.05, 0.9, 0.02)))
        }),
    }
}

pub(crate) fn phone(kind: PhoneKind, spec: SoundSpec) -> SoundSpec {
    match kind {
        PhoneKind::Ringtone => (0..2)
            .fold(spec, |spec, _| {
                spec.then(
                    tones(0.4, &[(440.0, 0.4), (880.0, 0.3)])
                        .with_tremolo(Tremolo::new(20.0, 0.1))
                        .with_envelope(env(0.01, 0.1, 0.8, 0.1)),
                )
                .pause(0.2)
            })
            .pause(1.0),
        PhoneKind::Busy => (0..4).fold(spec, |spec, _| {
            spec.then(tones(0.25, &[(480.0, 0.4), (620.0, 0.4)]))
                .pause(0.25)
        }),
        PhoneKind::DialTone => spec.then(tones(2.0, &[(350.0, 0.3), (440.0, 0.3)])),
    }
}

pub(crate) fn system_beep(kind: BeepKind, spec: SoundSpec) -> SoundSpec {
    match kind {
        BeepKind::Info => {
            spec.then(tones(0.1, &[(800.0, 0.3)]).with_envelope(env(0.001, 0.03, 0.6, 0.05)))
        }
        BeepKind::Warning => {
            let beep = tones(0.08, &[(600.0, 0.35)]).with_envelope(env(0.001, 0.02, 0.7, 0.04));
            spec.then(beep.clone()).pause(0.05).then(beep)
        }
        BeepKind::Error => spec.then(
            tones(0.3, &[(300.0, 0.4), (450.0, 0.3)]).with_envelope(env(0.01, 0.05, 0.8, 0.1)),
        ),
        BeepKind::Critical => (0..3).fold(spec, |spec, _| {
            spec.then(tones(0.1, &[(400.0, 0.45)]).with_envelope(env(0.001, 0.02, 0.8, 0.03)))
                .pause(0.05)
        }),
    }
}
