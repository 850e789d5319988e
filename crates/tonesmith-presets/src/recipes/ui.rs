//! Short interface sounds: coins, clicks, registers, keys, shutter, locks and clock.

use tonesmith_engine::SoundSpec;

use super::{env, tones, with_noise};
use crate::kinds::{CashRegisterKind, ClickKind, KeyboardKind, LockAction};

pub(crate) fn coin(spec: SoundSpec) -> SoundSpec {
    spec.then(
        tones(0.08, &[(988.0, 0.3), (1976.0, 0.15)]).with_envelope(env(0.001, 0.02, 0.3, 0.04)),
    )
    .then(
        tones(0.1, &[(1319.0, 0.35), (2638.0, 0.15)]).with_envelope(env(0.001, 0.03, 0.4, 0.05)),
    )
}

pub(crate) fn click(kind: ClickKind, spec: SoundSpec) -> SoundSpec {
    let segment = match kind {
        ClickKind::Soft => tones(0.03, &[(1000.0, 0.3), (2000.0, 0.15)]),
        ClickKind::Hard => tones(0.02, &[(1500.0, 0.5), (3000.0, 0.2)]),
        ClickKind::Mechanical => tones(0.04, &[(800.0, 0.4), (400.0, 0.3)]),
    };
    spec.then(segment.with_envelope(env(0.001, 0.005, 0.2, 0.01)))
}

pub(crate) fn cash_register(kind: CashRegisterKind, spec: SoundSpec) -> SoundSpec {
    match kind {
        CashRegisterKind::Classic => spec
            // Drawer
            .then(
                tones(0.3, &[(120.0, 0.2), (180.0, 0.15)]).with_envelope(env(0.01, 0.1, 0.6, 0.1)),
            )
            .pause(0.05)
            .then(
                tones(0.15, &[(800.0, 0.4), (1200.0, 0.3), (1600.0, 0.2)])
                    .with_envelope(env(0.001, 0.05, 0.3, 0.08)),
            )
            .then(
                tones(0.5, &[(1200.0, 0.5), (2400.0, 0.3), (3600.0, 0.2)])
                    .with_envelope(env(0.001, 0.2, 0.2, 0.3)),
            ),
        CashRegisterKind::Modern => spec
            .then(tones(0.1, &[(1000.0, 0.4)]).with_envelope(env(0.001, 0.02, 0.7, 0.05)))
            .pause(0.05)
            .then(tones(0.08, &[(800.0, 0.3)]).with_envelope(env(0.001, 0.02, 0.5, 0.04)))
            .then(tones(0.1, &[(1200.0, 0.35)]).with_envelope(env(0.001, 0.03, 0.5, 0.05))),
        CashRegisterKind::ChaChing => spec
            .then(
                tones(0.1, &[(900.0, 0.45), (1350.0, 0.35), (1800.0, 0.25)])
                    .with_envelope(env(0.001, 0.03, 0.4, 0.06)),
            )
            .pause(0.02)
            .then(
                tones(
                    0.6,
                    &[(1400.0, 0.5), (2800.0, 0.35), (4200.0, 0.2), (5600.0, 0.1)],
                )
                .with_envelope(env(0.001, 0.25, 0.15, 0.35)),
            ),
    }
}

pub(crate) fn keyboard(kind: KeyboardKind, spec: SoundSpec) -> SoundSpec {
    match kind {
        KeyboardKind::Mechanical => spec.then(
            with_noise(
                tones(0.03, &[(1500.0, 0.3), (3000.0, 0.2), (4500.0, 0.1)]),
                0.05,
            )
            .with_envelope(env(0.001, 0.01, 0.2, 0.015)),
        ),
        KeyboardKind::Soft => spec.then(
            tones(0.02, &[(800.0, 0.2), (1600.0, 0.1)]).with_envelope(env(0.001, 0.005, 0.3, 0.01)),
        ),
        // Unshaped strike, then a short resonance
        KeyboardKind::Typewriter => spec
            .then(tones(0.01, &[(1200.0, 0.4), (2400.0, 0.2)]))
            .then(tones(0.03, &[(800.0, 0.15)]).with_envelope(env(0.001, 0.01, 0.3, 0.015))),
    }
}

pub(crate) fn camera_shutter(spec: SoundSpec) -> SoundSpec {
    spec.then(
        with_noise(tones(0.03, &[(800.0, 0.3), (1200.0, 0.2)]), 0.1)
            .with_envelope(env(0.001, 0.01, 0.3, 0.015)),
    )
    .pause(0.02)
    .then(
        with_noise(tones(0.025, &[(700.0, 0.25), (1100.0, 0.15)]), 0.08)
            .with_envelope(env(0.001, 0.008, 0.2, 0.012)),
    )
}

pub(crate) fn lock(action: LockAction, spec: SoundSpec) -> SoundSpec {
    match action {
        LockAction::Lock => spec
            .then(
                tones(0.05, &[(1000.0, 0.3), (500.0, 0.2)])
                    .with_envelope(env(0.001, 0.015, 0.3, 0.025)),
            )
            .then(tones(0.08, &[(300.0, 0.15)]).with_envelope(env(0.01, 0.03, 0.4, 0.03))),
        LockAction::Unlock => spec
            .then(
                tones(0.05, &[(500.0, 0.3), (1000.0, 0.25)])
                    .with_envelope(env(0.001, 0.015, 0.3, 0.025)),
            )
            .then(tones(0.06, &[(1200.0, 0.2)]).with_envelope(env(0.005, 0.02, 0.3, 0.03))),
    }
}

pub(crate) fn tick_tock(cycles: u32, spec: SoundSpec) -> SoundSpec {
    let click = env(0.001, 0.005, 0.2, 0.01);
    (0..cycles).fold(spec, |spec, _| {
        spec.then(tones(0.02, &[(1200.0, 0.25), (2400.0, 0.12)]).with_envelope(click))
            .pause(0.48)
            .then(tones(0.02, &[(1000.0, 0.25), (2000.0, 0.12)]).with_envelope(click))
            .pause(0.48)
    })
}
