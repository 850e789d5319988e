//! Bells: inharmonic partial stacks with a fast strike and long ring.

use tonesmith_engine::{EnvelopeSpec, SoundSpec};

use super::{env, stack};
use crate::kinds::BellKind;
use crate::Bell;

struct Voicing {
    ratios: &'static [f64],
    amplitudes: &'static [f64],
    gain: f64,
    envelope: EnvelopeSpec,
}

const SIMPLE: Voicing = Voicing {
    ratios: &[1.0, 2.0, 2.4, 3.0, 4.2],
    amplitudes: &[1.0, 0.5, 0.3, 0.2, 0.15],
    gain: 0.3,
    envelope: env(0.001, 0.3, 0.1, 0.7),
};

const CHURCH: Voicing = Voicing {
    ratios: &[1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0],
    amplitudes: &[1.0, 0.6, 0.4, 0.3, 0.25, 0.15, 0.1],
    gain: 0.2,
    envelope: env(0.001, 0.5, 0.3, 2.0),
};

const HAND: Voicing = Voicing {
    ratios: &[1.0, 2.0, 3.0, 4.2, 5.4],
    amplitudes: &[1.0, 0.4, 0.3, 0.15, 0.1],
    gain: 0.4,
    envelope: env(0.001, 0.2, 0.2, 0.4),
};

pub(crate) fn bell(bell: &Bell, spec: SoundSpec) -> SoundSpec {
    let voicing = match bell.kind {
        BellKind::Simple => &SIMPLE,
        BellKind::Church => &CHURCH,
        BellKind::Hand => &HAND,
    };
    spec.then(
        stack(
            bell.base_frequency,
            bell.duration,
            voicing.ratios,
            voicing.amplitudes,
            voicing.gain,
        )
        .with_envelope(voicing.envelope),
    )
}
