//! Tonesmith preset catalog
//!
//! Forty-eight ready-made sound effects (bells, buzzers, doorbells,
//! notifications, UI clicks, alarms, phone signals, game effects and more),
//! each expressed as a [`SoundSpec`] for the engine.
//!
//! ```
//! use tonesmith_presets::Preset;
//!
//! let coin: Preset = "coin".parse()?;
//! let audio = tonesmith_engine::synthesize(&coin.spec())?;
//! assert!(audio.num_samples > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::str::FromStr;

use tonesmith_engine::rng::derive_component_seed;
use tonesmith_engine::SoundSpec;

mod error;
mod kinds;
mod recipes;

pub use error::PresetError;
pub use kinds::{
    AlarmKind, BeepKind, BellKind, BubbleKind, BuzzerKind, CashRegisterKind, ClickKind,
    DoorbellStyle, GameKind, KeyboardKind, LockAction, NotificationKind, PhoneKind, SwooshLength,
};

/// Base seed from which every preset's noise seed is derived.
pub const CATALOG_SEED: u32 = 0x5EED;

/// Tick-tock cycles used by the catalog entry.
pub const DEFAULT_TICK_TOCK_CYCLES: u32 = 3;

/// A bell with its strike frequency and ring length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bell {
    pub kind: BellKind,
    /// Fundamental in Hz.
    pub base_frequency: f64,
    /// Length in seconds.
    pub duration: f64,
}

impl Bell {
    /// A bell with the kind's default frequency and duration.
    pub fn new(kind: BellKind) -> Self {
        Self {
            kind,
            base_frequency: kind.default_frequency(),
            duration: kind.default_duration(),
        }
    }

    /// Overrides the fundamental.
    pub fn with_base_frequency(mut self, base_frequency: f64) -> Self {
        self.base_frequency = base_frequency;
        self
    }

    /// Overrides the length.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

/// A catalog sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preset {
    Bell(Bell),
    Buzzer(BuzzerKind),
    Doorbell(DoorbellStyle),
    Notification(NotificationKind),
    Coin,
    Click(ClickKind),
    CashRegister(CashRegisterKind),
    Alarm(AlarmKind),
    Phone(PhoneKind),
    Game(GameKind),
    Swoosh(SwooshLength),
    SystemBeep(BeepKind),
    Keyboard(KeyboardKind),
    CameraShutter,
    Lock(LockAction),
    TickTock { cycles: u32 },
    Bubble(BubbleKind),
}

impl Preset {
    /// Every catalog entry, with default parameters, in catalog order.
    pub fn all() -> Vec<Preset> {
        let mut all = Vec::with_capacity(48);
        all.extend(BellKind::ALL.iter().map(|&k| Preset::Bell(Bell::new(k))));
        all.extend(BuzzerKind::ALL.iter().copied().map(Preset::Buzzer));
        all.extend(DoorbellStyle::ALL.iter().copied().map(Preset::Doorbell));
        all.extend(NotificationKind::ALL.iter().copied().map(Preset::Notification));
        all.push(Preset::Coin);
        all.extend(ClickKind::ALL.iter().copied().map(Preset::Click));
        all.extend(CashRegisterKind::ALL.iter().copied().map(Preset::CashRegister));
        all.extend(AlarmKind::ALL.iter().copied().map(Preset::Alarm));
        all.extend(PhoneKind::ALL.iter().copied().map(Preset::Phone));
        all.extend(GameKind::ALL.iter().copied().map(Preset::Game));
        all.extend(SwooshLength::ALL.iter().copied().map(Preset::Swoosh));
        all.extend(BeepKind::ALL.iter().copied().map(Preset::SystemBeep));
        all.extend(KeyboardKind::ALL.iter().copied().map(Preset::Keyboard));
        all.push(Preset::CameraShutter);
        all.extend(LockAction::ALL.iter().copied().map(Preset::Lock));
        all.push(Preset::TickTock {
            cycles: DEFAULT_TICK_TOCK_CYCLES,
        });
        all.extend(BubbleKind::ALL.iter().copied().map(Preset::Bubble));
        all
    }

    /// Stable name, also used as the output file stem.
    pub fn name(&self) -> String {
        match self {
            Preset::Bell(bell) => format!("{}_bell", bell.kind),
            Preset::Buzzer(kind) => format!("buzzer_{}", kind),
            Preset::Doorbell(style) => format!("doorbell_{}", style),
            Preset::Notification(kind) => format!("notification_{}", kind),
            Preset::Coin => "coin".to_string(),
            Preset::Click(kind) => format!("click_{}", kind),
            Preset::CashRegister(kind) => format!("cash_register_{}", kind),
            Preset::Alarm(kind) => format!("alarm_{}", kind),
            Preset::Phone(kind) => format!("phone_{}", kind),
            Preset::Game(kind) => format!("game_{}", kind),
            Preset::Swoosh(length) => format!("swoosh_{}", length),
            Preset::SystemBeep(kind) => format!("system_beep_{}", kind),
            Preset::Keyboard(kind) => format!("keyboard_{}", kind),
            Preset::CameraShutter => "camera_shutter".to_string(),
            Preset::Lock(action) => action.as_str().to_string(),
            Preset::TickTock { .. } => "tick_tock".to_string(),
            Preset::Bubble(kind) => format!("bubble_{}", kind),
        }
    }

    /// Family the preset belongs to, for grouping in listings.
    pub fn family(&self) -> &'static str {
        match self {
            Preset::Bell(_) => "bell",
            Preset::Buzzer(_) => "buzzer",
            Preset::Doorbell(_) => "doorbell",
            Preset::Notification(_) => "notification",
            Preset::Coin => "coin",
            Preset::Click(_) => "click",
            Preset::CashRegister(_) => "cash_register",
            Preset::Alarm(_) => "alarm",
            Preset::Phone(_) => "phone",
            Preset::Game(_) => "game",
            Preset::Swoosh(_) => "swoosh",
            Preset::SystemBeep(_) => "system_beep",
            Preset::Keyboard(_) => "keyboard",
            Preset::CameraShutter => "camera",
            Preset::Lock(_) => "lock",
            Preset::TickTock { .. } => "clock",
            Preset::Bubble(_) => "bubble",
        }
    }

    /// The sound description for this preset.
    pub fn spec(&self) -> SoundSpec {
        let name = self.name();
        let seed = derive_component_seed(CATALOG_SEED, &name);
        let spec = SoundSpec::new(name).with_seed(seed);

        match *self {
            Preset::Bell(bell) => recipes::bells::bell(&bell, spec),
            Preset::Buzzer(kind) => recipes::alerts::buzzer(kind, spec),
            Preset::Doorbell(style) => recipes::alerts::doorbell(style, spec),
            Preset::Notification(kind) => recipes::alerts::notification(kind, spec),
            Preset::Coin => recipes::ui::coin(spec),
            Preset::Click(kind) => recipes::ui::click(kind, spec),
            Preset::CashRegister(kind) => recipes::ui::cash_register(kind, spec),
            Preset::Alarm(kind) => recipes::alerts::alarm(kind, spec),
            Preset::Phone(kind) => recipes::alerts::phone(kind, spec),
            Preset::Game(kind) => recipes::game::game(kind, spec),
            Preset::Swoosh(length) => recipes::game::swoosh(length, spec),
            Preset::SystemBeep(kind) => recipes::alerts::system_beep(kind, spec),
            Preset::Keyboard(kind) => recipes::ui::keyboard(kind, spec),
            Preset::CameraShutter => recipes::ui::camera_shutter(spec),
            Preset::Lock(action) => recipes::ui::lock(action, spec),
            Preset::TickTock { cycles } => recipes::ui::tick_tock(cycles, spec),
            Preset::Bubble(kind) => recipes::game::bubble(kind, spec),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    /// Parses a preset name; the result carries default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| PresetError::Unknown(s.to_string()))
    }
}
