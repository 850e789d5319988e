//! Variant enums for each preset family.

macro_rules! kind_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name fragment used in preset names.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

kind_enum! {
    /// Bell timbres.
    BellKind {
        /// Bright five-partial bell.
        Simple => "simple",
        /// Deep bell with a long ring.
        Church => "church",
        /// Small, high bell.
        Hand => "hand",
    }
}

impl BellKind {
    /// Fundamental used when no override is given.
    pub fn default_frequency(&self) -> f64 {
        match self {
            BellKind::Simple => 800.0,
            BellKind::Church => 200.0,
            BellKind::Hand => 1200.0,
        }
    }

    /// Length used when no override is given.
    pub fn default_duration(&self) -> f64 {
        match self {
            BellKind::Simple => 1.5,
            BellKind::Church => 3.0,
            BellKind::Hand => 0.8,
        }
    }
}

kind_enum! {
    /// Buzzer moods.
    BuzzerKind {
        Error => "error",
        Warning => "warning",
        Success => "success",
    }
}

kind_enum! {
    /// Doorbell styles.
    DoorbellStyle {
        /// Two falling notes.
        DingDong => "ding_dong",
        /// Three rising notes.
        Chime => "chime",
        /// Electric buzzer.
        Buzz => "buzz",
    }
}

kind_enum! {
    /// Notification sounds.
    NotificationKind {
        Message => "message",
        Alert => "alert",
        Complete => "complete",
        Pop => "pop",
    }
}

kind_enum! {
    /// Button clicks.
    ClickKind {
        Soft => "soft",
        Hard => "hard",
        Mechanical => "mechanical",
    }
}

kind_enum! {
    /// Cash register sounds.
    CashRegisterKind {
        /// Drawer rumble followed by the bell.
        Classic => "classic",
        /// Electronic beeps.
        Modern => "modern",
        /// Bell only.
        ChaChing => "cha_ching",
    }
}

kind_enum! {
    /// Alarm patterns.
    AlarmKind {
        /// Four beeps growing louder and closer together.
        WakeUp => "wake_up",
        Timer => "timer",
        /// Alternating two-tone siren.
        Emergency => "emergency",
    }
}

kind_enum! {
    /// Telephone signals.
    PhoneKind {
        Ringtone => "ringtone",
        Busy => "busy",
        DialTone => "dial_tone",
    }
}

kind_enum! {
    /// Game effects.
    GameKind {
        PowerUp => "power_up",
        LevelUp => "level_up",
        Over => "over",
        Jump => "jump",
        Laser => "laser",
    }
}

kind_enum! {
    /// Swoosh lengths.
    SwooshLength {
        Short => "short",
        Medium => "medium",
        Long => "long",
    }
}

impl SwooshLength {
    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        match self {
            SwooshLength::Short => 0.15,
            SwooshLength::Medium => 0.3,
            SwooshLength::Long => 0.5,
        }
    }
}

kind_enum! {
    /// System beep severities.
    BeepKind {
        Info => "info",
        Warning => "warning",
        Error => "error",
        Critical => "critical",
    }
}

kind_enum! {
    /// Key press sounds.
    KeyboardKind {
        Mechanical => "mechanical",
        Soft => "soft",
        Typewriter => "typewriter",
    }
}

kind_enum! {
    /// Lock direction.
    LockAction {
        Lock => "lock",
        Unlock => "unlock",
    }
}

kind_enum! {
    /// Bubble sizes.
    BubbleKind {
        Pop => "pop",
        Small => "small",
        Large => "large",
    }
}
