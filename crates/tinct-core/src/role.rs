//! The fixed set of palette roles.
//!
//! Roles are declared in generation order, which is also the iteration order
//! of a [`Palette`](crate::Palette) and therefore of every export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaletteError;

/// The family a role belongs to, used for grouping in reports and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoleFamily {
    Backgrounds,
    Elements,
    Foregrounds,
    Accents,
    Borders,
    Semantic,
    Terminal,
}

impl RoleFamily {
    pub const ALL: [RoleFamily; 7] = [
        RoleFamily::Backgrounds,
        RoleFamily::Elements,
        RoleFamily::Foregrounds,
        RoleFamily::Accents,
        RoleFamily::Borders,
        RoleFamily::Semantic,
        RoleFamily::Terminal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoleFamily::Backgrounds => "Backgrounds",
            RoleFamily::Elements => "Elements",
            RoleFamily::Foregrounds => "Foregrounds",
            RoleFamily::Accents => "Accents",
            RoleFamily::Borders => "Borders",
            RoleFamily::Semantic => "Semantic",
            RoleFamily::Terminal => "ANSI Colors",
        }
    }

    /// Roles of this family, in generation order.
    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL.iter().copied().filter(move |r| r.family() == self)
    }
}

macro_rules! roles {
    ($( $family:ident { $( $variant:ident => $name:literal ),+ $(,)? } )+) => {
        /// A named palette slot.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Role {
            $( $( $variant, )+ )+
        }

        impl Role {
            /// Every role, in generation order.
            pub const ALL: &'static [Role] = &[ $( $( Role::$variant, )+ )+ ];

            /// The snake_case key used in exports.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $( Role::$variant => $name, )+ )+
                }
            }

            pub fn family(self) -> RoleFamily {
                match self {
                    $( $( Role::$variant => RoleFamily::$family, )+ )+
                }
            }
        }

        impl FromStr for Role {
            type Err = PaletteError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $( $name => Ok(Role::$variant), )+ )+
                    other => Err(PaletteError::UnknownRole(other.to_string())),
                }
            }
        }
    };
}

roles! {
    Backgrounds {
        Background => "background",
        BackgroundMedium => "background_medium",
        BackgroundLight => "background_light",
        BackgroundDisabled => "background_disabled",
    }
    Elements {
        Element => "element",
        ElementHover => "element_hover",
        ElementActive => "element_active",
        ElementSelected => "element_selected",
        ElementDisabled => "element_disabled",
    }
    Foregrounds {
        Foreground => "foreground",
        ForegroundBright => "foreground_bright",
        ForegroundMedium => "foreground_medium",
        ForegroundDim => "foreground_dim",
    }
    Accents {
        Primary => "primary",
        PrimaryVariant => "primary_variant",
        Secondary => "secondary",
        SecondaryVariant => "secondary_variant",
        Tertiary => "tertiary",
        Muted => "muted",
        Selection => "selection",
    }
    Borders {
        Border => "border",
        BorderVariant => "border_variant",
        BorderFocused => "border_focused",
        BorderSelected => "border_selected",
        BorderDisabled => "border_disabled",
    }
    Semantic {
        Error => "error",
        Warning => "warning",
        Success => "success",
        Info => "info",
    }
    Terminal {
        Black => "black",
        BlackBright => "black_bright",
        BlackDim => "black_dim",
        Red => "red",
        RedBright => "red_bright",
        RedDim => "red_dim",
        Green => "green",
        GreenBright => "green_bright",
        GreenDim => "green_dim",
        Yellow => "yellow",
        YellowBright => "yellow_bright",
        YellowDim => "yellow_dim",
        Blue => "blue",
        BlueBright => "blue_bright",
        BlueDim => "blue_dim",
        Magenta => "magenta",
        MagentaBright => "magenta_bright",
        MagentaDim => "magenta_dim",
        Cyan => "cyan",
        CyanBright => "cyan_bright",
        CyanDim => "cyan_dim",
        White => "white",
        WhiteBright => "white_bright",
        WhiteDim => "white_dim",
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Terminal slots ─────────────────────────────────────────────────────────

/// The eight base ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ansi {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Brightness variant of an ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiVariant {
    Base,
    Bright,
    Dim,
}

impl Ansi {
    pub const ALL: [Ansi; 8] = [
        Ansi::Black,
        Ansi::Red,
        Ansi::Green,
        Ansi::Yellow,
        Ansi::Blue,
        Ansi::Magenta,
        Ansi::Cyan,
        Ansi::White,
    ];

    /// The palette role for this color in the given variant.
    pub fn role(self, variant: AnsiVariant) -> Role {
        use AnsiVariant::*;
        match (self, variant) {
            (Ansi::Black, Base) => Role::Black,
            (Ansi::Black, Bright) => Role::BlackBright,
            (Ansi::Black, Dim) => Role::BlackDim,
            (Ansi::Red, Base) => Role::Red,
            (Ansi::Red, Bright) => Role::RedBright,
            (Ansi::Red, Dim) => Role::RedDim,
            (Ansi::Green, Base) => Role::Green,
            (Ansi::Green, Bright) => Role::GreenBright,
            (Ansi::Green, Dim) => Role::GreenDim,
            (Ansi::Yellow, Base) => Role::Yellow,
            (Ansi::Yellow, Bright) => Role::YellowBright,
            (Ansi::Yellow, Dim) => Role::YellowDim,
            (Ansi::Blue, Base) => Role::Blue,
            (Ansi::Blue, Bright) => Role::BlueBright,
            (Ansi::Blue, Dim) => Role::BlueDim,
            (Ansi::Magenta, Base) => Role::Magenta,
            (Ansi::Magenta, Bright) => Role::MagentaBright,
            (Ansi::Magenta, Dim) => Role::MagentaDim,
            (Ansi::Cyan, Base) => Role::Cyan,
            (Ansi::Cyan, Bright) => Role::CyanBright,
            (Ansi::Cyan, Dim) => Role::CyanDim,
            (Ansi::White, Base) => Role::White,
            (Ansi::White, Bright) => Role::WhiteBright,
            (Ansi::White, Dim) => Role::WhiteDim,
        }
    }

    pub fn base(self) -> Role {
        self.role(AnsiVariant::Base)
    }

    pub fn bright(self) -> Role {
        self.role(AnsiVariant::Bright)
    }

    pub fn dim(self) -> Role {
        self.role(AnsiVariant::Dim)
    }

    pub fn name(self) -> &'static str {
        self.base().as_str()
    }
}
