//! Building blocks shared by the Flex and Grid control sets.
//!
//! A control is either a bounded number (item count, column count, gaps) or a
//! choice out of a closed list of CSS values. Both are plain data: the UI
//! widgets mutate them only through [`ControlSet::apply`].

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// An integer that never leaves `min..=max`.
///
/// Out-of-range input is clamped on construction and on [`Bounded::set`];
/// stepping past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounded {
    value: u8,
    min: u8,
    max: u8,
}

impl Bounded {
    pub const fn new(value: u8, min: u8, max: u8) -> Self {
        let value = if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        };
        Self { value, min, max }
    }

    pub const fn value(self) -> u8 {
        self.value
    }

    pub const fn min(self) -> u8 {
        self.min
    }

    pub const fn max(self) -> u8 {
        self.max
    }

    /// Step up by one. Returns `false` when already at the maximum.
    pub fn increment(&mut self) -> bool {
        if self.value >= self.max {
            return false;
        }
        self.value += 1;
        true
    }

    /// Step down by one. Returns `false` when already at the minimum.
    pub fn decrement(&mut self) -> bool {
        if self.value <= self.min {
            return false;
        }
        self.value -= 1;
        true
    }

    /// Set a new value, clamped into range. Returns whether the value changed.
    pub fn set(&mut self, value: u8) -> bool {
        let clamped = value.clamp(self.min, self.max);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }
}

impl Serialize for Bounded {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value)
    }
}

/// Spacing between items, 0 to 5 rem in half-rem steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gap(Bounded);

impl Gap {
    /// Largest gap, in half-rem steps.
    pub const MAX_HALVES: u8 = 10;

    pub const fn from_halves(halves: u8) -> Self {
        Self(Bounded::new(halves, 0, Self::MAX_HALVES))
    }

    /// Nearest half-rem step to `rem`, clamped to 0..=5.
    pub fn from_rem(rem: f32) -> Self {
        let halves = (rem * 2.0).round().clamp(0.0, f32::from(Self::MAX_HALVES));
        Self::from_halves(halves as u8)
    }

    pub const fn halves(self) -> u8 {
        self.0.value()
    }

    pub fn rem(self) -> f32 {
        f32::from(self.halves()) / 2.0
    }

    pub fn increment(&mut self) -> bool {
        self.0.increment()
    }

    pub fn decrement(&mut self) -> bool {
        self.0.decrement()
    }

    /// Class-token suffix: `1`, `1_5`, `0_5`.
    pub fn token(self) -> String {
        let whole = self.halves() / 2;
        if self.halves() % 2 == 0 {
            whole.to_string()
        } else {
            format!("{whole}_5")
        }
    }

    /// CSS length: `1rem`, `1.5rem`.
    pub fn css_value(self) -> String {
        format!("{}rem", self.token().replace('_', "."))
    }

    /// Every value the gap can take, smallest first.
    pub fn all() -> impl Iterator<Item = Gap> {
        (0..=Self::MAX_HALVES).map(Self::from_halves)
    }
}

impl Serialize for Gap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.rem())
    }
}

/// Store `value` in `slot`. Returns whether the slot changed.
pub(crate) fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Identifier-safe form of a CSS value: hyphens and spaces become underscores.
pub fn identifier_safe(value: &str) -> String {
    value.replace(['-', ' '], "_")
}

/// A control whose value is one of a closed list of options.
pub trait Choice: Copy + Eq + Send + Sync + 'static {
    /// Name of the control, used in error messages.
    const CONTROL: &'static str;
    /// CSS property the choice sets.
    const PROPERTY: &'static str;
    /// Prefix of the class token, e.g. `justifyContent_`.
    const TOKEN_PREFIX: &'static str;
    /// Every option, in the order the selector lists them.
    const ALL: &'static [Self];

    /// Raw value as offered by the selector, e.g. `space-between`.
    fn value(self) -> &'static str;

    /// Human label shown in the selector.
    fn label(self) -> &'static str;

    /// Value of [`Choice::PROPERTY`] this option stands for.
    fn css_value(self) -> &'static str {
        self.value()
    }

    fn token(self) -> String {
        format!("{}{}", Self::TOKEN_PREFIX, identifier_safe(self.value()))
    }

    fn declaration(self) -> String {
        format!("{}: {}", Self::PROPERTY, self.css_value())
    }

    /// Parse a raw option value. Accepts the value itself or its
    /// identifier-safe spelling (`row-reverse` or `row_reverse`).
    fn parse_option(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.value() == raw || identifier_safe(choice.value()) == raw)
            .ok_or_else(|| Error::UnknownOption {
                control: Self::CONTROL,
                value: raw.to_string(),
            })
    }
}

/// Declares a [`Choice`] enum from a lookup table of `Variant => (value, label)`.
macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            control: $control:literal,
            property: $property:literal,
            prefix: $prefix:literal,
            default: $default:ident,
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::controls::Choice for $name {
            const CONTROL: &'static str = $control;
            const PROPERTY: &'static str = $property;
            const TOKEN_PREFIX: &'static str = $prefix;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(raw: &str) -> $crate::error::Result<Self> {
                <Self as $crate::controls::Choice>::parse_option(raw)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::controls::Choice::value(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::controls::Choice::value(*self))
            }
        }
    };
}

pub(crate) use choice;

/// Common surface of the Flex and Grid control sets, used by the shared
/// control-panel widgets and the preview.
pub trait ControlSet: Clone + Default + Send + Sync + 'static {
    /// The closed set of user operations on this control set.
    type Action: Copy + Send + Sync + 'static;

    /// Apply one user operation. Returns whether anything changed.
    fn apply(&mut self, action: Self::Action) -> bool;

    /// Number of placeholder elements in the preview.
    fn item_count(&self) -> u8;

    /// Class-token per control, in a fixed order, without the container class.
    fn tokens(&self) -> Vec<String>;

    /// Class of the preview container.
    fn container_class(&self) -> String;

    /// Class of each placeholder element.
    fn item_class(&self) -> String;

    /// CSS declarations the current state amounts to on the container.
    fn declarations(&self) -> Vec<String>;

    /// Generated CSS shown next to the preview.
    fn css_snippet(&self, selector: &str) -> String {
        let mut out = format!("{selector} {{\n");
        for declaration in self.declarations() {
            out.push_str("    ");
            out.push_str(&declaration);
            out.push_str(";\n");
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_clamps_on_construction() {
        assert_eq!(Bounded::new(0, 1, 12).value(), 1);
        assert_eq!(Bounded::new(40, 1, 12).value(), 12);
        assert_eq!(Bounded::new(5, 1, 12).value(), 5);
    }

    #[test]
    fn bounded_steps_stop_at_the_edges() {
        let mut count = Bounded::new(11, 1, 12);
        assert!(count.increment());
        assert!(!count.increment());
        assert_eq!(count.value(), 12);

        let mut count = Bounded::new(2, 1, 12);
        assert!(count.decrement());
        assert!(!count.decrement());
        assert_eq!(count.value(), 1);
    }

    #[test]
    fn bounded_set_clamps_and_reports_change() {
        let mut columns = Bounded::new(3, 1, 8);
        assert!(columns.set(20));
        assert_eq!(columns.value(), 8);
        assert!(!columns.set(9));
        assert!(columns.set(0));
        assert_eq!(columns.value(), 1);
    }

    #[test]
    fn gap_tokens_use_underscore_for_the_decimal_point() {
        assert_eq!(Gap::from_halves(0).token(), "0");
        assert_eq!(Gap::from_halves(1).token(), "0_5");
        assert_eq!(Gap::from_halves(2).token(), "1");
        assert_eq!(Gap::from_halves(3).token(), "1_5");
        assert_eq!(Gap::from_halves(10).token(), "5");
    }

    #[test]
    fn gap_css_value_is_in_rem() {
        assert_eq!(Gap::from_halves(3).css_value(), "1.5rem");
        assert_eq!(Gap::from_halves(2).css_value(), "1rem");
        assert_eq!(Gap::from_halves(0).css_value(), "0rem");
    }

    #[test]
    fn gap_from_rem_snaps_and_clamps() {
        assert_eq!(Gap::from_rem(1.4).halves(), 3);
        assert_eq!(Gap::from_rem(-2.0).halves(), 0);
        assert_eq!(Gap::from_rem(9.0).halves(), 10);
    }

    #[test]
    fn gap_never_leaves_zero_to_five() {
        let mut gap = Gap::from_halves(1);
        assert!(gap.decrement());
        assert!(!gap.decrement());
        assert_eq!(gap.rem(), 0.0);

        let mut gap = Gap::from_halves(9);
        assert!(gap.increment());
        assert!(!gap.increment());
        assert_eq!(gap.rem(), 5.0);
        assert_eq!(Gap::all().count(), 11);
    }

    #[test]
    fn identifier_safe_replaces_every_separator() {
        assert_eq!(identifier_safe("space-between"), "space_between");
        assert_eq!(identifier_safe("row dense"), "row_dense");
        assert_eq!(identifier_safe("center"), "center");
    }
}
