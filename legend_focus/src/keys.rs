// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key vocabulary and the intents a toolbar derives from it.

use bitflags::bitflags;

/// A key-down as seen by a toolbar.
///
/// Hosts translate their platform key events into this enum. Only the keys a
/// toolbar intercepts get their own variant; printable characters and every
/// other key collapse into [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Escape.
    Escape,
    /// Enter; activation is left to the host's native button handling.
    Enter,
    /// Space; activation is left to the host's native button handling.
    Space,
    /// Tab; sequential navigation belongs to the host.
    Tab,
    /// Any other key.
    Other,
}

/// Linear navigation intent within one toolbar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move forward in display order (right/down arrow).
    Next,
    /// Move backward in display order (left/up arrow).
    Prev,
    /// Jump to the first item (Home).
    First,
    /// Jump to the last item (End).
    Last,
}

/// What an intercepted key asks the toolbar to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// Move the focus along the toolbar.
    Navigate(Navigation),
    /// Dismiss transient state (highlight, tooltip).
    Dismiss,
}

/// Whether a key handler consumed the key.
///
/// `Handled` tells the host to suppress default handling so assistive
/// technology and the page do not act on the same key twice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The key was acted upon; prevent the default action.
    Handled,
    /// The key was not ours; let it through untouched.
    Ignored,
}

impl KeyOutcome {
    /// Returns `true` for [`KeyOutcome::Handled`].
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

impl Key {
    /// Maps a key to its toolbar intent.
    ///
    /// Exactly seven keys produce an intent: the four arrows, Home, End, and
    /// Escape. Everything else returns `None`.
    #[must_use]
    pub const fn intent(self) -> Option<KeyIntent> {
        match self {
            Self::ArrowLeft | Self::ArrowUp => Some(KeyIntent::Navigate(Navigation::Prev)),
            Self::ArrowRight | Self::ArrowDown => Some(KeyIntent::Navigate(Navigation::Next)),
            Self::Home => Some(KeyIntent::Navigate(Navigation::First)),
            Self::End => Some(KeyIntent::Navigate(Navigation::Last)),
            Self::Escape => Some(KeyIntent::Dismiss),
            Self::Enter | Self::Space | Self::Tab | Self::Other => None,
        }
    }
}

bitflags! {
    /// Modifier keys held during a pointer or key event.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if the platform "command" chord is held (Ctrl or Meta).
    #[must_use]
    pub const fn command(self) -> bool {
        self.intersects(Self::CTRL.union(Self::META))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_seven_keys_are_intercepted() {
        let all = [
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::Home,
            Key::End,
            Key::Escape,
            Key::Enter,
            Key::Space,
            Key::Tab,
            Key::Other,
        ];
        let intercepted = all.iter().filter(|k| k.intent().is_some()).count();
        assert_eq!(intercepted, 7, "arrows, Home, End and Escape only");
    }

    #[test]
    fn arrows_pair_up_by_direction() {
        assert_eq!(Key::ArrowUp.intent(), Key::ArrowLeft.intent());
        assert_eq!(Key::ArrowDown.intent(), Key::ArrowRight.intent());
        assert_eq!(Key::Escape.intent(), Some(KeyIntent::Dismiss));
    }

    #[test]
    fn command_chord_accepts_ctrl_or_meta() {
        assert!(Modifiers::CTRL.command());
        assert!(Modifiers::META.command());
        assert!((Modifiers::SHIFT | Modifiers::META).command());
        assert!(!Modifiers::SHIFT.command());
        assert!(!Modifiers::empty().command());
    }
}
