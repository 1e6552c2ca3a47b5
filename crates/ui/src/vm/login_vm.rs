/// Where the sign-in button currently sits.
///
/// Transient UI-only state: it resets to `Center` the moment the form
/// becomes valid and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonPlacement {
    #[default]
    Center,
    Left,
    Right,
}

impl ButtonPlacement {
    /// Placement after the pointer lands on the button while the form is
    /// still incomplete: always move, always away from the current side.
    #[must_use]
    pub fn dodge_from_hover(self) -> Self {
        match self {
            Self::Center | Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }

    /// Placement after a submit attempt while incomplete. Keeps the Enter
    /// key from pinning the button down.
    #[must_use]
    pub fn dodge_from_submit(self) -> Self {
        match self {
            Self::Center => Self::Left,
            Self::Left | Self::Right => Self::Center,
        }
    }

    /// CSS hook for the current placement.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Center => "",
            Self::Left => "dodge-left",
            Self::Right => "dodge-right",
        }
    }
}

/// Both fields filled in; whitespace does not count.
#[must_use]
pub fn is_form_valid(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.trim().is_empty()
}

/// Placement after an edit: a form that just became valid snaps the button
/// back to the middle, an invalid one leaves it where it dodged to.
#[must_use]
pub fn placement_after_edit(current: ButtonPlacement, form_valid: bool) -> ButtonPlacement {
    if form_valid {
        ButtonPlacement::Center
    } else {
        current
    }
}
