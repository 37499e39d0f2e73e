//! Border radius tokens

/// Corner radii per control family
#[derive(Clone, Debug)]
pub struct RadiusTokens {
    /// Buttons, text fields, menu lists
    pub control: i32,
    /// Checkboxes and menu check backgrounds
    pub check: i32,
    /// Menu popups and highlighted menu items
    pub menu: i32,
    /// Scrollbar and slider thumbs
    pub thumb: i32,
    /// Progress bars and slider tracks
    pub bar: i32,
}

impl RadiusTokens {
    /// Square corners everywhere
    pub const fn none() -> Self {
        Self {
            control: 0,
            check: 0,
            menu: 0,
            thumb: 0,
            bar: 0,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            control: 4,
            check: 2,
            menu: 4,
            thumb: 3,
            bar: 2,
        }
    }
}
