//! Size tokens

use mimic_paint::Size;

/// Intrinsic sizes and line widths, in device pixels
#[derive(Clone, Debug)]
pub struct ControlMetrics {
    pub checkbox_size: i32,
    pub radio_size: i32,
    pub push_button: Size,
    pub inner_spin_button: Size,
    pub menu_list_height: i32,
    pub menu_check_size: i32,
    pub menu_check_background_size: i32,
    /// Glyph size of the popup arrow; painted at this size whatever the rect
    pub menu_arrow_size: i32,
    pub menu_separator_height: i32,
    pub menu_gutter_width: i32,
    pub scrollbar_thickness: i32,
    pub scrollbar_min_thumb_length: i32,
    /// Cross-axis gap between the thumb and the track edge
    pub scrollbar_thumb_inset: i32,
    pub scrollbar_arrow_glyph: i32,
    pub gripper_size: i32,
    pub slider_track_thickness: i32,
    /// Horizontal slider thumb; vertical sliders use the transpose
    pub slider_thumb: Size,
    pub trackbar_thumb: Size,
    pub trackbar_track_thickness: i32,
    pub resize_gripper_size: i32,
    pub border_width: i32,
    pub focus_width: i32,
    /// Seconds for one sweep of the progress bar animation
    pub progress_period: f64,
}

impl Default for ControlMetrics {
    fn default() -> Self {
        Self {
            checkbox_size: 13,
            radio_size: 13,
            push_button: Size::new(80, 24),
            inner_spin_button: Size::new(17, 11),
            menu_list_height: 24,
            menu_check_size: 16,
            menu_check_background_size: 22,
            menu_arrow_size: 8,
            menu_separator_height: 7,
            menu_gutter_width: 28,
            scrollbar_thickness: 17,
            scrollbar_min_thumb_length: 17,
            scrollbar_thumb_inset: 2,
            scrollbar_arrow_glyph: 8,
            gripper_size: 8,
            slider_track_thickness: 4,
            slider_thumb: Size::new(11, 21),
            trackbar_thumb: Size::new(11, 21),
            trackbar_track_thickness: 4,
            resize_gripper_size: 16,
            border_width: 1,
            focus_width: 2,
            progress_period: 2.0,
        }
    }
}
