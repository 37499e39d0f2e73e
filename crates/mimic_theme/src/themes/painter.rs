//! Token-driven painter shared by the built-in styles
//!
//! Every built-in style is a [`ThemeTokens`] bundle; `TokenTheme` turns a
//! bundle into a [`NativeTheme`]. Flat styles draw rounded, bordered shapes.
//! Bevelled styles draw square faces framed by raised or sunken 3D edges.

use crate::error::{Result, ThemeError};
use crate::extra::*;
use crate::part::{ArrowDirection, Part, State};
use crate::styling::{ScrollbarColors, StylingState};
use crate::theme::NativeTheme;
use crate::themes::classic;
use crate::tokens::ThemeTokens;
use mimic_paint::{Canvas, Color, Point, Rect, Size};

/// Arrow triangles in quarters of the glyph box, indexed by [`ArrowDirection`]
const ARROW_QUARTERS: [[(i32, i32); 3]; 4] = [
    [(0, 1), (4, 1), (2, 3)], // down
    [(3, 0), (3, 4), (1, 2)], // left
    [(1, 0), (1, 4), (3, 2)], // right
    [(0, 3), (4, 3), (2, 1)], // up
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Relief {
    Raised,
    Sunken,
}

/// A [`NativeTheme`] drawn entirely from a token bundle
pub struct TokenTheme {
    name: &'static str,
    tokens: ThemeTokens,
    styling: StylingState,
}

impl TokenTheme {
    pub fn new(name: &'static str, tokens: ThemeTokens) -> Self {
        let styling = StylingState::new(tokens.scrollbar);
        Self {
            name,
            tokens,
            styling,
        }
    }

    pub fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }

    /// Reject payloads meant for another part and parts this style lacks
    fn check(&self, part: Part, extra: &ExtraParams) -> Result<()> {
        if let Err(err) = extra.validate_for(part) {
            tracing::warn!("{}: {}", self.name, err);
            return Err(err);
        }
        if self.tokens.unthemed.contains(&part) {
            let err = ThemeError::Unthemed {
                theme: self.name.to_string(),
                part,
            };
            tracing::warn!("{}", err);
            return Err(err);
        }
        Ok(())
    }

    fn measure(&self, part: Part, extra: &ExtraParams) -> Size {
        let m = &self.tokens.metrics;
        let thickness = m.scrollbar_thickness;
        match part {
            Part::Checkbox => Size::square(m.checkbox_size),
            Part::Radio => Size::square(m.radio_size),
            Part::PushButton => m.push_button,
            Part::InnerSpinButton => m.inner_spin_button,
            Part::MenuList => Size::new(0, m.menu_list_height),
            Part::MenuCheck => Size::square(m.menu_check_size),
            Part::MenuCheckBackground => Size::square(m.menu_check_background_size),
            Part::MenuPopupArrow => Size::square(m.menu_arrow_size),
            Part::MenuPopupGutter => Size::new(m.menu_gutter_width, 0),
            Part::MenuPopupSeparator => Size::new(0, m.menu_separator_height),
            Part::MenuPopupBackground
            | Part::MenuItemBackground
            | Part::ProgressBar
            | Part::TabPanelBackground
            | Part::TextField => Size::ZERO,
            Part::ScrollbarDownArrow
            | Part::ScrollbarLeftArrow
            | Part::ScrollbarRightArrow
            | Part::ScrollbarUpArrow => Size::square(thickness),
            Part::ScrollbarHorizontalThumb => Size::new(m.scrollbar_min_thumb_length, thickness),
            Part::ScrollbarVerticalThumb => Size::new(thickness, m.scrollbar_min_thumb_length),
            Part::ScrollbarHorizontalTrack => Size::new(0, thickness),
            Part::ScrollbarVerticalTrack => Size::new(thickness, 0),
            Part::ScrollbarHorizontalGripper | Part::ScrollbarVerticalGripper => {
                Size::square(m.gripper_size)
            }
            Part::SliderTrack => {
                let track = Size::new(0, m.slider_track_thickness);
                if extra.slider().vertical {
                    track.transposed()
                } else {
                    track
                }
            }
            Part::SliderThumb => {
                if extra.slider().vertical {
                    m.slider_thumb.transposed()
                } else {
                    m.slider_thumb
                }
            }
            Part::TrackbarThumb => m.trackbar_thumb,
            Part::TrackbarTrack => Size::new(0, m.trackbar_track_thickness),
            Part::WindowResizeGripper => Size::square(m.resize_gripper_size),
        }
    }

    fn paint_part(
        &self,
        canvas: &mut dyn Canvas,
        part: Part,
        state: State,
        rect: Rect,
        extra: &ExtraParams,
        scrollbar: ScrollbarColors,
    ) {
        let p = &self.tokens.palette;
        let r = &self.tokens.radii;
        match part {
            Part::Checkbox => self.paint_checkbox(canvas, state, rect, &extra.button()),
            Part::Radio => self.paint_radio(canvas, state, rect, &extra.button()),
            Part::PushButton => self.paint_push_button(canvas, state, rect, &extra.button()),
            Part::InnerSpinButton => {
                self.paint_inner_spin(canvas, state, rect, &extra.inner_spin())
            }
            Part::MenuList => self.paint_menu_list(canvas, state, rect, &extra.menu_list()),
            Part::MenuCheck => self.paint_menu_check(canvas, state, rect, &extra.menu_check()),
            Part::MenuCheckBackground => {
                if self.tokens.bevelled {
                    self.frame(canvas, rect, 0, None, p.face, Relief::Sunken);
                } else {
                    canvas.fill_rounded_rect(rect, r.check, p.menu_highlight);
                }
            }
            Part::MenuPopupArrow => {
                self.paint_menu_arrow(canvas, state, rect, &extra.menu_arrow())
            }
            Part::MenuPopupBackground => self.frame(
                canvas,
                rect,
                r.menu,
                Some(p.menu_border),
                p.menu,
                Relief::Raised,
            ),
            Part::MenuPopupGutter => {
                canvas.fill_rect(rect, p.menu_gutter);
                canvas.fill_rect(
                    Rect::new(rect.right() - 1, rect.y, 1, rect.height),
                    p.menu_separator,
                );
            }
            Part::MenuPopupSeparator => {
                self.paint_menu_separator(canvas, rect, &extra.menu_separator())
            }
            Part::MenuItemBackground => {
                self.paint_menu_item(canvas, state, rect, &extra.menu_item())
            }
            Part::ProgressBar => {
                self.paint_progress_bar(canvas, state, rect, &extra.progress_bar())
            }
            Part::ScrollbarDownArrow
            | Part::ScrollbarLeftArrow
            | Part::ScrollbarRightArrow
            | Part::ScrollbarUpArrow => {
                if let Some(direction) = part.arrow_direction() {
                    self.paint_scrollbar_arrow(
                        canvas,
                        direction,
                        state,
                        rect,
                        &extra.scrollbar_arrow(),
                        scrollbar,
                    );
                }
            }
            Part::ScrollbarHorizontalThumb | Part::ScrollbarVerticalThumb => self
                .paint_scrollbar_thumb(
                    canvas,
                    part == Part::ScrollbarHorizontalThumb,
                    state,
                    rect,
                    &extra.scrollbar_thumb(),
                    scrollbar,
                ),
            Part::ScrollbarHorizontalTrack | Part::ScrollbarVerticalTrack => {
                self.paint_scrollbar_track(canvas, state, rect, &extra.scrollbar_track(), scrollbar)
            }
            Part::ScrollbarHorizontalGripper | Part::ScrollbarVerticalGripper => self
                .paint_gripper(canvas, part == Part::ScrollbarHorizontalGripper, state, rect),
            Part::SliderTrack => self.paint_slider_track(canvas, state, rect, &extra.slider()),
            Part::SliderThumb => self.paint_slider_thumb(canvas, state, rect, &extra.slider()),
            Part::TabPanelBackground => self.frame(
                canvas,
                rect,
                r.control,
                Some(p.border),
                p.panel,
                Relief::Raised,
            ),
            Part::TextField => self.paint_text_field(canvas, state, rect, &extra.text_field()),
            Part::TrackbarThumb => {
                self.paint_trackbar_thumb(canvas, state, rect, &extra.trackbar())
            }
            Part::TrackbarTrack => self.paint_trackbar_track(canvas, state, rect),
            Part::WindowResizeGripper => self.paint_resize_gripper(canvas, state, rect),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shared shapes
    // ─────────────────────────────────────────────────────────────────────────

    fn classic_state(&self, state: State, flags: i32) -> State {
        if self.tokens.honors_classic_state {
            classic::resolve_state(state, flags)
        } else {
            state
        }
    }

    fn classic_checked(&self, checked: bool, flags: i32) -> bool {
        checked || (self.tokens.honors_classic_state && classic::is_checked(flags))
    }

    /// A control face: bordered and rounded when flat, bevelled otherwise
    fn frame(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        radius: i32,
        border: Option<Color>,
        fill: Color,
        relief: Relief,
    ) {
        if self.tokens.bevelled {
            canvas.fill_rect(rect, fill);
            self.bevel(canvas, rect, relief);
        } else {
            bordered(
                canvas,
                rect,
                radius,
                border,
                self.tokens.metrics.border_width,
                fill,
            );
        }
    }

    /// Two-pixel 3D edge around `rect`
    fn bevel(&self, canvas: &mut dyn Canvas, rect: Rect, relief: Relief) {
        let p = &self.tokens.palette;
        match relief {
            Relief::Raised => {
                edges(canvas, rect, Some(p.bevel_light), Some(p.bevel_dark_shadow));
                edges(canvas, rect.inset(1), None, Some(p.bevel_shadow));
            }
            Relief::Sunken => {
                edges(canvas, rect, Some(p.bevel_shadow), Some(p.bevel_light));
                edges(canvas, rect.inset(1), Some(p.bevel_dark_shadow), None);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Buttons
    // ─────────────────────────────────────────────────────────────────────────

    fn paint_checkbox(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &ButtonExtraParams,
    ) {
        let p = &self.tokens.palette;
        let state = self.classic_state(state, params.classic_state);
        let checked = self.classic_checked(params.checked, params.classic_state);
        let side = rect.width.min(rect.height);
        let bx = rect.centered_size(Size::square(side));
        let marked = checked || params.indeterminate;
        let on_accent = marked && !self.tokens.bevelled;

        if on_accent {
            let fill = p.accent(state);
            self.frame(canvas, bx, self.tokens.radii.check, Some(fill), fill, Relief::Sunken);
        } else {
            let fill = match state {
                State::Disabled => p.field_disabled,
                State::Pressed => p.face_pressed,
                _ => p.field,
            };
            self.frame(
                canvas,
                bx,
                self.tokens.radii.check,
                Some(p.border(state)),
                fill,
                Relief::Sunken,
            );
        }

        let glyph = if on_accent {
            p.glyph_on_accent
        } else {
            p.glyph(state)
        };
        let inner = bx.inset((side / 5).max(2));
        if params.indeterminate {
            let bar = (side / 6).max(2);
            canvas.fill_rect(
                inner.centered_size(Size::new(inner.width, bar)),
                glyph,
            );
        } else if checked {
            check_mark(canvas, inner, glyph);
        }
    }

    fn paint_radio(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &ButtonExtraParams,
    ) {
        let p = &self.tokens.palette;
        let state = self.classic_state(state, params.classic_state);
        let checked = self.classic_checked(params.checked, params.classic_state);
        let side = rect.width.min(rect.height);
        let bx = rect.centered_size(Size::square(side));

        if checked && !self.tokens.bevelled {
            canvas.fill_ellipse(bx, p.accent(state));
            canvas.fill_ellipse(bx.inset(fraction(side, 3, 10)), p.glyph_on_accent);
            return;
        }

        let border = if self.tokens.bevelled {
            p.bevel_shadow
        } else {
            p.border(state)
        };
        let fill = if state == State::Disabled {
            p.field_disabled
        } else {
            p.field
        };
        canvas.fill_ellipse(bx, border);
        canvas.fill_ellipse(bx.inset(self.tokens.metrics.border_width), fill);
        if checked {
            canvas.fill_ellipse(bx.inset(side / 3), p.glyph(state));
        }
    }

    fn paint_push_button(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &ButtonExtraParams,
    ) {
        let p = &self.tokens.palette;
        let m = &self.tokens.metrics;
        let state = self.classic_state(state, params.classic_state);
        let checked = self.classic_checked(params.checked, params.classic_state);
        let enabled = state != State::Disabled;

        let mut face = if checked && state != State::Pressed {
            p.face_pressed
        } else {
            p.face(state)
        };
        let background = params.background_color;
        if !background.is_transparent() && enabled {
            face = match state {
                State::Hovered => background.darken(0.05),
                State::Pressed => background.darken(0.12),
                _ => background,
            };
        }
        let relief = if state == State::Pressed || checked {
            Relief::Sunken
        } else {
            Relief::Raised
        };

        if self.tokens.bevelled {
            let mut body = rect;
            if params.is_default && enabled {
                canvas.stroke_rect(rect, p.border, 1);
                body = rect.inset(1);
            }
            self.frame(canvas, body, 0, None, face, relief);
            return;
        }

        if params.is_default && enabled {
            bordered(
                canvas,
                rect,
                self.tokens.radii.control,
                Some(p.accent(state)),
                m.focus_width,
                face,
            );
        } else {
            let border = params.has_border.then(|| p.border(state));
            self.frame(canvas, rect, self.tokens.radii.control, border, face, relief);
        }
    }

    fn paint_inner_spin(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &InnerSpinButtonExtraParams,
    ) {
        let p = &self.tokens.palette;
        let mut state = self.classic_state(state, params.classic_state);
        if params.read_only {
            state = State::Disabled;
        }
        let relief = if state == State::Pressed {
            Relief::Sunken
        } else {
            Relief::Raised
        };
        self.frame(
            canvas,
            rect,
            self.tokens.radii.check,
            Some(p.border(state)),
            p.face(state),
            relief,
        );

        let direction = if params.spin_up {
            ArrowDirection::Up
        } else {
            ArrowDirection::Down
        };
        let side = self
            .tokens
            .metrics
            .scrollbar_arrow_glyph
            .min(rect.width - 2)
            .min(rect.height - 2);
        arrow(
            canvas,
            rect.centered_size(Size::square(side)),
            direction,
            p.glyph(state),
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Menus
    // ─────────────────────────────────────────────────────────────────────────

    fn paint_menu_list(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &MenuListExtraParams,
    ) {
        let p = &self.tokens.palette;
        let state = self.classic_state(state, params.classic_state);
        let fill = if state == State::Disabled {
            p.field_disabled
        } else if !params.background_color.is_transparent() {
            params.background_color
        } else {
            p.field
        };
        let radius = if params.has_border_radius {
            self.tokens.radii.control
        } else {
            0
        };

        if params.has_border {
            self.frame(canvas, rect, radius, Some(p.border(state)), fill, Relief::Sunken);
        } else {
            canvas.fill_rounded_rect(rect, radius, fill);
        }

        // A zeroed payload has no arrow position; park the arrow at the end
        let side = self.tokens.metrics.menu_arrow_size;
        let center = if params.arrow_x == 0 && params.arrow_y == 0 {
            Point::new(rect.right().saturating_sub(rect.height / 2), rect.center().y)
        } else {
            Point::new(
                params.arrow_x.clamp(rect.x, rect.right()),
                params.arrow_y.clamp(rect.y, rect.bottom()),
            )
        };
        let glyph_box = Rect::new(
            center.x.saturating_sub(side / 2),
            center.y.saturating_sub(side / 2),
            side,
            side,
        );
        arrow(canvas, glyph_box, ArrowDirection::Down, p.glyph(state));
    }

    fn menu_glyph(&self, state: State, is_selected: bool) -> Color {
        let p = &self.tokens.palette;
        match state {
            State::Disabled if is_selected => p.glyph_disabled.mix(p.menu, 0.3),
            State::Disabled => p.glyph_disabled,
            _ if is_selected && self.tokens.bevelled => p.glyph_on_accent,
            _ => p.glyph,
        }
    }

    fn paint_menu_check(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &MenuCheckExtraParams,
    ) {
        let side = self
            .tokens
            .metrics
            .menu_check_size
            .min(rect.width)
            .min(rect.height);
        let bx = rect.centered_size(Size::square(side));
        let color = self.menu_glyph(state, params.is_selected);
        if params.is_radio {
            canvas.fill_ellipse(bx.inset(side / 4), color);
        } else {
            check_mark(canvas, bx.inset(side / 8), color);
        }
    }

    /// Drawn at its natural size even when `rect` is smaller
    fn paint_menu_arrow(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &MenuArrowExtraParams,
    ) {
        let side = self.tokens.metrics.menu_arrow_size;
        let direction = if params.pointing_right {
            ArrowDirection::Right
        } else {
            ArrowDirection::Left
        };
        arrow(
            canvas,
            rect.centered_size(Size::square(side)),
            direction,
            self.menu_glyph(state, params.is_selected),
        );
    }

    fn paint_menu_separator(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        params: &MenuSeparatorExtraParams,
    ) {
        let p = &self.tokens.palette;
        let indent = if params.has_gutter {
            self.tokens.metrics.menu_gutter_width.min(rect.width)
        } else {
            0
        };
        let x = rect.x.saturating_add(indent);
        let y = rect.center().y;
        let width = rect.right() - x;
        canvas.fill_rect(Rect::new(x, y, width, 1), p.menu_separator);
        if self.tokens.bevelled {
            canvas.fill_rect(Rect::new(x, y.saturating_add(1), width, 1), p.bevel_light);
        }
    }

    fn paint_menu_item(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &MenuItemExtraParams,
    ) {
        let p = &self.tokens.palette;
        let highlighted =
            params.is_selected || matches!(state, State::Hovered | State::Pressed);
        if !highlighted {
            return;
        }
        let color = if state == State::Disabled {
            p.menu_highlight.with_opacity(0.5)
        } else {
            p.menu_highlight
        };
        canvas.fill_rounded_rect(rect, self.tokens.radii.control, color);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Progress bar
    // ─────────────────────────────────────────────────────────────────────────

    fn paint_progress_bar(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &ProgressBarExtraParams,
    ) {
        let p = &self.tokens.palette;
        let period = self.tokens.metrics.progress_period;
        self.frame(
            canvas,
            rect,
            self.tokens.radii.bar,
            Some(p.border(state)),
            p.track,
            Relief::Sunken,
        );

        let fill = p.accent(state);
        let phase = if period > 0.0 {
            params.animated_seconds.rem_euclid(period) / period
        } else {
            0.0
        };

        if params.determinate {
            let value = Rect::new(
                params.value_rect_x,
                params.value_rect_y,
                params.value_rect_width,
                params.value_rect_height,
            );
            let Some(value) = value.intersect(&rect) else {
                return;
            };
            canvas.fill_rect(value, fill);

            // Glint sweeping across the filled region
            if params.animated_seconds > 0.0 && !self.tokens.bevelled {
                let band = (value.width / 5).max(1);
                let x = sweep(value.x, value.width, band, phase);
                if let Some(glint) = Rect::new(x, value.y, band, value.height).intersect(&value) {
                    canvas.fill_rect(glint, fill.lighten(0.25));
                }
            }
        } else {
            let segment = (rect.width / 4).max(1);
            let x = sweep(rect.x, rect.width, segment, phase);
            if let Some(moving) = Rect::new(x, rect.y, segment, rect.height).intersect(&rect) {
                canvas.fill_rect(moving, fill);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scrollbars
    // ─────────────────────────────────────────────────────────────────────────

    fn paint_scrollbar_arrow(
        &self,
        canvas: &mut dyn Canvas,
        direction: ArrowDirection,
        state: State,
        rect: Rect,
        params: &ScrollbarArrowExtraParams,
        scrollbar: ScrollbarColors,
    ) {
        let p = &self.tokens.palette;
        let state = if state == State::Normal && params.is_hovering {
            State::Hovered
        } else {
            state
        };
        let side = self
            .tokens
            .metrics
            .scrollbar_arrow_glyph
            .min(rect.width)
            .min(rect.height);
        let mut glyph_box = rect.centered_size(Size::square(side));

        let glyph = if self.tokens.bevelled {
            let relief = if state == State::Pressed {
                let origin = glyph_box.origin().offset(1, 1);
                glyph_box = Rect::new(origin.x, origin.y, side, side);
                Relief::Sunken
            } else {
                Relief::Raised
            };
            self.frame(canvas, rect, 0, None, p.face, relief);
            p.glyph(state)
        } else {
            canvas.fill_rect(rect, scrollbar.track);
            match state {
                State::Disabled => p.glyph_disabled,
                State::Normal => scrollbar.thumb_inactive,
                State::Hovered | State::Pressed => scrollbar.thumb_active,
            }
        };
        arrow(canvas, glyph_box, direction, glyph);
    }

    fn paint_scrollbar_thumb(
        &self,
        canvas: &mut dyn Canvas,
        horizontal: bool,
        state: State,
        rect: Rect,
        params: &ScrollbarThumbExtraParams,
        scrollbar: ScrollbarColors,
    ) {
        let active = matches!(state, State::Hovered | State::Pressed) || params.is_hovering;
        let mut color = if active {
            scrollbar.thumb_active
        } else {
            scrollbar.thumb_inactive
        };
        match state {
            State::Pressed => color = color.darken(0.15),
            State::Disabled => color = color.with_opacity(0.4),
            _ => {}
        }

        if self.tokens.bevelled {
            self.frame(canvas, rect, 0, None, color, Relief::Raised);
            return;
        }
        let inset = self.tokens.metrics.scrollbar_thumb_inset;
        let thumb = if horizontal {
            rect.inset_xy(0, inset)
        } else {
            rect.inset_xy(inset, 0)
        };
        canvas.fill_rounded_rect(thumb, self.tokens.radii.thumb, color);
    }

    fn paint_scrollbar_track(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &ScrollbarTrackExtraParams,
        scrollbar: ScrollbarColors,
    ) {
        let state = self.classic_state(state, params.classic_state);
        canvas.fill_rect(rect, scrollbar.track);
        if state != State::Pressed {
            return;
        }

        // The part of the track being paged through
        let pressed = Rect::new(
            params.track_x,
            params.track_y,
            params.track_width,
            params.track_height,
        );
        let pressed = if pressed.is_empty() { rect } else { pressed };
        let color = if self.tokens.bevelled {
            self.tokens.palette.bevel_dark_shadow
        } else {
            scrollbar.track.darken(0.1)
        };
        if let Some(area) = pressed.intersect(&rect) {
            canvas.fill_rect(area, color);
        }
    }

    fn paint_gripper(&self, canvas: &mut dyn Canvas, horizontal: bool, state: State, rect: Rect) {
        let p = &self.tokens.palette;
        let side = self.tokens.metrics.gripper_size.min(rect.width).min(rect.height);
        if side <= 0 {
            return;
        }
        let bx = rect.centered_size(Size::square(side));
        let color = if state == State::Disabled {
            p.glyph_disabled
        } else {
            p.gripper
        };

        // Three ridges across the thumb's direction of travel
        for i in 0..3 {
            let offset = fraction(side, 2 * i + 1, 6);
            let (ridge, highlight) = if horizontal {
                let at = bx.origin().offset(offset, 0);
                (
                    Rect::new(at.x, at.y, 1, side),
                    Rect::new(at.x.saturating_add(1), at.y, 1, side),
                )
            } else {
                let at = bx.origin().offset(0, offset);
                (
                    Rect::new(at.x, at.y, side, 1),
                    Rect::new(at.x, at.y.saturating_add(1), side, 1),
                )
            };
            canvas.fill_rect(ridge, color);
            if self.tokens.bevelled {
                canvas.fill_rect(ridge, p.bevel_shadow);
                if let Some(highlight) = highlight.intersect(&bx) {
                    canvas.fill_rect(highlight, p.bevel_light);
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sliders and trackbars
    // ─────────────────────────────────────────────────────────────────────────

    fn paint_slider_track(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &SliderExtraParams,
    ) {
        let p = &self.tokens.palette;
        let t = self.tokens.metrics.slider_track_thickness;
        let center = rect.center();
        let bar = if params.vertical {
            Rect::new(center.x.saturating_sub(t / 2), rect.y, t, rect.height)
        } else {
            Rect::new(rect.x, center.y.saturating_sub(t / 2), rect.width, t)
        };
        let Some(bar) = bar.intersect(&rect) else {
            return;
        };
        if self.tokens.bevelled {
            self.frame(canvas, bar, 0, None, p.field, Relief::Sunken);
        } else {
            let color = if state == State::Disabled {
                p.track.mix(p.face_disabled, 0.5)
            } else {
                p.track
            };
            canvas.fill_rounded_rect(bar, self.tokens.radii.bar, color);
        }
    }

    fn paint_slider_thumb(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &SliderExtraParams,
    ) {
        let p = &self.tokens.palette;
        let m = &self.tokens.metrics;
        let size = if params.vertical {
            m.slider_thumb.transposed()
        } else {
            m.slider_thumb
        };
        let Some(thumb) = rect.centered_size(size).intersect(&rect) else {
            return;
        };
        let state = if params.in_drag && state != State::Disabled {
            State::Pressed
        } else {
            state
        };

        if self.tokens.bevelled {
            self.frame(canvas, thumb, 0, None, p.face(state), Relief::Raised);
            return;
        }
        let short = thumb.width.min(thumb.height);
        bordered(
            canvas,
            thumb,
            self.tokens.radii.thumb.min(short / 2),
            Some(p.border(state)),
            m.border_width,
            p.face(state),
        );
        canvas.fill_ellipse(
            thumb.centered_size(Size::square(short / 2)),
            p.accent(state),
        );
    }

    fn paint_trackbar_thumb(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &TrackbarExtraParams,
    ) {
        let p = &self.tokens.palette;
        let state = self.classic_state(state, params.classic_state);
        let Some(thumb) = rect
            .centered_size(self.tokens.metrics.trackbar_thumb)
            .intersect(&rect)
        else {
            return;
        };
        let relief = if state == State::Pressed {
            Relief::Sunken
        } else {
            Relief::Raised
        };
        self.frame(
            canvas,
            thumb,
            self.tokens.radii.control,
            Some(p.border(state)),
            p.face(state),
            relief,
        );
    }

    fn paint_trackbar_track(&self, canvas: &mut dyn Canvas, state: State, rect: Rect) {
        let p = &self.tokens.palette;
        let t = self.tokens.metrics.trackbar_track_thickness;
        let bar = Rect::new(rect.x, rect.center().y.saturating_sub(t / 2), rect.width, t);
        if let Some(bar) = bar.intersect(&rect) {
            self.frame(
                canvas,
                bar,
                self.tokens.radii.bar,
                Some(p.border(state)),
                p.track,
                Relief::Sunken,
            );
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fields and panels
    // ─────────────────────────────────────────────────────────────────────────

    fn paint_text_field(
        &self,
        canvas: &mut dyn Canvas,
        state: State,
        rect: Rect,
        params: &TextFieldExtraParams,
    ) {
        let p = &self.tokens.palette;
        let m = &self.tokens.metrics;
        let state = self.classic_state(state, params.classic_state);
        let inactive = state == State::Disabled || params.is_read_only;
        let fill = if inactive {
            p.field_disabled
        } else if !params.background_color.is_transparent() {
            params.background_color
        } else {
            p.field
        };
        let radius = if params.is_listbox {
            0
        } else {
            self.tokens.radii.control
        };

        if self.tokens.bevelled {
            if params.fill_content_area {
                canvas.fill_rect(rect, fill);
            }
            if params.draw_edges {
                self.bevel(canvas, rect, Relief::Sunken);
            }
            return;
        }

        let focused = params.is_focused && !inactive;
        let (border, width) = if focused {
            (p.border_focus, m.focus_width)
        } else {
            (p.border(state), m.border_width)
        };
        match (params.draw_edges, params.fill_content_area) {
            (true, true) => bordered(canvas, rect, radius, Some(border), width, fill),
            (true, false) => canvas.stroke_rect(rect, border, width),
            (false, true) => canvas.fill_rounded_rect(rect, radius, fill),
            (false, false) => {}
        }
    }

    fn paint_resize_gripper(&self, canvas: &mut dyn Canvas, state: State, rect: Rect) {
        let p = &self.tokens.palette;
        let side = self
            .tokens
            .metrics
            .resize_gripper_size
            .min(rect.width)
            .min(rect.height);
        let step = side / 3;
        if step <= 0 {
            return;
        }
        let bx = Rect::new(rect.right() - side, rect.bottom() - side, side, side);
        let dot = (step / 2).max(1);
        let color = if state == State::Disabled {
            p.glyph_disabled
        } else {
            p.gripper
        };

        // Dots on and below the anti-diagonal of a 3x3 grid
        for i in 0..3 {
            for j in 0..3 {
                if i + j < 2 {
                    continue;
                }
                let margin = (step - dot) / 2;
                let at = bx.origin().offset(i * step + margin, j * step + margin);
                canvas.fill_rect(Rect::new(at.x, at.y, dot, dot), color);
            }
        }
    }
}

impl NativeTheme for TokenTheme {
    fn name(&self) -> &str {
        self.name
    }

    fn part_size(&self, part: Part, state: State, extra: &ExtraParams) -> Result<Size> {
        self.check(part, extra)?;
        let size = self.measure(part, extra);
        tracing::trace!("{}: {} {} measures {:?}", self.name, part, state, size);
        Ok(size)
    }

    fn paint(
        &self,
        canvas: &mut dyn Canvas,
        part: Part,
        state: State,
        rect: Rect,
        extra: &ExtraParams,
    ) -> Result<()> {
        self.check(part, extra)?;
        if rect.is_empty() {
            return Ok(());
        }

        // One snapshot per call; concurrent color updates apply to the next paint
        let scrollbar = self.styling.scrollbar_colors();
        tracing::trace!("{}: paint {} {} in {:?}", self.name, part, state, rect);

        let clipped = !part.may_overflow_bounds();
        if clipped {
            canvas.push_clip(rect);
        }
        self.paint_part(canvas, part, state, rect, extra, scrollbar);
        if clipped {
            canvas.pop_clip();
        }
        Ok(())
    }

    fn styling(&self) -> &StylingState {
        &self.styling
    }
}

/// Fill `rect`, drawing a `width`-pixel border ring first when given
fn bordered(
    canvas: &mut dyn Canvas,
    rect: Rect,
    radius: i32,
    border: Option<Color>,
    width: i32,
    fill: Color,
) {
    match border {
        Some(border) if width > 0 => {
            canvas.fill_rounded_rect(rect, radius, border);
            canvas.fill_rounded_rect(rect.inset(width), (radius - width).max(0), fill);
        }
        _ => canvas.fill_rounded_rect(rect, radius, fill),
    }
}

/// One-pixel top/left and bottom/right edges of `rect`
fn edges(
    canvas: &mut dyn Canvas,
    rect: Rect,
    top_left: Option<Color>,
    bottom_right: Option<Color>,
) {
    if rect.is_empty() {
        return;
    }
    if let Some(color) = top_left {
        canvas.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        canvas.fill_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
    }
    if let Some(color) = bottom_right {
        canvas.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.width, 1), color);
        canvas.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.height), color);
    }
}

/// Filled triangle inside the square `bounds`
fn arrow(canvas: &mut dyn Canvas, bounds: Rect, direction: ArrowDirection, color: Color) {
    let side = bounds.width.min(bounds.height);
    if side <= 0 {
        return;
    }
    let bx = bounds.centered_size(Size::square(side));
    let points = ARROW_QUARTERS[direction.index()]
        .map(|(qx, qy)| bx.origin().offset(fraction(side, qx, 4), fraction(side, qy, 4)));
    canvas.fill_polygon(&points, color);
}

fn check_mark(canvas: &mut dyn Canvas, bounds: Rect, color: Color) {
    let side = bounds.width.min(bounds.height);
    if side <= 0 {
        return;
    }
    let bx = bounds.centered_size(Size::square(side));
    let at = |fx: i32, fy: i32| {
        bx.origin()
            .offset(fraction(side - 1, fx, 12), fraction(side - 1, fy, 12))
    };
    let (start, knee, end) = (at(1, 6), at(5, 10), at(11, 2));
    let weight = (side / 6).max(1);
    for dy in 0..weight {
        canvas.draw_line(start.offset(0, dy), knee.offset(0, dy), color);
        canvas.draw_line(knee.offset(0, dy), end.offset(0, dy), color);
    }
}

/// `value * num / den` without overflowing on the way
fn fraction(value: i32, num: i32, den: i32) -> i32 {
    let scaled = i64::from(value) * i64::from(num) / i64::from(den);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Left edge of a `band` wide highlight sweeping from just before `start` to
/// `start + width` as `phase` runs from 0 to 1
fn sweep(start: i32, width: i32, band: i32, phase: f64) -> i32 {
    let x = f64::from(start) - f64::from(band) + (f64::from(width) + f64::from(band)) * phase;
    // Float to int casts saturate
    x.floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{ClassicTheme, LinuxTheme, WindowsTheme};
    use mimic_paint::{PaintCommand, PaintContext};

    fn record(
        theme: &TokenTheme,
        part: Part,
        state: State,
        rect: Rect,
        extra: ExtraParams,
    ) -> Vec<PaintCommand> {
        let mut ctx = PaintContext::new();
        theme
            .paint(&mut ctx, part, state, rect, &extra)
            .expect("paint");
        ctx.take_commands()
    }

    #[test]
    fn clip_is_balanced() {
        let theme = WindowsTheme::theme();
        let mut ctx = PaintContext::new();
        for part in Part::ALL {
            theme
                .paint(&mut ctx, part, State::Normal, Rect::new(0, 0, 40, 20), &ExtraParams::None)
                .expect("paint");
            assert_eq!(ctx.clip_depth(), 0, "{part}");
        }
    }

    #[test]
    fn menu_arrow_is_not_clipped() {
        let theme = WindowsTheme::theme();
        let commands = record(
            &theme,
            Part::MenuPopupArrow,
            State::Normal,
            Rect::new(10, 10, 2, 2),
            ExtraParams::None,
        );
        assert!(!commands
            .iter()
            .any(|c| matches!(c, PaintCommand::PushClip { .. })));
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let theme = LinuxTheme::theme();
        let commands = record(
            &theme,
            Part::PushButton,
            State::Normal,
            Rect::new(5, 5, 0, 10),
            ExtraParams::None,
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn default_button_uses_accent() {
        let theme = WindowsTheme::theme();
        let accent = theme.tokens().palette.accent;
        let extra = ButtonExtraParams {
            is_default: true,
            ..Default::default()
        };
        let commands = record(
            &theme,
            Part::PushButton,
            State::Normal,
            Rect::new(0, 0, 80, 24),
            extra.into(),
        );
        assert!(commands.iter().any(|c| c.color() == Some(accent)));
    }

    #[test]
    fn pressed_track_region_is_darkened() {
        let theme = WindowsTheme::theme();
        let track = theme.scrollbar_colors().track;
        let extra = ScrollbarTrackExtraParams {
            track_x: 0,
            track_y: 20,
            track_width: 17,
            track_height: 30,
            ..Default::default()
        };
        let commands = record(
            &theme,
            Part::ScrollbarVerticalTrack,
            State::Pressed,
            Rect::new(0, 0, 17, 100),
            extra.into(),
        );
        assert!(commands.contains(&PaintCommand::FillRect {
            rect: Rect::new(0, 20, 17, 30),
            color: track.darken(0.1),
        }));
    }

    #[test]
    fn classic_pushed_flag_sinks_the_button() {
        let theme = ClassicTheme::theme();
        let p = &theme.tokens().palette;
        let extra = ButtonExtraParams {
            classic_state: classic::classic_state::PUSHED,
            ..Default::default()
        };
        let commands = record(
            &theme,
            Part::PushButton,
            State::Normal,
            Rect::new(0, 0, 75, 23),
            extra.into(),
        );
        // Sunken: top edge in shadow
        assert!(commands.contains(&PaintCommand::FillRect {
            rect: Rect::new(0, 0, 75, 1),
            color: p.bevel_shadow,
        }));
    }

    #[test]
    fn far_arrow_position_is_pulled_into_the_list() {
        let theme = WindowsTheme::theme();
        let side = theme.tokens().metrics.menu_arrow_size;
        let rect = Rect::new(0, 0, 100, 20);
        let extra = MenuListExtraParams {
            arrow_x: i32::MAX,
            arrow_y: i32::MIN,
            ..Default::default()
        };
        let commands = record(&theme, Part::MenuList, State::Normal, rect, extra.into());
        let points: Vec<Point> = commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::FillPolygon { points, .. } => Some(points.to_vec()),
                _ => None,
            })
            .flatten()
            .collect();
        assert!(!points.is_empty());
        for p in points {
            assert!(p.x >= rect.right() - side && p.x <= rect.right() + side, "{p:?}");
            assert!(p.y >= -side && p.y <= side, "{p:?}");
        }
    }

    #[test]
    fn scaling_helpers_do_not_overflow() {
        assert_eq!(fraction(i32::MAX, 3, 4), 1_610_612_735);
        assert_eq!(fraction(12, 3, 10), 3);
        assert_eq!(sweep(10, 50, 10, 0.0), 0);
        assert_eq!(sweep(10, 50, 10, 0.5), 30);
        assert_eq!(sweep(i32::MAX, i32::MAX, i32::MAX / 5, 1.0), i32::MAX);
        assert_eq!(sweep(i32::MIN, 10, 10, 0.0), i32::MIN);
    }

    #[test]
    fn slider_thumb_follows_orientation() {
        let theme = WindowsTheme::theme();
        let vertical = ExtraParams::Slider(SliderExtraParams {
            vertical: true,
            in_drag: false,
        });
        let horizontal = theme
            .part_size(Part::SliderThumb, State::Normal, &ExtraParams::None)
            .expect("size");
        let upright = theme
            .part_size(Part::SliderThumb, State::Normal, &vertical)
            .expect("size");
        assert_eq!(upright, horizontal.transposed());
    }
}
