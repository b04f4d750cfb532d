// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/resize_overlay.rs
//
// Resize handle overlay drawn on top of the preview image.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
        window,
    },
};

use crate::app::AppMessage;
use crate::domain::resize::{DisplayBox, ResizeHandle};

const HANDLE_SIZE: f32 = 12.0;
const HANDLE_HIT_SIZE: f32 = 24.0;
const HANDLE_COLOR: Color = Color::WHITE;
const HANDLE_OUTLINE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);
const BORDER_COLOR: Color = Color::from_rgba(0.25, 0.5, 1.0, 0.9);
const BORDER_WIDTH: f32 = 2.0;
const DRAG_TINT: Color = Color::from_rgba(0.25, 0.5, 1.0, 0.1);
const DASH_LENGTH: f32 = 8.0;

pub struct ResizeOverlay {
    display: DisplayBox,
    gutter: f32,
    active: Option<ResizeHandle>,
}

impl ResizeOverlay {
    pub fn new(display: DisplayBox, gutter: f32, active: Option<ResizeHandle>) -> Self {
        Self {
            display,
            gutter,
            active,
        }
    }

    /// Top-left corner of the displayed image in screen coordinates.
    fn origin(&self, bounds: &Rectangle) -> Point {
        Point::new(bounds.x + self.gutter, bounds.y + self.gutter)
    }

    fn hit_test(&self, bounds: &Rectangle, point: Point) -> Option<ResizeHandle> {
        let origin = self.origin(bounds);
        self.display
            .hit_test((point.x - origin.x, point.y - origin.y), HANDLE_HIT_SIZE)
    }

    /// Drag message for `event`, if it starts, moves or ends a gesture.
    fn drag_message(&self, event: &Event, bounds: Rectangle, cursor: Cursor) -> Option<AppMessage> {
        let dragging = self.active.is_some();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) if !dragging => {
                let pos = cursor.position()?;
                let handle = self.hit_test(&bounds, pos)?;
                Some(AppMessage::ResizeDragStart {
                    handle,
                    x: pos.x,
                    y: pos.y,
                })
            }
            // Tracked window-wide, so the pointer may leave the preview.
            Event::Mouse(mouse::Event::CursorMoved { position }) if dragging => {
                Some(AppMessage::ResizeDragMove {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left))
            | Event::Mouse(mouse::Event::CursorLeft)
            | Event::Window(window::Event::Unfocused)
                if dragging =>
            {
                Some(AppMessage::ResizeDragEnd)
            }
            _ => None,
        }
    }

    fn draw_border(&self, renderer: &mut Renderer, origin: Point) {
        let (w, h) = (self.display.width, self.display.height);

        if self.active.is_some() {
            draw_quad(
                renderer,
                Rectangle::new(origin, Size::new(w, h)),
                DRAG_TINT,
            );
            // Dashed outline while dragging.
            let mut x = 0.0;
            while x < w {
                let len = DASH_LENGTH.min(w - x);
                draw_quad(
                    renderer,
                    Rectangle::new(Point::new(origin.x + x, origin.y), Size::new(len, BORDER_WIDTH)),
                    BORDER_COLOR,
                );
                draw_quad(
                    renderer,
                    Rectangle::new(
                        Point::new(origin.x + x, origin.y + h - BORDER_WIDTH),
                        Size::new(len, BORDER_WIDTH),
                    ),
                    BORDER_COLOR,
                );
                x += DASH_LENGTH * 2.0;
            }
            let mut y = 0.0;
            while y < h {
                let len = DASH_LENGTH.min(h - y);
                draw_quad(
                    renderer,
                    Rectangle::new(Point::new(origin.x, origin.y + y), Size::new(BORDER_WIDTH, len)),
                    BORDER_COLOR,
                );
                draw_quad(
                    renderer,
                    Rectangle::new(
                        Point::new(origin.x + w - BORDER_WIDTH, origin.y + y),
                        Size::new(BORDER_WIDTH, len),
                    ),
                    BORDER_COLOR,
                );
                y += DASH_LENGTH * 2.0;
            }
            return;
        }

        // Top
        draw_quad(
            renderer,
            Rectangle::new(origin, Size::new(w, BORDER_WIDTH)),
            BORDER_COLOR,
        );
        // Bottom
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(origin.x, origin.y + h - BORDER_WIDTH),
                Size::new(w, BORDER_WIDTH),
            ),
            BORDER_COLOR,
        );
        // Left
        draw_quad(
            renderer,
            Rectangle::new(origin, Size::new(BORDER_WIDTH, h)),
            BORDER_COLOR,
        );
        // Right
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(origin.x + w - BORDER_WIDTH, origin.y),
                Size::new(BORDER_WIDTH, h),
            ),
            BORDER_COLOR,
        );
    }

    fn draw_handles(&self, renderer: &mut Renderer, origin: Point) {
        for handle in ResizeHandle::ALL {
            let (cx, cy) = self.display.handle_center(handle);
            let center = Point::new(origin.x + cx, origin.y + cy);
            let base = if handle.is_corner() {
                HANDLE_SIZE
            } else {
                HANDLE_SIZE - 2.0
            };
            let size = if self.active == Some(handle) {
                base + 4.0
            } else {
                base
            };
            let half_size = size / 2.0;

            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(center.x - half_size - 1.0, center.y - half_size - 1.0),
                    Size::new(size + 2.0, size + 2.0),
                ),
                HANDLE_OUTLINE,
            );
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(center.x - half_size, center.y - half_size),
                    Size::new(size, size),
                ),
                HANDLE_COLOR,
            );
        }
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for ResizeOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(
            Length::Fixed(self.display.width + self.gutter * 2.0),
            Length::Fixed(self.display.height + self.gutter * 2.0),
        )
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        let size = Size::new(
            self.display.width + self.gutter * 2.0,
            self.display.height + self.gutter * 2.0,
        );
        Node::new(limits.resolve(Length::Shrink, Length::Shrink, size))
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let origin = self.origin(&bounds);

        self.draw_border(renderer, origin);
        self.draw_handles(renderer, origin);
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        match self.drag_message(&event, layout.bounds(), cursor) {
            Some(message) => {
                shell.publish(message);
                if matches!(event, Event::Mouse(_)) {
                    Status::Captured
                } else {
                    Status::Ignored
                }
            }
            None => Status::Ignored,
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let handle = self
            .active
            .or_else(|| cursor.position().and_then(|pos| self.hit_test(&layout.bounds(), pos)));

        match handle {
            Some(ResizeHandle::NorthWest | ResizeHandle::SouthEast) => {
                mouse::Interaction::ResizingDiagonallyDown
            }
            Some(ResizeHandle::NorthEast | ResizeHandle::SouthWest) => {
                mouse::Interaction::ResizingDiagonallyUp
            }
            Some(ResizeHandle::North | ResizeHandle::South) => mouse::Interaction::ResizingVertically,
            Some(ResizeHandle::East | ResizeHandle::West) => mouse::Interaction::ResizingHorizontally,
            None => mouse::Interaction::default(),
        }
    }
}

impl<'a> From<ResizeOverlay> for Element<'a, AppMessage> {
    fn from(widget: ResizeOverlay) -> Self {
        Element::new(widget)
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn resize_overlay<'a>(
    display: DisplayBox,
    gutter: f32,
    active: Option<ResizeHandle>,
) -> Element<'a, AppMessage> {
    ResizeOverlay::new(display, gutter, active).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::HANDLE_GUTTER;

    // 400x200 preview at (100, 50); image origin is offset by the gutter.
    fn overlay(active: Option<ResizeHandle>) -> (ResizeOverlay, Rectangle) {
        let display = DisplayBox::fit(400, 200, 400.0);
        let bounds = Rectangle::new(
            Point::new(100.0, 50.0),
            Size::new(400.0 + HANDLE_GUTTER * 2.0, 200.0 + HANDLE_GUTTER * 2.0),
        );
        (ResizeOverlay::new(display, HANDLE_GUTTER, active), bounds)
    }

    fn at(x: f32, y: f32) -> Cursor {
        Cursor::Available(Point::new(x, y))
    }

    fn press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(Button::Left))
    }

    const SE_CORNER: (f32, f32) = (100.0 + HANDLE_GUTTER + 400.0, 50.0 + HANDLE_GUTTER + 200.0);

    #[test]
    fn press_on_handle_starts_drag() {
        let (widget, bounds) = overlay(None);
        let message = widget.drag_message(&press(), bounds, at(SE_CORNER.0, SE_CORNER.1));

        assert!(matches!(
            message,
            Some(AppMessage::ResizeDragStart {
                handle: ResizeHandle::SouthEast,
                x,
                y,
            }) if x == SE_CORNER.0 && y == SE_CORNER.1
        ));
    }

    #[test]
    fn press_away_from_handles_is_ignored() {
        let (widget, bounds) = overlay(None);
        assert!(widget.drag_message(&press(), bounds, at(316.0, 166.0)).is_none());
        assert!(widget.drag_message(&press(), bounds, Cursor::Unavailable).is_none());

        let right = Event::Mouse(mouse::Event::ButtonPressed(Button::Right));
        assert!(widget.drag_message(&right, bounds, at(SE_CORNER.0, SE_CORNER.1)).is_none());
    }

    #[test]
    fn press_while_dragging_is_ignored() {
        let (widget, bounds) = overlay(Some(ResizeHandle::East));
        assert!(widget.drag_message(&press(), bounds, at(SE_CORNER.0, SE_CORNER.1)).is_none());
    }

    #[test]
    fn cursor_moves_only_while_dragging() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(900.0, 20.0),
        });

        let (idle, bounds) = overlay(None);
        assert!(idle.drag_message(&moved, bounds, at(900.0, 20.0)).is_none());

        let (dragging, bounds) = overlay(Some(ResizeHandle::East));
        assert!(matches!(
            dragging.drag_message(&moved, bounds, at(900.0, 20.0)),
            Some(AppMessage::ResizeDragMove { x, y }) if x == 900.0 && y == 20.0
        ));
    }

    #[test]
    fn release_leave_and_unfocus_end_the_drag() {
        let endings = [
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)),
            Event::Mouse(mouse::Event::CursorLeft),
            Event::Window(window::Event::Unfocused),
        ];

        let (dragging, bounds) = overlay(Some(ResizeHandle::North));
        let (idle, _) = overlay(None);
        for event in &endings {
            assert!(matches!(
                dragging.drag_message(event, bounds, Cursor::Unavailable),
                Some(AppMessage::ResizeDragEnd)
            ));
            assert!(idle.drag_message(event, bounds, Cursor::Unavailable).is_none());
        }
    }
}
