// SPDX-License-Identifier: MPL-2.0
//! Star icon drawn on a Canvas, filled fully, on its left half, or not at all.

use crate::ui::design_tokens::opacity;
use crate::ui::theme::Paint;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Number of outer points of the star.
const POINTS: usize = 5;

/// Inner radius relative to the outer one.
const INNER_RATIO: f32 = 0.45;

/// How much of the star is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Canvas program for one star.
pub struct StarIcon {
    cache: Cache,
    fill: StarFill,
    paint: Paint,
    size: f32,
    highlight: bool,
    alpha: f32,
}

impl StarIcon {
    #[must_use]
    pub fn new(fill: StarFill, paint: Paint, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            fill,
            paint,
            size,
            highlight: false,
            alpha: opacity::OPAQUE,
        }
    }

    /// Draws a translucent disc behind the star.
    #[must_use]
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self.cache.clear();
        self
    }

    /// Multiplies the star color's alpha, used for disabled ratings.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self.cache.clear();
        self
    }

    /// Creates a Canvas widget from this star.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Vertices of a five-pointed star, starting at the top point and going
/// clockwise, alternating outer and inner radius.
pub(crate) fn star_points(center: Point, outer: f32) -> [Point; POINTS * 2] {
    let inner = outer * INNER_RATIO;
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        // i < 10
        let angle = -PI / 2.0 + i as f32 * PI / POINTS as f32;
        let radius = if i % 2 == 0 { outer } else { inner };
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    })
}

/// Left half of the star.
///
/// The star only crosses its vertical axis at the top point and the bottom
/// inner vertex, so projecting right-hand vertices onto the axis yields the
/// exact half shape.
pub(crate) fn left_half(points: &[Point], axis_x: f32) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x.min(axis_x), p.y))
        .collect()
}

fn polygon(points: &[Point]) -> Path {
    Path::new(|builder| {
        if let Some((first, rest)) = points.split_first() {
            builder.move_to(*first);
            for point in rest {
                builder.line_to(*point);
            }
            builder.close();
        }
    })
}

impl<Message> canvas::Program<Message> for StarIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let color = Color {
            a: self.alpha,
            ..self.paint.resolve(theme)
        };

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0;

                if self.highlight {
                    frame.fill(
                        &Path::circle(center, radius),
                        Color {
                            a: opacity::OVERLAY_SUBTLE,
                            ..color
                        },
                    );
                }

                let outer = radius - 2.0;
                let points = star_points(center, outer);
                let outline = polygon(&points);

                match self.fill {
                    StarFill::Full => frame.fill(&outline, color),
                    StarFill::Half => {
                        frame.fill(&polygon(&left_half(&points, center.x)), color);
                    }
                    StarFill::Empty => {}
                }

                frame.stroke(
                    &outline,
                    Stroke::default()
                        .with_width(1.5)
                        .with_color(color)
                        .with_line_join(canvas::LineJoin::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn star_starts_at_top_and_bottom_vertex_is_on_axis() {
        let center = Point::new(10.0, 10.0);
        let points = star_points(center, 8.0);

        assert!((points[0].x - center.x).abs() < EPSILON);
        assert!((points[0].y - 2.0).abs() < EPSILON);
        // index 5 is the inner vertex straight below the center
        assert!((points[5].x - center.x).abs() < EPSILON);
        assert!(points[5].y > center.y);
    }

    #[test]
    fn left_half_never_crosses_axis() {
        let center = Point::new(12.0, 12.0);
        let half = left_half(&star_points(center, 10.0), center.x);
        assert_eq!(half.len(), POINTS * 2);
        assert!(half.iter().all(|p| p.x <= center.x + EPSILON));
        assert!(half.iter().any(|p| p.x < center.x - 1.0));
    }
}
