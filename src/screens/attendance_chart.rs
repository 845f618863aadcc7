use std::cell::Cell;
use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::canvas::{self, path::Arc, Cache, Frame, Path};
use iced::widget::{canvas as canvas_widget, column, container, row, text, Space};
use iced::{mouse, Alignment, Color, Element, Length, Radians, Rectangle, Renderer, Theme};

use crate::app::Message;
use crate::charts::AttendanceBreakdown;
use crate::model::{AttendanceRecord, AttendanceStatus};
use super::{empty_chart, CHART_HEIGHT};

const PIE_SIZE: f32 = 180.0;

pub fn status_color(status: AttendanceStatus) -> Color {
    match status {
        AttendanceStatus::Present => Color::from_rgb(0.063, 0.725, 0.506),
        AttendanceStatus::Absent => Color::from_rgb(0.937, 0.267, 0.267),
    }
}

pub fn attendance_chart<'a>(records: &[AttendanceRecord]) -> Element<'a, Message> {
    let breakdown = AttendanceBreakdown::from_records(records);
    if breakdown.is_empty() {
        return empty_chart("No attendance data yet.");
    }

    let pie = canvas_widget(AttendancePie { breakdown })
        .width(Length::Fixed(PIE_SIZE))
        .height(Length::Fixed(PIE_SIZE));

    let legend = AttendanceStatus::ALL
        .into_iter()
        .fold(column![].spacing(10), |legend, status| {
            let swatch = container(Space::new(Length::Fixed(14.0), Length::Fixed(14.0)))
                .style(move |_| container::background(status_color(status)));
            legend.push(
                row![
                    swatch,
                    text(format!("{} ({})", breakdown.label(status), breakdown.count(status))),
                ]
                    .spacing(8)
                    .align_y(Alignment::Center),
            )
        });

    container(row![pie, legend].spacing(24).align_y(Alignment::Center))
        .center_x(Length::Fill)
        .height(Length::Fixed(CHART_HEIGHT))
        .align_y(Alignment::Center)
        .into()
}

/// Present/absent pie, drawn clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy)]
struct AttendancePie {
    breakdown: AttendanceBreakdown,
}

/// Cached pie geometry, kept in the widget tree across frames.
#[derive(Default)]
struct PieState {
    cache: Cache,
    drawn: Cell<Option<AttendanceBreakdown>>,
}

impl PieState {
    /// Drops the cached geometry if it was drawn for different counts.
    /// Returns `true` when a redraw is needed.
    fn invalidate_if_changed(&self, breakdown: AttendanceBreakdown) -> bool {
        if self.drawn.get() == Some(breakdown) {
            return false;
        }
        self.cache.clear();
        self.drawn.set(Some(breakdown));
        true
    }
}

impl AttendancePie {
    fn draw_slices(&self, frame: &mut Frame) {
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

        let mut start = -FRAC_PI_2;
        for status in AttendanceStatus::ALL {
            let fraction = self.breakdown.fraction(status);
            if fraction <= 0.0 {
                continue;
            }
            let color = status_color(status);
            if fraction >= 1.0 {
                frame.fill(&Path::circle(center, radius), color);
                break;
            }

            let end = start + fraction * TAU;
            let slice = Path::new(|builder| {
                builder.move_to(center);
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(end),
                });
                builder.close();
            });
            frame.fill(&slice, color);
            start = end;
        }
    }
}

impl<M> canvas::Program<M> for AttendancePie {
    type State = PieState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        state.invalidate_if_changed(self.breakdown);
        vec![state.cache.draw(renderer, bounds.size(), |frame| self.draw_slices(frame))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_cache_redraws_only_when_counts_change() {
        let state = PieState::default();
        let two_to_one = AttendanceBreakdown { present: 2, absent: 1 };

        assert!(state.invalidate_if_changed(two_to_one));
        assert!(!state.invalidate_if_changed(two_to_one));
        assert!(state.invalidate_if_changed(AttendanceBreakdown { present: 2, absent: 2 }));
    }

    #[test]
    fn test_status_colors_differ() {
        assert_ne!(status_color(AttendanceStatus::Present), status_color(AttendanceStatus::Absent));
    }
}
