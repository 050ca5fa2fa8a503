//! Dot plots of step durations drawn inside the info panel.

use lifeterm_core::history::HistoryWindow;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::palette::CHAR_GRAPH_DOT;

/// Column where the first plot's axis label starts.
pub const FIRST_PLOT_OFFSET: u16 = 40;
/// Narrowest space a plot needs past its offset.
pub const MIN_PLOT_SPACE: u16 = 15;
/// Width of a `%.6f` axis label.
pub const LABEL_WIDTH: u16 = 8;
/// Gap between the end of one plot and the next plot's label.
pub const PLOT_GAP: u16 = 10;

/// Row level (0 = bottom) of every sample when `data` is scaled into `rows`.
///
/// Scaling spans the data's own min..max. A flat series sits on the bottom row.
pub fn scale_to_rows(data: &[f64], rows: usize) -> Vec<usize> {
    if rows == 0 {
        return vec![0; data.len()];
    }
    let (min, max) = bounds(data);
    let range = max - min;
    data.iter()
        .map(|&d| {
            if range > 0.0 {
                let scaled = (d - min) / (range / rows as f64);
                (scaled.floor() as usize).min(rows - 1)
            } else {
                0
            }
        })
        .collect()
}

fn bounds(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold(None, |acc: Option<(f64, f64)>, &d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
        .unwrap_or((0.0, 0.0))
}

/// Recent window (chronological) beside the downsampled all-time log.
pub struct HistoryGraph {
    series: [Vec<f64>; 2],
}

impl HistoryGraph {
    /// `next_index` is the iteration the next sample will be recorded at.
    pub fn new(history: &HistoryWindow, next_index: usize) -> Self {
        Self {
            series: [
                history.recent_in_order(next_index),
                history.all_time_buckets(),
            ],
        }
    }

    fn render_plot(data: &[f64], offset: u16, area: Rect, buf: &mut Buffer) {
        let rows = area.height.saturating_sub(2) as usize;
        if rows == 0 {
            return;
        }
        let (min, max) = bounds(data);
        let step = (max - min) / rows as f64;
        let levels = scale_to_rows(data, rows);

        for i in 0..rows {
            let y = area.y + 1 + i as u16;
            let label = min + (rows as f64 - i as f64 - 0.5) * step;
            buf.set_stringn(
                area.x + offset,
                y,
                format!("{label:.6}"),
                (area.width - offset) as usize,
                Style::default(),
            );

            let level = rows - 1 - i;
            for (j, _) in levels.iter().enumerate().filter(|&(_, &l)| l == level) {
                let col = offset as usize + LABEL_WIDTH as usize + j;
                if col + 1 >= area.width as usize {
                    break;
                }
                buf.set_string(area.x + col as u16, y, CHAR_GRAPH_DOT, Style::default());
            }
        }
    }
}

impl Widget for HistoryGraph {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Offsets run in usize; a long window pushes them past u16.
        let mut offset = FIRST_PLOT_OFFSET as usize;
        for data in &self.series {
            if offset + MIN_PLOT_SPACE as usize >= area.width as usize {
                break;
            }
            let Ok(x) = u16::try_from(offset) else {
                break;
            };
            Self::render_plot(data, x, area, buf);
            offset = offset.saturating_add(data.len() + PLOT_GAP as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_history(window: usize, samples: usize) -> HistoryWindow {
        let mut h = HistoryWindow::new(window).unwrap();
        for i in 0..samples {
            h.record(0.001 * (1 + i % 5) as f64, i).unwrap();
        }
        h
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_scale_to_rows() {
        assert_eq!(scale_to_rows(&[0.0, 1.0, 2.0, 4.0], 4), vec![0, 1, 2, 3]);
        assert_eq!(scale_to_rows(&[3.0, 3.0], 8), vec![0, 0]);
        assert!(scale_to_rows(&[], 8).is_empty());
    }

    #[test]
    fn test_every_sample_gets_one_dot() {
        let history = filled_history(11, 11);
        let area = Rect::new(0, 0, 120, 10);
        let mut buf = Buffer::empty(area);
        HistoryGraph::new(&history, 11).render(area, &mut buf);

        let first_plot_dots: usize = (1..9)
            .map(|y| {
                (FIRST_PLOT_OFFSET + LABEL_WIDTH..FIRST_PLOT_OFFSET + LABEL_WIDTH + 11)
                    .filter(|&x| buf[(x, y)].symbol() == CHAR_GRAPH_DOT)
                    .count()
            })
            .sum();
        assert_eq!(first_plot_dots, 11);
    }

    #[test]
    fn test_axis_labels_drawn() {
        let history = filled_history(11, 11);
        let area = Rect::new(0, 0, 120, 10);
        let mut buf = Buffer::empty(area);
        HistoryGraph::new(&history, 11).render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("0.00"));
    }

    #[test]
    fn test_omitted_on_narrow_terminal() {
        let history = filled_history(11, 11);
        let area = Rect::new(0, 0, 55, 10);
        let mut buf = Buffer::empty(area);
        HistoryGraph::new(&history, 11).render(area, &mut buf);
        for y in 0..10 {
            assert!(row_text(&buf, y).trim().is_empty(), "row {y} not empty");
        }
    }

    #[test]
    fn test_huge_window_renders() {
        let mut history = HistoryWindow::new(65_530).unwrap();
        for i in 0..20 {
            history.record(0.001 * (1 + i % 3) as f64, i).unwrap();
        }
        let area = Rect::new(0, 0, 120, 10);
        let mut buf = Buffer::empty(area);
        HistoryGraph::new(&history, 20).render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("0.00"));
    }

    #[test]
    fn test_second_plot_needs_room() {
        let history = filled_history(11, 30);
        let second = FIRST_PLOT_OFFSET + 11 + PLOT_GAP;

        let area = Rect::new(0, 0, second + MIN_PLOT_SPACE, 10);
        let mut buf = Buffer::empty(area);
        HistoryGraph::new(&history, 30).render(area, &mut buf);
        let tail: String = row_text(&buf, 1).chars().skip(second as usize).collect();
        assert!(tail.trim().is_empty());

        let wide = Rect::new(0, 0, 120, 10);
        let mut buf = Buffer::empty(wide);
        HistoryGraph::new(&history, 30).render(wide, &mut buf);
        let tail: String = row_text(&buf, 1).chars().skip(second as usize).collect();
        assert!(tail.contains("0.0"));
    }
}
