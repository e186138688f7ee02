use crate::data::Candle;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

const PRICE_AXIS_WIDTH: u16 = 13;

fn render_empty_notice(frame: &mut Frame, area: Rect, block: Block) {
    let notice = Paragraph::new(Line::from(Span::styled(
        "No historical data.",
        Style::default().fg(Color::Gray),
    )))
    .block(block);
    frame.render_widget(notice, area);
}

/// Closing price over time.
pub fn render_line_chart(frame: &mut Frame, area: Rect, candles: &[Candle]) {
    let block = Block::default()
        .title("Close Price")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if candles.is_empty() {
        render_empty_notice(frame, area, block);
        return;
    }

    let points: Vec<(f64, f64)> = candles
        .iter()
        .map(|c| (c.time.timestamp() as f64, c.close))
        .collect();

    let (min_close, max_close) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), (_t, close)| {
            (min.min(*close), max.max(*close))
        });
    let spread = (max_close - min_close).max(0.0001);
    let y_bounds = [min_close - spread * 0.05, max_close + spread * 0.05];

    let x_start = points.first().map(|(t, _)| *t).unwrap_or(0.0);
    let mut x_end = points.last().map(|(t, _)| *t).unwrap_or(0.0);
    if x_end <= x_start {
        x_end = x_start + 1.0;
    }

    let time_label = |c: &Candle| c.time.format("%m-%d %H:%M").to_string();
    let x_labels = vec![
        Span::styled(
            time_label(&candles[0]),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            time_label(&candles[candles.len() - 1]),
            Style::default().fg(Color::Gray),
        ),
    ];
    let y_labels = vec![
        Span::styled(format!("{:.2}", y_bounds[0]), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}", (y_bounds[0] + y_bounds[1]) / 2.0),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("{:.2}", y_bounds[1]), Style::default().fg(Color::Gray)),
    ];

    let dataset = Dataset::default()
        .name("close")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([x_start, x_end])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Candlestick chart with a price axis gutter and a volume lane, drawn
/// cell-by-cell into the frame buffer.
pub fn render_candles(frame: &mut Frame, area: Rect, candles: &[Candle]) {
    let block = Block::default()
        .title("Candlestick")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    if candles.is_empty() {
        render_empty_notice(frame, area, block);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < PRICE_AXIS_WIDTH + 4 || inner.height < 8 {
        return;
    }

    let lanes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(inner);

    let chart_width = lanes[0].width.saturating_sub(PRICE_AXIS_WIDTH);
    let visible_start = candles.len().saturating_sub(chart_width as usize);
    let visible = &candles[visible_start..];

    draw_candlesticks(frame, lanes[0], visible);
    draw_volume(frame, lanes[1], visible);
}

fn draw_candlesticks(frame: &mut Frame, area: Rect, candles: &[Candle]) {
    let (min_price, max_price) = candles
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), c| {
            (min.min(c.low), max.max(c.high))
        });
    let price_range = (max_price - min_price).max(0.0001);

    let chart_width = area.width.saturating_sub(PRICE_AXIS_WIDTH);
    let chart_height = area.height;
    let candle_width = (chart_width as usize / candles.len().max(1)).max(1);

    let inner = Rect {
        x: area.x + PRICE_AXIS_WIDTH,
        y: area.y,
        width: chart_width,
        height: chart_height,
    };

    let y_for = |price: f64| -> u16 {
        inner.y + ((max_price - price) / price_range * (chart_height.saturating_sub(1)) as f64) as u16
    };

    for (idx, candle) in candles.iter().enumerate() {
        let x = inner.x + (idx * candle_width) as u16 + candle_width as u16 / 2;
        if x >= inner.x + inner.width {
            break;
        }

        let high_y = y_for(candle.high);
        let low_y = y_for(candle.low);
        let open_y = y_for(candle.open);
        let close_y = y_for(candle.close);

        let color = if candle.close >= candle.open {
            Color::Green
        } else {
            Color::Red
        };

        if high_y < low_y {
            for y in high_y..=low_y {
                if y >= inner.y && y < inner.y + inner.height {
                    let cell = &mut frame.buffer_mut()[(x, y)];
                    cell.set_char('│').set_fg(color);
                }
            }
        }

        let body_top = open_y.min(close_y);
        let body_bottom = open_y.max(close_y);
        for y in body_top..=body_bottom {
            if y >= inner.y && y < inner.y + inner.height {
                let cell = &mut frame.buffer_mut()[(x, y)];
                cell.set_char('█').set_fg(color);
            }
        }
    }

    let label_count = 4.min(chart_height as usize / 2).max(1);
    for i in 0..=label_count {
        let y = area.y + (i as u16) * chart_height.saturating_sub(1) / label_count as u16;
        let price = max_price - (i as f64 / label_count as f64) * price_range;
        let label = format!("{:>11.2}", price);

        for (j, ch) in label.chars().enumerate() {
            let x_pos = area.x + j as u16;
            if x_pos < area.x + PRICE_AXIS_WIDTH && y < area.y + area.height {
                let cell = &mut frame.buffer_mut()[(x_pos, y)];
                cell.set_char(ch).set_fg(Color::Gray);
            }
        }
    }
}

fn draw_volume(frame: &mut Frame, area: Rect, candles: &[Candle]) {
    if area.height == 0 {
        return;
    }

    let max_volume = candles.iter().fold(0.0f64, |max, c| max.max(c.volumefrom));
    if max_volume == 0.0 {
        return;
    }

    let chart_width = area.width.saturating_sub(PRICE_AXIS_WIDTH);
    let candle_width = (chart_width as usize / candles.len().max(1)).max(1);

    let inner = Rect {
        x: area.x + PRICE_AXIS_WIDTH,
        y: area.y,
        width: chart_width,
        height: area.height,
    };

    for (idx, candle) in candles.iter().enumerate() {
        let x = inner.x + (idx * candle_width) as u16 + candle_width as u16 / 2;
        if x >= inner.x + inner.width {
            break;
        }

        let height = ((candle.volumefrom / max_volume) * inner.height as f64) as u16;
        if height > 0 {
            let start_y = inner.y + inner.height - height;
            for y in start_y..inner.y + inner.height {
                let cell = &mut frame.buffer_mut()[(x, y)];
                cell.set_char('▊').set_fg(Color::Yellow);
            }
        }
    }

    let label = format!("Vol: {:.2}", max_volume);
    let para = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(Color::Gray),
    )));
    frame.render_widget(
        para,
        Rect {
            x: area.x,
            y: area.y,
            width: PRICE_AXIS_WIDTH.saturating_sub(1),
            height: 1,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::{render_candles, render_line_chart};
    use crate::data::Candle;
    use chrono::DateTime;
    use ratatui::{backend::TestBackend, Terminal};

    fn candle(epoch: i64, open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            time: DateTime::from_timestamp(epoch, 0).unwrap(),
            open,
            high,
            low,
            close,
            volumefrom: 10.0,
            volumeto: 15.0,
        }
    }

    #[test]
    fn empty_candles_render_a_notice_without_panicking() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                render_line_chart(frame, frame.area(), &[]);
            })
            .unwrap();
        terminal
            .draw(|frame| {
                render_candles(frame, frame.area(), &[]);
            })
            .unwrap();
    }

    #[test]
    fn candlestick_render_handles_flat_and_tiny_series() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let flat = vec![candle(1700000000, 1.0, 1.0, 1.0, 1.0)];

        terminal
            .draw(|frame| {
                render_candles(frame, frame.area(), &flat);
                render_line_chart(frame, frame.area(), &flat);
            })
            .unwrap();
    }

    #[test]
    fn candlestick_render_survives_small_areas() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let candles = vec![
            candle(1700000000, 1.0, 2.0, 0.5, 1.5),
            candle(1700003600, 1.5, 2.5, 1.0, 2.0),
        ];

        terminal
            .draw(|frame| {
                render_candles(frame, frame.area(), &candles);
            })
            .unwrap();
    }
}
