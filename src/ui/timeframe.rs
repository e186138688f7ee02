use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Time bucket unit understood by the historical endpoint. The unit is
/// part of the request path (`/data/v2/histo{segment}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Minute,
    Hour,
    Day,
}

impl Granularity {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    SixHours,
    OneDay,
}

impl TimeFrame {
    pub fn all() -> Vec<TimeFrame> {
        vec![
            TimeFrame::OneMinute,
            TimeFrame::FiveMinutes,
            TimeFrame::FifteenMinutes,
            TimeFrame::ThirtyMinutes,
            TimeFrame::OneHour,
            TimeFrame::SixHours,
            TimeFrame::OneDay,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::OneMinute => "1m",
            TimeFrame::FiveMinutes => "5m",
            TimeFrame::FifteenMinutes => "15m",
            TimeFrame::ThirtyMinutes => "30m",
            TimeFrame::OneHour => "1h",
            TimeFrame::SixHours => "6h",
            TimeFrame::OneDay => "1d",
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            TimeFrame::OneMinute
            | TimeFrame::FiveMinutes
            | TimeFrame::FifteenMinutes
            | TimeFrame::ThirtyMinutes => Granularity::Minute,
            TimeFrame::OneHour | TimeFrame::SixHours => Granularity::Hour,
            TimeFrame::OneDay => Granularity::Day,
        }
    }

    /// Candle count requested for this frame.
    pub fn limit(&self) -> u32 {
        match self {
            TimeFrame::OneMinute
            | TimeFrame::FiveMinutes
            | TimeFrame::FifteenMinutes
            | TimeFrame::ThirtyMinutes => 60,
            TimeFrame::OneHour | TimeFrame::SixHours => 24,
            TimeFrame::OneDay => 30,
        }
    }
}

pub struct TimeFrameSelector {
    pub timeframes: Vec<TimeFrame>,
    pub selected: usize,
}

impl TimeFrameSelector {
    pub fn new() -> Self {
        Self {
            timeframes: TimeFrame::all(),
            selected: 0,
        }
    }

    pub fn current(&self) -> TimeFrame {
        self.timeframes[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.timeframes.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            self.timeframes.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Time Frame")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text: Vec<Span> = self
            .timeframes
            .iter()
            .enumerate()
            .flat_map(|(idx, tf)| {
                let is_selected = idx == self.selected;
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::White)
                };
                vec![
                    Span::styled(tf.label(), style),
                    if idx < self.timeframes.len() - 1 {
                        Span::raw("  ")
                    } else {
                        Span::raw("")
                    },
                ]
            })
            .collect();

        let line = Line::from(text);
        let para = Paragraph::new(line).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }
}
