use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::Frame;

use crate::error::Result;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const BAR_STYLE: Style = Style::new().fg(Color::Cyan);

// ---------------------------------------------------------------------------
// Chart view infrastructure
// ---------------------------------------------------------------------------

pub enum ChartViewAction {
    Continue,
    Close,
}

pub trait ChartView {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> ChartViewAction;
}

/// Run an interactive ratatui chart view. Sets up the terminal, event loop,
/// and panic hook, then restores the terminal on exit.
pub fn run_chart_view(view: &mut dyn ChartView) -> Result<()> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| view.draw(frame)) {
            break Err(e.into());
        }

        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                match view.handle_key(key.code) {
                    ChartViewAction::Close => break Ok(()),
                    ChartViewAction::Continue => {}
                }
            }
            _ => {}
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Pick round y-axis tick values (top and mid) given a max data value.
pub fn y_axis_ticks(max_val: f64) -> (f64, f64) {
    let steps = [
        10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 25000.0,
        50000.0, 100000.0, 250000.0, 500000.0, 1000000.0,
    ];
    let top = steps
        .iter()
        .copied()
        .find(|s| *s >= max_val)
        .unwrap_or(max_val);
    let mid = top / 2.0;
    (top, mid)
}

/// Format an amount as compact "Xk" / "X.Xk" for thousands, "XM" for millions.
pub fn format_k(val: f64) -> String {
    if val >= 1_000_000.0 {
        let m = val / 1_000_000.0;
        if m == m.floor() {
            format!("{}M", m as u64)
        } else {
            format!("{m:.1}M")
        }
    } else if val >= 1000.0 {
        let k = val / 1000.0;
        if k == k.floor() {
            format!("{}k", k as u64)
        } else {
            format!("{k:.1}k")
        }
    } else {
        format!("{}", val as u64)
    }
}

/// Lines for a right-aligned y-axis gutter: the top tick on the first line,
/// the mid tick halfway down, blanks elsewhere.
pub fn y_axis_lines(height: u16, top_label: &str, mid_label: &str) -> Vec<Line<'static>> {
    let width = top_label.len().max(mid_label.len());
    let mut lines = Vec::with_capacity(height as usize);
    for row in 0..height {
        if row == 0 {
            lines.push(Line::styled(format!("{top_label:>width$}"), FOOTER_STYLE));
        } else if row == height / 2 {
            lines.push(Line::styled(format!("{mid_label:>width$}"), FOOTER_STYLE));
        } else {
            lines.push(Line::from(""));
        }
    }
    lines
}
