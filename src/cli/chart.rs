use std::io::IsTerminal;

use colored::Colorize;
use comfy_table::{Cell, Table};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::cli::ChartCommands;
use crate::error::Result;
use crate::fmt;
use crate::reports::{self, CategoryTotal, MonthTotal};
use crate::settings::store_config;
use crate::store::RecordStore;
use crate::tui::{
    format_k, run_chart_view, y_axis_lines, y_axis_ticks, ChartView, ChartViewAction,
    BAR_STYLE, FOOTER_STYLE, HEADER_STYLE,
};

pub fn dispatch(cmd: ChartCommands) -> Result<()> {
    match cmd {
        ChartCommands::Categories => categories(),
        ChartCommands::Months => months(),
    }
}

fn categories() -> Result<()> {
    let store = RecordStore::new(store_config());
    let mut totals = match reports::category_totals(&store) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("could not read category totals: {e}");
            Vec::new()
        }
    };
    if totals.is_empty() {
        println!("No data to visualize.");
        return Ok(());
    }
    totals.sort_by(|a, b| b.total.cmp(&a.total));

    if std::io::stdout().is_terminal() {
        let mut view = CategoryChartView::new(totals);
        run_chart_view(&mut view)
    } else {
        println!("{}", format_category_chart(&totals));
        Ok(())
    }
}

fn months() -> Result<()> {
    let store = RecordStore::new(store_config());
    let totals = match reports::month_totals(&store) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("could not read month totals: {e}");
            Vec::new()
        }
    };
    if totals.is_empty() {
        println!("No data to visualize.");
        return Ok(());
    }

    if std::io::stdout().is_terminal() {
        let mut view = MonthChartView::new(totals);
        run_chart_view(&mut view)
    } else {
        println!("{}", format_month_chart(&totals));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Text fallback (non-TTY stdout)
// ---------------------------------------------------------------------------

pub fn format_category_chart(totals: &[CategoryTotal]) -> String {
    let grand: Decimal = totals.iter().map(|t| t.total).sum();
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%"]);
    for t in totals {
        table.add_row(vec![
            Cell::new(&t.category),
            Cell::new(fmt::amount(t.total)),
            Cell::new(format!("{:.1}%", percent(t.total, grand))),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(fmt::amount(grand)),
        Cell::new(""),
    ]);
    format!("Spending by Category\n{table}")
}

pub fn format_month_chart(totals: &[MonthTotal]) -> String {
    let grand: Decimal = totals.iter().map(|t| t.total).sum();
    let mut table = Table::new();
    table.set_header(vec!["Month", "Amount"]);
    for t in totals {
        table.add_row(vec![Cell::new(&t.month), Cell::new(fmt::amount(t.total))]);
    }
    table.add_row(vec![Cell::new("Total".bold()), Cell::new(fmt::amount(grand))]);
    format!("Spending by Month\n{table}")
}

fn percent(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    ((part / whole) * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

/// Bar heights are whole currency units; anything below zero renders as an
/// empty bar since the chart has no space under the axis.
fn bar_value(total: Decimal) -> u64 {
    total.to_f64().unwrap_or(0.0).max(0.0).round() as u64
}

fn bar_label(s: &str) -> String {
    s.chars().take(7).collect()
}

// ---------------------------------------------------------------------------
// Bar chart rendering (shared by both views)
// ---------------------------------------------------------------------------

fn render_bars(frame: &mut Frame, area: Rect, series: &[(String, u64)]) {
    let max_val = series.iter().map(|(_, v)| *v).max().unwrap_or(1) as f64;
    let (top, mid) = y_axis_ticks(max_val);
    let top_label = format_k(top);
    let mid_label = format_k(mid);
    let gutter = top_label.len().max(mid_label.len()) as u16 + 1;

    let [y_axis_area, bar_area] =
        Layout::horizontal([Constraint::Length(gutter), Constraint::Fill(1)]).areas(area);

    // Bottom row of the chart belongs to the group labels.
    let inner_height = bar_area.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(y_axis_lines(inner_height, &top_label, &mid_label)),
        y_axis_area,
    );

    let groups: Vec<BarGroup> = series
        .iter()
        .map(|(label, value)| {
            let bars = vec![Bar::default().value(*value).style(BAR_STYLE)];
            BarGroup::default()
                .label(Line::from(label.as_str()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .bar_width(7)
        .bar_gap(0)
        .group_gap(2)
        .max(top as u64);
    for group in &groups {
        chart = chart.data(group.clone());
    }
    frame.render_widget(chart, bar_area);
}

fn draw_frame_chrome(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let [header_area, sep_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(format!(" {title}")).style(HEADER_STYLE), header_area);
    frame.render_widget(
        Paragraph::new("\u{2501}".repeat(area.width as usize)).style(FOOTER_STYLE),
        sep_area,
    );
    frame.render_widget(Paragraph::new(" q/Esc=close").style(FOOTER_STYLE), footer_area);

    body_area
}

fn close_on_q(code: KeyCode) -> ChartViewAction {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => ChartViewAction::Close,
        _ => ChartViewAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// Category chart view
// ---------------------------------------------------------------------------

const LEGEND_TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
const LEGEND_LIMIT: usize = 8;

struct CategoryChartView {
    totals: Vec<CategoryTotal>,
    grand: Decimal,
}

impl CategoryChartView {
    fn new(totals: Vec<CategoryTotal>) -> Self {
        let grand = totals.iter().map(|t| t.total).sum();
        Self { totals, grand }
    }
}

impl ChartView for CategoryChartView {
    fn draw(&mut self, frame: &mut Frame) {
        let body_area = draw_frame_chrome(frame, frame.area(), "Spending by Category");

        let legend_height = self.totals.len().min(LEGEND_LIMIT) as u16 + 1;
        let [chart_area, legend_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(legend_height)])
                .areas(body_area);

        let series: Vec<(String, u64)> = self
            .totals
            .iter()
            .map(|t| (bar_label(&t.category), bar_value(t.total)))
            .collect();
        render_bars(frame, chart_area, &series);

        let name_width = self
            .totals
            .iter()
            .take(LEGEND_LIMIT)
            .map(|t| t.category.len())
            .max()
            .unwrap_or(10);

        let mut lines = vec![Line::from(Span::styled(" Top Categories", LEGEND_TITLE_STYLE))];
        for t in self.totals.iter().take(LEGEND_LIMIT) {
            lines.push(Line::from(format!(
                " {:<name_width$}  {:>10}  {:>5.1}%",
                t.category,
                fmt::amount(t.total),
                percent(t.total, self.grand),
            )));
        }
        frame.render_widget(Paragraph::new(lines), legend_area);
    }

    fn handle_key(&mut self, code: KeyCode) -> ChartViewAction {
        close_on_q(code)
    }
}

// ---------------------------------------------------------------------------
// Month chart view
// ---------------------------------------------------------------------------

struct MonthChartView {
    totals: Vec<MonthTotal>,
}

impl MonthChartView {
    fn new(totals: Vec<MonthTotal>) -> Self {
        Self { totals }
    }
}

impl ChartView for MonthChartView {
    fn draw(&mut self, frame: &mut Frame) {
        let body_area = draw_frame_chrome(frame, frame.area(), "Spending by Month");

        let series: Vec<(String, u64)> = self
            .totals
            .iter()
            .map(|t| (t.month.clone(), bar_value(t.total)))
            .collect();
        render_bars(frame, body_area, &series);
    }

    fn handle_key(&mut self, code: KeyCode) -> ChartViewAction {
        close_on_q(code)
    }
}
