//! Gantt charts over a span of calendar days.
//!
//! Dates are given in the compact `YYYYMMDD` form. Tasks may start before
//! the chart or outlast it, and marks may fall outside the visible span;
//! such elements are kept and simply land outside the visible window.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;

use easel_core::{
    shape::{Label, Line, Rect},
    style::Style,
};

use crate::{Diagram, EaselError, date::parse_date};

/// Width of one day column.
pub const DAY_WIDTH: i32 = 16;

/// Handle of a task added to a [`GanttChart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(usize);

/// A named bar on the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    text: String,
    class: &'static str,
    start: Option<NaiveDate>,
    days: u32,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: "span",
            start: None,
            days: 0,
        }
    }

    pub fn red(mut self) -> Self {
        self.class = "span-red";
        self
    }

    pub fn green(mut self) -> Self {
        self.class = "span-green";
        self
    }

    pub fn blue(mut self) -> Self {
        self.class = "span-blue";
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class(&self) -> &str {
        self.class
    }

    /// First day of the task, `None` until it is placed.
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Day after the last day of the task.
    ///
    /// Saturates at the last date the calendar can represent.
    pub fn end(&self) -> Option<NaiveDate> {
        self.start.map(|start| {
            start
                .checked_add_days(Days::new(u64::from(self.days)))
                .unwrap_or(NaiveDate::MAX)
        })
    }
}

/// A chart of tasks over `days` days starting at a given date.
#[derive(Debug)]
pub struct GanttChart {
    start: NaiveDate,
    days: u32,
    tasks: Vec<Task>,
    marks: Vec<NaiveDate>,
    caption: Option<String>,
    style: Style,
}

impl GanttChart {
    /// Creates a chart starting at `start` (`YYYYMMDD`) spanning `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::InvalidDate`] if `start` is malformed.
    pub fn new(start: &str, days: u32) -> Result<Self, EaselError> {
        Ok(Self {
            start: parse_date(start)?,
            days,
            tasks: Vec::new(),
            marks: Vec::new(),
            caption: None,
            style: Style::default(),
        })
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn add(&mut self, task: Task) -> TaskId {
        self.tasks.push(task);
        TaskId(self.tasks.len() - 1)
    }

    /// Returns the task behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this chart.
    pub fn task(&self, id: TaskId) -> &Task {
        &self.tasks[id.0]
    }

    pub fn place(&mut self, id: TaskId) -> GanttAdjuster<'_> {
        GanttAdjuster { chart: self, id }
    }

    /// Draws a vertical line through the given day.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::InvalidDate`] if `date` is malformed.
    pub fn mark_date(&mut self, date: &str) -> Result<(), EaselError> {
        let date = parse_date(date)?;
        debug!(date:%; "Marking date");
        self.marks.push(date);
        Ok(())
    }

    pub fn marks(&self) -> &[NaiveDate] {
        &self.marks
    }

    pub fn set_caption(&mut self, text: impl Into<String>) {
        self.caption = Some(text.into());
    }

    /// Lays the chart out as a diagram of labels, bars and lines.
    pub fn to_diagram(&self) -> Diagram {
        let mut diagram = Diagram::new(self.style.clone());
        let font = self.style.font().clone();
        let pad = self.style.text_pad();
        let line_height = font.line_height();

        let columns_x = self.columns_x();
        let day_x = |date: NaiveDate| columns_x.saturating_add(day_span(self.offset(date)));

        // Month header over the first column and every first of the month
        let days_y = line_height + pad.top();
        for i in 0..self.days {
            let Some(date) = self.start.checked_add_days(Days::new(u64::from(i))) else {
                break;
            };
            if i == 0 || date.day() == 1 {
                let text = date.format("%Y %B").to_string();
                diagram.place(Label::new(text)).at(day_x(date), 0);
            }
            diagram
                .place(Label::new(date.day().to_string()).with_class("day"))
                .at(day_x(date), days_y);
        }

        let row_height = line_height + pad.vertical_sum();
        let tasks_y = days_y + row_height;
        for (row, task) in self.tasks.iter().enumerate() {
            let y = tasks_y + row as i32 * row_height;
            diagram.place(Label::new(task.text.as_str())).at(0, y);
            if let Some(start) = task.start {
                let bar = Rect::new("")
                    .with_class(task.class)
                    .with_width(day_span(i64::from(task.days)))
                    .with_height(line_height);
                diagram.place(bar).at(day_x(start), y);
            }
        }

        let bottom = tasks_y + self.tasks.len() as i32 * row_height;
        for &mark in &self.marks {
            let x = day_x(mark).saturating_add(DAY_WIDTH / 2);
            let line = Line::new(x, days_y, x, bottom).with_class("mark");
            diagram.add(line);
        }

        if let Some(caption) = &self.caption {
            diagram.set_caption(caption.as_str());
        }

        debug!(
            tasks = self.tasks.len(),
            marks = self.marks.len(),
            shapes = diagram.len();
            "Gantt chart laid out"
        );
        diagram
    }

    /// Days from the chart start to `date`, negative before the start.
    fn offset(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    fn columns_x(&self) -> i32 {
        let label_width = self
            .tasks
            .iter()
            .map(|task| self.style.font().text_width(&task.text))
            .max()
            .unwrap_or(0);
        label_width + self.style.text_pad().horizontal_sum()
    }

    /// X coordinate of the left edge of a task's bar, `None` while the task
    /// is unplaced.
    pub fn bar_x(&self, id: TaskId) -> Option<i32> {
        let start = self.task(id).start?;
        Some(self.columns_x().saturating_add(day_span(self.offset(start))))
    }
}

/// Width of `days` day columns, saturating at the `i32` range.
fn day_span(days: i64) -> i32 {
    let days = i32::try_from(days).unwrap_or(if days < 0 { i32::MIN } else { i32::MAX });
    days.saturating_mul(DAY_WIDTH)
}

/// Positions a single task on its chart.
#[derive(Debug)]
pub struct GanttAdjuster<'c> {
    chart: &'c mut GanttChart,
    id: TaskId,
}

impl GanttAdjuster<'_> {
    /// Starts the task at `date` (`YYYYMMDD`) lasting `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::InvalidDate`] if `date` is malformed.
    pub fn at(self, date: &str, days: u32) -> Result<(), EaselError> {
        let start = parse_date(date)?;
        self.set(start, days);
        Ok(())
    }

    /// Starts the task the day `other` ends, lasting `days` days.
    ///
    /// An unplaced `other` counts as ending at the chart start.
    pub fn after(self, other: TaskId, days: u32) {
        let start = self.chart.task(other).end().unwrap_or(self.chart.start);
        self.set(start, days);
    }

    fn set(self, start: NaiveDate, days: u32) {
        let task = &mut self.chart.tasks[self.id.0];
        debug!(task = task.text.as_str(), start:%, days; "Placing task");
        task.start = Some(start);
        task.days = days;
    }
}
