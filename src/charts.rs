//! Chart geometry and the per-slot ownership of drawn charts.

use std::f64::consts::PI;

use crate::presenter::{CategorySeries, MonthlySeries, Presenter};

pub const LINE_STROKE: &str = "#3b82f6";
pub const LINE_FILL: &str = "rgba(59, 130, 246, 0.1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Category,
    Monthly,
}

impl ChartSlot {
    pub fn name(&self) -> &'static str {
        match self {
            ChartSlot::Category => "categoryChart",
            ChartSlot::Monthly => "monthlyChart",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SliceShape {
    Arc(String),
    Full,
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub color: String,
    pub shape: SliceShape,
    pub legend: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieChart {
    pub size: f64,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn build(series: &CategorySeries, presenter: &Presenter, size: f64) -> Self {
        let total: f64 = series.iter().map(|p| p.value).sum();
        let radius = size / 2.0 - 1.0;
        let center = size / 2.0;
        let mut angle = -PI / 2.0;

        let slices = series
            .iter()
            .map(|point| {
                let amount = presenter.format_currency(point.value);
                let shape = if total <= 0.0 || point.value <= 0.0 {
                    SliceShape::Empty
                } else if point.value >= total {
                    SliceShape::Full
                } else {
                    let sweep = point.value / total * 2.0 * PI;
                    let path = arc_path(center, radius, angle, angle + sweep);
                    angle += sweep;
                    SliceShape::Arc(path)
                };
                PieSlice {
                    color: point.color.clone(),
                    shape,
                    legend: format!("{} ({})", point.label, amount),
                    title: format!(
                        "{}: {} ({})",
                        point.label,
                        amount,
                        presenter.compute_percentage(point.value, total)
                    ),
                }
            })
            .collect();

        PieChart { size, slices }
    }
}

fn arc_path(center: f64, radius: f64, start: f64, end: f64) -> String {
    let (x1, y1) = (center + radius * start.cos(), center + radius * start.sin());
    let (x2, y2) = (center + radius * end.cos(), center + radius * end.sin());
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z",
        c = center,
        r = radius,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    /// Right edge of the tick label, just left of the plot area.
    pub label_x: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub points: Vec<LinePoint>,
    pub ticks: Vec<AxisTick>,
    pub line: String,
    pub area: String,
}

/// Left margin reserved for the value axis labels.
pub const PAD_LEFT: f64 = 80.0;
const TICK_LABEL_GAP: f64 = 6.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const TICK_COUNT: usize = 5;

impl LineChart {
    pub fn build(series: &MonthlySeries, presenter: &Presenter, width: f64, height: f64) -> Self {
        let plot_w = width - PAD_LEFT - PAD_RIGHT;
        let plot_h = height - PAD_TOP - PAD_BOTTOM;
        let bottom = PAD_TOP + plot_h;

        let (mut low, mut high) = series
            .iter()
            .map(|p| p.balance)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if !low.is_finite() || !high.is_finite() {
            low = 0.0;
            high = 0.0;
        }
        // A flat series still needs a non-empty range.
        if high - low < f64::EPSILON {
            let pad = (high.abs() * 0.1).max(1.0);
            low -= pad;
            high += pad;
        }
        let scale_y = |v: f64| PAD_TOP + (high - v) / (high - low) * plot_h;

        let step = if series.len() > 1 {
            plot_w / (series.len() - 1) as f64
        } else {
            0.0
        };
        let points: Vec<LinePoint> = series
            .iter()
            .enumerate()
            .map(|(i, p)| LinePoint {
                x: if series.len() > 1 {
                    PAD_LEFT + step * i as f64
                } else {
                    PAD_LEFT + plot_w / 2.0
                },
                y: scale_y(p.balance),
                label: p.month.clone(),
                title: format!("Balance: {}", presenter.format_currency(p.balance)),
            })
            .collect();

        let ticks = (0..TICK_COUNT)
            .map(|i| {
                let value = low + (high - low) * i as f64 / (TICK_COUNT - 1) as f64;
                AxisTick {
                    y: scale_y(value),
                    label_x: PAD_LEFT - TICK_LABEL_GAP,
                    label: presenter.format_currency(value),
                }
            })
            .collect();

        let line = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let area = match (points.first(), points.last()) {
            (Some(first), Some(last)) => format!(
                "M {:.2} {:.2} L {} L {:.2} {:.2} Z",
                first.x,
                bottom,
                line.replace(' ', " L "),
                last.x,
                bottom
            ),
            _ => String::new(),
        };

        LineChart {
            width,
            height,
            points,
            ticks,
            line,
            area,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartKind {
    Pie(PieChart),
    Line(LineChart),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartInstance {
    pub id: u64,
    pub kind: ChartKind,
}

impl ChartInstance {
    fn dispose(self, slot: ChartSlot) {
        log::debug!("Disposing chart {} in {}", self.id, slot.name());
    }
}

/// Owns the chart drawn in each slot; a slot never holds two charts.
#[derive(Debug, Default)]
pub struct ChartSlots {
    category: Option<ChartInstance>,
    monthly: Option<ChartInstance>,
    next_id: u64,
    disposed: u64,
}

impl ChartSlots {
    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<ChartInstance> {
        match slot {
            ChartSlot::Category => &mut self.category,
            ChartSlot::Monthly => &mut self.monthly,
        }
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartInstance> {
        match slot {
            ChartSlot::Category => self.category.as_ref(),
            ChartSlot::Monthly => self.monthly.as_ref(),
        }
    }

    /// Disposes whatever the slot held, then stores `kind` there.
    pub fn install(&mut self, slot: ChartSlot, kind: ChartKind) -> u64 {
        self.clear(slot);
        self.next_id += 1;
        let id = self.next_id;
        *self.slot_mut(slot) = Some(ChartInstance { id, kind });
        id
    }

    pub fn clear(&mut self, slot: ChartSlot) {
        if let Some(previous) = self.slot_mut(slot).take() {
            previous.dispose(slot);
            self.disposed += 1;
        }
    }

    pub fn disposed_count(&self) -> u64 {
        self.disposed
    }

    /// Redraws both slots from fresh series. Empty series leave the slot empty.
    pub fn redraw(&mut self, categories: &CategorySeries, monthly: &MonthlySeries, presenter: &Presenter) {
        if categories.is_empty() {
            self.clear(ChartSlot::Category);
        } else {
            self.install(
                ChartSlot::Category,
                ChartKind::Pie(PieChart::build(categories, presenter, 240.0)),
            );
        }

        if monthly.is_empty() {
            self.clear(ChartSlot::Monthly);
        } else {
            self.install(
                ChartSlot::Monthly,
                ChartKind::Line(LineChart::build(monthly, presenter, 560.0, 260.0)),
            );
        }
    }
}
