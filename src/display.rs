// src/display.rs
//! Text rendering of plans, move events and stats.

use crate::geometry::DiskGeometry;
use crate::plan::SeekPlan;
use crate::replay::MoveEvent;
use crate::stats::Stats;

const HEADERS: [&str; 5] = ["Move #", "Cylinder", "Seek Dist", "Move Latency (ms)", "Cumulative Seek"];

pub fn request_line(cylinders: &[u32]) -> String {
    format!("Disk Requests: {}", join(cylinders, ", "))
}

pub fn seek_sequence(plan: &SeekPlan) -> String {
    format!("Seek Sequence: {}", join(plan.visit_order(), " → "))
}

pub fn stats_block(stats: &Stats) -> String {
    format!(
        "Total Seek Distance: {}\nAverage Seek: {:.2}",
        stats.total_seek, stats.average_seek
    )
}

/// One line per algorithm when comparing disciplines side by side.
pub fn summary_line(plan: &SeekPlan, stats: &Stats) -> String {
    format!(
        "{:<7} total {:>5}  avg {:>7.2}  {}",
        plan.algorithm().name(),
        stats.total_seek,
        stats.average_seek,
        join(plan.visit_order(), " → ")
    )
}

pub fn table_header() -> String {
    let cells: Vec<String> = HEADERS.iter().map(|h| format!("{:>w$}", h, w = h.len().max(9))).collect();
    cells.join(" | ")
}

pub fn table_row(event: &MoveEvent) -> String {
    let values = [
        event.index.to_string(),
        event.target.to_string(),
        event.step_distance.to_string(),
        format!("{:.2}", event.step_latency_ms),
        event.cumulative_seek.to_string(),
    ];
    let cells: Vec<String> = HEADERS
        .iter()
        .zip(values)
        .map(|(h, v)| format!("{:>w$}", v, w = h.len().max(9)))
        .collect();
    cells.join(" | ")
}

pub fn move_table<I>(events: I) -> String
where
    I: IntoIterator<Item = MoveEvent>,
{
    let mut output = vec![table_header()];
    output.extend(events.into_iter().map(|e| table_row(&e)));
    output.join("\n")
}

/// Fixed-width ruler showing where the head is on the disk.
#[derive(Debug, Clone, Copy)]
pub struct HeadTrack {
    last_cylinder: u32,
    width: usize,
}

impl HeadTrack {
    pub fn new(geometry: DiskGeometry, width: usize) -> Self {
        HeadTrack { last_cylinder: geometry.last_cylinder(), width: width.max(2) }
    }

    fn column(&self, cylinder: u32) -> usize {
        let cylinder = u64::from(cylinder.min(self.last_cylinder));
        (cylinder * (self.width as u64 - 1) / u64::from(self.last_cylinder)) as usize
    }

    /// The head at rest before any movement.
    pub fn head_marker(&self, head: u32) -> String {
        let mut cells = vec!['-'; self.width];
        cells[self.column(head)] = 'H';
        format!("|{}| H:{}", cells.into_iter().collect::<String>(), head)
    }

    /// Travelled segment of one step, arrival marked with `*`.
    pub fn step_line(&self, event: &MoveEvent) -> String {
        let mut cells = vec!['-'; self.width];
        let (from, to) = (self.column(event.origin), self.column(event.target));
        for cell in &mut cells[from.min(to)..=from.max(to)] {
            *cell = '=';
        }
        cells[to] = '*';
        format!(
            "|{}| {:>2}: {} -> {} ({})",
            cells.into_iter().collect::<String>(),
            event.index,
            event.origin,
            event.target,
            event.step_distance
        )
    }
}

fn join(cylinders: &[u32], sep: &str) -> String {
    cylinders.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(sep)
}
