//! Debug domain: probe telemetry recorded from the kinematic controller.

use bevy::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;

use crate::movement::kinematics::{
    GroundReport, JumpReport, LogObserver, ProbeObserver, RayCast, WallContact, WallReport,
};

/// Default number of records kept before the oldest are dropped.
pub const DEFAULT_CAPACITY: usize = 512;

/// One cast ray, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RayRecord {
    pub origin: (f32, f32),
    pub direction: (f32, f32),
    pub length: f32,
    /// Hit point and fraction, if the ray hit.
    pub hit: Option<((f32, f32), f32)>,
}

impl From<&RayCast> for RayRecord {
    fn from(cast: &RayCast) -> Self {
        Self {
            origin: cast.origin.into(),
            direction: cast.direction.as_vec2().into(),
            length: cast.length,
            hit: cast.hit.map(|hit| (hit.point.into(), hit.fraction)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeRecord {
    Ground {
        seq: u64,
        rays: Vec<RayRecord>,
        selected: Option<usize>,
        snap: f32,
    },
    Wall {
        seq: u64,
        rays: Vec<RayRecord>,
        confirmed: Option<usize>,
        contact: WallContact,
        pair_angles: Vec<f32>,
        push: f32,
    },
    Jump {
        seq: u64,
        at: f32,
        velocity: f32,
        buffered_for: f32,
    },
}

/// Counters that survive ring-buffer eviction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProbeTotals {
    pub ground_probes: u64,
    pub ground_hits: u64,
    pub wall_probes: u64,
    pub wall_stops: u64,
    pub jumps: u64,
}

/// Ring buffer of recent probe results. Also forwards everything to the
/// log, so installing it loses nothing compared to the default observer.
#[derive(Resource, Debug)]
pub struct ProbeLog {
    pub recording: bool,
    capacity: usize,
    next_seq: u64,
    records: VecDeque<ProbeRecord>,
    totals: ProbeTotals,
    log: LogObserver,
}

impl Default for ProbeLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[derive(Serialize)]
struct ProbeExport<'a> {
    totals: &'a ProbeTotals,
    records: &'a VecDeque<ProbeRecord>,
}

impl ProbeLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recording: true,
            capacity: capacity.max(1),
            next_seq: 0,
            records: VecDeque::new(),
            totals: ProbeTotals::default(),
            log: LogObserver,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &ProbeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn totals(&self) -> ProbeTotals {
        self.totals
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.totals = ProbeTotals::default();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ProbeExport {
            totals: &self.totals,
            records: &self.records,
        })
    }

    fn seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push(&mut self, record: ProbeRecord) {
        if !self.recording {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }
}

impl ProbeObserver for ProbeLog {
    fn ground_probe(&mut self, report: &GroundReport) {
        self.log.ground_probe(report);
        self.totals.ground_probes += 1;
        if report.selected.is_some() {
            self.totals.ground_hits += 1;
        }

        let seq = self.seq();
        self.push(ProbeRecord::Ground {
            seq,
            rays: report.casts.iter().map(RayRecord::from).collect(),
            selected: report.selected.map(|r| r.ray),
            snap: report.snap,
        });
    }

    fn wall_probe(&mut self, report: &WallReport) {
        self.log.wall_probe(report);
        self.totals.wall_probes += 1;
        if report.confirmed.is_some() {
            self.totals.wall_stops += 1;
        }

        let seq = self.seq();
        self.push(ProbeRecord::Wall {
            seq,
            rays: report.casts.iter().map(RayRecord::from).collect(),
            confirmed: report.confirmed.map(|r| r.ray),
            contact: report.contact,
            pair_angles: report.pair_angles.clone(),
            push: report.push,
        });
    }

    fn jumped(&mut self, report: &JumpReport) {
        self.log.jumped(report);
        self.totals.jumps += 1;

        let seq = self.seq();
        self.push(ProbeRecord::Jump {
            seq,
            at: report.at,
            velocity: report.velocity,
            buffered_for: report.buffered_for,
        });
    }
}
