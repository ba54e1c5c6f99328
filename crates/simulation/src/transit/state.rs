//! `TransitWorld`: the single mutable state shared by input, spawner and drawing.

use bevy::prelude::*;
use indexmap::IndexMap;
use serde::Serialize;

use super::types::*;

/// Source of truth for the transit network.
///
/// All three maps are insertion-ordered. Edge-usage lane assignment and
/// hit-test precedence both depend on that order, so it must never be
/// replaced with a hashed or sorted map.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransitWorld {
    pub stations: IndexMap<StationId, Station>,
    pub lines: IndexMap<LineId, Line>,
    pub passengers: IndexMap<PassengerId, Passenger>,
    /// Incremented once per frame by `tick_transit_world`.
    pub tick: u64,
}

impl TransitWorld {
    // -------------------------------------------------------------------------
    // Stations
    // -------------------------------------------------------------------------

    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn station_pos(&self, id: &StationId) -> Option<Vec2> {
        self.stations.get(id).map(Station::pos)
    }

    /// Insert (or replace) a station, keeping its original iteration slot if it existed.
    pub fn insert_station(&mut self, station: Station) {
        self.stations.insert(station.id.clone(), station);
    }

    /// Id for the next spawned station (`S<count+1>`).
    pub fn next_station_id(&self) -> StationId {
        StationId(format!("S{}", self.stations.len() + 1))
    }

    // -------------------------------------------------------------------------
    // Lines
    // -------------------------------------------------------------------------

    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Id for the next created line (`L<count+1>`). Lines are never deleted,
    /// so this stays unique.
    pub fn next_line_id(&self) -> LineId {
        LineId(format!("L{}", self.lines.len() + 1))
    }

    // -------------------------------------------------------------------------
    // Passengers
    // -------------------------------------------------------------------------

    pub fn next_passenger_id(&self) -> PassengerId {
        PassengerId(format!("P{}", self.passengers.len() + 1))
    }

    /// Passengers still waiting at their origin station.
    pub fn waiting_passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.values().filter(|p| p.onboard.is_none())
    }
}
