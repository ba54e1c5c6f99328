#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::sim_rng::SimRng;
    use crate::spawner::*;
    use crate::transit::*;

    #[test]
    fn test_spawned_station_within_canvas() {
        let mut world = TransitWorld::default();
        let mut rng = SimRng::from_seed_u64(7);
        for _ in 0..200 {
            spawn_station(&mut world, &mut rng.0);
        }
        assert_eq!(world.stations.len(), 200);
        for station in world.stations.values() {
            assert!(station.x >= CANVAS_MIN_X as f32 && station.x <= CANVAS_MAX_X as f32);
            assert!(station.y >= CANVAS_MIN_Y as f32 && station.y <= CANVAS_MAX_Y as f32);
            assert!(!station.connected);
            assert_eq!(station.waiting, 0);
            assert_eq!(station.capacity, DEFAULT_STATION_CAPACITY);
        }
    }

    #[test]
    fn test_spawned_stations_mostly_residential() {
        let mut world = TransitWorld::default();
        let mut rng = SimRng::from_seed_u64(3);
        for _ in 0..300 {
            spawn_station(&mut world, &mut rng.0);
        }
        let residential = world
            .stations
            .values()
            .filter(|s| s.kind == StationKind::Residential)
            .count();
        assert!(residential > 150, "residential = {residential}");
    }

    #[test]
    fn test_station_ids_are_sequential() {
        let mut world = TransitWorld::default();
        let mut rng = SimRng::default();
        assert_eq!(spawn_station(&mut world, &mut rng.0).as_str(), "S1");
        assert_eq!(spawn_station(&mut world, &mut rng.0).as_str(), "S2");
    }

    #[test]
    fn test_passenger_needs_two_stations() {
        let mut world = TransitWorld::default();
        let mut rng = SimRng::default();
        assert_eq!(spawn_passenger(&mut world, &mut rng.0), None);

        spawn_station(&mut world, &mut rng.0);
        let before = world.clone();
        assert_eq!(spawn_passenger(&mut world, &mut rng.0), None);
        assert_eq!(world, before);
    }

    #[test]
    fn test_passenger_has_distinct_endpoints_and_waits() {
        let mut world = TransitWorld::default();
        let mut rng = SimRng::from_seed_u64(11);
        for _ in 0..3 {
            spawn_station(&mut world, &mut rng.0);
        }
        for _ in 0..50 {
            spawn_passenger(&mut world, &mut rng.0).unwrap();
        }

        assert_eq!(world.passengers.len(), 50);
        for p in world.passengers.values() {
            assert_ne!(p.origin, p.dest);
            assert!(p.onboard.is_none());
        }
        let waiting: u32 = world.stations.values().map(|s| s.waiting).sum();
        assert_eq!(waiting, 50);
        assert_eq!(world.waiting_passengers().count(), 50);
    }

    #[test]
    fn test_advance_tick_spawn_schedule() {
        let mut world = TransitWorld::default();
        let mut rng = SimRng::default();
        spawn_station(&mut world, &mut rng.0);
        spawn_station(&mut world, &mut rng.0);

        for _ in 0..(PASSENGER_SPAWN_INTERVAL - 1) {
            assert_eq!(advance_tick(&mut world, &mut rng.0), TickSpawns::default());
        }
        let spawns = advance_tick(&mut world, &mut rng.0);
        assert_eq!(spawns.passenger, Some(PassengerId::from("P1")));
        assert_eq!(spawns.station, None);

        while world.tick < STATION_SPAWN_INTERVAL {
            advance_tick(&mut world, &mut rng.0);
        }
        assert_eq!(world.tick, STATION_SPAWN_INTERVAL);
        assert_eq!(world.stations.len(), 3);
        assert_eq!(
            world.passengers.len() as u64,
            STATION_SPAWN_INTERVAL / PASSENGER_SPAWN_INTERVAL
        );
    }

    #[test]
    fn test_same_seed_same_world() {
        let run = |seed| {
            let mut world = TransitWorld::default();
            let mut rng = SimRng::from_seed_u64(seed);
            for _ in 0..1000 {
                advance_tick(&mut world, &mut rng.0);
            }
            world
        };
        assert_eq!(run(5), run(5));
    }
}
