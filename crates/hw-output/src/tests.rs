//! Integration tests for hw-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use hw_core::Lane;
    use hw_road::SpeedClass;

    use crate::csv::{CsvWriter, SUMMARY_FILE, TRANSIT_FILE};
    use crate::row::{StepSummaryRow, TransitRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn transit_row(vehicle_id: u64, exit_step: u64) -> TransitRow {
        TransitRow {
            vehicle_id,
            class:         SpeedClass::Slow,
            lane:          Lane::Right,
            arrival_step:  exit_step - 20,
            exit_step,
            transit_steps: 20,
        }
    }

    fn summary_row(step: u64) -> StepSummaryRow {
        StepSummaryRow {
            step,
            vehicles:     12,
            spawned:      1,
            exited:       2,
            lane_changes: 3,
            displaced:    0,
            skipped:      4,
        }
    }

    fn read_rows(path: std::path::PathBuf) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TRANSIT_FILE).exists());
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_rows(dir.path().join(TRANSIT_FILE));
        assert_eq!(
            headers,
            ["vehicle_id", "class", "lane", "arrival_step", "exit_step", "transit_steps"]
        );
        assert!(rows.is_empty());

        let (headers, _) = read_rows(dir.path().join(SUMMARY_FILE));
        assert_eq!(
            headers,
            ["step", "vehicles", "spawned", "exited", "lane_changes", "displaced", "skipped"]
        );
    }

    #[test]
    fn csv_transit_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_transits(&[transit_row(4, 30), transit_row(9, 31)]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_rows(dir.path().join(TRANSIT_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "slow");
        assert_eq!(&rows[0][2], "right");
        assert_eq!(&rows[0][3], "10");
        assert_eq!(&rows[0][4], "30");
        assert_eq!(&rows[0][5], "20");
        assert_eq!(&rows[1][0], "9");
    }

    #[test]
    fn csv_step_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(7)).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_rows(dir.path().join(SUMMARY_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["7", "12", "1", "2", "3", "0", "4"]);
    }

    #[test]
    fn summary_row_carries_skipped_arrivals() {
        use hw_core::Step;
        use hw_sim::StepSummary;

        let summary = StepSummary {
            step: Step(9),
            vehicles: 5,
            spawned: 1,
            skipped: 1,
            ..StepSummary::default()
        };
        let row = StepSummaryRow::from(&summary);
        assert_eq!(row.step, 9);
        assert_eq!(row.vehicles, 5);
        assert_eq!(row.skipped, 1);
        assert_eq!(row.displaced, 0);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }

    #[test]
    fn integration_csv() {
        use hw_core::SimConfig;
        use hw_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig { total_steps: 200, seed: 3, ..SimConfig::default() };
        let dir = tmp();
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let (_, transits) = read_rows(dir.path().join(TRANSIT_FILE));
        assert_eq!(transits.len(), sim.transit_log().len());
        for (row, rec) in transits.iter().zip(sim.transit_log().records()) {
            assert_eq!(row[0].parse::<u64>().unwrap(), rec.vehicle.0);
            assert_eq!(row[5].parse::<u64>().unwrap(), rec.transit_time());
        }

        let (_, summaries) = read_rows(dir.path().join(SUMMARY_FILE));
        assert_eq!(summaries.len(), 200);
        let exited: u64 = summaries.iter().map(|r| r[3].parse::<u64>().unwrap()).sum();
        assert_eq!(exited, sim.counters().exited);
    }
}

#[cfg(test)]
mod render_tests {
    use hw_core::{Lane, SimConfig, Step, VehicleId};
    use hw_road::{Road, SpeedClass, Vehicle};
    use hw_sim::SimBuilder;

    use crate::render::{RoadPrinter, render_lane, render_road};

    fn fixture() -> Road {
        let mut road = Road::new(12, 5);
        let car = |id| Vehicle::with_speed(VehicleId(id), SpeedClass::Fast, 8, 1, Step::ZERO);
        road.set(Lane::Left, 0, Some(car(0)));
        road.set(Lane::Left, 5, Some(car(1)));
        road.set(Lane::Right, 11, Some(car(2)));
        // protected region is never drawn
        road.set(Lane::Right, 14, Some(car(3)));
        road
    }

    #[test]
    fn lanes_render_occupied_and_empty() {
        let road = fixture();
        assert_eq!(render_lane(&road, Lane::Left), "C____C______");
        assert_eq!(render_lane(&road, Lane::Right), "___________C");
        assert_eq!(render_road(&road), "C____C______\n___________C");
    }

    #[test]
    fn empty_road_is_all_underscores() {
        let road = Road::new(5, 2);
        assert_eq!(render_road(&road), "_____\n_____");
    }

    #[test]
    fn printer_writes_every_step() {
        let config = SimConfig { total_steps: 3, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut printer = RoadPrinter::new(Vec::new());
        sim.run(&mut printer);
        assert!(printer.take_error().is_none());

        let text = String::from_utf8(printer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.len() == 150));
        // the final rendering matches the final road
        assert_eq!(format!("{}\n{}", lines[4], lines[5]), render_road(sim.road()));
    }

    #[test]
    fn printer_interval_skips_steps() {
        let config = SimConfig { total_steps: 10, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut printer = RoadPrinter::new(Vec::new()).every(5);
        sim.run(&mut printer);
        let text = String::from_utf8(printer.into_inner()).unwrap();
        // steps 0 and 5
        assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 4);
    }

    #[test]
    fn printer_and_csv_compose() {
        use crate::{CsvWriter, SimOutputObserver};

        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig { total_steps: 50, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut both = (
            RoadPrinter::new(Vec::new()),
            SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap()),
        );
        sim.run(&mut both);
        assert!(both.1.take_error().is_none());
        let text = String::from_utf8(both.0.into_inner()).unwrap();
        assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 100);
    }
}
