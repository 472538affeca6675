//! Integration tests for mz-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use mz_core::MotionAction;

    use crate::csv::CsvWriter;
    use crate::row::{CompletionRow, DecisionRow, PoseRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("poses.csv").exists());
        assert!(dir.path().join("decisions.csv").exists());
        assert!(dir.path().join("completions.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("poses.csv")),
            ["frame", "elapsed_secs", "x", "z", "angle", "action", "progress"]
        );
        assert_eq!(
            headers(dir.path().join("decisions.csv")),
            ["frame", "cycle", "action", "thought", "forward_blocked", "turn_left_blocked", "turn_right_blocked"]
        );
        assert_eq!(
            headers(dir.path().join("completions.csv")),
            ["frame", "seq", "action", "blocked", "x", "z", "angle"]
        );
    }

    #[test]
    fn csv_pose_idle_has_empty_action() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let idle = PoseRow { frame: 0, elapsed_secs: 0.0, x: 12.0, z: 10.0, angle: 0.0, action: None, progress: 1.0 };
        let busy = PoseRow { frame: 1, action: Some(MotionAction::TurnLeft), progress: 0.5, ..idle };
        w.write_pose(&idle).unwrap();
        w.write_pose(&busy).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("poses.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "12");
        assert_eq!(&rows[0][5], "");
        assert_eq!(&rows[1][5], "turn_left");
        assert_eq!(&rows[1][6], "0.5");
    }

    #[test]
    fn csv_decision_thought_is_quoted() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_decision(&DecisionRow {
            frame:              4,
            cycle:              2,
            action:             "move_forward",
            thought:            "open ahead, \"probably\" the way".into(),
            forward_blocked:    false,
            turn_left_blocked:  true,
            turn_right_blocked: true,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("decisions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "open ahead, \"probably\" the way");
        assert_eq!(&rows[0][4], "0");
        assert_eq!(&rows[0][5], "1");
    }

    #[test]
    fn csv_completion_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_completion(&CompletionRow {
            frame:   31,
            seq:     1,
            action:  MotionAction::MoveForward,
            blocked: true,
            x:       12.0,
            z:       10.0,
            angle:   0.0,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("completions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "move_forward");
        assert_eq!(&rows[0][3], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use mz_core::Action;
    use mz_session::{ScriptedPolicy, SessionBuilder, SessionConfig, SessionEnd};

    use crate::csv::CsvWriter;
    use crate::observer::TraceObserver;
    use crate::row::{CompletionRow, DecisionRow, PoseRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn integration_csv() {
        // Step north, face east into the wall, try to step, then stop.
        let script = [Action::MoveForward, Action::TurnRight, Action::MoveForward, Action::Stop];
        let mut session = SessionBuilder::new(SessionConfig::default(), ScriptedPolicy::from_actions(script))
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer).with_pose_interval(10);
        assert_eq!(session.run(&mut obs).unwrap(), SessionEnd::Stopped);
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.policy_errors(), 0);

        let decisions = records(dir.path().join("decisions.csv"));
        let actions: Vec<&str> = decisions.iter().map(|r| r.get(2).unwrap()).collect();
        assert_eq!(actions, ["move_forward", "turn_right", "move_forward", "stop"]);
        // The second forward step was predicted blocked before it was taken.
        assert_eq!(&decisions[2][4], "1");

        let completions = records(dir.path().join("completions.csv"));
        assert_eq!(completions.len(), 3);
        let blocked: Vec<&str> = completions.iter().map(|r| r.get(3).unwrap()).collect();
        assert_eq!(blocked, ["0", "0", "1"]);

        let poses = records(dir.path().join("poses.csv"));
        let frames = session.clock().current_frame.0;
        assert_eq!(poses.len() as u64, frames.div_ceil(10));
        assert_eq!(&poses[0][0], "0");
    }

    struct FailingWriter {
        finished: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_pose(&mut self, _row: &PoseRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("second failure")))
        }
        fn write_decision(&mut self, _row: &DecisionRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_completion(&mut self, _row: &CompletionRow) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let cfg = SessionConfig { max_frames: 5, ..SessionConfig::default() };
        let mut session = SessionBuilder::new(cfg, ScriptedPolicy::from_actions([Action::TurnLeft]))
            .build()
            .unwrap();
        let mut obs = TraceObserver::new(FailingWriter { finished: 0 });
        assert_eq!(session.run(&mut obs).unwrap(), SessionEnd::FrameLimit);

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finished, 1);
    }
}
