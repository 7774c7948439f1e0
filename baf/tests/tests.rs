#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use baf::config::BafConfig;
    use baf::io;
    use baf::io::cli::Cli;
    use baf::io::output::BafOutput;
    use clap::Parser;
    use cutpack::io::ext_repr::ExtInstance;
    use cutpack::util::FreeSpaceModel;
    use log::LevelFilter;
    use test_case::test_case;

    #[test_case("../assets/shop.json", FreeSpaceModel::Guillotine, 3; "shop guillotine")]
    #[test_case("../assets/shop.json", FreeSpaceModel::MaximalRectangles, 2; "shop maxrects")]
    #[test_case("../assets/van.json", FreeSpaceModel::Guillotine, 3; "van guillotine")]
    #[test_case("../assets/van.json", FreeSpaceModel::MaximalRectangles, 2; "van maxrects")]
    fn test_instance(instance_path: &str, free_space: FreeSpaceModel, expected_bins: usize) {
        let instance_path = Path::new(instance_path);
        let ext_instance: ExtInstance = io::read_json(instance_path).unwrap();
        let n_pieces = ext_instance.pieces.len();
        let stem = instance_path.file_stem().unwrap().to_str().unwrap();

        let mut config = BafConfig::default();
        config.packer.free_space = free_space;

        let dir = tempfile::tempdir().unwrap();
        let cut_list = baf::run(ext_instance.clone(), config, stem, dir.path()).unwrap();

        let output: BafOutput = io::read_json(&dir.path().join(format!("sol_{stem}.json"))).unwrap();
        assert_eq!(output.instance, ext_instance);
        assert_eq!(output.config, config);
        assert_eq!(output.solution.bins_used, expected_bins);
        assert_eq!(output.solution.placements.len(), n_pieces);

        let written = fs::read_to_string(dir.path().join(format!("cut_list_{stem}.txt"))).unwrap();
        assert_eq!(written, cut_list);
        assert!(cut_list.contains(" Cut List "));

        let boards = dir.path().join(format!("boards_{stem}"));
        for n in 1..=expected_bins {
            assert!(boards.join(format!("board_{n}.svg")).exists());
        }
        assert!(!boards.join(format!("board_{}.svg", expected_bins + 1)).exists());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config: BafConfig = io::read_json(Path::new("../assets/config_maxrects.json")).unwrap();
        assert_eq!(config.packer.free_space, FreeSpaceModel::MaximalRectangles);
        assert!(config.packer.allow_rotation);
        assert!(config.svg_draw_options.labels);
        assert!(config.svg_draw_options.header);
    }

    #[test]
    fn infeasible_instance_writes_nothing() {
        let ext_instance: ExtInstance = serde_json::from_str(
            r#"{
                "name": "too_big",
                "pieces": [{ "id": "A", "width": 50.0, "height": 100.0 }],
                "bins": [{ "width": 48.0, "height": 96.0 }]
            }"#,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = baf::run(ext_instance, BafConfig::default(), "too_big", dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("could not pack"));
        assert!(!dir.path().join("sol_too_big.json").exists());
    }

    #[test]
    fn cli_arguments() {
        let cli = Cli::try_parse_from(["baf", "-i", "../assets/van.json", "-s", "out", "-l", "debug"]).unwrap();
        assert_eq!(cli.input_file, Path::new("../assets/van.json"));
        assert_eq!(cli.solution_folder, Path::new("out"));
        assert_eq!(cli.config_file, None);
        assert_eq!(cli.log_level, LevelFilter::Debug);

        let cli = Cli::try_parse_from(["baf", "-i", "in.json", "-s", "out", "-c", "cfg.json"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert!(cli.config_file.is_some());
        assert!(Cli::try_parse_from(["baf", "-s", "out"]).is_err());
    }
}
