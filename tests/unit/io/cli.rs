//! Tests for command-line parsing and grid file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridgen::GridError;
    use gridgen::grid::builder::WalkOrder;
    use gridgen::io::cli::{Cli, GridProcessor};
    use gridgen::io::encoder::OutputFormat;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn parse_for(out_file: &Path, corners: [&str; 4], length: &str, flags: &[&str]) -> Cli {
        let out = out_file.to_string_lossy().to_string();
        let mut args = vec!["gridgen"];
        args.extend(corners);
        args.push(length);
        args.push(&out);
        args.extend(flags);
        Cli::parse_from(args)
    }

    fn read_json(path: &Path) -> serde_json::Value {
        let contents = fs::read_to_string(path).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    // Positionals map to corners, square length and output path
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["gridgen", "1.0", "0.0", "0.0", "1.0", "50", "out.json"]);

        assert!((cli.nw_lat - 1.0).abs() < f64::EPSILON);
        assert!(cli.nw_lon.abs() < f64::EPSILON);
        assert!(cli.se_lat.abs() < f64::EPSILON);
        assert!((cli.se_lon - 1.0).abs() < f64::EPSILON);
        assert_eq!(cli.square_length, 50);
        assert_eq!(cli.out_file, PathBuf::from("out.json"));
        assert_eq!(cli.order, WalkOrder::SouthThenEast);
        assert_eq!(cli.output_format(), OutputFormat::Polygons);
        assert!(!cli.strict);
        assert!(cli.should_show_progress());
    }

    // Western and southern hemisphere corners parse as negative values
    #[test]
    fn test_cli_parse_negative_coordinates() {
        let cli = Cli::parse_from([
            "gridgen", "-33.8", "-151.3", "-34.1", "-150.9", "5", "out.json",
        ]);

        assert!((cli.nw_lat + 33.8).abs() < f64::EPSILON);
        assert!((cli.nw_lon + 151.3).abs() < f64::EPSILON);
        assert!((cli.se_lat + 34.1).abs() < f64::EPSILON);
        assert!((cli.se_lon + 150.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::parse_from([
            "gridgen",
            "1.0",
            "0.0",
            "0.0",
            "1.0",
            "50",
            "out.json",
            "--multi-point",
            "--order",
            "east-then-south",
            "--strict",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.output_format(), OutputFormat::Points);
        assert_eq!(cli.order, WalkOrder::EastThenSouth);
        assert!(cli.strict);
        assert!(!cli.should_show_progress());
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_multi_point_alias() {
        let cli = Cli::parse_from(["gridgen", "1", "0", "0", "1", "50", "o.json", "--mp"]);
        assert!(cli.multi_point);
    }

    // Non-numeric or missing positionals are usage errors
    #[test]
    fn test_cli_rejects_invalid_input() {
        assert!(Cli::try_parse_from(["gridgen", "north", "0", "0", "1", "50", "o.json"]).is_err());
        assert!(Cli::try_parse_from(["gridgen", "1", "0", "0", "1", "1.5", "o.json"]).is_err());
        assert!(Cli::try_parse_from(["gridgen", "1", "0", "0", "1", "50"]).is_err());
    }

    #[test]
    fn test_process_writes_polygon_mesh() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("mesh.json");

        let cli = parse_for(&out, ["1.0", "0.0", "0.0", "1.0"], "25", &["--quiet"]);
        let matrix = GridProcessor::new(cli).process().unwrap();

        assert_eq!(matrix.row_lengths(), vec![6; 6]);

        let json = read_json(&out);
        assert_eq!(json["type"], "MultiPolygon");
        assert_eq!(json["coordinates"].as_array().map(Vec::len), Some(25));
    }

    #[test]
    fn test_process_writes_point_cloud() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("points.json");

        let cli = parse_for(&out, ["1.0", "0.0", "0.0", "1.0"], "25", &["-q", "-m"]);
        GridProcessor::new(cli).process().unwrap();

        let json = read_json(&out);
        assert_eq!(json["type"], "MultiPoint");
        assert_eq!(json["coordinates"].as_array().map(Vec::len), Some(36));
        assert_eq!(json["coordinates"][0], serde_json::json!([0.0, 1.0]));
    }

    // Equal corners produce one point and an empty mesh
    #[test]
    fn test_process_point_box() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("point.json");

        let cli = parse_for(&out, ["5", "5", "5", "5"], "10", &["--quiet"]);
        let matrix = GridProcessor::new(cli).process().unwrap();

        assert_eq!(matrix.point_count(), 1);
        assert_eq!(read_json(&out)["coordinates"].as_array().map(Vec::len), Some(0));
    }

    // Strict mode refuses ragged grids and leaves no output behind
    #[test]
    fn test_strict_mode_rejects_ragged_grid() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("ragged.json");

        // Rows further south cover more longitude per step and gain a column
        let cli = parse_for(&out, ["10.0", "0.0", "9.0", "1.0"], "110", &["-q", "--strict"]);
        let result = GridProcessor::new(cli).process();

        assert!(matches!(result, Err(GridError::RaggedMatrix { .. })));
        assert!(!out.exists());
    }

    // Without strict mode the same ragged grid is written with clamped cells
    #[test]
    fn test_lenient_mode_writes_ragged_grid() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("ragged.json");

        let cli = parse_for(&out, ["10.0", "0.0", "9.0", "1.0"], "110", &["-q"]);
        let matrix = GridProcessor::new(cli).process().unwrap();

        assert_eq!(matrix.row_lengths(), vec![2, 2, 3]);
        assert_eq!(read_json(&out)["coordinates"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_strict_mode_accepts_rectangular_grid() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("strict.json");

        let cli = parse_for(
            &out,
            ["1.0", "0.0", "0.0", "1.0"],
            "50",
            &["-q", "--strict", "--order", "east-then-south"],
        );
        GridProcessor::new(cli).process().unwrap();

        assert_eq!(read_json(&out)["coordinates"].as_array().map(Vec::len), Some(9));
    }

    #[test]
    fn test_process_rejects_zero_square_length() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("zero.json");

        let cli = parse_for(&out, ["1.0", "0.0", "0.0", "1.0"], "0", &["--quiet"]);
        let result = GridProcessor::new(cli).process();

        assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn test_process_rejects_out_of_range_latitude() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("bad.json");

        let cli = parse_for(&out, ["95.0", "0.0", "0.0", "1.0"], "10", &["--quiet"]);
        assert!(GridProcessor::new(cli).process().is_err());
    }

    // Progress display does not change the result
    #[test]
    fn test_process_with_progress() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("progress.json");

        let cli = parse_for(&out, ["1.0", "0.0", "0.0", "1.0"], "50", &[]);
        let matrix = GridProcessor::new(cli).process().unwrap();

        assert_eq!(matrix.row_lengths(), vec![4; 4]);
    }
}
