use std::str::FromStr;

use mandelbrot_explorer::{
    area_controller, MandelbrotConfig, PixelGrid, PpmFilePresenter, RenderController,
};

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_MAX_ITERATIONS: u32 = 256;
const DEFAULT_SAMPLE_POINTS: u64 = 100_000;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

fn parse_or<T: FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid value for argument {}: {}", index + 1, raw)),
        None => Ok(default),
    }
}

fn render(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let width = parse_or(args, 1, DEFAULT_WIDTH)?;
    let height = parse_or(args, 2, DEFAULT_HEIGHT)?;
    let max_iterations = parse_or(args, 3, DEFAULT_MAX_ITERATIONS)?;
    let filepath = args
        .get(4)
        .map(String::as_str)
        .unwrap_or(DEFAULT_OUTPUT)
        .to_owned();

    if let Some(parent) = std::path::Path::new(&filepath).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let grid = PixelGrid::new(width, height)?;
    let config = MandelbrotConfig::with_default_region(grid, max_iterations)?;

    let mut controller = RenderController::new(PpmFilePresenter::new());
    controller.generate(&config)?;
    controller.write(&filepath)?;

    println!("Saved to {}", filepath);
    Ok(())
}

fn area(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let max_iterations = parse_or(args, 1, DEFAULT_MAX_ITERATIONS)?;
    let number_of_points = parse_or(args, 2, DEFAULT_SAMPLE_POINTS)?;
    let seed = parse_or(args, 3, DEFAULT_SEED)?;

    area_controller(max_iterations, number_of_points, seed)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("render") => render(&args),
        Some("area") => area(&args),
        Some(command) => Err(format!(
            "unknown command: {} (expected \"render\" or \"area\")",
            command
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_or_uses_default_when_absent() {
        let parsed: u32 = parse_or(&args(&["render"]), 1, 800).unwrap();

        assert_eq!(parsed, 800);
    }

    #[test]
    fn test_parse_or_reads_the_argument() {
        let parsed: u32 = parse_or(&args(&["render", "1024"]), 1, 800).unwrap();

        assert_eq!(parsed, 1024);
    }

    #[test]
    fn test_parse_or_rejects_garbage() {
        let result: Result<u32, _> = parse_or(&args(&["render", "wide"]), 1, 800);

        assert!(result.is_err());
    }
}
