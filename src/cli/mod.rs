//! CLI command handling

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use finiload::progress::{
    arc_parameters, grid_fill, grid_fill_count, linear_fill, wrapper_rotation, ArcParams,
    FillPattern, ProgressRange, Thickness,
};
use finiload::tui::{self, DemoConfig, LoaderKind};

/// Finite-progress loading indicators for the terminal
#[derive(Parser)]
#[command(name = "finiload")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Progress range shared by every loader. In `--json` mode the plan is
/// computed at this range; the demo animates from 0 to 100 regardless.
#[derive(Args, Debug)]
struct RangeArgs {
    /// Current value within the range
    #[arg(long, default_value_t = 100.0)]
    value: f64,

    /// Range start
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Range finish
    #[arg(long, default_value_t = 100.0)]
    finish: f64,
}

impl RangeArgs {
    fn percentage(&self) -> f64 {
        ProgressRange::with_bounds(self.value, self.start, self.finish).percentage()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Continuous bar loader
    Bar {
        #[command(flatten)]
        range: RangeArgs,

        /// Print the computed plan as JSON instead of running the demo
        #[arg(long)]
        json: bool,
    },

    /// Segmented blocks loader
    Blocks {
        /// Number of segments
        #[arg(long, default_value_t = 20)]
        segments: usize,

        /// Draw segments as circles
        #[arg(long)]
        rounded: bool,

        /// Blank cells between segments
        #[arg(long, default_value_t = 1)]
        spacing: u16,

        #[command(flatten)]
        range: RangeArgs,

        /// Print the computed plan as JSON instead of running the demo
        #[arg(long)]
        json: bool,
    },

    /// Grid loader with fill patterns and spin (default)
    Grid {
        /// Cells per side
        #[arg(long, default_value_t = 6)]
        grid_size: usize,

        /// Fill pattern: horizontal, horizontalAlt, vertical, verticalAlt
        /// or spiral
        #[arg(long, default_value = "vertical")]
        pattern: FillPattern,

        /// Rotate the grid as it fills
        #[arg(long)]
        spin: bool,

        /// Fill from the opposite end
        #[arg(long)]
        reverse: bool,

        /// Spin against the fill direction
        #[arg(long)]
        reverse_spin: bool,

        /// Draw cells as circles
        #[arg(long)]
        rounded: bool,

        #[command(flatten)]
        range: RangeArgs,

        /// Print the computed plan as JSON instead of running the demo
        #[arg(long)]
        json: bool,
    },

    /// Donut loader
    Donut {
        /// Ring thickness as a fraction of the radius (0 < t <= 1)
        #[arg(long, default_value_t = 0.2)]
        thickness: f64,

        /// Label with "value / finish" instead of a percentage
        #[arg(long)]
        count_label: bool,

        #[command(flatten)]
        range: RangeArgs,

        /// Print the computed plan as JSON instead of running the demo
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BarPlan {
    progress: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlocksPlan {
    progress: f64,
    segments: Vec<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridPlan {
    progress: f64,
    pattern: FillPattern,
    rotation: i32,
    grid: Vec<Vec<bool>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DonutPlan {
    progress: f64,
    #[serde(flatten)]
    arc: ArcParams,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => tui::run(DemoConfig::default()),
            Some(Commands::Bar { range, json }) => {
                if json {
                    print_plan(&BarPlan {
                        progress: range.percentage(),
                    })
                } else {
                    tui::run(DemoConfig {
                        loader: LoaderKind::Bar,
                    })
                }
            }
            Some(Commands::Blocks {
                segments,
                rounded,
                spacing,
                range,
                json,
            }) => {
                if json {
                    let progress = range.percentage();
                    print_plan(&BlocksPlan {
                        progress,
                        segments: linear_fill(segments, progress),
                    })
                } else {
                    tui::run(DemoConfig {
                        loader: LoaderKind::Blocks {
                            segments,
                            rounded,
                            spacing,
                        },
                    })
                }
            }
            Some(Commands::Grid {
                grid_size,
                pattern,
                spin,
                reverse,
                reverse_spin,
                rounded,
                range,
                json,
            }) => {
                if json {
                    let progress = range.percentage();
                    let filled = grid_fill_count(grid_size, progress);
                    print_plan(&GridPlan {
                        progress,
                        pattern,
                        rotation: wrapper_rotation(
                            pattern,
                            grid_size,
                            filled,
                            spin,
                            reverse,
                            reverse_spin,
                        ),
                        grid: grid_fill(grid_size, progress, pattern, reverse),
                    })
                } else {
                    tui::run(DemoConfig {
                        loader: LoaderKind::Grid {
                            grid_size,
                            pattern,
                            spin,
                            reverse,
                            reverse_spin,
                            rounded,
                        },
                    })
                }
            }
            Some(Commands::Donut {
                thickness,
                count_label,
                range,
                json,
            }) => {
                let thickness = Thickness::new(thickness)?;
                if json {
                    let progress = range.percentage();
                    print_plan(&DonutPlan {
                        progress,
                        arc: arc_parameters(progress, thickness),
                    })
                } else {
                    tui::run(DemoConfig {
                        loader: LoaderKind::Donut {
                            thickness,
                            label_as_percentage: !count_label,
                        },
                    })
                }
            }
        }
    }
}

fn print_plan<T: Serialize>(plan: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["finiload"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_bar_json() {
        let cli = Cli::try_parse_from(["finiload", "bar", "--json", "--value", "40"]).unwrap();
        match cli.command {
            Some(Commands::Bar { range, json }) => {
                assert!(json);
                assert_eq!(range.value, 40.0);
                assert_eq!(range.percentage(), 40.0);
            }
            _ => panic!("expected bar command"),
        }
    }

    #[test]
    fn test_cli_parse_blocks_defaults() {
        let cli = Cli::try_parse_from(["finiload", "blocks"]).unwrap();
        match cli.command {
            Some(Commands::Blocks {
                segments,
                rounded,
                spacing,
                json,
                ..
            }) => {
                assert_eq!(segments, 20);
                assert!(!rounded);
                assert_eq!(spacing, 1);
                assert!(!json);
            }
            _ => panic!("expected blocks command"),
        }
    }

    #[test]
    fn test_cli_parse_blocks_spacing() {
        let cli = Cli::try_parse_from(["finiload", "blocks", "--spacing", "0"]).unwrap();
        match cli.command {
            Some(Commands::Blocks { spacing, .. }) => assert_eq!(spacing, 0),
            _ => panic!("expected blocks command"),
        }
    }

    #[test]
    fn test_cli_parse_grid_defaults() {
        let cli = Cli::try_parse_from(["finiload", "grid"]).unwrap();
        match cli.command {
            Some(Commands::Grid {
                grid_size,
                pattern,
                spin,
                reverse,
                reverse_spin,
                ..
            }) => {
                assert_eq!(grid_size, 6);
                assert_eq!(pattern, FillPattern::Vertical);
                assert!(!spin && !reverse && !reverse_spin);
            }
            _ => panic!("expected grid command"),
        }
    }

    #[test]
    fn test_cli_parse_grid_pattern_names() {
        let cli =
            Cli::try_parse_from(["finiload", "grid", "--pattern", "horizontalAlt"]).unwrap();
        match cli.command {
            Some(Commands::Grid { pattern, .. }) => {
                assert_eq!(pattern, FillPattern::HorizontalAlt)
            }
            _ => panic!("expected grid command"),
        }

        let err = Cli::try_parse_from(["finiload", "grid", "--pattern", "diagonal"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_cli_parse_donut_defaults() {
        let cli = Cli::try_parse_from(["finiload", "donut"]).unwrap();
        match cli.command {
            Some(Commands::Donut {
                thickness,
                count_label,
                ..
            }) => {
                assert_eq!(thickness, 0.2);
                assert!(!count_label);
            }
            _ => panic!("expected donut command"),
        }
    }

    #[test]
    fn test_cli_range_with_bounds() {
        let cli = Cli::try_parse_from([
            "finiload", "bar", "--json", "--value", "150", "--start", "100", "--finish", "200",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Bar { range, .. }) => assert_eq!(range.percentage(), 50.0),
            _ => panic!("expected bar command"),
        }
    }
}
