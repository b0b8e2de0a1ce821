//! Command line definition.

use std::path::PathBuf;

use breakdown_core::{
    AlignContent, AlignItems, AutoFlow, Bounded, FlexAlign, FlexControls, FlexDirection,
    FlexJustify, Gap, GridControls, JustifyContent, JustifyItems, RowSizing,
};
use clap::{Args, Parser, Subcommand};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "breakdown")]
#[command(about = "CSS Breakdown - static lesson site and layout playground helpers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export every page as static HTML
    Render {
        /// Output directory (defaults to `out_dir` from the site config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Site config file. Without it, `breakdown.toml` in the current
        /// directory is used when present.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the class name a playground would derive
    #[command(subcommand)]
    Classes(ClassesCommand),

    /// List the site's routes
    Routes,
}

#[derive(Subcommand, Debug)]
pub enum ClassesCommand {
    /// Flexbox playground
    Flex(FlexArgs),
    /// Grid playground
    Grid(GridArgs),
}

#[derive(Args, Debug)]
pub struct FlexArgs {
    /// Number of items (1-12)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub items: i64,

    /// Gap in rem (0-5, half steps)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub gap: f32,

    /// Let items wrap onto multiple lines
    #[arg(long)]
    pub wrap: bool,

    /// row, row-reverse, column, column-reverse
    #[arg(long, default_value = "row")]
    pub direction: FlexDirection,

    /// Let items grow and shrink
    #[arg(long)]
    pub grow: bool,

    #[arg(long, default_value = "flex-start")]
    pub justify_content: FlexJustify,

    #[arg(long, default_value = "stretch")]
    pub align_items: FlexAlign,

    /// Print class names and CSS as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Number of items (1-20)
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    pub items: i64,

    /// Number of columns (1-8)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub columns: i64,

    /// auto, fixed, minmax
    #[arg(long, default_value = "auto")]
    pub rows: RowSizing,

    /// Column gap in rem (0-5, half steps)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub column_gap: f32,

    /// Row gap in rem (0-5, half steps)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub row_gap: f32,

    /// row, column, row dense, column dense
    #[arg(long, default_value = "row")]
    pub auto_flow: AutoFlow,

    #[arg(long, default_value = "stretch")]
    pub justify_items: JustifyItems,

    #[arg(long, default_value = "stretch")]
    pub align_items: AlignItems,

    #[arg(long, default_value = "start")]
    pub justify_content: JustifyContent,

    #[arg(long, default_value = "start")]
    pub align_content: AlignContent,

    /// Print class names and CSS as JSON
    #[arg(long)]
    pub json: bool,
}

impl FlexArgs {
    /// Build the control set, clamping out-of-range numbers.
    pub fn to_controls(&self) -> FlexControls {
        let mut controls = FlexControls::default();
        set_count(&mut controls.item_count, self.items, "items");
        controls.gap = gap("gap", self.gap);
        controls.wrap = self.wrap;
        controls.direction = self.direction;
        controls.grow = self.grow;
        controls.justify_content = self.justify_content;
        controls.align_items = self.align_items;
        controls
    }
}

impl GridArgs {
    /// Build the control set, clamping out-of-range numbers.
    pub fn to_controls(&self) -> GridControls {
        let mut controls = GridControls::default();
        set_count(&mut controls.item_count, self.items, "items");
        set_count(&mut controls.columns, self.columns, "columns");
        controls.rows = self.rows;
        controls.column_gap = gap("column-gap", self.column_gap);
        controls.row_gap = gap("row-gap", self.row_gap);
        controls.auto_flow = self.auto_flow;
        controls.justify_items = self.justify_items;
        controls.align_items = self.align_items;
        controls.justify_content = self.justify_content;
        controls.align_content = self.align_content;
        controls
    }
}

fn set_count(slot: &mut Bounded, requested: i64, flag: &str) {
    let (min, max) = (slot.min(), slot.max());
    let clamped = requested.clamp(i64::from(min), i64::from(max));
    if clamped != requested {
        warn!(flag, requested, min, max, "out of range, clamping");
    }
    slot.set(u8::try_from(clamped).unwrap_or(max));
}

fn gap(flag: &str, requested: f32) -> Gap {
    let gap = Gap::from_rem(requested);
    if (gap.rem() - requested).abs() > f32::EPSILON {
        warn!(flag, requested, used = gap.rem(), "gap snapped to a half-rem step in 0-5");
    }
    gap
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakdown_core::ControlSet;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("breakdown").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn flex(args: &[&str]) -> FlexArgs {
        let mut argv = vec!["classes", "flex"];
        argv.extend_from_slice(args);
        match parse(&argv).command {
            Command::Classes(ClassesCommand::Flex(args)) => args,
            other => panic!("expected classes flex, got {other:?}"),
        }
    }

    fn grid(args: &[&str]) -> GridArgs {
        let mut argv = vec!["classes", "grid"];
        argv.extend_from_slice(args);
        match parse(&argv).command {
            Command::Classes(ClassesCommand::Grid(args)) => args,
            other => panic!("expected classes grid, got {other:?}"),
        }
    }

    #[test]
    fn flex_defaults_match_the_playground() {
        assert_eq!(flex(&[]).to_controls(), FlexControls::default());
    }

    #[test]
    fn grid_defaults_match_the_playground() {
        assert_eq!(grid(&[]).to_controls(), GridControls::default());
    }

    #[test]
    fn flex_flags_map_onto_controls() {
        let controls = flex(&[
            "--items",
            "5",
            "--gap",
            "2.5",
            "--wrap",
            "--direction",
            "column-reverse",
            "--justify-content",
            "space_between",
            "--align-items",
            "center",
        ])
        .to_controls();
        assert_eq!(
            controls.container_class(),
            "flexContainer gap2_5 column_reverse wrap justifyContent_space_between alignItems_center"
        );
        assert_eq!(controls.item_count(), 5);
    }

    #[test]
    fn out_of_range_numbers_clamp() {
        let controls = grid(&["--items", "40", "--columns", "0", "--row-gap", "9"]).to_controls();
        assert_eq!(controls.item_count(), 20);
        assert_eq!(controls.columns.value(), 1);
        assert_eq!(controls.row_gap, Gap::from_halves(Gap::MAX_HALVES));
    }

    #[test]
    fn numbers_beyond_a_byte_and_negatives_clamp() {
        let controls = flex(&["--items", "300", "--gap", "-1"]).to_controls();
        assert_eq!(controls.item_count(), 12);
        assert_eq!(controls.gap, Gap::from_halves(0));

        let controls = grid(&["--items", "-5", "--columns", "1000", "--column-gap", "-2.5"])
            .to_controls();
        assert_eq!(controls.item_count(), 1);
        assert_eq!(controls.columns.value(), 8);
        assert_eq!(controls.column_gap, Gap::from_halves(0));
    }

    #[test]
    fn unknown_options_are_rejected_by_the_parser() {
        let err = Cli::try_parse_from(["breakdown", "classes", "flex", "--direction", "diagonal"])
            .expect_err("diagonal is not a direction");
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn log_level_is_global() {
        let cli = parse(&["routes", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");
    }
}
