//! `breakdown classes` - class names a playground derives for a control set.

use anyhow::{Context, Result};
use breakdown_core::ControlSet;
use serde::Serialize;
use serde_json::json;

use crate::cli::ClassesCommand;

pub fn run(command: &ClassesCommand) -> Result<()> {
    let output = match command {
        ClassesCommand::Flex(args) => render(&args.to_controls(), ".flexContainer", args.json)?,
        ClassesCommand::Grid(args) => render(&args.to_controls(), ".gridContainer", args.json)?,
    };
    println!("{output}");
    Ok(())
}

/// Plain output is the container class alone; JSON adds the item class,
/// the control values and the generated CSS.
pub fn render<C>(controls: &C, selector: &str, as_json: bool) -> Result<String>
where
    C: ControlSet + Serialize,
{
    if !as_json {
        return Ok(controls.container_class());
    }
    let value = json!({
        "container": controls.container_class(),
        "item": controls.item_class(),
        "controls": controls,
        "css": controls.css_snippet(selector),
    });
    serde_json::to_string_pretty(&value).context("serializing classes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakdown_core::{FlexAction, FlexControls, GridControls};
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_output_is_the_container_class() {
        let out = render(&GridControls::default(), ".gridContainer", false).unwrap();
        assert_eq!(
            out,
            "gridContainer columnGap1 rowGap1 cols3 rows_auto flow_row justifyItems_stretch \
             alignItems_stretch justifyContent_start alignContent_start"
        );
    }

    #[test]
    fn json_output_carries_classes_controls_and_css() {
        let mut controls = FlexControls::default();
        controls.apply(FlexAction::SetGrow(true));

        let out = render(&controls, ".flexContainer", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["container"], controls.container_class());
        assert_eq!(value["item"], "flexItem grow");
        assert_eq!(value["controls"]["item_count"], 3);
        assert!(value["css"].as_str().unwrap().starts_with(".flexContainer {"));
    }
}
