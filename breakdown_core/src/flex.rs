//! Flexbox demo controls.

use serde::Serialize;

use crate::controls::{Bounded, Choice, ControlSet, Gap, choice, replace};

/// Class of the preview container on the Flex page.
pub const FLEX_CONTAINER: &str = "flexContainer";
/// Class of every placeholder element on the Flex page.
pub const FLEX_ITEM: &str = "flexItem";
/// Extra item class when grow/shrink is enabled.
pub const GROW: &str = "grow";
/// Wrap tokens, on and off.
pub const WRAP: &str = "wrap";
pub const NOWRAP: &str = "nowrap";

pub const MIN_ITEMS: u8 = 1;
pub const MAX_ITEMS: u8 = 12;

choice! {
    /// Main axis direction.
    pub enum FlexDirection {
        control: "flex direction",
        property: "flex-direction",
        prefix: "",
        default: Row,
        Row => ("row", "Row"),
        RowReverse => ("row-reverse", "Row Reverse"),
        Column => ("column", "Column"),
        ColumnReverse => ("column-reverse", "Column Reverse"),
    }
}

choice! {
    /// Distribution of items along the main axis.
    pub enum FlexJustify {
        control: "justify content",
        property: "justify-content",
        prefix: "justifyContent_",
        default: FlexStart,
        FlexStart => ("flex-start", "Flex Start"),
        FlexEnd => ("flex-end", "Flex End"),
        Center => ("center", "Center"),
        SpaceBetween => ("space-between", "Space Between"),
        SpaceAround => ("space-around", "Space Around"),
        SpaceEvenly => ("space-evenly", "Space Evenly"),
    }
}

choice! {
    /// Alignment of items along the cross axis.
    pub enum FlexAlign {
        control: "align items",
        property: "align-items",
        prefix: "alignItems_",
        default: Stretch,
        Stretch => ("stretch", "Stretch"),
        FlexStart => ("flex-start", "Flex Start"),
        FlexEnd => ("flex-end", "Flex End"),
        Center => ("center", "Center"),
        Baseline => ("baseline", "Baseline"),
    }
}

/// User operations on [`FlexControls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexAction {
    IncrementItems,
    DecrementItems,
    IncrementGap,
    DecrementGap,
    SetWrap(bool),
    SetDirection(FlexDirection),
    SetGrow(bool),
    SetJustifyContent(FlexJustify),
    SetAlignItems(FlexAlign),
    Reset,
}

/// State of the Flex page control panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlexControls {
    pub item_count: Bounded,
    pub gap: Gap,
    pub wrap: bool,
    pub direction: FlexDirection,
    pub grow: bool,
    pub justify_content: FlexJustify,
    pub align_items: FlexAlign,
}

impl Default for FlexControls {
    fn default() -> Self {
        Self {
            item_count: Bounded::new(3, MIN_ITEMS, MAX_ITEMS),
            gap: Gap::from_halves(2),
            wrap: false,
            direction: FlexDirection::default(),
            grow: false,
            justify_content: FlexJustify::default(),
            align_items: FlexAlign::default(),
        }
    }
}

impl FlexControls {
    pub fn gap_token(&self) -> String {
        format!("gap{}", self.gap.token())
    }

    pub fn wrap_token(&self) -> &'static str {
        if self.wrap { WRAP } else { NOWRAP }
    }
}

impl ControlSet for FlexControls {
    type Action = FlexAction;

    fn apply(&mut self, action: FlexAction) -> bool {
        match action {
            FlexAction::IncrementItems => self.item_count.increment(),
            FlexAction::DecrementItems => self.item_count.decrement(),
            FlexAction::IncrementGap => self.gap.increment(),
            FlexAction::DecrementGap => self.gap.decrement(),
            FlexAction::SetWrap(on) => replace(&mut self.wrap, on),
            FlexAction::SetDirection(direction) => replace(&mut self.direction, direction),
            FlexAction::SetGrow(on) => replace(&mut self.grow, on),
            FlexAction::SetJustifyContent(justify) => replace(&mut self.justify_content, justify),
            FlexAction::SetAlignItems(align) => replace(&mut self.align_items, align),
            FlexAction::Reset => replace(self, Self::default()),
        }
    }

    fn item_count(&self) -> u8 {
        self.item_count.value()
    }

    fn tokens(&self) -> Vec<String> {
        vec![
            self.gap_token(),
            self.direction.token(),
            self.wrap_token().to_string(),
            self.justify_content.token(),
            self.align_items.token(),
        ]
    }

    fn container_class(&self) -> String {
        let mut class = String::from(FLEX_CONTAINER);
        for token in self.tokens() {
            class.push(' ');
            class.push_str(&token);
        }
        class
    }

    fn item_class(&self) -> String {
        if self.grow {
            format!("{FLEX_ITEM} {GROW}")
        } else {
            FLEX_ITEM.to_string()
        }
    }

    fn declarations(&self) -> Vec<String> {
        vec![
            "display: flex".to_string(),
            format!("gap: {}", self.gap.css_value()),
            self.direction.declaration(),
            format!("flex-wrap: {}", self.wrap_token()),
            self.justify_content.declaration(),
            self.align_items.declaration(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state_matches_the_page_defaults() {
        let controls = FlexControls::default();
        assert_eq!(controls.item_count(), 3);
        assert_eq!(controls.gap.rem(), 1.0);
        assert!(!controls.wrap);
        assert!(!controls.grow);
        assert_eq!(controls.direction, FlexDirection::Row);
        assert_eq!(controls.justify_content, FlexJustify::FlexStart);
        assert_eq!(controls.align_items, FlexAlign::Stretch);
    }

    #[test]
    fn default_container_class() {
        assert_eq!(
            FlexControls::default().container_class(),
            "flexContainer gap1 row nowrap justifyContent_flex_start alignItems_stretch"
        );
    }

    #[test]
    fn container_class_is_deterministic() {
        let mut controls = FlexControls::default();
        controls.apply(FlexAction::IncrementGap);
        controls.apply(FlexAction::SetDirection(FlexDirection::ColumnReverse));
        let first = controls.container_class();
        assert_eq!(first, controls.container_class());
        assert_eq!(first, controls.clone().container_class());
        assert_eq!(
            first,
            "flexContainer gap1_5 column_reverse nowrap justifyContent_flex_start alignItems_stretch"
        );
    }

    #[test]
    fn item_count_never_exceeds_twelve() {
        let mut controls = FlexControls::default();
        for _ in 0..30 {
            controls.apply(FlexAction::IncrementItems);
            assert!(controls.item_count() <= MAX_ITEMS);
        }
        assert_eq!(controls.item_count(), 12);
        assert!(!controls.apply(FlexAction::IncrementItems));
    }

    #[test]
    fn item_count_never_drops_below_one() {
        let mut controls = FlexControls::default();
        for _ in 0..30 {
            controls.apply(FlexAction::DecrementItems);
            assert!(controls.item_count() >= MIN_ITEMS);
        }
        assert_eq!(controls.item_count(), 1);
    }

    #[test]
    fn gap_never_goes_below_zero() {
        let mut controls = FlexControls::default();
        for _ in 0..5 {
            controls.apply(FlexAction::DecrementGap);
        }
        assert_eq!(controls.gap.rem(), 0.0);
        assert_eq!(controls.gap_token(), "gap0");
    }

    #[test]
    fn toggling_wrap_changes_only_the_wrap_token() {
        let mut controls = FlexControls::default();
        let before = controls.tokens();
        assert!(controls.apply(FlexAction::SetWrap(true)));
        let after = controls.tokens();

        let changed: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();
        assert_eq!(changed, vec![2]);
        assert_eq!(before[2], "nowrap");
        assert_eq!(after[2], "wrap");
    }

    #[test]
    fn grow_only_touches_the_item_class() {
        let mut controls = FlexControls::default();
        let container = controls.container_class();
        assert_eq!(controls.item_class(), "flexItem");
        controls.apply(FlexAction::SetGrow(true));
        assert_eq!(controls.item_class(), "flexItem grow");
        assert_eq!(controls.container_class(), container);
    }

    #[test]
    fn setting_the_current_value_is_not_a_change() {
        let mut controls = FlexControls::default();
        assert!(!controls.apply(FlexAction::SetAlignItems(FlexAlign::Stretch)));
        assert!(controls.apply(FlexAction::SetAlignItems(FlexAlign::Baseline)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut controls = FlexControls::default();
        controls.apply(FlexAction::IncrementItems);
        controls.apply(FlexAction::SetJustifyContent(FlexJustify::SpaceEvenly));
        assert!(controls.apply(FlexAction::Reset));
        assert_eq!(controls, FlexControls::default());
        assert!(!controls.apply(FlexAction::Reset));
    }

    #[test]
    fn options_parse_from_either_spelling() {
        assert_eq!("row-reverse".parse::<FlexDirection>(), Ok(FlexDirection::RowReverse));
        assert_eq!("row_reverse".parse::<FlexDirection>(), Ok(FlexDirection::RowReverse));
        assert_eq!("space_between".parse::<FlexJustify>(), Ok(FlexJustify::SpaceBetween));
        assert!("diagonal".parse::<FlexDirection>().is_err());
    }

    #[test]
    fn css_snippet_lists_every_declaration() {
        let snippet = FlexControls::default().css_snippet(".container");
        assert_eq!(
            snippet,
            ".container {\n    display: flex;\n    gap: 1rem;\n    flex-direction: row;\n    \
             flex-wrap: nowrap;\n    justify-content: flex-start;\n    align-items: stretch;\n}"
        );
    }

    #[test]
    fn serializes_plain_values() {
        let json = serde_json::to_value(FlexControls::default()).expect("serialize");
        assert_eq!(json["item_count"], 3);
        assert_eq!(json["gap"], 1.0);
        assert_eq!(json["direction"], "row");
        assert_eq!(json["justify_content"], "flex-start");
    }
}
