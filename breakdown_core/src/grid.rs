//! CSS Grid demo controls.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::controls::{Bounded, Choice, ControlSet, Gap, choice, replace};
use crate::error::Error;

/// Class of the preview container on the Grid page.
pub const GRID_CONTAINER: &str = "gridContainer";
/// Class of every placeholder element on the Grid page.
pub const GRID_ITEM: &str = "gridItem";

pub const MIN_ITEMS: u8 = 1;
pub const MAX_ITEMS: u8 = 20;
pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 8;

/// Row sizing behaviour of implicit rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowSizing {
    #[default]
    Auto,
    /// 150px rows.
    Fixed,
    /// `minmax(100px, 1fr)` rows.
    MinMax,
}

impl Choice for RowSizing {
    const CONTROL: &'static str = "rows";
    const PROPERTY: &'static str = "grid-auto-rows";
    const TOKEN_PREFIX: &'static str = "rows_";
    const ALL: &'static [Self] = &[Self::Auto, Self::Fixed, Self::MinMax];

    fn value(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fixed => "fixed",
            Self::MinMax => "minmax",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Fixed => "Fixed (150px)",
            Self::MinMax => "Min-Max (100px-1fr)",
        }
    }

    fn css_value(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fixed => "150px",
            Self::MinMax => "minmax(100px, 1fr)",
        }
    }
}

impl FromStr for RowSizing {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Error> {
        Self::parse_option(raw)
    }
}

impl Serialize for RowSizing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

choice! {
    /// How auto-placed items flow into the grid.
    pub enum AutoFlow {
        control: "auto flow",
        property: "grid-auto-flow",
        prefix: "flow_",
        default: Row,
        Row => ("row", "Row"),
        Column => ("column", "Column"),
        RowDense => ("row dense", "Row Dense"),
        ColumnDense => ("column dense", "Column Dense"),
    }
}

choice! {
    /// Horizontal alignment of items inside their cells.
    pub enum JustifyItems {
        control: "justify items",
        property: "justify-items",
        prefix: "justifyItems_",
        default: Stretch,
        Stretch => ("stretch", "Stretch"),
        Start => ("start", "Start"),
        End => ("end", "End"),
        Center => ("center", "Center"),
    }
}

choice! {
    /// Vertical alignment of items inside their cells.
    pub enum AlignItems {
        control: "align items",
        property: "align-items",
        prefix: "alignItems_",
        default: Stretch,
        Stretch => ("stretch", "Stretch"),
        Start => ("start", "Start"),
        End => ("end", "End"),
        Center => ("center", "Center"),
    }
}

choice! {
    /// Horizontal placement of the whole grid inside the container.
    pub enum JustifyContent {
        control: "justify content",
        property: "justify-content",
        prefix: "justifyContent_",
        default: Start,
        Start => ("start", "Start"),
        End => ("end", "End"),
        Center => ("center", "Center"),
        SpaceBetween => ("space-between", "Space Between"),
        SpaceAround => ("space-around", "Space Around"),
        SpaceEvenly => ("space-evenly", "Space Evenly"),
    }
}

choice! {
    /// Vertical placement of the whole grid inside the container.
    pub enum AlignContent {
        control: "align content",
        property: "align-content",
        prefix: "alignContent_",
        default: Start,
        Start => ("start", "Start"),
        End => ("end", "End"),
        Center => ("center", "Center"),
        SpaceBetween => ("space-between", "Space Between"),
        SpaceAround => ("space-around", "Space Around"),
        SpaceEvenly => ("space-evenly", "Space Evenly"),
    }
}

/// User operations on [`GridControls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    IncrementItems,
    DecrementItems,
    IncrementColumns,
    DecrementColumns,
    IncrementColumnGap,
    DecrementColumnGap,
    IncrementRowGap,
    DecrementRowGap,
    SetRows(RowSizing),
    SetAutoFlow(AutoFlow),
    SetJustifyItems(JustifyItems),
    SetAlignItems(AlignItems),
    SetJustifyContent(JustifyContent),
    SetAlignContent(AlignContent),
    Reset,
}

/// State of the Grid page control panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridControls {
    pub item_count: Bounded,
    pub column_gap: Gap,
    pub row_gap: Gap,
    pub columns: Bounded,
    pub rows: RowSizing,
    pub auto_flow: AutoFlow,
    pub justify_items: JustifyItems,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
    pub align_content: AlignContent,
}

impl Default for GridControls {
    fn default() -> Self {
        Self {
            item_count: Bounded::new(6, MIN_ITEMS, MAX_ITEMS),
            column_gap: Gap::from_halves(2),
            row_gap: Gap::from_halves(2),
            columns: Bounded::new(3, MIN_COLUMNS, MAX_COLUMNS),
            rows: RowSizing::default(),
            auto_flow: AutoFlow::default(),
            justify_items: JustifyItems::default(),
            align_items: AlignItems::default(),
            justify_content: JustifyContent::default(),
            align_content: AlignContent::default(),
        }
    }
}

impl GridControls {
    pub fn columns_token(&self) -> String {
        columns_token(self.columns.value())
    }

    pub fn columns_declaration(&self) -> String {
        columns_declaration(self.columns.value())
    }
}

/// `cols3` for three columns.
pub fn columns_token(columns: u8) -> String {
    format!("cols{columns}")
}

pub fn columns_declaration(columns: u8) -> String {
    format!("grid-template-columns: repeat({columns}, 1fr)")
}

impl ControlSet for GridControls {
    type Action = GridAction;

    fn apply(&mut self, action: GridAction) -> bool {
        match action {
            GridAction::IncrementItems => self.item_count.increment(),
            GridAction::DecrementItems => self.item_count.decrement(),
            GridAction::IncrementColumns => self.columns.increment(),
            GridAction::DecrementColumns => self.columns.decrement(),
            GridAction::IncrementColumnGap => self.column_gap.increment(),
            GridAction::DecrementColumnGap => self.column_gap.decrement(),
            GridAction::IncrementRowGap => self.row_gap.increment(),
            GridAction::DecrementRowGap => self.row_gap.decrement(),
            GridAction::SetRows(rows) => replace(&mut self.rows, rows),
            GridAction::SetAutoFlow(flow) => replace(&mut self.auto_flow, flow),
            GridAction::SetJustifyItems(justify) => replace(&mut self.justify_items, justify),
            GridAction::SetAlignItems(align) => replace(&mut self.align_items, align),
            GridAction::SetJustifyContent(justify) => replace(&mut self.justify_content, justify),
            GridAction::SetAlignContent(align) => replace(&mut self.align_content, align),
            GridAction::Reset => replace(self, Self::default()),
        }
    }

    fn item_count(&self) -> u8 {
        self.item_count.value()
    }

    fn tokens(&self) -> Vec<String> {
        vec![
            format!("columnGap{}", self.column_gap.token()),
            format!("rowGap{}", self.row_gap.token()),
            self.columns_token(),
            self.rows.token(),
            self.auto_flow.token(),
            self.justify_items.token(),
            self.align_items.token(),
            self.justify_content.token(),
            self.align_content.token(),
        ]
    }

    fn container_class(&self) -> String {
        let mut class = String::from(GRID_CONTAINER);
        for token in self.tokens() {
            class.push(' ');
            class.push_str(&token);
        }
        class
    }

    fn item_class(&self) -> String {
        GRID_ITEM.to_string()
    }

    fn declarations(&self) -> Vec<String> {
        vec![
            "display: grid".to_string(),
            format!("column-gap: {}", self.column_gap.css_value()),
            format!("row-gap: {}", self.row_gap.css_value()),
            self.columns_declaration(),
            self.rows.declaration(),
            self.auto_flow.declaration(),
            self.justify_items.declaration(),
            self.align_items.declaration(),
            self.justify_content.declaration(),
            self.align_content.declaration(),
        ]
    }
}
