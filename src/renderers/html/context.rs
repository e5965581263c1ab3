//! Template context for the stanza table template
//!
//! Flattens a `LayoutResult` into the plain rows the mustache template
//! walks. Table splitting and spacer placement are decided here:
//! - `TableSplit::Joined` with one column arity: one table, a spacer row between groups
//! - otherwise: one table per group, every table but the last marked `sj-gap`

use serde::{Deserialize, Serialize};

use crate::models::{Cell, ColumnMode, CopyMode, LayoutResult, Row, RowGroup, StanzaSpec};
use crate::stanza_layout::copy_text::{block_text, row_text};

use super::config::RenderConfig;

/// Base class of every rendered table
pub const TABLE_CLASS: &str = "sj-table";
/// Extra class of two-column tables
pub const COUPLET_CLASS: &str = "sher2";
/// Extra class of tables followed by a gap
pub const GAP_CLASS: &str = "sj-gap";

/// How the groups of a layout are spread over tables
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TableSplit {
    /// One table with spacer rows between groups; groups of differing
    /// arity still get a table each
    #[default]
    Joined,
    /// One table per group
    PerGroup,
}

impl TableSplit {
    /// Parse `joined` / `per-group`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "joined" => Some(TableSplit::Joined),
            "per-group" => Some(TableSplit::PerGroup),
            _ => None,
        }
    }

    /// Split used for a resolved stanza
    ///
    /// Fixed patterns share one table. Mixed patterns get a table per block,
    /// except the couplet form which keeps its couplets in one table.
    pub fn for_stanza(spec: &StanzaSpec, form: &str) -> Self {
        match spec {
            StanzaSpec::Fixed(_) => TableSplit::Joined,
            StanzaSpec::Mixed(_) if form == COUPLET_CLASS => TableSplit::Joined,
            StanzaSpec::Mixed(_) => TableSplit::PerGroup,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyButton {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowContext {
    pub spacer: bool,
    pub colspan: usize,
    pub double: bool,
    pub first: String,
    pub second: String,
    pub second_blank: bool,
    pub nl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_copy: Option<CopyButton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableContext {
    pub classes: String,
    pub rows: Vec<RowContext>,
}

/// Root context of the stanza template
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub empty: bool,
    pub placeholder: String,
    pub tables: Vec<TableContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_block: Option<CopyButton>,
}

impl RenderContext {
    /// Build the context for one layout
    pub fn build(
        layout: &LayoutResult,
        form: &str,
        copy_mode: CopyMode,
        split: TableSplit,
        config: &RenderConfig,
    ) -> Self {
        if layout.is_empty() {
            return Self {
                empty: true,
                placeholder: config.placeholder.clone(),
                tables: Vec::new(),
                copy_block: None,
            };
        }

        let builder = TableBuilder {
            form,
            copy_mode,
            config,
        };
        let joined = match split {
            TableSplit::Joined => layout.uniform_columns(),
            TableSplit::PerGroup => None,
        };
        let tables = match joined {
            Some(columns) => vec![builder.table(&layout.groups, columns, false)],
            None => layout
                .groups
                .iter()
                .map(|g| builder.table(std::slice::from_ref(g), g.columns, !g.is_last))
                .collect(),
        };

        let copy_block = copy_mode.wants_block_button().then(|| CopyButton {
            label: config.copy_label.clone(),
            text: block_text(layout),
        });

        Self {
            empty: false,
            placeholder: config.placeholder.clone(),
            tables,
            copy_block,
        }
    }
}

struct TableBuilder<'a> {
    form: &'a str,
    copy_mode: CopyMode,
    config: &'a RenderConfig,
}

impl<'a> TableBuilder<'a> {
    /// One table holding `groups`; spacer rows go between them
    fn table(&self, groups: &[RowGroup], columns: ColumnMode, gap_after: bool) -> TableContext {
        let mut classes = vec![TABLE_CLASS.to_string()];
        if !self.form.is_empty() {
            classes.push(self.form.to_string());
        }
        if columns == ColumnMode::Double && self.form != COUPLET_CLASS {
            classes.push(COUPLET_CLASS.to_string());
        }
        if gap_after {
            classes.push(GAP_CLASS.to_string());
        }

        let cells = match columns {
            ColumnMode::Single => 1,
            ColumnMode::Double => 3,
        };
        // Row copy buttons sit in an extra tools column
        let colspan = cells + usize::from(self.copy_mode.wants_row_buttons());

        let mut rows = Vec::new();
        for (i, group) in groups.iter().enumerate() {
            rows.extend(group.rows.iter().map(|row| self.row(row)));
            if i + 1 < groups.len() {
                rows.push(RowContext {
                    spacer: true,
                    colspan,
                    double: false,
                    first: String::new(),
                    second: String::new(),
                    second_blank: false,
                    nl: false,
                    row_copy: None,
                });
            }
        }

        TableContext {
            classes: classes.join(" "),
            rows,
        }
    }

    fn row(&self, row: &Row) -> RowContext {
        let row_copy = self.copy_mode.wants_row_buttons().then(|| CopyButton {
            label: self.config.row_copy_label.clone(),
            text: row_text(row),
        });

        let (double, first, second, second_blank) = match row {
            Row::Single { line } => (false, line.to_string(), String::new(), false),
            Row::Pair { first, second } => match second {
                Cell::Text(line) => (true, first.to_string(), line.to_string(), false),
                Cell::Blank => (true, first.to_string(), String::new(), true),
            },
        };

        RowContext {
            spacer: false,
            colspan: 0,
            double,
            first,
            second,
            second_blank,
            nl: self.config.hidden_newlines,
            row_copy,
        }
    }
}
