//! Table of pollutant readings for one model.

use aqp_core::display::ReadingRow;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReadingTableProps {
    pub rows: Vec<ReadingRow>,
}

#[component]
pub fn ReadingTable(props: ReadingTableProps) -> Element {
    let last = props.rows.len().saturating_sub(1);

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; text-align: left; border: 1px solid #ddd;",
            tbody {
                for (i, row) in props.rows.iter().enumerate() {
                    tr {
                        key: "{row.label}",
                        style: if i < last { "border-bottom: 1px solid #ddd;" } else { "" },
                        td {
                            style: "padding: 8px; font-weight: bold; border-right: 1px solid #ddd;",
                            "{row.label}"
                        }
                        td {
                            style: "padding: 8px;",
                            "{row.value}"
                        }
                    }
                }
            }
        }
    }
}
