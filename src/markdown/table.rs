use crate::markdown::{Section, Text};

pub struct TableBuilder {
    title: String,
    columns: Vec<Text>,
    row_count: Option<usize>,
}

impl TableBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            row_count: None,
        }
    }

    pub fn add_column(mut self, column: Text) -> Self {
        let column_len = column.len();

        match self.row_count {
            None => self.row_count = Some(column_len),
            Some(existing) if existing == column_len => {}
            Some(existing) => {
                panic!(
                    "column length mismatch: expected {} rows but received {}",
                    existing, column_len
                );
            }
        }

        self.columns.push(column);
        self
    }

    pub fn build(self) -> Section {
        let mut section = Section::new(&self.title);

        let row_count = self.row_count.unwrap_or(0);
        if row_count == 0 {
            section.add_line("No data available.".to_string());
            return section;
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| col.calculate_width())
            .collect();

        let header_cells: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &width)| col.format_header(width))
            .collect();
        section.add_line(format!("| {} |", header_cells.join(" | ")));

        for row_index in 0..row_count {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(col, &width)| col.format_cell(row_index, width))
                .collect();
            section.add_line(format!("| {} |", cells.join(" | ")));
        }

        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pads_cells_to_the_widest_value() {
        let section = TableBuilder::new("2 result(s):")
            .add_column(Text::new("Room", vec!["A-1".into(), "H-15".into()]))
            .add_column(Text::new("Winner", vec!["u1".into(), "longname".into()]))
            .build();

        assert_eq!(section.title, "2 result(s):");
        assert_eq!(
            section.lines,
            vec![
                "| `Room` | `Winner  ` |",
                "| `A-1 ` | `u1      ` |",
                "| `H-15` | `longname` |",
            ]
        );
    }

    #[test]
    fn test_build_without_rows_reports_no_data() {
        let section = TableBuilder::new("0 result(s):")
            .add_column(Text::new("Room", Vec::new()))
            .build();

        assert_eq!(section.lines, vec!["No data available."]);
    }
}
