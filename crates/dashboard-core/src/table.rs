//! Rendering datasets as HTML tables.

use crate::dataset::Dataset;
use crate::markup::{Element, MarkupNode, Tag};

/// Default number of body rows rendered by [`render_table_default`].
pub const DEFAULT_MAX_ROWS: usize = 10;

/// Render `dataset` as a `table` node with a head row of column names and
/// at most `max_rows` body rows, in dataset order.
///
/// The output always has exactly two children, `thead` then `tbody`. Cell
/// text is the display text of each value.
pub fn render_table(dataset: &Dataset, max_rows: usize) -> MarkupNode {
    let head_row = Element::new(Tag::Tr).children(
        dataset
            .column_names()
            .map(|name| Element::new(Tag::Th).child(name)),
    );
    let head = Element::new(Tag::Thead).child(head_row);

    let row_count = max_rows.min(dataset.num_rows());
    let body = Element::new(Tag::Tbody).children((0..row_count).map(|row| {
        Element::new(Tag::Tr).children(
            dataset
                .columns()
                .iter()
                .map(|column| Element::new(Tag::Td).child(column.values[row].display_text())),
        )
    }));

    Element::new(Tag::Table).child(head).child(body).into()
}

/// [`render_table`] with [`DEFAULT_MAX_ROWS`].
pub fn render_table_default(dataset: &Dataset) -> MarkupNode {
    render_table(dataset, DEFAULT_MAX_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;

    fn cells(row: &MarkupNode) -> Vec<String> {
        row.children().iter().map(MarkupNode::text_content).collect()
    }

    #[test]
    fn test_fruit_example() {
        let ds = Dataset::new(vec![
            Column::new("Fruit", ["Apples", "Oranges", "Bananas"]),
            Column::new("Amount", [4, 1, 2]),
        ])
        .unwrap();

        let table = render_table(&ds, 2);
        assert_eq!(table.tag(), Some(Tag::Table));

        let [head, body] = table.children() else {
            panic!("table must have exactly two children");
        };
        assert_eq!(head.tag(), Some(Tag::Thead));
        assert_eq!(body.tag(), Some(Tag::Tbody));

        assert_eq!(cells(&head.children()[0]), vec!["Fruit", "Amount"]);

        let rows: Vec<_> = body.children().iter().map(cells).collect();
        assert_eq!(rows, vec![vec!["Apples", "4"], vec!["Oranges", "1"]]);
    }

    #[test]
    fn test_zero_rows() {
        let ds = Dataset::new(vec![
            Column::new("A", Vec::<i64>::new()),
            Column::new("B", Vec::<i64>::new()),
        ])
        .unwrap();

        for max_rows in [0, 1, 10] {
            let table = render_table(&ds, max_rows);
            assert_eq!(cells(&table.children()[0].children()[0]), vec!["A", "B"]);
            assert!(table.children()[1].children().is_empty());
        }
    }

    #[test]
    fn test_max_rows_zero() {
        let ds = Dataset::new(vec![Column::new("A", [1, 2, 3])]).unwrap();
        let table = render_table(&ds, 0);
        assert_eq!(table.children()[0].children()[0].children().len(), 1);
        assert!(table.children()[1].children().is_empty());
    }

    #[test]
    fn test_default_limit() {
        let ds = Dataset::new(vec![Column::new("n", 0..25i64)]).unwrap();
        let table = render_table_default(&ds);
        assert_eq!(table.children()[1].children().len(), DEFAULT_MAX_ROWS);
    }

    #[test]
    fn test_html_output() {
        let ds = Dataset::new(vec![
            Column::new("Fruit", ["Apples"]),
            Column::new("Amount", [4]),
        ])
        .unwrap();

        assert_eq!(
            render_table(&ds, 10).to_html(),
            "<table><thead><tr><th>Fruit</th><th>Amount</th></tr></thead>\
             <tbody><tr><td>Apples</td><td>4</td></tr></tbody></table>"
        );
    }
}
