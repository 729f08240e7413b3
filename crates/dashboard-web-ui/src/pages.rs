//! The dashboard pages served by the Web UI.
//!
//! Each page is built by a plain function from explicit inputs (dataset,
//! theme, row limit). The registry builds all of them once at start-up.

use crate::config::DashboardConfig;
use dashboard_core::components::{div, graph, h1, h4};
use dashboard_core::{
    render_table, BarMode, BarSpec, Column, CsvOptions, Dataset, Figure, Layout, MarkupNode, Result,
    ScatterSpec, Theme,
};
use serde::Serialize;
use tracing::info;

/// A layout published under a URL slug.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub slug: String,
    pub layout: Layout,
}

/// Grouped bar chart of fruit amounts per city, styled with `theme`.
pub fn hello_page(theme: &Theme) -> Result<Layout> {
    let df = Dataset::new(vec![
        Column::new(
            "Fruit",
            ["Apples", "Oranges", "Bananas", "Apples", "Oranges", "Bananas"],
        ),
        Column::new("Amount", [4, 1, 2, 2, 4, 5]),
        Column::new("City", ["SF", "SF", "SF", "Montreal", "Montreal", "Montreal"]),
    ])?;

    let spec = BarSpec::new("Fruit", "Amount")
        .color("City")
        .barmode(BarMode::Group);
    let figure = Figure::bar(&df, &spec)?.with_theme(theme);

    let root = div::<_, MarkupNode>([
        h1("Hello Dash!").style(theme.style()).into(),
        div(["Dash: A web application framework for your data."]).into(),
        graph("example-barplot", &figure)?.into(),
    ])
    .style(theme.style());

    Ok(Layout::new("Hello Dash", root))
}

/// Bubble chart of GDP per capita against life expectancy.
pub fn gdp_page(df: &Dataset) -> Result<Layout> {
    let spec = ScatterSpec::new("gdp per capita", "life expectancy")
        .size("population")
        .color("continent")
        .hover_name("country")
        .log_x(true)
        .size_max(60.0);
    let figure = Figure::scatter(df, &spec)?;

    Ok(Layout::new(
        "GDP and Life Expectancy (2007)",
        div([graph("graph-example", &figure)?]),
    ))
}

/// Heading plus the first `max_rows` rows of the exports dataset.
pub fn exports_page(df: &Dataset, max_rows: usize) -> Layout {
    let title = "US Agriculture Exports (2011)";
    Layout::new(
        title,
        div::<_, MarkupNode>([h4(title).into(), render_table(df, max_rows)]),
    )
}

/// All pages, in the order they are listed on the index.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configured datasets and build every page.
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let options = CsvOptions::default();
        let gdp = Dataset::from_csv_path(config.data.gdp_path(), &options)?;
        let exports = Dataset::from_csv_path(config.data.exports_path(), &options)?;

        let mut registry = Self::new();
        registry.insert("hello", hello_page(&config.theme)?);
        registry.insert("gdp", gdp_page(&gdp)?);
        registry.insert("exports", exports_page(&exports, config.table.max_rows));

        info!(pages = registry.len(), "Built dashboard pages");
        Ok(registry)
    }

    /// Add or replace the page under `slug`.
    pub fn insert(&mut self, slug: impl Into<String>, layout: Layout) {
        let slug = slug.into();
        match self.pages.iter_mut().find(|p| p.slug == slug) {
            Some(page) => page.layout = layout,
            None => self.pages.push(Page { slug, layout }),
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::Tag;

    fn exports() -> Dataset {
        let csv = "state,total exports\nAlabama,1390.63\nAlaska,13.31\nArizona,1463.17\n";
        Dataset::from_csv_reader(csv.as_bytes(), &CsvOptions::default()).unwrap()
    }

    #[test]
    fn test_hello_page() {
        let layout = hello_page(&Theme::dark()).unwrap();
        let html = layout.to_html();

        assert!(html.contains("Hello Dash!"));
        assert!(html.contains("id=\"example-barplot\""));
        assert!(html.contains("text-align: center"));
        assert_eq!(layout.root.children().len(), 3);
    }

    #[test]
    fn test_gdp_page() {
        let csv = "country,continent,population,life expectancy,gdp per capita\n\
                   Japan,Asia,127467972,82.6,31656.07\n\
                   Kenya,Africa,35610177,54.1,1463.25\n";
        let df = Dataset::from_csv_reader(csv.as_bytes(), &CsvOptions::default()).unwrap();
        let layout = gdp_page(&df).unwrap();

        let graph = &layout.root.children()[0];
        assert_eq!(graph.tag(), Some(Tag::Graph));
        let figure: Figure = serde_json::from_str(graph.attribute("data-figure").unwrap()).unwrap();
        assert_eq!(figure.data.len(), 2);
    }

    #[test]
    fn test_gdp_page_missing_column() {
        let df = exports();
        assert!(gdp_page(&df).is_err());
    }

    #[test]
    fn test_exports_page_truncates() {
        let layout = exports_page(&exports(), 2);
        let children = layout.root.children();
        assert_eq!(children[0].text_content(), "US Agriculture Exports (2011)");

        let table: &MarkupNode = &children[1];
        assert_eq!(table.tag(), Some(Tag::Table));
        assert_eq!(table.children()[1].children().len(), 2);
    }

    #[test]
    fn test_registry_insert_and_get() {
        let mut registry = PageRegistry::new();
        registry.insert("exports", exports_page(&exports(), 10));
        registry.insert("exports", exports_page(&exports(), 1));

        assert_eq!(registry.len(), 1);
        let page = registry.get("exports").unwrap();
        assert_eq!(page.layout.root.children()[1].children()[1].children().len(), 1);
        assert!(registry.get("missing").is_none());
    }
}
