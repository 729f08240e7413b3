//! HTML templates for the Web UI.

use crate::pages::Page;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Hydrates every `.dash-graph` container from its `data-figure` JSON.
const GRAPH_SCRIPT: &str = r#"document.querySelectorAll('.dash-graph').forEach(function (el) {
    var figure = JSON.parse(el.dataset.figure);
    Plotly.newPlot(el, figure.data, figure.layout);
});"#;

/// Wrap a rendered page body in a full HTML document.
pub fn page_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{PLOTLY_CDN}"></script>
</head>
<body>
{body}
<script>
{GRAPH_SCRIPT}
</script>
</body>
</html>"#,
        title = html_title(title),
    )
}

/// Index document linking every page.
pub fn index_document(pages: &[Page]) -> String {
    let items: String = pages
        .iter()
        .map(|page| {
            format!(
                "<li><a href=\"/pages/{slug}\">{title}</a></li>",
                slug = page.slug,
                title = html_title(&page.layout.title),
            )
        })
        .collect();

    page_document("Dashboards", &format!("<h1>Dashboards</h1>\n<ul>{}</ul>", items))
}

fn html_title(title: &str) -> String {
    html_escape::encode_text(title).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::components::h1;
    use dashboard_core::Layout;

    #[test]
    fn test_page_document() {
        let doc = page_document("A & B", "<p>hi</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<p>hi</p>"));
        assert!(doc.contains(PLOTLY_CDN));
    }

    #[test]
    fn test_index_lists_pages() {
        let pages = vec![Page {
            slug: "hello".to_string(),
            layout: Layout::new("Hello Dash", h1("x")),
        }];
        let doc = index_document(&pages);
        assert!(doc.contains("<a href=\"/pages/hello\">Hello Dash</a>"));
    }
}
