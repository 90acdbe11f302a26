//! SVG generation for the composed grid

use crate::layout::{BoundingBox, CellPlacement, Dimensions, Point};
use crate::palette::{self, Palette};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub(crate) const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Build the composed document incrementally
pub struct SvgBuilder<'a> {
    palette: &'a Palette,
    canvas: Dimensions,
    elements: Vec<String>,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    /// Create a builder for a canvas of the given size
    pub fn new(canvas: Dimensions, palette: &'a Palette) -> Self {
        Self {
            palette,
            canvas,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }

    /// Full-canvas background
    pub fn add_background(&mut self) {
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            self.canvas.width,
            self.canvas.height,
            self.palette.color(palette::CANVAS_BACKGROUND)
        ));
    }

    /// White cell background with a thin border
    pub fn add_cell_background(&mut self, cell: &BoundingBox) {
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            self.indent_str(),
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            self.palette.color(palette::CELL_FILL),
            self.palette.color(palette::CELL_STROKE)
        ));
    }

    /// Group wrapping one input's children, translated and uniformly scaled
    ///
    /// `namespaces` are `(prefix, uri)` pairs redeclared on the group so
    /// prefixed children stay bound once their own root is dropped.
    pub fn add_placed_content<S: AsRef<str>>(
        &mut self,
        placement: &CellPlacement,
        namespaces: &[(String, String)],
        children: &[S],
    ) {
        let ns_attrs: String = namespaces
            .iter()
            .map(|(prefix, uri)| format!(r#" xmlns:{}="{}""#, prefix, escape_xml(uri)))
            .collect();
        self.elements.push(format!(
            r#"{}<g{} transform="translate({}, {}) scale({})">"#,
            self.indent_str(),
            ns_attrs,
            placement.offset.x,
            placement.offset.y,
            placement.scale
        ));
        self.indent += 1;
        for child in children {
            self.elements
                .push(format!("{}{}", self.indent_str(), child.as_ref()));
        }
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// File name centered under the cell content
    pub fn add_label(&mut self, text: &str, at: Point) {
        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" text-anchor="middle" font-size="10" fill="{}">{}</text>"#,
            self.indent_str(),
            at.x,
            at.y,
            self.palette.color(palette::LABEL),
            escape_xml(text)
        ));
    }

    /// Placeholder drawn over a cell whose input could not be loaded
    pub fn add_error_cell(&mut self, cell: &BoundingBox) {
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}"/>"#,
            self.indent_str(),
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            self.palette.color(palette::ERROR_FILL),
            self.palette.color(palette::ERROR_STROKE)
        ));
        let center = cell.center();
        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" text-anchor="middle" fill="{}">Error loading file</text>"#,
            self.indent_str(),
            center.x,
            center.y,
            self.palette.color(palette::ERROR_TEXT)
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let mut svg = String::new();

        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push('\n');

        svg.push_str(&format!(
            r#"<svg xmlns="{}" xmlns:xlink="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            SVG_NS,
            XLINK_NS,
            self.canvas.width,
            self.canvas.height,
            self.canvas.width,
            self.canvas.height
        ));
        svg.push('\n');

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::layout;

    fn palette() -> Palette {
        Palette::default()
    }

    #[test]
    fn test_empty_document() {
        let palette = palette();
        let svg = SvgBuilder::new(Dimensions::new(830.0, 410.0), &palette).build();
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"width="830" height="410" viewBox="0 0 830 410""#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_background_uses_palette() {
        let palette = palette();
        let mut builder = SvgBuilder::new(Dimensions::new(10.0, 20.0), &palette);
        builder.add_background();
        let svg = builder.build();
        assert!(svg.contains(r##"<rect width="10" height="20" fill="#f0f0f0"/>"##));
    }

    #[test]
    fn test_placed_content_is_wrapped_in_transform() {
        let palette = palette();
        let grid = GridConfig::default();
        let placement = layout::place(&grid, 0, Dimensions::new(90.0, 180.0));
        let mut builder = SvgBuilder::new(layout::canvas_size(&grid), &palette);
        builder.add_placed_content(&placement, &[], &["<rect/>", "<circle r=\"1\"/>"]);
        let svg = builder.build();
        assert!(svg.contains(r#"<g transform="translate(55, 10) scale(1)">"#));
        assert!(svg.contains("    <rect/>\n    <circle r=\"1\"/>\n  </g>"));
    }

    #[test]
    fn test_placed_content_redeclares_namespaces() {
        let palette = palette();
        let grid = GridConfig::default();
        let placement = layout::place(&grid, 0, Dimensions::new(180.0, 180.0));
        let mut builder = SvgBuilder::new(layout::canvas_size(&grid), &palette);
        let namespaces = vec![("inkscape".to_string(), "http://example.com/a&b".to_string())];
        builder.add_placed_content(&placement, &namespaces, &["<inkscape:x/>"]);
        let svg = builder.build();
        assert!(svg.contains(
            r#"<g xmlns:inkscape="http://example.com/a&amp;b" transform="translate(10, 10) scale(1)">"#
        ));
    }

    #[test]
    fn test_label_is_escaped() {
        let palette = palette();
        let mut builder = SvgBuilder::new(Dimensions::DEFAULT, &palette);
        builder.add_label("a&b<c>.svg", Point::new(100.0, 195.0));
        let svg = builder.build();
        assert!(svg.contains(
            r##"<text x="100" y="195" text-anchor="middle" font-size="10" fill="#666">a&amp;b&lt;c&gt;.svg</text>"##
        ));
    }

    #[test]
    fn test_error_cell() {
        let palette = palette();
        let mut builder = SvgBuilder::new(Dimensions::DEFAULT, &palette);
        builder.add_error_cell(&BoundingBox::new(210.0, 0.0, 200.0, 200.0));
        let svg = builder.build();
        assert!(svg.contains(
            r##"<rect x="210" y="0" width="200" height="200" fill="#ffcccc" stroke="red"/>"##
        ));
        assert!(svg.contains(
            r#"<text x="310" y="100" text-anchor="middle" fill="red">Error loading file</text>"#
        ));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<"it's">"#), "&lt;&quot;it&apos;s&quot;&gt;");
    }
}
