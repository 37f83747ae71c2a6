use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::motif_scan::Bin;

struct HistogramPlotter {
    bar_width: u32,
    bar_gap: u32,
    chart_height: u32,
    margin: u32,
    canvas_background: u32,
    bar_color: &'static str,
}

struct SvgTag {
    name: &'static str,
    attributes: HashMap<&'static str, String>,
    body: Option<String>,
}

impl SvgTag {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: HashMap::new(),
            body: None,
        }
    }

    fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attributes.insert(key, value.to_string());
        self
    }

    fn text(mut self, body: impl ToString) -> Self {
        self.body = Some(body.to_string());
        self
    }

    fn render(&self, self_closing: bool) -> String {
        let attrs: String = self
            .attributes
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_xml_attr(v)))
            .collect::<Vec<_>>()
            .join(" ");

        if let Some(body) = &self.body {
            format!("<{} {}>{}</{}>", self.name, attrs, escape_xml_attr(body), self.name)
        } else if self_closing {
            format!("<{} {}/>", self.name, attrs)
        } else {
            format!("<{} {}>", self.name, attrs)
        }
    }
}

fn escape_xml_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl HistogramPlotter {
    fn new() -> Self {
        Self {
            bar_width: 8,
            bar_gap: 2,
            chart_height: 300,
            margin: 30,
            canvas_background: 0xFFFFFF, // white
            bar_color: "#2b6cb0",
        }
    }

    fn generate_svg(&self, bins: &[Bin], title: &str) -> String {
        let stride = self.bar_width + self.bar_gap;
        let svg_width = bins.len() as u32 * stride + 2 * self.margin;
        let svg_height = self.chart_height + 2 * self.margin;
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);

        let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");

        svg.push_str(
            &SvgTag::new("svg")
                .attr("xmlns", "http://www.w3.org/2000/svg")
                .attr("width", svg_width)
                .attr("height", svg_height)
                .attr("style", format!("background:#{:06x}", self.canvas_background))
                .render(false),
        );
        svg.push('\n');

        svg.push_str(
            &SvgTag::new("text")
                .attr("x", svg_width / 2)
                .attr("y", self.margin / 2 + 5)
                .attr("text-anchor", "middle")
                .attr("font-family", "sans-serif")
                .attr("font-size", 14)
                .text(title)
                .render(false),
        );
        svg.push('\n');

        // One bar per bin index; zero-count bins contribute no rect but still
        // occupy their slot so the x axis stays aligned with bin indices.
        for bin in bins {
            if bin.count == 0 {
                continue;
            }
            let height =
                (bin.count as f64 / max_count as f64 * self.chart_height as f64).round() as u32;
            let x = self.margin + bin.index as u32 * stride;
            let y = self.margin + self.chart_height - height;

            svg.push_str(
                &SvgTag::new("rect")
                    .attr("x", x)
                    .attr("y", y)
                    .attr("width", self.bar_width)
                    .attr("height", height)
                    .attr("fill", self.bar_color)
                    .render(true),
            );
            svg.push('\n');
        }

        // Baseline axis under the bars
        let baseline = self.margin + self.chart_height;
        svg.push_str(
            &SvgTag::new("line")
                .attr("x1", self.margin)
                .attr("y1", baseline)
                .attr("x2", svg_width - self.margin)
                .attr("y2", baseline)
                .attr("stroke", "#333333")
                .attr("stroke-width", 1)
                .render(true),
        );
        svg.push('\n');

        svg.push_str("</svg>\n");
        svg
    }
}

/// Renders the dense bin table as a bar chart of count per bin index and
/// writes it to `output_path`.
pub fn write_histogram(bins: &[Bin], motif: &str, output_path: &Path) -> std::io::Result<()> {
    let plotter = HistogramPlotter::new();
    let svg_content = plotter.generate_svg(bins, &format!("Motif {}", motif));

    let mut file = File::create(output_path)?;
    file.write_all(svg_content.as_bytes())
}
