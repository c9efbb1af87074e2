//! Structured-data document: generated from the analysis result alone.
//!
//! The section list is a pure function of [`AnalysisResult`], and so is the
//! layout, so two exports of the same result are byte-identical. Nothing here
//! looks at the rendered report, which makes this the strategy that always
//! succeeds.

use repovision_report::components::format_thousands;
use repovision_report::types::AnalysisResult;
use tracing::debug;

use super::pagination::PageGeometry;
use super::pdf::PdfBuilder;
use super::text::wrap_text;
use crate::error::DocumentError;

const PAGE_BACKGROUND: [u8; 3] = [5, 8, 22];
const NO_RISKS_TEXT: &str = "No security risks identified";

/// Vertical layout in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub margin_left_mm: f64,
    /// Baseline of the first line on every page.
    pub top_mm: f64,
    pub wrap_width_mm: f64,
    /// A line whose baseline would fall below this starts a new page.
    pub page_break_mm: f64,
    /// Line advance per point of font size.
    pub line_factor: f64,
    pub paragraph_gap_mm: f64,
    pub section_gap_mm: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            margin_left_mm: 15.0,
            top_mm: 20.0,
            wrap_width_mm: 180.0,
            page_break_mm: 270.0,
            line_factor: 0.5,
            paragraph_gap_mm: 3.0,
            section_gap_mm: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    RepoName,
    Url,
    Heading,
    Body,
}

impl TextStyle {
    pub fn font_size(self) -> f64 {
        match self {
            TextStyle::Title => 22.0,
            TextStyle::RepoName => 16.0,
            TextStyle::Url => 10.0,
            TextStyle::Heading => 14.0,
            TextStyle::Body => 11.0,
        }
    }

    pub fn color(self) -> [u8; 3] {
        match self {
            TextStyle::Title | TextStyle::Heading => [88, 166, 255],
            TextStyle::RepoName => [255, 255, 255],
            TextStyle::Url => [100, 100, 150],
            TextStyle::Body => [200, 200, 200],
        }
    }

    fn bold(self) -> bool {
        matches!(self, TextStyle::Title | TextStyle::RepoName | TextStyle::Heading)
    }
}

/// One paragraph: wrapped as a unit, followed by the paragraph gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub style: TextStyle,
    pub text: String,
}

impl Paragraph {
    fn new(style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self::new(TextStyle::Body, text)
    }
}

/// A block of paragraphs; sections are separated by the section gap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub paragraphs: Vec<Paragraph>,
}

impl ReportSection {
    fn titled(heading: &str, body: Vec<Paragraph>) -> Self {
        let mut paragraphs = vec![Paragraph::new(TextStyle::Heading, heading)];
        paragraphs.extend(body);
        Self { paragraphs }
    }

    /// Heading text, if the section starts with one.
    pub fn heading(&self) -> Option<&str> {
        self.paragraphs
            .first()
            .filter(|p| p.style == TextStyle::Heading)
            .map(|p| p.text.as_str())
    }
}

/// Build the fixed section sequence for `result`.
pub fn report_sections(result: &AnalysisResult) -> Vec<ReportSection> {
    let joined_or_none = |items: &[String]| {
        if items.is_empty() {
            "None".to_string()
        } else {
            items.join(", ")
        }
    };

    let identity = ReportSection {
        paragraphs: vec![
            Paragraph::new(TextStyle::Title, "RepoVision Analysis Report"),
            Paragraph::new(TextStyle::RepoName, result.repo_name.as_str()),
            Paragraph::new(TextStyle::Url, result.repo_url.as_str()),
        ],
    };

    let summary = ReportSection::titled("SUMMARY", vec![Paragraph::body(result.summary.as_str())]);

    let architecture = ReportSection::titled(
        "ARCHITECTURE",
        vec![
            Paragraph::body(format!("Type: {}", result.architecture_type)),
            Paragraph::body(result.architecture_explanation.as_str()),
        ],
    );

    let tech_stack = ReportSection::titled(
        "TECH STACK",
        vec![
            Paragraph::body(format!("Languages: {}", joined_or_none(&result.languages))),
            Paragraph::body(format!("Frameworks: {}", joined_or_none(&result.frameworks))),
            Paragraph::body(format!("Databases: {}", joined_or_none(&result.databases))),
        ],
    );

    let scores = ReportSection::titled(
        "SCORES",
        vec![
            Paragraph::body(format!(
                "Complexity: {}/100 ({})",
                result.complexity(),
                result.complexity_label
            )),
            Paragraph::body(format!("Code Quality: {}/100", result.code_quality())),
            Paragraph::body(format!(
                "Files: {} | Lines: {}",
                result.file_count,
                format_thousands(result.total_lines)
            )),
        ],
    );

    let features = ReportSection::titled(
        "FEATURES",
        result
            .features
            .iter()
            .map(|feature| Paragraph::body(format!("\u{2022} {feature}")))
            .collect(),
    );

    let improvements = ReportSection::titled(
        "IMPROVEMENT SUGGESTIONS",
        result
            .improvements_suggestion
            .iter()
            .enumerate()
            .map(|(i, suggestion)| Paragraph::body(format!("{}. {suggestion}", i + 1)))
            .collect(),
    );

    let risks = if result.security_risks.is_empty() {
        vec![Paragraph::body(NO_RISKS_TEXT)]
    } else {
        result
            .security_risks
            .iter()
            .map(|risk| Paragraph::body(format!("\u{2022} {risk}")))
            .collect()
    };
    let security = ReportSection::titled("SECURITY RISKS", risks);

    vec![
        identity,
        summary,
        architecture,
        tech_stack,
        scores,
        features,
        improvements,
        security,
    ]
}

/// A line positioned on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub style: TextStyle,
    pub text: String,
    pub x_mm: f64,
    pub baseline_mm: f64,
}

/// Lay `sections` out into pages of positioned lines.
pub fn layout_sections(
    sections: &[ReportSection],
    metrics: &LayoutMetrics,
) -> Vec<Vec<PlacedLine>> {
    let mut pages = vec![Vec::new()];
    let mut y = metrics.top_mm;

    for (index, section) in sections.iter().enumerate() {
        for paragraph in &section.paragraphs {
            let size = paragraph.style.font_size();
            for line in wrap_text(&paragraph.text, size, metrics.wrap_width_mm) {
                if y > metrics.page_break_mm {
                    pages.push(Vec::new());
                    y = metrics.top_mm;
                }
                if let Some(page) = pages.last_mut() {
                    page.push(PlacedLine {
                        style: paragraph.style,
                        text: line,
                        x_mm: metrics.margin_left_mm,
                        baseline_mm: y,
                    });
                }
                y += size * metrics.line_factor;
            }
            y += metrics.paragraph_gap_mm;
        }
        if index + 1 < sections.len() {
            y += metrics.section_gap_mm;
        }
    }

    pages
}

/// Encoded structured document.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredDocument {
    pub sections: Vec<ReportSection>,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Builds the text-only PDF straight from an [`AnalysisResult`].
///
/// Text is set in the standard Helvetica fonts with WinAnsi encoding, so
/// characters outside Latin-1 (CJK repository names, for instance) print as `?`.
pub struct StructuredExporter {
    metrics: LayoutMetrics,
    geometry: PageGeometry,
}

impl Default for StructuredExporter {
    fn default() -> Self {
        Self::new(LayoutMetrics::default(), PageGeometry::A4_PORTRAIT)
    }
}

impl StructuredExporter {
    pub fn new(metrics: LayoutMetrics, geometry: PageGeometry) -> Self {
        Self { metrics, geometry }
    }

    pub fn export(&self, result: &AnalysisResult) -> Result<StructuredDocument, DocumentError> {
        let sections = report_sections(result);
        let pages = layout_sections(&sections, &self.metrics);

        let mut pdf = PdfBuilder::new(self.geometry);
        let resources = pdf.text_resources();
        for lines in &pages {
            let mut ops = pdf.background(PAGE_BACKGROUND);
            for line in lines {
                ops.extend(pdf.text_line(
                    &line.text,
                    line.x_mm,
                    line.baseline_mm,
                    line.style.font_size(),
                    line.style.color(),
                    line.style.bold(),
                ));
            }
            pdf.push_page(ops, &resources)?;
        }

        let page_count = pdf.page_count();
        let bytes = pdf.finish()?;
        debug!(pages = page_count, bytes = bytes.len(), "structured document encoded");

        Ok(StructuredDocument {
            sections,
            bytes,
            page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(section: &ReportSection) -> Vec<&str> {
        section.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }

    fn scenario() -> AnalysisResult {
        AnalysisResult {
            repo_name: "acme-api".into(),
            repo_url: "https://github.com/acme/acme-api".into(),
            summary: "HTTP API for the Acme storefront.".into(),
            architecture_type: "Layered".into(),
            complexity_score: 85,
            complexity_label: "High".into(),
            code_quality_score: 40,
            file_count: 310,
            total_lines: 48_213,
            features: vec!["A".into(), "B".into()],
            security_risks: vec![],
            ..Default::default()
        }
    }

    #[test]
    fn sections_follow_fixed_order() {
        let headings: Vec<_> = report_sections(&scenario())
            .iter()
            .map(|s| s.heading().map(str::to_owned))
            .collect();

        assert_eq!(
            headings,
            vec![
                None,
                Some("SUMMARY".into()),
                Some("ARCHITECTURE".into()),
                Some("TECH STACK".into()),
                Some("SCORES".into()),
                Some("FEATURES".into()),
                Some("IMPROVEMENT SUGGESTIONS".into()),
                Some("SECURITY RISKS".into()),
            ]
        );
    }

    #[test]
    fn scores_features_and_risks_scenario() {
        let sections = report_sections(&scenario());

        assert_eq!(
            texts(&sections[4]),
            vec![
                "SCORES",
                "Complexity: 85/100 (High)",
                "Code Quality: 40/100",
                "Files: 310 | Lines: 48,213",
            ]
        );
        assert_eq!(texts(&sections[5]), vec!["FEATURES", "\u{2022} A", "\u{2022} B"]);
        assert_eq!(texts(&sections[7]), vec!["SECURITY RISKS", NO_RISKS_TEXT]);
    }

    #[test]
    fn empty_lists_render_heading_only_or_none() {
        let sections = report_sections(&AnalysisResult::default());

        assert_eq!(
            texts(&sections[3]),
            vec!["TECH STACK", "Languages: None", "Frameworks: None", "Databases: None"]
        );
        assert_eq!(texts(&sections[5]), vec!["FEATURES"]);
        assert_eq!(texts(&sections[6]), vec!["IMPROVEMENT SUGGESTIONS"]);
    }

    #[test]
    fn suggestions_are_numbered() {
        let result = AnalysisResult {
            improvements_suggestion: vec!["Add tests".into(), "Split modules".into()],
            ..Default::default()
        };
        let sections = report_sections(&result);
        assert_eq!(
            texts(&sections[6]),
            vec!["IMPROVEMENT SUGGESTIONS", "1. Add tests", "2. Split modules"]
        );
    }

    #[test]
    fn layout_matches_reference_metrics() {
        let pages = layout_sections(&report_sections(&scenario()), &LayoutMetrics::default());
        let first = &pages[0];

        // Title at 20mm, repo name 22*0.5 + 3 below, URL 16*0.5 + 3 below that
        assert_eq!(first[0].baseline_mm, 20.0);
        assert_eq!(first[1].baseline_mm, 34.0);
        assert_eq!(first[2].baseline_mm, 45.0);
        // URL line (10pt) + paragraph gap + section gap
        assert_eq!(first[3].text, "SUMMARY");
        assert_eq!(first[3].baseline_mm, 58.0);
        assert!(first.iter().all(|line| line.x_mm == 15.0));
    }

    #[test]
    fn long_content_paginates() {
        let result = AnalysisResult {
            features: (0..120).map(|i| format!("Feature number {i}")).collect(),
            ..scenario()
        };
        let metrics = LayoutMetrics::default();
        let pages = layout_sections(&report_sections(&result), &metrics);

        assert!(pages.len() > 1);
        for page in &pages {
            let first = page.first().expect("no empty pages");
            assert_eq!(first.baseline_mm, metrics.top_mm);
            assert!(page.iter().all(|line| line.baseline_mm <= metrics.page_break_mm));
        }
    }

    #[test]
    fn export_is_idempotent() {
        let exporter = StructuredExporter::default();
        let first = exporter.export(&scenario()).expect("encodes");
        let second = exporter.export(&scenario()).expect("encodes");

        assert_eq!(first.sections, second.sections);
        assert_eq!(first.bytes, second.bytes);
        assert_eq!(first.page_count, 1);

        let doc = lopdf::Document::load_mem(&first.bytes).expect("parses");
        assert_eq!(doc.get_pages().len(), first.page_count);
    }
}
