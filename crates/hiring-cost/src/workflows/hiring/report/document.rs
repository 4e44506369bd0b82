//! Single-page PDF rendering of an estimate report.
//!
//! Only the standard Type1 Helvetica faces are used, so no font data is
//! embedded and text is written in WinAnsi encoding.

use std::fmt::Write as _;

pub const REPORT_FILENAME: &str = "hiring_cost_estimate.pdf";
pub const REPORT_TITLE: &str = "Hiring Subsidy Estimate Report";
pub const REPORT_DISCLAIMER: &str = "Note: values are estimates based on 2025 regulations.";

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN_X: f32 = 56.0;
const TITLE_TOP: f32 = 790.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 22.0;
const BOTTOM_MARGIN: f32 = 56.0;
// Helvetica averages roughly half an em per glyph.
const AVG_GLYPH_EM: f32 = 0.5;

/// Title, key/value lines and disclaimer making up the exported report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub lines: Vec<(String, String)>,
    pub disclaimer: String,
}

impl ReportDocument {
    pub fn text_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect()
    }

    pub fn to_pdf(&self) -> Vec<u8> {
        let content = self.content_stream();
        write_pdf(&content)
    }

    fn content_stream(&self) -> Vec<u8> {
        let mut stream = Vec::new();

        let title_width = self.title.chars().count() as f32 * TITLE_SIZE * AVG_GLYPH_EM;
        let title_x = ((PAGE_WIDTH - title_width) / 2.0).max(MARGIN_X);
        push_text(&mut stream, "F2", TITLE_SIZE, title_x, TITLE_TOP, &self.title);

        let wrap_at = ((PAGE_WIDTH - 2.0 * MARGIN_X) / (BODY_SIZE * AVG_GLYPH_EM)) as usize;
        let segments: Vec<String> = self
            .text_lines()
            .iter()
            .flat_map(|line| wrap_text(line, wrap_at))
            .collect();

        // Body segments plus half a line of spacing and the disclaimer must
        // stay above the bottom margin, so the leading shrinks when needed.
        let top = TITLE_TOP - 2.0 * LINE_HEIGHT;
        let slots = segments.len() as f32 + 0.5;
        let leading = LINE_HEIGHT.min((top - BOTTOM_MARGIN) / slots);
        let body_size = BODY_SIZE.min(leading / 1.2);

        let mut y = top;
        for segment in &segments {
            push_text(&mut stream, "F1", body_size, MARGIN_X, y, segment);
            y -= leading;
        }

        y -= leading / 2.0;
        push_text(&mut stream, "F2", body_size, MARGIN_X, y, &self.disclaimer);
        stream
    }
}

fn push_text(stream: &mut Vec<u8>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    stream.extend_from_slice(format!("BT /{font} {size:.1} Tf {x:.2} {y:.2} Td (").as_bytes());
    stream.extend_from_slice(&encode_text(text));
    stream.extend_from_slice(b") Tj ET\n");
}

/// Encodes `text` as an escaped WinAnsi string literal body.
pub(crate) fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                ch as u8
            }
            ' '..='~' => ch as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '\u{a0}'..='\u{ff}' => ch as u32 as u8,
            _ => b'?',
        };
        out.push(byte);
    }
    out
}

/// Greedy word wrap; words longer than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn write_pdf(content: &[u8]) -> Vec<u8> {
    let page = format!(
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
         /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
    );
    let mut stream_object = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
    stream_object.extend_from_slice(content);
    stream_object.extend_from_slice(b"\nendstream");

    let objects: Vec<Vec<u8>> = vec![
        b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
        page.into_bytes(),
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_vec(),
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_vec(),
        stream_object,
    ];

    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (idx, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", idx + 1).as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_start = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        let _ = write!(xref, "{offset:010} 00000 n \n");
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
        objects.len() + 1
    );
    out.extend_from_slice(xref.as_bytes());
    out
}
