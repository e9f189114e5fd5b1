// src/export/pdf.rs

//! Minimal PDF 1.4 writer for report pages.
//!
//! Each report page becomes one PDF page whose content stream replays the
//! draw instructions. Text uses the standard Type1 fonts with WinAnsi
//! encoding, so no font data is embedded. Nothing time-dependent is written:
//! equal pages give byte-identical files.

use std::fs;
use std::io::Write;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use tracing::{debug, info};

use super::DocumentSink;
use super::assets::CoverImage;
use super::fonts::{FontSet, ResolvedFont};
use crate::ui::canvas::{ColorRole, DrawInstruction, FontRole, Paint, ReportPage};
use crate::ui::layout::PageLayout;

/// Distance from the top of a text run to its baseline, as a share of the
/// font size.
const ASCENT: f32 = 0.8;

const FONT_ROLES: [FontRole; 3] = [FontRole::Title, FontRole::Header, FontRole::Body];

pub struct PdfExporter {
    fonts: [ResolvedFont; 3],
    width: i32,
    height: i32,
}

impl PdfExporter {
    pub fn new(fonts: &FontSet, layout: &PageLayout) -> Self {
        Self {
            fonts: FONT_ROLES.map(|role| fonts.resolve(role)),
            width: layout.width,
            height: layout.height,
        }
    }

    /// Serializes the document. The cover image, when given, is the first page.
    pub fn render(&self, pages: &[ReportPage], cover: Option<&CoverImage>) -> Result<Vec<u8>> {
        let mut pdf = PdfWriter::new();
        let catalog = pdf.reserve();
        let page_tree = pdf.reserve();
        let font_ids: Vec<usize> = self.fonts.iter().map(|_| pdf.reserve()).collect();

        for (id, font) in font_ids.iter().zip(&self.fonts) {
            pdf.object(
                *id,
                &format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.base_font
                ),
            );
        }

        let mut kids = Vec::new();

        if let Some(cover) = cover {
            let image = pdf.reserve();
            let content = pdf.reserve();
            let page = pdf.reserve();

            let compressed = deflate(&cover.rgb).wrap_err("Could not compress cover image")?;
            pdf.stream(
                image,
                &format!(
                    "/Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /FlateDecode",
                    cover.width, cover.height
                ),
                &compressed,
            );
            let draw = format!("q {} 0 0 {} 0 0 cm /Im1 Do Q\n", cover.width, cover.height);
            pdf.stream(content, "", draw.as_bytes());
            pdf.object(
                page,
                &format!(
                    "<< /Type /Page /Parent {page_tree} 0 R /MediaBox [0 0 {} {}] /Resources << /XObject << /Im1 {image} 0 R >> >> /Contents {content} 0 R >>",
                    cover.width, cover.height
                ),
            );
            kids.push(page);
        }

        let font_resources: String = font_ids
            .iter()
            .enumerate()
            .map(|(i, id)| format!("/F{} {id} 0 R ", i + 1))
            .collect();

        for report_page in pages {
            let content = pdf.reserve();
            let page = pdf.reserve();
            pdf.stream(content, "", &self.content_stream(report_page));
            pdf.object(
                page,
                &format!(
                    "<< /Type /Page /Parent {page_tree} 0 R /MediaBox [0 0 {} {}] /Resources << /Font << {font_resources}>> >> /Contents {content} 0 R >>",
                    self.width, self.height
                ),
            );
            kids.push(page);
        }

        let kid_refs: Vec<String> = kids.iter().map(|id| format!("{id} 0 R")).collect();
        pdf.object(
            page_tree,
            &format!("<< /Type /Pages /Kids [{}] /Count {} >>", kid_refs.join(" "), kids.len()),
        );
        pdf.object(catalog, &format!("<< /Type /Catalog /Pages {page_tree} 0 R >>"));

        debug!(pages = kids.len(), "Serialized PDF document.");
        Ok(pdf.finish(catalog))
    }

    fn content_stream(&self, page: &ReportPage) -> Vec<u8> {
        let mut out = Vec::new();
        for instruction in &page.instructions {
            match instruction {
                DrawInstruction::Text { text, x, y, color, font } => {
                    let index = font_index(*font);
                    let size = self.fonts[index].size;
                    let baseline = self.height as f32 - *y as f32 - size * ASCENT;
                    out.extend_from_slice(
                        format!(
                            "BT /F{} {} Tf {} rg {} {} Td (",
                            index + 1,
                            num(size),
                            rgb(*color),
                            x,
                            num(baseline)
                        )
                        .as_bytes(),
                    );
                    out.extend_from_slice(&encode_text(text));
                    out.extend_from_slice(b") Tj ET\n");
                }
                DrawInstruction::Rect { bounds, paint, color } => {
                    let rect = format!(
                        "{} {} {} {} re",
                        bounds.x0,
                        self.height - bounds.y1,
                        bounds.width(),
                        bounds.height()
                    );
                    let ops = match paint {
                        Paint::Fill => format!("{} rg {rect} f\n", rgb(*color)),
                        Paint::Outline { width } => format!("{width} w {} RG {rect} S\n", rgb(*color)),
                    };
                    out.extend_from_slice(ops.as_bytes());
                }
            }
        }
        out
    }
}

impl DocumentSink for PdfExporter {
    fn export(&self, pages: &[ReportPage], cover: Option<&CoverImage>, path: &Path) -> Result<()> {
        let bytes = self.render(pages, cover)?;
        fs::write(path, &bytes).wrap_err_with(|| format!("Could not write report to {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "PDF saved successfully.");
        Ok(())
    }
}

fn font_index(role: FontRole) -> usize {
    match role {
        FontRole::Title => 0,
        FontRole::Header => 1,
        FontRole::Body => 2,
    }
}

fn num(value: f32) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn rgb(color: ColorRole) -> String {
    let (r, g, b) = color.rgb();
    format!("{} {} {}", num(r), num(g), num(b))
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Encodes text as the body of a PDF literal string in WinAnsi.
///
/// Delimiters are escaped, tabs expand to four spaces, and characters
/// outside the encoding become `?`.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            '\t' => out.extend_from_slice(b"    "),
            ' '..='~' => out.push(c as u8),
            _ => {
                let byte = match c {
                    '€' => 0x80,
                    '‘' => 0x91,
                    '’' => 0x92,
                    '“' => 0x93,
                    '”' => 0x94,
                    '•' => 0x95,
                    '–' => 0x96,
                    '—' => 0x97,
                    '\u{a0}'..='\u{ff}' => c as u32 as u8,
                    _ => b'?',
                };
                if byte == b'?' {
                    out.push(byte);
                } else {
                    out.extend_from_slice(format!("\\{byte:03o}").as_bytes());
                }
            }
        }
    }
    out
}

/// Tracks object byte offsets while appending to the output buffer.
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        Self { buf: b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec(), offsets: Vec::new() }
    }

    /// Allocates an object number; the object itself may be written later.
    fn reserve(&mut self) -> usize {
        self.offsets.push(0);
        self.offsets.len()
    }

    fn object(&mut self, id: usize, body: &str) {
        self.offsets[id - 1] = self.buf.len();
        self.buf.extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
    }

    fn stream(&mut self, id: usize, dict: &str, data: &[u8]) {
        self.offsets[id - 1] = self.buf.len();
        let separator = if dict.is_empty() { "" } else { " " };
        self.buf.extend_from_slice(
            format!("{id} 0 obj\n<< {dict}{separator}/Length {} >>\nstream\n", data.len()).as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref = self.buf.len();
        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", self.offsets.len() + 1);
        for offset in &self.offsets {
            table.push_str(&format!("{offset:010} 00000 n \n"));
        }
        table.push_str(&format!(
            "trailer\n<< /Size {} /Root {root} 0 R >>\nstartxref\n{xref}\n%%EOF\n",
            self.offsets.len() + 1
        ));
        self.buf.extend_from_slice(table.as_bytes());
        self.buf
    }
}
