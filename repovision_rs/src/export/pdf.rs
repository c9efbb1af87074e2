//! Minimal PDF assembly on top of `lopdf`.
//!
//! Pages share one size. Coordinates handed to this module are millimetres
//! measured from the top-left corner; conversion to PDF user space (points,
//! bottom-left origin) happens here.

use image::RgbaImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

use super::pagination::{MM_TO_PT, PageGeometry, Pagination};
use crate::error::DocumentError;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";
const IMAGE_NAME: &str = "Im0";

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Accumulates pages and serializes them into a single document.
pub(crate) struct PdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    geometry: PageGeometry,
}

impl PdfBuilder {
    pub(crate) fn new(geometry: PageGeometry) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            geometry,
        }
    }

    pub(crate) fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Add the Helvetica pair and return a resources dictionary naming them.
    pub(crate) fn text_resources(&mut self) -> Dictionary {
        let regular = self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold = self.doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular,
                BOLD_FONT => bold,
            },
        }
    }

    /// Embed `raster` once as an RGB image and return a resources dictionary for it.
    pub(crate) fn image_resources(&mut self, raster: &RgbaImage) -> Dictionary {
        let (width, height) = raster.dimensions();
        let rgb: Vec<u8> = raster
            .pixels()
            .flat_map(|pixel| [pixel.0[0], pixel.0[1], pixel.0[2]])
            .collect();

        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            rgb,
        );
        let image_id = self.doc.add_object(image);
        dictionary! {
            "XObject" => dictionary! {
                IMAGE_NAME => image_id,
            },
        }
    }

    pub(crate) fn push_page(
        &mut self,
        operations: Vec<Operation>,
        resources: &Dictionary,
    ) -> Result<(), DocumentError> {
        let content = Content { operations };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
            "Resources" => resources.clone(),
        });
        self.kids.push(page_id.into());
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Result<Vec<u8>, DocumentError> {
        let count = self.kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.kids,
            "Count" => count,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                real(self.geometry.width_pt()),
                real(self.geometry.height_pt()),
            ],
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Full-page rectangle in `color`.
    pub(crate) fn background(&self, color: [u8; 3]) -> Vec<Operation> {
        vec![
            Operation::new("q", vec![]),
            fill_color(color),
            Operation::new(
                "re",
                vec![
                    0.into(),
                    0.into(),
                    real(self.geometry.width_pt()),
                    real(self.geometry.height_pt()),
                ],
            ),
            Operation::new("f", vec![]),
            Operation::new("Q", vec![]),
        ]
    }

    /// Draw the shared image with its top edge `offset_mm` below the page top.
    pub(crate) fn place_image(&self, pagination: &Pagination, offset_mm: f64) -> Vec<Operation> {
        let bottom_mm = self.geometry.height_mm - (offset_mm + pagination.image_height);
        vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(pagination.image_width * MM_TO_PT),
                    0.into(),
                    0.into(),
                    real(pagination.image_height * MM_TO_PT),
                    0.into(),
                    real(bottom_mm * MM_TO_PT),
                ],
            ),
            Operation::new("Do", vec![IMAGE_NAME.into()]),
            Operation::new("Q", vec![]),
        ]
    }

    /// One line of text with its baseline `baseline_mm` below the page top.
    pub(crate) fn text_line(
        &self,
        text: &str,
        x_mm: f64,
        baseline_mm: f64,
        size_pt: f64,
        color: [u8; 3],
        bold: bool,
    ) -> Vec<Operation> {
        let font = if bold { BOLD_FONT } else { REGULAR_FONT };
        vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), real(size_pt)]),
            fill_color(color),
            Operation::new(
                "Td",
                vec![
                    real(x_mm * MM_TO_PT),
                    real((self.geometry.height_mm - baseline_mm) * MM_TO_PT),
                ],
            ),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ]
    }
}

fn fill_color([r, g, b]: [u8; 3]) -> Operation {
    Operation::new(
        "rg",
        vec![
            real(f64::from(r) / 255.0),
            real(f64::from(g) / 255.0),
            real(f64::from(b) / 255.0),
        ],
    )
}

/// Encode text for the standard fonts' WinAnsi encoding.
///
/// Latin-1 passes through, the common typographic marks map to their
/// Windows-1252 slots, and anything else becomes `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\t' => b' ',
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            c if (c as u32) < 0x20 => b'?',
            c if (c as u32) < 0x7F => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_maps_bullets_and_latin1() {
        assert_eq!(encode_win_ansi("\u{2022} Auth"), vec![0x95, b' ', b'A', b'u', b't', b'h']);
        assert_eq!(encode_win_ansi("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("\u{4e2d}"), vec![b'?']);
    }

    #[test]
    fn builder_produces_loadable_document() {
        let mut pdf = PdfBuilder::new(PageGeometry::A4_PORTRAIT);
        let resources = pdf.text_resources();
        for n in 0..3 {
            let mut ops = pdf.background([5, 8, 22]);
            let label = format!("page {n}");
            ops.extend(pdf.text_line(&label, 15.0, 20.0, 11.0, [200, 200, 200], false));
            pdf.push_page(ops, &resources).expect("page encodes");
        }
        assert_eq!(pdf.page_count(), 3);

        let bytes = pdf.finish().expect("document serializes");
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).expect("document parses");
        assert_eq!(doc.get_pages().len(), 3);
    }
}
