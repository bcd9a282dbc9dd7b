//! OCR seam
//!
//! Recognition itself is external. A provider hands back text, a confidence
//! and word boxes; only the text is fed to the transliterator.

use serde::{Deserialize, Serialize};

use crate::core::script::Script;
use crate::engine::{TransliterationReport, Transliterator};
use crate::error::OcrError;

/// Axis-aligned box in image pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    pub text: String,
    pub confidence: f64,
    #[serde(default)]
    pub bounding_boxes: Vec<BoundingBox>,
}

/// Anything that can read text out of image bytes
pub trait OcrProvider {
    fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError>;
}

impl<F> OcrProvider for F
where
    F: Fn(&[u8]) -> Result<OcrOutput, OcrError>,
{
    fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError> {
        self(image)
    }
}

/// OCR output together with its conversions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageReport {
    pub ocr: OcrOutput,
    pub report: TransliterationReport,
}

/// OCR -> detect -> convert to every target -> assess.
///
/// Fails with [`OcrError::NoText`] when the provider finds only whitespace.
pub fn process_image<P>(
    provider: &P,
    image: &[u8],
    transliterator: &Transliterator<'_>,
    targets: &[Script],
) -> Result<ImageReport, OcrError>
where
    P: OcrProvider + ?Sized,
{
    let ocr = provider.recognize(image)?;
    if ocr.text.trim().is_empty() {
        return Err(OcrError::NoText);
    }

    log::info!(
        "OCR found {} chars in {} boxes (confidence {:.2})",
        ocr.text.chars().count(),
        ocr.bounding_boxes.len(),
        ocr.confidence
    );

    let report = transliterator.transliterate_all(&ocr.text, None, targets);
    log::info!("OCR text detected as {}", report.source);

    Ok(ImageReport { ocr, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::script::ScriptTag;

    fn fixed(text: &'static str) -> impl Fn(&[u8]) -> Result<OcrOutput, OcrError> {
        move |_: &[u8]| {
            Ok(OcrOutput {
                text: text.to_string(),
                confidence: 0.9,
                bounding_boxes: vec![BoundingBox {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 40.0,
                    y2: 12.0,
                }],
            })
        }
    }

    #[test]
    fn test_process_image() {
        let t = Transliterator::default();
        let image = fixed("வணக்கம்").recognize(b"").unwrap();
        assert!((image.bounding_boxes[0].width() - 40.0).abs() < f64::EPSILON);

        let out = process_image(&fixed("வணக்கம்"), b"png", &t, &Script::ALL).unwrap();
        assert_eq!(out.report.source, ScriptTag::Native(Script::Tamil));
        assert_eq!(out.report.results.len(), 4);
        assert_eq!(out.ocr.text, "வணக்கம்");
    }

    #[test]
    fn test_blank_ocr_text() {
        let t = Transliterator::default();
        let err = process_image(&fixed("  \n "), b"png", &t, &Script::ALL).unwrap_err();
        assert_eq!(err, OcrError::NoText);
    }

    #[test]
    fn test_provider_error_propagates() {
        let t = Transliterator::default();
        let failing = |_: &[u8]| -> Result<OcrOutput, OcrError> {
            Err(OcrError::Provider("model not loaded".to_string()))
        };
        let err = process_image(&failing, b"png", &t, &[Script::Tamil]).unwrap_err();
        assert_eq!(err, OcrError::Provider("model not loaded".to_string()));
    }
}
