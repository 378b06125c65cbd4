//! Word `.docx` import.
//!
//! A `.docx` file is a zip container; the body lives in `word/document.xml`.
//! Tables, rows, cells and paragraphs are turned into the equivalent HTML
//! elements and handed to the HTML extractor, so both inputs share one set
//! of table heuristics.

use crate::errors::{AppError, AppResult};
use crate::import::html;
use crate::models::entry::TimeEntryRow;
use regex::Regex;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn load(path: &Path) -> AppResult<Vec<TimeEntryRow>> {
    let file = File::open(path)?;
    let html = docx_to_html(file)?;
    html::extract_rows(&html)
}

/// Reads the main document part of a `.docx` container as HTML.
pub fn docx_to_html<R: Read + Seek>(reader: R) -> AppResult<String> {
    let mut archive = ZipArchive::new(reader)?;

    let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
        ZipError::FileNotFound => {
            AppError::Import(format!("not a Word document ({DOCUMENT_PART} missing)"))
        }
        other => AppError::Zip(other),
    })?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;

    document_xml_to_html(&xml)
}

/// Maps WordprocessingML markup to minimal HTML.
///
/// Text is only kept inside `<w:t>` runs and stays entity-escaped, which is
/// valid HTML as is.
pub fn document_xml_to_html(xml: &str) -> AppResult<String> {
    let token_re = Regex::new(r"<(/?)([^\s/>]+)[^>]*?(/?)>|([^<]+)")?;

    let mut out = String::with_capacity(xml.len() / 4);
    let mut in_text = false;

    for tok in token_re.captures_iter(xml) {
        if let Some(text) = tok.get(4) {
            if in_text {
                out.push_str(text.as_str());
            }
            continue;
        }

        let closing = !tok[1].is_empty();
        let self_closing = !tok[3].is_empty();

        let element = match &tok[2] {
            "w:tbl" => "table",
            "w:tr" => "tr",
            "w:tc" => "td",
            "w:p" => "p",
            "w:t" => {
                in_text = !closing && !self_closing;
                continue;
            }
            "w:tab" => {
                out.push(' ');
                continue;
            }
            "w:br" | "w:cr" => {
                out.push_str("<br>");
                continue;
            }
            _ => continue,
        };

        if self_closing {
            out.push_str(&format!("<{element}></{element}>"));
        } else if closing {
            out.push_str(&format!("</{element}>"));
        } else {
            out.push_str(&format!("<{element}>"));
        }
    }

    Ok(out)
}
