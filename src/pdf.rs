// ABOUTME: PDF merge module for the xr-deck application
// ABOUTME: Concatenates per-slide page files into the final multi-page document

use crate::errors::{DeckError, Result};
use crate::utils;
use glob::glob;
use log::{info, warn};
use lopdf::{dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Merge per-slide page files, in the given order, into one document.
///
/// Files that are missing, empty, unparseable, or contain no pages are
/// skipped with a warning — a bad page degrades the output rather than
/// failing the run. Zero valid inputs still produce a finalized (empty)
/// document. Returns the number of pages in the output.
pub fn merge_page_files(page_files: &[PathBuf], output_file: &Path) -> Result<usize> {
    info!("Merging {} page files into {:?}", page_files.len(), output_file);

    utils::ensure_parent_directory_exists(output_file)?;

    let mut sources = Vec::new();
    for path in page_files {
        match load_page_file(path) {
            Some(doc) => sources.push(doc),
            None => continue,
        }
    }

    let (mut merged, page_count) = assemble(sources)?;
    merged
        .save(output_file)
        .map_err(|e| DeckError::PdfError(format!("Failed to save {:?}: {}", output_file, e)))?;

    info!("Merged document has {} pages", page_count);
    Ok(page_count)
}

/// Load one intermediate page file, or `None` (with a warning) if it cannot
/// contribute any pages.
fn load_page_file(path: &Path) -> Option<Document> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Skipping page file {:?}: {}", path, e);
            return None;
        }
    };
    if metadata.len() == 0 {
        warn!("Skipping page file {:?}: file is empty", path);
        return None;
    }

    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Skipping page file {:?}: {}", path, e);
            return None;
        }
    };
    if doc.get_pages().is_empty() {
        warn!("Skipping page file {:?}: no pages", path);
        return None;
    }

    Some(doc)
}

/// Build a single document from the source documents' pages, in order.
fn assemble(sources: Vec<Document>) -> Result<(Document, usize)> {
    let mut merged = Document::with_version("1.5");

    if sources.is_empty() {
        let pages_id = merged.add_object(dictionary! {
            "Type" => "Pages",
            "Count" => 0_i64,
            "Kids" => Vec::<Object>::new(),
        });
        let catalog_id = merged.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        merged.trailer.set("Root", catalog_id);
        return Ok((merged, 0));
    }

    // Renumber every source into one id space, then collect pages and the
    // remaining objects.
    let mut max_id = 1;
    let mut page_objects: Vec<(ObjectId, Object)> = Vec::new();
    let mut all_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in sources {
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        for (_, object_id) in doc.get_pages() {
            let object = doc
                .get_object(object_id)
                .map_err(|e| DeckError::PdfError(format!("Bad page object: {}", e)))?
                .to_owned();
            page_objects.push((object_id, object));
        }
        all_objects.extend(doc.objects);
    }

    // Keep the first catalog and pages nodes as the roots of the output;
    // every other page-tree object is re-parented below.
    let mut catalog: Option<(ObjectId, Object)> = None;
    let mut pages_root: Option<(ObjectId, Object)> = None;

    for (object_id, object) in all_objects {
        match dict_type(&object) {
            Some(b"Catalog") => {
                catalog.get_or_insert((object_id, object));
            }
            Some(b"Pages") => {
                pages_root.get_or_insert((object_id, object));
            }
            Some(b"Page") | Some(b"Outlines") | Some(b"Outline") => {}
            _ => {
                merged.objects.insert(object_id, object);
            }
        }
    }

    let (pages_id, pages_object) = pages_root
        .ok_or_else(|| DeckError::PdfError("No page tree found in any input".to_string()))?;
    let (catalog_id, catalog_object) = catalog
        .ok_or_else(|| DeckError::PdfError("No catalog found in any input".to_string()))?;

    let page_count = page_objects.len();

    for (object_id, object) in &page_objects {
        let dict = object
            .as_dict()
            .map_err(|e| DeckError::PdfError(format!("Page is not a dictionary: {}", e)))?;
        let mut dict = dict.clone();
        dict.set("Parent", pages_id);
        merged.objects.insert(*object_id, Object::Dictionary(dict));
    }

    let pages_dict = pages_object
        .as_dict()
        .map_err(|e| DeckError::PdfError(format!("Page tree is not a dictionary: {}", e)))?;
    let mut pages_dict = pages_dict.clone();
    pages_dict.set("Count", page_count as i64);
    pages_dict.set(
        "Kids",
        page_objects
            .iter()
            .map(|(id, _)| Object::Reference(*id))
            .collect::<Vec<Object>>(),
    );
    merged
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_dict = catalog_object
        .as_dict()
        .map_err(|e| DeckError::PdfError(format!("Catalog is not a dictionary: {}", e)))?;
    let mut catalog_dict = catalog_dict.clone();
    catalog_dict.set("Pages", pages_id);
    catalog_dict.remove(b"Outlines");
    merged
        .objects
        .insert(catalog_id, Object::Dictionary(catalog_dict));

    merged.trailer.set("Root", catalog_id);
    merged.max_id = merged.objects.len() as u32;
    merged.renumber_objects();
    merged.compress();

    Ok((merged, page_count))
}

fn dict_type(object: &Object) -> Option<&[u8]> {
    object
        .as_dict()
        .ok()
        .and_then(|dict| dict.get(b"Type").ok())
        .and_then(|t| t.as_name().ok())
}

/// Find page files matching a pattern in a directory, sorted by name.
pub fn find_page_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob_pattern = format!("{}/{}", dir.to_string_lossy(), pattern);
    let mut paths = Vec::new();

    for entry in (glob(&glob_pattern)
        .map_err(|e| DeckError::PdfError(format!("Invalid glob pattern: {}", e)))?)
    .flatten()
    {
        paths.push(entry);
    }

    paths.sort();

    if paths.is_empty() {
        warn!("No page files matched pattern: {}", glob_pattern);
    }

    Ok(paths)
}

/// Number of pages in a PDF file.
pub fn count_pages(path: &Path) -> Result<usize> {
    let doc = Document::load(path)
        .map_err(|e| DeckError::PdfError(format!("Failed to load {:?}: {}", path, e)))?;
    Ok(doc.get_pages().len())
}
