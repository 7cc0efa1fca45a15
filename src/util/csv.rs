//! CSV export: semicolon-separated (Czech Excel convention), every data
//! field quoted, UTF-8 BOM so Excel detects the encoding.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

/// Byte-order mark prepended to the download so spreadsheet tools pick up
/// UTF-8.
pub const BOM: &str = "\u{feff}";

/// Build the CSV text: a header line plus one quoted line per row. Embedded
/// quotes are doubled per RFC 4180.
pub fn build_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(";"));
    for row in rows {
        let line = row
            .iter()
            .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(";");
        lines.push(line);
    }
    lines.join("\n")
}

/// Trigger a browser download of the CSV under `filename`. No-op outside
/// the browser.
pub fn download(filename: &str, csv: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let content = js_sys::Array::of1(&format!("{BOM}{csv}").into());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8;");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&content, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(anchor) = document.create_element("a") {
            let anchor: web_sys::HtmlAnchorElement = match anchor.dyn_into() {
                Ok(a) => a,
                Err(_) => return,
            };
            anchor.set_href(&url);
            anchor.set_download(filename);
            let body = document.body();
            if let Some(body) = &body {
                let _ = body.append_child(&anchor);
            }
            anchor.click();
            if let Some(body) = &body {
                let _ = body.remove_child(&anchor);
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, csv);
    }
}
