//! Browser glue: file reads, print window, text download, clock, randomness.
//!
//! Every function has an SSR stub so pages compile for both targets; only
//! the hydrate build touches `web_sys`.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use time::Date;
#[cfg(any(test, feature = "hydrate"))]
use time::Month;
#[cfg(feature = "hydrate")]
use triage::upload::SelectedFile;

/// Build a calendar date from JS `Date` parts (`month0` is zero-based).
#[cfg(any(test, feature = "hydrate"))]
fn date_from_js_parts(year: i32, month0: u32, day: u32) -> Option<Date> {
    let month = Month::try_from(u8::try_from(month0 + 1).ok()?).ok()?;
    Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()
}

/// Today's local date. Falls back to the Unix epoch date under SSR.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let date = i32::try_from(now.get_full_year())
            .ok()
            .and_then(|year| date_from_js_parts(year, now.get_month(), now.get_date()));
        if let Some(date) = date {
            return date;
        }
    }
    time::OffsetDateTime::UNIX_EPOCH.date()
}

/// Uniform roll in `[0, 1)`.
pub fn random_roll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Read a picked file into memory.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: web_sys::File) -> Option<SelectedFile> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(SelectedFile::new(file.name(), &file.type_(), bytes))
}

/// Wrap raw bytes in a `Blob` of type `mime`.
#[cfg(feature = "hydrate")]
pub fn bytes_to_blob(bytes: &[u8], mime: &str) -> Option<web_sys::Blob> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()
}

/// Open a print window showing `html` and invoke the print dialog.
pub fn print_html(html: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(popup)) = window.open_with_url_and_target_and_features("", "_blank", "height=800,width=800") else {
            log::warn!("print window blocked");
            return;
        };
        if let Some(root) = popup.document().and_then(|d| d.document_element()) {
            root.set_inner_html(html);
        }
        let _ = popup.print();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = html;
    }
}

/// How long a download's object URL outlives the click that started it.
const REVOKE_DELAY_MS: u32 = 1_000;

/// Save `content` as a plain-text file called `filename`.
pub fn download_text(filename: &str, content: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(blob) = bytes_to_blob(content.as_bytes(), "text/plain") else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        let anchor = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("a").ok())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
        gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, content, REVOKE_DELAY_MS);
    }
}
