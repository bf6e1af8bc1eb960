/// Выгрузка сгенерированных файлов через механизм скачивания браузера
use crate::shared::ical::CalendarError;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("Calendar encoding failed: {0}")]
    Encode(#[from] CalendarError),

    #[error("Failed to create blob: {0}")]
    Blob(String),

    #[error("Download failed: {0}")]
    Download(String),
}

/// Готовый к скачиванию файл
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

/// Заворачивает содержимое в Blob и инициирует скачивание (save-as)
pub fn save_as(file: &DownloadFile) -> Result<(), ExportError> {
    let blob = create_blob(&file.content, &file.mime_type)?;
    download_blob(&blob, &file.filename)?;
    log::info!("Saved {} ({} bytes)", file.filename, file.content.len());
    Ok(())
}

/// Создает Blob объект с текстовыми данными
fn create_blob(content: &str, mime_type: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Blob(format!("{:?}", e)))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let fail = |what: &str| ExportError::Download(what.to_string());

    let window = web_sys::window().ok_or_else(|| fail("No window object"))?;
    let document = window.document().ok_or_else(|| fail("No document object"))?;
    let body = document.body().ok_or_else(|| fail("No body element"))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ExportError::Download(format!("Failed to create object URL: {:?}", e)))?;

    let clicked = click_anchor(&document, &body, &url, filename);

    // URL освобождается при любом исходе клика
    let revoked = Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Download(format!("Failed to revoke URL: {:?}", e)));

    finish_download(clicked, revoked)
}

/// Временная скрытая ссылка: добавить, кликнуть, убрать
fn click_anchor(
    document: &web_sys::Document,
    body: &web_sys::HtmlElement,
    url: &str,
    filename: &str,
) -> Result<(), ExportError> {
    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Download(format!("Failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Download(format!("Failed to cast to anchor: {:?}", e)))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| ExportError::Download(format!("Failed to set style: {:?}", e)))?;

    body.append_child(&anchor)
        .map_err(|e| ExportError::Download(format!("Failed to append anchor: {:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| ExportError::Download(format!("Failed to remove anchor: {:?}", e)))?;

    Ok(())
}

/// Ошибка клика важнее ошибки освобождения URL
fn finish_download(
    clicked: Result<(), ExportError>,
    revoked: Result<(), ExportError>,
) -> Result<(), ExportError> {
    match (clicked, revoked) {
        (Err(e), Err(revoke_err)) => {
            log::warn!("{}", revoke_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), revoked) => revoked,
    }
}
