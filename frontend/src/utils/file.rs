use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::api::ImageUpload;

/// Reads a picked file into memory for the multipart upload.
pub async fn read_image(file: &File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Failed to read {}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = Some(file.type_()).filter(|mime| !mime.is_empty());
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type,
        bytes,
    })
}
